//! Expression parsers for arithmetic with postfix access
//!
//! Loosest to tightest:
//!
//! ```text
//! expression := sum ("," sum)*                 -- one item is the item itself
//! sum        := product (("+" | "-") product)*  -- left-associative
//! product    := unary (("*" | "/") unary)*     -- left-associative
//! unary      := ("+" | "-") unary | power
//! power      := access ("**" unary)*           -- right-associative
//! access     := primary ("." name | "[" expression "]" | "(" args ")")*
//! primary    := integer | name | "(" ")" | "(" expression ")"
//! args       := sum ("," sum)* | <empty>
//! ```

use crate::ast::expression::{BinOpKind, Expr, UnaryOpKind};
use crate::parser::{
    BoxedParser, Deferred, GrammarError, ParseConfig, ParseError, alt, eof, fail_expecting,
    literal, parse_with, pattern, ret, whitespace,
};

/// One postfix operation, applied to whatever precedes it.
enum Postfix {
    Attribute(String),
    Index(Expr),
    Call(Vec<Expr>),
}

/// The expression grammar, built once and reused.
#[derive(Debug, Clone)]
pub struct ExpressionGrammar {
    expression: BoxedParser<Expr>,
    document: BoxedParser<Expr>,
}

impl ExpressionGrammar {
    pub fn new() -> Result<Self, GrammarError> {
        let expression = Deferred::new("expression");
        let sum = Deferred::new("sum");
        let unary = Deferred::new("unary");

        let lparen = literal("(")?.token();
        let rparen = literal(")")?.token();
        let lbrak = literal("[")?.token();
        let rbrak = literal("]")?.token();
        let dot = literal(".")?.token();
        let comma = literal(",")?.token();

        let identifier = pattern(r"[a-zA-Z]\w*")?.token().labelled("name");
        let number = pattern(r"[1-9][0-9]*|0+")?
            .bind(|digits| match digits.parse::<u64>() {
                Ok(n) => ret(Expr::Constant(n)),
                Err(_) => fail_expecting("an integer that fits in 64 bits"),
            })
            .token()
            .labelled("integer");

        let parenthesized = lparen.clone().then(
            rparen.clone().map(|_| Expr::Tuple(Vec::new()))
                | expression.parser().skip(rparen.clone()),
        );
        let primary = alt(vec![number, identifier.clone().map(Expr::Name), parenthesized]);

        let property = alt(vec![
            dot.then(identifier).map(Postfix::Attribute),
            lbrak.then(expression.parser()).skip(rbrak).map(Postfix::Index),
            lparen
                .then(sum.parser().sep_by(comma.clone()))
                .skip(rparen)
                .map(Postfix::Call),
        ]);
        let access = primary.pair_with(property.many(), apply_postfix);

        let power = access.pair_with(literal("**")?.token().then(unary.parser()).many(), fold_power);

        let plus = literal("+")?;
        let minus = literal("-")?;

        let sign = (plus.clone().map(|_| UnaryOpKind::Plus) | minus.clone().map(|_| UnaryOpKind::Minus))
            .token();
        unary.define(sign.pair_with(unary.parser(), Expr::unary) | power)?;

        let mulop = (literal("*")?.map(|_| BinOpKind::Mul) | literal("/")?.map(|_| BinOpKind::Div)).token();
        let product = unary
            .parser()
            .pair_with(mulop.pair(unary.parser()).many(), fold_left);

        let addop = (plus.map(|_| BinOpKind::Add) | minus.map(|_| BinOpKind::Sub)).token();
        sum.define(product.clone().pair_with(addop.pair(product).many(), fold_left))?;

        expression.define(sum.parser().sep_by1(comma).map(|mut items| {
            if items.len() == 1 {
                items.remove(0)
            } else {
                Expr::Tuple(items)
            }
        }))?;

        let document = whitespace().then(expression.parser()).skip(eof());

        Ok(Self {
            expression: expression.parser(),
            document,
        })
    }

    /// An expression with its trailing whitespace; does not require the
    /// input to end afterwards.
    pub fn expression(&self) -> &BoxedParser<Expr> {
        &self.expression
    }

    /// A complete input holding one expression.
    pub fn document(&self) -> &BoxedParser<Expr> {
        &self.document
    }

    pub fn parse(&self, input: &str) -> Result<Expr, ParseError> {
        self.parse_with(input, ParseConfig::default())
    }

    pub fn parse_with(&self, input: &str, config: ParseConfig) -> Result<Expr, ParseError> {
        parse_with(&self.document, input, config)
    }
}

fn apply_postfix(value: Expr, postfixes: Vec<Postfix>) -> Expr {
    postfixes
        .into_iter()
        .fold(value, |value, postfix| match postfix {
            Postfix::Attribute(attr) => Expr::attribute(value, attr),
            Postfix::Index(index) => Expr::subscript(value, index),
            Postfix::Call(args) => Expr::call(value, args),
        })
}

/// `a ** b ** c` groups as `a ** (b ** c)`.
fn fold_power(base: Expr, exponents: Vec<Expr>) -> Expr {
    let mut exponents = exponents.into_iter().rev();
    match exponents.next() {
        Some(last) => {
            let exponent = exponents.fold(last, |right, left| Expr::binary(BinOpKind::Pow, left, right));
            Expr::binary(BinOpKind::Pow, base, exponent)
        }
        None => base,
    }
}

fn fold_left(first: Expr, rest: Vec<(BinOpKind, Expr)>) -> Expr {
    rest.into_iter()
        .fold(first, |left, (op, right)| Expr::binary(op, left, right))
}
