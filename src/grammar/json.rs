//! JSON grammar
//!
//! value  := string | number | "true" | "false" | "null" | object | array
//! object := "{" (string ":" value) sep_by "," "}"
//! array  := "[" value sep_by "," "]"
//!
//! Every token swallows the whitespace that follows it; the document rule
//! skips leading whitespace and requires the end of input after the value.

use crate::ast::json::JsonValue;
use crate::parser::{
    BoxedParser, Deferred, GrammarError, ParseConfig, ParseError, alt, eof, fail_expecting,
    literal, parse_with, pattern, ret, whitespace,
};

const STRING: &str = r#""(?:\\(?:["\\/bfnrt]|u[0-9a-fA-F]{4})|[^"\\\x00-\x1F\x7F])*""#;
const NUMBER: &str = r"-?(?:0|[1-9][0-9]*)(?:\.[0-9]+)?(?:[eE][+-]?[0-9]+)?";

/// The JSON grammar, built once and reused for any number of documents.
#[derive(Debug, Clone)]
pub struct JsonGrammar {
    value: BoxedParser<JsonValue>,
    document: BoxedParser<JsonValue>,
}

impl JsonGrammar {
    pub fn new() -> Result<Self, GrammarError> {
        let value = Deferred::new("value");

        let lbrace = literal("{")?.token();
        let rbrace = literal("}")?.token();
        let lbrak = literal("[")?.token();
        let rbrak = literal("]")?.token();
        let colon = literal(":")?.token();
        let comma = literal(",")?.token();

        let keyword = |text: &str, v: JsonValue| -> Result<BoxedParser<JsonValue>, GrammarError> {
            Ok(literal(text)?.then(ret(v)).token())
        };
        let true_ = keyword("true", JsonValue::Bool(true))?;
        let false_ = keyword("false", JsonValue::Bool(false))?;
        let null = keyword("null", JsonValue::Null)?;

        let string = string()?;
        let number = number()?;

        let member = string.clone().skip(colon).pair(value.parser());
        let object = lbrace
            .then(member.sep_by(comma.clone()))
            .skip(rbrace)
            .map(JsonValue::Object);
        let array = lbrak
            .then(value.parser().sep_by(comma))
            .skip(rbrak)
            .map(JsonValue::Array);

        value.define(alt(vec![
            string.map(JsonValue::String),
            number.map(JsonValue::Number),
            true_,
            false_,
            null,
            object,
            array,
        ]))?;

        let document = whitespace().then(value.parser()).skip(eof());

        Ok(Self {
            value: value.parser(),
            document,
        })
    }

    /// A single value followed by its trailing whitespace. Does not require
    /// the input to end afterwards.
    pub fn value(&self) -> &BoxedParser<JsonValue> {
        &self.value
    }

    /// A complete document.
    pub fn document(&self) -> &BoxedParser<JsonValue> {
        &self.document
    }

    pub fn parse(&self, input: &str) -> Result<JsonValue, ParseError> {
        self.parse_with(input, ParseConfig::default())
    }

    pub fn parse_with(&self, input: &str, config: ParseConfig) -> Result<JsonValue, ParseError> {
        parse_with(&self.document, input, config)
    }
}

/// String literal with its quotes stripped and escapes decoded.
fn string() -> Result<BoxedParser<String>, GrammarError> {
    Ok(pattern(STRING)?
        .bind(|quoted| match unescape(&quoted[1..quoted.len() - 1]) {
            Some(text) => ret(text),
            None => fail_expecting("a valid unicode escape"),
        })
        .token()
        .labelled("string"))
}

fn number() -> Result<BoxedParser<f64>, GrammarError> {
    Ok(pattern(NUMBER)?
        .bind(|text| match text.parse::<f64>() {
            Ok(n) => ret(n),
            Err(_) => fail_expecting("number"),
        })
        .token()
        .labelled("number"))
}

/// Decode the escapes of a string body the pattern already validated.
/// Returns `None` for a `\u` escape that is not a valid scalar value.
fn unescape(raw: &str) -> Option<String> {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next()? {
            'b' => out.push('\u{8}'),
            'f' => out.push('\u{c}'),
            'n' => out.push('\n'),
            'r' => out.push('\r'),
            't' => out.push('\t'),
            'u' => {
                let high = hex4(&mut chars)?;
                let code = if (0xD800..0xDC00).contains(&high) {
                    if chars.next()? != '\\' || chars.next()? != 'u' {
                        return None;
                    }
                    let low = hex4(&mut chars)?;
                    if !(0xDC00..0xE000).contains(&low) {
                        return None;
                    }
                    0x10000 + ((high - 0xD800) << 10) + (low - 0xDC00)
                } else {
                    high
                };
                out.push(char::from_u32(code)?);
            }
            other => out.push(other),
        }
    }
    Some(out)
}

fn hex4(chars: &mut std::str::Chars<'_>) -> Option<u32> {
    let digits: String = chars.take(4).collect();
    if digits.len() != 4 {
        return None;
    }
    u32::from_str_radix(&digits, 16).ok()
}
