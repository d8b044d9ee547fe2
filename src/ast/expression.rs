/// Arithmetic expression tree.
///
/// Node shapes follow the usual host-language AST: operators carry their
/// operands, postfix access wraps the value it applies to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    Name(String),
    Constant(u64),
    UnaryOp(UnaryOp),
    BinaryOp(BinaryOp),
    Attribute(Attribute),
    Subscript(Subscript),
    Call(Call),
    Tuple(Vec<Expr>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOpKind {
    Plus,
    Minus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOpKind {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnaryOp {
    pub op: UnaryOpKind,
    pub operand: Box<Expr>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryOp {
    pub op: BinOpKind,
    pub left: Box<Expr>,
    pub right: Box<Expr>,
}

/// `value.attr`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub value: Box<Expr>,
    pub attr: String,
}

/// `value[index]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subscript {
    pub value: Box<Expr>,
    pub index: Box<Expr>,
}

/// `func(args...)`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Call {
    pub func: Box<Expr>,
    pub args: Vec<Expr>,
}

impl Expr {
    pub fn name(id: impl Into<String>) -> Self {
        Expr::Name(id.into())
    }

    pub fn unary(op: UnaryOpKind, operand: Expr) -> Self {
        Expr::UnaryOp(UnaryOp {
            op,
            operand: Box::new(operand),
        })
    }

    pub fn binary(op: BinOpKind, left: Expr, right: Expr) -> Self {
        Expr::BinaryOp(BinaryOp {
            op,
            left: Box::new(left),
            right: Box::new(right),
        })
    }

    pub fn attribute(value: Expr, attr: impl Into<String>) -> Self {
        Expr::Attribute(Attribute {
            value: Box::new(value),
            attr: attr.into(),
        })
    }

    pub fn subscript(value: Expr, index: Expr) -> Self {
        Expr::Subscript(Subscript {
            value: Box::new(value),
            index: Box::new(index),
        })
    }

    pub fn call(func: Expr, args: Vec<Expr>) -> Self {
        Expr::Call(Call {
            func: Box::new(func),
            args,
        })
    }
}

impl UnaryOpKind {
    pub fn symbol(self) -> &'static str {
        match self {
            UnaryOpKind::Plus => "+",
            UnaryOpKind::Minus => "-",
        }
    }
}

impl BinOpKind {
    pub fn symbol(self) -> &'static str {
        match self {
            BinOpKind::Add => "+",
            BinOpKind::Sub => "-",
            BinOpKind::Mul => "*",
            BinOpKind::Div => "/",
            BinOpKind::Pow => "**",
        }
    }
}
