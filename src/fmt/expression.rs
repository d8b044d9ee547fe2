//! Fully parenthesized rendering of expression trees.
//!
//! Every operator application gets its own parentheses, so the output
//! re-parses to the same tree regardless of precedence:
//!
//! ```text
//! 2**f(3)**4*5+6   =>   (((2 ** (f(3) ** 4)) * 5) + 6)
//! -a.b[c]          =>   (-a.b[c])
//! ```

use std::fmt::{self, Display};

use crate::ast::expression::{Attribute, BinaryOp, Call, Expr, Subscript, UnaryOp};

impl Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Name(id) => f.write_str(id),
            Expr::Constant(n) => write!(f, "{n}"),
            Expr::UnaryOp(UnaryOp { op, operand }) => write!(f, "({}{operand})", op.symbol()),
            Expr::BinaryOp(BinaryOp { op, left, right }) => {
                write!(f, "({left} {} {right})", op.symbol())
            }
            Expr::Attribute(Attribute { value, attr }) => write!(f, "{value}.{attr}"),
            Expr::Subscript(Subscript { value, index }) => write!(f, "{value}[{index}]"),
            Expr::Call(Call { func, args }) => {
                write!(f, "{func}(")?;
                write_list(f, args)?;
                f.write_str(")")
            }
            Expr::Tuple(items) => {
                f.write_str("(")?;
                write_list(f, items)?;
                if items.len() == 1 {
                    f.write_str(",")?;
                }
                f.write_str(")")
            }
        }
    }
}

fn write_list(f: &mut fmt::Formatter<'_>, items: &[Expr]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}
