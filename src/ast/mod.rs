//! Value trees produced by the bundled grammars.

pub mod brackets;
pub mod expression;
pub mod json;

pub use brackets::Group;
pub use expression::{BinOpKind, Expr, UnaryOpKind};
pub use json::JsonValue;
