//! Grammars built on the combinator engine
//!
//! Each grammar is an explicit builder: call `new` once at startup and reuse
//! the result for every input. Construction fails only if a rule was written
//! wrong (see [`crate::parser::GrammarError`]).
//!
//! - `json`: JSON documents into [`crate::ast::JsonValue`]
//! - `expression`: arithmetic with precedence into [`crate::ast::Expr`]
//! - `brackets`: balanced `[` `]` nesting into [`crate::ast::Group`]s

mod brackets;
mod expression;
mod json;

pub use brackets::BracketGrammar;
pub use expression::ExpressionGrammar;
pub use json::JsonGrammar;
