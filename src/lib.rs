//! # Ruparsec - Parsec-style Parser Combinators
//!
//! Ruparsec builds recursive-descent parsers by composing small parser values
//! instead of writing the control flow by hand. Its core is a four-way result
//! model that records both whether a parser succeeded and whether it consumed
//! input before deciding, which is what keeps alternation linear and
//! unambiguous.
//!
//! ## Architecture Overview
//!
//! 1. **Engine** (`parser`) - [`parser::State`], [`parser::Reply`], the
//!    [`parser::Parser`] trait, primitives and combinators
//! 2. **Trees** (`ast`) - Values produced by the bundled grammars
//! 3. **Grammars** (`grammar`) - JSON, arithmetic expressions, balanced brackets
//! 4. **Rendering** (`fmt`) - `Display` for the trees, re-parseable output
//!
//! ## The Result Model
//!
//! ```text
//!               consumed       not consumed
//! success    ConsumedOk(v)      EmptyOk(v)
//! failure     ConsumedErr        EmptyErr
//! ```
//!
//! - `a.or(b)` tries `b` **only** after `EmptyErr` from `a`. Once a branch
//!   consumed input and then failed, that failure is final.
//! - Consumption is sticky: a sequence that advanced in any step reports
//!   `Consumed*` regardless of what later steps did.
//! - `attempt` and `lookahead` are the explicit ways to undo consumption.
//!
//! ## Key Design Decisions
//!
//! ### Immutable state
//! A [`parser::State`] is never changed in place. Every parser receives a
//! state and returns a new one, so backtracking is simply reusing an older
//! value.
//!
//! ### Recursive rules
//! A rule that refers to itself (directly or through other rules) goes
//! through a [`parser::Deferred`] cell that is filled in after construction,
//! or through [`parser::lazy`], which builds the parser on each invocation.
//! Both count recursion depth against [`parser::ParseConfig::max_depth`] so
//! deeply nested input fails with [`parser::ParseError::DepthExceeded`]
//! instead of overflowing the stack.
//!
//! ### Grammar defects are not parse errors
//! An empty literal or a malformed pattern is reported while the grammar is
//! built ([`parser::GrammarError`]). A parser that succeeds without consuming
//! inside `many` would loop forever; that panics.
//!
//! ## Example
//!
//! ```
//! use ruparsec::parser::{literal, pattern, parse, GrammarError};
//!
//! # fn main() -> Result<(), GrammarError> {
//! let number = pattern(r"\d+")?.map(|digits| digits.parse::<u32>().unwrap_or(0));
//! let list = literal("[")?
//!     .then(number.sep_by(literal(",")?))
//!     .skip(literal("]")?);
//!
//! assert_eq!(parse(&list, "[1,2,3]"), Ok(vec![1, 2, 3]));
//! assert!(parse(&list, "[1,2,]").is_err());
//! # Ok(())
//! # }
//! ```
//!
//! ## Module Structure
//!
//! - [`parser`] - The combinator engine
//! - [`ast`] - JSON values, expression trees, bracket groups
//! - [`grammar`] - Grammar builders using the engine
//! - [`fmt`] - Rendering trees back to text

pub mod ast;
pub mod fmt;
pub mod grammar;
pub mod parser;
