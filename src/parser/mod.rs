//! The combinator engine.
//!
//! Grammars are values: primitives ([`literal`], [`pattern`], [`ret`], ...)
//! are combined with the methods on [`BoxedParser`] into rules, and the top
//! rule is run once per input with [`run`] or [`parse`].

mod combinators;
mod config;
mod deferred;
mod error;
mod primitives;
mod reply;
mod state;

pub use combinators::*;
pub use config::*;
pub use deferred::*;
pub use error::*;
pub use primitives::*;
pub use reply::*;
pub use state::{Parser, State, Step};

/// Run `parser` over `input` from the start, with the default limits.
pub fn run<T, P: Parser<T>>(parser: &P, input: &str) -> Step<T> {
    run_with(parser, input, ParseConfig::default())
}

/// Run `parser` over `input` from the start.
pub fn run_with<T, P: Parser<T>>(parser: &P, input: &str, config: ParseConfig) -> Step<T> {
    log::debug!(
        "parsing {} bytes with max depth {}",
        input.len(),
        config.max_depth
    );
    let (reply, state) = parser.parse(&State::with_config(input, config));
    log::debug!(
        "parse finished at offset {} (ok: {}, consumed: {})",
        state.position(),
        reply.is_ok(),
        reply.consumed()
    );
    (reply, state)
}

/// Run `parser` over `input` and return its value.
///
/// Whether trailing input is acceptable is up to the grammar; end a rule
/// with [`eof`] to require that everything is consumed.
pub fn parse<T, P: Parser<T>>(parser: &P, input: &str) -> Result<T, ParseError> {
    parse_with(parser, input, ParseConfig::default())
}

pub fn parse_with<T, P: Parser<T>>(
    parser: &P,
    input: &str,
    config: ParseConfig,
) -> Result<T, ParseError> {
    let (reply, state) = run_with(parser, input, config);
    if state.is_exhausted() {
        return Err(ParseError::DepthExceeded {
            limit: config.max_depth,
            position: state.position(),
        });
    }
    match reply.into_value() {
        Some(value) => Ok(value),
        None => {
            let (line, column) = state.line_column();
            Err(ParseError::Syntax {
                position: state.position(),
                line,
                column,
                expected: state.expected().to_vec(),
            })
        }
    }
}
