//! Primitive parsers: the leaves every grammar is assembled from.

use regex_automata::meta::Regex;
use regex_automata::{Anchored, Input};

use super::combinators::BoxedParser;
use super::error::GrammarError;
use super::reply::Reply;
use super::state::{Parser, State, Step, nested};

/// Always succeeds with `value`, consuming nothing.
pub fn ret<T: Clone + 'static>(value: T) -> BoxedParser<T> {
    BoxedParser::new(move |state: &State| (Reply::EmptyOk(value.clone()), state.clone()))
}

/// Always fails without consuming.
pub fn fail<T: 'static>() -> BoxedParser<T> {
    BoxedParser::new(|state: &State| (Reply::EmptyErr, state.clone()))
}

/// Always fails without consuming, recording `label` as what was expected.
pub fn fail_expecting<T: 'static>(label: &str) -> BoxedParser<T> {
    fail().labelled(label)
}

/// Succeeds, consuming nothing, only at the end of the input.
pub fn eof() -> BoxedParser<()> {
    BoxedParser::new(|state: &State| {
        if state.at_end() {
            (Reply::EmptyOk(()), state.clone())
        } else {
            (Reply::EmptyErr, state.clone())
        }
    })
    .labelled("end of input")
}

struct Literal {
    text: String,
}

impl Parser<String> for Literal {
    fn parse(&self, state: &State) -> Step<String> {
        if state.remaining().starts_with(&self.text) {
            (Reply::ConsumedOk(self.text.clone()), state.advance(self.text.len()))
        } else {
            (Reply::EmptyErr, state.clone())
        }
    }
}

/// Matches exactly `text` at the cursor. A partial match consumes nothing.
pub fn literal(text: &str) -> Result<BoxedParser<String>, GrammarError> {
    if text.is_empty() {
        return Err(GrammarError::EmptyLiteral);
    }
    let quoted = format!("'{text}'");
    Ok(BoxedParser::new(Literal {
        text: text.to_string(),
    })
    .labelled(&quoted))
}

struct Pattern {
    source: String,
    regex: Regex,
}

impl Parser<String> for Pattern {
    fn parse(&self, state: &State) -> Step<String> {
        // Search the whole source so look-around (`\b`, `^`) sees the text
        // before the cursor.
        let input = Input::new(state.source())
            .range(state.position()..)
            .anchored(Anchored::Yes);
        match self.regex.search(&input) {
            Some(found) if found.is_empty() => (Reply::EmptyOk(String::new()), state.clone()),
            Some(found) => (
                Reply::ConsumedOk(state.source()[found.range()].to_string()),
                state.advance(found.end() - state.position()),
            ),
            None => (Reply::EmptyErr, state.clone()),
        }
    }

    fn label(&self) -> Option<&str> {
        Some(&self.source)
    }
}

/// Matches the regular expression `pattern` anchored at the cursor; it never
/// searches ahead. Assertions see the whole input, so `^` only matches at
/// offset 0 and `\b` looks at the character before the cursor. A zero-length
/// match succeeds without consuming.
pub fn pattern(pattern: &str) -> Result<BoxedParser<String>, GrammarError> {
    let regex = Regex::new(pattern).map_err(|source| {
        GrammarError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        }
    })?;
    Ok(BoxedParser::new(Pattern {
        source: pattern.to_string(),
        regex,
    }))
}

/// Optional run of whitespace. Returns what it skipped.
pub fn whitespace() -> BoxedParser<String> {
    BoxedParser::new(|state: &State| {
        let rest = state.remaining();
        let skipped = rest.len() - rest.trim_start().len();
        if skipped == 0 {
            (Reply::EmptyOk(String::new()), state.clone())
        } else {
            (
                Reply::ConsumedOk(rest[..skipped].to_string()),
                state.advance(skipped),
            )
        }
    })
}

/// Builds its parser only when invoked, so a rule may refer to itself
/// through a function that constructs it.
pub fn lazy<T: 'static, F>(thunk: F) -> BoxedParser<T>
where
    F: Fn() -> BoxedParser<T> + 'static,
{
    BoxedParser::new(move |state: &State| nested(state, |inner| thunk().parse(inner)))
}
