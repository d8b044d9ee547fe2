//! Balanced bracket grammar
//!
//! forest := group*
//! group  := "[" ("]" | group+ "]")

use crate::ast::brackets::Group;
use crate::parser::{
    BoxedParser, GrammarError, ParseConfig, ParseError, eof, lazy, literal, parse_with,
};

#[derive(Debug, Clone)]
pub struct BracketGrammar {
    group: BoxedParser<Group>,
    forest: BoxedParser<Vec<Group>>,
}

impl BracketGrammar {
    pub fn new() -> Result<Self, GrammarError> {
        let group = group(literal("[")?, literal("]")?);
        let forest = group.clone().many().skip(eof());
        Ok(Self { group, forest })
    }

    /// A single group; does not require the input to end afterwards.
    pub fn group(&self) -> &BoxedParser<Group> {
        &self.group
    }

    /// Any number of groups covering the whole input.
    pub fn forest(&self) -> &BoxedParser<Vec<Group>> {
        &self.forest
    }

    pub fn parse(&self, input: &str) -> Result<Vec<Group>, ParseError> {
        self.parse_with(input, ParseConfig::default())
    }

    pub fn parse_with(&self, input: &str, config: ParseConfig) -> Result<Vec<Group>, ParseError> {
        parse_with(&self.forest, input, config)
    }
}

/// The nested groups are built through [`lazy`] on every visit, so the rule
/// can mention itself without a forward declaration.
fn group(open: BoxedParser<String>, close: BoxedParser<String>) -> BoxedParser<Group> {
    let (inner_open, inner_close) = (open.clone(), close.clone());
    let children = lazy(move || group(inner_open.clone(), inner_close.clone())).many1();
    open.then(
        close.clone().map(|_| Group::default()) | children.map(Group::new).skip(close),
    )
}
