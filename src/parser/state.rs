use std::rc::Rc;

use super::config::ParseConfig;
use super::reply::Reply;

/// What every parser returns: the outcome and the state to continue from.
pub type Step<T> = (Reply<T>, State);

/// Immutable cursor over the input text.
///
/// Every operation returns a new `State`; a parser never changes the state it
/// was handed. Positions are byte offsets into `source` and always sit on a
/// char boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct State {
    source: Rc<str>,
    position: usize,
    expected: Vec<String>,
    depth: usize,
    config: ParseConfig,
    exhausted: bool,
}

impl State {
    pub fn new(source: &str) -> Self {
        Self::with_config(source, ParseConfig::default())
    }

    pub fn with_config(source: &str, config: ParseConfig) -> Self {
        Self {
            source: Rc::from(source),
            position: 0,
            expected: Vec::new(),
            depth: 0,
            config,
            exhausted: false,
        }
    }

    /// Start at an explicit offset instead of the beginning.
    ///
    /// Panics if `position` is past the end or not on a char boundary.
    pub fn with_position(mut self, position: usize) -> Self {
        assert!(
            self.source.is_char_boundary(position),
            "offset {position} is not a char boundary of a {}-byte input",
            self.source.len()
        );
        self.position = position;
        self
    }

    pub fn with_expected(mut self, expected: Vec<String>) -> Self {
        self.expected = expected;
        self
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn position(&self) -> usize {
        self.position
    }

    /// The unconsumed tail of the input.
    pub fn remaining(&self) -> &str {
        &self.source[self.position..]
    }

    pub fn at_end(&self) -> bool {
        self.position == self.source.len()
    }

    /// Labels of what would have been accepted at the current position.
    pub fn expected(&self) -> &[String] {
        &self.expected
    }

    pub fn config(&self) -> ParseConfig {
        self.config
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Whether the recursion limit tripped somewhere on the way here.
    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    /// Move forward by `len` bytes. Expectations belong to a position, so
    /// they are dropped.
    pub fn advance(&self, len: usize) -> Self {
        Self {
            source: Rc::clone(&self.source),
            position: self.position + len,
            expected: Vec::new(),
            depth: self.depth,
            config: self.config,
            exhausted: self.exhausted,
        }
    }

    pub fn append_expected(&self, label: impl Into<String>) -> Self {
        let mut next = self.clone();
        next.expected.push(label.into());
        next
    }

    pub fn reset_expected(&self) -> Self {
        let mut next = self.clone();
        next.expected.clear();
        next
    }

    /// 1-based line and column (in chars) of the current position.
    pub fn line_column(&self) -> (usize, usize) {
        let before = &self.source[..self.position];
        let line = before.matches('\n').count() + 1;
        let column = match before.rfind('\n') {
            Some(newline) => before[newline + 1..].chars().count() + 1,
            None => before.chars().count() + 1,
        };
        (line, column)
    }

    /// Enter one level of rule recursion, or `None` if that would exceed
    /// the configured limit.
    pub(crate) fn descend(&self) -> Option<Self> {
        if self.depth >= self.config.max_depth {
            return None;
        }
        let mut next = self.clone();
        next.depth += 1;
        Some(next)
    }

    pub(crate) fn ascend(mut self) -> Self {
        self.depth = self.depth.saturating_sub(1);
        self
    }

    pub(crate) fn exhaust(&self) -> Self {
        let mut next = self.clone();
        next.exhausted = true;
        next
    }
}

impl From<&str> for State {
    fn from(source: &str) -> Self {
        State::new(source)
    }
}

/// A parser: a pure operation from a state to an outcome and a new state.
///
/// Closures of the matching shape are parsers, so most combinators are
/// written as a closure handed to [`super::BoxedParser::new`].
pub trait Parser<T> {
    fn parse(&self, state: &State) -> Step<T>;

    /// Human-readable name of what this parser accepts, if it has one.
    fn label(&self) -> Option<&str> {
        None
    }
}

impl<T, F: Fn(&State) -> Step<T>> Parser<T> for F {
    fn parse(&self, state: &State) -> Step<T> {
        self(state)
    }
}

/// Run `run` one recursion level deeper, or fail for good if the limit is hit.
///
/// Exhaustion is reported as [`Reply::ConsumedErr`] so that no enclosing
/// alternation can try its way around it.
pub(crate) fn nested<T>(state: &State, run: impl FnOnce(&State) -> Step<T>) -> Step<T> {
    match state.descend() {
        Some(inner) => {
            let (reply, after) = run(&inner);
            (reply, after.ascend())
        }
        None => {
            log::warn!(
                "recursion limit of {} reached at offset {}",
                state.config.max_depth,
                state.position
            );
            (Reply::ConsumedErr, state.exhaust())
        }
    }
}
