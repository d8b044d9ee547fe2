/// Nesting allowed through recursive rules before a parse is aborted.
pub const DEFAULT_MAX_DEPTH: usize = 100;

/// Limits applied to a single parse.
///
/// The only resource an in-memory parse can run out of is call stack, and the
/// stack only grows without bound through recursive rules ([`super::Deferred`]
/// and [`super::lazy`]). `max_depth` caps how deeply those may nest.
///
/// Every entry into a recursive rule costs one level, even when the rule then
/// fails without consuming. A construct usually passes through several rules,
/// so the limit is not a count of visible nesting: each parenthesis in the
/// bundled expression grammar costs three levels (`expression`, `sum` and
/// `unary`), which lets the default admit 32 nested parentheses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseConfig {
    pub max_depth: usize,
}

impl ParseConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

impl Default for ParseConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}
