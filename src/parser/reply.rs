//! The outcome of a single parser invocation.
//!
//! A [`Reply`] answers two questions at once: did the parser succeed, and did
//! it advance the cursor before deciding? Both bits drive the combinators:
//! alternation only moves on to the next candidate after an [`Reply::EmptyErr`],
//! and consumption is sticky across sequencing.

/// Four-way result of running a parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply<T> {
    /// Succeeded after consuming input.
    ConsumedOk(T),
    /// Succeeded without consuming input.
    EmptyOk(T),
    /// Failed after consuming input. Not recoverable by alternation.
    ConsumedErr,
    /// Failed without consuming input.
    EmptyErr,
}

impl<T> Reply<T> {
    /// Build a success, tagged by whether anything was consumed.
    pub fn ok(value: T, consumed: bool) -> Self {
        if consumed {
            Reply::ConsumedOk(value)
        } else {
            Reply::EmptyOk(value)
        }
    }

    /// Build a failure, tagged by whether anything was consumed.
    pub fn err(consumed: bool) -> Self {
        if consumed {
            Reply::ConsumedErr
        } else {
            Reply::EmptyErr
        }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, Reply::ConsumedOk(_) | Reply::EmptyOk(_))
    }

    pub fn is_err(&self) -> bool {
        !self.is_ok()
    }

    /// Whether the cursor moved before this reply was produced.
    pub fn consumed(&self) -> bool {
        matches!(self, Reply::ConsumedOk(_) | Reply::ConsumedErr)
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            Reply::ConsumedOk(value) | Reply::EmptyOk(value) => Some(value),
            Reply::ConsumedErr | Reply::EmptyErr => None,
        }
    }

    pub fn into_value(self) -> Option<T> {
        match self {
            Reply::ConsumedOk(value) | Reply::EmptyOk(value) => Some(value),
            Reply::ConsumedErr | Reply::EmptyErr => None,
        }
    }

    /// Transform the success value, keeping the tag.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Reply<U> {
        match self {
            Reply::ConsumedOk(value) => Reply::ConsumedOk(f(value)),
            Reply::EmptyOk(value) => Reply::EmptyOk(f(value)),
            Reply::ConsumedErr => Reply::ConsumedErr,
            Reply::EmptyErr => Reply::EmptyErr,
        }
    }

    /// Re-tag as consumed. Used when an earlier step of a sequence already
    /// advanced the cursor: consumption cannot be undone by a later step.
    pub fn into_consumed(self) -> Self {
        match self {
            Reply::ConsumedOk(value) | Reply::EmptyOk(value) => Reply::ConsumedOk(value),
            Reply::ConsumedErr | Reply::EmptyErr => Reply::ConsumedErr,
        }
    }

    /// Re-tag as consumed only if `consumed` holds.
    pub(crate) fn after(self, consumed: bool) -> Self {
        if consumed { self.into_consumed() } else { self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tags() {
        assert!(Reply::ConsumedOk(1).is_ok());
        assert!(Reply::EmptyOk(1).is_ok());
        assert!(Reply::<i32>::ConsumedErr.is_err());
        assert!(Reply::<i32>::EmptyErr.is_err());

        assert!(Reply::ConsumedOk(1).consumed());
        assert!(Reply::<i32>::ConsumedErr.consumed());
        assert!(!Reply::EmptyOk(1).consumed());
        assert!(!Reply::<i32>::EmptyErr.consumed());
    }

    #[test]
    fn test_constructors() {
        assert_eq!(Reply::ok("x", true), Reply::ConsumedOk("x"));
        assert_eq!(Reply::ok("x", false), Reply::EmptyOk("x"));
        assert_eq!(Reply::<()>::err(true), Reply::ConsumedErr);
        assert_eq!(Reply::<()>::err(false), Reply::EmptyErr);
    }

    #[test]
    fn test_into_consumed_is_sticky() {
        assert_eq!(Reply::EmptyOk(3).into_consumed(), Reply::ConsumedOk(3));
        assert_eq!(Reply::<i32>::EmptyErr.into_consumed(), Reply::ConsumedErr);
        assert_eq!(Reply::EmptyOk(3).after(false), Reply::EmptyOk(3));
    }

    #[test]
    fn test_map_keeps_tag() {
        assert_eq!(Reply::EmptyOk(2).map(|x| x * 10), Reply::EmptyOk(20));
        assert_eq!(Reply::ConsumedOk(2).map(|x| x * 10), Reply::ConsumedOk(20));
        assert_eq!(Reply::<i32>::ConsumedErr.map(|x| x * 10), Reply::ConsumedErr);
    }
}
