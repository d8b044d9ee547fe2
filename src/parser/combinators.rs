use std::fmt;
use std::ops::{Add, BitOr, Mul, Shr, Sub};
use std::rc::Rc;

use super::primitives::whitespace;
use super::reply::Reply;
use super::state::{Parser, State, Step};

type ParserFn<T> = Rc<dyn Fn(&State) -> Step<T>>;

// === Boxed Parser for type erasure ===

/// A shareable parser. Cloning is cheap: clones share the same closure.
pub struct BoxedParser<T> {
    parser: ParserFn<T>,
    label: Option<Rc<str>>,
}

impl<T> Clone for BoxedParser<T> {
    fn clone(&self) -> Self {
        BoxedParser {
            parser: Rc::clone(&self.parser),
            label: self.label.clone(),
        }
    }
}

impl<T> fmt::Debug for BoxedParser<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoxedParser")
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}

impl<T: 'static> BoxedParser<T> {
    pub fn new<P: Parser<T> + 'static>(parser: P) -> Self {
        let label = parser.label().map(Rc::from);
        BoxedParser {
            parser: Rc::new(move |state| parser.parse(state)),
            label,
        }
    }
}

impl<T> Parser<T> for BoxedParser<T> {
    fn parse(&self, state: &State) -> Step<T> {
        (self.parser)(state)
    }

    fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }
}

/// Run `first` then `second`, combining both values with `combine`.
///
/// Shared by every two-step sequence. A failure of `first` passes through
/// untouched; once `first` has consumed, the combined reply is consumed too.
fn zip_with<T, U, V, F>(first: BoxedParser<T>, second: BoxedParser<U>, combine: F) -> BoxedParser<V>
where
    T: 'static,
    U: 'static,
    V: 'static,
    F: Fn(T, U) -> V + 'static,
{
    BoxedParser::new(move |state: &State| {
        let (reply, state) = first.parse(state);
        let consumed = reply.consumed();
        let a = match reply {
            Reply::ConsumedOk(a) | Reply::EmptyOk(a) => a,
            Reply::ConsumedErr => return (Reply::ConsumedErr, state),
            Reply::EmptyErr => return (Reply::EmptyErr, state),
        };
        let (reply, state) = second.parse(&state);
        (reply.map(|b| combine(a, b)).after(consumed), state)
    })
}

// === Combinators as methods ===

impl<T: 'static> BoxedParser<T> {
    /// Chain: run self, then the parser `f` builds from its value.
    pub fn bind<U: 'static, F>(self, f: F) -> BoxedParser<U>
    where
        F: Fn(T) -> BoxedParser<U> + 'static,
    {
        BoxedParser::new(move |state: &State| {
            let (reply, state) = self.parse(state);
            match reply {
                Reply::ConsumedOk(value) => {
                    let (reply, state) = f(value).parse(&state);
                    (reply.into_consumed(), state)
                }
                Reply::EmptyOk(value) => f(value).parse(&state),
                Reply::ConsumedErr => (Reply::ConsumedErr, state),
                Reply::EmptyErr => (Reply::EmptyErr, state),
            }
        })
    }

    /// Map: transform result
    pub fn map<U: 'static, F: Fn(T) -> U + 'static>(self, f: F) -> BoxedParser<U> {
        BoxedParser::new(move |state: &State| {
            let (reply, state) = self.parse(state);
            (reply.map(&f), state)
        })
    }

    /// Keep right: parse self then other, discard self's result
    pub fn then<U: 'static>(self, other: BoxedParser<U>) -> BoxedParser<U> {
        zip_with(self, other, |_, b| b)
    }

    /// Keep left: parse self then other, discard other's result
    pub fn skip<U: 'static>(self, other: BoxedParser<U>) -> BoxedParser<T> {
        zip_with(self, other, |a, _| a)
    }

    /// Sequence: parse self then other, return (T, U)
    pub fn pair<U: 'static>(self, other: BoxedParser<U>) -> BoxedParser<(T, U)> {
        zip_with(self, other, |a, b| (a, b))
    }

    /// Sequence two parsers and merge their values with `f`.
    pub fn pair_with<U: 'static, V: 'static, F>(self, other: BoxedParser<U>, f: F) -> BoxedParser<V>
    where
        F: Fn(T, U) -> V + 'static,
    {
        zip_with(self, other, f)
    }

    /// Choice: try self; only if it failed without consuming, try other
    /// from the same starting state.
    pub fn or(self, other: BoxedParser<T>) -> BoxedParser<T> {
        BoxedParser::new(move |state: &State| match self.parse(state) {
            (Reply::EmptyErr, _) => other.parse(state),
            step => step,
        })
    }

    /// Run self without moving the cursor.
    ///
    /// Success becomes [`Reply::EmptyOk`] at the original state; failure
    /// becomes [`Reply::EmptyErr`] at the original state. An exhausted
    /// recursion limit is not hidden: it surfaces as [`Reply::ConsumedErr`],
    /// still at the original position.
    pub fn lookahead(self) -> BoxedParser<T> {
        BoxedParser::new(move |state: &State| {
            let (reply, after) = self.parse(state);
            match reply {
                Reply::ConsumedOk(value) | Reply::EmptyOk(value) => {
                    (Reply::EmptyOk(value), state.clone())
                }
                _ if after.is_exhausted() => (Reply::ConsumedErr, state.exhaust()),
                Reply::ConsumedErr | Reply::EmptyErr => (Reply::EmptyErr, state.clone()),
            }
        })
    }

    /// Backtracking escape: a failure after consuming is turned into an
    /// empty failure at the original state, so alternation may continue.
    pub fn attempt(self) -> BoxedParser<T> {
        BoxedParser::new(move |state: &State| match self.parse(state) {
            (Reply::ConsumedErr, after) if !after.is_exhausted() => {
                (Reply::EmptyErr, state.clone())
            }
            step => step,
        })
    }

    /// Optional: parse zero or one
    pub fn optional(self) -> BoxedParser<Option<T>> {
        self.map(Some)
            .or(BoxedParser::new(|state: &State| (Reply::EmptyOk(None), state.clone())))
    }

    /// Parse zero or more occurrences.
    ///
    /// Panics if self ever succeeds without consuming: the loop could not
    /// make progress, which is a defect in the grammar rather than the input.
    pub fn many(self) -> BoxedParser<Vec<T>> {
        BoxedParser::new(move |state: &State| {
            let mut state = state.clone();
            let mut values = Vec::new();
            loop {
                let (reply, next) = self.parse(&state);
                match reply {
                    Reply::ConsumedOk(value) => {
                        values.push(value);
                        state = next;
                    }
                    Reply::EmptyOk(_) => panic!(
                        "many: {} succeeded without consuming input at offset {}",
                        self.label().unwrap_or("parser"),
                        state.position()
                    ),
                    Reply::EmptyErr => {
                        state = next;
                        break;
                    }
                    Reply::ConsumedErr => return (Reply::ConsumedErr, next),
                }
            }
            let consumed = !values.is_empty();
            (Reply::ok(values, consumed), state)
        })
    }

    /// Parse one or more occurrences
    pub fn many1(self) -> BoxedParser<Vec<T>> {
        zip_with(self.clone(), self.many(), prepend)
    }

    /// Zero or more occurrences of self separated by `separator`. A trailing
    /// separator is a failure after consumption.
    pub fn sep_by<U: 'static>(self, separator: BoxedParser<U>) -> BoxedParser<Vec<T>> {
        self.sep_by1(separator)
            .or(BoxedParser::new(|state: &State| (Reply::EmptyOk(Vec::new()), state.clone())))
    }

    /// One or more occurrences of self separated by `separator`.
    pub fn sep_by1<U: 'static>(self, separator: BoxedParser<U>) -> BoxedParser<Vec<T>> {
        let rest = separator.then(self.clone()).many();
        zip_with(self, rest, prepend)
    }

    /// Also swallow any whitespace that follows.
    pub fn token(self) -> BoxedParser<T> {
        self.skip(whitespace())
    }

    /// Add a label to this parser for better error messages
    pub fn labelled(self, name: &str) -> BoxedParser<T> {
        let name: Rc<str> = Rc::from(name);
        let label = Rc::clone(&name);
        let inner = self.parser;
        BoxedParser {
            parser: Rc::new(move |state: &State| match inner(state) {
                (Reply::EmptyErr, after) => (Reply::EmptyErr, after.append_expected(&*name)),
                step => step,
            }),
            label: Some(label),
        }
    }
}

fn prepend<T>(first: T, mut rest: Vec<T>) -> Vec<T> {
    rest.insert(0, first);
    rest
}

/// First-match choice over any number of alternatives.
///
/// Each candidate runs against the same state; the first one that does not
/// fail empty decides the outcome.
pub fn alt<T: 'static>(parsers: Vec<BoxedParser<T>>) -> BoxedParser<T> {
    BoxedParser::new(move |state: &State| {
        for parser in &parsers {
            match parser.parse(state) {
                (Reply::EmptyErr, _) => continue,
                step => return step,
            }
        }
        (Reply::EmptyErr, state.clone())
    })
}

/// Run parsers in order, collecting their values.
///
/// Consumed if any step consumed; the first failure aborts, and is a
/// consumed failure once an earlier step has advanced.
pub fn seq<T: 'static>(parsers: Vec<BoxedParser<T>>) -> BoxedParser<Vec<T>> {
    BoxedParser::new(move |state: &State| {
        let mut state = state.clone();
        let mut consumed = false;
        let mut values = Vec::with_capacity(parsers.len());
        for parser in &parsers {
            let (reply, next) = parser.parse(&state);
            state = next;
            consumed |= reply.consumed();
            match reply {
                Reply::ConsumedOk(value) | Reply::EmptyOk(value) => values.push(value),
                Reply::ConsumedErr | Reply::EmptyErr => return (Reply::err(consumed), state),
            }
        }
        (Reply::ok(values, consumed), state)
    })
}

// === Operator Overloading ===

/// `+` for sequence: A + B -> (A, B)
impl<T: 'static, U: 'static> Add<BoxedParser<U>> for BoxedParser<T> {
    type Output = BoxedParser<(T, U)>;

    fn add(self, rhs: BoxedParser<U>) -> Self::Output {
        self.pair(rhs)
    }
}

/// `-` for keep left: A - B -> A (parse B, discard result)
impl<T: 'static, U: 'static> Sub<BoxedParser<U>> for BoxedParser<T> {
    type Output = BoxedParser<T>;

    fn sub(self, rhs: BoxedParser<U>) -> Self::Output {
        self.skip(rhs)
    }
}

/// `*` for keep right: A * B -> B (parse A, discard result)
impl<T: 'static, U: 'static> Mul<BoxedParser<U>> for BoxedParser<T> {
    type Output = BoxedParser<U>;

    fn mul(self, rhs: BoxedParser<U>) -> Self::Output {
        self.then(rhs)
    }
}

/// `|` for choice: A | B -> A or B
impl<T: 'static> BitOr<BoxedParser<T>> for BoxedParser<T> {
    type Output = BoxedParser<T>;

    fn bitor(self, rhs: BoxedParser<T>) -> Self::Output {
        self.or(rhs)
    }
}

/// `>>` for map: A >> fn -> B
impl<T: 'static, U: 'static, F: Fn(T) -> U + 'static> Shr<F> for BoxedParser<T> {
    type Output = BoxedParser<U>;

    fn shr(self, f: F) -> Self::Output {
        self.map(f)
    }
}
