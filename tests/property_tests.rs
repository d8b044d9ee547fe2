//! Algebraic laws of the combinators over generated inputs.

use proptest::prelude::*;
use ruparsec::parser::{BoxedParser, Parser, Reply, State, literal, pattern};

fn lit(text: &str) -> BoxedParser<String> {
    literal(text).expect("literal is valid")
}

fn re(source: &str) -> BoxedParser<String> {
    pattern(source).expect("pattern is valid")
}

/// Short strings over a small alphabet, so generated literals and inputs
/// overlap often.
fn small_text(max: usize) -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(vec!['a', 'b', 'c']), 0..max)
        .prop_map(|chars| chars.into_iter().collect())
}

fn nonempty_text(max: usize) -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(vec!['a', 'b', 'c']), 1..max)
        .prop_map(|chars| chars.into_iter().collect())
}

/// A parser that fails without consuming on anything starting with `b`, and
/// consumes before failing on `ab`.
fn tricky() -> BoxedParser<String> {
    lit("a").then(lit("a")) | lit("c")
}

proptest! {
    #[test]
    fn or_after_empty_failure_is_second_branch(input in small_text(8), word in nonempty_text(4)) {
        let state = State::new(&input);
        let first = tricky();
        let second = lit(&word);
        let (first_reply, _) = first.parse(&state);
        prop_assume!(first_reply == Reply::EmptyErr);

        let combined = first.or(second.clone()).parse(&state);
        prop_assert_eq!(combined, second.parse(&state));
    }

    #[test]
    fn or_after_anything_else_is_first_branch(input in small_text(8), word in nonempty_text(4)) {
        let state = State::new(&input);
        let first = tricky();
        let first_step = first.parse(&state);
        prop_assume!(first_step.0 != Reply::EmptyErr);

        let combined = first.or(lit(&word)).parse(&state);
        prop_assert_eq!(combined, first_step);
    }

    #[test]
    fn lookahead_never_moves(input in small_text(8), start in 0usize..8) {
        let start = start.min(input.len());
        let state = State::new(&input).with_position(start);
        for parser in [tricky(), re("[ab]+"), re("b*"), lit("abc")] {
            let (_, next) = parser.lookahead().parse(&state);
            prop_assert_eq!(next.position(), start);
        }
    }

    #[test]
    fn literal_matches_exact_prefix(input in small_text(8), word in nonempty_text(4)) {
        let state = State::new(&input);
        let (reply, next) = lit(&word).parse(&state);
        if input.starts_with(&word) {
            prop_assert_eq!(reply, Reply::ConsumedOk(word.clone()));
            prop_assert_eq!(next.position(), word.len());
        } else {
            prop_assert_eq!(reply, Reply::EmptyErr);
            prop_assert_eq!(next.position(), 0);
        }
    }

    #[test]
    fn pattern_never_searches_ahead(prefix in nonempty_text(4), rest in small_text(4)) {
        // `c` cannot match at the start unless the input starts with it.
        let input = format!("{prefix}c{rest}");
        let (reply, next) = re("c+").parse(&State::new(&input));
        if prefix.starts_with('c') {
            prop_assert!(reply.consumed());
        } else {
            prop_assert_eq!(reply, Reply::EmptyErr);
            prop_assert_eq!(next.position(), 0);
        }
    }

    #[test]
    fn many_without_match_is_empty(input in "[bc]{0,8}") {
        let state = State::new(&input);
        let (reply, next) = lit("a").many().parse(&state);
        prop_assert_eq!(reply, Reply::EmptyOk(vec![]));
        prop_assert_eq!(next.position(), 0);

        let (reply, next) = lit("a").many1().parse(&state);
        prop_assert!(reply.is_err());
        prop_assert_eq!(next.position(), 0);
    }

    #[test]
    fn many_counts_repetitions(count in 0usize..10, tail in "[bc]{0,4}") {
        let input = format!("{}{tail}", "ab".repeat(count));
        let (reply, next) = lit("ab").many().parse(&State::new(&input));
        prop_assert_eq!(reply.value().map(Vec::len), Some(count));
        prop_assert_eq!(reply.consumed(), count > 0);
        prop_assert_eq!(next.remaining(), tail.as_str());
    }
}
