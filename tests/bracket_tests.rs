use ruparsec::ast::Group;
use ruparsec::fmt::stringify_forest;
use ruparsec::grammar::BracketGrammar;
use ruparsec::parser::{Parser, Reply, State};

/// Every balanced string of exactly `pairs` bracket pairs.
fn balanced(pairs: usize) -> Vec<String> {
    fn extend(open: usize, close: usize, prefix: &mut String, out: &mut Vec<String>) {
        if open == 0 && close == 0 {
            out.push(prefix.clone());
            return;
        }
        if open > 0 {
            prefix.push('[');
            extend(open - 1, close + 1, prefix, out);
            prefix.pop();
        }
        if close > 0 {
            prefix.push(']');
            extend(open, close - 1, prefix, out);
            prefix.pop();
        }
    }

    let mut out = Vec::new();
    extend(pairs, 0, &mut String::new(), &mut out);
    out
}

#[test]
fn enumeration_matches_catalan_numbers() {
    let counts: Vec<usize> = (1..=6).map(|n| balanced(n).len()).collect();
    assert_eq!(counts, [1, 2, 5, 14, 42, 132]);
}

#[test]
fn every_balanced_string_round_trips() {
    let grammar = BracketGrammar::new().expect("bracket grammar builds");
    for pairs in 1..=6 {
        for source in balanced(pairs) {
            let forest = match grammar.parse(&source) {
                Ok(forest) => forest,
                Err(err) => panic!("parsing {source:?} failed: {err}"),
            };
            assert_eq!(stringify_forest(&forest), source);
            let groups: usize = forest.iter().map(Group::count).sum();
            assert_eq!(groups, pairs);
        }
    }
}

#[test]
fn structure_of_nested_groups() {
    let grammar = BracketGrammar::new().expect("bracket grammar builds");
    let forest = grammar.parse("[[][[]]][]").expect("balanced");
    assert_eq!(
        forest,
        vec![
            Group::new(vec![Group::default(), Group::new(vec![Group::default()])]),
            Group::default(),
        ]
    );
    assert_eq!(forest[0].depth(), 3);
    assert_eq!(forest[1].depth(), 1);
}

#[test]
fn empty_input_is_an_empty_forest() {
    let grammar = BracketGrammar::new().expect("bracket grammar builds");
    assert_eq!(grammar.parse(""), Ok(vec![]));
}

#[test]
fn unbalanced_input_is_rejected() {
    let grammar = BracketGrammar::new().expect("bracket grammar builds");
    for source in ["[", "]", "[[]", "[]]", "][", "[x]", "[] "] {
        assert!(grammar.parse(source).is_err(), "{source:?} should be rejected");
    }
}

#[test]
fn group_parser_stops_after_one_group() {
    let grammar = BracketGrammar::new().expect("bracket grammar builds");
    let (reply, next) = grammar.group().parse(&State::new("[[]][]"));
    assert_eq!(reply, Reply::ConsumedOk(Group::new(vec![Group::default()])));
    assert_eq!(next.remaining(), "[]");
}
