use ruparsec::grammar::{BracketGrammar, ExpressionGrammar, JsonGrammar};
use ruparsec::parser::{
    BoxedParser, DEFAULT_MAX_DEPTH, Deferred, ParseConfig, ParseError, Parser, Reply, State,
    literal, parse_with,
};

fn nested_parens(depth: usize) -> String {
    format!("{}1{}", "(".repeat(depth), ")".repeat(depth))
}

#[test]
fn default_limit() {
    assert_eq!(ParseConfig::default().max_depth, DEFAULT_MAX_DEPTH);
    assert_eq!(ParseConfig::new().with_max_depth(7).max_depth, 7);
}

#[test]
fn json_nesting_past_limit() {
    let grammar = JsonGrammar::new().expect("JSON grammar builds");
    let config = ParseConfig::new().with_max_depth(10);
    let shallow = format!("{}{}", "[".repeat(5), "]".repeat(5));
    assert!(grammar.parse_with(&shallow, config).is_ok());

    let deep = format!("{}{}", "[".repeat(50), "]".repeat(50));
    let err = grammar.parse_with(&deep, config).expect_err("too deep");
    assert!(
        matches!(err, ParseError::DepthExceeded { limit: 10, .. }),
        "{err:?}"
    );
}

#[test]
fn expression_nesting_past_limit() {
    let grammar = ExpressionGrammar::new().expect("expression grammar builds");
    let config = ParseConfig::new().with_max_depth(20);
    let err = grammar
        .parse_with(&nested_parens(40), config)
        .expect_err("too deep");
    assert!(matches!(err, ParseError::DepthExceeded { limit: 20, .. }), "{err:?}");

    assert_eq!(
        grammar.parse(&nested_parens(3)).map(|expr| expr.to_string()),
        Ok("1".to_string())
    );
}

#[test]
fn expression_parens_cost_three_levels_each() {
    // expression, sum and unary are each entered once per paren.
    let grammar = ExpressionGrammar::new().expect("expression grammar builds");
    assert!(grammar.parse(&nested_parens(32)).is_ok());

    let err = grammar.parse(&nested_parens(33)).expect_err("too deep");
    assert!(
        matches!(err, ParseError::DepthExceeded { limit: DEFAULT_MAX_DEPTH, .. }),
        "{err:?}"
    );
}

#[test]
fn bracket_nesting_past_limit() {
    let grammar = BracketGrammar::new().expect("bracket grammar builds");
    let config = ParseConfig::new().with_max_depth(4);
    assert!(grammar.parse_with("[[[[]]]]", config).is_ok());

    let err = grammar
        .parse_with("[[[[[[]]]]]]", config)
        .expect_err("too deep");
    assert!(matches!(err, ParseError::DepthExceeded { limit: 4, .. }), "{err:?}");
}

#[test]
fn hostile_input_fails_cleanly_at_default_limit() {
    let grammar = JsonGrammar::new().expect("JSON grammar builds");
    let deep = "[".repeat(100_000);
    assert!(matches!(
        grammar.parse(&deep),
        Err(ParseError::DepthExceeded { .. })
    ));
}

fn parenthesized() -> (Deferred<usize>, BoxedParser<usize>) {
    let rule = Deferred::new("nest");
    let open = literal("(").expect("literal is valid");
    let close = literal(")").expect("literal is valid");
    let nest = open
        .then(rule.parser().optional())
        .skip(close)
        .map(|inner| inner.map_or(1, |depth| depth + 1));
    rule.define(nest).expect("first definition");
    let parser = rule.parser();
    (rule, parser)
}

#[test]
fn exhaustion_is_not_recoverable_by_alternation() {
    let (_rule, nest) = parenthesized();
    let fallback = literal("(").expect("literal is valid").map(|_| 0);
    let parser = nest.attempt().or(fallback);
    let config = ParseConfig::new().with_max_depth(2);

    let (reply, state) = parser.parse(&State::with_config("((()))", config));
    assert_eq!(reply, Reply::ConsumedErr);
    assert!(state.is_exhausted());
}

#[test]
fn exhaustion_is_not_hidden_by_lookahead() {
    let (_rule, nest) = parenthesized();
    let config = ParseConfig::new().with_max_depth(2);
    let (reply, state) = nest.clone().lookahead().parse(&State::with_config("((()))", config));
    assert_eq!(reply, Reply::ConsumedErr);
    assert!(state.is_exhausted());
    assert_eq!(state.position(), 0);

    let start = State::with_config("x((()))", config).with_position(1);
    let (_, state) = nest.lookahead().parse(&start);
    assert_eq!(state.position(), 1);
}

#[test]
fn depth_is_restored_after_success() {
    let (_rule, nest) = parenthesized();
    let (reply, state) = nest.parse(&State::new("((()))"));
    assert_eq!(reply, Reply::ConsumedOk(3));
    assert_eq!(state.depth(), 0);
    assert!(!state.is_exhausted());

    assert_eq!(
        parse_with(&nest, "((()))", ParseConfig::new().with_max_depth(4)),
        Ok(3)
    );
    // The innermost level still tries a fourth group before it closes.
    assert!(matches!(
        parse_with(&nest, "((()))", ParseConfig::new().with_max_depth(3)),
        Err(ParseError::DepthExceeded { limit: 3, position: 3 })
    ));
    assert!(matches!(
        parse_with(&nest, "((()))", ParseConfig::new().with_max_depth(2)),
        Err(ParseError::DepthExceeded { limit: 2, position: 2 })
    ));
}
