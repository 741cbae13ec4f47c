use crate::common::{self, named};
use crate::{Empty, MatchOutcome, Options, Rule, RuleGroup, RuleTokenizer, Token, Value};

fn check_rule(rule: &Rule, cases: Vec<(&str, MatchOutcome)>) {
    for (input, expected) in cases {
        assert_eq!(rule.apply(input).unwrap(), expected, "rule {:?} on {input:?}", rule.pattern());
    }
}

fn check_group(group: &RuleGroup, cases: Vec<(&str, MatchOutcome)>) {
    for (input, expected) in cases {
        assert_eq!(group.apply(input).unwrap(), expected, "group on {input:?}");
    }
}

fn text(s: &str, len: usize) -> MatchOutcome {
    MatchOutcome::Applied(Value::from(s), len)
}

fn int(n: i64, len: usize) -> MatchOutcome {
    MatchOutcome::Applied(Value::Int(n), len)
}

fn float(x: f64, len: usize) -> MatchOutcome {
    MatchOutcome::Applied(Value::Float(x), len)
}

const NONE: MatchOutcome = MatchOutcome::NotApplied;

#[test]
fn single_quoted_string() {
    check_rule(
        &common::SINGLE_QUOTED_STRING,
        vec![
            ("'test'", text("'test'", 6)),
            ("'''", text("''", 2)),
            ("test", NONE),
            ("test'", NONE),
            ("'test", NONE),
            ("\\'test'", NONE),
            ("'test\\'", NONE),
            ("''", text("''", 2)),
            ("'it\\'s'", text("'it\\'s'", 7)),
            ("'a\\\\'b", text("'a\\\\'", 5)),
        ],
    );
}

#[test]
fn double_quoted_string() {
    check_rule(
        &common::DOUBLE_QUOTED_STRING,
        vec![
            ("\"test\"", text("\"test\"", 6)),
            ("\"\"\"", text("\"\"", 2)),
            ("test", NONE),
            ("test\"", NONE),
            ("\"test", NONE),
            ("\\\"test\"", NONE),
            ("\"test\\\"", NONE),
            ("\"\"", text("\"\"", 2)),
        ],
    );
}

#[test]
fn string_group_tokenizes_both_quotes() {
    let tokenizer = RuleTokenizer::new(Options::default().with_rule(&*common::STRING)).unwrap();
    let tokens = tokenizer.tokenize("'test'\"test\"").unwrap();
    let expected: Vec<Token<Empty>> = vec![Token::Value(Value::from("'test'")), Token::Value(Value::from("\"test\""))];
    assert_eq!(tokens, expected);
}

#[test]
fn char_literal() {
    check_rule(
        &common::CHAR,
        vec![
            ("'t'", text("'t'", 3)),
            ("'''", NONE),
            ("t", NONE),
            ("t'", NONE),
            ("'t", NONE),
            ("\\'t'", NONE),
            ("'t\\'", NONE),
            ("''", NONE),
        ],
    );
}

#[test]
fn letter() {
    check_rule(
        &common::LETTER,
        vec![("A", text("A", 1)), ("a", text("a", 1)), ("!", NONE), ("@", NONE), ("|", NONE), ("", NONE)],
    );
}

#[test]
fn word() {
    check_rule(&common::WORD, vec![("word", text("word", 4)), ("two words", text("two", 3)), ("", NONE)]);
}

#[test]
fn digit() {
    check_rule(&common::DIGIT, vec![("0", int(0, 1)), ("42", int(4, 1)), ("/", NONE), (":", NONE), ("", NONE)]);
}

#[test]
fn int_rule() {
    check_rule(
        &common::INT,
        vec![
            ("69", int(69, 2)),
            ("069", int(69, 3)),
            ("1_000_000", int(1_000_000, 9)),
            ("1__0", int(10, 4)),
            ("1_", int(1, 1)),
            ("_1", NONE),
            ("", NONE),
        ],
    );
}

#[test]
fn signed_int() {
    check_rule(
        &common::SIGNED_INT,
        vec![("+69", int(69, 3)), ("-69", int(-69, 3)), ("-1_0", int(-10, 4)), ("69", NONE), ("", NONE)],
    );
}

#[test]
fn decimal() {
    check_rule(
        &common::DECIMAL,
        vec![
            ("69.42", float(69.42, 5)),
            ("0.92", float(0.92, 4)),
            (".92", float(0.92, 3)),
            ("3.", float(3.0, 2)),
            ("3", NONE),
            ("", NONE),
        ],
    );
}

#[test]
fn hexdigit() {
    check_rule(
        &common::HEXDIGIT,
        vec![("3", int(3, 1)), ("D", int(13, 1)), ("a", int(10, 1)), ("g", NONE), ("", NONE)],
    );
}

#[test]
fn c_name() {
    check_rule(
        &common::C_NAME,
        vec![
            ("W", text("W", 1)),
            ("_", text("_", 1)),
            ("word", text("word", 4)),
            ("two_words", text("two_words", 9)),
            ("_word", text("_word", 5)),
            ("_two_words", text("_two_words", 10)),
            ("0word", NONE),
            ("word0", text("word0", 5)),
            ("_0word", text("_0word", 6)),
            ("_word0", text("_word0", 6)),
            ("0", NONE),
            ("69420", NONE),
            ("", NONE),
        ],
    );
}

#[test]
fn newline() {
    check_rule(
        &common::NEWLINE,
        vec![("\n", text("\n", 1)), ("\r\n", text("\r\n", 2)), ("\r", NONE), ("\\n", NONE), ("", NONE)],
    );
}

#[test]
fn float_rule() {
    check_rule(
        &common::FLOAT,
        vec![
            ("1e3", float(1_000.0, 3)),
            ("1e+3", float(1_000.0, 4)),
            ("1e-3", float(0.001, 4)),
            ("1E3", float(1_000.0, 3)),
            ("1.0e3", float(1_000.0, 5)),
            ("1.0e+3", float(1_000.0, 6)),
            ("1.0e-3", float(0.001, 6)),
            ("2.5", float(2.5, 3)),
            ("1", NONE),
            ("", NONE),
        ],
    );
}

#[test]
fn signed_float() {
    check_rule(
        &common::SIGNED_FLOAT,
        vec![
            ("+1e3", float(1_000.0, 4)),
            ("-1e3", float(-1_000.0, 4)),
            ("+1e+3", float(1_000.0, 5)),
            ("+1e-3", float(0.001, 5)),
            ("+1.0e3", float(1_000.0, 6)),
            ("-1.0e3", float(-1_000.0, 6)),
            ("+1.0e+3", float(1_000.0, 7)),
            ("+1.0e-3", float(0.001, 7)),
            ("1.0", NONE),
            ("", NONE),
        ],
    );
}

#[test]
fn number_groups() {
    check_group(&common::NUMBER, vec![("1.0", float(1.0, 3)), ("7", int(7, 1)), ("-1", NONE)]);
    check_group(&common::SIGNED_NUMBER, vec![("-1.0", float(-1.0, 4)), ("+2", int(2, 2)), ("2", NONE)]);
}

#[test]
fn any_int() {
    check_group(&common::ANY_INT, vec![("1", int(1, 1)), ("-1", int(-1, 2)), ("+1", int(1, 2))]);
}

#[test]
fn any_float() {
    check_group(&common::ANY_FLOAT, vec![("1.0", float(1.0, 3)), ("-1.0", float(-1.0, 4)), ("+1.0", float(1.0, 4))]);
}

#[test]
fn any_number() {
    check_group(
        &common::ANY_NUMBER,
        vec![
            ("1", int(1, 1)),
            ("-1", int(-1, 2)),
            ("+1", int(1, 2)),
            ("1.05", float(1.05, 4)),
            ("-1.05", float(-1.05, 5)),
            ("+1.05", float(1.05, 5)),
        ],
    );
}

#[test]
fn every_name_resolves() {
    for name in common::NAMES {
        let group = named(name).unwrap_or_else(|| panic!("{name} is listed but not resolvable"));
        assert!(!group.is_empty());
    }
    assert!(named("INT").is_none());
    assert!(named("nope").is_none());
    assert_eq!(named("number").unwrap(), *common::NUMBER);
}
