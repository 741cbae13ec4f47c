//! Ready-made rules for common lexical categories.
//!
//! Every item is built on first use and can be passed to
//! [`Options::with_rule`](crate::Options::with_rule) directly (`&*INT`) or
//! combined with `|`.
//!
//! Groups that mix integers and floats try the float rules first; an integer
//! rule would otherwise stop at the decimal point.

use crate::{Rule, RuleGroup};
use once_cell::sync::Lazy;

mod helpers;

#[cfg(test)]
mod tests;

const INT_PATTERN: &str = "[0-9](?:[0-9_]*[0-9])?";
const EXPONENT_PATTERN: &str = "(?:[eE][+\\-]?[0-9](?:[0-9_]*[0-9])?)";

fn float_pattern() -> String {
    format!("{INT_PATTERN}{EXPONENT_PATTERN}|(?:{INT_PATTERN}\\.[0-9]*|\\.[0-9]+){EXPONENT_PATTERN}?")
}

// --- Strings -------------------------------------------------------------------

/// `'...'`; a backslash escapes the next character, including a quote.
pub static SINGLE_QUOTED_STRING: Lazy<Rule> = library_rule!(r"'(?:[^'\\\n]|\\[^\n])*'");
/// `"..."`; a backslash escapes the next character, including a quote.
pub static DOUBLE_QUOTED_STRING: Lazy<Rule> = library_rule!(r#""(?:[^"\\\n]|\\[^\n])*""#);
pub static STRING: Lazy<RuleGroup> = Lazy::new(|| &*SINGLE_QUOTED_STRING | &*DOUBLE_QUOTED_STRING);
/// A single character (or an escaped quote) between single quotes.
pub static CHAR: Lazy<Rule> = library_rule!(r"'(?:[^']|\\')'");

// --- Words -----------------------------------------------------------------------

pub static LETTER: Lazy<Rule> = library_rule!("[A-Za-z]");
pub static WORD: Lazy<Rule> = library_rule!("[A-Za-z]+");
/// C-style identifier.
pub static C_NAME: Lazy<Rule> = library_rule!("[_A-Za-z][_A-Za-z0-9]*");
pub static NEWLINE: Lazy<Rule> = library_rule!(r"\r?\n");

// --- Numbers ---------------------------------------------------------------------

pub static DIGIT: Lazy<Rule> = library_rule!("[0-9]", helpers::int);
pub static HEXDIGIT: Lazy<Rule> = library_rule!("[0-9A-Fa-f]", helpers::hex);
/// Decimal integer; `_` may separate digits.
pub static INT: Lazy<Rule> = library_rule!(INT_PATTERN, helpers::int);
pub static SIGNED_INT: Lazy<Rule> = library_rule!(format!("[+\\-]{INT_PATTERN}"), helpers::int);
/// `1.5`, `3.` or `.5`, without exponent.
pub static DECIMAL: Lazy<Rule> = library_rule!(format!("{INT_PATTERN}\\.(?:[0-9]+)?|\\.[0-9]+"), helpers::float);
/// Decimal with optional exponent, or integer with mandatory exponent.
pub static FLOAT: Lazy<Rule> = library_rule!(float_pattern(), helpers::float);
pub static SIGNED_FLOAT: Lazy<Rule> = library_rule!(format!("[+\\-](?:{})", float_pattern()), helpers::float);

pub static NUMBER: Lazy<RuleGroup> = Lazy::new(|| &*FLOAT | &*INT);
pub static SIGNED_NUMBER: Lazy<RuleGroup> = Lazy::new(|| &*SIGNED_FLOAT | &*SIGNED_INT);
/// Integer with or without sign.
pub static ANY_INT: Lazy<RuleGroup> = Lazy::new(|| &*SIGNED_INT | &*INT);
/// Float with or without sign.
pub static ANY_FLOAT: Lazy<RuleGroup> = Lazy::new(|| &*SIGNED_FLOAT | &*FLOAT);
/// Any number with or without sign.
pub static ANY_NUMBER: Lazy<RuleGroup> = Lazy::new(|| &*ANY_FLOAT | &*ANY_INT);

/// Lowercase names accepted by [`named`].
pub const NAMES: &[&str] = &[
    "single_quoted_string",
    "double_quoted_string",
    "string",
    "char",
    "letter",
    "word",
    "c_name",
    "newline",
    "digit",
    "hexdigit",
    "int",
    "signed_int",
    "decimal",
    "float",
    "signed_float",
    "number",
    "signed_number",
    "any_int",
    "any_float",
    "any_number",
];

/// Look a library rule up by its lowercase name.
pub fn named(name: &str) -> Option<RuleGroup> {
    let group = match name {
        "single_quoted_string" => RuleGroup::from(&*SINGLE_QUOTED_STRING),
        "double_quoted_string" => RuleGroup::from(&*DOUBLE_QUOTED_STRING),
        "string" => (*STRING).clone(),
        "char" => RuleGroup::from(&*CHAR),
        "letter" => RuleGroup::from(&*LETTER),
        "word" => RuleGroup::from(&*WORD),
        "c_name" => RuleGroup::from(&*C_NAME),
        "newline" => RuleGroup::from(&*NEWLINE),
        "digit" => RuleGroup::from(&*DIGIT),
        "hexdigit" => RuleGroup::from(&*HEXDIGIT),
        "int" => RuleGroup::from(&*INT),
        "signed_int" => RuleGroup::from(&*SIGNED_INT),
        "decimal" => RuleGroup::from(&*DECIMAL),
        "float" => RuleGroup::from(&*FLOAT),
        "signed_float" => RuleGroup::from(&*SIGNED_FLOAT),
        "number" => (*NUMBER).clone(),
        "signed_number" => (*SIGNED_NUMBER).clone(),
        "any_int" => (*ANY_INT).clone(),
        "any_float" => (*ANY_FLOAT).clone(),
        "any_number" => (*ANY_NUMBER).clone(),
        _ => return None,
    };
    Some(group)
}
