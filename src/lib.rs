extern crate self as petalex;

#[macro_use]
mod macros;
mod api;
pub mod common;
mod engine;
mod error;
mod rule;

pub use api::Options;
pub use engine::{MatchTrie, RuleTokenizer, ScanMetrics, ScanPath, ScanResult, SymbolTable, Tokenizer};
pub use error::{ConfigError, ConvertError, Error};
pub use rule::{MatchOutcome, Rule, RuleBuilder, RuleFlags, RuleGroup};

use std::fmt;
use std::hash::Hash;

// --- Symbols -----------------------------------------------------------------

/// A closed enumeration of literal tokens.
///
/// Every variant lists one or more literal spellings; all of them map back to
/// that variant. Implement it with the [`symbols!`] macro rather than by hand.
pub trait Symbol: Copy + Eq + Hash + fmt::Debug + Send + Sync + 'static {
    /// Every variant, in declaration order.
    const ALL: &'static [Self];

    /// Literal spellings of this variant.
    fn literals(self) -> &'static [&'static str];
}

/// The enumeration with no symbols. Tokenizers over `Empty` only apply rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Empty {}

impl Symbol for Empty {
    const ALL: &'static [Self] = &[];

    fn literals(self) -> &'static [&'static str] {
        match self {}
    }
}

// --- Values and tokens -------------------------------------------------------

/// A value produced by a rule: either the matched text or what a converter
/// made of it.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    Char(char),
}

impl Value {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(x) => Some(*x),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Str(s) => write!(f, "{s:?}"),
            Value::Int(n) => write!(f, "{n}"),
            Value::Float(x) => write!(f, "{x:?}"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Char(c) => write!(f, "{c:?}"),
        }
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<char> for Value {
    fn from(c: char) -> Self {
        Value::Char(c)
    }
}

/// One recognized token: a symbol from the literal table or a rule value.
#[derive(Debug, Clone, PartialEq)]
pub enum Token<S> {
    Symbol(S),
    Value(Value),
}

impl<S: Symbol> Token<S> {
    pub fn symbol(&self) -> Option<S> {
        match self {
            Token::Symbol(s) => Some(*s),
            Token::Value(_) => None,
        }
    }

    pub fn value(&self) -> Option<&Value> {
        match self {
            Token::Symbol(_) => None,
            Token::Value(v) => Some(v),
        }
    }
}

impl<S: Symbol> fmt::Display for Token<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Symbol(s) => write!(f, "{s:?}"),
            Token::Value(v) => write!(f, "{v}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    symbols! {
        enum Paren {
            Open => "(",
            Close => ")" | "]",
        }
    }

    #[test]
    fn symbols_macro_lists_variants_and_aliases() {
        assert_eq!(Paren::ALL, &[Paren::Open, Paren::Close]);
        assert_eq!(Paren::Open.literals(), &["("]);
        assert_eq!(Paren::Close.literals(), &[")", "]"]);
    }

    #[test]
    fn empty_has_no_symbols() {
        assert!(Empty::ALL.is_empty());
    }

    #[test]
    fn token_display() {
        assert_eq!(Token::Symbol(Paren::Open).to_string(), "Open");
        assert_eq!(Token::<Paren>::Value(Value::from("hi")).to_string(), "\"hi\"");
        assert_eq!(Token::<Paren>::Value(Value::Int(3)).to_string(), "3");
        assert_eq!(Token::<Paren>::Value(Value::Float(3.0)).to_string(), "3.0");
    }

    #[test]
    fn token_accessors() {
        let sym: Token<Paren> = Token::Symbol(Paren::Close);
        assert_eq!(sym.symbol(), Some(Paren::Close));
        assert!(sym.value().is_none());

        let val: Token<Paren> = Token::Value(Value::Int(4));
        assert_eq!(val.value().and_then(Value::as_int), Some(4));
        assert_eq!(val.symbol(), None);
    }
}
