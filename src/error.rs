//! Error types.
//!
//! Two families exist and they never mix:
//!
//! - [`ConfigError`] is raised eagerly while rules and tokenizers are built.
//!   A value that was constructed successfully can no longer fail for
//!   configuration reasons.
//! - [`Error`] is raised by a `tokenize*` call. It either names the character
//!   nothing could match, or carries a converter failure untouched.

use thiserror::Error;

/// Failure type returned by rule converters.
pub type ConvertError = Box<dyn std::error::Error + Send + Sync>;

/// Invalid rule or tokenizer configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A rule was asked to both drop its match and convert it.
    #[error("rule {pattern:?} cannot use a converter while ignoring its match")]
    ConflictingAction { pattern: String },

    /// The rule pattern does not compile.
    #[error("invalid rule pattern {pattern:?}: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// Two different symbols claim the same literal.
    #[error("literal {literal:?} is registered by both {first} and {second}")]
    DuplicateLiteral { literal: String, first: String, second: String },

    /// A symbol lists `""` among its literals.
    #[error("symbol {symbol} has an empty literal")]
    EmptyLiteral { symbol: String },
}

/// Failure of a single `tokenize` / `tokenize_lines` call.
#[derive(Debug, Error)]
pub enum Error {
    /// Never produced by a scan; lets callers `?` construction and scanning
    /// into one error type.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Nothing matched at this position and unknown input is not suppressed.
    ///
    /// `offset` is a byte offset into the input after CRLF normalization
    /// (for `tokenize_lines`, into the input as given, since lines are split
    /// before normalizing). `line` and `column` are 1-based and columns count
    /// characters.
    #[error("invalid token {character:?} at line {line}, column {column}")]
    InvalidToken { character: char, line: usize, column: usize, offset: usize },

    /// A rule converter failed; the original error is kept as-is.
    #[error(transparent)]
    Convert(#[from] ConvertError),
}

impl Error {
    /// The offending character of an [`Error::InvalidToken`].
    pub fn invalid_character(&self) -> Option<char> {
        match self {
            Error::InvalidToken { character, .. } => Some(*character),
            _ => None,
        }
    }

    pub(crate) fn invalid_token(text: &str, offset: usize, character: char) -> Self {
        let before = &text[..offset];
        let line = before.matches('\n').count() + 1;
        let line_start = before.rfind('\n').map_or(0, |i| i + 1);
        let column = before[line_start..].chars().count() + 1;
        Error::InvalidToken { character, line, column, offset }
    }

    /// Re-anchor an invalid-token position found in a line tokenized on its
    /// own onto the whole input: `line` is 1-based, `line_start` the byte
    /// offset where that line begins.
    pub(crate) fn on_line(self, line: usize, line_start: usize) -> Self {
        match self {
            Error::InvalidToken { character, column, offset, .. } => {
                Error::InvalidToken { character, line, column, offset: line_start + offset }
            }
            other => other,
        }
    }
}
