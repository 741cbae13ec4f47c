//! Scan metrics.
//!
//! Counters describing how one `tokenize` call went: which path ran and what
//! each position was resolved by. Collection is a handful of integer bumps, so
//! every scan keeps them; only [`Tokenizer::tokenize_with_metrics`] hands them
//! out, together with the wall-clock time.
//!
//! [`Tokenizer::tokenize_with_metrics`]: crate::Tokenizer::tokenize_with_metrics

use crate::Token;
use std::fmt;
use std::time::Duration;

/// Which scan loop handled the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ScanPath {
    /// Single-character table lookup; no trie, no rules.
    #[default]
    Fast,
    /// Trie lookup, then rules, then the unknown-input policy.
    General,
}

impl fmt::Display for ScanPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScanPath::Fast => f.write_str("fast"),
            ScanPath::General => f.write_str("general"),
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ScanMetrics {
    pub path: ScanPath,
    /// Wall-clock time of the call (zero unless timed).
    pub elapsed: Duration,
    /// Tokens resolved from the literal table.
    pub symbol_hits: usize,
    /// Tokens produced by rules.
    pub rule_hits: usize,
    /// Rule matches that produced no token.
    pub ignored_matches: usize,
    /// Unknown characters dropped by the suppression policy.
    pub suppressed: usize,
}

impl ScanMetrics {
    pub(crate) fn new(path: ScanPath) -> Self {
        ScanMetrics { path, ..Self::default() }
    }

    /// Tokens emitted in total.
    pub fn tokens(&self) -> usize {
        self.symbol_hits + self.rule_hits
    }
}

/// Tokens bundled with the metrics of the scan that produced them.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanResult<S> {
    pub tokens: Vec<Token<S>>,
    pub metrics: ScanMetrics,
}
