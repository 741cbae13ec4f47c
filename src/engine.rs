//! Tokenization engine.
//!
//! This module is the *public entry point* for scanning. The machinery is split
//! into focused submodules under `src/engine/`.
//!
//! ## How the parts work together
//!
//! ```text
//! Symbol enum ──┐
//!               │  SymbolTable::invert             (symbols.rs)
//!               └──────────────┬──────────────
//!                              │
//!                              ├─ MatchTrie::build (trie.rs)
//!                              └─ single-char map  (fast path)
//!                              │
//! Options ── rules, ignored ───┤
//!                              v
//!                     Tokenizer::tokenize          (tokenizer.rs)
//!                       - fast or general path
//!                       - rules in priority order
//!                       - unknown-input policy
//!                              │
//!                              v
//!                        Vec<Token<S>>  (+ ScanMetrics, metrics.rs)
//! ```
//!
//! Construction does all the work that depends only on configuration; a
//! `tokenize` call only reads it.
//!
//! ## Responsibilities by module
//!
//! - `symbols.rs`: inverts a `Symbol` enumeration into literal → symbol and
//!   rejects ambiguous tables.
//! - `trie.rs`: longest-match literal lookup with break-path fallback.
//! - `tokenizer.rs`: the fast and general scan loops.
//! - `lines.rs`: universal-newline splitting for `tokenize_lines`.
//! - `metrics.rs`: per-call counters and timing.
//!
//! ## Debugging
//!
//! Construction logs at `debug` and every recognized or suppressed character
//! at `trace` through the `log` facade.

#[path = "engine/lines.rs"]
mod lines;
#[path = "engine/metrics.rs"]
mod metrics;
#[path = "engine/symbols.rs"]
mod symbols;
#[path = "engine/tokenizer.rs"]
mod tokenizer;
#[path = "engine/trie.rs"]
mod trie;

pub use metrics::{ScanMetrics, ScanPath, ScanResult};
pub use symbols::SymbolTable;
pub use tokenizer::{RuleTokenizer, Tokenizer};
pub use trie::MatchTrie;
