//! The scan loop.
//!
//! A [`Tokenizer`] is built once from a symbol enumeration and [`Options`],
//! then turns strings into flat token sequences. Nothing is retained between
//! calls, so one tokenizer can serve many threads at once.
//!
//! ## Pass structure
//!
//! ```text
//! input ── CRLF → LF (optional) ── sentinel space (if ' ' is ignored)
//!             │
//!             ├─ fast path     every literal is one char and there are no rules:
//!             │                  skip ignored, look each char up, miss → policy
//!             │
//!             └─ general path  strip ignored prefix
//!                                ├─ trie lookup on a window of the longest literal
//!                                ├─ rules in order, on the whole remainder
//!                                └─ unknown-input policy
//! ```
//!
//! The unknown-input policy either drops exactly one character
//! (`suppress_unknown`) or aborts the call with [`Error::InvalidToken`].
//! There is no backtracking: once a literal or rule has consumed input the
//! scan never revisits it.

use super::lines::lines;
use super::metrics::{ScanMetrics, ScanPath, ScanResult};
use super::symbols::SymbolTable;
use super::trie::MatchTrie;
use crate::error::{ConfigError, Error};
use crate::{Empty, MatchOutcome, Options, RuleGroup, Symbol, Token};
use std::borrow::Cow;
use std::collections::{HashMap, HashSet};
use std::time::Instant;

/// A tokenizer over the symbol enumeration `S`.
#[derive(Debug, Clone)]
pub struct Tokenizer<S: Symbol = Empty> {
    symbols: SymbolTable<S>,
    trie: MatchTrie<S>,
    rules: RuleGroup,
    ignored: HashSet<char>,
    convert_crlf: bool,
    suppress_unknown: bool,
    /// Present iff the fast path is eligible.
    fast: Option<HashMap<char, S>>,
    /// Lookahead window handed to the trie, in characters.
    window: usize,
}

/// A tokenizer with no literal symbols; only rules apply.
pub type RuleTokenizer = Tokenizer<Empty>;

impl<S: Symbol> Tokenizer<S> {
    /// Build a tokenizer for `S` configured by `options`.
    pub fn new(options: Options) -> Result<Self, ConfigError> {
        let symbols = SymbolTable::<S>::invert()?;
        let rules = options.flattened_rules();
        let fast = if rules.is_empty() { symbols.single_char_map() } else { None };
        let trie = MatchTrie::build(symbols.iter());
        let window = symbols.longest_literal().max(1);
        let ignored: HashSet<char> = options.ignored_set().collect();

        log::debug!(
            "tokenizer for {}: {} literals, {} rules, {} ignored chars, window={}, path={}",
            std::any::type_name::<S>(),
            symbols.len(),
            rules.len(),
            ignored.len(),
            window,
            if fast.is_some() { ScanPath::Fast } else { ScanPath::General },
        );

        Ok(Tokenizer {
            symbols,
            trie,
            rules,
            ignored,
            convert_crlf: options.convert_crlf,
            suppress_unknown: options.suppress_unknown,
            fast,
            window,
        })
    }

    /// Whether scans take the single-character fast path.
    pub fn is_fast(&self) -> bool {
        self.fast.is_some()
    }

    pub fn symbols(&self) -> &SymbolTable<S> {
        &self.symbols
    }

    pub fn rules(&self) -> &RuleGroup {
        &self.rules
    }

    /// Tokenize `input` into a flat sequence of tokens.
    pub fn tokenize(&self, input: &str) -> Result<Vec<Token<S>>, Error> {
        self.scan(input).map(|result| result.tokens)
    }

    /// Tokenize every line of `input` on its own.
    ///
    /// Lines are split on universal newlines; no state carries over from one
    /// line to the next. An invalid token reports the 1-based line it was
    /// found on and its byte offset into `input`.
    pub fn tokenize_lines(&self, input: &str) -> Result<Vec<Vec<Token<S>>>, Error> {
        lines(input)
            .enumerate()
            .map(|(idx, (start, line))| self.tokenize(line).map_err(|err| err.on_line(idx + 1, start)))
            .collect()
    }

    /// Like [`tokenize`](Self::tokenize), also returning timing and counters.
    pub fn tokenize_with_metrics(&self, input: &str) -> Result<ScanResult<S>, Error> {
        let start = Instant::now();
        let mut result = self.scan(input)?;
        result.metrics.elapsed = start.elapsed();
        Ok(result)
    }

    fn scan(&self, input: &str) -> Result<ScanResult<S>, Error> {
        let mut text = Cow::Borrowed(input);
        if self.convert_crlf && text.contains("\r\n") {
            text = Cow::Owned(text.replace("\r\n", "\n"));
        }
        if self.ignored.contains(&' ') {
            // Sentinel: a rule that needs one more character after its match
            // can still see it at the end of the input.
            text.to_mut().push(' ');
        }

        match &self.fast {
            Some(table) => self.scan_fast(&text, table),
            None => self.scan_general(&text),
        }
    }

    fn scan_fast(&self, text: &str, table: &HashMap<char, S>) -> Result<ScanResult<S>, Error> {
        let mut metrics = ScanMetrics::new(ScanPath::Fast);
        let mut tokens = Vec::new();

        for (offset, c) in text.char_indices() {
            if self.ignored.contains(&c) {
                continue;
            }
            match table.get(&c) {
                Some(&symbol) => {
                    tokens.push(Token::Symbol(symbol));
                    metrics.symbol_hits += 1;
                }
                None if self.suppress_unknown => {
                    log::trace!("suppressed {c:?} at {offset}");
                    metrics.suppressed += 1;
                }
                None => return Err(Error::invalid_token(text, offset, c)),
            }
        }

        Ok(ScanResult { tokens, metrics })
    }

    fn scan_general(&self, text: &str) -> Result<ScanResult<S>, Error> {
        let mut metrics = ScanMetrics::new(ScanPath::General);
        let mut tokens = Vec::new();
        let mut rest = text;

        loop {
            rest = rest.trim_start_matches(|c: char| self.ignored.contains(&c));
            let Some(first) = rest.chars().next() else { break };
            let offset = text.len() - rest.len();

            if !self.symbols.is_empty() {
                if let Some((symbol, len)) = self.trie.lookup(window(rest, self.window)) {
                    log::trace!("symbol {symbol:?} at {offset}..{}", offset + len);
                    tokens.push(Token::Symbol(symbol));
                    metrics.symbol_hits += 1;
                    rest = &rest[len..];
                    continue;
                }
            }

            if let Some(len) = self.apply_rules(rest, &mut tokens, &mut metrics)? {
                rest = &rest[len..];
                continue;
            }

            if !self.suppress_unknown {
                return Err(Error::invalid_token(text, offset, first));
            }
            log::trace!("suppressed {first:?} at {offset}");
            metrics.suppressed += 1;
            rest = &rest[first.len_utf8()..];
        }

        Ok(ScanResult { tokens, metrics })
    }

    /// Try each rule against the whole remainder; the first one that consumes
    /// input wins. Returns the consumed length.
    ///
    /// A match that consumes nothing counts as not applied, otherwise the scan
    /// could never advance past it.
    fn apply_rules(
        &self,
        rest: &str,
        tokens: &mut Vec<Token<S>>,
        metrics: &mut ScanMetrics,
    ) -> Result<Option<usize>, Error> {
        for rule in &self.rules {
            match rule.apply(rest)? {
                MatchOutcome::NotApplied | MatchOutcome::Ignored(0) | MatchOutcome::Applied(_, 0) => {}
                MatchOutcome::Ignored(len) => {
                    metrics.ignored_matches += 1;
                    return Ok(Some(len));
                }
                MatchOutcome::Applied(value, len) => {
                    log::trace!("rule {:?} produced {value}", rule.pattern());
                    tokens.push(Token::Value(value));
                    metrics.rule_hits += 1;
                    return Ok(Some(len));
                }
            }
        }
        Ok(None)
    }
}

/// The first `chars` characters of `text`.
fn window(text: &str, chars: usize) -> &str {
    match text.char_indices().nth(chars) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}
