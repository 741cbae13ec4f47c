//! Longest-match literal lookup.
//!
//! Literals are stored in a prefix tree keyed by character. A node carries a
//! terminal symbol when the path leading to it spells a complete literal, so a
//! literal that is also a prefix of a longer one ("A" and "AB") lives on an
//! internal node:
//!
//! ```text
//! literals: "ABC" -> X, "A" -> Y, "B" -> Z
//!
//! root ─ A (Y) ─ B ─ C (X)
//!      └ B (Z)
//! ```
//!
//! ## Lookup
//!
//! Descend one character at a time. Every terminal passed on the way is
//! remembered as the *break path*; when the descent cannot continue, the most
//! recent break path is the answer. Reaching a leaf returns immediately.
//!
//! ```text
//! "ABA": A (remember Y@1) ─ B ─ no edge for 'A' ──▶ (Y, 1)
//! "ABC": A (remember Y@1) ─ B ─ C is a leaf     ──▶ (X, 3)
//! ```

use crate::Symbol;
use std::collections::HashMap;

#[derive(Debug, Clone)]
struct TrieNode<S> {
    children: HashMap<char, TrieNode<S>>,
    terminal: Option<S>,
}

impl<S> TrieNode<S> {
    fn new() -> Self {
        TrieNode { children: HashMap::new(), terminal: None }
    }

    fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// Prefix tree over literal spellings. Built once, read-only afterwards.
#[derive(Debug, Clone)]
pub struct MatchTrie<S> {
    root: TrieNode<S>,
}

impl<S: Symbol> MatchTrie<S> {
    /// Build the trie from `(literal, symbol)` pairs.
    ///
    /// Pairs are inserted longest literal first, so a shorter literal that is a
    /// prefix of a longer one always finds the internal node already in place
    /// and attaches to it as a terminal.
    pub fn build<'a>(literals: impl IntoIterator<Item = (&'a str, S)>) -> Self {
        let mut pairs: Vec<(&str, S)> = literals.into_iter().filter(|(literal, _)| !literal.is_empty()).collect();
        pairs.sort_by(|(a, _), (b, _)| b.chars().count().cmp(&a.chars().count()).then_with(|| a.cmp(b)));

        let mut root = TrieNode::new();
        for (literal, symbol) in pairs {
            let mut node = &mut root;
            for c in literal.chars() {
                node = node.children.entry(c).or_insert_with(TrieNode::new);
            }
            node.terminal = Some(symbol);
        }
        MatchTrie { root }
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_leaf()
    }

    /// Longest literal at the start of `text`, as `(symbol, byte length)`.
    ///
    /// `None` means no literal starts here; the caller reports the first
    /// character of `text`.
    pub fn lookup(&self, text: &str) -> Option<(S, usize)> {
        let mut node = &self.root;
        let mut consumed = 0;
        let mut break_path = None;

        let mut chars = text.chars();
        loop {
            if let Some(symbol) = node.terminal {
                break_path = Some((symbol, consumed));
            }
            let Some(c) = chars.next() else { break };
            let Some(child) = node.children.get(&c) else { break };
            consumed += c.len_utf8();
            if child.is_leaf() {
                if let Some(symbol) = child.terminal {
                    return Some((symbol, consumed));
                }
            }
            node = child;
        }

        break_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    symbols! {
        enum Test {
            X => "ABC",
            Y => "A",
            Z => "B",
        }
    }

    symbols! {
        enum Greek {
            Alpha => "α",
            AlphaBeta => "αβ",
        }
    }

    fn trie() -> MatchTrie<Test> {
        MatchTrie::build([("ABC", Test::X), ("A", Test::Y), ("B", Test::Z)])
    }

    #[test]
    fn leaf_match_returns_full_length() {
        assert_eq!(trie().lookup("ABC"), Some((Test::X, 3)));
        assert_eq!(trie().lookup("ABCD"), Some((Test::X, 3)));
        assert_eq!(trie().lookup("B"), Some((Test::Z, 1)));
    }

    #[test]
    fn falls_back_to_break_path() {
        assert_eq!(trie().lookup("ABA"), Some((Test::Y, 1)));
        assert_eq!(trie().lookup("AA"), Some((Test::Y, 1)));
    }

    #[test]
    fn exhausted_input_uses_last_terminal() {
        assert_eq!(trie().lookup("A"), Some((Test::Y, 1)));
        assert_eq!(trie().lookup("AB"), Some((Test::Y, 1)));
    }

    #[test]
    fn miss() {
        assert_eq!(trie().lookup("C"), None);
        assert_eq!(trie().lookup(""), None);
        assert!(MatchTrie::<Test>::build([]).is_empty());
        assert_eq!(MatchTrie::<Test>::build([]).lookup("A"), None);
    }

    #[test]
    fn insertion_order_does_not_matter() {
        let forward = MatchTrie::build([("A", Test::Y), ("ABC", Test::X)]);
        let backward = MatchTrie::build([("ABC", Test::X), ("A", Test::Y)]);
        for input in ["A", "AB", "ABC", "ABX"] {
            assert_eq!(forward.lookup(input), backward.lookup(input), "input {input:?}");
        }
    }

    #[test]
    fn lengths_are_bytes() {
        let trie = MatchTrie::build([("α", Greek::Alpha), ("αβ", Greek::AlphaBeta)]);
        assert_eq!(trie.lookup("αβγ"), Some((Greek::AlphaBeta, 4)));
        assert_eq!(trie.lookup("αγ"), Some((Greek::Alpha, 2)));
    }
}
