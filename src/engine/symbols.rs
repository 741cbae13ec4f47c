//! Symbol table construction.
//!
//! Inverts a [`Symbol`] enumeration into a map from literal spelling to
//! variant:
//!
//! ```text
//! enum { Foo => "1", Bar => "2" | "3" }  ──▶  { "1": Foo, "2": Bar, "3": Bar }
//! ```
//!
//! ## Invariants
//!
//! - A literal maps to exactly one variant; a second variant claiming it is a
//!   construction error, never a silent overwrite.
//! - No literal is empty.

use crate::Symbol;
use crate::error::ConfigError;
use std::collections::HashMap;

/// Mapping from literal string to symbol, built once per tokenizer.
#[derive(Debug, Clone)]
pub struct SymbolTable<S> {
    map: HashMap<&'static str, S>,
    /// Longest literal, in characters.
    longest: usize,
}

impl<S: Symbol> SymbolTable<S> {
    /// Invert `S` into a literal → symbol table.
    pub fn invert() -> Result<Self, ConfigError> {
        let mut map: HashMap<&'static str, S> = HashMap::new();

        for &symbol in S::ALL {
            for &literal in symbol.literals() {
                if literal.is_empty() {
                    return Err(ConfigError::EmptyLiteral { symbol: format!("{symbol:?}") });
                }
                match map.get(literal) {
                    Some(&existing) if existing != symbol => {
                        return Err(ConfigError::DuplicateLiteral {
                            literal: literal.to_string(),
                            first: format!("{existing:?}"),
                            second: format!("{symbol:?}"),
                        });
                    }
                    _ => {
                        map.insert(literal, symbol);
                    }
                }
            }
        }

        let longest = map.keys().map(|k| k.chars().count()).max().unwrap_or(0);
        Ok(SymbolTable { map, longest })
    }

    pub fn get(&self, literal: &str) -> Option<S> {
        self.map.get(literal).copied()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Length in characters of the longest literal (0 for an empty table).
    pub fn longest_literal(&self) -> usize {
        self.longest
    }

    /// `(literal, symbol)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, S)> + '_ {
        self.map.iter().map(|(&k, &v)| (k, v))
    }

    /// The table keyed by `char`, if every literal is exactly one character.
    pub(crate) fn single_char_map(&self) -> Option<HashMap<char, S>> {
        self.map
            .iter()
            .map(|(literal, &symbol)| {
                let mut chars = literal.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Some((c, symbol)),
                    _ => None,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Empty;

    symbols! {
        enum Aliased {
            Foo => "1",
            Bar => "2" | "3",
        }
    }

    symbols! {
        enum Clashing {
            Left => "<",
            Less => "<",
        }
    }

    symbols! {
        enum Repeats {
            Same => "x" | "x",
        }
    }

    symbols! {
        enum Blank {
            Nothing => "",
        }
    }

    symbols! {
        enum Mixed {
            Pow => "**",
            Mul => "*",
        }
    }

    #[test]
    fn invert_with_aliases() {
        let table = SymbolTable::<Aliased>::invert().unwrap();
        assert_eq!(table.len(), 3);
        assert_eq!(table.get("1"), Some(Aliased::Foo));
        assert_eq!(table.get("2"), Some(Aliased::Bar));
        assert_eq!(table.get("3"), Some(Aliased::Bar));
        assert_eq!(table.get("4"), None);
        assert_eq!(table.longest_literal(), 1);
    }

    #[test]
    fn duplicate_literal_is_rejected() {
        let err = SymbolTable::<Clashing>::invert().unwrap_err();
        match err {
            ConfigError::DuplicateLiteral { literal, first, second } => {
                assert_eq!(literal, "<");
                assert_eq!(first, "Left");
                assert_eq!(second, "Less");
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn repeated_literal_on_one_symbol_is_fine() {
        let table = SymbolTable::<Repeats>::invert().unwrap();
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn empty_literal_is_rejected() {
        assert!(matches!(SymbolTable::<Blank>::invert(), Err(ConfigError::EmptyLiteral { .. })));
    }

    #[test]
    fn empty_enumeration() {
        let table = SymbolTable::<Empty>::invert().unwrap();
        assert!(table.is_empty());
        assert_eq!(table.longest_literal(), 0);
        assert_eq!(table.single_char_map().map(|m| m.len()), Some(0));
    }

    #[test]
    fn single_char_map_only_for_single_chars() {
        assert!(SymbolTable::<Aliased>::invert().unwrap().single_char_map().is_some());
        assert!(SymbolTable::<Mixed>::invert().unwrap().single_char_map().is_none());
        assert_eq!(SymbolTable::<Mixed>::invert().unwrap().longest_literal(), 2);
    }
}
