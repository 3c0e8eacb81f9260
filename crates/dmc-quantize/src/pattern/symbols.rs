//! Symbol alphabets for legend entries.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use super::error::EncodeError;

/// Ordered set of single-character symbols handed out to legend entries.
///
/// The n-th distinct thread of a pattern gets the n-th symbol. The default
/// alphabet is `A` through `Z`, so a default pattern holds at most 26
/// threads. A longer custom alphabet raises that limit.
///
/// # Example
///
/// ```
/// use dmc_quantize::SymbolAlphabet;
///
/// let default = SymbolAlphabet::default();
/// assert_eq!(default.capacity(), 26);
/// assert_eq!(default.symbol(25), Some('Z'));
///
/// let custom: SymbolAlphabet = "XO+".parse().unwrap();
/// assert_eq!(custom.symbol(1), Some('O'));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolAlphabet {
    symbols: Vec<char>,
}

impl SymbolAlphabet {
    /// Build an alphabet from a string of distinct, non-whitespace characters.
    ///
    /// # Errors
    ///
    /// Returns [`EncodeError::InvalidAlphabet`] if `symbols` is empty,
    /// contains whitespace, or repeats a character.
    pub fn new(symbols: &str) -> Result<Self, EncodeError> {
        let invalid = |reason: String| EncodeError::InvalidAlphabet { reason };

        if symbols.is_empty() {
            return Err(invalid("alphabet is empty".to_string()));
        }

        let mut seen = HashSet::new();
        for c in symbols.chars() {
            if c.is_whitespace() {
                return Err(invalid(format!("whitespace symbol {:?}", c)));
            }
            if !seen.insert(c) {
                return Err(invalid(format!("symbol {:?} appears twice", c)));
            }
        }

        Ok(Self {
            symbols: symbols.chars().collect(),
        })
    }

    /// Number of symbols, i.e. the maximum number of legend entries.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.symbols.len()
    }

    /// Symbol for the legend entry at `index`, if the alphabet reaches that far.
    #[inline]
    pub fn symbol(&self, index: usize) -> Option<char> {
        self.symbols.get(index).copied()
    }

    /// All symbols in order.
    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }
}

impl Default for SymbolAlphabet {
    fn default() -> Self {
        Self {
            symbols: ('A'..='Z').collect(),
        }
    }
}

impl FromStr for SymbolAlphabet {
    type Err = EncodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for SymbolAlphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.symbols {
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_a_to_z() {
        let alphabet = SymbolAlphabet::default();
        assert_eq!(alphabet.to_string(), "ABCDEFGHIJKLMNOPQRSTUVWXYZ");
        assert_eq!(alphabet.symbol(0), Some('A'));
        assert_eq!(alphabet.symbol(26), None);
    }

    #[test]
    fn test_custom_alphabet_keeps_order() {
        let alphabet = SymbolAlphabet::new("#@*").unwrap();
        assert_eq!(alphabet.symbols(), &['#', '@', '*']);
    }

    #[test]
    fn test_unicode_symbols() {
        let alphabet = SymbolAlphabet::new("●○▲").unwrap();
        assert_eq!(alphabet.capacity(), 3);
        assert_eq!(alphabet.symbol(2), Some('▲'));
    }

    #[test]
    fn test_rejects_empty() {
        assert!(matches!(
            SymbolAlphabet::new(""),
            Err(EncodeError::InvalidAlphabet { .. })
        ));
    }

    #[test]
    fn test_rejects_duplicates() {
        assert!(matches!(
            SymbolAlphabet::new("ABA"),
            Err(EncodeError::InvalidAlphabet { .. })
        ));
    }

    #[test]
    fn test_rejects_whitespace() {
        assert!(SymbolAlphabet::new("A B").is_err());
    }
}
