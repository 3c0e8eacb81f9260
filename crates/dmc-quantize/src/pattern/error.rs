//! Error types for pattern encoding.

use std::fmt;

/// Error produced while building a pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EncodeError {
    /// A new distinct thread appeared after every symbol was already used.
    TooManyDistinctColors {
        /// Number of symbols in the alphabet.
        capacity: usize,
        /// Label of the thread that did not get a symbol.
        label: String,
    },
    /// The symbol alphabet is empty or repeats a character.
    InvalidAlphabet {
        /// What is wrong with it.
        reason: String,
    },
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EncodeError::TooManyDistinctColors { capacity, label } => write!(
                f,
                "too many distinct colors: thread {} needs symbol #{} but only {} are available",
                label,
                capacity + 1,
                capacity
            ),
            EncodeError::InvalidAlphabet { reason } => {
                write!(f, "invalid symbol alphabet: {}", reason)
            }
        }
    }
}

impl std::error::Error for EncodeError {}
