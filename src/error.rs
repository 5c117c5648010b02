//! Error types for verse analysis.

use std::fmt;

/// Result type alias for verse analysis operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for verse analysis operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error {
    /// The input tokenized to zero words; there is no verse to analyze.
    EmptyVerse,
    /// Fewer than 13 vowel nuclei: not a hexameter candidate.
    TooFewSyllables { count: usize },
    /// More than 17 vowel nuclei: not a hexameter candidate.
    TooManySyllables { count: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyVerse => write!(f, "empty verse"),
            Self::TooFewSyllables { count } => {
                write!(f, "too few syllables: {count} (a hexameter has at least 13)")
            }
            Self::TooManySyllables { count } => {
                write!(f, "too many syllables: {count} (a hexameter has at most 17)")
            }
        }
    }
}

impl std::error::Error for Error {}
