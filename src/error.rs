//! Error taxonomy shared by the codec, filter and selector

use std::fmt;

/// Errors raised by the library
///
/// Malformed input (`InvalidLength`, `InvalidCharacter`, `InvalidClue`) is
/// rejected at the boundary. The remaining variants mean the session itself is
/// broken and are not retried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordleError {
    InvalidLength { expected: usize, found: usize },
    InvalidCharacter { character: char, position: usize },
    InvalidClue { input: String, reason: String },
    EmptyVocabulary,
    EmptyCandidateSet,
    WorkerFailed { chunk: usize, message: String },
    WorkerPool(String),
}

impl fmt::Display for WordleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength { expected, found } => {
                write!(f, "Word must be exactly {expected} letters, got {found}")
            }
            Self::InvalidCharacter {
                character,
                position,
            } => write!(
                f,
                "Invalid character {character:?} at position {position} (expected a-z)"
            ),
            Self::InvalidClue { input, reason } => write!(f, "Invalid clue {input:?}: {reason}"),
            Self::EmptyVocabulary => write!(f, "Guess vocabulary is empty"),
            Self::EmptyCandidateSet => write!(f, "No candidate solutions remain"),
            Self::WorkerFailed { chunk, message } => {
                write!(f, "Scoring worker for chunk {chunk} failed: {message}")
            }
            Self::WorkerPool(message) => write!(f, "Could not start worker pool: {message}"),
        }
    }
}

impl std::error::Error for WordleError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        let err = WordleError::InvalidLength {
            expected: 5,
            found: 3,
        };
        assert_eq!(err.to_string(), "Word must be exactly 5 letters, got 3");

        let err = WordleError::InvalidCharacter {
            character: '3',
            position: 4,
        };
        assert!(err.to_string().contains("position 4"));

        let err = WordleError::InvalidClue {
            input: "ggq".into(),
            reason: "bad symbol".into(),
        };
        assert_eq!(err.to_string(), "Invalid clue \"ggq\": bad symbol");
    }
}
