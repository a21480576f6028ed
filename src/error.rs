//! Error types for the tic-tac-toe crate

use thiserror::Error;

/// Main error type for the tic-tac-toe crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid move: position {position} is already occupied")]
    InvalidMove { position: usize },

    #[error("position {position} is out of bounds (must be 1-9)")]
    InvalidPosition { position: i64 },

    #[error("invalid input '{input}': expected a number from 1 to 9")]
    InvalidInput { input: String },

    #[error("game already over")]
    GameOver,

    #[error("no valid moves available")]
    NoValidMoves,

    #[error("input stream closed while waiting for {prompt}")]
    InputClosed { prompt: String },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Whether the error comes from a bad move attempt that the caller should
    /// answer by prompting again.
    pub fn is_recoverable_input(&self) -> bool {
        matches!(
            self,
            Error::InvalidMove { .. } | Error::InvalidPosition { .. } | Error::InvalidInput { .. }
        )
    }

    pub(crate) fn io(operation: impl Into<String>, source: std::io::Error) -> Self {
        Error::Io {
            operation: operation.into(),
            source,
        }
    }
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "IO operation".to_string(),
            source,
        }
    }
}
