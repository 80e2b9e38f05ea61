//! Error types for question building.

use thiserror::Error;

/// Errors raised by the distractor generator and question-set builders.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    /// The level configuration is degenerate (zero questions, fewer than two
    /// options, ...). Rejected before any sampling happens.
    #[error("Invalid level configuration: {reason}")]
    InvalidConfig { reason: String },

    /// The corpus cannot supply as many distinct candidates as requested.
    #[error("Not enough {what}: requested {requested}, available {available}")]
    InsufficientPool {
        what: &'static str,
        requested: usize,
        available: usize,
    },

    /// Nothing could be built at all (e.g. no verse has a blankable word).
    #[error("No questions could be built for {mode}")]
    EmptyQuestionSet { mode: String },

    #[error("Unknown game mode: {0}")]
    UnknownMode(String),

    #[error("Unknown level {level} for game mode {mode}")]
    UnknownLevel { mode: String, level: String },
}

impl GameError {
    /// Creates a new invalid configuration error.
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            reason: reason.into(),
        }
    }

    /// Creates a new insufficient pool error.
    pub fn insufficient(what: &'static str, requested: usize, available: usize) -> Self {
        Self::InsufficientPool {
            what,
            requested,
            available,
        }
    }

    /// Whether the caller supplied a bad request (as opposed to the corpus
    /// being unable to satisfy a valid one).
    pub fn is_caller_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidConfig { .. } | Self::UnknownMode(_) | Self::UnknownLevel { .. }
        )
    }
}
