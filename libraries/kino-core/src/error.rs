/// Core error types for Kino
use thiserror::Error;

use crate::types::EngineKind;

/// Result type alias using `KinoError`
pub type Result<T> = std::result::Result<T, KinoError>;

/// Core error type for Kino
#[derive(Error, Debug)]
pub enum KinoError {
    /// An engine backend could not be constructed from its config.
    ///
    /// Fatal to the switch attempt that requested it; the requester is
    /// expected to remain with no active engine.
    #[error("Backend construction failed for {kind}: {reason}")]
    BackendConstruction {
        /// Which backend variant failed to construct
        kind: EngineKind,
        /// Human-readable failure reason
        reason: String,
    },

    /// The requested backend is not available in this build or environment
    #[error("Engine backend unavailable: {0}")]
    EngineUnavailable(&'static str),

    /// An operation was issued against an engine in the wrong lifecycle state
    #[error("Invalid engine state: {0}")]
    InvalidState(String),

    /// Engine-reported runtime error
    #[error("Engine error: {0}")]
    Engine(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// I/O errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    /// Other errors
    #[error("{0}")]
    Other(String),
}

impl KinoError {
    /// Create a backend construction error
    pub fn backend_construction(kind: EngineKind, reason: impl Into<String>) -> Self {
        Self::BackendConstruction {
            kind,
            reason: reason.into(),
        }
    }

    /// Create an invalid state error
    pub fn invalid_state(msg: impl Into<String>) -> Self {
        Self::InvalidState(msg.into())
    }

    /// Create an engine error
    pub fn engine(msg: impl Into<String>) -> Self {
        Self::Engine(msg.into())
    }

    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}
