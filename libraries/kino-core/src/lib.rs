//! Kino Core
//!
//! Platform-agnostic core types, traits, and error handling for Kino.
//!
//! This crate provides the foundational building blocks used by every
//! engine backend and by the playback layer:
//! - **Domain Types**: `EngineConfig`, `PlayerState`, `RenderTarget`
//! - **Core Traits**: `PlayerEngine`, `EngineFactory`
//! - **Error Handling**: Unified `KinoError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use kino_core::{EngineConfig, EngineKind, NativeEngineConfig, PlayerState};
//!
//! let config = EngineConfig::Native(NativeEngineConfig::default());
//! assert_eq!(config.kind(), EngineKind::Native);
//!
//! let state = PlayerState::default();
//! assert!(state.is_loading);
//! assert!(!state.is_playing);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use error::{KinoError, Result};
pub use traits::{EngineFactory, PlayerEngine, StateReceiver};
pub use types::{
    EmbeddedEngineConfig, EngineConfig, EngineKind, NativeEngineConfig, PlayerState, RenderTarget,
};
