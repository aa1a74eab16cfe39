//! Kino Playback
//!
//! Owns at most one active player engine and migrates playback between
//! backend implementations without leaking resources.
//!
//! This crate provides:
//! - [`PlaybackSwitcher`] - release-old-then-create-new engine switching
//! - Render surface attach/detach across the surface lifecycle
//! - A cancellable state-observer task feeding a [`ProgressSink`]
//! - A small plugin system receiving every state snapshot
//!
//! # Architecture
//!
//! `kino-playback` is backend-agnostic: engines are reached only through the
//! `kino_core::PlayerEngine` trait and constructed through an
//! `kino_core::EngineFactory`. The UI-affine execution context is abstracted
//! by the [`ProgressSink`] implementation.
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use kino_core::{EngineConfig, EngineFactory};
//! use kino_playback::{PlaybackSwitcher, TracingProgressSink};
//!
//! # fn factory() -> Box<dyn EngineFactory> { unimplemented!() }
//! # async fn run() -> kino_core::Result<()> {
//! let mut switcher = PlaybackSwitcher::new(factory(), Arc::new(TracingProgressSink));
//! switcher.start_playback(&EngineConfig::native(), "https://example.com/movie.mp4")?;
//! // later, swap the backend under the same surface
//! switcher.start_playback(&EngineConfig::embedded(), "https://example.com/movie.mp4")?;
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod plugin;
mod sink;
mod switcher;

// Public exports
pub use kino_core::{KinoError, Result};
pub use plugin::PlayerPlugin;
pub use sink::{ProgressSink, TracingProgressSink};
pub use switcher::{PlaybackSwitcher, PluginId};
