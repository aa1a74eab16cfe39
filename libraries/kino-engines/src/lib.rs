//! Kino Engines
//!
//! Clock-driven simulated backends implementing the [`kino_core::PlayerEngine`]
//! trait. They model the backend lifecycle only (prepare/play/pause/seek/
//! release plus a continuously emitted state stream); no media is decoded or
//! rendered.
//!
//! # Example
//!
//! ```rust,no_run
//! use kino_core::{EngineConfig, EngineFactory};
//! use kino_engines::SimulatedEngineFactory;
//!
//! let factory = SimulatedEngineFactory::new();
//! let mut engine = factory.create(&EngineConfig::native()).unwrap();
//! engine.prepare("https://example.com/movie.mp4").unwrap();
//! engine.play();
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod factory;
mod sim;

pub use factory::SimulatedEngineFactory;
pub use sim::SimulatedEngine;
