/// Core traits for Kino
use tokio::sync::watch;

use crate::error::Result;
use crate::types::{EngineConfig, PlayerState, RenderTarget};

/// Receiver half of an engine's state stream
///
/// Each engine owns the sender; any number of receivers may exist, but the
/// playback layer keeps exactly one active observer per engine lifetime.
pub type StateReceiver = watch::Receiver<PlayerState>;

/// Player engine trait
///
/// Implementers wrap one backend instance with an explicit lifecycle:
/// uninitialized -> prepared -> playing/paused -> released. After `release`
/// the instance is unusable; the owner is expected to drop it.
pub trait PlayerEngine: Send {
    /// Subscribe to the engine's state stream
    ///
    /// The returned receiver always holds the latest [`PlayerState`]
    /// snapshot and wakes on every change.
    fn state(&self) -> StateReceiver;

    /// Attach, replace, or remove the video render target
    ///
    /// Pass `None` to detach. Must be called with `None` before the
    /// underlying surface is invalidated.
    fn set_render_target(&mut self, target: Option<RenderTarget>);

    /// Currently attached render target, if any
    fn render_target(&self) -> Option<RenderTarget>;

    /// Prepare the media source for playback
    ///
    /// The engine starts loading the media; the state stream reports
    /// `is_loading` until the source is ready.
    ///
    /// # Errors
    /// Returns an error if the engine was already released or the source is
    /// rejected by the backend.
    fn prepare(&mut self, source: &str) -> Result<()>;

    /// Start or resume playback
    fn play(&mut self);

    /// Pause playback
    fn pause(&mut self);

    /// Seek to a position in milliseconds
    ///
    /// Positions past the end of the media are clamped to the duration.
    fn seek_to(&mut self, position_ms: u64);

    /// Set the volume (0.0 = silent, 1.0 = full volume)
    fn set_volume(&mut self, volume: f32);

    /// Set the playback speed multiplier (1.0 = normal)
    fn set_speed(&mut self, speed: f32);

    /// Release all backend resources
    ///
    /// Idempotent. After this call the engine instance is unusable.
    fn release(&mut self);
}

/// Engine factory trait
///
/// Implementers construct a backend instance keyed by the config's variant.
pub trait EngineFactory: Send + Sync {
    /// Create a new engine for `config`
    ///
    /// # Errors
    /// Returns [`crate::KinoError::BackendConstruction`] when the selected
    /// backend cannot be instantiated. The caller must not retain any
    /// partially constructed engine.
    fn create(&self, config: &EngineConfig) -> Result<Box<dyn PlayerEngine>>;
}
