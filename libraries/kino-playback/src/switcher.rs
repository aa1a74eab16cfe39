//! Playback switcher - core orchestration
//!
//! Maintains a single active engine handle, swaps backends on demand, and
//! owns the state-observer task for exactly one engine lifetime.

use std::sync::Arc;

use parking_lot::Mutex;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use kino_core::{
    EngineConfig, EngineFactory, PlayerEngine, PlayerState, RenderTarget, Result, StateReceiver,
};

use crate::plugin::PlayerPlugin;
use crate::sink::ProgressSink;

type PluginList = Arc<Mutex<Vec<(PluginId, Box<dyn PlayerPlugin>)>>>;

/// Handle identifying an installed plugin
///
/// Returned by [`PlaybackSwitcher::add_plugin`]; pass it back to
/// [`PlaybackSwitcher::remove_plugin`] to uninstall that plugin alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PluginId(u64);

/// Playback switcher
///
/// Owns at most one engine handle at any time. Switching is always
/// release-old-then-create-new, never concurrent. The render target survives
/// switches: whatever surface is currently valid is attached to every newly
/// created engine.
pub struct PlaybackSwitcher {
    factory: Box<dyn EngineFactory>,
    engine: Option<Box<dyn PlayerEngine>>,
    surface: Option<RenderTarget>,

    // State observation - one task per engine lifetime
    observer: Option<JoinHandle<()>>,
    latest: Option<StateReceiver>,

    sink: Arc<dyn ProgressSink>,
    plugins: PluginList,
    next_plugin_id: u64,
}

impl PlaybackSwitcher {
    /// Create a switcher with no active engine
    pub fn new(factory: Box<dyn EngineFactory>, sink: Arc<dyn ProgressSink>) -> Self {
        Self {
            factory,
            engine: None,
            surface: None,
            observer: None,
            latest: None,
            sink,
            plugins: Arc::new(Mutex::new(Vec::new())),
            next_plugin_id: 0,
        }
    }

    // ===== Switching =====

    /// Release the current engine and start playback on a freshly
    /// constructed one selected by `config`
    ///
    /// Sequence: release old -> create new -> attach surface (if valid) ->
    /// prepare -> subscribe state -> play.
    ///
    /// # Errors
    /// Backend construction or prepare failure is fatal to this switch
    /// attempt; the switcher is left with no active engine.
    pub fn start_playback(&mut self, config: &EngineConfig, source: &str) -> Result<()> {
        self.release_current();

        debug!(backend = %config.kind(), source, "starting playback");
        let mut engine = self.factory.create(config)?;

        if let Some(surface) = self.surface {
            engine.set_render_target(Some(surface));
        }
        if let Err(err) = engine.prepare(source) {
            warn!(backend = %config.kind(), %err, "prepare failed, discarding engine");
            engine.release();
            return Err(err);
        }
        // Subscribe before the first play so the observer is bound for
        // every emission the play triggers.
        let rx = engine.state();
        self.latest = Some(rx.clone());
        self.observe_state(rx);

        engine.play();
        self.engine = Some(engine);
        Ok(())
    }

    /// Cancel the state subscription, release the active engine, and clear
    /// the handle
    ///
    /// Idempotent and safe to call with no active engine.
    pub fn release_current(&mut self) {
        self.cancel_observer();
        self.latest = None;
        if let Some(mut engine) = self.engine.take() {
            engine.release();
            debug!("current engine released");
        }
    }

    // ===== Render surface lifecycle =====

    /// A render surface became valid; attach it to the active engine
    ///
    /// The surface is remembered and re-attached to every engine created by
    /// later switches. Idempotent.
    pub fn on_render_surface_available(&mut self, target: RenderTarget) {
        self.surface = Some(target);
        if let Some(engine) = self.engine.as_mut() {
            engine.set_render_target(Some(target));
        }
    }

    /// The render surface is about to be invalidated; detach it
    ///
    /// No-op when no engine is active.
    pub fn on_render_surface_destroyed(&mut self) {
        self.surface = None;
        if let Some(engine) = self.engine.as_mut() {
            engine.set_render_target(None);
        }
    }

    /// Render target attached to the active engine, if any
    pub fn active_render_target(&self) -> Option<RenderTarget> {
        self.engine.as_ref().and_then(|engine| engine.render_target())
    }

    // ===== Forwarded controls =====

    /// Pause the active engine; no-op otherwise
    pub fn pause(&mut self) {
        if let Some(engine) = self.engine.as_mut() {
            engine.pause();
        }
    }

    /// Resume the active engine; no-op otherwise
    pub fn resume(&mut self) {
        if let Some(engine) = self.engine.as_mut() {
            engine.play();
        }
    }

    /// Seek the active engine to `position_ms`; no-op otherwise
    pub fn seek_to(&mut self, position_ms: u64) {
        if let Some(engine) = self.engine.as_mut() {
            engine.seek_to(position_ms);
        }
    }

    /// Set volume on the active engine; no-op otherwise
    pub fn set_volume(&mut self, volume: f32) {
        if let Some(engine) = self.engine.as_mut() {
            engine.set_volume(volume);
        }
    }

    /// Set playback speed on the active engine; no-op otherwise
    pub fn set_speed(&mut self, speed: f32) {
        if let Some(engine) = self.engine.as_mut() {
            engine.set_speed(speed);
        }
    }

    // ===== State queries =====

    /// Whether an engine is currently active
    pub fn has_active_engine(&self) -> bool {
        self.engine.is_some()
    }

    /// Latest state snapshot of the active engine
    pub fn current_state(&self) -> Option<PlayerState> {
        self.latest.as_ref().map(|rx| rx.borrow().clone())
    }

    /// Whether the active engine reports playing
    pub fn is_playing(&self) -> bool {
        self.current_state().is_some_and(|state| state.is_playing)
    }

    /// Current position of the active engine in milliseconds
    pub fn position_ms(&self) -> u64 {
        self.current_state().map_or(0, |state| state.position_ms)
    }

    /// Duration of the active media in milliseconds
    pub fn duration_ms(&self) -> u64 {
        self.current_state().map_or(0, |state| state.duration_ms)
    }

    // ===== Plugins =====

    /// Install a plugin; it receives every state emission from now on
    pub fn add_plugin(&mut self, mut plugin: Box<dyn PlayerPlugin>) -> PluginId {
        let id = PluginId(self.next_plugin_id);
        self.next_plugin_id += 1;
        plugin.on_install();
        self.plugins.lock().push((id, plugin));
        id
    }

    /// Uninstall the plugin identified by `id`
    ///
    /// Returns `false` when no such plugin is installed.
    pub fn remove_plugin(&mut self, id: PluginId) -> bool {
        let mut plugins = self.plugins.lock();
        let Some(index) = plugins.iter().position(|(installed, _)| *installed == id) else {
            return false;
        };
        plugins[index].1.on_uninstall();
        plugins.remove(index);
        true
    }

    /// Uninstall all plugins
    pub fn clear_plugins(&mut self) {
        let mut plugins = self.plugins.lock();
        for (_, plugin) in plugins.iter_mut() {
            plugin.on_uninstall();
        }
        plugins.clear();
    }

    // ===== Observation =====

    /// Cancel any prior subscription and observe `rx` until the engine goes
    /// away or the next switch
    fn observe_state(&mut self, mut rx: StateReceiver) {
        self.cancel_observer();

        let sink = Arc::clone(&self.sink);
        let plugins = Arc::clone(&self.plugins);
        self.observer = Some(tokio::spawn(async move {
            // Deliver the current snapshot first, then every change.
            loop {
                let state = rx.borrow_and_update().clone();
                sink.set_progress(state.duration_ms, state.position_ms);
                for (_, plugin) in plugins.lock().iter_mut() {
                    plugin.on_state_changed(&state);
                }
                if rx.changed().await.is_err() {
                    break;
                }
            }
        }));
    }

    fn cancel_observer(&mut self) {
        if let Some(observer) = self.observer.take() {
            observer.abort();
        }
    }
}

impl Drop for PlaybackSwitcher {
    fn drop(&mut self) {
        self.release_current();
        self.clear_plugins();
    }
}
