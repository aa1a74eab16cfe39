//! Simulated player engine
//!
//! A backend instance with the full lifecycle of a real player but a fake
//! media clock: `play` runs a tokio task that advances the position until
//! the simulated duration is reached.

use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{interval, Duration};
use tracing::{debug, trace};

use kino_core::{EngineKind, KinoError, PlayerEngine, PlayerState, RenderTarget, Result};

/// How far the media clock advances per tick, in milliseconds
const CLOCK_TICK_MS: u64 = 100;

/// Simulated player engine
///
/// Lifecycle: uninitialized -> prepared -> playing/paused -> released.
/// Every transition is published on the state stream.
pub struct SimulatedEngine {
    kind: EngineKind,
    media_duration_ms: u64,
    tx: Arc<watch::Sender<PlayerState>>,
    render_target: Option<RenderTarget>,
    clock: Option<JoinHandle<()>>,
    speed: Arc<Mutex<f32>>,
    prepared: bool,
    released: bool,
}

impl SimulatedEngine {
    /// Create an unprepared engine of the given backend kind
    ///
    /// `media_duration_ms` is the duration every prepared source reports.
    pub fn new(kind: EngineKind, media_duration_ms: u64) -> Self {
        let (tx, _rx) = watch::channel(PlayerState::default());
        Self {
            kind,
            media_duration_ms,
            tx: Arc::new(tx),
            render_target: None,
            clock: None,
            speed: Arc::new(Mutex::new(1.0)),
            prepared: false,
            released: false,
        }
    }

    /// Backend kind this engine simulates
    pub fn kind(&self) -> EngineKind {
        self.kind
    }

    fn stop_clock(&mut self) {
        if let Some(clock) = self.clock.take() {
            clock.abort();
        }
    }

    fn start_clock(&mut self) {
        // One clock at a time
        self.stop_clock();

        let tx = Arc::clone(&self.tx);
        let speed = Arc::clone(&self.speed);
        let duration_ms = self.media_duration_ms;

        self.clock = Some(tokio::spawn(async move {
            let mut ticker = interval(Duration::from_millis(CLOCK_TICK_MS));
            // First tick fires immediately; skip it so position starts moving
            // one tick after play.
            ticker.tick().await;
            loop {
                ticker.tick().await;
                let step = (CLOCK_TICK_MS as f32 * *speed.lock()) as u64;
                tx.send_modify(|state| {
                    if !state.is_playing {
                        return;
                    }
                    state.position_ms = (state.position_ms + step).min(duration_ms);
                    if state.position_ms >= duration_ms {
                        state.is_playing = false;
                        state.is_ended = true;
                    }
                });
                if tx.borrow().is_ended {
                    break;
                }
            }
        }));
    }
}

impl PlayerEngine for SimulatedEngine {
    fn state(&self) -> watch::Receiver<PlayerState> {
        self.tx.subscribe()
    }

    fn set_render_target(&mut self, target: Option<RenderTarget>) {
        trace!(engine = %self.kind, ?target, "render target updated");
        self.render_target = target;
    }

    fn render_target(&self) -> Option<RenderTarget> {
        self.render_target
    }

    fn prepare(&mut self, source: &str) -> Result<()> {
        if self.released {
            return Err(KinoError::invalid_state("prepare after release"));
        }
        if source.is_empty() {
            return Err(KinoError::invalid_input("empty media source"));
        }

        debug!(engine = %self.kind, source, "preparing media source");
        let duration_ms = self.media_duration_ms;
        self.tx.send_modify(|state| {
            *state = PlayerState {
                duration_ms,
                is_loading: false,
                ..PlayerState::default()
            };
        });
        self.prepared = true;
        Ok(())
    }

    fn play(&mut self) {
        if self.released || !self.prepared {
            trace!(engine = %self.kind, "play ignored, engine not prepared");
            return;
        }
        debug!(engine = %self.kind, "play");
        self.tx.send_modify(|state| {
            state.is_playing = true;
            state.is_ended = false;
        });
        // A finished clock task may still occupy the slot; always restart.
        self.start_clock();
    }

    fn pause(&mut self) {
        if self.released {
            return;
        }
        debug!(engine = %self.kind, "pause");
        self.stop_clock();
        self.tx.send_modify(|state| state.is_playing = false);
    }

    fn seek_to(&mut self, position_ms: u64) {
        if self.released || !self.prepared {
            return;
        }
        let duration_ms = self.media_duration_ms;
        trace!(engine = %self.kind, position_ms, "seek");
        self.tx.send_modify(|state| {
            state.position_ms = position_ms.min(duration_ms);
            state.is_ended = false;
        });
    }

    fn set_volume(&mut self, volume: f32) {
        trace!(engine = %self.kind, volume, "set volume");
    }

    fn set_speed(&mut self, speed: f32) {
        if speed > 0.0 {
            *self.speed.lock() = speed;
        }
    }

    fn release(&mut self) {
        if self.released {
            return;
        }
        debug!(engine = %self.kind, "release");
        self.stop_clock();
        self.tx.send_modify(|state| {
            state.is_playing = false;
        });
        self.prepared = false;
        self.released = true;
    }
}

impl Drop for SimulatedEngine {
    fn drop(&mut self) {
        self.stop_clock();
    }
}
