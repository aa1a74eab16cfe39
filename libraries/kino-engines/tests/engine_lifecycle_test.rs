//! Integration tests for the simulated engines
//!
//! Exercises engines strictly through the `PlayerEngine` trait object, the
//! way the playback layer consumes them.

use kino_core::{EngineConfig, EngineFactory, PlayerEngine, RenderTarget};
use kino_engines::SimulatedEngineFactory;
use std::time::Duration;

#[tokio::test(start_paused = true)]
async fn full_lifecycle_through_trait_object() {
    let factory = SimulatedEngineFactory::with_media_duration(10_000);
    let mut engine: Box<dyn PlayerEngine> = factory.create(&EngineConfig::native()).unwrap();

    let mut rx = engine.state();
    assert!(rx.borrow().is_loading);

    engine.set_render_target(Some(RenderTarget(7)));
    assert_eq!(engine.render_target(), Some(RenderTarget(7)));

    engine.prepare("https://example.com/movie.mp4").unwrap();
    engine.play();

    // Wait for the first clock emission.
    rx.changed().await.unwrap();
    tokio::time::sleep(Duration::from_millis(300)).await;
    let state = rx.borrow_and_update().clone();
    assert!(state.is_playing);
    assert!(state.position_ms > 0);
    assert_eq!(state.duration_ms, 10_000);

    engine.set_render_target(None);
    assert_eq!(engine.render_target(), None);

    engine.release();
    assert!(!rx.borrow().is_playing);
}

#[tokio::test(start_paused = true)]
async fn speed_scales_clock_advance() {
    let factory = SimulatedEngineFactory::with_media_duration(600_000);
    let mut engine = factory.create(&EngineConfig::embedded()).unwrap();
    engine.prepare("file:///movie.mkv").unwrap();
    engine.set_speed(2.0);
    engine.play();

    let rx = engine.state();
    tokio::time::sleep(Duration::from_millis(1050)).await;
    let position = rx.borrow().position_ms;
    // 10 ticks at 2x speed cover ~2000ms of media time.
    assert!(
        position >= 1800,
        "expected roughly double advance, got {position}"
    );
}

#[tokio::test]
async fn pause_before_prepare_is_harmless() {
    let factory = SimulatedEngineFactory::new();
    let mut engine = factory.create(&EngineConfig::native()).unwrap();
    engine.pause();
    engine.play();
    assert!(!engine.state().borrow().is_playing);
}
