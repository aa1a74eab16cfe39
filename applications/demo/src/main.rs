//! Kino demo - headless walkthrough of both flows
//!
//! Plays a simulated movie on the native backend, hot-swaps to the embedded
//! backend under the same surface, then drives the tab shell through its
//! update scenarios.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use kino_core::{EngineConfig, RenderTarget};
use kino_engines::SimulatedEngineFactory;
use kino_playback::{PlaybackSwitcher, TracingProgressSink};
use kino_shell::{
    SharedTabCoordinator, TabId, TabUpdateCoordinator, TracingRenderer, UpdateCallbacks,
};

const MOVIE_URL: &str = "https://example.com/media/demo-movie.mp4";

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            "kino_demo=info,kino_playback=debug,kino_engines=debug,kino_shell=debug".into()
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    run_playback_flow().await?;
    run_shell_flow().await;
    Ok(())
}

async fn run_playback_flow() -> Result<()> {
    info!("=== playback: backend switching ===");

    let factory = SimulatedEngineFactory::with_media_duration(30_000);
    let mut switcher = PlaybackSwitcher::new(Box::new(factory), Arc::new(TracingProgressSink));

    // The platform tells us the surface is ready before playback starts.
    switcher.on_render_surface_available(RenderTarget(1));

    info!("starting on the native backend");
    switcher.start_playback(&EngineConfig::native(), MOVIE_URL)?;
    tokio::time::sleep(Duration::from_millis(600)).await;
    info!(
        position_ms = switcher.position_ms(),
        duration_ms = switcher.duration_ms(),
        "native backend playing"
    );

    info!("hot-swapping to the embedded backend");
    switcher.start_playback(&EngineConfig::embedded(), MOVIE_URL)?;
    switcher.seek_to(10_000);
    tokio::time::sleep(Duration::from_millis(400)).await;

    switcher.pause();
    info!(position_ms = switcher.position_ms(), "paused");
    switcher.resume();
    tokio::time::sleep(Duration::from_millis(200)).await;

    // Surface teardown, e.g. the window going to the background.
    switcher.on_render_surface_destroyed();
    switcher.release_current();
    info!("playback flow done");
    Ok(())
}

async fn run_shell_flow() {
    info!("=== shell: tab update coordination ===");

    let coordinator = TabUpdateCoordinator::new(Box::new(TracingRenderer));
    let shared = SharedTabCoordinator::new(coordinator);

    shared.set_callbacks(
        TabId::TabA,
        UpdateCallbacks::new()
            .with_pre(|| info!("tab-a pre: saving state, showing spinner"))
            .with_custom(|| info!("tab-a custom: verifying data, running animations"))
            .with_post(|| info!("tab-a post: hiding spinner, notifying peers")),
    );
    shared.set_callbacks(
        TabId::TabB,
        UpdateCallbacks::new()
            .with_pre(|| info!("tab-b pre: clearing cache"))
            .with_custom(|| info!("tab-b custom: reloading list, recomputing layout"))
            .with_post(|| info!("tab-b post: updating cache, logging")),
    );

    shared.switch_tab(TabId::TabA);
    shared.request_update("data-refresh");

    shared.switch_tab(TabId::TabB);
    shared.request_update("list-update");

    info!("--- delayed update ---");
    shared.request_delayed_update(Duration::from_millis(100));
    tokio::time::sleep(Duration::from_millis(200)).await;

    info!("--- re-entrant burst (two rejections expected) ---");
    let reentrant = shared.clone();
    shared.set_callbacks(
        TabId::TabB,
        UpdateCallbacks::new().with_custom(move || {
            reentrant.request_update("rapid-2");
            reentrant.request_update("rapid-3");
        }),
    );
    shared.request_update("rapid-1");

    info!("shell flow done");
}
