//! Engine factory keyed by config variant

use tracing::debug;

use kino_core::{EngineConfig, EngineFactory, KinoError, PlayerEngine, Result};

use crate::sim::SimulatedEngine;

/// Default simulated media duration (one hour)
const DEFAULT_MEDIA_DURATION_MS: u64 = 3_600_000;

/// Factory producing [`SimulatedEngine`] instances
///
/// Dispatches on the [`EngineConfig`] variant the way a platform factory
/// dispatches on backend type. Embedded configs are validated here so that
/// construction failure is a real, observable path.
#[derive(Debug, Clone)]
pub struct SimulatedEngineFactory {
    media_duration_ms: u64,
}

impl Default for SimulatedEngineFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl SimulatedEngineFactory {
    /// Factory with the default simulated media duration
    pub fn new() -> Self {
        Self {
            media_duration_ms: DEFAULT_MEDIA_DURATION_MS,
        }
    }

    /// Factory whose engines report the given media duration
    pub fn with_media_duration(media_duration_ms: u64) -> Self {
        Self { media_duration_ms }
    }
}

impl EngineFactory for SimulatedEngineFactory {
    fn create(&self, config: &EngineConfig) -> Result<Box<dyn PlayerEngine>> {
        let kind = config.kind();
        match config {
            EngineConfig::Native(native) => {
                debug!(secure = native.secure_decoding, "creating native engine");
            }
            EngineConfig::Embedded(embedded) => {
                // A configured directory must exist; the backend cannot
                // create it itself.
                for dir in [&embedded.config_dir, &embedded.cache_dir]
                    .into_iter()
                    .flatten()
                {
                    if !dir.is_dir() {
                        return Err(KinoError::backend_construction(
                            kind,
                            format!("directory not found: {}", dir.display()),
                        ));
                    }
                }
                debug!(hwdec = %embedded.hwdec_profile, "creating embedded engine");
            }
        }
        Ok(Box::new(SimulatedEngine::new(kind, self.media_duration_ms)))
    }
}
