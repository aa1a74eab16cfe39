//! Core domain types
//!
//! Engine selection configs, the playback state snapshot, and the opaque
//! render-target handle shared by all backends.

use std::collections::HashMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Engine backend selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EngineKind {
    /// Platform-native player backend
    Native,
    /// Embedded media-player backend
    Embedded,
}

impl EngineKind {
    /// Get human-readable name of the backend
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Native => "native",
            Self::Embedded => "embedded",
        }
    }
}

impl std::fmt::Display for EngineKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Configuration for the platform-native backend
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NativeEngineConfig {
    /// Whether to request the secure decoding path
    pub secure_decoding: bool,
    /// Custom headers for network media requests
    pub custom_headers: Option<HashMap<String, String>>,
}

/// Configuration for the embedded media-player backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbeddedEngineConfig {
    /// Directory holding the backend's own config files
    pub config_dir: Option<PathBuf>,
    /// Directory for the backend's media cache
    pub cache_dir: Option<PathBuf>,
    /// Hardware decoding profile, e.g. "auto" or "auto-copy"
    pub hwdec_profile: String,
}

impl Default for EmbeddedEngineConfig {
    fn default() -> Self {
        Self {
            config_dir: None,
            cache_dir: None,
            hwdec_profile: "auto".to_string(),
        }
    }
}

/// Engine configuration, keyed by backend variant
///
/// The variant selects which backend implementation a factory instantiates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "engine", rename_all = "lowercase")]
pub enum EngineConfig {
    /// Platform-native backend configuration
    Native(NativeEngineConfig),
    /// Embedded backend configuration
    Embedded(EmbeddedEngineConfig),
}

impl EngineConfig {
    /// Which backend this config selects
    pub fn kind(&self) -> EngineKind {
        match self {
            Self::Native(_) => EngineKind::Native,
            Self::Embedded(_) => EngineKind::Embedded,
        }
    }

    /// Native backend with default settings
    pub fn native() -> Self {
        Self::Native(NativeEngineConfig::default())
    }

    /// Embedded backend with default settings
    pub fn embedded() -> Self {
        Self::Embedded(EmbeddedEngineConfig::default())
    }
}

/// Immutable snapshot of a player's observable state
///
/// Produced continuously by an engine on its state stream; safe for the UI
/// layer to observe and render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerState {
    /// Whether the engine is actively playing
    pub is_playing: bool,
    /// Whether the engine is still loading the media source
    pub is_loading: bool,
    /// Whether playback is stalled waiting for data
    pub is_buffering: bool,
    /// Current playback position in milliseconds (0 <= position <= duration)
    pub position_ms: u64,
    /// Total media duration in milliseconds (0 when unknown)
    pub duration_ms: u64,
    /// Whether playback reached the end of the media
    pub is_ended: bool,
    /// Last engine-reported error, if any
    pub error: Option<String>,
}

impl Default for PlayerState {
    fn default() -> Self {
        Self {
            is_playing: false,
            is_loading: true,
            is_buffering: false,
            position_ms: 0,
            duration_ms: 0,
            is_ended: false,
            error: None,
        }
    }
}

impl PlayerState {
    /// Snapshot with `position_ms` clamped into `[0, duration_ms]`
    pub fn with_position(mut self, position_ms: u64) -> Self {
        self.position_ms = position_ms.min(self.duration_ms);
        self
    }

    /// Playback progress as a fraction in `[0.0, 1.0]` (0.0 when duration unknown)
    pub fn progress(&self) -> f64 {
        if self.duration_ms == 0 {
            return 0.0;
        }
        self.position_ms as f64 / self.duration_ms as f64
    }
}

/// Opaque handle to a platform rendering surface
///
/// The playback layer never inspects it; it only attaches and detaches it on
/// the active engine. Equality is identity of the underlying surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RenderTarget(pub u64);

impl std::fmt::Display for RenderTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "surface#{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_kind_matches_variant() {
        assert_eq!(EngineConfig::native().kind(), EngineKind::Native);
        assert_eq!(EngineConfig::embedded().kind(), EngineKind::Embedded);
    }

    #[test]
    fn test_default_state_is_loading_not_playing() {
        let state = PlayerState::default();
        assert!(state.is_loading);
        assert!(!state.is_playing);
        assert_eq!(state.position_ms, 0);
        assert_eq!(state.duration_ms, 0);
    }

    #[test]
    fn test_position_clamped_to_duration() {
        let state = PlayerState {
            duration_ms: 1000,
            ..Default::default()
        };
        assert_eq!(state.clone().with_position(500).position_ms, 500);
        assert_eq!(state.with_position(5000).position_ms, 1000);
    }

    #[test]
    fn test_progress_fraction() {
        let state = PlayerState {
            duration_ms: 2000,
            position_ms: 500,
            ..Default::default()
        };
        assert!((state.progress() - 0.25).abs() < f64::EPSILON);
        assert_eq!(PlayerState::default().progress(), 0.0);
    }

    #[test]
    fn test_config_serde_round_trip() {
        let config = EngineConfig::Embedded(EmbeddedEngineConfig {
            config_dir: Some(PathBuf::from("/tmp/kino")),
            cache_dir: None,
            hwdec_profile: "auto-copy".to_string(),
        });
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"engine\":\"embedded\""));
        let back: EngineConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
