//! Application configuration module
//!
//! This module handles viewer settings (camera rig behaviour) and the part
//! metadata service endpoint.

mod manager;

pub use manager::{ConfigError, ConfigManager, SharedConfig, create_shared_config};

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Camera rig and viewport preferences
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ViewerConfig {
    /// How long the camera animates toward a focus target before it is cleared
    pub focus_settle_ms: u64,
    /// Per-frame interpolation factor of the orbit target
    pub target_lerp: f32,
    /// Per-frame interpolation factor of the camera position
    pub position_lerp: f32,
    /// Camera offset from the focused point
    pub camera_offset: [f32; 3],
    /// Camera position when a session opens
    pub initial_camera: [f32; 3],
    /// Frame duration used when replaying scripts
    pub frame_ms: u64,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            focus_settle_ms: 1000,
            target_lerp: 0.1,
            position_lerp: 0.05,
            camera_offset: [0.5, 0.5, 0.5],
            initial_camera: [0.8, 0.8, 0.8],
            frame_ms: 16,
        }
    }
}

impl ViewerConfig {
    pub fn focus_settle(&self) -> Duration {
        Duration::from_millis(self.focus_settle_ms)
    }

    pub fn frame_duration(&self) -> Duration {
        Duration::from_millis(self.frame_ms.max(1))
    }
}

/// Part metadata service settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MetadataConfig {
    /// Query the remote service at all
    pub enabled: bool,
    /// Base URL; parts are fetched from `{base_url}/parts/{id}`
    pub base_url: String,
    /// Global request timeout
    pub timeout_ms: u64,
}

impl Default for MetadataConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            base_url: "http://localhost:8080/api".to_string(),
            timeout_ms: 2000,
        }
    }
}

impl MetadataConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

/// Complete application configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct AppConfig {
    /// Configuration format version
    #[serde(default)]
    pub version: u32,
    /// Viewer settings
    #[serde(default)]
    pub viewer: ViewerConfig,
    /// Metadata service settings
    #[serde(default)]
    pub metadata: MetadataConfig,
}

impl AppConfig {
    /// Current configuration version
    pub const CURRENT_VERSION: u32 = 1;

    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self {
            version: Self::CURRENT_VERSION,
            ..Default::default()
        }
    }
}
