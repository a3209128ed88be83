//! Harness settings with persistence
//!
//! Settings are saved to `~/.config/infinitylib/settings.toml`

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use infinitylib_camera::CameraConfig;
use infinitylib_core::TimeConfig;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// All harness settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub camera: CameraConfig,
    pub time: TimeConfig,
    pub simulation: SimulationSettings,
}

impl Settings {
    /// Get the config directory path
    fn config_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("infinitylib"))
    }

    /// Get the settings file path
    fn settings_path() -> Option<PathBuf> {
        Self::config_dir().map(|p| p.join("settings.toml"))
    }

    /// Load settings from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = Self::settings_path() else {
            warn!("Could not determine config directory");
            return Self::default();
        };

        if !path.exists() {
            info!("No settings file found, using defaults");
            return Self::default();
        }

        match fs::read_to_string(&path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(settings) => {
                    info!("Loaded settings from {:?}", path);
                    settings
                }
                Err(e) => {
                    warn!("Failed to parse settings: {}, using defaults", e);
                    Self::default()
                }
            },
            Err(e) => {
                warn!("Failed to read settings file: {}, using defaults", e);
                Self::default()
            }
        }
    }

    /// Save settings to disk
    pub fn save(&self) -> anyhow::Result<()> {
        let Some(dir) = Self::config_dir() else {
            anyhow::bail!("Could not determine config directory");
        };

        let path = dir.join("settings.toml");

        // Create config directory if it doesn't exist
        if !dir.exists() {
            fs::create_dir_all(&dir)?;
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(&path, content)?;
        info!("Saved settings to {:?}", path);
        Ok(())
    }

    /// Reject settings the simulation cannot run with
    pub fn validate(&self) -> anyhow::Result<()> {
        self.camera.validate().context("Invalid camera settings")?;
        self.time.validate().context("Invalid time settings")?;
        self.simulation
            .validate()
            .context("Invalid simulation settings")?;
        Ok(())
    }
}

/// Parameters of the scripted observation run
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationSettings {
    /// Ticks the camera takes to fly out and back
    pub transition_ticks: u32,
    /// Ticks spent orbiting the observed subject
    pub observe_ticks: u32,
    /// Wall-clock seconds per rendered frame
    pub frame_delta: f32,
    /// Give up after this many frames
    pub max_frames: u32,
    /// Orbit radius around the observed subject, in blocks
    pub orbit_radius: f64,
    /// Orbit height above the observed subject's eyes
    pub orbit_height: f64,
    /// Orbit angular speed in degrees per tick
    pub orbit_speed: f32,
    /// Player walking speed in blocks per tick
    pub player_speed: f64,
}

impl Default for SimulationSettings {
    fn default() -> Self {
        Self {
            transition_ticks: 40,
            observe_ticks: 100,
            frame_delta: 1.0 / 60.0,
            max_frames: 100_000,
            orbit_radius: 6.0,
            orbit_height: 3.0,
            orbit_speed: 3.0,
            player_speed: 0.1,
        }
    }
}

impl SimulationSettings {
    fn validate(&self) -> anyhow::Result<()> {
        if self.transition_ticks == 0 {
            anyhow::bail!("transition_ticks must be at least 1");
        }
        if self.frame_delta.is_nan() || self.frame_delta <= 0.0 {
            anyhow::bail!("frame_delta must be positive, got {}", self.frame_delta);
        }
        if self.orbit_radius.is_nan() || self.orbit_radius <= 0.0 {
            anyhow::bail!("orbit_radius must be positive, got {}", self.orbit_radius);
        }
        Ok(())
    }
}
