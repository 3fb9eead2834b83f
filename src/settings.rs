//! Physics settings supplied by the host
//!
//! The core only ever reads these. Persisted as JSON: LocalStorage on the
//! web, a plain file natively.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::{DEFAULT_BALL_SPEED, DEFAULT_MAX_PADDLE_ANGLE, DEFAULT_PADDLE_WIDTH};

/// Fastest speed (pixels per tick) that still fits the 8.8 range
pub const MAX_BALL_SPEED: u8 = 127;
/// Largest paddle deflection from vertical (degrees)
pub const MAX_PADDLE_ANGLE: u8 = 90;

/// Settings load/validation failure
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("ball speed {0} exceeds {max} pixels per tick", max = MAX_BALL_SPEED)]
    SpeedOutOfRange(u8),
    #[error("max paddle angle {0} exceeds {max} degrees", max = MAX_PADDLE_ANGLE)]
    AngleOutOfRange(u8),
    #[error("failed to store settings: {0}")]
    Storage(String),
}

/// Turn a storage backend result into a settings result, logging the outcome
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
fn storage_result<E: std::fmt::Debug>(result: Result<(), E>) -> Result<(), SettingsError> {
    match result {
        Ok(()) => {
            log::info!("Settings saved");
            Ok(())
        }
        Err(e) => {
            log::warn!("Failed to save settings: {e:?}");
            Err(SettingsError::Storage(format!("{e:?}")))
        }
    }
}

/// Ball and paddle tuning
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Ball speed in whole pixels per tick
    pub ball_speed: u8,
    /// Deflection at the paddle edge (degrees from vertical)
    pub max_paddle_angle: u8,
    /// Paddle width in pixels
    pub paddle_width: u8,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            ball_speed: DEFAULT_BALL_SPEED,
            max_paddle_angle: DEFAULT_MAX_PADDLE_ANGLE,
            paddle_width: DEFAULT_PADDLE_WIDTH,
        }
    }
}

impl Settings {
    /// Check ranges the core cannot represent.
    ///
    /// A zero paddle width is allowed; the paddle simply never registers a hit.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.ball_speed > MAX_BALL_SPEED {
            return Err(SettingsError::SpeedOutOfRange(self.ball_speed));
        }
        if self.max_paddle_angle > MAX_PADDLE_ANGLE {
            return Err(SettingsError::AngleOutOfRange(self.max_paddle_angle));
        }
        if self.paddle_width < 2 {
            log::warn!(
                "Paddle width {} has no half-width; paddle hits are disabled",
                self.paddle_width
            );
        }
        Ok(())
    }

    /// Parse and validate settings from JSON
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load settings from a JSON file
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// LocalStorage key
    #[cfg(target_arch = "wasm32")]
    const STORAGE_KEY: &'static str = "pingpong_physics_settings";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(settings) => {
                        log::info!("Loaded settings from LocalStorage");
                        return settings;
                    }
                    Err(e) => log::warn!("Ignoring stored settings: {e}"),
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) -> Result<(), SettingsError> {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .ok_or_else(|| SettingsError::Storage("LocalStorage unavailable".into()))?;
        let json = serde_json::to_string(self)?;
        storage_result(storage.set_item(Self::STORAGE_KEY, &json))
    }
}
