//! PingPong Physics - deterministic fixed-point ball physics
//!
//! Core modules:
//! - `fixed`: 8.8 fixed-point arithmetic
//! - `trig`: quarter-wave sine/cosine lookup tables
//! - `sim`: ball state, integration and collision response
//! - `scene`: host-facing scene context
//! - `settings`: host configuration

pub mod fixed;
pub mod scene;
pub mod settings;
pub mod sim;
pub mod trig;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use fixed::{Fixed, FixedVec2};
pub use scene::PingPongScene;
pub use settings::{Settings, SettingsError};

/// Configuration constants
pub mod consts {
    /// Screen dimensions (pixels)
    pub const SCREEN_WIDTH: u8 = 160;
    pub const SCREEN_HEIGHT: u8 = 144;

    /// Ball launch defaults
    pub const DEFAULT_BALL_X: u8 = 80;
    pub const DEFAULT_BALL_Y: u8 = 72;
    /// Straight down
    pub const DEFAULT_LAUNCH_ANGLE: u16 = 270;

    /// Settings defaults
    pub const DEFAULT_BALL_SPEED: u8 = 2;
    pub const DEFAULT_MAX_PADDLE_ANGLE: u8 = 60;
    pub const DEFAULT_PADDLE_WIDTH: u8 = 24;
}
