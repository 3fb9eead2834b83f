//! Host-facing ping-pong scene
//!
//! Owns the settings and the single ball, and exposes the operations a host
//! engine calls: initialise, per-frame update, wall and paddle collisions,
//! activation, and the scene lifecycle hooks. All calls are expected from
//! one thread in host order; there is no internal synchronization.

use serde::{Deserialize, Serialize};

use crate::settings::Settings;
use crate::sim::{self, Ball, Paddle, Wall};

/// One ping-pong play session
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PingPongScene {
    settings: Settings,
    ball: Ball,
}

impl PingPongScene {
    /// Create a scene with an inactive ball
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            ball: Ball::new(),
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Replace the host configuration; takes effect on the next heading change
    pub fn set_settings(&mut self, settings: Settings) {
        self.settings = settings;
    }

    /// Read-only view of the ball
    pub fn ball(&self) -> &Ball {
        &self.ball
    }

    /// Place the ball and launch it at `angle` degrees (0 = right, 90 = up)
    pub fn init(&mut self, x: u8, y: u8, angle: u16) {
        self.ball.launch(x, y, angle, self.settings.ball_speed);
        log::debug!(
            "Ball launched at ({x}, {y}) angle {} vel {:?}",
            self.ball.angle,
            self.ball.vel.to_vec2()
        );
    }

    /// Advance one frame and return the ball's pixel position
    pub fn update(&mut self) -> (u8, u8) {
        sim::tick(&mut self.ball)
    }

    /// Bounce off a floor or ceiling
    pub fn reflect_horizontal(&mut self) {
        sim::reflect_horizontal(&mut self.ball);
    }

    /// Bounce off a side wall
    pub fn reflect_vertical(&mut self) {
        sim::reflect_vertical(&mut self.ball);
    }

    pub fn reflect_wall(&mut self, wall: Wall) {
        sim::reflect_wall(&mut self.ball, wall);
    }

    /// Test the ball against a paddle centred at `paddle_x` with its top edge
    /// at `paddle_y`, reflecting it on contact. Returns whether it hit.
    pub fn paddle_reflect(&mut self, paddle_x: u8, paddle_y: u8) -> bool {
        let paddle = Paddle::new(paddle_x, paddle_y, self.settings.paddle_width);
        let hit = sim::paddle_reflect(
            &mut self.ball,
            &paddle,
            self.settings.max_paddle_angle,
            self.settings.ball_speed,
        );
        if hit {
            log::trace!(
                "Paddle hit at {:?}, new angle {}",
                self.ball.pixel_pos(),
                self.ball.angle
            );
        }
        hit
    }

    /// Pause or resume the ball. Takes effect on the next `update`.
    pub fn set_active(&mut self, active: bool) {
        if self.ball.active != active {
            log::debug!("Ball {}", if active { "activated" } else { "deactivated" });
        }
        self.ball.set_active(active);
    }

    pub fn is_active(&self) -> bool {
        self.ball.is_active()
    }

    /// Scene entered: zero the ball and deactivate it
    pub fn on_scene_enter(&mut self) {
        self.ball.reset();
        log::debug!("Scene entered, ball reset");
    }

    /// Per-frame scene hook. The host drives movement through `update`, so
    /// there is nothing to do here.
    pub fn on_scene_tick(&mut self) {}
}
