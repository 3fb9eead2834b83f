//! Ball state
//!
//! Position and velocity are 8.8 fixed-point; `angle` is the cached
//! direction of travel and is kept in step with `vel` by every mutator
//! that changes heading.

use serde::{Deserialize, Serialize};

use crate::fixed::{Fixed, FixedVec2};
use crate::trig;

/// Velocity for a heading: `speed * (cos, -sin)`.
///
/// Screen Y grows downward, so an upward heading (0-180 degrees) gives a
/// negative Y component.
pub fn velocity_for(angle: u16, speed: u8) -> FixedVec2 {
    let speed = Fixed::from_int(speed as i16);
    let angle = angle as i32;
    FixedVec2 {
        x: speed * trig::cos(angle),
        y: (speed * trig::sin(angle)).wrapping_neg(),
    }
}

/// Largest `sin^2 + cos^2` the lookup tables produce (raw 8.8 units)
const MAX_TABLE_NORM_SQ: i64 = 72_200;

/// Whether `vel` has the magnitude a heading at `speed` should produce,
/// allowing for table error and one raw unit of rounding per component.
///
/// Speeds past the 8.8 range wrap and are not checked.
fn speed_in_bounds(vel: FixedVec2, speed: u8) -> bool {
    if speed > i8::MAX as u8 {
        return true;
    }
    let s = Fixed::from_int(speed as i16).raw() as i64;
    let (vx, vy) = (vel.x.raw() as i64, vel.y.raw() as i64);
    let mag_sq = vx * vx + vy * vy;
    let lo = if s >= 2 { (s - 2) * (s - 2) } else { 0 };
    let hi = s * s * MAX_TABLE_NORM_SQ / 65_536 + 4 * s + 2;
    (lo..=hi).contains(&mag_sq)
}

/// The ball
///
/// Fields are only readable from outside the crate; heading changes go
/// through [`Ball::launch`], [`Ball::set_heading`] and the collision
/// functions so `angle` and `vel` cannot drift apart.
///
/// ```compile_fail
/// let mut ball = pingpong_physics::sim::Ball::new();
/// ball.launch(80, 72, 90, 2);
/// ball.angle = 0;
/// ```
///
/// ```
/// use pingpong_physics::sim::{Ball, velocity_for};
///
/// let mut ball = Ball::new();
/// ball.launch(80, 72, 90, 2);
/// assert_eq!(ball.angle(), 90);
/// assert_eq!(ball.vel(), velocity_for(ball.angle(), 2));
/// assert_eq!(ball.pixel_pos(), (80, 72));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ball {
    /// Sub-pixel position
    pub(crate) pos: FixedVec2,
    /// Per-tick displacement
    pub(crate) vel: FixedVec2,
    /// Direction of travel in degrees (0..360, 0 = right, 90 = up)
    pub(crate) angle: u16,
    /// Whether the ball takes part in simulation
    pub(crate) active: bool,
}

impl Ball {
    /// A zeroed, inactive ball
    pub fn new() -> Self {
        Self::default()
    }

    /// Place the ball at a pixel position and launch it at `angle` degrees
    pub fn launch(&mut self, x: u8, y: u8, angle: u16, speed: u8) {
        self.pos = FixedVec2::from_pixels(x, y);
        self.active = true;
        self.set_heading(angle, speed);
    }

    /// Point the ball along `angle` at `speed`, updating angle and velocity together
    pub fn set_heading(&mut self, angle: u16, speed: u8) {
        self.angle = trig::normalize_degrees(angle as i32);
        self.vel = velocity_for(self.angle, speed);
        debug_assert!(
            speed_in_bounds(self.vel, speed),
            "velocity {:?} does not match speed {speed} at angle {}",
            self.vel,
            self.angle
        );
    }

    /// Sub-pixel position
    #[inline]
    pub fn pos(&self) -> FixedVec2 {
        self.pos
    }

    /// Per-tick displacement
    #[inline]
    pub fn vel(&self) -> FixedVec2 {
        self.vel
    }

    /// Direction of travel in degrees
    #[inline]
    pub fn angle(&self) -> u16 {
        self.angle
    }

    /// Current position rounded to whole pixels
    #[inline]
    pub fn pixel_pos(&self) -> (u8, u8) {
        self.pos.to_pixels()
    }

    #[inline]
    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Zero every field and deactivate
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
