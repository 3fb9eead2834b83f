//! Collision response
//!
//! Flat walls flip one velocity component. The paddle converts the ball's
//! horizontal impact offset into a fresh launch angle: centre hits go
//! straight up, edge hits go out at `90 ± max_angle`.

use serde::{Deserialize, Serialize};

use super::state::Ball;

/// Rows above the paddle's top edge that still count as contact
pub const PADDLE_TOLERANCE_ABOVE: i16 = 2;
/// Rows below the paddle's top edge that still count as contact
pub const PADDLE_TOLERANCE_BELOW: i16 = 4;
/// Shallowest allowed paddle launch angle (degrees)
pub const MIN_REFLECT_ANGLE: i16 = 30;
/// Steepest allowed paddle launch angle on the other side (degrees)
pub const MAX_REFLECT_ANGLE: i16 = 150;
/// Normalized hit offset at the paddle edge (1.0 in 1.7 fixed-point)
pub const HIT_OFFSET_SCALE: i16 = 128;
/// Shift that undoes `HIT_OFFSET_SCALE` when scaling by the max angle
const HIT_OFFSET_SHIFT: u32 = HIT_OFFSET_SCALE.trailing_zeros();

/// Which kind of flat surface the ball hit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Wall {
    /// Floor or ceiling
    Horizontal,
    /// Left or right side
    Vertical,
}

/// Paddle contact geometry, in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paddle {
    /// Centre X
    pub center_x: u8,
    /// Top edge Y
    pub top_y: u8,
    /// Full width
    pub width: u8,
}

impl Paddle {
    pub fn new(center_x: u8, top_y: u8, width: u8) -> Self {
        Self {
            center_x,
            top_y,
            width,
        }
    }

    /// Half the width, rounded down
    #[inline]
    pub fn half_width(&self) -> i16 {
        (self.width >> 1) as i16
    }

    /// Whether a pixel row lies in the contact band around the top edge
    #[inline]
    pub fn in_contact_band(&self, y: u8) -> bool {
        let (y, top) = (y as i16, self.top_y as i16);
        y >= top - PADDLE_TOLERANCE_ABOVE && y <= top + PADDLE_TOLERANCE_BELOW
    }

    /// Whether a pixel column lies across the paddle
    #[inline]
    pub fn spans(&self, x: u8) -> bool {
        let (x, center, half) = (x as i16, self.center_x as i16, self.half_width());
        x >= center - half && x <= center + half
    }
}

/// Bounce off a floor or ceiling
#[inline]
pub fn reflect_horizontal(ball: &mut Ball) {
    ball.vel.y = ball.vel.y.wrapping_neg();
}

/// Bounce off a side wall
#[inline]
pub fn reflect_vertical(ball: &mut Ball) {
    ball.vel.x = ball.vel.x.wrapping_neg();
}

/// Bounce off the given kind of wall
pub fn reflect_wall(ball: &mut Ball, wall: Wall) {
    match wall {
        Wall::Horizontal => reflect_horizontal(ball),
        Wall::Vertical => reflect_vertical(ball),
    }
}

/// Launch angle for a hit at `ball_x` on a paddle centred at `paddle_x`.
///
/// The offset is normalized to -128..=128 across the paddle, scaled by
/// `max_angle` (arithmetic shift, so left-side fractions round away from
/// centre) and added to 90. The result is clamped to 30..=150 so the ball
/// never leaves the paddle near-horizontally. Returns `None` when
/// `half_width` is zero.
pub fn reflection_angle(ball_x: u8, paddle_x: u8, half_width: i16, max_angle: u8) -> Option<u16> {
    if half_width == 0 {
        return None;
    }

    let delta = ball_x as i32 - paddle_x as i32;
    let offset = (delta * HIT_OFFSET_SCALE as i32) / half_width as i32;
    let angle_offset = (offset * max_angle as i32) >> HIT_OFFSET_SHIFT;
    let angle = (90 + angle_offset).clamp(MIN_REFLECT_ANGLE as i32, MAX_REFLECT_ANGLE as i32);

    Some(angle as u16)
}

/// Reflect the ball off the paddle if it is touching it.
///
/// Returns `false` and leaves the ball untouched when the ball is outside the
/// contact band, outside the paddle's span, or the paddle has no width.
pub fn paddle_reflect(ball: &mut Ball, paddle: &Paddle, max_angle: u8, speed: u8) -> bool {
    let (ball_x, ball_y) = ball.pixel_pos();

    if !paddle.in_contact_band(ball_y) || !paddle.spans(ball_x) {
        return false;
    }

    let Some(angle) = reflection_angle(ball_x, paddle.center_x, paddle.half_width(), max_angle)
    else {
        return false;
    };

    ball.set_heading(angle, speed);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixed::Fixed;
    use crate::sim::state::velocity_for;
    use proptest::prelude::*;

    const WIDTH: u8 = 24;
    const MAX_ANGLE: u8 = 60;
    const SPEED: u8 = 2;

    fn ball_at(x: u8, y: u8) -> Ball {
        let mut ball = Ball::new();
        ball.launch(x, y, 270, SPEED);
        ball
    }

    fn angle_for(ball_x: u8, width: u8, max_angle: u8) -> u16 {
        reflection_angle(ball_x, 80, (width >> 1) as i16, max_angle).unwrap()
    }

    #[test]
    fn test_reflect_horizontal() {
        let mut ball = ball_at(80, 72);
        let vel = ball.vel;
        reflect_horizontal(&mut ball);
        assert_eq!(ball.vel.y, -vel.y);
        assert_eq!(ball.vel.x, vel.x);
        assert_eq!(ball.angle, 270);
    }

    #[test]
    fn test_reflect_vertical() {
        let mut ball = Ball::new();
        ball.launch(80, 72, 30, SPEED);
        let before = ball;
        reflect_vertical(&mut ball);
        assert_eq!(ball.vel.x, -before.vel.x);
        assert_eq!(ball.vel.y, before.vel.y);
        assert_eq!(ball.pos, before.pos);
        assert_eq!(ball.angle, before.angle);
    }

    #[test]
    fn test_reflect_wall_dispatch() {
        let mut a = ball_at(80, 72);
        let mut b = a;
        reflect_wall(&mut a, Wall::Horizontal);
        reflect_horizontal(&mut b);
        assert_eq!(a, b);

        reflect_wall(&mut a, Wall::Vertical);
        reflect_vertical(&mut b);
        assert_eq!(a, b);
    }

    #[test]
    fn test_reflection_angle_centre() {
        assert_eq!(angle_for(80, WIDTH, MAX_ANGLE), 90);
    }

    #[test]
    fn test_reflection_angle_edges() {
        assert_eq!(angle_for(68, WIDTH, MAX_ANGLE), 30);
        assert_eq!(angle_for(92, WIDTH, MAX_ANGLE), 150);
    }

    #[test]
    fn test_reflection_angle_halfway() {
        assert_eq!(angle_for(74, WIDTH, MAX_ANGLE), 60);
        assert_eq!(angle_for(86, WIDTH, MAX_ANGLE), 120);
    }

    #[test]
    fn test_reflection_angle_one_pixel_off_centre() {
        let left = angle_for(79, WIDTH, MAX_ANGLE);
        let right = angle_for(81, WIDTH, MAX_ANGLE);
        assert!(left < 90 && left > 30);
        assert!(right > 90 && right < 150);
        // Arithmetic shift rounds the left side away from centre
        assert_eq!(left, 85);
        assert_eq!(right, 94);
    }

    #[test]
    fn test_reflection_angle_clamps_past_edges() {
        assert_eq!(angle_for(0, WIDTH, MAX_ANGLE), 30);
        assert_eq!(angle_for(160, WIDTH, MAX_ANGLE), 150);
        assert_eq!(angle_for(80 - 12, WIDTH, 90), 30);
    }

    #[test]
    fn test_reflection_angle_paddle_widths() {
        assert_eq!(angle_for(76, 8, MAX_ANGLE), 30);
        assert_eq!(angle_for(84, 8, MAX_ANGLE), 150);
        assert_eq!(angle_for(68, 48, MAX_ANGLE), 60);
    }

    #[test]
    fn test_reflection_angle_reduced_max() {
        assert_eq!(angle_for(68, WIDTH, 30), 60);
        assert_eq!(angle_for(92, WIDTH, 30), 120);
    }

    #[test]
    fn test_hit_offset_shift_matches_scale() {
        assert_eq!(1i16 << HIT_OFFSET_SHIFT, HIT_OFFSET_SCALE);
        // Full edge offset rescales to exactly the max angle
        assert_eq!(angle_for(92, WIDTH, 45), 90 + 45);
    }

    #[test]
    fn test_reflection_angle_zero_width() {
        assert_eq!(reflection_angle(80, 80, 0, MAX_ANGLE), None);
    }

    #[test]
    fn test_paddle_reflect_centre() {
        let paddle = Paddle::new(80, 130, WIDTH);
        let mut ball = ball_at(80, 130);

        assert!(paddle_reflect(&mut ball, &paddle, MAX_ANGLE, SPEED));
        assert_eq!(ball.angle, 90);
        assert_eq!(ball.vel, velocity_for(90, SPEED));
        assert_eq!(ball.vel.x, Fixed::ZERO);
        assert!(ball.vel.y < Fixed::ZERO);
    }

    #[test]
    fn test_paddle_reflect_left_edge() {
        let paddle = Paddle::new(80, 130, WIDTH);
        let mut ball = ball_at(68, 131);

        assert!(paddle_reflect(&mut ball, &paddle, MAX_ANGLE, SPEED));
        assert_eq!(ball.angle, 30);
        assert!(ball.vel.x > Fixed::ZERO);
        assert!(ball.vel.y < Fixed::ZERO);
    }

    #[test]
    fn test_paddle_reflect_contact_band() {
        let paddle = Paddle::new(80, 130, WIDTH);

        for y in 128..=134 {
            let mut ball = ball_at(80, y);
            assert!(paddle_reflect(&mut ball, &paddle, MAX_ANGLE, SPEED), "row {y}");
        }

        for y in [0, 100, 127, 135, 143] {
            for x in [68, 80, 92] {
                let mut ball = ball_at(x, y);
                let before = ball;
                assert!(!paddle_reflect(&mut ball, &paddle, MAX_ANGLE, SPEED));
                assert_eq!(ball, before);
            }
        }
    }

    #[test]
    fn test_paddle_reflect_outside_span() {
        let paddle = Paddle::new(80, 130, WIDTH);
        for x in [0, 67, 93, 159] {
            let mut ball = ball_at(x, 130);
            let before = ball;
            assert!(!paddle_reflect(&mut ball, &paddle, MAX_ANGLE, SPEED));
            assert_eq!(ball, before);
        }
    }

    #[test]
    fn test_paddle_reflect_zero_width_is_miss() {
        let mut ball = ball_at(80, 130);
        let before = ball;
        for width in [0, 1] {
            let paddle = Paddle::new(80, 130, width);
            assert!(!paddle_reflect(&mut ball, &paddle, MAX_ANGLE, SPEED));
            assert_eq!(ball, before);
        }
    }

    #[test]
    fn test_paddle_near_screen_edge() {
        // Signed comparisons: the band and span do not wrap below zero
        let paddle = Paddle::new(4, 1, WIDTH);
        let mut ball = ball_at(0, 0);
        assert!(paddle_reflect(&mut ball, &paddle, MAX_ANGLE, SPEED));
        assert!(ball.angle < 90);

        let mut far = ball_at(250, 250);
        assert!(!paddle_reflect(&mut far, &paddle, MAX_ANGLE, SPEED));
    }

    proptest! {
        #[test]
        fn prop_double_reflect_is_identity(angle in 0u16..360, speed in 1u8..=8) {
            let mut ball = Ball::new();
            ball.launch(80, 72, angle, speed);
            let before = ball;

            reflect_horizontal(&mut ball);
            reflect_horizontal(&mut ball);
            prop_assert_eq!(ball, before);

            reflect_vertical(&mut ball);
            reflect_vertical(&mut ball);
            prop_assert_eq!(ball, before);
        }

        #[test]
        fn prop_paddle_launch_is_upward(offset in -12i16..=12, max_angle in 0u8..=90) {
            let ball_x = (80 + offset) as u8;
            let paddle = Paddle::new(80, 130, WIDTH);
            let mut ball = ball_at(ball_x, 130);

            prop_assert!(paddle_reflect(&mut ball, &paddle, max_angle, SPEED));
            prop_assert!((30..=150).contains(&ball.angle));
            prop_assert!(ball.vel.y < Fixed::ZERO);
        }
    }
}
