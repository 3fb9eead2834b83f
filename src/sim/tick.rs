//! Fixed timestep integration
//!
//! Straight-line Euler step: no gravity, no drag. This is the only place the
//! ball's position advances.

use super::state::Ball;

/// Advance the ball by one tick and return its rounded pixel position.
///
/// An inactive ball is left untouched and reports `(0, 0)`.
pub fn tick(ball: &mut Ball) -> (u8, u8) {
    if !ball.active {
        return (0, 0);
    }

    ball.pos = ball.pos.wrapping_add(ball.vel);
    ball.pixel_pos()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixed::{Fixed, FixedVec2};

    #[test]
    fn test_tick_moves_up() {
        let mut ball = Ball::new();
        ball.launch(80, 100, 90, 2);

        assert_eq!(tick(&mut ball), (80, 98));
        assert!(ball.is_active());
        assert_eq!(tick(&mut ball), (80, 96));
    }

    #[test]
    fn test_tick_inactive_is_noop() {
        let mut ball = Ball::new();
        ball.launch(80, 100, 45, 2);
        ball.set_active(false);
        let before = ball;

        assert_eq!(tick(&mut ball), (0, 0));
        assert_eq!(ball, before);
    }

    #[test]
    fn test_tick_rounds_sub_pixel_position() {
        let mut ball = Ball::new();
        ball.active = true;
        ball.pos = FixedVec2::from_pixels(10, 10);
        ball.vel = FixedVec2::new(Fixed::HALF, Fixed::from_raw(127));

        // 10.5 rounds up, 10.496 rounds down
        assert_eq!(tick(&mut ball), (11, 10));
    }

    #[test]
    fn test_tick_wraps_through_pixel_space() {
        let mut ball = Ball::new();
        ball.launch(255, 0, 0, 1);
        assert_eq!(tick(&mut ball), (0, 0));
        assert_eq!(tick(&mut ball), (1, 0));
    }

    #[test]
    fn test_high_speed_diagonal_is_stable() {
        let mut ball = Ball::new();
        ball.launch(80, 72, 45, 8);
        let v = ball.vel;

        for _ in 0..60 {
            tick(&mut ball);
        }

        assert_eq!(ball.vel, v);
        assert!(ball.is_active());
    }

    #[test]
    fn test_determinism() {
        let mut a = Ball::new();
        let mut b = Ball::new();
        a.launch(40, 120, 60, 3);
        b.launch(40, 120, 60, 3);

        for _ in 0..500 {
            assert_eq!(tick(&mut a), tick(&mut b));
        }
        assert_eq!(a, b);
    }
}
