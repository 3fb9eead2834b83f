//! Deterministic ball simulation
//!
//! Everything here is pure integer arithmetic on caller-owned state:
//! - Fixed timestep only (one `tick` per host frame)
//! - No floating point in the hot path
//! - No logging, rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{
    MAX_REFLECT_ANGLE, MIN_REFLECT_ANGLE, PADDLE_TOLERANCE_ABOVE, PADDLE_TOLERANCE_BELOW, Paddle,
    Wall, paddle_reflect, reflect_horizontal, reflect_vertical, reflect_wall, reflection_angle,
};
pub use state::{Ball, velocity_for};
pub use tick::tick;
