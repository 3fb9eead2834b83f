//! 8.8 fixed-point arithmetic
//!
//! `real = raw / 256`. Range is -128.0 to +127.996 with 1/256 precision.
//! Multiply and divide widen to `i32` before rescaling; conversions back to
//! integers are explicit and come in two flavours (shift and round).

use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Number of fractional bits
pub const FRAC_BITS: u32 = 8;

/// Signed 8.8 fixed-point scalar
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Fixed(i16);

impl Fixed {
    pub const ZERO: Fixed = Fixed(0);
    /// 1.0 = 256
    pub const ONE: Fixed = Fixed(1 << FRAC_BITS);
    /// 0.5 = 128
    pub const HALF: Fixed = Fixed(1 << (FRAC_BITS - 1));
    pub const TWO: Fixed = Fixed(2 << FRAC_BITS);
    pub const MINUS_ONE: Fixed = Fixed(-(1 << FRAC_BITS));
    pub const MIN: Fixed = Fixed(i16::MIN);
    pub const MAX: Fixed = Fixed(i16::MAX);

    /// Wrap a raw 8.8 register value
    #[inline]
    pub const fn from_raw(raw: i16) -> Self {
        Self(raw)
    }

    /// Raw 8.8 register value
    #[inline]
    pub const fn raw(self) -> i16 {
        self.0
    }

    /// Integer to fixed-point (`n << 8`).
    ///
    /// Values outside -128..=127 lose their high bits. Pixel coordinates are
    /// modular over 256, so `to_int_round` of the result still yields the
    /// original value when reinterpreted as `u8`.
    #[inline]
    pub const fn from_int(n: i16) -> Self {
        Self(n << FRAC_BITS)
    }

    /// Fixed-point to integer by arithmetic shift.
    ///
    /// Exact for non-negative values; negative fractions go toward
    /// negative infinity (`-0.5` becomes `-1`).
    #[inline]
    pub const fn to_int_trunc(self) -> i8 {
        (self.0 >> FRAC_BITS) as i8
    }

    /// Fixed-point to integer, rounding half up.
    ///
    /// Adds 0.5 in a widened register and shifts. Negative halves therefore
    /// round toward positive infinity (`-0.5` becomes `0`, `-1.5` becomes `-1`).
    /// Results past 127 wrap, consistent with `from_int`.
    #[inline]
    pub const fn to_int_round(self) -> i8 {
        ((self.0 as i32 + Self::HALF.0 as i32) >> FRAC_BITS) as i8
    }

    /// Fixed-point multiply: `(a * b) >> 8` in an `i32` register
    #[inline]
    pub fn mul(self, rhs: Fixed) -> Fixed {
        let wide = (self.0 as i32 * rhs.0 as i32) >> FRAC_BITS;
        debug_assert!(
            i16::try_from(wide).is_ok(),
            "fixed-point multiply overflow: {self:?} * {rhs:?}"
        );
        Fixed(wide as i16)
    }

    /// Fixed-point divide: `(a << 8) / b` in an `i32` register.
    ///
    /// Returns `None` when `rhs` is zero.
    #[inline]
    pub fn checked_div(self, rhs: Fixed) -> Option<Fixed> {
        if rhs.0 == 0 {
            return None;
        }
        let wide = ((self.0 as i32) << FRAC_BITS) / rhs.0 as i32;
        debug_assert!(
            i16::try_from(wide).is_ok(),
            "fixed-point divide overflow: {self:?} / {rhs:?}"
        );
        Some(Fixed(wide as i16))
    }

    #[inline]
    pub fn abs(self) -> Fixed {
        if self.0 < 0 { Fixed(self.0.wrapping_neg()) } else { self }
    }

    /// -1, 0 or 1 as a plain integer
    #[inline]
    pub fn signum(self) -> i16 {
        if self.0 < 0 {
            -1
        } else if self.0 > 0 {
            1
        } else {
            0
        }
    }

    /// Clamp between `min` and `max` (checked against `min` first)
    #[inline]
    pub fn clamp(self, min: Fixed, max: Fixed) -> Fixed {
        if self < min {
            min
        } else if self > max {
            max
        } else {
            self
        }
    }

    /// Two's-complement addition, as the 16-bit register does
    #[inline]
    pub fn wrapping_add(self, rhs: Fixed) -> Fixed {
        Fixed(self.0.wrapping_add(rhs.0))
    }

    #[inline]
    pub fn wrapping_neg(self) -> Fixed {
        Fixed(self.0.wrapping_neg())
    }

    /// Float view for diagnostics and tests. Never used by the simulation.
    #[inline]
    pub fn to_f32(self) -> f32 {
        self.0 as f32 / (1 << FRAC_BITS) as f32
    }
}

impl Add for Fixed {
    type Output = Fixed;

    #[inline]
    fn add(self, rhs: Fixed) -> Fixed {
        Fixed(self.0 + rhs.0)
    }
}

impl AddAssign for Fixed {
    #[inline]
    fn add_assign(&mut self, rhs: Fixed) {
        self.0 += rhs.0;
    }
}

impl Sub for Fixed {
    type Output = Fixed;

    #[inline]
    fn sub(self, rhs: Fixed) -> Fixed {
        Fixed(self.0 - rhs.0)
    }
}

impl SubAssign for Fixed {
    #[inline]
    fn sub_assign(&mut self, rhs: Fixed) {
        self.0 -= rhs.0;
    }
}

impl Neg for Fixed {
    type Output = Fixed;

    #[inline]
    fn neg(self) -> Fixed {
        Fixed(-self.0)
    }
}

impl Mul for Fixed {
    type Output = Fixed;

    #[inline]
    fn mul(self, rhs: Fixed) -> Fixed {
        Fixed::mul(self, rhs)
    }
}

impl Div for Fixed {
    type Output = Fixed;

    /// Panics on a zero divisor, like integer division.
    #[inline]
    fn div(self, rhs: Fixed) -> Fixed {
        match self.checked_div(rhs) {
            Some(q) => q,
            None => panic!("fixed-point divide by zero"),
        }
    }
}

/// A pair of fixed-point values (position or velocity)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FixedVec2 {
    pub x: Fixed,
    pub y: Fixed,
}

impl FixedVec2 {
    pub const ZERO: FixedVec2 = FixedVec2 {
        x: Fixed::ZERO,
        y: Fixed::ZERO,
    };

    #[inline]
    pub const fn new(x: Fixed, y: Fixed) -> Self {
        Self { x, y }
    }

    /// From whole pixel coordinates
    #[inline]
    pub const fn from_pixels(x: u8, y: u8) -> Self {
        Self {
            x: Fixed::from_int(x as i16),
            y: Fixed::from_int(y as i16),
        }
    }

    /// Rounded whole pixel coordinates (modular over 256)
    #[inline]
    pub const fn to_pixels(self) -> (u8, u8) {
        (self.x.to_int_round() as u8, self.y.to_int_round() as u8)
    }

    #[inline]
    pub fn wrapping_add(self, rhs: FixedVec2) -> FixedVec2 {
        FixedVec2 {
            x: self.x.wrapping_add(rhs.x),
            y: self.y.wrapping_add(rhs.y),
        }
    }

    /// Float view for diagnostics and tests
    #[inline]
    pub fn to_vec2(self) -> Vec2 {
        Vec2::new(self.x.to_f32(), self.y.to_f32())
    }
}
