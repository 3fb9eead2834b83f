//! Quarter-wave sine/cosine lookup tables
//!
//! 33 samples cover 0-90 degrees in 90/32 degree steps. The full circle is
//! reconstructed with quadrant symmetry, so no transcendental is ever
//! evaluated at runtime. Integer index division quantizes angles by a few
//! degrees, which is fine at pixel precision.

use crate::fixed::Fixed;

/// Samples per quarter circle (the tables hold one more for the 90 degree end)
pub const TRIG_TABLE_SIZE: usize = 32;

/// Sine samples, 0 to 90 degrees, raw 8.8
pub const SIN_TABLE: [i16; TRIG_TABLE_SIZE + 1] = [
    0, 13, 25, 38, 50, 63, 75, 87, 100, 112, 124, 135, 147, 158, 169, 180, 190, 200, 209, 218,
    226, 234, 241, 247, 252, 254, 255, 256, 256, 256, 256, 256, 256,
];

/// Cosine samples, 0 to 90 degrees, raw 8.8.
///
/// The last four entries are flattened to zero rather than tapering; these
/// are the shipped sample values and are kept as-is.
pub const COS_TABLE: [i16; TRIG_TABLE_SIZE + 1] = [
    256, 256, 256, 256, 254, 252, 247, 241, 234, 226, 218, 209, 200, 190, 180, 169, 158, 147,
    135, 124, 112, 100, 87, 75, 63, 50, 38, 25, 13, 0, 0, 0, 0,
];

/// Reduce any degree value into 0..360
#[inline]
pub fn normalize_degrees(degrees: i32) -> u16 {
    degrees.rem_euclid(360) as u16
}

/// Table index for an angle within a single quadrant (0..=90)
#[inline]
fn quadrant_index(degrees: u16) -> usize {
    (degrees as usize * TRIG_TABLE_SIZE) / 90
}

/// Sine of an integer-degree angle
pub fn sin(degrees: i32) -> Fixed {
    let d = normalize_degrees(degrees);
    let raw = match d {
        0..=90 => SIN_TABLE[quadrant_index(d)],
        91..=180 => SIN_TABLE[quadrant_index(180 - d)],
        181..=270 => -SIN_TABLE[quadrant_index(d - 180)],
        _ => -SIN_TABLE[quadrant_index(360 - d)],
    };
    Fixed::from_raw(raw)
}

/// Cosine of an integer-degree angle, `sin(degrees + 90)`
pub fn cos(degrees: i32) -> Fixed {
    sin((normalize_degrees(degrees) as i32 + 90) % 360)
}
