//! Shared types and fixed constants for the donut renderer.
//!
//! Everything in here is plain data with no external dependencies, so the
//! pure renderer, the terminal layer and the binary can all agree on the same
//! geometry and palette.
//!
//! # Geometry
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `GRID_WIDTH` | 120 | Output columns |
//! | `GRID_HEIGHT` | 40 | Output rows |
//! | `R1` | 1 | Tube (minor) radius |
//! | `R2` | 2 | Distance from torus center to tube center |
//! | `K2` | 5 | Viewer distance |
//! | `K1` | `80 * K2 * 3 / (8 * (R1 + R2))` | Projection scale |
//!
//! # Sampling and motion
//!
//! - `THETA_STEP` (0.07) walks the tube cross-section.
//! - `PHI_STEP` (0.02) walks the revolution circle.
//! - Each frame advances angle A by `ANGLE_A_STEP` (0.04) and angle B by
//!   `ANGLE_B_STEP` (0.02).
//!
//! # Examples
//!
//! ```
//! use tui_donut_types::{RotationState, GLYPH_RAMP, COLOR_RAMP, GRID_WIDTH, GRID_HEIGHT};
//!
//! let state = RotationState::default().advance().advance();
//! assert!((state.angle_a - 0.08).abs() < 1e-12);
//! assert!((state.angle_b - 0.04).abs() < 1e-12);
//!
//! assert_eq!(GLYPH_RAMP.len(), 12);
//! assert_eq!(COLOR_RAMP.len(), 10);
//! assert_eq!(COLOR_RAMP[9].hex(), "#ffffff");
//! assert_eq!((GRID_WIDTH, GRID_HEIGHT), (120, 40));
//! ```

/// Output grid width in character cells.
pub const GRID_WIDTH: usize = 120;

/// Output grid height in character cells.
pub const GRID_HEIGHT: usize = 40;

/// Tube radius.
pub const R1: f64 = 1.0;

/// Distance from the torus center to the center of the tube.
pub const R2: f64 = 2.0;

/// Distance from the viewer to the torus center.
pub const K2: f64 = 5.0;

/// Projection scale, sized so the torus stays the same on screen.
pub const K1: f64 = 80.0 * K2 * 3.0 / (8.0 * (R1 + R2));

/// Step between tube-angle samples (radians).
pub const THETA_STEP: f64 = 0.07;

/// Step between revolution-angle samples (radians).
pub const PHI_STEP: f64 = 0.02;

/// Per-frame increment of angle A (radians).
pub const ANGLE_A_STEP: f64 = 0.04;

/// Per-frame increment of angle B (radians).
pub const ANGLE_B_STEP: f64 = 0.02;

/// Luminance buckets per unit of luminance.
pub const LUMINANCE_SCALE: f64 = 8.0;

/// Glyph ramp, sparse (dim) to dense (bright).
pub const GLYPH_RAMP: [char; 12] = ['.', ',', '-', '~', ':', ';', '=', '!', '*', '#', '$', '@'];

/// A palette entry carrying both its markup spelling and its RGB channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HexColor {
    hex: &'static str,
    rgb: [u8; 3],
}

impl HexColor {
    pub const fn new(hex: &'static str, r: u8, g: u8, b: u8) -> Self {
        Self { hex, rgb: [r, g, b] }
    }

    /// The `#rrggbb` spelling used in markup output.
    pub const fn hex(&self) -> &'static str {
        self.hex
    }

    pub const fn rgb(&self) -> [u8; 3] {
        self.rgb
    }
}

impl std::fmt::Display for HexColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.hex)
    }
}

/// Color ramp, dark desaturated purple to white.
///
/// Ten entries against twelve glyphs: the two brightest glyph buckets share
/// the last color.
pub const COLOR_RAMP: [HexColor; 10] = [
    HexColor::new("#1a0033", 0x1a, 0x00, 0x33),
    HexColor::new("#2d1b4e", 0x2d, 0x1b, 0x4e),
    HexColor::new("#4a2c6b", 0x4a, 0x2c, 0x6b),
    HexColor::new("#663d88", 0x66, 0x3d, 0x88),
    HexColor::new("#8b5a9f", 0x8b, 0x5a, 0x9f),
    HexColor::new("#b078b6", 0xb0, 0x78, 0xb6),
    HexColor::new("#d498cd", 0xd4, 0x98, 0xcd),
    HexColor::new("#f9b8e4", 0xf9, 0xb8, 0xe4),
    HexColor::new("#ffccff", 0xff, 0xcc, 0xff),
    HexColor::new("#ffffff", 0xff, 0xff, 0xff),
];

/// Orientation of the torus.
///
/// Angles grow without bound; the trig functions absorb the magnitude, so
/// nothing ever wraps them.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RotationState {
    /// Rotation about the X axis (radians).
    pub angle_a: f64,
    /// Rotation about the Z axis (radians).
    pub angle_b: f64,
}

impl RotationState {
    pub const fn new(angle_a: f64, angle_b: f64) -> Self {
        Self { angle_a, angle_b }
    }

    /// The orientation for the following frame.
    #[must_use]
    pub fn advance(self) -> Self {
        Self {
            angle_a: self.angle_a + ANGLE_A_STEP,
            angle_b: self.angle_b + ANGLE_B_STEP,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn projection_scale_matches_formula() {
        assert_eq!(K1, 50.0);
        assert_eq!(K1, 80.0 * K2 * 3.0 / (8.0 * (R1 + R2)));
    }

    #[test]
    fn color_ramp_channels_match_hex() {
        for color in COLOR_RAMP {
            let hex = color.hex();
            assert_eq!(hex.len(), 7);
            let [r, g, b] = color.rgb();
            assert_eq!(hex, format!("#{r:02x}{g:02x}{b:02x}"));
        }
    }

    #[test]
    fn glyph_ramp_is_ordered_sparse_to_dense() {
        let ramp: String = GLYPH_RAMP.iter().collect();
        assert_eq!(ramp, ".,-~:;=!*#$@");
    }

    #[test]
    fn advance_from_origin() {
        let mut state = RotationState::default();
        for _ in 0..100 {
            state = state.advance();
        }
        assert!((state.angle_a - 4.0).abs() < 1e-9);
        assert!((state.angle_b - 2.0).abs() < 1e-9);
    }
}
