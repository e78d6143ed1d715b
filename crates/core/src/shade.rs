//! Luminance → glyph/color lookup.
//!
//! Both ramps are indexed by the same bucket, `floor(L * 8)`, but each is
//! clamped against its own length. With 12 glyphs and 10 colors the
//! brightest buckets (10 and 11) keep distinct glyphs while sharing the last
//! color.

use crate::types::{HexColor, COLOR_RAMP, GLYPH_RAMP, LUMINANCE_SCALE};

/// Bucket index for a luminance value. May be negative or past either ramp.
#[inline]
pub fn luminance_index(luminance: f64) -> i64 {
    (luminance * LUMINANCE_SCALE).floor() as i64
}

#[inline]
fn clamp_into(index: i64, len: usize) -> usize {
    index.clamp(0, len as i64 - 1) as usize
}

#[inline]
pub fn glyph_for(index: i64) -> char {
    GLYPH_RAMP[clamp_into(index, GLYPH_RAMP.len())]
}

#[inline]
pub fn color_for(index: i64) -> HexColor {
    COLOR_RAMP[clamp_into(index, COLOR_RAMP.len())]
}

/// The glyph and color chosen for one lit sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shade {
    pub index: i64,
    pub glyph: char,
    pub color: HexColor,
}

impl Shade {
    pub fn from_index(index: i64) -> Self {
        Self {
            index,
            glyph: glyph_for(index),
            color: color_for(index),
        }
    }

    pub fn from_luminance(luminance: f64) -> Self {
        Self::from_index(luminance_index(luminance))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bucket_is_floor_of_scaled_luminance() {
        assert_eq!(luminance_index(0.0), 0);
        assert_eq!(luminance_index(0.124), 0);
        assert_eq!(luminance_index(0.125), 1);
        assert_eq!(luminance_index(1.0), 8);
        assert_eq!(luminance_index(1.4), 11);
        assert_eq!(luminance_index(-0.01), -1);
    }

    #[test]
    fn darkest_bucket() {
        let shade = Shade::from_luminance(0.05);
        assert_eq!(shade.glyph, '.');
        assert_eq!(shade.color.hex(), "#1a0033");
    }

    #[test]
    fn bucket_eight_is_last_distinct_color() {
        let shade = Shade::from_index(8);
        assert_eq!(shade.glyph, '*');
        assert_eq!(shade.color.hex(), "#ffccff");
    }

    #[test]
    fn brightest_buckets_share_white() {
        let expected = [(9, '#'), (10, '$'), (11, '@')];
        for (index, glyph) in expected {
            let shade = Shade::from_index(index);
            assert_eq!(shade.glyph, glyph, "bucket {index}");
            assert_eq!(shade.color.hex(), "#ffffff", "bucket {index}");
        }
    }

    #[test]
    fn out_of_range_buckets_clamp_per_ramp() {
        assert_eq!(glyph_for(-3), '.');
        assert_eq!(color_for(-3).hex(), "#1a0033");
        assert_eq!(glyph_for(42), '@');
        assert_eq!(color_for(42).hex(), "#ffffff");
    }

    #[test]
    fn luminance_nine_selects_hash_and_white() {
        let shade = Shade::from_luminance(9.5 / 8.0);
        assert_eq!(shade.index, 9);
        assert_eq!(shade.glyph, '#');
        assert_eq!(shade.color.hex(), "#ffffff");
    }
}
