//! RGB <-> HSL conversion
//!
//! Only the lightness channel drives segmentation; hue and saturation are
//! kept so conversions round-trip.

use crate::error::{ColorError, ColorResult};
use rayon::prelude::*;
use treasure_core::{BrightnessMap, Color, Grid, RgbGrid};

/// HSL color representation
///
/// - `h`: Hue in range [0.0, 1.0) (where 1.0 wraps to 0.0)
/// - `s`: Saturation in range [0.0, 1.0]
/// - `l`: Lightness in range [0.0, 1.0]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub h: f32,
    pub s: f32,
    pub l: f32,
}

impl Hsl {
    /// Create a new HSL color
    pub fn new(h: f32, s: f32, l: f32) -> Self {
        Self { h, s, l }
    }

    /// Convert normalized RGB channel values in [0, 1]
    ///
    /// # Errors
    ///
    /// Returns `treasure_core::Error::ChannelCount` unless exactly three
    /// channels are given.
    pub fn from_channels(channels: &[f32]) -> ColorResult<Self> {
        let &[r, g, b] = channels else {
            return Err(ColorError::Core(treasure_core::Error::ChannelCount {
                expected: 3,
                actual: channels.len(),
            }));
        };
        Ok(hsl_from_unit_rgb(r as f64, g as f64, b as f64))
    }
}

fn hsl_from_unit_rgb(r: f64, g: f64, b: f64) -> Hsl {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;
    let d = max - min;

    if d <= 0.0 {
        return Hsl::new(0.0, 0.0, l as f32);
    }

    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };
    let h = if max == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };

    Hsl::new((h / 6.0) as f32, s as f32, l as f32)
}

/// Convert 8-bit RGB to HSL
pub fn rgb_to_hsl(r: u8, g: u8, b: u8) -> Hsl {
    hsl_from_unit_rgb(r as f64 / 255.0, g as f64 / 255.0, b as f64 / 255.0)
}

/// Convert HSL to 8-bit RGB
pub fn hsl_to_rgb(hsl: Hsl) -> Color {
    let h = (hsl.h as f64).rem_euclid(1.0);
    let s = (hsl.s as f64).clamp(0.0, 1.0);
    let l = (hsl.l as f64).clamp(0.0, 1.0);

    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = c * (1.0 - ((h * 6.0) % 2.0 - 1.0).abs());
    let m = l - c / 2.0;

    let (r, g, b) = match (h * 6.0) as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    let to_u8 = |v: f64| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;
    Color::new(to_u8(r), to_u8(g), to_u8(b))
}

/// HSL lightness of a single color, `(max + min) / 2` in [0, 1]
#[inline]
pub fn lightness(color: Color) -> f32 {
    let max = color.r.max(color.g).max(color.b) as f32;
    let min = color.r.min(color.g).min(color.b) as f32;
    (max + min) / 510.0
}

/// Per-pixel HSL lightness of an RGB image
pub fn lightness_map(image: &RgbGrid) -> ColorResult<BrightnessMap> {
    let values: Vec<f32> = image.data().par_iter().map(|&c| lightness(c)).collect();
    Ok(Grid::from_data(image.width(), image.height(), values)?)
}
