//! RGB color values and RGB grids

use crate::error::{Error, Result};
use crate::grid::Grid;

/// 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Create a new color
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Black color
    pub const BLACK: Color = Color { r: 0, g: 0, b: 0 };
    /// White color
    pub const WHITE: Color = Color {
        r: 255,
        g: 255,
        b: 255,
    };
    /// Yellow color
    pub const YELLOW: Color = Color {
        r: 255,
        g: 255,
        b: 0,
    };

    /// Gray level with the given value on every channel
    pub const fn gray(v: u8) -> Self {
        Self { r: v, g: v, b: v }
    }
}

/// RGB image
pub type RgbGrid = Grid<Color>;

impl Grid<Color> {
    /// Build an RGB grid from interleaved 8-bit samples
    ///
    /// # Errors
    ///
    /// Returns `Error::ChannelCount` when the buffer holds a whole number of
    /// pixels but not three samples per pixel, and `Error::InvalidParameter`
    /// for any other length mismatch.
    pub fn from_interleaved(width: u32, height: u32, samples: &[u8]) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let npix = (width as usize) * (height as usize);
        if samples.len() != npix * 3 {
            if samples.len() % npix == 0 {
                return Err(Error::ChannelCount {
                    expected: 3,
                    actual: samples.len() / npix,
                });
            }
            return Err(Error::InvalidParameter(format!(
                "sample buffer of {} bytes does not fit {}x{} pixels",
                samples.len(),
                width,
                height
            )));
        }

        let data = samples
            .chunks_exact(3)
            .map(|c| Color::new(c[0], c[1], c[2]))
            .collect();
        Grid::from_data(width, height, data)
    }

    /// Flatten into interleaved RGB samples
    pub fn to_interleaved(&self) -> Vec<u8> {
        self.data().iter().flat_map(|c| [c.r, c.g, c.b]).collect()
    }
}
