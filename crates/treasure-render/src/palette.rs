//! Random palettes and label colorizing
//!
//! Every region of a label grid gets a color from a randomly generated
//! palette so neighboring regions can be told apart. The random source is
//! always supplied by the caller; seed it to get a reproducible picture.

use std::collections::{HashMap, HashSet};

use rand::Rng;
use treasure_core::{Color, LabelGrid, RgbGrid};

use crate::{RenderError, RenderResult};

/// Number of distinct non-black 24-bit colors
pub const MAX_PALETTE_SIZE: usize = (1 << 24) - 1;

/// Options for [`colorize_labels`]
#[derive(Debug, Clone)]
pub struct ColorizeOptions {
    /// Number of distinct colors to draw from (default: 40)
    pub palette_size: usize,
    /// Color of label 0
    pub background: Color,
}

impl Default for ColorizeOptions {
    fn default() -> Self {
        Self {
            palette_size: 40,
            background: Color::BLACK,
        }
    }
}

impl ColorizeOptions {
    /// Create options with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the palette size
    pub fn with_palette_size(mut self, size: usize) -> Self {
        self.palette_size = size;
        self
    }

    /// Set the background color
    pub fn with_background(mut self, color: Color) -> Self {
        self.background = color;
        self
    }

    /// Validate options
    pub fn validate(&self) -> RenderResult<()> {
        if self.palette_size == 0 || self.palette_size > MAX_PALETTE_SIZE {
            return Err(RenderError::InvalidParameter(format!(
                "palette_size must be between 1 and {MAX_PALETTE_SIZE}, got {}",
                self.palette_size
            )));
        }
        Ok(())
    }
}

/// Draw `count` distinct random colors.
///
/// Black is never drawn so that regions stay distinct from the default
/// background. Colors are returned in the order they were first drawn.
///
/// # Errors
///
/// Returns `RenderError::InvalidParameter` if `count` exceeds
/// [`MAX_PALETTE_SIZE`].
pub fn generate_palette<R: Rng>(count: usize, rng: &mut R) -> RenderResult<Vec<Color>> {
    if count > MAX_PALETTE_SIZE {
        return Err(RenderError::InvalidParameter(format!(
            "cannot draw {count} distinct colors"
        )));
    }

    let mut seen = HashSet::with_capacity(count);
    let mut palette = Vec::with_capacity(count);
    while palette.len() < count {
        let color = Color::new(rng.random(), rng.random(), rng.random());
        if color != Color::BLACK && seen.insert(color) {
            palette.push(color);
        }
    }
    Ok(palette)
}

/// Paint every region of `labels` with its own palette color.
///
/// Label 0 takes the background color. Regions receive palette entries in
/// the order their first pixel appears in a row-major scan; once the
/// palette runs out, entries are reused from the beginning.
///
/// # Errors
///
/// Returns an error if the options are invalid.
pub fn colorize_labels<R: Rng>(
    labels: &LabelGrid,
    options: &ColorizeOptions,
    rng: &mut R,
) -> RenderResult<RgbGrid> {
    options.validate()?;
    let palette = generate_palette(options.palette_size, rng)?;

    let mut assigned: HashMap<u32, Color> = HashMap::new();
    for &label in labels.data() {
        if label == 0 || assigned.contains_key(&label) {
            continue;
        }
        let color = palette[assigned.len() % palette.len()];
        assigned.insert(label, color);
    }

    if assigned.len() > palette.len() {
        log::debug!(
            "colorize: {} regions share a palette of {} colors",
            assigned.len(),
            palette.len()
        );
    }

    Ok(labels.map(|label| {
        if *label == 0 {
            options.background
        } else {
            assigned[label]
        }
    }))
}
