//! Image-to-treasure pipeline
//!
//! Chains the crates of the workspace: RGB image, lightness map, threshold,
//! foreground mask, then detection on the mask with the lightness map as
//! the brightness source.

use std::path::Path;

use rand::Rng;
use thiserror::Error;
use treasure_color::{ColorError, ThresholdOptions, binarize, lightness_map, select_threshold};
use treasure_core::RgbGrid;
use treasure_io::{IoError, read_rgb};
use treasure_recog::{DetectOptions, Detection, RecogError, find_treasure};
use treasure_render::{ColorizeOptions, OverlayOptions, RenderError, colorize_labels, draw_way};

/// Errors from any stage of the pipeline
#[derive(Debug, Error)]
pub enum HuntError {
    #[error("io error: {0}")]
    Io(#[from] IoError),

    #[error("color error: {0}")]
    Color(#[from] ColorError),

    #[error("recognition error: {0}")]
    Recog(#[from] RecogError),

    #[error("render error: {0}")]
    Render(#[from] RenderError),

    /// Invalid pipeline option
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type for pipeline operations
pub type HuntResult<T> = Result<T, HuntError>;

/// Options for [`hunt_image`] and [`hunt_file`]
///
/// The selected threshold relies on a histogram with many lightness levels.
/// With only a handful of levels, as in flat synthetic images, smoothing
/// flattens the histogram and the threshold lands on the brightest level;
/// set a fixed `threshold` for such images.
#[derive(Debug, Clone, Default)]
pub struct HuntOptions {
    /// Fixed binarization threshold; `None` selects one from the histogram
    pub threshold: Option<f64>,
    /// Used when no fixed threshold is set
    pub threshold_options: ThresholdOptions,
    pub detect: DetectOptions,
}

impl HuntOptions {
    /// Create options with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Binarize at a fixed lightness instead of selecting a threshold
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = Some(threshold);
        self
    }

    pub fn with_threshold_options(mut self, options: ThresholdOptions) -> Self {
        self.threshold_options = options;
        self
    }

    pub fn with_detect(mut self, detect: DetectOptions) -> Self {
        self.detect = detect;
        self
    }

    /// Validate options
    pub fn validate(&self) -> HuntResult<()> {
        if let Some(t) = self.threshold {
            if !(0.0..=1.0).contains(&t) {
                return Err(HuntError::InvalidParameter(format!(
                    "threshold must be in [0, 1], got {t}"
                )));
            }
        }
        self.threshold_options.validate()?;
        self.detect.validate()?;
        Ok(())
    }
}

/// Outcome of a successful hunt
#[derive(Debug, Clone)]
pub struct Hunt {
    /// Lightness threshold the mask was built with
    pub threshold: f64,
    pub detection: Detection,
}

/// Locate the treasure in an RGB image
///
/// # Errors
///
/// Returns an error if the options are invalid, no threshold can be
/// selected, or detection fails (see [`find_treasure`]).
pub fn hunt_image(image: &RgbGrid, options: &HuntOptions) -> HuntResult<Hunt> {
    options.validate()?;

    let lightness = lightness_map(image)?;
    let threshold = match options.threshold {
        Some(t) => t,
        None => select_threshold(&lightness, &options.threshold_options)?,
    };
    let mask = binarize(&lightness, threshold);
    log::debug!(
        "hunt: {} of {} pixels above {threshold:.5}",
        mask.count_foreground(),
        mask.len()
    );

    let detection = find_treasure(&mask, &lightness, &options.detect)?;
    Ok(Hunt {
        threshold,
        detection,
    })
}

/// Locate the treasure in an image file
pub fn hunt_file<P: AsRef<Path>>(path: P, options: &HuntOptions) -> HuntResult<Hunt> {
    let image = read_rgb(path)?;
    hunt_image(&image, options)
}

/// Copy of `image` with the way of `hunt` drawn on top
pub fn render_hunt(image: &RgbGrid, hunt: &Hunt, options: &OverlayOptions) -> HuntResult<RgbGrid> {
    let detection = &hunt.detection;
    let destination = detection.destination_region().ok_or_else(|| {
        HuntError::InvalidParameter(format!(
            "destination region {} is not among the detected regions",
            detection.way.destination().id
        ))
    })?;

    let mut overlay = image.clone();
    draw_way(&mut overlay, &detection.way, destination, options)?;
    Ok(overlay)
}

/// Regions of `hunt` painted in random colors
pub fn colorize_hunt<R: Rng>(
    hunt: &Hunt,
    options: &ColorizeOptions,
    rng: &mut R,
) -> HuntResult<RgbGrid> {
    Ok(colorize_labels(&hunt.detection.labels, options, rng)?)
}
