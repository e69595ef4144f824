//! treasure-color - Lightness extraction and binarization
//!
//! This crate provides:
//!
//! - **Colorspace** - RGB <-> HSL conversion and per-pixel lightness
//! - **Threshold selection** - Lightness histogram, kernel smoothing and
//!   the mode-reflection binarization threshold
//! - **Binarization** - Lightness map to foreground mask
//!
//! # Examples
//!
//! ```
//! use treasure_color::{binarize, lightness_map};
//! use treasure_core::{Color, RgbGrid};
//!
//! let mut image = RgbGrid::new(4, 4).unwrap();
//! image.set_pixel(1, 1, Color::WHITE).unwrap();
//!
//! let lightness = lightness_map(&image).unwrap();
//! let mask = binarize(&lightness, 0.5);
//! assert_eq!(mask.count_foreground(), 1);
//! ```

pub mod colorspace;
pub mod error;
pub mod threshold;

pub use colorspace::{Hsl, hsl_to_rgb, lightness, lightness_map, rgb_to_hsl};
pub use error::{ColorError, ColorResult};
pub use threshold::{
    LightnessHistogram, ThresholdOptions, binarization_threshold, binarize, gaussian_kernel,
    kernel_smooth, scott_bandwidth, select_threshold, std_deviation,
};
