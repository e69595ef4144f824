//! Treasure - Treasure map analysis for Rust
//!
//! Finds the treasure marker in a hand-drawn puzzle image. The image is
//! binarized by lightness, split into connected regions, and the regions
//! are sorted into arrows and treasure candidates by shape and brightness.
//! Starting from the single start arrow, the walk follows each arrow's axis
//! to the nearest arrow or candidate inside its viewing cone until it lands
//! on a candidate.
//!
//! # Overview
//!
//! - [`region`]: Labeling, flood fill and moments
//! - [`color`]: Lightness, threshold selection and binarization
//! - [`io`]: Reading and writing RGB images
//! - [`recog`]: Classification and way finding
//! - [`render`]: Colorized labels and way overlays
//! - [`hunt`]: The whole pipeline from an RGB image or file
//!
//! # Example
//!
//! ```
//! use treasure::{BitGrid, BrightnessMap};
//! use treasure::recog::{DetectOptions, find_treasure};
//!
//! let mask = BitGrid::new(64, 64).unwrap();
//! let lightness = BrightnessMap::new(64, 64).unwrap();
//! // an empty image has no start arrow
//! assert!(find_treasure(&mask, &lightness, &DetectOptions::default()).is_err());
//! ```

pub mod hunt;

// Re-export core types (primary data structures used everywhere)
pub use treasure_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use treasure_color as color;
pub use treasure_io as io;
pub use treasure_recog as recog;
pub use treasure_region as region;
pub use treasure_render as render;

pub use hunt::{
    Hunt, HuntError, HuntOptions, HuntResult, colorize_hunt, hunt_file, hunt_image, render_hunt,
};
