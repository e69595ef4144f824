//! treasure-render - Visualization of labels and ways
//!
//! This crate provides:
//!
//! - **Colorizing**: One random color per region of a label grid
//! - **Overlay**: The found way drawn on top of the source image
//! - **Graphics**: Bresenham lines, thick lines and box outlines
//!
//! Random colors come from a caller-supplied [`rand::Rng`], so a seeded
//! generator gives the same picture on every run.
//!
//! # Examples
//!
//! ```
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use treasure_core::LabelGrid;
//! use treasure_render::{ColorizeOptions, colorize_labels};
//!
//! let labels = LabelGrid::from_data(3, 1, vec![0, 2, 3]).unwrap();
//! let mut rng = StdRng::seed_from_u64(42);
//! let image = colorize_labels(&labels, &ColorizeOptions::default(), &mut rng).unwrap();
//! assert_ne!(image.get_pixel(1, 0).unwrap(), image.get_pixel(2, 0).unwrap());
//! ```

mod error;
pub mod graphics;
pub mod overlay;
pub mod palette;

pub use error::{RenderError, RenderResult};

pub use graphics::{
    generate_box_points, generate_line_points, generate_wide_line_points, render_box, render_line,
    render_points,
};
pub use overlay::{OverlayOptions, draw_way};
pub use palette::{ColorizeOptions, MAX_PALETTE_SIZE, colorize_labels, generate_palette};
