//! Treasure Core - Basic data structures for treasure map analysis
//!
//! This crate provides the containers shared by every stage of the
//! pipeline:
//!
//! - [`Grid`] with the [`BitGrid`], [`LabelGrid`], [`BrightnessMap`] and
//!   [`RgbGrid`] instantiations
//! - [`BrightnessSampler`] - per-pixel brightness source used by the classifier
//! - [`PixelCoord`] / [`Centroid`] / [`BoundingBox`] - integer geometry
//! - [`Region`] - a labeled set of foreground pixels
//! - [`Color`] - 8-bit RGB color

pub mod color;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod region;

pub use color::{Color, RgbGrid};
pub use error::{Error, Result};
pub use geometry::{BoundingBox, Centroid, PixelCoord};
pub use grid::{BitGrid, BrightnessMap, BrightnessSampler, Grid, LabelGrid};
pub use region::Region;
