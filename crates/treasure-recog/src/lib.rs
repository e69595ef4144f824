//! treasure-recog - Arrow recognition and way finding
//!
//! This crate provides:
//!
//! - **Classification**: Sorting regions into start arrows, way arrows and
//!   treasure candidates from their elongation and mean brightness
//! - **Path assembly**: Walking from the start arrow along arrow axes to
//!   the treasure
//! - **Detection**: The full mask-to-way pipeline
//!
//! # Quick Start
//!
//! ```no_run
//! use treasure_core::{BitGrid, BrightnessMap};
//! use treasure_recog::{DetectOptions, find_treasure};
//!
//! # let mask = BitGrid::new(200, 120).unwrap();
//! # let lightness = BrightnessMap::new(200, 120).unwrap();
//! let detection = find_treasure(&mask, &lightness, &DetectOptions::default()).unwrap();
//! let treasure = detection.way.destination();
//! println!("treasure at ({}, {})", treasure.centroid.x, treasure.centroid.y);
//! ```
//!
//! # Modules
//!
//! - [`classify`]: Shape and brightness gates
//! - [`path`]: Cone test and the way-finding walk
//! - [`detect`]: End-to-end pipeline

pub mod area;
pub mod classify;
pub mod config;
pub mod detect;
mod error;
pub mod path;

pub use error::{RecogError, RecogResult};

// Re-export commonly used types
pub use area::{AreaType, Arrow, ClassifiedArea, TreasureCandidate};
pub use classify::{AreaSet, classify_region, classify_regions, mean_brightness};
pub use config::{Band, ClassifierConfig, PathFinderOptions};
pub use detect::{DetectOptions, Detection, find_treasure};
pub use path::{PathFinder, WalkState, Way, find_way, locate_on_line, within_cone};
