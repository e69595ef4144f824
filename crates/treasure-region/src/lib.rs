//! treasure-region - Region segmentation and shape measurement
//!
//! This crate provides:
//!
//! - **Region labeling** - Splitting a foreground mask into connected regions
//! - **Seed fill** - Work-list flood fill of a single region
//! - **Moments** - Centroids, central moments, orientation and elongation
//!
//! # Examples
//!
//! ```
//! use treasure_core::BitGrid;
//! use treasure_region::{ConnectivityType, analyze_regions, find_regions};
//!
//! let mut mask = BitGrid::new(10, 10).unwrap();
//! for x in 2..8 {
//!     mask.set_pixel(x, 4, true).unwrap();
//!     mask.set_pixel(x, 5, true).unwrap();
//! }
//!
//! let (_labels, regions) = find_regions(&mask, ConnectivityType::FourWay).unwrap();
//! assert_eq!(regions.len(), 1);
//! assert_eq!(regions[0].id(), 4 * 10 + 2 + 1);
//!
//! let stats = analyze_regions(&regions);
//! assert_eq!(stats[0].pixel_count, 12);
//! ```

pub mod conncomp;
pub mod error;
pub mod label;
pub mod moments;
pub mod seedfill;

pub use conncomp::ConnectivityType;
pub use error::{RegionError, RegionResult};
pub use label::{count_regions, extract_regions, find_regions, label_regions};
pub use moments::{
    AreaStats, SecondOrderMoments, analyze_regions, central_moment, centroid, elongation,
    orientation,
};
pub use seedfill::flood_fill_label;
