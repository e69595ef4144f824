//! treasure-test - Regression test helpers for the treasure workspace
//!
//! Provides [`RegParams`], which accumulates numbered comparisons and
//! reports every failure at [`RegParams::cleanup`], and [`SceneBuilder`],
//! which rasterizes synthetic puzzle scenes (arrows as ellipses, treasure
//! markers as disks) into a mask and a lightness map.
//!
//! # Usage
//!
//! ```
//! use treasure_test::{RegParams, SceneBuilder};
//!
//! let scene = SceneBuilder::new(64, 64)
//!     .disk(32.0, 32.0, 6.0, 0.7)
//!     .build()
//!     .unwrap();
//!
//! let mut rp = RegParams::new("scene");
//! rp.compare_values(1.0, scene.mask.get_pixel(32, 32).unwrap() as u8 as f64, 0.0);
//! assert!(rp.cleanup());
//! ```

mod params;
mod scene;

pub use params::RegParams;
pub use scene::{Scene, SceneBuilder};
