//! Classifier and path finder configuration
//!
//! The thresholds are empirical constants tuned for hand-drawn puzzle
//! images. They are passed explicitly so callers can adjust them per run.

use crate::{RecogError, RecogResult};

/// Closed interval `[min, max]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Band {
    pub min: f64,
    pub max: f64,
}

impl Band {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Whether `value` lies in the band, bounds included
    #[inline]
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Whether two bands share at least one value
    pub fn overlaps(&self, other: &Band) -> bool {
        self.min <= other.max && other.min <= self.max
    }

    fn validate(&self, name: &str) -> RecogResult<()> {
        if !self.min.is_finite() || !self.max.is_finite() {
            return Err(RecogError::InvalidParameter(format!(
                "{name} band must be finite"
            )));
        }
        if self.min > self.max {
            return Err(RecogError::InvalidParameter(format!(
                "{name} band is inverted: [{}, {}]",
                self.min, self.max
            )));
        }
        Ok(())
    }
}

/// Thresholds for arrow classification
#[derive(Debug, Clone)]
pub struct ClassifierConfig {
    /// Accepted elongation of arrow-shaped regions (default: [3.7, 4.2])
    pub elongation: Band,

    /// Mean brightness of a start arrow (default: [0.45, 0.52])
    pub start_brightness: Band,

    /// Mean brightness of a waypoint arrow (default: [0.92, 1.0])
    pub way_brightness: Band,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            elongation: Band::new(3.7, 4.2),
            start_brightness: Band::new(0.45, 0.52),
            way_brightness: Band::new(0.92, 1.0),
        }
    }
}

impl ClassifierConfig {
    /// Create a configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the accepted elongation band
    pub fn with_elongation(mut self, band: Band) -> Self {
        self.elongation = band;
        self
    }

    /// Set the start arrow brightness band
    pub fn with_start_brightness(mut self, band: Band) -> Self {
        self.start_brightness = band;
        self
    }

    /// Set the waypoint arrow brightness band
    pub fn with_way_brightness(mut self, band: Band) -> Self {
        self.way_brightness = band;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> RecogResult<()> {
        self.elongation.validate("elongation")?;
        self.start_brightness.validate("start brightness")?;
        self.way_brightness.validate("way brightness")?;

        if self.elongation.min < 1.0 {
            return Err(RecogError::InvalidParameter(
                "elongation band must start at 1.0 or above".to_string(),
            ));
        }
        if self.start_brightness.overlaps(&self.way_brightness) {
            return Err(RecogError::InvalidParameter(
                "start and way brightness bands overlap".to_string(),
            ));
        }
        Ok(())
    }
}

/// Options for path assembly
#[derive(Debug, Clone)]
pub struct PathFinderOptions {
    /// Half-angle of the cone around an arrow's axis in degrees
    /// (default: 20.0)
    pub cone_half_angle_deg: f64,
}

impl Default for PathFinderOptions {
    fn default() -> Self {
        Self {
            cone_half_angle_deg: 20.0,
        }
    }
}

impl PathFinderOptions {
    /// Create options with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the cone half-angle in degrees
    pub fn with_cone_half_angle(mut self, degrees: f64) -> Self {
        self.cone_half_angle_deg = degrees;
        self
    }

    /// Cone half-angle in radians
    pub fn cone_half_angle(&self) -> f64 {
        self.cone_half_angle_deg.to_radians()
    }

    /// Validate options
    pub fn validate(&self) -> RecogResult<()> {
        if !(self.cone_half_angle_deg > 0.0 && self.cone_half_angle_deg < 90.0) {
            return Err(RecogError::InvalidParameter(format!(
                "cone half-angle must be in (0, 90) degrees, got {}",
                self.cone_half_angle_deg
            )));
        }
        Ok(())
    }
}
