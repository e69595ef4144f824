//! Lightness histogram and binarization threshold selection
//!
//! The threshold is derived from the lightness histogram:
//!
//! 1. Build the histogram with lightness rounded to 5 decimals
//! 2. Optionally smooth it with a Gaussian kernel whose bandwidth follows
//!    Scott's rule over the distinct lightness values
//! 3. Take the mode `hmax`, then walk from the brightest level down until
//!    `percentage` of the samples at or above the mode are covered; the
//!    level reached is `b`
//! 4. Reflect `b` about the mode: `threshold = |hmax - (b - hmax)|`

use std::collections::BTreeMap;

use crate::error::{ColorError, ColorResult};
use rayon::prelude::*;
use treasure_core::{BitGrid, BrightnessMap};

/// Histogram keys are lightness times this scale, rounded
const KEY_SCALE: f64 = 1e5;

/// Count of samples per rounded lightness level
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LightnessHistogram {
    bins: BTreeMap<u32, u32>,
}

fn to_key(lightness: f64) -> u32 {
    (lightness.clamp(0.0, 1.0) * KEY_SCALE).round() as u32
}

fn from_key(key: u32) -> f64 {
    key as f64 / KEY_SCALE
}

impl LightnessHistogram {
    /// Create an empty histogram
    pub fn new() -> Self {
        Self::default()
    }

    /// Histogram of every sample in a lightness map
    pub fn from_map(map: &BrightnessMap) -> Self {
        map.data().iter().map(|&l| l as f64).collect()
    }

    /// Build from explicit (lightness, count) pairs
    pub fn from_counts<I>(counts: I) -> Self
    where
        I: IntoIterator<Item = (f64, u32)>,
    {
        let mut hist = Self::new();
        for (lightness, count) in counts {
            *hist.bins.entry(to_key(lightness)).or_default() += count;
        }
        hist
    }

    /// Add one sample; NaN samples are ignored
    pub fn add(&mut self, lightness: f64) {
        if lightness.is_nan() {
            return;
        }
        *self.bins.entry(to_key(lightness)).or_default() += 1;
    }

    /// Number of distinct lightness levels
    pub fn len(&self) -> usize {
        self.bins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }

    /// Total number of samples
    pub fn total(&self) -> u64 {
        self.bins.values().map(|&c| c as u64).sum()
    }

    /// Count at a lightness level
    pub fn count(&self, lightness: f64) -> u32 {
        self.bins.get(&to_key(lightness)).copied().unwrap_or(0)
    }

    /// (lightness, count) pairs in ascending lightness
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (f64, u32)> + '_ {
        self.bins.iter().map(|(&k, &c)| (from_key(k), c))
    }

    /// Distinct lightness levels in ascending order
    pub fn levels(&self) -> Vec<f64> {
        self.bins.keys().map(|&k| from_key(k)).collect()
    }

    /// Most frequent level; ties go to the brighter level
    pub fn mode(&self) -> Option<f64> {
        self.bins
            .iter()
            .fold(None, |best: Option<(u32, u32)>, (&k, &c)| match best {
                Some((_, bc)) if bc > c => best,
                _ => Some((k, c)),
            })
            .map(|(k, _)| from_key(k))
    }
}

impl FromIterator<f64> for LightnessHistogram {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        let mut hist = Self::new();
        for l in iter {
            hist.add(l);
        }
        hist
    }
}

/// Standard normal density
pub fn gaussian_kernel(x: f64) -> f64 {
    (-0.5 * x * x).exp() / (2.0 * std::f64::consts::PI).sqrt()
}

/// Smooth histogram counts with a Gaussian kernel
///
/// Each level's count becomes the kernel-weighted mean of all counts,
/// rounded to the nearest integer. Levels are unchanged.
///
/// # Errors
///
/// Returns `ColorError::InvalidParameters` unless `bandwidth` is positive
/// and finite.
pub fn kernel_smooth(hist: &LightnessHistogram, bandwidth: f64) -> ColorResult<LightnessHistogram> {
    if !(bandwidth > 0.0 && bandwidth.is_finite()) {
        return Err(ColorError::InvalidParameters(format!(
            "bandwidth must be positive, got {bandwidth}"
        )));
    }

    let points: Vec<(u32, f64, f64)> = hist
        .bins
        .iter()
        .map(|(&k, &c)| (k, from_key(k), c as f64))
        .collect();

    let bins = points
        .par_iter()
        .map(|&(key, xi, _)| {
            let (weighted, weights) =
                points
                    .iter()
                    .fold((0.0, 0.0), |(weighted, weights), &(_, xj, yj)| {
                        let w = gaussian_kernel((xj - xi) / bandwidth);
                        (weighted + w * yj, weights + w)
                    });
            (key, (weighted / weights).round() as u32)
        })
        .collect();

    Ok(LightnessHistogram { bins })
}

/// Population standard deviation, `None` for an empty slice
pub fn std_deviation(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
    Some(variance.sqrt())
}

/// Scott's rule kernel width: `3.5 * sigma * n^(-1/3)`
pub fn scott_bandwidth(sigma: f64, n: usize) -> f64 {
    3.5 * sigma * (n as f64).powf(-1.0 / 3.0)
}

/// Threshold from the mode and the bright tail of a histogram
///
/// # Errors
///
/// Returns `ColorError::EmptyHistogram` for an empty histogram and
/// `ColorError::InvalidParameters` unless `percentage` is in (0, 1].
pub fn binarization_threshold(hist: &LightnessHistogram, percentage: f64) -> ColorResult<f64> {
    if !(percentage > 0.0 && percentage <= 1.0) {
        return Err(ColorError::InvalidParameters(format!(
            "percentage must be in (0, 1], got {percentage}"
        )));
    }
    let hmax = hist.mode().ok_or(ColorError::EmptyHistogram)?;

    let total: u64 = hist
        .iter()
        .filter(|&(l, _)| l >= hmax)
        .map(|(_, c)| c as u64)
        .sum();
    let target = (total as f64 * percentage) as u64;

    let mut covered = 0u64;
    let mut b = hmax;
    for (level, count) in hist.iter().rev() {
        if level < hmax {
            break;
        }
        covered += count as u64;
        if covered >= target {
            b = level;
            break;
        }
    }

    Ok((hmax - (b - hmax)).abs())
}

/// Options for automatic threshold selection
#[derive(Debug, Clone)]
pub struct ThresholdOptions {
    /// Fraction of samples at or above the mode used to find the bright
    /// tail (0, 1]
    pub percentage: f64,
    /// Smoothing bandwidth; `None` selects Scott's rule, `Some(0.0)`
    /// disables smoothing
    pub bandwidth: Option<f64>,
}

impl Default for ThresholdOptions {
    fn default() -> Self {
        Self {
            percentage: 0.05,
            bandwidth: None,
        }
    }
}

impl ThresholdOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_percentage(mut self, percentage: f64) -> Self {
        self.percentage = percentage;
        self
    }

    pub fn with_bandwidth(mut self, bandwidth: f64) -> Self {
        self.bandwidth = Some(bandwidth);
        self
    }

    /// Validate the options
    pub fn validate(&self) -> ColorResult<()> {
        if !(self.percentage > 0.0 && self.percentage <= 1.0) {
            return Err(ColorError::InvalidParameters(format!(
                "percentage must be in (0, 1], got {}",
                self.percentage
            )));
        }
        if let Some(bw) = self.bandwidth {
            if !(bw >= 0.0 && bw.is_finite()) {
                return Err(ColorError::InvalidParameters(format!(
                    "bandwidth must be non-negative, got {bw}"
                )));
            }
        }
        Ok(())
    }
}

/// Select a binarization threshold for a lightness map
pub fn select_threshold(map: &BrightnessMap, options: &ThresholdOptions) -> ColorResult<f64> {
    options.validate()?;

    let hist = LightnessHistogram::from_map(map);
    let bandwidth = match options.bandwidth {
        Some(bw) => bw,
        None => {
            let levels = hist.levels();
            std_deviation(&levels)
                .map(|sigma| scott_bandwidth(sigma, levels.len()))
                .unwrap_or(0.0)
        }
    };

    let hist = if bandwidth > 0.0 {
        kernel_smooth(&hist, bandwidth)?
    } else {
        hist
    };

    let threshold = binarization_threshold(&hist, options.percentage)?;
    log::info!(
        "binarization threshold {threshold:.5} ({} levels, bandwidth {bandwidth:.5})",
        hist.len()
    );
    Ok(threshold)
}

/// Foreground mask of pixels with lightness at or above `threshold`
pub fn binarize(map: &BrightnessMap, threshold: f64) -> BitGrid {
    map.map(|&l| l as f64 >= threshold)
}
