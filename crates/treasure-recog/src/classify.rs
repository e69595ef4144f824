//! Region classification
//!
//! Each region passes two gates:
//!
//! 1. **Shape**: the elongation of its second-moment matrix must be defined
//!    and inside the configured band. Regions failing this gate are treasure
//!    candidates.
//! 2. **Brightness**: the mean sampled brightness selects a way arrow or a
//!    start arrow. Arrow-shaped regions in neither band stay unclassified
//!    and remain treasure candidates.
//!
//! A failed gate is a classification outcome, not an error.

use crate::area::{AreaType, Arrow, ClassifiedArea, TreasureCandidate};
use crate::config::ClassifierConfig;
use crate::{RecogError, RecogResult};
use rayon::prelude::*;
use treasure_core::{BrightnessSampler, Region};
use treasure_region::{AreaStats, SecondOrderMoments, analyze_regions};

/// Smallest chunk handed to a rayon worker
const MIN_PAR_LEN: usize = 4096;

/// Mean brightness over a region's pixels
pub fn mean_brightness<S: BrightnessSampler + ?Sized>(region: &Region, sampler: &S) -> f64 {
    if region.is_empty() {
        return 0.0;
    }
    let sum: f64 = region
        .pixels()
        .par_iter()
        .with_min_len(MIN_PAR_LEN)
        .map(|&p| sampler.sample(p) as f64)
        .sum();
    sum / region.len() as f64
}

/// Shape gate: elongation defined and inside the configured band
pub fn is_arrow_shaped(moments: &SecondOrderMoments, config: &ClassifierConfig) -> bool {
    moments
        .elongation()
        .is_some_and(|e| config.elongation.contains(e))
}

/// Brightness gate for an arrow-shaped region
pub fn brightness_class(mean: f64, config: &ClassifierConfig) -> AreaType {
    if config.way_brightness.contains(mean) {
        AreaType::WayArrow
    } else if config.start_brightness.contains(mean) {
        AreaType::StartArrow
    } else {
        AreaType::Unclassified
    }
}

/// Classify a region whose centroid and moments are already measured
///
/// `stats` must describe `region`.
pub fn classify_measured<S: BrightnessSampler + ?Sized>(
    region: &Region,
    stats: &AreaStats,
    sampler: &S,
    config: &ClassifierConfig,
) -> ClassifiedArea {
    let candidate = TreasureCandidate {
        id: stats.id,
        centroid: stats.centroid,
    };

    if !is_arrow_shaped(&stats.moments, config) {
        log::debug!(
            "region {}: elongation {:?} outside {:?}, treasure candidate",
            stats.id,
            stats.moments.elongation(),
            config.elongation
        );
        return ClassifiedArea::Treasure(candidate);
    }

    let mean = mean_brightness(region, sampler);
    let arrow = |area_type| Arrow {
        id: stats.id,
        centroid: stats.centroid,
        orientation: stats.moments.orientation(),
        area_type,
    };

    let area = match brightness_class(mean, config) {
        AreaType::WayArrow => ClassifiedArea::Way(arrow(AreaType::WayArrow)),
        AreaType::StartArrow => ClassifiedArea::Start(arrow(AreaType::StartArrow)),
        _ => ClassifiedArea::Unclassified(candidate),
    };
    log::debug!(
        "region {}: arrow-shaped, brightness {mean:.4} -> {:?}",
        stats.id,
        area.area_type()
    );
    area
}

/// Classify a single region
pub fn classify_region<S: BrightnessSampler + ?Sized>(
    region: &Region,
    sampler: &S,
    config: &ClassifierConfig,
) -> ClassifiedArea {
    let stats = AreaStats::of(region);
    classify_measured(region, &stats, sampler, config)
}

/// Classify every region, in input order
pub fn classify_regions<S: BrightnessSampler + ?Sized>(
    regions: &[Region],
    sampler: &S,
    config: &ClassifierConfig,
) -> Vec<ClassifiedArea> {
    let stats = analyze_regions(regions);
    classify_analyzed(regions, &stats, sampler, config)
}

/// Classify regions with precomputed stats (`stats[i]` describes
/// `regions[i]`)
pub(crate) fn classify_analyzed<S: BrightnessSampler + ?Sized>(
    regions: &[Region],
    stats: &[AreaStats],
    sampler: &S,
    config: &ClassifierConfig,
) -> Vec<ClassifiedArea> {
    regions
        .par_iter()
        .zip(stats.par_iter())
        .map(|(region, s)| classify_measured(region, s, sampler, config))
        .collect()
}

/// Classified regions partitioned for path assembly
#[derive(Debug, Clone)]
pub struct AreaSet {
    pub start: Arrow,
    /// Way arrows in region id order
    pub way_arrows: Vec<Arrow>,
    /// Treasure and unclassified regions in region id order
    pub treasures: Vec<TreasureCandidate>,
}

impl AreaSet {
    /// Partition classified areas
    ///
    /// # Errors
    ///
    /// Returns `RecogError::AmbiguousStart` unless exactly one start arrow
    /// is present.
    pub fn from_classified(areas: &[ClassifiedArea]) -> RecogResult<Self> {
        let mut starts = Vec::new();
        let mut way_arrows = Vec::new();
        let mut treasures = Vec::new();

        for area in areas {
            match area {
                ClassifiedArea::Start(a) => starts.push(*a),
                ClassifiedArea::Way(a) => way_arrows.push(*a),
                ClassifiedArea::Treasure(t) | ClassifiedArea::Unclassified(t) => {
                    treasures.push(*t)
                }
            }
        }

        let start = match starts.as_slice() {
            [start] => *start,
            _ => {
                log::warn!("found {} start arrows, expected exactly one", starts.len());
                return Err(RecogError::AmbiguousStart {
                    found: starts.len(),
                });
            }
        };

        log::debug!(
            "start arrow {} at ({}, {}), {} way arrows, {} treasure candidates",
            start.id,
            start.centroid.x,
            start.centroid.y,
            way_arrows.len(),
            treasures.len()
        );
        Ok(Self {
            start,
            way_arrows,
            treasures,
        })
    }
}
