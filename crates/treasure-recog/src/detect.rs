//! Treasure detection pipeline
//!
//! Mask and brightness in, way out: label the mask, measure every region,
//! classify, then walk from the start arrow.

use crate::area::ClassifiedArea;
use crate::classify::{AreaSet, classify_analyzed};
use crate::config::{ClassifierConfig, PathFinderOptions};
use crate::path::{Way, find_way};
use crate::RecogResult;
use treasure_core::{BitGrid, BrightnessSampler, Error as CoreError, LabelGrid, Region};
use treasure_region::{AreaStats, ConnectivityType, analyze_regions, find_regions};

/// Options for [`find_treasure`]
#[derive(Debug, Clone, Default)]
pub struct DetectOptions {
    /// Region connectivity (default: 4-way)
    pub connectivity: ConnectivityType,
    pub classifier: ClassifierConfig,
    pub path: PathFinderOptions,
}

impl DetectOptions {
    /// Create options with default values
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_connectivity(mut self, connectivity: ConnectivityType) -> Self {
        self.connectivity = connectivity;
        self
    }

    pub fn with_classifier(mut self, classifier: ClassifierConfig) -> Self {
        self.classifier = classifier;
        self
    }

    pub fn with_path(mut self, path: PathFinderOptions) -> Self {
        self.path = path;
        self
    }

    /// Validate options
    pub fn validate(&self) -> RecogResult<()> {
        self.classifier.validate()?;
        self.path.validate()
    }
}

/// Everything the pipeline derived from one image
#[derive(Debug, Clone)]
pub struct Detection {
    /// Region labels, 0 for background
    pub labels: LabelGrid,
    /// Regions in ascending id order
    pub regions: Vec<Region>,
    /// Measurements, parallel to `regions`
    pub areas: Vec<AreaStats>,
    /// Classification, parallel to `regions`
    pub classified: Vec<ClassifiedArea>,
    pub way: Way,
}

impl Detection {
    /// Region with the given id
    pub fn region(&self, id: u32) -> Option<&Region> {
        self.regions
            .binary_search_by_key(&id, |r| r.id())
            .ok()
            .map(|i| &self.regions[i])
    }

    /// The region the way ends at
    pub fn destination_region(&self) -> Option<&Region> {
        self.region(self.way.destination().id)
    }
}

/// Locate the treasure in a foreground mask
///
/// # Arguments
///
/// * `mask` - Foreground mask
/// * `sampler` - Brightness of the same image
/// * `options` - Detection options
///
/// # Errors
///
/// Returns an error if the options are invalid, the sampler reports a
/// different size than the mask, the image holds zero or several start
/// arrows, or no way reaches a treasure candidate.
pub fn find_treasure<S: BrightnessSampler + ?Sized>(
    mask: &BitGrid,
    sampler: &S,
    options: &DetectOptions,
) -> RecogResult<Detection> {
    options.validate()?;

    if let Some(dims) = sampler.dimensions() {
        if dims != mask.dimensions() {
            return Err(CoreError::DimensionMismatch {
                expected: mask.dimensions(),
                actual: dims,
            }
            .into());
        }
    }

    let (labels, regions) = find_regions(mask, options.connectivity)?;
    let areas = analyze_regions(&regions);
    let classified = classify_analyzed(&regions, &areas, sampler, &options.classifier);

    let area_set = AreaSet::from_classified(&classified)?;
    let way = find_way(&area_set, &options.path)?;

    Ok(Detection {
        labels,
        regions,
        areas,
        classified,
        way,
    })
}
