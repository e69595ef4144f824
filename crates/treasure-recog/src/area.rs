//! Classified regions
//!
//! A region's kind is the outcome of classification, so the kinds form a
//! closed tagged union rather than a type hierarchy.

use treasure_core::Centroid;

/// Classification outcome of a region
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AreaType {
    /// The unique arrow where the walk begins
    StartArrow,
    /// An arrow along the way
    WayArrow,
    /// Not arrow-shaped
    Treasure,
    /// Arrow-shaped but with the brightness of neither arrow kind
    Unclassified,
}

impl AreaType {
    pub fn is_arrow(self) -> bool {
        matches!(self, AreaType::StartArrow | AreaType::WayArrow)
    }
}

/// Directional region
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arrow {
    /// Region id
    pub id: u32,
    pub centroid: Centroid,
    /// Principal-axis angle in radians, measured once at classification
    pub orientation: f64,
    /// `StartArrow` or `WayArrow`
    pub area_type: AreaType,
}

/// Region that may be the destination of a way
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreasureCandidate {
    /// Region id
    pub id: u32,
    pub centroid: Centroid,
}

/// A region together with its classification
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ClassifiedArea {
    Start(Arrow),
    Way(Arrow),
    Treasure(TreasureCandidate),
    Unclassified(TreasureCandidate),
}

impl ClassifiedArea {
    pub fn area_type(&self) -> AreaType {
        match self {
            ClassifiedArea::Start(_) => AreaType::StartArrow,
            ClassifiedArea::Way(_) => AreaType::WayArrow,
            ClassifiedArea::Treasure(_) => AreaType::Treasure,
            ClassifiedArea::Unclassified(_) => AreaType::Unclassified,
        }
    }

    /// Region id
    pub fn id(&self) -> u32 {
        match self {
            ClassifiedArea::Start(a) | ClassifiedArea::Way(a) => a.id,
            ClassifiedArea::Treasure(t) | ClassifiedArea::Unclassified(t) => t.id,
        }
    }

    pub fn centroid(&self) -> Centroid {
        match self {
            ClassifiedArea::Start(a) | ClassifiedArea::Way(a) => a.centroid,
            ClassifiedArea::Treasure(t) | ClassifiedArea::Unclassified(t) => t.centroid,
        }
    }

    /// The arrow, for start and way arrows
    pub fn as_arrow(&self) -> Option<&Arrow> {
        match self {
            ClassifiedArea::Start(a) | ClassifiedArea::Way(a) => Some(a),
            _ => None,
        }
    }

    /// The candidate, for every region that is not an arrow
    pub fn as_treasure_candidate(&self) -> Option<&TreasureCandidate> {
        match self {
            ClassifiedArea::Treasure(t) | ClassifiedArea::Unclassified(t) => Some(t),
            _ => None,
        }
    }
}
