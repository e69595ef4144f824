//! Path assembly
//!
//! Starting at the start arrow, the walk repeatedly looks along the current
//! arrow's axis, in both directions, inside a cone of fixed half-angle:
//!
//! - if the nearest treasure candidate in the cone is strictly closer than
//!   the nearest unvisited way arrow in the cone, the walk ends there
//! - otherwise the nearest way arrow becomes the current arrow
//! - with nothing in the cone the walk fails
//!
//! Every non-final step consumes a way arrow, so the walk ends after at
//! most `way_arrows.len() + 1` steps.

use crate::area::{AreaType, Arrow, TreasureCandidate};
use crate::classify::AreaSet;
use crate::config::PathFinderOptions;
use crate::{RecogError, RecogResult};
use treasure_core::Centroid;

/// Tolerance of the cone boundary test
const CONE_EPSILON: f64 = 1e-9;

/// Whether the vector (dx, dy) lies within `half_angle` of the axis at
/// `angle`, pointing either way along it
///
/// The vector is rotated into the axis frame and accepted when its lateral
/// component is at most `sin(half_angle)` of its length. A zero vector is
/// never inside.
pub fn within_cone(dx: f64, dy: f64, angle: f64, half_angle: f64) -> bool {
    let length = dx.hypot(dy);
    if length == 0.0 || !length.is_finite() {
        return false;
    }
    let (sin, cos) = angle.sin_cos();
    let lateral = dy * cos - dx * sin;
    (lateral / length).abs() <= half_angle.sin() + CONE_EPSILON
}

/// Whether `target` lies inside the cone of an arrow at `origin`
pub fn locate_on_line(origin: Centroid, target: Centroid, angle: f64, half_angle: f64) -> bool {
    let (dx, dy) = origin.offset_to(&target);
    within_cone(dx, dy, angle, half_angle)
}

/// Ordered path from the start arrow to its treasure
#[derive(Debug, Clone, PartialEq)]
pub struct Way {
    arrows: Vec<Arrow>,
    destination: TreasureCandidate,
}

impl Way {
    /// Build a way from arrows in walk order and its destination
    ///
    /// # Errors
    ///
    /// Returns `RecogError::InvalidParameter` unless the first arrow is the
    /// only start arrow.
    pub fn new(arrows: Vec<Arrow>, destination: TreasureCandidate) -> RecogResult<Self> {
        let starts_ok = arrows
            .first()
            .is_some_and(|a| a.area_type == AreaType::StartArrow)
            && arrows[1..].iter().all(|a| a.area_type == AreaType::WayArrow);
        if !starts_ok {
            return Err(RecogError::InvalidParameter(
                "a way starts with one start arrow followed by way arrows".to_string(),
            ));
        }
        Ok(Self {
            arrows,
            destination,
        })
    }

    /// The start arrow
    pub fn start(&self) -> &Arrow {
        &self.arrows[0]
    }

    /// Way arrows in walk order, excluding the start
    pub fn way_arrows(&self) -> &[Arrow] {
        &self.arrows[1..]
    }

    /// Every arrow in walk order, start first
    pub fn arrows(&self) -> &[Arrow] {
        &self.arrows
    }

    pub fn destination(&self) -> &TreasureCandidate {
        &self.destination
    }

    /// Number of arrows on the way (at least 1)
    pub fn len(&self) -> usize {
        self.arrows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arrows.is_empty()
    }

    /// Centroids in walk order, ending at the destination
    pub fn waypoints(&self) -> Vec<Centroid> {
        self.arrows
            .iter()
            .map(|a| a.centroid)
            .chain(std::iter::once(self.destination.centroid))
            .collect()
    }
}

/// State of a walk
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WalkState {
    /// More steps are needed
    Walking,
    /// The walk reached a treasure candidate
    Found(TreasureCandidate),
    /// The current arrow's cone is empty
    Failed,
}

/// Step-wise walker over an [`AreaSet`]
#[derive(Debug, Clone)]
pub struct PathFinder<'a> {
    remaining: Vec<Arrow>,
    treasures: &'a [TreasureCandidate],
    arrows: Vec<Arrow>,
    half_angle: f64,
    state: WalkState,
}

/// Nearest item inside the cone; the first listed wins a tie
fn nearest_in_cone<T>(
    current: &Arrow,
    items: &[T],
    half_angle: f64,
    centroid: impl Fn(&T) -> Centroid,
) -> Option<(usize, f64)> {
    let mut best: Option<(usize, f64)> = None;
    for (i, item) in items.iter().enumerate() {
        let target = centroid(item);
        if !locate_on_line(current.centroid, target, current.orientation, half_angle) {
            continue;
        }
        let d = current.centroid.distance(&target);
        if best.is_none_or(|(_, bd)| d < bd) {
            best = Some((i, d));
        }
    }
    best
}

impl<'a> PathFinder<'a> {
    /// Prepare a walk from the start arrow of `areas`
    pub fn new(areas: &'a AreaSet, options: &PathFinderOptions) -> RecogResult<Self> {
        options.validate()?;
        Ok(Self {
            remaining: areas.way_arrows.clone(),
            treasures: &areas.treasures,
            arrows: vec![areas.start],
            half_angle: options.cone_half_angle(),
            state: WalkState::Walking,
        })
    }

    pub fn state(&self) -> WalkState {
        self.state
    }

    /// The arrow the next step looks from
    pub fn current(&self) -> &Arrow {
        // arrows always holds the start arrow
        &self.arrows[self.arrows.len() - 1]
    }

    /// Way arrows not visited yet
    pub fn remaining(&self) -> &[Arrow] {
        &self.remaining
    }

    /// Advance one step; a finished walk keeps its state
    pub fn step(&mut self) -> WalkState {
        if self.state != WalkState::Walking {
            return self.state;
        }

        let current = *self.current();
        let arrow = nearest_in_cone(&current, &self.remaining, self.half_angle, |a| a.centroid);
        let treasure = nearest_in_cone(&current, self.treasures, self.half_angle, |t| t.centroid);

        let d_arrow = arrow.map_or(f64::INFINITY, |(_, d)| d);
        let d_treasure = treasure.map_or(f64::INFINITY, |(_, d)| d);

        self.state = match (arrow, treasure) {
            (_, Some((ti, _))) if d_arrow > d_treasure => {
                let found = self.treasures[ti];
                log::debug!(
                    "arrow {} -> treasure {} at distance {d_treasure:.1}",
                    current.id,
                    found.id
                );
                WalkState::Found(found)
            }
            (Some((ai, _)), _) => {
                let next = self.remaining.remove(ai);
                log::debug!(
                    "arrow {} -> arrow {} at distance {d_arrow:.1}",
                    current.id,
                    next.id
                );
                self.arrows.push(next);
                WalkState::Walking
            }
            _ => {
                log::debug!("arrow {}: nothing inside the cone", current.id);
                WalkState::Failed
            }
        };
        self.state
    }

    /// Run the walk to completion
    ///
    /// # Errors
    ///
    /// Returns `RecogError::PathNotFound` if the walk fails.
    pub fn run(mut self) -> RecogResult<Way> {
        loop {
            match self.step() {
                WalkState::Walking => continue,
                WalkState::Found(destination) => {
                    return Ok(Way {
                        arrows: self.arrows,
                        destination,
                    });
                }
                WalkState::Failed => {
                    let from = self.current().centroid;
                    let steps = self.arrows.len() - 1;
                    log::warn!(
                        "no path found: stuck at ({}, {}) after {steps} steps",
                        from.x,
                        from.y
                    );
                    return Err(RecogError::PathNotFound { from, steps });
                }
            }
        }
    }
}

/// Assemble the way from the start arrow to a treasure candidate
pub fn find_way(areas: &AreaSet, options: &PathFinderOptions) -> RecogResult<Way> {
    let way = PathFinder::new(areas, options)?.run()?;
    log::info!(
        "way found: {} arrows, treasure {} at ({}, {})",
        way.len(),
        way.destination.id,
        way.destination.centroid.x,
        way.destination.centroid.y
    );
    Ok(way)
}
