//! Discrete image moments of regions
//!
//! Centroids and central moments are sums over a region's pixels. The sums
//! are order independent, so they run as rayon reductions; integer
//! accumulation keeps them exact and deterministic regardless of how the
//! work is split.
//!
//! From the second-order moments μ11, μ20 and μ02:
//!
//! - orientation `θ = ½·atan2(2μ11, μ20 − μ02)` (radians, major axis from +x)
//! - elongation `(s + r) / (s − r)` with `s = μ20 + μ02` and
//!   `r = √((μ20 − μ02)² + 4μ11²)`, the ratio of the moment matrix
//!   eigenvalues

use rayon::prelude::*;
use treasure_core::{BoundingBox, Centroid, Region};

/// Smallest chunk handed to a rayon worker
const MIN_PAR_LEN: usize = 4096;

/// Pixel-count-weighted mean position, rounded half away from zero
pub fn centroid(region: &Region) -> Centroid {
    let n = region.len();
    if n == 0 {
        return Centroid::new(0, 0);
    }

    let (sum_x, sum_y) = region
        .pixels()
        .par_iter()
        .with_min_len(MIN_PAR_LEN)
        .map(|p| (p.x as i64, p.y as i64))
        .reduce(|| (0, 0), |a, b| (a.0 + b.0, a.1 + b.1));

    Centroid::new(
        (sum_x as f64 / n as f64).round() as i32,
        (sum_y as f64 / n as f64).round() as i32,
    )
}

/// Discrete central moment Σ (x − cx)^i · (y − cy)^j over the region
///
/// Summed in 128-bit integers; orders large enough to overflow fall back to
/// a floating point sum.
pub fn central_moment(region: &Region, centroid: Centroid, i: u32, j: u32) -> f64 {
    let exact = region
        .pixels()
        .par_iter()
        .with_min_len(MIN_PAR_LEN)
        .map(|p| {
            let dx = (p.x - centroid.x) as i128;
            let dy = (p.y - centroid.y) as i128;
            dx.checked_pow(i)?.checked_mul(dy.checked_pow(j)?)
        })
        .try_reduce(|| 0, |a, b| a.checked_add(b));

    match exact {
        Some(sum) => sum as f64,
        None => region
            .pixels()
            .par_iter()
            .map(|p| {
                let dx = (p.x - centroid.x) as f64;
                let dy = (p.y - centroid.y) as f64;
                dx.powi(i as i32) * dy.powi(j as i32)
            })
            .sum(),
    }
}

/// Principal-axis angle in radians
///
/// A rotationally symmetric shape (μ11 = 0, μ20 = μ02) yields 0.
pub fn orientation(mu11: f64, mu20: f64, mu02: f64) -> f64 {
    0.5 * (2.0 * mu11).atan2(mu20 - mu02)
}

/// Eigenvalue ratio of the second-moment matrix
///
/// Returns `None` for degenerate shapes (a single pixel or a straight line)
/// where the denominator is zero or negative.
pub fn elongation(mu11: f64, mu20: f64, mu02: f64) -> Option<f64> {
    let sum = mu20 + mu02;
    let root = ((mu20 - mu02).powi(2) + 4.0 * mu11 * mu11).sqrt();
    let denominator = sum - root;
    if denominator.is_nan() || denominator <= 0.0 {
        return None;
    }

    let value = (sum + root) / denominator;
    value.is_finite().then_some(value)
}

/// Second-order central moments of one region
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SecondOrderMoments {
    pub mu11: f64,
    pub mu20: f64,
    pub mu02: f64,
}

impl SecondOrderMoments {
    /// Compute μ11, μ20 and μ02 in a single pass
    pub fn of(region: &Region, centroid: Centroid) -> Self {
        let (mu11, mu20, mu02) = region
            .pixels()
            .par_iter()
            .with_min_len(MIN_PAR_LEN)
            .map(|p| {
                let dx = (p.x - centroid.x) as i128;
                let dy = (p.y - centroid.y) as i128;
                (dx * dy, dx * dx, dy * dy)
            })
            .reduce(|| (0, 0, 0), |a, b| (a.0 + b.0, a.1 + b.1, a.2 + b.2));

        Self {
            mu11: mu11 as f64,
            mu20: mu20 as f64,
            mu02: mu02 as f64,
        }
    }

    pub fn orientation(&self) -> f64 {
        orientation(self.mu11, self.mu20, self.mu02)
    }

    pub fn elongation(&self) -> Option<f64> {
        elongation(self.mu11, self.mu20, self.mu02)
    }
}

/// Per-region measurements
#[derive(Debug, Clone, PartialEq)]
pub struct AreaStats {
    /// Region id
    pub id: u32,
    /// Number of pixels
    pub pixel_count: usize,
    pub centroid: Centroid,
    pub bounds: BoundingBox,
    /// Moments about `centroid`
    pub moments: SecondOrderMoments,
}

impl AreaStats {
    /// Measure a single region
    pub fn of(region: &Region) -> Self {
        let c = centroid(region);
        Self::with_centroid(region, c)
    }

    fn with_centroid(region: &Region, centroid: Centroid) -> Self {
        Self {
            id: region.id(),
            pixel_count: region.len(),
            centroid,
            bounds: region.bounds(),
            moments: SecondOrderMoments::of(region, centroid),
        }
    }
}

/// Measure every region, in input order
///
/// All centroids are computed before any moment, and each region's moments
/// are taken about its own centroid.
pub fn analyze_regions(regions: &[Region]) -> Vec<AreaStats> {
    let centroids: Vec<Centroid> = regions.par_iter().map(centroid).collect();

    regions
        .par_iter()
        .zip(centroids.par_iter())
        .map(|(region, &c)| AreaStats::with_centroid(region, c))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use treasure_core::PixelCoord;

    fn rect_region(id: u32, x0: i32, y0: i32, w: i32, h: i32) -> Region {
        let pixels = (y0..y0 + h)
            .flat_map(|y| (x0..x0 + w).map(move |x| PixelCoord::new(x, y)))
            .collect();
        Region::new(id, pixels).unwrap()
    }

    #[test]
    fn test_centroid_rounds_half_away_from_zero() {
        // x mean 0.5, y mean 0
        let region = rect_region(1, 0, 0, 2, 1);
        assert_eq!(centroid(&region), Centroid::new(1, 0));

        let negative = rect_region(1, -2, 0, 2, 1);
        assert_eq!(centroid(&negative), Centroid::new(-2, 0));
    }

    #[test]
    fn test_zeroth_moment_is_pixel_count() {
        let region = rect_region(1, 3, 4, 7, 5);
        let c = centroid(&region);
        assert_eq!(central_moment(&region, c, 0, 0), 35.0);
    }

    #[test]
    fn test_rect_second_moments() {
        // 3x1 centered at x = 1: dx = -1, 0, 1
        let region = rect_region(1, 0, 0, 3, 1);
        let c = centroid(&region);
        let m = SecondOrderMoments::of(&region, c);
        assert_eq!(m.mu20, 2.0);
        assert_eq!(m.mu02, 0.0);
        assert_eq!(m.mu11, 0.0);
        assert_eq!(central_moment(&region, c, 2, 0), 2.0);
        assert_eq!(central_moment(&region, c, 1, 0), 0.0);
    }

    #[test]
    fn test_degenerate_shapes_have_no_elongation() {
        let single = rect_region(1, 5, 5, 1, 1);
        assert_eq!(AreaStats::of(&single).moments.elongation(), None);

        let line = rect_region(1, 0, 0, 9, 1);
        assert_eq!(AreaStats::of(&line).moments.elongation(), None);

        assert_eq!(elongation(0.0, f64::NAN, 1.0), None);
    }

    #[test]
    fn test_orientation_axes() {
        // odd sides keep the rounded centroid on the true center
        let wide = rect_region(1, 0, 0, 9, 3);
        let tall = rect_region(2, 0, 0, 3, 9);
        let wide_m = AreaStats::of(&wide).moments;
        let tall_m = AreaStats::of(&tall).moments;
        assert_eq!(wide_m.mu11, 0.0);
        assert!(wide_m.orientation().abs() < 1e-12);
        assert!((tall_m.orientation().abs() - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
        assert!(wide_m.elongation().unwrap() > 1.0);
    }

    #[test]
    fn test_orientation_about_rounded_centroid() {
        // the 8x2 mean (3.5, 0.5) rounds to (4, 1), which tilts the axis
        let region = rect_region(1, 0, 0, 8, 2);
        let stats = AreaStats::of(&region);
        assert_eq!(stats.centroid, Centroid::new(4, 1));
        assert_eq!(stats.moments.mu11, 4.0);
        assert_eq!(stats.moments.mu20, 88.0);
        assert_eq!(stats.moments.mu02, 8.0);
        let expected = 0.5 * 8f64.atan2(80.0);
        assert!((stats.moments.orientation() - expected).abs() < 1e-12);
    }

    #[test]
    fn test_high_order_moment_falls_back_to_float() {
        let region = Region::new(1, vec![PixelCoord::new(0, 0), PixelCoord::new(200, 0)]).unwrap();
        let c = Centroid::new(0, 0);
        let m = central_moment(&region, c, 20, 0);
        assert!((m - 200f64.powi(20)).abs() / 200f64.powi(20) < 1e-12);
    }

    #[test]
    fn test_analyze_regions_keeps_order() {
        let regions = vec![rect_region(9, 0, 0, 2, 2), rect_region(3, 10, 10, 3, 3)];
        let stats = analyze_regions(&regions);
        assert_eq!(stats.len(), 2);
        assert_eq!(stats[0].id, 9);
        assert_eq!(stats[1].id, 3);
        assert_eq!(stats[1].centroid, Centroid::new(11, 11));
        assert_eq!(stats[1].pixel_count, 9);
        assert_eq!(stats[1].bounds, BoundingBox::new(10, 10, 3, 3));
    }
}
