//! Integer geometry: pixel coordinates, centroids and bounding boxes

/// Integer pixel position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PixelCoord {
    pub x: i32,
    pub y: i32,
}

impl PixelCoord {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Shift by (dx, dy)
    pub const fn translated(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Pixel-count-weighted mean position of a region, rounded to integers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Centroid {
    pub x: i32,
    pub y: i32,
}

impl Centroid {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another centroid
    pub fn distance(&self, other: &Centroid) -> f64 {
        let dx = (other.x - self.x) as f64;
        let dy = (other.y - self.y) as f64;
        dx.hypot(dy)
    }

    /// Vector from `self` to `other` as `(dx, dy)`
    pub fn offset_to(&self, other: &Centroid) -> (f64, f64) {
        ((other.x - self.x) as f64, (other.y - self.y) as f64)
    }
}

impl From<Centroid> for PixelCoord {
    fn from(c: Centroid) -> Self {
        PixelCoord::new(c.x, c.y)
    }
}

/// Axis-aligned rectangle, inclusive of its top-left pixel
///
/// Covers columns `x..x + w` and rows `y..y + h`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl BoundingBox {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// Smallest box containing every point, or `None` for an empty input
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = PixelCoord>,
    {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let (mut min_x, mut min_y, mut max_x, mut max_y) = (first.x, first.y, first.x, first.y);
        for p in iter {
            min_x = min_x.min(p.x);
            min_y = min_y.min(p.y);
            max_x = max_x.max(p.x);
            max_y = max_y.max(p.y);
        }
        Some(Self::new(min_x, min_y, max_x - min_x + 1, max_y - min_y + 1))
    }

    /// Rightmost covered column
    pub const fn right(&self) -> i32 {
        self.x + self.w - 1
    }

    /// Bottom covered row
    pub const fn bottom(&self) -> i32 {
        self.y + self.h - 1
    }

    pub const fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x && y >= self.y && x <= self.right() && y <= self.bottom()
    }
}
