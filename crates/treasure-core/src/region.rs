//! Region - a labeled set of foreground pixels
//!
//! Regions are produced by the labeler and are read-only for the rest of
//! the pipeline.

use crate::error::{Error, Result};
use crate::geometry::{BoundingBox, PixelCoord};

/// Connected set of foreground pixels with a non-zero id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    id: u32,
    pixels: Vec<PixelCoord>,
}

impl Region {
    /// Create a region
    ///
    /// Pixel uniqueness is the caller's responsibility; the labeler
    /// guarantees it.
    ///
    /// # Errors
    ///
    /// Returns `Error::ReservedRegionId` for id 0 and `Error::EmptyRegion`
    /// when `pixels` is empty.
    pub fn new(id: u32, pixels: Vec<PixelCoord>) -> Result<Self> {
        if id == 0 {
            return Err(Error::ReservedRegionId);
        }
        if pixels.is_empty() {
            return Err(Error::EmptyRegion { id });
        }
        Ok(Self { id, pixels })
    }

    #[inline]
    pub fn id(&self) -> u32 {
        self.id
    }

    #[inline]
    pub fn pixels(&self) -> &[PixelCoord] {
        &self.pixels
    }

    /// Number of pixels (always at least 1)
    #[inline]
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Tight bounding box of the region's pixels
    pub fn bounds(&self) -> BoundingBox {
        // pixels is non-empty by construction
        BoundingBox::from_points(self.pixels.iter().copied())
            .unwrap_or(BoundingBox::new(0, 0, 0, 0))
    }

    /// Copy of the region with every pixel shifted by (dx, dy)
    pub fn translated(&self, dx: i32, dy: i32) -> Region {
        Region {
            id: self.id,
            pixels: self.pixels.iter().map(|p| p.translated(dx, dy)).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_rejects_reserved_id() {
        let err = Region::new(0, vec![PixelCoord::new(0, 0)]).unwrap_err();
        assert!(matches!(err, Error::ReservedRegionId));
    }

    #[test]
    fn test_region_rejects_empty() {
        let err = Region::new(7, Vec::new()).unwrap_err();
        assert!(matches!(err, Error::EmptyRegion { id: 7 }));
    }

    #[test]
    fn test_region_bounds_and_translation() {
        let region = Region::new(
            3,
            vec![
                PixelCoord::new(1, 1),
                PixelCoord::new(2, 1),
                PixelCoord::new(2, 2),
            ],
        )
        .unwrap();
        assert_eq!(region.len(), 3);
        assert_eq!(region.bounds(), BoundingBox::new(1, 1, 2, 2));

        let moved = region.translated(10, -1);
        assert_eq!(moved.id(), 3);
        assert_eq!(moved.bounds(), BoundingBox::new(11, 0, 2, 2));
    }
}
