//! Grid - dense two-dimensional pixel container
//!
//! `Grid<T>` stores one value per pixel in row-major order with no padding.
//! The pipeline uses three instantiations:
//!
//! - [`BitGrid`] - foreground mask (`true` = foreground)
//! - [`LabelGrid`] - region labels (`0` = background)
//! - [`BrightnessMap`] - per-pixel lightness in `[0, 1]`
//!
//! # Examples
//!
//! ```
//! use treasure_core::{BitGrid, Grid};
//!
//! let mut mask = BitGrid::new(4, 3).unwrap();
//! mask.set_pixel(1, 2, true).unwrap();
//! assert!(mask.get_pixel(1, 2).unwrap());
//! assert_eq!(mask.count_foreground(), 1);
//! ```

use crate::error::{Error, Result};
use crate::geometry::PixelCoord;

/// Dense row-major grid of pixel values
///
/// The value at (x, y) lives at index `y * width + x`.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid<T> {
    width: u32,
    height: u32,
    data: Vec<T>,
}

/// Foreground mask
pub type BitGrid = Grid<bool>;

/// Region label grid; 0 marks background
pub type LabelGrid = Grid<u32>;

/// Per-pixel brightness samples
pub type BrightnessMap = Grid<f32>;

impl<T: Clone + Default> Grid<T> {
    /// Create a grid with every cell set to `T::default()`
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidDimension` if width or height is 0.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Self::new_with_value(width, height, T::default())
    }
}

impl<T: Clone> Grid<T> {
    /// Create a grid with every cell set to `value`
    pub fn new_with_value(width: u32, height: u32, value: T) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }

        let size = (width as usize) * (height as usize);
        Ok(Grid {
            width,
            height,
            data: vec![value; size],
        })
    }

    /// Set every cell to `value`
    pub fn fill(&mut self, value: T) {
        self.data.fill(value);
    }
}

impl<T> Grid<T> {
    /// Create a grid from row-major data
    ///
    /// # Errors
    ///
    /// Returns an error if dimensions are zero or the data length does not
    /// equal `width * height`.
    pub fn from_data(width: u32, height: u32, data: Vec<T>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }

        let expected_size = (width as usize) * (height as usize);
        if data.len() != expected_size {
            return Err(Error::InvalidParameter(format!(
                "data length {} doesn't match {}x{} = {}",
                data.len(),
                width,
                height,
                expected_size
            )));
        }

        Ok(Grid {
            width,
            height,
            data,
        })
    }

    /// Create a grid by evaluating `f(x, y)` for every cell in scan order
    pub fn from_fn<F>(width: u32, height: u32, mut f: F) -> Result<Self>
    where
        F: FnMut(u32, u32) -> T,
    {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }

        let mut data = Vec::with_capacity((width as usize) * (height as usize));
        for y in 0..height {
            for x in 0..width {
                data.push(f(x, y));
            }
        }

        Ok(Grid {
            width,
            height,
            data,
        })
    }

    /// Get the grid width in pixels
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the grid height in pixels
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the grid dimensions as (width, height)
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Number of cells
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Always false for a constructed grid; present for API symmetry
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Raw row-major data
    #[inline]
    pub fn data(&self) -> &[T] {
        &self.data
    }

    /// Mutable raw row-major data
    #[inline]
    pub fn data_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Consume the grid and return its row-major data
    pub fn into_data(self) -> Vec<T> {
        self.data
    }

    /// Get a row as a slice
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    pub fn row(&self, y: u32) -> &[T] {
        let start = (y as usize) * (self.width as usize);
        &self.data[start..start + self.width as usize]
    }

    /// Whether signed coordinates fall inside the grid
    #[inline]
    pub fn contains(&self, x: i64, y: i64) -> bool {
        x >= 0 && y >= 0 && x < self.width as i64 && y < self.height as i64
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }

    /// Borrow the value at (x, y)
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Option<&T> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.data.get(self.index(x, y))
    }

    /// Fail with `DimensionMismatch` unless `other` has the same size
    pub fn check_same_size<U>(&self, other: &Grid<U>) -> Result<()> {
        if self.dimensions() != other.dimensions() {
            return Err(Error::DimensionMismatch {
                expected: self.dimensions(),
                actual: other.dimensions(),
            });
        }
        Ok(())
    }

    /// Apply `f` to every cell, producing a new grid of the same size
    pub fn map<U, F>(&self, f: F) -> Grid<U>
    where
        F: FnMut(&T) -> U,
    {
        Grid {
            width: self.width,
            height: self.height,
            data: self.data.iter().map(f).collect(),
        }
    }
}

impl<T: Copy> Grid<T> {
    /// Get the value at (x, y)
    ///
    /// # Errors
    ///
    /// Returns `Error::IndexOutOfBounds` if coordinates are out of range.
    #[inline]
    pub fn get_pixel(&self, x: u32, y: u32) -> Result<T> {
        self.get(x, y).copied().ok_or(Error::IndexOutOfBounds {
            x,
            y,
            width: self.width,
            height: self.height,
        })
    }

    /// Get the value at (x, y) without a recoverable bounds check
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are out of range.
    #[inline]
    pub fn get_pixel_unchecked(&self, x: u32, y: u32) -> T {
        self.data[self.index(x, y)]
    }

    /// Set the value at (x, y)
    ///
    /// # Errors
    ///
    /// Returns `Error::IndexOutOfBounds` if coordinates are out of range.
    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32, value: T) -> Result<()> {
        if x >= self.width || y >= self.height {
            return Err(Error::IndexOutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        let idx = self.index(x, y);
        self.data[idx] = value;
        Ok(())
    }

    /// Set the value at (x, y) without a recoverable bounds check
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are out of range.
    #[inline]
    pub fn set_pixel_unchecked(&mut self, x: u32, y: u32, value: T) {
        let idx = self.index(x, y);
        self.data[idx] = value;
    }
}

impl BitGrid {
    /// Number of foreground cells
    pub fn count_foreground(&self) -> usize {
        self.data.iter().filter(|&&on| on).count()
    }
}

/// Source of per-pixel brightness in `[0, 1]`
///
/// Implemented for [`BrightnessMap`] and for any `Fn(PixelCoord) -> f32`
/// closure, so tests can supply analytic brightness fields.
pub trait BrightnessSampler: Sync {
    /// Brightness at `p`
    fn sample(&self, p: PixelCoord) -> f32;

    /// Size of the sampled image, when known
    fn dimensions(&self) -> Option<(u32, u32)> {
        None
    }
}

impl BrightnessSampler for BrightnessMap {
    fn sample(&self, p: PixelCoord) -> f32 {
        if !self.contains(p.x as i64, p.y as i64) {
            return 0.0;
        }
        self.get_pixel_unchecked(p.x as u32, p.y as u32)
    }

    fn dimensions(&self) -> Option<(u32, u32)> {
        Some(Grid::dimensions(self))
    }
}

impl<F> BrightnessSampler for F
where
    F: Fn(PixelCoord) -> f32 + Sync,
{
    fn sample(&self, p: PixelCoord) -> f32 {
        self(p)
    }
}
