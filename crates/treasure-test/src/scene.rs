//! Synthetic puzzle scenes
//!
//! Draws filled ellipses, disks and rectangles with a chosen lightness onto
//! a dark background. The foreground mask marks every covered pixel, so
//! the mask and the lightness map are co-registered by construction.
//!
//! An ellipse with semi-axes `a` and `b` has second-moment eigenvalues in
//! the ratio `a² : b²`, so `a = 2b` gives an elongation close to 4.

use treasure_core::{BitGrid, BrightnessMap, Color, Grid, Result, RgbGrid};

#[derive(Debug, Clone, Copy)]
enum Shape {
    Ellipse {
        cx: f64,
        cy: f64,
        semi_major: f64,
        semi_minor: f64,
        angle: f64,
        lightness: f32,
    },
    Rect {
        x: i64,
        y: i64,
        w: i64,
        h: i64,
        lightness: f32,
    },
}

impl Shape {
    fn covers(&self, px: f64, py: f64) -> bool {
        match *self {
            Shape::Ellipse {
                cx,
                cy,
                semi_major,
                semi_minor,
                angle,
                ..
            } => {
                let dx = px - cx;
                let dy = py - cy;
                let (sin, cos) = angle.sin_cos();
                let u = dx * cos + dy * sin;
                let v = -dx * sin + dy * cos;
                (u / semi_major).powi(2) + (v / semi_minor).powi(2) <= 1.0
            }
            Shape::Rect { x, y, w, h, .. } => {
                let (px, py) = (px as i64, py as i64);
                px >= x && py >= y && px < x + w && py < y + h
            }
        }
    }

    fn lightness(&self) -> f32 {
        match *self {
            Shape::Ellipse { lightness, .. } | Shape::Rect { lightness, .. } => lightness,
        }
    }
}

/// Mask plus lightness map of a synthetic scene
#[derive(Debug, Clone)]
pub struct Scene {
    pub mask: BitGrid,
    pub lightness: BrightnessMap,
}

impl Scene {
    /// Gray RGB rendering of the lightness map
    pub fn to_rgb(&self) -> RgbGrid {
        self.lightness
            .map(|&l| Color::gray((l.clamp(0.0, 1.0) * 255.0).round() as u8))
    }
}

/// Builder for synthetic scenes
#[derive(Debug, Clone)]
pub struct SceneBuilder {
    width: u32,
    height: u32,
    background: f32,
    shapes: Vec<Shape>,
}

impl SceneBuilder {
    /// Start an empty scene with a black background
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            background: 0.0,
            shapes: Vec::new(),
        }
    }

    /// Set the background lightness
    pub fn background(mut self, lightness: f32) -> Self {
        self.background = lightness;
        self
    }

    /// Add a filled ellipse; `angle` (radians) rotates the major axis from +x
    pub fn ellipse(
        mut self,
        cx: f64,
        cy: f64,
        semi_major: f64,
        semi_minor: f64,
        angle: f64,
        lightness: f32,
    ) -> Self {
        self.shapes.push(Shape::Ellipse {
            cx,
            cy,
            semi_major,
            semi_minor,
            angle,
            lightness,
        });
        self
    }

    /// Add a filled disk
    pub fn disk(self, cx: f64, cy: f64, radius: f64, lightness: f32) -> Self {
        self.ellipse(cx, cy, radius, radius, 0.0, lightness)
    }

    /// Add a filled axis-aligned rectangle
    pub fn rect(mut self, x: i64, y: i64, w: i64, h: i64, lightness: f32) -> Self {
        self.shapes.push(Shape::Rect {
            x,
            y,
            w,
            h,
            lightness,
        });
        self
    }

    /// Rasterize the scene; later shapes paint over earlier ones
    pub fn build(&self) -> Result<Scene> {
        let mut mask = BitGrid::new(self.width, self.height)?;
        let mut lightness = Grid::new_with_value(self.width, self.height, self.background)?;

        for y in 0..self.height {
            for x in 0..self.width {
                let hit = self
                    .shapes
                    .iter()
                    .rev()
                    .find(|s| s.covers(x as f64, y as f64));
                if let Some(shape) = hit {
                    mask.set_pixel_unchecked(x, y, true);
                    lightness.set_pixel_unchecked(x, y, shape.lightness());
                }
            }
        }

        Ok(Scene { mask, lightness })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disk_is_symmetric() {
        let scene = SceneBuilder::new(21, 21)
            .disk(10.0, 10.0, 5.0, 0.8)
            .build()
            .unwrap();
        assert!(scene.mask.get_pixel(10, 10).unwrap());
        assert!(scene.mask.get_pixel(15, 10).unwrap());
        assert!(!scene.mask.get_pixel(16, 10).unwrap());
        assert_eq!(
            scene.mask.get_pixel(5, 10).unwrap(),
            scene.mask.get_pixel(15, 10).unwrap()
        );
        assert_eq!(scene.lightness.get_pixel(10, 10).unwrap(), 0.8);
        assert_eq!(scene.lightness.get_pixel(0, 0).unwrap(), 0.0);
    }

    #[test]
    fn test_rect_and_rgb() {
        let scene = SceneBuilder::new(4, 4)
            .background(0.1)
            .rect(1, 1, 2, 2, 1.0)
            .build()
            .unwrap();
        assert_eq!(scene.mask.count_foreground(), 4);
        let rgb = scene.to_rgb();
        assert_eq!(rgb.get_pixel(1, 1).unwrap(), Color::WHITE);
        assert_eq!(rgb.get_pixel(0, 0).unwrap(), Color::gray(26));
    }
}
