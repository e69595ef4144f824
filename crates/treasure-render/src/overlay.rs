//! Way overlay
//!
//! Draws a found way onto the source image: a thick line through the arrow
//! centroids to the treasure, and a frame around the treasure region.

use treasure_core::{Color, Region, RgbGrid};
use treasure_recog::Way;

use crate::graphics::{render_box, render_line};
use crate::{RenderError, RenderResult};

/// Options for [`draw_way`]
#[derive(Debug, Clone)]
pub struct OverlayOptions {
    /// Stroke color (default: yellow)
    pub color: Color,
    /// Stroke width in pixels (default: 4)
    pub width: u32,
}

impl Default for OverlayOptions {
    fn default() -> Self {
        Self {
            color: Color::YELLOW,
            width: 4,
        }
    }
}

impl OverlayOptions {
    /// Create options with default values
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn with_width(mut self, width: u32) -> Self {
        self.width = width;
        self
    }

    /// Validate options
    pub fn validate(&self) -> RenderResult<()> {
        if self.width == 0 {
            return Err(RenderError::InvalidParameter(
                "stroke width must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

/// Draw `way` onto `image` in place.
///
/// Consecutive waypoints are joined by lines, starting at the start arrow
/// and ending at the destination, and the bounding box of
/// `destination_region` is framed. Strokes leaving the image are clipped.
///
/// # Errors
///
/// Returns `RenderError::InvalidParameter` if the options are invalid or
/// `destination_region` is not the region the way ends at.
pub fn draw_way(
    image: &mut RgbGrid,
    way: &Way,
    destination_region: &Region,
    options: &OverlayOptions,
) -> RenderResult<()> {
    options.validate()?;
    if destination_region.id() != way.destination().id {
        return Err(RenderError::InvalidParameter(format!(
            "way ends at region {}, got region {}",
            way.destination().id,
            destination_region.id()
        )));
    }

    let waypoints = way.waypoints();
    let mut painted = 0;
    for pair in waypoints.windows(2) {
        painted += render_line(
            image,
            pair[0].into(),
            pair[1].into(),
            options.width,
            options.color,
        );
    }
    painted += render_box(
        image,
        &destination_region.bounds(),
        options.width,
        options.color,
    );

    log::debug!(
        "overlay: {} segments, {} pixels painted",
        waypoints.len() - 1,
        painted
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use treasure_core::{Centroid, PixelCoord};
    use treasure_recog::{AreaType, Arrow, TreasureCandidate};

    fn sample_way() -> (Way, Region) {
        let start = Arrow {
            id: 1,
            centroid: Centroid::new(5, 10),
            orientation: 0.0,
            area_type: AreaType::StartArrow,
        };
        let dest = TreasureCandidate {
            id: 7,
            centroid: Centroid::new(30, 10),
        };
        let pixels = (28..33)
            .flat_map(|x| (8..13).map(move |y| PixelCoord::new(x, y)))
            .collect();
        let region = Region::new(7, pixels).unwrap();
        (Way::new(vec![start], dest).unwrap(), region)
    }

    #[test]
    fn test_draw_way_paints_line_and_frame() {
        let (way, region) = sample_way();
        let mut image = RgbGrid::new(40, 20).unwrap();
        let opts = OverlayOptions::new().with_width(1);
        draw_way(&mut image, &way, &region, &opts).unwrap();

        for x in 5..=30 {
            assert_eq!(image.get_pixel(x, 10).unwrap(), Color::YELLOW);
        }
        // frame corners and an inner pixel of the box
        assert_eq!(image.get_pixel(28, 8).unwrap(), Color::YELLOW);
        assert_eq!(image.get_pixel(32, 12).unwrap(), Color::YELLOW);
        assert_eq!(image.get_pixel(30, 9).unwrap(), Color::BLACK);
        assert_eq!(image.get_pixel(0, 0).unwrap(), Color::BLACK);
    }

    #[test]
    fn test_draw_way_wrong_region() {
        let (way, _) = sample_way();
        let other = Region::new(3, vec![PixelCoord::new(1, 1)]).unwrap();
        let mut image = RgbGrid::new(40, 20).unwrap();
        assert!(draw_way(&mut image, &way, &other, &OverlayOptions::default()).is_err());
    }

    #[test]
    fn test_zero_width_rejected() {
        assert!(OverlayOptions::new().with_width(0).validate().is_err());
    }
}
