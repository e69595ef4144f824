//! Line and box rasterization
//!
//! Shapes are first generated as point lists and then painted onto an RGB
//! grid. Generation never clips; painting silently drops points that fall
//! outside the image.

use treasure_core::{BoundingBox, Color, PixelCoord, RgbGrid};

/// Points of the line from `(x1, y1)` to `(x2, y2)` by integer Bresenham.
///
/// Both end points are included and consecutive points are 8-connected.
pub fn generate_line_points(x1: i32, y1: i32, x2: i32, y2: i32) -> Vec<PixelCoord> {
    if x1 == x2 && y1 == y2 {
        return vec![PixelCoord::new(x1, y1)];
    }

    let dx = (x2 - x1).abs();
    let dy = (y2 - y1).abs();
    let sx = if x2 > x1 { 1i32 } else { -1 };
    let sy = if y2 > y1 { 1i32 } else { -1 };

    let npts = dx.max(dy) + 1;
    let mut points = Vec::with_capacity(npts as usize);

    let mut x = x1;
    let mut y = y1;

    if dx >= dy {
        // Step along x
        let mut err = dx / 2;
        for _ in 0..npts {
            points.push(PixelCoord::new(x, y));
            err -= dy;
            if err < 0 {
                y += sy;
                err += dx;
            }
            x += sx;
        }
    } else {
        // Step along y
        let mut err = dy / 2;
        for _ in 0..npts {
            points.push(PixelCoord::new(x, y));
            err -= dx;
            if err < 0 {
                x += sx;
                err += dy;
            }
            y += sy;
        }
    }

    points
}

/// Points of a line `width` pixels thick.
///
/// Parallel copies of the base line are stacked alternately on either side,
/// shifted vertically for mostly horizontal lines and horizontally
/// otherwise. A width of 0 is treated as 1.
pub fn generate_wide_line_points(
    x1: i32,
    y1: i32,
    x2: i32,
    y2: i32,
    width: u32,
) -> Vec<PixelCoord> {
    let width = width.max(1);
    let mut points = generate_line_points(x1, y1, x2, y2);
    if width == 1 {
        return points;
    }

    points.reserve(points.len() * (width as usize - 1));
    let horizontal = (x2 - x1).abs() > (y2 - y1).abs();

    for i in 1..width {
        let magnitude = i.div_ceil(2) as i32;
        let offset = if i % 2 == 1 { -magnitude } else { magnitude };

        let parallel = if horizontal {
            generate_line_points(x1, y1 + offset, x2, y2 + offset)
        } else {
            generate_line_points(x1 + offset, y1, x2 + offset, y2)
        };
        points.extend(parallel);
    }

    points
}

/// Points of the outline of `b`, each side `width` pixels thick.
///
/// The horizontal sides are stretched by half the width so the corners
/// close. An empty box yields no points.
pub fn generate_box_points(b: &BoundingBox, width: u32) -> Vec<PixelCoord> {
    if b.w <= 0 || b.h <= 0 {
        return Vec::new();
    }
    let width = width.max(1);
    let half = (width / 2) as i32;
    let (left, top, right, bottom) = (b.x, b.y, b.right(), b.bottom());

    let mut points = Vec::with_capacity(2 * (b.w + b.h) as usize * width as usize);
    points.extend(generate_wide_line_points(left - half, top, right + half, top, width));
    points.extend(generate_wide_line_points(
        left - half,
        bottom,
        right + half,
        bottom,
        width,
    ));
    points.extend(generate_wide_line_points(left, top, left, bottom, width));
    points.extend(generate_wide_line_points(right, top, right, bottom, width));
    points
}

/// Paint every point with `color`, skipping points outside the image.
///
/// Returns the number of pixels written.
pub fn render_points(image: &mut RgbGrid, points: &[PixelCoord], color: Color) -> usize {
    let mut written = 0;
    for p in points {
        if !image.contains(p.x as i64, p.y as i64) {
            continue;
        }
        image.set_pixel_unchecked(p.x as u32, p.y as u32, color);
        written += 1;
    }
    written
}

/// Draw a line of the given width
pub fn render_line(
    image: &mut RgbGrid,
    from: PixelCoord,
    to: PixelCoord,
    width: u32,
    color: Color,
) -> usize {
    let points = generate_wide_line_points(from.x, from.y, to.x, to.y, width);
    render_points(image, &points, color)
}

/// Draw the outline of a box
pub fn render_box(image: &mut RgbGrid, b: &BoundingBox, width: u32, color: Color) -> usize {
    let points = generate_box_points(b, width);
    render_points(image, &points, color)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn is_8_connected(points: &[PixelCoord]) -> bool {
        points
            .windows(2)
            .all(|w| (w[1].x - w[0].x).abs() <= 1 && (w[1].y - w[0].y).abs() <= 1)
    }

    #[test]
    fn test_line_single_point() {
        assert_eq!(generate_line_points(3, 4, 3, 4), vec![PixelCoord::new(3, 4)]);
    }

    #[test]
    fn test_line_endpoints_and_count() {
        let cases = [(0, 0, 10, 3), (10, 3, 0, 0), (2, 9, 5, -4), (-3, -3, -3, 7)];
        for (x1, y1, x2, y2) in cases {
            let pts = generate_line_points(x1, y1, x2, y2);
            let expected = (x2 - x1).abs().max((y2 - y1).abs()) + 1;
            assert_eq!(pts.len() as i32, expected);
            assert_eq!(pts[0], PixelCoord::new(x1, y1));
            assert_eq!(*pts.last().unwrap(), PixelCoord::new(x2, y2));
            assert!(is_8_connected(&pts));
        }
    }

    #[test]
    fn test_line_diagonal() {
        let pts = generate_line_points(0, 0, 4, 4);
        let expected: Vec<_> = (0..5).map(|i| PixelCoord::new(i, i)).collect();
        assert_eq!(pts, expected);
    }

    #[test]
    fn test_wide_line_rows() {
        let pts = generate_wide_line_points(0, 10, 20, 10, 4);
        let rows: HashSet<i32> = pts.iter().map(|p| p.y).collect();
        assert_eq!(rows, HashSet::from([8, 9, 10, 11]));
        assert_eq!(pts.len(), 4 * 21);
    }

    #[test]
    fn test_wide_line_vertical_shifts_columns() {
        let pts = generate_wide_line_points(5, 0, 5, 9, 3);
        let cols: HashSet<i32> = pts.iter().map(|p| p.x).collect();
        assert_eq!(cols, HashSet::from([4, 5, 6]));
    }

    #[test]
    fn test_wide_line_zero_width() {
        assert_eq!(
            generate_wide_line_points(0, 0, 6, 2, 0),
            generate_line_points(0, 0, 6, 2)
        );
    }

    #[test]
    fn test_box_outline_width_one() {
        let b = BoundingBox::new(2, 3, 5, 4);
        let pts: HashSet<PixelCoord> = generate_box_points(&b, 1).into_iter().collect();
        // perimeter of a 5x4 box
        assert_eq!(pts.len(), 2 * 5 + 2 * 2);
        for p in &pts {
            assert!(b.contains(p.x, p.y));
            assert!(p.x == b.x || p.x == b.right() || p.y == b.y || p.y == b.bottom());
        }
    }

    #[test]
    fn test_box_empty() {
        assert!(generate_box_points(&BoundingBox::new(0, 0, 0, 5), 2).is_empty());
    }

    #[test]
    fn test_wide_stroke_has_no_holes() {
        let mut image = RgbGrid::new(30, 20).unwrap();
        render_line(
            &mut image,
            PixelCoord::new(2, 10),
            PixelCoord::new(25, 10),
            4,
            Color::YELLOW,
        );
        let column: Vec<bool> = (6..14)
            .map(|y| image.get_pixel(12, y).unwrap() == Color::YELLOW)
            .collect();
        assert_eq!(
            column,
            vec![false, false, true, true, true, true, false, false]
        );
    }

    #[test]
    fn test_wide_box_sides_are_solid() {
        let b = BoundingBox::new(10, 10, 11, 11);
        let mut image = RgbGrid::new(30, 30).unwrap();
        render_box(&mut image, &b, 4, Color::YELLOW);
        let yellow = |x: u32, y: u32| image.get_pixel(x, y).unwrap() == Color::YELLOW;

        // top side across its thickness, then the inside of the box
        assert!((8..=11).all(|y| yellow(15, y)));
        assert!(!yellow(15, 7) && !yellow(15, 12));
        // left side
        assert!((8..=11).all(|x| yellow(x, 15)));
        assert!(!yellow(7, 15) && !yellow(12, 15));
    }

    #[test]
    fn test_render_clips() {
        let mut image = RgbGrid::new(5, 5).unwrap();
        let written = render_line(
            &mut image,
            PixelCoord::new(-5, 2),
            PixelCoord::new(10, 2),
            1,
            Color::YELLOW,
        );
        assert_eq!(written, 5);
        assert!((0..5).all(|x| image.get_pixel(x, 2).unwrap() == Color::YELLOW));
        assert_eq!(image.get_pixel(0, 1).unwrap(), Color::BLACK);
    }
}
