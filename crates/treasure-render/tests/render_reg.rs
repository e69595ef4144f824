//! Rendering regression test
//!
//! Run with:
//! ```
//! cargo test -p treasure-render --test render_reg
//! ```

use std::collections::HashSet;

use rand::SeedableRng;
use rand::rngs::StdRng;
use treasure_core::{Color, PixelCoord};
use treasure_recog::{DetectOptions, find_treasure};
use treasure_render::{ColorizeOptions, OverlayOptions, colorize_labels, draw_way};
use treasure_test::{RegParams, SceneBuilder};

#[test]
fn render_reg() {
    let mut rp = RegParams::new("render");

    let scene = SceneBuilder::new(220, 120)
        .ellipse(40.0, 60.0, 19.5, 10.0, 0.0, 0.48)
        .ellipse(170.0, 60.0, 19.5, 9.8, 0.0, 0.97)
        .disk(100.0, 60.0, 8.0, 0.7)
        .build()
        .expect("build scene");
    let detection =
        find_treasure(&scene.mask, &scene.lightness, &DetectOptions::default()).unwrap();

    // --- Colorized labels ---
    let mut rng = StdRng::seed_from_u64(2024);
    let colored = colorize_labels(&detection.labels, &ColorizeOptions::default(), &mut rng)
        .expect("colorize");
    rp.compare_eq(&detection.labels.dimensions(), &colored.dimensions());

    let background_black = detection
        .labels
        .data()
        .iter()
        .zip(colored.data())
        .filter(|(label, _)| **label == 0)
        .all(|(_, c)| *c == Color::BLACK);
    rp.check(background_black, "background stays black");

    let mut region_colors = HashSet::new();
    for region in &detection.regions {
        let colors: HashSet<Color> = region
            .pixels()
            .iter()
            .map(|p| colored.get_pixel(p.x as u32, p.y as u32).unwrap())
            .collect();
        rp.compare_values(1.0, colors.len() as f64, 0.0);
        region_colors.extend(colors);
    }
    rp.compare_values(3.0, region_colors.len() as f64, 0.0);
    rp.check(!region_colors.contains(&Color::BLACK), "regions are not black");

    let mut again = StdRng::seed_from_u64(2024);
    let repeat =
        colorize_labels(&detection.labels, &ColorizeOptions::default(), &mut again).unwrap();
    rp.compare_grids(&colored, &repeat);

    // --- Way overlay ---
    let original = scene.to_rgb();
    let mut overlay = original.clone();
    let dest = detection.destination_region().expect("destination region");
    draw_way(&mut overlay, &detection.way, dest, &OverlayOptions::default()).expect("draw");

    for c in detection.way.waypoints() {
        let p = PixelCoord::from(c);
        rp.compare_eq(
            &Color::YELLOW,
            &overlay.get_pixel(p.x as u32, p.y as u32).unwrap(),
        );
    }
    // midpoint of the segment, then the frame around the disk
    rp.compare_eq(&Color::YELLOW, &overlay.get_pixel(70, 60).unwrap());
    let b = dest.bounds();
    rp.compare_eq(
        &Color::YELLOW,
        &overlay.get_pixel(b.x as u32, b.y as u32).unwrap(),
    );
    rp.compare_eq(
        &Color::YELLOW,
        &overlay.get_pixel(b.right() as u32, b.bottom() as u32).unwrap(),
    );
    // far from every stroke nothing changes
    rp.compare_eq(
        &original.get_pixel(200, 10).unwrap(),
        &overlay.get_pixel(200, 10).unwrap(),
    );
    rp.compare_eq(
        &original.get_pixel(170, 60).unwrap(),
        &overlay.get_pixel(170, 60).unwrap(),
    );

    assert!(rp.cleanup(), "render regression test failed");
}
