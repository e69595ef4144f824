//! Lightness binarization regression test
//!
//! Run with:
//! ```
//! cargo test -p treasure-color --test binarize_reg
//! ```

use treasure_color::{
    LightnessHistogram, ThresholdOptions, binarization_threshold, binarize, lightness_map,
    select_threshold,
};
use treasure_core::{Color, RgbGrid};
use treasure_test::{RegParams, SceneBuilder};

#[test]
fn binarize_reg() {
    let mut rp = RegParams::new("binarize");

    // --- Lightness of a rendered scene matches the scene's lightness ---
    let scene = SceneBuilder::new(80, 60)
        .background(0.1)
        .ellipse(25.0, 30.0, 16.0, 8.0, 0.0, 0.97)
        .disk(60.0, 30.0, 6.0, 0.5)
        .build()
        .expect("build scene");
    let rgb = scene.to_rgb();
    let lightness = lightness_map(&rgb).unwrap();
    rp.compare_eq(&(80, 60), &lightness.dimensions());
    let max_err = lightness
        .data()
        .iter()
        .zip(scene.lightness.data())
        .map(|(a, b)| (a - b).abs())
        .fold(0.0f32, f32::max);
    eprintln!("  max lightness error after 8-bit rendering: {max_err}");
    rp.compare_values(0.0, max_err as f64, 1.0 / 255.0);

    // --- A threshold between the levels recovers the shapes ---
    let mask = binarize(&lightness, 0.3);
    rp.compare_grids(&scene.mask, &mask);
    let bright_only = binarize(&lightness, 0.9);
    rp.check(
        bright_only.count_foreground() < mask.count_foreground(),
        "raising the threshold drops the darker disk",
    );

    // --- Selected threshold is reproducible and within range ---
    let options = ThresholdOptions::default();
    let t1 = select_threshold(&lightness, &options).unwrap();
    let t2 = select_threshold(&lightness, &options).unwrap();
    eprintln!("  selected threshold: {t1:.5}");
    rp.compare_values(t1, t2, 0.0);
    rp.check((0.0..=1.0).contains(&t1), "threshold lies in [0, 1]");

    // --- Unsmoothed histogram of the scene ---
    let hist = LightnessHistogram::from_map(&lightness);
    rp.compare_values(4800.0, hist.total() as f64, 0.0);
    rp.compare_values(3.0, hist.len() as f64, 0.0);
    let t_raw = select_threshold(&lightness, &options.clone().with_bandwidth(0.0)).unwrap();
    rp.compare_values(binarization_threshold(&hist, 0.05).unwrap(), t_raw, 0.0);

    // --- Uniform image: the mode is the only level ---
    let flat = RgbGrid::new_with_value(10, 10, Color::gray(128)).unwrap();
    let flat_l = lightness_map(&flat).unwrap();
    let t_flat = select_threshold(&flat_l, &options).unwrap();
    rp.compare_values(128.0 / 255.0, t_flat, 1e-5);
    rp.compare_values(100.0, binarize(&flat_l, t_flat).count_foreground() as f64, 0.0);

    assert!(rp.cleanup(), "binarize regression test failed");
}
