//! Seed fill labeling
//!
//! Labels the foreground region containing a seed pixel. The fill keeps an
//! explicit work-list of pending coordinates instead of recursing, so region
//! size is bounded by memory rather than stack depth.

use crate::conncomp::ConnectivityType;
use crate::error::{RegionError, RegionResult};
use treasure_core::{BitGrid, LabelGrid};

/// Flood fill `label` into `labels` over the foreground of `mask`
///
/// Starting at the seed, every foreground pixel reachable under
/// `connectivity` whose label is still 0 receives `label`. Each cell is
/// labeled when it is pushed, so it enters the work-list at most once.
///
/// # Arguments
///
/// * `mask` - Foreground mask
/// * `labels` - Label grid of the same size, 0 = unlabeled
/// * `seed_x`, `seed_y` - Seed position
/// * `label` - Non-zero label to assign
/// * `connectivity` - Connectivity type
///
/// # Returns
///
/// The number of pixels labeled; 0 when the seed is background or already
/// labeled.
///
/// # Errors
///
/// Returns an error if the grids differ in size, the seed is out of bounds,
/// or `label` is 0.
pub fn flood_fill_label(
    mask: &BitGrid,
    labels: &mut LabelGrid,
    seed_x: u32,
    seed_y: u32,
    label: u32,
    connectivity: ConnectivityType,
) -> RegionResult<u32> {
    mask.check_same_size(labels)?;

    let (width, height) = mask.dimensions();
    if seed_x >= width || seed_y >= height {
        return Err(RegionError::InvalidSeed {
            x: seed_x,
            y: seed_y,
        });
    }
    if label == 0 {
        return Err(RegionError::InvalidParameters(
            "label 0 is reserved for background".to_string(),
        ));
    }

    if !mask.get_pixel_unchecked(seed_x, seed_y) || labels.get_pixel_unchecked(seed_x, seed_y) != 0
    {
        return Ok(0);
    }

    let mut filled_count = 0u32;
    let mut stack = vec![(seed_x, seed_y)];
    labels.set_pixel_unchecked(seed_x, seed_y, label);

    while let Some((x, y)) = stack.pop() {
        filled_count += 1;

        for (nx, ny) in connectivity.neighbors(x, y, width, height) {
            if mask.get_pixel_unchecked(nx, ny) && labels.get_pixel_unchecked(nx, ny) == 0 {
                labels.set_pixel_unchecked(nx, ny, label);
                stack.push((nx, ny));
            }
        }
    }

    Ok(filled_count)
}
