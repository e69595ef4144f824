//! Region labeling
//!
//! Splits a foreground mask into maximal connected regions. Labels come from
//! a scan counter that advances on every scanned pixel, background included,
//! so a region's id is `y * width + x + 1` of its first pixel in row-major
//! order. Ids are unique and non-zero but not contiguous.

use std::collections::BTreeMap;

use crate::conncomp::ConnectivityType;
use crate::error::{RegionError, RegionResult};
use crate::seedfill::flood_fill_label;
use treasure_core::{BitGrid, LabelGrid, PixelCoord, Region};

/// Label every connected foreground region of `mask`
///
/// # Arguments
///
/// * `mask` - Foreground mask
/// * `connectivity` - Connectivity type; the pipeline uses 4-way
///
/// # Returns
///
/// A label grid of the same size, 0 for background.
///
/// # Errors
///
/// Returns `RegionError::InvalidParameters` if the grid has more pixels than
/// a 32-bit label can address.
pub fn label_regions(mask: &BitGrid, connectivity: ConnectivityType) -> RegionResult<LabelGrid> {
    let (width, height) = mask.dimensions();
    if (width as u64) * (height as u64) > u32::MAX as u64 {
        return Err(RegionError::InvalidParameters(format!(
            "{width}x{height} grid exceeds the 32-bit label range"
        )));
    }

    let mut labels = LabelGrid::new(width, height)?;
    let mut counter = 0u32;
    let mut region_count = 0usize;

    for y in 0..height {
        for x in 0..width {
            counter += 1;
            if mask.get_pixel_unchecked(x, y) && labels.get_pixel_unchecked(x, y) == 0 {
                flood_fill_label(mask, &mut labels, x, y, counter, connectivity)?;
                region_count += 1;
            }
        }
    }

    log::debug!(
        "labeled {region_count} regions in {width}x{height} mask ({connectivity:?})"
    );
    Ok(labels)
}

/// Group labeled pixels into regions, ordered by ascending id
///
/// Ascending id order equals first appearance in scan order.
pub fn extract_regions(labels: &LabelGrid) -> RegionResult<Vec<Region>> {
    let mut pixels_by_id: BTreeMap<u32, Vec<PixelCoord>> = BTreeMap::new();

    for y in 0..labels.height() {
        for (x, &label) in labels.row(y).iter().enumerate() {
            if label != 0 {
                pixels_by_id
                    .entry(label)
                    .or_default()
                    .push(PixelCoord::new(x as i32, y as i32));
            }
        }
    }

    pixels_by_id
        .into_iter()
        .map(|(id, pixels)| Region::new(id, pixels).map_err(RegionError::from))
        .collect()
}

/// Number of distinct non-zero labels
pub fn count_regions(labels: &LabelGrid) -> usize {
    let mut ids: Vec<u32> = labels.data().iter().copied().filter(|&l| l != 0).collect();
    ids.sort_unstable();
    ids.dedup();
    ids.len()
}

/// Label `mask` and extract its regions in one call
pub fn find_regions(
    mask: &BitGrid,
    connectivity: ConnectivityType,
) -> RegionResult<(LabelGrid, Vec<Region>)> {
    let labels = label_regions(mask, connectivity)?;
    let regions = extract_regions(&labels)?;
    Ok((labels, regions))
}

#[cfg(test)]
mod tests {
    use super::*;
    use treasure_core::Grid;

    fn mask_from_rows(rows: &[&str]) -> BitGrid {
        let height = rows.len() as u32;
        let width = rows[0].len() as u32;
        Grid::from_fn(width, height, |x, y| rows[y as usize].as_bytes()[x as usize] == b'#')
            .unwrap()
    }

    #[test]
    fn test_ids_follow_scan_position() {
        let mask = mask_from_rows(&[".#...", ".#..#", "....#"]);
        let labels = label_regions(&mask, ConnectivityType::FourWay).unwrap();

        // first pixels at (1, 0) and (4, 1) in a width-5 grid
        assert_eq!(labels.get_pixel(1, 0).unwrap(), 2);
        assert_eq!(labels.get_pixel(1, 1).unwrap(), 2);
        assert_eq!(labels.get_pixel(4, 1).unwrap(), 10);
        assert_eq!(labels.get_pixel(4, 2).unwrap(), 10);
        assert_eq!(labels.get_pixel(0, 0).unwrap(), 0);
        assert_eq!(count_regions(&labels), 2);
    }

    #[test]
    fn test_region_wrapping_back_keeps_first_id() {
        // U shape: the right arm is reached from the left arm via the bottom row
        let mask = mask_from_rows(&["#.#", "#.#", "###"]);
        let labels = label_regions(&mask, ConnectivityType::FourWay).unwrap();
        assert_eq!(count_regions(&labels), 1);
        assert_eq!(labels.get_pixel(2, 0).unwrap(), 1);
    }

    #[test]
    fn test_extract_regions_sorted() {
        let mask = mask_from_rows(&["#..#", "....", ".##."]);
        let (_, regions) = find_regions(&mask, ConnectivityType::FourWay).unwrap();
        let ids: Vec<u32> = regions.iter().map(|r| r.id()).collect();
        assert_eq!(ids, vec![1, 4, 10]);
        assert_eq!(regions[2].len(), 2);
    }

    #[test]
    fn test_empty_mask_has_no_regions() {
        let mask = BitGrid::new(6, 6).unwrap();
        let (labels, regions) = find_regions(&mask, ConnectivityType::FourWay).unwrap();
        assert!(labels.data().iter().all(|&l| l == 0));
        assert!(regions.is_empty());
        assert_eq!(count_regions(&labels), 0);
    }

    #[test]
    fn test_eight_way_merges_diagonals() {
        let mask = mask_from_rows(&["#.", ".#"]);
        let four = label_regions(&mask, ConnectivityType::FourWay).unwrap();
        let eight = label_regions(&mask, ConnectivityType::EightWay).unwrap();
        assert_eq!(count_regions(&four), 2);
        assert_eq!(count_regions(&eight), 1);
    }
}
