//! Region labeling regression test
//!
//! Checks labeling against an independent union-find component count over
//! seeded random masks, and the scan-position id scheme.
//!
//! Run with:
//! ```
//! cargo test -p treasure-region --test label_reg
//! ```

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use treasure_core::{BitGrid, Grid};
use treasure_region::{ConnectivityType, count_regions, extract_regions, label_regions};
use treasure_test::RegParams;

/// Disjoint-set forest used as the reference component counter
struct UnionFind {
    parent: Vec<usize>,
}

impl UnionFind {
    fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
        }
    }

    fn find(&mut self, mut i: usize) -> usize {
        while self.parent[i] != i {
            self.parent[i] = self.parent[self.parent[i]];
            i = self.parent[i];
        }
        i
    }

    fn union(&mut self, a: usize, b: usize) {
        let ra = self.find(a);
        let rb = self.find(b);
        if ra != rb {
            self.parent[ra] = rb;
        }
    }
}

fn reference_count(mask: &BitGrid, eight_way: bool) -> usize {
    let (w, h) = mask.dimensions();
    let idx = |x: u32, y: u32| (y * w + x) as usize;
    let mut uf = UnionFind::new((w * h) as usize);

    for y in 0..h {
        for x in 0..w {
            if !mask.get_pixel_unchecked(x, y) {
                continue;
            }
            if x + 1 < w && mask.get_pixel_unchecked(x + 1, y) {
                uf.union(idx(x, y), idx(x + 1, y));
            }
            if y + 1 < h && mask.get_pixel_unchecked(x, y + 1) {
                uf.union(idx(x, y), idx(x, y + 1));
            }
            if eight_way && y + 1 < h {
                if x + 1 < w && mask.get_pixel_unchecked(x + 1, y + 1) {
                    uf.union(idx(x, y), idx(x + 1, y + 1));
                }
                if x > 0 && mask.get_pixel_unchecked(x - 1, y + 1) {
                    uf.union(idx(x, y), idx(x - 1, y + 1));
                }
            }
        }
    }

    let mut roots: Vec<usize> = (0..h)
        .flat_map(|y| (0..w).map(move |x| (x, y)))
        .filter(|&(x, y)| mask.get_pixel_unchecked(x, y))
        .map(|(x, y)| uf.find(idx(x, y)))
        .collect();
    roots.sort_unstable();
    roots.dedup();
    roots.len()
}

fn random_mask(rng: &mut StdRng, width: u32, height: u32, density: f64) -> BitGrid {
    Grid::from_fn(width, height, |_, _| rng.random_bool(density)).unwrap()
}

#[test]
fn label_reg() {
    let mut rp = RegParams::new("label");

    // --- Random masks against union-find ---
    let mut rng = StdRng::seed_from_u64(0x7e45_u64);
    for round in 0..24 {
        let width = rng.random_range(1..=48);
        let height = rng.random_range(1..=48);
        let density = [0.2, 0.45, 0.6, 0.8][round % 4];
        let mask = random_mask(&mut rng, width, height, density);

        for (connectivity, eight_way) in [
            (ConnectivityType::FourWay, false),
            (ConnectivityType::EightWay, true),
        ] {
            let labels = label_regions(&mask, connectivity).unwrap();
            let expected = reference_count(&mask, eight_way);
            rp.compare_values(expected as f64, count_regions(&labels) as f64, 0.0);

            // every foreground pixel labeled, every background pixel 0
            let consistent = mask
                .data()
                .iter()
                .zip(labels.data())
                .all(|(&on, &label)| on == (label != 0));
            rp.check(consistent, "labels cover exactly the foreground");
        }
    }
    eprintln!("  checked 48 random labelings");

    // --- Ids equal the scan position of the first pixel ---
    let mut rng = StdRng::seed_from_u64(17);
    let mask = random_mask(&mut rng, 31, 17, 0.5);
    let labels = label_regions(&mask, ConnectivityType::FourWay).unwrap();
    let regions = extract_regions(&labels).unwrap();
    let mut ids_ok = true;
    let mut pixels_total = 0;
    for region in &regions {
        let first = region.pixels().iter().min_by_key(|p| (p.y, p.x)).unwrap();
        ids_ok &= region.id() == (first.y as u32) * 31 + first.x as u32 + 1;
        pixels_total += region.len();
    }
    rp.check(ids_ok, "region id is the scan index of its first pixel");
    rp.compare_values(mask.count_foreground() as f64, pixels_total as f64, 0.0);
    rp.check(
        regions.windows(2).all(|w| w[0].id() < w[1].id()),
        "regions are sorted by id",
    );

    // --- All-background mask ---
    let empty = BitGrid::new(20, 20).unwrap();
    let labels = label_regions(&empty, ConnectivityType::FourWay).unwrap();
    rp.compare_values(0.0, extract_regions(&labels).unwrap().len() as f64, 0.0);

    // --- Fully set mask is one region with id 1 ---
    let full = BitGrid::new_with_value(13, 9, true).unwrap();
    let labels = label_regions(&full, ConnectivityType::FourWay).unwrap();
    let regions = extract_regions(&labels).unwrap();
    rp.compare_values(1.0, regions.len() as f64, 0.0);
    rp.compare_values(1.0, regions[0].id() as f64, 0.0);
    rp.compare_values(117.0, regions[0].len() as f64, 0.0);

    assert!(rp.cleanup(), "label regression test failed");
}
