//! Pixel connectivity
//!
//! Defines which neighbors join two foreground pixels into the same region.

/// Connectivity type for component analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectivityType {
    /// 4-way connectivity (up, down, left, right)
    #[default]
    FourWay,
    /// 8-way connectivity (includes diagonals)
    EightWay,
}

const FOUR_WAY_OFFSETS: [(i64, i64); 4] = [(-1, 0), (1, 0), (0, 1), (0, -1)];

const EIGHT_WAY_OFFSETS: [(i64, i64); 8] = [
    (-1, 0),
    (1, 0),
    (0, 1),
    (0, -1),
    (-1, -1),
    (1, -1),
    (-1, 1),
    (1, 1),
];

impl ConnectivityType {
    /// Neighbor offsets as (dx, dy)
    pub fn offsets(self) -> &'static [(i64, i64)] {
        match self {
            ConnectivityType::FourWay => &FOUR_WAY_OFFSETS,
            ConnectivityType::EightWay => &EIGHT_WAY_OFFSETS,
        }
    }

    /// In-bounds neighbors of (x, y) in a `width` x `height` grid
    pub fn neighbors(
        self,
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    ) -> impl Iterator<Item = (u32, u32)> {
        self.offsets().iter().filter_map(move |&(dx, dy)| {
            let nx = x as i64 + dx;
            let ny = y as i64 + dy;
            if nx < 0 || ny < 0 || nx >= width as i64 || ny >= height as i64 {
                None
            } else {
                Some((nx as u32, ny as u32))
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corner_neighbors() {
        let n4: Vec<_> = ConnectivityType::FourWay.neighbors(0, 0, 3, 3).collect();
        assert_eq!(n4.len(), 2);
        assert!(n4.contains(&(1, 0)));
        assert!(n4.contains(&(0, 1)));

        let n8: Vec<_> = ConnectivityType::EightWay.neighbors(0, 0, 3, 3).collect();
        assert_eq!(n8.len(), 3);
        assert!(n8.contains(&(1, 1)));
    }

    #[test]
    fn test_interior_neighbors() {
        assert_eq!(ConnectivityType::FourWay.neighbors(1, 1, 3, 3).count(), 4);
        assert_eq!(ConnectivityType::EightWay.neighbors(1, 1, 3, 3).count(), 8);
    }

    #[test]
    fn test_default_is_four_way() {
        assert_eq!(ConnectivityType::default(), ConnectivityType::FourWay);
    }
}
