//! Diagonal-connection repair for region masks
//!
//! Two member cells that touch only at a corner (both shared orthogonal
//! neighbors empty) make the outer boundary ambiguous for 4-connected
//! tracing. Each such pair is repaired by adding one orthogonal
//! neighbor: the cell directly below the upper cell of the pair. The
//! scan runs top to bottom, so a repair can only introduce new diagonal
//! pairs in rows that have not been visited yet; one pass reaches a
//! fixed point.

use stormgrid_core::RegionMatrix;

/// Make a region mask safe for 4-connected boundary tracing.
pub fn patch_diagonal_connections(region: &mut RegionMatrix) {
    let mask = region.mask_mut();
    let (nrows, ncols) = (mask.nrows(), mask.ncols());

    for i in 0..nrows - 1 {
        for j in 0..ncols {
            if !mask[(i, j)] {
                continue;
            }
            // down-right corner contact
            if j + 1 < ncols
                && mask[(i + 1, j + 1)]
                && !mask[(i, j + 1)]
                && !mask[(i + 1, j)]
            {
                mask[(i + 1, j)] = true;
            }
            // down-left corner contact
            if j > 0 && mask[(i + 1, j - 1)] && !mask[(i, j - 1)] && !mask[(i + 1, j)] {
                mask[(i + 1, j)] = true;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stormgrid_core::GridPointSet;

    fn region_of(rows: Vec<i64>, cols: Vec<i64>) -> RegionMatrix {
        RegionMatrix::from_points(&GridPointSet::new(rows, cols).unwrap()).unwrap()
    }

    #[test]
    fn test_down_right_pair_filled_below_upper_cell() {
        let mut region = region_of(vec![0, 1], vec![0, 1]);
        patch_diagonal_connections(&mut region);

        assert!(region.contains(1, 0), "cell below the upper cell");
        assert!(!region.contains(0, 1));
        assert_eq!(region.to_points().len(), 3);
    }

    #[test]
    fn test_down_left_pair_filled_below_upper_cell() {
        let mut region = region_of(vec![0, 1], vec![1, 0]);
        patch_diagonal_connections(&mut region);

        assert!(region.contains(1, 1), "cell below the upper cell");
        assert!(!region.contains(0, 0));
        assert_eq!(region.to_points().len(), 3);
    }

    #[test]
    fn test_edge_connected_region_untouched() {
        let points = GridPointSet::new(
            vec![101, 101, 102, 102, 102, 102, 103, 103, 103, 104],
            vec![501, 502, 501, 502, 503, 504, 502, 503, 504, 504],
        )
        .unwrap();
        let mut region = RegionMatrix::from_points(&points).unwrap();
        patch_diagonal_connections(&mut region);
        assert_eq!(region.to_points(), points);
    }

    #[test]
    fn test_staircase_chain_of_diagonals() {
        let mut region = region_of(vec![0, 1, 2], vec![0, 1, 2]);
        patch_diagonal_connections(&mut region);

        assert!(region.contains(1, 0));
        assert!(region.contains(2, 1));
        assert_eq!(region.to_points().len(), 5);
    }

    #[test]
    fn test_idempotent() {
        let mut region = region_of(vec![0, 1, 2], vec![0, 1, 0]);
        patch_diagonal_connections(&mut region);
        let once = region.clone();
        patch_diagonal_connections(&mut region);
        assert_eq!(region, once);
    }
}
