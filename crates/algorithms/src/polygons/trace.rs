//! Outer-boundary tracing over a region mask
//!
//! Radial-sweep border following. Starting from the topmost (then
//! leftmost) member cell, the eight neighbors of the current cell are
//! swept counterclockwise beginning just past the previous boundary
//! cell; the first member found is the next boundary cell. The walk
//! terminates when its first move repeats, so one-cell-wide spurs that
//! must be traversed twice are handled correctly. The chain is closed
//! (first cell == last cell) and visits every boundary cell of the
//! component containing the start cell.

use stormgrid_core::{Error, RegionMatrix, Result};

/// Neighbor offsets in counterclockwise sweep order, starting west.
const SWEEP: [(i64, i64); 8] = [
    (0, -1),
    (1, -1),
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
];

/// Trace the outer boundary of the region, as an ordered closed chain of
/// member cells in full-grid coordinates. A single-cell region yields a
/// one-element chain.
pub fn trace_boundary(region: &RegionMatrix) -> Result<Vec<(i64, i64)>> {
    let start = find_start(region)?;
    let mut chain = vec![start];

    let mut current = start;
    // west of the start cell is empty because the start is leftmost in
    // the topmost occupied row
    let mut previous = (start.0, start.1 - 1);
    let mut first_move: Option<((i64, i64), (i64, i64))> = None;

    while let Some(next) = next_boundary_cell(region, current, previous) {
        match first_move {
            Some(movement) if movement == (current, next) => break,
            Some(_) => {}
            None => first_move = Some((current, next)),
        }
        chain.push(next);
        previous = current;
        current = next;
    }

    Ok(chain)
}

fn find_start(region: &RegionMatrix) -> Result<(i64, i64)> {
    for ((i, j), &inside) in region.mask().indexed_iter() {
        if inside {
            return Ok((region.first_row() + i as i64, region.first_col() + j as i64));
        }
    }
    Err(Error::EmptyPointSet)
}

/// Sweep the neighbors of `current` counterclockwise starting just past
/// `previous`; the first member cell is the next boundary cell. `None`
/// means `current` is isolated.
fn next_boundary_cell(
    region: &RegionMatrix,
    current: (i64, i64),
    previous: (i64, i64),
) -> Option<(i64, i64)> {
    let back = (previous.0 - current.0, previous.1 - current.1);
    let back_index = SWEEP.iter().position(|&offset| offset == back)?;

    for step in 1..=SWEEP.len() {
        let (dr, dc) = SWEEP[(back_index + step) % SWEEP.len()];
        let candidate = (current.0 + dr, current.1 + dc);
        if region.contains(candidate.0, candidate.1) {
            return Some(candidate);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use stormgrid_core::GridPointSet;

    fn region_of(rows: Vec<i64>, cols: Vec<i64>) -> RegionMatrix {
        RegionMatrix::from_points(&GridPointSet::new(rows, cols).unwrap()).unwrap()
    }

    #[test]
    fn test_ten_cell_storm_chain() {
        let region = region_of(
            vec![101, 101, 102, 102, 102, 102, 103, 103, 103, 104],
            vec![501, 502, 501, 502, 503, 504, 502, 503, 504, 504],
        );
        let chain = trace_boundary(&region).unwrap();

        let expected = vec![
            (101, 501),
            (102, 501),
            (103, 502),
            (103, 503),
            (104, 504),
            (103, 504),
            (102, 504),
            (102, 503),
            (101, 502),
            (101, 501),
        ];
        assert_eq!(chain, expected);
    }

    #[test]
    fn test_two_cell_region() {
        let region = region_of(vec![5, 5], vec![5, 6]);
        let chain = trace_boundary(&region).unwrap();
        assert_eq!(chain, vec![(5, 5), (5, 6), (5, 5)]);
    }

    #[test]
    fn test_single_cell_region() {
        let region = region_of(vec![7], vec![9]);
        let chain = trace_boundary(&region).unwrap();
        assert_eq!(chain, vec![(7, 9)]);
    }

    #[test]
    fn test_chain_is_closed_and_on_boundary() {
        let region = region_of(
            vec![0, 0, 0, 1, 1, 1, 2, 2, 2],
            vec![0, 1, 2, 0, 1, 2, 0, 1, 2],
        );
        let chain = trace_boundary(&region).unwrap();
        assert_eq!(chain.first(), chain.last());
        // interior cell of the 3x3 block never appears
        assert!(!chain.contains(&(1, 1)));
        for &(row, col) in &chain {
            assert!(region.contains(row, col));
        }
    }

    #[test]
    fn test_one_cell_wide_spur_is_walked_both_ways() {
        // vertical spur hanging from a horizontal bar
        let region = region_of(vec![0, 0, 0, 1, 2], vec![0, 1, 2, 1, 1]);
        let chain = trace_boundary(&region).unwrap();

        assert_eq!(chain.first(), chain.last());
        let spur_visits = chain.iter().filter(|&&cell| cell == (1, 1)).count();
        assert_eq!(spur_visits, 2, "spur cell is passed in both directions");
    }
}
