//! Cell-edge boundaries from grid-cell membership
//!
//! The boundary of a storm object is traced as a chain of member cells
//! (cell centers), then converted into a closed ring of cell-edge
//! vertices at half-integer coordinates, and finally stripped of
//! redundant collinear vertices. The ring runs south along the region's
//! west side first, with the region interior on the walker's left.

use stormgrid_core::{Error, GridPointSet, RegionMatrix, Result};

use super::patch::patch_diagonal_connections;
use super::trace::trace_boundary;

/// Compass direction from one grid-point vertex to the next, classified
/// by the signs of the row and column deltas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
    UpLeft,
    UpRight,
    DownLeft,
    DownRight,
}

/// Classify the direction from (from_row, from_col) to (to_row, to_col).
/// Zero-length steps are rejected.
pub fn direction_of_vertex_pair(
    from_row: i64,
    from_col: i64,
    to_row: i64,
    to_col: i64,
) -> Result<Direction> {
    match ((to_row - from_row).signum(), (to_col - from_col).signum()) {
        (-1, 0) => Ok(Direction::Up),
        (1, 0) => Ok(Direction::Down),
        (0, -1) => Ok(Direction::Left),
        (0, 1) => Ok(Direction::Right),
        (-1, -1) => Ok(Direction::UpLeft),
        (-1, 1) => Ok(Direction::UpRight),
        (1, -1) => Ok(Direction::DownLeft),
        (1, 1) => Ok(Direction::DownRight),
        _ => Err(Error::NonLatticeStep {
            from_row,
            from_col,
            to_row,
            to_col,
        }),
    }
}

/// Corner of a grid cell, at (row +/- 0.5, col +/- 0.5).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Corner {
    Nw,
    Ne,
    Se,
    Sw,
}

impl Corner {
    fn at(self, row: i64, col: i64) -> (f64, f64) {
        let r = row as f64;
        let c = col as f64;
        match self {
            Corner::Nw => (r - 0.5, c - 0.5),
            Corner::Ne => (r - 0.5, c + 0.5),
            Corner::Se => (r + 0.5, c + 0.5),
            Corner::Sw => (r + 0.5, c - 0.5),
        }
    }

    /// Next corner walking the cell perimeter with the cell on the left.
    fn next_around(self) -> Corner {
        match self {
            Corner::Nw => Corner::Sw,
            Corner::Sw => Corner::Se,
            Corner::Se => Corner::Ne,
            Corner::Ne => Corner::Nw,
        }
    }

    fn opposite(self) -> Corner {
        match self {
            Corner::Nw => Corner::Se,
            Corner::Se => Corner::Nw,
            Corner::Ne => Corner::Sw,
            Corner::Sw => Corner::Ne,
        }
    }
}

/// Corner of the step's first cell where the traced edge path picks up.
fn entry_corner(direction: Direction) -> Corner {
    match direction {
        Direction::Down => Corner::Nw,
        Direction::Up => Corner::Se,
        Direction::Right => Corner::Sw,
        Direction::Left => Corner::Ne,
        Direction::DownRight => Corner::Se,
        Direction::DownLeft => Corner::Sw,
        Direction::UpLeft => Corner::Nw,
        Direction::UpRight => Corner::Ne,
    }
}

/// Corner of the step's second cell where the traced edge path lands.
fn exit_corner(direction: Direction) -> Corner {
    match direction {
        Direction::Down => Corner::Sw,
        Direction::Up => Corner::Ne,
        Direction::Right => Corner::Se,
        Direction::Left => Corner::Nw,
        Direction::DownRight => Corner::Sw,
        Direction::DownLeft => Corner::Nw,
        Direction::UpLeft => Corner::Ne,
        Direction::UpRight => Corner::Se,
    }
}

/// Convert a closed chain of grid-point vertices (cell centers) into the
/// ring of cell-edge vertices that traces the cells' outer boundary.
///
/// The chain must be closed (first == last). Straight steps may span
/// several cells (as compressed chains from upstream tracers do);
/// diagonal steps are walked one cell at a time. Steps with unequal
/// nonzero row and column deltas do not follow the lattice and are
/// rejected. The output generally still contains collinear runs; feed it
/// through [`remove_redundant_vertices`].
pub fn adjust_vertices_to_grid_cell_edges(
    vertex_rows: &[i64],
    vertex_cols: &[i64],
) -> Result<(Vec<f64>, Vec<f64>)> {
    if vertex_rows.len() != vertex_cols.len() {
        return Err(Error::LengthMismatch {
            left: vertex_rows.len(),
            right: vertex_cols.len(),
        });
    }
    if vertex_rows.len() < 2 {
        return Err(Error::InvalidParameter {
            name: "vertex_rows",
            value: format!("{} vertices", vertex_rows.len()),
            reason: "a closed chain needs at least two vertices".into(),
        });
    }
    let first = (vertex_rows[0], vertex_cols[0]);
    let last = (
        vertex_rows[vertex_rows.len() - 1],
        vertex_cols[vertex_cols.len() - 1],
    );
    if first != last {
        return Err(Error::OpenRing {
            first_row: first.0,
            first_col: first.1,
            last_row: last.0,
            last_col: last.1,
        });
    }

    let steps = chain_to_steps(vertex_rows, vertex_cols)?;

    let mut edge_rows = Vec::with_capacity(2 * steps.len() + 2);
    let mut edge_cols = Vec::with_capacity(2 * steps.len() + 2);

    let mut first_entry: Option<(Corner, (i64, i64))> = None;
    let mut prev_exit: Option<Corner> = None;

    for &(from, to, direction) in &steps {
        let entry = entry_corner(direction);
        match prev_exit {
            None => {
                push_corner(entry, from, &mut edge_rows, &mut edge_cols);
                first_entry = Some((entry, from));
            }
            Some(exit) if exit == entry => {}
            Some(exit) => {
                if entry == exit.opposite() {
                    push_corner(exit.next_around(), from, &mut edge_rows, &mut edge_cols);
                }
                push_corner(entry, from, &mut edge_rows, &mut edge_cols);
            }
        }
        let exit = exit_corner(direction);
        push_corner(exit, to, &mut edge_rows, &mut edge_cols);
        prev_exit = Some(exit);
    }

    // close the ring at the start cell
    if let (Some((entry, start)), Some(exit)) = (first_entry, prev_exit) {
        if entry != exit {
            if entry == exit.opposite() {
                push_corner(exit.next_around(), start, &mut edge_rows, &mut edge_cols);
            }
            push_corner(entry, start, &mut edge_rows, &mut edge_cols);
        }
    }

    Ok((edge_rows, edge_cols))
}

fn push_corner(corner: Corner, cell: (i64, i64), rows: &mut Vec<f64>, cols: &mut Vec<f64>) {
    let (row, col) = corner.at(cell.0, cell.1);
    rows.push(row);
    cols.push(col);
}

type Step = ((i64, i64), (i64, i64), Direction);

/// Expand a vertex chain into lattice steps, splitting multi-cell
/// diagonal jumps into unit moves.
fn chain_to_steps(vertex_rows: &[i64], vertex_cols: &[i64]) -> Result<Vec<Step>> {
    let mut steps = Vec::with_capacity(vertex_rows.len());
    for i in 0..vertex_rows.len() - 1 {
        let from = (vertex_rows[i], vertex_cols[i]);
        let to = (vertex_rows[i + 1], vertex_cols[i + 1]);
        let (dr, dc) = (to.0 - from.0, to.1 - from.1);

        if dr != 0 && dc != 0 && dr.abs() != dc.abs() {
            return Err(Error::NonLatticeStep {
                from_row: from.0,
                from_col: from.1,
                to_row: to.0,
                to_col: to.1,
            });
        }
        let direction = direction_of_vertex_pair(from.0, from.1, to.0, to.1)?;

        if dr != 0 && dc != 0 && dr.abs() > 1 {
            let mut cell = from;
            for _ in 0..dr.abs() {
                let next = (cell.0 + dr.signum(), cell.1 + dc.signum());
                steps.push((cell, next, direction));
                cell = next;
            }
        } else {
            steps.push((from, to, direction));
        }
    }
    Ok(steps)
}

/// Strip redundant vertices from a ring: collapse consecutive
/// duplicates, then repeatedly drop any interior vertex exactly
/// collinear with both neighbors, until a pass changes nothing. The
/// array endpoints (the closure seam) are never dropped, and sentinel
/// (NaN) vertices are never treated as collinear.
pub fn remove_redundant_vertices(
    vertex_rows: &[f64],
    vertex_cols: &[f64],
) -> Result<(Vec<f64>, Vec<f64>)> {
    if vertex_rows.len() != vertex_cols.len() {
        return Err(Error::LengthMismatch {
            left: vertex_rows.len(),
            right: vertex_cols.len(),
        });
    }

    let mut rows = vertex_rows.to_vec();
    let mut cols = vertex_cols.to_vec();

    loop {
        let mut changed = false;

        let mut i = 1;
        while i < rows.len() {
            if rows[i] == rows[i - 1] && cols[i] == cols[i - 1] {
                rows.remove(i);
                cols.remove(i);
                changed = true;
            } else {
                i += 1;
            }
        }

        let mut i = 1;
        while i + 1 < rows.len() {
            let cross = (rows[i] - rows[i - 1]) * (cols[i + 1] - cols[i])
                - (cols[i] - cols[i - 1]) * (rows[i + 1] - rows[i]);
            if cross == 0.0 {
                rows.remove(i);
                cols.remove(i);
                changed = true;
            } else {
                i += 1;
            }
        }

        if !changed {
            break;
        }
    }

    Ok((rows, cols))
}

/// Outer cell-edge boundary of a set of member cells: patches
/// diagonal-only contacts, traces the boundary chain, converts it to
/// cell edges, and strips redundant vertices. Returns closed
/// (vertex_rows, vertex_cols) arrays at half-integer coordinates.
pub fn boundary_of_grid_points(points: &GridPointSet) -> Result<(Vec<f64>, Vec<f64>)> {
    let mut region = RegionMatrix::from_points(points)?;
    patch_diagonal_connections(&mut region);
    let chain = trace_boundary(&region)?;

    if chain.len() == 1 {
        let (r, c) = (chain[0].0 as f64, chain[0].1 as f64);
        return Ok((
            vec![r - 0.5, r + 0.5, r + 0.5, r - 0.5, r - 0.5],
            vec![c - 0.5, c - 0.5, c + 0.5, c + 0.5, c - 0.5],
        ));
    }

    let chain_rows: Vec<i64> = chain.iter().map(|&(row, _)| row).collect();
    let chain_cols: Vec<i64> = chain.iter().map(|&(_, col)| col).collect();
    let (edge_rows, edge_cols) = adjust_vertices_to_grid_cell_edges(&chain_rows, &chain_cols)?;
    remove_redundant_vertices(&edge_rows, &edge_cols)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_of_vertex_pair() {
        use Direction::*;
        assert_eq!(direction_of_vertex_pair(5, 5, 4, 5).unwrap(), Up);
        assert_eq!(direction_of_vertex_pair(5, 5, 6, 5).unwrap(), Down);
        assert_eq!(direction_of_vertex_pair(5, 5, 5, 6).unwrap(), Right);
        assert_eq!(direction_of_vertex_pair(5, 5, 5, 4).unwrap(), Left);
        assert_eq!(direction_of_vertex_pair(5, 5, 4, 6).unwrap(), UpRight);
        assert_eq!(direction_of_vertex_pair(5, 5, 4, 4).unwrap(), UpLeft);
        assert_eq!(direction_of_vertex_pair(5, 5, 6, 6).unwrap(), DownRight);
        assert_eq!(direction_of_vertex_pair(5, 5, 6, 4).unwrap(), DownLeft);
        assert!(direction_of_vertex_pair(5, 5, 5, 5).is_err());
    }

    // boundary chain of the ten-cell storm, compressed the way upstream
    // tracers emit it (straight runs keep only their endpoints)
    fn compressed_chain() -> (Vec<i64>, Vec<i64>) {
        (
            vec![101, 102, 103, 103, 104, 102, 102, 101, 101],
            vec![501, 501, 502, 503, 504, 504, 503, 502, 501],
        )
    }

    fn expected_edge_rows() -> Vec<f64> {
        vec![
            100.5, 102.5, 102.5, 103.5, 103.5, 104.5, 104.5, 101.5, 101.5, 100.5, 100.5,
        ]
    }

    fn expected_edge_cols() -> Vec<f64> {
        vec![
            500.5, 500.5, 501.5, 501.5, 503.5, 503.5, 504.5, 504.5, 502.5, 502.5, 500.5,
        ]
    }

    #[test]
    fn test_adjust_then_remove_redundant() {
        let (chain_rows, chain_cols) = compressed_chain();
        let (edge_rows, edge_cols) =
            adjust_vertices_to_grid_cell_edges(&chain_rows, &chain_cols).unwrap();
        let (edge_rows, edge_cols) = remove_redundant_vertices(&edge_rows, &edge_cols).unwrap();

        assert_eq!(edge_rows, expected_edge_rows());
        assert_eq!(edge_cols, expected_edge_cols());
    }

    #[test]
    fn test_remove_redundant_handles_spiked_input() {
        // over-emitted ring with backtracking spikes along boundary lines
        let spiked_rows = [
            100.5, 102.5, 102.5, 103.5, 103.5, 103.5, 103.5, 103.5, 104.5, 104.5, 102.5, 103.5,
            104.5, 101.5, 101.5, 100.5, 100.5,
        ];
        let spiked_cols = [
            500.5, 500.5, 501.5, 501.5, 503.5, 502.5, 501.5, 503.5, 503.5, 504.5, 504.5, 504.5,
            504.5, 504.5, 502.5, 502.5, 500.5,
        ];
        let (rows, cols) = remove_redundant_vertices(&spiked_rows, &spiked_cols).unwrap();

        assert_eq!(rows, expected_edge_rows());
        assert_eq!(cols, expected_edge_cols());
    }

    #[test]
    fn test_remove_redundant_is_idempotent() {
        let (rows_once, cols_once) =
            remove_redundant_vertices(&expected_edge_rows(), &expected_edge_cols()).unwrap();
        let (rows_twice, cols_twice) = remove_redundant_vertices(&rows_once, &cols_once).unwrap();
        assert_eq!(rows_once, rows_twice);
        assert_eq!(cols_once, cols_twice);
        assert_eq!(rows_once, expected_edge_rows());
    }

    #[test]
    fn test_open_chain_rejected() {
        let result = adjust_vertices_to_grid_cell_edges(&[101, 102, 103], &[501, 501, 501]);
        assert!(matches!(result, Err(Error::OpenRing { .. })));
    }

    #[test]
    fn test_non_lattice_step_rejected() {
        // knight move
        let result =
            adjust_vertices_to_grid_cell_edges(&[101, 103, 101], &[501, 502, 501]);
        assert!(matches!(result, Err(Error::NonLatticeStep { .. })));

        // repeated vertex
        let result =
            adjust_vertices_to_grid_cell_edges(&[101, 101, 102, 101], &[501, 501, 501, 501]);
        assert!(matches!(result, Err(Error::NonLatticeStep { .. })));
    }

    #[test]
    fn test_boundary_of_single_cell() {
        let points = GridPointSet::new(vec![7], vec![9]).unwrap();
        let (rows, cols) = boundary_of_grid_points(&points).unwrap();
        assert_eq!(rows, vec![6.5, 7.5, 7.5, 6.5, 6.5]);
        assert_eq!(cols, vec![8.5, 8.5, 9.5, 9.5, 8.5]);
    }

    #[test]
    fn test_boundary_of_two_cell_bar() {
        let points = GridPointSet::new(vec![5, 5], vec![5, 6]).unwrap();
        let (rows, cols) = boundary_of_grid_points(&points).unwrap();
        assert_eq!(rows, vec![5.5, 5.5, 4.5, 4.5, 5.5]);
        assert_eq!(cols, vec![4.5, 6.5, 6.5, 4.5, 4.5]);
    }

    #[test]
    fn test_boundary_of_ten_cell_storm() {
        let points = GridPointSet::new(
            vec![101, 101, 102, 102, 102, 102, 103, 103, 103, 104],
            vec![501, 502, 501, 502, 503, 504, 502, 503, 504, 504],
        )
        .unwrap();
        let (rows, cols) = boundary_of_grid_points(&points).unwrap();
        assert_eq!(rows, expected_edge_rows());
        assert_eq!(cols, expected_edge_cols());
    }

    #[test]
    fn test_boundary_of_diagonal_pair_is_patched_first() {
        let points = GridPointSet::new(vec![0, 1], vec![0, 1]).unwrap();
        let (rows, cols) = boundary_of_grid_points(&points).unwrap();

        // L-shape after patching: (0,0), (1,0), (1,1)
        assert_eq!(rows.first(), rows.last());
        assert_eq!(cols.first(), cols.last());
        assert_eq!(rows, vec![-0.5, 1.5, 1.5, 0.5, 0.5, -0.5, -0.5]);
        assert_eq!(cols, vec![-0.5, -0.5, 1.5, 1.5, 0.5, 0.5, -0.5]);
    }
}
