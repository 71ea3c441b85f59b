//! Sparse and dense representations of grid-cell membership
//!
//! A storm object on the radar grid is a set of member cells. The sparse
//! form is a pair of index arrays; the dense form is a boolean mask over
//! the bounding box of the members, padded by one empty cell on every
//! side so that boundary tracing never needs bounds special cases. The
//! two forms round-trip exactly.

use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Sparse membership: paired row/column indices of the member cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridPointSet {
    rows: Vec<i64>,
    cols: Vec<i64>,
}

impl GridPointSet {
    pub fn new(rows: Vec<i64>, cols: Vec<i64>) -> Result<Self> {
        if rows.len() != cols.len() {
            return Err(Error::LengthMismatch {
                left: rows.len(),
                right: cols.len(),
            });
        }
        Ok(Self { rows, cols })
    }

    pub fn rows(&self) -> &[i64] {
        &self.rows
    }

    pub fn cols(&self) -> &[i64] {
        &self.cols
    }

    /// Number of member cells
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (i64, i64)> + '_ {
        self.rows.iter().copied().zip(self.cols.iter().copied())
    }
}

/// Dense membership: boolean mask over the bounding box of the member
/// cells plus a one-cell false margin. `first_row`/`first_col` give the
/// full-grid index of mask position (0, 0).
#[derive(Debug, Clone, PartialEq)]
pub struct RegionMatrix {
    mask: Array2<bool>,
    first_row: i64,
    first_col: i64,
}

impl RegionMatrix {
    /// Scatter a sparse point set into a dense mask sized to its bounding
    /// box (plus margin), never to the full radar grid.
    pub fn from_points(points: &GridPointSet) -> Result<Self> {
        if points.is_empty() {
            return Err(Error::EmptyPointSet);
        }

        let mut min_row = i64::MAX;
        let mut max_row = i64::MIN;
        let mut min_col = i64::MAX;
        let mut max_col = i64::MIN;
        for (row, col) in points.iter() {
            min_row = min_row.min(row);
            max_row = max_row.max(row);
            min_col = min_col.min(col);
            max_col = max_col.max(col);
        }

        let nrows = (max_row - min_row + 3) as usize;
        let ncols = (max_col - min_col + 3) as usize;
        let mut mask = Array2::from_elem((nrows, ncols), false);
        for (row, col) in points.iter() {
            mask[((row - min_row + 1) as usize, (col - min_col + 1) as usize)] = true;
        }

        Ok(Self {
            mask,
            first_row: min_row - 1,
            first_col: min_col - 1,
        })
    }

    /// Gather the mask back into a sparse point set, in row-major order.
    pub fn to_points(&self) -> GridPointSet {
        let mut rows = Vec::new();
        let mut cols = Vec::new();
        for ((i, j), &inside) in self.mask.indexed_iter() {
            if inside {
                rows.push(self.first_row + i as i64);
                cols.push(self.first_col + j as i64);
            }
        }
        GridPointSet { rows, cols }
    }

    /// Full-grid row index of mask position (0, 0)
    pub fn first_row(&self) -> i64 {
        self.first_row
    }

    /// Full-grid column index of mask position (0, 0)
    pub fn first_col(&self) -> i64 {
        self.first_col
    }

    /// Membership test in full-grid coordinates; anywhere outside the
    /// mask extent is not a member.
    pub fn contains(&self, row: i64, col: i64) -> bool {
        let i = row - self.first_row;
        let j = col - self.first_col;
        i >= 0
            && j >= 0
            && (i as usize) < self.mask.nrows()
            && (j as usize) < self.mask.ncols()
            && self.mask[(i as usize, j as usize)]
    }

    pub fn mask(&self) -> &Array2<bool> {
        &self.mask
    }

    pub fn mask_mut(&mut self) -> &mut Array2<bool> {
        &mut self.mask
    }
}
