//! Grid cells covered by a polygon
//!
//! Inclusive membership: a cell center exactly on the polygon boundary
//! belongs to the polygon, so boundaries traced from grid cells
//! rasterize back to the same cell set. Candidate cells come from the
//! polygon's bounding box only, never the full radar grid.

use geo::BoundingRect;
use geo_types::Polygon;
use stormgrid_core::{Error, GridPointSet, Result};

use super::adapter::{point_in_or_on_polygon, vertex_arrays_to_polygon};

/// Member cells of a polygon in grid coordinates (x = column, y = row).
/// Cells are returned in row-major order.
pub fn grid_points_in_polygon(polygon: &Polygon<f64>) -> Result<GridPointSet> {
    let bounds = polygon.bounding_rect().ok_or(Error::DegenerateRing)?;
    let min_row = bounds.min().y.ceil() as i64;
    let max_row = bounds.max().y.floor() as i64;
    let min_col = bounds.min().x.ceil() as i64;
    let max_col = bounds.max().x.floor() as i64;

    let mut rows = Vec::new();
    let mut cols = Vec::new();
    for row in min_row..=max_row {
        for col in min_col..=max_col {
            if point_in_or_on_polygon(polygon, col as f64, row as f64) {
                rows.push(row);
                cols.push(col);
            }
        }
    }
    GridPointSet::new(rows, cols)
}

/// Member cells of a simple polygon given as one closed vertex ring in
/// cell-edge coordinates.
pub fn simple_polygon_to_grid_points(
    vertex_rows: &[f64],
    vertex_cols: &[f64],
) -> Result<GridPointSet> {
    let polygon = vertex_arrays_to_polygon(vertex_cols, vertex_rows)?;
    grid_points_in_polygon(&polygon)
}
