//! End-to-end tests over the storm-polygon pipeline: membership ->
//! boundary -> polygon object -> membership, plus the buffer + ring
//! composition paths.

use stormgrid_algorithms::polygons::{
    boundary_of_grid_points, buffer_simple_polygon, polygon_to_vertex_rings,
    simple_polygon_to_grid_points, vertex_arrays_to_polygon, BufferParams,
};
use stormgrid_core::{GridPointSet, RadarGrid, VertexRings};

fn ten_cell_storm() -> GridPointSet {
    GridPointSet::new(
        vec![101, 101, 102, 102, 102, 102, 103, 103, 103, 104],
        vec![501, 502, 501, 502, 503, 504, 502, 503, 504, 504],
    )
    .unwrap()
}

fn sorted_cells(points: &GridPointSet) -> Vec<(i64, i64)> {
    let mut cells: Vec<(i64, i64)> = points.iter().collect();
    cells.sort_unstable();
    cells
}

#[test]
fn boundary_then_rasterize_reproduces_membership() {
    let points = ten_cell_storm();
    let (vertex_rows, vertex_cols) = boundary_of_grid_points(&points).unwrap();
    let recovered = simple_polygon_to_grid_points(&vertex_rows, &vertex_cols).unwrap();

    assert_eq!(sorted_cells(&recovered), sorted_cells(&points));
}

#[test]
fn boundary_then_rasterize_on_small_shapes() {
    let shapes: Vec<(Vec<i64>, Vec<i64>)> = vec![
        // single cell
        (vec![40], vec![70]),
        // horizontal bar
        (vec![3, 3, 3], vec![5, 6, 7]),
        // L-shape
        (vec![0, 1, 1], vec![0, 0, 1]),
        // plus sign
        (vec![0, 1, 1, 1, 2], vec![1, 0, 1, 2, 1]),
    ];

    for (rows, cols) in shapes {
        let points = GridPointSet::new(rows, cols).unwrap();
        let (vertex_rows, vertex_cols) = boundary_of_grid_points(&points).unwrap();
        let recovered = simple_polygon_to_grid_points(&vertex_rows, &vertex_cols).unwrap();
        assert_eq!(
            sorted_cells(&recovered),
            sorted_cells(&points),
            "round trip failed for {:?}",
            sorted_cells(&points)
        );
    }
}

#[test]
fn diagonal_membership_is_patched_before_tracing() {
    // two corner-touching cells become three after patching; the traced
    // boundary must cover all three
    let points = GridPointSet::new(vec![0, 1], vec![0, 1]).unwrap();
    let (vertex_rows, vertex_cols) = boundary_of_grid_points(&points).unwrap();
    let recovered = simple_polygon_to_grid_points(&vertex_rows, &vertex_cols).unwrap();

    assert_eq!(
        sorted_cells(&recovered),
        vec![(0, 0), (1, 0), (1, 1)],
    );
}

#[test]
fn boundary_converts_to_latlng_on_cell_edges() {
    let grid = RadarGrid::new(55.0, 230.0, 0.01, 0.01, 3501, 7001).unwrap();
    let points = ten_cell_storm();
    let (vertex_rows, vertex_cols) = boundary_of_grid_points(&points).unwrap();

    let (lats, lngs) = grid.rowcol_to_latlng(&vertex_rows, &vertex_cols).unwrap();
    let (rows_back, cols_back) = grid.latlng_to_rowcol(&lats, &lngs).unwrap();

    // half-spacing rounding keeps edge coordinates exact through the trip
    for i in 0..vertex_rows.len() {
        assert!((rows_back[i] - vertex_rows[i]).abs() < 1e-6);
        assert!((cols_back[i] - vertex_cols[i]).abs() < 1e-6);
    }
}

#[test]
fn buffered_storm_flattens_with_one_separator_per_hole() {
    let (vertex_rows, vertex_cols) = boundary_of_grid_points(&ten_cell_storm()).unwrap();
    // x = column, y = row in polygon space
    let rings = buffer_simple_polygon(
        &vertex_cols,
        &vertex_rows,
        &BufferParams {
            min_distance: Some(1.0),
            max_distance: 2.0,
            preserve_angles: true,
        },
    )
    .unwrap();
    assert_eq!(rings.num_holes(), 1);

    let (xs, ys) = rings.to_flat_arrays();
    assert_eq!(xs.iter().filter(|x| x.is_nan()).count(), 1);
    assert_eq!(ys.iter().filter(|y| y.is_nan()).count(), 1);

    let recovered = VertexRings::from_flat_arrays(&xs, &ys).unwrap();
    assert_eq!(recovered, rings);
}

#[test]
fn polygon_object_round_trip_preserves_storm_boundary() {
    let (vertex_rows, vertex_cols) = boundary_of_grid_points(&ten_cell_storm()).unwrap();
    let polygon = vertex_arrays_to_polygon(&vertex_cols, &vertex_rows).unwrap();
    let rings = polygon_to_vertex_rings(&polygon);

    assert_eq!(rings.exterior_x, vertex_cols);
    assert_eq!(rings.exterior_y, vertex_rows);
    assert_eq!(rings.num_holes(), 0);
}
