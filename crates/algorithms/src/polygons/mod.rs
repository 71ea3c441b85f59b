//! Storm-polygon conversions
//!
//! Round-trippable conversions between grid-cell membership, cell-edge
//! vertex boundaries, and planar polygon objects, plus buffering.

mod adapter;
mod boundary;
mod buffer;
mod patch;
mod rasterize;
mod trace;

pub use adapter::{
    point_in_or_on_polygon, polygon_to_vertex_rings, vertex_arrays_to_polygon,
    vertex_rings_to_polygon,
};
pub use boundary::{
    adjust_vertices_to_grid_cell_edges, boundary_of_grid_points, direction_of_vertex_pair,
    remove_redundant_vertices, Direction,
};
pub use buffer::{buffer_simple_polygon, BufferParams};
pub use patch::patch_diagonal_connections;
pub use rasterize::{grid_points_in_polygon, simple_polygon_to_grid_points};
pub use trace::trace_boundary;
