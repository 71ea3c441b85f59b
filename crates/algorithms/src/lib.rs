//! # stormgrid algorithms
//!
//! Polygon geometry algorithms for storm objects on radar grids.
//!
//! ## What lives here
//!
//! - **polygons::boundary**: cell membership -> cell-edge boundary ring
//! - **polygons::rasterize**: polygon -> cell membership (inclusive)
//! - **polygons::buffer**: mitered/rounded buffers and annuli
//! - **polygons::adapter**: vertex arrays <-> geo polygon objects
//!
//! Every function is a pure conversion between in-memory values; batch
//! work over many storms is embarrassingly parallel at the call site.

pub mod polygons;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::polygons::{
        boundary_of_grid_points, buffer_simple_polygon, grid_points_in_polygon,
        patch_diagonal_connections, point_in_or_on_polygon, polygon_to_vertex_rings,
        remove_redundant_vertices, simple_polygon_to_grid_points, trace_boundary,
        vertex_arrays_to_polygon, vertex_rings_to_polygon, BufferParams, Direction,
    };
    pub use stormgrid_core::prelude::*;
}
