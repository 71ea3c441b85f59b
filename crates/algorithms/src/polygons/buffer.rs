//! Concentric buffers around simple polygons
//!
//! Wraps the offset kernel: a single ring dilated by the outer distance,
//! or an annulus (outer ring as exterior, inner ring as hole) when an
//! inner distance is also given. Storm polygons traced from grid cells
//! are rectilinear, so mitered corners are the default; rounding would
//! misrepresent the cell edges. Rounded corners are available for
//! display work.

use geo::Area;
use geo_buf::{buffer_polygon, buffer_polygon_rounded};
use geo_types::{MultiPolygon, Polygon};
use stormgrid_core::{Error, Result, VertexRings};

use super::adapter::vertex_arrays_to_polygon;

/// Parameters for polygon buffering
#[derive(Debug, Clone)]
pub struct BufferParams {
    /// Inner buffer distance; `Some` produces an annulus with the inner
    /// ring as a hole. Zero means the hole is the input polygon itself.
    pub min_distance: Option<f64>,
    /// Outer buffer distance
    pub max_distance: f64,
    /// Mitered corners when true, rounded otherwise
    pub preserve_angles: bool,
}

impl Default for BufferParams {
    fn default() -> Self {
        Self {
            min_distance: None,
            max_distance: 1.0,
            preserve_angles: true,
        }
    }
}

/// Buffer a simple (hole-free) polygon given as one closed vertex ring.
///
/// With only `max_distance`, the result is a single ring: the polygon
/// dilated outward. With `min_distance` as well, the result is the
/// annulus between the two dilations: the outer ring becomes the
/// exterior and the inner ring becomes a hole.
pub fn buffer_simple_polygon(
    xs: &[f64],
    ys: &[f64],
    params: &BufferParams,
) -> Result<VertexRings> {
    if !(params.max_distance > 0.0) {
        return Err(Error::InvalidParameter {
            name: "max_distance",
            value: params.max_distance.to_string(),
            reason: "buffer distance must be positive".into(),
        });
    }
    if let Some(min_distance) = params.min_distance {
        if !(min_distance >= 0.0) {
            return Err(Error::InvalidParameter {
                name: "min_distance",
                value: min_distance.to_string(),
                reason: "buffer distance must be non-negative".into(),
            });
        }
        if min_distance >= params.max_distance {
            return Err(Error::InvalidParameter {
                name: "min_distance",
                value: min_distance.to_string(),
                reason: format!(
                    "must be less than max_distance ({})",
                    params.max_distance
                ),
            });
        }
    }

    let polygon = vertex_arrays_to_polygon(xs, ys)?;
    if polygon.unsigned_area() == 0.0 {
        return Err(Error::DegenerateRing);
    }

    let (exterior_x, exterior_y) =
        dilated_ring(&polygon, params.max_distance, params.preserve_angles)?;
    let mut rings = VertexRings::simple(exterior_x, exterior_y)?;

    if let Some(min_distance) = params.min_distance {
        let (hole_x, hole_y) = if min_distance == 0.0 {
            (xs.to_vec(), ys.to_vec())
        } else {
            dilated_ring(&polygon, min_distance, params.preserve_angles)?
        };
        rings.hole_x.push(hole_x);
        rings.hole_y.push(hole_y);
    }

    Ok(rings)
}

/// Dilate outward and return the exterior ring of the result. The kernel
/// may return several polygons; the one with the most exterior vertices
/// wins (ties go to the first).
fn dilated_ring(
    polygon: &Polygon<f64>,
    distance: f64,
    preserve_angles: bool,
) -> Result<(Vec<f64>, Vec<f64>)> {
    let buffered: MultiPolygon<f64> = if preserve_angles {
        buffer_polygon(polygon, distance)
    } else {
        buffer_polygon_rounded(polygon, distance)
    };

    let ring = largest_polygon(&buffered).ok_or(Error::DegenerateRing)?;
    Ok(ring
        .exterior()
        .coords()
        .map(|coord| (coord.x, coord.y))
        .unzip())
}

fn largest_polygon(polygons: &MultiPolygon<f64>) -> Option<&Polygon<f64>> {
    let mut best: Option<&Polygon<f64>> = None;
    for polygon in polygons.iter() {
        let better = match best {
            None => true,
            Some(current) => polygon.exterior().0.len() > current.exterior().0.len(),
        };
        if better {
            best = Some(polygon);
        }
    }
    best
}
