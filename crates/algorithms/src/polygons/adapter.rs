//! Vertex arrays <-> planar polygon objects
//!
//! The geometry kernel (geo) handles containment, area, and buffering;
//! this module is the only place vertex arrays and `geo::Polygon` meet.
//! Ring order is preserved in both directions, so a round trip through
//! the polygon object reproduces the input coordinates exactly.

use geo::Intersects;
use geo_types::{LineString, Point, Polygon};
use stormgrid_core::{Error, Result, VertexRings};

/// Build a polygon from an exterior ring and hole rings.
///
/// Rings must have finite coordinates, at least three distinct vertices,
/// and no self-intersections; anything else is a geometry error. Rings
/// may be given open; the kernel closes them.
pub fn vertex_rings_to_polygon(rings: &VertexRings) -> Result<Polygon<f64>> {
    let exterior = ring_from_arrays(&rings.exterior_x, &rings.exterior_y)?;
    let holes = rings
        .hole_x
        .iter()
        .zip(rings.hole_y.iter())
        .map(|(xs, ys)| ring_from_arrays(xs, ys))
        .collect::<Result<Vec<_>>>()?;
    Ok(Polygon::new(exterior, holes))
}

/// Build a hole-free polygon from one vertex ring.
pub fn vertex_arrays_to_polygon(xs: &[f64], ys: &[f64]) -> Result<Polygon<f64>> {
    let rings = VertexRings::simple(xs.to_vec(), ys.to_vec())?;
    vertex_rings_to_polygon(&rings)
}

/// Read a polygon back into vertex arrays, exterior first, holes in
/// stored order.
pub fn polygon_to_vertex_rings(polygon: &Polygon<f64>) -> VertexRings {
    let (exterior_x, exterior_y) = ring_to_arrays(polygon.exterior());
    let (hole_x, hole_y) = polygon.interiors().iter().map(ring_to_arrays).unzip();
    VertexRings {
        exterior_x,
        exterior_y,
        hole_x,
        hole_y,
    }
}

/// Containment with the boundary counted as inside. Storm polygons are
/// derived from grid cells, so grid points sitting exactly on an edge
/// must test as members.
pub fn point_in_or_on_polygon(polygon: &Polygon<f64>, x: f64, y: f64) -> bool {
    polygon.intersects(&Point::new(x, y))
}

fn ring_to_arrays(ring: &LineString<f64>) -> (Vec<f64>, Vec<f64>) {
    ring.coords().map(|coord| (coord.x, coord.y)).unzip()
}

fn ring_from_arrays(xs: &[f64], ys: &[f64]) -> Result<LineString<f64>> {
    if xs.len() != ys.len() {
        return Err(Error::LengthMismatch {
            left: xs.len(),
            right: ys.len(),
        });
    }
    for (index, (&x, &y)) in xs.iter().zip(ys.iter()).enumerate() {
        if !x.is_finite() || !y.is_finite() {
            return Err(Error::NonFiniteCoordinate { index });
        }
    }

    let mut coords: Vec<(f64, f64)> = xs.iter().copied().zip(ys.iter().copied()).collect();
    let closed = coords.len() >= 2 && coords.first() == coords.last();
    if !closed {
        if let Some(&first) = coords.first() {
            coords.push(first);
        }
    }

    let distinct = coords.len() - 1;
    if distinct < 3 {
        return Err(Error::InvalidParameter {
            name: "ring",
            value: format!("{distinct} distinct vertices"),
            reason: "a ring needs at least three distinct vertices".into(),
        });
    }

    check_ring_is_simple(&coords)?;
    Ok(LineString::from(coords))
}

/// Reject rings whose edges cross or touch away from shared endpoints.
/// O(n^2) over the edges, which is fine at storm-polygon sizes.
fn check_ring_is_simple(coords: &[(f64, f64)]) -> Result<()> {
    let n = coords.len() - 1; // closed: last point repeats the first
    for i in 0..n {
        for j in (i + 1)..n {
            let adjacent = j == i + 1 || (i == 0 && j == n - 1);
            if adjacent {
                continue;
            }
            if segments_intersect(
                coords[i],
                coords[i + 1],
                coords[j],
                coords[j + 1],
            ) {
                return Err(Error::SelfIntersectingRing {
                    first_edge: i,
                    second_edge: j,
                });
            }
        }
    }
    Ok(())
}

fn orientation(a: (f64, f64), b: (f64, f64), c: (f64, f64)) -> f64 {
    (b.0 - a.0) * (c.1 - a.1) - (b.1 - a.1) * (c.0 - a.0)
}

fn on_segment(a: (f64, f64), b: (f64, f64), p: (f64, f64)) -> bool {
    orientation(a, b, p) == 0.0
        && p.0 >= a.0.min(b.0)
        && p.0 <= a.0.max(b.0)
        && p.1 >= a.1.min(b.1)
        && p.1 <= a.1.max(b.1)
}

fn segments_intersect(p1: (f64, f64), p2: (f64, f64), q1: (f64, f64), q2: (f64, f64)) -> bool {
    let d1 = orientation(q1, q2, p1);
    let d2 = orientation(q1, q2, p2);
    let d3 = orientation(p1, p2, q1);
    let d4 = orientation(p1, p2, q2);

    if ((d1 > 0.0 && d2 < 0.0) || (d1 < 0.0 && d2 > 0.0))
        && ((d3 > 0.0 && d4 < 0.0) || (d3 < 0.0 && d4 > 0.0))
    {
        return true;
    }

    (d1 == 0.0 && on_segment(q1, q2, p1))
        || (d2 == 0.0 && on_segment(q1, q2, p2))
        || (d3 == 0.0 && on_segment(p1, p2, q1))
        || (d4 == 0.0 && on_segment(p1, p2, q2))
}
