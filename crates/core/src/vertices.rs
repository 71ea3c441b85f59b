//! Vertex rings and the flat sentinel-separated array form
//!
//! A polygon boundary is one exterior ring plus zero or more hole rings,
//! each a closed sequence of (x, y) vertices. Internally the explicit
//! [`VertexRings`] value is used everywhere; the legacy flat form (one
//! pair of arrays with a single (NaN, NaN) pair between rings) exists
//! only at the edges of the toolkit, for consumers that still expect it.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// One exterior ring plus zero or more hole rings.
///
/// Rings are value data: built once, never mutated in place. Hole order
/// is preserved exactly as given.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VertexRings {
    pub exterior_x: Vec<f64>,
    pub exterior_y: Vec<f64>,
    pub hole_x: Vec<Vec<f64>>,
    pub hole_y: Vec<Vec<f64>>,
}

impl VertexRings {
    pub fn new(
        exterior_x: Vec<f64>,
        exterior_y: Vec<f64>,
        hole_x: Vec<Vec<f64>>,
        hole_y: Vec<Vec<f64>>,
    ) -> Result<Self> {
        if exterior_x.len() != exterior_y.len() {
            return Err(Error::LengthMismatch {
                left: exterior_x.len(),
                right: exterior_y.len(),
            });
        }
        if hole_x.len() != hole_y.len() {
            return Err(Error::LengthMismatch {
                left: hole_x.len(),
                right: hole_y.len(),
            });
        }
        for (xs, ys) in hole_x.iter().zip(hole_y.iter()) {
            if xs.len() != ys.len() {
                return Err(Error::LengthMismatch {
                    left: xs.len(),
                    right: ys.len(),
                });
            }
        }
        Ok(Self {
            exterior_x,
            exterior_y,
            hole_x,
            hole_y,
        })
    }

    /// A single ring with no holes.
    pub fn simple(exterior_x: Vec<f64>, exterior_y: Vec<f64>) -> Result<Self> {
        Self::new(exterior_x, exterior_y, Vec::new(), Vec::new())
    }

    pub fn num_holes(&self) -> usize {
        self.hole_x.len()
    }

    /// Flatten to the legacy form: exterior, then each hole, with exactly
    /// one (NaN, NaN) pair between adjacent rings and none at the ends.
    pub fn to_flat_arrays(&self) -> (Vec<f64>, Vec<f64>) {
        let extra = self
            .hole_x
            .iter()
            .map(|hole| hole.len() + 1)
            .sum::<usize>();
        let mut xs = Vec::with_capacity(self.exterior_x.len() + extra);
        let mut ys = Vec::with_capacity(self.exterior_y.len() + extra);

        xs.extend_from_slice(&self.exterior_x);
        ys.extend_from_slice(&self.exterior_y);
        for (hole_xs, hole_ys) in self.hole_x.iter().zip(self.hole_y.iter()) {
            xs.push(f64::NAN);
            ys.push(f64::NAN);
            xs.extend_from_slice(hole_xs);
            ys.extend_from_slice(hole_ys);
        }
        (xs, ys)
    }

    /// Split the legacy flat form back into rings. The first ring is the
    /// exterior; subsequent rings are holes in the order found.
    ///
    /// A separator must be a (NaN, NaN) pair, may not open or close the
    /// arrays, and two separators may not be adjacent.
    pub fn from_flat_arrays(xs: &[f64], ys: &[f64]) -> Result<Self> {
        if xs.len() != ys.len() {
            return Err(Error::LengthMismatch {
                left: xs.len(),
                right: ys.len(),
            });
        }
        if xs.is_empty() {
            return Err(Error::InvalidParameter {
                name: "vertices",
                value: "[]".into(),
                reason: "at least one ring is required".into(),
            });
        }

        let mut rings: Vec<(Vec<f64>, Vec<f64>)> = Vec::new();
        let mut current: (Vec<f64>, Vec<f64>) = (Vec::new(), Vec::new());
        for (index, (&x, &y)) in xs.iter().zip(ys.iter()).enumerate() {
            if x.is_nan() != y.is_nan() {
                return Err(Error::MisplacedSeparator { index });
            }
            if x.is_nan() {
                if index == 0 || index == xs.len() - 1 || current.0.is_empty() {
                    return Err(Error::MisplacedSeparator { index });
                }
                rings.push(std::mem::take(&mut current));
            } else {
                current.0.push(x);
                current.1.push(y);
            }
        }
        rings.push(current);

        let mut rings = rings.into_iter();
        let (exterior_x, exterior_y) = rings.next().unwrap_or_default();
        let (hole_x, hole_y) = rings.unzip();
        Self::new(exterior_x, exterior_y, hole_x, hole_y)
    }
}

/// Reshape paired coordinate arrays into a list of (x, y) pairs,
/// preserving order and any sentinel values positionally.
pub fn vertex_arrays_to_list(xs: &[f64], ys: &[f64]) -> Result<Vec<(f64, f64)>> {
    if xs.len() != ys.len() {
        return Err(Error::LengthMismatch {
            left: xs.len(),
            right: ys.len(),
        });
    }
    Ok(xs.iter().copied().zip(ys.iter().copied()).collect())
}

/// Inverse of [`vertex_arrays_to_list`].
pub fn vertex_list_to_arrays(vertices: &[(f64, f64)]) -> (Vec<f64>, Vec<f64>) {
    vertices.iter().copied().unzip()
}
