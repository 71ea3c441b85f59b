//! Affine mapping between grid indices and latitude/longitude

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::longitude;
use crate::rounding::{round_to_half_integer, round_to_nearest};

/// Affine map between (row, column) grid indices and (latitude, longitude).
///
/// The origin is the northwesternmost grid point; row indices increase
/// southward and column indices increase eastward:
/// ```text
/// lat = nw_lat_deg - lat_spacing_deg * row
/// lng = nw_lng_deg + lng_spacing_deg * col
/// ```
/// Longitudes are stored and returned positive-in-west. Converted values
/// are snapped to the nearest half-spacing, so cell-edge coordinates
/// (row or column = index + 0.5) land exactly between grid points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RadarGrid {
    nw_lat_deg: f64,
    nw_lng_deg: f64,
    lat_spacing_deg: f64,
    lng_spacing_deg: f64,
    num_rows: usize,
    num_cols: usize,
}

impl RadarGrid {
    pub fn new(
        nw_lat_deg: f64,
        nw_lng_deg: f64,
        lat_spacing_deg: f64,
        lng_spacing_deg: f64,
        num_rows: usize,
        num_cols: usize,
    ) -> Result<Self> {
        if !nw_lat_deg.is_finite() || !(-90.0..=90.0).contains(&nw_lat_deg) {
            return Err(Error::InvalidLatitude(nw_lat_deg));
        }
        if !nw_lng_deg.is_finite() {
            return Err(Error::InvalidLongitude(nw_lng_deg));
        }
        let nw_lng_deg = longitude::positive_in_west(nw_lng_deg)?;

        if !(lat_spacing_deg > 0.0) {
            return Err(Error::NonPositiveSpacing {
                name: "lat_spacing_deg",
                value: lat_spacing_deg,
            });
        }
        if !(lng_spacing_deg > 0.0) {
            return Err(Error::NonPositiveSpacing {
                name: "lng_spacing_deg",
                value: lng_spacing_deg,
            });
        }
        if num_rows == 0 || num_cols == 0 {
            return Err(Error::InvalidParameter {
                name: "num_rows/num_cols",
                value: format!("{num_rows}x{num_cols}"),
                reason: "grid must have at least one row and one column".into(),
            });
        }

        Ok(Self {
            nw_lat_deg,
            nw_lng_deg,
            lat_spacing_deg,
            lng_spacing_deg,
            num_rows,
            num_cols,
        })
    }

    /// Latitude (deg N) of the northwesternmost grid point
    pub fn nw_lat_deg(&self) -> f64 {
        self.nw_lat_deg
    }

    /// Longitude (deg E, positive-in-west) of the northwesternmost grid point
    pub fn nw_lng_deg(&self) -> f64 {
        self.nw_lng_deg
    }

    /// Spacing (deg) between adjacent rows
    pub fn lat_spacing_deg(&self) -> f64 {
        self.lat_spacing_deg
    }

    /// Spacing (deg) between adjacent columns
    pub fn lng_spacing_deg(&self) -> f64 {
        self.lng_spacing_deg
    }

    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    pub fn num_cols(&self) -> usize {
        self.num_cols
    }

    /// Convert row/column indices to latitudes/longitudes.
    ///
    /// Indices may be fractional: cell-edge coordinates (index + 0.5) are
    /// valid, down to -0.5 at the north/west edge of the grid. NaN indices
    /// map to NaN coordinates.
    pub fn rowcol_to_latlng(&self, rows: &[f64], cols: &[f64]) -> Result<(Vec<f64>, Vec<f64>)> {
        if rows.len() != cols.len() {
            return Err(Error::LengthMismatch {
                left: rows.len(),
                right: cols.len(),
            });
        }
        check_indices("rows", rows)?;
        check_indices("cols", cols)?;

        let lats_deg = rows
            .iter()
            .map(|&row| {
                round_to_nearest(
                    self.nw_lat_deg - self.lat_spacing_deg * row,
                    self.lat_spacing_deg / 2.0,
                )
            })
            .collect();
        let lngs_deg = cols
            .iter()
            .map(|&col| {
                let lng = round_to_nearest(
                    self.nw_lng_deg + self.lng_spacing_deg * col,
                    self.lng_spacing_deg / 2.0,
                );
                // derived from validated parameters; wrap rather than reject
                if lng.is_nan() {
                    lng
                } else {
                    lng.rem_euclid(360.0)
                }
            })
            .collect();

        Ok((lats_deg, lngs_deg))
    }

    /// Convert latitudes/longitudes to row/column indices, rounded to the
    /// nearest half-integer. NaN coordinates map to NaN indices.
    pub fn latlng_to_rowcol(
        &self,
        lats_deg: &[f64],
        lngs_deg: &[f64],
    ) -> Result<(Vec<f64>, Vec<f64>)> {
        if lats_deg.len() != lngs_deg.len() {
            return Err(Error::LengthMismatch {
                left: lats_deg.len(),
                right: lngs_deg.len(),
            });
        }
        for &lat in lats_deg {
            if !lat.is_nan() && !(-90.0..=90.0).contains(&lat) {
                return Err(Error::InvalidLatitude(lat));
            }
        }
        let lngs_deg = longitude::positive_in_west_all(lngs_deg)?;

        let rows = lats_deg
            .iter()
            .map(|&lat| round_to_half_integer((self.nw_lat_deg - lat) / self.lat_spacing_deg))
            .collect();
        let cols = lngs_deg
            .iter()
            .map(|&lng| round_to_half_integer((lng - self.nw_lng_deg) / self.lng_spacing_deg))
            .collect();

        Ok((rows, cols))
    }

    /// (latitude, longitude) of the center of the grid extent
    pub fn center(&self) -> (f64, f64) {
        let min_lat_deg = self.nw_lat_deg - self.lat_spacing_deg * (self.num_rows - 1) as f64;
        let max_lng_deg = self.nw_lng_deg + self.lng_spacing_deg * (self.num_cols - 1) as f64;
        (
            (self.nw_lat_deg + min_lat_deg) / 2.0,
            (self.nw_lng_deg + max_lng_deg) / 2.0,
        )
    }
}

fn check_indices(name: &'static str, indices: &[f64]) -> Result<()> {
    for &index in indices {
        if !index.is_nan() && index < -0.5 {
            return Err(Error::InvalidParameter {
                name,
                value: index.to_string(),
                reason: "grid index must be >= -0.5".into(),
            });
        }
    }
    Ok(())
}
