//! Error types for stormgrid

use thiserror::Error;

/// Main error type for stormgrid operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid latitude: {0} deg N (must be in [-90, 90])")]
    InvalidLatitude(f64),

    #[error("Invalid longitude: {0} deg E (must be in [-180, 360])")]
    InvalidLongitude(f64),

    #[error("Spacing must be positive: {name} = {value}")]
    NonPositiveSpacing { name: &'static str, value: f64 },

    #[error("Paired arrays differ in length: {left} vs {right}")]
    LengthMismatch { left: usize, right: usize },

    #[error("Grid-point set is empty")]
    EmptyPointSet,

    #[error("Invalid parameter: {name} = {value} ({reason})")]
    InvalidParameter {
        name: &'static str,
        value: String,
        reason: String,
    },

    #[error(
        "Boundary chain is not closed: starts at ({first_row}, {first_col}), \
         ends at ({last_row}, {last_col})"
    )]
    OpenRing {
        first_row: i64,
        first_col: i64,
        last_row: i64,
        last_col: i64,
    },

    #[error(
        "Chain step from ({from_row}, {from_col}) to ({to_row}, {to_col}) \
         does not follow the grid lattice"
    )]
    NonLatticeStep {
        from_row: i64,
        from_col: i64,
        to_row: i64,
        to_col: i64,
    },

    #[error("Ring edges {first_edge} and {second_edge} intersect")]
    SelfIntersectingRing {
        first_edge: usize,
        second_edge: usize,
    },

    #[error("Ring has no interior (zero area)")]
    DegenerateRing,

    #[error("Coordinate at index {index} is not finite")]
    NonFiniteCoordinate { index: usize },

    #[error("Ring separator at index {index} is misplaced")]
    MisplacedSeparator { index: usize },
}

/// Result type alias for stormgrid operations
pub type Result<T> = std::result::Result<T, Error>;
