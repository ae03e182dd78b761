use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

use crate::grid::Coordinate;

/// Convenient result alias for the teleroute library.
pub type Result<T> = std::result::Result<T, Error>;

/// Which end of a route a coordinate describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Start,
    End,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            Endpoint::Start => "start",
            Endpoint::End => "end",
        };
        f.write_str(value)
    }
}

/// Axis of a `row,col` coordinate, used in parse errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Row,
    Col,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            Axis::Row => "row",
            Axis::Col => "column",
        };
        f.write_str(value)
    }
}

/// Top-level library error type.
///
/// Every variant describes rejected input. The path engine itself never
/// fails; an unreachable end cell is reported through
/// [`RouteOutcome::NoRouteFound`](crate::route::RouteOutcome::NoRouteFound).
#[derive(Debug, Error)]
pub enum Error {
    /// Grid file could not be located at the given path.
    #[error("grid file not found at {path}")]
    GridNotFound { path: PathBuf },

    /// Raised when a grid has no cells at all.
    #[error("grid must contain at least one row")]
    EmptyGrid,

    /// Raised when `size * size` overflows `usize`.
    #[error("grid size {size} is too large")]
    GridTooLarge { size: usize },

    /// Raised when the number of cells does not describe a square grid.
    #[error("grid of size {size} needs {expected} cells, got {found}")]
    CellCountMismatch {
        size: usize,
        expected: usize,
        found: usize,
    },

    /// Raised when the file has a different number of rows than expected.
    #[error("grid has {found} rows, expected {expected}")]
    RowCountMismatch { expected: usize, found: usize },

    /// Raised when a row has the wrong number of comma separated values.
    #[error("row {row} has {found} values, expected {expected}")]
    RowLengthMismatch {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// Raised when a cell is not an integer.
    #[error("row {row} column {col} is not a number: '{value}'")]
    InvalidCellNumber {
        row: usize,
        col: usize,
        value: String,
    },

    /// Raised when a cell is an integer outside of {0, 1, 2}.
    #[error("row {row} column {col} has value {value}; cells must be 0, 1 or 2")]
    CellValueOutOfRange { row: usize, col: usize, value: i64 },

    /// Raised when the grid does not hold exactly two teleport cells.
    #[error("grid must contain exactly 2 teleports, found {found}")]
    TeleportCount { found: usize },

    /// Raised when the blocked-cell count disagrees with the caller's expectation.
    #[error("grid has {found} blocked cells, expected {expected}")]
    BlockedCount { expected: usize, found: usize },

    /// Raised when coordinate text is not of the form `row,col`.
    #[error("coordinates must use the format 'row,col', got '{text}'")]
    MalformedCoordinate { text: String },

    /// Raised when one half of a coordinate is not an integer.
    #[error("{axis} is not a number: '{value}'")]
    CoordinateNotNumber { axis: Axis, value: String },

    /// Raised when a start or end coordinate falls outside the grid.
    #[error("{role} point ({row}, {col}) is outside the {size}x{size} grid")]
    CoordinateOutOfRange {
        role: Endpoint,
        row: i64,
        col: i64,
        size: usize,
    },

    /// Raised when a start or end coordinate lands on a blocked cell.
    #[error("{role} point {coordinate} cannot be blocked")]
    EndpointBlocked {
        role: Endpoint,
        coordinate: Coordinate,
    },

    /// Raised when a start or end coordinate lands on a teleport cell.
    #[error("{role} point {coordinate} cannot be a teleport")]
    EndpointOnTeleport {
        role: Endpoint,
        coordinate: Coordinate,
    },

    /// Grid text could not be read as comma separated records.
    #[error("failed to read grid records: {0}")]
    Csv(#[from] csv::Error),

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_errors_name_the_role() {
        let error = Error::EndpointBlocked {
            role: Endpoint::Start,
            coordinate: Coordinate::new(2, 3),
        };
        assert_eq!(error.to_string(), "start point (2, 3) cannot be blocked");

        let error = Error::CoordinateOutOfRange {
            role: Endpoint::End,
            row: -1,
            col: 0,
            size: 4,
        };
        assert_eq!(
            error.to_string(),
            "end point (-1, 0) is outside the 4x4 grid"
        );
    }

    #[test]
    fn parse_errors_name_the_axis() {
        let error = Error::CoordinateNotNumber {
            axis: Axis::Col,
            value: "x".to_string(),
        };
        assert_eq!(error.to_string(), "column is not a number: 'x'");
    }
}
