//! Input adapter: turns grid files and `row,col` text into validated values.
//!
//! Everything here runs before a search. Any failure is reported as an
//! [`Error`] and the path engine never sees invalid input.

use std::fs;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::{debug, info};

use crate::error::{Axis, Endpoint, Error, Result};
use crate::grid::{CellKind, Coordinate, Grid};

/// Parse a comma separated grid held in memory. See [`read_grid`].
pub fn parse_grid(
    text: &str,
    size: Option<usize>,
    expected_blocked: Option<usize>,
) -> Result<Grid> {
    read_grid(text.as_bytes(), size, expected_blocked)
}

/// Read a comma separated grid, one record per row.
///
/// Whitespace around values and trailing blank lines are ignored. When
/// `size` is `None` the dimension is taken from the number of rows. When
/// `expected_blocked` is set the number of blocked cells must match it.
pub fn read_grid<R: Read>(
    reader: R,
    size: Option<usize>,
    expected_blocked: Option<usize>,
) -> Result<Grid> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let mut records = csv_reader
        .records()
        .collect::<std::result::Result<Vec<StringRecord>, csv::Error>>()?;
    while records.last().is_some_and(is_blank) {
        records.pop();
    }

    let size = size.unwrap_or(records.len());
    if size == 0 {
        return Err(Error::EmptyGrid);
    }
    if records.len() != size {
        return Err(Error::RowCountMismatch {
            expected: size,
            found: records.len(),
        });
    }

    let mut cells = Vec::with_capacity(records.len() * size);
    for (row, record) in records.iter().enumerate() {
        if record.len() != size {
            return Err(Error::RowLengthMismatch {
                row: row + 1,
                expected: size,
                found: record.len(),
            });
        }
        for (col, raw) in record.iter().enumerate() {
            cells.push(parse_cell(raw, row + 1, col + 1)?);
        }
    }

    let grid = Grid::from_cells(size, cells)?;

    if let Some(expected) = expected_blocked {
        let found = grid.count(CellKind::Blocked);
        if found != expected {
            return Err(Error::BlockedCount { expected, found });
        }
    }

    Ok(grid)
}

/// Read and parse a grid file. See [`read_grid`].
pub fn load_grid(
    path: &Path,
    size: Option<usize>,
    expected_blocked: Option<usize>,
) -> Result<Grid> {
    if !path.exists() {
        return Err(Error::GridNotFound {
            path: path.to_path_buf(),
        });
    }
    debug!(path = %path.display(), "reading grid file");
    let file = fs::File::open(path)?;
    let grid = read_grid(file, size, expected_blocked)?;
    info!(
        path = %path.display(),
        size = grid.size(),
        blocked = grid.count(CellKind::Blocked),
        "loaded grid"
    );
    Ok(grid)
}

/// Parse `row,col` text into a signed pair. Range checks happen later.
pub fn parse_coordinate(text: &str) -> Result<(i64, i64)> {
    let parts: Vec<&str> = text.trim().split(',').collect();
    let [row, col] = parts.as_slice() else {
        return Err(Error::MalformedCoordinate {
            text: text.trim().to_string(),
        });
    };
    Ok((parse_axis(row, Axis::Row)?, parse_axis(col, Axis::Col)?))
}

/// Parse and validate a start or end point for `grid`.
pub fn parse_endpoint(grid: &Grid, role: Endpoint, text: &str) -> Result<Coordinate> {
    let (row, col) = parse_coordinate(text)?;
    let out_of_range = || Error::CoordinateOutOfRange {
        role,
        row,
        col,
        size: grid.size(),
    };
    let row = usize::try_from(row).map_err(|_| out_of_range())?;
    let col = usize::try_from(col).map_err(|_| out_of_range())?;
    validate_endpoint(grid, role, Coordinate::new(row, col))
}

/// Check that `coord` is inside `grid` and sits on a free cell.
pub fn validate_endpoint(grid: &Grid, role: Endpoint, coord: Coordinate) -> Result<Coordinate> {
    match grid.cell(coord) {
        None => Err(Error::CoordinateOutOfRange {
            role,
            row: i64::try_from(coord.row).unwrap_or(i64::MAX),
            col: i64::try_from(coord.col).unwrap_or(i64::MAX),
            size: grid.size(),
        }),
        Some(CellKind::Blocked) => Err(Error::EndpointBlocked {
            role,
            coordinate: coord,
        }),
        Some(CellKind::Teleport) => Err(Error::EndpointOnTeleport {
            role,
            coordinate: coord,
        }),
        Some(CellKind::Free) => Ok(coord),
    }
}

fn is_blank(record: &StringRecord) -> bool {
    record.iter().all(str::is_empty)
}

fn parse_cell(raw: &str, row: usize, col: usize) -> Result<CellKind> {
    let value: i64 = raw.parse().map_err(|_| Error::InvalidCellNumber {
        row,
        col,
        value: raw.to_string(),
    })?;
    CellKind::from_value(value).ok_or(Error::CellValueOutOfRange { row, col, value })
}

fn parse_axis(raw: &str, axis: Axis) -> Result<i64> {
    let trimmed = raw.trim();
    trimmed.parse().map_err(|_| Error::CoordinateNotNumber {
        axis,
        value: trimmed.to_string(),
    })
}
