// Test-only helpers for `teleroute-lib` tests
#![allow(dead_code)]

use crate::grid::{CellKind, Grid};

/// Rows of the six by six grid used throughout the docs.
pub const SAMPLE_ROWS: [&str; 6] = [
    "1,1,0,1,1,1",
    "1,2,0,0,1,1",
    "1,1,1,1,2,1",
    "1,1,1,1,1,1",
    "1,0,0,1,1,1",
    "1,1,1,1,1,1",
];

/// Build a grid from comma separated rows, panicking on malformed input.
pub fn grid_from_rows(rows: &[&str]) -> Grid {
    let rows = rows
        .iter()
        .map(|row| {
            row.split(',')
                .map(|value| {
                    let value: i64 = value.trim().parse().expect("numeric cell");
                    CellKind::from_value(value).expect("cell value in 0..=2")
                })
                .collect()
        })
        .collect();
    Grid::from_rows(rows).expect("valid test grid")
}

pub fn sample_grid() -> Grid {
    grid_from_rows(&SAMPLE_ROWS)
}

