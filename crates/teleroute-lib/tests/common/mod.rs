//! Common test utilities and fixture helpers.

use std::path::PathBuf;

use teleroute_lib::{load_grid, CellKind, Coordinate, Grid};

/// Path to fixtures directory used by tests.
#[allow(dead_code)]
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures")
}

/// Load the six by six sample grid shipped with the docs.
#[allow(dead_code)]
pub fn sample_grid() -> Grid {
    load_grid(&fixtures_dir().join("sample_6x6.csv"), Some(6), Some(5))
        .expect("sample fixture loads")
}

/// Open grid with teleports placed at `first` and `second`.
#[allow(dead_code)]
pub fn open_grid_with_teleports(size: usize, first: Coordinate, second: Coordinate) -> Grid {
    let mut cells = vec![CellKind::Free; size * size];
    cells[first.row * size + first.col] = CellKind::Teleport;
    cells[second.row * size + second.col] = CellKind::Teleport;
    Grid::from_cells(size, cells).expect("valid open grid")
}

/// Every free cell of `grid`, row-major.
#[allow(dead_code)]
pub fn free_cells(grid: &Grid) -> Vec<Coordinate> {
    let size = grid.size();
    (0..size)
        .flat_map(|row| (0..size).map(move |col| Coordinate::new(row, col)))
        .filter(|coord| grid.cell(*coord) == Some(CellKind::Free))
        .collect()
}
