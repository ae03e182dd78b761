use std::fmt;

use serde::Serialize;

use crate::error::{Error, Result};

/// Classification of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CellKind {
    Blocked,
    Free,
    Teleport,
}

impl CellKind {
    /// Classify a raw cell value (`0` blocked, `1` free, `2` teleport).
    pub fn from_value(value: i64) -> Option<Self> {
        match value {
            0 => Some(CellKind::Blocked),
            1 => Some(CellKind::Free),
            2 => Some(CellKind::Teleport),
            _ => None,
        }
    }

    /// Raw value used in grid files.
    pub fn value(self) -> u8 {
        match self {
            CellKind::Blocked => 0,
            CellKind::Free => 1,
            CellKind::Teleport => 2,
        }
    }
}

/// Row/column position within a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Coordinate {
    pub row: usize,
    pub col: usize,
}

impl Coordinate {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Manhattan distance to another coordinate.
    pub fn manhattan(&self, other: &Self) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    /// `true` when `other` is one orthogonal step away.
    pub fn is_adjacent(&self, other: &Self) -> bool {
        self.manhattan(other) == 1
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// The two linked teleport cells of a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TeleportPair {
    pub first: Coordinate,
    pub second: Coordinate,
}

impl TeleportPair {
    /// Return the linked cell when `coord` is one end of the pair.
    pub fn partner(&self, coord: Coordinate) -> Option<Coordinate> {
        if coord == self.first {
            Some(self.second)
        } else if coord == self.second {
            Some(self.first)
        } else {
            None
        }
    }

    /// `true` when `coord` is either end of the pair.
    pub fn contains(&self, coord: Coordinate) -> bool {
        coord == self.first || coord == self.second
    }

    /// `true` when `a` and `b` are the two ends of the pair, in either order.
    pub fn links(&self, a: Coordinate, b: Coordinate) -> bool {
        self.partner(a) == Some(b)
    }
}

/// Immutable square grid with exactly one teleport pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<CellKind>,
    teleports: TeleportPair,
}

impl Grid {
    /// Build a grid from `size * size` cells in row-major order.
    ///
    /// Fails when the grid is empty, the cell count is not square, or the grid
    /// does not hold exactly two teleport cells.
    pub fn from_cells(size: usize, cells: Vec<CellKind>) -> Result<Self> {
        if size == 0 {
            return Err(Error::EmptyGrid);
        }
        let expected = size.checked_mul(size).ok_or(Error::GridTooLarge { size })?;
        if cells.len() != expected {
            return Err(Error::CellCountMismatch {
                size,
                expected,
                found: cells.len(),
            });
        }

        let teleports: Vec<Coordinate> = cells
            .iter()
            .enumerate()
            .filter(|(_, kind)| **kind == CellKind::Teleport)
            .map(|(index, _)| Coordinate::new(index / size, index % size))
            .collect();
        let &[first, second] = teleports.as_slice() else {
            return Err(Error::TeleportCount {
                found: teleports.len(),
            });
        };

        Ok(Self {
            size,
            cells,
            teleports: TeleportPair { first, second },
        })
    }

    /// Build a grid from nested rows; every row must be as long as the row count.
    pub fn from_rows(rows: Vec<Vec<CellKind>>) -> Result<Self> {
        let size = rows.len();
        if let Some((index, row)) = rows.iter().enumerate().find(|(_, row)| row.len() != size) {
            return Err(Error::RowLengthMismatch {
                row: index + 1,
                expected: size,
                found: row.len(),
            });
        }
        Self::from_cells(size, rows.into_iter().flatten().collect())
    }

    /// Side length `N` of the grid.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Total number of cells (`N * N`).
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// The linked teleport cells.
    pub fn teleports(&self) -> TeleportPair {
        self.teleports
    }

    /// Linked cell for a teleport coordinate, `None` for every other cell.
    pub fn teleport_partner(&self, coord: Coordinate) -> Option<Coordinate> {
        self.teleports.partner(coord)
    }

    pub fn contains(&self, coord: Coordinate) -> bool {
        coord.row < self.size && coord.col < self.size
    }

    /// Kind of the cell at `coord`, or `None` outside the grid.
    pub fn cell(&self, coord: Coordinate) -> Option<CellKind> {
        self.index(coord).map(|index| self.cells[index])
    }

    /// Number of cells of the given kind.
    pub fn count(&self, kind: CellKind) -> usize {
        self.cells.iter().filter(|cell| **cell == kind).count()
    }

    /// Iterate over rows of cells, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[CellKind]> + '_ {
        self.cells.chunks(self.size)
    }

    /// In-bounds orthogonal neighbours in the fixed order right, down, left, up.
    ///
    /// Cell kind is not consulted; blocked neighbours are filtered by the
    /// discovery state during a search.
    pub fn orthogonal_neighbours(&self, coord: Coordinate) -> impl Iterator<Item = Coordinate> {
        let size = self.size;
        let Coordinate { row, col } = coord;
        let right = (col + 1 < size).then(|| Coordinate::new(row, col + 1));
        let down = (row + 1 < size).then(|| Coordinate::new(row + 1, col));
        let left = col.checked_sub(1).map(|col| Coordinate::new(row, col));
        let up = row.checked_sub(1).map(|row| Coordinate::new(row, col));
        [right, down, left, up].into_iter().flatten()
    }

    /// Row-major index of `coord`, or `None` outside the grid.
    pub(crate) fn index(&self, coord: Coordinate) -> Option<usize> {
        self.contains(coord).then(|| coord.row * self.size + coord.col)
    }

    pub(crate) fn cells(&self) -> &[CellKind] {
        &self.cells
    }
}

impl fmt::Display for Grid {
    /// Render the raw cell values, comma separated, one row per line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            let line = row
                .iter()
                .map(|cell| cell.value().to_string())
                .collect::<Vec<_>>()
                .join(", ");
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
