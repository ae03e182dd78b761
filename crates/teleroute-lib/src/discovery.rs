use crate::grid::{CellKind, Coordinate, Grid};

/// Per-cell discovered markers for a single search.
///
/// Blocked cells start out discovered so the engine never enqueues them.
#[derive(Debug, Clone)]
pub struct DiscoveryState {
    size: usize,
    discovered: Vec<bool>,
}

impl DiscoveryState {
    /// Seed the markers from a grid: blocked cells discovered, everything else not.
    pub fn seeded(grid: &Grid) -> Self {
        Self {
            size: grid.size(),
            discovered: grid
                .cells()
                .iter()
                .map(|cell| *cell == CellKind::Blocked)
                .collect(),
        }
    }

    pub fn is_discovered(&self, coord: Coordinate) -> bool {
        self.index(coord)
            .map(|index| self.discovered[index])
            .unwrap_or(true)
    }

    /// Mark `coord` discovered. Returns `true` only on the
    /// undiscovered -> discovered transition.
    pub fn discover(&mut self, coord: Coordinate) -> bool {
        let Some(index) = self.index(coord) else {
            return false;
        };
        let marker = &mut self.discovered[index];
        if *marker {
            return false;
        }
        *marker = true;
        true
    }

    /// Mark `coord` discovered regardless of its previous state.
    pub fn force(&mut self, coord: Coordinate) {
        if let Some(index) = self.index(coord) {
            self.discovered[index] = true;
        }
    }

    fn index(&self, coord: Coordinate) -> Option<usize> {
        (coord.row < self.size && coord.col < self.size).then(|| coord.row * self.size + coord.col)
    }
}
