use std::collections::VecDeque;

use tracing::debug;

use crate::discovery::DiscoveryState;
use crate::grid::{Coordinate, Grid, TeleportPair};

/// Outcome of a single breadth-first search.
///
/// Holds the back-reference recorded for every discovered cell. The start cell
/// has none; undiscovered cells have none either, so [`SearchResult::reached`]
/// is the authority on whether `end` was found.
#[derive(Debug, Clone)]
pub struct SearchResult {
    start: Coordinate,
    end: Coordinate,
    size: usize,
    teleports: TeleportPair,
    parents: Vec<Option<Coordinate>>,
    reached: bool,
    expanded: usize,
}

impl SearchResult {
    pub fn start(&self) -> Coordinate {
        self.start
    }

    pub fn end(&self) -> Coordinate {
        self.end
    }

    /// Teleport pair of the searched grid.
    pub fn teleports(&self) -> TeleportPair {
        self.teleports
    }

    /// `true` when `end` was dequeued before the frontier ran dry.
    pub fn reached(&self) -> bool {
        self.reached
    }

    /// Number of cells taken off the frontier, `end` included.
    pub fn expanded(&self) -> usize {
        self.expanded
    }

    /// Cell from which `coord` was first discovered.
    pub fn parent(&self, coord: Coordinate) -> Option<Coordinate> {
        if coord.row >= self.size || coord.col >= self.size {
            return None;
        }
        self.parents[coord.row * self.size + coord.col]
    }
}

/// Find a route between `start` and `end` using breadth-first search.
///
/// Neighbours are expanded right, down, left, up. When the current cell is a
/// teleport its partner is enqueued ahead of those neighbours, so the hop wins
/// ties at the same depth. Coordinates outside the grid produce an unreached
/// result.
pub fn find_path(grid: &Grid, start: Coordinate, end: Coordinate) -> SearchResult {
    let mut result = SearchResult {
        start,
        end,
        size: grid.size(),
        teleports: grid.teleports(),
        parents: vec![None; grid.cell_count()],
        reached: false,
        expanded: 0,
    };
    if !grid.contains(start) || !grid.contains(end) {
        debug!(%start, %end, "endpoint outside grid; skipping search");
        return result;
    }

    let mut discovery = DiscoveryState::seeded(grid);
    let mut frontier = VecDeque::new();

    discovery.force(start);
    frontier.push_back(start);

    while let Some(current) = frontier.pop_front() {
        result.expanded += 1;
        if current == end {
            result.reached = true;
            break;
        }

        if let Some(partner) = grid.teleport_partner(current) {
            if discovery.discover(partner) {
                result.record(partner, current);
                frontier.push_back(partner);
            }
        }

        for next in grid.orthogonal_neighbours(current) {
            if discovery.discover(next) {
                result.record(next, current);
                frontier.push_back(next);
            }
        }
    }

    debug!(
        %start,
        %end,
        expanded = result.expanded,
        reached = result.reached,
        "breadth-first search finished"
    );
    result
}

impl SearchResult {
    fn record(&mut self, coord: Coordinate, parent: Coordinate) {
        self.parents[coord.row * self.size + coord.col] = Some(parent);
    }
}
