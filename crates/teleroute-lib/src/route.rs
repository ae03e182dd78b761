use serde::Serialize;

use crate::grid::{Coordinate, TeleportPair};
use crate::path::SearchResult;

/// How a route moves from one cell to the next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LegKind {
    /// One orthogonal step, costs one step.
    Walk,
    /// Instant jump between the teleport pair, costs nothing.
    Teleport,
}

/// A single move between consecutive route cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Leg {
    pub from: Coordinate,
    pub to: Coordinate,
    pub kind: LegKind,
}

/// Reconstructed route from start to end, both inclusive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Route {
    pub cells: Vec<Coordinate>,
    pub steps: usize,
    pub teleport_hops: usize,
    #[serde(skip)]
    teleports: TeleportPair,
}

impl Route {
    /// Consecutive moves along the route.
    pub fn legs(&self) -> impl Iterator<Item = Leg> + '_ {
        self.cells.windows(2).map(|pair| Leg {
            from: pair[0],
            to: pair[1],
            kind: leg_kind(&self.teleports, pair[0], pair[1]),
        })
    }
}

/// Result of reconstructing a search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteOutcome {
    Found(Route),
    NoRouteFound,
}

impl RouteOutcome {
    pub fn route(&self) -> Option<&Route> {
        match self {
            RouteOutcome::Found(route) => Some(route),
            RouteOutcome::NoRouteFound => None,
        }
    }

    pub fn into_route(self) -> Option<Route> {
        match self {
            RouteOutcome::Found(route) => Some(route),
            RouteOutcome::NoRouteFound => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, RouteOutcome::Found(_))
    }
}

/// Walk back-references from the end cell to the start cell.
///
/// Every move costs one step except a hop between the teleport pair, so the
/// count equals the number of orthogonal moves taken.
pub fn reconstruct_route(result: &SearchResult) -> RouteOutcome {
    if !result.reached() {
        return RouteOutcome::NoRouteFound;
    }

    let start = result.start();
    let mut cells = Vec::new();
    let mut current = Some(result.end());
    while let Some(cell) = current {
        cells.push(cell);
        if cell == start {
            break;
        }
        current = result.parent(cell);
    }
    cells.reverse();

    let teleports = result.teleports();
    let teleport_hops = cells
        .windows(2)
        .filter(|pair| leg_kind(&teleports, pair[0], pair[1]) == LegKind::Teleport)
        .count();
    let steps = cells.len().saturating_sub(1) - teleport_hops;

    RouteOutcome::Found(Route {
        cells,
        steps,
        teleport_hops,
        teleports,
    })
}

fn leg_kind(teleports: &TeleportPair, from: Coordinate, to: Coordinate) -> LegKind {
    if teleports.links(from, to) {
        LegKind::Teleport
    } else {
        LegKind::Walk
    }
}
