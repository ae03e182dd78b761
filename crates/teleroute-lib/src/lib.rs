//! teleroute library entry points.
//!
//! This crate models a square grid with one teleport pair, finds the shortest
//! route between two free cells with breadth-first search, and reconstructs
//! the route with a step count that treats the teleport hop as free. The CLI
//! should only depend on the functions exported here instead of
//! reimplementing behavior.
//!

pub mod discovery;
pub mod error;
pub mod grid;
pub mod input;
pub mod output;
pub mod path;
pub mod route;
pub mod routing;

#[cfg(test)]
pub(crate) mod test_helpers;

pub use discovery::DiscoveryState;
pub use error::{Axis, Endpoint, Error, Result};
pub use grid::{CellKind, Coordinate, Grid, TeleportPair};
pub use input::{
    load_grid, parse_coordinate, parse_endpoint, parse_grid, read_grid, validate_endpoint,
};
pub use output::{GridSummary, RouteCell, RouteRenderMode, RouteSummary, StepMethod};
pub use path::{find_path, SearchResult};
pub use route::{reconstruct_route, Leg, LegKind, Route, RouteOutcome};
pub use routing::{plan_route, RoutePlan, RouteRequest};
