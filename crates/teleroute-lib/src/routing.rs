use tracing::info;

use crate::error::{Endpoint, Result};
use crate::grid::{Coordinate, Grid};
use crate::input::validate_endpoint;
use crate::path::find_path;
use crate::route::{reconstruct_route, RouteOutcome};

/// High-level route planning request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteRequest {
    pub start: Coordinate,
    pub end: Coordinate,
}

impl RouteRequest {
    pub fn new(start: Coordinate, end: Coordinate) -> Self {
        Self { start, end }
    }
}

/// Planned route returned by the library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePlan {
    pub start: Coordinate,
    pub end: Coordinate,
    pub outcome: RouteOutcome,
    /// Cells taken off the frontier during the search.
    pub explored: usize,
}

impl RoutePlan {
    /// Steps of the route, `None` when no route exists.
    pub fn steps(&self) -> Option<usize> {
        self.outcome.route().map(|route| route.steps)
    }
}

/// Validate the request against `grid`, then search and reconstruct.
///
/// Endpoints outside the grid or on blocked/teleport cells are rejected.
/// An unreachable end is not an error; it comes back as
/// [`RouteOutcome::NoRouteFound`].
pub fn plan_route(grid: &Grid, request: &RouteRequest) -> Result<RoutePlan> {
    let start = validate_endpoint(grid, Endpoint::Start, request.start)?;
    let end = validate_endpoint(grid, Endpoint::End, request.end)?;

    let search = find_path(grid, start, end);
    let outcome = reconstruct_route(&search);

    match outcome.route() {
        Some(route) => info!(
            %start,
            %end,
            steps = route.steps,
            teleport_hops = route.teleport_hops,
            "route found"
        ),
        None => info!(%start, %end, "no route found"),
    }

    Ok(RoutePlan {
        start,
        end,
        outcome,
        explored: search.expanded(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::test_helpers::sample_grid;

    #[test]
    fn invalid_endpoints_are_rejected_before_searching() {
        let grid = sample_grid();
        let request = RouteRequest::new(Coordinate::new(0, 2), Coordinate::new(5, 5));
        let error = plan_route(&grid, &request).expect_err("blocked start");
        assert!(matches!(
            error,
            Error::EndpointBlocked {
                role: Endpoint::Start,
                ..
            }
        ));

        let request = RouteRequest::new(Coordinate::new(0, 0), Coordinate::new(2, 4));
        let error = plan_route(&grid, &request).expect_err("teleport end");
        assert!(matches!(
            error,
            Error::EndpointOnTeleport {
                role: Endpoint::End,
                ..
            }
        ));
    }

    #[test]
    fn plan_reports_steps_and_exploration() {
        let grid = sample_grid();
        let request = RouteRequest::new(Coordinate::new(0, 0), Coordinate::new(0, 1));
        let plan = plan_route(&grid, &request).expect("valid request");

        assert_eq!(plan.steps(), Some(1));
        assert!(plan.explored >= 2);
    }
}
