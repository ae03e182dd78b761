use std::fmt::Write;

use serde::Serialize;

use crate::grid::{CellKind, Coordinate, Grid, TeleportPair};
use crate::route::LegKind;
use crate::routing::RoutePlan;

/// Presentation style for turning a [`RouteSummary`] into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteRenderMode {
    /// Arrow chain followed by the step count.
    PlainText,
    /// One numbered line per cell with the move that reached it.
    Listing,
}

/// How a route cell was entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StepMethod {
    Start,
    Walk,
    Teleport,
}

impl StepMethod {
    pub fn label(self) -> &'static str {
        match self {
            StepMethod::Start => "start",
            StepMethod::Walk => "walk",
            StepMethod::Teleport => "teleport",
        }
    }
}

impl From<LegKind> for StepMethod {
    fn from(kind: LegKind) -> Self {
        match kind {
            LegKind::Walk => StepMethod::Walk,
            LegKind::Teleport => StepMethod::Teleport,
        }
    }
}

/// Cell visited along a planned route.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RouteCell {
    pub index: usize,
    pub row: usize,
    pub col: usize,
    pub method: StepMethod,
}

impl RouteCell {
    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.row, self.col)
    }
}

/// Structured representation of a planned route that higher-level consumers can serialise.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RouteSummary {
    pub start: Coordinate,
    pub end: Coordinate,
    pub found: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub steps: Option<usize>,
    pub teleport_hops: usize,
    pub explored: usize,
    pub cells: Vec<RouteCell>,
}

impl RouteSummary {
    /// Convert a [`RoutePlan`] into a flat summary.
    pub fn from_plan(plan: &RoutePlan) -> Self {
        let Some(route) = plan.outcome.route() else {
            return Self {
                start: plan.start,
                end: plan.end,
                found: false,
                steps: None,
                teleport_hops: 0,
                explored: plan.explored,
                cells: Vec::new(),
            };
        };

        let methods = std::iter::once(StepMethod::Start)
            .chain(route.legs().map(|leg| StepMethod::from(leg.kind)));
        let cells = route
            .cells
            .iter()
            .zip(methods)
            .enumerate()
            .map(|(index, (cell, method))| RouteCell {
                index,
                row: cell.row,
                col: cell.col,
                method,
            })
            .collect();

        Self {
            start: plan.start,
            end: plan.end,
            found: true,
            steps: Some(route.steps),
            teleport_hops: route.teleport_hops,
            explored: plan.explored,
            cells,
        }
    }

    /// Render the summary using the requested textual mode.
    pub fn render(&self, mode: RouteRenderMode) -> String {
        if !self.found {
            return format!("No route found between {} and {}\n", self.start, self.end);
        }
        match mode {
            RouteRenderMode::PlainText => self.render_plain(),
            RouteRenderMode::Listing => self.render_listing(),
        }
    }

    fn render_plain(&self) -> String {
        let mut buffer = String::new();
        for cell in &self.cells {
            let _ = write!(buffer, "-> {} ", cell.coordinate());
        }
        let _ = writeln!(buffer);
        let _ = writeln!(buffer, "Steps required = {}", self.steps.unwrap_or(0));
        buffer
    }

    fn render_listing(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(
            buffer,
            "Route from {} to {} ({} steps, {} teleport hops):",
            self.start,
            self.end,
            self.steps.unwrap_or(0),
            self.teleport_hops
        );
        for cell in &self.cells {
            let _ = writeln!(
                buffer,
                "{:>3}: {} via {}",
                cell.index,
                cell.coordinate(),
                cell.method.label()
            );
        }
        buffer
    }
}

/// Overview of a loaded grid.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct GridSummary {
    pub size: usize,
    pub blocked: usize,
    pub free: usize,
    pub teleports: TeleportPair,
    pub rows: Vec<Vec<u8>>,
}

impl GridSummary {
    pub fn from_grid(grid: &Grid) -> Self {
        Self {
            size: grid.size(),
            blocked: grid.count(CellKind::Blocked),
            free: grid.count(CellKind::Free),
            teleports: grid.teleports(),
            rows: grid
                .rows()
                .map(|row| row.iter().map(|cell| cell.value()).collect())
                .collect(),
        }
    }
}
