//! Output formatting for routes and grids.
//!
//! Every renderer returns a `String`; the command handlers decide where it
//! is printed.

use std::collections::HashSet;
use std::fmt::Write;

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::Serialize;

use teleroute_lib::{CellKind, Coordinate, Grid, GridSummary, RouteRenderMode, RouteSummary};

use crate::terminal::{ColorPalette, MapGlyph};

/// Output format selected with `--format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Arrow chain and step count.
    Text,
    /// One numbered line per cell.
    Listing,
    /// The grid with the route drawn on it.
    Map,
    /// Machine readable JSON.
    Json,
}

/// Render a route summary in the requested format.
pub fn render_route(
    summary: &RouteSummary,
    grid: &Grid,
    format: OutputFormat,
    palette: &ColorPalette,
) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(summary.render(RouteRenderMode::PlainText)),
        OutputFormat::Listing => Ok(summary.render(RouteRenderMode::Listing)),
        OutputFormat::Map => {
            let mut buffer = render_map(grid, Some(summary), palette);
            buffer.push('\n');
            buffer.push_str(&summary.render(RouteRenderMode::PlainText));
            Ok(buffer)
        }
        OutputFormat::Json => to_json(summary),
    }
}

/// Render a grid overview in the requested format.
pub fn render_grid(grid: &Grid, format: OutputFormat, palette: &ColorPalette) -> Result<String> {
    let summary = GridSummary::from_grid(grid);
    match format {
        OutputFormat::Json => to_json(&summary),
        OutputFormat::Map => Ok(render_map(grid, None, palette)),
        OutputFormat::Text | OutputFormat::Listing => {
            let mut buffer = String::new();
            let _ = writeln!(buffer, "Grid size: {0}x{0}", summary.size);
            let _ = writeln!(buffer, "Blocked cells: {}", summary.blocked);
            let _ = writeln!(buffer, "Free cells: {}", summary.free);
            let _ = writeln!(
                buffer,
                "Teleports: {} <-> {}",
                summary.teleports.first, summary.teleports.second
            );
            let _ = write!(buffer, "{grid}");
            Ok(buffer)
        }
    }
}

/// Draw the grid one character per cell.
///
/// `#` wall, `.` free, `T` teleport, `S` start, `E` end, `*` route.
pub fn render_map(grid: &Grid, summary: Option<&RouteSummary>, palette: &ColorPalette) -> String {
    let on_route: HashSet<Coordinate> = summary
        .map(|summary| summary.cells.iter().map(|cell| cell.coordinate()).collect())
        .unwrap_or_default();
    let endpoints = summary.map(|summary| (summary.start, summary.end));

    let mut buffer = String::new();
    for (row, cells) in grid.rows().enumerate() {
        for (col, kind) in cells.iter().enumerate() {
            let coord = Coordinate::new(row, col);
            let glyph = match (endpoints, *kind) {
                (Some((start, _)), _) if coord == start => MapGlyph::Start,
                (Some((_, end)), _) if coord == end => MapGlyph::End,
                (_, CellKind::Teleport) if on_route.contains(&coord) => MapGlyph::RouteTeleport,
                (_, CellKind::Teleport) => MapGlyph::Teleport,
                (_, CellKind::Blocked) => MapGlyph::Wall,
                (_, CellKind::Free) if on_route.contains(&coord) => MapGlyph::Route,
                (_, CellKind::Free) => MapGlyph::Free,
            };
            palette.paint(&mut buffer, glyph);
        }
        buffer.push('\n');
    }
    buffer
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let mut text = serde_json::to_string_pretty(value).context("failed to serialise output")?;
    text.push('\n');
    Ok(text)
}
