//! Route command handler for computing paths between two grid cells.

use std::io::{self, Write};

use anyhow::{bail, Context, Result};
use clap::Args;
use tracing::debug;

use teleroute_lib::{
    parse_endpoint, plan_route, Coordinate, Endpoint, Grid, RouteRequest, RouteSummary,
};

use crate::commands::GridArgs;
use teleroute_cli::output::{render_route, OutputFormat};
use teleroute_cli::prompt::prompt_endpoint;
use teleroute_cli::terminal::ColorPalette;

/// Arguments for the route command.
#[derive(Args, Debug, Clone)]
pub struct RouteCommandArgs {
    #[command(flatten)]
    pub grid: GridArgs,
    /// Start point as `row,col`; prompted for when omitted.
    #[arg(long = "from")]
    pub from: Option<String>,
    /// End point as `row,col`; prompted for when omitted.
    #[arg(long = "to")]
    pub to: Option<String>,
}

/// Handle the route subcommand.
///
/// Loads the grid, resolves both endpoints, and prints the route. A missing
/// route is printed like any other result and then reported as an error so
/// the process exits non-zero.
pub fn handle_route_command(
    args: &RouteCommandArgs,
    format: OutputFormat,
    palette: &ColorPalette,
) -> Result<()> {
    let grid = args.grid.load()?;
    let start = resolve_endpoint(&grid, Endpoint::Start, args.from.as_deref())?;
    let end = resolve_endpoint(&grid, Endpoint::End, args.to.as_deref())?;
    debug!(%start, %end, "searching for route");

    let plan = plan_route(&grid, &RouteRequest::new(start, end))?;
    let summary = RouteSummary::from_plan(&plan);

    if !summary.found && format != OutputFormat::Json {
        bail!("No route found between {start} and {end}.");
    }

    let rendered = render_route(&summary, &grid, format, palette)?;
    let mut stdout = io::stdout().lock();
    stdout
        .write_all(rendered.as_bytes())
        .context("failed to write route")?;

    if !summary.found {
        bail!("No route found between {start} and {end}.");
    }
    Ok(())
}

fn resolve_endpoint(grid: &Grid, role: Endpoint, text: Option<&str>) -> Result<Coordinate> {
    match text {
        Some(text) => {
            parse_endpoint(grid, role, text).with_context(|| format!("invalid {role} point"))
        }
        None => {
            let stdin = io::stdin();
            let mut reader = stdin.lock();
            let mut stderr = io::stderr();
            prompt_endpoint(&mut reader, &mut stderr, grid, role)
                .with_context(|| format!("invalid {role} point"))
        }
    }
}
