//! Inspect command handler: validate a grid and print an overview.

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Args;

use crate::commands::GridArgs;
use teleroute_cli::output::{render_grid, OutputFormat};
use teleroute_cli::terminal::ColorPalette;

#[derive(Args, Debug, Clone)]
pub struct InspectCommandArgs {
    #[command(flatten)]
    pub grid: GridArgs,
}

pub fn handle_inspect_command(
    args: &InspectCommandArgs,
    format: OutputFormat,
    palette: &ColorPalette,
) -> Result<()> {
    let grid = args.grid.load()?;
    let rendered = render_grid(&grid, format, palette)?;
    io::stdout()
        .lock()
        .write_all(rendered.as_bytes())
        .context("failed to write grid overview")?;
    Ok(())
}
