// Module exports for CLI subcommands
//
// Each module handles one subcommand; main.rs parses arguments and dispatches.

pub mod inspect;
pub mod route;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use teleroute_lib::{load_grid, Grid};

/// Environment variable consulted when `--grid` is not given.
pub const GRID_ENV: &str = "TELEROUTE_GRID";

/// Arguments describing where the grid comes from and what it must contain.
#[derive(Args, Debug, Clone)]
pub struct GridArgs {
    /// Comma separated grid file (0 blocked, 1 free, 2 teleport).
    #[arg(long)]
    pub grid: Option<PathBuf>,
    /// Expected grid dimension N; defaults to the number of rows in the file.
    #[arg(long)]
    pub size: Option<usize>,
    /// Expected number of blocked cells.
    #[arg(long)]
    pub blocked: Option<usize>,
}

impl GridArgs {
    /// Grid path from `--grid`, falling back to `TELEROUTE_GRID`.
    pub fn resolve_path(&self) -> Result<PathBuf> {
        if let Some(path) = &self.grid {
            return Ok(path.clone());
        }
        std::env::var_os(GRID_ENV)
            .map(PathBuf::from)
            .with_context(|| format!("no grid file given; pass --grid or set {GRID_ENV}"))
    }

    pub fn load(&self) -> Result<Grid> {
        let path = self.resolve_path()?;
        load_grid(&path, self.size, self.blocked)
            .with_context(|| format!("failed to load grid from {}", path.display()))
    }
}
