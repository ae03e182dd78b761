//! Interactive entry of start and end points.

use std::io::{BufRead, Write};

use anyhow::{bail, Context, Result};

use teleroute_lib::{parse_endpoint, Coordinate, Endpoint, Grid};

/// Ask for a `row,col` point and validate it against `grid`.
///
/// One attempt only; malformed input is an error, not a retry.
pub fn prompt_endpoint<R, W>(
    reader: &mut R,
    writer: &mut W,
    grid: &Grid,
    role: Endpoint,
) -> Result<Coordinate>
where
    R: BufRead,
    W: Write,
{
    writeln!(writer, "Input {role} point (comma separated) ").context("failed to write prompt")?;
    writer.flush().context("failed to write prompt")?;

    let mut line = String::new();
    let read = reader
        .read_line(&mut line)
        .with_context(|| format!("failed to read {role} point"))?;
    if read == 0 {
        bail!("no {role} point given on standard input");
    }

    let coordinate = parse_endpoint(grid, role, &line)?;
    Ok(coordinate)
}
