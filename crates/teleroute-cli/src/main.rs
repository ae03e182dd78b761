mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use commands::inspect::{handle_inspect_command, InspectCommandArgs};
use commands::route::{handle_route_command, RouteCommandArgs};
use teleroute_cli::output::OutputFormat;
use teleroute_cli::terminal::ColorPalette;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Shortest routes across a square grid with one teleport pair"
)]
struct Cli {
    /// Output format for results.
    #[arg(long, global = true, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Disable ANSI colours in map output.
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute the shortest route between two cells.
    Route(RouteCommandArgs),
    /// Validate a grid file and print an overview of it.
    Inspect(InspectCommandArgs),
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let palette = if cli.no_color {
        ColorPalette::plain()
    } else {
        ColorPalette::detect()
    };

    match &cli.command {
        Command::Route(args) => handle_route_command(args, cli.format, &palette),
        Command::Inspect(args) => handle_inspect_command(args, cli.format, &palette),
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
