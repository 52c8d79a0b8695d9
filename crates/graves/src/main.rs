use clap::{Parser, Subcommand};
use env_logger::Env;

mod commands;
mod utils;

#[derive(Parser)]
#[command(name = "graves")]
#[command(about = "Grave-marker transcription and KML mapping tool", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(short = 'd', long = "debug", global = true, hide = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a grave-marker transcription into CSV
    FormatCsv(commands::format_csv::FormatCsvArgs),

    /// Map graves by the row and column recorded in a CSV
    GridKml(commands::grid_kml::GridKmlArgs),

    /// Map graves in CSV order, ten to a column
    SequentialKml(commands::sequential_kml::SequentialKmlArgs),

    /// Emit a full circle of rotated test plots
    RotationTest(commands::rotation_test::RotationTestArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize color handling (respects NO_COLOR)
    utils::color::init_color();

    // Initialize logger with default level (overridden by RUST_LOG)
    let level = if cli.debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(level)).init();

    match cli.command {
        Commands::FormatCsv(args) => commands::format_csv::execute(args),
        Commands::GridKml(args) => commands::grid_kml::execute(args),
        Commands::SequentialKml(args) => commands::sequential_kml::execute(args),
        Commands::RotationTest(args) => commands::rotation_test::execute(args),
    }
}
