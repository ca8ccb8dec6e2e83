//! vtcolor - terminal color resolver
//!
//! Resolves color specifiers and previews them as seen with a color vision
//! deficiency.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use vtcolor_core::{BrightnessModel, Deficiency};

mod commands;
mod config;

#[derive(Parser)]
#[command(name = "vtcolor")]
#[command(author, version, about = "Terminal color resolver with CVD simulation")]
#[command(long_about = "
Resolves terminal color specifiers into RGB, hex and escape sequences,
optionally simulating a color vision deficiency.

Specifiers: palette index (18), palette name (DarkBlue), triplet (94;0;63),
hex (#5E003F).

Examples:
  vtcolor show 18 '94;0;63' '#0F0F0F'     # Resolve colors
  vtcolor show 18 --json                  # JSON output
  vtcolor show 18 -d protan -s 1.0        # Simulate protanopia
  vtcolor simulate 196 --swatch           # All deficiencies side by side
  vtcolor palette --names                 # List the 256-color palette
  vtcolor --config cvd.yaml show 208      # Settings from YAML
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(flatten)]
    config: ConfigArgs,
}

/// Deficiency settings shared by all commands.
#[derive(Args, Debug, Default)]
pub struct ConfigArgs {
    /// YAML file with deficiency settings
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Simulate a deficiency: protan, deutan, tritan (enables the transform)
    #[arg(short, long, global = true)]
    deficiency: Option<Deficiency>,

    /// Simulation severity in [0, 1]
    #[arg(short, long, global = true)]
    severity: Option<f64>,

    /// Use the single-matrix (Vienot 1999) algorithm
    #[arg(long, global = true)]
    simple: bool,

    /// Bright/dark luma model: legacy, rec709
    #[arg(long, global = true)]
    brightness: Option<BrightnessModel>,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve colors and print their properties
    Show(ShowArgs),

    /// Show a color under every deficiency
    #[command(visible_alias = "sim")]
    Simulate(SimulateArgs),

    /// List the 256-color palette
    Palette(PaletteArgs),
}

/// Arguments for the `show` command.
#[derive(Args)]
struct ShowArgs {
    /// Color specifiers
    #[arg(required = true)]
    specs: Vec<String>,

    /// Output as JSON
    #[arg(long)]
    json: bool,

    /// Print a sample using the escape sequences
    #[arg(long)]
    swatch: bool,
}

/// Arguments for the `simulate` command.
#[derive(Args)]
struct SimulateArgs {
    /// Color specifier
    spec: String,

    /// Print a sample using the escape sequences
    #[arg(long)]
    swatch: bool,
}

/// Arguments for the `palette` command.
#[derive(Args)]
struct PaletteArgs {
    /// Include palette names
    #[arg(long)]
    names: bool,

    /// Print a sample using the escape sequences
    #[arg(long)]
    swatch: bool,
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = config::load(&cli.config)?;
    tracing::debug!(?config, "configuration");

    match cli.command {
        Commands::Show(args) => commands::show::run(args, &config, cli.verbose),
        Commands::Simulate(args) => commands::simulate::run(args, &config, cli.verbose),
        Commands::Palette(args) => commands::palette::run(args, cli.verbose),
    }
}
