use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colorx_core::{ColorExplorer, ExplorerOptions, RgbColor, Snapshot, input};
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod render;

#[derive(Parser, Debug)]
#[command(
    name = "colorx",
    about = "Convert a color between RGB, CMYK, CIE XYZ and CIE Lab",
    version
)]
struct Cli {
    /// Print JSON instead of a table
    #[arg(long, global = true)]
    json: bool,

    /// JSON options file (initial color, display decimals)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Decimal places for CMYK, XYZ and Lab output (overrides the config)
    #[arg(short, long, global = true)]
    decimals: Option<u8>,

    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// sRGB channels, 0..255
    Rgb { r: String, g: String, b: String },

    /// sRGB as #rrggbb
    Hex { hex: String },

    /// CMYK percentages, 0..100
    Cmyk {
        c: String,
        m: String,
        y: String,
        k: String,
    },

    /// CIE Lab: L 0..100, a and b -128..127
    #[command(allow_negative_numbers = true)]
    Lab { l: String, a: String, b: String },

    /// CIE XYZ, white at Y = 100
    Xyz { x: String, y: String, z: String },
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "colorx=debug,colorx_core=debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn load_options(cli: &Cli) -> Result<ExplorerOptions> {
    let mut options = match &cli.config {
        Some(path) => ExplorerOptions::load(path)
            .with_context(|| format!("loading options from {}", path.display()))?,
        None => ExplorerOptions::default(),
    };
    if let Some(decimals) = cli.decimals {
        options.decimals = decimals;
    }
    Ok(options)
}

fn run(cli: &Cli) -> Result<Snapshot> {
    let options = load_options(cli)?;
    debug!(?options, "explorer options");
    let mut explorer = ColorExplorer::new(options);

    let snapshot = match &cli.command {
        Commands::Rgb { r, g, b } => {
            explorer.set_rgb(input::parse_rgb([r.as_str(), g.as_str(), b.as_str()])?)
        }
        Commands::Hex { hex } => explorer.set_rgb(hex.parse::<RgbColor>()?),
        Commands::Cmyk { c, m, y, k } => explorer.set_cmyk(input::parse_cmyk_percent([
            c.as_str(),
            m.as_str(),
            y.as_str(),
            k.as_str(),
        ])?),
        Commands::Lab { l, a, b } => {
            explorer.set_lab(input::parse_lab([l.as_str(), a.as_str(), b.as_str()])?)
        }
        Commands::Xyz { x, y, z } => {
            explorer.set_xyz(input::parse_xyz([x.as_str(), y.as_str(), z.as_str()])?)
        }
    };
    Ok(snapshot)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let snapshot = run(&cli).context("invalid color")?;

    if cli.json {
        println!("{}", render::json(&snapshot)?);
    } else {
        print!("{}", render::table(&snapshot));
    }

    if let Some(warning) = snapshot.warning() {
        eprintln!("warning: {warning}");
    }

    Ok(())
}
