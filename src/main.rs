use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use palette_match::{ColorSpace, SearchContext, Srgb8, WeightVector};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use quantize::models::{AppConfig, Overrides};
use quantize::rendering::quantize_png_file;
use quantize::services::load_palette;

const CONFIG_ENV: &str = "QUANTIZE_CONFIG";

#[derive(Parser)]
#[command(name = "quantize")]
#[command(about = "Reduce images to a fixed palette, preserving alpha")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Quantize a PNG image to the palette
    Apply {
        /// Input PNG file
        #[arg(short, long)]
        input: PathBuf,

        /// Output PNG file
        #[arg(short, long)]
        output: PathBuf,

        /// Re-compress the output with oxipng
        #[arg(long)]
        optimize: bool,

        #[command(flatten)]
        matching: MatchArgs,
    },
    /// Print the palette entry nearest to a color
    Match {
        /// Hex color, e.g. "#ff8000"
        color: String,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        matching: MatchArgs,
    },
    /// List the palette entries
    Palette {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        matching: MatchArgs,
    },
}

/// Options shared by every subcommand that needs a palette
#[derive(Args)]
struct MatchArgs {
    /// Palette file (.lmp or hex text)
    #[arg(short, long)]
    palette: Option<PathBuf>,

    /// Color space: rgb, lch or hsl
    #[arg(short, long)]
    space: Option<ColorSpace>,

    /// Comma-separated weights, e.g. "1,0.8,1.2"
    #[arg(short, long)]
    weights: Option<WeightVector>,

    /// Number of leading .lmp entries to use
    #[arg(short, long)]
    count: Option<usize>,

    /// YAML config file (defaults to $QUANTIZE_CONFIG)
    #[arg(long)]
    config: Option<PathBuf>,
}

impl MatchArgs {
    /// Resolve the effective configuration: file first, flags on top
    fn config(&self) -> anyhow::Result<AppConfig> {
        let base = match &self.config {
            Some(path) => AppConfig::load(path)?,
            None => {
                let implicit = std::env::var(CONFIG_ENV).ok().map(PathBuf::from);
                AppConfig::load_or_default(implicit.as_deref())
            }
        };
        Ok(base.with_overrides(Overrides {
            palette: self.palette.clone(),
            count: self.count,
            color_space: self.space,
            weights: self.weights,
        }))
    }
}

#[derive(Serialize)]
struct MatchOutput {
    query: String,
    index: usize,
    color: String,
    distance: f32,
    color_space: ColorSpace,
    weights: WeightVector,
}

#[derive(Serialize)]
struct PaletteEntry {
    index: usize,
    color: String,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "quantize=info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    match cli.command {
        Some(Commands::Apply {
            input,
            output,
            optimize,
            matching,
        }) => run_apply_command(&input, &output, optimize, &matching),
        Some(Commands::Match {
            color,
            json,
            matching,
        }) => run_match_command(&color, json, &matching),
        Some(Commands::Palette { json, matching }) => run_palette_command(json, &matching),
        None => {
            run_status_command();
            Ok(())
        }
    }
}

/// Quantize a PNG file
fn run_apply_command(
    input: &Path,
    output: &Path,
    optimize: bool,
    matching: &MatchArgs,
) -> anyhow::Result<()> {
    let ctx = matching.config()?.build_context()?;
    let stats = quantize_png_file(&ctx, input, output, optimize)?;

    println!(
        "Wrote {} ({} pixels, {} of {} palette colors used)",
        output.display(),
        stats.pixels,
        stats.colors_used,
        ctx.palette().len()
    );
    Ok(())
}

/// Print the nearest palette entry for one color
fn run_match_command(color: &str, json: bool, matching: &MatchArgs) -> anyhow::Result<()> {
    let query: Srgb8 = color
        .parse()
        .with_context(|| format!("Invalid color {color:?}"))?;
    let ctx = matching.config()?.build_context()?;

    let output = match_color(&ctx, query);
    if json {
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!(
            "{} -> [{}] {} (d²={:.6}, {} weights {})",
            output.query,
            output.index,
            output.color,
            output.distance,
            output.color_space,
            output.weights
        );
    }
    Ok(())
}

fn match_color(ctx: &SearchContext, query: Srgb8) -> MatchOutput {
    let (index, distance) = ctx.nearest(ctx.convert(query, 1.0));
    let color = ctx.palette().reference(index).unwrap_or(query);
    MatchOutput {
        query: query.to_hex(),
        index,
        color: color.to_hex(),
        distance,
        color_space: ctx.space(),
        weights: ctx.weights(),
    }
}

/// List the palette
fn run_palette_command(json: bool, matching: &MatchArgs) -> anyhow::Result<()> {
    let config = matching.config()?;
    let path = config
        .palette
        .path
        .as_deref()
        .ok_or(quantize::error::QuantizeError::NoPalette)?;
    let palette = load_palette(path, config.palette.count)?;

    let entries: Vec<PaletteEntry> = palette
        .iter()
        .enumerate()
        .map(|(index, color)| PaletteEntry {
            index,
            color: color.to_hex(),
        })
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
    } else {
        for entry in &entries {
            println!("{:3}  {}", entry.index, entry.color);
        }
    }
    Ok(())
}

/// Show configuration status (no subcommand)
fn run_status_command() {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    let config_file = std::env::var(CONFIG_ENV).ok();
    let rust_log = std::env::var("RUST_LOG").ok();

    println!("Quantize v{VERSION}");
    println!("Reduce images to a fixed palette, preserving alpha\n");

    println!("Environment Variables:");
    println!(
        "  {CONFIG_ENV} = {}",
        config_file.as_deref().unwrap_or("(not set)")
    );
    println!(
        "  RUST_LOG        = {}",
        rust_log.as_deref().unwrap_or("quantize=info (default)")
    );

    let config = AppConfig::load_or_default(config_file.as_deref().map(Path::new));
    println!("\nConfiguration:");
    println!("  Palette:     {}", config.palette_status());
    println!("  Count:       {}", config.palette.count);
    println!("  Color space: {}", config.color_space);

    let labels = config.color_space.weight_labels();
    let weights = config.effective_weights();
    println!(
        "  Weights:     {}={} {}={} {}={}",
        labels[0],
        weights.slot(0),
        labels[1],
        weights.slot(1),
        labels[2],
        weights.slot(2)
    );

    println!("\nColor Spaces:");
    for space in ColorSpace::ALL {
        println!("  {:<4} weights: {}", space.name(), space.weight_labels().join(", "));
    }

    println!("\nCommands:");
    println!("  quantize apply -i IN.png -o OUT.png -p palette.lmp   Quantize an image");
    println!("  quantize match '#ff8000' -p palette.lmp              Nearest palette entry");
    println!("  quantize palette -p palette.lmp                      List palette entries");
    println!("\nThere is no built-in palette; every command needs a palette file.");
    println!("Run 'quantize --help' for all options.");
}
