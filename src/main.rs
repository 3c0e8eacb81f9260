use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use dmc_quantize::{QuantizeError, Rgba};
use stitchgrid::error::{ConvertError, MAX_PREVIEW_CELL_SIZE};
use stitchgrid::models::{AppConfig, ColorSource, DEFAULT_CONFIG_FILE};
use stitchgrid::services::{load_palette, ConvertPipeline};

/// Exit status when the sprite has no visible pixel
const EXIT_NO_VISIBLE_CONTENT: i32 = 3;

#[derive(Parser)]
#[command(name = "stitchgrid")]
#[command(about = "Stitchgrid - turn pixel sprites into DMC cross-stitch patterns")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a PNG sprite into a cross-stitch pattern
    Convert {
        /// Sprite PNG file
        sprite: PathBuf,

        /// Palette CSV file (overrides PALETTE_FILE and config)
        #[arg(short, long)]
        palette: Option<PathBuf>,

        /// Output directory (overrides RESULTS_DIR and config)
        #[arg(short, long)]
        results: Option<PathBuf>,

        /// Symbol alphabet, one character per thread (default A-Z)
        #[arg(short, long)]
        alphabet: Option<String>,

        /// Palette column holding the thread label
        #[arg(long)]
        label_column: Option<String>,

        /// Preview colors: "real" or "dmc"
        #[arg(long)]
        preview_colors: Option<ColorSource>,

        /// Preview cell size in pixels
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..=i64::from(MAX_PREVIEW_CELL_SIZE)))]
        cell_size: Option<u32>,
    },
    /// List the threads of the palette
    Palette {
        /// Palette CSV file (overrides PALETTE_FILE and config)
        #[arg(short, long)]
        palette: Option<PathBuf>,

        /// Palette column holding the thread label
        #[arg(long)]
        label_column: Option<String>,
    },
    /// Find the nearest thread for a hex color (RGB, RRGGBB or AARRGGBB)
    Match {
        /// Color, e.g. "#F00", "#FA0A0A" or "FFFA0A0A"
        color: String,

        /// Palette CSV file (overrides PALETTE_FILE and config)
        #[arg(short, long)]
        palette: Option<PathBuf>,

        /// Palette column holding the thread label
        #[arg(long)]
        label_column: Option<String>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "stitchgrid=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    match cli.command {
        Some(Commands::Convert {
            sprite,
            palette,
            results,
            alphabet,
            label_column,
            preview_colors,
            cell_size,
        }) => {
            let mut config = AppConfig::load();
            if let Some(palette) = palette {
                config.palette_file = palette;
            }
            if let Some(results) = results {
                config.results_dir = results;
            }
            if alphabet.is_some() {
                config.alphabet = alphabet;
            }
            if label_column.is_some() {
                config.label_column = label_column;
            }
            if let Some(colors) = preview_colors {
                config.preview.colors = colors;
            }
            if let Some(size) = cell_size {
                config.preview.cell_size = size;
            }

            match run_convert_command(config, &sprite) {
                Err(e) if is_no_visible_content(&e) => {
                    eprintln!("{}: nothing to stitch (no visible pixels)", sprite.display());
                    std::process::exit(EXIT_NO_VISIBLE_CONTENT);
                }
                other => other,
            }
        }
        Some(Commands::Palette {
            palette,
            label_column,
        }) => {
            let mut config = AppConfig::load();
            if let Some(palette) = palette {
                config.palette_file = palette;
            }
            if label_column.is_some() {
                config.label_column = label_column;
            }
            run_palette_command(&config)
        }
        Some(Commands::Match {
            color,
            palette,
            label_column,
        }) => {
            let mut config = AppConfig::load();
            if let Some(palette) = palette {
                config.palette_file = palette;
            }
            if label_column.is_some() {
                config.label_column = label_column;
            }
            run_match_command(&config, &color)
        }
        None => {
            run_status_command();
            Ok(())
        }
    }
}

fn is_no_visible_content(error: &anyhow::Error) -> bool {
    error
        .downcast_ref::<ConvertError>()
        .is_some_and(ConvertError::is_no_visible_content)
}

/// Convert one sprite and write all artifacts
fn run_convert_command(config: AppConfig, sprite: &Path) -> anyhow::Result<()> {
    let pipeline = ConvertPipeline::new(config)
        .context("Failed to initialize conversion pipeline")?;

    let output = pipeline
        .convert_file(sprite)
        .with_context(|| format!("Failed to convert {}", sprite.display()))?;

    let pattern = &output.pattern;
    println!(
        "Converted {} ({}x{}, {} stitches, {} threads)",
        sprite.display(),
        pattern.width(),
        pattern.height(),
        pattern.stitch_count(),
        pattern.legend().len()
    );
    for entry in pattern.legend() {
        println!(
            "  {}  {:<8} {}  {:>5}  {}",
            entry.symbol,
            entry.label,
            entry.matched_hex(),
            entry.stitch_count,
            entry.description.as_deref().unwrap_or("")
        );
    }
    println!("\nWrote:");
    println!("  {}", output.workbook.display());
    println!("  {}", output.report.display());
    println!("  {}", output.preview.display());
    println!("  {}/", output.csv_dir.display());

    Ok(())
}

/// Print every palette entry in file order
fn run_palette_command(config: &AppConfig) -> anyhow::Result<()> {
    let palette = load_palette(&config.palette_file, config.label_column.as_deref())
        .with_context(|| format!("Failed to load {}", config.palette_file.display()))?;

    println!(
        "{} ({} threads)\n",
        config.palette_file.display(),
        palette.len()
    );
    for entry in &palette {
        println!(
            "  {:<8} {}  {}",
            entry.label,
            entry.color,
            entry.description.as_deref().unwrap_or("")
        );
    }

    Ok(())
}

/// Print the nearest thread for one color
fn run_match_command(config: &AppConfig, color: &str) -> anyhow::Result<()> {
    let color = parse_color(color).with_context(|| format!("Invalid color: {color}"))?;
    let palette = load_palette(&config.palette_file, config.label_column.as_deref())
        .with_context(|| format!("Failed to load {}", config.palette_file.display()))?;

    let (idx, dist_sq) = palette.find_nearest(color);
    let entry = palette
        .get(idx)
        .context("nearest index outside palette")?;

    println!(
        "{} -> {} {} (distance {:.2}){}",
        color,
        entry.label,
        entry.color,
        (dist_sq as f64).sqrt(),
        entry
            .description
            .as_deref()
            .map(|d| format!("  {d}"))
            .unwrap_or_default()
    );

    Ok(())
}

/// Parse `RGB`, `RRGGBB` (alpha 255) or `AARRGGBB`, with optional leading `#`
fn parse_color(input: &str) -> Result<Rgba, QuantizeError> {
    Ok(input.parse::<Rgba>()?)
}

/// Display status and configuration information
fn run_status_command() {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    let config_file = std::env::var("CONFIG_FILE").ok();
    let palette_file = std::env::var("PALETTE_FILE").ok();
    let results_dir = std::env::var("RESULTS_DIR").ok();

    println!("Stitchgrid v{VERSION}");
    println!("DMC cross-stitch patterns from pixel sprites\n");

    println!("Environment Variables:");
    println!(
        "  CONFIG_FILE  = {}",
        config_file.as_deref().unwrap_or("(not set)")
    );
    println!(
        "  PALETTE_FILE = {}",
        palette_file.as_deref().unwrap_or("(not set)")
    );
    println!(
        "  RESULTS_DIR  = {}",
        results_dir.as_deref().unwrap_or("(not set)")
    );

    let config_path = PathBuf::from(config_file.as_deref().unwrap_or(DEFAULT_CONFIG_FILE));
    let config = AppConfig::load();

    println!("\nEffective Configuration:");
    if config_path.exists() {
        println!("  Config:   {}", config_path.display());
    } else {
        println!("  Config:   defaults ({} not found)", config_path.display());
    }

    let palette_status = if config.palette_file.exists() {
        "found"
    } else {
        "missing"
    };
    println!(
        "  Palette:  {} ({palette_status})",
        config.palette_file.display()
    );
    println!("  Results:  {}", config.results_dir.display());
    println!(
        "  Symbols:  {}",
        config.alphabet.as_deref().unwrap_or("A-Z (default)")
    );
    println!(
        "  Preview:  {}px cells, {:?} colors",
        config.preview.cell_size, config.preview.colors
    );

    println!("\nCommands:");
    println!("  stitchgrid convert <sprite.png>   Convert a sprite into a pattern");
    println!("  stitchgrid palette                List palette threads");
    println!("  stitchgrid match <color>          Find the nearest thread for a color");
    println!("\nRun 'stitchgrid --help' for more details.");
}
