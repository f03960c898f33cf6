use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use pixel_lib::{analyze, export, palette_image, Config, PixelBuffer};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    /// width, height, pixel size, sampled tiles and the palette strip as base64 PNG
    Json,
    /// one `r,g,b,a` row per palette color
    Csv,
    /// the palette strip as a PNG image
    Png,
}

/// Extract the tile size, palette and tile grid of a pixel art image
#[derive(Parser, Debug)]
#[command(name = "pixel-parser")]
#[command(version, about, long_about = None)]
struct Args {
    /// Image to analyze (png or jpg)
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    #[arg(short, long, value_enum, default_value_t = Format::Json)]
    format: Format,

    /// JSON file with output settings
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Side of each palette swatch in pixels
    #[arg(long, value_name = "INT")]
    swatch_size: Option<u32>,

    /// Don't indent the JSON output
    #[arg(long)]
    compact: bool,

    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    if let Err(err) = init_logging(args.verbose) {
        eprintln!("failed to initialize logger: {err}");
        return ExitCode::FAILURE;
    }

    if let Err(err) = run(&args) {
        log::error!("{err:#}");
        return ExitCode::FAILURE;
    }
    return ExitCode::SUCCESS;
}

fn init_logging(verbose: bool) -> Result<()> {
    use simplelog::*;
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    // stdout carries the document
    TermLogger::init(
        level,
        simplelog::Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )?;
    return Ok(());
}

fn load_config(args: &Args) -> Result<Config> {
    let mut config = match &args.config {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read config {}", path.display()))?;
            Config::from_json(&json).with_context(|| format!("invalid config {}", path.display()))?
        }
        None => Config::default(),
    };
    if let Some(swatch_size) = args.swatch_size {
        config.swatch_size = swatch_size;
    }
    if args.compact {
        config.pretty = false;
    }
    return Ok(config);
}

fn run(args: &Args) -> Result<()> {
    let config = load_config(args)?;
    let image = image::io::Reader::open(&args.input)
        .with_context(|| format!("failed to open {}", args.input.display()))?
        .with_guessed_format()?
        .decode()
        .with_context(|| format!("failed to decode {}", args.input.display()))?
        .to_rgba8();
    let buffer = PixelBuffer::try_from(&image)?;
    let result = analyze(&buffer);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match args.format {
        Format::Json => export::write_json(&result, &config, &mut out)?,
        Format::Csv => export::write_palette_csv(&result.palette, &mut out)?,
        Format::Png => {
            if result.palette.is_empty() {
                anyhow::bail!("{} has no opaque pixels to render", args.input.display());
            }
            let strip = palette_image::render_palette(&result.palette, config.swatch_size);
            out.write_all(&palette_image::encode_png(&strip)?)?;
            return Ok(());
        }
    }
    writeln!(out)?;
    return Ok(());
}
