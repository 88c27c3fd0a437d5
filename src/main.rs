//! asciifolio CLI - Convert images to ASCII art

use asciifolio::{load_image, resize, Converter, FolioError, GlyphRamp};
use clap::{Parser, ValueEnum};
use std::io::Write;
use std::path::PathBuf;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Parser)]
#[command(name = "asciifolio", version, about = "Convert images to ASCII art")]
struct Args {
    /// Input image file
    #[arg(default_value = "dragon.png")]
    input: PathBuf,
    /// Output width in characters
    #[arg(short, long, default_value_t = resize::DEFAULT_WIDTH, value_parser = clap::value_parser!(u32).range(1..))]
    width: u32,
    /// Vertical correction for non-square terminal cells
    #[arg(long, default_value_t = resize::ASPECT_CORRECTION, value_parser = parse_aspect)]
    aspect: f64,
    /// Glyphs from darkest to lightest
    #[arg(short, long, default_value = asciifolio::ramp::DEFAULT_RAMP)]
    ramp: String,
    /// Invert the image
    #[arg(short, long)]
    invert: bool,
    /// Enable Atkinson dithering
    #[arg(short, long)]
    dither: bool,
    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: Format,
    /// Write to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn parse_aspect(s: &str) -> Result<f64, String> {
    let aspect: f64 = s.parse().map_err(|e: std::num::ParseFloatError| e.to_string())?;
    resize::check_aspect(aspect).map_err(|e| e.to_string())
}

fn main() -> Result<(), FolioError> {
    let args = Args::parse();
    asciifolio::logging::init("asciifolio", args.verbose);

    let converter = Converter::new()
        .with_width(args.width)
        .with_aspect(args.aspect)?
        .with_ramp(GlyphRamp::new(&args.ramp)?)
        .with_dither(args.dither);

    let mut image = load_image(&args.input)?;
    if args.invert {
        image.invert();
    }

    let art = converter.convert(&image)?;
    let rendered = match args.format {
        Format::Text => art.to_string(),
        Format::Json => art.to_json()? + "\n",
    };

    match args.output {
        Some(path) => {
            std::fs::write(&path, rendered)?;
            tracing::info!(path = %path.display(), rows = art.height, "wrote ascii art");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(rendered.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}
