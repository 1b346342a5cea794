//! Command-line front end: `svg2scad [INPUT] [-o OUTPUT]`.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use svg2scad::{Convert, ConvertParams};

/// Turn every path of an SVG file into a thickened OpenSCAD polygon.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// SVG file to read.
    #[arg(default_value = "drawing.svg")]
    input: PathBuf,

    /// OpenSCAD file to write (overwritten if it exists).
    #[arg(short, long, default_value = "scadout.scad")]
    output: PathBuf,

    /// Distance from the path to each side of the outline.
    #[arg(long, default_value_t = 0.8)]
    half_width: f64,

    /// Consecutive points at most this far apart are merged.
    #[arg(long, default_value_t = 0.3)]
    merge_threshold: f64,

    /// Decimal digits kept when rounding flattened coordinates.
    #[arg(long, default_value_t = 2)]
    decimals: u32,

    /// Worker threads used for flattening (defaults to available cores).
    #[arg(long)]
    workers: Option<usize>,
}

impl Args {
    fn params(&self) -> ConvertParams {
        let defaults = ConvertParams::default();
        ConvertParams {
            half_width: self.half_width,
            merge_threshold: self.merge_threshold,
            decimals: self.decimals,
            workers: self.workers.unwrap_or(defaults.workers),
        }
    }
}

fn main() -> Result<()> {
    // Default: WARN for everything, INFO for svg2scad.
    // Override with RUST_LOG (e.g. RUST_LOG=svg2scad=debug).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("svg2scad=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let args = Args::parse();
    let convert = Convert::new(args.params());
    let summary = convert
        .run_file(&args.input, &args.output)
        .with_context(|| {
            format!(
                "converting {} to {}",
                args.input.display(),
                args.output.display()
            )
        })?;

    tracing::info!(
        paths = summary.paths,
        polygons = summary.polygons,
        "conversion complete"
    );
    Ok(())
}
