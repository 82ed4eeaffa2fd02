//! Example: distance transform of a synthetic raster.
//!
//! Builds a foreground raster with a ring, a bar and a few isolated
//! background pixels, runs the selected distance kind and prints summary
//! statistics. With `--out` the field is also written as an 8-bit PNG.
//!
//! Run from the workspace root:
//!   cargo run -p distance-transform --example dt_demo -- --help
//!   cargo run -p distance-transform --example dt_demo -- --kind EightSED --out dt.png

use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use distance_transform::gray::{distance_to_gray, gray_view};
use distance_transform::{DistanceKind, DistanceTransform};
use image::{GrayImage, Luma};

#[cfg(feature = "tracing")]
use distance_transform::init_tracing;
#[cfg(not(feature = "tracing"))]
use distance_transform::init_with_level;

#[derive(Parser, Debug)]
#[command(about = "Distance transform of a synthetic binary raster")]
struct Args {
    /// Distance kind token, e.g. Euclidean, FourNeighborhood, EightSEDSqr
    #[arg(long, default_value_t = DistanceKind::Euclidean)]
    kind: DistanceKind,

    /// Raster height
    #[arg(long, default_value_t = 240)]
    rows: u32,

    /// Raster width
    #[arg(long, default_value_t = 320)]
    cols: u32,

    /// Gray levels per unit of distance in the PNG output
    #[arg(long, default_value_t = 4.0)]
    scale: f32,

    /// Optional PNG output path
    #[arg(long)]
    out: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: log::LevelFilter,
}

/// Zero (background) on a ring, a horizontal bar and a sparse dot grid.
fn synthetic(rows: u32, cols: u32) -> GrayImage {
    let (cy, cx) = (rows as f32 / 2.0, cols as f32 / 2.0);
    let radius = rows.min(cols) as f32 / 3.0;
    GrayImage::from_fn(cols, rows, |x, y| {
        let r = (x as f32 - cx).hypot(y as f32 - cy);
        let ring = (r - radius).abs() < 1.0;
        let bar = y == rows / 5 && x > cols / 8 && x < cols / 2;
        let dot = x % 61 == 3 && y % 53 == 5;
        Luma([if ring || bar || dot { 0 } else { 255 }])
    })
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    #[cfg(feature = "tracing")]
    init_tracing(false);
    #[cfg(not(feature = "tracing"))]
    init_with_level(args.log_level)?;

    let img = synthetic(args.rows, args.cols);
    let view = gray_view(&img)?;
    let dt = DistanceTransform::with_kind(args.kind);

    let start = Instant::now();
    let field = dt.apply(&view)?;
    let elapsed = start.elapsed();

    let max = field.as_slice().iter().copied().fold(0.0f32, f32::max);
    let mean = field.as_slice().iter().sum::<f32>() / field.len().max(1) as f32;
    log::info!(
        "{} on {}x{}: max {max:.3}, mean {mean:.3}, {:.2} ms",
        args.kind,
        field.rows(),
        field.cols(),
        elapsed.as_secs_f64() * 1e3
    );

    if let Some(path) = &args.out {
        distance_to_gray(&field, args.scale).save(path)?;
        log::info!("wrote {}", path.display());
    }

    Ok(())
}
