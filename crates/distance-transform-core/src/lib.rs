//! Core raster types for the `distance-transform` workspace.
//!
//! This crate is intentionally small. It provides a dense row-major
//! [`Raster`] container, its borrowed counterpart [`RasterView`], and the
//! [`Sample`] trait that decides which cells are background (value zero)
//! and how a computed distance is written back into a typed raster.

mod logger;
mod raster;
mod sample;

pub use raster::{Raster, RasterError, RasterView};
pub use sample::Sample;

#[cfg(feature = "tracing")]
pub use logger::init_tracing;

pub use logger::init_with_level;
