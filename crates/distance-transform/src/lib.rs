//! Distance transforms of binary rasters.
//!
//! Given a raster whose zero cells are *background* and whose non-zero cells
//! are *foreground*, compute for every cell the distance to the closest
//! background cell. Eight distance kinds are available:
//!
//! | kind | algorithm | result |
//! |------|-----------|--------|
//! | `FourNeighborhood` | two-pass chamfer | city-block distance |
//! | `EightNeighborhood` | two-pass chamfer | chessboard distance |
//! | `Euclidean`, `EuclideanSqr` | Maurer row/column EDT | exact (squared) Euclidean |
//! | `FourSED`, `FourSEDSqr`, `EightSED`, `EightSEDSqr` | Danielsson sequential mapping | near-exact (squared) Euclidean |
//!
//! ## Quickstart
//!
//! ```
//! use distance_transform::{distance_transform, DistanceKind, Raster};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // one background pixel in the middle of a 5x5 foreground raster
//! let src = Raster::from_fn(5, 5, |r, c| u8::from((r, c) != (2, 2)));
//! let field = distance_transform(&src.view(), DistanceKind::EuclideanSqr)?;
//! assert_eq!(*field.at(0, 0), 8.0);
//! assert_eq!(*field.at(2, 2), 0.0);
//! # Ok(())
//! # }
//! ```
//!
//! ## API map
//! - [`DistanceTransform`]: engine configured by [`DistanceTransformParams`].
//! - [`distance_transform`] / [`distance_transform_in_place`]: one-shot helpers.
//! - [`Raster`], [`RasterView`], [`Sample`]: re-exported from
//!   `distance-transform-core`.
//! - `gray` (feature `image`): `image::GrayImage` adapters.

mod chamfer;
mod edt;
mod error;
mod kind;
mod params;
mod sed;
mod transform;

#[cfg(feature = "image")]
pub mod gray;

pub use error::DistanceTransformError;
pub use kind::{DistanceKind, Method, Neighborhood, ParseDistanceKindError};
pub use params::DistanceTransformParams;
pub use transform::{distance_transform, distance_transform_in_place, DistanceTransform};

pub use distance_transform_core::{init_with_level, Raster, RasterError, RasterView, Sample};

#[cfg(feature = "tracing")]
pub use distance_transform_core::init_tracing;
