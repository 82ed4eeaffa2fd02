use distance_transform_core::{Raster, RasterView, Sample};

#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::{chamfer, edt, sed};
use crate::{DistanceKind, DistanceTransformError, DistanceTransformParams, Method};

/// Distance transform engine.
///
/// Every foreground (non-zero) cell receives its distance to the closest
/// background (zero) cell; background cells map to `0`.
///
/// Policies for degenerate input:
/// - a raster with `rows == 0` or `cols == 0` yields an empty result,
/// - any other raster smaller than `2 x 2` fails with
///   [`DistanceTransformError::TooSmall`],
/// - a raster without background yields the sentinel `rows + cols` at every
///   cell for the chamfer kinds and fails with
///   [`DistanceTransformError::NoBackground`] for the Euclidean and SED kinds.
#[derive(Clone, Debug, Default)]
pub struct DistanceTransform {
    params: DistanceTransformParams,
}

impl DistanceTransform {
    pub fn new(params: DistanceTransformParams) -> Self {
        Self { params }
    }

    pub fn with_kind(distance: DistanceKind) -> Self {
        Self::new(DistanceTransformParams::new(distance))
    }

    pub fn params(&self) -> &DistanceTransformParams {
        &self.params
    }

    pub fn kind(&self) -> DistanceKind {
        self.params.distance
    }

    /// Compute the distance field of `src`, leaving it untouched.
    #[cfg_attr(
        feature = "tracing",
        instrument(
            level = "info",
            skip(self, src),
            fields(kind = %self.params.distance, rows = src.rows(), cols = src.cols())
        )
    )]
    pub fn apply<T: Sample>(
        &self,
        src: &RasterView<'_, T>,
    ) -> Result<Raster<f32>, DistanceTransformError> {
        let kind = self.params.distance;
        let (rows, cols) = (src.rows(), src.cols());

        if src.is_empty() {
            return Ok(Raster::new(rows, cols, 0.0));
        }
        if rows < 2 || cols < 2 {
            return Err(DistanceTransformError::TooSmall { rows, cols });
        }
        let has_background = src.as_slice().iter().any(|v| v.is_background());
        if !has_background && kind.requires_background() {
            return Err(DistanceTransformError::NoBackground { kind });
        }

        log::debug!("{kind} distance transform of {rows}x{cols} raster");

        let mut field = match kind.method() {
            Method::Chamfer(neighborhood) => {
                let mut field = chamfer::seed(src);
                if has_background {
                    chamfer::propagate(&mut field, neighborhood);
                } else {
                    log::warn!(
                        "{kind}: raster has no background pixel, every cell set to {}",
                        chamfer::sentinel(rows, cols)
                    );
                }
                return Ok(field);
            }
            Method::Exact => edt::squared_edt(src).map(|&d| d as f32),
            Method::Sed(neighborhood) => {
                let mut dist = sed::seed(src);
                sed::propagate(&mut dist, neighborhood);
                sed::squared_lengths(&dist)?.map(|&d| d as f32)
            }
        };

        if !kind.is_squared() {
            for v in field.as_mut_slice() {
                *v = v.sqrt();
            }
        }
        Ok(field)
    }

    /// Replace every cell of `raster` by its distance, cast back with
    /// [`Sample::from_distance`].
    ///
    /// On error the raster is left unchanged.
    pub fn apply_in_place<T: Sample>(
        &self,
        raster: &mut Raster<T>,
    ) -> Result<(), DistanceTransformError> {
        let field = self.apply(&raster.view())?;
        for (dst, &d) in raster.as_mut_slice().iter_mut().zip(field.as_slice()) {
            *dst = T::from_distance(d);
        }
        Ok(())
    }
}

/// Distance field of `src` for `kind`; see [`DistanceTransform::apply`].
pub fn distance_transform<T: Sample>(
    src: &RasterView<'_, T>,
    kind: DistanceKind,
) -> Result<Raster<f32>, DistanceTransformError> {
    DistanceTransform::with_kind(kind).apply(src)
}

/// In-place distance transform; see [`DistanceTransform::apply_in_place`].
pub fn distance_transform_in_place<T: Sample>(
    raster: &mut Raster<T>,
    kind: DistanceKind,
) -> Result<(), DistanceTransformError> {
    DistanceTransform::with_kind(kind).apply_in_place(raster)
}
