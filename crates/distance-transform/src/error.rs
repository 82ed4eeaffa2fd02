use crate::DistanceKind;

/// Errors returned by the distance transform.
///
/// Every variant is raised before the destination raster is touched.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum DistanceTransformError {
    #[error("at least 2 pixels along each axis expected (rows={rows}, cols={cols})")]
    TooSmall { rows: usize, cols: usize },

    #[error("{kind} distance undefined: raster has no background pixel")]
    NoBackground { kind: DistanceKind },

    #[error("no background pixel reached cell ({row}, {col})")]
    UnresolvedCell { row: usize, col: usize },
}
