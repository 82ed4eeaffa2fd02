use crate::DistanceKind;
use serde::{Deserialize, Serialize};

/// Configuration for [`DistanceTransform`](crate::DistanceTransform).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistanceTransformParams {
    /// Kind of distance to be computed.
    ///
    /// Default value: `Euclidean`.
    #[serde(default)]
    pub distance: DistanceKind,
}

impl DistanceTransformParams {
    pub fn new(distance: DistanceKind) -> Self {
        Self { distance }
    }
}
