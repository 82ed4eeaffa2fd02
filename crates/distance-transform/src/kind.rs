use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which distance to compute.
///
/// For two pixels `p` and `q`:
/// - `FourNeighborhood`: `|p.x - q.x| + |p.y - q.y|` (city block),
/// - `EightNeighborhood`: `max(|p.x - q.x|, |p.y - q.y|)` (chessboard),
/// - `Euclidean` / `EuclideanSqr`: exact Euclidean distance (or its square),
/// - `*SED` / `*SEDSqr`: sequential Euclidean distance mapping with a 4- or
///   8-point mask (or its square).
///
/// The serialized tokens are the variant names verbatim.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DistanceKind {
    EightNeighborhood,
    FourNeighborhood,
    #[default]
    Euclidean,
    EuclideanSqr,
    EightSED,
    EightSEDSqr,
    FourSED,
    FourSEDSqr,
}

/// Connectivity of a chamfer or SED propagation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Neighborhood {
    Four,
    Eight,
}

/// Algorithm family selected by a [`DistanceKind`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Method {
    Chamfer(Neighborhood),
    Exact,
    Sed(Neighborhood),
}

impl DistanceKind {
    pub const ALL: [DistanceKind; 8] = [
        DistanceKind::EightNeighborhood,
        DistanceKind::FourNeighborhood,
        DistanceKind::Euclidean,
        DistanceKind::EuclideanSqr,
        DistanceKind::EightSED,
        DistanceKind::EightSEDSqr,
        DistanceKind::FourSED,
        DistanceKind::FourSEDSqr,
    ];

    pub fn method(self) -> Method {
        match self {
            DistanceKind::EightNeighborhood => Method::Chamfer(Neighborhood::Eight),
            DistanceKind::FourNeighborhood => Method::Chamfer(Neighborhood::Four),
            DistanceKind::Euclidean | DistanceKind::EuclideanSqr => Method::Exact,
            DistanceKind::EightSED | DistanceKind::EightSEDSqr => Method::Sed(Neighborhood::Eight),
            DistanceKind::FourSED | DistanceKind::FourSEDSqr => Method::Sed(Neighborhood::Four),
        }
    }

    /// True when the output holds squared Euclidean distances.
    pub fn is_squared(self) -> bool {
        matches!(
            self,
            DistanceKind::EuclideanSqr | DistanceKind::EightSEDSqr | DistanceKind::FourSEDSqr
        )
    }

    /// True for the kinds that need at least one background pixel.
    pub fn requires_background(self) -> bool {
        !matches!(self.method(), Method::Chamfer(_))
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DistanceKind::EightNeighborhood => "EightNeighborhood",
            DistanceKind::FourNeighborhood => "FourNeighborhood",
            DistanceKind::Euclidean => "Euclidean",
            DistanceKind::EuclideanSqr => "EuclideanSqr",
            DistanceKind::EightSED => "EightSED",
            DistanceKind::EightSEDSqr => "EightSEDSqr",
            DistanceKind::FourSED => "FourSED",
            DistanceKind::FourSEDSqr => "FourSEDSqr",
        }
    }
}

impl fmt::Display for DistanceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown distance kind `{token}`")]
pub struct ParseDistanceKindError {
    pub token: String,
}

impl FromStr for DistanceKind {
    type Err = ParseDistanceKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DistanceKind::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| ParseDistanceKindError {
                token: s.to_owned(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_round_trip() {
        for kind in DistanceKind::ALL {
            let parsed: DistanceKind = kind.to_string().parse().expect("parse token");
            assert_eq!(parsed, kind);

            let json = serde_json::to_string(&kind).expect("serialize");
            assert_eq!(json, format!("\"{}\"", kind.as_str()));
            let back: DistanceKind = serde_json::from_str(&json).expect("deserialize");
            assert_eq!(back, kind);
        }
    }

    #[test]
    fn unknown_token_is_rejected() {
        let err = "Manhattan".parse::<DistanceKind>().unwrap_err();
        assert_eq!(err.token, "Manhattan");
        assert!("euclidean".parse::<DistanceKind>().is_err());
    }

    #[test]
    fn methods_and_squares() {
        assert_eq!(DistanceKind::default(), DistanceKind::Euclidean);
        assert_eq!(
            DistanceKind::FourSEDSqr.method(),
            Method::Sed(Neighborhood::Four)
        );
        assert_eq!(DistanceKind::EuclideanSqr.method(), Method::Exact);
        assert_eq!(DistanceKind::ALL.iter().filter(|k| k.is_squared()).count(), 3);
        assert!(!DistanceKind::EightNeighborhood.requires_background());
        assert!(DistanceKind::EightSED.requires_background());
    }
}
