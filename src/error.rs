use std::path::PathBuf;
use thiserror::Error;

/// The main error type for quadcrop operations.
///
/// Every solver error is terminal for a single crop request: there are
/// no partial results and no internal retries. The caller (typically an
/// interactive point-picking front end) decides whether to ask the user
/// for a fresh set of corners.
#[derive(Debug, Error)]
pub enum QuadcropError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse corner points from {path}: {source}")]
    PointsParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to serialize crop report: {0}")]
    ReportSerialize(#[from] serde_json::Error),

    #[error("Unsupported point count: {found} distinct point(s), exactly 4 required (only quadrilateral regions are supported)")]
    UnsupportedPointCount { found: usize },

    #[error("Invalid bias spec '{0}': expected exactly one of 't'/'b' and exactly one of 'l'/'r'")]
    InvalidBiasSpec(String),

    #[error("Corner points do not form a convex quadrilateral")]
    NonConvexRegion,

    #[error("Crop rectangle falls outside the convex hull of the corner points (region too irregular)")]
    BoundsViolation,
}
