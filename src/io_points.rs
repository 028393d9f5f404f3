//! JSON interfaces for the solver's collaborators.
//!
//! The point-picking front end delivers corner points as a plain JSON
//! array of `[x, y]` pairs; the solved crop region goes back out as a
//! [`CropReport`]. This is useful for:
//! - Driving the solver from scripts without linking the library
//! - Capturing a click session once and replaying it while tuning bias
//! - Handing the crop bounds to whatever tool performs the actual crop

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::QuadcropError;
use crate::geometry::{Point, Rect};

/// Reads corner points from a JSON file containing an array of
/// `[x, y]` pairs.
///
/// # Errors
/// Returns an error if the file cannot be read or parsed.
pub fn read_points(path: &Path) -> Result<Vec<Point>, QuadcropError> {
    let file = File::open(path).map_err(QuadcropError::Io)?;
    let reader = BufReader::new(file);

    serde_json::from_reader(reader).map_err(|source| QuadcropError::PointsParse {
        path: path.to_path_buf(),
        source,
    })
}

/// Reads corner points from a JSON string.
///
/// Useful for testing without file I/O.
pub fn points_from_json_str(json: &str) -> Result<Vec<Point>, serde_json::Error> {
    serde_json::from_str(json)
}

/// Reads corner points from a JSON byte slice.
///
/// Useful for fuzzing and non-UTF-8-checked inputs.
pub fn points_from_json_slice(bytes: &[u8]) -> Result<Vec<Point>, serde_json::Error> {
    serde_json::from_slice(bytes)
}

/// A solved crop region in the shape downstream tools want: the corner
/// list (clockwise from the top-left) plus the crop size in pixels.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CropReport {
    /// Corners in clockwise order: top-left, top-right, bottom-right,
    /// bottom-left.
    pub corners: [Point<i64>; 4],
    /// Crop width in pixels.
    pub width: i64,
    /// Crop height in pixels.
    pub height: i64,
}

impl CropReport {
    /// Builds a report from a solved rectangle.
    pub fn new(rect: &Rect<i64>) -> Self {
        Self {
            corners: rect.corners(),
            width: rect.width(),
            height: rect.height(),
        }
    }
}

/// Serializes a crop report to a pretty-printed JSON string.
pub fn report_to_json_string(report: &CropReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}
