//! 2D points in image coordinates.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A 2D point in image coordinates: origin at the top-left corner of
/// the image, y increasing downward.
///
/// The scalar type distinguishes the two spaces the solver works in:
/// `Point<f64>` for raw click positions as delivered by a point-picking
/// front end, `Point<i64>` for final integer pixel bounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Point<T = f64> {
    pub x: T,
    pub y: T,
}

impl<T> Point<T> {
    /// Creates a new point from x and y values.
    #[inline]
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

impl Point<f64> {
    /// Returns true if both coordinates are finite (not NaN or infinite).
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Point<i64> {
    /// Widens integer pixel bounds back into the real-valued space,
    /// e.g. for containment checks against a hull of click positions.
    #[inline]
    pub fn to_f64(self) -> Point<f64> {
        Point::new(self.x as f64, self.y as f64)
    }
}

impl<T: fmt::Display> fmt::Display for Point<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

// Points travel as [x, y] pairs on the wire: that is what click-capture
// tools emit and what the original region files contain.
impl<T: Serialize> Serialize for Point<T> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        (&self.x, &self.y).serialize(serializer)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Point<T> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let (x, y) = <(T, T)>::deserialize(deserializer)?;
        Ok(Point::new(x, y))
    }
}
