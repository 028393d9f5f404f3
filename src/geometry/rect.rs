//! Axis-aligned crop rectangles.

use std::fmt;
use std::ops::Sub;

use super::point::Point;

/// An axis-aligned rectangle stored as its top-left (`min`) and
/// bottom-right (`max`) corners, in image coordinates (y down).
///
/// Storing the two extreme corners makes the axis-aligned invariant
/// structural: [`corners`](Rect::corners) always yields a level top
/// edge and a plumb left edge, so the four derived corner points cannot
/// drift out of alignment.
///
/// Note: This type does NOT enforce that min <= max in the constructor.
/// Interior-biased rounding of a sliver region can legitimately produce
/// an inverted (empty) rectangle; [`is_ordered`](Rect::is_ordered)
/// reports it rather than the constructor rejecting it.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rect<T = f64> {
    pub min: Point<T>,
    pub max: Point<T>,
}

impl<T: Copy> Rect<T> {
    /// Creates a new rectangle from min and max corner points.
    #[inline]
    pub fn new(min: Point<T>, max: Point<T>) -> Self {
        Self { min, max }
    }

    /// Creates a new rectangle from explicit extents.
    #[inline]
    pub fn from_xyxy(xmin: T, ymin: T, xmax: T, ymax: T) -> Self {
        Self {
            min: Point::new(xmin, ymin),
            max: Point::new(xmax, ymax),
        }
    }

    /// Returns the minimum x coordinate (left edge).
    #[inline]
    pub fn xmin(&self) -> T {
        self.min.x
    }

    /// Returns the minimum y coordinate (top edge).
    #[inline]
    pub fn ymin(&self) -> T {
        self.min.y
    }

    /// Returns the maximum x coordinate (right edge).
    #[inline]
    pub fn xmax(&self) -> T {
        self.max.x
    }

    /// Returns the maximum y coordinate (bottom edge).
    #[inline]
    pub fn ymax(&self) -> T {
        self.max.y
    }

    /// Returns the four corner points in clockwise order starting at
    /// the top-left: (top-left, top-right, bottom-right, bottom-left).
    #[inline]
    pub fn corners(&self) -> [Point<T>; 4] {
        [
            Point::new(self.min.x, self.min.y),
            Point::new(self.max.x, self.min.y),
            Point::new(self.max.x, self.max.y),
            Point::new(self.min.x, self.max.y),
        ]
    }
}

impl<T: Copy + Sub<Output = T>> Rect<T> {
    /// Returns the width of the rectangle.
    ///
    /// May be negative if the rectangle is inverted (xmax < xmin).
    #[inline]
    pub fn width(&self) -> T {
        self.max.x - self.min.x
    }

    /// Returns the height of the rectangle.
    ///
    /// May be negative if the rectangle is inverted (ymax < ymin).
    #[inline]
    pub fn height(&self) -> T {
        self.max.y - self.min.y
    }
}

impl<T: Copy + PartialOrd> Rect<T> {
    /// Returns true if the rectangle is properly ordered
    /// (min <= max on both axes).
    #[inline]
    pub fn is_ordered(&self) -> bool {
        self.min.x <= self.max.x && self.min.y <= self.max.y
    }
}

impl Rect<f64> {
    /// Returns true if all coordinates are finite (not NaN or infinite).
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.min.is_finite() && self.max.is_finite()
    }
}

impl<T: fmt::Debug> fmt::Debug for Rect<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rect")
            .field("xmin", &self.min.x)
            .field("ymin", &self.min.y)
            .field("xmax", &self.max.x)
            .field("ymax", &self.max.y)
            .finish()
    }
}
