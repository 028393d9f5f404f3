//! Core geometric types for crop-region solving.
//!
//! All coordinates live in image pixel space: origin at the top-left
//! corner of the image, x increasing rightward, y increasing downward.
//!
//! # Design Principles
//!
//! 1. **Typed values over conventions**: the bias direction is a parsed
//!    [`Bias`] pair, not a string to be re-inspected downstream; the
//!    crop rectangle is a [`Rect`] whose axis-aligned invariant is
//!    structural rather than asserted.
//!
//! 2. **Two scalar flavors**: raw click positions are `Point<f64>`,
//!    final pixel bounds are `Point<i64>`. The type parameter keeps the
//!    two from mixing silently.

mod bias;
mod hull;
mod point;
mod rect;

// Re-export core types for convenient access
pub use bias::{Bias, Horizontal, Vertical};
pub use hull::ConvexHull;
pub use point::Point;
pub use rect::Rect;
