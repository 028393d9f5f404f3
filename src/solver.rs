//! Crop-region solving.
//!
//! Turns four user-selected corner points into an integer pixel
//! rectangle in two stages:
//!
//! 1. [`validate_corners`]: confirm the points form a convex
//!    quadrilateral by building their convex hull and requiring every
//!    point to be a hull vertex.
//! 2. [`compute_crop`]: derive the minimal bounding rectangle from the
//!    2nd-extreme sorted coordinates, optionally square it toward the
//!    biased edges, round toward the interior, and re-check the result
//!    against the hull from stage 1.
//!
//! The solver is pure and synchronous: no I/O, no shared state, no
//! hidden randomness. Identical inputs always produce identical output.

use crate::error::QuadcropError;
use crate::geometry::{Bias, ConvexHull, Horizontal, Point, Rect, Vertical};

/// Validates that `points` describe a convex quadrilateral.
///
/// The input is deduplicated by exact coordinate equality; anything
/// other than exactly four distinct points fails with
/// [`QuadcropError::UnsupportedPointCount`] (only quadrilateral regions
/// are supported). The four points may arrive in any order. If any of
/// them is not a vertex of their own convex hull — it lies inside, or
/// on an edge of, the triangle formed by the other three — they do not
/// bound a convex quadrilateral and validation fails with
/// [`QuadcropError::NonConvexRegion`].
///
/// On success the verified hull is returned for reuse by the solver's
/// final containment check, so it is not recomputed.
pub fn validate_corners(points: &[Point]) -> Result<ConvexHull, QuadcropError> {
    let mut distinct: Vec<Point> = Vec::with_capacity(points.len());
    for p in points {
        if !distinct.contains(p) {
            distinct.push(*p);
        }
    }
    if distinct.len() != 4 {
        return Err(QuadcropError::UnsupportedPointCount {
            found: distinct.len(),
        });
    }

    let hull = ConvexHull::of(&distinct);
    if distinct.iter().any(|p| !hull.is_vertex(*p)) {
        return Err(QuadcropError::NonConvexRegion);
    }
    Ok(hull)
}

/// Computes the integer crop rectangle implied by four corner points.
///
/// `bias` is parsed per the [`Bias`] grammar and only matters when
/// `square` is set; it must be well-formed either way. The returned
/// rectangle's [`corners`](Rect::corners) are in clockwise order from
/// the top-left and are guaranteed to lie within the convex hull of the
/// input points.
pub fn compute_crop(
    points: &[Point],
    bias: &str,
    square: bool,
) -> Result<Rect<i64>, QuadcropError> {
    let hull = validate_corners(points)?;
    let bias: Bias = bias.parse()?;
    solve(&hull, bias, square)
}

/// [`compute_crop`] with an already-parsed [`Bias`].
pub fn compute_crop_with(
    points: &[Point],
    bias: Bias,
    square: bool,
) -> Result<Rect<i64>, QuadcropError> {
    let hull = validate_corners(points)?;
    solve(&hull, bias, square)
}

fn solve(hull: &ConvexHull, bias: Bias, square: bool) -> Result<Rect<i64>, QuadcropError> {
    // The hull vertices are exactly the four validated corner points.
    let mut rect = bounding_rect(hull.vertices());
    if square {
        squarify(&mut rect, bias);
    }
    let mut bounds = interior_round(&rect);
    if square {
        snap_square(&mut bounds, bias);
    }

    // Sanity check: feed the rounded corners back into the hull. If the
    // vertex set changes, the minimal-rectangle heuristic broke down on
    // a too-irregular quadrilateral.
    let corners = bounds.corners().map(Point::to_f64);
    if hull.would_grow(&corners) {
        return Err(QuadcropError::BoundsViolation);
    }
    Ok(bounds)
}

/// Minimal bounding rectangle by the 2nd-extreme rule: sort the x and y
/// coordinates independently and span from the 2nd-smallest to the
/// 2nd-largest of each, discarding the single most extreme value on
/// every side.
///
/// This is a heuristic, not a general minimal enclosing rectangle. It
/// holds for convex, roughly rectangular quadrilaterals, where each
/// input point lands on or outside an edge of the result; a highly
/// skewed quadrilateral can defeat it, which the post-rounding hull
/// check reports as [`QuadcropError::BoundsViolation`].
fn bounding_rect(points: &[Point]) -> Rect {
    let mut xs: Vec<f64> = points.iter().map(|p| p.x).collect();
    let mut ys: Vec<f64> = points.iter().map(|p| p.y).collect();
    xs.sort_by(f64::total_cmp);
    ys.sort_by(f64::total_cmp);
    Rect::from_xyxy(xs[1], ys[1], xs[xs.len() - 2], ys[ys.len() - 2])
}

/// Crops the longer dimension of `rect` down to the shorter one,
/// removing pixels from the side the bias does NOT name. Equal
/// dimensions leave the rectangle untouched.
fn squarify(rect: &mut Rect, bias: Bias) {
    let hlen = rect.width();
    let vlen = rect.height();

    if hlen < vlen {
        match bias.vertical {
            Vertical::Top => rect.max.y = rect.min.y + hlen,
            Vertical::Bottom => rect.min.y = rect.max.y - hlen,
        }
    } else if vlen < hlen {
        match bias.horizontal {
            Horizontal::Left => rect.max.x = rect.min.x + vlen,
            Horizontal::Right => rect.min.x = rect.max.x - vlen,
        }
    }
}

/// Rounds every edge toward the rectangle's interior: left and top
/// coordinates round up, right and bottom coordinates round down. The
/// integer rectangle is therefore a subset of the real-valued one and
/// never overshoots the clicked region.
fn interior_round(rect: &Rect) -> Rect<i64> {
    Rect::new(
        Point::new(rect.min.x.ceil() as i64, rect.min.y.ceil() as i64),
        Point::new(rect.max.x.floor() as i64, rect.max.y.floor() as i64),
    )
}

/// Interior rounding can shave one more pixel off one axis than the
/// other when the real-valued square has fractional edges. Re-crop the
/// longer axis, again from the side the bias does not name, so the
/// integer result is an exact square. A no-op for integer-valued input
/// coordinates.
fn snap_square(rect: &mut Rect<i64>, bias: Bias) {
    let excess = rect.width() - rect.height();
    if excess > 0 {
        match bias.horizontal {
            Horizontal::Left => rect.max.x -= excess,
            Horizontal::Right => rect.min.x += excess,
        }
    } else if excess < 0 {
        match bias.vertical {
            Vertical::Top => rect.max.y += excess,
            Vertical::Bottom => rect.min.y -= excess,
        }
    }
}
