//! End-to-end solver scenarios against the public API.

use quadcrop::error::QuadcropError;
use quadcrop::geometry::{ConvexHull, Point, Rect};
use quadcrop::solver::{compute_crop, validate_corners};

fn pts(coords: &[(f64, f64)]) -> Vec<Point> {
    coords.iter().map(|&(x, y)| Point::new(x, y)).collect()
}

#[test]
fn rectangle_squared_with_top_left_bias_keeps_top_left() {
    let quad = pts(&[(0.0, 0.0), (10.0, 0.0), (10.0, 5.0), (0.0, 5.0)]);
    let rect = compute_crop(&quad, "tl", true).unwrap();
    assert_eq!(rect, Rect::from_xyxy(0, 0, 5, 5));
    assert_eq!(
        rect.corners(),
        [
            Point::new(0, 0),
            Point::new(5, 0),
            Point::new(5, 5),
            Point::new(0, 5),
        ]
    );
}

#[test]
fn rectangle_squared_with_bottom_right_bias_keeps_bottom_right() {
    let quad = pts(&[(0.0, 0.0), (10.0, 0.0), (10.0, 5.0), (0.0, 5.0)]);
    let rect = compute_crop(&quad, "br", true).unwrap();
    assert_eq!(
        rect.corners(),
        [
            Point::new(5, 0),
            Point::new(10, 0),
            Point::new(10, 5),
            Point::new(5, 5),
        ]
    );
}

#[test]
fn skewed_quad_rounds_toward_the_interior() {
    let quad = pts(&[(1.2, 1.7), (9.3, 1.1), (9.8, 5.6), (0.9, 5.9)]);
    let rect = compute_crop(&quad, "tl", false).unwrap();
    assert_eq!(rect, Rect::from_xyxy(2, 2, 9, 5));
}

#[test]
fn result_lies_within_the_corner_hull() {
    let quad = pts(&[(1.2, 1.7), (9.3, 1.1), (9.8, 5.6), (0.9, 5.9)]);
    let hull = ConvexHull::of(&quad);
    let rect = compute_crop(&quad, "bl", true).unwrap();
    for corner in rect.corners() {
        assert!(hull.contains(corner.to_f64()), "corner {corner} escaped");
    }
}

#[test]
fn input_order_does_not_matter() {
    let ordered = pts(&[(1.2, 1.7), (9.3, 1.1), (9.8, 5.6), (0.9, 5.9)]);
    let shuffled = pts(&[(9.8, 5.6), (1.2, 1.7), (0.9, 5.9), (9.3, 1.1)]);
    assert_eq!(
        compute_crop(&ordered, "tr", true).unwrap(),
        compute_crop(&shuffled, "tr", true).unwrap()
    );
}

#[test]
fn identical_calls_yield_identical_output() {
    let quad = pts(&[(0.3, 0.9), (8.1, 0.2), (8.4, 6.6), (0.1, 6.2)]);
    let first = compute_crop(&quad, "br", true).unwrap();
    let second = compute_crop(&quad, "br", true).unwrap();
    assert_eq!(first, second);
}

#[test]
fn bias_is_inert_on_the_preserved_dimension() {
    // Wider than tall: only the horizontal component acts, so "tl" and
    // "bl" agree, as do "tr" and "br".
    let quad = pts(&[(0.0, 0.0), (10.0, 0.0), (10.0, 5.0), (0.0, 5.0)]);
    assert_eq!(
        compute_crop(&quad, "tl", true).unwrap(),
        compute_crop(&quad, "bl", true).unwrap()
    );
    assert_eq!(
        compute_crop(&quad, "tr", true).unwrap(),
        compute_crop(&quad, "br", true).unwrap()
    );
}

#[test]
fn interior_point_is_rejected() {
    let concave = pts(&[(0.0, 0.0), (10.0, 0.0), (5.0, 10.0), (5.0, 3.0)]);
    assert!(matches!(
        compute_crop(&concave, "tl", false),
        Err(QuadcropError::NonConvexRegion)
    ));
    assert!(matches!(
        validate_corners(&concave),
        Err(QuadcropError::NonConvexRegion)
    ));
}

#[test]
fn duplicate_points_are_rejected() {
    let dup = pts(&[(0.0, 0.0), (10.0, 0.0), (10.0, 5.0), (10.0, 5.0)]);
    assert!(matches!(
        compute_crop(&dup, "tl", false),
        Err(QuadcropError::UnsupportedPointCount { found: 3 })
    ));
}

#[test]
fn malformed_bias_strings_are_rejected() {
    let quad = pts(&[(0.0, 0.0), (10.0, 0.0), (10.0, 5.0), (0.0, 5.0)]);
    for bias in ["xy", "tb", "", "tlr"] {
        assert!(
            matches!(
                compute_crop(&quad, bias, true),
                Err(QuadcropError::InvalidBiasSpec(_))
            ),
            "bias {bias:?} was not rejected"
        );
    }
}

#[test]
fn heavily_skewed_quad_trips_the_hull_check() {
    // A thin parallelogram leaning at 45 degrees: convex, but the
    // 2nd-extreme rectangle pokes out of the hull on two corners.
    let skewed = pts(&[(0.0, 1.0), (1.0, 0.0), (11.0, 10.0), (10.0, 11.0)]);
    assert!(validate_corners(&skewed).is_ok());
    assert!(matches!(
        compute_crop(&skewed, "tl", false),
        Err(QuadcropError::BoundsViolation)
    ));
}
