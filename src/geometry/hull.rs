//! Convex hulls over corner-point sets.
//!
//! The hull serves two jobs in the crop pipeline: confirming that four
//! clicked corners actually form a convex quadrilateral (every input
//! point must be a hull vertex), and sanity-checking the solved
//! rectangle afterwards (re-adding its corners must not change the
//! vertex set). Both reduce to hull construction, so the structure is
//! built once and reused.

use super::point::Point;

/// Numerical tolerance for geometric predicates (membership,
/// collinearity). Scale-agnostic; callers should avoid extreme
/// coordinate scalings.
const EPS: f64 = 1e-9;

/// Tolerance below which two input points collapse into one vertex.
const DEDUP_EPS: f64 = 1e-12;

/// The convex hull of a set of 2D points.
///
/// Vertices are stored in a canonical cyclic order: counterclockwise in
/// the mathematical orientation, starting from the lexicographically
/// smallest point. In image coordinates (y down) that order reads
/// clockwise on screen. Collinear points are not vertices; inputs
/// closer together than [`DEDUP_EPS`] collapse into a single vertex.
#[derive(Clone, Debug, PartialEq)]
pub struct ConvexHull {
    verts: Vec<Point<f64>>,
}

impl ConvexHull {
    /// Builds the convex hull via Andrew's monotone chain.
    ///
    /// Degenerate inputs (fewer than three distinct points, or all
    /// collinear) yield a hull with fewer than three vertices.
    pub fn of(points: &[Point<f64>]) -> Self {
        let mut pts: Vec<Point<f64>> = points.to_vec();
        pts.sort_by(|a, b| a.x.total_cmp(&b.x).then_with(|| a.y.total_cmp(&b.y)));
        pts.dedup_by(|a, b| near(*a, *b, DEDUP_EPS));
        if pts.len() < 3 {
            return Self { verts: pts };
        }

        let mut lower: Vec<Point<f64>> = Vec::with_capacity(pts.len());
        for &p in &pts {
            while lower.len() >= 2 && cross(lower[lower.len() - 2], lower[lower.len() - 1], p) <= 0.0
            {
                lower.pop();
            }
            lower.push(p);
        }
        let mut upper: Vec<Point<f64>> = Vec::with_capacity(pts.len());
        for &p in pts.iter().rev() {
            while upper.len() >= 2 && cross(upper[upper.len() - 2], upper[upper.len() - 1], p) <= 0.0
            {
                upper.pop();
            }
            upper.push(p);
        }

        // Last point of each chain is the first point of the other.
        lower.pop();
        upper.pop();
        let mut verts = lower;
        verts.extend(upper);
        Self { verts }
    }

    /// The hull vertices in canonical cyclic order.
    #[inline]
    pub fn vertices(&self) -> &[Point<f64>] {
        &self.verts
    }

    /// Number of hull vertices.
    #[inline]
    pub fn len(&self) -> usize {
        self.verts.len()
    }

    /// Returns true if the hull has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.verts.is_empty()
    }

    /// Returns true if `p` is one of the hull vertices.
    ///
    /// Exact comparison: input points are stored verbatim, so a caller
    /// holding one of the original coordinate pairs can test membership
    /// without a tolerance.
    #[inline]
    pub fn is_vertex(&self, p: Point<f64>) -> bool {
        self.verts.contains(&p)
    }

    /// Returns true if `p` lies inside the hull or on its boundary
    /// (within [`EPS`]).
    pub fn contains(&self, p: Point<f64>) -> bool {
        match self.verts.len() {
            0 => false,
            1 => near(self.verts[0], p, EPS),
            2 => on_segment(self.verts[0], self.verts[1], p),
            n => (0..n).all(|i| cross(self.verts[i], self.verts[(i + 1) % n], p) >= -EPS),
        }
    }

    /// Returns true if adding `extra` to the underlying point set would
    /// change the hull's vertex set, i.e. some extra point lies outside
    /// the current hull.
    ///
    /// Extra points on an edge or coincident with a vertex do not count
    /// as growth: collinear points are never vertices and duplicates
    /// collapse. Recomputation from identical coordinates is
    /// deterministic, so the vertex lists compare exactly.
    pub fn would_grow(&self, extra: &[Point<f64>]) -> bool {
        let mut combined = self.verts.clone();
        combined.extend_from_slice(extra);
        ConvexHull::of(&combined).verts != self.verts
    }
}

/// Twice the signed area of triangle (a, b, c); positive when c lies
/// counterclockwise of the directed edge a -> b.
#[inline]
fn cross(a: Point<f64>, b: Point<f64>, c: Point<f64>) -> f64 {
    (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x)
}

#[inline]
fn near(a: Point<f64>, b: Point<f64>, eps: f64) -> bool {
    (a.x - b.x).hypot(a.y - b.y) < eps
}

fn on_segment(a: Point<f64>, b: Point<f64>, p: Point<f64>) -> bool {
    cross(a, b, p).abs() <= EPS
        && p.x >= a.x.min(b.x) - EPS
        && p.x <= a.x.max(b.x) + EPS
        && p.y >= a.y.min(b.y) - EPS
        && p.y <= a.y.max(b.y) + EPS
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Vec<Point<f64>> {
        vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 5.0),
            Point::new(0.0, 5.0),
        ]
    }

    #[test]
    fn test_hull_of_rectangle_keeps_all_corners() {
        let hull = ConvexHull::of(&square());
        assert_eq!(hull.len(), 4);
        for p in square() {
            assert!(hull.is_vertex(p));
        }
    }

    #[test]
    fn test_interior_point_is_not_a_vertex() {
        let mut pts = square();
        pts.push(Point::new(5.0, 2.0));
        let hull = ConvexHull::of(&pts);
        assert_eq!(hull.len(), 4);
        assert!(!hull.is_vertex(Point::new(5.0, 2.0)));
    }

    #[test]
    fn test_collinear_point_is_not_a_vertex() {
        let mut pts = square();
        pts.push(Point::new(5.0, 0.0));
        let hull = ConvexHull::of(&pts);
        assert_eq!(hull.len(), 4);
        assert!(!hull.is_vertex(Point::new(5.0, 0.0)));
    }

    #[test]
    fn test_near_duplicates_collapse() {
        let mut pts = square();
        pts.push(Point::new(0.0, 5e-13));
        let hull = ConvexHull::of(&pts);
        assert_eq!(hull.len(), 4);
    }

    #[test]
    fn test_contains_interior_boundary_exterior() {
        let hull = ConvexHull::of(&square());
        assert!(hull.contains(Point::new(5.0, 2.0)));
        assert!(hull.contains(Point::new(0.0, 0.0)));
        assert!(hull.contains(Point::new(5.0, 5.0)));
        assert!(!hull.contains(Point::new(11.0, 2.0)));
        assert!(!hull.contains(Point::new(5.0, -0.5)));
    }

    #[test]
    fn test_would_grow_only_for_outside_points() {
        let hull = ConvexHull::of(&square());
        assert!(!hull.would_grow(&[Point::new(5.0, 2.0)]));
        assert!(!hull.would_grow(&[Point::new(5.0, 0.0)]));
        assert!(!hull.would_grow(&[Point::new(10.0, 5.0)]));
        assert!(hull.would_grow(&[Point::new(5.0, 6.0)]));
    }

    #[test]
    fn test_degenerate_hulls() {
        assert!(ConvexHull::of(&[]).is_empty());

        let hull = ConvexHull::of(&[Point::new(1.0, 1.0)]);
        assert_eq!(hull.len(), 1);
        assert!(hull.contains(Point::new(1.0, 1.0)));

        let collinear = ConvexHull::of(&[
            Point::new(0.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(2.0, 2.0),
        ]);
        assert_eq!(collinear.len(), 2);
        assert!(collinear.contains(Point::new(1.5, 1.5)));
        assert!(!collinear.contains(Point::new(1.0, 2.0)));
    }
}
