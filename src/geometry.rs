//! 2D geometry helpers in surface pixel space.
//!
//! Angles are in degrees everywhere in this crate. The y axis points down (as
//! on the display), so a positive angle turns clockwise on screen.

use core::f64::consts::PI;

/// A 2D coordinate in surface pixel space.
///
/// Points are plain values: transformations return new points.
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Rotate `point` about `center` by `angle_degrees`.
#[inline]
pub fn rotate_point(point: Point, center: Point, angle_degrees: f64) -> Point {
    let (sin, cos) = (angle_degrees * PI / 180.0).sin_cos();
    let dx = point.x - center.x;
    let dy = point.y - center.y;
    Point {
        x: center.x + dx * cos - dy * sin,
        y: center.y + dx * sin + dy * cos,
    }
}

/// Barycentric coordinate of `point` along the `corner1 -> corner3` direction.
///
/// Returns 0 at `corner1` and `corner2`, 1 at `corner3`, and varies linearly in
/// between. The value is not clamped: points outside the triangle give values
/// below 0 or above 1.
///
/// Collinear corners make the denominator zero and the result is infinite or
/// NaN; callers pass corners of a triangle with positive radius.
pub fn gradient_factor(point: Point, corner1: Point, corner2: Point, corner3: Point) -> f64 {
    let v1 = (corner2.x - corner1.x, corner2.y - corner1.y);
    let v2 = (corner3.x - corner1.x, corner3.y - corner1.y);
    let vp = (point.x - corner1.x, point.y - corner1.y);

    let dot11 = v1.0 * v1.0 + v1.1 * v1.1;
    let dot12 = v1.0 * v2.0 + v1.1 * v2.1;
    let dot1p = v1.0 * vp.0 + v1.1 * vp.1;
    let dot22 = v2.0 * v2.0 + v2.1 * v2.1;
    let dot2p = v2.0 * vp.0 + v2.1 * vp.1;

    let inv_denom = 1.0 / (dot11 * dot22 - dot12 * dot12);
    (dot11 * dot2p - dot12 * dot1p) * inv_denom
}

/// Vertices of an equilateral triangle inscribed in a circle of `radius`.
///
/// Vertex `i` sits at `i * 120 + rotation_degrees` measured from the +x axis,
/// so an unrotated triangle points right.
pub fn equilateral_vertices(center: Point, radius: f64, rotation_degrees: f64) -> [Point; 3] {
    core::array::from_fn(|i| {
        let angle = (i as f64 * 120.0 + rotation_degrees) * PI / 180.0;
        Point {
            x: center.x + radius * angle.cos(),
            y: center.y + radius * angle.sin(),
        }
    })
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn assert_close(a: Point, b: Point, eps: f64) {
        assert!(
            (a.x - b.x).abs() < eps && (a.y - b.y).abs() < eps,
            "points differ: {a:?} vs {b:?}"
        );
    }

    #[test]
    fn test_rotate_zero_is_identity() {
        let center = Point::new(3.5, -7.0);
        for p in [Point::new(0.0, 0.0), Point::new(100.0, 42.5), Point::new(-3.0, 1e6)] {
            assert_eq!(rotate_point(p, center, 0.0), p);
        }
    }

    #[test]
    fn test_rotate_quarter_turn() {
        // y points down, so +90 degrees takes +x to +y
        let r = rotate_point(Point::new(1.0, 0.0), Point::new(0.0, 0.0), 90.0);
        assert_close(r, Point::new(0.0, 1.0), EPS);

        let r = rotate_point(Point::new(12.0, 10.0), Point::new(10.0, 10.0), 180.0);
        assert_close(r, Point::new(8.0, 10.0), EPS);
    }

    #[test]
    fn test_rotate_inverse_restores_point() {
        let center = Point::new(400.0, 300.0);
        let p = Point::new(123.25, 987.5);
        for angle in [0.03, 1.0, 45.0, -270.0, 3601.7, 1.0e5] {
            let back = rotate_point(rotate_point(p, center, angle), center, -angle);
            assert_close(back, p, 1e-6);
        }
    }

    #[test]
    fn test_rotate_preserves_distance() {
        let center = Point::new(-5.0, 2.0);
        let p = Point::new(10.0, 20.0);
        let d0 = (p.x - center.x).hypot(p.y - center.y);
        let r = rotate_point(p, center, 77.7);
        let d1 = (r.x - center.x).hypot(r.y - center.y);
        assert!((d0 - d1).abs() < EPS);
    }

    #[test]
    fn test_gradient_factor_at_corners() {
        let top = Point::new(0.0, -10.0);
        let left = Point::new(-8.66, 5.0);
        let right = Point::new(8.66, 5.0);
        assert!(gradient_factor(top, top, left, right).abs() < EPS);
        assert!(gradient_factor(left, top, left, right).abs() < EPS);
        assert!((gradient_factor(right, top, left, right) - 1.0).abs() < EPS);
    }

    #[test]
    fn test_gradient_factor_centroid_is_one_third() {
        let top = Point::new(0.0, -10.0);
        let left = Point::new(-8.66, 5.0);
        let right = Point::new(8.66, 5.0);
        let centroid = Point::new(0.0, 0.0);
        assert!((gradient_factor(centroid, top, left, right) - 1.0 / 3.0).abs() < EPS);
    }

    #[test]
    fn test_gradient_factor_unclamped_outside() {
        let top = Point::new(0.0, 0.0);
        let left = Point::new(0.0, 10.0);
        let right = Point::new(10.0, 0.0);
        assert!((gradient_factor(Point::new(20.0, 0.0), top, left, right) - 2.0).abs() < EPS);
        assert!((gradient_factor(Point::new(-5.0, 0.0), top, left, right) + 0.5).abs() < EPS);
    }

    #[test]
    fn test_gradient_factor_degenerate_is_not_finite() {
        let a = Point::new(0.0, 0.0);
        let t = gradient_factor(Point::new(1.0, 1.0), a, Point::new(1.0, 0.0), Point::new(2.0, 0.0));
        assert!(!t.is_finite());
    }

    #[test]
    fn test_equilateral_vertices() {
        let v = equilateral_vertices(Point::new(0.0, 0.0), 2.0, 0.0);
        assert_close(v[0], Point::new(2.0, 0.0), EPS);
        assert_close(v[1], Point::new(-1.0, 3f64.sqrt()), EPS);
        assert_close(v[2], Point::new(-1.0, -(3f64.sqrt())), EPS);

        // All sides equal to radius * sqrt(3)
        let side = |a: Point, b: Point| (a.x - b.x).hypot(a.y - b.y);
        for (a, b) in [(0, 1), (1, 2), (2, 0)] {
            assert!((side(v[a], v[b]) - 2.0 * 3f64.sqrt()).abs() < EPS);
        }
    }
}
