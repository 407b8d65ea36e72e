use super::{Point2d, Vector2d};
use cgmath::prelude::*;

/// Linearly interpolates between two points.
///
/// Evaluated as `a + t * (b - a)`, so `t = 0` yields `a` exactly.
#[inline(always)]
pub fn lerp(a: Point2d, b: Point2d, t: f64) -> Point2d {
    a + (b - a) * t
}

/// Clamps a point into the rectangle `[0, size.x] x [0, size.y]`.
pub fn clamp_to_viewport(point: Point2d, size: Vector2d) -> Point2d {
    Point2d::new(point.x.clamp(0.0, size.x), point.y.clamp(0.0, size.y))
}

/// Computes the centroid of a set of points.
pub fn centroid(points: &[Point2d]) -> Option<Point2d> {
    if points.is_empty() {
        return None;
    }
    Some(Point2d::centroid(points))
}

/// Computes the barycentric coordinates `(u, v, w)` of `point` with respect
/// to the triangle `abc`, such that `point = u * a + v * b + w * c`.
///
/// Returns `None` for a degenerate (zero area) triangle.
pub fn barycentric(point: Point2d, [a, b, c]: [Point2d; 3]) -> Option<[f64; 3]> {
    let v0 = b - a;
    let v1 = c - a;
    let v2 = point - a;
    let denom = cross(v0, v1);
    if denom.abs() < f64::EPSILON {
        return None;
    }
    let v = cross(v2, v1) / denom;
    let w = cross(v0, v2) / denom;
    Some([1.0 - v - w, v, w])
}

/// The z component of the cross product of two 2D vectors.
#[inline(always)]
pub fn cross(a: Vector2d, b: Vector2d) -> f64 {
    a.x * b.y - a.y * b.x
}

#[cfg(test)]
mod test {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    pub fn clamps_into_viewport() {
        let size = Vector2d::new(600.0, 450.0);
        assert_eq!(clamp_to_viewport(Point2d::new(700.0, 50.0), size), Point2d::new(600.0, 50.0));
        assert_eq!(clamp_to_viewport(Point2d::new(-5.0, 500.0), size), Point2d::new(0.0, 450.0));
        assert_eq!(clamp_to_viewport(Point2d::new(10.0, 20.0), size), Point2d::new(10.0, 20.0));
    }

    #[test]
    pub fn barycentric_of_vertices_and_centroid() {
        let tri = [
            Point2d::new(0.0, 0.0),
            Point2d::new(10.0, 0.0),
            Point2d::new(0.0, 10.0),
        ];
        let [u, v, w] = barycentric(tri[1], tri).unwrap();
        assert_approx_eq!(u, 0.0);
        assert_approx_eq!(v, 1.0);
        assert_approx_eq!(w, 0.0);

        let c = centroid(&tri).unwrap();
        for weight in barycentric(c, tri).unwrap() {
            assert_approx_eq!(weight, 1.0 / 3.0);
        }
    }

    #[test]
    pub fn degenerate_triangle_has_no_coordinates() {
        let p = Point2d::new(1.0, 1.0);
        assert!(barycentric(p, [p, p, p]).is_none());
        assert!(centroid(&[]).is_none());
    }
}
