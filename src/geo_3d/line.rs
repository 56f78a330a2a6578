use std::fmt;
use serde::{Serialize, Deserialize};

use crate::geo_3d::{GeoVector, Point, Tolerance};

/// A parametric line in 3D space: `point + t * direction`.
/// The direction does not need to be unit length, and is not validated:
/// a zero direction is a degenerate line that the intersection tests must deal with.
/// The line with a NaN direction and NaN point is the "no solution" sentinel.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct Line {
    direction: GeoVector,
    point: Point,
}
impl Line {
    /// Create a new line from a direction vector and a point on the line.
    pub fn new(direction: GeoVector, point: Point) -> Self {
        Line{direction, point}
    }

    /// Create a new line through two points, starting at `p1` and pointing towards `p2`.
    pub fn from_points(p1: Point, p2: Point) -> Self {
        Line{direction: p2 - p1, point: p1}
    }

    /// Create a new line in the XY plane (z = 0) from a 2D direction and a 2D point.
    pub fn new_2d(direction: [f32; 2], point: [f32; 2]) -> Self {
        Line{
            direction: GeoVector::new(direction[0], direction[1], 0.0),
            point: Point::new(point[0], point[1], 0.0),
        }
    }

    /// Create the NaN sentinel line.
    pub fn nan() -> Self {
        Line{direction: GeoVector::nan(), point: Point::nan()}
    }

    /// Check if the line is the NaN sentinel (or otherwise contains NaN).
    pub fn is_nan(&self) -> bool {
        self.direction.has_nan() || self.point.has_nan()
    }

    /// Set both the direction and the point.
    pub fn set(&mut self, direction: GeoVector, point: Point) {
        self.direction = direction;
        self.point = point;
    }

    pub fn set_direction(&mut self, direction: GeoVector) {
        self.direction = direction;
    }

    pub fn set_point(&mut self, point: Point) {
        self.point = point;
    }

    pub fn get_direction(&self) -> GeoVector {
        self.direction
    }

    pub fn get_point(&self) -> Point {
        self.point
    }

    /// Get the point at parameter `t`.
    pub fn point_at(&self, t: f32) -> Point {
        self.point + self.direction * t
    }

    /// Get the point of the line closest to the origin.
    pub fn closest_point_to_origin(&self) -> Point {
        let p = self.point.to_vector();
        let t = p.dot(&self.direction) / self.direction.norm_sq();
        self.point - self.direction * t
    }

    /// Find the intersection point with another line.
    /// Returns the NaN sentinel if the lines are parallel.
    /// For skew lines, returns the point on `self` closest to `other`.
    pub fn intersect(&self, other: &Line) -> Point {
        self.intersect_within(other, Tolerance::EXACT)
    }

    /// Same as `intersect`, with a tolerance for the parallel test.
    pub fn intersect_within(&self, other: &Line, tolerance: Tolerance) -> Point {
        let v1 = self.direction;
        let v2 = other.direction;
        let cross = v1.cross(&v2);
        if cross.is_zero_within(tolerance) {
            return Point::nan();
        }

        // p1 + t*v1 = p2 + s*v2  =>  (p2 - p1) x v2 = t * (v1 x v2)
        let w = other.point - self.point;
        let t = w.cross(&v2).dot(&cross) / cross.norm_sq();
        self.point_at(t)
    }

    /// Check if the line meets another line at a single point (not parallel, and coplanar).
    /// Both tests are exact: 3D lines whose coordinates are not exactly representable
    /// (e.g. `0.1`) usually miss coplanarity by rounding, so use `is_intersected_within` for them.
    pub fn is_intersected(&self, other: &Line) -> bool {
        self.is_intersected_within(other, Tolerance::EXACT)
    }

    /// Same as `is_intersected`, with a tolerance for the parallel and coplanar tests.
    pub fn is_intersected_within(&self, other: &Line, tolerance: Tolerance) -> bool {
        let cross = self.direction.cross(&other.direction);
        if cross.is_zero_within(tolerance) {
            return false;
        }
        let w = other.point - self.point;
        tolerance.is_zero(w.dot(&cross))
    }
}
impl Default for Line {
    /// The X axis.
    fn default() -> Self {
        Line{direction: GeoVector::xhat(), point: Point::zero()}
    }
}
impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(3);
        write!(
            f, "Line(point={:.*}, direction={:.*})",
            precision, self.point, precision, self.direction,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn line_2d_intersection() {
        // P1(7,6) - P2(-8,-4) and P1(6,-8) - P2(-2,8)
        let l1 = Line::new_2d([15.0, 10.0], [7.0, 6.0]);
        let l2 = Line::new_2d([8.0, -16.0], [6.0, -8.0]);

        assert!(l1.is_intersected(&l2));
        let p = l1.intersect(&l2);
        assert_relative_eq!(p.x, 1.0, epsilon = 1e-5);
        assert_relative_eq!(p.y, 2.0, epsilon = 1e-5);
        assert_eq!(p.z, 0.0);

        let q = l2.intersect(&l1);
        assert_relative_eq!(q.x, 1.0, epsilon = 1e-5);
        assert_relative_eq!(q.y, 2.0, epsilon = 1e-5);
    }

    #[test]
    fn parallel_lines_do_not_intersect() {
        let l1 = Line::new(GeoVector::new(1.0, 2.0, 3.0), Point::zero());
        let l2 = Line::new(GeoVector::new(-2.0, -4.0, -6.0), Point::new(1.0, 0.0, 0.0));

        assert!(!l1.is_intersected(&l2));
        assert!(l1.intersect(&l2).has_nan());
    }

    #[test]
    fn skew_lines_are_not_intersected() {
        let l1 = Line::new(GeoVector::xhat(), Point::zero());
        let l2 = Line::new(GeoVector::yhat(), Point::new(0.0, 0.0, 1.0));

        assert!(!l1.is_intersected(&l2));
        // Closest point on l1
        assert_eq!(l1.intersect(&l2), Point::zero());
    }

    #[test]
    fn lines_meeting_in_3d() {
        // Both lines pass through (2.5, 4.25, 7), all values exact in binary
        let l1 = Line::new(GeoVector::new(1.0, 2.0, 3.0), Point::new(0.5, 0.25, 1.0));
        let l2 = Line::new(GeoVector::new(2.0, -1.0, 0.5), Point::new(0.5, 5.25, 6.5));

        assert!(l1.is_intersected(&l2));
        assert_eq!(l1.intersect(&l2), Point::new(2.5, 4.25, 7.0));
    }

    #[test]
    fn lines_meeting_in_3d_with_rounding() {
        // Both lines pass through (0.8, 1.6, 2.4), which has no exact binary representation
        let l1 = Line::new(GeoVector::new(1.0, 2.0, 3.0), Point::new(0.1, 0.2, 0.3));
        let l2 = Line::new(GeoVector::new(0.3, -0.1, 0.7), Point::new(0.41, 1.73, 1.49));

        assert!(l1.is_intersected_within(&l2, Tolerance::new(1e-4)));
        let p = l1.intersect_within(&l2, Tolerance::new(1e-4));
        assert_relative_eq!(p.x, 0.8, epsilon = 1e-4);
        assert_relative_eq!(p.y, 1.6, epsilon = 1e-4);
        assert_relative_eq!(p.z, 2.4, epsilon = 1e-4);
    }

    #[test]
    fn nearly_parallel_lines_with_tolerance() {
        let l1 = Line::new(GeoVector::xhat(), Point::zero());
        let l2 = Line::new(GeoVector::new(1.0, 1e-6, 0.0), Point::new(0.0, 1.0, 0.0));

        assert!(l1.is_intersected(&l2));
        assert!(!l1.is_intersected_within(&l2, Tolerance::new(1e-4)));
        assert!(l1.intersect_within(&l2, Tolerance::new(1e-4)).has_nan());
    }

    #[test]
    fn from_points_and_closest_point() {
        let line = Line::from_points(Point::new(-1.0, 1.0, 0.0), Point::new(1.0, 1.0, 0.0));
        assert_eq!(line.get_direction(), GeoVector::new(2.0, 0.0, 0.0));
        assert_eq!(line.get_point(), Point::new(-1.0, 1.0, 0.0));
        assert_eq!(line.point_at(0.5), Point::new(0.0, 1.0, 0.0));
        assert_eq!(line.closest_point_to_origin(), Point::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn setters_replace_parts() {
        let mut line = Line::default();
        line.set_point(Point::new(1.0, 1.0, 1.0));
        line.set_direction(GeoVector::zhat());
        assert_eq!(line, Line::new(GeoVector::zhat(), Point::new(1.0, 1.0, 1.0)));

        line.set(GeoVector::yhat(), Point::zero());
        assert_eq!(line.get_direction(), GeoVector::yhat());
    }

    #[test]
    fn nan_line() {
        assert!(Line::nan().is_nan());
        assert!(!Line::default().is_nan());
    }

    #[test]
    fn display() {
        let line = Line::new(GeoVector::zhat(), Point::new(1.0, 2.0, 3.0));
        assert_eq!(
            format!("{:.1}", line),
            "Line(point=(1.0, 2.0, 3.0), direction=(0.0, 0.0, 1.0))"
        );
    }
}
