use std::fmt;
use serde::{Serialize, Deserialize};

use crate::geo_3d::{
    GeoVector,
    Point,
    Line,
    Tolerance,
    LineIntersection,
    PlaneIntersection,
};

/// A plane in 3D space: `a*x + b*y + c*z + d = 0`.
/// The normal `(a, b, c)` does not need to be unit length.
///
/// The length of the normal and the signed distance from the origin (`-d / |normal|`)
/// are cached. The fields are private so that every change goes through `set`,
/// `set_normal_and_point` or `normalize`, which keep the cached values in sync.
///
/// A zero normal is not guarded against: the cached values become NaN or infinite.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
#[serde(from = "PlaneCoefficients", into = "PlaneCoefficients")]
pub struct Plane {
    normal: GeoVector,
    d: f32,
    normal_length: f32,
    distance: f32,
}

/// The four raw coefficients of a plane equation.
/// Used as the (de)serialized form of a `Plane`.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct PlaneCoefficients {
    pub a: f32,
    pub b: f32,
    pub c: f32,
    pub d: f32,
}

impl Plane {
    /// Create a new plane from the coefficients of `a*x + b*y + c*z + d = 0`.
    pub fn new(a: f32, b: f32, c: f32, d: f32) -> Self {
        let mut plane = Plane::default();
        plane.set(a, b, c, d);
        plane
    }

    /// Create a new plane from a normal vector and a point on the plane.
    pub fn from_normal_and_point(normal: GeoVector, point: Point) -> Self {
        let mut plane = Plane::default();
        plane.set_normal_and_point(normal, point);
        plane
    }

    /// Set the plane from its four coefficients.
    pub fn set(&mut self, a: f32, b: f32, c: f32, d: f32) {
        self.normal = GeoVector::new(a, b, c);
        self.d = d;
        self.normal_length = (a*a + b*b + c*c).sqrt();
        self.distance = -d / self.normal_length;
    }

    /// Set the plane from a normal vector (any non-zero length) and a point on the plane.
    pub fn set_normal_and_point(&mut self, normal: GeoVector, point: Point) {
        self.normal = normal;
        self.normal_length = normal.norm();
        self.d = -normal.dot(&point.to_vector());
        self.distance = -self.d / self.normal_length;
    }

    /// Rescale the coefficients so that the normal is unit length.
    /// Afterwards `normal_length == 1` and `distance == -d`.
    pub fn normalize(&mut self) {
        let length_inv = 1.0 / self.normal_length;
        self.normal *= length_inv;
        self.d *= length_inv;
        self.normal_length = 1.0;
        self.distance = -self.d;
    }

    /// Get the normal vector `(a, b, c)`, as stored (not necessarily unit length).
    pub fn get_normal(&self) -> GeoVector {
        self.normal
    }

    /// Get the `d` coefficient.
    pub fn get_d(&self) -> f32 {
        self.d
    }

    /// Get the length of the normal vector.
    pub fn get_normal_length(&self) -> f32 {
        self.normal_length
    }

    /// Get the signed distance from the origin to the plane, along the normal.
    /// For the distance from an arbitrary point, see `distance_to_point`.
    pub fn get_distance(&self) -> f32 {
        self.distance
    }

    /// Get the raw coefficients.
    pub fn coefficients(&self) -> PlaneCoefficients {
        PlaneCoefficients{
            a: self.normal.x,
            b: self.normal.y,
            c: self.normal.z,
            d: self.d,
        }
    }

    /// Get the signed distance from a point to the plane.
    /// Positive on the side the normal points to, zero on the plane,
    /// independent of the length of the normal.
    /// `get_distance` is this value for the origin, with the opposite sign.
    pub fn distance_to_point(&self, point: &Point) -> f32 {
        (self.normal.dot(&point.to_vector()) + self.d) / self.normal_length
    }

    /// Get the point of the plane closest to the origin.
    pub fn closest_point_to_origin(&self) -> Point {
        (self.normal.normalize() * self.distance).into()
    }

    /// Get the projection of a point onto the plane.
    pub fn project_point(&self, point: &Point) -> Point {
        *point - self.normal * (self.distance_to_point(point) / self.normal_length)
    }

    /// Find the intersection point with a line.
    /// Returns the NaN sentinel point when the line is parallel to the plane,
    /// whether or not the line lies in the plane (see `classify_line`).
    pub fn intersect_line(&self, line: &Line) -> Point {
        self.intersect_line_within(line, Tolerance::EXACT)
    }

    /// Same as `intersect_line`, with a tolerance for the parallel test.
    pub fn intersect_line_within(&self, line: &Line, tolerance: Tolerance) -> Point {
        let p = line.get_point();
        let v = line.get_direction();

        let dot1 = self.normal.dot(&p.to_vector());
        let dot2 = self.normal.dot(&v);

        if tolerance.is_zero(dot2) {
            return Point::nan();
        }

        // a*(x0 + x*t) + b*(y0 + y*t) + c*(z0 + z*t) + d = 0
        let t = -(dot1 + self.d) / dot2;
        p + v * t
    }

    /// Intersect with a line, telling apart a parallel line from a line lying in the plane.
    pub fn classify_line(&self, line: &Line, tolerance: Tolerance) -> LineIntersection {
        let point = self.intersect_line_within(line, tolerance);
        if !point.has_nan() {
            return LineIntersection::Point(point);
        }
        if tolerance.is_zero(self.distance_to_point(&line.get_point())) {
            LineIntersection::Contained
        } else {
            LineIntersection::Parallel
        }
    }

    /// Find the line of intersection with another plane.
    /// Returns the NaN sentinel line when the planes are parallel,
    /// whether or not they coincide (see `classify_plane`).
    pub fn intersect_plane(&self, other: &Plane) -> Line {
        self.intersect_plane_within(other, Tolerance::EXACT)
    }

    /// Same as `intersect_plane`, with a tolerance for the parallel test.
    pub fn intersect_plane_within(&self, other: &Plane, tolerance: Tolerance) -> Line {
        let v = self.normal.cross(&other.normal);

        if v.is_zero_within(tolerance) {
            return Line::nan();
        }

        // The point is the intersection with a third plane through the origin, with normal v:
        // p0 = ((d2 * N1 - d1 * N2) x V) / (V . V)
        let n1 = self.normal * other.d;
        let n2 = other.normal * -self.d;
        let p = (n1 + n2).cross(&v) / v.dot(&v);

        Line::new(v, p.into())
    }

    /// Intersect with another plane, telling apart parallel planes from coincident ones.
    pub fn classify_plane(&self, other: &Plane, tolerance: Tolerance) -> PlaneIntersection {
        let line = self.intersect_plane_within(other, tolerance);
        if !line.is_nan() {
            return PlaneIntersection::Line(line);
        }

        // With N2 = k * N1, the planes coincide when d2 = k * d1, i.e. d2*N1 - d1*N2 = 0.
        // The raw coefficients keep this exact for scaled copies; the tolerance is scaled
        // by |N1|*|N2| so it applies as it would to normalized planes.
        let offset = self.normal * other.d - other.normal * self.d;
        let scaled = Tolerance::new(tolerance.epsilon() * self.normal_length * other.normal_length);
        if offset.is_zero_within(scaled) {
            PlaneIntersection::Coincident
        } else {
            PlaneIntersection::Parallel
        }
    }

    /// Check if a line crosses the plane at a single point.
    pub fn is_intersected_by_line(&self, line: &Line) -> bool {
        self.is_intersected_by_line_within(line, Tolerance::EXACT)
    }

    /// Same as `is_intersected_by_line`, with a tolerance for the parallel test.
    pub fn is_intersected_by_line_within(&self, line: &Line, tolerance: Tolerance) -> bool {
        !tolerance.is_zero(self.normal.dot(&line.get_direction()))
    }

    /// Check if another plane crosses this plane along a single line.
    pub fn is_intersected_by_plane(&self, other: &Plane) -> bool {
        self.is_intersected_by_plane_within(other, Tolerance::EXACT)
    }

    /// Same as `is_intersected_by_plane`, with a tolerance for the parallel test.
    pub fn is_intersected_by_plane_within(&self, other: &Plane, tolerance: Tolerance) -> bool {
        !self.normal.cross(&other.normal).is_zero_within(tolerance)
    }
}
impl Default for Plane {
    /// The plane z = 0.
    fn default() -> Self {
        Plane{
            normal: GeoVector::zhat(),
            d: 0.0,
            normal_length: 1.0,
            distance: 0.0,
        }
    }
}
impl From<PlaneCoefficients> for Plane {
    fn from(coefficients: PlaneCoefficients) -> Self {
        Plane::new(coefficients.a, coefficients.b, coefficients.c, coefficients.d)
    }
}
impl From<Plane> for PlaneCoefficients {
    fn from(plane: Plane) -> Self {
        plane.coefficients()
    }
}
impl fmt::Display for Plane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Plane({}, {}, {}, {})", self.normal.x, self.normal.y, self.normal.z, self.d)
    }
}
