use std::ops::{
    Add, AddAssign,
    Sub, SubAssign,
};
use std::fmt;
use serde::{Serialize, Deserialize};

use crate::geo_3d::GeoVector;

/// A point in 3D space.
/// Contains the coordinates of the point.
/// Has basic math support for adding and subtracting vectors.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}
impl Point {
    /// Create a new point.
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Point{x, y, z}
    }

    /// Create a new zero point.
    pub fn zero() -> Self {
        Point{x: 0.0, y: 0.0, z: 0.0}
    }

    /// Create the NaN sentinel point, returned when an intersection has no unique solution.
    pub fn nan() -> Self {
        Point{x: f32::NAN, y: f32::NAN, z: f32::NAN}
    }

    /// Get the distance between two points.
    pub fn distance(&self, other: &Point) -> f32 {
        (*self - *other).norm()
    }

    /// Get the position vector of the point (from the origin).
    pub fn to_vector(&self) -> GeoVector {
        (*self).into()
    }

    /// Check if any of the components are NaN.
    pub fn has_nan(&self) -> bool {
        self.x.is_nan() || self.y.is_nan() || self.z.is_nan()
    }
}
impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(3);
        write!(f, "({:.*}, {:.*}, {:.*})", precision, self.x, precision, self.y, precision, self.z)
    }
}
impl Add<GeoVector> for Point {
    type Output = Self;

    fn add(self, rhs: GeoVector) -> Self {
        Point{
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z,
        }
    }
}
impl AddAssign<GeoVector> for Point {
    fn add_assign(&mut self, rhs: GeoVector) {
        self.x += rhs.x;
        self.y += rhs.y;
        self.z += rhs.z;
    }
}
impl Sub<GeoVector> for Point {
    type Output = Self;

    fn sub(self, rhs: GeoVector) -> Self {
        Point{
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z,
        }
    }
}
impl SubAssign<GeoVector> for Point {
    fn sub_assign(&mut self, rhs: GeoVector) {
        self.x -= rhs.x;
        self.y -= rhs.y;
        self.z -= rhs.z;
    }
}
impl Sub<Point> for Point {
    type Output = GeoVector;

    fn sub(self, rhs: Self) -> GeoVector {
        GeoVector{
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z,
        }
    }
}
impl std::convert::From<GeoVector> for Point {
    fn from(vector: GeoVector) -> Self {
        Point{
            x: vector.x,
            y: vector.y,
            z: vector.z,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_vector_arithmetic() {
        let p = Point::new(1.0, 2.0, 3.0);
        let q = Point::new(4.0, 6.0, 3.0);

        assert_eq!(q - p, GeoVector::new(3.0, 4.0, 0.0));
        assert_eq!(p + (q - p), q);
        assert_eq!(p.distance(&q), 5.0);

        let mut r = p;
        r += GeoVector::xhat();
        r -= GeoVector::zhat();
        assert_eq!(r, Point::new(2.0, 2.0, 2.0));
    }

    #[test]
    fn nan_sentinel() {
        assert!(Point::nan().has_nan());
        assert!(!Point::zero().has_nan());
        assert_ne!(Point::nan(), Point::nan());
    }
}
