use std::ops::{
    Add, AddAssign,
    Sub, SubAssign,
    Mul, MulAssign,
    Div, DivAssign,
};
use std::fmt;
use serde::{Serialize, Deserialize};

use crate::geo_3d::{Point, Tolerance};

/// A vector in 3D space.
/// Used for plane normals and line directions.
/// A vector with every component NaN is the "no solution" sentinel.
#[derive(Debug, Clone, Copy, PartialEq)]
#[derive(Serialize, Deserialize)]
pub struct GeoVector {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}
impl GeoVector {
    /// Create a new vector.
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        GeoVector{x, y, z}
    }

    /// Create a new zero vector.
    pub fn zero() -> Self {
        GeoVector{x: 0.0, y: 0.0, z: 0.0}
    }

    /// Create the NaN sentinel vector.
    pub fn nan() -> Self {
        GeoVector{x: f32::NAN, y: f32::NAN, z: f32::NAN}
    }

    /// Normalize and return a new vector.
    /// The zero vector normalizes to NaN components.
    pub fn normalize(&self) -> Self {
        let mag = self.norm();
        GeoVector{
            x: self.x / mag,
            y: self.y / mag,
            z: self.z / mag,
        }
    }

    /// Normalize in place.
    pub fn normalize_in_place(&mut self) {
        *self /= self.norm();
    }

    /// Get the dot product of two vectors.
    pub fn dot(&self, other: &GeoVector) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Get the cross product of two vectors.
    pub fn cross(&self, other: &GeoVector) -> GeoVector {
        GeoVector{
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    /// Get the magnitude squared of the vector.
    pub fn norm_sq(&self) -> f32 {
        self.x*self.x + self.y*self.y + self.z*self.z
    }

    /// Get the magnitude of the vector.
    pub fn norm(&self) -> f32 {
        self.norm_sq().sqrt()
    }

    /// Check if every component is exactly zero.
    pub fn is_zero(&self) -> bool {
        self.x == 0.0 && self.y == 0.0 && self.z == 0.0
    }

    /// Check if every component is zero within a tolerance.
    pub fn is_zero_within(&self, tolerance: Tolerance) -> bool {
        tolerance.is_zero(self.x) && tolerance.is_zero(self.y) && tolerance.is_zero(self.z)
    }

    /// Get two unit vectors `(left, up)` that, together with `self` normalized as the forward axis,
    /// form a right-handed orthonormal frame.
    /// Up starts as +Y, unless the forward axis lies along Y, in which case it is -Z or +Z.
    pub fn orthonormal_basis(&self) -> (GeoVector, GeoVector) {
        const EPSILON: f32 = 0.00001;
        let forward = self.normalize();

        let up_hint = if forward.x.abs() < EPSILON && forward.z.abs() < EPSILON {
            if forward.y > 0.0 {
                -GeoVector::zhat()
            } else {
                GeoVector::zhat()
            }
        } else {
            GeoVector::yhat()
        };

        let left = up_hint.cross(&forward).normalize();
        let up = forward.cross(&left);
        (left, up)
    }

    /// Construct an xhat vector.
    pub fn xhat() -> Self {
        GeoVector{x: 1.0, y: 0.0, z: 0.0}
    }

    /// Construct a yhat vector.
    pub fn yhat() -> Self {
        GeoVector{x: 0.0, y: 1.0, z: 0.0}
    }

    /// Construct a zhat vector.
    pub fn zhat() -> Self {
        GeoVector{x: 0.0, y: 0.0, z: 1.0}
    }

    /// Check if any of the components are NaN.
    pub fn has_nan(&self) -> bool {
        self.x.is_nan() || self.y.is_nan() || self.z.is_nan()
    }
}
impl Add for GeoVector {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        GeoVector{
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
        }
    }
}
impl AddAssign for GeoVector {
    fn add_assign(&mut self, other: Self) {
        self.x += other.x;
        self.y += other.y;
        self.z += other.z;
    }
}
impl Sub for GeoVector {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        GeoVector{
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
        }
    }
}
impl SubAssign for GeoVector {
    fn sub_assign(&mut self, other: Self) {
        self.x -= other.x;
        self.y -= other.y;
        self.z -= other.z;
    }
}
impl Mul<GeoVector> for f32 {
    type Output = GeoVector;

    fn mul(self, other: GeoVector) -> GeoVector {
        other * self
    }
}
impl Mul<f32> for GeoVector {
    type Output = GeoVector;

    fn mul(self, other: f32) -> GeoVector {
        GeoVector{
            x: self.x * other,
            y: self.y * other,
            z: self.z * other,
        }
    }
}
impl MulAssign<f32> for GeoVector {
    fn mul_assign(&mut self, other: f32) {
        self.x *= other;
        self.y *= other;
        self.z *= other;
    }
}
impl Div<f32> for GeoVector {
    type Output = GeoVector;

    fn div(self, other: f32) -> GeoVector {
        GeoVector{
            x: self.x / other,
            y: self.y / other,
            z: self.z / other,
        }
    }
}
impl DivAssign<f32> for GeoVector {
    fn div_assign(&mut self, other: f32) {
        self.x /= other;
        self.y /= other;
        self.z /= other;
    }
}
impl std::ops::Neg for GeoVector {
    type Output = GeoVector;

    fn neg(self) -> GeoVector {
        GeoVector{
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }
}
impl std::convert::From<Point> for GeoVector {
    fn from(point: Point) -> Self {
        GeoVector{
            x: point.x,
            y: point.y,
            z: point.z,
        }
    }
}
impl fmt::Display for GeoVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(3);
        write!(f, "({:.*}, {:.*}, {:.*})", precision, self.x, precision, self.y, precision, self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn cross_is_orthogonal_to_both_inputs() {
        let a = GeoVector::new(2.0, 3.0, 1.0);
        let b = GeoVector::new(-1.0, 1.0, 1.0);
        let c = a.cross(&b);

        assert_eq!(c, GeoVector::new(2.0, -3.0, 5.0));
        assert_eq!(c.dot(&a), 0.0);
        assert_eq!(c.dot(&b), 0.0);
    }

    #[test]
    fn normalize_gives_unit_length() {
        let mut v = GeoVector::new(3.0, 0.0, 4.0);
        assert_relative_eq!(v.normalize().norm(), 1.0);

        v.normalize_in_place();
        assert_relative_eq!(v.x, 0.6);
        assert_relative_eq!(v.z, 0.8);
    }

    #[test]
    fn normalize_zero_vector_is_nan() {
        assert!(GeoVector::zero().normalize().has_nan());
    }

    #[test]
    fn zero_checks() {
        assert!(GeoVector::zero().is_zero());
        assert!(!GeoVector::new(0.0, 1e-7, 0.0).is_zero());
        assert!(GeoVector::new(0.0, 1e-7, 0.0).is_zero_within(Tolerance::new(1e-6)));
        assert!(!GeoVector::nan().is_zero_within(Tolerance::new(1e-6)));
    }

    #[test]
    fn orthonormal_basis_is_orthonormal() {
        for forward in [
            GeoVector::new(2.0, 3.0, 1.0),
            GeoVector::yhat(),
            -GeoVector::yhat() * 4.0,
            GeoVector::zhat(),
        ] {
            let (left, up) = forward.orthonormal_basis();
            let forward = forward.normalize();
            assert_relative_eq!(left.norm(), 1.0, epsilon = 1e-6);
            assert_relative_eq!(up.norm(), 1.0, epsilon = 1e-6);
            assert_relative_eq!(left.dot(&up), 0.0, epsilon = 1e-6);
            assert_relative_eq!(left.dot(&forward), 0.0, epsilon = 1e-6);
            assert_relative_eq!(up.dot(&forward), 0.0, epsilon = 1e-6);
        }
    }

    #[test]
    fn display_uses_precision() {
        let v = GeoVector::new(1.0, -2.5, 0.625);
        assert_eq!(format!("{}", v), "(1.000, -2.500, 0.625)");
        assert_eq!(format!("{:.1}", v), "(1.0, -2.5, 0.6)");
    }
}
