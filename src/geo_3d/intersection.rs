use std::fmt;
use serde::{Serialize, Deserialize};

use crate::geo_3d::{Point, Line};

/// Tolerance used for the degeneracy (parallelism) tests.
/// `Tolerance::EXACT` compares against exactly zero.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
#[serde(transparent)]
pub struct Tolerance(f32);
impl Tolerance {
    /// Exact comparison to zero.
    pub const EXACT: Tolerance = Tolerance(0.0);

    /// Create a new tolerance. Negative values are clamped to zero.
    pub fn new(epsilon: f32) -> Self {
        Tolerance(epsilon.max(0.0))
    }

    /// Get the epsilon value.
    pub fn epsilon(&self) -> f32 {
        self.0
    }

    /// Check if a value is zero within the tolerance. NaN is never zero.
    pub fn is_zero(&self, value: f32) -> bool {
        value.abs() <= self.0
    }
}

/// Result of intersecting a line with a plane.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum LineIntersection {
    /// The line crosses the plane at a single point.
    Point(Point),
    /// The line is parallel to the plane and does not touch it.
    Parallel,
    /// The line lies in the plane.
    Contained,
}
impl LineIntersection {
    /// Get the intersection point, if unique.
    pub fn point(&self) -> Option<Point> {
        match self {
            LineIntersection::Point(point) => Some(*point),
            _ => None,
        }
    }
}
impl fmt::Display for LineIntersection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineIntersection::Point(point) => write!(f, "point {}", point),
            LineIntersection::Parallel => write!(f, "none (parallel)"),
            LineIntersection::Contained => write!(f, "infinite (line lies in the plane)"),
        }
    }
}

/// Result of intersecting two planes.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum PlaneIntersection {
    /// The planes meet along a single line.
    Line(Line),
    /// The planes are parallel and disjoint.
    Parallel,
    /// The planes are the same plane.
    Coincident,
}
impl PlaneIntersection {
    /// Get the intersection line, if unique.
    pub fn line(&self) -> Option<Line> {
        match self {
            PlaneIntersection::Line(line) => Some(*line),
            _ => None,
        }
    }
}
impl fmt::Display for PlaneIntersection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlaneIntersection::Line(line) => write!(f, "line {}", line),
            PlaneIntersection::Parallel => write!(f, "none (parallel)"),
            PlaneIntersection::Coincident => write!(f, "infinite (coincident planes)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_tolerance() {
        assert!(Tolerance::EXACT.is_zero(0.0));
        assert!(Tolerance::EXACT.is_zero(-0.0));
        assert!(!Tolerance::EXACT.is_zero(f32::MIN_POSITIVE));
        assert!(!Tolerance::EXACT.is_zero(f32::NAN));
        assert_eq!(Tolerance::default(), Tolerance::EXACT);
    }

    #[test]
    fn negative_epsilon_is_clamped() {
        assert_eq!(Tolerance::new(-1.0), Tolerance::EXACT);
        assert!(Tolerance::new(0.5).is_zero(-0.5));
        assert!(!Tolerance::new(0.5).is_zero(0.51));
    }
}
