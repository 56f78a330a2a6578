//! Analytic 3D geometry: vectors, points, lines and planes.
//! All computations are done in `f32`, degenerate results are signaled with NaN sentinels
//! (or with the tagged results in `intersection`).

mod vector;
mod point;
mod line;
mod plane;
mod intersection;

pub use vector::GeoVector;
pub use point::Point;
pub use line::Line;
pub use plane::{Plane, PlaneCoefficients};
pub use intersection::{
    Tolerance,
    LineIntersection,
    PlaneIntersection,
};

/// Angle type (alias for f32).
pub type Angle = f32;
