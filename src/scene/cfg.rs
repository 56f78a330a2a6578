use serde::{Serialize, Deserialize};

use crate::geo_3d::{
    GeoVector,
    Point,
    Line,
    Plane,
    PlaneCoefficients,
};
use crate::scene::{
    self,
    OrbitCamera,
    DrawMode,
};

/// Scene config, as read from a config file.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(deny_unknown_fields)]
pub struct SceneCfg {
    /// Tolerance for the parallel tests. Zero means exact comparisons.
    #[serde(default = "SceneCfg::default_epsilon", alias = "eps")]
    pub epsilon: f32,

    /// Polygon draw mode.
    #[serde(default)]
    pub draw_mode: DrawMode,

    /// First plane.
    #[serde(alias = "p1")]
    pub plane1: PlaneCfg,

    /// Second plane.
    #[serde(alias = "p2")]
    pub plane2: PlaneCfg,

    /// Optional line tested against both planes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub test_line: Option<LineCfg>,

    /// Display colors.
    #[serde(default)]
    pub colors: SceneColors,

    /// Initial camera.
    #[serde(default)]
    pub camera: OrbitCamera,
}
impl SceneCfg {
    pub fn default_epsilon() -> f32 {
        0.0
    }

    /// Config of the demo scene.
    pub fn demo() -> Self {
        SceneCfg{
            epsilon: SceneCfg::default_epsilon(),
            draw_mode: DrawMode::default(),
            plane1: PlaneCfg::Coefficients(PlaneCoefficients{a: 2.0, b: 3.0, c: 1.0, d: 3.0}),
            plane2: PlaneCfg::Coefficients(PlaneCoefficients{a: -1.0, b: 1.0, c: 1.0, d: 2.0}),
            test_line: None,
            colors: SceneColors::default(),
            camera: OrbitCamera::default(),
        }
    }

    /// Check the values that the geometry does not guard against.
    pub fn validate(&self) -> scene::ProcResult<()> {
        if !self.epsilon.is_finite() || self.epsilon < 0.0 {
            scene::err_str(&format!("Epsilon must be a finite non-negative number, got {}", self.epsilon))?;
        }
        self.plane1.validate("plane1")?;
        self.plane2.validate("plane2")?;
        if let Some(test_line) = self.test_line.as_ref() {
            test_line.validate("test_line")?;
        }
        Ok(())
    }
}

/// A plane, either from its coefficients or from a normal and a point.
#[derive(Debug, Serialize, Deserialize, Clone, Copy)]
#[serde(untagged)]
pub enum PlaneCfg {
    /// `a*x + b*y + c*z + d = 0`
    Coefficients(PlaneCoefficients),
    /// Normal vector and a point on the plane.
    NormalAndPoint(NormalAndPointCfg),
}
impl PlaneCfg {
    pub fn to_plane(&self) -> Plane {
        match self {
            PlaneCfg::Coefficients(coefficients) => Plane::from(*coefficients),
            PlaneCfg::NormalAndPoint(cfg) => Plane::from_normal_and_point(cfg.normal, cfg.point),
        }
    }

    fn validate(&self, name: &str) -> scene::ProcResult<()> {
        let (normal, values) = match self {
            PlaneCfg::Coefficients(c) => (GeoVector::new(c.a, c.b, c.c), vec![c.a, c.b, c.c, c.d]),
            PlaneCfg::NormalAndPoint(cfg) => (
                cfg.normal,
                vec![cfg.normal.x, cfg.normal.y, cfg.normal.z, cfg.point.x, cfg.point.y, cfg.point.z],
            ),
        };
        if values.iter().any(|v| !v.is_finite()) {
            scene::err_str(&format!("Plane \"{}\" has non-finite values", name))?;
        }
        if normal.is_zero() {
            scene::err_str(&format!("Plane \"{}\" has a zero normal", name))?;
        }
        Ok(())
    }
}

/// Normal vector and point config for a plane.
#[derive(Debug, Serialize, Deserialize, Clone, Copy)]
#[serde(deny_unknown_fields)]
pub struct NormalAndPointCfg {
    pub normal: GeoVector,
    pub point: Point,
}

/// A line, either from a direction and a point or from two points.
#[derive(Debug, Serialize, Deserialize, Clone, Copy)]
#[serde(untagged)]
pub enum LineCfg {
    DirectionAndPoint(DirectionAndPointCfg),
    TwoPoints(TwoPointsCfg),
}
impl LineCfg {
    pub fn to_line(&self) -> Line {
        match self {
            LineCfg::DirectionAndPoint(cfg) => Line::new(cfg.direction, cfg.point),
            LineCfg::TwoPoints(cfg) => Line::from_points(cfg.start, cfg.end),
        }
    }

    fn validate(&self, name: &str) -> scene::ProcResult<()> {
        let values = match self {
            LineCfg::DirectionAndPoint(cfg) => [
                cfg.direction.x, cfg.direction.y, cfg.direction.z,
                cfg.point.x, cfg.point.y, cfg.point.z,
            ],
            LineCfg::TwoPoints(cfg) => [
                cfg.start.x, cfg.start.y, cfg.start.z,
                cfg.end.x, cfg.end.y, cfg.end.z,
            ],
        };
        if values.iter().any(|v| !v.is_finite()) {
            scene::err_str(&format!("Line \"{}\" has non-finite values", name))?;
        }
        Ok(())
    }
}

/// Direction and point config for a line.
#[derive(Debug, Serialize, Deserialize, Clone, Copy)]
#[serde(deny_unknown_fields)]
pub struct DirectionAndPointCfg {
    pub direction: GeoVector,
    pub point: Point,
}

/// Two points config for a line.
#[derive(Debug, Serialize, Deserialize, Clone, Copy)]
#[serde(deny_unknown_fields)]
pub struct TwoPointsCfg {
    pub start: Point,
    pub end: Point,
}

/// RGB color, components in [0, 1].
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}
impl Color {
    pub fn new(r: f32, g: f32, b: f32) -> Self {
        Color{r, g, b}
    }
}

/// Colors of the scene objects.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct SceneColors {
    pub plane1: Color,
    pub plane2: Color,
    pub line: Color,
}
impl Default for SceneColors {
    fn default() -> Self {
        SceneColors{
            plane1: Color::new(0.8, 0.9, 0.8),
            plane2: Color::new(0.8, 0.8, 0.9),
            line: Color::new(1.0, 0.5, 0.0),
        }
    }
}
