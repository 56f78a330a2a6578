mod proc_errors;
mod cfg;
mod camera;
pub mod export;

use std::fmt;
use serde::{Serialize, Deserialize};
use strum::IntoEnumIterator;

use crate::geo_3d::*;

// Re-export errors
pub use proc_errors::{
    SceneError,
    ProcResult,
    err_str,
};
// Re-export cfg handling
pub use cfg::{
    SceneCfg,
    PlaneCfg,
    NormalAndPointCfg,
    LineCfg,
    DirectionAndPointCfg,
    TwoPointsCfg,
    Color,
    SceneColors,
};
pub use camera::{
    OrbitCamera,
    MouseButton,
};

/// Polygon draw mode of the viewer.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[derive(strum::EnumIter, strum::Display)]
#[serde(rename_all = "snake_case")]
pub enum DrawMode {
    #[default]
    #[strum(serialize = "fill")]
    Fill,
    #[strum(serialize = "wireframe")]
    Wireframe,
    #[strum(serialize = "points")]
    Points,
}
impl DrawMode {
    /// Next mode in the cycle fill -> wireframe -> points -> fill.
    pub fn next(&self) -> Self {
        DrawMode::iter()
            .cycle()
            .skip_while(|mode| mode != self)
            .nth(1)
            .unwrap_or_default()
    }
}

/// Scene context: everything the viewer draws, plus the camera.
/// The intersection line is derived from the two planes and is kept up to date
/// by every method that changes the planes or the tolerance.
#[derive(Debug, Clone)]
pub struct Scene {
    plane1: Plane,
    plane2: Plane,
    line: Line,
    test_line: Option<Line>,
    tolerance: Tolerance,
    pub colors: SceneColors,
    pub draw_mode: DrawMode,
    pub camera: OrbitCamera,
}
impl Scene {
    /// Create a new scene from two planes, with default colors and camera.
    pub fn new(plane1: Plane, plane2: Plane) -> Self {
        let mut scene = Scene{
            plane1,
            plane2,
            line: Line::nan(),
            test_line: None,
            tolerance: Tolerance::EXACT,
            colors: SceneColors::default(),
            draw_mode: DrawMode::default(),
            camera: OrbitCamera::default(),
        };
        scene.recompute();
        scene
    }

    /// The demo scene: planes (2, 3, 1, 3) and (-1, 1, 1, 2).
    pub fn demo() -> Self {
        Scene::from_cfg(&SceneCfg::demo())
    }

    /// Build a scene from a (validated) config.
    pub fn from_cfg(cfg: &SceneCfg) -> Self {
        let mut scene = Scene::new(cfg.plane1.to_plane(), cfg.plane2.to_plane());
        scene.test_line = cfg.test_line.as_ref().map(LineCfg::to_line);
        scene.colors = cfg.colors;
        scene.draw_mode = cfg.draw_mode;
        scene.camera = cfg.camera;
        scene.set_tolerance(Tolerance::new(cfg.epsilon));
        scene
    }

    /// Load and validate a scene config file, then build the scene.
    pub fn from_cfg_file(cfg_file: &str) -> ProcResult<Self> {
        log::info!("Loading scene config file: {}...", cfg_file);
        let cfg: SceneCfg = crate::io::read_cfg_file(cfg_file)?;
        cfg.validate()?;
        Ok(Scene::from_cfg(&cfg))
    }

    /// Recompute the intersection line of the two planes.
    pub fn recompute(&mut self) {
        self.line = self.plane1.intersect_plane_within(&self.plane2, self.tolerance);
        if self.line.is_nan() {
            log::debug!("Planes {} and {} do not meet along a single line", self.plane1, self.plane2);
        } else {
            log::debug!("Intersection line: {}", self.line);
        }
    }

    /// Replace both planes and recompute the intersection.
    pub fn set_planes(&mut self, plane1: Plane, plane2: Plane) {
        self.plane1 = plane1;
        self.plane2 = plane2;
        self.recompute();
    }

    /// Replace the tolerance and recompute the intersection.
    pub fn set_tolerance(&mut self, tolerance: Tolerance) {
        self.tolerance = tolerance;
        self.recompute();
    }

    pub fn set_test_line(&mut self, test_line: Option<Line>) {
        self.test_line = test_line;
    }

    /// Switch to the next draw mode.
    pub fn cycle_draw_mode(&mut self) -> DrawMode {
        self.draw_mode = self.draw_mode.next();
        self.draw_mode
    }

    pub fn plane1(&self) -> &Plane {
        &self.plane1
    }

    pub fn plane2(&self) -> &Plane {
        &self.plane2
    }

    /// Intersection line of the two planes (the NaN sentinel if there is none).
    pub fn line(&self) -> &Line {
        &self.line
    }

    pub fn test_line(&self) -> Option<&Line> {
        self.test_line.as_ref()
    }

    pub fn tolerance(&self) -> Tolerance {
        self.tolerance
    }

    /// Summarize the derived geometry of the scene.
    pub fn report(&self) -> SceneReport {
        let test_line = self.test_line.map(|line| TestLineReport{
            line,
            plane1: self.plane1.classify_line(&line, self.tolerance),
            plane2: self.plane2.classify_line(&line, self.tolerance),
        });

        SceneReport{
            plane1: self.plane1,
            plane2: self.plane2,
            is_intersected: self.plane1.is_intersected_by_plane_within(&self.plane2, self.tolerance),
            intersection: self.plane1.classify_plane(&self.plane2, self.tolerance),
            test_line,
            draw_mode: self.draw_mode,
            camera_eye: self.camera.eye_position(),
        }
    }
}

/// Summary of a scene, printed or saved by the `run` command.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SceneReport {
    pub plane1: Plane,
    pub plane2: Plane,
    pub is_intersected: bool,
    pub intersection: PlaneIntersection,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub test_line: Option<TestLineReport>,
    pub draw_mode: DrawMode,
    pub camera_eye: Point,
}
impl fmt::Display for SceneReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.plane1)?;
        writeln!(f, "{}", self.plane2)?;
        writeln!(f, "Is Intersected: {}", if self.is_intersected { "TRUE" } else { "FALSE" })?;
        match self.intersection {
            PlaneIntersection::Line(line) => {
                writeln!(f, "Intersect Line:")?;
                writeln!(f, "{}", line)?;
            },
            other => writeln!(f, "Intersect Line: {}", other)?,
        }
        if let Some(test_line) = self.test_line.as_ref() {
            writeln!(f, "Test {}", test_line.line)?;
            writeln!(f, "- with plane 1: {}", test_line.plane1)?;
            writeln!(f, "- with plane 2: {}", test_line.plane2)?;
        }
        write!(f, "Draw mode: {}, camera at {}", self.draw_mode, self.camera_eye)
    }
}

/// Intersections of the test line with both planes.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct TestLineReport {
    pub line: Line,
    pub plane1: LineIntersection,
    pub plane2: LineIntersection,
}
