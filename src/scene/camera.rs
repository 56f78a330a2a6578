use serde::{Serialize, Deserialize};

use crate::geo_3d::{Angle, Point};

/// Mouse buttons that drive the orbit camera.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    /// Rotates the camera around the target.
    Left,
    /// Moves the camera towards or away from the target.
    Right,
}

/// Orbit camera around a target point.
/// Angles are in degrees. The view is built as `rotate_y(angle_y)`, then `rotate_x(angle_x)`,
/// then a translation of `distance` along -Z.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct OrbitCamera {
    pub angle_x: Angle,
    pub angle_y: Angle,
    pub distance: f32,
    pub pan_x: f32,
    pub pan_y: f32,
    #[serde(skip)]
    mouse: MouseState,
}

/// Mouse state between a press and a release.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
struct MouseState {
    left_down: bool,
    right_down: bool,
    x: f32,
    y: f32,
}

impl OrbitCamera {
    pub fn default_angle_x() -> Angle {
        45.0
    }
    pub fn default_angle_y() -> Angle {
        -45.0
    }
    pub fn default_distance() -> f32 {
        25.0
    }
    /// Zoom speed of a right-button drag, in world units per pixel.
    pub fn zoom_per_pixel() -> f32 {
        0.2
    }

    /// Register a button press at a screen position.
    pub fn press(&mut self, button: MouseButton, x: f32, y: f32) {
        self.mouse.x = x;
        self.mouse.y = y;
        match button {
            MouseButton::Left => self.mouse.left_down = true,
            MouseButton::Right => self.mouse.right_down = true,
        }
    }

    /// Register a button release.
    pub fn release(&mut self, button: MouseButton) {
        match button {
            MouseButton::Left => self.mouse.left_down = false,
            MouseButton::Right => self.mouse.right_down = false,
        }
    }

    /// Register a mouse move to a screen position.
    /// Left drag orbits, right drag zooms. Does nothing without a pressed button.
    pub fn drag(&mut self, x: f32, y: f32) {
        if self.mouse.left_down {
            self.angle_y += x - self.mouse.x;
            self.angle_x += y - self.mouse.y;
            self.mouse.x = x;
            self.mouse.y = y;
        }
        if self.mouse.right_down {
            self.distance -= (y - self.mouse.y) * Self::zoom_per_pixel();
            self.mouse.y = y;
        }
    }

    /// Move the target point (arrow keys).
    pub fn pan(&mut self, dx: f32, dy: f32) {
        self.pan_x += dx;
        self.pan_y += dy;
    }

    /// Get the point the camera orbits around.
    pub fn target(&self) -> Point {
        Point::new(self.pan_x, self.pan_y, 0.0)
    }

    /// Get the camera position in world space.
    pub fn eye_position(&self) -> Point {
        let ax = self.angle_x.to_radians();
        let ay = self.angle_y.to_radians();
        let target = self.target();

        Point::new(
            target.x - self.distance * ax.cos() * ay.sin(),
            target.y + self.distance * ax.sin(),
            target.z + self.distance * ax.cos() * ay.cos(),
        )
    }
}
impl Default for OrbitCamera {
    fn default() -> Self {
        OrbitCamera{
            angle_x: OrbitCamera::default_angle_x(),
            angle_y: OrbitCamera::default_angle_y(),
            distance: OrbitCamera::default_distance(),
            pan_x: 0.0,
            pan_y: 0.0,
            mouse: MouseState::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn left_drag_orbits() {
        let mut camera = OrbitCamera::default();
        camera.press(MouseButton::Left, 100.0, 100.0);
        camera.drag(110.0, 95.0);
        assert_eq!(camera.angle_y, -35.0);
        assert_eq!(camera.angle_x, 40.0);

        camera.drag(120.0, 95.0);
        assert_eq!(camera.angle_y, -25.0);

        camera.release(MouseButton::Left);
        camera.drag(500.0, 500.0);
        assert_eq!(camera.angle_y, -25.0);
        assert_eq!(camera.angle_x, 40.0);
    }

    #[test]
    fn right_drag_zooms() {
        let mut camera = OrbitCamera::default();
        camera.press(MouseButton::Right, 0.0, 0.0);
        camera.drag(0.0, 10.0);
        assert_relative_eq!(camera.distance, 23.0);
        camera.drag(0.0, 5.0);
        assert_relative_eq!(camera.distance, 24.0);
        assert_eq!(camera.angle_x, OrbitCamera::default_angle_x());
    }

    #[test]
    fn eye_is_at_orbit_distance() {
        let mut camera = OrbitCamera::default();
        camera.pan(1.0, -2.0);
        let eye = camera.eye_position();

        assert_relative_eq!(eye.distance(&camera.target()), 25.0, epsilon = 1e-4);
        assert_relative_eq!(eye.x, 1.0 + 12.5, epsilon = 1e-4);
        assert_relative_eq!(eye.z, 12.5, epsilon = 1e-4);
        assert!(eye.y > camera.target().y);
    }

    #[test]
    fn camera_cfg_defaults() {
        let camera: OrbitCamera = serde_yaml::from_str("distance: 10.0").unwrap();
        assert_eq!(camera.distance, 10.0);
        assert_eq!(camera.angle_x, 45.0);
        assert_eq!(camera.angle_y, -45.0);
    }
}
