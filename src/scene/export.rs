/*!
 * Mesh export of a scene.
 *
 * Each plane is drawn as a square quad centered on its point closest to the origin,
 * and the intersection line as a thin square prism centered on its point closest to the origin.
 */

use crate::geo_3d::*;
use crate::io::stl::{stl_triangle, save_stl};
use crate::scene::{self, Scene};

/// Half side length of a plane quad.
pub const PLANE_HALF_SIZE: f32 = 10.0;
/// Half width of the line prism.
pub const LINE_HALF_WIDTH: f32 = 0.1;
/// Half length of the line prism.
pub const LINE_HALF_LENGTH: f32 = 20.0;

/// Triangulate a plane as a quad of two triangles, facing along the plane normal.
/// Returns nothing for a plane without a usable normal.
pub fn plane_triangles(plane: &Plane) -> Vec<stl_io::Triangle> {
    let normal = plane.get_normal().normalize();
    let center = plane.closest_point_to_origin();
    if normal.has_nan() || center.has_nan() {
        log::warn!("Skipping degenerate plane {}", plane);
        return Vec::new();
    }

    let (left, up) = normal.orthonormal_basis();
    let corner = |u: f32, v: f32| center + left * (u * PLANE_HALF_SIZE) + up * (v * PLANE_HALF_SIZE);
    let p00 = corner(-1.0, -1.0);
    let p10 = corner(1.0, -1.0);
    let p11 = corner(1.0, 1.0);
    let p01 = corner(-1.0, 1.0);

    vec![
        stl_triangle(&normal, &p00, &p10, &p11),
        stl_triangle(&normal, &p11, &p01, &p00),
    ]
}

/// Triangulate a line as the four sides of a square prism (no caps).
/// Returns nothing for the NaN sentinel line or a zero direction.
pub fn line_triangles(line: &Line) -> Vec<stl_io::Triangle> {
    let forward = line.get_direction().normalize();
    let center = line.closest_point_to_origin();
    if forward.has_nan() || center.has_nan() {
        log::warn!("Skipping degenerate line {}", line);
        return Vec::new();
    }

    let (left, up) = forward.orthonormal_basis();
    // Corners of the cross-section, counter-clockwise around the forward axis
    let offsets = [
        left * LINE_HALF_WIDTH + up * LINE_HALF_WIDTH,
        -left * LINE_HALF_WIDTH + up * LINE_HALF_WIDTH,
        -left * LINE_HALF_WIDTH - up * LINE_HALF_WIDTH,
        left * LINE_HALF_WIDTH - up * LINE_HALF_WIDTH,
    ];
    let bottom = center - forward * LINE_HALF_LENGTH;
    let top = center + forward * LINE_HALF_LENGTH;

    let mut triangles = Vec::with_capacity(8);
    for i in 0..4 {
        let a = offsets[i];
        let b = offsets[(i + 1) % 4];
        let side_normal = (a + b).normalize();

        let (b0, b1) = (bottom + a, bottom + b);
        let (t0, t1) = (top + a, top + b);
        triangles.push(stl_triangle(&side_normal, &b0, &b1, &t1));
        triangles.push(stl_triangle(&side_normal, &b0, &t1, &t0));
    }
    triangles
}

/// Triangulate the whole scene: both planes and their intersection line.
pub fn triangulate(scene: &Scene) -> Vec<stl_io::Triangle> {
    let mut triangles = plane_triangles(scene.plane1());
    triangles.extend(plane_triangles(scene.plane2()));
    triangles.extend(line_triangles(scene.line()));
    triangles
}

/// Triangulate the scene and save it as a STL file.
pub fn export_stl(scene: &Scene, output_path: &str) -> scene::ProcResult<usize> {
    let triangles = triangulate(scene);
    log::info!("Saving {} triangles to {}...", triangles.len(), output_path);
    save_stl(&triangles, output_path)?;
    Ok(triangles.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn to_point(vertex: &stl_io::Vertex) -> Point {
        Point::new(vertex[0], vertex[1], vertex[2])
    }

    fn facet_normal(triangle: &stl_io::Triangle) -> GeoVector {
        let v0 = to_point(&triangle.vertices[0]);
        let v1 = to_point(&triangle.vertices[1]);
        let v2 = to_point(&triangle.vertices[2]);
        (v1 - v0).cross(&(v2 - v0)).normalize()
    }

    #[test]
    fn demo_scene_triangle_count() {
        assert_eq!(triangulate(&Scene::demo()).len(), 2 + 2 + 8);
    }

    #[test]
    fn parallel_planes_have_no_line() {
        let scene = Scene::new(Plane::new(0.0, 0.0, 1.0, 0.0), Plane::new(0.0, 0.0, 1.0, -3.0));
        assert_eq!(triangulate(&scene).len(), 4);
    }

    #[test]
    fn plane_quad_lies_on_plane_and_faces_normal() {
        let plane = Plane::new(2.0, 3.0, 1.0, 3.0);
        let triangles = plane_triangles(&plane);
        assert_eq!(triangles.len(), 2);

        let unit_normal = plane.get_normal().normalize();
        for triangle in triangles.iter() {
            for vertex in triangle.vertices.iter() {
                assert_relative_eq!(plane.distance_to_point(&to_point(vertex)), 0.0, epsilon = 1e-4);
            }
            assert_relative_eq!(facet_normal(triangle).dot(&unit_normal), 1.0, epsilon = 1e-4);
        }
    }

    #[test]
    fn line_prism_surrounds_line() {
        let line = Line::new(GeoVector::new(0.0, 0.0, 2.0), Point::new(1.0, 1.0, 5.0));
        let triangles = line_triangles(&line);
        assert_eq!(triangles.len(), 8);

        for triangle in triangles.iter() {
            // Side normals point away from the axis
            let n = GeoVector::new(triangle.normal[0], triangle.normal[1], triangle.normal[2]);
            assert_relative_eq!(facet_normal(triangle).dot(&n), 1.0, epsilon = 1e-4);
            for vertex in triangle.vertices.iter() {
                let p = to_point(vertex);
                assert_relative_eq!((p.x - 1.0).abs(), LINE_HALF_WIDTH, epsilon = 1e-5);
                assert_relative_eq!((p.y - 1.0).abs(), LINE_HALF_WIDTH, epsilon = 1e-5);
                assert_relative_eq!(p.z.abs(), LINE_HALF_LENGTH, epsilon = 1e-4);
            }
        }
    }

    #[test]
    fn nan_line_is_skipped() {
        assert!(line_triangles(&Line::nan()).is_empty());
    }
}
