use crate::io;
use crate::geo_3d::{Point, GeoVector};

/// Build a STL triangle from a facet normal and three vertices.
pub fn stl_triangle(normal: &GeoVector, v0: &Point, v1: &Point, v2: &Point) -> stl_io::Triangle {
    stl_io::Triangle{
        normal: stl_io::Normal::new([normal.x, normal.y, normal.z]),
        vertices: [
            stl_io::Vertex::new([v0.x, v0.y, v0.z]),
            stl_io::Vertex::new([v1.x, v1.y, v1.z]),
            stl_io::Vertex::new([v2.x, v2.y, v2.z]),
        ],
    }
}

/// Save a vector of triangles to a STL file.
/// Uses the external `stl_io` crate.
pub fn save_stl(triangles: &[stl_io::Triangle], output_path: &str) -> io::IoResult<()> {
    if !output_path.ends_with(".stl") {
        return Err(io::IoError{
            file: Some(output_path.to_string()),
            cause: io::IoErrorType::StringOnly("Mesh output path must end with .stl".to_string()),
        });
    }
    let mut f = io::create(output_path)?;
    match stl_io::write_stl(&mut f, triangles.iter())
    {
        Ok(_) => (),
        Err(error) => {
            return Err(io::IoError{file: Some(output_path.to_string()), cause: io::IoErrorType::File(error)});
        },
    };
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn saved_stl_can_be_read_back() {
        let path = std::env::temp_dir()
            .join(format!("planesect_stl_{}.stl", std::process::id()))
            .to_string_lossy()
            .to_string();

        let triangle = stl_triangle(
            &GeoVector::zhat(),
            &Point::new(0.0, 0.0, 0.0),
            &Point::new(1.0, 0.0, 0.0),
            &Point::new(0.0, 1.0, 0.0),
        );
        save_stl(&[triangle], &path).unwrap();

        let mut file = std::fs::File::open(&path).unwrap();
        let mesh = stl_io::read_stl(&mut file).unwrap();
        assert_eq!(mesh.faces.len(), 1);
        assert_eq!(mesh.vertices.len(), 3);
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn wrong_extension_is_rejected() {
        let error = save_stl(&[], "mesh.obj").unwrap_err();
        assert!(matches!(error.cause, io::IoErrorType::StringOnly(_)));
    }
}
