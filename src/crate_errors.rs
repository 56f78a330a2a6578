use crate::{
    args,
    io,
    scene,
};

/// Error-type enum for the `planesect` crate.
/// Wraps the errors of the argument, IO and scene modules.
#[derive(Debug)]
pub enum PlanesectError {
    ArgError(args::ArgError),
    IoError(io::IoError),
    SceneError(scene::SceneError),
    StringOnly(String),
}
impl std::fmt::Display for PlanesectError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlanesectError::ArgError(error) => write!(f, "! ARGUMENT ERROR:\n{}", error),
            PlanesectError::IoError(error) => write!(f, "! IO ERROR:\n{}", error),
            PlanesectError::SceneError(error) => write!(f, "! SCENE ERROR:\n{}", error),
            PlanesectError::StringOnly(error) => write!(f, "! PLANESECT ERROR:\n- {}", error),
        }
    }
}
impl From<String> for PlanesectError {
    fn from(error: String) -> Self {
        PlanesectError::StringOnly(error)
    }
}
impl From<args::ArgError> for PlanesectError {
    fn from(error: args::ArgError) -> Self {
        PlanesectError::ArgError(error)
    }
}
impl From<io::IoError> for PlanesectError {
    fn from(error: io::IoError) -> Self {
        PlanesectError::IoError(error)
    }
}
impl From<scene::SceneError> for PlanesectError {
    fn from(error: scene::SceneError) -> Self {
        PlanesectError::SceneError(error)
    }
}

/// Result type for the `planesect` crate.
pub type PlanesectResult<T> = std::result::Result<T, PlanesectError>;

/// Create a `PlanesectResult` with an `Err` from a string.
/// Shorthand to avoid writing `Err(crate::PlanesectError::StringOnly(error_str))`.
pub fn err_str<T>(error_str: &str) -> PlanesectResult<T> {
    Err(PlanesectError::StringOnly(error_str.to_string()))
}
