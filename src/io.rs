use std::io::Write;
pub mod stl;

#[derive(Debug)]
pub enum IoErrorType {
    File(std::io::Error),
    SerdeJson(serde_json::Error),
    SerdeYaml(serde_yaml::Error),
    TomlSer(toml::ser::Error),
    TomlDe(toml::de::Error),
    StringOnly(String),
}
impl std::fmt::Display for IoErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IoErrorType::File(error) => write!(f, "- File IO Error:\n{}", error),
            IoErrorType::SerdeJson(error) => write!(f, "- JSON Serialization/Deserialization Error:\n{}", error),
            IoErrorType::SerdeYaml(error) => write!(f, "- YAML Serialization/Deserialization Error:\n{}", error),
            IoErrorType::TomlSer(error) => write!(f, "- TOML Serialization Error:\n{}", error),
            IoErrorType::TomlDe(error) => write!(f, "- TOML Deserialization Error:\n{}", error),
            IoErrorType::StringOnly(error) => write!(f, "- {}", error),
        }
    }
}

/// Custom verbose IO error struct.
#[derive(Debug)]
pub struct IoError {
    /// Filepath facing an error.
    pub file: Option<String>,
    /// Error cause.
    pub cause: IoErrorType,
}
impl IoError {
    fn new(path: &str, cause: IoErrorType) -> Self {
        IoError{file: Some(path.to_string()), cause}
    }
}
impl std::fmt::Display for IoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.file {
            Some(ref file) => write!(f, "- Error with file: {}\n{}", file, self.cause),
            None => write!(f, "{}", self.cause),
        }
    }
}

pub type IoResult<T> = std::result::Result<T, IoError>;

/// Supported structured file formats, chosen by extension.
const SUPPORTED_FILETYPES: [&str; 4] = ["json", "toml", "yaml", "yml"];

/// Open a file with verbose errors.
pub fn open(path: &str) -> IoResult<std::fs::File> {
    std::fs::File::open(path).map_err(|error| IoError::new(path, IoErrorType::File(error)))
}

/// Create a file with verbose errors.
pub fn create(path: &str) -> IoResult<std::fs::File> {
    std::fs::File::create(path).map_err(|error| IoError::new(path, IoErrorType::File(error)))
}

/// Check that the directory an output file would be written to exists, without touching the file.
pub fn check_output_dir(path: &str) -> IoResult<()> {
    match std::path::Path::new(path).parent() {
        Some(dir) if !dir.as_os_str().is_empty() && !dir.is_dir() => Err(IoError::new(
            path,
            IoErrorType::StringOnly(format!("Output directory does not exist: {}", dir.display())),
        )),
        _ => Ok(()),
    }
}

/// Check if two paths name the same existing file, however they are spelled.
pub fn is_same_file(path1: &str, path2: &str) -> bool {
    match (std::fs::canonicalize(path1), std::fs::canonicalize(path2)) {
        (Ok(file1), Ok(file2)) => file1 == file2,
        _ => path1 == path2,
    }
}

/// Read from string with verbose errors
pub fn read_to_string(path: &str) -> IoResult<String> {
    std::fs::read_to_string(path).map_err(|error| IoError::new(path, IoErrorType::File(error)))
}

/// Write string to file with verbose errors.
pub fn write_to_file(path: &str, buffer: &str) -> IoResult<()> {
    let mut f = create(path)?;
    f.write_all(buffer.as_bytes()).map_err(|error| IoError::new(path, IoErrorType::File(error)))
}

/// Error for a path whose extension is not a supported structured format.
fn unsupported_filetype<T>(path: &str) -> IoResult<T> {
    let error_string = format!(
        "Unsupported filetype: {}\nSupported filetypes: {:?}",
        path, SUPPORTED_FILETYPES
    );
    Err(IoError::new(path, IoErrorType::StringOnly(error_string)))
}

/// Read in cfg files from the supported filetypes.
pub fn read_cfg_file<T>(path: &str) -> IoResult<T>
where T: serde::de::DeserializeOwned
{
    match path.split('.').last(){
        Some("json") => {
            serde_json::from_reader(open(path)?)
                .map_err(|error| IoError::new(path, IoErrorType::SerdeJson(error)))
        },
        Some("toml") => {
            toml::from_str(&read_to_string(path)?)
                .map_err(|error| IoError::new(path, IoErrorType::TomlDe(error)))
        },
        Some("yaml") | Some("yml") => {
            serde_yaml::from_reader(open(path)?)
                .map_err(|error| IoError::new(path, IoErrorType::SerdeYaml(error)))
        },
        _ => unsupported_filetype(path),
    }
}

/// Write a serializable struct to one of the supported filetypes, chosen by extension.
pub fn write_cfg_file<T>(path: &str, value: &T) -> IoResult<()>
where T: serde::Serialize
{
    let buffer = match path.split('.').last(){
        Some("json") => {
            serde_json::to_string_pretty(value)
                .map_err(|error| IoError::new(path, IoErrorType::SerdeJson(error)))?
        },
        Some("toml") => {
            toml::to_string_pretty(value)
                .map_err(|error| IoError::new(path, IoErrorType::TomlSer(error)))?
        },
        Some("yaml") | Some("yml") => {
            serde_yaml::to_string(value)
                .map_err(|error| IoError::new(path, IoErrorType::SerdeYaml(error)))?
        },
        _ => return unsupported_filetype(path),
    };
    write_to_file(path, &buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Serialize, Deserialize};

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct Sample {
        name: String,
        value: f32,
    }

    fn temp_path(name: &str) -> String {
        std::env::temp_dir()
            .join(format!("planesect_io_{}_{}", std::process::id(), name))
            .to_string_lossy()
            .to_string()
    }

    #[test]
    fn cfg_file_round_trip_by_extension() {
        let sample = Sample{name: "plane".to_string(), value: 1.5};
        for ext in SUPPORTED_FILETYPES {
            let path = temp_path(&format!("sample.{}", ext));
            write_cfg_file(&path, &sample).unwrap();
            let read: Sample = read_cfg_file(&path).unwrap();
            assert_eq!(read, sample);
            std::fs::remove_file(&path).unwrap();
        }
    }

    #[test]
    fn unsupported_extension_is_an_error() {
        let path = temp_path("sample.txt");
        let error = read_cfg_file::<Sample>(&path).unwrap_err();
        assert_eq!(error.file.as_deref(), Some(path.as_str()));
        assert!(matches!(error.cause, IoErrorType::StringOnly(_)));

        let error = write_cfg_file(&path, &Sample{name: String::new(), value: 0.0}).unwrap_err();
        assert!(matches!(error.cause, IoErrorType::StringOnly(_)));
    }

    #[test]
    fn output_dir_is_checked_without_creating_the_file() {
        let path = temp_path("untouched.json");
        assert!(check_output_dir(&path).is_ok());
        assert!(!std::path::Path::new(&path).exists());
        assert!(check_output_dir("report.json").is_ok());

        let error = check_output_dir("/nonexistent-planesect-dir/report.json").unwrap_err();
        assert!(matches!(error.cause, IoErrorType::StringOnly(_)));
    }

    #[test]
    fn same_file_under_different_spellings() {
        let path = temp_path("same.yaml");
        write_to_file(&path, "a: 1").unwrap();
        let (dir, name) = path.rsplit_once('/').unwrap();
        let respelled = format!("{}/./{}", dir, name);

        assert!(is_same_file(&path, &respelled));
        assert!(!is_same_file(&path, &temp_path("other.yaml")));
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn missing_file_reports_path() {
        let path = temp_path("missing.yaml");
        let error = read_cfg_file::<Sample>(&path).unwrap_err();
        assert!(matches!(error.cause, IoErrorType::File(_)));
        assert!(error.to_string().contains(&path));
    }
}
