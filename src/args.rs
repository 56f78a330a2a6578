use clap::{
    Args,
    Parser,
    Subcommand,
    ValueEnum,
};

mod proc_errors;

pub use proc_errors::{
    ArgError,
    ProcResult,
    err_str,
};

/// Plane intersection demo: intersects two planes and a line, then reports or exports the scene.
#[derive(Debug, Parser)]
#[command(name = "planesect", version)]
pub struct PlanesectCli {
    #[arg(short, long, global = true)]
    /// Print debug messages (overridden by RUST_LOG).
    pub verbose: bool,

    #[clap(subcommand)]
    pub command: Command,
}

/// Parser for the subcommands of the planesect binary using clap.
#[derive(Debug, Subcommand)]
pub enum Command {
    #[command(name = "demo")]
    /// Run the built-in demo scene: the 2D line test and the plane intersection test.
    Demo,

    #[command(name = "run")]
    /// Load a scene config, compute the intersections and print them.
    Run(RunArgs),

    #[command(name = "export")]
    /// Export a scene as an STL mesh (plane quads and the intersection line).
    Export(ExportArgs),

    #[command(name = "example")]
    /// Print an example scene config file.
    Example(ExampleArgs),
}

/// Arguments for the run command. Compiled with clap.
#[derive(Debug, Args)]
pub struct RunArgs {
    #[arg(short, long = "cfg")]
    /// Path to the scene config file (.yaml/.yml/.json/.toml).
    pub cfg_path: String,

    #[arg(short, long = "output")]
    /// Optional path to save the scene report (.yaml/.yml/.json/.toml).
    pub output_path: Option<String>,
}

impl RunArgs {
    /// Check the report output path before any work is done.
    /// The report file itself is only written once the scene has loaded.
    pub fn validate(&self) -> ProcResult<()> {
        if let Some(output_path) = self.output_path.as_ref() {
            if crate::io::is_same_file(output_path, &self.cfg_path) {
                err_str("Report output path must differ from the scene config path")?;
            }
            if !has_extension(output_path, &["json", "toml", "yaml", "yml"]) {
                err_str("Report output path must end with .json, .toml, .yaml or .yml")?;
            }
            crate::io::check_output_dir(output_path)?;
        }
        Ok(())
    }
}

/// Arguments for the export command. Compiled with clap.
#[derive(Debug, Args)]
pub struct ExportArgs {
    #[arg(short, long = "cfg")]
    /// Path to the scene config file. Uses the demo scene if not given.
    pub cfg_path: Option<String>,

    #[arg(short, long = "output")]
    /// Path to the output mesh (.stl).
    pub output_path: String,
}

impl ExportArgs {
    /// Check the mesh output path before any work is done.
    pub fn validate(&self) -> ProcResult<()> {
        if let Some(cfg_path) = self.cfg_path.as_ref() {
            if crate::io::is_same_file(&self.output_path, cfg_path) {
                err_str("Mesh output path must differ from the scene config path")?;
            }
        }
        if !has_extension(&self.output_path, &["stl"]) {
            err_str("Mesh output path must end with .stl")?;
        }
        crate::io::check_output_dir(&self.output_path)?;
        Ok(())
    }
}

fn has_extension(path: &str, extensions: &[&str]) -> bool {
    match path.rsplit_once('.') {
        Some((stem, ext)) => !stem.is_empty() && extensions.contains(&ext),
        None => false,
    }
}

/// Arguments for the example command. Compiled with clap.
#[derive(Debug, Args)]
pub struct ExampleArgs {
    #[arg(short, long, value_enum, default_value_t = Format::Yaml)]
    /// Format of the printed config.
    pub format: Format,
}

/// Config file formats.
#[derive(Debug, Clone, Copy, PartialEq, ValueEnum, strum::Display)]
pub enum Format {
    #[strum(serialize = "yaml")]
    Yaml,
    #[strum(serialize = "json")]
    Json,
    #[strum(serialize = "toml")]
    Toml,
}

/// Parse the command line arguments for the planesect binary.
pub fn parse_cli_args() -> PlanesectCli {
    PlanesectCli::parse()
}
