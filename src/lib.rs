pub mod geo_3d;
pub mod scene;
pub mod args;
pub mod io;
mod crate_errors;

pub use crate_errors::{
    PlanesectError,
    PlanesectResult,
    err_str,
};

use geo_3d::Line;
use scene::{Scene, SceneCfg};

/// Run the command parsed from the command line.
pub fn run_command(command: args::Command) -> PlanesectResult<()> {
    match command {
        args::Command::Demo => run_demo(),
        args::Command::Run(run_args) => run_scene(run_args),
        args::Command::Export(export_args) => export_scene(export_args),
        args::Command::Example(example_args) => example_config(example_args),
    }
}

/// Run the built-in demo: the 2D line intersection test, then the plane intersection test.
pub fn run_demo() -> PlanesectResult<()> {
    // P1(7,6) - P2(-8,-4) and P1(6,-8) - P2(-2,8)
    let l1 = Line::new_2d([7.0 + 8.0, 6.0 + 4.0], [7.0, 6.0]);
    let l2 = Line::new_2d([6.0 + 2.0, -8.0 - 8.0], [6.0, -8.0]);
    println!("===== TEST LINE INTERSECT =====");
    println!("Line1: P1(7,6)  - P2(-8,-4)");
    println!("Line2: P1(6,-8) - P2(-2,8)");
    println!("Is Intersected: {}", if l1.is_intersected(&l2) { "TRUE" } else { "FALSE" });
    println!("Intersect Point: {}", l1.intersect(&l2));
    println!();

    println!("===== TEST PLANE INTERSECT =====");
    println!("{}", Scene::demo().report());
    Ok(())
}

/// Load a scene config, print its report, and optionally save the report.
pub fn run_scene(run_args: args::RunArgs) -> PlanesectResult<()> {
    run_args.validate()?;

    let scene = Scene::from_cfg_file(&run_args.cfg_path)?;
    let report = scene.report();
    println!("{}", report);

    if let Some(output_path) = run_args.output_path.as_ref() {
        log::info!("Saving report to {}...", output_path);
        io::write_cfg_file(output_path, &report)?;
    }
    Ok(())
}

/// Export a scene (from a config, or the demo scene) as a STL mesh.
pub fn export_scene(export_args: args::ExportArgs) -> PlanesectResult<()> {
    export_args.validate()?;

    let scene = match export_args.cfg_path.as_ref() {
        Some(cfg_path) => Scene::from_cfg_file(cfg_path)?,
        None => {
            log::info!("No scene config given, exporting the demo scene...");
            Scene::demo()
        },
    };
    if scene.line().is_nan() {
        log::warn!("The planes do not meet along a single line, only the planes are exported");
    }
    let count = scene::export::export_stl(&scene, &export_args.output_path)?;
    println!("Saved {} triangles to {}", count, export_args.output_path);
    Ok(())
}

/// Print an example scene config file.
pub fn example_config(example_args: args::ExampleArgs) -> PlanesectResult<()> {
    log::debug!("Printing example config as {}", example_args.format);
    println!("{}", format_cfg(example_args.format, &SceneCfg::demo())?);
    Ok(())
}

/// Serialize a config in the given format, keeping the serializer error.
fn format_cfg<T: serde::Serialize>(format: args::Format, value: &T) -> PlanesectResult<String> {
    let to_io_error = |cause| io::IoError{file: None, cause};
    let text = match format {
        args::Format::Yaml => serde_yaml::to_string(value)
            .map_err(|error| to_io_error(io::IoErrorType::SerdeYaml(error)))?,
        args::Format::Json => serde_json::to_string_pretty(value)
            .map_err(|error| to_io_error(io::IoErrorType::SerdeJson(error)))?,
        args::Format::Toml => toml::to_string_pretty(value)
            .map_err(|error| to_io_error(io::IoErrorType::TomlSer(error)))?,
    };
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_must_differ_from_cfg() {
        let run_args = args::RunArgs{
            cfg_path: "scene.yaml".to_string(),
            output_path: Some("scene.yaml".to_string()),
        };
        assert!(matches!(run_scene(run_args), Err(PlanesectError::ArgError(_))));
    }

    #[test]
    fn missing_cfg_is_a_scene_error() {
        let run_args = args::RunArgs{
            cfg_path: "/nonexistent-planesect-dir/scene.yaml".to_string(),
            output_path: None,
        };
        assert!(matches!(run_scene(run_args), Err(PlanesectError::SceneError(_))));
    }

    #[test]
    fn serializer_errors_keep_their_type() {
        let error = format_cfg(args::Format::Toml, &1.5_f32).unwrap_err();
        assert!(matches!(
            error,
            PlanesectError::IoError(io::IoError{cause: io::IoErrorType::TomlSer(_), ..})
        ));
        assert!(format_cfg(args::Format::Json, &1.5_f32).is_ok());
    }

    #[test]
    fn example_configs_parse_back() {
        let cfg = SceneCfg::demo();
        let yaml = serde_yaml::to_string(&cfg).unwrap();
        let json = serde_json::to_string_pretty(&cfg).unwrap();
        for parsed in [
            serde_yaml::from_str::<SceneCfg>(&yaml).unwrap(),
            serde_json::from_str::<SceneCfg>(&json).unwrap(),
        ] {
            parsed.validate().unwrap();
            assert_eq!(parsed.plane1.to_plane(), cfg.plane1.to_plane());
        }
    }
}
