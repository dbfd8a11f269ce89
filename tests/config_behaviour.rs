use std::error::Error;
use std::fs;

use sprintgraph::config::{load_and_validate, ConfigFile};
use sprintgraph::errors::SprintgraphError;
use sprintgraph::types::DependencyFormat;
use sprintgraph_test_utils::init_tracing;

type TestResult = Result<(), Box<dyn Error>>;

fn write_config(contents: &str) -> (tempfile::TempDir, std::path::PathBuf) {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("Sprintgraph.toml");
    fs::write(&path, contents).expect("write config");
    (dir, path)
}

#[test]
fn empty_file_yields_all_defaults() -> TestResult {
    init_tracing();

    let (_dir, path) = write_config("");
    let cfg = load_and_validate(&path)?;

    assert_eq!(cfg.inputs.sprints, "doc/Sprints.csv");
    assert_eq!(cfg.inputs.dependencies, "doc/Isblockedby.csv");
    assert_eq!(cfg.inputs.format, DependencyFormat::Rows);
    assert_eq!(cfg.inputs.sprint_prefix, "SP");
    assert_eq!(cfg.render.output, "sprintgraph.svg");
    assert_eq!(cfg.render.width, 1500);
    assert_eq!(cfg.render.height, 800);

    Ok(())
}

#[test]
fn sections_override_defaults() -> TestResult {
    init_tracing();

    let (_dir, path) = write_config(
        r#"
[inputs]
sprints = "data/schedule.csv"
dependencies = "data/blocks.csv"
format = "matrix"
sprint_prefix = "S"

[render]
output = "out/figure.svg"
width = 900
height = 500
"#,
    );
    let cfg = load_and_validate(&path)?;

    assert_eq!(cfg.inputs.sprints, "data/schedule.csv");
    assert_eq!(cfg.inputs.format, DependencyFormat::Matrix);
    assert_eq!(cfg.inputs.sprint_prefix, "S");
    assert_eq!(cfg.render.output, "out/figure.svg");
    assert_eq!(cfg.render.width, 900);

    Ok(())
}

#[test]
fn unknown_format_is_rejected_at_parse_time() {
    init_tracing();

    let (_dir, path) = write_config("[inputs]\nformat = \"columns\"\n");
    let err = load_and_validate(&path).unwrap_err();
    assert!(matches!(err, SprintgraphError::TomlError(_)));
}

#[test]
fn degenerate_canvas_is_rejected() {
    init_tracing();

    let (_dir, path) = write_config("[render]\nwidth = 0\n");
    let err = load_and_validate(&path).unwrap_err();
    assert!(matches!(err, SprintgraphError::ConfigError(_)));
}

#[test]
fn empty_sprint_prefix_is_rejected() {
    init_tracing();

    let (_dir, path) = write_config("[inputs]\nsprint_prefix = \"\"\n");
    let err = load_and_validate(&path).unwrap_err();
    assert!(matches!(err, SprintgraphError::ConfigError(_)));
}

#[test]
fn missing_config_file_is_an_error_when_named_explicitly() {
    init_tracing();

    let dir = tempfile::tempdir().expect("tempdir");
    let err = load_and_validate(dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, SprintgraphError::IoError(_)));
}

#[test]
fn built_in_defaults_match_an_empty_config_file() -> TestResult {
    init_tracing();

    let (_dir, path) = write_config("");
    let from_file = load_and_validate(&path)?;
    let built_in = ConfigFile::default();

    assert_eq!(from_file.inputs.sprints, built_in.inputs.sprints);
    assert_eq!(from_file.render.output, built_in.render.output);

    Ok(())
}
