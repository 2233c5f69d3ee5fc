//! Loading `ContainerConfig` from TOML and JSON files.
//!
//! Run:
//!   cargo test -p sidepane --features config-file --test config_file

use std::io::Write;

use sidepane::{ConfigError, ContainerConfig, DraggableContainer, PanePosition, TransitionCurve};
use tempfile::NamedTempFile;

struct NullStage;

impl sidepane::PaneStage<u32> for NullStage {
    fn mount_center(&mut self, _pane: &u32) {}
    fn mount_left(&mut self, _pane: &u32, _width: f64) {}
    fn mount_right(&mut self, _pane: &u32, _width: f64) {}
    fn set_offset(&mut self, _offset: f64) {}
    fn set_dim_alpha(&mut self, _alpha: f64) {}
    fn show_placeholder(&mut self, _message: &str) {}
    fn hide_placeholder(&mut self) {}
}

fn write_temp(content: &str, suffix: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn toml_file_overrides_selected_fields() {
    let file = write_temp(
        r#"
left_width = 280.0
right_width = 250.0
preferred_dim_side = "left"
transition_curve = "ease_out"
"#,
        ".toml",
    );
    let config = ContainerConfig::from_toml_file(file.path()).unwrap();
    assert_eq!(config.left_width, 280.0);
    assert_eq!(config.right_width, 250.0);
    assert_eq!(config.preferred_dim_side, PanePosition::Left);
    assert_eq!(config.transition_curve, TransitionCurve::EaseOut);
    assert_eq!(config.velocity_threshold, 500.0);
    assert_eq!(config.transition_duration_ms, 500);

    let mut container: DraggableContainer<u32, NullStage> =
        DraggableContainer::with_config(NullStage, config).unwrap();
    container.setup(sidepane::PaneSetup::new(1).left(2)).unwrap();
    assert_eq!(container.preferred_dim_side(), PanePosition::Left);
    assert_eq!(container.widths().map(|w| w.left), Some(280.0));
}

#[test]
fn json_file_round_trips_a_full_config() {
    let config = ContainerConfig {
        velocity_threshold: 650.0,
        transition_duration_ms: 300,
        pan_slop: 4.0,
        ..ContainerConfig::default()
    };
    let file = write_temp(&serde_json::to_string(&config).unwrap(), ".json");
    let loaded = ContainerConfig::from_json_file(file.path()).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn empty_toml_is_the_default_config() {
    let file = write_temp("", ".toml");
    assert_eq!(
        ContainerConfig::from_toml_file(file.path()).unwrap(),
        ContainerConfig::default()
    );
}

#[test]
fn invalid_values_fail_validation() {
    let file = write_temp(r#"{"left_width": -5.0, "velocity_threshold": -1.0}"#, ".json");
    match ContainerConfig::from_json_file(file.path()) {
        Err(ConfigError::Validation(errors)) => assert_eq!(errors.len(), 2),
        other => panic!("expected validation errors, got {other:?}"),
    }
}

#[test]
fn malformed_files_report_parse_errors() {
    let toml_file = write_temp("left_width = \"wide\"", ".toml");
    assert!(matches!(
        ContainerConfig::from_toml_file(toml_file.path()),
        Err(ConfigError::Toml(_))
    ));

    let json_file = write_temp("{ not json", ".json");
    assert!(matches!(
        ContainerConfig::from_json_file(json_file.path()),
        Err(ConfigError::Json(_))
    ));
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.toml");
    assert!(matches!(
        ContainerConfig::from_toml_file(&path),
        Err(ConfigError::Io(_))
    ));
}
