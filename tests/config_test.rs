//! Layered configuration: defaults < file < environment < CLI

use std::collections::HashMap;
use std::io::Write;

use av_cable_planner::config::{CliConfigOverrides, ConfigSource, LayeredConfig, PlannerConfig};
use av_cable_planner::{ContentType, PlanError};
use tempfile::NamedTempFile;

fn toml_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "{}", content).unwrap();
    file
}

#[test]
fn file_overrides_defaults() {
    let file = toml_file(
        r#"
display_size = 98
content_type = "broadcast"
"#,
    );

    let config = LayeredConfig::with_defaults().load_from_file(file.path()).unwrap();

    assert_eq!(config.display_size.value, 98.0);
    assert_eq!(config.display_size.source, ConfigSource::File);
    assert_eq!(config.content_type.value, ContentType::Broadcast);
    // untouched keys keep their defaults
    assert_eq!(config.viewing_distance.source, ConfigSource::Default);
    assert_eq!(config.planner().viewing_distance, PlannerConfig::default().viewing_distance);
}

#[test]
fn env_overrides_file_and_cli_overrides_env() {
    let file = toml_file("display_size = 98.0\nroom_type = \"Auditorium\"");
    let vars = HashMap::from([("AVPLAN_DISPLAY_SIZE", "110"), ("AVPLAN_ROOM_TYPE", "Lecture Hall")]);

    let mut config = LayeredConfig::with_defaults()
        .load_from_file(file.path())
        .unwrap()
        .load_from_vars(|key| vars.get(key).map(|v| v.to_string()));

    assert_eq!(config.display_size.value, 110.0);
    assert_eq!(config.room_type.value, "Lecture Hall");
    assert_eq!(config.room_type.source, ConfigSource::Environment);

    config.update_from_cli(CliConfigOverrides {
        display_size: Some(55.0),
        ..Default::default()
    })
    .unwrap();
    assert_eq!(config.display_size.value, 55.0);
    assert_eq!(config.display_size.source, ConfigSource::Cli);
    assert_eq!(config.planner().display_size, 55.0);
}

#[test]
fn non_positive_sizes_are_rejected_from_file() {
    let file = toml_file("viewing_distance = 0");
    let err = LayeredConfig::with_defaults().load_from_file(file.path()).unwrap_err();
    assert!(matches!(err, PlanError::ConfigInvalid { ref key, .. } if key == "viewing_distance"));
}

#[test]
fn non_positive_sizes_are_rejected_from_cli() {
    let mut config = LayeredConfig::with_defaults();
    let err = config
        .update_from_cli(CliConfigOverrides {
            display_size: Some(-65.0),
            ..Default::default()
        })
        .unwrap_err();
    assert!(matches!(err, PlanError::ConfigInvalid { ref key, .. } if key == "display_size"));
    assert_eq!(config.display_size.source, ConfigSource::Default);
    assert_eq!(config.planner().display_size, PlannerConfig::default().display_size);
}

#[test]
fn unknown_keys_are_rejected() {
    let file = toml_file("screen_size = 75");
    assert!(LayeredConfig::with_defaults().load_from_file(file.path()).is_err());
}

#[test]
fn missing_file_is_a_config_error() {
    let err = LayeredConfig::with_defaults()
        .load_from_file("/definitely/not/here.toml")
        .unwrap_err();
    assert!(matches!(err, PlanError::ConfigInvalid { ref key, .. } if key == "file"));
}
