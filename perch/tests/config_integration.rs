//! Integration tests for configuration loading and precedence.

use std::io::Write;

use perch::config::{Config, ConfigBuilder, OutputFormat};
use serial_test::serial;

fn write_yaml(dir: &tempfile::TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    path
}

#[test]
#[serial]
fn explicit_file_is_loaded() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_yaml(&dir, "custom.yaml", "seats: 8\noutput_format: json\n");

    let config = ConfigBuilder::new()
        .with_config_path(&path)
        .skip_env()
        .build()
        .unwrap();

    assert_eq!(config.seats, Some(8));
    assert_eq!(config.output_format, Some(OutputFormat::Json));
}

#[test]
#[serial]
fn env_overrides_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_yaml(&dir, "custom.yaml", "seats: 8\n");

    std::env::set_var("PERCH_SEATS", "16");
    let result = ConfigBuilder::new().with_config_path(&path).build();
    std::env::remove_var("PERCH_SEATS");

    assert_eq!(result.unwrap().seats, Some(16));
}

#[test]
#[serial]
fn overrides_beat_env() {
    std::env::set_var("PERCH_SEATS", "16");
    let result = ConfigBuilder::new()
        .skip_files()
        .with_overrides(Config {
            seats: Some(4),
            ..Default::default()
        })
        .build();
    std::env::remove_var("PERCH_SEATS");

    assert_eq!(result.unwrap().seats, Some(4));
}

#[test]
#[serial]
fn unknown_keys_are_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_yaml(&dir, "custom.yaml", "seats: 8\nwaitlist: true\n");

    let err = ConfigBuilder::new()
        .with_config_path(&path)
        .skip_env()
        .build()
        .unwrap_err();

    assert!(matches!(err, perch::Error::Configuration(_)));
}

#[test]
#[serial]
fn zero_seats_is_rejected_wherever_it_comes_from() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_yaml(&dir, "custom.yaml", "seats: 0\n");

    let err = ConfigBuilder::new()
        .with_config_path(&path)
        .skip_env()
        .build()
        .unwrap_err();
    assert!(matches!(err, perch::Error::InvalidCapacity { value: 0, .. }));

    std::env::set_var("PERCH_SEATS", "0");
    let result = ConfigBuilder::new().skip_files().build();
    std::env::remove_var("PERCH_SEATS");
    assert!(matches!(
        result.unwrap_err(),
        perch::Error::InvalidCapacity { value: 0, .. }
    ));
}

#[test]
#[serial]
fn missing_default_files_fall_back_to_defaults() {
    // Run from a directory with no perch.yaml
    let dir = tempfile::tempdir().unwrap();
    let original = std::env::current_dir().unwrap();
    std::env::set_current_dir(dir.path()).unwrap();

    let result = ConfigBuilder::new().skip_env().build();

    std::env::set_current_dir(original).unwrap();

    let config = result.unwrap();
    assert_eq!(config.effective_seats(), 25);
    assert_eq!(config.effective_output_format(), OutputFormat::Table);
}
