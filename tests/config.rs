use std::io::Write;
use timekit::config::Config;
use timekit::FormatSet;

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.formats.storage_format, "%Y-%m-%d %H:%M:%S");
    assert_eq!(config.formats.ui_datetime_format, "%d-%b-%Y %-I:%M %p");
    assert_eq!(config.formats.ui_date_format, "%d-%b-%Y");
    assert_eq!(config.formats.ui_time_format, "%-I:%M %p");
    assert!(!config.logging.enabled);
}

#[test]
fn test_config_validation() {
    let mut config = Config::default();

    // Valid config should pass
    assert!(config.validate().is_ok());

    // Unsupported specifier should fail
    config.formats.ui_date_format = "%A %e".to_string();
    assert!(config.validate().is_err());
}

#[test]
fn test_config_serialization() {
    let config = Config::default();
    let toml_str = toml::to_string_pretty(&config).unwrap();
    assert!(toml_str.contains("storage_format = \"%Y-%m-%d %H:%M:%S\""));
    assert!(toml_str.contains("enabled = false"));
}

#[test]
fn test_partial_config_deserialization() {
    // Partial TOML configs merge with defaults
    let partial_toml = r#"
[formats]
ui_date_format = "%Y/%m/%d"

[logging]
enabled = true
"#;

    let config: Config = toml::from_str(partial_toml).unwrap();
    assert_eq!(config.formats.ui_date_format, "%Y/%m/%d");
    assert_eq!(config.formats.storage_format, "%Y-%m-%d %H:%M:%S");
    assert!(config.logging.enabled);
}

#[test]
fn test_format_set_from_default_config() {
    let config = Config::default();
    let set = config.format_set().unwrap();
    assert_eq!(set, FormatSet::default());
}

#[test]
fn test_format_set_rejects_invalid_pattern() {
    let mut config = Config::default();
    config.formats.storage_format = "%Y-%m-%d %Q".to_string();
    assert!(config.format_set().is_err());
}

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "[formats]\nui_time_format = \"%H:%M\"\n\n[logging]\nenabled = true"
    )
    .unwrap();

    let config = Config::load_from_file(file.path()).unwrap();
    assert_eq!(config.formats.ui_time_format, "%H:%M");
    assert!(config.logging.enabled);
}

#[test]
fn test_load_from_file_rejects_invalid_patterns() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[formats]\nui_time_format = \"%Z\"").unwrap();
    assert!(Config::load_from_file(file.path()).is_err());
}

#[test]
fn test_load_from_missing_file() {
    assert!(Config::load_from_file("/nonexistent/timekit.toml").is_err());
}
