use fieldquill::config::Config;
use fieldquill::fields::CaseSensitivity;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_config_defaults() {
    let config = Config::default();

    assert_eq!(config.fields_param_name, "fields");
    assert!(!config.ignore_case);
    assert!(!config.ignore_parse_errors);
    assert!(config.always_included.is_empty());
    assert_eq!(config.always_included_ignore_case, None);
    assert_eq!(config.indent_size, 2);
    assert!(!config.compact);
}

#[test]
fn test_config_serialization_roundtrip() {
    let config = Config {
        fields_param_name: "select".to_string(),
        ignore_case: true,
        ignore_parse_errors: true,
        always_included: vec!["kind".to_string(), "meta(total)".to_string()],
        always_included_ignore_case: Some(false),
        indent_size: 4,
        compact: true,
    };

    let toml_str = toml::to_string(&config).unwrap();
    let deserialized: Config = toml::from_str(&toml_str).unwrap();
    assert_eq!(deserialized, config);
}

#[test]
fn test_partial_config_uses_defaults() {
    let config: Config = toml::from_str("ignore_case = true\n").unwrap();

    assert!(config.ignore_case);
    assert_eq!(config.fields_param_name, "fields");
    assert_eq!(config.indent_size, 2);
    assert_eq!(config.case_sensitivity(), CaseSensitivity::Insensitive);
    assert_eq!(
        config.always_included_case_sensitivity(),
        CaseSensitivity::Insensitive
    );
}

#[test]
fn test_empty_config_is_default() {
    let config: Config = toml::from_str("").unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_unset_case_override_not_serialized() {
    let toml_str = toml::to_string(&Config::default()).unwrap();
    assert!(!toml_str.contains("always_included_ignore_case"));
}

#[test]
fn test_save_and_load_from_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    let config = Config {
        always_included: vec!["totalCount".to_string()],
        indent_size: 8,
        ..Config::default()
    };
    config.save_to(&path).unwrap();

    let loaded = Config::load_from(&path).unwrap();
    assert_eq!(loaded, config);
    assert!(loaded.always_included().unwrap().is_some());
}

#[test]
fn test_load_from_missing_file() {
    let dir = TempDir::new().unwrap();
    let err = Config::load_from(dir.path().join("missing.toml")).unwrap_err();
    assert!(err.to_string().contains("Failed to read config file"));
}

#[test]
fn test_load_from_invalid_toml() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "indent_size = \"wide\"\n").unwrap();

    let err = Config::load_from(&path).unwrap_err();
    assert!(err.to_string().contains("Failed to parse config file"));
}
