//! Tests for configuration file loading.

use super::*;
use serial_test::serial;
use std::env;
use std::fs;

fn write_temp_config(name: &str, contents: &str) -> PathBuf {
    let path = env::temp_dir().join(name);
    fs::write(&path, contents).expect("Failed to write test config");
    path
}

#[test]
fn default_config_path_contains_devoverlay_config_toml() {
    let Some(path) = default_config_path() else {
        return;
    };
    let path_str = path.to_string_lossy();
    assert!(
        path_str.contains("devoverlay") && path_str.ends_with("config.toml"),
        "Path should contain 'devoverlay' and end with 'config.toml', got: {}",
        path_str
    );
}

#[test]
fn default_log_path_ends_with_devoverlay_log() {
    let path = default_log_path();
    assert!(
        path.to_string_lossy().ends_with("devoverlay.log"),
        "got: {:?}",
        path
    );
}

#[test]
fn load_config_file_returns_ok_none_for_missing_file() {
    let result = load_config_file("/nonexistent/path/to/config.toml");
    assert_eq!(
        result,
        Ok(None),
        "Missing config file should return Ok(None), not an error"
    );
}

#[test]
fn load_config_file_parses_valid_toml() {
    let config_path = write_temp_config(
        "devoverlay_test_config.toml",
        r#"
show_console = true
show_inspector = false
auto_scroll = false
thumbnail_size = 64.0
detail_preview_size = 320.0
log_file_path = "/tmp/overlay.log"
"#,
    );

    let config = load_config_file(&config_path)
        .expect("Should successfully parse valid TOML")
        .expect("Should return Some(ConfigFile) for existing file");

    assert_eq!(config.show_console, Some(true));
    assert_eq!(config.show_inspector, Some(false));
    assert_eq!(config.auto_scroll, Some(false));
    assert_eq!(config.thumbnail_size, Some(64.0));
    assert_eq!(config.detail_preview_size, Some(320.0));
    assert_eq!(
        config.log_file_path,
        Some(PathBuf::from("/tmp/overlay.log"))
    );
    assert_eq!(config.highlight, None);

    fs::remove_file(config_path).ok();
}

#[test]
fn load_config_file_returns_error_for_invalid_toml() {
    let config_path = write_temp_config("devoverlay_test_invalid.toml", "not valid TOML ][}{");

    match load_config_file(&config_path) {
        Err(ConfigError::ParseError { path, reason: _ }) => assert_eq!(path, config_path),
        other => panic!("Expected ParseError, got {:?}", other),
    }

    fs::remove_file(config_path).ok();
}

#[test]
fn load_config_file_rejects_unknown_keys() {
    let config_path = write_temp_config("devoverlay_test_unknown.toml", "console_row_height = 3\n");

    assert!(matches!(
        load_config_file(&config_path),
        Err(ConfigError::ParseError { .. })
    ));

    fs::remove_file(config_path).ok();
}

#[test]
fn load_config_file_reports_read_error_for_directory() {
    let dir = env::temp_dir().join("devoverlay_test_config_dir");
    fs::create_dir_all(&dir).ok();

    assert!(matches!(
        load_config_file(&dir),
        Err(ConfigError::ReadError { .. })
    ));

    fs::remove_dir_all(dir).ok();
}

#[test]
fn merge_config_without_file_uses_defaults() {
    let resolved = merge_config(None);
    assert_eq!(resolved, ResolvedConfig::default());
    assert!(!resolved.show_console);
    assert!(resolved.show_inspector);
    assert!(!resolved.show_demo);
    assert!(resolved.auto_scroll);
    assert!(resolved.hover_preview);
    assert!(resolved.highlight);
    assert_eq!(resolved.thumbnail_size, DEFAULT_THUMBNAIL_SIZE);
    assert_eq!(resolved.detail_preview_size, DEFAULT_DETAIL_PREVIEW_SIZE);
}

#[test]
fn merge_config_applies_set_fields_only() {
    let file = ConfigFile {
        show_demo: Some(true),
        hover_preview: Some(false),
        ..ConfigFile::default()
    };

    let resolved = merge_config(Some(file));

    assert!(resolved.show_demo);
    assert!(!resolved.hover_preview);
    assert!(resolved.show_inspector, "unset field keeps its default");
}

#[test]
fn merge_config_rejects_non_positive_sizes() {
    let file = ConfigFile {
        thumbnail_size: Some(0.0),
        detail_preview_size: Some(f32::NAN),
        ..ConfigFile::default()
    };

    let resolved = merge_config(Some(file));

    assert_eq!(resolved.thumbnail_size, DEFAULT_THUMBNAIL_SIZE);
    assert_eq!(resolved.detail_preview_size, DEFAULT_DETAIL_PREVIEW_SIZE);
}

#[test]
#[serial(config_env)]
fn explicit_path_beats_env_var() {
    let explicit = write_temp_config("devoverlay_test_explicit.toml", "show_demo = true\n");
    let from_env = write_temp_config("devoverlay_test_env.toml", "show_demo = false\n");
    env::set_var("DEVOVERLAY_CONFIG", &from_env);

    let config = load_config_with_precedence(Some(explicit.clone()))
        .unwrap()
        .unwrap();

    env::remove_var("DEVOVERLAY_CONFIG");
    assert_eq!(config.show_demo, Some(true));
    fs::remove_file(explicit).ok();
    fs::remove_file(from_env).ok();
}

#[test]
#[serial(config_env)]
fn env_var_path_is_used_without_explicit_path() {
    let from_env = write_temp_config("devoverlay_test_env_only.toml", "highlight = false\n");
    env::set_var("DEVOVERLAY_CONFIG", &from_env);

    let config = load_config_with_precedence(None).unwrap().unwrap();

    env::remove_var("DEVOVERLAY_CONFIG");
    assert_eq!(config.highlight, Some(false));
    fs::remove_file(from_env).ok();
}

#[test]
#[serial(config_env)]
fn empty_env_var_path_is_invalid() {
    env::set_var("DEVOVERLAY_CONFIG", "");

    let result = load_config_with_precedence(None);

    env::remove_var("DEVOVERLAY_CONFIG");
    assert!(matches!(result, Err(ConfigError::InvalidPath(_))));
}

#[test]
#[serial(config_env)]
fn env_overrides_flip_flags() {
    env::set_var("DEVOVERLAY_AUTO_SCROLL", "off");
    env::set_var("DEVOVERLAY_HIGHLIGHT", "0");

    let config = apply_env_overrides(ResolvedConfig::default());

    env::remove_var("DEVOVERLAY_AUTO_SCROLL");
    env::remove_var("DEVOVERLAY_HIGHLIGHT");
    assert!(!config.auto_scroll);
    assert!(!config.highlight);
}

#[test]
#[serial(config_env)]
fn unrecognized_env_value_is_ignored() {
    env::set_var("DEVOVERLAY_AUTO_SCROLL", "sometimes");

    let config = apply_env_overrides(ResolvedConfig::default());

    env::remove_var("DEVOVERLAY_AUTO_SCROLL");
    assert!(config.auto_scroll);
}

#[test]
fn cli_overrides_win() {
    let base = merge_config(Some(ConfigFile {
        show_console: Some(false),
        auto_scroll: Some(true),
        ..ConfigFile::default()
    }));

    let resolved = apply_cli_overrides(
        base,
        CliOverrides {
            show_console: Some(true),
            auto_scroll: Some(false),
            log_file_path: Some(PathBuf::from("/tmp/cli.log")),
            ..CliOverrides::default()
        },
    );

    assert!(resolved.show_console);
    assert!(!resolved.auto_scroll);
    assert!(!resolved.show_demo, "flag not given on CLI keeps its value");
    assert_eq!(resolved.log_file_path, PathBuf::from("/tmp/cli.log"));
}
