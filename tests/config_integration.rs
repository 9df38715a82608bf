//! Integration tests for configuration loading
//!
//! Tests that verify config loading from files and environment variables.

use platonic_math::SolidKind;
use platonic_viewer::config::AppConfig;
use serial_test::serial;

#[test]
#[serial]
fn test_env_override() {
    std::env::set_var("PV_WINDOW__TITLE", "Test From Env");
    let config = AppConfig::load().unwrap();
    assert_eq!(config.window.title, "Test From Env");
    std::env::remove_var("PV_WINDOW__TITLE");
}

#[test]
#[serial]
fn test_env_selects_initial_solid() {
    std::env::set_var("PV_VIEW__INITIAL_SOLID", "dodecahedron");
    let config = AppConfig::load().unwrap();
    assert_eq!(config.view.initial_solid, SolidKind::Dodecahedron);
    std::env::remove_var("PV_VIEW__INITIAL_SOLID");
}

#[test]
#[serial]
fn test_default_file_matches_builtin_defaults() {
    std::env::remove_var("PV_WINDOW__TITLE");
    std::env::remove_var("PV_VIEW__INITIAL_SOLID");

    // Cargo runs integration tests from the package root
    let config = AppConfig::load().unwrap();
    let builtin = AppConfig::default();

    assert_eq!(config.window.width, builtin.window.width);
    assert_eq!(config.window.height, builtin.window.height);
    assert_eq!(config.view.initial_solid, builtin.view.initial_solid);
    assert_eq!(config.view.frame_idle_ms, builtin.view.frame_idle_ms);
    assert_eq!(config.rendering.circle_segments, builtin.rendering.circle_segments);
    assert_eq!(config.rendering.view_extent, builtin.rendering.view_extent);
}

#[test]
#[serial]
fn test_user_file_overrides_default_file() {
    let dir = std::env::temp_dir().join(format!("platonic_viewer_cfg_{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("default.toml"), "[window]\ntitle = \"Default\"\nwidth = 640\n").unwrap();
    std::fs::write(dir.join("user.toml"), "[window]\ntitle = \"User\"\n").unwrap();

    let config = AppConfig::load_from(&dir).unwrap();
    assert_eq!(config.window.title, "User");
    assert_eq!(config.window.width, 640);
    assert_eq!(config.window.height, 800);

    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
#[serial]
fn test_invalid_value_is_an_error() {
    std::env::set_var("PV_VIEW__INITIAL_SOLID", "hypercube");
    let result = AppConfig::load();
    std::env::remove_var("PV_VIEW__INITIAL_SOLID");
    assert!(result.is_err());
}
