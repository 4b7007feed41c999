//! Configuration system tests
//!
//! Tests for config paths, loading and saving panel config, and how the
//! configuration shapes a running panel.

mod common;

use std::fs;

use common::*;
use dockside::config::{ConfigError, PanelConfig};
use dockside::config_paths;
use dockside::host::{EventKind, EventSource};
use dockside::panel::{FollowMode, Side, WindowOptionValue};
use dockside::script::ScriptCommand;

// ========================================================================
// Config Paths Tests
// ========================================================================

#[test]
fn test_config_dir_contains_app_name() {
    let dir = config_paths::config_dir().unwrap();
    assert!(dir.to_string_lossy().contains("dockside"));
}

#[test]
fn test_config_file_ends_with_yaml() {
    let path = config_paths::config_file().unwrap();
    assert!(path.to_string_lossy().ends_with("config.yaml"));
}

#[test]
fn test_logs_dir_is_subdir_of_config() {
    let config = config_paths::config_dir().unwrap();
    let logs = config_paths::logs_dir().unwrap();
    assert!(logs.starts_with(&config));
}

// ========================================================================
// Loading
// ========================================================================

#[test]
fn test_load_full_config() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("config.yaml");
    fs::write(
        &file,
        "side: right\n\
         slot: 2\n\
         width: 0.25\n\
         follow_buffer_file: select\n\
         follow_project_switch: false\n\
         window_options:\n  \
           no-delete-other-windows: true\n  \
           fixed-width: 30\n  \
           label: tree\n",
    )
    .unwrap();

    let config = PanelConfig::load_from(&file).unwrap();

    assert_eq!(config.side, Side::Right);
    assert_eq!(config.slot, 2);
    assert_eq!(config.width, 0.25);
    assert_eq!(config.follow_buffer_file, FollowMode::Select);
    assert!(!config.follow_project_switch);
    assert_eq!(
        config.window_options.get("fixed-width"),
        Some(&WindowOptionValue::Int(30))
    );
    assert_eq!(
        config.window_options.get("label"),
        Some(&WindowOptionValue::Text("tree".to_string()))
    );
}

#[test]
fn test_load_rejects_out_of_range_width() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("config.yaml");
    fs::write(&file, "width: 1.5\n").unwrap();

    let err = PanelConfig::load_from(&file).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidWidth(w) if w == 1.5));
}

#[test]
fn test_load_reports_parse_errors_with_path() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("config.yaml");
    fs::write(&file, "side: diagonal\n").unwrap();

    let err = PanelConfig::load_from(&file).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
    assert!(err.to_string().contains("config.yaml"));
}

#[test]
fn test_load_missing_file_is_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = PanelConfig::load_from(&dir.path().join("absent.yaml")).unwrap_err();
    assert!(matches!(err, ConfigError::Read { .. }));
}

#[test]
fn test_save_creates_parent_dirs() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("nested").join("config.yaml");

    let config = PanelConfig {
        side: Side::Top,
        follow_buffer_file: FollowMode::Off,
        ..PanelConfig::default()
    };
    config.save_to(&file).unwrap();

    let loaded = PanelConfig::load_from(&file).unwrap();
    assert_eq!(loaded.side, Side::Top);
    assert_eq!(loaded.follow_buffer_file, FollowMode::Off);
    assert_eq!(loaded.window_options, config.window_options);
}

// ========================================================================
// Config applied to the panel
// ========================================================================

#[test]
fn test_right_side_panel() {
    let mut bench = bench_with(PanelConfig {
        side: Side::Right,
        ..PanelConfig::default()
    });
    bench.run(ScriptCommand::Toggle(None));

    let panel = visible_panel(&bench).unwrap();
    let state = bench.windows.window(panel.window).unwrap();
    assert_eq!(state.docked.map(|spec| spec.side), Some(Side::Right));
    assert_eq!(state.width, 40);
}

#[test]
fn test_window_options_reach_docked_window() {
    let mut config = PanelConfig::default();
    config
        .window_options
        .insert("fixed-width".to_string(), WindowOptionValue::Int(30));
    let mut bench = bench_with(config);
    bench.run(ScriptCommand::Toggle(None));

    let panel = visible_panel(&bench).unwrap();
    let options = &bench.windows.window(panel.window).unwrap().options;
    assert_eq!(options.len(), 2);
    assert_eq!(options.get("fixed-width"), Some(&WindowOptionValue::Int(30)));
}

#[test]
fn test_subscriptions_follow_config() {
    let bench = bench_with(PanelConfig {
        follow_buffer_file: FollowMode::Off,
        follow_project_switch: false,
        ..PanelConfig::default()
    });

    assert!(bench.events.is_subscribed(EventKind::LayoutChanged));
    assert!(!bench.events.is_subscribed(EventKind::BufferFocused));
    assert!(!bench.events.is_subscribed(EventKind::ProjectSwitched));
    assert_eq!(bench.panel.follow_mode(), FollowMode::Off);
}
