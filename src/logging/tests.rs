// gitmenu-rs: Interactive Git Helper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{LogConfig, LogLevel, open_log_file};

#[test]
fn test_log_level_from_command_line_value() {
    let levels: Vec<_> = (0..=6).map(LogLevel::from_u8).collect();
    insta::assert_debug_snapshot!(levels, @r"
    [
        Some(
            Off,
        ),
        Some(
            Error,
        ),
        Some(
            Warn,
        ),
        Some(
            Info,
        ),
        Some(
            Debug,
        ),
        Some(
            Trace,
        ),
        None,
    ]
    ");
}

#[test]
fn test_log_level_directives() {
    assert_eq!(LogLevel::Off.directive(), "off");
    assert_eq!(LogLevel::default().directive(), "warn");
    assert_eq!(LogLevel::Trace.directive(), "trace");
    assert!(LogLevel::Debug > LogLevel::Info);
}

#[test]
fn test_log_config_defaults() {
    let config = LogConfig::default();
    assert_eq!(config.console_level(), LogLevel::Warn);
    assert_eq!(config.file_level(), LogLevel::Trace);
    assert!(config.log_file().is_none());
}

#[test]
fn test_log_config_builder() {
    let config = LogConfig::builder()
        .with_console_level(LogLevel::Debug)
        .with_log_file("logs/gitmenu.log".into())
        .build();
    assert_eq!(config.console_level(), LogLevel::Debug);
    assert_eq!(config.file_level(), LogLevel::Trace);
    assert_eq!(
        config.log_file(),
        Some(std::path::Path::new("logs/gitmenu.log"))
    );
}

#[test]
fn test_open_log_file_creates_parent_directories() {
    let temp = tempfile::tempdir().unwrap();
    let path = temp.path().join("nested").join("dir").join("gitmenu.log");
    let (_writer, guard) = open_log_file(&path).unwrap();
    drop(guard);
    assert!(path.is_file());
}

#[test]
fn test_open_log_file_reports_path_on_failure() {
    let temp = tempfile::tempdir().unwrap();
    let blocker = temp.path().join("not-a-dir");
    std::fs::write(&blocker, "").unwrap();
    let err = open_log_file(&blocker.join("gitmenu.log")).unwrap_err();
    assert!(err.to_string().contains("failed to create log directory"), "got: {err}");
}
