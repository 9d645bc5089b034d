// gitmenu-rs: Interactive Git Helper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{ConfigError, GitError, GmError, GmResult, InputError};

#[test]
fn test_config_error_display() {
    let err = ConfigError::InvalidValue {
        section: "git".to_string(),
        key: "log_count".to_string(),
        message: "must be at least 1".to_string(),
    };
    insta::assert_snapshot!(
        err.to_string(),
        @"invalid value for 'log_count' in section '[git]': must be at least 1"
    );
}

#[test]
fn test_input_error_display() {
    let err = InputError::CurrentBranch {
        action: "delete".to_string(),
        branch: "main".to_string(),
    };
    insta::assert_snapshot!(err.to_string(), @"cannot delete 'main': it is the current branch");
}

#[test]
fn test_git_error_converts_into_gm_error() {
    let err: GmError = GitError::CommandFailed {
        command: "git commit".to_string(),
        message: "nothing to commit".to_string(),
    }
    .into();
    assert!(err.as_git().is_some());
    assert!(!err.is_input_closed());
    insta::assert_snapshot!(err.to_string(), @"git error: git commit failed: nothing to commit");
}

#[test]
fn test_input_closed_detection() {
    assert!(GmError::InputClosed.is_input_closed());
    let err: GmError = InputError::InvalidChoice("x".to_string()).into();
    assert!(err.as_input().is_some());
    assert!(!err.is_input_closed());
}

#[test]
fn test_gm_error_size() {
    // every payload is a thin Box, plus the discriminant
    let size = std::mem::size_of::<GmError>();
    assert!(size <= 24, "GmError is {size} bytes, expected <= 24");
}

#[test]
fn test_gm_result_size() {
    let size = std::mem::size_of::<GmResult<()>>();
    assert!(size <= 24, "GmResult<()> is {size} bytes, expected <= 24");
}
