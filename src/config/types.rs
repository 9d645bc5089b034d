// gitmenu-rs: Interactive Git Helper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Settings sections.
//!
//! ```text
//! Settings: GitSettings, UiSettings, PathsSettings
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::ConfigError;

/// `[git]` section: defaults offered at git-related prompts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GitSettings {
    /// Number of recent commits shown by the status view and commit workflow.
    pub log_count: usize,
    /// Remote name offered when a branch has no upstream.
    pub default_remote: String,
    /// Branch name offered when initializing a new repository.
    pub initial_branch: String,
}

impl Default for GitSettings {
    fn default() -> Self {
        Self {
            log_count: 5,
            default_remote: "origin".to_string(),
            initial_branch: "main".to_string(),
        }
    }
}

impl GitSettings {
    /// Validate the section.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for a zero `log_count` or a blank
    /// remote or branch name.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.log_count == 0 {
            return Err(invalid("git", "log_count", "must be at least 1"));
        }
        if self.default_remote.trim().is_empty() {
            return Err(invalid("git", "default_remote", "must not be empty"));
        }
        if self.initial_branch.trim().is_empty() {
            return Err(invalid("git", "initial_branch", "must not be empty"));
        }
        Ok(())
    }
}

/// `[ui]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct UiSettings {
    /// Clear the screen before redrawing a menu (only on a real terminal).
    pub clear_screen: bool,
    /// Wait for Enter after each action before redrawing.
    pub pause_after_action: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            clear_screen: true,
            pause_after_action: true,
        }
    }
}

/// `[paths]` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PathsSettings {
    /// Bookmark file. Defaults to `gitmenu.json` beside the executable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bookmarks: Option<PathBuf>,
}

fn invalid(section: &str, key: &str, message: &str) -> ConfigError {
    ConfigError::InvalidValue {
        section: section.to_string(),
        key: key.to_string(),
        message: message.to_string(),
    }
}
