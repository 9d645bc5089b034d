// gitmenu-rs: Interactive Git Helper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Application settings.
//!
//! # Settings Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. gitmenu.toml beside the executable
//! 3. gitmenu.toml in the working directory
//! 4. --ini FILE (repeatable)
//! 5. GITMENU_* env vars
//! 6. CLI overrides (--bookmarks)
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! GITMENU_GIT__LOG_COUNT=10          → git.log_count = 10
//! GITMENU_GIT__DEFAULT_REMOTE=fork   → git.default_remote = "fork"
//! GITMENU_UI__CLEAR_SCREEN=false     → ui.clear_screen = false
//! ```
//!
//! These are the program's own knobs. The repository bookmarks live in a
//! separate JSON document, see [`crate::bookmarks`].

pub mod loader;
pub mod types;


use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::Result;

use loader::ConfigLoader;
use types::{GitSettings, PathsSettings, UiSettings};

/// File name searched for beside the executable and in the working directory.
pub const SETTINGS_FILE_NAME: &str = "gitmenu.toml";

/// Complete application settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub git: GitSettings,
    pub ui: UiSettings,
    pub paths: PathsSettings,
}

impl Settings {
    /// Create a new settings loader.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use gitmenu_rs::config::Settings;
    ///
    /// let settings = Settings::builder()
    ///     .add_toml_file_optional("gitmenu.toml")
    ///     .with_env_prefix("GITMENU")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load settings from a single TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, contains invalid TOML, or
    /// does not match the `Settings` structure.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::builder().add_toml_file(path).build()
    }

    /// Load settings from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match the
    /// `Settings` structure.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Validate all sections.
    ///
    /// # Errors
    ///
    /// Returns the first invalid value found.
    pub fn validate(&self) -> Result<()> {
        self.git.validate()?;
        Ok(())
    }

    /// Bookmark file location: the configured path, or `gitmenu.json` next
    /// to `exe_dir`.
    #[must_use]
    pub fn bookmarks_path(&self, exe_dir: &Path) -> PathBuf {
        self.paths
            .bookmarks
            .clone()
            .unwrap_or_else(|| exe_dir.join(crate::bookmarks::BOOKMARKS_FILE_NAME))
    }

    /// Format settings for display, one `key = value` per line.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let options = [
            ("git.log_count", self.git.log_count.to_string()),
            ("git.default_remote", self.git.default_remote.clone()),
            ("git.initial_branch", self.git.initial_branch.clone()),
            ("ui.clear_screen", self.ui.clear_screen.to_string()),
            (
                "ui.pause_after_action",
                self.ui.pause_after_action.to_string(),
            ),
            (
                "paths.bookmarks",
                self.paths
                    .bookmarks
                    .as_ref()
                    .map_or_else(String::new, |p| p.display().to_string()),
            ),
        ];

        let max_key_len = options.iter().map(|(k, _)| k.len()).max().unwrap_or(0);

        options
            .into_iter()
            .map(|(key, value)| format!("{key:<max_key_len$} = {value}"))
            .collect()
    }
}

/// Directory containing the running executable, falling back to `.`.
#[must_use]
pub fn exe_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
}
