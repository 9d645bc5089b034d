// gitmenu-rs: Interactive Git Helper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Startup environment checks.

use std::path::{Path, PathBuf};
use tracing::{info, warn};

use super::App;
use crate::error::{GmResult, ProcessError};
use crate::git::backend::GitRunner;
use crate::git::cmd::GitClient;

/// Identity keys git refuses to commit without, with their prompts.
const IDENTITY_KEYS: [(&str, &str); 2] = [("user.name", "Your name"), ("user.email", "Your email")];

/// Locate `git` on `PATH`.
///
/// # Errors
///
/// Returns `ProcessError::ExecutableNotFound` if git is not installed.
pub fn ensure_git_available() -> GmResult<PathBuf> {
    which::which("git").map_err(|e| {
        warn!(error = %e, "git lookup failed");
        ProcessError::ExecutableNotFound {
            name: "git".to_string(),
        }
        .into()
    })
}

/// Log the git version.
///
/// # Errors
///
/// Returns a `GitError` if `git --version` fails.
pub fn probe_version<R: GitRunner>(git: &GitClient<R>, cwd: &Path) -> GmResult<String> {
    let version = git.version(cwd)?;
    info!(%version, "git found");
    Ok(version)
}

/// Ask for `user.name` / `user.email` when they are not set globally.
///
/// An empty answer leaves the value unset; committing will fail until it is
/// configured.
///
/// # Errors
///
/// Returns `GmError::InputClosed` when input ends, or a `GitError` if the
/// value cannot be written.
pub fn ensure_identity<R: GitRunner>(app: &mut App<R>, cwd: &Path) -> GmResult<()> {
    for (key, label) in IDENTITY_KEYS {
        if app.git.global_config_get(key, cwd)?.is_some() {
            continue;
        }

        app.term.warn(format!("git {key} is not set"))?;
        let value = app.term.prompt(label)?;
        if value.is_empty() {
            warn!(key, "identity left unset");
            app.term
                .warn(format!("Skipped; commits will fail until {key} is set"))?;
            continue;
        }
        app.git.global_config_set(key, &value, cwd)?;
        info!(key, "identity configured");
    }
    Ok(())
}
