// gitmenu-rs: Interactive Git Helper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Git backend abstraction layer.
//!
//! ```text
//! GitRunner (run argv, capture)  --> ShellRunner (git CLI)
//! GitQuery  (read-only, no exec) --> GixBackend  (pure Rust gix)
//! ```
//!
//! A runner never treats a non-zero exit as an error; that decision belongs
//! to [`super::cmd::GitClient`], which knows what operation was attempted.

use crate::error::{GitError, GixError, GmResult, ProcessError};
use std::path::Path;
use std::process::Command;
use tracing::{debug, trace};

/// Captured result of one git invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GitOutput {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl GitOutput {
    /// Successful output with the given stdout.
    pub fn ok(stdout: impl Into<String>) -> Self {
        Self {
            exit_code: 0,
            stdout: stdout.into(),
            stderr: String::new(),
        }
    }

    /// Failed output with the given exit code and stderr.
    pub fn failed(exit_code: i32, stderr: impl Into<String>) -> Self {
        Self {
            exit_code,
            stdout: String::new(),
            stderr: stderr.into(),
        }
    }

    #[must_use]
    pub const fn success(&self) -> bool {
        self.exit_code == 0
    }

    /// Best available description of a failure: stderr, else stdout, else
    /// the exit code.
    #[must_use]
    pub fn failure_message(&self) -> String {
        let stderr = self.stderr.trim();
        if !stderr.is_empty() {
            return stderr.to_string();
        }
        let stdout = self.stdout.trim();
        if !stdout.is_empty() {
            return stdout.to_string();
        }
        format!("exited with code {}", self.exit_code)
    }
}

// --- Runner Trait (process boundary) ---

/// Runs the git executable.
pub trait GitRunner {
    /// Run `git <args>` inside `cwd` and capture its output.
    ///
    /// # Errors
    ///
    /// Returns `ProcessError::SpawnFailed` only when the process could not be
    /// started. A non-zero exit is reported through [`GitOutput::exit_code`].
    fn run(&self, args: &[&str], cwd: &Path) -> GmResult<GitOutput>;
}

impl<R: GitRunner + ?Sized> GitRunner for &R {
    fn run(&self, args: &[&str], cwd: &Path) -> GmResult<GitOutput> {
        (**self).run(args, cwd)
    }
}

// --- Query Trait (read-only, no subprocess) ---

/// Read-only repository inspection.
pub trait GitQuery {
    /// Whether `path` itself holds a repository (a `.git` marker).
    fn is_git_repo(path: &Path) -> bool;

    /// Branch HEAD points at, even before the first commit.
    /// `None` when HEAD is detached.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the repository cannot be opened or HEAD read.
    fn head_branch(path: &Path) -> GmResult<Option<String>>;
}

// --- ShellRunner Implementation (Git CLI) ---

/// Production runner: spawns `git` from `PATH`.
///
/// Sets `GCM_INTERACTIVE=never` and `GIT_TERMINAL_PROMPT=0` so a credential
/// prompt can never steal the menu's terminal.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShellRunner;

impl GitRunner for ShellRunner {
    fn run(&self, args: &[&str], cwd: &Path) -> GmResult<GitOutput> {
        debug!(cwd = %cwd.display(), args = ?args, "git");

        let output = Command::new("git")
            .args(args)
            .current_dir(cwd)
            .env("GCM_INTERACTIVE", "never")
            .env("GIT_TERMINAL_PROMPT", "0")
            .output()
            .map_err(|source| ProcessError::SpawnFailed {
                command: format!("git {}", args.join(" ")),
                source,
            })?;

        let result = GitOutput {
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        };
        trace!(
            exit_code = result.exit_code,
            stdout_len = result.stdout.len(),
            stderr_len = result.stderr.len(),
            "git finished"
        );
        Ok(result)
    }
}

// --- GixBackend Implementation (Pure Rust) ---

/// Pure Rust backend using gix, for reads that must work without a commit.
pub struct GixBackend;

impl GitQuery for GixBackend {
    fn is_git_repo(path: &Path) -> bool {
        gix::open(path).is_ok()
    }

    fn head_branch(path: &Path) -> GmResult<Option<String>> {
        let repo = gix::open(path).map_err(|e| GitError::Gix(GixError::Open(Box::new(e))))?;
        let head = repo
            .head_name()
            .map_err(|e| GitError::Gix(GixError::Head(e)))?;
        Ok(head.map(|name| name.shorten().to_string()))
    }
}
