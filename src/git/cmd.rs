// gitmenu-rs: Interactive Git Helper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Typed git operations.
//!
//! ```text
//! GitClient<R> --> GitRunner::run(args, repo) --> GitOutput
//!                         |
//!            exit != 0 => GitError naming the operation
//! ```
//!
//! Every operation takes the repository path explicitly; nothing depends on
//! the process working directory.

use std::path::Path;
use tracing::debug;

use super::backend::{GitRunner, ShellRunner};
use super::parse::{self, CommitSummary, TrackingMap};
use super::query;
use crate::error::{GitError, GmResult};

/// Where `push` sends the current branch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PushTarget {
    /// Rely on the branch's configured upstream (`git push`).
    Tracked,
    /// `git push [-u] <remote> <branch>`.
    Explicit {
        remote: String,
        branch: String,
        set_upstream: bool,
    },
}

/// Git operations on top of a [`GitRunner`].
#[derive(Debug, Clone, Default)]
pub struct GitClient<R = ShellRunner> {
    runner: R,
}

impl GitClient<ShellRunner> {
    /// Client that shells out to `git` on `PATH`.
    #[must_use]
    pub const fn shell() -> Self {
        Self::new(ShellRunner)
    }
}

impl<R: GitRunner> GitClient<R> {
    pub const fn new(runner: R) -> Self {
        Self { runner }
    }

    pub const fn runner(&self) -> &R {
        &self.runner
    }

    /// Run git and turn a non-zero exit into `GitError::CommandFailed`
    /// labelled with `operation`. Returns stdout with trailing whitespace
    /// removed.
    fn exec(&self, operation: &str, args: &[&str], repo: &Path) -> GmResult<String> {
        let output = self.runner.run(args, repo)?;
        if !output.success() {
            debug!(operation, exit_code = output.exit_code, "git operation failed");
            return Err(GitError::CommandFailed {
                command: operation.to_string(),
                message: output.failure_message(),
            }
            .into());
        }
        Ok(output.stdout.trim_end().to_string())
    }

    /// `git --version`.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if git does not answer.
    pub fn version(&self, cwd: &Path) -> GmResult<String> {
        self.exec("git --version", &["--version"], cwd)
    }

    /// Raw `git status --porcelain` output (leading columns intact).
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the status cannot be read.
    pub fn status_porcelain(&self, repo: &Path) -> GmResult<String> {
        let output = self.runner.run(&["status", "--porcelain"], repo)?;
        if !output.success() {
            return Err(GitError::CommandFailed {
                command: "git status".to_string(),
                message: output.failure_message(),
            }
            .into());
        }
        Ok(output.stdout)
    }

    /// The last `count` commits, newest first.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the log cannot be read (including a
    /// repository without commits).
    pub fn log(&self, repo: &Path, count: usize) -> GmResult<Vec<CommitSummary>> {
        let count = count.to_string();
        let out = self.exec(
            "git log",
            &["log", "-n", &count, "--format=%h %s"],
            repo,
        )?;
        Ok(parse::parse_log(&out))
    }

    /// Local branch short names.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the branches cannot be listed.
    pub fn local_branches(&self, repo: &Path) -> GmResult<Vec<String>> {
        let out = self.exec(
            "git branch",
            &["branch", "--format=%(refname:short)"],
            repo,
        )?;
        Ok(parse::parse_branch_list(&out, false))
    }

    /// Remote-tracking branch short names (`origin/main`, ...).
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the branches cannot be listed.
    pub fn remote_branches(&self, repo: &Path) -> GmResult<Vec<String>> {
        let out = self.exec(
            "git branch -r",
            &["branch", "-r", "--format=%(refname:short)"],
            repo,
        )?;
        Ok(parse::parse_branch_list(&out, true))
    }

    /// Tracking pairs of the local branches, read from their upstream
    /// configuration with `git for-each-ref`.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the branch listing fails.
    pub fn tracking_branches(&self, repo: &Path) -> GmResult<TrackingMap> {
        let out = self.exec(
            "git for-each-ref",
            &["for-each-ref", parse::TRACKING_FORMAT, "refs/heads"],
            repo,
        )?;
        Ok(parse::parse_tracking(&out))
    }

    /// Name of the checked-out branch.
    ///
    /// `git rev-parse --abbrev-ref HEAD` cannot name the branch of a
    /// repository without commits. In that case the symbolic HEAD is read with
    /// gix, and `unborn_hint` (the branch the repository was initialized with)
    /// only answers when gix cannot.
    ///
    /// # Errors
    ///
    /// Returns `GitError::DetachedHead` if HEAD names no branch, or the
    /// underlying error if nothing could be resolved.
    pub fn current_branch(&self, repo: &Path, unborn_hint: Option<&str>) -> GmResult<String> {
        let resolved = self.exec(
            "git rev-parse",
            &["rev-parse", "--abbrev-ref", "HEAD"],
            repo,
        );
        match resolved {
            Ok(name) if !name.is_empty() && name != "HEAD" => return Ok(name),
            Ok(_) => debug!("rev-parse answered HEAD"),
            Err(e) => debug!(error = %e, "rev-parse could not name HEAD"),
        }

        match query::head_branch(repo) {
            Ok(Some(name)) => return Ok(name),
            Ok(None) => {}
            Err(e) if unborn_hint.is_some() => debug!(error = %e, "gix could not read HEAD"),
            Err(e) => return Err(e),
        }
        unborn_hint.map(str::to_string).ok_or_else(|| {
            GitError::DetachedHead {
                path: repo.display().to_string(),
            }
            .into()
        })
    }

    /// Switch to an existing branch.
    ///
    /// # Errors
    ///
    /// Returns `GitError::CheckoutFailed` if git refuses (unknown branch,
    /// conflicting local changes, ...).
    pub fn checkout(&self, repo: &Path, branch: &str) -> GmResult<()> {
        let output = self.runner.run(&["checkout", branch], repo)?;
        if !output.success() {
            return Err(GitError::CheckoutFailed {
                what: branch.to_string(),
                message: output.failure_message(),
            }
            .into());
        }
        Ok(())
    }

    /// Create `branch` and switch to it (`checkout -b`).
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the branch cannot be created.
    pub fn checkout_new(&self, repo: &Path, branch: &str) -> GmResult<()> {
        self.exec("git checkout -b", &["checkout", "-b", branch], repo)?;
        Ok(())
    }

    /// Create `branch` at HEAD without switching.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the branch cannot be created.
    pub fn create_branch(&self, repo: &Path, branch: &str) -> GmResult<()> {
        self.exec("git branch", &["branch", branch], repo)?;
        Ok(())
    }

    /// Force-rename the current branch (`branch -M`); works before the first
    /// commit.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the rename fails.
    pub fn rename_branch(&self, repo: &Path, new_name: &str) -> GmResult<()> {
        self.exec("git branch -M", &["branch", "-M", new_name], repo)?;
        Ok(())
    }

    /// Delete a branch, `-D` when `force`, `-d` otherwise.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if git refuses (e.g. unmerged without `force`).
    pub fn delete_branch(&self, repo: &Path, branch: &str, force: bool) -> GmResult<()> {
        let flag = if force { "-D" } else { "-d" };
        self.exec(&format!("git branch {flag}"), &["branch", flag, branch], repo)?;
        Ok(())
    }

    /// Merge `branch` into the current branch.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` on conflicts or an unknown branch.
    pub fn merge(&self, repo: &Path, branch: &str) -> GmResult<()> {
        self.exec("git merge", &["merge", branch], repo)?;
        Ok(())
    }

    /// `git remote add <name> <url>`.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the remote exists already or the URL is rejected.
    pub fn remote_add(&self, repo: &Path, name: &str, url: &str) -> GmResult<()> {
        self.exec("git remote add", &["remote", "add", name, url], repo)?;
        Ok(())
    }

    /// URL of a configured remote, `None` if there is no such remote.
    ///
    /// # Errors
    ///
    /// Returns an error only if git could not be spawned.
    pub fn remote_url(&self, repo: &Path, name: &str) -> GmResult<Option<String>> {
        let output = self.runner.run(&["remote", "get-url", name], repo)?;
        Ok(output
            .success()
            .then(|| output.stdout.trim().to_string()))
    }

    /// Whether `name` is a configured remote.
    ///
    /// # Errors
    ///
    /// Returns an error only if git could not be spawned.
    pub fn remote_exists(&self, repo: &Path, name: &str) -> GmResult<bool> {
        Ok(self.remote_url(repo, name)?.is_some())
    }

    /// Stage everything (`git add .`).
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if staging fails.
    pub fn add_all(&self, repo: &Path) -> GmResult<()> {
        self.exec("git add", &["add", "."], repo)?;
        Ok(())
    }

    /// Commit the index with `message`.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the commit fails (nothing staged, hooks, ...).
    pub fn commit(&self, repo: &Path, message: &str) -> GmResult<()> {
        self.exec("git commit", &["commit", "-m", message], repo)?;
        Ok(())
    }

    /// Push the current branch.
    ///
    /// # Errors
    ///
    /// Returns `GitError::NoUpstream` when git complains that the branch has
    /// no upstream, `GitError::PushFailed` for any other failure.
    pub fn push(&self, repo: &Path, target: &PushTarget) -> GmResult<()> {
        let (args, branch): (Vec<&str>, Option<&str>) = match target {
            PushTarget::Tracked => (vec!["push"], None),
            PushTarget::Explicit {
                remote,
                branch,
                set_upstream,
            } => {
                let mut args = vec!["push"];
                if *set_upstream {
                    args.push("-u");
                }
                args.extend([remote.as_str(), branch.as_str()]);
                (args, Some(branch.as_str()))
            }
        };

        let output = self.runner.run(&args, repo)?;
        if output.success() {
            return Ok(());
        }

        let message = output.failure_message();
        if is_no_upstream(&message) {
            Err(GitError::NoUpstream {
                branch: branch.unwrap_or("HEAD").to_string(),
                message,
            }
            .into())
        } else {
            Err(GitError::PushFailed { message }.into())
        }
    }

    /// `git pull`, optionally from an explicit remote and branch.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the pull fails.
    pub fn pull(&self, repo: &Path, from: Option<(&str, &str)>) -> GmResult<()> {
        match from {
            Some((remote, branch)) => {
                self.exec("git pull", &["pull", remote, branch], repo)?;
            }
            None => {
                self.exec("git pull", &["pull"], repo)?;
            }
        }
        Ok(())
    }

    /// `git init` inside `repo`.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if initialization fails.
    pub fn init(&self, repo: &Path) -> GmResult<()> {
        self.exec("git init", &["init"], repo)?;
        Ok(())
    }

    /// Read a global config value; `None` when unset or blank.
    ///
    /// # Errors
    ///
    /// Returns an error only if git could not be spawned.
    pub fn global_config_get(&self, key: &str, cwd: &Path) -> GmResult<Option<String>> {
        let output = self.runner.run(&["config", "--global", key], cwd)?;
        let value = output.stdout.trim();
        Ok((output.success() && !value.is_empty()).then(|| value.to_string()))
    }

    /// Write a global config value.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the value cannot be written.
    pub fn global_config_set(&self, key: &str, value: &str, cwd: &Path) -> GmResult<()> {
        self.exec("git config --global", &["config", "--global", key, value], cwd)?;
        Ok(())
    }
}

// "fatal: The current branch x has no upstream branch."
fn is_no_upstream(message: &str) -> bool {
    message.to_lowercase().contains("no upstream")
}
