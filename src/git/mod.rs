// gitmenu-rs: Interactive Git Helper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Git operations module.
//!
//! ```text
//!        Public API
//!   cmd.rs (GitClient)   query.rs      parse.rs
//!          |                |         (pure text)
//!          v                v
//!      ,------------------------,
//!      |    backend (traits)    |
//!      '--+------------------+--'
//!         |                  |
//!         v                  v
//!     GitRunner           GitQuery
//!   (CLI, all ops)      (gix, read)
//!         |                  |
//!         v                  v
//!    ShellRunner         GixBackend
//!    status/log/branch   .is_git_repo
//!    commit/push/pull    .head_branch
//! ```
//!
//! **`ShellRunner`**: every state-changing operation goes through git.
//! **`GixBackend`**: repository marker and unborn HEAD, no subprocess.

pub mod backend;
pub mod cmd;
pub mod parse;
pub mod query;

#[cfg(test)]
pub(crate) mod test_utils;
