// gitmenu-rs: Interactive Git Helper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!               GmError (~16 bytes)
//!                     |
//!   +-------+-------+-+-----+-------+-------+
//!   |       |       |       |       |       |
//!   v       v       v       v       v       v
//!  Git   Process  Config  Input  Closed    Io
//!  Box     Box     Box     Box            Box
//!
//! Sub-errors (unboxed internally):
//!   Git      CommandFailed, CheckoutFailed, NoUpstream, PushFailed,
//!            DetachedHead, Gix
//!   Process  ExecutableNotFound, SpawnFailed
//!   Config   WriteError, InvalidValue
//!   Input    InvalidChoice, InvalidBranchIndex, CurrentBranch, ...
//! ```
//!
//! Git and process errors abort the running workflow and are reported by the
//! menu that started it. Input errors never leave the menu that produced
//! them. `InputClosed` is the only error that escapes the main loop.

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`GmError`].
pub type GmResult<T> = std::result::Result<T, GmError>;

/// Top-level application error type.
///
/// All sub-errors are boxed to keep this enum small on the stack.
#[derive(Debug, Error)]
pub enum GmError {
    /// Git operation failed.
    #[error("git error: {0}")]
    Git(#[from] Box<GitError>),

    /// Process execution error.
    #[error("process error: {0}")]
    Process(#[from] Box<ProcessError>),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),

    /// Invalid user input, handled by the menu that asked for it.
    #[error("{0}")]
    Input(#[from] Box<InputError>),

    /// The terminal input stream was closed.
    #[error("input closed")]
    InputClosed,

    /// I/O error.
    #[error("io error: {0}")]
    Io(Box<std::io::Error>),
}

impl GmError {
    /// Whether the error means no further input can be read.
    #[must_use]
    pub const fn is_input_closed(&self) -> bool {
        matches!(self, Self::InputClosed)
    }

    /// Borrow the git error, if this is one.
    #[must_use]
    pub fn as_git(&self) -> Option<&GitError> {
        match self {
            Self::Git(err) => Some(err),
            _ => None,
        }
    }

    /// Borrow the input error, if this is one.
    #[must_use]
    pub fn as_input(&self) -> Option<&InputError> {
        match self {
            Self::Input(err) => Some(err),
            _ => None,
        }
    }
}

// --- From implementations for boxing ---

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for GmError {
                fn from(err: $error) -> Self {
                    GmError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    GitError => Git,
    ProcessError => Process,
    ConfigError => Config,
    InputError => Input,
    std::io::Error => Io,
}

// --- Gix Errors ---

/// Wrapper for gix-specific errors.
#[derive(Debug, Error)]
pub enum GixError {
    /// Failed to open repository.
    #[error("failed to open repository: {0}")]
    Open(#[from] Box<gix::open::Error>),

    /// Failed to get HEAD reference.
    #[error("failed to get head reference: {0}")]
    Head(#[from] gix::reference::find::existing::Error),
}

// --- Git Errors ---

/// Git operation errors.
#[derive(Debug, Error)]
pub enum GitError {
    /// Git command exited with a non-zero status.
    #[error("{command} failed: {message}")]
    CommandFailed { command: String, message: String },

    /// Error from gix library.
    #[error("gix error: {0}")]
    Gix(#[from] GixError),

    /// Checkout operation failed.
    #[error("failed to checkout {what}: {message}")]
    CheckoutFailed { what: String, message: String },

    /// Push was rejected because the branch tracks nothing.
    #[error("branch '{branch}' has no upstream configured: {message}")]
    NoUpstream { branch: String, message: String },

    /// Push failed for any other reason.
    #[error("push failed: {message}")]
    PushFailed { message: String },

    /// HEAD does not point at a branch.
    #[error("HEAD is detached in {path}")]
    DetachedHead { path: String },
}

// --- Process Errors ---

/// Process execution errors.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// Executable not found in PATH.
    #[error("executable not found: '{name}' (not in PATH)")]
    ExecutableNotFound { name: String },

    /// Failed to spawn process.
    #[error("failed to spawn process '{command}': {source}")]
    SpawnFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to write configuration file.
    #[error("failed to write config file '{path}': {message}")]
    WriteError { path: String, message: String },

    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },
}

// --- Input Errors ---

/// Rejected user input.
#[derive(Debug, Error)]
pub enum InputError {
    /// Menu choice that maps to nothing.
    #[error("invalid choice: '{0}'")]
    InvalidChoice(String),

    /// Branch number outside the listed range.
    #[error("no branch numbered {index} (1-{count} listed)")]
    InvalidBranchIndex { index: usize, count: usize },

    /// Operation targets the branch that is checked out.
    #[error("cannot {action} '{branch}': it is the current branch")]
    CurrentBranch { action: String, branch: String },

    /// Branch name already taken.
    #[error("branch '{0}' already exists")]
    BranchExists(String),

    /// Required value left blank.
    #[error("{0} must not be empty")]
    EmptyValue(String),
}

#[cfg(test)]
mod tests;
