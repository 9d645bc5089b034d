// gitmenu-rs: Interactive Git Helper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Global CLI options available for all commands.
//!
//! # Option Precedence
//!
//! ```text
//! --ini FILE          <- Additional settings files (can repeat)
//! --bookmarks FILE    <- paths.bookmarks override
//! --log-level N       <- Console verbosity (0-5)
//! --file-log-level N  <- File verbosity (defaults to trace)
//! --log-file FILE     <- Also log to FILE
//!
//! Precedence: CLI flags > env > --ini > gitmenu.toml > defaults
//! ```

use clap::Args;
use std::path::PathBuf;

/// Global options available for all commands.
#[derive(Debug, Clone, Default, Args)]
pub struct GlobalOptions {
    /// Path to additional TOML settings file(s).
    /// Can be specified multiple times.
    #[arg(short = 'i', long = "ini", value_name = "FILE", action = clap::ArgAction::Append)]
    pub inis: Vec<PathBuf>,

    /// Bookmark file to read and write instead of the configured one.
    #[arg(short = 'b', long = "bookmarks", value_name = "FILE")]
    pub bookmarks: Option<PathBuf>,

    /// Console log level (0=silent, 1=errors, 2=warnings, 3=info, 4=debug, 5=trace).
    #[arg(short = 'l', long = "log-level", value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=5)
    )]
    pub log_level: Option<u8>,

    /// File log level.
    #[arg(long = "file-log-level", value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=5)
    )]
    pub file_log_level: Option<u8>,

    /// Path to log file.
    #[arg(long = "log-file", value_name = "FILE")]
    pub log_file: Option<PathBuf>,
}

impl GlobalOptions {
    /// Settings keys overridden from the command line.
    #[must_use]
    pub fn to_settings_overrides(&self) -> Vec<(&'static str, String)> {
        let mut overrides = Vec::new();
        if let Some(ref path) = self.bookmarks {
            overrides.push(("paths.bookmarks", path.display().to_string()));
        }
        overrides
    }
}
