// gitmenu-rs: Interactive Git Helper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for gitmenu using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! gitmenu [global options]            interactive menus
//! gitmenu [global options] <command>
//!   version | -v
//!   options
//!   inis
//!   repos
//! ```

pub mod global;


use crate::cli::global::GlobalOptions;
use clap::{Parser, Subcommand};

/// Interactive Git Helper
///
/// A menu-driven front end for everyday git work.
#[derive(Debug, Parser)]
#[command(
    name = "gitmenu",
    author,
    version,
    about = "Interactive Git Helper",
    long_about = "gitmenu-rs Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  A menu-driven helper for committing, pushing, pulling and\n\
                  managing branches across a set of saved repositories.\n\n\
                  Run `gitmenu` without a command to start the menus.",
    after_help = "SETTINGS FILES:\n\n\
                  gitmenu looks for `gitmenu.toml` beside the executable, then in\n\
                  the current directory; the latter overrides the former. Files\n\
                  given with --ini are loaded after both, and GITMENU_* environment\n\
                  variables override every file.\n\n\
                  Saved repositories are kept in `gitmenu.json` beside the\n\
                  executable unless paths.bookmarks or --bookmarks says otherwise."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute; none starts the interactive menus
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    #[command(visible_alias = "-v")]
    Version,

    /// Lists all settings and their effective values.
    Options,

    /// Lists the settings files that were loaded.
    Inis,

    /// Lists the saved repositories.
    Repos,
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}
