// gitmenu-rs: Interactive Git Helper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Settings-related commands.

use crate::config::Settings;

/// Display the effective settings.
pub fn run_options_command(settings: &Settings) {
    for line in settings.format_options() {
        println!("{line}");
    }
}

/// Display the settings files that were found.
pub fn run_inis_command(settings_files: &[String]) {
    if settings_files.is_empty() {
        println!("No settings files loaded");
    } else {
        for line in settings_files {
            println!("{line}");
        }
    }
}
