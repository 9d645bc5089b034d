// gitmenu-rs: Interactive Git Helper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Terminal interaction for the menus.
//!
//! ```text
//! prompt / confirm / pause                 say / error / clear
//!          |                                        |
//!          v                                        v
//!     Prompter                               Box<dyn Write>
//!     ├─ Dialog(Term)   tty: dialoguer       stdout | Transcript
//!     └─ Lines(BufRead) piped or scripted
//! ```
//!
//! On a real terminal the questions are asked through `dialoguer`. When
//! stdin is piped, or in tests, answers are read line by line instead.
//! End of input is reported as [`GmError::InputClosed`] by every reading
//! method, which lets a piped or scripted session run to completion instead
//! of spinning on an invalid choice forever.

use colored::Colorize;
use console::Term;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input};
use std::cell::RefCell;
use std::fmt::Display;
use std::io::{self, BufRead, Cursor, IsTerminal, Write};
use std::rc::Rc;

use crate::config::types::UiSettings;
use crate::error::{GmError, GmResult};

/// Where answers come from.
enum Prompter {
    Dialog(Term),
    Lines(Box<dyn BufRead>),
}

/// Line-oriented terminal used by every menu.
pub struct Terminal {
    prompter: Prompter,
    output: Box<dyn Write>,
    clear_screen: bool,
    pause: bool,
}

impl Terminal {
    /// Terminal over the process's stdin and stdout.
    ///
    /// Interactive prompts and screen clearing need both ends attached to a
    /// terminal. Otherwise stdin is read line by line.
    #[must_use]
    pub fn stdio(ui: &UiSettings) -> Self {
        let term = Term::stdout();
        let interactive = io::stdin().is_terminal() && term.is_term();
        let prompter = if interactive {
            Prompter::Dialog(term)
        } else {
            Prompter::Lines(Box::new(io::stdin().lock()))
        };
        Self {
            prompter,
            output: Box::new(io::stdout()),
            clear_screen: ui.clear_screen && interactive,
            pause: ui.pause_after_action,
        }
    }

    /// Terminal that reads `input` and records everything written.
    ///
    /// Neither clears the screen nor waits after actions.
    #[must_use]
    pub fn scripted(input: &str) -> (Self, Transcript) {
        let transcript = Transcript::default();
        let terminal = Self {
            prompter: Prompter::Lines(Box::new(Cursor::new(input.as_bytes().to_vec()))),
            output: Box::new(transcript.clone()),
            clear_screen: false,
            pause: false,
        };
        (terminal, transcript)
    }

    /// Enable or disable the acknowledgment prompt after actions.
    #[must_use]
    pub const fn with_pause(mut self, pause: bool) -> Self {
        self.pause = pause;
        self
    }

    /// Write one line.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the output cannot be written.
    pub fn say(&mut self, line: impl Display) -> GmResult<()> {
        writeln!(self.output, "{line}")?;
        Ok(())
    }

    /// Write an empty line.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the output cannot be written.
    pub fn blank(&mut self) -> GmResult<()> {
        self.say("")
    }

    /// Write a section heading.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the output cannot be written.
    pub fn heading(&mut self, title: &str) -> GmResult<()> {
        self.say(title.bold().cyan())
    }

    /// Write a success message.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the output cannot be written.
    pub fn success(&mut self, message: impl Display) -> GmResult<()> {
        self.say(message.to_string().green())
    }

    /// Write a warning.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the output cannot be written.
    pub fn warn(&mut self, message: impl Display) -> GmResult<()> {
        self.say(message.to_string().yellow())
    }

    /// Write an error message.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the output cannot be written.
    pub fn error(&mut self, message: impl Display) -> GmResult<()> {
        self.say(format!("Error: {message}").red())
    }

    /// Ask a question and return the trimmed answer.
    ///
    /// # Errors
    ///
    /// Returns `GmError::InputClosed` at end of input.
    pub fn prompt(&mut self, message: &str) -> GmResult<String> {
        if let Prompter::Dialog(term) = &self.prompter {
            let answer: String = Input::with_theme(&ColorfulTheme::default())
                .with_prompt(message)
                .allow_empty(true)
                .interact_text_on(term)
                .map_err(dialog_error)?;
            return Ok(answer.trim().to_string());
        }
        write!(self.output, "{message}: ")?;
        self.output.flush()?;
        self.read_answer()
    }

    /// Ask a question showing `default`, which is returned for an empty
    /// answer.
    ///
    /// # Errors
    ///
    /// Returns `GmError::InputClosed` at end of input.
    pub fn prompt_default(&mut self, message: &str, default: &str) -> GmResult<String> {
        let answer = if let Prompter::Dialog(term) = &self.prompter {
            let answer: String = Input::with_theme(&ColorfulTheme::default())
                .with_prompt(message)
                .default(default.to_string())
                .interact_text_on(term)
                .map_err(dialog_error)?;
            answer.trim().to_string()
        } else {
            write!(self.output, "{message} [{default}]: ")?;
            self.output.flush()?;
            self.read_answer()?
        };
        if answer.is_empty() {
            Ok(default.to_string())
        } else {
            Ok(answer)
        }
    }

    /// Ask a yes/no question until the answer is one or the other.
    ///
    /// An empty answer picks `default`.
    ///
    /// # Errors
    ///
    /// Returns `GmError::InputClosed` at end of input.
    pub fn confirm(&mut self, message: &str, default: bool) -> GmResult<bool> {
        if let Prompter::Dialog(term) = &self.prompter {
            return Confirm::with_theme(&ColorfulTheme::default())
                .with_prompt(message)
                .default(default)
                .interact_on(term)
                .map_err(dialog_error);
        }
        let hint = if default { "Y/n" } else { "y/N" };
        loop {
            write!(self.output, "{message} [{hint}]: ")?;
            self.output.flush()?;
            match self.read_answer()?.to_lowercase().as_str() {
                "" => return Ok(default),
                "y" | "yes" => return Ok(true),
                "n" | "no" => return Ok(false),
                other => self.warn(format!("Please answer y or n (got '{other}')"))?,
            }
        }
    }

    /// Wait for Enter before the next redraw, when enabled.
    ///
    /// # Errors
    ///
    /// Returns `GmError::InputClosed` at end of input.
    pub fn pause(&mut self) -> GmResult<()> {
        if self.pause {
            write!(self.output, "\nPress Enter to continue...")?;
            self.output.flush()?;
            self.read_answer()?;
        }
        Ok(())
    }

    /// Clear the screen, when enabled.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the terminal cannot be cleared.
    pub fn clear(&mut self) -> GmResult<()> {
        if self.clear_screen
            && let Prompter::Dialog(term) = &self.prompter
        {
            term.clear_screen()?;
        }
        Ok(())
    }

    fn read_answer(&mut self) -> GmResult<String> {
        match &mut self.prompter {
            Prompter::Dialog(term) => {
                let line = term.read_line().map_err(closed_on_eof)?;
                Ok(line.trim().to_string())
            }
            Prompter::Lines(input) => {
                let mut line = String::new();
                if input.read_line(&mut line)? == 0 {
                    return Err(GmError::InputClosed);
                }
                Ok(line.trim().to_string())
            }
        }
    }
}

/// Ctrl-D and Ctrl-C at a dialog end the session like end of input does.
fn closed_on_eof(err: io::Error) -> GmError {
    match err.kind() {
        io::ErrorKind::UnexpectedEof | io::ErrorKind::Interrupted => GmError::InputClosed,
        _ => err.into(),
    }
}

fn dialog_error(err: dialoguer::Error) -> GmError {
    let dialoguer::Error::IO(err) = err;
    closed_on_eof(err)
}

/// Shared in-memory sink for a scripted [`Terminal`].
#[derive(Debug, Clone, Default)]
pub struct Transcript(Rc<RefCell<Vec<u8>>>);

impl Transcript {
    /// Everything written so far.
    #[must_use]
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.borrow()).into_owned()
    }
}

impl Write for Transcript {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
