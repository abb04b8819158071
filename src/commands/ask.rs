//! # Ask Command
//!
//! Shows the yes/no prompt and reports the answer.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::io::{self, Write};

use anyhow::{Context, Result};

use crate::{
    choice::Choice,
    constants::{DEFAULT_QUESTION, EXIT_CANCELLED, EXIT_NO, EXIT_OK},
    tui::{screens, theme::Theme},
    ui,
};

/// Arguments for the ask command
#[derive(Debug, Clone, Default)]
pub struct AskArgs {
    /// Question text; the default question is used when absent
    pub question: Option<String>,
    /// Positional arguments after the question
    pub extra: Vec<String>,
    /// Encode the answer in the exit status
    pub exit_status: bool,
    /// Print the positional arguments to stderr before prompting
    pub debug_args: bool,
    /// Draw without colors
    pub no_color: bool,
}

impl AskArgs {
    /// The question to show, falling back to the default.
    pub fn question(&self) -> &str {
        self.question.as_deref().unwrap_or(DEFAULT_QUESTION)
    }

    /// All positional arguments in command-line order.
    pub fn positional(&self) -> Vec<&str> {
        self.question
            .iter()
            .chain(self.extra.iter())
            .map(String::as_str)
            .collect()
    }

    /// Theme selected by the color flag.
    pub fn theme(&self) -> Theme {
        if self.no_color {
            Theme::plain()
        } else {
            Theme::default()
        }
    }
}

/// Executes the ask command on the real terminal.
///
/// Returns the process exit status.
pub fn execute(args: &AskArgs) -> Result<i32> {
    if args.debug_args {
        ui::print_debug_args(&args.positional());
    }

    let outcome = screens::confirm(args.question(), &args.theme())?;
    finish(outcome, args.exit_status, &mut io::stdout().lock())
}

/// Writes the answer to `out` and maps it to an exit status.
///
/// A cancelled prompt writes nothing.
pub fn finish(outcome: Option<Choice>, exit_status: bool, out: &mut impl Write) -> Result<i32> {
    let Some(choice) = outcome else {
        return Ok(EXIT_CANCELLED);
    };

    writeln!(out, "{choice}").context("Failed to write answer")?;
    out.flush().context("Failed to write answer")?;

    Ok(exit_code(choice, exit_status))
}

/// Exit status for an answered prompt.
pub const fn exit_code(choice: Choice, exit_status: bool) -> i32 {
    match (choice, exit_status) {
        (Choice::No, true) => EXIT_NO,
        _ => EXIT_OK,
    }
}
