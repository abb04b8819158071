//! # UI Utilities
//!
//! Plain-terminal output used outside the interactive screen: diagnostics on
//! stderr and the driver error report on stdout.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::io::{self, IsTerminal};

use owo_colors::OwoColorize;

use crate::constants::ERROR_PREFIX;

// =============================================================================
// Diagnostics
// =============================================================================

/// Formats positional arguments as `Arg N is <value>` lines (1-based).
pub fn format_debug_args(args: &[&str]) -> Vec<String> {
    args.iter()
        .enumerate()
        .map(|(i, arg)| format!("Arg {} is {}", i + 1, arg))
        .collect()
}

/// Prints the positional arguments to stderr.
pub fn print_debug_args(args: &[&str]) {
    let color = io::stderr().is_terminal();
    for line in format_debug_args(args) {
        if color {
            eprintln!("{}", line.dimmed());
        } else {
            eprintln!("{line}");
        }
    }
}

// =============================================================================
// Errors
// =============================================================================

/// Formats a driver error report line.
pub fn format_error(err: &anyhow::Error) -> String {
    format!("{ERROR_PREFIX} {err:#}")
}

/// Prints a driver error to stdout, colored only on a terminal.
pub fn print_error(err: &anyhow::Error) {
    if io::stdout().is_terminal() {
        println!("{} {err:#}", ERROR_PREFIX.red().bold());
    } else {
        println!("{}", format_error(err));
    }
}
