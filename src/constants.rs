//! # Constants
//!
//! Centralized constants for magic values used throughout yesno.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

// =============================================================================
// Prompt
// =============================================================================

/// Question shown when no argument is given.
pub const DEFAULT_QUESTION: &str = "Are you sure you want to continue?";

// =============================================================================
// Layout
// =============================================================================

/// Columns of padding on each side of the screen.
pub const PADDING_X: u16 = 2;

/// Rows of padding above and below the screen.
pub const PADDING_Y: u16 = 1;

/// Total horizontal padding subtracted from the terminal width.
pub const HORIZONTAL_PADDING: u16 = PADDING_X * 2;

/// Total vertical padding subtracted from the terminal height.
pub const VERTICAL_PADDING: u16 = PADDING_Y * 2;

/// Rows used by one list entry (title + description + spacer).
pub const ITEM_HEIGHT: u16 = 3;

// =============================================================================
// Exit Status
// =============================================================================

/// The prompt was answered (or answered "Yes" with `--exit-status`).
pub const EXIT_OK: i32 = 0;

/// The terminal driver failed.
pub const EXIT_ERROR: i32 = 1;

/// The prompt was answered "No" and `--exit-status` was given.
pub const EXIT_NO: i32 = 2;

/// The command line could not be parsed.
///
/// Kept apart from clap's default of 2, which is `EXIT_NO`.
pub const EXIT_USAGE: i32 = 64;

/// The prompt was dismissed without an answer (Esc, q or Ctrl+C).
pub const EXIT_CANCELLED: i32 = 130;

// =============================================================================
// Output
// =============================================================================

/// Prefix printed before driver errors.
pub const ERROR_PREFIX: &str = "Error running program:";
