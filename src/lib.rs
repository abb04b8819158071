//! # yesno
//!
//! An interactive yes/no confirmation prompt for shell scripts.
//!
//! The question is shown as the title of a two-item list. The answer is
//! printed to stdout (`yes` or `no`) so scripts can capture it, while the
//! screen itself is drawn on stderr.
//!
//! ## Keys
//!
//! - **y / n**: answer immediately
//! - **↑/k, ↓/j, Enter**: pick from the list
//! - **/**: filter the list
//! - **Esc, q, Ctrl+C**: cancel
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

pub mod choice;
pub mod commands;
pub mod constants;
pub mod tui;
pub mod ui;

pub use choice::Choice;
