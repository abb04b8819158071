//! # Commands
//!
//! CLI command implementations for yesno.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

pub mod ask;
pub mod completions;

pub use self::ask::{execute as ask, finish, AskArgs};
pub use self::completions::execute as completions;
