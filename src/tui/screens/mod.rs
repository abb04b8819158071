//! TUI screens for interactive workflows.

mod confirm;

pub use confirm::{confirm, viewport, ConfirmScreen};
