//! TUI widgets for interactive components.

mod choice_list;
mod help;
mod text_input;

pub use choice_list::{ChoiceList, FilterState, ListAction};
pub use help::{help_line, KeyHelp};
pub use text_input::TextInput;
