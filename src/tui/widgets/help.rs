//! Key binding help line.

use ratatui::text::{Line, Span};

use crate::tui::theme::Theme;

/// A key binding shown in the help line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyHelp {
    /// Key label, e.g. `"y"` or `"↑/k"`
    pub key: &'static str,
    /// What the key does
    pub description: &'static str,
}

impl KeyHelp {
    pub const fn new(key: &'static str, description: &'static str) -> Self {
        Self { key, description }
    }
}

/// Build a single help line: `key desc • key desc • ...`.
pub fn help_line(bindings: &[KeyHelp], theme: &Theme) -> Line<'static> {
    let mut spans = Vec::with_capacity(bindings.len() * 3);
    for (i, binding) in bindings.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" \u{2022} ", theme.help_description));
        }
        spans.push(Span::styled(binding.key, theme.help_key));
        spans.push(Span::styled(
            format!(" {}", binding.description),
            theme.help_description,
        ));
    }
    Line::from(spans)
}
