//! Visual styles used when rendering.
//!
//! Passed explicitly into `render` so drawing stays a pure function of
//! screen state.

use ratatui::style::{Color, Modifier, Style};

/// Styles for every element the prompt draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Title bar holding the question
    pub title: Style,
    /// Title of the highlighted item
    pub selected_title: Style,
    /// Description of the highlighted item
    pub selected_description: Style,
    /// Title of other items
    pub normal_title: Style,
    /// Description of other items
    pub normal_description: Style,
    /// Marker drawn left of the highlighted item
    pub cursor: Style,
    /// Filter prompt and status line
    pub status: Style,
    /// Key names in the help line
    pub help_key: Style,
    /// Descriptions in the help line
    pub help_description: Style,
}

impl Default for Theme {
    fn default() -> Self {
        let accent = Color::Rgb(0xAD, 0x58, 0xB4);
        Self {
            title: Style::default()
                .fg(Color::Rgb(0xFF, 0xFD, 0xF5))
                .bg(Color::Rgb(0x25, 0xA0, 0x65)),
            selected_title: Style::default().fg(accent).add_modifier(Modifier::BOLD),
            selected_description: Style::default().fg(accent),
            normal_title: Style::default(),
            normal_description: Style::default().fg(Color::DarkGray),
            cursor: Style::default().fg(accent),
            status: Style::default().fg(Color::Rgb(0x04, 0xB5, 0x75)),
            help_key: Style::default().fg(Color::Gray),
            help_description: Style::default().fg(Color::DarkGray),
        }
    }
}

impl Theme {
    /// A theme without any colors or modifiers.
    pub fn plain() -> Self {
        let none = Style::default();
        Self {
            title: none,
            selected_title: none,
            selected_description: none,
            normal_title: none,
            normal_description: none,
            cursor: none,
            status: none,
            help_key: none,
            help_description: none,
        }
    }
}
