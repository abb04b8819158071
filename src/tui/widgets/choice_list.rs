//! Titled list of choices with an optional text filter.
//!
//! The list owns its own small state machine:
//!
//! ```text
//! Unfiltered --'/'--> Filtering --Enter--> FilterApplied
//!      ^                  |                     |
//!      +------Esc---------+---------Esc---------+
//! ```

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::TextInput;
use crate::{choice::Choice, constants::ITEM_HEIGHT, tui::theme::Theme};

/// Where the list is in its filter lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterState {
    /// No filter; all items visible
    #[default]
    Unfiltered,
    /// Keystrokes are edited into the filter text
    Filtering,
    /// A filter was accepted and is narrowing the items
    FilterApplied,
}

/// Actions from list interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListAction {
    /// No action, continue
    None,
    /// User activated the highlighted item
    Activate(Choice),
    /// User dismissed the list
    Cancel,
}

/// Two-row choice list with a title bar and live filtering.
#[derive(Debug, Clone)]
pub struct ChoiceList {
    items: Vec<Choice>,
    title: String,
    filter: TextInput,
    filter_state: FilterState,
    /// Index into the visible (filtered) items
    cursor: usize,
}

impl ChoiceList {
    /// Create a list over `items` in the given order.
    pub fn new(items: Vec<Choice>) -> Self {
        Self {
            items,
            title: String::new(),
            filter: TextInput::new("Filter: "),
            filter_state: FilterState::Unfiltered,
            cursor: 0,
        }
    }

    /// Set the title bar text.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Get the title bar text.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// All items, ignoring the filter.
    pub fn items(&self) -> &[Choice] {
        &self.items
    }

    /// Items that match the current filter, in list order.
    pub fn visible(&self) -> Vec<Choice> {
        if self.filter_state == FilterState::Unfiltered {
            return self.items.clone();
        }
        let query = self.filter.content();
        self.items
            .iter()
            .copied()
            .filter(|choice| choice.matches(query))
            .collect()
    }

    /// Highlighted index within the visible items.
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// The highlighted choice, if any item is visible.
    pub fn selected(&self) -> Option<Choice> {
        self.visible().get(self.cursor).copied()
    }

    /// Current filter lifecycle state.
    pub const fn filter_state(&self) -> FilterState {
        self.filter_state
    }

    /// Check whether keystrokes are currently going to the filter.
    pub fn is_filtering(&self) -> bool {
        self.filter_state == FilterState::Filtering
    }

    /// Current filter text.
    pub fn filter_text(&self) -> &str {
        self.filter.content()
    }

    /// Insert pasted text into the filter. Ignored unless filtering.
    pub fn insert_filter_text(&mut self, text: &str) {
        if self.is_filtering() {
            self.filter.insert_text(text);
            self.cursor = 0;
        }
    }

    /// Move selection up, wrapping to the bottom.
    pub fn select_previous(&mut self) {
        let len = self.visible().len();
        if len > 0 {
            self.cursor = (self.cursor + len - 1) % len;
        }
    }

    /// Move selection down, wrapping to the top.
    pub fn select_next(&mut self) {
        let len = self.visible().len();
        if len > 0 {
            self.cursor = (self.cursor + 1) % len;
        }
    }

    fn clamp_cursor(&mut self) {
        let len = self.visible().len();
        self.cursor = self.cursor.min(len.saturating_sub(1));
    }

    /// Drop the filter, keeping the highlight on the same choice.
    fn reset_filter(&mut self) {
        let selected = self.selected();
        self.filter.clear();
        self.filter_state = FilterState::Unfiltered;
        match selected.and_then(|choice| self.items.iter().position(|c| *c == choice)) {
            Some(index) => self.cursor = index,
            None => self.clamp_cursor(),
        }
    }

    /// Handle a key event.
    pub fn handle_key(&mut self, key: KeyEvent) -> ListAction {
        if self.is_filtering() {
            self.handle_filter_key(key);
            return ListAction::None;
        }

        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.select_previous(),
            KeyCode::Down | KeyCode::Char('j') => self.select_next(),
            KeyCode::Home | KeyCode::Char('g') => self.cursor = 0,
            KeyCode::End | KeyCode::Char('G') => {
                self.cursor = self.visible().len().saturating_sub(1);
            }
            KeyCode::Char('/') => {
                self.filter_state = FilterState::Filtering;
                self.cursor = 0;
            }
            KeyCode::Enter => {
                return self.selected().map_or(ListAction::None, ListAction::Activate);
            }
            KeyCode::Esc => {
                if self.filter_state == FilterState::FilterApplied {
                    self.reset_filter();
                } else {
                    return ListAction::Cancel;
                }
            }
            KeyCode::Char('q') => return ListAction::Cancel,
            _ => {}
        }
        ListAction::None
    }

    fn handle_filter_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => {
                if self.filter.is_empty() {
                    self.filter_state = FilterState::Unfiltered;
                } else {
                    self.filter_state = FilterState::FilterApplied;
                }
                self.clamp_cursor();
            }
            KeyCode::Esc => self.reset_filter(),
            KeyCode::Up => self.select_previous(),
            KeyCode::Down => self.select_next(),
            _ => {
                if self.filter.handle_key(key) {
                    self.cursor = 0;
                }
            }
        }
    }

    /// Render title bar, status line and the page holding the cursor.
    pub fn render(&self, area: Rect, buf: &mut Buffer, theme: &Theme) {
        let chunks = Layout::vertical([
            Constraint::Length(1), // Title
            Constraint::Length(1),
            Constraint::Length(1), // Status / filter input
            Constraint::Length(1),
            Constraint::Min(0), // Items
        ])
        .split(area);

        let title = Line::from(Span::styled(format!(" {} ", self.title), theme.title));
        Paragraph::new(title).render(chunks[0], buf);

        Paragraph::new(self.status_line(theme)).render(chunks[2], buf);

        self.render_items(chunks[4], buf, theme);
    }

    fn status_line(&self, theme: &Theme) -> Line<'_> {
        let count = self.visible().len();
        let noun = if count == 1 { "item" } else { "items" };
        match self.filter_state {
            FilterState::Filtering => self.filter.line(theme, true),
            FilterState::FilterApplied => Line::from(Span::styled(
                format!("\u{201c}{}\u{201d} {count} {noun}", self.filter.content()),
                theme.status,
            )),
            FilterState::Unfiltered => {
                Line::from(Span::styled(format!("{count} {noun}"), theme.normal_description))
            }
        }
    }

    fn render_items(&self, area: Rect, buf: &mut Buffer, theme: &Theme) {
        if area.is_empty() {
            return;
        }
        let visible = self.visible();
        if visible.is_empty() {
            let empty = Line::from(Span::styled("No items.", theme.normal_description));
            buf.set_line(area.x, area.y, &empty, area.width);
            return;
        }

        // Page through items when the viewport cannot show them all.
        let per_page = usize::from((area.height / ITEM_HEIGHT).max(1));
        let start = (self.cursor / per_page) * per_page;

        let mut y = area.y;
        for (offset, choice) in visible.iter().enumerate().skip(start).take(per_page) {
            if y >= area.bottom() {
                break;
            }
            let selected = offset == self.cursor;
            let (marker, title_style, desc_style) = if selected {
                (
                    Span::styled("\u{2502} ", theme.cursor),
                    theme.selected_title,
                    theme.selected_description,
                )
            } else {
                (
                    Span::raw("  "),
                    theme.normal_title,
                    theme.normal_description,
                )
            };

            let title = Line::from(vec![
                marker.clone(),
                Span::styled(choice.title(), title_style),
            ]);
            buf.set_line(area.x, y, &title, area.width);

            if y + 1 < area.bottom() {
                let desc = Line::from(vec![
                    marker,
                    Span::styled(choice.description(), desc_style),
                ]);
                buf.set_line(area.x, y + 1, &desc, area.width);
            }
            y = y.saturating_add(ITEM_HEIGHT);
        }
    }
}
