//! Single-line inline text input used for filtering.
//!
//! Fully supports UTF-8 input including multi-byte characters.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    style::Modifier,
    text::{Line, Span},
};

use crate::tui::theme::Theme;

/// Single-line text input with cursor, drawn after a short prompt.
///
/// The cursor position is tracked as a character index (not byte index)
/// to properly handle UTF-8 multi-byte characters.
#[derive(Debug, Clone)]
pub struct TextInput {
    content: String,
    /// Cursor position as character index (0 = before first char)
    cursor: usize,
    prompt: String,
}

impl TextInput {
    /// Create a new empty input shown after `prompt`.
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            content: String::new(),
            cursor: 0,
            prompt: prompt.into(),
        }
    }

    /// Get the current content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Check if the input is empty.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Remove all content.
    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
    }

    /// Returns the byte index for the current character cursor position.
    fn cursor_byte_index(&self) -> usize {
        self.content
            .char_indices()
            .nth(self.cursor)
            .map_or(self.content.len(), |(i, _)| i)
    }

    fn char_count(&self) -> usize {
        self.content.chars().count()
    }

    /// Insert text at the current cursor position.
    ///
    /// Used for paste. Newlines become spaces since this is a single-line input.
    pub fn insert_text(&mut self, text: &str) {
        let flattened: String = text
            .chars()
            .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
            .collect();

        let byte_idx = self.cursor_byte_index();
        self.content.insert_str(byte_idx, &flattened);
        self.cursor += flattened.chars().count();
    }

    /// Handle a key event.
    ///
    /// Returns `true` if the content changed.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char(c) => {
                if key.modifiers.contains(KeyModifiers::CONTROL) {
                    return match c {
                        // Ctrl+U: clear line
                        'u' => {
                            let changed = !self.content.is_empty();
                            self.clear();
                            changed
                        }
                        // Ctrl+W: delete word backward
                        'w' => {
                            let before = self.content.len();
                            while self.cursor > 0 && self.char_at(self.cursor - 1) == Some(' ') {
                                self.delete_char_before_cursor();
                            }
                            while self.cursor > 0 && self.char_at(self.cursor - 1) != Some(' ') {
                                self.delete_char_before_cursor();
                            }
                            before != self.content.len()
                        }
                        _ => false,
                    };
                }
                let byte_idx = self.cursor_byte_index();
                self.content.insert(byte_idx, c);
                self.cursor += 1;
                true
            }
            KeyCode::Backspace => {
                if self.cursor == 0 {
                    return false;
                }
                self.delete_char_before_cursor();
                true
            }
            KeyCode::Delete => {
                if self.cursor >= self.char_count() {
                    return false;
                }
                let byte_idx = self.cursor_byte_index();
                self.content.remove(byte_idx);
                true
            }
            KeyCode::Left => {
                self.cursor = self.cursor.saturating_sub(1);
                false
            }
            KeyCode::Right => {
                if self.cursor < self.char_count() {
                    self.cursor += 1;
                }
                false
            }
            KeyCode::Home => {
                self.cursor = 0;
                false
            }
            KeyCode::End => {
                self.cursor = self.char_count();
                false
            }
            _ => false,
        }
    }

    fn char_at(&self, char_idx: usize) -> Option<char> {
        self.content.chars().nth(char_idx)
    }

    fn delete_char_before_cursor(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let byte_idx = self.cursor_byte_index();
            self.content.remove(byte_idx);
        }
    }

    /// Build the line for this input, with a block cursor when focused.
    pub fn line(&self, theme: &Theme, focused: bool) -> Line<'_> {
        let prompt = Span::styled(self.prompt.as_str(), theme.status);
        if !focused {
            return Line::from(vec![prompt, Span::raw(self.content.as_str())]);
        }

        let byte_idx = self.cursor_byte_index();
        let (before, after) = self.content.split_at(byte_idx);
        let mut rest = after.chars();
        let cursor_char = rest.next().unwrap_or(' ');

        Line::from(vec![
            prompt,
            Span::raw(before),
            Span::styled(
                cursor_char.to_string(),
                theme.cursor.add_modifier(Modifier::REVERSED),
            ),
            Span::raw(rest.as_str()),
        ])
    }
}
