//! # Test Harness
//!
//! Drives the confirmation screen without a real terminal: a scripted
//! event source stands in for the keyboard and ratatui's `TestBackend`
//! stands in for the screen.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

#![allow(dead_code)]

use std::{collections::VecDeque, io};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{backend::TestBackend, Terminal};

use yesno::tui::event::{EventSource, TuiEvent};

/// Replays queued events, then reports a closed terminal.
pub struct ScriptedEvents(VecDeque<TuiEvent>);

impl ScriptedEvents {
    pub fn new(events: impl IntoIterator<Item = TuiEvent>) -> Self {
        Self(events.into_iter().collect())
    }
}

impl EventSource for ScriptedEvents {
    fn next(&mut self) -> io::Result<TuiEvent> {
        self.0
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::BrokenPipe, "terminal closed"))
    }
}

/// A plain key press.
pub fn key(code: KeyCode) -> TuiEvent {
    TuiEvent::Key(KeyEvent::new(code, KeyModifiers::empty()))
}

/// Key presses for each character of `text`.
pub fn typed(text: &str) -> Vec<TuiEvent> {
    text.chars().map(|c| key(KeyCode::Char(c))).collect()
}

/// A test terminal of the given size.
pub fn terminal(width: u16, height: u16) -> Terminal<TestBackend> {
    Terminal::new(TestBackend::new(width, height)).expect("test backend")
}

/// The last drawn frame as text, one line per row.
pub fn screen_text(terminal: &Terminal<TestBackend>) -> String {
    let buf = terminal.backend().buffer();
    let mut out = String::new();
    for y in 0..buf.area.height {
        for x in 0..buf.area.width {
            out.push_str(buf[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}
