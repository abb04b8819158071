//! Terminal event handling.
//!
//! Wraps crossterm's blocking reader and narrows its events to the
//! ones the screens care about.

use std::io;

use crossterm::event::{self, Event, KeyEvent, KeyEventKind};

/// Events delivered to a [`TuiApp`](super::TuiApp).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TuiEvent {
    /// A key press
    Key(KeyEvent),
    /// Bracketed paste content
    Paste(String),
    /// Terminal resized to (width, height)
    Resize(u16, u16),
}

impl TuiEvent {
    /// Convert a raw crossterm event, dropping the ones we ignore.
    ///
    /// Key releases and repeats are dropped so Windows terminals don't
    /// deliver every keystroke twice.
    pub fn from_crossterm(event: Event) -> Option<Self> {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => Some(Self::Key(key)),
            Event::Paste(content) => Some(Self::Paste(content)),
            Event::Resize(width, height) => Some(Self::Resize(width, height)),
            _ => None,
        }
    }
}

/// Source of events for the run loop.
pub trait EventSource {
    /// Block until the next event is available.
    fn next(&mut self) -> io::Result<TuiEvent>;
}

/// Reads events from the real terminal.
#[derive(Debug, Default)]
pub struct EventHandler;

impl EventSource for EventHandler {
    fn next(&mut self) -> io::Result<TuiEvent> {
        loop {
            if let Some(event) = TuiEvent::from_crossterm(event::read()?) {
                return Ok(event);
            }
        }
    }
}
