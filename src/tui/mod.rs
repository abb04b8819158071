//! Terminal User Interface module for yesno.
//!
//! Provides interactive TUI components using ratatui.

pub mod event;
pub mod screens;
pub mod terminal;
pub mod theme;
pub mod widgets;

use anyhow::{Context, Result};
use ratatui::{backend::Backend, Frame, Terminal};

use crate::tui::event::{EventHandler, EventSource, TuiEvent};
use crate::tui::terminal::TerminalGuard;
use crate::tui::theme::Theme;

/// Result of a TUI application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppResult<T> {
    /// Application completed with a value
    Done(T),
    /// Application was cancelled by user
    Cancelled,
}

/// Trait for TUI applications.
///
/// Implement this trait to create interactive TUI screens.
pub trait TuiApp {
    /// The output type when the application completes.
    type Output;

    /// Handle an event and optionally return a result.
    ///
    /// Return `Some(AppResult)` to exit the application,
    /// or `None` to continue running.
    fn handle_event(&mut self, event: &TuiEvent) -> Option<AppResult<Self::Output>>;

    /// Render the application to the frame.
    fn render(&mut self, frame: &mut Frame, theme: &Theme);
}

/// Run a TUI application to completion on the real terminal.
///
/// Returns `Ok(Some(output))` if completed successfully,
/// `Ok(None)` if cancelled, or an error.
pub fn run<A: TuiApp>(mut app: A, theme: &Theme) -> Result<Option<A::Output>> {
    let mut guard = TerminalGuard::new().context("failed to initialize terminal")?;
    let mut events = EventHandler;

    match run_with(&mut app, guard.terminal(), &mut events, theme)? {
        AppResult::Done(output) => Ok(Some(output)),
        AppResult::Cancelled => Ok(None),
    }
}

/// Drive `app` with an arbitrary backend and event source.
///
/// The app first receives the current terminal size as a resize event,
/// then the loop alternates between drawing and handling the next event.
pub fn run_with<A, B, E>(
    app: &mut A,
    terminal: &mut Terminal<B>,
    events: &mut E,
    theme: &Theme,
) -> Result<AppResult<A::Output>>
where
    A: TuiApp,
    B: Backend,
    E: EventSource,
{
    let size = terminal.size().context("failed to query terminal size")?;
    if let Some(result) = app.handle_event(&TuiEvent::Resize(size.width, size.height)) {
        return Ok(result);
    }

    loop {
        terminal
            .draw(|frame| app.render(frame, theme))
            .context("failed to draw frame")?;

        let event = events.next().context("failed to read terminal event")?;
        if let Some(result) = app.handle_event(&event) {
            return Ok(result);
        }
    }
}
