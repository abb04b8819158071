//! Terminal setup and teardown.
//!
//! The UI is drawn on stderr so stdout stays free for the answer.

use std::io::{self, IsTerminal, Stderr};

use crossterm::{
    event::{DisableBracketedPaste, EnableBracketedPaste},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

/// Terminal with the crossterm backend on stderr.
pub type TuiTerminal = Terminal<CrosstermBackend<Stderr>>;

/// Errors from the terminal driver.
#[derive(Debug, thiserror::Error)]
pub enum TerminalError {
    /// The prompt needs an interactive terminal to draw on
    #[error("stderr is not a terminal")]
    NotATerminal,

    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
}

/// Owns raw mode and the alternate screen.
///
/// Both are restored on drop, including during a panic unwind.
pub struct TerminalGuard {
    terminal: TuiTerminal,
}

impl TerminalGuard {
    /// Enter raw mode and the alternate screen.
    pub fn new() -> Result<Self, TerminalError> {
        let mut stderr = io::stderr();
        if !stderr.is_terminal() {
            return Err(TerminalError::NotATerminal);
        }

        enable_raw_mode()?;
        if let Err(err) = execute!(stderr, EnterAlternateScreen, EnableBracketedPaste) {
            let _ = disable_raw_mode();
            return Err(err.into());
        }

        let backend = CrosstermBackend::new(stderr);
        match Terminal::new(backend) {
            Ok(terminal) => Ok(Self { terminal }),
            Err(err) => {
                restore();
                Err(err.into())
            }
        }
    }

    /// Get the underlying terminal.
    pub fn terminal(&mut self) -> &mut TuiTerminal {
        &mut self.terminal
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = self.terminal.show_cursor();
        restore();
    }
}

/// Best-effort restore; errors are ignored during cleanup.
fn restore() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stderr(), DisableBracketedPaste, LeaveAlternateScreen);
}
