//! Yes/No confirmation screen.
//!
//! Shows the question as a list title over the two choices. The `y` and `n`
//! hotkeys answer immediately; Enter answers with the highlighted item.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    widgets::Paragraph,
    Frame,
};

use crate::{
    choice::Choice,
    constants::{HORIZONTAL_PADDING, PADDING_X, PADDING_Y, VERTICAL_PADDING},
    tui::{
        event::TuiEvent,
        run,
        theme::Theme,
        widgets::{help_line, ChoiceList, KeyHelp, ListAction},
        AppResult, TuiApp,
    },
};

const APPROVE: KeyHelp = KeyHelp::new("y", Choice::Yes.description());
const REJECT: KeyHelp = KeyHelp::new("n", Choice::No.description());

const SHORT_HELP: [KeyHelp; 6] = [
    KeyHelp::new("\u{2191}/k", "up"),
    KeyHelp::new("\u{2193}/j", "down"),
    KeyHelp::new("/", "filter"),
    KeyHelp::new("enter", "choose"),
    KeyHelp::new("q", "quit"),
    KeyHelp::new("?", "more"),
];

const FULL_HELP: [KeyHelp; 8] = [
    KeyHelp::new("\u{2191}/k", "up"),
    KeyHelp::new("\u{2193}/j", "down"),
    KeyHelp::new("/", "filter"),
    KeyHelp::new("enter", "choose"),
    KeyHelp::new("q", "quit"),
    APPROVE,
    REJECT,
    KeyHelp::new("?", "close help"),
];

const FILTER_HELP: [KeyHelp; 2] = [
    KeyHelp::new("enter", "apply filter"),
    KeyHelp::new("esc", "cancel"),
];

/// Size left for content once the fixed padding is removed.
///
/// Terminals smaller than the padding produce an empty viewport.
pub const fn viewport(width: u16, height: u16) -> (u16, u16) {
    (
        width.saturating_sub(HORIZONTAL_PADDING),
        height.saturating_sub(VERTICAL_PADDING),
    )
}

/// Map a key to the choice its hotkey answers.
fn hotkey_choice(key: &KeyEvent) -> Option<Choice> {
    if key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
    {
        return None;
    }
    match key.code {
        KeyCode::Char('y' | 'Y') => Some(Choice::Yes),
        KeyCode::Char('n' | 'N') => Some(Choice::No),
        _ => None,
    }
}

/// Confirmation screen state.
pub struct ConfirmScreen {
    list: ChoiceList,
    viewport: (u16, u16),
    /// Set when the hotkey of the matching `Choice::ALL` entry is pressed
    armed: [bool; 2],
    full_help: bool,
}

impl ConfirmScreen {
    /// Create a screen asking `question`, with "Yes" highlighted.
    pub fn new(question: impl Into<String>) -> Self {
        Self {
            list: ChoiceList::new(Choice::ALL.to_vec()).with_title(question),
            viewport: (0, 0),
            armed: [false; 2],
            full_help: false,
        }
    }

    /// The question shown in the title bar.
    pub fn question(&self) -> &str {
        self.list.title()
    }

    /// The underlying choice list.
    pub const fn list(&self) -> &ChoiceList {
        &self.list
    }

    /// Content size from the last resize.
    pub const fn viewport(&self) -> (u16, u16) {
        self.viewport
    }

    /// Check whether `choice`'s hotkey has been pressed.
    pub fn is_armed(&self, choice: Choice) -> bool {
        Choice::ALL
            .iter()
            .position(|c| *c == choice)
            .is_some_and(|i| self.armed[i])
    }

    /// Check whether the full help line is shown.
    pub const fn full_help(&self) -> bool {
        self.full_help
    }

    fn arm(&mut self, choice: Choice) {
        if let Some(i) = Choice::ALL.iter().position(|c| *c == choice) {
            self.armed[i] = true;
        }
    }

    fn handle_key(&mut self, key: &KeyEvent) -> Option<AppResult<Choice>> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Some(AppResult::Cancelled);
        }

        // Hotkeys are plain text while the filter has focus.
        if !self.list.is_filtering() {
            if let Some(choice) = hotkey_choice(key) {
                self.arm(choice);
                return Some(AppResult::Done(choice));
            }
            if key.code == KeyCode::Char('?') {
                self.full_help = !self.full_help;
                return None;
            }
        }

        match self.list.handle_key(*key) {
            ListAction::Activate(choice) => Some(AppResult::Done(choice)),
            ListAction::Cancel => Some(AppResult::Cancelled),
            ListAction::None => None,
        }
    }

    fn help(&self) -> &'static [KeyHelp] {
        if self.list.is_filtering() {
            &FILTER_HELP
        } else if self.full_help {
            &FULL_HELP
        } else {
            &SHORT_HELP
        }
    }
}

impl TuiApp for ConfirmScreen {
    type Output = Choice;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<AppResult<Self::Output>> {
        match event {
            TuiEvent::Resize(width, height) => {
                self.viewport = viewport(*width, *height);
                None
            }
            TuiEvent::Paste(content) => {
                self.list.insert_filter_text(content);
                None
            }
            TuiEvent::Key(key) => self.handle_key(key),
        }
    }

    fn render(&mut self, frame: &mut Frame, theme: &Theme) {
        // Laid out from the last resize, clipped in case the frame shrank since.
        let outer = frame.area();
        let (width, height) = self.viewport;
        let area = Rect::new(
            outer.x.saturating_add(PADDING_X),
            outer.y.saturating_add(PADDING_Y),
            width,
            height,
        )
        .intersection(outer);
        if area.is_empty() {
            return;
        }

        let chunks = Layout::vertical([
            Constraint::Min(0),    // List
            Constraint::Length(1), // Help
        ])
        .split(area);

        self.list.render(chunks[0], frame.buffer_mut(), theme);
        frame.render_widget(Paragraph::new(help_line(self.help(), theme)), chunks[1]);
    }
}

/// Ask `question` on the terminal.
///
/// Returns `Ok(Some(choice))` when answered, or `Ok(None)` if cancelled
/// (Esc/q/Ctrl+C).
pub fn confirm(question: &str, theme: &Theme) -> Result<Option<Choice>> {
    run(ConfirmScreen::new(question), theme)
}
