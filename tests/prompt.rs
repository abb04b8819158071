//! # Prompt Tests
//!
//! End-to-end scenarios for the confirmation screen: arguments in, key
//! presses through the run loop, answer and exit status out.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

mod common;

use common::{key, screen_text, terminal, typed, ScriptedEvents};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use yesno::{
    commands::{finish, AskArgs},
    constants::{EXIT_CANCELLED, EXIT_NO, EXIT_OK},
    tui::{event::TuiEvent, run_with, screens::ConfirmScreen, theme::Theme, AppResult},
    Choice,
};

/// Runs the prompt for `args` against scripted input.
///
/// Returns the run result, what was printed to stdout, the exit status and
/// the last drawn frame.
fn ask(args: &AskArgs, events: Vec<TuiEvent>) -> (AppResult<Choice>, String, i32, String) {
    let mut screen = ConfirmScreen::new(args.question());
    let mut terminal = terminal(80, 16);
    let mut events = ScriptedEvents::new(events);

    let result = run_with(&mut screen, &mut terminal, &mut events, &Theme::plain())
        .expect("prompt should finish");

    let outcome = match result {
        AppResult::Done(choice) => Some(choice),
        AppResult::Cancelled => None,
    };
    let mut out = Vec::new();
    let code = finish(outcome, args.exit_status, &mut out).expect("finish");

    (
        result,
        String::from_utf8(out).expect("utf8"),
        code,
        screen_text(&terminal),
    )
}

fn question(text: &str) -> AskArgs {
    AskArgs {
        question: Some(text.to_string()),
        ..Default::default()
    }
}

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn test_approve_hotkey_answers_yes() {
    let (result, out, code, screen) = ask(&question("Proceed?"), typed("y"));

    assert_eq!(result, AppResult::Done(Choice::Yes));
    assert_eq!(out, "yes\n");
    assert_eq!(code, EXIT_OK);
    assert!(screen.contains(" Proceed? "));
}

#[test]
fn test_reject_hotkey_with_default_question() {
    let (result, out, code, screen) = ask(&AskArgs::default(), typed("n"));

    assert_eq!(result, AppResult::Done(Choice::No));
    assert_eq!(out, "no\n");
    assert_eq!(code, EXIT_OK);
    assert!(screen.contains("Are you sure you want to continue?"));
}

#[test]
fn test_long_question_is_not_truncated() {
    let text = "Deploy to production?";
    let (_, _, _, screen) = ask(&question(text), typed("y"));
    assert!(screen.contains(text));
}

#[test]
fn test_items_are_yes_then_no() {
    let (_, _, _, screen) = ask(&question("Proceed?"), typed("y"));
    let yes = screen.find("Yes").expect("Yes drawn");
    let no = screen.find("No").expect("No drawn");
    assert!(yes < no);
}

#[test]
fn test_navigate_and_enter() {
    let (result, out, _, _) = ask(
        &question("Proceed?"),
        vec![key(KeyCode::Down), key(KeyCode::Enter)],
    );
    assert_eq!(result, AppResult::Done(Choice::No));
    assert_eq!(out, "no\n");
}

#[test]
fn test_filter_then_choose() {
    let mut events = typed("/appr");
    events.push(key(KeyCode::Enter));
    events.push(key(KeyCode::Enter));

    let (result, _, _, screen) = ask(&question("Proceed?"), events);
    assert_eq!(result, AppResult::Done(Choice::Yes));
    assert!(screen.contains("1 item"));
}

#[test]
fn test_hotkeys_are_text_while_filtering() {
    let mut events = typed("/yn");
    events.push(key(KeyCode::Esc));
    events.extend(typed("n"));

    let (result, _, _, _) = ask(&question("Proceed?"), events);
    assert_eq!(result, AppResult::Done(Choice::No));
}

#[test]
fn test_resize_mid_prompt() {
    let events = vec![
        TuiEvent::Resize(0, 0),
        TuiEvent::Resize(200, 60),
        key(KeyCode::Char('y')),
    ];
    let (result, _, _, _) = ask(&question("Proceed?"), events);
    assert_eq!(result, AppResult::Done(Choice::Yes));
}

#[test]
fn test_cancel_prints_nothing() {
    let ctrl_c = TuiEvent::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
    let (result, out, code, _) = ask(&question("Proceed?"), vec![ctrl_c]);

    assert_eq!(result, AppResult::Cancelled);
    assert!(out.is_empty());
    assert_eq!(code, EXIT_CANCELLED);
}

#[test]
fn test_exit_status_flag_for_no() {
    let args = AskArgs {
        exit_status: true,
        ..Default::default()
    };
    let (_, out, code, _) = ask(&args, typed("n"));
    assert_eq!(out, "no\n");
    assert_eq!(code, EXIT_NO);
}

#[test]
fn test_driver_failure_is_an_error() {
    let mut screen = ConfirmScreen::new("Proceed?");
    let mut terminal = terminal(80, 16);
    let mut events = ScriptedEvents::new(Vec::new());

    let err = run_with(&mut screen, &mut terminal, &mut events, &Theme::plain()).unwrap_err();
    assert!(format!("{err:#}").contains("terminal closed"));
}
