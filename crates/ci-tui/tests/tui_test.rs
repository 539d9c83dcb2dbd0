//! Key handling and chat flow on the `App` state machine.

use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};

// Binary-crate modules are included by path.
#[path = "../src/app.rs"]
mod app;

use app::{App, ASK_TAB, RECOMMENDATIONS_TAB, TAB_NAMES};
use ci_chat::selector::{GREETING, THREAT_RESPONSE};
use ci_chat::ThinkingDelay;
use ci_core::filters::{CallType, FilterSelection, Region};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent {
        code,
        modifiers: KeyModifiers::empty(),
        kind: KeyEventKind::Press,
        state: KeyEventState::empty(),
    }
}

fn ctrl(c: char) -> KeyEvent {
    KeyEvent {
        code: KeyCode::Char(c),
        modifiers: KeyModifiers::CONTROL,
        kind: KeyEventKind::Press,
        state: KeyEventState::empty(),
    }
}

fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        app.on_key(key(KeyCode::Char(c)));
    }
}

fn slow_app() -> App {
    App::new(FilterSelection::default(), ThinkingDelay::new(Duration::from_secs(5)))
}

// ===========================================================================
// Initial state
// ===========================================================================

#[test]
fn demo_app_starts_on_overview_with_greeting() {
    let app = App::demo();
    assert_eq!(app.current_tab, 0);
    assert!(!app.should_quit);
    assert!(!app.show_help);
    assert_eq!(app.filters, FilterSelection::default());
    assert_eq!(app.session.len(), 1);
    assert_eq!(app.session.turns()[0].content, GREETING);
    assert!(app.input.is_empty());
    assert!(!app.is_thinking());
}

// ===========================================================================
// Navigation
// ===========================================================================

#[test]
fn number_keys_jump_to_tabs() {
    let mut app = App::demo();
    for i in 1..=5u8 {
        app.on_key(key(KeyCode::Char((b'0' + i) as char)));
        assert_eq!(app.current_tab, (i - 1) as usize);
    }
    // 6 reaches Ask; from there digits are typed, so go back first.
    app.on_key(key(KeyCode::Char('1')));
    app.on_key(key(KeyCode::Char('6')));
    assert_eq!(app.current_tab, ASK_TAB);
}

#[test]
fn out_of_range_digits_are_ignored() {
    let mut app = App::demo();
    app.on_key(key(KeyCode::Char('3')));
    for c in ['7', '8', '9'] {
        app.on_key(key(KeyCode::Char(c)));
        assert_eq!(app.current_tab, 2);
    }
}

#[test]
fn tab_and_backtab_wrap() {
    let mut app = App::demo();
    app.on_key(key(KeyCode::BackTab));
    assert_eq!(app.current_tab, TAB_NAMES.len() - 1);
    app.on_key(key(KeyCode::Tab));
    assert_eq!(app.current_tab, 0);
    app.on_key(key(KeyCode::Tab));
    assert_eq!(app.current_tab, 1);
}

#[test]
fn selection_is_clamped_and_reset_on_tab_change() {
    let mut app = App::demo();
    app.on_key(key(KeyCode::Char('5')));
    assert_eq!(app.current_tab, RECOMMENDATIONS_TAB);

    for _ in 0..10 {
        app.on_key(key(KeyCode::Char('j')));
    }
    assert_eq!(app.selected_index, app.report.recommendations().len() - 1);

    app.on_key(key(KeyCode::Up));
    assert_eq!(app.selected_index, app.report.recommendations().len() - 2);

    app.on_key(key(KeyCode::Char('4')));
    assert_eq!(app.selected_index, 0);
    app.on_key(key(KeyCode::Char('k')));
    assert_eq!(app.selected_index, 0);
}

#[test]
fn overview_has_nothing_to_select() {
    let mut app = App::demo();
    app.on_key(key(KeyCode::Down));
    assert_eq!(app.selected_index, 0);
}

// ===========================================================================
// Filters
// ===========================================================================

#[test]
fn g_cycles_regions_and_wraps() {
    let mut app = App::demo();
    let mut seen = vec![app.filters.region];
    for _ in 0..Region::ALL.len() {
        app.on_key(key(KeyCode::Char('g')));
        seen.push(app.filters.region);
    }
    assert_eq!(
        seen,
        [
            Region::Global,
            Region::NorthAmerica,
            Region::Europe,
            Region::Apac,
            Region::Global
        ]
    );
}

#[test]
fn s_and_t_toggle_call_types() {
    let mut app = App::demo();
    app.on_key(key(KeyCode::Char('s')));
    assert!(!app.filters.is_selected(CallType::Sales));
    assert!(app.filters.is_selected(CallType::InternalTraining));

    app.on_key(key(KeyCode::Char('t')));
    assert!(app.filters.call_types.is_empty());

    app.on_key(key(KeyCode::Char('s')));
    assert!(app.filters.is_selected(CallType::Sales));
}

#[test]
fn filters_leave_report_untouched() {
    let mut app = App::demo();
    let before = app.report.funnel_stages().to_vec();
    app.on_key(key(KeyCode::Char('g')));
    app.on_key(key(KeyCode::Char('s')));
    assert_eq!(app.report.funnel_stages(), before.as_slice());
}

// ===========================================================================
// Help and quit
// ===========================================================================

#[test]
fn help_modal_swallows_keys_until_closed() {
    let mut app = App::demo();
    app.on_key(key(KeyCode::Char('?')));
    assert!(app.show_help);

    app.on_key(key(KeyCode::Char('3')));
    assert_eq!(app.current_tab, 0);
    app.on_key(key(KeyCode::Char('q')));
    assert!(!app.should_quit);

    app.on_key(key(KeyCode::Esc));
    assert!(!app.show_help);
}

#[test]
fn f1_opens_help_on_ask_tab() {
    let mut app = App::demo();
    app.on_key(key(KeyCode::Char('6')));
    app.on_key(key(KeyCode::F(1)));
    assert!(app.show_help);
    assert!(app.input.is_empty());
}

#[test]
fn q_quits_outside_ask_tab() {
    let mut app = App::demo();
    app.on_key(key(KeyCode::Char('q')));
    assert!(app.should_quit);
}

#[test]
fn ctrl_c_quits_from_ask_tab() {
    let mut app = App::demo();
    app.on_key(key(KeyCode::Char('6')));
    app.on_key(ctrl('c'));
    assert!(app.should_quit);
    assert!(app.input.is_empty());
}

// ===========================================================================
// Ask tab
// ===========================================================================

#[test]
fn ask_tab_captures_printable_keys() {
    let mut app = App::demo();
    app.on_key(key(KeyCode::Char('6')));
    type_text(&mut app, "q1g?");
    assert_eq!(app.input, "q1g?");
    assert!(!app.should_quit);
    assert!(!app.show_help);
    assert_eq!(app.current_tab, ASK_TAB);
    assert_eq!(app.filters.region, Region::Global);

    app.on_key(key(KeyCode::Backspace));
    assert_eq!(app.input, "q1g");
}

#[test]
fn enter_sends_question_and_reply_lands_in_transcript() {
    let mut app = App::demo();
    app.on_key(key(KeyCode::Char('6')));
    type_text(&mut app, "How many calls were analyzed?");
    app.on_key(key(KeyCode::Enter));

    assert!(app.input.is_empty());
    assert_eq!(app.session.len(), 2);
    assert_eq!(app.session.turns()[1].content, "How many calls were analyzed?");

    let reply = app.poll_replies().expect("zero-delay reply");
    assert!(reply
        .content
        .starts_with("Based on the dataset, we analyzed a total of **~25,000 calls**."));
    assert_eq!(app.session.len(), 3);
    assert!(!app.is_thinking());
}

#[test]
fn blank_enter_adds_nothing() {
    let mut app = App::demo();
    app.on_key(key(KeyCode::Char('6')));
    type_text(&mut app, "   ");
    app.on_key(key(KeyCode::Enter));
    assert_eq!(app.session.len(), 1);
    assert_eq!(app.notice.as_deref(), Some("Type a question first"));
    assert!(!app.is_thinking());
}

#[test]
fn second_question_waits_for_first_reply() {
    let mut app = slow_app();
    app.on_key(key(KeyCode::Char('6')));
    type_text(&mut app, "threat?");
    app.on_key(key(KeyCode::Enter));
    assert!(app.is_thinking());

    type_text(&mut app, "pricing");
    app.on_key(key(KeyCode::Enter));
    assert_eq!(app.input, "pricing");
    assert_eq!(app.session.len(), 2);
    assert!(app.notice.as_deref().unwrap_or("").starts_with("Still thinking"));

    app.cancel_pending();
}

#[test]
fn esc_cancels_pending_then_clears_input() {
    let mut app = slow_app();
    app.on_key(key(KeyCode::Char('6')));
    type_text(&mut app, "threat?");
    app.on_key(key(KeyCode::Enter));
    type_text(&mut app, "draft");

    app.on_key(key(KeyCode::Esc));
    assert!(!app.is_thinking());
    assert_eq!(app.notice.as_deref(), Some("Reply cancelled"));
    assert_eq!(app.input, "draft");
    // The question stays, unanswered.
    assert_eq!(app.session.len(), 2);
    assert!(app.poll_replies().is_none());

    app.on_key(key(KeyCode::Esc));
    assert!(app.input.is_empty());
}

#[test]
fn switching_tabs_keeps_pending_reply() {
    let mut app = App::new(
        FilterSelection::default(),
        ThinkingDelay::new(Duration::from_millis(20)),
    );
    app.on_key(key(KeyCode::Char('6')));
    type_text(&mut app, "any threat?");
    app.on_key(key(KeyCode::Enter));
    app.on_key(key(KeyCode::Tab));
    assert_eq!(app.current_tab, 0);
    assert!(app.is_thinking());

    let reply = app.wait_for_reply(Duration::from_secs(5)).expect("reply");
    assert_eq!(reply.content, THREAT_RESPONSE);
    assert_eq!(app.session.len(), 3);
}

#[test]
fn quitting_cancels_pending_reply() {
    let mut app = slow_app();
    app.ask("summary").unwrap();
    app.quit();
    assert!(app.should_quit);
    assert!(!app.is_thinking());
}
