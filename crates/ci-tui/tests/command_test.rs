//! Headless command surface: parsing plus execution against a demo app.

#[path = "../src/app.rs"]
mod app;
#[path = "../src/command.rs"]
mod command;

use command::{execute_command, parse_command, parse_json_command, AppCommand};

use ci_core::filters::{CallType, Region};

fn run(app: &mut app::App, line: &str) -> Option<serde_json::Value> {
    let cmd = parse_json_command(line)
        .or_else(|| parse_command(line))
        .unwrap_or_else(|| panic!("unparsed: {line}"));
    execute_command(app, cmd).map(|s| serde_json::from_str(&s).expect("valid json"))
}

// ===========================================================================
// Parsing
// ===========================================================================

#[test]
fn text_and_json_forms_agree() {
    let pairs = [
        (":tab 4", r#"{"cmd":"tab","args":[4]}"#),
        (":next_tab", r#"{"cmd":"next_tab"}"#),
        (":prev_tab", r#"{"cmd":"prev_tab"}"#),
        (":up", r#"{"cmd":"up"}"#),
        (":down", r#"{"cmd":"down"}"#),
        (":region apac", r#"{"cmd":"region","args":["APAC"]}"#),
        (":toggle Sales", r#"{"cmd":"toggle","args":["sales"]}"#),
        (":ask any threat?", r#"{"cmd":"ask","args":["any threat?"]}"#),
        (":cancel", r#"{"cmd":"cancel"}"#),
        (":query state", r#"{"cmd":"query_state"}"#),
        (":query tab", r#"{"cmd":"query_tab"}"#),
        (":query transcript", r#"{"cmd":"query_transcript"}"#),
        (":query report", r#"{"cmd":"query_report"}"#),
        (":help", r#"{"cmd":"help"}"#),
        (":quit", r#"{"cmd":"quit"}"#),
    ];
    for (text, json) in pairs {
        let a = parse_command(text);
        assert!(a.is_some(), "{text}");
        assert_eq!(a, parse_json_command(json), "{text} vs {json}");
    }
}

#[test]
fn unknown_filter_values_do_not_parse() {
    assert_eq!(parse_command(":region atlantis"), None);
    assert_eq!(parse_command(":toggle partners"), None);
    assert_eq!(parse_json_command(r#"{"cmd":"region","args":[3]}"#), None);
    assert_eq!(parse_json_command(r#"{"cmd":"launch"}"#), None);
}

// ===========================================================================
// Execution
// ===========================================================================

#[test]
fn navigation_commands_move_state() {
    let mut app = app::App::demo();
    assert!(run(&mut app, ":tab 4").is_none());
    assert_eq!(app.current_tab, 4);

    run(&mut app, ":down");
    run(&mut app, ":down");
    assert_eq!(app.selected_index, 2);
    run(&mut app, ":up");
    assert_eq!(app.selected_index, 1);

    run(&mut app, ":next_tab");
    assert_eq!(app.current_tab, 5);
    run(&mut app, ":next_tab");
    assert_eq!(app.current_tab, 0);
    run(&mut app, ":prev_tab");
    assert_eq!(app.current_tab, 5);

    // Out of range is reported and leaves the tab alone.
    let v = execute_command(&mut app, AppCommand::Tab(42)).expect("error event");
    let v: serde_json::Value = serde_json::from_str(&v).unwrap();
    assert_eq!(v["event"], "error");
    assert_eq!(v["code"], "bad_tab");
    assert_eq!(app.current_tab, 5);
}

#[test]
fn out_of_range_tab_reports_bad_tab() {
    let mut app = app::App::demo();
    let v = run(&mut app, r#"{"cmd":"tab","args":[6]}"#).expect("error event");
    assert_eq!(v["code"], "bad_tab");
    assert_eq!(v["message"], "no tab 6; tabs are 0-5");
    assert_eq!(app.current_tab, 0);

    assert!(run(&mut app, ":tab 5").is_none());
    assert_eq!(app.current_tab, 5);
}

#[test]
fn filter_commands_show_up_in_state() {
    let mut app = app::App::demo();
    run(&mut app, ":region north america");
    run(&mut app, ":toggle internal_training");
    assert_eq!(app.filters.region, Region::NorthAmerica);
    assert!(!app.filters.is_selected(CallType::InternalTraining));

    let state = run(&mut app, r#"{"cmd":"query_state"}"#).unwrap();
    assert_eq!(state["filters"]["region"], "North America");
    assert_eq!(state["filters"]["call_types"], serde_json::json!(["Sales"]));
    assert_eq!(state["filters"]["applied"], false);
    assert_eq!(state["tab_name"], "Overview");
}

#[test]
fn ask_blocks_until_reply() {
    let mut app = app::App::demo();
    let reply = run(&mut app, r#"{"cmd":"ask","args":["tell me about pricing"]}"#).unwrap();
    assert_eq!(reply["event"], "reply");
    assert_eq!(reply["topic"], "pricing");
    assert!(reply["content"]
        .as_str()
        .unwrap()
        .starts_with("Price is a known friction point."));
    assert_eq!(app.session.len(), 3);
    assert!(!app.is_thinking());
}

#[test]
fn blank_ask_reports_error() {
    let mut app = app::App::demo();
    let out = execute_command(&mut app, AppCommand::Ask("  ".into())).unwrap();
    let v: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(v["event"], "error");
    assert_eq!(v["code"], "empty_query");
    assert_eq!(app.session.len(), 1);
}

#[test]
fn cancel_without_pending_is_plain_ack() {
    let mut app = app::App::demo();
    assert!(run(&mut app, ":cancel").is_none());
}

#[test]
fn transcript_query_returns_turns() {
    let mut app = app::App::demo();
    run(&mut app, ":ask How many calls were analyzed?");
    let t = run(&mut app, ":query transcript").unwrap();
    let turns = t["turns"].as_array().unwrap();
    assert_eq!(turns.len(), 3);
    assert_eq!(turns[0]["role"], "assistant");
    assert_eq!(turns[1]["role"], "user");
    assert_eq!(turns[1]["content"], "How many calls were analyzed?");
}

#[test]
fn tab_query_matches_current_tab() {
    let mut app = app::App::demo();
    let overview = run(&mut app, ":query tab").unwrap();
    assert_eq!(overview["metrics"].as_array().unwrap().len(), 3);

    run(&mut app, ":tab 1");
    let funnel = run(&mut app, ":query tab").unwrap();
    assert_eq!(funnel["funnel"][0]["count"], 25_000);
    assert_eq!(funnel["threats"].as_array().unwrap().len(), 3);

    run(&mut app, ":tab 2");
    let blockers = run(&mut app, ":query tab").unwrap();
    assert_eq!(blockers["blockers"][0]["reason"], "Timing/Contract");

    run(&mut app, ":tab 3");
    let card = run(&mut app, ":query tab").unwrap();
    assert_eq!(card["battlecard"].as_array().unwrap().len(), 5);

    run(&mut app, ":tab 4");
    let recs = run(&mut app, ":query tab").unwrap();
    assert_eq!(recs["recommendations"][2]["impact"], "high");
}

#[test]
fn report_query_dumps_everything() {
    let mut app = app::App::demo();
    let report = run(&mut app, ":query report").unwrap();
    assert_eq!(report["title"], "Quipli Competitive Intelligence Report");
    assert_eq!(report["blockers"].as_array().unwrap().len(), 5);
    assert_eq!(report["recommendations"].as_array().unwrap().len(), 4);
}

#[test]
fn help_and_quit() {
    let mut app = app::App::demo();
    run(&mut app, ":help");
    assert!(app.show_help);
    run(&mut app, r#"{"cmd":"quit"}"#);
    assert!(app.should_quit);
}
