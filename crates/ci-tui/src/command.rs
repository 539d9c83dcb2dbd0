//! Scriptable command surface for the report dashboard.
//!
//! Two input forms drive the same [`AppCommand`]s:
//! - **Text**: `:` prefixed commands such as `:tab 2` or `:ask what about pricing?`.
//! - **JSON**: one object per line, e.g. `{"cmd":"ask","args":["threats?"]}`.
//!
//! Queries and chat replies come back as JSON strings so a driver can inspect
//! the dashboard without touching its structs.

use std::time::Duration;

use ci_chat::ChatError;
use ci_core::filters::{CallType, Region};

use crate::app::{App, TAB_NAMES};

/// Extra time `ask` waits beyond the configured thinking delay.
pub const REPLY_GRACE: Duration = Duration::from_secs(5);

// ---------------------------------------------------------------------------
// AppCommand enum
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    // Navigation
    /// Zero-based tab index, as reported by `query_state`.
    Tab(usize),
    NextTab,
    PrevTab,
    Up,
    Down,

    // Filters
    Region(Region),
    Toggle(CallType),

    // Chat
    Ask(String),
    Cancel,

    // Queries
    QueryState,
    QueryTab,
    QueryTranscript,
    QueryReport,

    // System
    Help,
    Quit,
}

// ---------------------------------------------------------------------------
// Text command parser  (`:` prefixed)
// ---------------------------------------------------------------------------

/// Parse a `:` prefixed command string.
///
/// Examples: `:tab 3`, `:region europe`, `:toggle sales`, `:ask total calls?`.
pub fn parse_command(input: &str) -> Option<AppCommand> {
    let input = input.trim();
    let input = input.strip_prefix(':')?;
    let mut parts = input.splitn(2, ' ');
    let verb = parts.next()?.trim();
    let arg = parts.next().map(|s| s.trim()).filter(|s| !s.is_empty());

    match verb {
        "tab" => Some(AppCommand::Tab(arg?.parse().ok()?)),
        "next" | "next_tab" => Some(AppCommand::NextTab),
        "prev" | "prev_tab" => Some(AppCommand::PrevTab),
        "up" | "k" => Some(AppCommand::Up),
        "down" | "j" => Some(AppCommand::Down),
        "region" | "g" => Some(AppCommand::Region(arg?.parse().ok()?)),
        "toggle" => Some(AppCommand::Toggle(arg?.parse().ok()?)),
        "ask" => Some(AppCommand::Ask(arg?.to_string())),
        "cancel" => Some(AppCommand::Cancel),
        "query" => match arg? {
            "state" => Some(AppCommand::QueryState),
            "tab" => Some(AppCommand::QueryTab),
            "transcript" => Some(AppCommand::QueryTranscript),
            "report" => Some(AppCommand::QueryReport),
            _ => None,
        },
        "help" | "?" => Some(AppCommand::Help),
        "quit" | "q" => Some(AppCommand::Quit),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// JSON command parser
// ---------------------------------------------------------------------------

/// Parse a JSON command: `{"cmd":"tab","args":[3]}` or `{"cmd":"query_state"}`.
pub fn parse_json_command(json: &str) -> Option<AppCommand> {
    let v: serde_json::Value = serde_json::from_str(json).ok()?;
    let cmd = v.get("cmd")?.as_str()?;
    let args = v.get("args");

    let arg_usize =
        |idx: usize| -> Option<usize> { args?.as_array()?.get(idx)?.as_u64().map(|n| n as usize) };
    let arg_str = |idx: usize| -> Option<&str> { args?.as_array()?.get(idx)?.as_str() };

    match cmd {
        "tab" => Some(AppCommand::Tab(arg_usize(0)?)),
        "next_tab" => Some(AppCommand::NextTab),
        "prev_tab" => Some(AppCommand::PrevTab),
        "up" => Some(AppCommand::Up),
        "down" => Some(AppCommand::Down),
        "region" => Some(AppCommand::Region(arg_str(0)?.parse().ok()?)),
        "toggle" => Some(AppCommand::Toggle(arg_str(0)?.parse().ok()?)),
        "ask" => Some(AppCommand::Ask(arg_str(0)?.to_string())),
        "cancel" => Some(AppCommand::Cancel),
        "query_state" => Some(AppCommand::QueryState),
        "query_tab" => Some(AppCommand::QueryTab),
        "query_transcript" => Some(AppCommand::QueryTranscript),
        "query_report" => Some(AppCommand::QueryReport),
        "help" => Some(AppCommand::Help),
        "quit" => Some(AppCommand::Quit),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Command execution
// ---------------------------------------------------------------------------

/// Execute a command against the application state.
///
/// Returns `Some(json_string)` for queries, chat replies and errors, `None`
/// for plain state changes. `Ask` blocks until the reply arrives or the
/// thinking delay plus [`REPLY_GRACE`] passes.
pub fn execute_command(app: &mut App, cmd: AppCommand) -> Option<String> {
    match cmd {
        // -- Navigation -----------------------------------------------------
        AppCommand::Tab(idx) if idx >= TAB_NAMES.len() => Some(
            serde_json::json!({
                "event": "error",
                "code": "bad_tab",
                "message": format!("no tab {idx}; tabs are 0-{}", TAB_NAMES.len() - 1),
            })
            .to_string(),
        ),
        AppCommand::Tab(idx) => {
            app.set_tab(idx);
            None
        }
        AppCommand::NextTab => {
            app.next_tab();
            None
        }
        AppCommand::PrevTab => {
            app.prev_tab();
            None
        }
        AppCommand::Up => {
            app.select_prev();
            None
        }
        AppCommand::Down => {
            app.select_next();
            None
        }

        // -- Filters --------------------------------------------------------
        AppCommand::Region(region) => {
            app.filters.region = region;
            tracing::debug!(%region, "region set (report is not filtered)");
            None
        }
        AppCommand::Toggle(call_type) => {
            app.toggle_call_type(call_type);
            None
        }

        // -- Chat -----------------------------------------------------------
        AppCommand::Ask(query) => Some(ask(app, &query).to_string()),
        AppCommand::Cancel => app.cancel_pending().map(|ticket| {
            serde_json::json!({"event": "cancelled", "ticket": ticket}).to_string()
        }),

        // -- Queries --------------------------------------------------------
        AppCommand::QueryState => Some(state_json(app).to_string()),
        AppCommand::QueryTab => Some(tab_json(app).to_string()),
        AppCommand::QueryTranscript => serde_json::to_string(&app.session).ok(),
        AppCommand::QueryReport => serde_json::to_string(&app.report).ok(),

        // -- System ---------------------------------------------------------
        AppCommand::Help => {
            app.show_help = true;
            None
        }
        AppCommand::Quit => {
            app.quit();
            None
        }
    }
}

fn ask(app: &mut App, query: &str) -> serde_json::Value {
    let ticket = match app.ask(query) {
        Ok(ticket) => ticket,
        Err(e) => {
            let code = match e {
                ChatError::EmptyQuery => "empty_query",
                ChatError::ReplyPending { .. } => "reply_pending",
            };
            return serde_json::json!({"event": "error", "code": code, "message": e.to_string()});
        }
    };

    let timeout = app.thinking_delay().duration() + REPLY_GRACE;
    match app.wait_for_reply(timeout) {
        Some(reply) => serde_json::json!({
            "event": "reply",
            "ticket": reply.ticket,
            "topic": reply.topic,
            "content": reply.content,
        }),
        None => {
            app.cancel_pending();
            serde_json::json!({
                "event": "error",
                "code": "timeout",
                "message": format!("no reply for ticket {ticket}"),
            })
        }
    }
}

// ---------------------------------------------------------------------------
// Serialization helpers
// ---------------------------------------------------------------------------

fn state_json(app: &App) -> serde_json::Value {
    let tab_name = TAB_NAMES.get(app.current_tab).copied().unwrap_or("unknown");
    serde_json::json!({
        "current_tab": app.current_tab,
        "tab_name": tab_name,
        "selected_index": app.selected_index,
        "show_help": app.show_help,
        "filters": {
            "region": app.filters.region.label(),
            "call_types": app.filters.call_types.iter().map(|c| c.label()).collect::<Vec<_>>(),
            "applied": false,
        },
        "chat": {
            "turns": app.session.len(),
            "thinking": app.is_thinking(),
            "input": app.input,
            "thinking_delay_ms": app.thinking_delay().duration().as_millis() as u64,
        },
    })
}

fn tab_json(app: &App) -> serde_json::Value {
    let r = &app.report;
    match app.current_tab {
        0 => serde_json::json!({
            "title": r.title(),
            "subtitle": r.subtitle(),
            "metrics": r.metrics(),
            "verdict": r.verdict(),
        }),
        1 => serde_json::json!({
            "funnel": r.funnel_stages(),
            "threats": r.threat_levels(),
            "keywords": r.perception_keywords(),
            "substantive_share_pct": r.substantive_share_pct(),
            "high_threat_share_pct": r.high_threat_share_pct(),
        }),
        2 => serde_json::json!({ "blockers": r.blocker_reasons() }),
        3 => serde_json::json!({
            "wins": r.wins(),
            "improvements": r.improvements(),
            "battlecard": r.battlecard_rows(),
        }),
        4 => serde_json::json!({ "recommendations": r.recommendations() }),
        5 => serde_json::json!({
            "turns": app.session.turns(),
            "thinking": app.is_thinking(),
        }),
        _ => serde_json::Value::Null,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_commands_parse() {
        assert_eq!(parse_command(":tab 2"), Some(AppCommand::Tab(2)));
        assert_eq!(parse_command(":region EUROPE"), Some(AppCommand::Region(Region::Europe)));
        assert_eq!(
            parse_command(":toggle internal_training"),
            Some(AppCommand::Toggle(CallType::InternalTraining))
        );
        assert_eq!(
            parse_command(":ask how many calls?"),
            Some(AppCommand::Ask("how many calls?".into()))
        );
        assert_eq!(parse_command(":query transcript"), Some(AppCommand::QueryTranscript));
    }

    #[test]
    fn malformed_text_commands_are_rejected() {
        assert_eq!(parse_command("tab 2"), None);
        assert_eq!(parse_command(":tab"), None);
        assert_eq!(parse_command(":tab two"), None);
        assert_eq!(parse_command(":ask"), None);
        assert_eq!(parse_command(":ask    "), None);
        assert_eq!(parse_command(":region mars"), None);
        assert_eq!(parse_command(":bogus"), None);
    }

    #[test]
    fn json_commands_parse() {
        assert_eq!(
            parse_json_command(r#"{"cmd":"ask","args":["threat?"]}"#),
            Some(AppCommand::Ask("threat?".into()))
        );
        assert_eq!(
            parse_json_command(r#"{"cmd":"region","args":["North America"]}"#),
            Some(AppCommand::Region(Region::NorthAmerica))
        );
        assert_eq!(parse_json_command(r#"{"cmd":"tab"}"#), None);
        assert_eq!(parse_json_command("not json"), None);
    }
}
