use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use ci_chat::{
    CannedResponder, ChatError, ConversationSession, Reply, ReplyDispatcher, ThinkingDelay, Ticket,
};
use ci_core::filters::{CallType, FilterSelection};
use ci_core::report::ReportStore;

/// Tab names displayed in the header.
pub const TAB_NAMES: &[&str] = &[
    "Overview",
    "Funnel & Threats",
    "Deal Blockers",
    "Battlecard",
    "Recommendations",
    "Ask",
];

pub const BLOCKERS_TAB: usize = 2;
pub const BATTLECARD_TAB: usize = 3;
pub const RECOMMENDATIONS_TAB: usize = 4;
/// The chat tab captures printable keys for its input line.
pub const ASK_TAB: usize = 5;

// ---------------------------------------------------------------------------
// App
// ---------------------------------------------------------------------------

pub struct App {
    pub current_tab: usize,
    pub should_quit: bool,
    pub show_help: bool,

    /// Per-tab selected index for list navigation.
    pub selected_index: usize,

    // Data
    pub report: ReportStore,
    pub filters: FilterSelection,

    // Chat
    pub session: ConversationSession,
    pub input: String,
    /// One-line feedback shown above the chat input.
    pub notice: Option<String>,
    dispatcher: ReplyDispatcher,
}

impl App {
    pub fn new(filters: FilterSelection, delay: ThinkingDelay) -> Self {
        Self {
            current_tab: 0,
            should_quit: false,
            show_help: false,
            selected_index: 0,
            report: ReportStore::new(),
            filters,
            session: ConversationSession::new(),
            input: String::new(),
            notice: None,
            dispatcher: ReplyDispatcher::new(Arc::new(CannedResponder::new()), delay),
        }
    }

    /// Default filters and no thinking pause.
    pub fn demo() -> Self {
        Self::new(FilterSelection::default(), ThinkingDelay::none())
    }

    pub fn on_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit();
            return;
        }

        // Help modal intercepts Esc and ?
        if self.show_help {
            match key.code {
                KeyCode::Char('?') | KeyCode::Esc | KeyCode::F(1) => self.show_help = false,
                _ => {}
            }
            return;
        }

        // Tab / Shift-Tab and F1 work everywhere, including the Ask input.
        match key.code {
            KeyCode::Tab => {
                self.next_tab();
                return;
            }
            KeyCode::BackTab => {
                self.prev_tab();
                return;
            }
            KeyCode::F(1) => {
                self.show_help = true;
                return;
            }
            _ => {}
        }

        if self.current_tab == ASK_TAB {
            self.on_ask_key(key);
            return;
        }

        match key.code {
            KeyCode::Char('q') => self.quit(),

            // Tab switching: 1-6
            KeyCode::Char(c @ '1'..='9') => {
                let idx = (c as usize) - ('1' as usize);
                self.set_tab(idx);
            }

            // List navigation
            KeyCode::Char('j') | KeyCode::Down => self.select_next(),
            KeyCode::Char('k') | KeyCode::Up => self.select_prev(),

            // Sidebar filters
            KeyCode::Char('g') => self.cycle_region(),
            KeyCode::Char('s') => self.toggle_call_type(CallType::Sales),
            KeyCode::Char('t') => self.toggle_call_type(CallType::InternalTraining),

            KeyCode::Char('?') => self.show_help = true,

            _ => {}
        }
    }

    fn on_ask_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => {
                if let Err(e) = self.submit_input() {
                    self.notice = Some(match e {
                        ChatError::EmptyQuery => "Type a question first".to_string(),
                        ChatError::ReplyPending { .. } => {
                            "Still thinking... (Esc to cancel)".to_string()
                        }
                    });
                }
            }
            KeyCode::Esc => {
                if self.cancel_pending().is_none() {
                    self.input.clear();
                }
            }
            KeyCode::Backspace => {
                self.input.pop();
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.input.push(c);
            }
            _ => {}
        }
    }

    // -----------------------------------------------------------------------
    // Navigation
    // -----------------------------------------------------------------------

    pub fn set_tab(&mut self, idx: usize) {
        if idx < TAB_NAMES.len() && idx != self.current_tab {
            self.current_tab = idx;
            self.selected_index = 0;
            tracing::debug!(tab = TAB_NAMES[idx], "tab changed");
        }
    }

    pub fn next_tab(&mut self) {
        self.set_tab((self.current_tab + 1) % TAB_NAMES.len());
    }

    pub fn prev_tab(&mut self) {
        let idx = if self.current_tab == 0 {
            TAB_NAMES.len() - 1
        } else {
            self.current_tab - 1
        };
        self.set_tab(idx);
    }

    pub fn select_next(&mut self) {
        let max = self.current_list_len();
        if max > 0 && self.selected_index < max - 1 {
            self.selected_index += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    /// Returns the length of the selectable list on the current tab.
    pub fn current_list_len(&self) -> usize {
        match self.current_tab {
            BLOCKERS_TAB => self.report.blocker_reasons().len(),
            BATTLECARD_TAB => self.report.battlecard_rows().len(),
            RECOMMENDATIONS_TAB => self.report.recommendations().len(),
            _ => 0,
        }
    }

    // -----------------------------------------------------------------------
    // Filters (display only)
    // -----------------------------------------------------------------------

    pub fn cycle_region(&mut self) {
        self.filters.cycle_region();
        tracing::debug!(region = %self.filters.region, "region changed (report is not filtered)");
    }

    pub fn toggle_call_type(&mut self, call_type: CallType) {
        let on = self.filters.toggle_call_type(call_type);
        tracing::debug!(%call_type, selected = on, "call type toggled (report is not filtered)");
    }

    // -----------------------------------------------------------------------
    // Chat
    // -----------------------------------------------------------------------

    pub fn thinking_delay(&self) -> ThinkingDelay {
        self.dispatcher.delay()
    }

    pub fn is_thinking(&self) -> bool {
        self.dispatcher.is_pending()
    }

    /// Send the contents of the input line.
    pub fn submit_input(&mut self) -> Result<Ticket, ChatError> {
        let query = self.input.clone();
        let ticket = self.ask(&query)?;
        self.input.clear();
        Ok(ticket)
    }

    /// Record the user's turn and start a reply for it.
    pub fn ask(&mut self, query: &str) -> Result<Ticket, ChatError> {
        let ticket = self.dispatcher.dispatch(query)?;
        self.session.push_user(query);
        self.notice = None;
        Ok(ticket)
    }

    /// Drain a finished reply into the transcript without blocking.
    pub fn poll_replies(&mut self) -> Option<Reply> {
        let reply = self.dispatcher.try_recv()?;
        self.accept_reply(reply)
    }

    /// Block up to `timeout` for the in-flight reply.
    pub fn wait_for_reply(&mut self, timeout: Duration) -> Option<Reply> {
        let reply = self.dispatcher.recv_timeout(timeout)?;
        self.accept_reply(reply)
    }

    pub fn cancel_pending(&mut self) -> Option<Ticket> {
        let ticket = self.dispatcher.cancel()?;
        self.notice = Some("Reply cancelled".to_string());
        Some(ticket)
    }

    fn accept_reply(&mut self, reply: Reply) -> Option<Reply> {
        self.session.push_assistant(&reply.content);
        tracing::info!(ticket = reply.ticket, topic = ?reply.topic, "reply received");
        Some(reply)
    }

    pub fn quit(&mut self) {
        self.cancel_pending();
        self.should_quit = true;
    }
}
