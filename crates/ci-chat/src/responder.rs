use std::sync::Arc;
use std::time::Duration;

use crate::selector::{ResponseSelector, Topic};
use crate::session::{ConversationSession, ConversationTurn};

// ---------------------------------------------------------------------------
// Responder
// ---------------------------------------------------------------------------

/// Anything that can answer a chat query with a single block of text.
pub trait Responder: Send + Sync + std::fmt::Debug {
    fn respond(&self, query: &str) -> String;

    /// Short label for logging which branch answered.
    fn topic(&self, _query: &str) -> Option<Topic> {
        None
    }
}

/// Answers from the canned keyword table.
#[derive(Debug, Clone, Copy, Default)]
pub struct CannedResponder {
    selector: ResponseSelector,
}

impl CannedResponder {
    pub fn new() -> Self {
        Self {
            selector: ResponseSelector::new(),
        }
    }
}

impl Responder for CannedResponder {
    fn respond(&self, query: &str) -> String {
        self.selector.select(query).to_string()
    }

    fn topic(&self, query: &str) -> Option<Topic> {
        Some(self.selector.classify(query))
    }
}

// ---------------------------------------------------------------------------
// ThinkingDelay
// ---------------------------------------------------------------------------

/// Cosmetic pause before a reply is shown. Has no effect on which reply is
/// chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThinkingDelay(Duration);

impl ThinkingDelay {
    pub const DEFAULT: ThinkingDelay = ThinkingDelay(Duration::from_millis(1_000));

    pub fn new(delay: Duration) -> Self {
        Self(delay)
    }

    pub fn none() -> Self {
        Self(Duration::ZERO)
    }

    pub fn duration(&self) -> Duration {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl Default for ThinkingDelay {
    fn default() -> Self {
        Self::DEFAULT
    }
}

// ---------------------------------------------------------------------------
// ChatEngine
// ---------------------------------------------------------------------------

/// Synchronous question/answer over a caller-owned session.
#[derive(Debug, Clone)]
pub struct ChatEngine {
    responder: Arc<dyn Responder>,
}

impl ChatEngine {
    pub fn new() -> Self {
        Self::with_responder(Arc::new(CannedResponder::new()))
    }

    pub fn with_responder(responder: Arc<dyn Responder>) -> Self {
        Self { responder }
    }

    pub fn responder(&self) -> Arc<dyn Responder> {
        Arc::clone(&self.responder)
    }

    /// Append the user's query and the reply to `session`, returning the reply
    /// turn.
    pub fn ask<'s>(
        &self,
        session: &'s mut ConversationSession,
        query: &str,
    ) -> &'s ConversationTurn {
        session.push_user(query);
        let reply = self.responder.respond(query);
        tracing::debug!(
            session = %session.id,
            topic = ?self.responder.topic(query),
            "answered query"
        );
        session.push_assistant(&reply)
    }
}

impl Default for ChatEngine {
    fn default() -> Self {
        Self::new()
    }
}
