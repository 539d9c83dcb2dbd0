//! Scripted chat for the report dashboard: a keyword rule table that picks a
//! canned answer, the per-session transcript, and a dispatcher that delivers
//! answers after a cosmetic "thinking" pause.

pub mod dispatch;
pub mod responder;
pub mod selector;
pub mod session;

pub use dispatch::{Reply, ReplyDispatcher, Ticket};
pub use responder::{CannedResponder, ChatEngine, Responder, ThinkingDelay};
pub use selector::{ResponseSelector, Rule, Topic, Trigger};
pub use session::{ConversationSession, ConversationTurn, Role};

use thiserror::Error;

// ---------------------------------------------------------------------------
// Crate-level error type
// ---------------------------------------------------------------------------

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ChatError {
    #[error("query is empty")]
    EmptyQuery,

    #[error("reply {ticket} is still pending")]
    ReplyPending { ticket: Ticket },
}
