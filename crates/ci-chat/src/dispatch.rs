//! Delayed replies for the chat panel.
//!
//! The dispatcher hands each query to a short-lived worker thread that waits
//! out the thinking delay and then sends the reply back over a channel, so the
//! UI thread never blocks. Only one query may be in flight. Cancelling drops
//! the worker's cancel channel, which wakes it immediately; any reply that
//! still arrives for a cancelled ticket is discarded on receipt.

use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::responder::{Responder, ThinkingDelay};
use crate::selector::Topic;
use crate::ChatError;

pub type Ticket = u64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub ticket: Ticket,
    pub topic: Option<Topic>,
    pub content: String,
}

#[derive(Debug)]
struct Pending {
    ticket: Ticket,
    // Dropping this sender wakes the worker out of its delay.
    _cancel: flume::Sender<()>,
}

#[derive(Debug)]
pub struct ReplyDispatcher {
    responder: Arc<dyn Responder>,
    delay: ThinkingDelay,
    tx: flume::Sender<Reply>,
    rx: flume::Receiver<Reply>,
    next_ticket: Ticket,
    pending: Option<Pending>,
}

impl ReplyDispatcher {
    pub fn new(responder: Arc<dyn Responder>, delay: ThinkingDelay) -> Self {
        let (tx, rx) = flume::unbounded();
        Self {
            responder,
            delay,
            tx,
            rx,
            next_ticket: 1,
            pending: None,
        }
    }

    pub fn delay(&self) -> ThinkingDelay {
        self.delay
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn pending_ticket(&self) -> Option<Ticket> {
        self.pending.as_ref().map(|p| p.ticket)
    }

    /// Start answering `query`. The reply is collected with [`try_recv`] or
    /// [`recv_timeout`].
    ///
    /// [`try_recv`]: ReplyDispatcher::try_recv
    /// [`recv_timeout`]: ReplyDispatcher::recv_timeout
    pub fn dispatch(&mut self, query: &str) -> Result<Ticket, ChatError> {
        if query.trim().is_empty() {
            return Err(ChatError::EmptyQuery);
        }
        if let Some(p) = &self.pending {
            return Err(ChatError::ReplyPending { ticket: p.ticket });
        }

        let ticket = self.next_ticket;
        self.next_ticket += 1;

        let (cancel_tx, cancel_rx) = flume::bounded::<()>(1);
        self.pending = Some(Pending {
            ticket,
            _cancel: cancel_tx,
        });

        let responder = Arc::clone(&self.responder);
        let tx = self.tx.clone();
        let query = query.to_string();
        tracing::debug!(ticket, topic = ?responder.topic(&query), "query dispatched");

        if self.delay.is_zero() {
            let _ = tx.send(answer(responder.as_ref(), ticket, &query));
            return Ok(ticket);
        }

        let delay = self.delay.duration();
        std::thread::spawn(move || {
            // Either the delay elapses or the dispatcher dropped the sender.
            if let Err(flume::RecvTimeoutError::Disconnected) = cancel_rx.recv_timeout(delay) {
                tracing::debug!(ticket, "reply worker cancelled");
                return;
            }
            let _ = tx.send(answer(responder.as_ref(), ticket, &query));
        });

        Ok(ticket)
    }

    /// Abandon the in-flight query, if any.
    pub fn cancel(&mut self) -> Option<Ticket> {
        let pending = self.pending.take()?;
        tracing::info!(ticket = pending.ticket, "pending reply cancelled");
        Some(pending.ticket)
    }

    /// Non-blocking poll for the reply to the in-flight query.
    pub fn try_recv(&mut self) -> Option<Reply> {
        while let Ok(reply) = self.rx.try_recv() {
            if let Some(reply) = self.accept(reply) {
                return Some(reply);
            }
        }
        None
    }

    /// Block up to `timeout` for the reply to the in-flight query.
    pub fn recv_timeout(&mut self, timeout: Duration) -> Option<Reply> {
        let deadline = Instant::now() + timeout;
        while self.pending.is_some() {
            let remaining = deadline.saturating_duration_since(Instant::now());
            match self.rx.recv_timeout(remaining) {
                Ok(reply) => {
                    if let Some(reply) = self.accept(reply) {
                        return Some(reply);
                    }
                }
                Err(_) => return None,
            }
        }
        None
    }

    fn accept(&mut self, reply: Reply) -> Option<Reply> {
        match self.pending_ticket() {
            Some(ticket) if ticket == reply.ticket => {
                self.pending = None;
                Some(reply)
            }
            _ => {
                tracing::debug!(ticket = reply.ticket, "discarding stale reply");
                None
            }
        }
    }
}

fn answer(responder: &dyn Responder, ticket: Ticket, query: &str) -> Reply {
    Reply {
        ticket,
        topic: responder.topic(query),
        content: responder.respond(query),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::responder::CannedResponder;
    use crate::selector::PRICING_RESPONSE;

    fn dispatcher(delay: ThinkingDelay) -> ReplyDispatcher {
        ReplyDispatcher::new(Arc::new(CannedResponder::new()), delay)
    }

    #[test]
    fn zero_delay_reply_is_ready_immediately() {
        let mut d = dispatcher(ThinkingDelay::none());
        let ticket = d.dispatch("what about cost?").unwrap();
        assert!(d.is_pending());

        let reply = d.try_recv().expect("reply ready");
        assert_eq!(reply.ticket, ticket);
        assert_eq!(reply.content, PRICING_RESPONSE);
        assert_eq!(reply.topic, Some(Topic::Pricing));
        assert!(!d.is_pending());
    }

    #[test]
    fn blank_query_is_rejected() {
        let mut d = dispatcher(ThinkingDelay::none());
        assert_eq!(d.dispatch("   "), Err(ChatError::EmptyQuery));
        assert!(!d.is_pending());
    }

    #[test]
    fn second_dispatch_while_pending_is_rejected() {
        let mut d = dispatcher(ThinkingDelay::new(Duration::from_secs(5)));
        let first = d.dispatch("threat?").unwrap();
        assert_eq!(
            d.dispatch("price?"),
            Err(ChatError::ReplyPending { ticket: first })
        );
        d.cancel();
    }

    #[test]
    fn delayed_reply_arrives() {
        let mut d = dispatcher(ThinkingDelay::new(Duration::from_millis(20)));
        let ticket = d.dispatch("executive summary").unwrap();
        let reply = d.recv_timeout(Duration::from_secs(5)).expect("reply");
        assert_eq!(reply.ticket, ticket);
        assert_eq!(reply.topic, Some(Topic::ExecutiveSummary));
    }

    #[test]
    fn cancelled_reply_is_never_delivered() {
        let mut d = dispatcher(ThinkingDelay::new(Duration::from_millis(20)));
        let ticket = d.dispatch("threat?").unwrap();
        assert_eq!(d.cancel(), Some(ticket));
        assert!(d.recv_timeout(Duration::from_millis(100)).is_none());
        assert!(d.try_recv().is_none());
    }

    #[test]
    fn stale_zero_delay_reply_is_dropped_after_cancel() {
        let mut d = dispatcher(ThinkingDelay::none());
        d.dispatch("threat?").unwrap();
        d.cancel();
        let next = d.dispatch("price?").unwrap();
        let reply = d.try_recv().expect("fresh reply");
        assert_eq!(reply.ticket, next);
        assert_eq!(reply.topic, Some(Topic::Pricing));
    }

    #[test]
    fn cancel_without_pending_is_none() {
        let mut d = dispatcher(ThinkingDelay::none());
        assert_eq!(d.cancel(), None);
    }
}
