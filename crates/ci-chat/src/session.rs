use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::selector::GREETING;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    User,
    Assistant,
}

#[derive(Debug, Clone, Serialize)]
pub struct ConversationTurn {
    pub role: Role,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

/// Transcript for one interactive session.
///
/// Owned by the caller; there is no shared or global history. Turns are only
/// ever appended, and a new session always starts with the assistant greeting.
#[derive(Debug, Clone, Serialize)]
pub struct ConversationSession {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    turns: Vec<ConversationTurn>,
}

impl ConversationSession {
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            created_at: now,
            turns: vec![ConversationTurn {
                role: Role::Assistant,
                content: GREETING.to_string(),
                timestamp: now,
            }],
        }
    }

    pub fn push_user(&mut self, content: &str) -> &ConversationTurn {
        self.push(Role::User, content)
    }

    pub fn push_assistant(&mut self, content: &str) -> &ConversationTurn {
        self.push(Role::Assistant, content)
    }

    /// All turns, oldest first.
    pub fn turns(&self) -> &[ConversationTurn] {
        &self.turns
    }

    pub fn last(&self) -> Option<&ConversationTurn> {
        self.turns.last()
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    /// Always false: the greeting is present from construction.
    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    fn push(&mut self, role: Role, content: &str) -> &ConversationTurn {
        self.turns.push(ConversationTurn {
            role,
            content: content.to_string(),
            timestamp: Utc::now(),
        });
        &self.turns[self.turns.len() - 1]
    }
}

impl Default for ConversationSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_session_is_seeded_with_greeting() {
        let session = ConversationSession::new();
        assert_eq!(session.len(), 1);
        assert!(!session.is_empty());
        let first = &session.turns()[0];
        assert_eq!(first.role, Role::Assistant);
        assert_eq!(first.content, GREETING);
    }

    #[test]
    fn push_appends_in_order() {
        let mut session = ConversationSession::new();
        session.push_user("hi");
        session.push_assistant("hello");
        let roles: Vec<Role> = session.turns().iter().map(|t| t.role).collect();
        assert_eq!(roles, [Role::Assistant, Role::User, Role::Assistant]);
        assert_eq!(session.last().unwrap().content, "hello");
    }

    #[test]
    fn sessions_have_distinct_ids() {
        assert_ne!(ConversationSession::new().id, ConversationSession::new().id);
    }
}
