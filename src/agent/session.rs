//! Session management: one transcript per opaque session id.

use std::collections::HashMap;

use super::conversation::Conversation;

/// Maps session ids to independent conversations.
///
/// Sessions are process-scoped memory only; distinct ids never share state,
/// so concurrent conversations cannot interleave transcripts.
#[derive(Debug, Default)]
pub struct SessionManager {
    sessions: HashMap<String, Conversation>,
}

impl SessionManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get or create a session by id.
    pub fn get_or_create(&mut self, session_id: &str) -> &mut Conversation {
        self.sessions.entry(session_id.to_string()).or_default()
    }

    /// Get an existing session.
    pub fn get(&self, session_id: &str) -> Option<&Conversation> {
        self.sessions.get(session_id)
    }

    /// Remove a session.
    pub fn remove(&mut self, session_id: &str) -> Option<Conversation> {
        self.sessions.remove(session_id)
    }

    /// List session ids.
    pub fn session_ids(&self) -> Vec<&str> {
        self.sessions.keys().map(|k| k.as_str()).collect()
    }
}
