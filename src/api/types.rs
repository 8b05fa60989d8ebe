//! Shared types for the HTTP layer.

use std::sync::Arc;

use crate::config::DEFAULT_MAX_MESSAGE_LEN;
use crate::db::VitalsStore;
use crate::triage::TriageResponder;

/// Shared context for all API routes.
#[derive(Clone)]
pub struct ApiContext {
    pub store: Arc<VitalsStore>,
    pub responder: Arc<TriageResponder>,
    /// Longest accepted chat message, in characters.
    pub max_message_len: usize,
}

impl ApiContext {
    pub fn new(store: Arc<VitalsStore>) -> Self {
        Self {
            store,
            responder: Arc::new(TriageResponder::new()),
            max_message_len: DEFAULT_MAX_MESSAGE_LEN,
        }
    }

    pub fn with_max_message_len(mut self, max_message_len: usize) -> Self {
        self.max_message_len = max_message_len;
        self
    }
}
