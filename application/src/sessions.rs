//! Per-session conversation ownership
//!
//! Every caregiver gets their own [`Conversation`], and with it their own
//! candidate record. The registry lock is only held while looking up or
//! removing an entry; the conversation itself sits behind a tokio mutex,
//! which queues waiters in FIFO order and so processes one session's
//! messages in arrival order.

use absence_domain::{Conversation, SessionId};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::sync::Mutex as AsyncMutex;

/// Shared handle to one session's conversation
pub type ConversationSlot = Arc<AsyncMutex<Conversation>>;

/// Maps session identities to their live conversations
#[derive(Default)]
pub struct SessionRegistry {
    sessions: Mutex<HashMap<SessionId, ConversationSlot>>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The session's conversation, created in `Idle` on first use.
    pub fn slot(&self, id: &SessionId) -> ConversationSlot {
        let mut sessions = self.lock();
        Arc::clone(
            sessions
                .entry(id.clone())
                .or_insert_with(|| Arc::new(AsyncMutex::new(Conversation::new()))),
        )
    }

    /// Drop a terminated conversation.
    ///
    /// Called by the holder of `slot` while it still holds the conversation
    /// lock. The entry is kept when another message for the same session
    /// already holds a handle, so that message is not handled by a
    /// conversation the registry no longer knows about.
    pub fn release(&self, id: &SessionId, slot: &ConversationSlot) {
        let mut sessions = self.lock();
        // One reference in the map, one held by the caller
        if Arc::strong_count(slot) > 2 {
            return;
        }
        if let Some(current) = sessions.get(id)
            && Arc::ptr_eq(current, slot)
        {
            sessions.remove(id);
        }
    }

    /// Number of sessions with a conversation in memory
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn contains(&self, id: &SessionId) -> bool {
        self.lock().contains_key(id)
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<SessionId, ConversationSlot>> {
        self.sessions.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
