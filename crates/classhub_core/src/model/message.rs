//! Messaging family records: conversations and their messages.
//!
//! # Invariants
//! - `Message::conversation_id` is a weak reference; a message whose
//!   conversation was removed still lists, it just never renders a thread.
//! - `Conversation::last_message`/`updated_at` are denormalized from the most
//!   recent send and kept consistent by the two-collection send transaction.

use super::{Record, RecordId};
use serde::{Deserialize, Serialize};

/// One message thread between portal members.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conversation {
    pub id: RecordId,
    pub subject: String,
    pub participants: Vec<String>,
    /// Body text of the most recent message, for list previews.
    pub last_message: String,
    /// Epoch milliseconds of the most recent send.
    pub updated_at: i64,
}

impl Record for Conversation {
    fn id(&self) -> RecordId {
        self.id
    }
}

#[derive(Debug, Clone, Default)]
pub struct NewConversation {
    pub subject: String,
    pub participants: Vec<String>,
}

/// One message inside a conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: RecordId,
    pub conversation_id: RecordId,
    pub sender: String,
    pub body: String,
    /// Epoch milliseconds at send time.
    pub sent_at: i64,
    pub read: bool,
}

impl Record for Message {
    fn id(&self) -> RecordId {
        self.id
    }
}
