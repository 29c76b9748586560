//! Messaging entity store: conversations and their messages.
//!
//! # Responsibility
//! - Keep the message log and the denormalized conversation previews
//!   consistent through the explicit two-collection send transaction.
//!
//! # Invariants
//! - `send_message` stages both in-memory writes, persists both collections,
//!   and restores both in-memory snapshots when either durable write fails.
//!   A durable blob written before the failing one may stay ahead until the
//!   next successful persist of that collection rewrites it.

use crate::model::message::{Conversation, Message, NewConversation};
use crate::model::RecordId;
use crate::storage::BackingStore;
use crate::store::{now_millis, Collection, StoreResult};
use crate::view;
use std::rc::Rc;

const MESSAGES_KEY: &str = "messages";
const CONVERSATIONS_KEY: &str = "conversations";

/// Store for the messaging family.
pub struct MessageStore<S: BackingStore> {
    backing: Rc<S>,
    messages: Collection<Message>,
    conversations: Collection<Conversation>,
}

impl<S: BackingStore> MessageStore<S> {
    pub fn open(backing: Rc<S>) -> StoreResult<Self> {
        let messages = Collection::hydrate(MESSAGES_KEY, backing.as_ref(), seed_messages())?;
        let conversations =
            Collection::hydrate(CONVERSATIONS_KEY, backing.as_ref(), seed_conversations())?;
        Ok(Self {
            backing,
            messages,
            conversations,
        })
    }

    pub fn start_conversation(&mut self, new: NewConversation) -> StoreResult<RecordId> {
        self.conversations
            .add(self.backing.as_ref(), |id| Conversation {
                id,
                subject: new.subject,
                participants: new.participants,
                last_message: String::new(),
                updated_at: now_millis(),
            })
    }

    pub fn remove_conversation(&mut self, id: RecordId) -> StoreResult<bool> {
        self.conversations.remove(self.backing.as_ref(), id)
    }

    /// Appends a message and refreshes its conversation preview as one
    /// all-or-nothing operation across both collections.
    ///
    /// The conversation reference is weak: sending into a removed
    /// conversation still records the message, it just has no preview to
    /// refresh.
    pub fn send_message(
        &mut self,
        conversation_id: RecordId,
        sender: impl Into<String>,
        body: impl Into<String>,
    ) -> StoreResult<RecordId> {
        let body = body.into();
        let sent_at = now_millis();

        let messages_before = self.messages.snapshot();
        let conversations_before = self.conversations.snapshot();

        let message_id = self.messages.push(|id| Message {
            id,
            conversation_id,
            sender: sender.into(),
            body: body.clone(),
            sent_at,
            read: false,
        });
        self.conversations.mutate(conversation_id, |conversation| {
            conversation.last_message = body.clone();
            conversation.updated_at = sent_at;
        });

        let persisted = self
            .messages
            .persist(self.backing.as_ref())
            .and_then(|()| self.conversations.persist(self.backing.as_ref()));

        if let Err(err) = persisted {
            self.messages.restore(messages_before);
            self.conversations.restore(conversations_before);
            return Err(err);
        }

        Ok(message_id)
    }

    /// Marks one message read; unknown id is a detectable no-op.
    pub fn mark_read(&mut self, message_id: RecordId) -> StoreResult<bool> {
        self.messages
            .update(self.backing.as_ref(), message_id, |message| {
                message.read = true;
            })
    }

    /// Marks every message of a conversation read with a single persist.
    pub fn mark_conversation_read(&mut self, conversation_id: RecordId) -> StoreResult<usize> {
        let unread_ids: Vec<RecordId> = self
            .messages
            .records()
            .iter()
            .filter(|message| message.conversation_id == conversation_id && !message.read)
            .map(|message| message.id)
            .collect();

        if unread_ids.is_empty() {
            return Ok(0);
        }

        for id in &unread_ids {
            self.messages.mutate(*id, |message| message.read = true);
        }
        self.messages.persist(self.backing.as_ref())?;
        Ok(unread_ids.len())
    }

    pub fn conversations(&self) -> Vec<Conversation> {
        self.conversations.list()
    }

    pub fn messages(&self) -> Vec<Message> {
        self.messages.list()
    }

    pub fn conversation_messages(&self, conversation_id: RecordId) -> Vec<Message> {
        view::conversation_messages(self.messages.records(), conversation_id)
    }

    pub fn unread_count(&self, conversation_id: RecordId) -> usize {
        view::unread_count(self.messages.records(), conversation_id)
    }

    /// Most recently active conversations; ties keep insertion order.
    pub fn recent_conversations(&self, n: usize) -> Vec<Conversation> {
        view::top_n_recent(self.conversations.records(), n, |conversation| {
            conversation.updated_at
        })
    }
}

fn seed_conversations() -> Vec<Conversation> {
    vec![Conversation {
        id: 1,
        subject: "Tugas Kelompok IPA".to_string(),
        participants: vec!["Andi".to_string(), "Sari".to_string()],
        last_message: "Jangan lupa bawa laporan praktikum ya.".to_string(),
        updated_at: 1_738_368_000_000,
    }]
}

fn seed_messages() -> Vec<Message> {
    vec![
        Message {
            id: 1,
            conversation_id: 1,
            sender: "Andi".to_string(),
            body: "Besok kumpul di perpustakaan jam istirahat.".to_string(),
            sent_at: 1_738_281_600_000,
            read: true,
        },
        Message {
            id: 2,
            conversation_id: 1,
            sender: "Sari".to_string(),
            body: "Jangan lupa bawa laporan praktikum ya.".to_string(),
            sent_at: 1_738_368_000_000,
            read: false,
        },
    ]
}
