// src/conversation.rs

use crate::constants::GREETING;
use crate::dispatcher::Reply;
use crate::models::Message;

/// The ordered chat history of one session.
#[derive(Debug, Clone)]
pub struct Conversation {
    messages: Vec<Message>,
}

impl Default for Conversation {
    fn default() -> Self {
        Self::new()
    }
}

impl Conversation {
    /// Starts a conversation with the greeting.
    pub fn new() -> Self {
        Self {
            messages: greeting(),
        }
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    pub fn push_user(&mut self, text: impl Into<String>) {
        self.messages.push(Message::user(text));
    }

    /// Whether the placeholder is currently the last message.
    pub fn is_typing(&self) -> bool {
        self.messages.last().is_some_and(|m| m.is_typing)
    }

    /// Appends the placeholder. Returns false if one is already showing.
    pub fn begin_typing(&mut self) -> bool {
        if self.is_typing() {
            return false;
        }
        self.messages.push(Message::typing_placeholder());
        true
    }

    /// Replaces the placeholder with the finalized reply, or appends it when
    /// no placeholder is showing.
    pub fn finish_typing(&mut self, reply: Reply) {
        if self.is_typing() {
            self.messages.pop();
        }
        self.messages
            .push(Message::bot(reply.text).with_download_action(reply.has_download_action));
    }

    /// Replaces the whole history with the greeting.
    pub fn reset(&mut self) {
        self.messages = greeting();
    }
}

fn greeting() -> Vec<Message> {
    GREETING.iter().map(|text| Message::bot(*text)).collect()
}
