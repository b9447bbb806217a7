//! Volatile chat transcript for the current page lifetime.

use forge_types::chat::ChatMessage;

#[derive(Debug, Default)]
pub struct ChatSession {
    messages: Vec<ChatMessage>,
}

impl ChatSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append_user(&mut self, text: impl Into<String>) -> &ChatMessage {
        self.push(ChatMessage::user(text))
    }

    pub fn append_assistant(&mut self, text: impl Into<String>) -> &ChatMessage {
        self.push(ChatMessage::assistant(text))
    }

    fn push(&mut self, message: ChatMessage) -> &ChatMessage {
        self.messages.push(message);
        &self.messages[self.messages.len() - 1]
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
