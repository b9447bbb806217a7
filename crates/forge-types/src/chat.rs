use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single chat bubble, either typed by the user or produced by the simulator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub id: String,
    pub content: String,
    pub is_user: bool,
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(content.into(), true)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(content.into(), false)
    }

    fn new(content: String, is_user: bool) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            content,
            is_user,
            timestamp: Utc::now(),
        }
    }

    /// Locale-agnostic `HH:MM` used under each bubble.
    pub fn time_label(&self) -> String {
        self.timestamp.format("%H:%M").to_string()
    }
}
