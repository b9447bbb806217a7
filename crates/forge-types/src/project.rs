use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Titles keep at most this many characters of the description.
pub const TITLE_MAX_CHARS: usize = 50;
pub const TITLE_ELLIPSIS: &str = "...";

/// Lifecycle of a generated project.
///
/// Only `InProgress` is produced today; the other states stay in the model
/// so persisted data keeps its shape once transitions exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    Draft,
    InProgress,
    Completed,
}

impl ProjectStatus {
    pub fn label(&self) -> &str {
        match self {
            ProjectStatus::Draft => "Draft",
            ProjectStatus::InProgress => "In progress",
            ProjectStatus::Completed => "Completed",
        }
    }
}

/// One user-initiated generation request and its metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    pub is_public: bool,
    pub created_at: DateTime<Utc>,
    pub status: ProjectStatus,
}

impl Project {
    /// Build a fresh `InProgress` project from the raw user description.
    pub fn from_description(description: impl Into<String>, is_public: bool) -> Self {
        let description = description.into();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            title: derive_title(&description),
            description,
            is_public,
            created_at: Utc::now(),
            status: ProjectStatus::InProgress,
        }
    }
}

/// First `TITLE_MAX_CHARS` characters of `text`, with an ellipsis appended
/// only when something was cut off.
pub fn derive_title(text: &str) -> String {
    match text.char_indices().nth(TITLE_MAX_CHARS) {
        Some((cut, _)) => format!("{}{}", &text[..cut], TITLE_ELLIPSIS),
        None => text.to_string(),
    }
}
