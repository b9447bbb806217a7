use serde::{Deserialize, Serialize};
use crate::notice::Notice;

/// Events published by the controller and the reply timer.
/// The app drains these once per frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AppEvent {
    /// Show a toast
    Notify { notice: Notice },

    /// The simulated reply delay for a submission has elapsed
    ReplyDue { ticket: u64 },

    /// A project was added to the store
    ProjectCreated { id: String },
}
