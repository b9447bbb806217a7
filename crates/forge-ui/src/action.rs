//! What the views ask for, and how those requests reach the controller.

use forge_core::controller::{AppController, ReplyTicket, SubmitOutcome, View};
use forge_types::{config::Preferences, event::AppEvent};
use crate::state::UiState;

#[derive(Debug, Clone, PartialEq)]
pub enum UiAction {
    Navigate(View),
    Submit,
    SetPublic(bool),
    ApplySuggestion(String),
    /// "+" button on the home view
    ShowProjects,
    /// CTA on the empty projects list
    CreateNew,
    ViewProject(String),
    EditProject(String),
    DeleteProject(String),
    ClearAllData,
    SetPreferences(Preferences),
}

/// Apply a view action. Returns a ticket when a reply must be scheduled.
pub fn apply_action(ctrl: &mut AppController, action: UiAction) -> Option<ReplyTicket> {
    match action {
        UiAction::Navigate(view) => ctrl.navigate(view),
        UiAction::Submit => {
            if let SubmitOutcome::Scheduled(ticket) = ctrl.submit() {
                return Some(ticket);
            }
        }
        UiAction::SetPublic(is_public) => ctrl.set_public(is_public),
        UiAction::ApplySuggestion(text) => ctrl.apply_suggestion(&text),
        UiAction::ShowProjects => ctrl.show_projects(),
        UiAction::CreateNew => ctrl.create_new(),
        UiAction::ViewProject(id) => ctrl.view_project(&id),
        UiAction::EditProject(id) => ctrl.edit_project(&id),
        UiAction::DeleteProject(id) => ctrl.delete_project(&id),
        UiAction::ClearAllData => ctrl.clear_all_data(),
        UiAction::SetPreferences(prefs) => ctrl.set_preferences(prefs),
    }
    None
}

/// Route drained bus events: due replies go to the controller, notices
/// become toasts. Completing a reply emits new events, which are picked up
/// on the next drain.
pub fn dispatch_events(ctrl: &mut AppController, ui_state: &mut UiState, events: Vec<AppEvent>, now: f64) {
    for event in events {
        match event {
            AppEvent::ReplyDue { ticket } => {
                ctrl.complete_submission(ReplyTicket(ticket));
            }
            AppEvent::Notify { notice } => ui_state.push_notice(notice, now),
            AppEvent::ProjectCreated { id } => {
                log::debug!("Project {} marked as latest", id);
                ui_state.latest_project = Some(id);
            }
        }
    }
}
