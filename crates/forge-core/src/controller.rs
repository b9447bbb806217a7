//! App controller: the view router and the submit → reply state machine.
//!
//! A submission happens in two steps:
//! 1. `submit` validates the input, records the user message and hands back
//!    a `ReplyTicket`.
//! 2. After the simulated delay (`deliver_reply`), the app passes the ticket
//!    to `complete_submission`, which creates the project, appends the
//!    canned reply and switches to the chat view.
//!
//! Only one submission may be pending at a time.

use std::rc::Rc;

use forge_types::{
    chat::ChatMessage,
    config::{AppConfig, Preferences},
    event::AppEvent,
    notice::Notice,
    project::Project,
};
use crate::event_bus::EventBus;
use crate::ports::{StoragePort, TimerPort};
use crate::preferences::{load_preferences, save_preferences, PREFERENCES_KEY};
use crate::session::ChatSession;
use crate::simulator;
use crate::store::{ProjectStore, PROJECTS_KEY};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Home,
    Chat,
    Projects,
    Settings,
}

impl View {
    pub fn all() -> &'static [View] {
        &[View::Home, View::Chat, View::Projects, View::Settings]
    }

    pub fn label(&self) -> &str {
        match self {
            View::Home => "Home",
            View::Chat => "Chat",
            View::Projects => "Projects",
            View::Settings => "Settings",
        }
    }
}

/// Identifies one in-flight submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ReplyTicket(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Reply scheduled; deliver the ticket after the delay
    Scheduled(ReplyTicket),
    /// Blank input, a validation notice was emitted
    Rejected,
    /// Another submission is still pending
    Busy,
}

struct PendingSubmission {
    ticket: ReplyTicket,
    description: String,
    is_public: bool,
}

pub struct AppController {
    store: ProjectStore,
    session: ChatSession,
    storage: Rc<dyn StoragePort>,
    event_bus: EventBus,
    view: View,
    input: String,
    preferences: Preferences,
    pending: Option<PendingSubmission>,
    next_ticket: u64,
    reply_delay_ms: u64,
}

impl AppController {
    /// Load projects and preferences from `storage` and start on the home view.
    pub fn new(config: &AppConfig, storage: Rc<dyn StoragePort>, event_bus: EventBus) -> Self {
        let store = ProjectStore::load(storage.clone());
        let preferences = load_preferences(storage.as_ref());
        Self {
            store,
            session: ChatSession::new(),
            storage,
            event_bus,
            view: View::Home,
            input: String::new(),
            preferences,
            pending: None,
            next_ticket: 0,
            reply_delay_ms: config.simulator.reply_delay_ms,
        }
    }

    // ── Read access ──────────────────────────────────────────

    pub fn view(&self) -> View {
        self.view
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut String {
        &mut self.input
    }

    pub fn projects(&self) -> &[Project] {
        self.store.projects()
    }

    pub fn messages(&self) -> &[ChatMessage] {
        self.session.messages()
    }

    pub fn preferences(&self) -> Preferences {
        self.preferences
    }

    pub fn is_public(&self) -> bool {
        self.preferences.default_public
    }

    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    /// Whether a send control should be enabled right now.
    pub fn can_submit(&self) -> bool {
        !self.input.trim().is_empty() && !self.is_loading()
    }

    pub fn reply_delay_ms(&self) -> u64 {
        self.reply_delay_ms
    }

    pub fn event_bus(&self) -> &EventBus {
        &self.event_bus
    }

    // ── Navigation ───────────────────────────────────────────

    pub fn navigate(&mut self, view: View) {
        if self.view != view {
            log::debug!("View {:?} -> {:?}", self.view, view);
        }
        self.view = view;
    }

    /// The "+" button on the home view.
    pub fn show_projects(&mut self) {
        self.navigate(View::Projects);
        self.notify(Notice::info("Showing all projects"));
    }

    /// The call-to-action on the empty projects list.
    pub fn create_new(&mut self) {
        self.navigate(View::Home);
    }

    // ── Submission ───────────────────────────────────────────

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    pub fn submit(&mut self) -> SubmitOutcome {
        if self.input.trim().is_empty() {
            self.notify(Notice::error("Please enter a project description"));
            return SubmitOutcome::Rejected;
        }
        if self.pending.is_some() {
            log::debug!("Submission ignored while a reply is pending");
            return SubmitOutcome::Busy;
        }

        let description = std::mem::take(&mut self.input);
        self.session.append_user(description.clone());

        self.next_ticket += 1;
        let ticket = ReplyTicket(self.next_ticket);
        log::info!("Submission {} accepted ({} chars)", ticket.0, description.chars().count());

        self.pending = Some(PendingSubmission {
            ticket,
            description,
            is_public: self.preferences.default_public,
        });
        SubmitOutcome::Scheduled(ticket)
    }

    /// Finish the submission identified by `ticket`. Stale tickets are ignored.
    pub fn complete_submission(&mut self, ticket: ReplyTicket) -> Option<Project> {
        let pending = match self.pending.take() {
            Some(p) if p.ticket == ticket => p,
            other => {
                self.pending = other;
                log::debug!("Ignoring stale reply ticket {}", ticket.0);
                return None;
            }
        };

        let project = Project::from_description(pending.description.as_str(), pending.is_public);
        let persisted = match self.store.add(project.clone()) {
            Ok(()) => true,
            Err(e) => {
                log::error!("Failed to persist project {}: {}", project.id, e);
                self.notify(Notice::error(format!("Could not save project: {}", e)));
                false
            }
        };

        log::info!(
            "Project {} created (topic: {:?})",
            project.id,
            simulator::topic(&pending.description)
        );
        self.session.append_assistant(simulator::classify(&pending.description));
        self.event_bus.emit(AppEvent::ProjectCreated { id: project.id.clone() });
        if persisted {
            self.notify(Notice::success("Project created successfully!"));
        }
        self.navigate(View::Chat);
        Some(project)
    }

    // ── Project actions ──────────────────────────────────────

    pub fn delete_project(&mut self, id: &str) {
        match self.store.remove(id) {
            Ok(true) => self.notify(Notice::success("Project deleted")),
            Ok(false) => log::debug!("Delete of unknown project {} ignored", id),
            Err(e) => {
                log::error!("Failed to persist deletion of {}: {}", id, e);
                self.notify(Notice::error(format!("Could not save changes: {}", e)));
            }
        }
    }

    /// Load a project's description back into the input. A later submit
    /// creates a new project; the original record is left untouched.
    pub fn edit_project(&mut self, id: &str) {
        let Some(project) = self.store.get(id) else {
            log::debug!("Edit of unknown project {} ignored", id);
            return;
        };
        self.input = project.description.clone();
        self.navigate(View::Home);
        self.notify(Notice::info("Project loaded for editing"));
    }

    pub fn view_project(&mut self, id: &str) {
        if self.store.get(id).is_some() {
            self.notify(Notice::info("Opening project..."));
        }
    }

    pub fn apply_suggestion(&mut self, suggestion: &str) {
        self.input = suggestion.to_string();
        self.notify(Notice::info("Suggestion added"));
    }

    // ── Settings ─────────────────────────────────────────────

    pub fn set_public(&mut self, is_public: bool) {
        let mut prefs = self.preferences;
        prefs.default_public = is_public;
        self.set_preferences(prefs);
    }

    pub fn set_preferences(&mut self, prefs: Preferences) {
        if prefs == self.preferences {
            return;
        }
        self.preferences = prefs;
        if let Err(e) = save_preferences(self.storage.as_ref(), &prefs) {
            log::error!("Failed to persist preferences: {}", e);
            self.notify(Notice::error(format!("Could not save settings: {}", e)));
        }
    }

    /// Wipe all persisted data and reset preferences to their defaults.
    /// In-memory state is reset even when the backend refuses to clear; the
    /// known keys are then deleted one by one.
    pub fn clear_all_data(&mut self) {
        let result = self.store.clear_all().or_else(|e| {
            log::warn!("Storage clear failed ({}), deleting known keys", e);
            self.storage.delete(PROJECTS_KEY)?;
            self.storage.delete(PREFERENCES_KEY)
        });
        self.preferences = Preferences::default();

        match result {
            Ok(()) => {
                log::info!("All data cleared");
                self.notify(Notice::success("All data cleared"));
            }
            Err(e) => {
                log::error!("Failed to clear storage: {}", e);
                self.notify(Notice::error(format!("Could not clear data: {}", e)));
            }
        }
    }

    fn notify(&self, notice: Notice) {
        self.event_bus.emit(AppEvent::Notify { notice });
    }
}

/// Wait out the simulated delay, then announce that `ticket` is due.
///
/// Spawn via `wasm_bindgen_futures::spawn_local`; it never blocks the UI.
pub async fn deliver_reply(timer: &dyn TimerPort, bus: &EventBus, ticket: ReplyTicket, delay_ms: u64) {
    timer.sleep(delay_ms).await;
    bus.emit(AppEvent::ReplyDue { ticket: ticket.0 });
}
