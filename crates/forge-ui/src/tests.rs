#[cfg(test)]
mod tests {
    use crate::action::*;
    use crate::state::*;
    use crate::theme;
    use forge_core::controller::{AppController, View};
    use forge_core::event_bus::EventBus;
    use forge_core::ports::StoragePort;
    use forge_types::config::{AppConfig, Preferences};
    use forge_types::event::AppEvent;
    use forge_types::notice::{Notice, NoticeKind};
    use forge_types::Result;

    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::rc::Rc;

    #[derive(Default)]
    struct MockStorage {
        data: RefCell<HashMap<String, String>>,
    }

    impl StoragePort for MockStorage {
        fn get(&self, key: &str) -> Result<Option<String>> {
            Ok(self.data.borrow().get(key).cloned())
        }
        fn set(&self, key: &str, value: &str) -> Result<()> {
            self.data.borrow_mut().insert(key.to_string(), value.to_string());
            Ok(())
        }
        fn delete(&self, key: &str) -> Result<()> {
            self.data.borrow_mut().remove(key);
            Ok(())
        }
        fn list_keys(&self, prefix: &str) -> Result<Vec<String>> {
            Ok(self.data.borrow().keys().filter(|k| k.starts_with(prefix)).cloned().collect())
        }
        fn clear(&self) -> Result<()> {
            self.data.borrow_mut().clear();
            Ok(())
        }
        fn backend_name(&self) -> &str {
            "mock"
        }
    }

    fn controller() -> (AppController, EventBus) {
        let bus = EventBus::new();
        let ctrl = AppController::new(&AppConfig::default(), Rc::new(MockStorage::default()), bus.clone());
        (ctrl, bus)
    }

    // ─── UiState Tests ───────────────────────────────────────

    #[test]
    fn test_ui_state_initial() {
        let state = UiState::new();
        assert!(state.toasts.is_empty());
        assert!(state.notifications_enabled);
        assert!(state.applied_dark_mode.is_none());
        assert!(state.latest_project.is_none());
    }

    #[test]
    fn test_push_notice_creates_toast() {
        let mut state = UiState::new();
        state.push_notice(Notice::success("Saved"), 1.5);
        assert_eq!(
            state.toasts,
            vec![Toast { kind: NoticeKind::Success, message: "Saved".to_string(), shown_at: 1.5 }]
        );
    }

    #[test]
    fn test_notifications_off_keeps_only_errors() {
        let mut state = UiState::new();
        state.notifications_enabled = false;
        state.push_notice(Notice::info("fyi"), 0.0);
        state.push_notice(Notice::success("done"), 0.0);
        state.push_notice(Notice::error("broken"), 0.0);
        assert_eq!(state.toasts.len(), 1);
        assert_eq!(state.toasts[0].kind, NoticeKind::Error);
    }

    #[test]
    fn test_toasts_expire() {
        let mut state = UiState::new();
        state.push_notice(Notice::info("old"), 0.0);
        state.push_notice(Notice::info("new"), 2.0);

        state.expire_toasts(TOAST_TTL_SECS + 0.5);
        assert_eq!(state.toasts.len(), 1);
        assert_eq!(state.toasts[0].message, "new");

        state.expire_toasts(10.0);
        assert!(state.toasts.is_empty());
    }

    #[test]
    fn test_toast_cap_drops_oldest() {
        let mut state = UiState::new();
        for i in 0..MAX_TOASTS + 2 {
            state.push_notice(Notice::info(format!("n{}", i)), 0.0);
        }
        assert_eq!(state.toasts.len(), MAX_TOASTS);
        assert_eq!(state.toasts[0].message, "n2");
    }

    #[test]
    fn test_needs_theme_only_on_change() {
        let mut state = UiState::new();
        assert!(state.needs_theme(true));
        assert!(!state.needs_theme(true));
        assert!(state.needs_theme(false));
        assert!(!state.needs_theme(false));
    }

    // ─── Action Tests ────────────────────────────────────────

    #[test]
    fn test_apply_submit_returns_ticket() {
        let (mut ctrl, _bus) = controller();
        ctrl.set_input("a todo app");
        let ticket = apply_action(&mut ctrl, UiAction::Submit);
        assert!(ticket.is_some());
        assert!(ctrl.is_loading());
    }

    #[test]
    fn test_apply_blank_submit_returns_none() {
        let (mut ctrl, bus) = controller();
        assert!(apply_action(&mut ctrl, UiAction::Submit).is_none());
        assert!(bus.has_pending());
    }

    #[test]
    fn test_apply_navigation_actions() {
        let (mut ctrl, _bus) = controller();
        apply_action(&mut ctrl, UiAction::Navigate(View::Settings));
        assert_eq!(ctrl.view(), View::Settings);
        apply_action(&mut ctrl, UiAction::ShowProjects);
        assert_eq!(ctrl.view(), View::Projects);
        apply_action(&mut ctrl, UiAction::CreateNew);
        assert_eq!(ctrl.view(), View::Home);
    }

    #[test]
    fn test_apply_suggestion_and_public_toggle() {
        let (mut ctrl, _bus) = controller();
        apply_action(&mut ctrl, UiAction::ApplySuggestion("Make a game".to_string()));
        assert_eq!(ctrl.input(), "Make a game");

        apply_action(&mut ctrl, UiAction::SetPublic(false));
        assert!(!ctrl.is_public());
    }

    #[test]
    fn test_apply_set_preferences() {
        let (mut ctrl, _bus) = controller();
        let prefs = Preferences { default_public: true, notifications: false, dark_mode: false };
        apply_action(&mut ctrl, UiAction::SetPreferences(prefs));
        assert_eq!(ctrl.preferences(), prefs);
    }

    #[test]
    fn test_dispatch_completes_reply_and_shows_toast() {
        let (mut ctrl, bus) = controller();
        let mut state = UiState::new();
        ctrl.set_input("build me a todo app");
        let ticket = apply_action(&mut ctrl, UiAction::Submit).unwrap();

        dispatch_events(&mut ctrl, &mut state, vec![AppEvent::ReplyDue { ticket: ticket.0 }], 0.0);
        assert_eq!(ctrl.view(), View::Chat);
        assert_eq!(ctrl.projects().len(), 1);
        assert_eq!(ctrl.messages().len(), 2);

        // the success notice arrives on the next drain
        dispatch_events(&mut ctrl, &mut state, bus.drain(), 0.1);
        assert_eq!(state.toasts.len(), 1);
        assert_eq!(state.toasts[0].kind, NoticeKind::Success);
        assert_eq!(state.latest_project.as_deref(), Some(ctrl.projects()[0].id.as_str()));
    }

    #[test]
    fn test_latest_project_follows_newest_creation() {
        let (mut ctrl, bus) = controller();
        let mut state = UiState::new();
        for text in ["a game", "a website"] {
            ctrl.set_input(text);
            let ticket = apply_action(&mut ctrl, UiAction::Submit).unwrap();
            dispatch_events(&mut ctrl, &mut state, vec![AppEvent::ReplyDue { ticket: ticket.0 }], 0.0);
            dispatch_events(&mut ctrl, &mut state, bus.drain(), 0.0);
        }
        assert_eq!(ctrl.projects().len(), 2);
        assert_eq!(state.latest_project.as_deref(), Some(ctrl.projects()[1].id.as_str()));
    }

    #[test]
    fn test_project_card_actions_roundtrip() {
        let (mut ctrl, bus) = controller();
        let mut state = UiState::new();
        ctrl.set_input("a website");
        let ticket = apply_action(&mut ctrl, UiAction::Submit).unwrap();
        dispatch_events(&mut ctrl, &mut state, vec![AppEvent::ReplyDue { ticket: ticket.0 }], 0.0);
        let id = ctrl.projects()[0].id.clone();
        bus.drain();

        apply_action(&mut ctrl, UiAction::EditProject(id.clone()));
        assert_eq!(ctrl.input(), "a website");
        assert_eq!(ctrl.view(), View::Home);

        apply_action(&mut ctrl, UiAction::ViewProject(id.clone()));
        apply_action(&mut ctrl, UiAction::DeleteProject(id));
        assert!(ctrl.projects().is_empty());

        dispatch_events(&mut ctrl, &mut state, bus.drain(), 1.0);
        assert_eq!(state.toasts.len(), 3);
    }

    #[test]
    fn test_apply_clear_all_data() {
        let (mut ctrl, _bus) = controller();
        ctrl.set_input("an app");
        let ticket = apply_action(&mut ctrl, UiAction::Submit).unwrap();
        ctrl.complete_submission(ticket);

        apply_action(&mut ctrl, UiAction::ClearAllData);
        assert!(ctrl.projects().is_empty());
    }

    // ─── Theme Tests ─────────────────────────────────────────

    #[test]
    fn test_palette_selection() {
        assert_eq!(theme::palette(true), theme::DARK);
        assert_eq!(theme::palette(false), theme::LIGHT);
        assert_ne!(theme::DARK.bg_primary, theme::LIGHT.bg_primary);
    }
}
