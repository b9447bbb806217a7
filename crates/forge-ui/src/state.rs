//! UI-only state: toasts, the newest project's badge and which theme is
//! currently applied.
//! Everything else is read straight from the `AppController`.

use forge_types::notice::{Notice, NoticeKind};

/// Seconds a toast stays on screen.
pub const TOAST_TTL_SECS: f64 = 3.0;
/// Oldest toasts are dropped beyond this many.
pub const MAX_TOASTS: usize = 4;

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub kind: NoticeKind,
    pub message: String,
    /// egui time (seconds) when the toast was first shown
    pub shown_at: f64,
}

pub struct UiState {
    pub toasts: Vec<Toast>,
    /// Mirrors `Preferences::notifications`; errors are always shown
    pub notifications_enabled: bool,
    /// Theme currently installed in the egui context, `None` before the first frame
    pub applied_dark_mode: Option<bool>,
    /// Id of the most recently created project, badged as new in the list
    pub latest_project: Option<String>,
}

impl UiState {
    pub fn new() -> Self {
        Self {
            toasts: Vec::new(),
            notifications_enabled: true,
            applied_dark_mode: None,
            latest_project: None,
        }
    }

    pub fn push_notice(&mut self, notice: Notice, now: f64) {
        if !self.notifications_enabled && !notice.is_error() {
            log::debug!("Toast suppressed: {}", notice.message);
            return;
        }
        self.toasts.push(Toast {
            kind: notice.kind,
            message: notice.message,
            shown_at: now,
        });
        if self.toasts.len() > MAX_TOASTS {
            let excess = self.toasts.len() - MAX_TOASTS;
            self.toasts.drain(..excess);
        }
    }

    pub fn expire_toasts(&mut self, now: f64) {
        self.toasts.retain(|t| now - t.shown_at < TOAST_TTL_SECS);
    }

    /// Returns true when the theme must be (re)applied for `dark`.
    pub fn needs_theme(&mut self, dark: bool) -> bool {
        if self.applied_dark_mode == Some(dark) {
            return false;
        }
        self.applied_dark_mode = Some(dark);
        true
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}
