//! Main egui application: owns the controller and renders the active view.

use std::rc::Rc;

use egui::{self, CentralPanel, TopBottomPanel};

use forge_core::controller::{deliver_reply, AppController, ReplyTicket, View};
use forge_core::event_bus::EventBus;
use forge_core::ports::TimerPort;
use forge_platform::storage::open_storage;
use forge_platform::timer::GlooTimer;
use forge_types::config::AppConfig;
use forge_ui::action::{apply_action, dispatch_events, UiAction};
use forge_ui::panels::{chat, home, nav, projects, settings, toasts};
use forge_ui::state::UiState;
use forge_ui::theme;

/// Served next to index.html; egui's bundled fonts have no Arabic glyphs.
const FALLBACK_FONT_URL: &str = "NotoSansArabic-Regular.ttf";
const FALLBACK_FONT_NAME: &str = "noto_sans_arabic";

pub struct ForgeApp {
    controller: AppController,
    ui_state: UiState,
    event_bus: EventBus,
    timer: Rc<dyn TimerPort>,
    first_frame: bool,
}

impl ForgeApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let config = AppConfig::default();
        let event_bus = EventBus::new();
        let storage = open_storage(&config.storage.backend);
        let controller = AppController::new(&config, storage, event_bus.clone());

        log::info!(
            "Ready with {} project(s), reply delay {}ms",
            controller.projects().len(),
            config.simulator.reply_delay_ms
        );

        Self {
            controller,
            ui_state: UiState::new(),
            event_bus,
            timer: Rc::new(GlooTimer),
            first_frame: true,
        }
    }

    /// Fetch a fallback font and append it to every family (async).
    fn load_fallback_font(ctx: egui::Context) {
        wasm_bindgen_futures::spawn_local(async move {
            let Some(window) = web_sys::window() else {
                return;
            };
            let resp = match wasm_bindgen_futures::JsFuture::from(window.fetch_with_str(FALLBACK_FONT_URL)).await {
                Ok(r) => r,
                Err(e) => {
                    log::warn!("Failed to fetch fallback font: {:?}", e);
                    return;
                }
            };
            let resp: web_sys::Response = resp.into();
            if !resp.ok() {
                log::warn!("Fallback font unavailable (HTTP {})", resp.status());
                return;
            }
            let buf = match resp.array_buffer() {
                Ok(p) => match wasm_bindgen_futures::JsFuture::from(p).await {
                    Ok(b) => b,
                    Err(_) => return,
                },
                Err(_) => return,
            };
            let bytes = js_sys::Uint8Array::new(&buf).to_vec();

            let mut fonts = egui::FontDefinitions::default();
            fonts.font_data.insert(
                FALLBACK_FONT_NAME.to_owned(),
                egui::FontData::from_owned(bytes).into(),
            );
            for family in [egui::FontFamily::Proportional, egui::FontFamily::Monospace] {
                fonts
                    .families
                    .entry(family)
                    .or_default()
                    .push(FALLBACK_FONT_NAME.to_owned());
            }
            ctx.set_fonts(fonts);
            ctx.request_repaint();
            log::info!("Fallback font loaded");
        });
    }

    /// Spawn the simulated delay for a freshly accepted submission.
    fn schedule_reply(&self, ticket: ReplyTicket, ctx: &egui::Context) {
        let timer = self.timer.clone();
        let bus = self.event_bus.clone();
        let delay = self.controller.reply_delay_ms();
        let ctx = ctx.clone();

        wasm_bindgen_futures::spawn_local(async move {
            deliver_reply(timer.as_ref(), &bus, ticket, delay).await;
            ctx.request_repaint();
        });
    }

    fn handle(&mut self, action: UiAction, ctx: &egui::Context) {
        if let Some(ticket) = apply_action(&mut self.controller, action) {
            self.schedule_reply(ticket, ctx);
        }
    }
}

impl eframe::App for ForgeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.first_frame {
            Self::load_fallback_font(ctx.clone());
            self.first_frame = false;
        }

        let prefs = self.controller.preferences();
        if self.ui_state.needs_theme(prefs.dark_mode) {
            theme::apply_theme(ctx, prefs.dark_mode);
        }
        self.ui_state.notifications_enabled = prefs.notifications;

        // Drain events; completing a reply queues more, so loop until quiet
        let now = ctx.input(|i| i.time);
        while self.event_bus.has_pending() {
            let events = self.event_bus.drain();
            dispatch_events(&mut self.controller, &mut self.ui_state, events, now);
        }
        self.ui_state.expire_toasts(now);

        if self.controller.is_loading() || !self.ui_state.toasts.is_empty() {
            ctx.request_repaint_after(std::time::Duration::from_millis(250));
        }

        let palette = theme::palette(prefs.dark_mode);
        let mut action = None;

        // ── Bottom navigation ────────────────────────────────
        TopBottomPanel::bottom("nav_bar")
            .frame(egui::Frame::default().fill(palette.bg_card).inner_margin(8.0))
            .show(ctx, |ui| {
                if let Some(a) = nav::nav_bar(ui, self.controller.view(), &palette) {
                    action = Some(a);
                }
            });

        // ── Active view ──────────────────────────────────────
        CentralPanel::default().show(ctx, |ui| {
            let view_action = match self.controller.view() {
                View::Home => home::home_panel(ui, &mut self.controller, &palette),
                View::Chat => chat::chat_panel(ui, &mut self.controller, &palette),
                View::Projects => projects::projects_panel(
                    ui,
                    &self.controller,
                    self.ui_state.latest_project.as_deref(),
                    &palette,
                ),
                View::Settings => settings::settings_panel(ui, &self.controller, &palette),
            };
            if view_action.is_some() {
                action = view_action;
            }
        });

        toasts::toasts(ctx, &self.ui_state, &palette);

        if let Some(action) = action {
            self.handle(action, ctx);
            ctx.request_repaint();
        }
    }
}
