//! Home view: headline, prompt box, quick suggestions and stats.

use egui::{self, Key, Modifiers, RichText, Vec2};
use forge_core::controller::AppController;
use forge_core::simulator;
use crate::action::UiAction;
use crate::theme::*;

/// Render the home view. Returns an action when the user does something.
pub fn home_panel(ui: &mut egui::Ui, ctrl: &mut AppController, palette: &Palette) -> Option<UiAction> {
    let mut action = None;
    let input_id = egui::Id::new("home_prompt");

    // Enter submits, Shift+Enter inserts a newline. Consume the key before
    // the TextEdit sees it.
    let focused = ui.memory(|m| m.has_focus(input_id));
    if focused && ui.input_mut(|i| i.consume_key(Modifiers::NONE, Key::Enter)) {
        action = Some(UiAction::Submit);
    }

    ui.vertical_centered(|ui| {
        ui.set_max_width(CONTENT_WIDTH);
        ui.add_space(32.0);

        ui.label(RichText::new("✨").size(40.0));
        ui.add_space(8.0);
        ui.label(
            RichText::new("Build something with Forge")
                .color(palette.text_primary)
                .size(30.0)
                .strong(),
        );
        ui.label(
            RichText::new("Create apps and websites by chatting with AI")
                .color(palette.text_secondary)
                .size(16.0),
        );
        ui.add_space(24.0);

        // Prompt card
        egui::Frame::default()
            .fill(palette.bg_card)
            .corner_radius(CARD_ROUNDING)
            .inner_margin(PANEL_PADDING)
            .show(ui, |ui| {
                ui.add(
                    egui::TextEdit::multiline(ctrl.input_mut())
                        .id(input_id)
                        .hint_text("Ask Forge to create an internal tool that...")
                        .desired_rows(3)
                        .desired_width(f32::INFINITY)
                        .frame(false),
                );

                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    if ui
                        .add(
                            egui::Button::new(RichText::new("+").color(palette.text_primary).size(18.0))
                                .fill(palette.bg_surface)
                                .corner_radius(PILL_ROUNDING)
                                .min_size(Vec2::splat(36.0)),
                        )
                        .on_hover_text("All projects")
                        .clicked()
                    {
                        action = Some(UiAction::ShowProjects);
                    }

                    let mut is_public = ctrl.is_public();
                    if ui
                        .checkbox(&mut is_public, RichText::new("🌐 Public").color(palette.text_secondary))
                        .changed()
                    {
                        action = Some(UiAction::SetPublic(is_public));
                    }

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let enabled = ctrl.can_submit();
                        let send = ui.add_enabled(
                            enabled,
                            egui::Button::new(RichText::new("⬆").color(ON_ACCENT).size(18.0))
                                .fill(if enabled { ACCENT } else { palette.bg_surface })
                                .corner_radius(PILL_ROUNDING)
                                .min_size(Vec2::splat(36.0)),
                        );
                        if send.clicked() {
                            action = Some(UiAction::Submit);
                        }
                        if ctrl.is_loading() {
                            ui.spinner();
                        }
                    });
                });
            });

        ui.add_space(20.0);

        // Quick suggestions
        ui.label(RichText::new("Quick suggestions").color(palette.text_secondary).small());
        let row_width = ui.available_width();
        for suggestion in simulator::home_suggestions() {
            let btn = ui.add(
                egui::Button::new(RichText::new(*suggestion).color(palette.text_primary))
                    .fill(palette.bg_surface)
                    .corner_radius(CARD_ROUNDING)
                    .min_size(Vec2::new(row_width, 32.0)),
            );
            if btn.clicked() {
                action = Some(UiAction::ApplySuggestion(suggestion.to_string()));
            }
        }

        ui.add_space(20.0);

        // Stats
        let project_count = ctrl.projects().len().to_string();
        ui.columns(3, |cols| {
            stat(&mut cols[0], &project_count, "Projects", palette);
            stat(&mut cols[1], "∞", "Possibilities", palette);
            stat(&mut cols[2], "24/7", "Available", palette);
        });
    });

    action
}

fn stat(ui: &mut egui::Ui, value: &str, label: &str, palette: &Palette) {
    ui.vertical_centered(|ui| {
        ui.label(RichText::new(value).color(palette.text_primary).size(22.0).strong());
        ui.label(RichText::new(label).color(palette.text_secondary).small());
    });
}
