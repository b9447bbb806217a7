//! Settings view: preference toggles and the destructive data reset.

use egui::{self, RichText, Vec2};
use forge_core::controller::AppController;
use crate::action::UiAction;
use crate::theme::*;

pub fn settings_panel(ui: &mut egui::Ui, ctrl: &AppController, palette: &Palette) -> Option<UiAction> {
    let mut action = None;
    let mut prefs = ctrl.preferences();

    ui.vertical_centered(|ui| {
        ui.set_max_width(CONTENT_WIDTH);
        ui.add_space(12.0);
        ui.heading(RichText::new("Settings").color(palette.text_primary).strong());
        ui.add_space(8.0);

        egui::Frame::default()
            .fill(palette.bg_card)
            .corner_radius(CARD_ROUNDING)
            .inner_margin(PANEL_PADDING)
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                let mut changed = false;
                changed |= toggle_row(ui, "Projects are public by default", &mut prefs.default_public, palette);
                changed |= toggle_row(ui, "Notifications", &mut prefs.notifications, palette);
                changed |= toggle_row(ui, "Dark mode", &mut prefs.dark_mode, palette);
                if changed {
                    action = Some(UiAction::SetPreferences(prefs));
                }

                ui.add_space(12.0);
                ui.separator();
                ui.add_space(8.0);

                let clear = ui.add(
                    egui::Button::new(RichText::new("Clear all data").color(ON_ACCENT).strong())
                        .fill(ERROR)
                        .corner_radius(PILL_ROUNDING)
                        .min_size(Vec2::new(ui.available_width(), 32.0)),
                );
                if clear.clicked() {
                    action = Some(UiAction::ClearAllData);
                }
                ui.label(
                    RichText::new("Deletes every saved project and resets these settings.")
                        .color(palette.text_secondary)
                        .small()
                        .italics(),
                );
            });
    });

    action
}

fn toggle_row(ui: &mut egui::Ui, label: &str, value: &mut bool, palette: &Palette) -> bool {
    ui.horizontal(|ui| {
        ui.label(RichText::new(label).color(palette.text_primary));
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.checkbox(value, "").changed()
        })
        .inner
    })
    .inner
}
