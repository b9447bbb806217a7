//! Chat view: the transcript of this session plus an input row.

use egui::{self, Align, Layout, RichText, ScrollArea, Vec2};
use forge_core::controller::AppController;
use forge_types::chat::ChatMessage;
use crate::action::UiAction;
use crate::theme::*;

/// Render the chat view. Returns an action when the user submits.
pub fn chat_panel(ui: &mut egui::Ui, ctrl: &mut AppController, palette: &Palette) -> Option<UiAction> {
    let mut action = None;

    ui.vertical(|ui| {
        // Header
        ui.horizontal(|ui| {
            egui::Frame::default()
                .fill(palette.bg_surface)
                .corner_radius(PILL_ROUNDING)
                .inner_margin(8.0)
                .show(ui, |ui| {
                    ui.label(RichText::new("AI").color(palette.text_primary).strong());
                });
            ui.vertical(|ui| {
                ui.label(RichText::new("Forge AI").color(palette.text_primary).strong());
                ui.label(
                    RichText::new("Your assistant for building apps")
                        .color(palette.text_secondary)
                        .small(),
                );
            });
        });

        ui.separator();

        // Messages area
        let available_height = ui.available_height() - 56.0;
        ScrollArea::vertical()
            .max_height(available_height)
            .auto_shrink([false, false])
            .stick_to_bottom(true)
            .show(ui, |ui| {
                if ctrl.messages().is_empty() && !ctrl.is_loading() {
                    ui.vertical_centered(|ui| {
                        ui.add_space(32.0);
                        ui.label(RichText::new("💬").size(36.0));
                        ui.label(
                            RichText::new("Start a new conversation with Forge AI")
                                .color(palette.text_secondary),
                        );
                    });
                }

                for message in ctrl.messages() {
                    render_message(ui, message, palette);
                    ui.add_space(6.0);
                }

                if ctrl.is_loading() {
                    egui::Frame::default()
                        .fill(palette.bubble_assistant)
                        .corner_radius(CARD_ROUNDING)
                        .inner_margin(10.0)
                        .show(ui, |ui| {
                            ui.horizontal(|ui| {
                                ui.spinner();
                                ui.label(RichText::new("Typing...").color(palette.text_secondary).small());
                            });
                        });
                }
            });

        ui.add_space(8.0);

        // Input area
        ui.horizontal(|ui| {
            let input = egui::TextEdit::singleline(ctrl.input_mut())
                .hint_text("Type your message...")
                .desired_width(ui.available_width() - 52.0)
                .font(egui::FontId::proportional(14.0));
            let response = ui.add(input);

            let enabled = ctrl.can_submit();
            let send = ui.add_enabled(
                enabled,
                egui::Button::new(RichText::new("⬆").color(ON_ACCENT))
                    .fill(if enabled { ACCENT } else { palette.bg_surface })
                    .corner_radius(PILL_ROUNDING)
                    .min_size(Vec2::splat(40.0)),
            );

            let enter = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
            if enter || send.clicked() {
                action = Some(UiAction::Submit);
                response.request_focus();
            }
        });
    });

    action
}

fn render_message(ui: &mut egui::Ui, message: &ChatMessage, palette: &Palette) {
    let (layout, fill, text) = if message.is_user {
        (Layout::right_to_left(Align::Min), palette.bubble_user, ON_ACCENT)
    } else {
        (Layout::left_to_right(Align::Min), palette.bubble_assistant, palette.text_primary)
    };
    let max_width = ui.available_width() * 0.8;

    ui.with_layout(layout, |ui| {
        ui.label(RichText::new(if message.is_user { "🧑" } else { "🤖" }).size(18.0));
        egui::Frame::default()
            .fill(fill)
            .corner_radius(CARD_ROUNDING)
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.set_max_width(max_width);
                ui.vertical(|ui| {
                    ui.label(RichText::new(&message.content).color(text));
                    ui.label(
                        RichText::new(message.time_label())
                            .color(text.linear_multiply(0.6))
                            .small(),
                    );
                });
            });
    });
}
