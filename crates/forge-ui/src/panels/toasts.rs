//! Toast overlay, stacked at the top center of the screen.

use egui::{self, Align2, RichText};
use forge_types::notice::NoticeKind;
use crate::state::UiState;
use crate::theme::*;

pub fn toasts(ctx: &egui::Context, state: &UiState, palette: &Palette) {
    if state.toasts.is_empty() {
        return;
    }
    egui::Area::new(egui::Id::new("forge_toasts"))
        .anchor(Align2::CENTER_TOP, [0.0, 16.0])
        .interactable(false)
        .show(ctx, |ui| {
            for toast in &state.toasts {
                let (marker, color) = match toast.kind {
                    NoticeKind::Success => ("✔", SUCCESS),
                    NoticeKind::Error => ("✖", ERROR),
                    NoticeKind::Info => ("ℹ", ACCENT),
                };
                egui::Frame::default()
                    .fill(palette.bg_card)
                    .stroke(egui::Stroke::new(1.0, color))
                    .corner_radius(PILL_ROUNDING)
                    .inner_margin(egui::Margin::symmetric(14, 8))
                    .show(ui, |ui| {
                        ui.horizontal(|ui| {
                            ui.label(RichText::new(marker).color(color).strong());
                            ui.label(RichText::new(&toast.message).color(palette.text_primary));
                        });
                    });
                ui.add_space(6.0);
            }
        });
}
