//! Bottom navigation bar.

use egui::{self, RichText, Vec2};
use forge_core::controller::View;
use crate::action::UiAction;
use crate::theme::*;

pub fn nav_bar(ui: &mut egui::Ui, current: View, palette: &Palette) -> Option<UiAction> {
    let mut action = None;
    ui.horizontal(|ui| {
        let button_width = 84.0;
        let total = button_width * View::all().len() as f32
            + ui.spacing().item_spacing.x * (View::all().len() as f32 - 1.0);
        ui.add_space(((ui.available_width() - total) / 2.0).max(0.0));

        for view in View::all() {
            let selected = *view == current;
            let (fill, text) = if selected {
                (ACCENT, ON_ACCENT)
            } else {
                (palette.bg_surface, palette.text_secondary)
            };
            let btn = ui.add(
                egui::Button::new(RichText::new(format!("{} {}", icon(*view), view.label())).color(text))
                    .fill(fill)
                    .corner_radius(PILL_ROUNDING)
                    .min_size(Vec2::new(button_width, 36.0)),
            );
            if btn.clicked() && !selected {
                action = Some(UiAction::Navigate(*view));
            }
        }
    });
    action
}

fn icon(view: View) -> &'static str {
    match view {
        View::Home => "✨",
        View::Chat => "💬",
        View::Projects => "🕘",
        View::Settings => "⚙",
    }
}
