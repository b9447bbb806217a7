//! UI theme constants

use egui::{Color32, CornerRadius, Stroke, Vec2};

/// Colors that differ between dark and light mode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub bg_primary: Color32,
    pub bg_card: Color32,
    pub bg_surface: Color32,
    pub text_primary: Color32,
    pub text_secondary: Color32,
    pub bubble_user: Color32,
    pub bubble_assistant: Color32,
}

pub const DARK: Palette = Palette {
    bg_primary: Color32::from_rgb(15, 23, 42),
    bg_card: Color32::from_rgb(30, 27, 58),
    bg_surface: Color32::from_rgb(49, 46, 84),
    text_primary: Color32::from_rgb(241, 245, 249),
    text_secondary: Color32::from_rgb(148, 163, 184),
    bubble_user: Color32::from_rgb(37, 99, 235),
    bubble_assistant: Color32::from_rgb(30, 27, 58),
};

pub const LIGHT: Palette = Palette {
    bg_primary: Color32::from_rgb(248, 250, 252),
    bg_card: Color32::from_rgb(255, 255, 255),
    bg_surface: Color32::from_rgb(226, 232, 240),
    text_primary: Color32::from_rgb(15, 23, 42),
    text_secondary: Color32::from_rgb(100, 116, 139),
    bubble_user: Color32::from_rgb(37, 99, 235),
    bubble_assistant: Color32::from_rgb(241, 245, 249),
};

pub const ACCENT: Color32 = Color32::from_rgb(219, 39, 119);
pub const SUCCESS: Color32 = Color32::from_rgb(22, 163, 74);
pub const ERROR: Color32 = Color32::from_rgb(239, 68, 68);
pub const WARNING: Color32 = Color32::from_rgb(234, 88, 12);
pub const ON_ACCENT: Color32 = Color32::WHITE;

pub const CARD_ROUNDING: CornerRadius = CornerRadius::same(14);
pub const PILL_ROUNDING: CornerRadius = CornerRadius::same(20);
pub const PANEL_PADDING: Vec2 = Vec2::new(16.0, 12.0);
/// Content column width, the original layout is phone-sized
pub const CONTENT_WIDTH: f32 = 480.0;

pub fn palette(dark: bool) -> Palette {
    if dark { DARK } else { LIGHT }
}

/// Apply the dark or light theme to an egui context
pub fn apply_theme(ctx: &egui::Context, dark: bool) {
    let p = palette(dark);
    let mut style = (*ctx.style()).clone();

    style.visuals = if dark { egui::Visuals::dark() } else { egui::Visuals::light() };
    style.visuals.panel_fill = p.bg_primary;
    style.visuals.window_fill = p.bg_card;
    style.visuals.extreme_bg_color = p.bg_surface;

    style.visuals.widgets.inactive.bg_fill = p.bg_surface;
    style.visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, p.text_secondary);
    style.visuals.widgets.hovered.bg_fill = p.bg_surface;
    style.visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, p.text_primary);
    style.visuals.widgets.active.bg_fill = ACCENT;
    style.visuals.widgets.active.fg_stroke = Stroke::new(1.0, ON_ACCENT);

    style.visuals.selection.bg_fill = ACCENT.linear_multiply(0.4);
    style.visuals.selection.stroke = Stroke::new(1.0, ACCENT);

    style.spacing.item_spacing = Vec2::new(8.0, 8.0);

    ctx.set_style(style);
}
