//! Projects view: every stored project as a card with its actions.

use egui::{self, Align, Layout, RichText, Vec2};
use forge_core::controller::AppController;
use forge_types::project::{Project, ProjectStatus};
use crate::action::UiAction;
use crate::theme::*;

/// `latest` is the id of the newest project this session; its card gets a badge.
pub fn projects_panel(
    ui: &mut egui::Ui,
    ctrl: &AppController,
    latest: Option<&str>,
    palette: &Palette,
) -> Option<UiAction> {
    let mut action = None;

    ui.vertical_centered(|ui| {
        ui.set_max_width(CONTENT_WIDTH + 160.0);
        ui.add_space(12.0);
        ui.with_layout(Layout::left_to_right(Align::Center), |ui| {
            ui.heading(RichText::new("My projects").color(palette.text_primary).strong());
        });
        ui.add_space(8.0);

        if ctrl.projects().is_empty() {
            egui::Frame::default()
                .fill(palette.bg_card)
                .corner_radius(CARD_ROUNDING)
                .inner_margin(24.0)
                .show(ui, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.label(RichText::new("🕘").size(36.0));
                        ui.label(RichText::new("No projects yet").color(palette.text_secondary));
                        ui.add_space(12.0);
                        if ui
                            .add(
                                egui::Button::new(RichText::new("Create new project").color(ON_ACCENT))
                                    .fill(ACCENT)
                                    .corner_radius(PILL_ROUNDING),
                            )
                            .clicked()
                        {
                            action = Some(UiAction::CreateNew);
                        }
                    });
                });
            return;
        }

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                for project in ctrl.projects() {
                    let is_latest = latest == Some(project.id.as_str());
                    if let Some(a) = project_card(ui, project, is_latest, palette) {
                        action = Some(a);
                    }
                    ui.add_space(8.0);
                }
            });
    });

    action
}

fn project_card(ui: &mut egui::Ui, project: &Project, is_latest: bool, palette: &Palette) -> Option<UiAction> {
    let mut action = None;

    egui::Frame::default()
        .fill(palette.bg_card)
        .corner_radius(CARD_ROUNDING)
        .inner_margin(PANEL_PADDING)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.with_layout(Layout::top_down(Align::Min), |ui| {
                ui.label(RichText::new(&project.title).color(palette.text_primary).size(17.0).strong());
                ui.label(RichText::new(preview(&project.description)).color(palette.text_secondary));

                ui.horizontal(|ui| {
                    if is_latest {
                        badge(ui, "New", ACCENT);
                    }
                    badge(ui, project.status.label(), status_color(project.status));
                    if project.is_public {
                        badge(ui, "Public", palette.bg_surface);
                    }
                });

                ui.label(
                    RichText::new(format!("Created {}", project.created_at.format("%Y-%m-%d")))
                        .color(palette.text_secondary)
                        .small(),
                );

                ui.horizontal(|ui| {
                    if small_button(ui, "↗ View", palette).clicked() {
                        action = Some(UiAction::ViewProject(project.id.clone()));
                    }
                    if small_button(ui, "✏ Edit", palette).clicked() {
                        action = Some(UiAction::EditProject(project.id.clone()));
                    }
                    let delete = ui.add(
                        egui::Button::new(RichText::new("🗑 Delete").color(ERROR).small())
                            .fill(palette.bg_surface)
                            .corner_radius(PILL_ROUNDING),
                    );
                    if delete.clicked() {
                        action = Some(UiAction::DeleteProject(project.id.clone()));
                    }
                });
            });
        });

    action
}

/// Two-line clamp of the description, roughly what fits on a card.
fn preview(description: &str) -> String {
    const PREVIEW_CHARS: usize = 140;
    match description.char_indices().nth(PREVIEW_CHARS) {
        Some((cut, _)) => format!("{}…", &description[..cut]),
        None => description.to_string(),
    }
}

fn status_color(status: ProjectStatus) -> egui::Color32 {
    match status {
        ProjectStatus::Completed => SUCCESS,
        ProjectStatus::InProgress | ProjectStatus::Draft => WARNING,
    }
}

fn badge(ui: &mut egui::Ui, text: &str, fill: egui::Color32) {
    egui::Frame::default()
        .fill(fill)
        .corner_radius(PILL_ROUNDING)
        .inner_margin(egui::Margin::symmetric(8, 2))
        .show(ui, |ui| {
            ui.label(RichText::new(text).color(ON_ACCENT).small());
        });
}

fn small_button(ui: &mut egui::Ui, text: &str, palette: &Palette) -> egui::Response {
    ui.add(
        egui::Button::new(RichText::new(text).color(palette.text_primary).small())
            .fill(palette.bg_surface)
            .corner_radius(PILL_ROUNDING)
            .min_size(Vec2::new(0.0, 24.0)),
    )
}
