//! Saved annotation list with inline rename, delete, and clear-all.

use bevy::prelude::*;
use bevy_egui::egui;

use crate::editor::CaptureCommand;
use crate::map::{Annotation, AnnotationRequest, AnnotationStore};
use crate::theme;

use super::main_panel::section_heading;
use super::PathListState;

pub fn render_path_list(
    ui: &mut egui::Ui,
    store: &AnnotationStore,
    state: &mut PathListState,
    requests: &mut MessageWriter<AnnotationRequest>,
    capture_commands: &mut MessageWriter<CaptureCommand>,
) {
    section_heading(ui, &format!("Path List ({})", store.len()));

    if store.is_empty() {
        ui.label(
            egui::RichText::new("No paths created yet. Start drawing to create your first path.")
                .weak(),
        );
        ui.add_space(8.0);
        return;
    }

    // Drop a stale edit if its annotation went away
    if let Some(id) = state.editing
        && store.get(id).is_none()
    {
        state.end_edit();
    }

    egui::ScrollArea::vertical()
        .id_salt("path_list")
        .max_height(240.0)
        .show(ui, |ui| {
            for annotation in store.iter() {
                egui::Frame::group(ui.style())
                    .inner_margin(egui::Margin::symmetric(6, 4))
                    .show(ui, |ui| {
                        ui.set_width(ui.available_width());
                        render_entry(ui, annotation, state, requests);
                    });
            }
        });

    ui.add_space(8.0);
    if ui
        .add_sized(
            [ui.available_width(), 28.0],
            egui::Button::new(egui::RichText::new("Clear All Paths").color(egui::Color32::RED)),
        )
        .clicked()
    {
        requests.write(AnnotationRequest::ClearAll);
        capture_commands.write(CaptureCommand::StopDrawing);
        state.end_edit();
    }
    ui.add_space(8.0);
}

fn render_entry(
    ui: &mut egui::Ui,
    annotation: &Annotation,
    state: &mut PathListState,
    requests: &mut MessageWriter<AnnotationRequest>,
) {
    if state.editing == Some(annotation.id) {
        render_rename_field(ui, annotation, state, requests);
    } else {
        ui.horizontal(|ui| {
            color_chip(ui, theme::ui::to_egui(annotation.color));

            let label = egui::Label::new(egui::RichText::new(&annotation.name).strong())
                .sense(egui::Sense::click());
            let name = ui.add(label).on_hover_text("Click to rename");
            if name.clicked() {
                state.begin_edit(annotation.id, &annotation.name);
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.small_button("🗑").on_hover_text("Delete").clicked() {
                    requests.write(AnnotationRequest::Delete(annotation.id));
                }
            });
        });
    }

    ui.horizontal(|ui| {
        ui.label(
            egui::RichText::new(annotation.kind.slug())
                .small()
                .color(theme::ui::to_egui(annotation.kind.color())),
        );
        ui.label(
            egui::RichText::new(entry_summary(annotation))
                .small()
                .color(theme::ui::LABEL_TEXT),
        );
    });
}

/// Point count and polyline length, e.g. `4 points, 12.5 m`
fn entry_summary(annotation: &Annotation) -> String {
    let points = annotation.points.len();
    let noun = if points == 1 { "point" } else { "points" };
    format!("{} {}, {:.1} m", points, noun, annotation.length())
}

fn render_rename_field(
    ui: &mut egui::Ui,
    annotation: &Annotation,
    state: &mut PathListState,
    requests: &mut MessageWriter<AnnotationRequest>,
) {
    ui.horizontal(|ui| {
        let field = egui::TextEdit::singleline(&mut state.edit_name)
            .desired_width(ui.available_width() - 50.0);
        let response = ui.add(field);
        if state.focus_pending {
            response.request_focus();
            state.focus_pending = false;
        }

        let (enter, escape) = ui.input(|i| {
            (
                i.key_pressed(egui::Key::Enter),
                i.key_pressed(egui::Key::Escape),
            )
        });
        let save_clicked = ui.button("Save").clicked();

        if escape {
            state.end_edit();
        } else if save_clicked || (response.lost_focus() && enter) {
            requests.write(AnnotationRequest::Rename {
                id: annotation.id,
                name: state.edit_name.clone(),
            });
            state.end_edit();
        }
    });
}

fn color_chip(ui: &mut egui::Ui, color: egui::Color32) {
    let (rect, _) = ui.allocate_exact_size(egui::vec2(12.0, 12.0), egui::Sense::hover());
    ui.painter().circle_filled(rect.center(), 6.0, color);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::{AnnotationId, AnnotationKind};

    #[test]
    fn test_entry_summary_shows_length() {
        let annotation = Annotation::new(
            AnnotationId(1),
            AnnotationKind::Path,
            vec![Vec3::ZERO, Vec3::new(3.0, 0.0, 0.0), Vec3::new(3.0, 0.0, 4.0)],
        );
        assert_eq!(entry_summary(&annotation), "3 points, 7.0 m");
    }

    #[test]
    fn test_entry_summary_single_point() {
        let annotation = Annotation::new(AnnotationId(2), AnnotationKind::Waypoint, vec![Vec3::ONE]);
        assert_eq!(entry_summary(&annotation), "1 point, 0.0 m");
    }
}
