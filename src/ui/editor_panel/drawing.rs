//! Drawing mode selector and start/stop drawing controls.

use bevy::prelude::*;
use bevy_egui::egui;

use crate::editor::{AnnotationCapture, CaptureCommand};
use crate::map::AnnotationKind;
use crate::theme;

use super::main_panel::section_heading;

pub fn render_drawing_tools(
    ui: &mut egui::Ui,
    capture: &AnnotationCapture,
    commands: &mut MessageWriter<CaptureCommand>,
) {
    section_heading(ui, "Drawing Tools");

    ui.label("Drawing Mode:");
    for kind in AnnotationKind::all() {
        let selected = capture.selected_kind() == *kind;
        let text = egui::RichText::new(kind.display_name())
            .size(14.0)
            .color(theme::ui::to_egui(kind.color()));

        let button = egui::Button::new(text)
            .min_size(egui::vec2(ui.available_width(), 26.0))
            .selected(selected);
        if ui.add(button).clicked() && !selected {
            commands.write(CaptureCommand::SetKind(*kind));
        }
    }

    ui.add_space(8.0);

    let (label, command) = if capture.is_drawing() {
        ("Stop Drawing", CaptureCommand::StopDrawing)
    } else {
        (
            "Start Drawing",
            CaptureCommand::StartDrawing(capture.selected_kind()),
        )
    };
    if ui
        .add_sized([ui.available_width(), 28.0], egui::Button::new(label))
        .clicked()
    {
        commands.write(command);
    }

    if capture.is_drawing() {
        ui.add_space(4.0);
        ui.colored_label(
            theme::ui::DRAWING_ACTIVE,
            format!(
                "Drawing {} ({} points)",
                capture.selected_kind().slug(),
                capture.draft().len()
            ),
        );
        ui.label(
            egui::RichText::new(
                "Click on the map to add points. Press Enter to finish or Esc to cancel.",
            )
            .small()
            .weak(),
        );
    }

    ui.add_space(8.0);
}
