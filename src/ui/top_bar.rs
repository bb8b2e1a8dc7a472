use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::editor::AnnotationCapture;
use crate::map::{AnnotationKind, AnnotationStore};
use crate::theme;

/// Title bar with the path count and drawing status
pub fn top_bar_ui(
    mut contexts: EguiContexts,
    store: Res<AnnotationStore>,
    capture: Res<AnnotationCapture>,
) -> Result {
    egui::TopBottomPanel::top("top_bar")
        .frame(
            egui::Frame::side_top_panel(&contexts.ctx_mut()?.style())
                .inner_margin(egui::Margin::symmetric(12, 8)),
        )
        .show(contexts.ctx_mut()?, |ui| {
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new("3D Map Editor").size(18.0).strong());

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                if capture.is_drawing() {
                    ui.colored_label(
                        theme::ui::DRAWING_ACTIVE,
                        egui::RichText::new(format!(
                            "● DRAWING {}",
                            capture.selected_kind().display_name().to_uppercase()
                        ))
                        .strong(),
                    );
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        egui::RichText::new("Right-drag rotate, middle-drag pan, wheel zoom")
                            .small()
                            .weak(),
                    );
                    ui.add_space(8.0);
                    path_count_badge(ui, store.len())
                        .on_hover_text(kind_breakdown(&store));
                });
            });
        });
    Ok(())
}

/// Per-kind counts for the badge tooltip, e.g. `2 fence, 0 path, 1 waypoint`
fn kind_breakdown(store: &AnnotationStore) -> String {
    AnnotationKind::all()
        .iter()
        .map(|kind| format!("{} {}", store.count_of(*kind), kind.slug()))
        .collect::<Vec<_>>()
        .join(", ")
}

fn path_count_badge(ui: &mut egui::Ui, count: usize) -> egui::Response {
    let text = if count == 1 {
        "1 path".to_string()
    } else {
        format!("{} paths", count)
    };

    egui::Frame::new()
        .fill(ui.visuals().widgets.inactive.bg_fill)
        .corner_radius(8.0)
        .inner_margin(egui::Margin::symmetric(8, 2))
        .show(ui, |ui| {
            ui.label(egui::RichText::new(text).small().strong());
        })
        .response
}
