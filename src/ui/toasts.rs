use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::notifications::{NotificationLevel, Notifications};
use crate::theme;

fn level_color(level: NotificationLevel) -> egui::Color32 {
    match level {
        NotificationLevel::Success => theme::ui::TOAST_SUCCESS,
        NotificationLevel::Info => theme::ui::TOAST_INFO,
        NotificationLevel::Warning => theme::ui::TOAST_WARNING,
    }
}

/// Stack of active notifications in the bottom-right corner
pub fn toasts_ui(mut contexts: EguiContexts, notifications: Res<Notifications>) -> Result {
    if notifications.is_empty() {
        return Ok(());
    }

    egui::Area::new(egui::Id::new("toasts"))
        .anchor(egui::Align2::RIGHT_BOTTOM, [-16.0, -16.0])
        .interactable(false)
        .show(contexts.ctx_mut()?, |ui| {
            ui.with_layout(egui::Layout::bottom_up(egui::Align::Max), |ui| {
                // Newest at the bottom
                for toast in notifications.iter().rev() {
                    let accent = level_color(toast.level);
                    egui::Frame::popup(ui.style())
                        .stroke(egui::Stroke::new(1.0, accent))
                        .show(ui, |ui| {
                            ui.set_max_width(320.0);
                            ui.colored_label(accent, &toast.message);
                        });
                    ui.add_space(6.0);
                }
            });
        });
    Ok(())
}
