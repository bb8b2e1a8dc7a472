use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::config::ConfigResetNotification;

/// Shown at startup when the config file could not be used
pub fn config_reset_notification_ui(
    mut contexts: EguiContexts,
    mut notification: ResMut<ConfigResetNotification>,
) -> Result {
    if !notification.show {
        return Ok(());
    }

    egui::Window::new("Settings Reset")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(contexts.ctx_mut()?, |ui| {
            ui.label("Navigation settings were reset to their defaults.");

            if let Some(ref reason) = notification.reason {
                ui.add_space(5.0);
                ui.label(egui::RichText::new(reason).weak());
            }

            ui.add_space(10.0);
            if ui.button("OK").clicked() {
                notification.show = false;
                notification.reason = None;
            }
        });

    Ok(())
}
