//! Navigation tuning sliders, persisted through the config file.

use bevy::prelude::*;
use bevy_egui::egui;

use crate::config::{AppConfig, NavigationSettings, SaveConfigRequest};

use super::main_panel::section_heading;

pub fn render_navigation_settings(
    ui: &mut egui::Ui,
    config: &mut AppConfig,
    save_events: &mut MessageWriter<SaveConfigRequest>,
) {
    section_heading(ui, "Navigation");

    // Edit a copy so change detection on the config only fires on real edits
    let mut settings = config.data.navigation.clone();
    let mut commit = false;

    let sliders = [
        (&mut settings.speed, 1.0..=20.0, "Speed"),
        (&mut settings.clearance_radius, 0.1..=2.0, "Fence clearance"),
        (&mut settings.arrival_epsilon, 0.01..=1.0, "Arrival distance"),
    ];
    for (value, range, label) in sliders {
        let response = ui.add(egui::Slider::new(value, range).text(label));
        if response.drag_stopped() || (response.changed() && !response.dragged()) {
            commit = true;
        }
    }

    if ui.button("Reset to defaults").clicked() {
        settings = NavigationSettings::default();
        commit = true;
    }

    if settings != config.data.navigation {
        config.data.navigation = settings;
        config.dirty = true;
    }
    // Save once the user lets go of a slider rather than every frame of a drag
    if commit && config.dirty {
        save_events.write(SaveConfigRequest);
    }

    ui.add_space(8.0);
}
