//! Agent controls and movement help.

use bevy::prelude::*;
use bevy_egui::egui;

use crate::agent::{Agent, AgentRequest};
use crate::theme;

use super::main_panel::section_heading;

pub fn render_agent_controls(
    ui: &mut egui::Ui,
    agent: Option<&Agent>,
    requests: &mut MessageWriter<AgentRequest>,
) {
    section_heading(ui, "Agent");

    let Some(agent) = agent else {
        if ui
            .add_sized([ui.available_width(), 28.0], egui::Button::new("Add Agent"))
            .clicked()
        {
            requests.write(AgentRequest::Add);
        }
        ui.add_space(8.0);
        return;
    };

    ui.horizontal(|ui| {
        let half = (ui.available_width() - ui.spacing().item_spacing.x) / 2.0;
        if ui
            .add_sized([half, 28.0], egui::Button::new("Reset Position"))
            .clicked()
        {
            requests.write(AgentRequest::ResetPosition);
        }
        if ui
            .add_sized(
                [half, 28.0],
                egui::Button::new(egui::RichText::new("Remove").color(egui::Color32::RED)),
            )
            .clicked()
        {
            requests.write(AgentRequest::Remove);
        }
    });

    ui.add_space(4.0);
    let position = agent.state.position;
    ui.label(
        egui::RichText::new(format!(
            "Position: ({:.1}, {:.1}, {:.1})",
            position.x, position.y, position.z
        ))
        .small()
        .color(theme::ui::LABEL_TEXT),
    );
    if let Some(target) = agent.state.seek_target {
        ui.horizontal(|ui| {
            ui.label(
                egui::RichText::new(format!("Moving to ({:.1}, {:.1})", target.x, target.z))
                    .small()
                    .color(theme::ui::LABEL_TEXT),
            );
            if ui.small_button("Stop").clicked() {
                requests.write(AgentRequest::ClearTarget);
            }
        });
    }
    if agent.blocked {
        ui.colored_label(theme::ui::TOAST_WARNING, "Blocked by fence");
    }

    ui.add_space(6.0);
    egui::CollapsingHeader::new("Controls")
        .default_open(true)
        .show(ui, |ui| {
            ui.label(egui::RichText::new("Keyboard").strong());
            key_row(ui, "W / ↑", "Move forward");
            key_row(ui, "S / ↓", "Move backward");
            key_row(ui, "A / ←", "Move left");
            key_row(ui, "D / →", "Move right");

            ui.add_space(4.0);
            ui.label(egui::RichText::new("Mouse").strong());
            ui.label("Click on the map to move the agent");
            ui.horizontal(|ui| {
                ui.colored_label(theme::ui::to_egui(theme::FENCE_COLOR), "Red fences");
                ui.label("block movement");
            });
        });
    ui.add_space(8.0);
}

fn key_row(ui: &mut egui::Ui, keys: &str, action: &str) {
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new(keys).monospace());
        ui.label(action);
    });
}
