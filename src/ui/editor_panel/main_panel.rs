//! Main editor panel UI orchestration.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::agent::{Agent, AgentRequest};
use crate::config::{AppConfig, SaveConfigRequest};
use crate::editor::{AnnotationCapture, CaptureCommand};
use crate::map::{AnnotationRequest, AnnotationStore};

use super::agent::render_agent_controls;
use super::drawing::render_drawing_tools;
use super::path_list::render_path_list;
use super::settings::render_navigation_settings;
use super::PathListState;

/// Main editor panel UI system.
#[allow(clippy::too_many_arguments)]
pub fn editor_panel_ui(
    mut contexts: EguiContexts,
    capture: Res<AnnotationCapture>,
    store: Res<AnnotationStore>,
    agents: Query<&Agent>,
    mut config: ResMut<AppConfig>,
    mut path_list: ResMut<PathListState>,
    mut capture_commands: MessageWriter<CaptureCommand>,
    mut annotation_requests: MessageWriter<AnnotationRequest>,
    mut agent_requests: MessageWriter<AgentRequest>,
    mut save_events: MessageWriter<SaveConfigRequest>,
) -> Result {
    egui::SidePanel::left("editor_panel")
        .default_width(280.0)
        .resizable(false)
        .show(contexts.ctx_mut()?, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                render_drawing_tools(ui, &capture, &mut capture_commands);

                render_path_list(
                    ui,
                    &store,
                    &mut path_list,
                    &mut annotation_requests,
                    &mut capture_commands,
                );

                render_agent_controls(ui, agents.iter().next(), &mut agent_requests);

                render_navigation_settings(ui, &mut config, &mut save_events);
            });
        });
    Ok(())
}

/// Section heading shared by the panel's sections
pub(super) fn section_heading(ui: &mut egui::Ui, title: &str) {
    ui.add_space(4.0);
    ui.label(egui::RichText::new(title).heading().size(18.0));
    ui.add_space(4.0);
    ui.separator();
    ui.add_space(4.0);
}
