mod dialogs;
mod editor_panel;
mod toasts;
mod top_bar;

use bevy::prelude::*;
use bevy_egui::EguiPrimaryContextPass;

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<editor_panel::PathListState>()
            // Side panels must render first so top panels fit beside them
            .add_systems(EguiPrimaryContextPass, editor_panel::editor_panel_ui)
            .add_systems(
                EguiPrimaryContextPass,
                top_bar::top_bar_ui.after(editor_panel::editor_panel_ui),
            )
            .add_systems(
                EguiPrimaryContextPass,
                (toasts::toasts_ui, dialogs::config_reset_notification_ui)
                    .after(top_bar::top_bar_ui),
            );
    }
}
