pub mod capture;
mod camera;
pub mod params;
mod picking;
mod scene;

pub use camera::EditorCamera;
pub use capture::{AnnotationCapture, CaptureCommand};

use bevy::prelude::*;

use crate::AppSet;

pub struct EditorPlugin;

impl Plugin for EditorPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<capture::AnnotationCapture>()
            .add_message::<capture::CaptureCommand>()
            .init_gizmo_group::<capture::AnnotationGizmoGroup>()
            .add_systems(
                Startup,
                (
                    camera::spawn_camera,
                    scene::spawn_scene,
                    capture::configure_annotation_gizmos,
                ),
            )
            .add_systems(
                Update,
                (
                    camera::camera_orbit,
                    camera::camera_pan,
                    camera::camera_zoom,
                    camera::apply_camera_transform,
                )
                    .chain(),
            )
            .add_systems(
                Update,
                capture::handle_capture_commands
                    .run_if(on_message::<capture::CaptureCommand>)
                    .in_set(AppSet::Capture),
            )
            .add_systems(
                Update,
                (
                    scene::draw_grid,
                    capture::render_annotations,
                    capture::render_draft_preview,
                )
                    .after(AppSet::Physics),
            );
    }
}
