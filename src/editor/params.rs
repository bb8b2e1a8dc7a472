//! Common SystemParam bundles for editor input handling.
//!
//! - [`CameraParams`]: camera and window access for cursor-to-ground conversion
//! - [`is_cursor_over_ui`] / [`is_typing`]: egui input gating

use bevy::ecs::system::SystemParam;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use bevy_egui::EguiContexts;

use crate::constants::{GROUND_HEIGHT, GROUND_SIZE};

use super::picking::{ray_ground_intersection, ray_map_intersection};
use super::EditorCamera;

/// Bundled camera and window queries for cursor-to-ground calculations
#[derive(SystemParam)]
pub struct CameraParams<'w, 's> {
    pub window: Query<'w, 's, &'static Window, With<PrimaryWindow>>,
    pub camera: Query<'w, 's, (&'static Camera, &'static GlobalTransform), With<EditorCamera>>,
}

impl CameraParams<'_, '_> {
    /// Where the cursor ray meets the ground plane, if it does
    pub fn cursor_ground_pos(&self) -> Option<Vec3> {
        let ray = self.cursor_ray()?;
        ray_ground_intersection(ray.origin, *ray.direction, GROUND_HEIGHT)
    }

    /// Where the cursor ray meets the visible map, ignoring the plane beyond its edges
    pub fn cursor_map_pos(&self) -> Option<Vec3> {
        let ray = self.cursor_ray()?;
        ray_map_intersection(ray.origin, *ray.direction, GROUND_HEIGHT, GROUND_SIZE)
    }

    fn cursor_ray(&self) -> Option<Ray3d> {
        let window = self.window.single().ok()?;
        let (camera, transform) = self.camera.single().ok()?;
        let cursor_pos = window.cursor_position()?;
        camera.viewport_to_world(transform, cursor_pos).ok()
    }
}

/// Check if the cursor is over egui UI
pub fn is_cursor_over_ui(contexts: &mut EguiContexts) -> bool {
    contexts
        .ctx_mut()
        .map(|ctx| ctx.is_pointer_over_area())
        .unwrap_or(false)
}

/// Check if a text field has keyboard focus
pub fn is_typing(contexts: &mut EguiContexts) -> bool {
    contexts
        .ctx_mut()
        .map(|ctx| ctx.wants_keyboard_input())
        .unwrap_or(false)
}
