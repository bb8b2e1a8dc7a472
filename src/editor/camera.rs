use bevy::input::mouse::{MouseMotion, MouseScrollUnit, MouseWheel};
use bevy::prelude::*;
use bevy_egui::EguiContexts;

use crate::constants::{CAMERA_MAX_DISTANCE, CAMERA_MAX_POLAR_ANGLE, CAMERA_MIN_DISTANCE};

use super::params::is_cursor_over_ui;

/// Radians of rotation per pixel of mouse movement
const ORBIT_SENSITIVITY: f32 = 0.005;

/// Never look exactly straight down; keeps yaw well defined
const MIN_POLAR_ANGLE: f32 = 0.05;

#[derive(Component)]
pub struct EditorCamera;

/// Orbit controls around a focus point on the ground.
///
/// `polar` is measured from straight up (+Y), so 0 looks down and
/// `CAMERA_MAX_POLAR_ANGLE` is just above the horizon.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct OrbitCamera {
    pub focus: Vec3,
    pub distance: f32,
    pub yaw: f32,
    pub polar: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        // Matches a camera placed at (0, 15, 15) looking at the origin
        Self {
            focus: Vec3::ZERO,
            distance: (15.0f32 * 15.0 * 2.0).sqrt(),
            yaw: 0.0,
            polar: std::f32::consts::FRAC_PI_4,
        }
    }
}

impl OrbitCamera {
    pub fn translation(&self) -> Vec3 {
        let offset = Vec3::new(
            self.polar.sin() * self.yaw.sin(),
            self.polar.cos(),
            self.polar.sin() * self.yaw.cos(),
        );
        self.focus + offset * self.distance
    }

    pub fn rotate(&mut self, delta: Vec2) {
        self.yaw -= delta.x * ORBIT_SENSITIVITY;
        self.polar =
            (self.polar - delta.y * ORBIT_SENSITIVITY).clamp(MIN_POLAR_ANGLE, CAMERA_MAX_POLAR_ANGLE);
    }

    pub fn zoom(&mut self, amount: f32) {
        self.distance =
            (self.distance * (1.0 - amount)).clamp(CAMERA_MIN_DISTANCE, CAMERA_MAX_DISTANCE);
    }

    /// Move the focus point across the ground in screen-aligned directions
    pub fn pan(&mut self, delta: Vec2) {
        let right = Vec3::new(self.yaw.cos(), 0.0, -self.yaw.sin());
        let forward = Vec3::new(-self.yaw.sin(), 0.0, -self.yaw.cos());
        let scale = self.distance * 0.0015;
        self.focus += (-right * delta.x + forward * delta.y) * scale;
    }

    pub fn transform(&self) -> Transform {
        Transform::from_translation(self.translation()).looking_at(self.focus, Vec3::Y)
    }
}

pub fn spawn_camera(mut commands: Commands) {
    let orbit = OrbitCamera::default();
    commands.spawn((Camera3d::default(), EditorCamera, orbit.transform(), orbit));
}

pub fn camera_orbit(
    mouse_button: Res<ButtonInput<MouseButton>>,
    mut mouse_motion: MessageReader<MouseMotion>,
    mut camera_query: Query<&mut OrbitCamera, With<EditorCamera>>,
) {
    if !mouse_button.pressed(MouseButton::Right) {
        mouse_motion.clear();
        return;
    }

    let Ok(mut orbit) = camera_query.single_mut() else {
        return;
    };

    for event in mouse_motion.read() {
        orbit.rotate(event.delta);
    }
}

pub fn camera_pan(
    mouse_button: Res<ButtonInput<MouseButton>>,
    mut mouse_motion: MessageReader<MouseMotion>,
    mut camera_query: Query<&mut OrbitCamera, With<EditorCamera>>,
) {
    if !mouse_button.pressed(MouseButton::Middle) {
        mouse_motion.clear();
        return;
    }

    let Ok(mut orbit) = camera_query.single_mut() else {
        return;
    };

    for event in mouse_motion.read() {
        orbit.pan(event.delta);
    }
}

pub fn camera_zoom(
    mut scroll_events: MessageReader<MouseWheel>,
    mut camera_query: Query<&mut OrbitCamera, With<EditorCamera>>,
    mut contexts: EguiContexts,
) {
    // Scrolling the side panel shouldn't zoom the map
    if is_cursor_over_ui(&mut contexts) {
        scroll_events.clear();
        return;
    }

    let Ok(mut orbit) = camera_query.single_mut() else {
        return;
    };

    for event in scroll_events.read() {
        let scroll_amount = match event.unit {
            MouseScrollUnit::Line => event.y * 0.1,
            MouseScrollUnit::Pixel => event.y * 0.001,
        };

        orbit.zoom(scroll_amount);
    }
}

pub fn apply_camera_transform(
    mut camera_query: Query<(&OrbitCamera, &mut Transform), (With<EditorCamera>, Changed<OrbitCamera>)>,
) {
    for (orbit, mut transform) in camera_query.iter_mut() {
        *transform = orbit.transform();
    }
}
