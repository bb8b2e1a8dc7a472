//! Raw keyboard and mouse input turned into typed commands.
//!
//! Nothing downstream reads `ButtonInput` directly; capture and navigation
//! only see [`CaptureCommand`], [`SeekRequest`] and [`HeldDirections`].

use bevy::prelude::*;
use bevy_egui::EguiContexts;

use crate::agent::{Agent, HeldDirections, MoveDirection, SeekRequest};
use crate::editor::params::{is_cursor_over_ui, is_typing, CameraParams};
use crate::editor::{AnnotationCapture, CaptureCommand};
use crate::AppSet;

/// Keys bound to each movement direction
const MOVE_BINDINGS: [(MoveDirection, [KeyCode; 2]); 4] = [
    (MoveDirection::Forward, [KeyCode::KeyW, KeyCode::ArrowUp]),
    (MoveDirection::Back, [KeyCode::KeyS, KeyCode::ArrowDown]),
    (MoveDirection::Left, [KeyCode::KeyA, KeyCode::ArrowLeft]),
    (MoveDirection::Right, [KeyCode::KeyD, KeyCode::ArrowRight]),
];

fn held_from_keyboard(keyboard: &ButtonInput<KeyCode>) -> HeldDirections {
    let mut held = HeldDirections::default();
    for (direction, keys) in MOVE_BINDINGS {
        held.set(direction, keyboard.any_pressed(keys));
    }
    held
}

fn update_held_directions(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut held: ResMut<HeldDirections>,
    mut contexts: EguiContexts,
) {
    let next = if is_typing(&mut contexts) {
        HeldDirections::default()
    } else {
        held_from_keyboard(&keyboard)
    };

    // Avoid triggering change detection every frame
    if *held != next {
        *held = next;
    }
}

/// Enter commits the draft, Escape cancels it
fn handle_draft_shortcuts(
    keyboard: Res<ButtonInput<KeyCode>>,
    capture: Res<AnnotationCapture>,
    mut commands: MessageWriter<CaptureCommand>,
    mut contexts: EguiContexts,
) {
    if !capture.is_drawing() || is_typing(&mut contexts) {
        return;
    }

    if keyboard.just_pressed(KeyCode::Enter) || keyboard.just_pressed(KeyCode::NumpadEnter) {
        commands.write(CaptureCommand::Commit);
    } else if keyboard.just_pressed(KeyCode::Escape) {
        commands.write(CaptureCommand::Cancel);
    }
}

/// Commands produced by one left click on the scene
#[derive(Debug, Clone, Copy, PartialEq, Default)]
struct ClickRouting {
    /// Draft point for the capture tool; `Some(None)` forwards a miss
    add_point: Option<Option<Vec3>>,
    seek: Option<Vec3>,
}

/// Route a click: draft points come from the visible map only, while seek
/// targets use the unbounded ground plane. Both fire when drawing with an agent.
fn route_click(
    is_drawing: bool,
    agent_present: bool,
    map_hit: Option<Vec3>,
    ground_hit: Option<Vec3>,
) -> ClickRouting {
    ClickRouting {
        add_point: is_drawing.then_some(map_hit),
        seek: ground_hit.filter(|_| agent_present),
    }
}

/// Left click adds a draft point while drawing and sends the agent there
fn handle_ground_click(
    mouse: Res<ButtonInput<MouseButton>>,
    camera: CameraParams,
    capture: Res<AnnotationCapture>,
    agents: Query<(), With<Agent>>,
    mut capture_commands: MessageWriter<CaptureCommand>,
    mut seek_requests: MessageWriter<SeekRequest>,
    mut contexts: EguiContexts,
) {
    if !mouse.just_pressed(MouseButton::Left) || is_cursor_over_ui(&mut contexts) {
        return;
    }

    let routing = route_click(
        capture.is_drawing(),
        !agents.is_empty(),
        camera.cursor_map_pos(),
        camera.cursor_ground_pos(),
    );

    if let Some(point) = routing.add_point {
        // Misses are passed through; capture ignores them
        capture_commands.write(CaptureCommand::AddPoint(point));
    }
    if let Some(target) = routing.seek {
        seek_requests.write(SeekRequest(target));
    }
}

pub struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (
                update_held_directions,
                handle_draft_shortcuts,
                handle_ground_click,
            )
                .in_set(AppSet::Input),
        );
    }
}
