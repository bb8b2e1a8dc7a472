//! Static scene: ground plane, grid, lights, and a few props.

use bevy::prelude::*;

use crate::agent::StaticCollider;
use crate::constants::{GROUND_HEIGHT, GROUND_SIZE};
use crate::theme;

/// Grid lines sit slightly above the ground to avoid z-fighting
const GRID_LIFT: f32 = 0.01;

/// Ground cell size for the grid overlay
const GRID_CELL: f32 = 1.0;

#[derive(Component)]
pub struct Ground;

/// Static boxes the agent collides with, as (center, size) pairs
const PROPS: [([f32; 3], [f32; 3]); 5] = [
    ([-6.0, 0.5, -6.0], [3.0, 1.0, 2.0]),
    ([6.0, 0.5, -6.0], [2.0, 1.0, 3.0]),
    ([-3.0, 0.5, 5.0], [4.0, 1.0, 2.0]),
    ([5.0, 0.5, 6.0], [2.0, 1.0, 2.0]),
    ([0.0, 0.2, -3.0], [8.0, 0.4, 1.0]),
];

pub fn spawn_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    commands.spawn((
        Ground,
        Mesh3d(meshes.add(Plane3d::default().mesh().size(GROUND_SIZE, GROUND_SIZE))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: theme::GROUND_COLOR,
            alpha_mode: AlphaMode::Blend,
            ..default()
        })),
        Transform::from_xyz(0.0, GROUND_HEIGHT, 0.0),
    ));

    for ((center, size), color) in PROPS.iter().zip(theme::PROP_COLORS) {
        commands.spawn((
            Mesh3d(meshes.add(Cuboid::new(size[0], size[1], size[2]))),
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color: color,
                ..default()
            })),
            Transform::from_translation(Vec3::from_array(*center)),
            StaticCollider::from_size(Vec3::from_array(*size)),
        ));
    }

    commands.spawn((
        DirectionalLight {
            illuminance: 8_000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(10.0, 10.0, 5.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    commands.spawn((
        PointLight {
            intensity: 200_000.0,
            color: Color::srgb(0.0, 0.85, 1.0),
            ..default()
        },
        Transform::from_xyz(0.0, 10.0, 0.0),
    ));
}

pub fn draw_grid(mut gizmos: Gizmos) {
    let half = GROUND_SIZE / 2.0;
    let y = GROUND_HEIGHT + GRID_LIFT;
    let lines = (GROUND_SIZE / GRID_CELL).round() as i32;

    for i in 0..=lines {
        let offset = -half + i as f32 * GRID_CELL;
        gizmos.line(
            Vec3::new(offset, y, -half),
            Vec3::new(offset, y, half),
            theme::GRID_COLOR,
        );
        gizmos.line(
            Vec3::new(-half, y, offset),
            Vec3::new(half, y, offset),
            theme::GRID_COLOR,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{AGENT_SIZE, DEFAULT_SPAWN_POSITION};

    #[test]
    fn test_spawn_point_is_clear_of_props() {
        let spawn = Vec3::from_array(DEFAULT_SPAWN_POSITION);
        let agent_half = Vec3::from_array(AGENT_SIZE) / 2.0;

        for (center, size) in PROPS {
            let collider = StaticCollider::from_size(Vec3::from_array(size));
            let gap = (spawn - Vec3::from_array(center)).abs() - agent_half - collider.half_extents;
            assert!(gap.x > 0.0 || gap.z > 0.0, "prop at {:?} overlaps spawn", center);
        }
    }

    #[test]
    fn test_props_sit_on_ground() {
        for (center, size) in PROPS {
            assert!((center[1] - size[1] / 2.0 - GROUND_HEIGHT).abs() < 1e-5);
        }
    }
}
