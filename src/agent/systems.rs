//! ECS glue around the navigation resolver: agent lifecycle, seek requests,
//! and the per-tick drive.

use bevy::prelude::*;

use crate::config::AppConfig;
use crate::constants::AGENT_SIZE;
use crate::map::AnnotationStore;
use crate::notifications::Notifications;
use crate::theme;

use super::body::{BodyView, KinematicBody};
use super::navigation::{drive, AgentState, HeldDirections};

/// The simulated agent walking the map
#[derive(Component, Debug, Default)]
pub struct Agent {
    pub state: AgentState,
    /// Whether the previous tick was blocked, so contact is only reported once
    pub blocked: bool,
}

/// Agent lifecycle commands from the UI
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgentRequest {
    Add,
    Remove,
    ResetPosition,
    ClearTarget,
}

/// A click-to-move target on the ground
#[derive(Message, Debug, Clone, Copy, PartialEq)]
pub struct SeekRequest(pub Vec3);

fn spawn_agent(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    position: Vec3,
) {
    let [width, height, depth] = AGENT_SIZE;
    let head_mesh = meshes.add(Sphere::new(0.3));
    let head_material = materials.add(StandardMaterial {
        base_color: theme::AGENT_HEAD,
        ..default()
    });

    commands
        .spawn((
            Agent {
                state: AgentState::new(position),
                blocked: false,
            },
            KinematicBody::new(Vec3::new(width, height, depth) / 2.0),
            Mesh3d(meshes.add(Cuboid::new(width, height, depth))),
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color: theme::AGENT_BODY,
                ..default()
            })),
            Transform::from_translation(position),
        ))
        .with_children(|parent| {
            parent.spawn((
                Mesh3d(head_mesh),
                MeshMaterial3d(head_material),
                Transform::from_xyz(0.0, height / 2.0 + 0.2, 0.0),
            ));
        });
}

/// What a reset request acts on, given the batch-tracked presence and the
/// agents visible to the query (deferred spawns and despawns are not)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum ResetTarget {
    Nothing,
    /// Added earlier in the same batch; the spawn command hasn't applied yet
    PendingSpawn,
    Existing,
}

pub(super) fn reset_target(present: bool, query_empty: bool) -> ResetTarget {
    match (present, query_empty) {
        (false, _) => ResetTarget::Nothing,
        (true, true) => ResetTarget::PendingSpawn,
        (true, false) => ResetTarget::Existing,
    }
}

#[allow(clippy::too_many_arguments)]
pub fn handle_agent_requests(
    mut commands: Commands,
    mut events: MessageReader<AgentRequest>,
    mut agents: Query<(Entity, &mut Agent, &mut Transform, &mut KinematicBody)>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    config: Res<AppConfig>,
    mut notifications: ResMut<Notifications>,
) {
    let spawn_position = config.data.navigation.spawn_position();

    // Commands are deferred, so track spawns/despawns made within this batch
    let mut present = !agents.is_empty();

    for request in events.read() {
        match request {
            AgentRequest::Add => {
                if present {
                    debug!("Agent already on the map, ignoring add");
                    continue;
                }
                spawn_agent(&mut commands, &mut meshes, &mut materials, spawn_position);
                present = true;
                notifications.success("Agent added to the map");
            }
            AgentRequest::Remove => {
                if !present {
                    continue;
                }
                for (entity, ..) in agents.iter() {
                    commands.entity(entity).despawn();
                }
                present = false;
                notifications.success("Agent removed from the map");
            }
            AgentRequest::ResetPosition => match reset_target(present, agents.is_empty()) {
                ResetTarget::Nothing => debug!("No agent on the map, ignoring reset"),
                ResetTarget::PendingSpawn => {
                    debug!("Agent added in this batch is already at spawn, skipping reset");
                }
                ResetTarget::Existing => {
                    for (_, mut agent, mut transform, mut body) in agents.iter_mut() {
                        transform.translation = spawn_position;
                        body.velocity = Vec3::ZERO;
                        agent.state = AgentState::new(spawn_position);
                        agent.blocked = false;
                    }
                    notifications.success("Agent position reset");
                }
            },
            AgentRequest::ClearTarget => {
                for (_, mut agent, ..) in agents.iter_mut() {
                    agent.state.clear_seek();
                }
            }
        }
    }
}

pub fn handle_seek_requests(
    mut events: MessageReader<SeekRequest>,
    mut agents: Query<&mut Agent>,
    store: Res<AnnotationStore>,
    config: Res<AppConfig>,
    mut notifications: ResMut<Notifications>,
) {
    let params = config.data.navigation.params();

    for SeekRequest(target) in events.read() {
        for mut agent in agents.iter_mut() {
            let fences = store.fences().map(|f| f.points.as_slice());
            if agent.state.request_seek(*target, fences, &params) {
                debug!("Seeking {:?}", target);
            } else {
                notifications.warning("Target is too close to a fence");
            }
        }
    }
}

pub fn navigate_agents(
    time: Res<Time>,
    held: Res<HeldDirections>,
    store: Res<AnnotationStore>,
    config: Res<AppConfig>,
    mut agents: Query<(&mut Agent, &mut Transform, &mut KinematicBody)>,
    mut notifications: ResMut<Notifications>,
) {
    let params = config.data.navigation.params();
    let dt = time.delta_secs();

    for (mut agent, mut transform, mut body) in agents.iter_mut() {
        let mut view = BodyView {
            transform: &mut transform,
            body: &mut body,
        };
        let fences = store.fences().map(|f| f.points.as_slice());
        let outcome = drive(&mut view, &mut agent.state, *held, dt, fences, &params);

        if outcome.blocked && !agent.blocked {
            notifications.warning("Movement blocked by fence");
        }
        if outcome.arrived {
            debug!("Agent reached its target");
        }
        agent.blocked = outcome.blocked;
    }
}
