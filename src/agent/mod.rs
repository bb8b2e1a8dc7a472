//! The simulated agent and its fence-aware navigation.
//!
//! ## Module Structure
//!
//! - [`geometry`] - Planar point-to-segment distance and fence clearance checks
//! - [`navigation`] - The per-tick resolver and agent state
//! - [`body`] - A kinematic body the resolver drives through `PhysicsBody`
//! - [`systems`] - Agent lifecycle, seek requests, and the per-frame drive
//! - [`rendering`] - Seek target marker
//!
//! Navigation reads [`AnnotationStore`](crate::map::AnnotationStore) fresh every
//! tick and never caches fence geometry, so edits apply on the next frame.

mod body;
pub mod geometry;
mod navigation;
mod rendering;
mod systems;


pub use body::StaticCollider;
pub use navigation::{HeldDirections, MoveDirection, NavigationParams};
pub use systems::{Agent, AgentRequest, SeekRequest};

use bevy::prelude::*;

use crate::AppSet;

pub struct AgentPlugin;

impl Plugin for AgentPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<HeldDirections>()
            .add_message::<AgentRequest>()
            .add_message::<SeekRequest>()
            .add_systems(
                Update,
                systems::handle_agent_requests
                    .run_if(on_message::<AgentRequest>)
                    .in_set(AppSet::ApplyEdits),
            )
            .add_systems(
                Update,
                (
                    systems::handle_seek_requests.run_if(on_message::<SeekRequest>),
                    systems::navigate_agents,
                )
                    .chain()
                    .in_set(AppSet::Navigate),
            )
            .add_systems(Update, body::integrate_bodies.in_set(AppSet::Physics))
            .add_systems(
                Update,
                rendering::render_seek_targets.after(AppSet::Physics),
            );
    }
}
