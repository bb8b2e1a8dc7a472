use std::f32::consts::FRAC_PI_2;

use bevy::math::Isometry3d;
use bevy::prelude::*;

use crate::constants::{ANNOTATION_LIFT, GROUND_HEIGHT};
use crate::theme;

use super::systems::Agent;

/// Draw a ring on the ground under each agent's seek target
pub fn render_seek_targets(mut gizmos: Gizmos, agents: Query<&Agent>) {
    for agent in agents.iter() {
        let Some(target) = agent.state.seek_target else {
            continue;
        };

        let center = Vec3::new(target.x, GROUND_HEIGHT + ANNOTATION_LIFT, target.z);
        // Circles are drawn in the XY plane; tip them flat onto the ground
        let isometry = Isometry3d::new(center, Quat::from_rotation_x(FRAC_PI_2));
        gizmos.circle(isometry, 0.5, theme::SEEK_TARGET);
        gizmos.circle(isometry, 0.3, theme::SEEK_TARGET);
    }
}
