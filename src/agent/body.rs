//! Minimal kinematic body standing in for a rigid-body physics engine.
//!
//! The body integrates its own velocity, applies gravity, rests on the
//! ground plane, and is pushed out of [`StaticCollider`] boxes. Navigation
//! only ever touches it through [`PhysicsBody`].

use bevy::prelude::*;

use crate::constants::{GRAVITY, GROUND_HEIGHT};

use super::navigation::PhysicsBody;

#[derive(Component, Debug, Clone, PartialEq)]
pub struct KinematicBody {
    pub velocity: Vec3,
    /// Half the body's box size; `y` is the distance from center to bottom face
    pub half_extents: Vec3,
}

impl KinematicBody {
    pub fn new(half_extents: Vec3) -> Self {
        Self {
            velocity: Vec3::ZERO,
            half_extents,
        }
    }
}

/// Axis-aligned box that kinematic bodies cannot enter
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct StaticCollider {
    pub half_extents: Vec3,
}

impl StaticCollider {
    pub fn from_size(size: Vec3) -> Self {
        Self {
            half_extents: size / 2.0,
        }
    }
}

/// A body paired with the transform that carries its position
pub struct BodyView<'a> {
    pub transform: &'a mut Transform,
    pub body: &'a mut KinematicBody,
}

impl PhysicsBody for BodyView<'_> {
    fn position(&self) -> Vec3 {
        self.transform.translation
    }

    fn velocity(&self) -> Vec3 {
        self.body.velocity
    }

    fn request_velocity(&mut self, velocity: Vec3) {
        self.body.velocity = velocity;
    }
}

/// Advance a body by `dt` seconds. Returns true while it rests on the ground.
pub fn integrate(transform: &mut Transform, body: &mut KinematicBody, dt: f32) -> bool {
    if !dt.is_finite() || dt <= 0.0 {
        return false;
    }

    body.velocity.y -= GRAVITY * dt;
    if !body.velocity.is_finite() {
        body.velocity = Vec3::ZERO;
    }
    transform.translation += body.velocity * dt;

    let rest_height = GROUND_HEIGHT + body.half_extents.y;
    if transform.translation.y <= rest_height {
        transform.translation.y = rest_height;
        body.velocity.y = body.velocity.y.max(0.0);
        return true;
    }
    false
}

/// Horizontal offset that moves a box at `position` out of the collider box.
///
/// Only X and Z are resolved, along whichever axis needs the shorter push.
/// Returns `None` when the boxes don't overlap, including when one is fully
/// above the other.
pub fn push_out(
    position: Vec3,
    half_extents: Vec3,
    collider_center: Vec3,
    collider_half_extents: Vec3,
) -> Option<Vec3> {
    let offset = position - collider_center;
    let overlap = half_extents + collider_half_extents - offset.abs();
    if overlap.x <= 0.0 || overlap.y <= 0.0 || overlap.z <= 0.0 {
        return None;
    }

    let side = |delta: f32| if delta < 0.0 { -1.0 } else { 1.0 };
    if overlap.x <= overlap.z {
        Some(Vec3::new(overlap.x * side(offset.x), 0.0, 0.0))
    } else {
        Some(Vec3::new(0.0, 0.0, overlap.z * side(offset.z)))
    }
}

/// Push a body out of every collider it overlaps.
/// Velocity heading into a collider is dropped along the push axis.
pub fn resolve_static_collisions(
    transform: &mut Transform,
    body: &mut KinematicBody,
    colliders: &[(Vec3, Vec3)],
) {
    for &(center, half_extents) in colliders {
        let Some(push) = push_out(transform.translation, body.half_extents, center, half_extents)
        else {
            continue;
        };
        transform.translation += push;
        if push.x * body.velocity.x < 0.0 {
            body.velocity.x = 0.0;
        }
        if push.z * body.velocity.z < 0.0 {
            body.velocity.z = 0.0;
        }
    }
}

pub fn integrate_bodies(
    time: Res<Time>,
    mut bodies: Query<(&mut Transform, &mut KinematicBody)>,
    colliders: Query<(&Transform, &StaticCollider), Without<KinematicBody>>,
) {
    let dt = time.delta_secs();
    let colliders: Vec<(Vec3, Vec3)> = colliders
        .iter()
        .map(|(transform, collider)| (transform.translation, collider.half_extents))
        .collect();

    for (mut transform, mut body) in bodies.iter_mut() {
        integrate(&mut transform, &mut body, dt);
        resolve_static_collisions(&mut transform, &mut body, &colliders);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HALF: Vec3 = Vec3::new(0.4, 0.8, 0.4);

    /// 2x1x2 box centered at (5, 0.5, 0)
    const BOX: (Vec3, Vec3) = (Vec3::new(5.0, 0.5, 0.0), Vec3::new(1.0, 0.5, 1.0));

    #[test]
    fn test_resting_body_stays_on_ground() {
        let mut transform = Transform::from_xyz(0.0, 0.8, 0.0);
        let mut body = KinematicBody::new(HALF);

        for _ in 0..60 {
            assert!(integrate(&mut transform, &mut body, 1.0 / 60.0));
        }
        assert_eq!(transform.translation.y, 0.8);
        assert_eq!(body.velocity.y, 0.0);
    }

    #[test]
    fn test_falling_body_lands() {
        let mut transform = Transform::from_xyz(0.0, 5.0, 0.0);
        let mut body = KinematicBody::new(HALF);

        assert!(!integrate(&mut transform, &mut body, 0.1));
        assert!(body.velocity.y < 0.0);

        let mut landed = false;
        for _ in 0..100 {
            landed = integrate(&mut transform, &mut body, 0.1);
            if landed {
                break;
            }
        }
        assert!(landed);
        assert_eq!(transform.translation.y, 0.8);
    }

    #[test]
    fn test_horizontal_velocity_moves_body() {
        let mut transform = Transform::from_xyz(0.0, 0.8, 0.0);
        let mut body = KinematicBody::new(HALF);
        body.velocity = Vec3::new(5.0, 0.0, -5.0);

        integrate(&mut transform, &mut body, 0.5);
        assert!((transform.translation.x - 2.5).abs() < 1e-5);
        assert!((transform.translation.z + 2.5).abs() < 1e-5);
    }

    #[test]
    fn test_zero_dt_is_noop() {
        let mut transform = Transform::from_xyz(1.0, 2.0, 3.0);
        let mut body = KinematicBody::new(HALF);
        body.velocity = Vec3::X;

        integrate(&mut transform, &mut body, 0.0);
        integrate(&mut transform, &mut body, f32::NAN);
        assert_eq!(transform.translation, Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_body_view_reads_and_writes() {
        let mut transform = Transform::from_xyz(1.0, 0.8, 2.0);
        let mut body = KinematicBody::new(HALF);
        let mut view = BodyView {
            transform: &mut transform,
            body: &mut body,
        };

        assert_eq!(view.position(), Vec3::new(1.0, 0.8, 2.0));
        view.request_velocity(Vec3::new(3.0, -1.0, 0.0));
        assert_eq!(view.velocity(), Vec3::new(3.0, -1.0, 0.0));
    }

    #[test]
    fn test_push_out_none_when_apart() {
        assert_eq!(push_out(Vec3::new(0.0, 0.8, 0.0), HALF, BOX.0, BOX.1), None);
    }

    #[test]
    fn test_push_out_none_when_above() {
        assert_eq!(push_out(Vec3::new(5.0, 3.0, 0.0), HALF, BOX.0, BOX.1), None);
    }

    #[test]
    fn test_push_out_along_shallowest_axis() {
        // Entered from the -X side, 0.2 deep
        let push = push_out(Vec3::new(3.8, 0.8, 0.1), HALF, BOX.0, BOX.1);
        let push = push.expect("boxes overlap");
        assert!((push.x + 0.2).abs() < 1e-5);
        assert_eq!(push.z, 0.0);
        assert_eq!(push.y, 0.0);

        // Entered from the +Z side
        let push = push_out(Vec3::new(5.2, 0.8, 1.3), HALF, BOX.0, BOX.1);
        let push = push.expect("boxes overlap");
        assert_eq!(push.x, 0.0);
        assert!((push.z - 0.1).abs() < 1e-5);
    }

    #[test]
    fn test_body_walking_into_prop_stops_at_its_face() {
        let mut transform = Transform::from_xyz(2.0, 0.8, 0.0);
        let mut body = KinematicBody::new(HALF);
        let colliders = [BOX];

        for _ in 0..120 {
            body.velocity.x = 5.0;
            integrate(&mut transform, &mut body, 1.0 / 60.0);
            resolve_static_collisions(&mut transform, &mut body, &colliders);
        }

        // Box face at x = 4, body half width 0.4
        assert!((transform.translation.x - 3.6).abs() < 1e-4);
        assert_eq!(body.velocity.x, 0.0);
        assert_eq!(transform.translation.y, 0.8);
    }

    #[test]
    fn test_sliding_along_prop_keeps_tangent_velocity() {
        let mut transform = Transform::from_xyz(3.7, 0.8, 0.0);
        let mut body = KinematicBody::new(HALF);
        body.velocity = Vec3::new(1.0, 0.0, 2.0);

        resolve_static_collisions(&mut transform, &mut body, &[BOX]);

        assert!((transform.translation.x - 3.6).abs() < 1e-5);
        assert_eq!(body.velocity.x, 0.0);
        assert_eq!(body.velocity.z, 2.0);
    }

    #[test]
    fn test_moving_away_keeps_velocity() {
        let mut transform = Transform::from_xyz(3.7, 0.8, 0.0);
        let mut body = KinematicBody::new(HALF);
        body.velocity = Vec3::new(-3.0, 0.0, 0.0);

        resolve_static_collisions(&mut transform, &mut body, &[BOX]);
        assert_eq!(body.velocity.x, -3.0);
    }
}
