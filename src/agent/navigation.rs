//! Per-tick agent movement resolution.
//!
//! Each tick the resolver:
//! 1. sums the held directions into a planar intent (no diagonal normalization),
//! 2. adds a full-speed step toward the seek target, or clears it on arrival,
//! 3. integrates the intent over the tick and tests the candidate against fences,
//! 4. returns either the intent or zero as the requested horizontal velocity.
//!
//! The vertical velocity always passes through untouched so gravity stays with
//! the physics body. Nothing here mutates the body or the annotation list;
//! [`drive`] is the only function that writes, and only through [`PhysicsBody`].

use bevy::prelude::*;

use crate::constants::{DEFAULT_AGENT_SPEED, DEFAULT_ARRIVAL_EPSILON, DEFAULT_CLEARANCE_RADIUS};

use super::geometry::fence_blocks;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveDirection {
    /// Toward -Z
    Forward,
    /// Toward +Z
    Back,
    /// Toward -X
    Left,
    /// Toward +X
    Right,
}

impl MoveDirection {
    /// Unit planar contribution as (dx, dz)
    pub fn unit(&self) -> Vec2 {
        match self {
            MoveDirection::Forward => Vec2::new(0.0, -1.0),
            MoveDirection::Back => Vec2::new(0.0, 1.0),
            MoveDirection::Left => Vec2::new(-1.0, 0.0),
            MoveDirection::Right => Vec2::new(1.0, 0.0),
        }
    }

    pub fn all() -> &'static [MoveDirection] {
        &[
            MoveDirection::Forward,
            MoveDirection::Back,
            MoveDirection::Left,
            MoveDirection::Right,
        ]
    }
}

/// The set of movement keys currently held
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeldDirections {
    pub forward: bool,
    pub back: bool,
    pub left: bool,
    pub right: bool,
}

impl HeldDirections {
    pub fn with(mut self, direction: MoveDirection) -> Self {
        self.set(direction, true);
        self
    }

    pub fn set(&mut self, direction: MoveDirection, held: bool) {
        match direction {
            MoveDirection::Forward => self.forward = held,
            MoveDirection::Back => self.back = held,
            MoveDirection::Left => self.left = held,
            MoveDirection::Right => self.right = held,
        }
    }

    pub fn is_held(&self, direction: MoveDirection) -> bool {
        match direction {
            MoveDirection::Forward => self.forward,
            MoveDirection::Back => self.back,
            MoveDirection::Left => self.left,
            MoveDirection::Right => self.right,
        }
    }

    pub fn is_empty(&self) -> bool {
        !(self.forward || self.back || self.left || self.right)
    }

    /// Pure vector sum of held directions scaled by `speed`.
    /// Opposing keys cancel; diagonals are faster than single axes by √2.
    pub fn intent(&self, speed: f32) -> Vec2 {
        MoveDirection::all()
            .iter()
            .filter(|d| self.is_held(**d))
            .map(|d| d.unit() * speed)
            .sum()
    }
}

/// Tuning for the resolver, normally taken from the config file
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavigationParams {
    /// Units per second contributed by each held direction and by seeking
    pub speed: f32,
    /// Minimum horizontal distance to any fence segment
    pub clearance_radius: f32,
    /// Smallest distance at which a seek target counts as reached
    pub arrival_epsilon: f32,
}

impl Default for NavigationParams {
    fn default() -> Self {
        Self {
            speed: DEFAULT_AGENT_SPEED,
            clearance_radius: DEFAULT_CLEARANCE_RADIUS,
            arrival_epsilon: DEFAULT_ARRIVAL_EPSILON,
        }
    }
}

impl NavigationParams {
    /// Arrival distance for a tick of `dt` seconds: at least `arrival_epsilon`,
    /// and never less than one tick of travel so fast agents can't step over the target.
    pub fn arrival_threshold(&self, dt: f32) -> f32 {
        self.arrival_epsilon.max(self.speed * dt)
    }
}

/// Everything the resolver reads about the agent for one tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickInput {
    pub held: HeldDirections,
    /// Seconds since the previous tick
    pub dt: f32,
    pub position: Vec3,
    /// Last observed velocity; only its vertical component is used
    pub velocity: Vec3,
    pub seek_target: Option<Vec3>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavigationOutcome {
    /// Velocity to request from the physics body
    pub velocity: Vec3,
    /// Seek target after this tick (cleared on arrival or when blocked)
    pub seek_target: Option<Vec3>,
    /// The candidate move came too close to a fence
    pub blocked: bool,
    /// The seek target was reached this tick
    pub arrived: bool,
}

pub fn resolve<'a>(
    input: &TickInput,
    fences: impl IntoIterator<Item = &'a [Vec3]>,
    params: &NavigationParams,
) -> NavigationOutcome {
    let dt = if input.dt.is_finite() && input.dt > 0.0 {
        input.dt
    } else {
        0.0
    };
    let vertical = if input.velocity.y.is_finite() {
        input.velocity.y
    } else {
        0.0
    };

    let mut intent = input.held.intent(params.speed);
    let mut seek_target = input.seek_target;
    let mut arrived = false;

    if let Some(target) = seek_target {
        let mut offset = target - input.position;
        offset.y = 0.0;

        let distance = offset.length();
        if distance < params.arrival_threshold(dt) || distance <= f32::EPSILON {
            seek_target = None;
            arrived = true;
        } else {
            let direction = offset.normalize_or_zero();
            intent += Vec2::new(direction.x, direction.z) * params.speed;
        }
    }

    if intent == Vec2::ZERO || !intent.is_finite() {
        // Nothing to move; force horizontal velocity to zero so the body doesn't drift
        return NavigationOutcome {
            velocity: Vec3::new(0.0, vertical, 0.0),
            seek_target,
            blocked: false,
            arrived,
        };
    }

    let candidate = Vec3::new(
        input.position.x + intent.x * dt,
        input.position.y,
        input.position.z + intent.y * dt,
    );

    if fence_blocks(candidate, fences, params.clearance_radius) {
        // A blocked seek is abandoned, not re-routed
        return NavigationOutcome {
            velocity: Vec3::new(0.0, vertical, 0.0),
            seek_target: None,
            blocked: true,
            arrived,
        };
    }

    NavigationOutcome {
        velocity: Vec3::new(intent.x, vertical, intent.y),
        seek_target,
        blocked: false,
        arrived,
    }
}

/// Read/write access to the body the agent rides on
pub trait PhysicsBody {
    fn position(&self) -> Vec3;
    fn velocity(&self) -> Vec3;
    fn request_velocity(&mut self, velocity: Vec3);
}

/// The agent as seen by the resolver.
/// `position` and `velocity` mirror the physics body and are refreshed every tick.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AgentState {
    pub position: Vec3,
    pub velocity: Vec3,
    pub seek_target: Option<Vec3>,
}

impl AgentState {
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            ..default()
        }
    }

    /// Accept a click-to-move target unless it sits inside a fence's clearance.
    /// A refused target leaves the current one in place.
    pub fn request_seek<'a>(
        &mut self,
        target: Vec3,
        fences: impl IntoIterator<Item = &'a [Vec3]>,
        params: &NavigationParams,
    ) -> bool {
        if !target.is_finite() || fence_blocks(target, fences, params.clearance_radius) {
            return false;
        }
        self.seek_target = Some(target);
        true
    }

    pub fn clear_seek(&mut self) {
        self.seek_target = None;
    }
}

/// Run one tick: read the body, resolve, and commit the velocity back to it
pub fn drive<'a, B: PhysicsBody>(
    body: &mut B,
    agent: &mut AgentState,
    held: HeldDirections,
    dt: f32,
    fences: impl IntoIterator<Item = &'a [Vec3]>,
    params: &NavigationParams,
) -> NavigationOutcome {
    agent.position = body.position();
    agent.velocity = body.velocity();

    let input = TickInput {
        held,
        dt,
        position: agent.position,
        velocity: agent.velocity,
        seek_target: agent.seek_target,
    };
    let outcome = resolve(&input, fences, params);

    body.request_velocity(outcome.velocity);
    agent.velocity = outcome.velocity;
    agent.seek_target = outcome.seek_target;
    outcome
}
