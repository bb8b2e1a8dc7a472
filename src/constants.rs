//! Centralized constants used across the application.
//!
//! This module contains magic numbers and configuration values that are used
//! in multiple places or would benefit from being named constants.

/// Default window width in pixels
pub const DEFAULT_WINDOW_WIDTH: f32 = 1600.0;

/// Default window height in pixels
pub const DEFAULT_WINDOW_HEIGHT: f32 = 900.0;

/// Side length of the square ground plane, in world units
pub const GROUND_SIZE: f32 = 20.0;

/// Height of the ground plane that clicks are projected onto
pub const GROUND_HEIGHT: f32 = 0.0;

/// Vertical offset for drawing annotation lines so they don't z-fight the ground
pub const ANNOTATION_LIFT: f32 = 0.1;

/// Vertical offset for draft point markers
pub const DRAFT_MARKER_LIFT: f32 = 0.2;

/// Agent movement speed in units per second (per held direction)
pub const DEFAULT_AGENT_SPEED: f32 = 5.0;

/// Minimum horizontal distance between the agent and any fence segment
pub const DEFAULT_CLEARANCE_RADIUS: f32 = 0.5;

/// Smallest arrival threshold for click-to-move targets.
/// The effective threshold grows with the distance covered in one tick.
pub const DEFAULT_ARRIVAL_EPSILON: f32 = 0.1;

/// Where a newly added agent appears (center of its body)
pub const DEFAULT_SPAWN_POSITION: [f32; 3] = [0.0, 0.8, 0.0];

/// Agent body dimensions (width, height, depth)
pub const AGENT_SIZE: [f32; 3] = [0.8, 1.6, 0.8];

/// Downward acceleration applied to the agent body
pub const GRAVITY: f32 = 9.81;

/// How long a notification toast stays on screen, in seconds
pub const NOTIFICATION_DURATION_SECS: f32 = 3.0;

/// Maximum number of toasts shown at once
pub const MAX_NOTIFICATIONS: usize = 5;

/// Orbit camera distance limits
pub const CAMERA_MIN_DISTANCE: f32 = 5.0;
pub const CAMERA_MAX_DISTANCE: f32 = 50.0;

/// Keep the orbit camera above the horizon (radians from straight down)
pub const CAMERA_MAX_POLAR_ANGLE: f32 = std::f32::consts::PI / 2.1;
