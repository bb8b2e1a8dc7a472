//! Planar distance queries against fence polylines.
//!
//! All distances are measured in the XZ plane; the vertical offset between the
//! agent and a fence never counts.

use bevy::prelude::*;

/// Drop the vertical component
pub fn planar(point: Vec3) -> Vec2 {
    Vec2::new(point.x, point.z)
}

/// Distance from `point` to the segment `a`-`b`, clamped to the endpoints
pub fn point_segment_distance(point: Vec2, a: Vec2, b: Vec2) -> f32 {
    let segment = b - a;
    let length_sq = segment.length_squared();

    if length_sq <= f32::EPSILON {
        // Segment is essentially a point
        return point.distance(a);
    }

    // Project point onto line, clamped to segment
    let t = ((point - a).dot(segment) / length_sq).clamp(0.0, 1.0);
    let projection = a + segment * t;

    point.distance(projection)
}

/// Horizontal distance from `point` to the segment `a`-`b`
pub fn planar_segment_distance(point: Vec3, a: Vec3, b: Vec3) -> f32 {
    point_segment_distance(planar(point), planar(a), planar(b))
}

/// Check if `point` comes closer than `radius` to any segment of the polyline.
/// Polylines with fewer than two points have no segments and never match.
pub fn polyline_within(point: Vec3, polyline: &[Vec3], radius: f32) -> bool {
    polyline
        .windows(2)
        .any(|w| planar_segment_distance(point, w[0], w[1]) < radius)
}

/// Check if `candidate` violates the clearance radius of any fence
pub fn fence_blocks<'a>(
    candidate: Vec3,
    fences: impl IntoIterator<Item = &'a [Vec3]>,
    clearance_radius: f32,
) -> bool {
    fences
        .into_iter()
        .any(|fence| polyline_within(candidate, fence, clearance_radius))
}
