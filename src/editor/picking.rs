//! Projecting the cursor onto the ground plane.

use bevy::math::Vec3;

/// Where a ray meets the horizontal plane `y = ground_y`.
///
/// Returns `None` when the ray is parallel to the plane, points away from it,
/// or contains non-finite values.
pub fn ray_ground_intersection(
    origin: Vec3,
    direction: Vec3,
    ground_y: f32,
) -> Option<Vec3> {
    if direction.y.abs() <= f32::EPSILON {
        return None;
    }

    let t = (ground_y - origin.y) / direction.y;
    if !t.is_finite() || t < 0.0 {
        return None;
    }

    let point = origin + direction * t;
    point.is_finite().then_some(point)
}

/// Whether `point` lies on the square ground plane of side `size` centered at the origin
pub fn within_ground(point: Vec3, size: f32) -> bool {
    let half = size / 2.0;
    point.x.abs() <= half && point.z.abs() <= half
}

/// Like [`ray_ground_intersection`], but only hits on the visible map count
pub fn ray_map_intersection(
    origin: Vec3,
    direction: Vec3,
    ground_y: f32,
    size: f32,
) -> Option<Vec3> {
    ray_ground_intersection(origin, direction, ground_y).filter(|p| within_ground(*p, size))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_straight_down_hits_below_origin() {
        let hit = ray_ground_intersection(Vec3::new(2.0, 10.0, -3.0), Vec3::NEG_Y, 0.0);
        assert_eq!(hit, Some(Vec3::new(2.0, 0.0, -3.0)));
    }

    #[test]
    fn test_angled_ray() {
        let direction = Vec3::new(1.0, -1.0, 0.0).normalize();
        let hit = ray_ground_intersection(Vec3::new(0.0, 5.0, 0.0), direction, 0.0);
        let Some(hit) = hit else {
            panic!("expected a hit");
        };
        assert!((hit.x - 5.0).abs() < 1e-4);
        assert!(hit.y.abs() < 1e-4);
    }

    #[test]
    fn test_ray_pointing_up_misses() {
        assert!(ray_ground_intersection(Vec3::new(0.0, 5.0, 0.0), Vec3::Y, 0.0).is_none());
    }

    #[test]
    fn test_parallel_ray_misses() {
        assert!(ray_ground_intersection(Vec3::new(0.0, 5.0, 0.0), Vec3::X, 0.0).is_none());
    }

    #[test]
    fn test_raised_ground() {
        let hit = ray_ground_intersection(Vec3::new(0.0, 5.0, 0.0), Vec3::NEG_Y, 1.5);
        assert_eq!(hit, Some(Vec3::new(0.0, 1.5, 0.0)));
    }

    #[test]
    fn test_off_map_ray_misses_map() {
        let origin = Vec3::new(50.0, 10.0, 50.0);
        assert!(ray_ground_intersection(origin, Vec3::NEG_Y, 0.0).is_some());
        assert!(ray_map_intersection(origin, Vec3::NEG_Y, 0.0, 20.0).is_none());
    }

    #[test]
    fn test_near_horizon_ray_misses_map() {
        let direction = Vec3::new(0.0, -1.0e-6, -1.0).normalize();
        let hit = ray_map_intersection(Vec3::new(0.0, 15.0, 15.0), direction, 0.0, 20.0);
        assert!(hit.is_none());
    }

    #[test]
    fn test_on_map_ray_hits_map() {
        let hit = ray_map_intersection(Vec3::new(9.5, 10.0, -10.0), Vec3::NEG_Y, 0.0, 20.0);
        assert_eq!(hit, Some(Vec3::new(9.5, 0.0, -10.0)));
    }
}
