use bevy::prelude::Color;

use crate::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AnnotationKind {
    /// Blocks agent movement within the clearance radius
    #[default]
    Fence,
    Path,
    Waypoint,
}

impl AnnotationKind {
    pub fn display_name(&self) -> &'static str {
        match self {
            AnnotationKind::Fence => "Fence",
            AnnotationKind::Path => "Path",
            AnnotationKind::Waypoint => "Waypoint",
        }
    }

    /// Lowercase identifier used in default annotation names (`fence_3`)
    pub fn slug(&self) -> &'static str {
        match self {
            AnnotationKind::Fence => "fence",
            AnnotationKind::Path => "path",
            AnnotationKind::Waypoint => "waypoint",
        }
    }

    /// Color an annotation of this kind is created with.
    /// Annotations store their own copy, so changing the palette only affects new ones.
    pub fn color(&self) -> Color {
        match self {
            AnnotationKind::Fence => theme::FENCE_COLOR,
            AnnotationKind::Path => theme::PATH_COLOR,
            AnnotationKind::Waypoint => theme::WAYPOINT_COLOR,
        }
    }

    /// Returns true if annotations of this kind take part in collision checks
    pub fn blocks_movement(&self) -> bool {
        matches!(self, AnnotationKind::Fence)
    }

    pub fn all() -> &'static [AnnotationKind] {
        &[
            AnnotationKind::Fence,
            AnnotationKind::Path,
            AnnotationKind::Waypoint,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_fence() {
        assert_eq!(AnnotationKind::default(), AnnotationKind::Fence);
    }

    #[test]
    fn test_slugs() {
        assert_eq!(AnnotationKind::Fence.slug(), "fence");
        assert_eq!(AnnotationKind::Path.slug(), "path");
        assert_eq!(AnnotationKind::Waypoint.slug(), "waypoint");
    }

    #[test]
    fn test_colors_by_kind() {
        assert_eq!(AnnotationKind::Fence.color(), theme::FENCE_COLOR);
        assert_eq!(AnnotationKind::Path.color(), theme::PATH_COLOR);
        assert_eq!(AnnotationKind::Waypoint.color(), theme::WAYPOINT_COLOR);
    }

    #[test]
    fn test_fence_is_red() {
        let srgba = AnnotationKind::Fence.color().to_srgba();
        assert!(srgba.red > srgba.green);
        assert!(srgba.red > srgba.blue);
    }

    #[test]
    fn test_only_fences_block() {
        assert!(AnnotationKind::Fence.blocks_movement());
        assert!(!AnnotationKind::Path.blocks_movement());
        assert!(!AnnotationKind::Waypoint.blocks_movement());
    }

    #[test]
    fn test_all_lists_every_kind_once() {
        let all = AnnotationKind::all();
        assert_eq!(all.len(), 3);
        assert!(all.contains(&AnnotationKind::Fence));
        assert!(all.contains(&AnnotationKind::Path));
        assert!(all.contains(&AnnotationKind::Waypoint));
    }
}
