//! Gizmo rendering for saved annotations and the in-progress draft.

use bevy::gizmos::config::{GizmoConfigGroup, GizmoConfigStore};
use bevy::math::Isometry3d;
use bevy::prelude::*;

use crate::constants::{ANNOTATION_LIFT, DRAFT_MARKER_LIFT};
use crate::map::AnnotationStore;

use super::state::AnnotationCapture;

/// Length of each visible dash in the draft preview
const DASH_LENGTH: f32 = 0.3;

/// Gap between dashes in the draft preview
const DASH_GAP: f32 = 0.15;

/// Upper bound on dashes drawn for a single draft segment
const MAX_DASHES: usize = 512;

/// Custom gizmo group so annotation lines can be drawn thicker than the grid
#[derive(Default, Reflect, GizmoConfigGroup)]
pub struct AnnotationGizmoGroup;

pub fn configure_annotation_gizmos(mut config_store: ResMut<GizmoConfigStore>) {
    let (config, _) = config_store.config_mut::<AnnotationGizmoGroup>();
    config.line.width = 3.0;
}

/// Split a segment into dashes of `dash` length separated by `gap`.
/// The last dash is shortened so nothing extends past `end`. Very long segments
/// are capped at [`MAX_DASHES`], with dash and gap stretched proportionally.
pub fn dash_segment(start: Vec3, end: Vec3, dash: f32, gap: f32) -> Vec<(Vec3, Vec3)> {
    let length = start.distance(end);
    if length <= f32::EPSILON || dash <= 0.0 || !length.is_finite() {
        return Vec::new();
    }

    let mut dash = dash;
    let mut step = dash + gap.max(0.0);
    let mut count = (length / step).ceil() as usize;
    if count > MAX_DASHES {
        let stretch = length / (MAX_DASHES as f32 * step);
        dash *= stretch;
        step *= stretch;
        count = MAX_DASHES;
    }

    let direction = (end - start) / length;
    (0..count)
        .map(|i| i as f32 * step)
        .take_while(|offset| *offset < length)
        .map(|offset| {
            let dash_end = (offset + dash).min(length);
            (start + direction * offset, start + direction * dash_end)
        })
        .collect()
}

fn lift(point: Vec3, amount: f32) -> Vec3 {
    point + Vec3::Y * amount
}

pub fn render_annotations(
    mut gizmos: Gizmos<AnnotationGizmoGroup>,
    store: Res<AnnotationStore>,
) {
    for annotation in store.iter() {
        if annotation.points.len() < 2 {
            continue;
        }

        gizmos.linestrip(
            annotation.points.iter().map(|p| lift(*p, ANNOTATION_LIFT)),
            annotation.color,
        );
    }
}

pub fn render_draft_preview(
    mut gizmos: Gizmos<AnnotationGizmoGroup>,
    capture: Res<AnnotationCapture>,
) {
    if !capture.is_drawing() {
        return;
    }

    let color = capture.selected_kind().color();
    let draft = capture.draft();

    for window in draft.windows(2) {
        let start = lift(window[0], ANNOTATION_LIFT);
        let end = lift(window[1], ANNOTATION_LIFT);
        for (a, b) in dash_segment(start, end, DASH_LENGTH, DASH_GAP) {
            gizmos.line(a, b, color);
        }
    }

    for point in draft {
        gizmos.sphere(
            Isometry3d::from_translation(lift(*point, DRAFT_MARKER_LIFT)),
            0.1,
            color,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dash_segment_covers_length() {
        let dashes = dash_segment(Vec3::ZERO, Vec3::new(1.0, 0.0, 0.0), 0.3, 0.2);
        // Dashes start at 0.0, 0.5 -> two dashes
        assert_eq!(dashes.len(), 2);
        assert_eq!(dashes[0].0, Vec3::ZERO);
        assert!((dashes[1].1.x - 0.8).abs() < 1e-5);
    }

    #[test]
    fn test_dash_segment_clamps_last_dash() {
        let dashes = dash_segment(Vec3::ZERO, Vec3::new(0.0, 0.0, 1.0), 0.4, 0.2);
        let last = dashes.last().map(|d| d.1);
        assert_eq!(last, Some(Vec3::new(0.0, 0.0, 1.0)));
    }

    #[test]
    fn test_dash_segment_huge_segment_is_capped() {
        let end = Vec3::new(2.0e7, 0.0, 0.0);
        let dashes = dash_segment(Vec3::ZERO, end, 0.3, 0.15);
        assert!(!dashes.is_empty());
        assert!(dashes.len() <= MAX_DASHES);
        assert_eq!(dashes[0].0, Vec3::ZERO);
        // Dashes still advance along the whole segment
        let last_start = dashes.last().map(|d| d.0.x).unwrap_or(0.0);
        assert!(last_start > 1.9e7);
    }

    #[test]
    fn test_dash_segment_count_matches_short_segment() {
        // 0.0, 0.45, 0.9 -> three dashes for a 1.0 segment
        let dashes = dash_segment(Vec3::ZERO, Vec3::X, 0.3, 0.15);
        assert_eq!(dashes.len(), 3);
        assert!((dashes[2].1.x - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_dash_segment_degenerate() {
        assert!(dash_segment(Vec3::ONE, Vec3::ONE, 0.3, 0.1).is_empty());
        assert!(dash_segment(Vec3::ZERO, Vec3::X, 0.0, 0.1).is_empty());
        assert!(dash_segment(Vec3::ZERO, Vec3::splat(f32::NAN), 0.3, 0.1).is_empty());
    }
}
