//! Unit tests for the drawing-session state machine.

use bevy::prelude::*;

use super::state::{AnnotationCapture, CaptureCommand, CaptureState};
use crate::map::{AnnotationId, AnnotationKind};

/// Id source that counts up from 1, like the annotation store
fn ids() -> impl FnMut() -> AnnotationId {
    let mut next = 0;
    move || {
        next += 1;
        AnnotationId(next)
    }
}

fn p(x: f32, z: f32) -> Vec3 {
    Vec3::new(x, 0.0, z)
}

#[test]
fn test_starts_idle() {
    let capture = AnnotationCapture::default();
    assert_eq!(*capture.state(), CaptureState::Idle);
    assert!(!capture.is_drawing());
    assert!(capture.draft().is_empty());
}

#[test]
fn test_start_drawing_opens_empty_session() {
    let mut capture = AnnotationCapture::default();
    capture.start_drawing(AnnotationKind::Path);

    assert_eq!(
        *capture.state(),
        CaptureState::Drawing {
            kind: AnnotationKind::Path,
            draft: vec![],
        }
    );
}

#[test]
fn test_add_point_ignored_when_idle() {
    let mut capture = AnnotationCapture::default();
    assert!(!capture.add_point(Some(p(1.0, 1.0))));
    assert_eq!(*capture.state(), CaptureState::Idle);
}

#[test]
fn test_add_point_ignores_missed_intersection() {
    let mut capture = AnnotationCapture::default();
    capture.start_drawing(AnnotationKind::Fence);

    assert!(!capture.add_point(None));
    assert!(capture.draft().is_empty());
}

#[test]
fn test_add_point_accepts_non_finite_coordinates() {
    let mut capture = AnnotationCapture::default();
    capture.start_drawing(AnnotationKind::Fence);

    assert!(capture.add_point(Some(Vec3::new(f32::NAN, 0.0, 1e30))));
    assert_eq!(capture.draft().len(), 1);
}

#[test]
fn test_commit_emits_points_in_insertion_order() {
    let mut capture = AnnotationCapture::default();
    let mut next_id = ids();
    capture.start_drawing(AnnotationKind::Fence);

    // Duplicates and backtracking must survive untouched
    let points = vec![p(0.0, 0.0), p(2.0, 0.0), p(2.0, 0.0), p(1.0, 3.0), p(0.0, 0.0)];
    for point in &points {
        capture.add_point(Some(*point));
    }

    let annotation = capture.commit(&mut next_id);
    assert_eq!(annotation.map(|a| a.points), Some(points));
}

#[test]
fn test_commit_builds_annotation_from_kind() {
    let mut capture = AnnotationCapture::default();
    capture.start_drawing(AnnotationKind::Waypoint);
    capture.add_point(Some(p(1.0, 2.0)));

    let annotation = capture.commit(|| AnnotationId(9));
    let Some(annotation) = annotation else {
        panic!("expected an annotation");
    };
    assert_eq!(annotation.id, AnnotationId(9));
    assert_eq!(annotation.kind, AnnotationKind::Waypoint);
    assert_eq!(annotation.name, "waypoint_9");
    assert_eq!(annotation.color, AnnotationKind::Waypoint.color());
}

#[test]
fn test_commit_keeps_session_open_with_empty_draft() {
    let mut capture = AnnotationCapture::default();
    capture.start_drawing(AnnotationKind::Path);
    capture.add_point(Some(p(0.0, 0.0)));
    capture.add_point(Some(p(1.0, 0.0)));

    assert!(capture.commit(ids()).is_some());
    assert_eq!(
        *capture.state(),
        CaptureState::Drawing {
            kind: AnnotationKind::Path,
            draft: vec![],
        }
    );
}

#[test]
fn test_commit_on_empty_draft_emits_nothing() {
    let mut capture = AnnotationCapture::default();
    capture.start_drawing(AnnotationKind::Fence);

    let mut allocated = false;
    assert!(capture
        .commit(|| {
            allocated = true;
            AnnotationId(1)
        })
        .is_none());
    assert!(!allocated, "no id should be consumed by an empty commit");
}

#[test]
fn test_commit_when_idle_emits_nothing() {
    let mut capture = AnnotationCapture::default();
    assert!(capture.commit(ids()).is_none());
}

#[test]
fn test_cancel_then_commit_emits_nothing() {
    let mut capture = AnnotationCapture::default();
    capture.start_drawing(AnnotationKind::Fence);
    capture.add_point(Some(p(0.0, 0.0)));
    capture.add_point(Some(p(5.0, 0.0)));

    assert_eq!(capture.cancel(), 2);
    assert!(capture.is_drawing());
    assert!(capture.commit(ids()).is_none());
}

#[test]
fn test_mode_switch_preserves_draft() {
    let mut capture = AnnotationCapture::default();
    capture.start_drawing(AnnotationKind::Fence);
    capture.add_point(Some(p(0.0, 0.0)));
    capture.add_point(Some(p(1.0, 1.0)));

    capture.start_drawing(AnnotationKind::Path);
    assert_eq!(capture.draft().len(), 2);

    capture.set_kind(AnnotationKind::Waypoint);
    assert_eq!(capture.draft().len(), 2);

    let annotation = capture.commit(ids());
    assert_eq!(annotation.map(|a| a.kind), Some(AnnotationKind::Waypoint));
}

#[test]
fn test_set_kind_while_idle_only_selects() {
    let mut capture = AnnotationCapture::default();
    capture.set_kind(AnnotationKind::Path);

    assert!(!capture.is_drawing());
    assert_eq!(capture.selected_kind(), AnnotationKind::Path);
}

#[test]
fn test_stop_drawing_discards_draft() {
    let mut capture = AnnotationCapture::default();
    capture.start_drawing(AnnotationKind::Fence);
    capture.add_point(Some(p(0.0, 0.0)));

    assert_eq!(capture.stop_drawing(), 1);
    assert_eq!(*capture.state(), CaptureState::Idle);

    // Restarting begins from scratch
    capture.start_drawing(AnnotationKind::Fence);
    assert!(capture.draft().is_empty());
}

#[test]
fn test_stop_drawing_when_idle_is_noop() {
    let mut capture = AnnotationCapture::default();
    assert_eq!(capture.stop_drawing(), 0);
    assert_eq!(*capture.state(), CaptureState::Idle);
}

#[test]
fn test_apply_dispatches_commands() {
    let mut capture = AnnotationCapture::default();
    let mut next_id = ids();

    let commands = [
        CaptureCommand::StartDrawing(AnnotationKind::Fence),
        CaptureCommand::AddPoint(Some(p(0.0, 0.0))),
        CaptureCommand::AddPoint(None),
        CaptureCommand::AddPoint(Some(p(4.0, 0.0))),
    ];
    for command in &commands {
        assert!(capture.apply(command, &mut next_id).is_none());
    }

    let finalized = capture.apply(&CaptureCommand::Commit, &mut next_id);
    assert_eq!(finalized.map(|a| a.points.len()), Some(2));

    capture.apply(&CaptureCommand::StopDrawing, &mut next_id);
    assert!(!capture.is_drawing());
}

#[test]
fn test_successive_commits_get_distinct_ids() {
    let mut capture = AnnotationCapture::default();
    let mut next_id = ids();
    capture.start_drawing(AnnotationKind::Path);

    capture.add_point(Some(p(0.0, 0.0)));
    let first = capture.commit(&mut next_id).map(|a| a.id);
    capture.add_point(Some(p(1.0, 0.0)));
    let second = capture.commit(&mut next_id).map(|a| a.id);

    assert_eq!(first, Some(AnnotationId(1)));
    assert_eq!(second, Some(AnnotationId(2)));
}
