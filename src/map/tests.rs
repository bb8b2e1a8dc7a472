//! Unit tests for the annotation store and list edits.

use bevy::prelude::*;

use super::*;
use crate::notifications::{NotificationLevel, Notifications};

fn fence(store: &mut AnnotationStore, points: Vec<Vec3>) -> AnnotationId {
    let id = store.allocate_id();
    store.push(Annotation::new(id, AnnotationKind::Fence, points));
    id
}

#[test]
fn test_ids_are_monotonic() {
    let mut store = AnnotationStore::default();
    let a = store.allocate_id();
    let b = store.allocate_id();
    let c = store.allocate_id();
    assert!(a < b && b < c);
    assert_eq!(a, AnnotationId(1));
}

#[test]
fn test_ids_not_reused_after_clear() {
    let mut store = AnnotationStore::default();
    let first = fence(&mut store, vec![]);
    store.clear();
    let second = store.allocate_id();
    assert!(second > first);
}

#[test]
fn test_push_preserves_insertion_order() {
    let mut store = AnnotationStore::default();
    let a = fence(&mut store, vec![]);
    let id = store.allocate_id();
    store.push(Annotation::new(id, AnnotationKind::Path, vec![]));
    let c = fence(&mut store, vec![]);

    let ids: Vec<_> = store.iter().map(|a| a.id).collect();
    assert_eq!(ids, vec![a, id, c]);
}

#[test]
fn test_remove_by_id() {
    let mut store = AnnotationStore::default();
    let a = fence(&mut store, vec![]);
    let b = fence(&mut store, vec![]);

    let removed = store.remove(a);
    assert_eq!(removed.map(|r| r.id), Some(a));
    assert_eq!(store.len(), 1);
    assert!(store.get(b).is_some());
    assert!(store.remove(a).is_none());
}

#[test]
fn test_rename_trims_whitespace() {
    let mut store = AnnotationStore::default();
    let id = fence(&mut store, vec![]);

    assert_eq!(store.rename(id, "  north wall  "), Ok(()));
    assert_eq!(store.get(id).map(|a| a.name.as_str()), Some("north wall"));
}

#[test]
fn test_rename_rejects_empty_name() {
    let mut store = AnnotationStore::default();
    let id = fence(&mut store, vec![]);

    assert_eq!(store.rename(id, "   "), Err(RenameError::EmptyName));
    assert_eq!(store.get(id).map(|a| a.name.as_str()), Some("fence_1"));
}

#[test]
fn test_rename_unknown_id() {
    let mut store = AnnotationStore::default();
    assert_eq!(
        store.rename(AnnotationId(42), "gate"),
        Err(RenameError::NotFound(AnnotationId(42)))
    );
}

#[test]
fn test_rename_keeps_points_and_color() {
    let mut store = AnnotationStore::default();
    let points = vec![Vec3::ZERO, Vec3::X];
    let id = fence(&mut store, points.clone());
    store.rename(id, "renamed").ok();

    let annotation = store.get(id).cloned();
    assert_eq!(annotation.as_ref().map(|a| a.points.clone()), Some(points));
    assert_eq!(annotation.map(|a| a.color), Some(AnnotationKind::Fence.color()));
}

#[test]
fn test_fences_filter() {
    let mut store = AnnotationStore::default();
    fence(&mut store, vec![]);
    let id = store.allocate_id();
    store.push(Annotation::new(id, AnnotationKind::Waypoint, vec![]));
    fence(&mut store, vec![]);

    assert_eq!(store.fences().count(), 2);
    assert!(store.fences().all(|a| a.kind == AnnotationKind::Fence));
    assert_eq!(store.count_of(AnnotationKind::Waypoint), 1);
}

#[test]
fn test_apply_delete_request() {
    let mut store = AnnotationStore::default();
    let mut notifications = Notifications::default();
    let id = fence(&mut store, vec![]);

    apply_request(&mut store, &mut notifications, &AnnotationRequest::Delete(id));
    assert!(store.is_empty());
    assert_eq!(notifications.len(), 1);
}

#[test]
fn test_apply_rename_failure_warns() {
    let mut store = AnnotationStore::default();
    let mut notifications = Notifications::default();
    let id = fence(&mut store, vec![]);

    apply_request(
        &mut store,
        &mut notifications,
        &AnnotationRequest::Rename {
            id,
            name: String::new(),
        },
    );
    assert_eq!(
        notifications.iter().last().map(|t| t.level),
        Some(NotificationLevel::Warning)
    );
}

#[test]
fn test_apply_clear_all() {
    let mut store = AnnotationStore::default();
    let mut notifications = Notifications::default();
    fence(&mut store, vec![]);
    fence(&mut store, vec![]);

    apply_request(&mut store, &mut notifications, &AnnotationRequest::ClearAll);
    assert!(store.is_empty());
}
