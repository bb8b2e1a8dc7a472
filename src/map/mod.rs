//! Finalized map annotations and the requests that edit them.
//!
//! ## Module Structure
//!
//! - [`kind`] - Annotation kinds (Fence, Path, Waypoint) and their colors
//! - [`annotation`] - The finalized [`Annotation`] record
//! - [`store`] - [`AnnotationStore`], the ordered list shared by rendering and navigation
//!
//! The drawing tool emits [`AnnotationFinalized`] messages; the UI edits the list
//! through [`AnnotationRequest`] messages. Both are applied here.

mod annotation;
mod kind;
mod store;

#[cfg(test)]
mod tests;

pub use annotation::{Annotation, AnnotationId};
pub use kind::AnnotationKind;
pub use store::{AnnotationStore, RenameError};

use bevy::prelude::*;

use crate::notifications::Notifications;

/// Emitted exactly once per successful commit of a drawing session
#[derive(Message, Debug, Clone)]
pub struct AnnotationFinalized(pub Annotation);

/// Edits to the annotation list issued by the UI
#[derive(Message, Debug, Clone, PartialEq)]
pub enum AnnotationRequest {
    Delete(AnnotationId),
    Rename { id: AnnotationId, name: String },
    ClearAll,
}

/// Apply a single list edit, reporting the outcome as a notification
pub(crate) fn apply_request(
    store: &mut AnnotationStore,
    notifications: &mut Notifications,
    request: &AnnotationRequest,
) {
    match request {
        AnnotationRequest::Delete(id) => match store.remove(*id) {
            Some(removed) => notifications.success(format!("Deleted {}", removed.name)),
            None => warn!("Delete requested for unknown annotation {}", id),
        },
        AnnotationRequest::Rename { id, name } => match store.rename(*id, name) {
            Ok(()) => notifications.success("Path renamed successfully"),
            Err(e) => notifications.warning(format!("Rename failed: {}", e)),
        },
        AnnotationRequest::ClearAll => {
            let count = store.clear();
            notifications.success(format!("All paths cleared ({} removed)", count));
        }
    }
}

fn store_finalized_annotations(
    mut events: MessageReader<AnnotationFinalized>,
    mut store: ResMut<AnnotationStore>,
    mut notifications: ResMut<Notifications>,
) {
    for AnnotationFinalized(annotation) in events.read() {
        notifications.success(format!(
            "{} created successfully with {} points",
            annotation.kind.slug(),
            annotation.points.len()
        ));
        debug!("Stored annotation {} ({})", annotation.id, annotation.name);
        store.push(annotation.clone());
    }
}

fn apply_annotation_requests(
    mut events: MessageReader<AnnotationRequest>,
    mut store: ResMut<AnnotationStore>,
    mut notifications: ResMut<Notifications>,
) {
    for request in events.read() {
        apply_request(&mut store, &mut notifications, request);
    }
}

pub struct MapPlugin;

impl Plugin for MapPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<AnnotationStore>()
            .add_message::<AnnotationFinalized>()
            .add_message::<AnnotationRequest>()
            .add_systems(
                Update,
                (
                    store_finalized_annotations.run_if(on_message::<AnnotationFinalized>),
                    apply_annotation_requests.run_if(on_message::<AnnotationRequest>),
                )
                    .in_set(crate::AppSet::ApplyEdits),
            );
    }
}
