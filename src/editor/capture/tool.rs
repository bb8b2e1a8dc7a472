//! Applies typed drawing commands to the capture state machine.

use bevy::prelude::*;

use crate::map::{AnnotationFinalized, AnnotationStore};
use crate::notifications::Notifications;

use super::state::{AnnotationCapture, CaptureCommand};

pub fn handle_capture_commands(
    mut events: MessageReader<CaptureCommand>,
    mut capture: ResMut<AnnotationCapture>,
    mut store: ResMut<AnnotationStore>,
    mut finalized: MessageWriter<AnnotationFinalized>,
    mut notifications: ResMut<Notifications>,
) {
    for command in events.read() {
        match command {
            CaptureCommand::StartDrawing(kind) if !capture.is_drawing() => {
                notifications.info(format!(
                    "Started drawing {}. Click on the map to add points.",
                    kind.slug()
                ));
            }
            CaptureCommand::StopDrawing if capture.is_drawing() => {
                notifications.info("Stopped drawing");
            }
            CaptureCommand::SetKind(kind) | CaptureCommand::StartDrawing(kind)
                if capture.is_drawing() && capture.selected_kind() != *kind =>
            {
                notifications.info(format!("Switched to {} drawing mode", kind.slug()));
            }
            CaptureCommand::Cancel if !capture.draft().is_empty() => {
                debug!("Cancelled draft with {} points", capture.draft().len());
            }
            _ => {}
        }

        if let Some(annotation) = capture.apply(command, || store.allocate_id()) {
            debug!(
                "Finalized {} with {} points",
                annotation.name,
                annotation.points.len()
            );
            finalized.write(AnnotationFinalized(annotation));
            // One annotation per session: the draft is already empty, so this discards nothing
            capture.stop_drawing();
        }
    }
}
