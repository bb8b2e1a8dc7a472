//! Annotation capture: turning ground clicks into finalized polylines.
//!
//! ## Module Structure
//!
//! - [`state`] - The drawing-session state machine ([`AnnotationCapture`]) and its commands
//! - [`tool`] - System applying [`CaptureCommand`] messages and emitting finalized annotations
//! - [`rendering`] - Gizmo rendering of saved annotations and the draft preview

mod rendering;
mod state;
mod tool;

#[cfg(test)]
mod tests;

pub use rendering::{
    configure_annotation_gizmos, render_annotations, render_draft_preview, AnnotationGizmoGroup,
};
pub use state::{AnnotationCapture, CaptureCommand};
pub use tool::handle_capture_commands;
