//! Drawing-session state machine for capturing annotation polylines.
//!
//! ```text
//!            start_drawing(kind)
//!   Idle ─────────────────────────▶ Drawing { kind, draft }
//!    ▲                                  │  add_point  → draft grows
//!    │          stop_drawing            │  cancel     → draft emptied
//!    └──────────────────────────────────┤  commit     → Annotation emitted, draft emptied
//!                                       │  set_kind   → kind replaced, draft kept
//! ```
//!
//! The session stays open after a commit. Hosts that want one annotation per
//! session call [`AnnotationCapture::stop_drawing`] after receiving it.

use bevy::prelude::*;

use crate::map::{Annotation, AnnotationId, AnnotationKind};

#[derive(Debug, Clone, PartialEq, Default)]
pub enum CaptureState {
    #[default]
    Idle,
    Drawing {
        kind: AnnotationKind,
        draft: Vec<Vec3>,
    },
}

/// Typed drawing commands, converted from raw input or UI clicks
#[derive(Message, Debug, Clone, PartialEq)]
pub enum CaptureCommand {
    StartDrawing(AnnotationKind),
    StopDrawing,
    /// Change the selected kind without starting or ending a session
    SetKind(AnnotationKind),
    /// A ground intersection, or `None` when the click missed the ground
    AddPoint(Option<Vec3>),
    Commit,
    Cancel,
}

#[derive(Resource, Debug, Default)]
pub struct AnnotationCapture {
    state: CaptureState,
    /// Kind used by the next session; mirrors the active kind while drawing
    selected_kind: AnnotationKind,
}

impl AnnotationCapture {
    pub fn state(&self) -> &CaptureState {
        &self.state
    }

    pub fn is_drawing(&self) -> bool {
        matches!(self.state, CaptureState::Drawing { .. })
    }

    pub fn selected_kind(&self) -> AnnotationKind {
        self.selected_kind
    }

    /// Points of the in-progress polyline (empty when idle)
    pub fn draft(&self) -> &[Vec3] {
        match &self.state {
            CaptureState::Drawing { draft, .. } => draft,
            CaptureState::Idle => &[],
        }
    }

    /// Open a session, or switch the kind of the open one keeping its draft
    pub fn start_drawing(&mut self, kind: AnnotationKind) {
        self.selected_kind = kind;
        if let CaptureState::Drawing { kind: current, .. } = &mut self.state {
            *current = kind;
            return;
        }
        self.state = CaptureState::Drawing {
            kind,
            draft: Vec::new(),
        };
    }

    pub fn set_kind(&mut self, kind: AnnotationKind) {
        self.selected_kind = kind;
        if let CaptureState::Drawing { kind: current, .. } = &mut self.state {
            *current = kind;
        }
    }

    /// End the session, discarding the draft. Returns the number of discarded points.
    pub fn stop_drawing(&mut self) -> usize {
        let discarded = self.draft().len();
        self.state = CaptureState::Idle;
        discarded
    }

    /// Append a ground point. Returns false when idle or when there was no intersection.
    pub fn add_point(&mut self, point: Option<Vec3>) -> bool {
        match (&mut self.state, point) {
            (CaptureState::Drawing { draft, .. }, Some(point)) => {
                draft.push(point);
                true
            }
            _ => false,
        }
    }

    /// Promote the draft to an [`Annotation`]. No-op when idle or when the draft is empty;
    /// `allocate_id` is only called when an annotation is actually produced.
    pub fn commit(&mut self, allocate_id: impl FnOnce() -> AnnotationId) -> Option<Annotation> {
        let CaptureState::Drawing { kind, draft } = &mut self.state else {
            return None;
        };
        if draft.is_empty() {
            return None;
        }

        let points = std::mem::take(draft);
        Some(Annotation::new(allocate_id(), *kind, points))
    }

    /// Empty the draft without emitting anything. Returns the number of discarded points.
    pub fn cancel(&mut self) -> usize {
        match &mut self.state {
            CaptureState::Drawing { draft, .. } => {
                let discarded = draft.len();
                draft.clear();
                discarded
            }
            CaptureState::Idle => 0,
        }
    }

    /// Dispatch a typed command, returning the finalized annotation if one was produced
    pub fn apply(
        &mut self,
        command: &CaptureCommand,
        allocate_id: impl FnOnce() -> AnnotationId,
    ) -> Option<Annotation> {
        match command {
            CaptureCommand::StartDrawing(kind) => self.start_drawing(*kind),
            CaptureCommand::StopDrawing => {
                self.stop_drawing();
            }
            CaptureCommand::SetKind(kind) => self.set_kind(*kind),
            CaptureCommand::AddPoint(point) => {
                self.add_point(*point);
            }
            CaptureCommand::Commit => return self.commit(allocate_id),
            CaptureCommand::Cancel => {
                self.cancel();
            }
        }
        None
    }
}
