//! The process-wide ordered list of finalized annotations.

use std::fmt;

use bevy::prelude::*;

use super::{Annotation, AnnotationId, AnnotationKind};

/// Why a rename was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenameError {
    EmptyName,
    NotFound(AnnotationId),
}

impl fmt::Display for RenameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenameError::EmptyName => write!(f, "Name cannot be empty"),
            RenameError::NotFound(id) => write!(f, "No annotation with id {}", id),
        }
    }
}

/// Finalized annotations in creation order.
///
/// This is the single source of truth for collision queries. Readers scan it
/// fresh every tick, so removals take effect on the next frame.
#[derive(Resource, Debug)]
pub struct AnnotationStore {
    annotations: Vec<Annotation>,
    next_id: u64,
}

impl Default for AnnotationStore {
    fn default() -> Self {
        Self {
            annotations: Vec::new(),
            next_id: 1,
        }
    }
}

impl AnnotationStore {
    /// Hand out a fresh id. Ids are never reused, even after deletion or clear.
    pub fn allocate_id(&mut self) -> AnnotationId {
        let id = AnnotationId(self.next_id);
        self.next_id += 1;
        id
    }

    pub fn push(&mut self, annotation: Annotation) {
        self.annotations.push(annotation);
    }

    pub fn remove(&mut self, id: AnnotationId) -> Option<Annotation> {
        let index = self.annotations.iter().position(|a| a.id == id)?;
        Some(self.annotations.remove(index))
    }

    /// Rename an annotation. Surrounding whitespace is trimmed.
    pub fn rename(&mut self, id: AnnotationId, name: &str) -> Result<(), RenameError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(RenameError::EmptyName);
        }

        let annotation = self
            .annotations
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or(RenameError::NotFound(id))?;
        annotation.name = name.to_string();
        Ok(())
    }

    /// Remove every annotation, returning how many were dropped
    pub fn clear(&mut self) -> usize {
        let count = self.annotations.len();
        self.annotations.clear();
        count
    }

    pub fn get(&self, id: AnnotationId) -> Option<&Annotation> {
        self.annotations.iter().find(|a| a.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Annotation> {
        self.annotations.iter()
    }

    /// Annotations that take part in collision checks
    pub fn fences(&self) -> impl Iterator<Item = &Annotation> {
        self.annotations.iter().filter(|a| a.kind.blocks_movement())
    }

    pub fn count_of(&self, kind: AnnotationKind) -> usize {
        self.annotations.iter().filter(|a| a.kind == kind).count()
    }

    pub fn len(&self) -> usize {
        self.annotations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.annotations.is_empty()
    }
}
