use std::fmt;

use bevy::prelude::*;

use super::AnnotationKind;

/// Unique, monotonically increasing annotation identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AnnotationId(pub u64);

impl fmt::Display for AnnotationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A finalized, named, colored polyline on the ground.
///
/// Points are frozen once the annotation is created; only the name can change.
#[derive(Debug, Clone, PartialEq)]
pub struct Annotation {
    pub id: AnnotationId,
    pub name: String,
    pub kind: AnnotationKind,
    pub points: Vec<Vec3>,
    pub color: Color,
}

impl Annotation {
    pub fn new(id: AnnotationId, kind: AnnotationKind, points: Vec<Vec3>) -> Self {
        Self {
            id,
            name: format!("{}_{}", kind.slug(), id),
            kind,
            points,
            color: kind.color(),
        }
    }

    /// Consecutive point pairs. Empty for annotations with fewer than two points.
    pub fn segments(&self) -> impl Iterator<Item = (Vec3, Vec3)> + '_ {
        self.points.windows(2).map(|w| (w[0], w[1]))
    }

    /// Total length along the polyline
    pub fn length(&self) -> f32 {
        self.segments().map(|(a, b)| a.distance(b)).sum()
    }
}
