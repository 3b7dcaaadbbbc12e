//! Document model - the ordered annotation collection and current selection

use super::annotation::{Annotation, AnnotationId};

/// Document state - every annotation on the canvas plus the selection
///
/// Insertion order is z-order: later-added annotations render on top.
/// Invariant: when `selected_id` is set, an annotation with that id exists
/// in the collection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    /// Annotations in insertion (z) order
    pub annotations: Vec<Annotation>,
    /// Currently selected annotation, if any
    pub selected_id: Option<AnnotationId>,
}

impl Document {
    /// Create a new empty document
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of annotations on the canvas
    pub fn len(&self) -> usize {
        self.annotations.len()
    }

    /// True if the canvas has no annotations
    pub fn is_empty(&self) -> bool {
        self.annotations.is_empty()
    }

    /// Whether an annotation with this id exists
    pub fn contains(&self, id: AnnotationId) -> bool {
        self.annotations.iter().any(|a| a.id == id)
    }

    /// Look up an annotation by id
    pub fn annotation(&self, id: AnnotationId) -> Option<&Annotation> {
        self.annotations.iter().find(|a| a.id == id)
    }

    /// Look up an annotation by id (mutable)
    pub fn annotation_mut(&mut self, id: AnnotationId) -> Option<&mut Annotation> {
        self.annotations.iter_mut().find(|a| a.id == id)
    }

    /// The selected annotation, if a selection is active
    pub fn selected(&self) -> Option<&Annotation> {
        self.selected_id.and_then(|id| self.annotation(id))
    }

    /// The selected annotation (mutable), if a selection is active
    pub fn selected_mut(&mut self) -> Option<&mut Annotation> {
        let id = self.selected_id?;
        self.annotation_mut(id)
    }

    /// Append an annotation on top of the z-order
    pub fn push(&mut self, annotation: Annotation) {
        self.annotations.push(annotation);
    }

    /// Replace the collection with a history snapshot
    ///
    /// Selection survives unless its annotation is absent from the incoming
    /// snapshot; a stale selection is cleared to keep the selection
    /// invariant intact.
    pub fn install_snapshot(&mut self, snapshot: Vec<Annotation>) {
        self.annotations = snapshot;
        if let Some(id) = self.selected_id {
            if !self.contains(id) {
                self.selected_id = None;
            }
        }
    }
}
