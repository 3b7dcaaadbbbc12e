//! Canvas model - the complete state of the annotation canvas
//!
//! This module contains all the state types following the Elm Architecture
//! pattern. [`CanvasModel`] is the single owner of the document and the
//! undo/redo log; every tracked mutation updates both atomically.

pub mod annotation;
pub mod document;

pub use annotation::{
    validate_font_size, Annotation, AnnotationId, Color, FontFamily, StylePatch,
};
pub use document::Document;

use crate::error::PlacardError;
use crate::history::History;

/// The complete canvas state: document, history, and the id counter
///
/// Constructed explicitly and handed to the presentation layer; there is no
/// ambient global instance. The id counter lives here rather than on the
/// document so undo can never roll it back and ids are never reused within
/// a session.
#[derive(Debug, Clone, Default)]
pub struct CanvasModel {
    /// The live annotation collection and selection
    pub document: Document,
    /// Past/future snapshot stacks for undo/redo
    pub history: History,
    /// Next id to hand out; monotonically increasing
    next_annotation_id: u64,
}

impl CanvasModel {
    /// Create an empty canvas: no annotations, no selection, empty stacks
    pub fn new() -> Self {
        Self::default()
    }

    fn next_annotation_id(&mut self) -> AnnotationId {
        let id = AnnotationId(self.next_annotation_id);
        self.next_annotation_id += 1;
        id
    }

    /// Annotations in z-order (first renders bottom-most)
    pub fn annotations(&self) -> &[Annotation] {
        &self.document.annotations
    }

    /// Id of the selected annotation, if any
    pub fn selected_id(&self) -> Option<AnnotationId> {
        self.document.selected_id
    }

    /// The selected annotation, if any
    pub fn selected(&self) -> Option<&Annotation> {
        self.document.selected()
    }

    /// Whether any tracked mutation can be undone
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Whether any undone mutation can be replayed
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Place a new annotation on top of the z-order (tracked)
    ///
    /// Validates before touching any state: a rejected add leaves both the
    /// document and the history exactly as they were. On success the
    /// pre-mutation snapshot is checkpointed and the fresh id returned.
    pub fn add_annotation(
        &mut self,
        content: impl Into<String>,
        x: f32,
        y: f32,
        font_size: f32,
        color: Color,
        font_family: FontFamily,
    ) -> Result<AnnotationId, PlacardError> {
        let content = content.into();
        if content.trim().is_empty() {
            return Err(PlacardError::EmptyContent);
        }
        validate_font_size(font_size)?;

        self.history.record(self.document.annotations.clone());
        let id = self.next_annotation_id();
        self.document.push(Annotation {
            id,
            content,
            x,
            y,
            font_size,
            color,
            font_family,
        });
        Ok(id)
    }

    /// Set or clear the selection (untracked)
    ///
    /// Selecting an id not present in the document is rejected, keeping the
    /// selection invariant intact. Returns whether the selection changed.
    pub fn select(&mut self, id: Option<AnnotationId>) -> Result<bool, PlacardError> {
        if let Some(id) = id {
            if !self.document.contains(id) {
                return Err(PlacardError::UnknownAnnotation(id));
            }
        }
        let changed = self.document.selected_id != id;
        self.document.selected_id = id;
        Ok(changed)
    }

    /// Apply a style patch to the selected annotation (tracked)
    ///
    /// Without an active selection, or with an empty patch, this is a no-op
    /// that records no checkpoint. Patch validation happens before the
    /// checkpoint so a rejected edit cannot corrupt the history. Setting a
    /// field to its current value still counts as a mutation.
    pub fn update_selected(&mut self, patch: &StylePatch) -> Result<bool, PlacardError> {
        if self.document.selected_id.is_none() || patch.is_empty() {
            return Ok(false);
        }
        patch.validate()?;

        self.history.record(self.document.annotations.clone());
        let selected = self
            .document
            .selected_mut()
            .expect("selection invariant: selected id resolves to an annotation");
        if let Some(ref content) = patch.content {
            selected.content = content.clone();
        }
        if let Some(size) = patch.font_size {
            selected.font_size = size;
        }
        if let Some(color) = patch.color {
            selected.color = color;
        }
        if let Some(family) = patch.font_family {
            selected.font_family = family;
        }
        Ok(true)
    }

    /// Move an annotation to a new position (untracked)
    ///
    /// Continuous pointer movement must not flood the history log, so drag
    /// never records a checkpoint and is never reversed by undo. An unknown
    /// id is an ignored no-op. Returns whether anything moved.
    pub fn drag(&mut self, id: AnnotationId, x: f32, y: f32) -> bool {
        match self.document.annotation_mut(id) {
            Some(annotation) => {
                annotation.x = x;
                annotation.y = y;
                true
            }
            None => false,
        }
    }

    /// Step the document backward one tracked mutation
    ///
    /// With an empty past stack this is a well-defined no-op, not an error.
    /// Selection is not part of history and survives unless its annotation
    /// disappears from the restored snapshot.
    pub fn undo(&mut self) -> bool {
        if !self.history.can_undo() {
            return false;
        }
        let current = std::mem::take(&mut self.document.annotations);
        let previous = self
            .history
            .undo(current)
            .expect("past stack is non-empty after can_undo check");
        self.document.install_snapshot(previous);
        true
    }

    /// Replay the most recently undone mutation; no-op when none exists
    pub fn redo(&mut self) -> bool {
        if !self.history.can_redo() {
            return false;
        }
        let current = std::mem::take(&mut self.document.annotations);
        let next = self
            .history
            .redo(current)
            .expect("future stack is non-empty after can_redo check");
        self.document.install_snapshot(next);
        true
    }
}
