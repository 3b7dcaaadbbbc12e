//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types. The split between
//! [`DocumentMsg`] and [`CanvasMsg`] mirrors the history contract: document
//! messages are tracked (or walk the history), canvas messages never touch
//! the history log.

use crate::model::{AnnotationId, Color, FontFamily, StylePatch};

/// Document messages - tracked edits and history control
#[derive(Debug, Clone)]
pub enum DocumentMsg {
    /// Place a new annotation on the canvas (tracked)
    AddText {
        content: String,
        x: f32,
        y: f32,
        font_size: f32,
        color: Color,
        font_family: FontFamily,
    },
    /// Apply a style patch to the selected annotation (tracked)
    UpdateSelected(StylePatch),
    /// Undo the last tracked edit
    Undo,
    /// Redo the last undone edit
    Redo,
}

/// Canvas messages - pointer-driven state exempt from history
#[derive(Debug, Clone)]
pub enum CanvasMsg {
    /// Set the selection (from a click), or clear it with `None`
    SelectText(Option<AnnotationId>),
    /// Reposition an annotation mid-drag (not undoable)
    DragText { id: AnnotationId, x: f32, y: f32 },
}

/// Top-level message type
#[derive(Debug, Clone)]
pub enum Msg {
    /// Document messages (edits, undo/redo)
    Document(DocumentMsg),
    /// Canvas messages (selection, drag)
    Canvas(CanvasMsg),
}

// Convenience constructors for common messages
impl Msg {
    /// Create an add-text message
    pub fn add_text(
        content: impl Into<String>,
        x: f32,
        y: f32,
        font_size: f32,
        color: Color,
        font_family: FontFamily,
    ) -> Self {
        Msg::Document(DocumentMsg::AddText {
            content: content.into(),
            x,
            y,
            font_size,
            color,
            font_family,
        })
    }

    /// Create an edit message for the current selection
    pub fn update_selected(patch: StylePatch) -> Self {
        Msg::Document(DocumentMsg::UpdateSelected(patch))
    }

    /// Create a selection message
    pub fn select(id: Option<AnnotationId>) -> Self {
        Msg::Canvas(CanvasMsg::SelectText(id))
    }

    /// Create a drag message
    pub fn drag(id: AnnotationId, x: f32, y: f32) -> Self {
        Msg::Canvas(CanvasMsg::DragText { id, x, y })
    }

    /// Create an undo message
    pub fn undo() -> Self {
        Msg::Document(DocumentMsg::Undo)
    }

    /// Create a redo message
    pub fn redo() -> Self {
        Msg::Document(DocumentMsg::Redo)
    }
}
