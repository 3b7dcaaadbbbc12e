//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions. The reducer
//! returns `Some(Cmd::Redraw)` exactly when observable state changed;
//! exhausted history and other no-ops return `None`.

use crate::commands::Cmd;
use crate::messages::{CanvasMsg, DocumentMsg, Msg};
use crate::model::CanvasModel;

/// Main update function - dispatches to sub-handlers
pub fn update(model: &mut CanvasModel, msg: Msg) -> Option<Cmd> {
    match msg {
        Msg::Document(m) => update_document(model, m),
        Msg::Canvas(m) => update_canvas(model, m),
    }
}

/// Handle document messages (tracked edits, undo/redo)
pub fn update_document(model: &mut CanvasModel, msg: DocumentMsg) -> Option<Cmd> {
    match msg {
        DocumentMsg::AddText {
            content,
            x,
            y,
            font_size,
            color,
            font_family,
        } => match model.add_annotation(content, x, y, font_size, color, font_family) {
            Ok(id) => {
                tracing::debug!(%id, x, y, %color, %font_family, "added annotation");
                Some(Cmd::Redraw)
            }
            Err(e) => {
                // Callers are expected to pre-validate; reject defensively.
                tracing::warn!("rejected add: {e}");
                None
            }
        },

        DocumentMsg::UpdateSelected(patch) => match model.update_selected(&patch) {
            Ok(true) => {
                tracing::debug!(id = ?model.selected_id(), "edited selected annotation");
                Some(Cmd::Redraw)
            }
            Ok(false) => {
                tracing::debug!("edit ignored: no selection or empty patch");
                None
            }
            Err(e) => {
                tracing::warn!("rejected edit: {e}");
                None
            }
        },

        DocumentMsg::Undo => {
            if model.undo() {
                tracing::debug!(
                    past = model.history.past_depth(),
                    future = model.history.future_depth(),
                    "undo"
                );
                Some(Cmd::Redraw)
            } else {
                tracing::debug!("undo ignored: history exhausted");
                None
            }
        }

        DocumentMsg::Redo => {
            if model.redo() {
                tracing::debug!(
                    past = model.history.past_depth(),
                    future = model.history.future_depth(),
                    "redo"
                );
                Some(Cmd::Redraw)
            } else {
                tracing::debug!("redo ignored: nothing undone");
                None
            }
        }
    }
}

/// Handle canvas messages (selection, drag) - never touch history
pub fn update_canvas(model: &mut CanvasModel, msg: CanvasMsg) -> Option<Cmd> {
    match msg {
        CanvasMsg::SelectText(id) => match model.select(id) {
            Ok(true) => Some(Cmd::Redraw),
            Ok(false) => None,
            Err(e) => {
                tracing::warn!("rejected selection: {e}");
                None
            }
        },

        CanvasMsg::DragText { id, x, y } => {
            if model.drag(id, x, y) {
                Some(Cmd::Redraw)
            } else {
                tracing::debug!(%id, "drag ignored: unknown annotation");
                None
            }
        }
    }
}
