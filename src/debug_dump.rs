//! Debug state dump for development diagnostics
//!
//! Serializes a snapshot of the canvas state to JSON for easier debugging.
//! The dump structs mirror the model rather than deriving Serialize on the
//! model itself; the output is for humans, not a persistence format.

use serde::Serialize;

use crate::model::CanvasModel;

#[derive(Serialize)]
pub struct StateDump {
    pub annotation_count: usize,
    pub selected_id: Option<u64>,
    pub undo_depth: usize,
    pub redo_depth: usize,
    pub annotations: Vec<AnnotationDump>,
}

#[derive(Serialize)]
pub struct AnnotationDump {
    pub id: u64,
    pub content: String,
    pub x: f32,
    pub y: f32,
    pub font_size: f32,
    pub color: String,
    pub font_family: String,
}

impl StateDump {
    pub fn from_model(model: &CanvasModel) -> Self {
        Self {
            annotation_count: model.annotations().len(),
            selected_id: model.selected_id().map(|id| id.0),
            undo_depth: model.history.past_depth(),
            redo_depth: model.history.future_depth(),
            annotations: model
                .annotations()
                .iter()
                .map(|a| AnnotationDump {
                    id: a.id.0,
                    content: a.content.clone(),
                    x: a.x,
                    y: a.y,
                    font_size: a.font_size,
                    color: a.color.to_string(),
                    font_family: a.font_family.to_string(),
                })
                .collect(),
        }
    }
}

/// Render the full state as pretty-printed JSON
pub fn dump_json(model: &CanvasModel) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&StateDump::from_model(model))
}
