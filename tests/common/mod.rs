//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use placard::messages::Msg;
use placard::model::{AnnotationId, CanvasModel, Color, FontFamily};
use placard::update::update;

pub const RED: Color = Color::rgb(255, 0, 0);
pub const BLUE: Color = Color::rgb(0, 0, 255);

/// Create an empty canvas model
pub fn test_model() -> CanvasModel {
    CanvasModel::new()
}

/// Add an annotation through the message cycle and return its id
pub fn add(model: &mut CanvasModel, content: &str, x: f32, y: f32) -> AnnotationId {
    update(
        model,
        Msg::add_text(content, x, y, 16.0, RED, FontFamily::Arial),
    );
    model
        .annotations()
        .last()
        .expect("annotation should have been added")
        .id
}

/// Contents of all annotations in z-order
pub fn contents(model: &CanvasModel) -> Vec<String> {
    model
        .annotations()
        .iter()
        .map(|a| a.content.clone())
        .collect()
}

/// Ids of all annotations in z-order
pub fn ids(model: &CanvasModel) -> Vec<AnnotationId> {
    model.annotations().iter().map(|a| a.id).collect()
}

/// Assert the selection invariant: a set selection resolves to a live annotation
pub fn assert_selection_invariant(model: &CanvasModel) {
    if let Some(id) = model.selected_id() {
        assert!(
            model.annotations().iter().any(|a| a.id == id),
            "selected id {id} not present in collection"
        );
    }
}
