//! Error types for canvas operations.
//!
//! Validation failures are reported before any state mutation or history
//! checkpoint happens, so a rejected operation leaves the model exactly as
//! it was. Running out of undo/redo history is not an error (see
//! [`crate::history`]).

use thiserror::Error;

use crate::model::AnnotationId;

/// Errors produced by the annotation store.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlacardError {
    /// Annotation content was empty (or whitespace-only) after trimming.
    #[error("annotation content cannot be blank")]
    EmptyContent,

    /// Font size must be a finite, strictly positive number.
    #[error("font size must be a positive number, got {0}")]
    InvalidFontSize(f32),

    /// Color string did not parse as `#RRGGBB` or `#RRGGBBAA`.
    #[error("invalid color format: {0}")]
    InvalidColor(String),

    /// Font family name is not one of the supported families.
    #[error("unknown font family: {0}")]
    UnknownFontFamily(String),

    /// Operation referenced an annotation id not present in the document.
    #[error("no annotation with id {0}")]
    UnknownAnnotation(AnnotationId),
}
