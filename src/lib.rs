//! Placard - free-floating text annotations on a 2D canvas
//!
//! This crate provides the state machine for a canvas annotation tool
//! implementing the Elm Architecture pattern: an explicitly owned model,
//! message enums for every mutation, and an update function that applies
//! them. Content edits are tracked in a linear undo/redo history; drag
//! repositioning and selection changes are deliberately exempt.

pub mod commands;
pub mod debug_dump;
pub mod error;
pub mod history;
pub mod messages;
pub mod model;
pub mod tracing;
pub mod update;
pub mod util;

// Re-export commonly used types
pub use commands::Cmd;
pub use error::PlacardError;
pub use history::History;
pub use messages::Msg;
pub use model::CanvasModel;
pub use update::update;
