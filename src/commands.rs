//! Command types for the Elm-style architecture
//!
//! Commands represent side effects the presentation layer should perform
//! after an update. The core itself performs no I/O.

/// Side effect requested from the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cmd {
    /// Observable state changed; re-render the canvas
    Redraw,
}
