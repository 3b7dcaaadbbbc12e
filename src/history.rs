//! Edit history (undo/redo) over document snapshots.
//!
//! The log stores full copies of the annotation collection rather than
//! reversible diffs; at canvas scale a snapshot is a handful of small
//! structs. Selection is never part of a snapshot, so undo/redo does not
//! restore it.

use crate::model::Annotation;

/// A saved copy of the annotation collection.
pub type Snapshot = Vec<Annotation>;

/// Linear edit history with past and future stacks.
///
/// The past stack holds snapshots older-to-newer; the future stack holds
/// undone snapshots newest-undone-first. Recording a new checkpoint clears
/// the future stack: once a fresh edit diverges the timeline, redo history
/// is invalidated.
#[derive(Debug, Clone, Default)]
pub struct History {
    past: Vec<Snapshot>,
    future: Vec<Snapshot>,
}

impl History {
    /// Create a new empty history
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a checkpoint before a tracked mutation (clears the future stack)
    ///
    /// `prior` is the collection as it was *before* the mutation applies.
    /// Callers must pair every checkpoint with exactly one mutation, or
    /// undo would revert to a state that was never actually left.
    pub fn record(&mut self, prior: Snapshot) {
        self.future.clear();
        self.past.push(prior);
    }

    /// Step backward: pops the most recent past snapshot and saves `current`
    /// onto the future stack. Returns `None` when the past is exhausted.
    pub fn undo(&mut self, current: Snapshot) -> Option<Snapshot> {
        let previous = self.past.pop()?;
        self.future.push(current);
        Some(previous)
    }

    /// Step forward: pops the most recently undone snapshot and saves
    /// `current` back onto the past stack. Returns `None` when there is
    /// nothing to redo.
    pub fn redo(&mut self, current: Snapshot) -> Option<Snapshot> {
        let next = self.future.pop()?;
        self.past.push(current);
        Some(next)
    }

    /// Check if undo is available
    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    /// Check if redo is available
    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    /// Depth of the past stack
    pub fn past_depth(&self) -> usize {
        self.past.len()
    }

    /// Depth of the future stack
    pub fn future_depth(&self) -> usize {
        self.future.len()
    }

    /// Clear all history
    pub fn clear(&mut self) {
        self.past.clear();
        self.future.clear();
    }
}
