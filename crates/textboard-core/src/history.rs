//! Linear undo/redo over full scene snapshots.

use crate::scene::Scene;

/// Default maximum number of undo states to keep.
pub const DEFAULT_HISTORY_LIMIT: usize = 100;

/// Undo and redo stacks of scene snapshots.
#[derive(Debug, Clone)]
pub struct History {
    /// Older states, most recent last.
    past: Vec<Scene>,
    /// Undone states, most recently undone last.
    future: Vec<Scene>,
    /// Maximum length of `past`; `None` keeps everything.
    limit: Option<usize>,
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

impl History {
    /// Create an empty history with the default limit.
    pub fn new() -> Self {
        Self::with_limit(Some(DEFAULT_HISTORY_LIMIT))
    }

    /// Create an empty history keeping at most `limit` undo states.
    pub fn with_limit(limit: Option<usize>) -> Self {
        Self {
            past: Vec::new(),
            future: Vec::new(),
            limit,
        }
    }

    /// Record the scene as it was before a user action.
    pub fn commit(&mut self, before: Scene) {
        self.past.push(before);
        self.future.clear();

        if let Some(limit) = self.limit {
            if self.past.len() > limit {
                let overflow = self.past.len() - limit;
                self.past.drain(..overflow);
            }
        }
    }

    /// Step back. Returns the scene to make live, or `None` if there is
    /// nothing to undo.
    pub fn undo(&mut self, live: Scene) -> Option<Scene> {
        let restored = self.past.pop()?;
        self.future.push(live);
        Some(restored)
    }

    /// Step forward again. Returns the scene to make live, or `None` if
    /// there is nothing to redo.
    pub fn redo(&mut self, live: Scene) -> Option<Scene> {
        let restored = self.future.pop()?;
        self.past.push(live);
        Some(restored)
    }

    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    pub fn undo_len(&self) -> usize {
        self.past.len()
    }

    pub fn redo_len(&self) -> usize {
        self.future.len()
    }

    /// Drop all recorded states.
    pub fn clear(&mut self) {
        self.past.clear();
        self.future.clear();
    }
}
