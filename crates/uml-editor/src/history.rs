//! Undo stack.
//!
//! Every mutation of the diagram pushes the state it is about to replace.
//! Undo pops the latest entry and hands it back for restoring. There is no
//! redo: a new action after an undo simply stacks on top.
//!
//! Entries are whole-diagram snapshots. Because snapshots share their
//! lists until one side is written to, pushing one costs two reference
//! count bumps.

#[derive(Debug, Clone)]
pub struct HistoryStack<T> {
    undo_stack: Vec<T>,
}

impl<T> HistoryStack<T> {
    pub fn new() -> Self {
        Self { undo_stack: Vec::new() }
    }

    pub fn push(&mut self, entry: T) {
        self.undo_stack.push(entry);
    }

    /// The state to go back to, or `None` when there is nothing to undo.
    pub fn undo(&mut self) -> Option<T> {
        self.undo_stack.pop()
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn len(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.undo_stack.is_empty()
    }

    pub fn clear(&mut self) {
        self.undo_stack.clear();
    }
}

impl<T> Default for HistoryStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn undo_pops_latest_first() {
        let mut history = HistoryStack::new();
        history.push("a");
        history.push("b");
        assert_eq!(history.len(), 2);
        assert_eq!(history.undo(), Some("b"));
        assert_eq!(history.undo(), Some("a"));
        assert_eq!(history.undo(), None);
        assert!(!history.can_undo());
    }

    #[test]
    fn unbounded_depth() {
        let mut history = HistoryStack::new();
        for i in 0..10_000 {
            history.push(i);
        }
        assert_eq!(history.len(), 10_000);
        assert_eq!(history.undo(), Some(9_999));
    }

    #[test]
    fn clear_empties() {
        let mut history = HistoryStack::new();
        history.push(1);
        history.clear();
        assert!(history.is_empty());
        assert_eq!(history.undo(), None);
    }
}
