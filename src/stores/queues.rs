//! Global queue store.
//!
//! The `queues` topic pushes bare queue ids meaning "this queue changed".
//! Changed queues are flagged stale until the page refetches.

use std::collections::HashSet;

use dioxus::prelude::*;

use crate::models::QueueRow;

#[derive(Debug, Default, Clone, PartialEq)]
pub struct QueueBoard {
    pub rows: Vec<QueueRow>,
    /// Queue ids flagged by a push since the last fetch.
    pub stale: HashSet<u64>,
    pub is_loaded: bool,
}

pub static QUEUES: GlobalSignal<QueueBoard> = Signal::global(QueueBoard::default);

impl QueueBoard {
    /// Flag a queue as changed. Idempotent; returns false if already stale.
    pub fn mark_stale(&mut self, id: u64) -> bool {
        self.stale.insert(id)
    }

    pub fn is_stale(&self, id: u64) -> bool {
        self.stale.contains(&id)
    }

    /// A fresh fetch supersedes all outstanding change flags.
    pub fn replace_all(&mut self, rows: Vec<QueueRow>) {
        self.rows = rows;
        self.stale.clear();
        self.is_loaded = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mark_stale_is_idempotent() {
        let mut board = QueueBoard::default();
        assert!(board.mark_stale(7));
        assert!(!board.mark_stale(7));
        assert!(board.is_stale(7));
        assert!(!board.is_stale(8));
    }

    #[test]
    fn refetch_clears_flags() {
        let mut board = QueueBoard::default();
        board.mark_stale(7);
        board.replace_all(Vec::new());
        assert!(!board.is_stale(7));
        assert!(board.is_loaded);
    }
}
