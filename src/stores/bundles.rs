//! Global bundle store.
//!
//! The bundles page loads history over REST and then receives newly created
//! bundles as push payloads; both paths insert here.

use dioxus::prelude::*;

use crate::models::BundleRow;

/// Bundle rows shown on the bundles page.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct BundleFeed {
    /// Rows sorted by `added_at` descending (newest first).
    pub rows: Vec<BundleRow>,
    /// Whether the initial REST fetch has completed.
    pub is_loaded: bool,
}

pub static BUNDLES: GlobalSignal<BundleFeed> = Signal::global(BundleFeed::default);

impl BundleFeed {
    /// Insert a row, keeping newest-first order. Returns false for a
    /// duplicate id (push and REST can race on the same bundle).
    pub fn insert(&mut self, row: BundleRow) -> bool {
        if self.rows.iter().any(|r| r.id == row.id) {
            return false;
        }
        let at = self
            .rows
            .iter()
            .position(|r| r.added_at < row.added_at)
            .unwrap_or(self.rows.len());
        self.rows.insert(at, row);
        true
    }

    pub fn replace_all(&mut self, rows: Vec<BundleRow>) {
        self.rows = rows;
        self.rows.sort_by(|a, b| b.added_at.cmp(&a.added_at));
        self.is_loaded = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn row(id: u64, minute: u32) -> BundleRow {
        BundleRow {
            id,
            name: format!("bundle-{id}"),
            game_count: 3,
            added_at: Utc.with_ymd_and_hms(2026, 8, 1, 12, minute, 0).unwrap(),
        }
    }

    #[test]
    fn insert_keeps_newest_first() {
        let mut feed = BundleFeed::default();
        assert!(feed.insert(row(1, 0)));
        assert!(feed.insert(row(2, 5)));
        assert!(feed.insert(row(3, 2)));
        let ids: Vec<u64> = feed.rows.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![2, 3, 1]);
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let mut feed = BundleFeed::default();
        assert!(feed.insert(row(1, 0)));
        assert!(!feed.insert(row(1, 9)));
        assert_eq!(feed.rows.len(), 1);
    }
}
