//! Global notice store backing the toast stack.

use std::sync::atomic::{AtomicU64, Ordering};

use dioxus::prelude::*;

/// A user-visible one-shot notice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub text: String,
}

/// Pending notices, newest last. The toast component renders and dismisses.
pub static NOTICES: GlobalSignal<Vec<Notice>> = Signal::global(Vec::new);

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

pub fn next_notice_id() -> u64 {
    NEXT_ID.fetch_add(1, Ordering::Relaxed)
}

/// Queue a notice for display.
pub fn push_notice(text: impl Into<String>) {
    NOTICES.write().push(Notice {
        id: next_notice_id(),
        text: text.into(),
    });
}

/// Remove a notice once shown or clicked away.
pub fn dismiss_notice(id: u64) {
    NOTICES.write().retain(|n| n.id != id);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notice_ids_are_monotonic() {
        let a = next_notice_id();
        let b = next_notice_id();
        let c = next_notice_id();
        assert!(a < b && b < c);
    }
}
