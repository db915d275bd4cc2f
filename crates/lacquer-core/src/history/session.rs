use compact_str::CompactString;
use parking_lot::Mutex;

use super::BrowserHistory;

/// In-process session history for headless hosts and tests.
///
/// Keeps the same back/current/forward discipline a browser does: pushing a
/// new address moves the current one onto the back stack and clears any
/// forward entries.
#[derive(Debug, Default)]
pub struct SessionHistory {
    inner: Mutex<Entries>,
}

#[derive(Debug, Default)]
struct Entries {
    back: Vec<CompactString>,
    current: Option<CompactString>,
    forward: Vec<CompactString>,
}

impl SessionHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Address of the entry currently navigated to
    pub fn current(&self) -> Option<CompactString> {
        self.inner.lock().current.clone()
    }

    /// Number of entries behind the current one
    pub fn back_len(&self) -> usize {
        self.inner.lock().back.len()
    }

    pub fn can_go_back(&self) -> bool {
        !self.inner.lock().back.is_empty()
    }

    pub fn can_go_forward(&self) -> bool {
        !self.inner.lock().forward.is_empty()
    }

    /// Re-navigate to the next entry, if a back left one behind
    pub fn forward(&self) -> Option<CompactString> {
        let mut entries = self.inner.lock();
        let next = entries.forward.pop()?;
        if let Some(current) = entries.current.take() {
            entries.back.push(current);
        }
        entries.current = Some(next.clone());
        Some(next)
    }
}

impl BrowserHistory for SessionHistory {
    fn push(&self, address: &str) {
        let mut entries = self.inner.lock();
        if let Some(current) = entries.current.take() {
            entries.back.push(current);
        }
        entries.current = Some(address.into());
        entries.forward.clear();
    }

    fn back(&self) {
        let mut entries = self.inner.lock();
        if let Some(prev) = entries.back.pop() {
            if let Some(current) = entries.current.take() {
                entries.forward.push(current);
            }
            entries.current = Some(prev);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::{post_address, ROOT_ADDRESS};

    #[test]
    fn test_push_records_entries_in_order() {
        let history = SessionHistory::new();
        history.push(ROOT_ADDRESS);
        history.push(&post_address(42));
        history.push(&post_address(7));

        assert_eq!(history.current().as_deref(), Some("/post/7"));
        assert_eq!(history.back_len(), 2);
        assert!(!history.can_go_forward());
    }

    #[test]
    fn test_back_and_forward_walk_entries() {
        let history = SessionHistory::new();
        history.push(ROOT_ADDRESS);
        history.push(&post_address(42));

        history.back();
        assert_eq!(history.current().as_deref(), Some("/"));
        assert!(history.can_go_forward());

        assert_eq!(history.forward().as_deref(), Some("/post/42"));
        assert!(!history.can_go_forward());
    }

    #[test]
    fn test_push_clears_forward_entries() {
        let history = SessionHistory::new();
        history.push(ROOT_ADDRESS);
        history.push(&post_address(42));
        history.back();

        history.push(&post_address(9));
        assert!(!history.can_go_forward());
        assert_eq!(history.current().as_deref(), Some("/post/9"));
    }

    #[test]
    fn test_back_at_first_entry_is_a_no_op() {
        let history = SessionHistory::new();
        history.push(ROOT_ADDRESS);
        history.back();
        assert_eq!(history.current().as_deref(), Some("/"));
    }
}
