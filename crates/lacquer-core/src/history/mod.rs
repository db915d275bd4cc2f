mod session;

pub use session::SessionHistory;

use compact_str::CompactString;

/// Address of the canonical root view
pub const ROOT_ADDRESS: &str = "/";

/// Address of a post's detail view
pub fn post_address(id: u64) -> CompactString {
    format!("/post/{}", id).into()
}

/// Browser history collaborator.
///
/// The navigation store keeps the view stack and the native history in a
/// 1:1 relationship: every successful drill-in pairs one stack append with
/// one `push`, and every back at depth > 1 pairs one stack pop with one
/// `back`. The root reset is the asymmetry: it rewrites the address with an
/// explicit `push` because there is nothing earlier in the session to
/// return to.
///
/// An out-of-band back performed by the user (gesture, hardware button) is
/// observed by the hosting view layer, which must forward it to
/// [`NavigationStore::handle_history_back`](crate::store::NavigationStore::handle_history_back).
pub trait BrowserHistory: Send + Sync {
    /// Record a new history entry at the given address
    fn push(&self, address: &str);

    /// Navigate to the previous history entry
    fn back(&self);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_address_format() {
        assert_eq!(post_address(42), "/post/42");
        assert_eq!(post_address(0), "/post/0");
    }
}
