/// Events FROM the navigation store TO view layers (updates UI)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavEvent {
    // =========== Stack Events ===========

    /// The stack was (re)initialized to a single root view
    FeedInitialized,

    /// A detail view was appended after a successful fetch
    ViewPushed {
        depth: usize,
        parent_id: u64,
    },

    /// The top detail view was removed
    ViewPopped {
        depth: usize,
    },

    /// Back was requested at the root; the stack was reset to the
    /// canonical empty explore view
    FeedReset,

    // =========== Failure Events ===========

    /// Fetching related posts failed; the stack was left untouched
    FetchFailed {
        post_id: u64,
    },
}
