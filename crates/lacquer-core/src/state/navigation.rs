use compact_str::CompactString;

use crate::api::Post;

/// Which kind of view a stack entry describes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Explore,
    Detail,
}

/// One entry in the navigation stack: either the root feed or a post's
/// detail view.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState {
    /// The main explore feed; the root of the stack
    Explore {
        posts: Vec<Post>,
        /// Pagination seed; may be empty
        seed: CompactString,
    },
    /// A drilled-into post with its "more to explore" batch
    Detail {
        /// The post the user clicked to reach this view
        parent: Post,
        posts: Vec<Post>,
        seed: CompactString,
    },
}

impl ViewState {
    /// The canonical root view installed by a reset: empty feed, empty seed
    pub fn empty_explore() -> Self {
        Self::Explore {
            posts: Vec::new(),
            seed: CompactString::default(),
        }
    }

    pub fn kind(&self) -> ViewKind {
        match self {
            Self::Explore { .. } => ViewKind::Explore,
            Self::Detail { .. } => ViewKind::Detail,
        }
    }

    pub fn posts(&self) -> &[Post] {
        match self {
            Self::Explore { posts, .. } | Self::Detail { posts, .. } => posts,
        }
    }

    pub fn seed(&self) -> &str {
        match self {
            Self::Explore { seed, .. } | Self::Detail { seed, .. } => seed,
        }
    }

    /// The drilled-into post; `None` for the root feed
    pub fn parent_post(&self) -> Option<&Post> {
        match self {
            Self::Explore { .. } => None,
            Self::Detail { parent, .. } => Some(parent),
        }
    }
}

/// Ordered list of the views the user has drilled into.
///
/// Index 0 is the root and is always an explore view; every non-root entry
/// is a detail view. After initialization the depth never drops below 1.
/// Each mutation installs a rebuilt vector; entries below the top are never
/// edited in place.
#[derive(Debug, Default)]
pub struct NavigationStack {
    entries: Vec<ViewState>,
}

impl NavigationStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the stack with a single root entry. Any prior content is
    /// discarded, not merged.
    pub fn initialize(&mut self, initial: ViewState) {
        self.entries = vec![initial];
    }

    /// Append a view on top; returns the new depth
    pub fn push(&mut self, view: ViewState) -> usize {
        let mut next = self.entries.clone();
        next.push(view);
        self.entries = next;
        self.entries.len()
    }

    /// Remove and return the top entry. The root is never popped; at
    /// depth <= 1 this returns `None` and leaves the stack unchanged.
    pub fn pop(&mut self) -> Option<ViewState> {
        if self.entries.len() <= 1 {
            return None;
        }
        let mut next = self.entries.clone();
        let removed = next.pop();
        self.entries = next;
        removed
    }

    /// Replace everything with the canonical empty explore root
    pub fn reset_root(&mut self) {
        self.entries = vec![ViewState::empty_explore()];
    }

    pub fn depth(&self) -> usize {
        self.entries.len()
    }

    pub fn top(&self) -> Option<&ViewState> {
        self.entries.last()
    }

    pub fn entries(&self) -> &[ViewState] {
        &self.entries
    }
}
