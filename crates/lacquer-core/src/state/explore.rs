use compact_str::CompactString;
use smallvec::SmallVec;

use crate::api::Post;

/// Active search filters for the explore feed
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchFilters {
    pub shape: Option<CompactString>,
    pub pattern: Option<CompactString>,
    pub size: Option<CompactString>,
    pub color: SmallVec<[CompactString; 4]>,
}

impl SearchFilters {
    /// Whether two filter sets select the same posts. Color order does not
    /// matter.
    pub fn matches(&self, other: &SearchFilters) -> bool {
        if self.shape != other.shape || self.pattern != other.pattern || self.size != other.size {
            return false;
        }
        let mut a = self.color.clone();
        let mut b = other.color.clone();
        a.sort();
        b.sort();
        a == b
    }
}

/// Cached root-feed state, preserved across drill-ins.
///
/// The back-at-root reset always installs an empty explore view; hosts use
/// this cache to restore the feed (posts, scroll offset, pagination) instead
/// of refetching, as long as the search terms still match.
#[derive(Debug, Clone)]
pub struct ExploreCache {
    posts: Vec<Post>,
    scroll_position: f32,
    page_number: u32,
    has_more: bool,
    search_term: CompactString,
    filters: SearchFilters,
}

impl Default for ExploreCache {
    fn default() -> Self {
        Self {
            posts: Vec::new(),
            scroll_position: 0.0,
            page_number: 1,
            has_more: true,
            search_term: CompactString::default(),
            filters: SearchFilters::default(),
        }
    }
}

impl ExploreCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot the current feed state
    pub fn save(
        &mut self,
        posts: Vec<Post>,
        scroll_position: f32,
        page_number: u32,
        has_more: bool,
        search_term: &str,
        filters: SearchFilters,
    ) {
        self.posts = posts;
        self.scroll_position = scroll_position;
        self.page_number = page_number;
        self.has_more = has_more;
        self.search_term = search_term.into();
        self.filters = filters;
    }

    /// Drop the snapshot and return to first-page defaults
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Whether the snapshot still applies to the given search
    pub fn is_valid(&self, search_term: &str, filters: &SearchFilters) -> bool {
        self.search_term == search_term && self.filters.matches(filters)
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn scroll_position(&self) -> f32 {
        self.scroll_position
    }

    pub fn page_number(&self) -> u32 {
        self.page_number
    }

    pub fn has_more(&self) -> bool {
        self.has_more
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn filters(&self) -> &SearchFilters {
        &self.filters
    }
}
