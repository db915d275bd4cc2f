mod explore;
mod navigation;

pub use explore::{ExploreCache, SearchFilters};
pub use navigation::{NavigationStack, ViewKind, ViewState};
