pub mod api;
pub mod config;
pub mod error;
pub mod history;
pub mod messages;
pub mod state;
pub mod store;

pub use api::{ApiClient, PaginatedPosts, Post, PostFeed};
pub use config::{AppSettings, ConfigPaths};
pub use error::FetchError;
pub use history::{post_address, BrowserHistory, SessionHistory, ROOT_ADDRESS};
pub use messages::NavEvent;
pub use state::{ExploreCache, NavigationStack, SearchFilters, ViewKind, ViewState};
pub use store::NavigationStore;
