mod client;
mod types;

pub use client::ApiClient;
pub use types::{PaginatedPosts, Post};

use std::future::Future;

use crate::error::FetchError;

/// Content-fetch collaborator: given a post identifier, returns the post
/// itself or a paginated batch of related posts plus a seed token.
///
/// No retry contract is specified here; retries, timeouts and cancellation
/// belong to the implementation.
pub trait PostFeed: Send + Sync {
    /// Fetch a single post by identifier
    fn fetch_post(&self, id: u64) -> impl Future<Output = Result<Post, FetchError>> + Send;

    /// Fetch posts related to the given post, with the pagination seed
    fn fetch_related(
        &self,
        id: u64,
    ) -> impl Future<Output = Result<PaginatedPosts, FetchError>> + Send;
}
