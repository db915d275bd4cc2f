mod modal;
mod page;

pub use modal::DetailModal;
pub use page::DetailPage;

use compact_str::CompactString;
use lacquer_core::Post;

/// What a host UI renders for a detail view
#[derive(Debug, Clone, PartialEq)]
pub struct DetailViewModel {
    /// The drilled-into post
    pub post: Post,
    /// The "more to explore" batch below it
    pub more_posts: Vec<Post>,
    /// Pagination seed for loading further related posts
    pub seed: CompactString,
}
