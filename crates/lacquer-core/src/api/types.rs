use compact_str::CompactString;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// A feed post as served by the content API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: u64,
    pub title: String,
    pub image_url: String,
    pub width: u32,
    pub height: u32,
    /// Searchable tags, usually just a handful per post
    #[serde(default)]
    pub tags: SmallVec<[CompactString; 8]>,
    #[serde(default)]
    pub try_on_image_url: String,
}

/// One page of related posts plus the seed that makes repeated fetches for
/// the same parent deterministic. The server may omit the seed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaginatedPosts {
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub results: Vec<Post>,
}

impl PaginatedPosts {
    /// Seed coerced to its string form; empty when the server omitted it
    pub fn seed_token(&self) -> CompactString {
        self.seed
            .map(|s| format!("{}", s).into())
            .unwrap_or_default()
    }
}
