use parking_lot::RwLock;
use tracing::{debug, error};

use lacquer_core::{BrowserHistory, FetchError, PostFeed};

use super::DetailViewModel;
use crate::common::{DetailPresentation, PresentationContext, PresentationKind};

/// Detail view as a standalone addressed page (`/post/{id}`).
///
/// Unlike the modal, the page can be the session's entry point, so it
/// fetches the post and its related batch itself instead of reading them
/// off the stack. Closing it still goes through the store's single go-back
/// path, keeping both presentations behaviorally identical.
pub struct DetailPage<F, H> {
    ctx: PresentationContext<F, H>,
    model: RwLock<Option<DetailViewModel>>,
}

impl<F: PostFeed, H: BrowserHistory> DetailPage<F, H> {
    pub fn new(ctx: PresentationContext<F, H>) -> Self {
        Self {
            ctx,
            model: RwLock::new(None),
        }
    }

    /// Fetch the addressed post and its related batch concurrently and
    /// install the view model. On failure the page stays empty and the
    /// error is surfaced to the host.
    pub async fn load(&self, post_id: u64) -> Result<(), FetchError> {
        let feed = self.ctx.store.feed();
        let (post, related) =
            match futures::try_join!(feed.fetch_post(post_id), feed.fetch_related(post_id)) {
                Ok(data) => data,
                Err(e) => {
                    error!(post_id, error = %e, "failed to fetch post data for full page");
                    return Err(e);
                }
            };

        debug!(post_id, more = related.results.len(), "detail page loaded");
        *self.model.write() = Some(DetailViewModel {
            post,
            seed: related.seed_token(),
            more_posts: related.results,
        });
        Ok(())
    }
}

impl<F: PostFeed, H: BrowserHistory> DetailPresentation for DetailPage<F, H> {
    fn kind(&self) -> PresentationKind {
        PresentationKind::Page
    }

    fn is_open(&self) -> bool {
        self.model.read().is_some()
    }

    fn close(&self) {
        *self.model.write() = None;
        self.ctx.store.handle_go_back();
    }

    fn view(&self) -> Option<DetailViewModel> {
        self.model.read().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::PresentationContext;
    use lacquer_core::{AppSettings, NavigationStore, PaginatedPosts, Post, ViewState};

    use std::collections::HashMap;
    use std::future::Future;
    use std::sync::Arc;

    fn post(id: u64) -> Post {
        Post {
            id,
            title: format!("post {}", id),
            image_url: String::new(),
            width: 1,
            height: 1,
            tags: Default::default(),
            try_on_image_url: String::new(),
        }
    }

    #[derive(Default)]
    struct StubFeed {
        related: HashMap<u64, PaginatedPosts>,
    }

    impl PostFeed for StubFeed {
        fn fetch_post(&self, id: u64) -> impl Future<Output = Result<Post, FetchError>> + Send {
            let result = self
                .related
                .contains_key(&id)
                .then(|| post(id))
                .ok_or(FetchError::Status { code: 404 });
            async move { result }
        }

        fn fetch_related(
            &self,
            id: u64,
        ) -> impl Future<Output = Result<PaginatedPosts, FetchError>> + Send {
            let result = self
                .related
                .get(&id)
                .cloned()
                .ok_or(FetchError::Status { code: 404 });
            async move { result }
        }
    }

    struct NullHistory;

    impl BrowserHistory for NullHistory {
        fn push(&self, _address: &str) {}
        fn back(&self) {}
    }

    fn page_for(related: HashMap<u64, PaginatedPosts>) -> DetailPage<StubFeed, NullHistory> {
        let store = Arc::new(NavigationStore::new(StubFeed { related }, NullHistory));
        store.initialize_feed(ViewState::empty_explore());
        let ctx = PresentationContext::new(
            &store,
            Arc::new(parking_lot::RwLock::new(AppSettings::default())),
        );
        DetailPage::new(ctx)
    }

    #[tokio::test]
    async fn test_load_populates_view_model() {
        let mut related = HashMap::new();
        related.insert(
            42,
            PaginatedPosts {
                seed: Some(11),
                results: vec![post(7), post(8)],
            },
        );
        let page = page_for(related);
        assert!(!page.is_open());

        page.load(42).await.unwrap();

        assert!(page.is_open());
        let view = page.view().unwrap();
        assert_eq!(view.post.id, 42);
        assert_eq!(view.more_posts.len(), 2);
        assert_eq!(view.seed, "11");
    }

    #[tokio::test]
    async fn test_failed_load_leaves_page_empty() {
        let page = page_for(HashMap::new());

        let err = page.load(42).await.unwrap_err();
        assert!(matches!(err, FetchError::Status { code: 404 }));
        assert!(!page.is_open());
        assert_eq!(page.view(), None);
    }

    #[tokio::test]
    async fn test_close_clears_model_and_goes_back() {
        let mut related = HashMap::new();
        related.insert(42, PaginatedPosts::default());
        let page = page_for(related);
        page.load(42).await.unwrap();

        page.close();

        assert!(!page.is_open());
        // Back at the root this is the reset branch of go-back
        assert_eq!(page.ctx.store.current_view().unwrap(), ViewState::empty_explore());
    }
}
