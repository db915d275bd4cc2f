use lacquer_core::{BrowserHistory, FetchError, Post, PostFeed, ViewState};
use tracing::debug;

use super::DetailViewModel;
use crate::common::{DetailPresentation, PresentationContext, PresentationKind};

/// Detail view as an overlay intercepting navigation from the feed.
///
/// The modal owns no content of its own: it renders whatever detail view is
/// on top of the stack, and closing it is exactly a go-back. Clicking a
/// related post inside the modal drills further through the same store
/// path, stacking another detail view under the same overlay.
pub struct DetailModal<F, H> {
    ctx: PresentationContext<F, H>,
}

impl<F: PostFeed, H: BrowserHistory> DetailModal<F, H> {
    pub fn new(ctx: PresentationContext<F, H>) -> Self {
        Self { ctx }
    }

    /// Drill into a related post shown inside the modal
    pub async fn handle_more_post_click(&self, post: &Post) -> Result<(), FetchError> {
        self.ctx.store.handle_post_click(post).await
    }
}

impl<F: PostFeed, H: BrowserHistory> DetailPresentation for DetailModal<F, H> {
    fn kind(&self) -> PresentationKind {
        PresentationKind::Modal
    }

    fn is_open(&self) -> bool {
        matches!(
            self.ctx.store.current_view(),
            Some(ViewState::Detail { .. })
        )
    }

    fn close(&self) {
        // Can fire while the stack is already back at the root during a
        // dialog-close transition; only pop when a detail view is showing.
        if !self.is_open() {
            return;
        }
        debug!("modal closed, going back");
        self.ctx.store.handle_go_back();
    }

    fn view(&self) -> Option<DetailViewModel> {
        match self.ctx.store.current_view()? {
            ViewState::Explore { .. } => None,
            ViewState::Detail {
                parent,
                posts,
                seed,
            } => Some(DetailViewModel {
                post: parent,
                more_posts: posts,
                seed,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::PresentationContext;
    use lacquer_core::{AppSettings, NavigationStore, PaginatedPosts};

    use parking_lot::{Mutex, RwLock};
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

    #[derive(Default)]
    struct RecordingHistory {
        backs: Mutex<usize>,
    }

    impl BrowserHistory for RecordingHistory {
        fn push(&self, _address: &str) {}

        fn back(&self) {
            *self.backs.lock() += 1;
        }
    }

    fn modal_over(
        related: HashMap<u64, PaginatedPosts>,
    ) -> DetailModal<StubFeed, RecordingHistory> {
        let store = Arc::new(NavigationStore::new(
            StubFeed { related },
            RecordingHistory::default(),
        ));
        store.initialize_feed(ViewState::empty_explore());
        let ctx = PresentationContext::new(&store, Arc::new(RwLock::new(AppSettings::default())));
        DetailModal::new(ctx)
    }

    #[tokio::test]
    async fn test_modal_mirrors_top_of_stack() {
        let mut related = HashMap::new();
        related.insert(
            42,
            PaginatedPosts {
                seed: Some(3),
                results: vec![post(7)],
            },
        );
        let modal = modal_over(related);
        assert!(!modal.is_open());
        assert_eq!(modal.view(), None);

        modal.ctx.store.handle_post_click(&post(42)).await.unwrap();

        assert!(modal.is_open());
        let view = modal.view().unwrap();
        assert_eq!(view.post.id, 42);
        assert_eq!(view.more_posts.len(), 1);
        assert_eq!(view.seed, "3");
    }

    #[tokio::test]
    async fn test_close_routes_through_go_back() {
        let mut related = HashMap::new();
        related.insert(42, PaginatedPosts::default());
        let modal = modal_over(related);
        modal.ctx.store.handle_post_click(&post(42)).await.unwrap();

        modal.close();

        assert_eq!(modal.ctx.store.depth(), 1);
        assert_eq!(*modal.ctx.store.history().backs.lock(), 1);
        modal.close();
        assert_eq!(*modal.ctx.store.history().backs.lock(), 1);
        assert!(!modal.is_open());
    }

    #[tokio::test]
    async fn test_close_over_root_does_not_reset() {
        let modal = modal_over(HashMap::new());
        modal.ctx.store.initialize_feed(ViewState::Explore {
            posts: vec![post(1)],
            seed: "abc".into(),
        });

        modal.close();

        // Root feed content untouched; no spurious reset
        assert_eq!(modal.ctx.store.current_view().unwrap().seed(), "abc");
    }

    #[tokio::test]
    async fn test_more_click_stacks_another_detail() {
        let mut related = HashMap::new();
        related.insert(42, PaginatedPosts::default());
        related.insert(7, PaginatedPosts::default());
        let modal = modal_over(related);

        modal.ctx.store.handle_post_click(&post(42)).await.unwrap();
        modal.handle_more_post_click(&post(7)).await.unwrap();

        assert_eq!(modal.ctx.store.depth(), 3);
        assert_eq!(modal.view().unwrap().post.id, 7);
    }
}
