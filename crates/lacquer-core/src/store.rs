use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::RwLock;
use tracing::{debug, error, info};

use crate::api::{Post, PostFeed};
use crate::error::FetchError;
use crate::history::{post_address, BrowserHistory, ROOT_ADDRESS};
use crate::messages::NavEvent;
use crate::state::{NavigationStack, ViewState};

/// Session-wide navigation store.
///
/// Owns the view stack and keeps it aligned with the native history
/// collaborator: one history push per successful drill-in, one native back
/// per pop, an explicit address rewrite at the root-reset boundary. Views
/// read snapshots and call the mutation entry points; no caller ever holds
/// a mutable handle to the underlying stack.
///
/// Mutations are cheap synchronous critical sections; `handle_post_click`
/// is the only suspension point and takes the lock only after its fetch has
/// fully succeeded, so a failed fetch can never leave a partial entry.
pub struct NavigationStore<F, H> {
    stack: RwLock<NavigationStack>,
    feed: F,
    history: H,
    /// Set when we initiate a native back ourselves, so the resulting
    /// out-of-band back notification is not applied a second time
    suppress_next_back: AtomicBool,
    event_tx: async_channel::Sender<NavEvent>,
    event_rx: async_channel::Receiver<NavEvent>,
}

enum BackOutcome {
    Reset,
    Popped(usize),
}

impl<F: PostFeed, H: BrowserHistory> NavigationStore<F, H> {
    pub fn new(feed: F, history: H) -> Self {
        let (event_tx, event_rx) = async_channel::bounded::<NavEvent>(64);

        Self {
            stack: RwLock::new(NavigationStack::new()),
            feed,
            history,
            suppress_next_back: AtomicBool::new(false),
            event_tx,
            event_rx,
        }
    }

    /// Install the root view, discarding any prior stack entirely. Does not
    /// touch browser history.
    pub fn initialize_feed(&self, initial: ViewState) {
        self.stack.write().initialize(initial);
        info!("feed initialized");
        self.broadcast(NavEvent::FeedInitialized);
    }

    /// Drill into a post: fetch its related batch, then append a detail
    /// view and record a matching history entry.
    ///
    /// On failure the stack and history are left untouched and the error is
    /// returned. Two rapid clicks on the same post produce two independent
    /// entries; two clicks in flight at once both append, in completion
    /// order.
    pub async fn handle_post_click(&self, post: &Post) -> Result<(), FetchError> {
        let batch = match self.feed.fetch_related(post.id).await {
            Ok(batch) => batch,
            Err(e) => {
                error!(post_id = post.id, error = %e, "failed to fetch more posts");
                self.broadcast(NavEvent::FetchFailed { post_id: post.id });
                return Err(e);
            }
        };

        let view = ViewState::Detail {
            parent: post.clone(),
            seed: batch.seed_token(),
            posts: batch.results,
        };
        let depth = self.stack.write().push(view);
        self.history.push(&post_address(post.id));

        debug!(post_id = post.id, depth, "pushed detail view");
        self.broadcast(NavEvent::ViewPushed {
            depth,
            parent_id: post.id,
        });
        Ok(())
    }

    /// Go back one view. At depth > 1 this pops the top entry and delegates
    /// the navigation to the native back mechanism; at the root it resets
    /// the stack to the canonical empty explore view and rewrites the
    /// address to `/` instead, since there is nothing earlier in the
    /// session to return to.
    pub fn handle_go_back(&self) {
        self.go_back_inner(true);
    }

    /// Translation point for an out-of-band native back (the user pressed
    /// the browser's back button). The browser has already navigated, so
    /// only the stack catches up; a back we initiated ourselves is consumed
    /// by the suppress guard.
    pub fn handle_history_back(&self) {
        if self.suppress_next_back.swap(false, Ordering::SeqCst) {
            return;
        }
        self.go_back_inner(false);
    }

    fn go_back_inner(&self, delegate_native_back: bool) {
        let outcome = {
            let mut stack = self.stack.write();
            if stack.depth() <= 1 {
                stack.reset_root();
                BackOutcome::Reset
            } else {
                stack.pop();
                BackOutcome::Popped(stack.depth())
            }
        };

        match outcome {
            BackOutcome::Reset => {
                self.history.push(ROOT_ADDRESS);
                debug!("reset to root explore view");
                self.broadcast(NavEvent::FeedReset);
            }
            BackOutcome::Popped(depth) => {
                if delegate_native_back {
                    // Guard must be set before the native back so a host
                    // that echoes it synchronously sees it.
                    self.suppress_next_back.store(true, Ordering::SeqCst);
                    self.history.back();
                }
                debug!(depth, "popped detail view");
                self.broadcast(NavEvent::ViewPopped { depth });
            }
        }
    }

    /// Current stack depth; 0 before `initialize_feed`
    pub fn depth(&self) -> usize {
        self.stack.read().depth()
    }

    /// Snapshot of the top-of-stack view
    pub fn current_view(&self) -> Option<ViewState> {
        self.stack.read().top().cloned()
    }

    /// Snapshot of the whole stack, root first
    pub fn stack_snapshot(&self) -> Vec<ViewState> {
        self.stack.read().entries().to_vec()
    }

    /// Get a receiver for navigation events
    pub fn subscribe(&self) -> async_channel::Receiver<NavEvent> {
        self.event_rx.clone()
    }

    /// The content-fetch collaborator, for hosts that address content
    /// directly (the standalone detail page)
    pub fn feed(&self) -> &F {
        &self.feed
    }

    /// The native history collaborator, for hosts wiring up the
    /// out-of-band back signal
    pub fn history(&self) -> &H {
        &self.history
    }

    fn broadcast(&self, event: NavEvent) {
        // Best effort: a saturated or closed channel never blocks or fails
        // a mutation.
        let _ = self.event_tx.try_send(event);
    }
}
