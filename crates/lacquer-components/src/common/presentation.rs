use std::sync::Arc;

use parking_lot::RwLock;

use lacquer_core::{
    AppSettings, BrowserHistory, NavEvent, NavigationStore, PostFeed,
};

use crate::detail::DetailViewModel;

/// Context provided to all presentations
pub struct PresentationContext<F, H> {
    /// Shared navigation store
    pub store: Arc<NavigationStore<F, H>>,
    /// Event receiver for this presentation
    pub event_rx: async_channel::Receiver<NavEvent>,
    /// Shared configuration
    pub settings: Arc<RwLock<AppSettings>>,
}

impl<F: PostFeed, H: BrowserHistory> PresentationContext<F, H> {
    /// Create a new context for a presentation
    pub fn new(store: &Arc<NavigationStore<F, H>>, settings: Arc<RwLock<AppSettings>>) -> Self {
        Self {
            store: store.clone(),
            event_rx: store.subscribe(),
            settings,
        }
    }

    /// Wait for the next navigation event
    pub async fn next_event(&mut self) -> Option<NavEvent> {
        self.event_rx.recv().await.ok()
    }

    /// Get current settings
    pub fn settings(&self) -> AppSettings {
        self.settings.read().clone()
    }
}

impl<F, H> Clone for PresentationContext<F, H> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            event_rx: self.event_rx.clone(),
            settings: self.settings.clone(),
        }
    }
}

/// How a detail view is being presented
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresentationKind {
    /// Standalone addressed page
    Page,
    /// Overlay intercepting navigation from the feed
    Modal,
}

/// Capability shared by the two presentations of the detail route.
///
/// The same view is reachable as a standalone page and as an overlay; both
/// must close through the store's single go-back path so the two modes are
/// indistinguishable from the stack's perspective.
pub trait DetailPresentation {
    /// Which presentation mode this is
    fn kind(&self) -> PresentationKind;

    /// Whether a detail view is currently shown
    fn is_open(&self) -> bool;

    /// Close the view, popping the navigation stack
    fn close(&self);

    /// What the host UI should render, if anything
    fn view(&self) -> Option<DetailViewModel>;

    /// React to a navigation event from the store
    fn handle_event(&self, _event: &NavEvent) {}
}
