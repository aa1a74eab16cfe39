//! Tab update coordinator - core pipeline
//!
//! Routes one update request at a time through the current tab's callback
//! pipeline. The in-progress token is released on every exit path, callback
//! panics included.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tracing::{debug, trace, warn};

use crate::renderer::TabRenderer;
use crate::tabs::{TabId, UpdateCallbacks};

/// Action value used when an update request carries none
pub const DEFAULT_ACTION: &str = "default";

/// Scoped acquisition of the update-in-progress token
///
/// Dropping the guard releases the token, so it is reset even when a
/// callback panics mid-pipeline.
struct UpdateGuard(Arc<AtomicBool>);

impl UpdateGuard {
    fn try_acquire(flag: &Arc<AtomicBool>) -> Option<Self> {
        if flag.swap(true, Ordering::AcqRel) {
            None
        } else {
            Some(Self(Arc::clone(flag)))
        }
    }
}

impl Drop for UpdateGuard {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// Tab update coordinator
///
/// State machine: Idle -> Updating -> Idle. `Updating` is entered only from
/// `Idle`; a request arriving while `Updating` is rejected with a trace, not
/// queued and not retried.
pub struct TabUpdateCoordinator {
    renderer: Box<dyn TabRenderer>,
    current: TabId,
    tab_a: UpdateCallbacks,
    tab_b: UpdateCallbacks,
    updating: Arc<AtomicBool>,
}

impl TabUpdateCoordinator {
    /// Coordinator starting on [`TabId::TabA`] with empty callback triples
    pub fn new(renderer: Box<dyn TabRenderer>) -> Self {
        Self {
            renderer,
            current: TabId::TabA,
            tab_a: UpdateCallbacks::new(),
            tab_b: UpdateCallbacks::new(),
            updating: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Register a tab producer's callback triple
    pub fn set_callbacks(&mut self, tab: TabId, callbacks: UpdateCallbacks) {
        match tab {
            TabId::TabA => self.tab_a = callbacks,
            TabId::TabB => self.tab_b = callbacks,
        }
    }

    /// Switch the current tab
    ///
    /// Drives the hide-all / show-selected side effects and implicitly
    /// rebinds the active callback triple: the pipeline always reads the
    /// current tab's triple.
    pub fn switch_tab(&mut self, tab: TabId) {
        debug!(%tab, "switching tab");
        self.current = tab;
        self.renderer.hide_all();
        self.renderer.show_tab(tab);
    }

    /// Currently selected tab
    pub fn current_tab(&self) -> TabId {
        self.current
    }

    /// Whether an update pipeline is running right now
    pub fn is_updating(&self) -> bool {
        self.updating.load(Ordering::Acquire)
    }

    /// Run the update pipeline for `action`
    ///
    /// Rejected with a trace if an update is already in progress. Otherwise:
    /// pre -> custom -> refresh-current-tab -> repaint -> post, with the
    /// in-progress token released afterwards no matter how the pipeline
    /// exits.
    pub fn request_update(&mut self, action: &str) {
        let Some(_guard) = UpdateGuard::try_acquire(&self.updating) else {
            warn!(tab = %self.current, action, "update in progress, skipping request");
            return;
        };

        debug!(tab = %self.current, action, "update requested");

        if let Some(pre) = self.active_callbacks_mut().pre.as_mut() {
            trace!("running pre-update callback");
            pre();
        }
        if let Some(custom) = self.active_callbacks_mut().custom.as_mut() {
            trace!("running custom update callback");
            custom();
        }

        self.refresh_current_tab(action);
        self.renderer.repaint();

        if let Some(post) = self.active_callbacks_mut().post.as_mut() {
            trace!("running post-update callback");
            post();
        }
    }

    /// Run the update pipeline with the default action
    pub fn request_update_default(&mut self) {
        self.request_update(DEFAULT_ACTION);
    }

    /// In-progress token, shared with [`crate::SharedTabCoordinator`]
    pub(crate) fn guard_flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.updating)
    }

    /// Callback triple of the current tab
    fn active_callbacks_mut(&mut self) -> &mut UpdateCallbacks {
        match self.current {
            TabId::TabA => &mut self.tab_a,
            TabId::TabB => &mut self.tab_b,
        }
    }

    /// Fixed per-tab refresh logic, dispatching on tab identity and action
    fn refresh_current_tab(&mut self, action: &str) {
        debug!(tab = %self.current, action, "refreshing current tab");
        match (self.current, action) {
            (TabId::TabA, "data-refresh") => debug!("tab-a: running data refresh"),
            (TabId::TabB, "list-update") => debug!("tab-b: running list update"),
            _ => {}
        }
        self.renderer.refresh(self.current, action);
    }
}
