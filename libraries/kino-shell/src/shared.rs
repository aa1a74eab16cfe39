//! Shared coordinator handle
//!
//! Wraps the coordinator for use from callbacks and timer tasks. The
//! in-progress token lives outside the lock, so a re-entrant update, tab
//! switch, or callback registration issued from inside a running pipeline
//! is rejected up front instead of deadlocking on the mutex.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;
use tokio::task::JoinHandle;
use tokio::time::Duration;
use tracing::{trace, warn};

use crate::coordinator::TabUpdateCoordinator;
use crate::tabs::{TabId, UpdateCallbacks};

/// Cloneable handle to a [`TabUpdateCoordinator`]
///
/// Every mutating operation checks the in-progress token before taking the
/// lock: anything issued from *within* a running pipeline is rejected with a
/// trace rather than deadlocking. With no pipeline running, concurrent
/// callers serialize on the mutex and never interleave.
#[derive(Clone)]
pub struct SharedTabCoordinator {
    inner: Arc<Mutex<TabUpdateCoordinator>>,
    // Mirror of the coordinator's current tab, readable without the
    // pipeline lock. All writes go through `switch_tab`.
    current: Arc<Mutex<TabId>>,
    updating: Arc<AtomicBool>,
    pending_delayed: Arc<Mutex<Option<JoinHandle<()>>>>,
}

impl SharedTabCoordinator {
    /// Wrap a coordinator into a shared handle
    pub fn new(coordinator: TabUpdateCoordinator) -> Self {
        let updating = coordinator.guard_flag();
        let current = Arc::new(Mutex::new(coordinator.current_tab()));
        Self {
            inner: Arc::new(Mutex::new(coordinator)),
            current,
            updating,
            pending_delayed: Arc::new(Mutex::new(None)),
        }
    }

    /// See [`TabUpdateCoordinator::switch_tab`]
    ///
    /// Rejected with a trace while a pipeline is running, including when
    /// called from one of its own callbacks.
    pub fn switch_tab(&self, tab: TabId) {
        if self.updating.load(Ordering::Acquire) {
            warn!(%tab, "update in progress, skipping tab switch");
            return;
        }
        self.inner.lock().switch_tab(tab);
        *self.current.lock() = tab;
    }

    /// See [`TabUpdateCoordinator::set_callbacks`]
    ///
    /// Rejected with a trace while a pipeline is running; a tab's triple
    /// cannot be swapped out from under the pipeline that is driving it.
    pub fn set_callbacks(&self, tab: TabId, callbacks: UpdateCallbacks) {
        if self.updating.load(Ordering::Acquire) {
            warn!(%tab, "update in progress, skipping callback registration");
            return;
        }
        self.inner.lock().set_callbacks(tab, callbacks);
    }

    /// Currently selected tab
    ///
    /// Safe to call from inside a pipeline callback.
    pub fn current_tab(&self) -> TabId {
        *self.current.lock()
    }

    /// Whether an update pipeline is running right now
    pub fn is_updating(&self) -> bool {
        self.updating.load(Ordering::Acquire)
    }

    /// Run the update pipeline for `action`
    ///
    /// Rejected with a trace when a pipeline is already in progress; the
    /// check happens before taking the lock so re-entrant requests from
    /// callbacks cannot deadlock.
    pub fn request_update(&self, action: &str) {
        if self.updating.load(Ordering::Acquire) {
            warn!(action, "update in progress, skipping request");
            return;
        }
        self.inner.lock().request_update(action);
    }

    /// Run the update pipeline with the default action
    pub fn request_update_default(&self) {
        self.request_update(crate::coordinator::DEFAULT_ACTION);
    }

    /// Schedule `request_update("delayed")` to run after `delay`
    ///
    /// Non-blocking: the wait runs on a timer task. At most one delayed
    /// update is outstanding; scheduling a new one cancels the pending one.
    /// When it fires it is subject to the same guard as any other update.
    pub fn request_delayed_update(&self, delay: Duration) {
        let mut pending = self.pending_delayed.lock();
        if let Some(previous) = pending.take() {
            previous.abort();
            trace!("pending delayed update cancelled");
        }

        trace!(delay_ms = delay.as_millis() as u64, "scheduling delayed update");
        let this = self.clone();
        *pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            this.request_update("delayed");
        }));
    }

    /// Cancel a pending delayed update, if any
    pub fn cancel_delayed_update(&self) {
        if let Some(previous) = self.pending_delayed.lock().take() {
            previous.abort();
            trace!("delayed update abandoned");
        }
    }
}
