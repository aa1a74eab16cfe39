//! Tab renderer - the external-UI side-effect seam
//!
//! The coordinator never touches platform UI directly; every visible side
//! effect of tab switching and updating goes through this trait.

use tracing::debug;

use crate::tabs::TabId;

/// Consumer of tab-shell side effects
pub trait TabRenderer: Send {
    /// Hide every tab
    fn hide_all(&mut self);

    /// Show the selected tab
    fn show_tab(&mut self, tab: TabId);

    /// Refresh the given tab's components for `action`
    fn refresh(&mut self, tab: TabId, action: &str);

    /// Repaint the shell
    fn repaint(&mut self);
}

/// Renderer that traces side effects instead of drawing
pub struct TracingRenderer;

impl TabRenderer for TracingRenderer {
    fn hide_all(&mut self) {
        debug!("hiding all tabs");
    }

    fn show_tab(&mut self, tab: TabId) {
        debug!(%tab, "showing tab");
    }

    fn refresh(&mut self, tab: TabId, action: &str) {
        debug!(%tab, action, "refreshing tab components");
    }

    fn repaint(&mut self) {
        debug!("repainting shell");
    }
}
