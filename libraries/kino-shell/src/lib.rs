//! Kino Shell
//!
//! Update coordination for a two-tab shell UI. A single coordinator routes
//! every update request through the active tab's callback pipeline
//! (pre -> custom -> refresh -> repaint -> post) and guards against
//! re-entrant updates with a token that is released on every exit path.
//!
//! # Example
//!
//! ```rust
//! use kino_shell::{TabId, TabUpdateCoordinator, TracingRenderer, UpdateCallbacks};
//!
//! let mut coordinator = TabUpdateCoordinator::new(Box::new(TracingRenderer));
//! coordinator.set_callbacks(
//!     TabId::TabA,
//!     UpdateCallbacks::new().with_pre(|| println!("saving state")),
//! );
//! coordinator.switch_tab(TabId::TabA);
//! coordinator.request_update("data-refresh");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod coordinator;
mod renderer;
mod shared;
mod tabs;

// Public exports
pub use coordinator::{TabUpdateCoordinator, DEFAULT_ACTION};
pub use renderer::{TabRenderer, TracingRenderer};
pub use shared::SharedTabCoordinator;
pub use tabs::{TabId, UpdateCallback, UpdateCallbacks};
