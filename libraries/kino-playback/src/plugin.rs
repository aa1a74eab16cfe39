//! Player plugins
//!
//! Plugins observe the active engine's state stream alongside the progress
//! sink. They are installed on the switcher and survive engine switches.

use kino_core::PlayerState;

/// Observer plugged into the playback state dispatch
///
/// Plugins handle their own failures; a plugin must not panic to signal an
/// error, since dispatch runs on the shared observer task.
pub trait PlayerPlugin: Send {
    /// Called once when the plugin is added
    fn on_install(&mut self) {}

    /// Called for every state emission of the active engine
    fn on_state_changed(&mut self, state: &PlayerState);

    /// Called when the plugin is removed or the switcher is dropped
    fn on_uninstall(&mut self) {}
}
