//! Tab identity and per-tab callback triples

/// Which tab's producer is bound to the shared updater
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TabId {
    /// First tab
    TabA,
    /// Second tab
    TabB,
}

impl TabId {
    /// Human-readable tab name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TabA => "tab-a",
            Self::TabB => "tab-b",
        }
    }
}

impl std::fmt::Display for TabId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A callback stored in a tab's triple
pub type UpdateCallback = Box<dyn FnMut() + Send>;

/// Per-tab triple of optional update callbacks
///
/// Each tab producer registers its own triple; the coordinator reads the
/// triple of whichever tab is current when an update runs.
#[derive(Default)]
pub struct UpdateCallbacks {
    /// Runs before the core update
    pub pre: Option<UpdateCallback>,
    /// Tab-specific core update logic
    pub custom: Option<UpdateCallback>,
    /// Runs after the core update
    pub post: Option<UpdateCallback>,
}

impl UpdateCallbacks {
    /// Empty triple
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the pre-update callback
    pub fn with_pre(mut self, callback: impl FnMut() + Send + 'static) -> Self {
        self.pre = Some(Box::new(callback));
        self
    }

    /// Set the custom update callback
    pub fn with_custom(mut self, callback: impl FnMut() + Send + 'static) -> Self {
        self.custom = Some(Box::new(callback));
        self
    }

    /// Set the post-update callback
    pub fn with_post(mut self, callback: impl FnMut() + Send + 'static) -> Self {
        self.post = Some(Box::new(callback));
        self
    }
}

impl std::fmt::Debug for UpdateCallbacks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UpdateCallbacks")
            .field("pre", &self.pre.is_some())
            .field("custom", &self.custom.is_some())
            .field("post", &self.post.is_some())
            .finish()
    }
}
