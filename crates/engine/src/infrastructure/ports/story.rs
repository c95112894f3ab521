//! Read-only story graph access.

use storyweb_domain::{StoryGraph, StoryNode};

/// Lookup of story nodes by id.
///
/// Implementations must be safe for unlimited concurrent readers and must not
/// treat an unknown id as an error.
#[cfg_attr(test, mockall::automock)]
pub trait StoryGraphPort: Send + Sync {
    /// Exact-match lookup; `None` for unknown ids.
    fn node(&self, id: &str) -> Option<StoryNode>;
}

impl StoryGraphPort for StoryGraph {
    fn node(&self, id: &str) -> Option<StoryNode> {
        self.get(id).cloned()
    }
}
