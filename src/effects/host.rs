//! Boundary to the document hosting the site.

use crate::core::ScrollBehavior;
use thiserror::Error;

/// Errors reported by a host while performing a scroll side effect.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum HostError {
    #[error("Scroll reset failed: {0}")]
    Scroll(String),

    #[error("Could not lock document scroll: {0}")]
    Lock(String),

    #[error("Could not unlock document scroll: {0}")]
    Unlock(String),
}

/// Document operations the site needs from its environment.
///
/// Hosts are cheap handles (a window reference, a channel, a shared
/// recorder) and are cloned into effects and scroll-lock guards.
pub trait ScrollHost: Clone + Send + Sync + 'static {
    /// Move the viewport to the top of the document.
    fn scroll_to_top(&self, behavior: ScrollBehavior) -> Result<(), HostError>;

    /// Disable scrolling of the document body.
    fn lock_scroll(&self) -> Result<(), HostError>;

    /// Restore scrolling of the document body.
    fn unlock_scroll(&self) -> Result<(), HostError>;
}
