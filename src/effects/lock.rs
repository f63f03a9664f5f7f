//! Scoped document scroll lock.

use super::host::{HostError, ScrollHost};
use std::fmt;
use tracing::{error, info};

/// Guard holding the document scroll lock.
///
/// Acquiring locks scrolling on the host; dropping the guard unlocks it,
/// exactly once, on every path: an explicit release, a menu close, or the
/// owning site being torn down while the menu is still open.
///
/// # Example
///
/// ```rust
/// use waymark::effects::{MemoryHost, ScrollLock};
///
/// let host = MemoryHost::new();
/// {
///     let _lock = ScrollLock::acquire(host.clone()).unwrap();
///     assert!(host.is_scroll_locked());
/// }
/// assert!(!host.is_scroll_locked());
/// ```
pub struct ScrollLock<H: ScrollHost> {
    host: H,
}

impl<H: ScrollHost> ScrollLock<H> {
    pub fn acquire(host: H) -> Result<Self, HostError> {
        host.lock_scroll()?;
        info!("document scroll locked");
        Ok(Self { host })
    }

    /// Release the lock now rather than at end of scope.
    pub fn release(self) {
        drop(self);
    }
}

impl<H: ScrollHost> Drop for ScrollLock<H> {
    fn drop(&mut self) {
        match self.host.unlock_scroll() {
            Ok(()) => info!("document scroll unlocked"),
            Err(err) => error!(%err, "failed to unlock document scroll"),
        }
    }
}

impl<H: ScrollHost> fmt::Debug for ScrollLock<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrollLock").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effects::{HostCall, MemoryHost};

    #[test]
    fn acquire_locks_and_drop_unlocks() {
        let host = MemoryHost::new();
        let lock = ScrollLock::acquire(host.clone()).unwrap();
        assert!(host.is_scroll_locked());

        lock.release();
        assert!(!host.is_scroll_locked());
        assert_eq!(host.calls(), vec![HostCall::Lock, HostCall::Unlock]);
    }

    #[test]
    fn failed_acquire_leaves_nothing_to_release() {
        let host = MemoryHost::new();
        host.fail_locks(true);

        let result = ScrollLock::acquire(host.clone());
        assert!(matches!(result, Err(HostError::Lock(_))));
        assert!(!host.is_scroll_locked());
        assert!(host.calls().is_empty());
    }

    #[test]
    fn unlock_runs_during_unwinding() {
        let host = MemoryHost::new();
        let inner = host.clone();

        let outcome = std::panic::catch_unwind(move || {
            let _lock = ScrollLock::acquire(inner).unwrap();
            panic!("render failed");
        });

        assert!(outcome.is_err());
        assert!(!host.is_scroll_locked());
    }
}
