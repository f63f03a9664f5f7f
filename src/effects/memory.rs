//! In-memory host for headless rendering and tests.

use super::host::{HostError, ScrollHost};
use crate::core::ScrollBehavior;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// A host operation that completed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HostCall {
    ScrollToTop(ScrollBehavior),
    Lock,
    Unlock,
}

#[derive(Debug, Default)]
struct Document {
    calls: Vec<HostCall>,
    locked: bool,
}

/// Host that records every operation instead of touching a real document.
///
/// Clones share the same record.
#[derive(Clone, Debug, Default)]
pub struct MemoryHost {
    document: Arc<Mutex<Document>>,
    fail_scrolls: Arc<AtomicBool>,
    fail_locks: Arc<AtomicBool>,
}

impl MemoryHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make subsequent scroll resets fail.
    pub fn fail_scrolls(&self, fail: bool) {
        self.fail_scrolls.store(fail, Ordering::SeqCst);
    }

    /// Make subsequent lock attempts fail.
    pub fn fail_locks(&self, fail: bool) {
        self.fail_locks.store(fail, Ordering::SeqCst);
    }

    pub fn is_scroll_locked(&self) -> bool {
        self.document().locked
    }

    pub fn calls(&self) -> Vec<HostCall> {
        self.document().calls.clone()
    }

    pub fn scroll_resets(&self) -> usize {
        self.document()
            .calls
            .iter()
            .filter(|call| matches!(call, HostCall::ScrollToTop(_)))
            .count()
    }

    fn document(&self) -> MutexGuard<'_, Document> {
        self.document.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl ScrollHost for MemoryHost {
    fn scroll_to_top(&self, behavior: ScrollBehavior) -> Result<(), HostError> {
        if self.fail_scrolls.load(Ordering::SeqCst) {
            return Err(HostError::Scroll("viewport unavailable".to_string()));
        }
        self.document().calls.push(HostCall::ScrollToTop(behavior));
        Ok(())
    }

    fn lock_scroll(&self) -> Result<(), HostError> {
        if self.fail_locks.load(Ordering::SeqCst) {
            return Err(HostError::Lock("body style is read-only".to_string()));
        }
        let mut document = self.document();
        document.locked = true;
        document.calls.push(HostCall::Lock);
        Ok(())
    }

    fn unlock_scroll(&self) -> Result<(), HostError> {
        let mut document = self.document();
        document.locked = false;
        document.calls.push(HostCall::Unlock);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_the_document() {
        let host = MemoryHost::new();
        let clone = host.clone();
        clone.scroll_to_top(ScrollBehavior::Smooth).unwrap();
        clone.lock_scroll().unwrap();

        assert_eq!(host.scroll_resets(), 1);
        assert!(host.is_scroll_locked());
    }

    #[test]
    fn failing_scroll_is_not_recorded() {
        let host = MemoryHost::new();
        host.fail_scrolls(true);
        assert!(host.scroll_to_top(ScrollBehavior::Instant).is_err());
        assert_eq!(host.scroll_resets(), 0);
    }
}
