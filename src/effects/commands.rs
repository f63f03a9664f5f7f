//! Effects performing the side effects requested by the core.

use super::host::{HostError, ScrollHost};
use super::lock::ScrollLock;
use crate::core::ScrollBehavior;
use stillwater::effect::{BoxedEffect, Effect};
use stillwater::prelude::*;

/// Reset the host viewport to the top.
pub fn scroll_to_top<H: ScrollHost>(behavior: ScrollBehavior) -> BoxedEffect<(), HostError, H> {
    from_fn(move |host: &H| host.scroll_to_top(behavior)).boxed()
}

/// Lock document scrolling, yielding the guard that will unlock it.
pub fn acquire_scroll_lock<H: ScrollHost>() -> BoxedEffect<ScrollLock<H>, HostError, H> {
    from_fn(|host: &H| ScrollLock::acquire(host.clone())).boxed()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effects::{HostCall, MemoryHost};

    #[tokio::test]
    async fn scroll_effect_runs_against_host() {
        let host = MemoryHost::new();
        scroll_to_top::<MemoryHost>(ScrollBehavior::Smooth)
            .run(&host)
            .await
            .unwrap();

        assert_eq!(host.calls(), vec![HostCall::ScrollToTop(ScrollBehavior::Smooth)]);
    }

    #[tokio::test]
    async fn scroll_effect_surfaces_host_failure() {
        let host = MemoryHost::new();
        host.fail_scrolls(true);
        let result = scroll_to_top::<MemoryHost>(ScrollBehavior::Smooth)
            .run(&host)
            .await;

        assert!(matches!(result, Err(HostError::Scroll(_))));
    }

    #[tokio::test]
    async fn lock_effect_yields_guard() {
        let host = MemoryHost::new();
        let lock = acquire_scroll_lock::<MemoryHost>().run(&host).await.unwrap();
        assert!(host.is_scroll_locked());

        drop(lock);
        assert!(!host.is_scroll_locked());
    }
}
