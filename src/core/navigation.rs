//! Navigation store: the single source of truth for the current page.

use super::history::{VisitHistory, DEFAULT_HISTORY_LIMIT};
use super::page::Page;
use super::view::{select_view, View};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// How the viewport returns to the top after a navigation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrollBehavior {
    #[default]
    Smooth,
    Instant,
}

/// Request to reset the viewport to the top.
///
/// Every transition yields exactly one of these, whether or not the
/// target differs from the current page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[must_use = "the scroll reset must be handed to the host"]
pub struct ScrollRequest {
    pub behavior: ScrollBehavior,
}

/// Holds the current page and the visits that led to it.
///
/// # Example
///
/// ```rust
/// use waymark::core::{NavigationStore, ScrollBehavior};
/// use waymark::Page;
///
/// let mut store = NavigationStore::new();
/// assert_eq!(store.current(), Page::Home);
///
/// let request = store.transition(Page::Board);
/// assert_eq!(store.current(), Page::Board);
/// assert_eq!(request.behavior, ScrollBehavior::Smooth);
///
/// // Re-navigating to the same page still scrolls to the top.
/// let again = store.transition(Page::Board);
/// assert_eq!(again.behavior, ScrollBehavior::Smooth);
/// ```
#[derive(Clone, Debug)]
pub struct NavigationStore {
    current: Page,
    history: VisitHistory<Page>,
}

impl Default for NavigationStore {
    fn default() -> Self {
        Self::new()
    }
}

impl NavigationStore {
    /// Create a store showing the home page.
    pub fn new() -> Self {
        Self::with_history_limit(DEFAULT_HISTORY_LIMIT)
    }

    pub fn with_history_limit(limit: usize) -> Self {
        Self {
            current: Page::Home,
            history: VisitHistory::new(limit),
        }
    }

    /// Make `target` the current page, scrolling smoothly to the top.
    pub fn transition(&mut self, target: Page) -> ScrollRequest {
        self.transition_with(target, ScrollBehavior::Smooth)
    }

    /// Make `target` the current page with an explicit scroll behaviour.
    ///
    /// Cannot fail. A later call simply supersedes an earlier one.
    pub fn transition_with(&mut self, target: Page, behavior: ScrollBehavior) -> ScrollRequest {
        let from = self.current;
        self.current = target;
        self.history.record(from, target);
        debug!(from = %from, to = %target, "page transition");
        ScrollRequest { behavior }
    }

    pub fn current(&self) -> Page {
        self.current
    }

    /// View for the current page.
    pub fn view(&self) -> View {
        select_view(self.current)
    }

    pub fn history(&self) -> &VisitHistory<Page> {
        &self.history
    }

    /// How many retained visits entered `page`.
    pub fn visits_to(&self, page: Page) -> usize {
        self.history.count_to(&page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::view::{CorporateSection, ProjectSite};

    #[test]
    fn starts_on_home() {
        let store = NavigationStore::new();
        assert_eq!(store.current(), Page::Home);
        assert_eq!(store.view(), View::Home);
        assert!(store.history().is_empty());
    }

    #[test]
    fn transition_sets_current_page() {
        let mut store = NavigationStore::new();
        let _ = store.transition(Page::ProjectsW2);
        assert_eq!(store.current(), Page::ProjectsW2);
        assert_eq!(store.view(), View::Project(ProjectSite::W2));
    }

    #[test]
    fn same_page_transition_still_requests_scroll() {
        let mut store = NavigationStore::new();
        let first = store.transition(Page::Home);
        let second = store.transition(Page::Home);

        assert_eq!(first, ScrollRequest { behavior: ScrollBehavior::Smooth });
        assert_eq!(first, second);
        assert_eq!(store.visits_to(Page::Home), 2);
    }

    #[test]
    fn explicit_behavior_is_carried() {
        let mut store = NavigationStore::new();
        let request = store.transition_with(Page::Management, ScrollBehavior::Instant);
        assert_eq!(request.behavior, ScrollBehavior::Instant);
        assert_eq!(store.view(), View::Corporate(CorporateSection::Management));
    }

    #[test]
    fn last_transition_wins() {
        let mut store = NavigationStore::new();
        let _ = store.transition(Page::Investors);
        let _ = store.transition(Page::Contact);
        assert_eq!(store.current(), Page::Contact);
        assert_eq!(
            store.history().path(),
            vec![&Page::Home, &Page::Investors, &Page::Contact]
        );
    }

    #[test]
    fn scroll_behavior_serializes_lowercase() {
        let json = serde_json::to_string(&ScrollBehavior::Smooth).unwrap();
        assert_eq!(json, "\"smooth\"");
    }
}
