//! Bounded record of page visits over a session.
//!
//! Every navigation is recorded, including re-navigation to the page
//! already shown. Nothing here is persisted; the history lives as long as
//! the store that owns it.

use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::VecDeque;
use std::time::Duration;

/// Default number of visits retained before the oldest are dropped.
pub const DEFAULT_HISTORY_LIMIT: usize = 64;

/// Record of a single move between two states.
///
/// # Example
///
/// ```rust
/// use waymark::core::Visit;
/// use waymark::Page;
/// use chrono::Utc;
///
/// let visit = Visit {
///     from: Page::Home,
///     to: Page::Investors,
///     at: Utc::now(),
///     sequence: 1,
/// };
/// assert!(!visit.is_reload());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Visit<S: State> {
    /// The state being left
    pub from: S,
    /// The state being entered
    pub to: S,
    /// When the move happened
    pub at: DateTime<Utc>,
    /// Monotonic position of this visit within the session, starting at 1
    pub sequence: u64,
}

impl<S: State> Visit<S> {
    /// True when the move re-entered the state it started from.
    pub fn is_reload(&self) -> bool {
        self.from == self.to
    }
}

/// Ordered, bounded history of visits.
///
/// # Example
///
/// ```rust
/// use waymark::core::VisitHistory;
/// use waymark::Page;
///
/// let mut history = VisitHistory::new(8);
/// history.record(Page::Home, Page::Board);
/// history.record(Page::Board, Page::Board);
///
/// assert_eq!(history.path(), vec![&Page::Home, &Page::Board, &Page::Board]);
/// assert_eq!(history.count_to(&Page::Board), 2);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct VisitHistory<S: State> {
    visits: VecDeque<Visit<S>>,
    #[serde(deserialize_with = "deserialize_limit")]
    limit: usize,
    recorded: u64,
}

fn deserialize_limit<'de, D: Deserializer<'de>>(deserializer: D) -> Result<usize, D::Error> {
    usize::deserialize(deserializer).map(|limit| limit.max(1))
}

impl<S: State> Default for VisitHistory<S> {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_LIMIT)
    }
}

impl<S: State> VisitHistory<S> {
    /// Create an empty history retaining at most `limit` visits.
    ///
    /// A limit of zero is treated as one.
    pub fn new(limit: usize) -> Self {
        let limit = limit.max(1);
        Self {
            visits: VecDeque::with_capacity(limit.min(DEFAULT_HISTORY_LIMIT)),
            limit,
            recorded: 0,
        }
    }

    /// Record a visit, evicting the oldest once the limit is reached.
    pub fn record(&mut self, from: S, to: S) -> &Visit<S> {
        while self.visits.len() >= self.limit {
            self.visits.pop_front();
        }
        self.recorded += 1;
        self.visits.push_back(Visit {
            from,
            to,
            at: Utc::now(),
            sequence: self.recorded,
        });
        // Just pushed, so the deque is non-empty.
        &self.visits[self.visits.len() - 1]
    }

    /// States traversed: the first retained `from`, then each `to`.
    pub fn path(&self) -> Vec<&S> {
        let mut path = Vec::with_capacity(self.visits.len() + 1);
        if let Some(first) = self.visits.front() {
            path.push(&first.from);
        }
        path.extend(self.visits.iter().map(|visit| &visit.to));
        path
    }

    /// Time between the first and last retained visit.
    pub fn duration(&self) -> Option<Duration> {
        let first = self.visits.front()?;
        let last = self.visits.back()?;
        last.at.signed_duration_since(first.at).to_std().ok()
    }

    pub fn visits(&self) -> impl ExactSizeIterator<Item = &Visit<S>> {
        self.visits.iter()
    }

    pub fn last(&self) -> Option<&Visit<S>> {
        self.visits.back()
    }

    /// Number of retained visits that entered `state`.
    pub fn count_to(&self, state: &S) -> usize {
        self.visits.iter().filter(|visit| &visit.to == state).count()
    }

    /// Total visits recorded this session, including evicted ones.
    pub fn total_recorded(&self) -> u64 {
        self.recorded
    }

    pub fn is_empty(&self) -> bool {
        self.visits.is_empty()
    }

    pub fn len(&self) -> usize {
        self.visits.len()
    }
}
