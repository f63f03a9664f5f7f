//! Core navigation and overlay state.
//!
//! This module contains the pure functional core of the site:
//! - Page identifiers and the total page-to-view mapping
//! - The navigation store and its visit history
//! - The overlay interaction controller
//! - Actions, commands and the reducer tying them together
//!
//! All logic in this module is pure (no side effects), following
//! the "pure core, imperative shell" philosophy. Side effects leave
//! the core as [`Command`] values.

mod action;
mod history;
mod navigation;
mod overlay;
mod page;
mod state;
mod view;

pub use action::{reduce, Action, Command, Snapshot, UiState};
pub use history::{Visit, VisitHistory, DEFAULT_HISTORY_LIMIT};
pub use navigation::{NavigationStore, ScrollBehavior, ScrollRequest};
pub use overlay::{MarkerId, MenuChange, MenuState, OverlayController};
pub use page::{Page, UnknownPage};
pub use state::State;
pub use view::{select_view, select_view_slug, Article, CorporateSection, ProjectSite, View};
