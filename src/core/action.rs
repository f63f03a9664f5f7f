//! Actions, commands and the pure reducer over [`UiState`].
//!
//! Input handlers translate pointer, touch and scroll events into
//! [`Action`] values. [`reduce`] folds an action into the state and
//! returns the side effects the host must perform, in order, as
//! [`Command`] values. Nothing here touches a document or a runtime.

use super::navigation::{NavigationStore, ScrollBehavior};
use super::overlay::{MarkerId, MenuChange, OverlayController};
use super::page::Page;
use super::view::View;
use crate::config::SiteConfig;
use serde::{Deserialize, Serialize};

/// Everything a user can do to the page chrome.
#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    /// Go to a page from any link or button.
    Navigate(Page),
    PointerEnterMarker(MarkerId),
    PointerLeaveMarker,
    TapMarker(MarkerId),
    /// Desktop pointer entering (`Some`) or leaving (`None`) a menu section.
    HoverSection(Option<String>),
    /// Mobile accordion tap on a section with a submenu.
    ToggleSection(String),
    /// Leaf entry chosen from a menu: navigates, then closes the mobile
    /// menu and collapses its accordion.
    SelectLeaf(Page),
    OpenMenu,
    CloseMenu,
    ViewportScrolled { y: f64 },
}

/// Side effect requested by a transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", content = "behavior", rename_all = "kebab-case")]
pub enum Command {
    ScrollToTop(ScrollBehavior),
    LockScroll,
    UnlockScroll,
}

/// The whole interaction state of a session.
#[derive(Clone, Debug)]
pub struct UiState {
    pub navigation: NavigationStore,
    pub overlay: OverlayController,
    header_condensed: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self::new(&SiteConfig::default())
    }
}

impl UiState {
    pub fn new(config: &SiteConfig) -> Self {
        Self {
            navigation: NavigationStore::with_history_limit(config.history_limit),
            overlay: OverlayController::new(),
            header_condensed: false,
        }
    }

    /// Apply an action in place and return the commands it produced.
    pub fn apply(&mut self, action: Action, config: &SiteConfig) -> Vec<Command> {
        let mut commands = Vec::new();
        match action {
            Action::Navigate(page) => {
                self.navigate(page, config, &mut commands);
            }
            Action::PointerEnterMarker(marker) => self.overlay.set_active(Some(marker)),
            Action::PointerLeaveMarker => self.overlay.set_active(None),
            Action::TapMarker(marker) => self.overlay.tap(marker),
            Action::HoverSection(label) => self.overlay.hover_section(label),
            Action::ToggleSection(label) => self.overlay.toggle_section(label),
            Action::SelectLeaf(page) => {
                // Navigation first so observers of the page change already
                // see the menu closing.
                self.navigate(page, config, &mut commands);
                self.close_menu(&mut commands);
                self.overlay.collapse_sections();
            }
            Action::OpenMenu => {
                if self.overlay.open() == MenuChange::Opened {
                    commands.push(Command::LockScroll);
                }
            }
            Action::CloseMenu => self.close_menu(&mut commands),
            Action::ViewportScrolled { y } => {
                self.header_condensed = y > config.header_condense_threshold;
            }
        }
        commands
    }

    fn navigate(&mut self, page: Page, config: &SiteConfig, commands: &mut Vec<Command>) {
        let request = self
            .navigation
            .transition_with(page, config.scroll_behavior);
        commands.push(Command::ScrollToTop(request.behavior));
    }

    fn close_menu(&mut self, commands: &mut Vec<Command>) {
        if self.overlay.close() == MenuChange::Closed {
            commands.push(Command::UnlockScroll);
        }
    }

    pub fn page(&self) -> Page {
        self.navigation.current()
    }

    pub fn view(&self) -> View {
        self.navigation.view()
    }

    pub fn header_condensed(&self) -> bool {
        self.header_condensed
    }

    /// Read-only observation for the presentation layer.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            page: self.page(),
            view: self.view(),
            active_marker: self.overlay.active().cloned(),
            expanded_section: self.overlay.expanded().map(str::to_string),
            hovered_section: self.overlay.hovered().map(str::to_string),
            menu_open: self.overlay.is_menu_open(),
            header_condensed: self.header_condensed,
        }
    }
}

/// Pure form of [`UiState::apply`]: the input state is left untouched.
///
/// ```rust
/// use waymark::core::{reduce, Action, Command, ScrollBehavior, UiState};
/// use waymark::config::SiteConfig;
/// use waymark::Page;
///
/// let config = SiteConfig::default();
/// let start = UiState::new(&config);
/// let (next, commands) = reduce(&start, Action::Navigate(Page::Investors), &config);
///
/// assert_eq!(start.page(), Page::Home);
/// assert_eq!(next.page(), Page::Investors);
/// assert_eq!(commands, vec![Command::ScrollToTop(ScrollBehavior::Smooth)]);
/// ```
pub fn reduce(state: &UiState, action: Action, config: &SiteConfig) -> (UiState, Vec<Command>) {
    let mut next = state.clone();
    let commands = next.apply(action, config);
    (next, commands)
}

/// Serializable observation of a [`UiState`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub page: Page,
    pub view: View,
    pub active_marker: Option<MarkerId>,
    pub expanded_section: Option<String>,
    pub hovered_section: Option<String>,
    pub menu_open: bool,
    pub header_condensed: bool,
}
