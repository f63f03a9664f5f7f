//! Overlay interaction controller.
//!
//! Tracks the mutually exclusive "active" identifiers of the page chrome:
//! the highlighted map marker, the hovered desktop menu section, the
//! expanded mobile accordion section, and whether the mobile menu is open.
//! Each is a single nullable field, so exclusivity holds by construction.
//!
//! Desktop hover and the mobile accordion run side by side in a responsive
//! layout and are kept in separate fields so neither disturbs the other.

use super::state::State;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Identifier of a map marker or zone.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MarkerId(String);

impl MarkerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MarkerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for MarkerId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Open/closed phase of the mobile menu.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl State for MenuState {
    fn name(&self) -> &str {
        match self {
            Self::Closed => "Closed",
            Self::Open => "Open",
        }
    }
}

/// Change of menu phase caused by an operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuChange {
    Opened,
    Closed,
    Unchanged,
}

/// State of every overlay in the page chrome.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OverlayController {
    active_marker: Option<MarkerId>,
    hovered_section: Option<String>,
    expanded_section: Option<String>,
    menu: MenuState,
}

impl OverlayController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set or clear the active marker. Last write wins.
    ///
    /// Pointer-enter passes `Some(id)`, pointer-leave passes `None`.
    pub fn set_active(&mut self, marker: Option<MarkerId>) {
        if self.active_marker != marker {
            debug!(marker = ?marker, "active marker changed");
        }
        self.active_marker = marker;
    }

    /// Tap on a marker: clears it if already active, otherwise activates it.
    pub fn tap(&mut self, marker: MarkerId) {
        let next = if self.active_marker.as_ref() == Some(&marker) {
            None
        } else {
            Some(marker)
        };
        self.set_active(next);
    }

    pub fn active(&self) -> Option<&MarkerId> {
        self.active_marker.as_ref()
    }

    pub fn is_active(&self, marker: &MarkerId) -> bool {
        self.active_marker.as_ref() == Some(marker)
    }

    /// Desktop hover over a top-level menu section; `None` on leave.
    pub fn hover_section(&mut self, label: Option<String>) {
        self.hovered_section = label;
    }

    pub fn hovered(&self) -> Option<&str> {
        self.hovered_section.as_deref()
    }

    /// Expand `label` in the mobile accordion, or collapse it if it is
    /// already expanded. Expanding one section collapses any other.
    ///
    /// ```rust
    /// use waymark::core::OverlayController;
    ///
    /// let mut overlay = OverlayController::new();
    /// overlay.toggle_section("Corporate");
    /// assert_eq!(overlay.expanded(), Some("Corporate"));
    /// overlay.toggle_section("Projects");
    /// assert_eq!(overlay.expanded(), Some("Projects"));
    /// overlay.toggle_section("Projects");
    /// assert_eq!(overlay.expanded(), None);
    /// ```
    pub fn toggle_section(&mut self, label: impl Into<String>) {
        let label = label.into();
        if self.expanded_section.as_deref() == Some(label.as_str()) {
            self.expanded_section = None;
        } else {
            self.expanded_section = Some(label);
        }
        debug!(expanded = ?self.expanded_section, "accordion toggled");
    }

    pub fn collapse_sections(&mut self) {
        self.expanded_section = None;
    }

    pub fn expanded(&self) -> Option<&str> {
        self.expanded_section.as_deref()
    }

    pub fn open(&mut self) -> MenuChange {
        self.set_menu(MenuState::Open)
    }

    pub fn close(&mut self) -> MenuChange {
        self.set_menu(MenuState::Closed)
    }

    fn set_menu(&mut self, next: MenuState) -> MenuChange {
        if self.menu == next {
            return MenuChange::Unchanged;
        }
        debug!(from = self.menu.name(), to = next.name(), "mobile menu");
        self.menu = next;
        match next {
            MenuState::Open => MenuChange::Opened,
            MenuState::Closed => MenuChange::Closed,
        }
    }

    pub fn menu(&self) -> MenuState {
        self.menu
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu == MenuState::Open
    }
}
