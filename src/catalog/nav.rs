//! Navigation menu tree.

use crate::core::{Action, Page};
use serde::{Deserialize, Serialize};

/// A node in the static menu tree.
///
/// A clickable leaf owns a page; a section owns a submenu; a plain label
/// owns neither. A section may also own a page of its own, which only the
/// desktop menu acts on.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NavEntry {
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<Page>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submenu: Option<Vec<NavEntry>>,
}

/// What activating an entry should do.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EntryAction {
    Navigate(Page),
    ToggleSection(String),
    None,
}

impl NavEntry {
    pub fn leaf(label: impl Into<String>, page: Page) -> Self {
        Self {
            label: label.into(),
            page: Some(page),
            submenu: None,
        }
    }

    pub fn section(label: impl Into<String>, children: Vec<NavEntry>) -> Self {
        Self {
            label: label.into(),
            page: None,
            submenu: Some(children),
        }
    }

    pub fn plain(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            page: None,
            submenu: None,
        }
    }

    /// Give a section a page of its own.
    pub fn with_page(mut self, page: Page) -> Self {
        self.page = Some(page);
        self
    }

    pub fn has_submenu(&self) -> bool {
        self.submenu.as_ref().is_some_and(|children| !children.is_empty())
    }

    pub fn children(&self) -> &[NavEntry] {
        self.submenu.as_deref().unwrap_or_default()
    }

    /// Desktop click. The submenu opens on hover, so a click only
    /// navigates, and only when the entry owns a page.
    pub fn pointer_click(&self) -> EntryAction {
        match self.page {
            Some(page) => EntryAction::Navigate(page),
            None => EntryAction::None,
        }
    }

    /// Mobile tap. A submenu takes precedence over the entry's own page.
    ///
    /// ```rust
    /// use waymark::catalog::{EntryAction, NavEntry};
    /// use waymark::Page;
    ///
    /// let projects = NavEntry::section("Projects", vec![NavEntry::leaf("W2", Page::ProjectsW2)])
    ///     .with_page(Page::ProjectsW2);
    ///
    /// assert_eq!(projects.pointer_click(), EntryAction::Navigate(Page::ProjectsW2));
    /// assert_eq!(projects.touch(), EntryAction::ToggleSection("Projects".into()));
    /// ```
    pub fn touch(&self) -> EntryAction {
        if self.has_submenu() {
            return EntryAction::ToggleSection(self.label.clone());
        }
        match self.page {
            Some(page) => EntryAction::Navigate(page),
            None => EntryAction::None,
        }
    }

    /// Every page reachable from this entry, depth first.
    pub fn pages(&self) -> Vec<Page> {
        let mut pages: Vec<Page> = self.page.into_iter().collect();
        for child in self.children() {
            pages.extend(child.pages());
        }
        pages
    }
}

impl EntryAction {
    /// Action to dispatch for a desktop click. A page link is handled like
    /// a menu leaf, so an overlay left open by a viewport resize closes too.
    pub fn into_pointer_action(self) -> Option<Action> {
        match self {
            EntryAction::Navigate(page) => Some(Action::SelectLeaf(page)),
            EntryAction::ToggleSection(label) => Some(Action::ToggleSection(label)),
            EntryAction::None => None,
        }
    }

    /// Action to dispatch for a tap inside the mobile menu, where a leaf
    /// also closes the menu.
    pub fn into_mobile_action(self) -> Option<Action> {
        match self {
            EntryAction::Navigate(page) => Some(Action::SelectLeaf(page)),
            EntryAction::ToggleSection(label) => Some(Action::ToggleSection(label)),
            EntryAction::None => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corporate() -> NavEntry {
        NavEntry::section(
            "Corporate",
            vec![
                NavEntry::leaf("About Us", Page::AboutUs),
                NavEntry::leaf("Management", Page::Management),
            ],
        )
    }

    #[test]
    fn leaf_navigates_on_both_surfaces() {
        let news = NavEntry::leaf("News", Page::News);
        assert_eq!(news.pointer_click(), EntryAction::Navigate(Page::News));
        assert_eq!(news.touch(), EntryAction::Navigate(Page::News));
    }

    #[test]
    fn section_without_page_ignores_click_but_toggles_on_touch() {
        let section = corporate();
        assert_eq!(section.pointer_click(), EntryAction::None);
        assert_eq!(section.touch(), EntryAction::ToggleSection("Corporate".into()));
    }

    #[test]
    fn plain_label_does_nothing() {
        let label = NavEntry::plain("Follow Us");
        assert_eq!(label.pointer_click(), EntryAction::None);
        assert_eq!(label.touch(), EntryAction::None);
        assert!(EntryAction::None.into_mobile_action().is_none());
    }

    #[test]
    fn empty_submenu_is_not_a_submenu() {
        let entry = NavEntry::section("Empty", Vec::new()).with_page(Page::Contact);
        assert!(!entry.has_submenu());
        assert_eq!(entry.touch(), EntryAction::Navigate(Page::Contact));
    }

    #[test]
    fn leaf_becomes_select_leaf_on_both_surfaces() {
        let action = NavEntry::leaf("Board", Page::Board).touch().into_mobile_action();
        assert_eq!(action, Some(Action::SelectLeaf(Page::Board)));

        let action = NavEntry::leaf("Board", Page::Board)
            .pointer_click()
            .into_pointer_action();
        assert_eq!(action, Some(Action::SelectLeaf(Page::Board)));
    }

    #[test]
    fn pages_walks_the_tree() {
        assert_eq!(corporate().pages(), vec![Page::AboutUs, Page::Management]);
    }

    #[test]
    fn json_omits_absent_fields() {
        let json = serde_json::to_string(&NavEntry::leaf("Contact", Page::Contact)).unwrap();
        assert_eq!(json, r#"{"label":"Contact","page":"contact"}"#);

        let entry: NavEntry = serde_json::from_str(r#"{"label":"Investors"}"#).unwrap();
        assert_eq!(entry, NavEntry::plain("Investors"));
    }
}
