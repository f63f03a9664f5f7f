//! Closed set of page identifiers.
//!
//! Exactly one page is current at any time. The set is closed, so a
//! `Page` value is always valid; only raw slugs arriving from outside
//! (URLs, stored snapshots, JSON tables) can be unrecognised, and those
//! fall back to [`Page::Home`].

use super::state::State;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use tracing::warn;

/// A logical page of the site.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Page {
    #[default]
    Home,
    AboutUs,
    Management,
    Board,
    Advisors,
    ProjectsW2,
    ProjectsShining,
    ProjectsHeenan,
    ProjectsRoyalty,
    Investors,
    News,
    NewsArticleW2Drill,
    Contact,
    Cautionary,
}

/// A slug that names no page.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Unknown page identifier '{0}'")]
pub struct UnknownPage(pub String);

impl Page {
    /// Every page, in menu order.
    pub const ALL: [Page; 14] = [
        Page::Home,
        Page::AboutUs,
        Page::Management,
        Page::Board,
        Page::Advisors,
        Page::ProjectsW2,
        Page::ProjectsShining,
        Page::ProjectsHeenan,
        Page::ProjectsRoyalty,
        Page::Investors,
        Page::News,
        Page::NewsArticleW2Drill,
        Page::Contact,
        Page::Cautionary,
    ];

    /// Wire identifier used in URLs and serialized data.
    pub fn slug(self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::AboutUs => "about-us",
            Page::Management => "management",
            Page::Board => "board",
            Page::Advisors => "advisors",
            Page::ProjectsW2 => "projects-w2",
            Page::ProjectsShining => "projects-shining",
            Page::ProjectsHeenan => "projects-heenan",
            Page::ProjectsRoyalty => "projects-royalty",
            Page::Investors => "investors",
            Page::News => "news",
            Page::NewsArticleW2Drill => "news-article-w2-drill",
            Page::Contact => "contact",
            Page::Cautionary => "cautionary",
        }
    }

    /// Strict lookup of a slug.
    pub fn try_from_slug(slug: &str) -> Result<Page, UnknownPage> {
        Page::ALL
            .iter()
            .copied()
            .find(|page| page.slug() == slug)
            .ok_or_else(|| UnknownPage(slug.to_string()))
    }

    /// Lenient lookup: unrecognised slugs resolve to [`Page::Home`].
    ///
    /// ```rust
    /// use waymark::Page;
    ///
    /// assert_eq!(Page::from_slug("board"), Page::Board);
    /// assert_eq!(Page::from_slug("no-such-page"), Page::Home);
    /// ```
    pub fn from_slug(slug: &str) -> Page {
        Page::try_from_slug(slug).unwrap_or_else(|err| {
            warn!(%err, "falling back to home page");
            Page::Home
        })
    }

    pub fn is_home(self) -> bool {
        matches!(self, Page::Home)
    }
}

impl State for Page {
    fn name(&self) -> &str {
        self.slug()
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for Page {
    type Err = UnknownPage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Page::try_from_slug(s)
    }
}

impl Serialize for Page {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.slug())
    }
}

impl<'de> Deserialize<'de> for Page {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let slug = String::deserialize(deserializer)?;
        Ok(Page::from_slug(&slug))
    }
}
