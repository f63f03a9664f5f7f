//! Pure mapping from the current page to the content view to render.

use super::page::Page;
use serde::{Deserialize, Serialize};

/// Section of the corporate pages.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CorporateSection {
    AboutUs,
    Management,
    Board,
    Advisors,
}

/// Project showcased on a project page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectSite {
    W2,
    Shining,
    Heenan,
    Royalty,
}

/// Standalone news article.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Article {
    W2Drill,
}

/// Content view selected for a page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "view", content = "variant", rename_all = "kebab-case")]
pub enum View {
    Home,
    Corporate(CorporateSection),
    Project(ProjectSite),
    Investors,
    NewsList,
    NewsArticle(Article),
    Contact,
    Cautionary,
}

/// Select the view for a page.
///
/// The match is exhaustive, so every page maps to exactly one view.
pub fn select_view(page: Page) -> View {
    match page {
        Page::Home => View::Home,
        Page::AboutUs => View::Corporate(CorporateSection::AboutUs),
        Page::Management => View::Corporate(CorporateSection::Management),
        Page::Board => View::Corporate(CorporateSection::Board),
        Page::Advisors => View::Corporate(CorporateSection::Advisors),
        Page::ProjectsW2 => View::Project(ProjectSite::W2),
        Page::ProjectsShining => View::Project(ProjectSite::Shining),
        Page::ProjectsHeenan => View::Project(ProjectSite::Heenan),
        Page::ProjectsRoyalty => View::Project(ProjectSite::Royalty),
        Page::Investors => View::Investors,
        Page::News => View::NewsList,
        Page::NewsArticleW2Drill => View::NewsArticle(Article::W2Drill),
        Page::Contact => View::Contact,
        Page::Cautionary => View::Cautionary,
    }
}

/// Select the view for a raw identifier from outside the type system.
///
/// Unknown identifiers resolve to [`View::Home`]; this never fails.
///
/// ```rust
/// use waymark::core::{select_view_slug, View};
///
/// assert_eq!(select_view_slug("investors"), View::Investors);
/// assert_eq!(select_view_slug("\u{0}garbage"), View::Home);
/// ```
pub fn select_view_slug(slug: &str) -> View {
    select_view(Page::from_slug(slug))
}

impl View {
    /// The page a view is rendered for.
    pub fn page(self) -> Page {
        match self {
            View::Home => Page::Home,
            View::Corporate(CorporateSection::AboutUs) => Page::AboutUs,
            View::Corporate(CorporateSection::Management) => Page::Management,
            View::Corporate(CorporateSection::Board) => Page::Board,
            View::Corporate(CorporateSection::Advisors) => Page::Advisors,
            View::Project(ProjectSite::W2) => Page::ProjectsW2,
            View::Project(ProjectSite::Shining) => Page::ProjectsShining,
            View::Project(ProjectSite::Heenan) => Page::ProjectsHeenan,
            View::Project(ProjectSite::Royalty) => Page::ProjectsRoyalty,
            View::Investors => Page::Investors,
            View::NewsList => Page::News,
            View::NewsArticle(Article::W2Drill) => Page::NewsArticleW2Drill,
            View::Contact => Page::Contact,
            View::Cautionary => Page::Cautionary,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_page_selects_its_own_view() {
        for page in Page::ALL {
            assert_eq!(select_view(page).page(), page);
        }
    }

    #[test]
    fn corporate_pages_share_the_corporate_view() {
        assert!(matches!(select_view(Page::AboutUs), View::Corporate(_)));
        assert!(matches!(select_view(Page::Board), View::Corporate(_)));
        assert!(matches!(select_view(Page::Advisors), View::Corporate(_)));
    }

    #[test]
    fn unknown_slug_selects_home_view() {
        assert_eq!(select_view_slug("projects-atlantis"), View::Home);
        assert_eq!(select_view_slug(""), View::Home);
    }

    #[test]
    fn known_slug_selects_matching_view() {
        assert_eq!(
            select_view_slug("projects-shining"),
            View::Project(ProjectSite::Shining)
        );
        assert_eq!(
            select_view_slug("news-article-w2-drill"),
            View::NewsArticle(Article::W2Drill)
        );
    }

    #[test]
    fn view_serializes_with_tag() {
        let json = serde_json::to_string(&View::Project(ProjectSite::W2)).unwrap();
        assert_eq!(json, r#"{"view":"project","variant":"w2"}"#);

        let json = serde_json::to_string(&View::Home).unwrap();
        assert_eq!(json, r#"{"view":"home"}"#);
    }
}
