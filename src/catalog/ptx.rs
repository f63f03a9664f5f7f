//! Built-in tables for the PTX Metals investor site.

use super::markers::{Marker, MarkerKind};
use super::nav::NavEntry;
use super::news::NewsItem;
use super::Catalog;
use crate::core::Page;
use chrono::NaiveDate;

pub(super) fn catalog() -> Catalog {
    Catalog {
        menu: menu(),
        markers: markers(),
        news: news(),
    }
}

fn menu() -> Vec<NavEntry> {
    crate::menu! {
        "Corporate" => [
            "About Us" => Page::AboutUs,
            "Management" => Page::Management,
            "Board of Directors" => Page::Board,
            "Technical Advisors" => Page::Advisors,
        ],
        "Projects" => [
            "W2 Cu-Ni-PGE" => Page::ProjectsW2,
            "South Timmins Mining" => Page::ProjectsShining,
            "Royalty Portfolio" => Page::ProjectsRoyalty,
        ],
        "Investors" => [
            "Stock Information" => Page::Investors,
            "Corporate Presentation" => Page::Investors,
            "Financial Statements" => Page::Investors,
        ],
        "News" => Page::News,
        "Contact" => Page::Contact,
    }
}

fn markers() -> Vec<Marker> {
    use MarkerKind::*;

    vec![
        Marker::new("w2", (45.0, 35.0), "W2 Cu-Ni-PGE", "Ring of Fire Region", Flagship),
        Marker::new("shining", (55.0, 65.0), "Shining Tree", "Abitibi Gold Belt", Flagship),
        Marker::new("heenan", (50.0, 68.0), "Heenan Mallard", "Swayze Greenstone", Flagship),
        Marker::new("z1", (48.0, 33.0), "Central Zone", "High-grade Cu-Ni intercepts", Zone),
        Marker::new("z2", (42.0, 37.0), "T-5 Target", "Priority Geophysical Anomaly", DrillTarget),
        Marker::new("z3", (58.0, 63.0), "Ronda Mine", "Historic Producer (Au)", Zone),
        Marker::new("z4", (52.0, 67.0), "Herron Area", "12.4 g/t Au Grab Sample", DrillTarget),
        Marker::new("z5", (49.0, 69.0), "Mallard East", "Structural Target", DrillTarget),
    ]
}

const W2_DRILL_PROGRAM: NaiveDate = day(2025, 12, 1);
const GREEN_CANADA_TRANSACTION: NaiveDate = day(2025, 11, 24);
const W2_GEOPHYSICS: NaiveDate = day(2025, 11, 7);

fn news() -> Vec<NewsItem> {
    vec![
        NewsItem::new(W2_DRILL_PROGRAM, "PTX Launches 5,000m Drill Program at W2")
            .with_page(Page::NewsArticleW2Drill)
            .with_summary("Phase one tests the CA1 and AP zones at the Central Target."),
        NewsItem::new(
            GREEN_CANADA_TRANSACTION,
            "Green Canada Corp Announces Proposed Going Public Transaction",
        ),
        NewsItem::new(W2_GEOPHYSICS, "PTX Reports Compilation of Geophysical Data at W2"),
    ]
}

const fn day(year: i32, month: u32, day: u32) -> NaiveDate {
    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(date) => date,
        None => panic!("invalid calendar date in built-in news table"),
    }
}
