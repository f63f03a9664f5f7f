//! Consistency checks for catalog tables.
//!
//! Uses Stillwater's `Validation` to report every problem in a table at
//! once instead of stopping at the first. The core never calls this; it
//! is for whoever authors or loads the tables.

use super::markers::Marker;
use super::nav::NavEntry;
use super::Catalog;
use crate::core::MarkerId;
use std::collections::HashSet;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use thiserror::Error;

/// A single problem found in a catalog table.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CatalogViolation {
    #[error("Menu entry at {path} has a blank label")]
    BlankLabel { path: String },

    #[error("Menu section '{label}' declares an empty submenu")]
    EmptySubmenu { label: String },

    #[error("Menu label '{label}' appears more than once at the same level")]
    DuplicateLabel { label: String },

    #[error("Marker id '{id}' is used more than once")]
    DuplicateMarker { id: MarkerId },

    #[error("Marker '{id}' lies outside the map ({x}, {y})")]
    MarkerOutOfBounds { id: MarkerId, x: f32, y: f32 },
}

pub type CatalogValidation = Validation<(), NonEmptyVec<CatalogViolation>>;

/// Check the whole catalog, accumulating all violations.
pub fn validate_catalog(catalog: &Catalog) -> CatalogValidation {
    Validation::all_vec(vec![
        validate_menu(&catalog.menu),
        validate_markers(&catalog.markers),
    ])
    .map(|_| ())
}

/// Check a menu tree: labels present and unique per level, submenus non-empty.
pub fn validate_menu(entries: &[NavEntry]) -> CatalogValidation {
    let mut checks = Vec::new();
    collect_menu_checks(entries, "menu", &mut checks);
    Validation::all_vec(checks).map(|_| ())
}

fn collect_menu_checks(entries: &[NavEntry], path: &str, checks: &mut Vec<CatalogValidation>) {
    let mut seen = HashSet::new();
    for (index, entry) in entries.iter().enumerate() {
        let entry_path = format!("{path}[{index}]");

        if entry.label.trim().is_empty() {
            checks.push(Validation::fail(CatalogViolation::BlankLabel {
                path: entry_path.clone(),
            }));
        } else if !seen.insert(entry.label.as_str()) {
            checks.push(Validation::fail(CatalogViolation::DuplicateLabel {
                label: entry.label.clone(),
            }));
        }

        match &entry.submenu {
            Some(children) if children.is_empty() => {
                checks.push(Validation::fail(CatalogViolation::EmptySubmenu {
                    label: entry.label.clone(),
                }));
            }
            Some(children) => collect_menu_checks(children, &entry_path, checks),
            None => {}
        }
    }
    checks.push(Validation::success(()));
}

/// Check markers: unique ids, coordinates within the map box.
pub fn validate_markers(markers: &[Marker]) -> CatalogValidation {
    let mut checks = vec![Validation::success(())];
    let mut seen = HashSet::new();

    for marker in markers {
        if !seen.insert(&marker.id) {
            checks.push(Validation::fail(CatalogViolation::DuplicateMarker {
                id: marker.id.clone(),
            }));
        }
        if !marker.in_bounds() {
            checks.push(Validation::fail(CatalogViolation::MarkerOutOfBounds {
                id: marker.id.clone(),
                x: marker.x,
                y: marker.y,
            }));
        }
    }

    Validation::all_vec(checks).map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::MarkerKind;
    use crate::core::Page;

    #[test]
    fn builtin_catalog_is_valid() {
        assert!(validate_catalog(&Catalog::ptx()).is_success());
    }

    #[test]
    fn menu_violations_are_accumulated() {
        let menu = vec![
            NavEntry::leaf("News", Page::News),
            NavEntry::leaf("News", Page::News),
            NavEntry::section("Projects", Vec::new()),
            NavEntry::section("Corporate", vec![NavEntry::leaf("  ", Page::AboutUs)]),
        ];

        match validate_menu(&menu) {
            Validation::Failure(errors) => {
                assert_eq!(errors.len(), 3);
                assert!(errors
                    .iter()
                    .any(|e| matches!(e, CatalogViolation::DuplicateLabel { label } if label == "News")));
                assert!(errors
                    .iter()
                    .any(|e| matches!(e, CatalogViolation::EmptySubmenu { .. })));
                assert!(errors.iter().any(
                    |e| matches!(e, CatalogViolation::BlankLabel { path } if path == "menu[3][0]")
                ));
            }
            Validation::Success(_) => panic!("Expected failures, got success"),
        }
    }

    #[test]
    fn same_label_in_different_sections_is_allowed() {
        let menu = vec![
            NavEntry::section("A", vec![NavEntry::leaf("Overview", Page::AboutUs)]),
            NavEntry::section("B", vec![NavEntry::leaf("Overview", Page::ProjectsW2)]),
        ];
        assert!(validate_menu(&menu).is_success());
    }

    #[test]
    fn marker_violations_are_accumulated() {
        let markers = vec![
            Marker::new("w2", (45.0, 35.0), "W2", "", MarkerKind::Flagship),
            Marker::new("w2", (45.0, 35.0), "W2 again", "", MarkerKind::Flagship),
            Marker::new("far", (-5.0, 120.0), "Far", "", MarkerKind::Zone),
        ];

        let result = validate_markers(&markers);
        assert!(result.is_failure());
        if let Validation::Failure(errors) = result {
            assert_eq!(errors.len(), 2);
        }
    }

    #[test]
    fn empty_tables_are_valid() {
        assert!(validate_menu(&[]).is_success());
        assert!(validate_markers(&[]).is_success());
    }
}
