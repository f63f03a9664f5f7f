//! Static tables consumed by the core.
//!
//! The menu tree, the map markers and the news listing are fixed,
//! externally defined data. The core reads them and never mutates them.
//! [`Catalog::ptx`] carries the built-in tables for the PTX Metals site;
//! [`Catalog::from_json`] loads replacements.
//!
//! # Example
//!
//! ```rust
//! use waymark::catalog::Catalog;
//! use waymark::core::MarkerId;
//!
//! let catalog = Catalog::ptx();
//! let panel = catalog.panel_for(&MarkerId::new("w2")).unwrap();
//! assert_eq!(panel.title, "W2 Cu-Ni-PGE");
//! ```

mod markers;
mod nav;
mod news;
mod ptx;
pub mod validate;

pub use markers::{Marker, MarkerKind, MarkerPanel};
pub use nav::{EntryAction, NavEntry};
pub use news::{newest_first, NewsItem};
pub use validate::{validate_catalog, CatalogViolation};

use crate::core::MarkerId;
use serde::{Deserialize, Serialize};
use stillwater::validation::Validation;
use thiserror::Error;

/// Errors loading a catalog document.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Catalog is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Catalog failed validation with {} violation(s)", .0.len())]
    Invalid(Vec<CatalogViolation>),
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Catalog {
    pub menu: Vec<NavEntry>,
    pub markers: Vec<Marker>,
    pub news: Vec<NewsItem>,
}

impl Catalog {
    /// Built-in tables for the PTX Metals site.
    pub fn ptx() -> Self {
        ptx::catalog()
    }

    /// Parse a catalog document. News is re-ordered newest first.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let mut catalog: Catalog = serde_json::from_str(json)?;
        newest_first(&mut catalog.news);
        Ok(catalog)
    }

    /// Check the tables, collecting every violation.
    pub fn validate(&self) -> Result<(), CatalogError> {
        match validate_catalog(self) {
            Validation::Success(()) => Ok(()),
            Validation::Failure(errors) => {
                Err(CatalogError::Invalid(errors.iter().cloned().collect()))
            }
        }
    }

    pub fn marker(&self, id: &MarkerId) -> Option<&Marker> {
        self.markers.iter().find(|marker| &marker.id == id)
    }

    /// Panel for a marker; `None` for ids not in the table.
    pub fn panel_for(&self, id: &MarkerId) -> Option<MarkerPanel<'_>> {
        self.marker(id).map(Marker::panel)
    }

    pub fn markers_of(&self, kind: MarkerKind) -> impl Iterator<Item = &Marker> {
        self.markers.iter().filter(move |marker| marker.kind == kind)
    }

    /// Top-level menu entry by label.
    pub fn section(&self, label: &str) -> Option<&NavEntry> {
        self.menu.iter().find(|entry| entry.label == label)
    }
}
