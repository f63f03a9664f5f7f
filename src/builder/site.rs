//! Builder for assembling a site.

use crate::builder::error::BuildError;
use crate::catalog::Catalog;
use crate::config::SiteConfig;
use crate::effects::{ScrollHost, Site};

/// Builder for constructing a [`Site`] with a fluent API.
///
/// Config defaults to [`SiteConfig::default`] and the catalog to
/// [`Catalog::ptx`]; only the host is required.
pub struct SiteBuilder<H: ScrollHost> {
    host: Option<H>,
    config: SiteConfig,
    catalog: Option<Catalog>,
    validate_catalog: bool,
}

impl<H: ScrollHost> SiteBuilder<H> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            host: None,
            config: SiteConfig::default(),
            catalog: None,
            validate_catalog: false,
        }
    }

    /// Set the host document (required).
    pub fn host(mut self, host: H) -> Self {
        self.host = Some(host);
        self
    }

    pub fn config(mut self, config: SiteConfig) -> Self {
        self.config = config;
        self
    }

    pub fn catalog(mut self, catalog: Catalog) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// Reject catalogs with consistency violations at build time.
    pub fn validate_catalog(mut self, validate: bool) -> Self {
        self.validate_catalog = validate;
        self
    }

    /// Build the site.
    /// Returns an error if the host is missing or a check fails.
    pub fn build(self) -> Result<Site<H>, BuildError> {
        let host = self.host.ok_or(BuildError::MissingHost)?;
        self.config.validate()?;

        let catalog = self.catalog.unwrap_or_else(Catalog::ptx);
        if self.validate_catalog {
            catalog.validate()?;
        }

        Ok(Site::new(host, self.config, catalog))
    }
}

impl<H: ScrollHost> Default for SiteBuilder<H> {
    fn default() -> Self {
        Self::new()
    }
}
