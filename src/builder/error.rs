//! Errors assembling a site.

use crate::catalog::CatalogError;
use crate::config::ConfigError;
use thiserror::Error;

/// Errors that can occur when building a [`Site`](crate::effects::Site).
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Host not specified. Call .host(host) before .build()")]
    MissingHost,

    #[error("Invalid configuration: {0}")]
    InvalidConfig(#[from] ConfigError),

    #[error("Invalid catalog: {0}")]
    InvalidCatalog(#[from] CatalogError),
}
