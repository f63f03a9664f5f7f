//! Builder API for assembling a site.
//!
//! [`SiteBuilder`] wires a host, a configuration and a catalog into a
//! [`Site`](crate::effects::Site); the [`menu!`](crate::menu) macro declares
//! menu trees with minimal boilerplate.

pub mod error;
pub mod macros;
pub mod site;

pub use error::BuildError;
pub use site::SiteBuilder;
