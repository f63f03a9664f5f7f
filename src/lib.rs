//! Waymark: pure functional navigation and overlay state for a
//! client-rendered investor site.
//!
//! Waymark follows the "pure core, imperative shell" philosophy. The core
//! decides which page is shown, which map marker is highlighted, which menu
//! section is open and whether the mobile menu covers the page. It does so
//! with plain values and a reducer, and never touches a document. The shell
//! runs the resulting side effects (scroll resets and the scoped document
//! scroll lock) as Stillwater effects against a host.
//!
//! # Core Concepts
//!
//! - **Page**: closed set of page identifiers with a total view mapping
//! - **Actions**: user input as values, folded into state by [`core::reduce`]
//! - **Commands**: side effects requested by the core, performed by the shell
//! - **Site**: the composition root owning state, host and scroll lock
//!
//! # Example
//!
//! ```rust
//! use waymark::builder::SiteBuilder;
//! use waymark::effects::MemoryHost;
//! use waymark::Page;
//!
//! # tokio_test();
//! # fn tokio_test() {
//! # tokio::runtime::Runtime::new().unwrap().block_on(async {
//! let host = MemoryHost::new();
//! let mut site = SiteBuilder::new().host(host.clone()).build().unwrap();
//!
//! site.open_menu().await.unwrap();
//! assert!(host.is_scroll_locked());
//!
//! site.toggle_section("Corporate").await.unwrap();
//! let snapshot = site.select_leaf(Page::AboutUs).await.unwrap();
//!
//! assert_eq!(snapshot.page, Page::AboutUs);
//! assert!(!snapshot.menu_open);
//! assert!(snapshot.expanded_section.is_none());
//! assert!(!host.is_scroll_locked());
//! # });
//! # }
//! ```

pub mod builder;
pub mod catalog;
pub mod config;
pub mod core;
pub mod effects;

// Re-export commonly used types
pub use crate::core::{Action, Command, MarkerId, Page, Snapshot, State, UiState, View};
pub use effects::{ScrollHost, Site};
