//! Effectful shell around the pure core, using Stillwater 0.11.0.
//!
//! The core reduces actions into state plus [`Command`](crate::core::Command)
//! values. This module performs those commands against a host document.
//!
//! # Key Concepts
//!
//! - **Host**: [`ScrollHost`], the document operations the site needs
//! - **Scroll lock**: [`ScrollLock`], a guard that unlocks on drop
//! - **Site**: [`Site`], the composition root that owns state and effects
//!
//! Effects are built with Stillwater's free-standing `from_fn()` and boxed
//! so each command yields one `BoxedEffect` run against the host.

mod commands;
mod host;
mod lock;
mod memory;
mod site;

pub use commands::{acquire_scroll_lock, scroll_to_top};
pub use host::{HostError, ScrollHost};
pub use lock::ScrollLock;
pub use memory::{HostCall, MemoryHost};
pub use site::Site;
