//! Core State trait for the site's state axes.
//!
//! Pages and menu phases both implement this trait, which provides
//! pure methods for inspecting state properties without side effects.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for values that occupy one axis of the UI state machine.
///
/// All methods are pure - no side effects. States are immutable values
/// describing where an axis currently sits.
///
/// # Required Traits
///
/// - `Clone`: States must be cloneable for visit history
/// - `PartialEq`: States must be comparable for transition logic
/// - `Debug`: States must be debuggable for diagnostics
/// - `Serialize` + `Deserialize`: States cross the presentation boundary as data
///
/// # Example
///
/// ```rust
/// use waymark::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum Drawer {
///     Hidden,
///     Shown,
/// }
///
/// impl State for Drawer {
///     fn name(&self) -> &str {
///         match self {
///             Self::Hidden => "Hidden",
///             Self::Shown => "Shown",
///         }
///     }
/// }
///
/// assert_eq!(Drawer::Shown.name(), "Shown");
/// assert!(!Drawer::Shown.is_final());
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;

    /// Check if this is a terminal state.
    ///
    /// Site state axes toggle for the lifetime of a session, so the
    /// default implementation returns `false`.
    fn is_final(&self) -> bool {
        false
    }
}
