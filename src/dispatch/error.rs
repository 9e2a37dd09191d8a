//! Dispatch-time errors, surfaced only by the strict entry points.

use crate::core::StateId;

/// Errors surfaced by [`try_invoke`](crate::Behavior::try_invoke) and
/// [`try_reset_to`](crate::Behavior::try_reset_to).
///
/// The default silent policy never returns these: it degrades to the
/// sentinel state instead, and nothing in this crate is ever fatal to the
/// process.
#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    /// The identity matches no state registered with this dispatcher.
    #[error("identity {id:?} does not name a registered state")]
    UnrecognizedState { id: StateId },

    /// The sentinel identity was used where a registered state was expected.
    #[error("the sentinel identity cannot stand in for a registered state")]
    UninitializedIdentity,
}
