//! Build errors for behavior construction.

use thiserror::Error;

/// Errors that can occur when building a [`Behavior`](crate::Behavior).
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("No states registered. Call .state(f) at least once before .build()")]
    NoStates,

    #[error(
        "State '{name}' is registered more than once. Register fn items directly; \
         distinct functions coerced to one fn-pointer type share an identity"
    )]
    DuplicateState { name: String },

    #[error("Initial id does not name a registered state. Pass an id obtained from a member")]
    UnknownInitialState,
}
