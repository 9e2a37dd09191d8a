//! The dispatch loop: resolve the current identity, run the matching
//! function, adopt its returned identity.
//!
//! Dispatch is a linear scan in declaration order; identities are unique
//! within one behavior, so at most one member can match. The set is small
//! by design (typically well under a few dozen states), so the scan beats
//! any hashing scheme that would still have to run on every call.

mod behavior;
mod error;

pub use behavior::Behavior;
pub use error::DispatchError;
