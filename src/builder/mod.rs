//! Builder API for behavior construction.
//!
//! Provides the fluent [`BehaviorBuilder`] plus the [`behavior!`](crate::behavior)
//! convenience macro. All set validation (non-empty, unique identities,
//! known initial state) happens at build time, so a constructed
//! [`Behavior`](crate::Behavior) is always valid to start invoking.

pub mod error;
pub mod machine;
pub mod macros;

pub use error::BuildError;
pub use machine::BehaviorBuilder;
