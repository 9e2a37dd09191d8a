//! Identity primitives for function-first state machines.
//!
//! This module contains the tokens the dispatcher resolves against:
//! - [`StateId`]: opaque unique identity per transition function
//! - the sentinel: reserved "no such state" identity
//! - [`StateFn`]: a registered transition function (identity + name +
//!   callable)
//!
//! Everything here is pure: obtaining an identity has no side effects and
//! no process-wide mutable state.

mod id;
mod state_fn;

pub use id::StateId;
pub use state_fn::{StateAction, StateFn};
