//! Turnstile: a function-first state machine dispatch core
//!
//! Turnstile drives finite-state automata built from plain transition
//! functions rather than a central state table. Each function gets a
//! stable, unique [`StateId`] derived from its own type; a [`Behavior`]
//! holds one current identity plus a fixed set of functions, and each
//! invocation runs whichever function the current identity names, feeding
//! it caller-supplied context and adopting the returned identity as the
//! next state.
//!
//! The core is purely an in-memory dispatch primitive: no I/O, no
//! scheduling, no unwinding. When the current identity matches nothing,
//! the default (silent) policy degrades to a reserved sentinel identity
//! instead of raising, so an embedding control loop keeps running and can
//! recover with [`Behavior::reset`]. A strict variant,
//! [`Behavior::try_invoke`], surfaces the same miss as an error while
//! preserving the prior state.
//!
//! # Core Concepts
//!
//! - **Identity**: [`StateId::of`] yields a unique token per transition
//!   function; [`StateId::sentinel`] is the reserved "no such state" value
//! - **Dispatch**: [`Behavior`] resolves the current identity against its
//!   fixed set, one transition per [`invoke`](Behavior::invoke)
//! - **Tracing**: an opt-in [`Trace`] records the path an automaton took
//!
//! # Example
//!
//! ```rust
//! use turnstile::{behavior, StateId};
//!
//! struct Counter {
//!     flag: bool,
//!     count: u32,
//! }
//!
//! fn toggle(ctx: &mut Counter) -> StateId {
//!     ctx.flag = !ctx.flag;
//!     if ctx.flag {
//!         StateId::of(&toggle)
//!     } else {
//!         StateId::of(&increment)
//!     }
//! }
//!
//! fn increment(ctx: &mut Counter) -> StateId {
//!     ctx.count += 1;
//!     if ctx.flag {
//!         StateId::of(&toggle)
//!     } else {
//!         StateId::of(&increment)
//!     }
//! }
//!
//! let mut behavior = behavior![toggle, increment].unwrap();
//! let mut ctx = Counter { flag: false, count: 0 };
//!
//! while ctx.count < 3 {
//!     behavior.invoke(&mut ctx);
//! }
//!
//! assert!(behavior.is_valid());
//! assert_eq!(ctx.count, 3);
//! ```

pub mod builder;
pub mod core;
pub mod dispatch;
pub mod trace;

// Re-export commonly used types
pub use builder::{BehaviorBuilder, BuildError};
pub use core::{StateAction, StateFn, StateId};
pub use dispatch::{Behavior, DispatchError};
pub use trace::{Trace, TraceRecord};
