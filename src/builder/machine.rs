//! Builder for constructing behaviors.

use crate::builder::error::BuildError;
use crate::core::{StateFn, StateId};
use crate::dispatch::Behavior;

/// Builder for constructing [`Behavior`]s with a fluent API.
///
/// The state set is fixed at build time: states are registered in
/// declaration order, the first one is the default initial state, and
/// `build` validates that the set is non-empty, that every identity is
/// unique, and that an explicit initial id names a member.
///
/// # Example
///
/// ```rust
/// use turnstile::{Behavior, StateId};
///
/// fn ping(_ctx: &mut u32) -> StateId {
///     StateId::of(&pong)
/// }
///
/// fn pong(_ctx: &mut u32) -> StateId {
///     StateId::of(&ping)
/// }
///
/// let behavior = Behavior::builder()
///     .state(ping)
///     .state(pong)
///     .initial(StateId::of(&pong))
///     .build()
///     .unwrap();
///
/// assert_eq!(behavior.state(), StateId::of(&pong));
/// ```
pub struct BehaviorBuilder<C: 'static> {
    states: Vec<StateFn<C>>,
    initial: Option<StateId>,
    traced: bool,
}

impl<C: 'static> BehaviorBuilder<C> {
    /// Create a new builder with an empty state set.
    pub fn new() -> Self {
        Self {
            states: Vec::new(),
            initial: None,
            traced: false,
        }
    }

    /// Register a transition function. Order of registration is the scan
    /// order at dispatch time.
    pub fn state<F>(mut self, f: F) -> Self
    where
        F: Fn(&mut C) -> StateId + Send + Sync + 'static,
    {
        self.states.push(StateFn::new(f));
        self
    }

    /// Register a pre-built [`StateFn`].
    pub fn add_state(mut self, state: StateFn<C>) -> Self {
        self.states.push(state);
        self
    }

    /// Set the initial identity. Defaults to the first registered state.
    pub fn initial(mut self, id: StateId) -> Self {
        self.initial = Some(id);
        self
    }

    /// Record successful transitions in a [`Trace`](crate::Trace).
    ///
    /// Off by default: the untraced dispatch path performs no allocation
    /// per step.
    pub fn traced(mut self) -> Self {
        self.traced = true;
        self
    }

    /// Build the behavior.
    /// Returns an error if validation fails; see [`BuildError`].
    pub fn build(self) -> Result<Behavior<C>, BuildError> {
        Behavior::from_parts(self.states, self.initial, self.traced)
    }
}

impl<C: 'static> Default for BehaviorBuilder<C> {
    fn default() -> Self {
        Self::new()
    }
}
