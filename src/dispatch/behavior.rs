//! The dispatcher driving an automaton one transition per invocation.

use chrono::Utc;

use crate::builder::{BehaviorBuilder, BuildError};
use crate::core::{StateFn, StateId};
use crate::dispatch::error::DispatchError;
use crate::trace::{Trace, TraceRecord};

/// Dispatcher over a fixed, ordered, non-empty set of transition functions.
///
/// A `Behavior` holds one mutable current [`StateId`] plus the set it was
/// constructed over; the set never changes afterward. Each call to
/// [`invoke`](Behavior::invoke) resolves the current identity against the
/// set, runs the matching function with the caller's context, and adopts
/// the returned identity as the new current state.
///
/// Two entry points cover the two supported error policies:
///
/// - [`invoke`](Behavior::invoke): **silent policy, the default.** When the
///   current identity matches nothing, the behavior degrades to the sentinel
///   state and keeps returning it; nothing panics and no error is raised.
///   Suited to control loops that must never unwind. Recovery is
///   [`reset`](Behavior::reset).
/// - [`try_invoke`](Behavior::try_invoke): **strict policy, opt-in.** The
///   same miss surfaces as [`DispatchError::UnrecognizedState`] and the
///   current identity is left unchanged, so the caller can correct the
///   inconsistency and retry without having lost the prior state.
///
/// A single `Behavior` is not internally synchronized: drive each instance
/// from one thread or loop. Cloning is cheap (the callables are shared) and
/// clones evolve independently.
///
/// # Example
///
/// ```rust
/// use turnstile::{Behavior, StateId};
///
/// struct Counter {
///     flag: bool,
///     count: u32,
/// }
///
/// fn toggle(ctx: &mut Counter) -> StateId {
///     ctx.flag = !ctx.flag;
///     if ctx.flag {
///         StateId::of(&toggle)
///     } else {
///         StateId::of(&increment)
///     }
/// }
///
/// fn increment(ctx: &mut Counter) -> StateId {
///     ctx.count += 1;
///     if ctx.flag {
///         StateId::of(&toggle)
///     } else {
///         StateId::of(&increment)
///     }
/// }
///
/// let mut behavior = Behavior::builder()
///     .state(toggle)
///     .state(increment)
///     .build()
///     .unwrap();
///
/// let mut ctx = Counter { flag: false, count: 0 };
/// assert_eq!(behavior.state(), StateId::of(&toggle));
///
/// behavior.invoke(&mut ctx); // flag -> true, stay on toggle
/// behavior.invoke(&mut ctx); // flag -> false, move to increment
/// behavior.invoke(&mut ctx); // count -> 1
///
/// assert_eq!(ctx.count, 1);
/// assert_eq!(behavior.state(), StateId::of(&increment));
/// assert!(behavior.is_valid());
/// ```
pub struct Behavior<C: 'static> {
    states: Vec<StateFn<C>>,
    current: StateId,
    trace: Option<Trace>,
}

impl<C: 'static> Behavior<C> {
    /// Start building a behavior. See [`BehaviorBuilder`].
    pub fn builder() -> BehaviorBuilder<C> {
        BehaviorBuilder::new()
    }

    /// Construct directly from registered states, starting on the first.
    ///
    /// Equivalent to `Behavior::builder()` with each state added in order
    /// and no explicit initial identity.
    pub fn new(states: Vec<StateFn<C>>) -> Result<Self, BuildError> {
        Self::from_parts(states, None, false)
    }

    pub(crate) fn from_parts(
        states: Vec<StateFn<C>>,
        initial: Option<StateId>,
        traced: bool,
    ) -> Result<Self, BuildError> {
        if states.is_empty() {
            return Err(BuildError::NoStates);
        }
        for (ix, state) in states.iter().enumerate() {
            if states[..ix].iter().any(|prior| prior.id() == state.id()) {
                return Err(BuildError::DuplicateState {
                    name: state.name().to_string(),
                });
            }
        }
        let current = match initial {
            Some(id) => {
                if !states.iter().any(|state| state.id() == id) {
                    return Err(BuildError::UnknownInitialState);
                }
                id
            }
            None => states[0].id(),
        };
        Ok(Self {
            states,
            current,
            trace: traced.then(Trace::new),
        })
    }

    /// Resolve the current identity, run the matching function, adopt its
    /// returned identity. Silent policy: on a miss the behavior enters the
    /// sentinel state and returns it; no error, no panic.
    ///
    /// The returned identity may legitimately name something outside the
    /// set (the sentinel included): that is how a final state signals
    /// termination. The *next* `invoke` after such a return is the miss
    /// that lands on the sentinel.
    pub fn invoke(&mut self, ctx: &mut C) -> StateId {
        match self.step(ctx) {
            Some(next) => next,
            None => {
                log::warn!(
                    "unrecognized state {:?}; entering sentinel state",
                    self.current
                );
                self.current = StateId::sentinel();
                self.current
            }
        }
    }

    /// Strict variant of [`invoke`](Behavior::invoke): a miss surfaces as
    /// [`DispatchError::UnrecognizedState`] and the current identity is
    /// left unchanged so the caller can repair and retry.
    pub fn try_invoke(&mut self, ctx: &mut C) -> Result<StateId, DispatchError> {
        match self.step(ctx) {
            Some(next) => Ok(next),
            None => Err(DispatchError::UnrecognizedState { id: self.current }),
        }
    }

    fn step(&mut self, ctx: &mut C) -> Option<StateId> {
        let ix = self
            .states
            .iter()
            .position(|state| state.id() == self.current)?;
        let from = self.states[ix].name();
        let next = self.states[ix].call(ctx);
        log::trace!("dispatch {} -> {}", from, self.display_name(next));
        if let Some(trace) = self.trace.take() {
            let record = TraceRecord {
                from: from.to_string(),
                to: self.display_name(next).to_string(),
                timestamp: Utc::now(),
                step: trace.len(),
            };
            self.trace = Some(trace.record(record));
        }
        self.current = next;
        Some(next)
    }

    /// The identity the next invocation will resolve. Read-only.
    pub fn state(&self) -> StateId {
        self.current
    }

    /// True iff the current identity is not the sentinel and names a member
    /// of the fixed set.
    pub fn is_valid(&self) -> bool {
        !self.current.is_sentinel() && self.contains(self.current)
    }

    /// Reset to the first registered state. Never invokes anything.
    ///
    /// This (or [`reset_to`](Behavior::reset_to)) is the only recovery from
    /// the sentinel state under the silent policy.
    pub fn reset(&mut self) {
        self.current = self.states[0].id();
    }

    /// Unconditionally overwrite the current identity. Never invokes
    /// anything. Passing an id that names no member leaves the behavior
    /// invalid, exactly as if a transition had returned that id.
    pub fn reset_to(&mut self, id: StateId) {
        self.current = id;
    }

    /// Strict reset: rejects the sentinel and identities outside the set,
    /// leaving the current identity unchanged on failure.
    pub fn try_reset_to(&mut self, id: StateId) -> Result<(), DispatchError> {
        if id.is_sentinel() {
            return Err(DispatchError::UninitializedIdentity);
        }
        if !self.contains(id) {
            return Err(DispatchError::UnrecognizedState { id });
        }
        self.current = id;
        Ok(())
    }

    /// Whether `id` names a member of the fixed set.
    pub fn contains(&self, id: StateId) -> bool {
        self.states.iter().any(|state| state.id() == id)
    }

    /// Display name of a member state, `None` for identities outside the set.
    pub fn state_name(&self, id: StateId) -> Option<&'static str> {
        self.states
            .iter()
            .find(|state| state.id() == id)
            .map(StateFn::name)
    }

    /// Number of registered states. Always at least one.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// The transition trace, if this behavior was built with
    /// [`traced`](BehaviorBuilder::traced).
    pub fn trace(&self) -> Option<&Trace> {
        self.trace.as_ref()
    }

    fn display_name(&self, id: StateId) -> &'static str {
        if id.is_sentinel() {
            "<sentinel>"
        } else {
            self.state_name(id).unwrap_or("<unknown>")
        }
    }
}

impl<C: 'static> Clone for Behavior<C> {
    fn clone(&self) -> Self {
        Self {
            states: self.states.clone(),
            current: self.current,
            trace: self.trace.clone(),
        }
    }
}

impl<C: 'static> std::fmt::Debug for Behavior<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Behavior")
            .field("current", &self.display_name(self.current))
            .field(
                "states",
                &self
                    .states
                    .iter()
                    .map(StateFn::name)
                    .collect::<Vec<_>>(),
            )
            .field("valid", &self.is_valid())
            .finish()
    }
}
