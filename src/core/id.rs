//! Opaque state identities.
//!
//! Every transition function is identified by a [`StateId`]: a small,
//! copyable token that is unique per function for the lifetime of the
//! process. Identity comes from the callable's own type (`fn` items and
//! closures each have a unique anonymous type in Rust), so no registry,
//! counter, or lock is involved and concurrent first use from any number
//! of threads is race-free by construction.

use std::any::TypeId;

/// Marker for the sentinel identity. Uninhabited, so no callable a client
/// can reference will ever share its `TypeId`.
enum Sentinel {}

/// Opaque token uniquely identifying one transition function.
///
/// Two `StateId`s are equal iff they were derived from the same function;
/// identity is independent of call arguments or context. There is no
/// `Default` impl; the only ways to obtain a `StateId` are
/// [`StateId::of`] and [`StateId::sentinel`].
///
/// # Example
///
/// ```rust
/// use turnstile::StateId;
///
/// fn red(_tick: &mut u32) -> StateId {
///     StateId::of(&green)
/// }
///
/// fn green(_tick: &mut u32) -> StateId {
///     StateId::of(&red)
/// }
///
/// assert_eq!(StateId::of(&red), StateId::of(&red));
/// assert_ne!(StateId::of(&red), StateId::of(&green));
/// assert_ne!(StateId::of(&red), StateId::sentinel());
/// ```
///
/// # Fn-pointer coercion
///
/// Identity is derived from the callable's *type*. A `fn` item or a closure
/// has a unique type, but once coerced to a plain function pointer
/// (`fn(&mut C) -> StateId`) all functions of that signature share one type
/// and therefore one identity. Register `fn` items directly; the builder
/// rejects the resulting duplicate identities if a coerced pointer slips
/// through.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct StateId(TypeId);

impl StateId {
    /// Get the identity of a transition function.
    ///
    /// Repeated calls for the same function always yield equal ids; calls
    /// for distinct functions always yield unequal ids. The first call does
    /// not allocate or register anything.
    pub fn of<F: 'static>(_f: &F) -> Self {
        StateId(TypeId::of::<F>())
    }

    /// The reserved "no such state" identity.
    ///
    /// Never equal to the id of any transition function. A dispatcher
    /// adopts it when its current identity matches nothing it knows
    /// (under the silent policy), and transition functions may return it
    /// to signal termination.
    ///
    /// # Example
    ///
    /// ```rust
    /// use turnstile::StateId;
    ///
    /// assert!(StateId::sentinel().is_sentinel());
    /// assert_eq!(StateId::sentinel(), StateId::sentinel());
    /// ```
    pub fn sentinel() -> Self {
        StateId(TypeId::of::<Sentinel>())
    }

    /// Check whether this id is the sentinel.
    pub fn is_sentinel(&self) -> bool {
        *self == Self::sentinel()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_a(_ctx: &mut ()) -> StateId {
        StateId::sentinel()
    }

    fn state_b(_ctx: &mut ()) -> StateId {
        StateId::sentinel()
    }

    #[test]
    fn same_function_yields_equal_ids() {
        assert_eq!(StateId::of(&state_a), StateId::of(&state_a));
    }

    #[test]
    fn distinct_functions_yield_unequal_ids() {
        assert_ne!(StateId::of(&state_a), StateId::of(&state_b));
    }

    #[test]
    fn sentinel_never_equals_a_function_id() {
        assert_ne!(StateId::sentinel(), StateId::of(&state_a));
        assert_ne!(StateId::sentinel(), StateId::of(&state_b));
    }

    #[test]
    fn sentinel_is_stable() {
        assert_eq!(StateId::sentinel(), StateId::sentinel());
        assert!(StateId::sentinel().is_sentinel());
    }

    #[test]
    fn function_ids_are_not_sentinel() {
        assert!(!StateId::of(&state_a).is_sentinel());
    }

    #[test]
    fn closures_have_unique_ids() {
        let f = |_ctx: &mut ()| StateId::sentinel();
        let g = |_ctx: &mut ()| StateId::sentinel();
        assert_ne!(StateId::of(&f), StateId::of(&g));
        assert_eq!(StateId::of(&f), StateId::of(&f));
    }

    #[test]
    fn coerced_fn_pointers_collapse_to_one_id() {
        // The documented trap: once coerced, all pointers of one signature
        // share a type and therefore an identity.
        let a: fn(&mut ()) -> StateId = state_a;
        let b: fn(&mut ()) -> StateId = state_b;
        assert_eq!(StateId::of(&a), StateId::of(&b));
        // The fn items themselves stay distinct.
        assert_ne!(StateId::of(&state_a), StateId::of(&state_b));
    }

    #[test]
    fn ids_are_copy_and_hashable() {
        use std::collections::HashSet;

        let id = StateId::of(&state_a);
        let copy = id;
        assert_eq!(id, copy);

        let mut set = HashSet::new();
        set.insert(StateId::of(&state_a));
        set.insert(StateId::of(&state_a));
        set.insert(StateId::of(&state_b));
        assert_eq!(set.len(), 2);
    }
}
