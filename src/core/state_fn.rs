//! Registered transition functions.

use std::any::type_name;
use std::fmt;
use std::sync::Arc;

use super::id::StateId;

/// Callable stored for each registered state.
///
/// Transition functions create no effects through the core itself: all side
/// effects happen through the `&mut C` context they receive. The shared
/// `Arc` keeps [`StateFn`] (and the dispatcher holding it) cheaply cloneable.
pub type StateAction<C> = Arc<dyn Fn(&mut C) -> StateId + Send + Sync>;

/// A transition function registered for dispatch: its identity, a short
/// display name, and the callable itself.
///
/// The name is derived from the callable's type name and is used for
/// logging, `Debug` output, and trace records; it plays no part in
/// dispatch, which goes by [`StateId`] alone.
///
/// # Example
///
/// ```rust
/// use turnstile::{StateFn, StateId};
///
/// fn idle(_ctx: &mut u32) -> StateId {
///     StateId::of(&idle)
/// }
///
/// let state = StateFn::new(idle);
/// assert_eq!(state.id(), StateId::of(&idle));
/// assert_eq!(state.name(), "idle");
/// ```
pub struct StateFn<C: 'static> {
    id: StateId,
    name: &'static str,
    action: StateAction<C>,
}

impl<C: 'static> StateFn<C> {
    /// Register a transition function.
    ///
    /// The identity is taken from the callable's type before any coercion,
    /// so `fn` items and closures each get a unique id. Boxing a zero-sized
    /// `fn` item does not allocate.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&mut C) -> StateId + Send + Sync + 'static,
    {
        StateFn {
            id: StateId::of(&f),
            name: short_type_name::<F>(),
            action: Arc::new(f),
        }
    }

    /// The identity of the registered function.
    pub fn id(&self) -> StateId {
        self.id
    }

    /// Short display name of the registered function.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Invoke the registered function with the supplied context.
    pub(crate) fn call(&self, ctx: &mut C) -> StateId {
        (self.action)(ctx)
    }
}

impl<C: 'static> Clone for StateFn<C> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            name: self.name,
            action: Arc::clone(&self.action),
        }
    }
}

impl<C: 'static> fmt::Debug for StateFn<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateFn")
            .field("id", &self.id)
            .field("name", &self.name)
            .finish()
    }
}

/// Last path segment of a type name: `demo::states::scan` becomes `scan`.
///
/// Fn-pointer types render as a whole signature rather than a path
/// (`fn(&mut Grid) -> StateId`); those are kept intact so the name never
/// degenerates to the return type's last segment.
fn short_type_name<F>() -> &'static str {
    let full = type_name::<F>();
    if full.contains('(') {
        return full;
    }
    full.rsplit("::").next().unwrap_or(full)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toggle(flag: &mut bool) -> StateId {
        *flag = !*flag;
        StateId::of(&toggle)
    }

    #[test]
    fn new_captures_identity_and_name() {
        let state = StateFn::new(toggle);
        assert_eq!(state.id(), StateId::of(&toggle));
        assert_eq!(state.name(), "toggle");
    }

    #[test]
    fn call_runs_the_function_against_context() {
        let state = StateFn::new(toggle);
        let mut flag = false;
        let next = state.call(&mut flag);
        assert!(flag);
        assert_eq!(next, StateId::of(&toggle));
    }

    #[test]
    fn clone_shares_identity() {
        let state = StateFn::new(toggle);
        let cloned = state.clone();
        assert_eq!(state.id(), cloned.id());
        assert_eq!(state.name(), cloned.name());
    }

    #[test]
    fn closures_are_accepted() {
        let state = StateFn::new(|count: &mut u32| {
            *count += 1;
            StateId::sentinel()
        });
        let mut count = 0;
        assert!(state.call(&mut count).is_sentinel());
        assert_eq!(count, 1);
    }

    #[test]
    fn fn_pointer_registration_keeps_the_signature_as_name() {
        let ptr: fn(&mut bool) -> StateId = toggle;
        let state = StateFn::new(ptr);
        assert!(state.name().starts_with("fn("));
        assert!(state.name().contains("StateId"));
    }

    #[test]
    fn debug_output_names_the_state() {
        let state = StateFn::new(toggle);
        let rendered = format!("{state:?}");
        assert!(rendered.contains("toggle"));
    }
}
