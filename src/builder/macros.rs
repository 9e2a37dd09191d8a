//! Macros for ergonomic behavior construction.

/// Build a [`Behavior`](crate::Behavior) over the listed transition
/// functions, in order, starting on the first.
///
/// Expands to the equivalent [`builder`](crate::Behavior::builder) chain and
/// yields its `Result`.
///
/// # Example
///
/// ```
/// use turnstile::{behavior, StateId};
///
/// fn ping(count: &mut u32) -> StateId {
///     *count += 1;
///     StateId::of(&pong)
/// }
///
/// fn pong(count: &mut u32) -> StateId {
///     *count += 1;
///     StateId::of(&ping)
/// }
///
/// let mut rally = behavior![ping, pong].unwrap();
/// let mut count = 0;
/// rally.invoke(&mut count);
/// rally.invoke(&mut count);
/// assert_eq!(count, 2);
/// assert_eq!(rally.state(), StateId::of(&ping));
/// ```
#[macro_export]
macro_rules! behavior {
    ($($state:expr),+ $(,)?) => {
        $crate::Behavior::builder()
            $(.state($state))+
            .build()
    };
}

#[cfg(test)]
mod tests {
    use crate::StateId;

    fn one(steps: &mut Vec<&'static str>) -> StateId {
        steps.push("one");
        StateId::of(&two)
    }

    fn two(steps: &mut Vec<&'static str>) -> StateId {
        steps.push("two");
        StateId::of(&one)
    }

    #[test]
    fn behavior_macro_builds_in_declaration_order() {
        let behavior = behavior![one, two].unwrap();
        assert_eq!(behavior.state(), StateId::of(&one));
        assert_eq!(behavior.len(), 2);
    }

    #[test]
    fn behavior_macro_supports_trailing_comma() {
        let mut behavior = behavior![one, two,].unwrap();
        let mut steps = Vec::new();
        behavior.invoke(&mut steps);
        behavior.invoke(&mut steps);
        assert_eq!(steps, vec!["one", "two"]);
    }

    #[test]
    fn behavior_macro_surfaces_build_errors() {
        let result = behavior![one, one];
        assert!(result.is_err());
    }
}
