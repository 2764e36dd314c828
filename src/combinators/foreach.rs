//! Presence-gated side effects.

use crate::nullable::Nullable;

/// Runs `effect` on the contained value if, and only if, `input` is present.
///
/// `foreach` is the terminal operation of a pipeline: it produces no new
/// nullable, which keeps effectful code (logging, pushing into an external
/// collection, ...) visibly apart from the value-transforming combinators.
///
/// The combinator itself performs no allocation and cannot fail. A panic
/// raised inside `effect` is not caught and propagates to the caller.
///
/// # Examples
///
/// ```rust
/// use absent::foreach;
///
/// let mut seen = Vec::new();
/// foreach(&Some(3), |n| seen.push(*n));
/// foreach(&None::<i32>, |n| seen.push(*n));
/// assert_eq!(seen, vec![3]);
/// ```
#[inline]
pub fn foreach<N, F>(input: &N, effect: F)
where
    N: Nullable,
    F: FnOnce(&N::Value),
{
    if let Some(value) = input.get() {
        effect(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(None, 0)]
    #[case(Some("event"), 1)]
    fn foreach_invokes_effect_only_when_present(
        #[case] input: Option<&str>,
        #[case] expected_calls: usize,
    ) {
        let mut calls = 0;
        foreach(&input, |_| calls += 1);
        assert_eq!(calls, expected_calls);
    }

    #[rstest]
    fn foreach_passes_contained_value() {
        let mut received = None;
        foreach(&Some(String::from("payload")), |text| {
            received = Some(text.clone());
        });
        assert_eq!(received.as_deref(), Some("payload"));
    }

    #[rstest]
    fn foreach_leaves_input_untouched() {
        let input = Some(vec![1, 2, 3]);
        let mut total = 0;
        foreach(&input, |values| total = values.iter().sum());
        assert_eq!(total, 6);
        assert_eq!(input, Some(vec![1, 2, 3]));
    }

    #[test]
    #[should_panic(expected = "effect failed")]
    fn foreach_propagates_effect_panic() {
        foreach(&Some(1), |_| panic!("effect failed"));
    }
}
