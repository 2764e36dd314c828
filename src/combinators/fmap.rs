//! Functor mapping over nullable containers.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! fmap(&n, |x| x.clone()) == n
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fmap(&fmap(&n, f), g) == fmap(&n, |x| g(&f(x)))
//! ```

use super::bind::bind;
use crate::nullable::{Member, Nullable};

/// Transforms the contained value, keeping the container template.
///
/// - When `input` is empty, returns an empty `N::Rebind<B>`.
/// - When `input` is present, returns `mapper(value)` wrapped in a freshly
///   built present `N::Rebind<B>`.
///
/// Implemented on top of [`bind`](crate::bind): the mapper's result is
/// re-wrapped before being handed back, so the emptiness short-circuit lives
/// in one place.
///
/// A panic raised by `mapper` propagates to the caller.
///
/// # Examples
///
/// ```rust
/// use absent::fmap;
///
/// assert_eq!(fmap(&Some(5), |n| n.to_string()), Some("5".to_string()));
/// assert_eq!(fmap(&None::<i32>, |n| n.to_string()), None);
/// ```
#[inline]
pub fn fmap<N, F, B>(input: &N, mapper: F) -> N::Rebind<B>
where
    N: Nullable,
    F: FnOnce(&N::Value) -> B,
{
    bind(input, |value| <N::Rebind<B> as Nullable>::present(mapper(value)))
}

/// The same as [`fmap`], for a read-only, argument-less accessor.
///
/// # Examples
///
/// ```rust
/// use absent::fmap_member;
///
/// struct Account {
///     balance: u64,
/// }
///
/// impl Account {
///     fn balance(&self) -> u64 {
///         self.balance
///     }
/// }
///
/// let account = Some(Account { balance: 120 });
/// assert_eq!(fmap_member(&account, Account::balance), Some(120));
/// ```
#[inline]
pub fn fmap_member<N, B>(input: &N, accessor: Member<N::Value, B>) -> N::Rebind<B>
where
    N: Nullable,
{
    fmap(input, accessor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    #[case(Some(1), Some(2))]
    #[case(Some(-4), Some(-8))]
    #[case(None, None)]
    fn fmap_doubles_present_value(#[case] input: Option<i32>, #[case] expected: Option<i32>) {
        assert_eq!(fmap(&input, |n| n * 2), expected);
    }

    #[rstest]
    fn fmap_changes_element_type() {
        let lengths: Option<usize> = fmap(&Some(String::from("hello")), String::len);
        assert_eq!(lengths, Some(5));
    }

    #[rstest]
    fn fmap_wraps_nullable_results_without_flattening() {
        let nested: Option<Option<i32>> = fmap(&Some(3), |n| Some(*n));
        assert_eq!(nested, Some(Some(3)));
    }

    #[rstest]
    fn fmap_empty_never_invokes_mapper() {
        let calls = Cell::new(0);
        let result = fmap(&None::<i32>, |n| {
            calls.set(calls.get() + 1);
            *n
        });
        assert_eq!(result, None);
        assert_eq!(calls.get(), 0);
    }

    #[rstest]
    fn fmap_present_invokes_mapper_once() {
        let calls = Cell::new(0);
        let _ = fmap(&Some(9), |n| {
            calls.set(calls.get() + 1);
            *n
        });
        assert_eq!(calls.get(), 1);
    }

    #[test]
    #[should_panic(expected = "mapper failed")]
    fn fmap_propagates_mapper_panic() {
        let _: Option<i32> = fmap(&Some(1), |_| -> i32 { panic!("mapper failed") });
    }

    // =========================================================================
    // Member accessor
    // =========================================================================

    #[derive(Debug)]
    struct Temperature {
        celsius: i32,
    }

    impl Temperature {
        fn fahrenheit(&self) -> i32 {
            self.celsius * 9 / 5 + 32
        }
    }

    #[rstest]
    fn fmap_member_present_applies_accessor() {
        let reading = Some(Temperature { celsius: 100 });
        assert_eq!(fmap_member(&reading, Temperature::fahrenheit), Some(212));
    }

    #[rstest]
    fn fmap_member_empty_returns_empty() {
        assert_eq!(fmap_member(&None::<Temperature>, Temperature::fahrenheit), None);
    }

    #[rstest]
    fn fmap_member_matches_closure_form() {
        let reading = Some(Temperature { celsius: -40 });
        assert_eq!(
            fmap_member(&reading, Temperature::fahrenheit),
            fmap(&reading, |temperature| temperature.fahrenheit())
        );
    }
}
