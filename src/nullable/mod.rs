//! The capability contract every nullable container must satisfy.
//!
//! A nullable container holds either nothing (the *empty* state) or exactly
//! one value of its element type (the *present* state). The combinators in
//! this crate never name a concrete container; they only rely on the four
//! capabilities described by [`Nullable`]:
//!
//! | Capability | Item |
//! |---|---|
//! | Empty-state construction | [`Nullable::empty`] |
//! | Present-state construction | [`Nullable::present`] |
//! | Presence test | [`Nullable::is_present`] |
//! | Access to the contained value | [`Nullable::get`] |
//!
//! # Higher-Kinded Types Emulation
//!
//! `bind` and `fmap` need to talk about "the same container, holding a
//! different element type". Rust has no higher-kinded types, so the contract
//! carries a generic associated type, [`Nullable::Rebind`], that re-applies the
//! container template to another element type.
//!
//! # Examples
//!
//! ```rust
//! use absent::nullable::Nullable;
//!
//! fn describe<N: Nullable>(input: &N) -> &'static str {
//!     if input.is_present() { "present" } else { "empty" }
//! }
//!
//! assert_eq!(describe(&Some(1)), "present");
//! assert_eq!(describe(&None::<i32>), "empty");
//! ```

pub mod member;

pub use member::Member;

/// A container holding zero or one value of type [`Nullable::Value`].
///
/// # Laws
///
/// For any implementation:
///
/// 1. `Self::empty().is_present() == false` and `Self::empty().get().is_none()`
/// 2. `Self::present(a).get() == Some(&a)`
/// 3. `n.is_present() == n.get().is_some()`
///
/// # Examples
///
/// A caller-defined container:
///
/// ```rust
/// use absent::nullable::Nullable;
///
/// #[derive(Debug, PartialEq)]
/// enum Maybe<A> {
///     Just(A),
///     Nothing,
/// }
///
/// impl<A> Nullable for Maybe<A> {
///     type Value = A;
///     type Rebind<B> = Maybe<B>;
///
///     fn empty() -> Self {
///         Self::Nothing
///     }
///
///     fn present(value: A) -> Self {
///         Self::Just(value)
///     }
///
///     fn get(&self) -> Option<&A> {
///         match self {
///             Self::Just(value) => Some(value),
///             Self::Nothing => None,
///         }
///     }
/// }
///
/// let doubled: Maybe<i32> = absent::fmap(&Maybe::Just(21), |n| n * 2);
/// assert_eq!(doubled, Maybe::Just(42));
/// ```
pub trait Nullable: Sized {
    /// The element type held in the present state.
    ///
    /// For `Option<i32>`, this is `i32`.
    type Value;

    /// The same container template applied to another element type `B`.
    ///
    /// For `Option<i32>`, `Rebind<String>` is `Option<String>`. The bound
    /// keeps the rebound type usable with every combinator.
    type Rebind<B>: Nullable<Value = B>;

    /// Builds a container in the empty state.
    fn empty() -> Self;

    /// Builds a container in the present state, holding `value`.
    fn present(value: Self::Value) -> Self;

    /// Borrows the contained value, or returns `None` when empty.
    fn get(&self) -> Option<&Self::Value>;

    /// Returns `true` if the container holds a value.
    #[inline]
    fn is_present(&self) -> bool {
        self.get().is_some()
    }

    /// Returns `true` if the container holds no value.
    #[inline]
    fn is_empty(&self) -> bool {
        !self.is_present()
    }
}

impl<A> Nullable for Option<A> {
    type Value = A;
    type Rebind<B> = Option<B>;

    #[inline]
    fn empty() -> Self {
        None
    }

    #[inline]
    fn present(value: A) -> Self {
        Some(value)
    }

    #[inline]
    fn get(&self) -> Option<&A> {
        self.as_ref()
    }

    #[inline]
    fn is_present(&self) -> bool {
        self.is_some()
    }
}

static_assertions::assert_impl_all!(Option<i32>: Nullable);
static_assertions::assert_impl_all!(Option<String>: Nullable);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    // =========================================================================
    // Type-level tests
    // =========================================================================

    #[test]
    fn option_value_type_is_correct() {
        fn assert_value<N: Nullable<Value = i32>>() {}
        assert_value::<Option<i32>>();
    }

    #[test]
    fn option_rebind_produces_option() {
        fn rebind_empty<N: Nullable>(_input: &N) -> N::Rebind<String> {
            <N::Rebind<String> as Nullable>::empty()
        }

        let rebound: Option<String> = rebind_empty(&Some(42));
        assert_eq!(rebound, None);
    }

    #[test]
    fn nested_option_rebind_is_nullable() {
        fn assert_value<N: Nullable<Value = Option<u8>>>() {}
        assert_value::<<Option<i32> as Nullable>::Rebind<Option<u8>>>();
    }

    // =========================================================================
    // Capability tests
    // =========================================================================

    #[rstest]
    fn option_empty_is_none() {
        let empty: Option<i32> = Nullable::empty();
        assert_eq!(empty, None);
        assert!(empty.is_empty());
        assert!(!empty.is_present());
    }

    #[rstest]
    #[case(0)]
    #[case(-7)]
    #[case(i32::MAX)]
    fn option_present_holds_value(#[case] value: i32) {
        let present: Option<i32> = Nullable::present(value);
        assert_eq!(present, Some(value));
        assert!(present.is_present());
        assert_eq!(Nullable::get(&present), Some(&value));
    }

    #[rstest]
    fn option_get_on_empty_is_none() {
        let empty: Option<String> = None;
        assert_eq!(Nullable::get(&empty), None);
    }

    #[rstest]
    fn presence_agrees_with_get() {
        let present = Some("value");
        let empty: Option<&str> = None;
        assert_eq!(present.is_present(), Nullable::get(&present).is_some());
        assert_eq!(empty.is_present(), Nullable::get(&empty).is_some());
    }
}
