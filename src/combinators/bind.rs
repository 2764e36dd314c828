//! Monadic sequencing over nullable containers.
//!
//! # Laws
//!
//! ## Left Identity Law
//!
//! ```text
//! bind(&N::present(a), f) == f(&a)
//! ```
//!
//! ## Right Identity Law
//!
//! ```text
//! bind(&n, |x| N::present(x.clone())) == n
//! ```
//!
//! ## Associativity Law
//!
//! ```text
//! bind(&bind(&n, f), g) == bind(&n, |x| bind(&f(x), g))
//! ```

use crate::nullable::{Member, Nullable};

/// Sequences a nullable through a mapper that itself returns a nullable.
///
/// - When `input` is empty, returns `R::empty()` without invoking `mapper`.
/// - When `input` is present, returns `mapper(value)` as is. No extra layer of
///   wrapping is added, which is what distinguishes `bind` from
///   [`fmap`](crate::fmap).
///
/// A panic raised by `mapper` propagates to the caller.
///
/// # Arguments
///
/// * `input` - Any nullable container
/// * `mapper` - A function `&A -> R` where `R` is itself nullable
///
/// # Examples
///
/// ```rust
/// use absent::bind;
///
/// fn parse(text: &&str) -> Option<i32> {
///     text.parse().ok()
/// }
///
/// assert_eq!(bind(&Some("42"), parse), Some(42));
/// assert_eq!(bind(&Some("forty-two"), parse), None);
/// assert_eq!(bind(&None::<&str>, parse), None);
/// ```
#[inline]
pub fn bind<N, F, R>(input: &N, mapper: F) -> R
where
    N: Nullable,
    F: FnOnce(&N::Value) -> R,
    R: Nullable,
{
    match input.get() {
        Some(value) => mapper(value),
        None => R::empty(),
    }
}

/// The same as [`bind`], for a read-only, argument-less accessor.
///
/// Behaves exactly like `bind(input, |value| accessor(value))`.
///
/// # Examples
///
/// ```rust
/// use absent::bind_member;
///
/// struct Person;
///
/// impl Person {
///     fn id(&self) -> Option<String> {
///         Some("200".to_string())
///     }
/// }
///
/// assert_eq!(bind_member(&Some(Person), Person::id), Some("200".to_string()));
/// assert_eq!(bind_member(&None::<Person>, Person::id), None);
/// ```
#[inline]
pub fn bind_member<N, B>(input: &N, accessor: Member<N::Value, N::Rebind<B>>) -> N::Rebind<B>
where
    N: Nullable,
{
    bind(input, accessor)
}
