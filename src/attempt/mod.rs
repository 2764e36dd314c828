//! Bridging fallible computations into nullable containers.
//!
//! A computation that may fail is a function returning `Result<A, E>`.
//! `attempt` runs it and turns a failure into an empty nullable:
//!
//! - [`attempt`] absorbs every error ([`Everything`]).
//! - [`attempt_within`] absorbs only errors contained in a caller-chosen
//!   [`Family`], and hands every other error back unchanged.
//!
//! Keeping the boundary explicit avoids silently swallowing unrelated
//! failures. Callers who pick a broad family opt into absorbing more.
//!
//! # Examples
//!
//! ```rust
//! use absent::attempt::{attempt, attempt_within, BoxError, Kind};
//! use std::num::ParseIntError;
//!
//! let parsed: Option<i32> = attempt(|| "42".parse::<i32>());
//! assert_eq!(parsed, Some(42));
//!
//! let parse = || -> Result<i32, BoxError> { Ok("x".parse::<i32>()?) };
//! let absorbed: Result<Option<i32>, BoxError> = attempt_within::<Kind<ParseIntError>, _, _>(parse);
//! assert!(matches!(absorbed, Ok(None)));
//! ```

mod family;

pub use family::{BoxError, Everything, Family, Kind};

use crate::nullable::Nullable;

/// Runs `fallible`, wrapping its value in a present nullable, or returning an
/// empty one if it fails with any error.
///
/// The nullable template is chosen by the caller, usually through inference.
///
/// # Examples
///
/// ```rust
/// use absent::attempt;
///
/// let answer: Option<i32> = attempt(|| Ok::<_, String>(42));
/// assert_eq!(answer, Some(42));
///
/// let failed: Option<i32> = attempt(|| Err::<i32, _>("boom"));
/// assert_eq!(failed, None);
/// ```
#[inline]
pub fn attempt<N, E>(fallible: impl FnOnce() -> Result<N::Value, E>) -> N
where
    N: Nullable,
{
    fallible().map_or_else(|_| N::empty(), N::present)
}

/// Runs `fallible`, absorbing only errors contained in the family `Base`.
///
/// - `Ok(value)` becomes `Ok(N::present(value))`.
/// - An error contained in `Base` becomes `Ok(N::empty())`.
/// - Any other error is returned as is, in `Err`.
///
/// # Errors
///
/// Returns the error produced by `fallible` when `Base` does not contain it.
///
/// # Examples
///
/// ```rust
/// use absent::attempt::{attempt_within, Family};
///
/// #[derive(Debug, PartialEq)]
/// enum FetchError {
///     NotFound,
///     Unauthorized,
/// }
///
/// enum Missing {}
///
/// impl Family<FetchError> for Missing {
///     fn contains(error: &FetchError) -> bool {
///         *error == FetchError::NotFound
///     }
/// }
///
/// let absorbed: Result<Option<u32>, FetchError> =
///     attempt_within::<Missing, _, _>(|| Err(FetchError::NotFound));
/// assert_eq!(absorbed, Ok(None));
///
/// let propagated: Result<Option<u32>, FetchError> =
///     attempt_within::<Missing, _, _>(|| Err(FetchError::Unauthorized));
/// assert_eq!(propagated, Err(FetchError::Unauthorized));
/// ```
#[inline]
pub fn attempt_within<Base, N, E>(
    fallible: impl FnOnce() -> Result<N::Value, E>,
) -> Result<N, E>
where
    Base: Family<E> + ?Sized,
    N: Nullable,
{
    match fallible() {
        Ok(value) => Ok(N::present(value)),
        Err(error) if Base::contains(&error) => Ok(N::empty()),
        Err(error) => Err(error),
    }
}
