//! Error families: which failures `attempt` is allowed to absorb.

use std::error::Error;
use std::marker::PhantomData;

/// A boxed, thread-safe dynamic error.
pub type BoxError = Box<dyn Error + Send + Sync>;

/// Decides whether an error of type `E` belongs to a family of errors.
///
/// [`attempt_within`](crate::attempt_within) converts an error into an empty
/// nullable only when the chosen family contains it.
///
/// # Examples
///
/// A family over a caller-defined error enum:
///
/// ```rust
/// use absent::attempt::Family;
///
/// #[derive(Debug)]
/// enum StoreError {
///     NotFound,
///     Corrupted,
/// }
///
/// enum Missing {}
///
/// impl Family<StoreError> for Missing {
///     fn contains(error: &StoreError) -> bool {
///         matches!(error, StoreError::NotFound)
///     }
/// }
///
/// assert!(Missing::contains(&StoreError::NotFound));
/// assert!(!Missing::contains(&StoreError::Corrupted));
/// ```
pub trait Family<E: ?Sized> {
    /// Returns `true` if `error` is a member of this family.
    fn contains(error: &E) -> bool;
}

/// The broadest family: every error belongs to it.
///
/// This is the boundary used by [`attempt`](crate::attempt).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Everything {}

impl<E: ?Sized> Family<E> for Everything {
    #[inline]
    fn contains(_error: &E) -> bool {
        true
    }
}

/// The family of dynamic errors that are, or were caused by, a `T`.
///
/// An error belongs to `Kind<T>` when the error itself or any error reachable
/// through its [`source`](Error::source) chain is a `T`. Wrapping an error as
/// the source of another is how an error "derives" from `T`.
///
/// # Examples
///
/// ```rust
/// use absent::attempt::{BoxError, Family, Kind};
/// use std::fmt;
///
/// #[derive(Debug)]
/// struct Timeout;
///
/// impl fmt::Display for Timeout {
///     fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
///         write!(formatter, "timed out")
///     }
/// }
///
/// impl std::error::Error for Timeout {}
///
/// let error: BoxError = Box::new(Timeout);
/// assert!(Kind::<Timeout>::contains(&error));
/// assert!(!Kind::<std::fmt::Error>::contains(&error));
/// ```
pub struct Kind<T>(PhantomData<fn() -> T>);

fn caused_by<T: Error + 'static>(error: &(dyn Error + 'static)) -> bool {
    let mut current = Some(error);
    while let Some(candidate) = current {
        if candidate.is::<T>() {
            return true;
        }
        current = candidate.source();
    }
    false
}

impl<T: Error + 'static> Family<dyn Error> for Kind<T> {
    #[inline]
    fn contains(error: &(dyn Error + 'static)) -> bool {
        caused_by::<T>(error)
    }
}

impl<T: Error + 'static> Family<dyn Error + Send + Sync> for Kind<T> {
    #[inline]
    fn contains(error: &(dyn Error + Send + Sync + 'static)) -> bool {
        caused_by::<T>(error)
    }
}

impl<T: Error + 'static> Family<Box<dyn Error>> for Kind<T> {
    #[inline]
    fn contains(error: &Box<dyn Error>) -> bool {
        caused_by::<T>(&**error)
    }
}

impl<T: Error + 'static> Family<BoxError> for Kind<T> {
    #[inline]
    fn contains(error: &BoxError) -> bool {
        caused_by::<T>(&**error)
    }
}
