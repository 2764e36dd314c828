//! Method-call spellings of the combinators.

use super::infix::Infix;
use crate::combinators::{bind, bind_member, fmap, fmap_member, foreach};
use crate::nullable::{Member, Nullable};

/// Chaining methods available on every [`Nullable`].
///
/// Each method delegates to the free function of the same name; see
/// [`bind`](crate::bind), [`fmap`](crate::fmap) and
/// [`foreach`](crate::foreach) for the semantics.
///
/// # Examples
///
/// ```rust
/// use absent::syntax::NullableExt;
///
/// let mut log = Vec::new();
/// Some("7")
///     .bind(|text| text.parse::<i32>().ok())
///     .fmap(|n| n * 6)
///     .foreach(|n| log.push(*n));
/// assert_eq!(log, vec![42]);
/// ```
pub trait NullableExt: Nullable {
    /// Method form of [`bind`](crate::bind).
    #[inline]
    fn bind<F, R>(&self, mapper: F) -> R
    where
        F: FnOnce(&Self::Value) -> R,
        R: Nullable,
    {
        bind(self, mapper)
    }

    /// Method form of [`bind_member`](crate::bind_member).
    #[inline]
    fn bind_member<B>(&self, accessor: Member<Self::Value, Self::Rebind<B>>) -> Self::Rebind<B> {
        bind_member::<Self, B>(self, accessor)
    }

    /// Method form of [`fmap`](crate::fmap).
    #[inline]
    fn fmap<F, B>(&self, mapper: F) -> Self::Rebind<B>
    where
        F: FnOnce(&Self::Value) -> B,
    {
        fmap::<Self, F, B>(self, mapper)
    }

    /// Method form of [`fmap_member`](crate::fmap_member).
    #[inline]
    fn fmap_member<B>(&self, accessor: Member<Self::Value, B>) -> Self::Rebind<B> {
        fmap_member::<Self, B>(self, accessor)
    }

    /// Method form of [`foreach`](crate::foreach).
    #[inline]
    fn foreach<F>(&self, effect: F)
    where
        F: FnOnce(&Self::Value),
    {
        foreach(self, effect);
    }

    /// Wraps the nullable in [`Infix`] to use the `>>` and `|` operators.
    #[inline]
    fn infix(self) -> Infix<Self> {
        Infix(self)
    }
}

impl<N: Nullable> NullableExt for N {}
