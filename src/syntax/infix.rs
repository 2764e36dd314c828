//! Operator spellings of `bind` (`>>`) and `fmap` (`|`).

use std::ops::{BitOr, Shr};

use crate::combinators::{bind, fmap};
use crate::nullable::Nullable;

/// A pipeline wrapper giving any nullable the `>>` and `|` operators.
///
/// - `Infix(n) >> f` is `Infix(bind(&n, f))`
/// - `Infix(n) | f` is `Infix(fmap(&n, f))`
///
/// Mappers may be closures, functions, or method paths such as `Person::id`.
/// `>>` binds tighter than `|`, so `Infix(n) >> f | g` applies `f` first.
/// Chains that call `|` before `>>` need parentheses.
///
/// `Infix<N>` has the same size and layout as `N`.
///
/// # Examples
///
/// ```rust
/// use absent::syntax::Infix;
///
/// let parse = |text: &&str| text.parse::<i32>().ok();
///
/// let result = Infix(Some("20")) >> parse | (|n: &i32| n * 10);
/// assert_eq!(result.into_inner(), Some(200));
///
/// let result = Infix(Some("twenty")) >> parse | (|n: &i32| n * 10);
/// assert_eq!(result.into_inner(), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(transparent)]
pub struct Infix<N>(pub N);

impl<N> Infix<N> {
    /// Wraps a nullable so it can be used with the `>>` and `|` operators.
    #[inline]
    pub const fn new(nullable: N) -> Self {
        Self(nullable)
    }

    /// Consumes the wrapper and returns the nullable.
    #[inline]
    pub fn into_inner(self) -> N {
        self.0
    }

    /// Returns a reference to the nullable.
    #[inline]
    pub const fn as_inner(&self) -> &N {
        &self.0
    }
}

impl<N> From<N> for Infix<N> {
    #[inline]
    fn from(nullable: N) -> Self {
        Self::new(nullable)
    }
}

impl<N, F, R> Shr<F> for Infix<N>
where
    N: Nullable,
    F: FnOnce(&N::Value) -> R,
    R: Nullable,
{
    type Output = Infix<R>;

    #[inline]
    fn shr(self, mapper: F) -> Self::Output {
        Infix(bind(&self.0, mapper))
    }
}

impl<N, F, B> BitOr<F> for Infix<N>
where
    N: Nullable,
    F: FnOnce(&N::Value) -> B,
{
    type Output = Infix<N::Rebind<B>>;

    #[inline]
    fn bitor(self, mapper: F) -> Self::Output {
        Infix(fmap::<N, F, B>(&self.0, mapper))
    }
}

static_assertions::assert_eq_size!(Infix<Option<u64>>, Option<u64>);
static_assertions::assert_eq_size!(Infix<Option<String>>, Option<String>);
static_assertions::assert_impl_all!(Infix<Option<i32>>: Send, Sync, Copy);
static_assertions::assert_not_impl_any!(Infix<Option<std::rc::Rc<i32>>>: Send, Sync);

/// Implements `>>` (bind) and `|` (fmap) directly on a nullable type.
///
/// The orphan rule keeps this crate from adding operators to types it does
/// not own, such as `Option`. A crate defining its own nullable container
/// `Type<A>` can invoke `infix_operators!(Type)` to get both operators without
/// going through [`Infix`].
///
/// The type must take its element type as its only generic parameter and
/// implement [`Nullable`](crate::Nullable) with `Value = A`.
///
/// # Examples
///
/// ```rust
/// use absent::{infix_operators, Nullable};
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
/// infix_operators!(Maybe);
///
/// let halve = |n: &i32| if n % 2 == 0 { Maybe::Just(n / 2) } else { Maybe::Nothing };
///
/// assert_eq!(Maybe::Just(8) >> halve, Maybe::Just(4));
/// assert_eq!(Maybe::Just(8) | (|n: &i32| n + 1), Maybe::Just(9));
/// assert_eq!(Maybe::Nothing >> halve, Maybe::Nothing);
/// ```
#[macro_export]
macro_rules! infix_operators {
    ($nullable:ident) => {
        impl<A, F, R> ::core::ops::Shr<F> for $nullable<A>
        where
            $nullable<A>: $crate::Nullable<Value = A>,
            F: ::core::ops::FnOnce(&A) -> R,
            R: $crate::Nullable,
        {
            type Output = R;

            #[inline]
            fn shr(self, mapper: F) -> R {
                $crate::bind::<Self, F, R>(&self, mapper)
            }
        }

        impl<A, F, B> ::core::ops::BitOr<F> for $nullable<A>
        where
            $nullable<A>: $crate::Nullable<Value = A>,
            F: ::core::ops::FnOnce(&A) -> B,
        {
            type Output = <$nullable<A> as $crate::Nullable>::Rebind<B>;

            #[inline]
            fn bitor(self, mapper: F) -> Self::Output {
                $crate::fmap::<Self, F, B>(&self, mapper)
            }
        }
    };
}
