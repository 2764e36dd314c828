//! # absent
//!
//! Functor and monad combinators over any nullable container type.
//!
//! ## Overview
//!
//! A nullable container holds either nothing or exactly one value. This crate
//! lets you chain operations over such containers without checking for
//! presence at every step:
//!
//! - **Capability contract**: [`Nullable`], implemented for `Option<A>` and
//!   open to any caller-defined container
//! - **Combinators**: [`bind`], [`fmap`], [`foreach`], plus [`bind_member`]
//!   and [`fmap_member`] for read-only accessors ([`Member`])
//! - **Attempt**: [`attempt()`] and [`attempt_within`], turning failures of a
//!   chosen error family into absence
//! - **Syntax**: `>>` and `|` through [`Infix`](syntax::Infix) or
//!   [`infix_operators!`], and chaining methods through
//!   [`NullableExt`](syntax::NullableExt)
//!
//! ## Feature Flags
//!
//! - `attempt`: the [`attempt`](mod@attempt) module
//! - `infix`: the [`syntax`] module and the [`infix_operators!`] macro
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use absent::prelude::*;
//!
//! struct Person;
//!
//! impl Person {
//!     fn id(&self) -> Option<String> {
//!         Some("200".to_string())
//!     }
//! }
//!
//! assert_eq!(bind(&Some(Person), Person::id), Some("200".to_string()));
//! assert_eq!(bind(&None::<Person>, Person::id), None);
//!
//! let length = Infix(Some(Person)) >> Person::id | String::len;
//! assert_eq!(length.into_inner(), Some(3));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types, traits and functions.
///
/// # Usage
///
/// ```rust
/// use absent::prelude::*;
/// ```
pub mod prelude {
    pub use crate::combinators::*;
    pub use crate::nullable::{Member, Nullable};

    #[cfg(feature = "attempt")]
    pub use crate::attempt::*;

    #[cfg(feature = "infix")]
    pub use crate::syntax::*;

    #[cfg(feature = "infix")]
    pub use crate::infix_operators;
}

pub mod combinators;
pub mod nullable;

#[cfg(feature = "attempt")]
pub mod attempt;

#[cfg(feature = "infix")]
pub mod syntax;

pub use combinators::{bind, bind_member, fmap, fmap_member, foreach};
pub use nullable::{Member, Nullable};

#[cfg(feature = "attempt")]
pub use attempt::{attempt, attempt_within};
