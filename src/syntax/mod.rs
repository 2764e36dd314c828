//! Alternate spellings for the combinators.
//!
//! - [`Infix`]: `>>` for [`bind`](crate::bind) and `|` for
//!   [`fmap`](crate::fmap) on any nullable
//! - [`infix_operators!`](crate::infix_operators): the same operators
//!   implemented directly on a caller-defined nullable type
//! - [`NullableExt`]: `.bind(..)`, `.fmap(..)`, `.foreach(..)` methods
//!
//! All spellings delegate to the named functions and are fully
//! interchangeable with them.
//!
//! # Examples
//!
//! ```rust
//! use absent::syntax::{Infix, NullableExt};
//!
//! struct Person;
//!
//! impl Person {
//!     fn id(&self) -> Option<String> {
//!         Some("200".to_string())
//!     }
//! }
//!
//! let via_operator = (Infix(Some(Person)) >> Person::id).into_inner();
//! let via_method = Some(Person).bind(Person::id);
//! assert_eq!(via_operator, via_method);
//! ```

mod ext;
mod infix;

pub use ext::NullableExt;
pub use infix::Infix;
