//! Combinators over nullable containers.
//!
//! - [`bind`]: sequence through a mapper returning a nullable (flattening)
//! - [`fmap`]: transform the contained value, re-wrapping the result
//! - [`foreach`]: run a side effect on the contained value
//!
//! `bind` and `fmap` each come with a `*_member` variant taking a
//! [`Member`](crate::nullable::Member) accessor.
//!
//! Every combinator borrows its input and never mutates it.
//!
//! # Examples
//!
//! ```rust
//! use absent::combinators::{bind, fmap, foreach};
//!
//! let port: Option<&str> = Some("8080");
//! let parsed: Option<u16> = bind(&port, |text| text.parse().ok());
//! let next: Option<u16> = fmap(&parsed, |port| port + 1);
//!
//! let mut log = Vec::new();
//! foreach(&next, |port| log.push(format!("listening on {port}")));
//! assert_eq!(log, vec!["listening on 8081".to_string()]);
//! ```

mod bind;
mod fmap;
mod foreach;

pub use bind::{bind, bind_member};
pub use fmap::{fmap, fmap_member};
pub use foreach::foreach;
