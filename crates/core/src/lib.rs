//! Immutable URI value object.
//!
//! See the [`uri-value`](https://docs.rs/uri-value) crate for the
//! documentation.
pub(crate) mod parse;
pub mod uri;

#[cfg(feature = "serde")]
mod serde;

pub use uri::{ParseError, Part, PartName, Reason, Record, UnknownPart, UriValue, RECORD_LEN};
