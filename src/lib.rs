//! This crate provides [`UriValue`], an immutable Uniform Resource Identifier
//! (URI) made of eight parts: scheme, user, password, host, port, path, query
//! and fragment.
//!
//! A `UriValue` is built either by parsing a URL with
//! [`UriValue::from_url`], or from a set of [`Part`]s with
//! [`UriValue::from_record`]. It can be decomposed back into a [`Record`],
//! and formatted into its canonical string form with `Display`.
//!
//! Values are never modified in place. Each `with_*` method returns a new
//! value with exactly one part replaced.
//!
//! ## Basic usage
//!
//! ```rust
//! use uri_value::UriValue;
//!
//! let uri = UriValue::from_url("http://www.rust-lang.org/foo/bar?query#frag")?;
//!
//! assert_eq!(uri.scheme(), "http");
//! assert_eq!(uri.authority(), "www.rust-lang.org");
//! assert_eq!(uri.path(), "/foo/bar");
//! assert_eq!(uri.query(), "query");
//! assert_eq!(uri.fragment(), "frag");
//!
//! let secure = uri.with_scheme("https");
//! assert_eq!(secure.to_string(), "https://www.rust-lang.org/foo/bar?query#frag");
//! # Ok::<(), uri_value::ParseError>(())
//! ```
//!
//! ## Canonical form
//!
//! The canonical form is `[scheme:]//authority path[?query][#fragment]`
//! where the authority is `[user[:password]@]host`. The port is tracked
//! but never written.
//!
//! Without a host there is no authority, and the canonical form is a path
//! starting with exactly one `/`:
//!
//! ```rust
//! use uri_value::UriValue;
//!
//! let uri = UriValue::new("", "", "", "", None, "//a/b", "", "");
//! assert_eq!(uri.to_string(), "/a/b");
//! ```
//!
//! ## Features
//!
//! - `serde`: `UriValue` (de)serializes as its canonical string, [`Record`]
//!   as a map from part names to values.
//! - `macros`: the `uri!` macro, which splits a URL literal at compile time.
pub use uri_value_core::*;

#[cfg(feature = "macros")]
pub use uri_value_macros::uri;
