//! This crate provides the `uri!` macro, which checks a URL literal at
//! compile time. It is re-exported by the [`uri-value`] crate when the
//! `macros` feature is enabled.
//!
//! [`uri-value`]: <https://github.com/timothee-haudebourg/uri-value>
//!
//! ## Basic usage
//!
//! ```ignore
//! use uri_value::{uri, UriValue};
//!
//! let uri: UriValue = uri!("https://www.rust-lang.org/foo/bar#frag");
//! assert_eq!(uri.host(), "www.rust-lang.org");
//! ```
//!
//! A literal rejected by [`UriValue::from_url`] is a compile error.
use proc_macro::TokenStream;
use quote::quote;
use uri_value_core::UriValue;

/// Build a `UriValue` from a URL literal split at compile time.
///
/// This macro expects a single string literal token representing the URL.
#[proc_macro]
pub fn uri(tokens: TokenStream) -> TokenStream {
	match syn::parse::<syn::LitStr>(tokens) {
		Ok(lit) => match UriValue::from_url(&lit.value()) {
			Ok(uri) => {
				let scheme = uri.scheme();
				let user = uri.user();
				let password = uri.password();
				let host = uri.host();
				let port = match uri.port() {
					Some(port) => quote!(::core::option::Option::Some(#port)),
					None => quote!(::core::option::Option::None),
				};
				let path = uri.path();
				let query = uri.query();
				let fragment = uri.fragment();

				quote! {
					::uri_value::UriValue::new(
						#scheme,
						#user,
						#password,
						#host,
						#port,
						#path,
						#query,
						#fragment,
					)
				}
				.into()
			}
			Err(e) => syn::Error::new(lit.span(), e).to_compile_error().into(),
		},
		Err(e) => e.to_compile_error().into(),
	}
}
