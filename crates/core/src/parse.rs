//! URL splitting.
//!
//! Every function here works on raw bytes and only returns index ranges into
//! the input. Delimiters are all ASCII, so the ranges always fall on UTF-8
//! character boundaries and can be used to slice the input `str`.
use std::ops::Range;

use crate::uri::Reason;

fn is_scheme_char(b: u8) -> bool {
	// ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )
	b.is_ascii_alphanumeric() | matches!(b, b'+' | b'-' | b'.')
}

/// Checks that the input is a well formed scheme name.
pub fn is_scheme(bytes: &[u8]) -> bool {
	match bytes.split_first() {
		Some((first, rest)) => first.is_ascii_alphabetic() && rest.iter().copied().all(is_scheme_char),
		None => false,
	}
}

/// Longest port accepted by [`host_port_end`].
const MAX_PORT_DIGITS: usize = 5;

/// Checks if the `:` at `colon` introduces a port rather than ending a
/// scheme.
///
/// That is the case when it is followed by 1 to 5 digits running up to the
/// next `/` or the end of `bytes`, as in `example.com:8080/path`. Returns the
/// end of those digits.
pub fn host_port_end(bytes: &[u8], colon: usize) -> Option<usize> {
	let start = colon + 1;
	let digits = bytes[start..].iter().take_while(|b| b.is_ascii_digit()).count();
	let end = start + digits;

	let closed = end == bytes.len() || bytes[end] == b'/';
	(closed && (1..=MAX_PORT_DIGITS).contains(&digits)).then_some(end)
}

/// Ranges of the syntactic components of a URL.
///
/// Delimiters (`:`, `//`, `?`, `#`) are excluded from the ranges.
#[derive(Debug, PartialEq, Eq)]
pub struct ReferenceParts {
	pub scheme: Option<Range<usize>>,
	pub authority: Option<Range<usize>>,
	pub path: Range<usize>,
	pub query: Option<Range<usize>>,
	pub fragment: Option<Range<usize>>,
}

/// Splits a URL into its components.
///
/// The fragment starts at the first `#` and the query at the first `?`
/// before it. In what remains, a `:` found before any `/` ends the scheme,
/// unless it is followed by a port (see [`host_port_end`]) in which case
/// everything up to the end of the port is an authority. Otherwise an
/// authority is introduced by `//` and runs up to the next `/`.
pub fn reference_parts(bytes: &[u8]) -> ReferenceParts {
	let fragment_start = bytes.iter().position(|b| *b == b'#');
	let query_end = fragment_start.unwrap_or(bytes.len());
	let query_start = bytes[..query_end].iter().position(|b| *b == b'?');
	let hier_end = query_start.unwrap_or(query_end);
	let hier = &bytes[..hier_end];

	let mut scheme = None;
	let mut authority = None;
	let mut i = 0;

	let colon = hier
		.iter()
		.position(|b| matches!(b, b':' | b'/'))
		.filter(|j| hier[*j] == b':');

	if let Some(colon) = colon {
		match host_port_end(hier, colon) {
			Some(end) => {
				authority = Some(0..end);
				i = end
			}
			None => {
				scheme = Some(0..colon);
				i = colon + 1
			}
		}
	}

	if authority.is_none() && hier[i..].starts_with(b"//") {
		let start = i + 2;
		let end = hier[start..]
			.iter()
			.position(|b| *b == b'/')
			.map_or(hier_end, |len| start + len);
		authority = Some(start..end);
		i = end
	}

	ReferenceParts {
		scheme,
		authority,
		path: i..hier_end,
		query: query_start.map(|start| (start + 1)..query_end),
		fragment: fragment_start.map(|start| (start + 1)..bytes.len()),
	}
}

/// Ranges of the components of an authority.
#[derive(Debug, PartialEq, Eq)]
pub struct AuthorityParts {
	pub user: Option<Range<usize>>,
	pub password: Option<Range<usize>>,
	pub host: Range<usize>,
	pub port: Option<Range<usize>>,
}

/// Splits the authority found at `range` in `bytes`.
///
/// The last `@` ends the user info, in which the first `:` separates the user
/// from the password. A host starting with `[` is an IP literal running up to
/// the matching `]`. The port is whatever follows the `:` after the host and
/// may be empty.
pub fn authority_parts(bytes: &[u8], range: Range<usize>) -> Result<AuthorityParts, Reason> {
	let end = range.end;
	let authority = &bytes[range.clone()];

	let (user, password, host_start) = match authority.iter().rposition(|b| *b == b'@') {
		Some(at) => {
			let at = range.start + at;
			match bytes[range.start..at].iter().position(|b| *b == b':') {
				Some(colon) => {
					let colon = range.start + colon;
					(Some(range.start..colon), Some((colon + 1)..at), at + 1)
				}
				None => (Some(range.start..at), None, at + 1),
			}
		}
		None => (None, None, range.start),
	};

	let host_end = if host_start < end && bytes[host_start] == b'[' {
		match bytes[host_start..end].iter().position(|b| *b == b']') {
			Some(close) => {
				let host_end = host_start + close + 1;
				if host_end < end && bytes[host_end] != b':' {
					return Err(Reason::InvalidPort);
				}

				host_end
			}
			None => return Err(Reason::UnclosedIpLiteral),
		}
	} else {
		let mut i = host_start;
		while i < end && bytes[i] != b':' {
			i += 1
		}

		i
	};

	let port = (host_end < end).then_some((host_end + 1)..end);

	Ok(AuthorityParts {
		user,
		password,
		host: host_start..host_end,
		port,
	})
}
