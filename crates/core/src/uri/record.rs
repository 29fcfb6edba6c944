use std::{fmt, str::FromStr};

use smallvec::SmallVec;

/// Number of parts in a URI.
pub const RECORD_LEN: usize = 8;

/// Name of a URI part.
///
/// Variants are declared in record order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PartName {
	Scheme,
	Host,
	Port,
	User,
	Password,
	Path,
	Query,
	Fragment,
}

impl PartName {
	/// Every part name, in record order.
	pub const ALL: [Self; RECORD_LEN] = [
		Self::Scheme,
		Self::Host,
		Self::Port,
		Self::User,
		Self::Password,
		Self::Path,
		Self::Query,
		Self::Fragment,
	];

	/// Every part name as a string, in record order.
	pub const NAMES: &'static [&'static str] = &[
		"scheme", "host", "port", "user", "password", "path", "query", "fragment",
	];

	pub fn as_str(&self) -> &'static str {
		Self::NAMES[*self as usize]
	}
}

impl fmt::Display for PartName {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Unknown URI part name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown URI part `{0}`")]
pub struct UnknownPart(pub String);

impl FromStr for PartName {
	type Err = UnknownPart;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::NAMES
			.iter()
			.position(|name| *name == s)
			.map(|i| Self::ALL[i])
			.ok_or_else(|| UnknownPart(s.to_owned()))
	}
}

/// URI part along with its value.
///
/// The port is the only part that is not a string. It is `None` when absent.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Part {
	Scheme(String),
	Host(String),
	Port(Option<u16>),
	User(String),
	Password(String),
	Path(String),
	Query(String),
	Fragment(String),
}

impl Part {
	/// Returns the empty value of the given part.
	pub fn empty(name: PartName) -> Self {
		match name {
			PartName::Scheme => Self::Scheme(String::new()),
			PartName::Host => Self::Host(String::new()),
			PartName::Port => Self::Port(None),
			PartName::User => Self::User(String::new()),
			PartName::Password => Self::Password(String::new()),
			PartName::Path => Self::Path(String::new()),
			PartName::Query => Self::Query(String::new()),
			PartName::Fragment => Self::Fragment(String::new()),
		}
	}

	pub fn name(&self) -> PartName {
		match self {
			Self::Scheme(_) => PartName::Scheme,
			Self::Host(_) => PartName::Host,
			Self::Port(_) => PartName::Port,
			Self::User(_) => PartName::User,
			Self::Password(_) => PartName::Password,
			Self::Path(_) => PartName::Path,
			Self::Query(_) => PartName::Query,
			Self::Fragment(_) => PartName::Fragment,
		}
	}

	/// Returns the value of a string part, or `None` for the port.
	pub fn as_str(&self) -> Option<&str> {
		match self {
			Self::Scheme(s)
			| Self::Host(s)
			| Self::User(s)
			| Self::Password(s)
			| Self::Path(s)
			| Self::Query(s)
			| Self::Fragment(s) => Some(s.as_str()),
			Self::Port(_) => None,
		}
	}

	/// Checks if the part is an empty string or an absent port.
	pub fn is_empty(&self) -> bool {
		match self {
			Self::Port(port) => port.is_none(),
			other => other.as_str().unwrap_or_default().is_empty(),
		}
	}
}

/// Ordered set of URI parts, at most one per [`PartName`].
///
/// This is the interchange format between [`UriValue::as_record`] and
/// [`UriValue::from_record`].
///
/// [`UriValue::as_record`]: crate::UriValue::as_record
/// [`UriValue::from_record`]: crate::UriValue::from_record
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct Record(SmallVec<[Part; RECORD_LEN]>);

impl Record {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn contains(&self, name: PartName) -> bool {
		self.get(name).is_some()
	}

	pub fn get(&self, name: PartName) -> Option<&Part> {
		self.0.iter().find(|part| part.name() == name)
	}

	/// Inserts a part.
	///
	/// If a part with the same name is already present, it is replaced in
	/// place and returned. Otherwise the part is appended.
	pub fn set(&mut self, part: Part) -> Option<Part> {
		match self.0.iter_mut().find(|p| p.name() == part.name()) {
			Some(existing) => Some(std::mem::replace(existing, part)),
			None => {
				self.0.push(part);
				None
			}
		}
	}

	pub fn remove(&mut self, name: PartName) -> Option<Part> {
		let i = self.0.iter().position(|part| part.name() == name)?;
		Some(self.0.remove(i))
	}

	pub fn iter(&self) -> std::slice::Iter<Part> {
		self.0.iter()
	}
}

impl Extend<Part> for Record {
	fn extend<T: IntoIterator<Item = Part>>(&mut self, iter: T) {
		for part in iter {
			self.set(part);
		}
	}
}

impl FromIterator<Part> for Record {
	fn from_iter<T: IntoIterator<Item = Part>>(iter: T) -> Self {
		let mut result = Self::new();
		result.extend(iter);
		result
	}
}

impl IntoIterator for Record {
	type Item = Part;
	type IntoIter = smallvec::IntoIter<[Part; RECORD_LEN]>;

	fn into_iter(self) -> Self::IntoIter {
		self.0.into_iter()
	}
}

impl<'a> IntoIterator for &'a Record {
	type Item = &'a Part;
	type IntoIter = std::slice::Iter<'a, Part>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}
