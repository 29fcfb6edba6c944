use std::fmt;

use serde::{
	de::{self, MapAccess, Visitor},
	ser::SerializeMap,
	Deserialize, Deserializer, Serialize, Serializer,
};

use crate::{Part, PartName, Record, UriValue};

impl Serialize for UriValue {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		serializer.collect_str(self)
	}
}

impl<'de> Deserialize<'de> for UriValue {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		struct UriVisitor;

		impl<'de> Visitor<'de> for UriVisitor {
			type Value = UriValue;

			fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
				write!(formatter, "a URL")
			}

			fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
			where
				E: de::Error,
			{
				UriValue::from_url(v).map_err(E::custom)
			}
		}

		deserializer.deserialize_str(UriVisitor)
	}
}

impl Serialize for PartName {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		serializer.serialize_str(self.as_str())
	}
}

impl<'de> Deserialize<'de> for PartName {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		struct NameVisitor;

		impl<'de> Visitor<'de> for NameVisitor {
			type Value = PartName;

			fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
				write!(formatter, "a URI part name")
			}

			fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
			where
				E: de::Error,
			{
				v.parse()
					.map_err(|_| E::unknown_field(v, PartName::NAMES))
			}
		}

		deserializer.deserialize_identifier(NameVisitor)
	}
}

/// Serialized as a map from part names to values, in record order.
impl Serialize for Record {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		let mut map = serializer.serialize_map(Some(self.len()))?;

		for part in self {
			match part {
				Part::Port(port) => map.serialize_entry(&part.name(), port)?,
				Part::Scheme(value)
				| Part::Host(value)
				| Part::User(value)
				| Part::Password(value)
				| Part::Path(value)
				| Part::Query(value)
				| Part::Fragment(value) => map.serialize_entry(&part.name(), value)?,
			}
		}

		map.end()
	}
}

/// Unknown names, duplicate names and values of the wrong type are all
/// rejected.
impl<'de> Deserialize<'de> for Record {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		struct RecordVisitor;

		impl<'de> Visitor<'de> for RecordVisitor {
			type Value = Record;

			fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
				write!(formatter, "a map of URI parts")
			}

			fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
			where
				A: MapAccess<'de>,
			{
				let mut record = Record::new();

				while let Some(name) = map.next_key::<PartName>()? {
					if record.contains(name) {
						return Err(de::Error::duplicate_field(name.as_str()));
					}

					let part = match name {
						PartName::Scheme => Part::Scheme(map.next_value()?),
						PartName::Host => Part::Host(map.next_value()?),
						PartName::Port => Part::Port(map.next_value()?),
						PartName::User => Part::User(map.next_value()?),
						PartName::Password => Part::Password(map.next_value()?),
						PartName::Path => Part::Path(map.next_value()?),
						PartName::Query => Part::Query(map.next_value()?),
						PartName::Fragment => Part::Fragment(map.next_value()?),
					};

					record.set(part);
				}

				Ok(record)
			}
		}

		deserializer.deserialize_map(RecordVisitor)
	}
}

#[cfg(test)]
mod tests {
	use crate::{Part, Record, UriValue};

	#[test]
	fn record_map() {
		let uri = UriValue::from_url("http://x.com:8080/p").unwrap();
		let json = serde_json::to_string(&uri.as_record(false)).unwrap();
		assert_eq!(json, r#"{"scheme":"http","host":"x.com","port":8080,"path":"/p"}"#);

		let record: Record = serde_json::from_str(&json).unwrap();
		assert_eq!(UriValue::from_record(record), uri)
	}

	#[test]
	fn record_null_port() {
		let record: Record = serde_json::from_str(r#"{"host":"x.com","port":null}"#).unwrap();
		assert_eq!(record.len(), 2);
		assert!(record.iter().any(|part| *part == Part::Port(None)))
	}

	#[test]
	fn record_is_strict() {
		let vectors = [
			r#"{"pass":"secret"}"#,
			r#"{"port":"80"}"#,
			r#"{"port":70000}"#,
			r#"{"host":1}"#,
			r#"{"host":"a.com","host":"b.com"}"#,
		];

		for input in vectors {
			assert!(serde_json::from_str::<Record>(input).is_err(), "{input}")
		}
	}
}
