use super::JsonValue;
use crate::json::{escape_json_string, stringify};
use std::{collections::BTreeMap, fmt::Debug};

/// A JSON object backed by a `BTreeMap`.
///
/// [`JsonObject::get`] returns `None` for an absent key and `Some(&JsonValue::Null)` for a key
/// that is present with a `null` value.
#[derive(Clone, Default, PartialEq)]
pub struct JsonObject(pub BTreeMap<String, JsonValue>);

impl JsonObject {
	#[must_use]
	pub fn get(&self, key: &str) -> Option<&JsonValue> {
		self.0.get(key)
	}

	#[must_use]
	pub fn contains_key(&self, key: &str) -> bool {
		self.0.contains_key(key)
	}

	#[must_use]
	pub fn stringify(&self) -> String {
		let items = self
			.0
			.iter()
			.map(|(key, value)| format!("\"{}\":{}", escape_json_string(key), stringify(value)))
			.collect::<Vec<_>>();
		format!("{{{}}}", items.join(","))
	}
}

impl Debug for JsonObject {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_map().entries(&self.0).finish()
	}
}

impl From<Vec<(&str, JsonValue)>> for JsonObject {
	fn from(input: Vec<(&str, JsonValue)>) -> Self {
		JsonObject(input.into_iter().map(|(key, value)| (key.to_string(), value)).collect())
	}
}
