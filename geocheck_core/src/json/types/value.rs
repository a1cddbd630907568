//! The JSON value enum.

use super::{JsonArray, JsonObject};
use crate::json::{parse_json_str, stringify};
use anyhow::Result;
use std::fmt::Display;

/// Any JSON value.
#[derive(Clone, Debug, PartialEq)]
pub enum JsonValue {
	Array(JsonArray),
	Boolean(bool),
	Null,
	Number(f64),
	Object(JsonObject),
	String(String),
}

impl JsonValue {
	pub fn parse_str(json: &str) -> Result<JsonValue> {
		parse_json_str(json)
	}

	/// True for objects, arrays and `null`.
	///
	/// GeoJSON producers written in JavaScript check members with `typeof x === "object"`,
	/// which holds for exactly these three kinds of value.
	#[must_use]
	pub fn is_object_like(&self) -> bool {
		matches!(self, JsonValue::Object(_) | JsonValue::Array(_) | JsonValue::Null)
	}

	/// Looks up `key` if this value is an object.
	#[must_use]
	pub fn get(&self, key: &str) -> Option<&JsonValue> {
		match self {
			JsonValue::Object(object) => object.get(key),
			_ => None,
		}
	}

	#[must_use]
	pub fn stringify(&self) -> String {
		stringify(self)
	}
}

impl Display for JsonValue {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(&self.stringify())
	}
}

impl From<&str> for JsonValue {
	fn from(input: &str) -> Self {
		JsonValue::String(input.to_string())
	}
}

impl From<bool> for JsonValue {
	fn from(input: bool) -> Self {
		JsonValue::Boolean(input)
	}
}

impl From<f64> for JsonValue {
	fn from(input: f64) -> Self {
		JsonValue::Number(input)
	}
}

impl From<i32> for JsonValue {
	fn from(input: i32) -> Self {
		JsonValue::Number(f64::from(input))
	}
}

impl From<Vec<JsonValue>> for JsonValue {
	fn from(input: Vec<JsonValue>) -> Self {
		JsonValue::Array(JsonArray(input))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("[]", true)]
	#[case("[1, 2]", true)]
	#[case("{}", true)]
	#[case("null", true)]
	#[case("true", false)]
	#[case("1.5", false)]
	#[case("\"x\"", false)]
	fn object_like(#[case] json: &str, #[case] expected: bool) -> Result<()> {
		assert_eq!(JsonValue::parse_str(json)?.is_object_like(), expected);
		Ok(())
	}

	#[test]
	fn conversions() {
		assert_eq!(JsonValue::from("a"), JsonValue::String("a".to_string()));
		assert_eq!(JsonValue::from(true), JsonValue::Boolean(true));
		assert_eq!(JsonValue::from(3), JsonValue::Number(3.0));
		assert_eq!(
			JsonValue::from(vec![JsonValue::from(1), JsonValue::Null]).stringify(),
			"[1,null]"
		);
	}

	#[test]
	fn get() -> Result<()> {
		let value = JsonValue::parse_str(r#"{"type":"Feature","properties":null}"#)?;

		assert_eq!(value.get("type"), Some(&JsonValue::from("Feature")));
		assert_eq!(value.get("properties"), Some(&JsonValue::Null));
		assert_eq!(value.get("geometry"), None);
		assert_eq!(JsonValue::from(1).get("type"), None);
		assert_eq!(JsonValue::parse_str("[1]")?.get("0"), None);
		Ok(())
	}

	#[test]
	fn display_is_compact_json() -> Result<()> {
		let value = JsonValue::parse_str("{ \"a\" : [ 1 , true ] }")?;
		assert_eq!(value.to_string(), r#"{"a":[1,true]}"#);
		Ok(())
	}
}
