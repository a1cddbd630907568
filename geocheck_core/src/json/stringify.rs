use super::JsonValue;
use std::fmt::Write;

/// Serializes a value as compact JSON. Non-finite numbers become `null`.
pub fn stringify(json: &JsonValue) -> String {
	match json {
		JsonValue::String(s) => format!("\"{}\"", escape_json_string(s)),
		JsonValue::Number(n) if n.is_finite() => n.to_string(),
		JsonValue::Number(_) | JsonValue::Null => String::from("null"),
		JsonValue::Boolean(b) => b.to_string(),
		JsonValue::Array(array) => array.stringify(),
		JsonValue::Object(object) => object.stringify(),
	}
}

pub fn escape_json_string(input: &str) -> String {
	let mut output = String::with_capacity(input.len());
	for c in input.chars() {
		match c {
			'"' => output.push_str("\\\""),
			'\\' => output.push_str("\\\\"),
			'\n' => output.push_str("\\n"),
			'\r' => output.push_str("\\r"),
			'\t' => output.push_str("\\t"),
			'\u{08}' => output.push_str("\\b"),
			'\u{0c}' => output.push_str("\\f"),
			c if c.is_control() => {
				let _ = write!(output, "\\u{:04x}", c as u32);
			}
			c => output.push(c),
		}
	}
	output
}
