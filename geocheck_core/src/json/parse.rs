use super::{JsonArray, JsonObject, JsonValue};
use crate::byte_iterator::{
	ByteIterator, parse_array_entries, parse_number_as, parse_object_entries, parse_quoted_json_string, parse_tag,
};
use anyhow::{Context, Result};
use std::{collections::BTreeMap, io::Read};

/// Deepest nesting of arrays and objects the parser accepts.
pub const MAX_DEPTH: usize = 256;

const CONTEXT_LENGTH: usize = 40;

/// Parses a complete JSON document from text.
pub fn parse_json_str(json: &str) -> Result<JsonValue> {
	let mut iter = ByteIterator::from_text(json, true);
	parse_json_document(&mut iter).with_context(|| {
		let mut excerpt: String = json.trim().chars().take(CONTEXT_LENGTH).collect();
		if excerpt.len() < json.trim().len() {
			excerpt.push('…');
		}
		format!("while parsing JSON '{excerpt}'")
	})
}

/// Parses a complete JSON document from a reader.
pub fn parse_json_reader(reader: impl Read) -> Result<JsonValue> {
	let mut iter = ByteIterator::from_reader(reader, true);
	parse_json_document(&mut iter).context("while parsing JSON")
}

fn parse_json_document(iter: &mut ByteIterator) -> Result<JsonValue> {
	let value = parse_value(iter, 0)?;
	iter.skip_whitespace();
	if !iter.is_at_end() {
		return Err(iter.format_error("unexpected characters after the JSON value"));
	}
	Ok(value)
}

fn parse_value(iter: &mut ByteIterator, depth: usize) -> Result<JsonValue> {
	if depth >= MAX_DEPTH {
		return Err(iter.format_error(&format!("maximum nesting depth of {MAX_DEPTH} exceeded")));
	}

	iter.skip_whitespace();
	match iter.expect_peeked_byte()? {
		b'[' => parse_array_entries(iter, |iter2| parse_value(iter2, depth + 1)).map(|list| JsonValue::Array(JsonArray(list))),
		b'{' => {
			let mut entries = BTreeMap::new();
			parse_object_entries(iter, |key, iter2| {
				entries.insert(key, parse_value(iter2, depth + 1)?);
				Ok(())
			})?;
			Ok(JsonValue::Object(JsonObject(entries)))
		}
		b'"' => parse_quoted_json_string(iter).map(JsonValue::String),
		b'-' | b'0'..=b'9' => parse_number_as::<f64>(iter).map(JsonValue::Number),
		b't' => parse_tag(iter, "true").map(|()| JsonValue::Boolean(true)),
		b'f' => parse_tag(iter, "false").map(|()| JsonValue::Boolean(false)),
		b'n' => parse_tag(iter, "null").map(|()| JsonValue::Null),
		c => Err(iter.format_error(&format!("unexpected character '{}'", c as char))),
	}
}
