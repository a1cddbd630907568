//! JSON token helpers on top of [`ByteIterator`].
//!
//! Each helper consumes exactly one token (or one container) and leaves the iterator on the
//! first byte after it. Containers are walked with callbacks, so callers decide how values are
//! stored.

use super::iterator::ByteIterator;
use anyhow::{Error, Result};
use std::str::FromStr;

/// Matches the literal `tag` (e.g. `null`) at the current position.
pub fn parse_tag(iter: &mut ByteIterator, tag: &str) -> Result<()> {
	for expected in tag.bytes() {
		if iter.expect_next_byte()? != expected {
			return Err(iter.format_error(&format!("unexpected character while parsing tag '{tag}'")));
		}
	}
	Ok(())
}

fn parse_hex4(iter: &mut ByteIterator) -> Result<u16> {
	let mut unit = 0u16;
	for _ in 0..4 {
		let digit = char::from(iter.expect_next_byte()?)
			.to_digit(16)
			.ok_or_else(|| iter.format_error("invalid hex digit in unicode escape"))?;
		unit = (unit << 4) | digit as u16;
	}
	Ok(unit)
}

fn parse_unicode_escape(iter: &mut ByteIterator) -> Result<char> {
	let high = parse_hex4(iter)?;
	if !(0xD800..0xDC00).contains(&high) {
		return char::from_u32(u32::from(high)).ok_or_else(|| iter.format_error("invalid unicode code point"));
	}

	if iter.expect_next_byte()? != b'\\' || iter.expect_next_byte()? != b'u' {
		return Err(iter.format_error("expected a low surrogate after a high surrogate"));
	}
	let low = parse_hex4(iter)?;
	if !(0xDC00..0xE000).contains(&low) {
		return Err(iter.format_error("invalid low surrogate"));
	}
	let code_point = 0x10000 + ((u32::from(high) - 0xD800) << 10) + (u32::from(low) - 0xDC00);
	char::from_u32(code_point).ok_or_else(|| iter.format_error("invalid unicode code point"))
}

/// Parses a quoted JSON string, resolving all escapes including `\uXXXX` surrogate pairs.
pub fn parse_quoted_json_string(iter: &mut ByteIterator) -> Result<String> {
	iter.skip_whitespace();
	if iter.expect_next_byte()? != b'"' {
		return Err(iter.format_error("expected '\"' while parsing a string"));
	}

	let mut bytes = Vec::with_capacity(32);
	loop {
		match iter.expect_next_byte()? {
			b'"' => break,
			b'\\' => match iter.expect_next_byte()? {
				b'"' => bytes.push(b'"'),
				b'\\' => bytes.push(b'\\'),
				b'/' => bytes.push(b'/'),
				b'b' => bytes.push(0x08),
				b'f' => bytes.push(0x0C),
				b'n' => bytes.push(b'\n'),
				b'r' => bytes.push(b'\r'),
				b't' => bytes.push(b'\t'),
				b'u' => {
					let mut buffer = [0u8; 4];
					let c = parse_unicode_escape(iter)?;
					bytes.extend_from_slice(c.encode_utf8(&mut buffer).as_bytes());
				}
				c => {
					return Err(iter.format_error(&format!("invalid escape sequence '\\{}'", c as char)));
				}
			},
			c => bytes.push(c),
		}
	}
	String::from_utf8(bytes).map_err(Error::from)
}

fn push_digits(iter: &mut ByteIterator, number: &mut Vec<u8>) -> bool {
	let start = number.len();
	while let Some(digit @ b'0'..=b'9') = iter.peek() {
		number.push(digit);
		iter.advance();
	}
	number.len() > start
}

/// Reads a JSON number (`-12.5e3` style) and returns its text.
pub fn parse_number_as_string(iter: &mut ByteIterator) -> Result<String> {
	let mut number = Vec::with_capacity(16);

	if iter.peek() == Some(b'-') {
		number.push(b'-');
		iter.advance();
	}

	if !push_digits(iter, &mut number) {
		return Err(iter.format_error("expected digits in number"));
	}

	if iter.peek() == Some(b'.') {
		number.push(b'.');
		iter.advance();
		if !push_digits(iter, &mut number) {
			return Err(iter.format_error("expected digits after decimal point"));
		}
	}

	if let Some(e @ (b'e' | b'E')) = iter.peek() {
		number.push(e);
		iter.advance();
		if let Some(sign @ (b'+' | b'-')) = iter.peek() {
			number.push(sign);
			iter.advance();
		}
		if !push_digits(iter, &mut number) {
			return Err(iter.format_error("expected digits after exponent"));
		}
	}

	String::from_utf8(number).map_err(Error::from)
}

pub fn parse_number_as<R: FromStr>(iter: &mut ByteIterator) -> Result<R> {
	parse_number_as_string(iter)?
		.parse::<R>()
		.map_err(|_| iter.format_error("invalid number"))
}

/// Walks the entries of a JSON object.
///
/// `parse_value` receives each key and must consume exactly the value that follows it.
pub fn parse_object_entries(
	iter: &mut ByteIterator,
	mut parse_value: impl FnMut(String, &mut ByteIterator) -> Result<()>,
) -> Result<()> {
	iter.skip_whitespace();
	if iter.expect_next_byte()? != b'{' {
		return Err(iter.format_error("expected '{' while parsing an object"));
	}

	iter.skip_whitespace();
	if iter.peek() == Some(b'}') {
		iter.advance();
		return Ok(());
	}

	loop {
		iter.skip_whitespace();
		if iter.expect_peeked_byte()? != b'"' {
			return Err(iter.format_error("parsing object, expected '\"'"));
		}
		let key = parse_quoted_json_string(iter)?;

		iter.skip_whitespace();
		if iter.expect_next_byte()? != b':' {
			return Err(iter.format_error("expected ':'"));
		}

		iter.skip_whitespace();
		parse_value(key, iter)?;

		iter.skip_whitespace();
		match iter.expect_next_byte()? {
			b',' => {}
			b'}' => return Ok(()),
			_ => return Err(iter.format_error("expected ',' or '}'")),
		}
	}
}

/// Walks the entries of a JSON array, collecting what `parse_value` returns for each of them.
pub fn parse_array_entries<R>(
	iter: &mut ByteIterator,
	mut parse_value: impl FnMut(&mut ByteIterator) -> Result<R>,
) -> Result<Vec<R>> {
	iter.skip_whitespace();
	if iter.expect_next_byte()? != b'[' {
		return Err(iter.format_error("expected '[' while parsing an array"));
	}

	let mut result = Vec::new();

	iter.skip_whitespace();
	if iter.peek() == Some(b']') {
		iter.advance();
		return Ok(result);
	}

	loop {
		iter.skip_whitespace();
		result.push(parse_value(iter)?);

		iter.skip_whitespace();
		match iter.expect_next_byte()? {
			b',' => {}
			b']' => return Ok(result),
			_ => return Err(iter.format_error("expected ',' or ']'")),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	fn iter(text: &str) -> ByteIterator<'_> {
		ByteIterator::from_text(text, true)
	}

	#[test]
	fn tag() {
		assert!(parse_tag(&mut iter("null"), "null").is_ok());
		assert_eq!(
			parse_tag(&mut iter("nul!"), "null").unwrap_err().to_string(),
			"unexpected character while parsing tag 'null' at position 4: nul!<EOF>"
		);
	}

	#[rstest]
	#[case(r#""hello""#, "hello")]
	#[case(r#""he\nllo""#, "he\nllo")]
	#[case(r#""\"quoted\" \\ \/""#, "\"quoted\" \\ /")]
	#[case(r#""été""#, "été")]
	#[case(r#""🌍""#, "🌍")]
	#[case(r#""Grüße""#, "Grüße")]
	fn quoted_string(#[case] input: &str, #[case] expected: &str) {
		assert_eq!(parse_quoted_json_string(&mut iter(input)).unwrap(), expected);
	}

	#[rstest]
	#[case("hello")]
	#[case(r#""unterminated"#)]
	#[case(r#""bad \x escape""#)]
	#[case(r#""\ud83c alone""#)]
	#[case(r#""\u12G4""#)]
	fn quoted_string_errors(#[case] input: &str) {
		assert!(parse_quoted_json_string(&mut iter(input)).is_err());
	}

	#[rstest]
	#[case("0", "0")]
	#[case("-12", "-12")]
	#[case("3.25,", "3.25")]
	#[case("-12.3e+4]", "-12.3e+4")]
	#[case("1E5", "1E5")]
	fn number_text(#[case] input: &str, #[case] expected: &str) {
		assert_eq!(parse_number_as_string(&mut iter(input)).unwrap(), expected);
	}

	#[rstest]
	#[case("-")]
	#[case(".5")]
	#[case("1.")]
	#[case("1e")]
	#[case("+1")]
	fn number_errors(#[case] input: &str) {
		assert!(parse_number_as_string(&mut iter(input)).is_err());
	}

	#[test]
	fn number_as_f64() {
		let value: f64 = parse_number_as(&mut iter("-2.5e1")).unwrap();
		assert_eq!(value, -25.0);
	}

	#[test]
	fn object_entries() -> Result<()> {
		let mut entries = Vec::new();
		parse_object_entries(&mut iter(r#" { "a" : "x" , "b":"y" } "#), |key, iter| {
			entries.push((key, parse_quoted_json_string(iter)?));
			Ok(())
		})?;
		assert_eq!(
			entries,
			vec![("a".to_string(), "x".to_string()), ("b".to_string(), "y".to_string())]
		);
		Ok(())
	}

	#[test]
	fn empty_object() -> Result<()> {
		let mut count = 0;
		parse_object_entries(&mut iter("{ }"), |_, _| {
			count += 1;
			Ok(())
		})?;
		assert_eq!(count, 0);
		Ok(())
	}

	#[rstest]
	#[case(r#"{"a":"x",}"#)]
	#[case(r#"{"a" "x"}"#)]
	#[case(r#"{a:"x"}"#)]
	#[case(r#"{"a":"x""#)]
	#[case(r#"["a"]"#)]
	fn object_errors(#[case] input: &str) {
		let result = parse_object_entries(&mut iter(input), |_, iter| parse_quoted_json_string(iter).map(|_| ()));
		assert!(result.is_err());
	}

	#[test]
	fn array_entries() -> Result<()> {
		let numbers: Vec<f64> = parse_array_entries(&mut iter("[1, 2 ,3]"), parse_number_as)?;
		assert_eq!(numbers, vec![1.0, 2.0, 3.0]);

		let empty: Vec<f64> = parse_array_entries(&mut iter("[ ]"), parse_number_as)?;
		assert!(empty.is_empty());
		Ok(())
	}

	#[rstest]
	#[case("[1,]")]
	#[case("[1 2]")]
	#[case("[1")]
	#[case("1")]
	fn array_errors(#[case] input: &str) {
		assert!(parse_array_entries(&mut iter(input), parse_number_as::<f64>).is_err());
	}
}
