use geocheck_core::json::JsonValue;

/// A planar position. Only the first two components of a GeoJSON position are kept.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Position {
	pub x: f64,
	pub y: f64,
}

impl Position {
	#[must_use]
	pub fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}

	/// Reads `[x, y, ...]`. Returns `None` unless the value is an array starting with two numbers.
	#[must_use]
	pub fn from_json(value: &JsonValue) -> Option<Self> {
		let JsonValue::Array(array) = value else {
			return None;
		};
		match array.as_vec().as_slice() {
			[JsonValue::Number(x), JsonValue::Number(y), ..] => Some(Self::new(*x, *y)),
			_ => None,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("[1.5, -2]", Some(Position::new(1.5, -2.0)))]
	#[case("[1, 2, 300]", Some(Position::new(1.0, 2.0)))]
	#[case("[1]", None)]
	#[case("[]", None)]
	#[case("[\"1\", 2]", None)]
	#[case("[null, 2]", None)]
	#[case("{\"x\": 1, \"y\": 2}", None)]
	#[case("7", None)]
	fn from_json(#[case] json: &str, #[case] expected: Option<Position>) {
		let value = JsonValue::parse_str(json).unwrap();
		assert_eq!(Position::from_json(&value), expected);
	}
}
