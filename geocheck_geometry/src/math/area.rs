//! Signed ring area and the orientation derived from it.

use super::Position;
use geocheck_core::json::JsonValue;

/// Signed area of a ring by the shoelace formula.
///
/// Sums `p[i].x * p[i+1].y - p[i+1].x * p[i].y` over consecutive pairs without a wraparound
/// term, so the ring is expected to repeat its first position at the end. Rings with fewer
/// than two positions have an area of 0.
///
/// With the y-axis pointing up, a counterclockwise ring has a positive area and a clockwise
/// ring a negative one.
#[must_use]
pub fn signed_area(ring: &[Position]) -> f64 {
	let mut sum = 0f64;
	for pair in ring.windows(2) {
		sum += pair[0].x * pair[1].y - pair[1].x * pair[0].y;
	}
	sum / 2.0
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
	Counterclockwise,
	Clockwise,
	/// Zero area, e.g. collinear or repeated positions. `NaN` areas end up here as well.
	Degenerate,
}

impl Orientation {
	#[must_use]
	pub fn of_area(area: f64) -> Self {
		if area > 0.0 {
			Orientation::Counterclockwise
		} else if area < 0.0 {
			Orientation::Clockwise
		} else {
			Orientation::Degenerate
		}
	}
}

#[must_use]
pub fn orientation(ring: &[Position]) -> Orientation {
	Orientation::of_area(signed_area(ring))
}

/// Reads a ring of positions. Returns `None` if the value is not an array of positions.
#[must_use]
pub fn ring_from_json(value: &JsonValue) -> Option<Vec<Position>> {
	let JsonValue::Array(array) = value else {
		return None;
	};
	array.iter().map(Position::from_json).collect()
}
