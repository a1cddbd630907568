//! Right-hand-rule checks: exterior rings counterclockwise, holes clockwise.
//!
//! Every check works directly on the decoded JSON, so malformed coordinates are reported
//! as winding errors instead of failing earlier.
//!
//! The `check_*` functions stop at the first error, `collect_geometry_winding` reports all of
//! them and the `is_valid_*` functions only answer yes or no.

mod error;

pub use error::{WindingError, WindingErrorKind};

use crate::math::{Orientation, orientation, ring_from_json};
use self::error::WindingErrorKind::*;
use geocheck_core::json::JsonValue;

fn visit_polygon(coordinates: &JsonValue, polygon: Option<usize>, collect_all: bool, errors: &mut Vec<WindingError>) {
	let JsonValue::Array(rings) = coordinates else {
		errors.push(WindingError::new(polygon, None, NotAnArray));
		return;
	};
	if rings.is_empty() {
		errors.push(WindingError::new(polygon, None, EmptyPolygon));
		return;
	}

	for (index, ring) in rings.iter().enumerate() {
		let expected = if index == 0 {
			Orientation::Counterclockwise
		} else {
			Orientation::Clockwise
		};

		let kind = match ring_from_json(ring) {
			None => Some(MalformedRing),
			Some(positions) if orientation(&positions) == expected => None,
			Some(_) if index == 0 => Some(ExteriorNotCounterclockwise),
			Some(_) => Some(HoleNotClockwise),
		};

		if let Some(kind) = kind {
			errors.push(WindingError::new(polygon, Some(index), kind));
			if !collect_all {
				return;
			}
		}
	}
}

fn visit_geometry(geometry: Option<&JsonValue>, collect_all: bool) -> Vec<WindingError> {
	let mut errors = Vec::new();

	// absent, null and non-object geometries carry no winding constraint
	let Some(JsonValue::Object(geometry)) = geometry else {
		return errors;
	};

	let coordinates = geometry.get("coordinates").unwrap_or(&JsonValue::Null);
	match geometry.get("type") {
		Some(JsonValue::String(name)) if name == "Polygon" => {
			visit_polygon(coordinates, None, collect_all, &mut errors);
		}
		Some(JsonValue::String(name)) if name == "MultiPolygon" => {
			let JsonValue::Array(polygons) = coordinates else {
				errors.push(WindingError::new(None, None, NotAnArray));
				return errors;
			};
			for (index, polygon) in polygons.iter().enumerate() {
				visit_polygon(polygon, Some(index), collect_all, &mut errors);
				if !collect_all && !errors.is_empty() {
					break;
				}
			}
		}
		_ => {}
	}
	errors
}

/// Checks the rings of one polygon, stopping at the first violation.
pub fn check_polygon_winding(coordinates: &JsonValue) -> Result<(), WindingError> {
	let mut errors = Vec::new();
	visit_polygon(coordinates, None, false, &mut errors);
	errors.into_iter().next().map_or(Ok(()), Err)
}

/// True if `coordinates` is a non-empty array of rings whose exterior ring is counterclockwise
/// and whose holes are clockwise. Degenerate rings (area 0) never pass.
pub fn is_valid_polygon_winding(coordinates: &JsonValue) -> bool {
	check_polygon_winding(coordinates).is_ok()
}

/// Checks a geometry, stopping at the first violation.
///
/// Only `Polygon` and `MultiPolygon` are checked. A missing or `null` geometry passes, and so
/// does every other geometry type.
pub fn check_geometry_winding(geometry: Option<&JsonValue>) -> Result<(), WindingError> {
	visit_geometry(geometry, false).into_iter().next().map_or(Ok(()), Err)
}

/// Returns every winding violation of a geometry, in ring order.
pub fn collect_geometry_winding(geometry: Option<&JsonValue>) -> Vec<WindingError> {
	visit_geometry(geometry, true)
}

pub fn is_valid_geometry_winding(geometry: Option<&JsonValue>) -> bool {
	check_geometry_winding(geometry).is_ok()
}
