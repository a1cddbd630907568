//! Structural validation of GeoJSON `Feature` and `FeatureCollection` objects.
//!
//! The validator walks a decoded JSON value through a chain of guards and returns a
//! [`ValidationReport`]. It never panics and never performs I/O; presenting the result is up
//! to the caller.

mod options;
mod report;
mod validator;
mod violation;

pub use options::ValidationOptions;
pub use report::ValidationReport;
pub use validator::Validator;
pub use violation::{Location, Violation};

use geocheck_core::json::JsonValue;

/// Validates with the default options: right-hand rule enforced, first violation only,
/// unrecognised top-level types accepted.
pub fn validate(input: &JsonValue) -> ValidationReport {
	Validator::default().validate(input)
}

/// Shorthand for `validate(input).is_valid()`.
pub fn validate_geojson(input: &JsonValue) -> bool {
	validate(input).is_valid()
}
