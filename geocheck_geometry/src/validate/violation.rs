use crate::winding::WindingError;
use std::fmt::Display;

/// Where a feature-level violation was found.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Location {
	/// The input itself is a `Feature`.
	Feature,
	/// The feature at this index of a `FeatureCollection`.
	CollectionFeature(usize),
}

/// One reason why an input is not valid GeoJSON.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Violation {
	/// The input is not a JSON object.
	InvalidInput,
	/// A required member of a `FeatureCollection` is absent.
	MissingProperty(&'static str),
	FeaturesNotArray,
	TooManyFeatures { count: usize, limit: usize },
	/// The collection member at this index is not a `Feature`.
	NotAFeature(usize),
	MissingGeometry(Location),
	MissingProperties(Location),
	/// A ring breaks the right-hand rule.
	Winding(Location, WindingError),
	/// Polygon coordinates that cannot be checked for winding at all.
	MalformedCoordinates(Location, WindingError),
	/// Top-level `type` that is neither `Feature` nor `FeatureCollection`, reported in strict mode.
	UnsupportedType(String),
}

impl Violation {
	pub fn location(&self) -> Option<Location> {
		match self {
			Violation::MissingGeometry(location)
			| Violation::MissingProperties(location)
			| Violation::Winding(location, _)
			| Violation::MalformedCoordinates(location, _) => Some(*location),
			Violation::NotAFeature(index) => Some(Location::CollectionFeature(*index)),
			_ => None,
		}
	}
}

impl Display for Violation {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		use Violation::*;

		if let Some(Location::CollectionFeature(index)) = self.location() {
			write!(f, "feature {index}: ")?;
		}
		match self {
			InvalidInput => write!(f, "invalid input"),
			MissingProperty(name) => write!(f, "Missing required property: {name}"),
			FeaturesNotArray => write!(f, "GeoJSON features must be an array"),
			TooManyFeatures { count, limit } => write!(f, "Too many features: {count} exceeds limit {limit}"),
			NotAFeature(_) => write!(f, "each feature must be of type Feature"),
			MissingGeometry(Location::Feature) => write!(f, "GeoJSON Feature must have a geometry object"),
			MissingGeometry(_) => write!(f, "each feature must have a geometry object"),
			MissingProperties(Location::Feature) => write!(f, "GeoJSON Feature must have a properties object"),
			MissingProperties(_) => write!(f, "each feature must have a properties object"),
			Winding(_, error) => write!(f, "coordinates do not respect the right-hand rule: {error}"),
			MalformedCoordinates(_, error) => write!(f, "malformed coordinates: {error}"),
			UnsupportedType(name) => write!(f, "Unsupported GeoJSON type: {name}"),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::winding::WindingErrorKind;
	use rstest::rstest;

	#[rstest]
	#[case(Violation::InvalidInput, "invalid input")]
	#[case(Violation::MissingProperty("features"), "Missing required property: features")]
	#[case(Violation::FeaturesNotArray, "GeoJSON features must be an array")]
	#[case(Violation::TooManyFeatures { count: 12, limit: 10 }, "Too many features: 12 exceeds limit 10")]
	#[case(Violation::NotAFeature(3), "feature 3: each feature must be of type Feature")]
	#[case(
		Violation::MissingGeometry(Location::Feature),
		"GeoJSON Feature must have a geometry object"
	)]
	#[case(
		Violation::MissingGeometry(Location::CollectionFeature(0)),
		"feature 0: each feature must have a geometry object"
	)]
	#[case(
		Violation::MissingProperties(Location::Feature),
		"GeoJSON Feature must have a properties object"
	)]
	#[case(
		Violation::MissingProperties(Location::CollectionFeature(7)),
		"feature 7: each feature must have a properties object"
	)]
	#[case(
		Violation::Winding(Location::Feature, WindingError::new(None, Some(0), WindingErrorKind::ExteriorNotCounterclockwise)),
		"coordinates do not respect the right-hand rule: exterior ring must be counterclockwise"
	)]
	#[case(
		Violation::Winding(Location::CollectionFeature(2), WindingError::new(Some(1), Some(3), WindingErrorKind::HoleNotClockwise)),
		"feature 2: coordinates do not respect the right-hand rule: polygon 1: hole 3 must be clockwise"
	)]
	#[case(
		Violation::MalformedCoordinates(Location::CollectionFeature(4), WindingError::new(None, Some(0), WindingErrorKind::MalformedRing)),
		"feature 4: malformed coordinates: ring 0 is not an array of [x, y] positions"
	)]
	#[case(
		Violation::MalformedCoordinates(Location::Feature, WindingError::new(None, None, WindingErrorKind::NotAnArray)),
		"malformed coordinates: coordinates must be an array"
	)]
	#[case(Violation::UnsupportedType("Topology".to_string()), "Unsupported GeoJSON type: Topology")]
	fn messages(#[case] violation: Violation, #[case] message: &str) {
		assert_eq!(violation.to_string(), message);
	}

	#[test]
	fn locations() {
		assert_eq!(Violation::InvalidInput.location(), None);
		assert_eq!(Violation::NotAFeature(4).location(), Some(Location::CollectionFeature(4)));
		assert_eq!(
			Violation::MissingGeometry(Location::Feature).location(),
			Some(Location::Feature)
		);
	}
}
