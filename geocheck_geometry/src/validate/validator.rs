use super::{Location, ValidationOptions, ValidationReport, Violation};
use crate::winding::{WindingError, check_geometry_winding, collect_geometry_winding};
use geocheck_core::json::{JsonObject, JsonValue};
use std::ops::ControlFlow::{self, Break, Continue};

/// Checks GeoJSON `Feature` and `FeatureCollection` objects.
///
/// ```
/// use geocheck_core::json::JsonValue;
/// use geocheck_geometry::{ValidationOptions, Validator};
///
/// let validator = Validator::new(ValidationOptions::default().with_strict(true));
/// let json = JsonValue::parse_str(r#"{"type":"Topology"}"#).unwrap();
/// assert_eq!(
/// 	validator.validate(&json).reason().as_deref(),
/// 	Some("Unsupported GeoJSON type: Topology")
/// );
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct Validator {
	options: ValidationOptions,
}

impl Validator {
	pub fn new(options: ValidationOptions) -> Self {
		Self { options }
	}

	pub fn options(&self) -> &ValidationOptions {
		&self.options
	}

	pub fn validate(&self, input: &JsonValue) -> ValidationReport {
		let mut walk = Walk {
			options: &self.options,
			violations: Vec::new(),
		};
		let _ = walk.check_input(input);
		ValidationReport::from(walk.violations)
	}
}

/// State of one validation run. Every check returns `Break` once the run has to stop.
struct Walk<'a> {
	options: &'a ValidationOptions,
	violations: Vec<Violation>,
}

impl Walk<'_> {
	/// Records a violation. The walk goes on only when all violations are collected.
	fn report(&mut self, violation: Violation) -> ControlFlow<()> {
		log::debug!("violation: {violation}");
		self.violations.push(violation);
		if self.options.collect_all { Continue(()) } else { Break(()) }
	}

	/// Records a violation that makes any further check meaningless.
	fn terminal(&mut self, violation: Violation) -> ControlFlow<()> {
		let _ = self.report(violation);
		Break(())
	}

	fn check_input(&mut self, input: &JsonValue) -> ControlFlow<()> {
		let object = match input {
			JsonValue::Object(object) => object,
			// arrays have no members, so they fail as a collection without `type`
			JsonValue::Array(_) => return self.check_collection(&JsonObject::default()),
			_ => return self.terminal(Violation::InvalidInput),
		};

		match object.get("type") {
			None => self.check_collection(object),
			Some(JsonValue::String(name)) if name == "FeatureCollection" => self.check_collection(object),
			Some(JsonValue::String(name)) if name == "Feature" => self.check_feature(object, Location::Feature),
			Some(other) => {
				let name = match other {
					JsonValue::String(name) => name.clone(),
					_ => other.to_string(),
				};
				if self.options.strict {
					self.terminal(Violation::UnsupportedType(name))
				} else {
					log::debug!("type {name:?} is not checked");
					Continue(())
				}
			}
		}
	}

	fn check_collection(&mut self, collection: &JsonObject) -> ControlFlow<()> {
		let mut missing = false;
		for name in ["type", "features"] {
			if !collection.contains_key(name) {
				missing = true;
				self.report(Violation::MissingProperty(name))?;
			}
		}
		if missing {
			return Break(());
		}

		let Some(JsonValue::Array(features)) = collection.get("features") else {
			return self.terminal(Violation::FeaturesNotArray);
		};

		if let Some(limit) = self.options.max_features
			&& features.len() > limit
		{
			return self.terminal(Violation::TooManyFeatures {
				count: features.len(),
				limit,
			});
		}

		log::debug!("checking {} features", features.len());
		for (index, feature) in features.iter().enumerate() {
			log::trace!("checking feature {index}");
			let feature = match feature {
				JsonValue::Object(feature) if is_feature(feature) => feature,
				_ => {
					self.report(Violation::NotAFeature(index))?;
					continue;
				}
			};
			self.check_feature(feature, Location::CollectionFeature(index))?;
		}
		Continue(())
	}

	fn check_feature(&mut self, feature: &JsonObject, location: Location) -> ControlFlow<()> {
		let geometry = feature.get("geometry");
		let has_geometry = geometry.is_some_and(JsonValue::is_object_like);
		if !has_geometry {
			self.report(Violation::MissingGeometry(location))?;
		}

		if !feature.get("properties").is_some_and(JsonValue::is_object_like) {
			self.report(Violation::MissingProperties(location))?;
		}

		if self.options.check_winding && has_geometry {
			if self.options.collect_all {
				for error in collect_geometry_winding(geometry) {
					self.report(winding_violation(location, error))?;
				}
			} else if let Err(error) = check_geometry_winding(geometry) {
				self.report(winding_violation(location, error))?;
			}
		}
		Continue(())
	}
}

fn winding_violation(location: Location, error: WindingError) -> Violation {
	if error.kind.is_malformed() {
		Violation::MalformedCoordinates(location, error)
	} else {
		Violation::Winding(location, error)
	}
}

fn is_feature(object: &JsonObject) -> bool {
	matches!(object.get("type"), Some(JsonValue::String(name)) if name == "Feature")
}
