/// Switches that select which checks the validator runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ValidationOptions {
	/// Enforce the right-hand rule on `Polygon` and `MultiPolygon` geometries.
	pub check_winding: bool,
	/// Reject top-level `type` values other than `Feature` and `FeatureCollection`.
	/// Without it, such values pass unchecked.
	pub strict: bool,
	/// Keep checking after the first violation and report all of them.
	pub collect_all: bool,
	/// Reject collections with more features than this before checking any of them.
	pub max_features: Option<usize>,
}

impl Default for ValidationOptions {
	fn default() -> Self {
		Self {
			check_winding: true,
			strict: false,
			collect_all: false,
			max_features: None,
		}
	}
}

impl ValidationOptions {
	pub fn with_winding(mut self, check_winding: bool) -> Self {
		self.check_winding = check_winding;
		self
	}

	pub fn with_strict(mut self, strict: bool) -> Self {
		self.strict = strict;
		self
	}

	pub fn with_collect_all(mut self, collect_all: bool) -> Self {
		self.collect_all = collect_all;
		self
	}

	pub fn with_max_features(mut self, max_features: Option<usize>) -> Self {
		self.max_features = max_features;
		self
	}
}
