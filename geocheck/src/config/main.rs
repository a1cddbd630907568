use anyhow::{Context, Result};
use geocheck_geometry::ValidationOptions;
use serde::Deserialize;
use std::{
	fs::File,
	io::{BufReader, Read},
	path::Path,
};

#[derive(Default, Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
	/// Enforce the right-hand rule on polygons. Default: true
	pub check_winding: Option<bool>,

	/// Reject top-level types other than Feature and FeatureCollection. Default: false
	pub strict: Option<bool>,

	/// Report every violation instead of stopping at the first one. Default: false
	pub collect_all: Option<bool>,

	/// Reject feature collections with more features than this. Default: unlimited
	pub max_features: Option<usize>,
}

impl Config {
	pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
		Ok(serde_yaml_ng::from_reader(reader)?)
	}

	pub fn from_string(text: &str) -> Result<Self> {
		Ok(serde_yaml_ng::from_str(text)?)
	}

	pub fn from_path(path: &Path) -> Result<Self> {
		let file = File::open(path).with_context(|| format!("failed to open config file {path:?}"))?;
		Config::from_reader(BufReader::new(file)).with_context(|| format!("failed to parse config file {path:?}"))
	}

	pub fn override_optional_check_winding(&mut self, check_winding: Option<bool>) {
		if check_winding.is_some() {
			self.check_winding = check_winding;
		}
	}
	pub fn override_optional_strict(&mut self, strict: Option<bool>) {
		if strict.is_some() {
			self.strict = strict;
		}
	}
	pub fn override_optional_collect_all(&mut self, collect_all: Option<bool>) {
		if collect_all.is_some() {
			self.collect_all = collect_all;
		}
	}
	pub fn override_optional_max_features(&mut self, max_features: Option<usize>) {
		if max_features.is_some() {
			self.max_features = max_features;
		}
	}

	/// Builds the validator options, using the defaults for every unset field.
	pub fn to_options(&self) -> ValidationOptions {
		let defaults = ValidationOptions::default();
		ValidationOptions {
			check_winding: self.check_winding.unwrap_or(defaults.check_winding),
			strict: self.strict.unwrap_or(defaults.strict),
			collect_all: self.collect_all.unwrap_or(defaults.collect_all),
			max_features: self.max_features.or(defaults.max_features),
		}
	}
}
