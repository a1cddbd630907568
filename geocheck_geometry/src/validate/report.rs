use super::Violation;
use std::fmt::Display;

/// The outcome of validating one input.
///
/// An empty list of violations means the input is valid. Without `collect_all` the list holds
/// at most one entry.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidationReport {
	violations: Vec<Violation>,
}

impl ValidationReport {
	pub fn is_valid(&self) -> bool {
		self.violations.is_empty()
	}

	/// Message of the first violation, `None` if the input is valid.
	pub fn reason(&self) -> Option<String> {
		self.violations.first().map(ToString::to_string)
	}

	pub fn violations(&self) -> &[Violation] {
		&self.violations
	}
}

impl From<Vec<Violation>> for ValidationReport {
	fn from(violations: Vec<Violation>) -> Self {
		Self { violations }
	}
}

impl Display for ValidationReport {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		if self.violations.is_empty() {
			return write!(f, "valid");
		}
		let reasons: Vec<String> = self.violations.iter().map(ToString::to_string).collect();
		write!(f, "invalid: {}", reasons.join("; "))
	}
}
