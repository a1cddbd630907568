use std::fmt::Display;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WindingErrorKind {
	/// `coordinates` is missing or not an array.
	NotAnArray,
	/// A polygon without any ring.
	EmptyPolygon,
	/// A ring that is not an array of positions.
	MalformedRing,
	ExteriorNotCounterclockwise,
	HoleNotClockwise,
}

impl WindingErrorKind {
	/// True if the coordinates could not be read, as opposed to rings with the wrong orientation.
	pub fn is_malformed(self) -> bool {
		matches!(self, Self::NotAnArray | Self::EmptyPolygon | Self::MalformedRing)
	}
}

/// A right-hand-rule violation and where it was found.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WindingError {
	/// Index of the polygon inside a `MultiPolygon`.
	pub polygon: Option<usize>,
	/// Index of the ring inside its polygon; 0 is the exterior ring.
	pub ring: Option<usize>,
	pub kind: WindingErrorKind,
}

impl WindingError {
	#[must_use]
	pub fn new(polygon: Option<usize>, ring: Option<usize>, kind: WindingErrorKind) -> Self {
		Self { polygon, ring, kind }
	}
}

impl Display for WindingError {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		use WindingErrorKind::*;

		if let Some(polygon) = self.polygon {
			write!(f, "polygon {polygon}: ")?;
		}
		let ring = self.ring.unwrap_or_default();
		match self.kind {
			NotAnArray => write!(f, "coordinates must be an array"),
			EmptyPolygon => write!(f, "polygon must have at least one ring"),
			MalformedRing => write!(f, "ring {ring} is not an array of [x, y] positions"),
			ExteriorNotCounterclockwise => write!(f, "exterior ring must be counterclockwise"),
			HoleNotClockwise => write!(f, "hole {ring} must be clockwise"),
		}
	}
}
