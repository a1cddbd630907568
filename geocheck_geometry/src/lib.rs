//! GeoJSON structure and winding-order checks.
//!
//! - [`math`]: positions and the signed ring area (shoelace formula)
//! - [`winding`]: right-hand-rule checks for `Polygon` and `MultiPolygon` geometries
//! - [`validate`]: the structural validator for `Feature` and `FeatureCollection` objects
//!
//! ```
//! use geocheck_core::json::JsonValue;
//! use geocheck_geometry::validate;
//!
//! let json = JsonValue::parse_str(r#"{"type":"FeatureCollection","features":[]}"#).unwrap();
//! assert!(validate(&json).is_valid());
//! ```

pub mod math;
pub mod validate;
pub mod winding;

pub use validate::{Location, ValidationOptions, ValidationReport, Validator, Violation, validate, validate_geojson};
pub use winding::{WindingError, WindingErrorKind, is_valid_geometry_winding, is_valid_polygon_winding};
