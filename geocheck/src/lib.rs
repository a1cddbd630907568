//! # geocheck
//!
//! Configuration for the `geocheck` command-line tool. The checks themselves live in
//! [`geocheck_geometry`]; JSON parsing lives in [`geocheck_core`].
//!
//! ```rust
//! use geocheck::Config;
//!
//! let config = Config::from_string("strict: true\nmax_features: 10").unwrap();
//! let options = config.to_options();
//! assert!(options.strict);
//! assert!(options.check_winding);
//! assert_eq!(options.max_features, Some(10));
//! ```

pub mod config;

pub use config::Config;
