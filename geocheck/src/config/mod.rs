//! Configuration of the checks, loaded from a YAML file (`geocheck.yml`).
//!
//! Every setting is optional. Settings left out fall back to the defaults of
//! [`ValidationOptions`](geocheck_geometry::ValidationOptions), and command line flags override
//! whatever the file says.

mod main;

pub use main::Config;
