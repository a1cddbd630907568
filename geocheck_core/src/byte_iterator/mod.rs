//! Byte-level iteration over any `Read` source plus the JSON token helpers built on it.

mod basics;
mod iterator;

pub use basics::*;
pub use iterator::*;
