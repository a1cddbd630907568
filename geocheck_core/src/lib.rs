//! Shared building blocks for geocheck: a buffered byte iterator and a small JSON value tree
//! with a parser that keeps "member absent" and "member is null" apart.

pub mod byte_iterator;
pub mod json;
