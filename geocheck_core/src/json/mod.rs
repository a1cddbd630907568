//! A minimal JSON value tree with a parser, a compact serializer and NDJSON readers.

mod parse;
mod read;
mod stringify;
mod types;

pub use parse::{MAX_DEPTH, parse_json_reader, parse_json_str};
pub use read::read_ndjson_stream;
pub use stringify::{escape_json_string, stringify};
pub use types::{JsonArray, JsonObject, JsonValue};
