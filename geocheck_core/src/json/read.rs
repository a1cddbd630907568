//! Readers for newline-delimited JSON, one value per line.
//!
//! Blank lines are skipped. Every item carries the 1-based line number it came from, so
//! callers can report problems per line.

use super::{JsonValue, parse_json_str};
use anyhow::{Context, Error, Result, anyhow};
use futures::{Stream, StreamExt, future::ready, stream};
use std::io::BufRead;

fn process_line(line: std::io::Result<String>, index: usize) -> Option<(usize, Result<JsonValue>)> {
	let line_number = index + 1;
	match line {
		Ok(line) if line.trim().is_empty() => None,
		Ok(line) => Some((
			line_number,
			parse_json_str(&line).with_context(|| format!("error in line {line_number}")),
		)),
		Err(e) => Some((line_number, Err(anyhow!("line {line_number}: {e}")))),
	}
}

/// Parses the lines of `reader` on tokio tasks, one per line, keeping the input order.
///
/// At most one task per CPU is in flight at a time. Must be polled inside a tokio runtime.
pub fn read_ndjson_stream(reader: impl BufRead) -> impl Stream<Item = (usize, Result<JsonValue>)> {
	stream::iter(reader.lines().enumerate())
		.map(|(index, line)| (index + 1, tokio::spawn(async move { process_line(line, index) })))
		.map(|(line_number, task)| async move { (line_number, task.await) })
		.buffered(num_cpus::get())
		.filter_map(|(line_number, joined)| {
			ready(match joined {
				Ok(item) => item,
				Err(e) => Some((line_number, Err(Error::from(e)))),
			})
		})
}
