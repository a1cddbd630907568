//! A buffered byte iterator with one byte of lookahead.
//!
//! When created in debug mode, the iterator remembers the last few consumed bytes so that
//! parse errors can show where in the input they happened.

use anyhow::{Error, Result, anyhow};
use std::{
	collections::VecDeque,
	io::{ErrorKind, Read},
};

const SNAPSHOT_SIZE: usize = 16;
const BUFFER_SIZE: usize = 8192;

/// Iterates over the bytes of a reader, supporting `peek` without consuming.
pub struct ByteIterator<'a> {
	source: Box<dyn Read + 'a>,
	buffer: Box<[u8]>,
	buffer_len: usize,
	buffer_pos: usize,
	peeked: Option<u8>,
	position: usize,
	recent: Option<VecDeque<u8>>,
}

impl<'a> ByteIterator<'a> {
	/// Creates an iterator over `reader`.
	///
	/// With `debug` enabled, errors created by [`ByteIterator::format_error`] include a snapshot
	/// of the most recently consumed bytes.
	pub fn from_reader(reader: impl Read + 'a, debug: bool) -> Self {
		let mut instance = ByteIterator {
			source: Box::new(reader),
			buffer: vec![0; BUFFER_SIZE].into_boxed_slice(),
			buffer_len: 0,
			buffer_pos: 0,
			peeked: None,
			position: 0,
			recent: debug.then(|| VecDeque::with_capacity(SNAPSHOT_SIZE)),
		};
		instance.peeked = instance.read_byte();
		instance
	}

	/// Creates an iterator over the bytes of a string slice.
	pub fn from_text(text: &'a str, debug: bool) -> Self {
		Self::from_reader(text.as_bytes(), debug)
	}

	fn read_byte(&mut self) -> Option<u8> {
		if self.buffer_pos >= self.buffer_len {
			self.buffer_len = loop {
				match self.source.read(&mut self.buffer) {
					Ok(length) => break length,
					Err(e) if e.kind() == ErrorKind::Interrupted => {}
					Err(e) => {
						log::warn!("read error after {} bytes, treating it as end of input: {e}", self.position);
						break 0;
					}
				}
			};
			self.buffer_pos = 0;
			if self.buffer_len == 0 {
				return None;
			}
		}
		let byte = self.buffer[self.buffer_pos];
		self.buffer_pos += 1;
		Some(byte)
	}

	/// Builds an error that names the current byte position, plus the recent input in debug mode.
	#[must_use]
	pub fn format_error(&self, msg: &str) -> Error {
		let Some(recent) = &self.recent else {
			return anyhow!("{msg} at position {}", self.position);
		};

		let bytes: Vec<u8> = recent.iter().copied().chain(self.peeked).collect();
		let mut snapshot = String::from_utf8_lossy(&bytes).into_owned();
		if self.peeked.is_none() {
			snapshot.push_str("<EOF>");
		}
		anyhow!("{msg} at position {}: {snapshot}", self.position)
	}

	#[inline]
	#[must_use]
	pub fn peek(&self) -> Option<u8> {
		self.peeked
	}

	#[inline]
	#[must_use]
	pub fn is_at_end(&self) -> bool {
		self.peeked.is_none()
	}

	/// Moves past the peeked byte. Does nothing at the end of input.
	#[inline]
	pub fn advance(&mut self) {
		let Some(byte) = self.peeked else {
			return;
		};
		if let Some(recent) = &mut self.recent {
			if recent.len() == SNAPSHOT_SIZE {
				recent.pop_front();
			}
			recent.push_back(byte);
		}
		self.position += 1;
		self.peeked = self.read_byte();
	}

	/// Consumes the peeked byte, failing at the end of input.
	#[inline]
	pub fn expect_next_byte(&mut self) -> Result<u8> {
		let byte = self.expect_peeked_byte()?;
		self.advance();
		Ok(byte)
	}

	/// Returns the peeked byte, failing at the end of input.
	#[inline]
	pub fn expect_peeked_byte(&self) -> Result<u8> {
		self.peeked.ok_or_else(|| self.format_error("unexpected end"))
	}

	pub fn skip_whitespace(&mut self) {
		while matches!(self.peeked, Some(b' ' | b'\t' | b'\n' | b'\r')) {
			self.advance();
		}
	}
}
