use std::fmt;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::{DEFAULT_MAX_DEPTH, Result, Value, WalkError};

const MAX_DECOMPRESSED_BYTES: usize = 512 * 1024 * 1024;
/// zstd frame magic used by compressed documents.
pub const ZSTD_MAGIC: [u8; 4] = [0x28, 0xB5, 0x2F, 0xFD];

/// Compression detected from the leading bytes of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Compression {
	/// Plain JSON text.
	None,
	/// One or more zstd frames.
	Zstd,
}

impl Compression {
	/// Sniff the frame magic at the start of `bytes`.
	pub fn detect(bytes: &[u8]) -> Self {
		if bytes.starts_with(&ZSTD_MAGIC) { Self::Zstd } else { Self::None }
	}
}

impl fmt::Display for Compression {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			Self::None => "none",
			Self::Zstd => "zstd",
		})
	}
}

/// Detect and undo compression, returning `(mode, json_bytes)`.
///
/// Anything without the zstd magic is passed through untouched.
pub fn decode_bytes(raw: Vec<u8>) -> Result<(Compression, Vec<u8>)> {
	let compression = Compression::detect(&raw);
	let bytes = match compression {
		Compression::None => raw,
		Compression::Zstd => inflate(&raw)?,
	};
	Ok((compression, bytes))
}

/// Decode JSON text, nesting up to [`DEFAULT_MAX_DEPTH`].
pub fn parse_json(bytes: &[u8]) -> Result<Value> {
	parse_json_with(bytes, DEFAULT_MAX_DEPTH)
}

/// Decode JSON text, failing with [`WalkError::DepthExceeded`] when a
/// container sits deeper than `max_depth`.
///
/// Depth is counted as in a walk, with the root at depth 0, so a document
/// accepted here is not rejected by a walk using the same limit for its
/// containers. The parser's own recursion limit is lifted; nesting is bounded
/// by `max_depth` instead.
pub fn parse_json_with(bytes: &[u8], max_depth: usize) -> Result<Value> {
	check_nesting(bytes, max_depth)?;

	let mut de = serde_json::Deserializer::from_slice(bytes);
	de.disable_recursion_limit();
	let raw = serde_json::Value::deserialize(&mut de)?;
	de.end()?;
	Value::try_from(raw)
}

/// Read, decompress if needed, and decode a document from `reader`.
pub fn load_reader<R: Read>(reader: R) -> Result<Value> {
	load_reader_with(reader, DEFAULT_MAX_DEPTH)
}

/// [`load_reader`] with an explicit nesting limit.
pub fn load_reader_with<R: Read>(mut reader: R, max_depth: usize) -> Result<Value> {
	let mut raw = Vec::new();
	reader.read_to_end(&mut raw)?;
	let (_, bytes) = decode_bytes(raw)?;
	parse_json_with(&bytes, max_depth)
}

/// Read, decompress if needed, and decode a document file.
pub fn load(path: &Path) -> Result<Value> {
	load_with(path, DEFAULT_MAX_DEPTH)
}

/// [`load`] with an explicit nesting limit.
pub fn load_with(path: &Path, max_depth: usize) -> Result<Value> {
	let (compression, bytes) = decode_bytes(std::fs::read(path)?)?;
	debug!(path = %path.display(), %compression, bytes = bytes.len(), "document read");
	parse_json_with(&bytes, max_depth)
}

fn inflate(raw: &[u8]) -> Result<Vec<u8>> {
	let decoder = zstd::stream::read::Decoder::with_buffer(raw)?;
	let mut out = Vec::new();
	decoder.take(MAX_DECOMPRESSED_BYTES as u64 + 1).read_to_end(&mut out)?;
	if out.len() > MAX_DECOMPRESSED_BYTES {
		return Err(WalkError::DecompressedTooLarge { limit: MAX_DECOMPRESSED_BYTES });
	}

	debug!(compressed = raw.len(), inflated = out.len(), "zstd input inflated");
	Ok(out)
}

/// Lexical pre-pass bounding container nesting before the recursive parse.
fn check_nesting(bytes: &[u8], max_depth: usize) -> Result<()> {
	let mut depth = 0_usize;
	let mut in_string = false;
	let mut escaped = false;

	for &byte in bytes {
		if in_string {
			match byte {
				_ if escaped => escaped = false,
				b'\\' => escaped = true,
				b'"' => in_string = false,
				_ => {}
			}
			continue;
		}

		match byte {
			b'"' => in_string = true,
			b'[' | b'{' => {
				if depth > max_depth {
					return Err(WalkError::DepthExceeded { max_depth });
				}
				depth += 1;
			}
			b']' | b'}' => depth = depth.saturating_sub(1),
			_ => {}
		}
	}

	Ok(())
}
