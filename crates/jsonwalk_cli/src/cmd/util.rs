use std::io::{self, Write};
use std::path::Path;

use jsonwalk::{Kind, Value, WalkOptions};
use serde::Serialize;

/// Build walk options from global CLI flags.
pub(crate) fn walk_options(max_depth: Option<usize>) -> WalkOptions {
	let mut options = WalkOptions::default();
	if let Some(max_depth) = max_depth {
		options.max_depth = max_depth;
	}
	options
}

/// Load a document from a file, or from stdin when the path is `-`.
///
/// Decoding enforces the same nesting limit as the walk that follows.
pub(crate) fn load_document(path: &Path, options: &WalkOptions) -> jsonwalk::Result<Value> {
	if path.as_os_str() == "-" {
		return jsonwalk::load_reader_with(io::stdin().lock(), options.max_depth);
	}
	jsonwalk::load_with(path, options.max_depth)
}

/// Parse a `--kind` argument.
pub(crate) fn parse_kind(label: &str) -> Result<Kind, String> {
	Kind::from_label(label).ok_or_else(|| format!("unknown kind {label:?} (expected null, bool, string, number, array, or object)"))
}

/// Print a serializable value as pretty JSON on stdout.
pub(crate) fn print_json<T: Serialize + ?Sized>(value: &T) -> jsonwalk::Result<()> {
	let stdout = io::stdout();
	let mut out = stdout.lock();
	serde_json::to_writer_pretty(&mut out, value)?;
	writeln!(out)?;
	Ok(())
}
