use jsonwalk::{Node, Path, WalkError, WalkOptions, parse_json, rewrite, walk_mut_with};
use tracing::debug;

use crate::cmd::util::{load_document, print_json};

#[derive(clap::Args)]
pub struct Args {
	/// Document path, or `-` for stdin.
	pub file: std::path::PathBuf,
	/// Node path to replace, in the same syntax as `get --path`.
	///
	/// Members whose names are empty or contain `.` or `[` cannot be addressed.
	#[arg(long = "path")]
	pub path_expr: String,
	/// Replacement as JSON text, e.g. `99`, `"text"`, or `[1,2]`.
	#[arg(long)]
	pub value: String,
}

/// Replace one node and print the rewritten document.
pub fn run(args: Args, options: &WalkOptions) -> jsonwalk::Result<()> {
	let target = Path::parse(&args.path_expr)?;
	if target.is_root() {
		return Err(WalkError::InvalidPath { path: args.path_expr });
	}
	let replacement = parse_json(args.value.as_bytes())?;
	let mut document = load_document(&args.file, options)?;

	let mut replaced = 0_usize;
	walk_mut_with(
		&mut document,
		&mut rewrite(|node: &Node<'_>| {
			if *node.path != target {
				return None;
			}
			replaced += 1;
			debug!(path = %node.path, from = %node.kind, to = %replacement.kind(), "replacing node");
			Some(replacement.clone())
		}),
		options,
	)?;

	if replaced == 0 {
		return Err(WalkError::PathNotFound { path: target.render() });
	}

	print_json(&document)
}
