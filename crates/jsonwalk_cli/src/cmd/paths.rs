use std::io::{self, BufWriter, Write};

use jsonwalk::{Kind, Node, Pointer, Value, WalkOptions, WalkPath, callback, walk_with};
use serde::Serialize;

use crate::cmd::util::{load_document, parse_kind, print_json};

#[derive(clap::Args)]
pub struct Args {
	/// Document path, or `-` for stdin.
	pub file: std::path::PathBuf,
	/// Only list nodes of this kind.
	#[arg(long, value_parser = parse_kind)]
	pub kind: Option<Kind>,
	/// List JSON Pointers (`/Actors/0/name`) instead of dotted paths.
	#[arg(long)]
	pub pointer: bool,
	#[arg(long)]
	pub json: bool,
}

#[derive(Serialize)]
struct PathRow {
	path: String,
	level: usize,
	kind: &'static str,
}

/// List every node's path, level, and kind in visit order.
pub fn run(args: Args, options: &WalkOptions) -> jsonwalk::Result<()> {
	let value = load_document(&args.file, options)?;

	let rows = if args.pointer {
		let options = WalkOptions {
			max_depth: options.max_depth,
			origin: Pointer::root(),
		};
		collect_rows(&value, args.kind, &options)?
	} else {
		collect_rows(&value, args.kind, options)?
	};

	if args.json {
		return print_json(&rows);
	}

	let stdout = io::stdout();
	let mut out = BufWriter::new(stdout.lock());
	writeln!(out, "level\tkind\tpath")?;
	for row in &rows {
		writeln!(out, "{}\t{}\t{}", row.level, row.kind, row.path)?;
	}
	out.flush()?;
	Ok(())
}

fn collect_rows<P: WalkPath>(value: &Value, kind: Option<Kind>, options: &WalkOptions<P>) -> jsonwalk::Result<Vec<PathRow>> {
	let mut rows = Vec::new();
	walk_with(
		value,
		&mut callback(|node: &Node<'_, P>| {
			if kind.is_none_or(|kind| kind == node.kind) {
				rows.push(PathRow {
					path: node.path.to_string(),
					level: node.path.level(),
					kind: node.kind.as_str(),
				});
			}
		}),
		options,
	)?;
	Ok(rows)
}
