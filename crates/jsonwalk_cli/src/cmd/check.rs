use std::collections::BTreeMap;

use jsonwalk::{Node, WalkOptions, callback, walk_with};
use serde::Serialize;

use crate::cmd::util::{load_document, print_json};

#[derive(clap::Args)]
pub struct Args {
	/// Document path, or `-` for stdin.
	pub file: std::path::PathBuf,
	#[arg(long)]
	pub json: bool,
}

#[derive(Serialize, Default)]
struct Summary {
	nodes: usize,
	max_level: usize,
	kinds: BTreeMap<&'static str, usize>,
}

/// Validate the document and print node counts per kind.
pub fn run(args: Args, options: &WalkOptions) -> jsonwalk::Result<()> {
	let value = load_document(&args.file, options)?;

	let mut summary = Summary::default();
	walk_with(
		&value,
		&mut callback(|node: &Node<'_>| {
			summary.nodes += 1;
			summary.max_level = summary.max_level.max(node.path.level());
			*summary.kinds.entry(node.kind.as_str()).or_default() += 1;
		}),
		options,
	)?;

	if args.json {
		return print_json(&summary);
	}

	println!("nodes: {}", summary.nodes);
	println!("max_level: {}", summary.max_level);
	for (kind, count) in &summary.kinds {
		println!("{kind}\t{count}");
	}
	Ok(())
}
