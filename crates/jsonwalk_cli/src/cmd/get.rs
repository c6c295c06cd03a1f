use std::collections::BTreeMap;

use jsonwalk::{Node, Path, Value, WalkError, WalkOptions, callback, walk_with};

use crate::cmd::util::{load_document, print_json};

#[derive(clap::Args)]
pub struct Args {
	/// Document path, or `-` for stdin.
	pub file: std::path::PathBuf,
	/// Node path such as `[0].Config.Env` or `data.items[2]`; repeatable.
	///
	/// Keys are not escaped, so members whose names are empty or contain `.`
	/// or `[` cannot be addressed. `paths --pointer` still lists them.
	#[arg(long = "path", required = true)]
	pub paths: Vec<String>,
	#[arg(long)]
	pub json: bool,
}

/// Print the value found at each requested path.
pub fn run(args: Args, options: &WalkOptions) -> jsonwalk::Result<()> {
	let targets = args.paths.iter().map(|text| Path::parse(text)).collect::<jsonwalk::Result<Vec<_>>>()?;
	let value = load_document(&args.file, options)?;

	let mut found: Vec<Option<Value>> = vec![None; targets.len()];
	walk_with(
		&value,
		&mut callback(|node: &Node<'_>| {
			for (slot, target) in found.iter_mut().zip(&targets) {
				if target == node.path {
					*slot = Some(node.value.clone());
				}
			}
		}),
		options,
	)?;

	let mut values = Vec::with_capacity(targets.len());
	for (target, value) in targets.iter().zip(found) {
		let value = value.ok_or_else(|| WalkError::PathNotFound { path: target.render() })?;
		values.push((target.render(), value));
	}

	if args.json {
		let by_path: BTreeMap<String, Value> = values.into_iter().collect();
		return print_json(&by_path);
	}

	if let [(_, value)] = values.as_slice() {
		println!("{value}");
		return Ok(());
	}
	for (path, value) in &values {
		println!("{path}\t{value}");
	}
	Ok(())
}
