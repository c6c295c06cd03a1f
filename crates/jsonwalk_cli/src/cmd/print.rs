use jsonwalk::{Output, Pointer, WalkOptions, WalkPath, walk_with};

use crate::cmd::util::load_document;

#[derive(clap::Args)]
pub struct Args {
	/// Document path, or `-` for stdin.
	pub file: std::path::PathBuf,
	/// Show locations as JSON Pointers (`/Actors/0/name`).
	#[arg(long)]
	pub pointer: bool,
}

/// Render the document tree with the diagnostic sink.
pub fn run(args: Args, options: &WalkOptions) -> jsonwalk::Result<()> {
	let value = load_document(&args.file, options)?;

	let mut output = Output::stdout();
	if args.pointer {
		let options = WalkOptions {
			max_depth: options.max_depth,
			origin: Pointer::root(),
		};
		walk_with(&value, &mut output, &options)?;
	} else {
		walk_with(&value, &mut output, options)?;
	}
	output.finish()?;
	Ok(())
}
