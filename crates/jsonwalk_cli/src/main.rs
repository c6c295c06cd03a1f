#![allow(missing_docs)]

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod cmd;

#[derive(Parser)]
#[command(name = "jsonwalk", about = "Walk, inspect, and rewrite JSON documents by path")]
struct Cli {
	/// Log traversal details to stderr.
	#[arg(short, long, global = true)]
	verbose: bool,
	/// Maximum nesting depth accepted while walking.
	#[arg(long, global = true)]
	max_depth: Option<usize>,
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Print every node as an indented tree with paths and kinds.
	Print(cmd::print::Args),
	/// List node paths, levels, and kinds.
	Paths(cmd::paths::Args),
	/// Extract the values stored at one or more paths.
	Get(cmd::get::Args),
	/// Replace the value at a path and print the rewritten document.
	Set(cmd::set::Args),
	/// Validate a document and summarize its shape.
	Check(cmd::check::Args),
}

fn main() {
	let cli = Cli::parse();

	let filter = if cli.verbose { EnvFilter::new("debug") } else { EnvFilter::new("info") };
	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_target(false)
		.with_writer(std::io::stderr)
		.init();

	if let Err(err) = run(cli) {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn run(cli: Cli) -> jsonwalk::Result<()> {
	let options = cmd::util::walk_options(cli.max_depth);

	match cli.command {
		Commands::Print(args) => cmd::print::run(args, &options),
		Commands::Paths(args) => cmd::paths::run(args, &options),
		Commands::Get(args) => cmd::get::run(args, &options),
		Commands::Set(args) => cmd::set::run(args, &options),
		Commands::Check(args) => cmd::check::run(args, &options),
	}
}
