#![allow(missing_docs)]

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod cmd;
mod error;

#[derive(Parser)]
#[command(name = "nullable", about = "Inspect tri-state nullable JSON fields")]
struct Cli {
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Decode a person document and report per-field presence and validity.
	Inspect(cmd::inspect::Args),
	/// Decode a person document and print it re-encoded.
	Roundtrip(cmd::roundtrip::Args),
	/// Decode a single raw JSON token into a nullable field.
	Field(cmd::field::Args),
}

fn main() {
	init_tracing();
	if let Err(err) = run() {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn run() -> error::Result<()> {
	let cli = Cli::parse();

	match cli.command {
		Commands::Inspect(args) => cmd::inspect::run(args),
		Commands::Roundtrip(args) => cmd::roundtrip::run(args),
		Commands::Field(args) => cmd::field::run(args),
	}
}

fn init_tracing() {
	let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
	let _ = tracing_subscriber::fmt()
		.with_env_filter(env_filter)
		.with_target(false)
		.with_writer(std::io::stderr)
		.try_init();
}
