use std::path::PathBuf;

use crate::cmd::person::Person;
use crate::cmd::util::read_input;
use crate::error::Result;

#[derive(clap::Args)]
pub struct Args {
	/// Person JSON file, `-` for stdin. Defaults to a built-in sample.
	pub path: Option<PathBuf>,
	/// Pretty-print the re-encoded document.
	#[arg(long)]
	pub pretty: bool,
}

/// Decode a person and print it re-encoded.
///
/// Absent and null fields both come back as `null`; `is_zero` is dropped while
/// null or `false`.
pub fn run(args: Args) -> Result<()> {
	let Args { path, pretty } = args;

	let input = read_input(path.as_deref())?;
	let person: Person = serde_json::from_str(&input)?;

	let out = if pretty { serde_json::to_string_pretty(&person)? } else { serde_json::to_string(&person)? };
	tracing::debug!(bytes = out.len(), "re-encoded person");
	println!("{out}");

	Ok(())
}
