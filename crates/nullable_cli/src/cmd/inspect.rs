use std::path::PathBuf;

use crate::cmd::person::{FieldReport, Person};
use crate::cmd::util::read_input;
use crate::error::Result;

#[derive(clap::Args)]
pub struct Args {
	/// Person JSON file, `-` for stdin. Defaults to a built-in sample.
	pub path: Option<PathBuf>,
	/// Emit the report as JSON.
	#[arg(long)]
	pub json: bool,
}

#[derive(serde::Serialize)]
struct InspectJson<'a> {
	name: &'a str,
	fields: Vec<FieldReport>,
}

/// Print presence and validity for every nullable person field.
pub fn run(args: Args) -> Result<()> {
	let Args { path, json } = args;

	let input = read_input(path.as_deref())?;
	let person: Person = serde_json::from_str(&input)?;
	let reports = person.reports();
	tracing::debug!(fields = reports.len(), "decoded person");

	if json {
		let payload = InspectJson {
			name: &person.name,
			fields: reports,
		};
		println!("{}", serde_json::to_string_pretty(&payload)?);
		return Ok(());
	}

	for item in reports {
		println!("Person.{} is valid: {}, present: {}", item.label, item.valid, item.present);
	}

	Ok(())
}
