use std::fmt::Display;

use clap::ValueEnum;
use nullable::Nullable;
use serde::Deserialize;

use crate::error::Result;

/// Scalar kind the token is decoded into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FieldKind {
	/// Signed 64-bit integer.
	Int,
	/// UTF-8 string.
	String,
	/// 64-bit float.
	Float,
	/// Boolean.
	Bool,
}

#[derive(clap::Args)]
pub struct Args {
	/// Raw JSON token, e.g. `15`, `null`, `"text"`.
	#[arg(allow_hyphen_values = true)]
	pub token: String,
	/// Scalar kind to decode into.
	#[arg(long, value_enum, default_value = "int")]
	pub kind: FieldKind,
	/// Fail unless the token decodes to a value.
	#[arg(long)]
	pub require: bool,
}

/// Decode one token into a nullable of the chosen kind and print its state.
pub fn run(args: Args) -> Result<()> {
	let Args { token, kind, require } = args;

	match kind {
		FieldKind::Int => report::<i64>(&token, require),
		FieldKind::String => report::<String>(&token, require),
		FieldKind::Float => report::<f64>(&token, require),
		FieldKind::Bool => report::<bool>(&token, require),
	}
}

fn report<'a, T>(token: &'a str, require: bool) -> Result<()>
where
	T: Deserialize<'a> + Default + Display,
{
	let mut item = Nullable::<T>::unset();
	if let Err(err) = item.decode_json(token) {
		tracing::debug!(present = item.is_present(), valid = item.is_valid(), "token failed to decode");
		return Err(err.into());
	}
	if require {
		item.require()?;
	}

	println!("state: {}", item.state().as_str());
	println!("present: {}", item.is_present());
	println!("valid: {}", item.is_valid());
	match item.get() {
		Some(value) => println!("value: {value}"),
		None => println!("value: null"),
	}

	Ok(())
}
