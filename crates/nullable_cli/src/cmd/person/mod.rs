use nullable::Nullable;
use serde::{Deserialize, Serialize};

/// Named integer scalar; decodes through its own newtype impl.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomInt(pub i64);

/// Named float scalar; decodes through its own newtype impl.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CustomFloat(pub f32);

/// Demo document with one nullable field per scalar kind.
#[derive(Debug, Serialize, Deserialize)]
pub struct Person {
	/// Plain required field.
	pub name: String,
	/// Named integer.
	#[serde(default)]
	pub age: Nullable<CustomInt>,
	/// Free text.
	#[serde(default)]
	pub address: Nullable<String>,
	/// Named float.
	#[serde(default)]
	pub height: Nullable<CustomFloat>,
	/// Boolean that is re-emitted as null when absent.
	#[serde(default)]
	pub has_pet: Nullable<bool>,
	/// Boolean dropped from output while null or `false`.
	#[serde(default, skip_serializing_if = "Nullable::is_zero")]
	pub is_zero: Nullable<bool>,
}

/// Presence/validity of one nullable field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldReport {
	/// JSON key.
	pub field: &'static str,
	/// Display label used by the text report.
	#[serde(skip)]
	pub label: &'static str,
	/// State label (`unset`, `null`, `set`).
	pub state: &'static str,
	/// Whether the field decoded to a value.
	pub valid: bool,
	/// Whether the key appeared in the input.
	pub present: bool,
}

impl FieldReport {
	fn of<T>(field: &'static str, label: &'static str, item: &Nullable<T>) -> Self {
		Self {
			field,
			label,
			state: item.state().as_str(),
			valid: item.is_valid(),
			present: item.is_present(),
		}
	}
}

impl Person {
	/// Reports for every nullable field in declaration order.
	pub fn reports(&self) -> Vec<FieldReport> {
		vec![
			FieldReport::of("age", "Age", &self.age),
			FieldReport::of("address", "Address", &self.address),
			FieldReport::of("height", "Height", &self.height),
			FieldReport::of("has_pet", "HasPet", &self.has_pet),
			FieldReport::of("is_zero", "IsZero", &self.is_zero),
		]
	}
}

#[cfg(test)]
mod tests;
