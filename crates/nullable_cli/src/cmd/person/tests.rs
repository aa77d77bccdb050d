use nullable::State;

use super::{CustomInt, Person};
use crate::cmd::util::SAMPLE_PERSON;

#[test]
fn sample_reports_match_field_states() {
	let person: Person = serde_json::from_str(SAMPLE_PERSON).expect("sample decodes");
	let reports = person.reports();

	let summary: Vec<_> = reports.iter().map(|item| (item.field, item.valid, item.present)).collect();
	assert_eq!(
		summary,
		vec![
			("age", true, true),
			("address", false, true),
			("height", false, true),
			("has_pet", false, false),
			("is_zero", false, false),
		]
	);
	assert_eq!(reports[0].state, State::Set.as_str());
	assert_eq!(reports[1].state, State::Null.as_str());
	assert_eq!(reports[3].state, State::Unset.as_str());
}

#[test]
fn report_json_skips_display_label() {
	let person: Person = serde_json::from_str(SAMPLE_PERSON).expect("sample decodes");
	let json = serde_json::to_value(&person.reports()[0]).expect("report encodes");

	assert_eq!(json, serde_json::json!({"field": "age", "state": "set", "valid": true, "present": true}));
}

#[test]
fn sample_reencodes_without_zero_field() {
	let person: Person = serde_json::from_str(SAMPLE_PERSON).expect("sample decodes");
	assert_eq!(person.age.get(), Some(&CustomInt(15)));

	let json = serde_json::to_string(&person).expect("person encodes");
	assert_eq!(json, r#"{"name":"Alice","age":15,"address":null,"height":null,"has_pet":null}"#);
}
