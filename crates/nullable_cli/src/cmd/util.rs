use std::io::Read;
use std::path::Path;

use crate::error::Result;

/// Document decoded when no input path is given.
pub(crate) const SAMPLE_PERSON: &str = r#"{"name":"Alice","age":15,"address":null,"height":null}"#;

/// Load the input document: built-in sample when `path` is `None`, stdin for `-`, otherwise a file.
pub(crate) fn read_input(path: Option<&Path>) -> Result<String> {
	match path {
		None => {
			tracing::debug!("using built-in sample document");
			Ok(SAMPLE_PERSON.to_owned())
		}
		Some(path) if path.as_os_str() == "-" => {
			tracing::debug!("reading document from stdin");
			let mut out = String::new();
			std::io::stdin().read_to_string(&mut out)?;
			Ok(out)
		}
		Some(path) => {
			tracing::debug!(path = %path.display(), "reading document from file");
			Ok(std::fs::read_to_string(path)?)
		}
	}
}

