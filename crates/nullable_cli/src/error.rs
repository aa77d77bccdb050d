use nullable::NullableError;
use thiserror::Error;

/// CLI result type.
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors surfaced by CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
	/// Reading the input document failed.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// Input did not decode, or output did not encode.
	#[error("json: {0}")]
	Json(#[from] serde_json::Error),
	/// A value was required but the field held none.
	#[error("field: {0}")]
	Missing(#[from] NullableError),
}
