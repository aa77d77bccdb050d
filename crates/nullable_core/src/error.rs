use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, NullableError>;

/// Errors produced when a valid value is required but the container holds none.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NullableError {
	/// The field key never appeared in the input.
	#[error("value is absent")]
	Absent,
	/// The field was present but null, or failed to decode.
	#[error("value is null")]
	Null,
}
