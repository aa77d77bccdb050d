//! Tri-state nullable container for serde struct fields.
//!
//! [`Nullable`] tells apart a field that was absent from the input, a field that
//! was explicitly `null`, and a field holding a decoded value. Absence is left to
//! the enclosing derive: annotate fields with `#[serde(default)]` so a missing key
//! produces [`Nullable::default`] without running the container's decoder.
//!
//! ```
//! use nullable::Nullable;
//! use serde::Deserialize;
//!
//! #[derive(Deserialize)]
//! struct Patch {
//! 	#[serde(default)]
//! 	age: Nullable<i64>,
//! 	#[serde(default)]
//! 	email: Nullable<String>,
//! }
//!
//! let patch: Patch = serde_json::from_str(r#"{"age":null}"#).unwrap();
//! assert!(patch.age.is_present() && !patch.age.is_valid());
//! assert!(!patch.email.is_present());
//! ```

mod error;
mod nullable;
mod state;

pub use error::{NullableError, Result};
pub use nullable::Nullable;
pub use state::State;
