/// Presence/validity state of a [`crate::Nullable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum State {
	/// Key never seen: not present, not valid.
	Unset,
	/// Key present with a null or undecodable token.
	Null,
	/// Key present with a decoded value.
	Set,
}

impl State {
	/// Derive the state from the container flags.
	///
	/// `valid` without `present` cannot be constructed through the public API and
	/// is reported as `Set`.
	pub fn from_flags(present: bool, valid: bool) -> Self {
		match (present, valid) {
			(_, true) => Self::Set,
			(true, false) => Self::Null,
			(false, false) => Self::Unset,
		}
	}

	/// Stable lowercase label.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Unset => "unset",
			Self::Null => "null",
			Self::Set => "set",
		}
	}

	/// Whether the key appeared in the input.
	pub fn is_present(self) -> bool {
		!matches!(self, Self::Unset)
	}
}

#[cfg(test)]
mod tests {
	use super::State;

	#[test]
	fn flags_map_to_states() {
		assert_eq!(State::from_flags(false, false), State::Unset);
		assert_eq!(State::from_flags(true, false), State::Null);
		assert_eq!(State::from_flags(true, true), State::Set);
	}

	#[test]
	fn only_unset_is_not_present() {
		assert!(!State::Unset.is_present());
		assert!(State::Null.is_present());
		assert!(State::Set.is_present());
	}

	#[test]
	fn labels_are_lowercase() {
		assert_eq!(State::Unset.as_str(), "unset");
		assert_eq!(State::Null.as_str(), "null");
		assert_eq!(State::Set.as_str(), "set");
	}
}
