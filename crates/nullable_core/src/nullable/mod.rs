use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{NullableError, Result, State};

/// Field container that remembers whether its key was present and whether the
/// token decoded to a value.
///
/// `Serialize` emits the value when valid and `null` otherwise; presence never
/// affects output. `Deserialize` marks the container present, maps `null` to an
/// invalid container, and delegates anything else to `T`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Nullable<T> {
	value: T,
	valid: bool,
	present: bool,
}

impl<T> Nullable<T> {
	/// Wrap a concrete value. Default values count as set, not absent.
	pub fn new(value: T) -> Self {
		Self {
			value,
			valid: true,
			present: true,
		}
	}

	/// Container for a key that never appeared.
	pub fn unset() -> Self
	where
		T: Default,
	{
		Self::default()
	}

	/// Container for a key that was explicitly null.
	pub fn null() -> Self
	where
		T: Default,
	{
		Self {
			value: T::default(),
			valid: false,
			present: true,
		}
	}

	/// Present container from an option: `Some` is set, `None` is null.
	pub fn from_option(value: Option<T>) -> Self
	where
		T: Default,
	{
		match value {
			Some(value) => Self::new(value),
			None => Self::null(),
		}
	}

	/// Whether the key existed in the input.
	pub fn is_present(&self) -> bool {
		self.present
	}

	/// Whether the container holds a decoded value.
	pub fn is_valid(&self) -> bool {
		self.valid
	}

	/// Present but without a value: explicit null or a failed decode.
	pub fn is_null(&self) -> bool {
		self.present && !self.valid
	}

	/// Key never appeared. Usable as `skip_serializing_if` to drop only unseen fields.
	pub fn is_absent(&self) -> bool {
		!self.present
	}

	/// Current [`State`].
	pub fn state(&self) -> State {
		State::from_flags(self.present, self.valid)
	}

	/// Raw payload. Only meaningful when [`Self::is_valid`].
	pub fn value(&self) -> &T {
		&self.value
	}

	/// Borrow the value when valid.
	pub fn get(&self) -> Option<&T> {
		self.valid.then_some(&self.value)
	}

	/// Mutably borrow the value when valid.
	pub fn get_mut(&mut self) -> Option<&mut T> {
		if self.valid { Some(&mut self.value) } else { None }
	}

	/// Borrowing view as a plain option, dropping the presence flag.
	pub fn as_option(&self) -> Option<&T> {
		self.get()
	}

	/// Consume into a plain option, dropping the presence flag.
	pub fn into_option(self) -> Option<T> {
		if self.valid { Some(self.value) } else { None }
	}

	/// Valid value, or `default` when null or unset.
	pub fn unwrap_or(self, default: T) -> T {
		if self.valid { self.value } else { default }
	}

	/// Borrow the value, failing with the reason it is missing.
	pub fn require(&self) -> Result<&T> {
		match self.state() {
			State::Set => Ok(&self.value),
			State::Null => Err(NullableError::Null),
			State::Unset => Err(NullableError::Absent),
		}
	}

	/// Consume into the value, failing with the reason it is missing.
	pub fn into_value(self) -> Result<T> {
		match self.state() {
			State::Set => Ok(self.value),
			State::Null => Err(NullableError::Null),
			State::Unset => Err(NullableError::Absent),
		}
	}

	/// Store a value, marking the container present and valid.
	pub fn set(&mut self, value: T) {
		self.value = value;
		self.valid = true;
		self.present = true;
	}

	/// Transition to the null state.
	pub fn set_null(&mut self)
	where
		T: Default,
	{
		*self = Self::null();
	}

	/// Transition back to the unset state.
	pub fn clear(&mut self)
	where
		T: Default,
	{
		*self = Self::unset();
	}

	/// Take the valid value out, leaving the container unset.
	pub fn take(&mut self) -> Option<T>
	where
		T: Default,
	{
		std::mem::take(self).into_option()
	}

	/// Transform the valid payload, keeping both flags.
	pub fn map<U, F>(self, f: F) -> Nullable<U>
	where
		U: Default,
		F: FnOnce(T) -> U,
	{
		let value = if self.valid { f(self.value) } else { U::default() };
		Nullable {
			value,
			valid: self.valid,
			present: self.present,
		}
	}

	/// Zero test for `skip_serializing_if`.
	///
	/// True when the container would encode as `null`, or when its valid value
	/// equals `T::default()`. A valid `false`, `0`, or `""` is therefore dropped
	/// by an enclosing omit-if-zero rule even though the container itself would
	/// emit it.
	pub fn is_zero(&self) -> bool
	where
		T: Default + PartialEq,
	{
		!self.valid || self.value == T::default()
	}

	/// Decode entry point, run when the enclosing decoder saw the field's key.
	///
	/// Marks the container present, then maps a `null` token to the null state and
	/// delegates any other token to `T`. A failure from `T` is returned unchanged
	/// and leaves the container present, invalid, and holding `T::default()`.
	pub fn decode<'de, D>(&mut self, deserializer: D) -> std::result::Result<(), D::Error>
	where
		T: Deserialize<'de> + Default,
		D: Deserializer<'de>,
	{
		self.present = true;
		self.valid = false;
		self.value = T::default();

		if let Some(value) = Option::<T>::deserialize(deserializer)? {
			self.value = value;
			self.valid = true;
		}
		Ok(())
	}

	/// Decode a single raw JSON token in place.
	///
	/// Unlike a derived struct decode, the container stays observable after a
	/// failure. Trailing input after the token is rejected and also leaves the
	/// container invalid.
	pub fn decode_json<'a>(&mut self, token: &'a str) -> serde_json::Result<()>
	where
		T: Deserialize<'a> + Default,
	{
		let mut de = serde_json::Deserializer::from_str(token);
		let res = self.decode(&mut de).and_then(|()| de.end());
		if res.is_err() {
			self.valid = false;
			self.value = T::default();
		}
		res
	}
}

impl<T> From<T> for Nullable<T> {
	fn from(value: T) -> Self {
		Self::new(value)
	}
}

impl<T: Serialize> Serialize for Nullable<T> {
	fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		if self.valid {
			serializer.serialize_some(&self.value)
		} else {
			serializer.serialize_none()
		}
	}
}

impl<'de, T> Deserialize<'de> for Nullable<T>
where
	T: Deserialize<'de> + Default,
{
	fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		let mut out = Self::unset();
		out.decode(deserializer)?;
		Ok(out)
	}
}
