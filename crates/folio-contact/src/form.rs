//! Contact form state
//!
//! This module holds the data model of the contact form: the four input
//! fields, their per-field error lists and the submission lifecycle. The
//! orchestrating controller lives in [`component`], the pure validation
//! rules in [`validators`].
//!
//! ## Lifecycle
//!
//! ```text
//! Idle ──submit()──▶ Submitting ──Success──▶ Succeeded
//!                        │
//!                        └──other outcome──▶ Failed
//! ```
//!
//! Both terminal phases allow another `submit()`.

pub mod component;
pub mod validators;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Name of a contact form input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldName {
	Name,
	Email,
	Message,
	Consent,
}

impl FieldName {
	/// Every field in form order
	pub const ALL: [FieldName; 4] = [
		FieldName::Name,
		FieldName::Email,
		FieldName::Message,
		FieldName::Consent,
	];

	/// Wire name used in request bodies and error maps
	pub fn as_str(&self) -> &'static str {
		match self {
			FieldName::Name => "name",
			FieldName::Email => "email",
			FieldName::Message => "message",
			FieldName::Consent => "consent",
		}
	}

	/// Maximum number of characters accepted by the input, if bounded
	pub fn max_length(&self) -> Option<usize> {
		match self {
			FieldName::Name => Some(120),
			FieldName::Message => Some(2000),
			FieldName::Email | FieldName::Consent => None,
		}
	}

	/// Whether the field holds a checkbox flag rather than text
	pub fn is_flag(&self) -> bool {
		matches!(self, FieldName::Consent)
	}
}

impl fmt::Display for FieldName {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for FieldName {
	type Err = FormError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		FieldName::ALL
			.into_iter()
			.find(|field| field.as_str() == s)
			.ok_or_else(|| FormError::UnknownField(s.to_string()))
	}
}

/// Value written into a field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
	Text(String),
	Flag(bool),
}

impl From<&str> for FieldValue {
	fn from(value: &str) -> Self {
		FieldValue::Text(value.to_string())
	}
}

impl From<String> for FieldValue {
	fn from(value: String) -> Self {
		FieldValue::Text(value)
	}
}

impl From<bool> for FieldValue {
	fn from(value: bool) -> Self {
		FieldValue::Flag(value)
	}
}

/// Current input values
///
/// `Default` is the initial, empty form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactFields {
	pub name: String,
	pub email: String,
	pub message: String,
	pub consent: bool,
}

impl ContactFields {
	/// Create a filled-in snapshot
	///
	/// # Examples
	///
	/// ```
	/// use folio_contact::ContactFields;
	///
	/// let fields = ContactFields::new("Ada", "ada@example.com", "Hello", true);
	/// assert!(fields.consent);
	/// ```
	pub fn new(
		name: impl Into<String>,
		email: impl Into<String>,
		message: impl Into<String>,
		consent: bool,
	) -> Self {
		Self {
			name: name.into(),
			email: email.into(),
			message: message.into(),
			consent,
		}
	}

	/// Text content of a text field, `None` for the consent flag
	pub fn text(&self, field: FieldName) -> Option<&str> {
		match field {
			FieldName::Name => Some(&self.name),
			FieldName::Email => Some(&self.email),
			FieldName::Message => Some(&self.message),
			FieldName::Consent => None,
		}
	}

	fn text_mut(&mut self, field: FieldName) -> Option<&mut String> {
		match field {
			FieldName::Name => Some(&mut self.name),
			FieldName::Email => Some(&mut self.email),
			FieldName::Message => Some(&mut self.message),
			FieldName::Consent => None,
		}
	}

	/// Write `value` into `field`, truncating text to the input limit
	pub(crate) fn set(&mut self, field: FieldName, value: FieldValue) -> Result<(), FormError> {
		match (field.is_flag(), value) {
			(true, FieldValue::Flag(flag)) => {
				self.consent = flag;
				Ok(())
			}
			(false, FieldValue::Text(text)) => {
				let text = match field.max_length() {
					Some(limit) => truncate_chars(text, limit),
					None => text,
				};
				if let Some(slot) = self.text_mut(field) {
					*slot = text;
				}
				Ok(())
			}
			(true, FieldValue::Text(_)) => Err(FormError::ValueKind {
				field,
				expected: "flag",
			}),
			(false, FieldValue::Flag(_)) => Err(FormError::ValueKind {
				field,
				expected: "text",
			}),
		}
	}
}

fn truncate_chars(mut text: String, limit: usize) -> String {
	if let Some((idx, _)) = text.char_indices().nth(limit) {
		text.truncate(idx);
	}
	text
}

/// Per-field error messages
///
/// Keys are wire field names. Keys reported by the server that are not
/// one of the four form fields are kept as-is. A key never maps to an
/// empty list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
	pub fn new() -> Self {
		Self::default()
	}

	/// Messages recorded for `field`
	pub fn get(&self, field: &str) -> Option<&[String]> {
		self.0.get(field).map(Vec::as_slice)
	}

	/// Messages recorded for a known form field
	pub fn for_field(&self, field: FieldName) -> Option<&[String]> {
		self.get(field.as_str())
	}

	/// Append a message to `field`
	pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
		self.0.entry(field.into()).or_default().push(message.into());
	}

	/// Replace the messages of `field`; an empty list removes the entry
	pub fn set(&mut self, field: impl Into<String>, messages: Vec<String>) {
		let field = field.into();
		if messages.is_empty() {
			self.0.remove(&field);
		} else {
			self.0.insert(field, messages);
		}
	}

	/// Drop the messages of `field`, returning whether any existed
	pub fn clear_field(&mut self, field: &str) -> bool {
		self.0.remove(field).is_some()
	}

	pub fn clear(&mut self) {
		self.0.clear();
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Field names carrying at least one message, in sorted order
	pub fn fields(&self) -> impl Iterator<Item = &str> {
		self.0.keys().map(String::as_str)
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
		self.0.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
	}
}

impl From<BTreeMap<String, Vec<String>>> for FieldErrors {
	fn from(map: BTreeMap<String, Vec<String>>) -> Self {
		Self(map.into_iter().filter(|(_, v)| !v.is_empty()).collect())
	}
}

/// Submission lifecycle of one form instance
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SubmissionPhase {
	#[default]
	Idle,
	Submitting,
	Succeeded,
	Failed,
}

impl SubmissionPhase {
	/// `Succeeded` or `Failed`
	pub fn is_terminal(&self) -> bool {
		matches!(self, SubmissionPhase::Succeeded | SubmissionPhase::Failed)
	}
}

/// Mutable record held for the lifetime of one form instance
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
	pub fields: ContactFields,
	pub field_errors: FieldErrors,
	pub phase: SubmissionPhase,
}

/// Errors from misusing the form API
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
	#[error("Unknown form field: {0}")]
	UnknownField(String),

	#[error("Field `{field}` expects a {expected} value")]
	ValueKind {
		field: FieldName,
		expected: &'static str,
	},
}
