//! Client-side validation rules
//!
//! Every rule is a presence check. Format checks such as email syntax are
//! left to the backend, which reports them through a 422 response.

use super::{ContactFields, FieldErrors, FieldName};

pub const NAME_REQUIRED: &str = "Name is required";
pub const EMAIL_REQUIRED: &str = "Email is required";
pub const MESSAGE_REQUIRED: &str = "Message is required";
pub const CONSENT_REQUIRED: &str = "Consent is required";

/// Validate a fields snapshot
///
/// Returns an empty [`FieldErrors`] iff `name`, `email` and `message` are
/// non-empty after trimming whitespace and `consent` is set. The function
/// is pure.
///
/// # Examples
///
/// ```
/// use folio_contact::{ContactFields, FieldName};
/// use folio_contact::form::validators::validate;
///
/// let errors = validate(&ContactFields::new("  ", "ada@example.com", "Hi", true));
/// assert_eq!(errors.for_field(FieldName::Name).unwrap(), ["Name is required"]);
/// ```
pub fn validate(fields: &ContactFields) -> FieldErrors {
	let mut errors = FieldErrors::new();

	for field in FieldName::ALL {
		let missing = match fields.text(field) {
			Some(text) => text.trim().is_empty(),
			None => !fields.consent,
		};
		if missing {
			errors.add(field.as_str(), required_message(field));
		}
	}

	errors
}

fn required_message(field: FieldName) -> &'static str {
	match field {
		FieldName::Name => NAME_REQUIRED,
		FieldName::Email => EMAIL_REQUIRED,
		FieldName::Message => MESSAGE_REQUIRED,
		FieldName::Consent => CONSENT_REQUIRED,
	}
}
