//! Normalized submission outcomes

use crate::form::FieldErrors;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Classified result kind of one submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
	/// Endpoint accepted the message (any 2xx)
	Success,
	/// 422: the endpoint rejected one or more fields
	ValidationError,
	/// 429
	RateLimited,
	/// 5xx
	ServerError,
	/// The request exceeded the configured timeout
	NetworkTimeout,
	/// Connection failures, unexpected statuses, anything else
	UnknownError,
}

impl Outcome {
	pub fn is_success(&self) -> bool {
		matches!(self, Outcome::Success)
	}

	/// User-facing summary attached to non-success results
	pub fn default_message(&self) -> Option<&'static str> {
		match self {
			Outcome::Success => None,
			Outcome::ValidationError => Some("Please check your input and try again."),
			Outcome::RateLimited => Some("Too many requests. Please try again later."),
			Outcome::ServerError => Some("Server error. Please try again later."),
			Outcome::NetworkTimeout => {
				Some("Request timeout. Please check your connection and try again.")
			}
			Outcome::UnknownError => Some("Something went wrong. Please try again later."),
		}
	}
}

impl fmt::Display for Outcome {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let name = match self {
			Outcome::Success => "success",
			Outcome::ValidationError => "validation_error",
			Outcome::RateLimited => "rate_limited",
			Outcome::ServerError => "server_error",
			Outcome::NetworkTimeout => "network_timeout",
			Outcome::UnknownError => "unknown_error",
		};
		f.write_str(name)
	}
}

/// Value returned by a [`SubmissionClient`](super::SubmissionClient)
///
/// Constructed fresh for every call and consumed by value. Field errors
/// are only ever present on [`Outcome::ValidationError`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionResult {
	outcome: Outcome,
	field_errors: Option<FieldErrors>,
	message: Option<String>,
}

impl SubmissionResult {
	fn with_outcome(outcome: Outcome) -> Self {
		Self {
			outcome,
			field_errors: None,
			message: outcome.default_message().map(str::to_string),
		}
	}

	pub fn success() -> Self {
		Self::with_outcome(Outcome::Success)
	}

	/// A 422 result carrying the server-reported field errors
	pub fn validation_error(field_errors: FieldErrors) -> Self {
		Self {
			field_errors: Some(field_errors),
			..Self::with_outcome(Outcome::ValidationError)
		}
	}

	pub fn rate_limited() -> Self {
		Self::with_outcome(Outcome::RateLimited)
	}

	pub fn server_error() -> Self {
		Self::with_outcome(Outcome::ServerError)
	}

	pub fn network_timeout() -> Self {
		Self::with_outcome(Outcome::NetworkTimeout)
	}

	pub fn unknown_error() -> Self {
		Self::with_outcome(Outcome::UnknownError)
	}

	pub fn outcome(&self) -> Outcome {
		self.outcome
	}

	pub fn field_errors(&self) -> Option<&FieldErrors> {
		self.field_errors.as_ref()
	}

	pub fn message(&self) -> Option<&str> {
		self.message.as_deref()
	}

	/// Split into outcome, field errors and message
	pub fn into_parts(self) -> (Outcome, Option<FieldErrors>, Option<String>) {
		(self.outcome, self.field_errors, self.message)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_success_has_no_message() {
		let result = SubmissionResult::success();

		assert!(result.outcome().is_success());
		assert!(result.message().is_none());
		assert!(result.field_errors().is_none());
	}

	#[rstest]
	#[case(SubmissionResult::rate_limited(), "Too many requests. Please try again later.")]
	#[case(SubmissionResult::server_error(), "Server error. Please try again later.")]
	#[case(
		SubmissionResult::network_timeout(),
		"Request timeout. Please check your connection and try again."
	)]
	#[case(SubmissionResult::unknown_error(), "Something went wrong. Please try again later.")]
	fn test_failure_messages(#[case] result: SubmissionResult, #[case] expected: &str) {
		assert_eq!(result.message(), Some(expected));
		assert!(result.field_errors().is_none());
	}

	#[rstest]
	fn test_validation_error_carries_field_errors() {
		let mut errors = FieldErrors::new();
		errors.add("email", "invalid format");

		let (outcome, field_errors, message) =
			SubmissionResult::validation_error(errors.clone()).into_parts();

		assert_eq!(outcome, Outcome::ValidationError);
		assert_eq!(field_errors, Some(errors));
		assert_eq!(message.as_deref(), Some("Please check your input and try again."));
	}
}
