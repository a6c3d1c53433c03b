//! Contact form analytics
//!
//! Every submission that reaches the network records one [`ContactEvent`].
//! Local validation rejections are not recorded.
//!
//! ## Available Analytics Backends
//!
//! - **LoggerAnalytics**: Log events using `tracing`
//!
//! Custom backends implement [`ContactAnalytics`].

use crate::client::Outcome;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Category attached to every contact event
pub const EVENT_CATEGORY: &str = "contact";

/// Label attached to every contact event
pub const EVENT_LABEL: &str = "portfolio_contact_form";

/// Coarse failure class reported with `form_submit_error`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorType {
	Validation,
	Server,
	Network,
}

impl ErrorType {
	/// Failure class of an outcome, `None` for success
	pub fn from_outcome(outcome: Outcome) -> Option<Self> {
		match outcome {
			Outcome::Success => None,
			Outcome::ValidationError => Some(ErrorType::Validation),
			Outcome::RateLimited | Outcome::ServerError => Some(ErrorType::Server),
			Outcome::NetworkTimeout | Outcome::UnknownError => Some(ErrorType::Network),
		}
	}

	pub fn as_str(&self) -> &'static str {
		match self {
			ErrorType::Validation => "validation",
			ErrorType::Server => "server",
			ErrorType::Network => "network",
		}
	}
}

/// Contact form event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContactEvent {
	/// The backend accepted the message
	SubmitSuccess { timestamp: DateTime<Utc> },

	/// The submission reached the network and failed
	SubmitError {
		error_type: ErrorType,
		outcome: Outcome,
		timestamp: DateTime<Utc>,
	},
}

impl ContactEvent {
	/// Event for a classified outcome, stamped now
	pub fn from_outcome(outcome: Outcome) -> Self {
		let timestamp = Utc::now();
		match ErrorType::from_outcome(outcome) {
			None => ContactEvent::SubmitSuccess { timestamp },
			Some(error_type) => ContactEvent::SubmitError {
				error_type,
				outcome,
				timestamp,
			},
		}
	}

	/// Event name as reported to analytics
	pub fn name(&self) -> &'static str {
		match self {
			ContactEvent::SubmitSuccess { .. } => "form_submit_success",
			ContactEvent::SubmitError { .. } => "form_submit_error",
		}
	}
}

/// Analytics backend for contact events
#[async_trait]
pub trait ContactAnalytics: Send + Sync {
	async fn record_event(&self, event: ContactEvent);
}

/// Logger analytics backend
///
/// Logs contact events using the `tracing` crate.
#[derive(Debug, Clone)]
pub struct LoggerAnalytics;

impl LoggerAnalytics {
	pub fn new() -> Self {
		Self
	}
}

impl Default for LoggerAnalytics {
	fn default() -> Self {
		Self::new()
	}
}

#[async_trait]
impl ContactAnalytics for LoggerAnalytics {
	async fn record_event(&self, event: ContactEvent) {
		let name = event.name();
		match event {
			ContactEvent::SubmitSuccess { timestamp } => {
				tracing::info!(
					event = name,
					category = EVENT_CATEGORY,
					label = EVENT_LABEL,
					timestamp = %timestamp,
					"Contact form submitted"
				);
			}
			ContactEvent::SubmitError {
				error_type,
				outcome,
				timestamp,
			} => {
				tracing::info!(
					event = name,
					category = EVENT_CATEGORY,
					label = EVENT_LABEL,
					error_type = error_type.as_str(),
					outcome = %outcome,
					timestamp = %timestamp,
					"Contact form submission failed"
				);
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(Outcome::ValidationError, ErrorType::Validation)]
	#[case(Outcome::RateLimited, ErrorType::Server)]
	#[case(Outcome::ServerError, ErrorType::Server)]
	#[case(Outcome::NetworkTimeout, ErrorType::Network)]
	#[case(Outcome::UnknownError, ErrorType::Network)]
	fn test_error_type_mapping(#[case] outcome: Outcome, #[case] expected: ErrorType) {
		let event = ContactEvent::from_outcome(outcome);

		assert_eq!(event.name(), "form_submit_error");
		assert!(matches!(
			event,
			ContactEvent::SubmitError { error_type, .. } if error_type == expected
		));
	}

	#[rstest]
	fn test_success_event() {
		let event = ContactEvent::from_outcome(Outcome::Success);

		assert_eq!(event.name(), "form_submit_success");
		assert!(ErrorType::from_outcome(Outcome::Success).is_none());
	}

	#[rstest]
	fn test_error_type_wire_names() {
		assert_eq!(
			serde_json::to_value(ErrorType::Network).unwrap(),
			serde_json::json!("network")
		);
		assert_eq!(ErrorType::Validation.as_str(), "validation");
	}

	#[tokio::test]
	async fn test_logger_analytics_records_without_panicking() {
		let analytics = LoggerAnalytics::new();

		analytics
			.record_event(ContactEvent::from_outcome(Outcome::ServerError))
			.await;
		analytics
			.record_event(ContactEvent::from_outcome(Outcome::Success))
			.await;
	}
}
