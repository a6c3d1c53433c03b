//! Contact submission client
//!
//! [`SubmissionClient`] performs exactly one network call per invocation
//! and always returns a [`SubmissionResult`]. Transport failures are
//! classified, never propagated.
//!
//! ## Classification
//!
//! | Response | Outcome |
//! |---|---|
//! | 2xx | [`Outcome::Success`] |
//! | 422 | [`Outcome::ValidationError`] with the body's `errors` map |
//! | 429 | [`Outcome::RateLimited`] |
//! | 5xx | [`Outcome::ServerError`] |
//! | timeout | [`Outcome::NetworkTimeout`] |
//! | anything else | [`Outcome::UnknownError`] |

pub mod result;

pub use result::{Outcome, SubmissionResult};

use crate::form::{ContactFields, FieldErrors};
use async_trait::async_trait;
use folio_conf::Settings;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::Duration;

/// Name of the hidden anti-spam field sent with every submission
pub const HONEYPOT_FIELD: &str = "_topic";

/// Default timeout for one submission
pub const DEFAULT_TIMEOUT: Duration =
	Duration::from_millis(folio_conf::settings::DEFAULT_REQUEST_TIMEOUT_MS);

/// Sends a contact form snapshot to the backend
#[async_trait]
pub trait SubmissionClient: Send + Sync {
	/// Submit `fields` once and classify the outcome
	async fn submit(&self, fields: &ContactFields) -> SubmissionResult;
}

/// Errors constructing a client
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
	#[error("Invalid contact endpoint `{endpoint}`: {reason}")]
	InvalidEndpoint { endpoint: String, reason: String },

	#[error("Failed to build HTTP client: {0}")]
	Build(#[from] reqwest::Error),
}

/// JSON body of a contact submission
///
/// The honeypot is always sent empty; a non-empty value tells the backend
/// to discard the message.
#[derive(Debug, Serialize)]
pub struct SubmissionPayload<'a> {
	pub name: &'a str,
	pub email: &'a str,
	pub message: &'a str,
	pub consent: bool,
	#[serde(rename = "_topic")]
	pub topic: &'static str,
}

impl<'a> From<&'a ContactFields> for SubmissionPayload<'a> {
	fn from(fields: &'a ContactFields) -> Self {
		Self {
			name: &fields.name,
			email: &fields.email,
			message: &fields.message,
			consent: fields.consent,
			topic: "",
		}
	}
}

#[derive(Debug, Deserialize)]
struct ValidationBody {
	#[serde(default)]
	errors: BTreeMap<String, Vec<String>>,
}

/// Classify a received response by status code
///
/// `body` is only read for 422 responses. Statuses outside the table
/// (3xx, other 4xx) are [`Outcome::UnknownError`].
pub fn classify_status(status: StatusCode, body: &[u8]) -> SubmissionResult {
	if status.is_success() {
		SubmissionResult::success()
	} else if status == StatusCode::UNPROCESSABLE_ENTITY {
		SubmissionResult::validation_error(parse_field_errors(body))
	} else if status == StatusCode::TOO_MANY_REQUESTS {
		SubmissionResult::rate_limited()
	} else if status.is_server_error() {
		SubmissionResult::server_error()
	} else {
		SubmissionResult::unknown_error()
	}
}

fn parse_field_errors(body: &[u8]) -> FieldErrors {
	match serde_json::from_slice::<ValidationBody>(body) {
		Ok(parsed) => FieldErrors::from(parsed.errors),
		Err(e) => {
			tracing::debug!(error = %e, "422 response without a readable errors map");
			FieldErrors::new()
		}
	}
}

fn classify_transport_error(error: &reqwest::Error) -> SubmissionResult {
	if error.is_timeout() {
		tracing::warn!(error = %error, "Contact submission timed out");
		SubmissionResult::network_timeout()
	} else {
		tracing::warn!(error = %error, "Contact submission failed");
		SubmissionResult::unknown_error()
	}
}

/// [`SubmissionClient`] posting JSON to `{backend}/api/contact`
///
/// # Examples
///
/// ```
/// use folio_conf::Settings;
/// use folio_contact::HttpSubmissionClient;
///
/// let settings = Settings::new("https://api.example.com");
/// let client = HttpSubmissionClient::from_settings(&settings).unwrap();
/// assert_eq!(client.endpoint(), "https://api.example.com/api/contact");
/// ```
#[derive(Debug, Clone)]
pub struct HttpSubmissionClient {
	client: reqwest::Client,
	endpoint: String,
	timeout: Duration,
}

impl HttpSubmissionClient {
	/// Create a client for the full endpoint URL
	pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, ClientError> {
		let client = reqwest::Client::builder().timeout(timeout).build()?;
		Ok(Self::with_client(endpoint, client)?.with_timeout(timeout))
	}

	/// Create a client from site settings
	pub fn from_settings(settings: &Settings) -> Result<Self, ClientError> {
		Self::new(settings.contact_endpoint(), settings.request_timeout())
	}

	/// Wrap an existing `reqwest::Client`, using the default timeout
	pub fn with_client(
		endpoint: impl Into<String>,
		client: reqwest::Client,
	) -> Result<Self, ClientError> {
		let endpoint = endpoint.into();
		let parsed = reqwest::Url::parse(&endpoint).map_err(|e| ClientError::InvalidEndpoint {
			endpoint: endpoint.clone(),
			reason: e.to_string(),
		})?;
		if !matches!(parsed.scheme(), "http" | "https") {
			return Err(ClientError::InvalidEndpoint {
				reason: format!("unsupported scheme `{}`", parsed.scheme()),
				endpoint,
			});
		}

		Ok(Self {
			client,
			endpoint,
			timeout: DEFAULT_TIMEOUT,
		})
	}

	/// Override the per-request timeout
	pub fn with_timeout(mut self, timeout: Duration) -> Self {
		self.timeout = timeout;
		self
	}

	pub fn endpoint(&self) -> &str {
		&self.endpoint
	}

	pub fn timeout(&self) -> Duration {
		self.timeout
	}
}

#[async_trait]
impl SubmissionClient for HttpSubmissionClient {
	async fn submit(&self, fields: &ContactFields) -> SubmissionResult {
		tracing::debug!(endpoint = %self.endpoint, "Submitting contact form");

		let response = match self
			.client
			.post(&self.endpoint)
			.timeout(self.timeout)
			.json(&SubmissionPayload::from(fields))
			.send()
			.await
		{
			Ok(response) => response,
			Err(e) => return classify_transport_error(&e),
		};

		let status = response.status();
		let result = if status == StatusCode::UNPROCESSABLE_ENTITY {
			match response.bytes().await {
				Ok(body) => classify_status(status, &body),
				Err(e) if e.is_timeout() => classify_transport_error(&e),
				Err(_) => classify_status(status, &[]),
			}
		} else {
			classify_status(status, &[])
		};

		tracing::info!(
			status = status.as_u16(),
			outcome = %result.outcome(),
			"Contact submission classified"
		);
		result
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(StatusCode::OK, Outcome::Success)]
	#[case(StatusCode::CREATED, Outcome::Success)]
	#[case(StatusCode::NO_CONTENT, Outcome::Success)]
	#[case(StatusCode::UNPROCESSABLE_ENTITY, Outcome::ValidationError)]
	#[case(StatusCode::TOO_MANY_REQUESTS, Outcome::RateLimited)]
	#[case(StatusCode::INTERNAL_SERVER_ERROR, Outcome::ServerError)]
	#[case(StatusCode::BAD_GATEWAY, Outcome::ServerError)]
	#[case(StatusCode::SERVICE_UNAVAILABLE, Outcome::ServerError)]
	#[case(StatusCode::NOT_FOUND, Outcome::UnknownError)]
	#[case(StatusCode::BAD_REQUEST, Outcome::UnknownError)]
	#[case(StatusCode::MOVED_PERMANENTLY, Outcome::UnknownError)]
	fn test_classify_status(#[case] status: StatusCode, #[case] expected: Outcome) {
		assert_eq!(classify_status(status, b"").outcome(), expected);
	}

	#[rstest]
	fn test_422_body_errors_are_carried() {
		let body = br#"{"ok": false, "errors": {"email": ["invalid format"]}}"#;

		let result = classify_status(StatusCode::UNPROCESSABLE_ENTITY, body);

		let errors = result.field_errors().unwrap();
		assert_eq!(errors.get("email").unwrap(), ["invalid format"]);
		assert_eq!(errors.len(), 1);
	}

	#[rstest]
	#[case::empty(b"" as &[u8])]
	#[case::not_json(b"<html>Unprocessable</html>" as &[u8])]
	#[case::no_errors_key(br#"{"ok": false}"# as &[u8])]
	#[case::wrong_shape(br#"{"errors": ["email"]}"# as &[u8])]
	fn test_422_without_readable_errors(#[case] body: &[u8]) {
		let result = classify_status(StatusCode::UNPROCESSABLE_ENTITY, body);

		assert_eq!(result.outcome(), Outcome::ValidationError);
		assert!(result.field_errors().unwrap().is_empty());
	}

	#[rstest]
	fn test_payload_includes_empty_honeypot() {
		let fields = ContactFields::new("Ada", "ada@example.com", "Hello", true);

		let json = serde_json::to_value(SubmissionPayload::from(&fields)).unwrap();

		assert_eq!(
			json,
			serde_json::json!({
				"name": "Ada",
				"email": "ada@example.com",
				"message": "Hello",
				"consent": true,
				"_topic": "",
			})
		);
		assert_eq!(json[HONEYPOT_FIELD], "");
	}

	#[rstest]
	#[case("not a url")]
	#[case("/api/contact")]
	#[case("ftp://example.com/api/contact")]
	fn test_invalid_endpoint_is_rejected(#[case] endpoint: &str) {
		let err = HttpSubmissionClient::new(endpoint, DEFAULT_TIMEOUT).unwrap_err();
		assert!(matches!(err, ClientError::InvalidEndpoint { .. }));
	}

	#[rstest]
	fn test_from_settings_uses_configured_timeout() {
		let settings =
			Settings::new("http://127.0.0.1:8001/").with_request_timeout(Duration::from_millis(1500));

		let client = HttpSubmissionClient::from_settings(&settings).unwrap();

		assert_eq!(client.endpoint(), "http://127.0.0.1:8001/api/contact");
		assert_eq!(client.timeout(), Duration::from_millis(1500));
	}
}
