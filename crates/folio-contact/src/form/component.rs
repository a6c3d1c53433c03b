//! Contact form controller
//!
//! [`ContactForm`] owns a [`FormState`] and mediates between raw input and
//! a [`SubmissionClient`]. Each call to [`ContactForm::submit`] emits
//! exactly one [`Notification`].
//!
//! ## Usage
//!
//! ```no_run
//! use folio_conf::Settings;
//! use folio_contact::{ContactForm, FieldName, HttpSubmissionClient, MemoryNotifier};
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let settings = Settings::from_env()?;
//! let client = HttpSubmissionClient::from_settings(&settings)?;
//! let notifier = Arc::new(MemoryNotifier::new());
//!
//! let mut form = ContactForm::new(Arc::new(client), notifier.clone());
//! form.update_field(FieldName::Name, "Ada Lovelace")?;
//! form.update_field(FieldName::Email, "ada@example.com")?;
//! form.update_field(FieldName::Message, "Hello!")?;
//! form.update_field(FieldName::Consent, true)?;
//!
//! let notification = form.submit().await;
//! println!("{notification}");
//! # Ok(())
//! # }
//! ```

use super::validators;
use super::{
	ContactFields, FieldErrors, FieldName, FieldValue, FormError, FormState, SubmissionPhase,
};
use crate::analytics::{ContactAnalytics, ContactEvent, LoggerAnalytics};
use crate::client::{Outcome, SubmissionClient};
use crate::messages::{Notification, Notifier};
use std::sync::Arc;

pub const CHECK_INPUT_TITLE: &str = "Please check your input";
pub const ALL_FIELDS_REQUIRED: &str = "All fields are required.";
pub const SOME_FIELDS_INVALID: &str = "Some fields contain errors.";
pub const SENT_TITLE: &str = "Message sent successfully!";
pub const SENT_DESCRIPTION: &str = "Thank you for your message. I'll get back to you soon!";
pub const ERROR_TITLE: &str = "Error";
pub const FALLBACK_ERROR: &str = "Failed to send message. Please try again.";

/// Marks the form as submitting for the lifetime of one client call
///
/// Dropping it unsettled (the `submit` future was dropped mid-flight)
/// leaves the phase at `Failed`.
struct InFlight<'a> {
	phase: &'a mut SubmissionPhase,
	settled: bool,
}

impl<'a> InFlight<'a> {
	fn begin(phase: &'a mut SubmissionPhase) -> Self {
		*phase = SubmissionPhase::Submitting;
		Self {
			phase,
			settled: false,
		}
	}

	fn settle(mut self, terminal: SubmissionPhase) {
		*self.phase = terminal;
		self.settled = true;
	}
}

impl Drop for InFlight<'_> {
	fn drop(&mut self) {
		if !self.settled {
			*self.phase = SubmissionPhase::Failed;
		}
	}
}

/// Contact form controller
pub struct ContactForm {
	state: FormState,
	client: Arc<dyn SubmissionClient>,
	notifier: Arc<dyn Notifier>,
	analytics: Arc<dyn ContactAnalytics>,
}

impl ContactForm {
	/// Create an empty form that logs analytics through `tracing`
	pub fn new(client: Arc<dyn SubmissionClient>, notifier: Arc<dyn Notifier>) -> Self {
		Self {
			state: FormState::default(),
			client,
			notifier,
			analytics: Arc::new(LoggerAnalytics::new()),
		}
	}

	/// Replace the analytics backend
	pub fn with_analytics(mut self, analytics: Arc<dyn ContactAnalytics>) -> Self {
		self.analytics = analytics;
		self
	}

	pub fn state(&self) -> &FormState {
		&self.state
	}

	pub fn fields(&self) -> &ContactFields {
		&self.state.fields
	}

	pub fn field_errors(&self) -> &FieldErrors {
		&self.state.field_errors
	}

	pub fn phase(&self) -> SubmissionPhase {
		self.state.phase
	}

	/// Whether the submit control should be enabled
	pub fn can_submit(&self) -> bool {
		self.state.phase != SubmissionPhase::Submitting
	}

	/// Set a field value, clearing that field's errors
	///
	/// A value of the wrong kind is rejected and leaves the state untouched.
	///
	/// # Examples
	///
	/// ```
	/// # use folio_contact::{ContactForm, FieldName, FormError, MemoryNotifier, SubmissionClient};
	/// # use folio_contact::{ContactFields, SubmissionResult};
	/// # use std::sync::Arc;
	/// # struct Offline;
	/// # #[async_trait::async_trait]
	/// # impl SubmissionClient for Offline {
	/// #     async fn submit(&self, _: &ContactFields) -> SubmissionResult {
	/// #         SubmissionResult::unknown_error()
	/// #     }
	/// # }
	/// let mut form = ContactForm::new(Arc::new(Offline), Arc::new(MemoryNotifier::new()));
	///
	/// form.update_field(FieldName::Name, "Ada").unwrap();
	/// assert_eq!(form.fields().name, "Ada");
	///
	/// let err = form.update_field(FieldName::Consent, "yes").unwrap_err();
	/// assert!(matches!(err, FormError::ValueKind { .. }));
	/// ```
	pub fn update_field(
		&mut self,
		name: FieldName,
		value: impl Into<FieldValue>,
	) -> Result<(), FormError> {
		self.state.fields.set(name, value.into())?;
		self.state.field_errors.clear_field(name.as_str());
		Ok(())
	}

	/// Run client-side validation over the current fields
	pub fn validate(&self) -> FieldErrors {
		validators::validate(&self.state.fields)
	}

	/// Return the form to its initial state
	pub fn reset(&mut self) {
		self.state = FormState::default();
	}

	/// Validate and submit the form
	///
	/// Returns the single notification emitted for this attempt. A local
	/// validation failure returns without calling the client and without
	/// changing the phase.
	pub async fn submit(&mut self) -> Notification {
		self.state.field_errors.clear();

		let local = self.validate();
		if !local.is_empty() {
			tracing::debug!(
				fields = ?local.fields().collect::<Vec<_>>(),
				"Contact form rejected locally"
			);
			self.state.field_errors = local;
			return self.emit(Notification::error(CHECK_INPUT_TITLE, ALL_FIELDS_REQUIRED));
		}

		let snapshot = self.state.fields.clone();
		let result = {
			let in_flight = InFlight::begin(&mut self.state.phase);
			let result = self.client.submit(&snapshot).await;
			in_flight.settle(if result.outcome().is_success() {
				SubmissionPhase::Succeeded
			} else {
				SubmissionPhase::Failed
			});
			result
		};

		let (outcome, field_errors, message) = result.into_parts();
		self.analytics
			.record_event(ContactEvent::from_outcome(outcome))
			.await;

		let notification = match outcome {
			Outcome::Success => {
				self.state.fields = ContactFields::default();
				Notification::success(SENT_TITLE, SENT_DESCRIPTION)
			}
			Outcome::ValidationError => {
				self.state.field_errors = field_errors.unwrap_or_default();
				Notification::error(CHECK_INPUT_TITLE, SOME_FIELDS_INVALID)
			}
			_ => Notification::error(
				ERROR_TITLE,
				message.unwrap_or_else(|| FALLBACK_ERROR.to_string()),
			),
		};

		self.emit(notification)
	}

	fn emit(&self, notification: Notification) -> Notification {
		self.notifier.notify(notification.clone());
		notification
	}
}

impl std::fmt::Debug for ContactForm {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("ContactForm")
			.field("state", &self.state)
			.finish_non_exhaustive()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::client::SubmissionResult;
	use crate::messages::{Level, MemoryNotifier};
	use async_trait::async_trait;
	use rstest::{fixture, rstest};
	use std::sync::Mutex;
	use std::sync::atomic::{AtomicUsize, Ordering};
	use std::time::Duration;

	/// Client double returning a fixed result and counting calls
	struct StubClient {
		result: SubmissionResult,
		calls: AtomicUsize,
		seen: Mutex<Vec<ContactFields>>,
	}

	impl StubClient {
		fn returning(result: SubmissionResult) -> Arc<Self> {
			Arc::new(Self {
				result,
				calls: AtomicUsize::new(0),
				seen: Mutex::new(Vec::new()),
			})
		}

		fn calls(&self) -> usize {
			self.calls.load(Ordering::SeqCst)
		}
	}

	#[async_trait]
	impl SubmissionClient for StubClient {
		async fn submit(&self, fields: &ContactFields) -> SubmissionResult {
			self.calls.fetch_add(1, Ordering::SeqCst);
			self.seen.lock().unwrap().push(fields.clone());
			self.result.clone()
		}
	}

	/// Client that never answers
	struct PendingClient;

	#[async_trait]
	impl SubmissionClient for PendingClient {
		async fn submit(&self, _fields: &ContactFields) -> SubmissionResult {
			std::future::pending::<()>().await;
			SubmissionResult::unknown_error()
		}
	}

	#[derive(Default)]
	struct RecordingAnalytics {
		events: Mutex<Vec<ContactEvent>>,
	}

	#[async_trait]
	impl ContactAnalytics for RecordingAnalytics {
		async fn record_event(&self, event: ContactEvent) {
			self.events.lock().unwrap().push(event);
		}
	}

	#[fixture]
	fn notifier() -> Arc<MemoryNotifier> {
		Arc::new(MemoryNotifier::new())
	}

	fn fill(form: &mut ContactForm) {
		form.update_field(FieldName::Name, "Ada Lovelace").unwrap();
		form.update_field(FieldName::Email, "ada@example.com").unwrap();
		form.update_field(FieldName::Message, "Hello there").unwrap();
		form.update_field(FieldName::Consent, true).unwrap();
	}

	#[rstest]
	#[tokio::test]
	async fn test_success_resets_fields(notifier: Arc<MemoryNotifier>) {
		// Arrange
		let client = StubClient::returning(SubmissionResult::success());
		let mut form = ContactForm::new(client.clone(), notifier.clone());
		fill(&mut form);

		// Act
		let notification = form.submit().await;

		// Assert
		assert_eq!(client.calls(), 1);
		assert_eq!(notification.level, Level::Success);
		assert_eq!(notification.title, SENT_TITLE);
		assert_eq!(form.phase(), SubmissionPhase::Succeeded);
		assert_eq!(form.fields(), &ContactFields::default());
		assert!(form.field_errors().is_empty());
		assert_eq!(notifier.drain(), vec![notification]);
	}

	#[rstest]
	#[tokio::test]
	async fn test_client_receives_current_snapshot(notifier: Arc<MemoryNotifier>) {
		let client = StubClient::returning(SubmissionResult::success());
		let mut form = ContactForm::new(client.clone(), notifier);
		fill(&mut form);

		form.submit().await;

		let seen = client.seen.lock().unwrap();
		assert_eq!(
			seen[0],
			ContactFields::new("Ada Lovelace", "ada@example.com", "Hello there", true)
		);
	}

	#[rstest]
	#[tokio::test]
	async fn test_empty_name_is_rejected_locally(notifier: Arc<MemoryNotifier>) {
		// Arrange
		let client = StubClient::returning(SubmissionResult::success());
		let analytics = Arc::new(RecordingAnalytics::default());
		let mut form =
			ContactForm::new(client.clone(), notifier.clone()).with_analytics(analytics.clone());
		fill(&mut form);
		form.update_field(FieldName::Name, "   ").unwrap();

		// Act
		let notification = form.submit().await;

		// Assert
		assert_eq!(client.calls(), 0);
		assert_eq!(notification.title, CHECK_INPUT_TITLE);
		assert_eq!(notification.description, ALL_FIELDS_REQUIRED);
		assert_eq!(
			form.field_errors().for_field(FieldName::Name).unwrap(),
			[validators::NAME_REQUIRED]
		);
		assert_eq!(form.phase(), SubmissionPhase::Idle);
		assert_eq!(notifier.len(), 1);
		assert!(analytics.events.lock().unwrap().is_empty());
	}

	#[rstest]
	#[tokio::test]
	async fn test_server_validation_errors_replace_field_errors(notifier: Arc<MemoryNotifier>) {
		// Arrange
		let mut server_errors = FieldErrors::new();
		server_errors.add("email", "invalid format");
		let client = StubClient::returning(SubmissionResult::validation_error(server_errors));
		let mut form = ContactForm::new(client, notifier.clone());
		fill(&mut form);
		let before = form.fields().clone();

		// Act
		let notification = form.submit().await;

		// Assert
		assert_eq!(notification.title, CHECK_INPUT_TITLE);
		assert_eq!(notification.description, SOME_FIELDS_INVALID);
		assert_eq!(form.field_errors().get("email").unwrap(), ["invalid format"]);
		assert_eq!(form.field_errors().len(), 1);
		assert_eq!(form.phase(), SubmissionPhase::Failed);
		assert_eq!(form.fields(), &before);
	}

	#[rstest]
	#[case(SubmissionResult::rate_limited())]
	#[case(SubmissionResult::server_error())]
	#[case(SubmissionResult::network_timeout())]
	#[case(SubmissionResult::unknown_error())]
	#[tokio::test]
	async fn test_failure_keeps_fields_and_reports_message(#[case] result: SubmissionResult) {
		// Arrange
		let notifier = Arc::new(MemoryNotifier::new());
		let expected = result.message().unwrap().to_string();
		let mut form = ContactForm::new(StubClient::returning(result), notifier.clone());
		fill(&mut form);
		let before = form.fields().clone();

		// Act
		let notification = form.submit().await;

		// Assert
		assert_eq!(notification.level, Level::Error);
		assert_eq!(notification.title, ERROR_TITLE);
		assert_eq!(notification.description, expected);
		assert_eq!(form.phase(), SubmissionPhase::Failed);
		assert!(form.can_submit());
		assert_eq!(form.fields(), &before);
		assert_eq!(notifier.len(), 1);
	}

	#[rstest]
	#[tokio::test]
	async fn test_errors_do_not_accumulate_across_attempts(notifier: Arc<MemoryNotifier>) {
		let mut server_errors = FieldErrors::new();
		server_errors.add("email", "invalid format");
		let client = StubClient::returning(SubmissionResult::validation_error(server_errors));
		let mut form = ContactForm::new(client, notifier.clone());
		fill(&mut form);

		form.submit().await;
		form.submit().await;

		assert_eq!(form.field_errors().get("email").unwrap(), ["invalid format"]);
		assert_eq!(notifier.len(), 2);
	}

	#[rstest]
	fn test_update_field_clears_only_that_field(notifier: Arc<MemoryNotifier>) {
		let client = StubClient::returning(SubmissionResult::success());
		let mut form = ContactForm::new(client, notifier);
		form.state.field_errors = form.validate();

		form.update_field(FieldName::Email, "ada@example.com").unwrap();

		assert!(form.field_errors().for_field(FieldName::Email).is_none());
		assert!(form.field_errors().for_field(FieldName::Name).is_some());
	}

	#[rstest]
	fn test_rejected_update_leaves_errors(notifier: Arc<MemoryNotifier>) {
		let client = StubClient::returning(SubmissionResult::success());
		let mut form = ContactForm::new(client, notifier);
		form.state.field_errors = form.validate();

		assert!(form.update_field(FieldName::Consent, "on").is_err());

		assert!(form.field_errors().for_field(FieldName::Consent).is_some());
		assert!(!form.fields().consent);
	}

	#[rstest]
	#[tokio::test]
	async fn test_analytics_event_per_network_submit(notifier: Arc<MemoryNotifier>) {
		let analytics = Arc::new(RecordingAnalytics::default());
		let client = StubClient::returning(SubmissionResult::network_timeout());
		let mut form = ContactForm::new(client, notifier).with_analytics(analytics.clone());
		fill(&mut form);

		form.submit().await;

		let events = analytics.events.lock().unwrap();
		assert_eq!(events.len(), 1);
		assert_eq!(events[0].name(), "form_submit_error");
	}

	#[rstest]
	#[tokio::test]
	async fn test_dropped_submit_leaves_form_failed(notifier: Arc<MemoryNotifier>) {
		let mut form = ContactForm::new(Arc::new(PendingClient), notifier.clone());
		fill(&mut form);

		let elapsed = tokio::time::timeout(Duration::from_millis(20), form.submit()).await;

		assert!(elapsed.is_err());
		assert_eq!(form.phase(), SubmissionPhase::Failed);
		assert!(form.can_submit());
		assert!(notifier.is_empty());
	}

	#[rstest]
	#[tokio::test]
	async fn test_reset(notifier: Arc<MemoryNotifier>) {
		let client = StubClient::returning(SubmissionResult::server_error());
		let mut form = ContactForm::new(client, notifier);
		fill(&mut form);
		form.submit().await;

		form.reset();

		assert_eq!(form.state(), &FormState::default());
	}
}
