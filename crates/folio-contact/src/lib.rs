//! # Folio Contact
//!
//! Contact form pipeline for the Folio portfolio site.
//!
//! ## Overview
//!
//! Two collaborating pieces:
//!
//! - [`ContactForm`]: owns field state, runs client-side validation,
//!   tracks the submission phase and turns every attempt into exactly one
//!   [`Notification`].
//! - [`SubmissionClient`]: performs the network call and classifies the
//!   response into an [`Outcome`]. [`HttpSubmissionClient`] posts JSON to
//!   `{backend}/api/contact`.
//!
//! ```text
//! input ─▶ ContactForm::validate ─▶ SubmissionClient::submit ─▶ Outcome
//!                                                                 │
//!            Notifier ◀── ContactForm (state update) ◀────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`form`]: field model, validation rules and the controller
//! - [`client`]: submission trait, HTTP implementation, outcome classification
//! - [`messages`]: notifications and notifier backends
//! - [`analytics`]: submission events

pub mod analytics;
pub mod client;
pub mod form;
pub mod messages;

pub use analytics::{ContactAnalytics, ContactEvent, ErrorType, LoggerAnalytics};
pub use client::{
	ClientError, HttpSubmissionClient, Outcome, SubmissionClient, SubmissionPayload,
	SubmissionResult,
};
pub use form::component::ContactForm;
pub use form::{
	ContactFields, FieldErrors, FieldName, FieldValue, FormError, FormState, SubmissionPhase,
};
pub use messages::{Level, MemoryNotifier, Notification, Notifier};
