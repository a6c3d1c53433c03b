//! Contact form pipeline
//!
//! This module provides access to folio-contact: the form controller, the
//! submission client and its outcome classification, notifications and
//! analytics events.
//!
//! ## Architecture
//!
//! - **Form Controller**: field state, client-side validation, submission phase
//! - **Submission Client**: one `POST` per attempt, classified into an [`Outcome`]
//! - **Notifier**: receives exactly one notification per submit
//! - **Analytics**: one event per submission that reached the network

// Re-export all folio-contact functionality
pub use folio_contact::*;
