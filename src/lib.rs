//! # Folio
//!
//! A single-page portfolio site for Rust: a static content table, a
//! navigation bar driven by scroll events, and a validated contact form
//! that posts to a backend endpoint.
//!
//! ## Feature Flags
//!
//! ### Presets
//!
//! - `minimal` - Contact form pipeline only
//! - `full` (default) - All features enabled
//!
//! ### Fine-grained Control
//!
//! - `conf` - Layered settings (`folio.toml`, `.env`, `FOLIO_*` variables)
//! - `contact` - Contact form controller and HTTP submission client
//! - `pages` - Content table, navigation state and scroll events
//!
//! ## Quick Example
//!
//! ```rust,no_run
//! use folio::prelude::*;
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let settings = Settings::from_env()?;
//! let notifier = Arc::new(MemoryNotifier::new());
//! let client = HttpSubmissionClient::from_settings(&settings)?;
//!
//! let mut form = ContactForm::new(Arc::new(client), notifier.clone());
//! form.update_field(FieldName::Name, "Ada Lovelace")?;
//! form.update_field(FieldName::Email, "ada@example.com")?;
//! form.update_field(FieldName::Message, "Loved the ExpertRAG paper!")?;
//! form.update_field(FieldName::Consent, true)?;
//!
//! let notification = form.submit().await;
//! println!("{}: {}", notification.title, notification.description);
//! # Ok(())
//! # }
//! ```

#[cfg(feature = "conf")]
pub mod conf;
#[cfg(feature = "contact")]
pub mod contact;
#[cfg(feature = "pages")]
pub mod pages;

// Re-export settings from dedicated crate
#[cfg(feature = "conf")]
pub use folio_conf::{Settings, SettingsError};

// Re-export the contact pipeline
#[cfg(feature = "contact")]
pub use folio_contact::{
	ContactFields, ContactForm, FieldErrors, FieldName, FormError, HttpSubmissionClient,
	Notification, Outcome, SubmissionClient, SubmissionPhase, SubmissionResult,
};

// Re-export page state
#[cfg(feature = "pages")]
pub use folio_pages::{Navigation, Portfolio, ScrollEvents, Section, SectionLayout};

/// Commonly used types
pub mod prelude {
	#[cfg(feature = "conf")]
	pub use folio_conf::{Settings, SettingsError};

	#[cfg(feature = "contact")]
	pub use folio_contact::{
		ContactFields, ContactForm, FieldName, HttpSubmissionClient, Level, MemoryNotifier,
		Notification, Notifier, Outcome, SubmissionClient, SubmissionPhase, SubmissionResult,
	};

	#[cfg(feature = "pages")]
	pub use folio_pages::{
		NAV_LINKS, Navigation, NavigationBinding, Portfolio, ScrollEvents, Section, SectionLayout,
		Subscription,
	};
}
