//! # Folio Configuration
//!
//! Layered settings for the Folio portfolio site.
//!
//! Settings are assembled from several sources and merged in priority order
//! (environment variables > `.env` file > `folio.toml` > defaults). The only
//! required value is the backend base URL used by the contact form; it is
//! never hardcoded.
//!
//! ## Quick Start
//!
//! ```no_run
//! use folio_conf::Settings;
//!
//! let settings = Settings::from_env().expect("FOLIO_BACKEND_URL must be set");
//! println!("contact endpoint: {}", settings.contact_endpoint());
//! ```
//!
//! ## Module Organization
//!
//! - [`settings`]: the [`Settings`] record, its builder and configuration sources

pub mod settings;

// Re-export commonly used types at the crate root for convenience
pub use settings::builder::SettingsBuilder;
pub use settings::sources::{
	ConfigSource, DefaultSource, DotEnvSource, EnvSource, SourceError, TomlFileSource,
};
pub use settings::{Settings, SettingsError};
