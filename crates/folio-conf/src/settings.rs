//! Site settings
//!
//! [`Settings`] is the typed result of merging every configured
//! [`ConfigSource`](sources::ConfigSource). Use [`Settings::from_env`] for
//! the standard layering or [`SettingsBuilder`](builder::SettingsBuilder)
//! to pick sources explicitly.

pub mod builder;
pub mod sources;

use serde::{Deserialize, Deserializer, Serialize};
use std::path::Path;
use std::time::Duration;

use builder::SettingsBuilder;
use sources::{DotEnvSource, EnvSource, SourceError, TomlFileSource};

/// Prefix applied to every Folio environment variable
pub const ENV_PREFIX: &str = "FOLIO_";

/// Default settings file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "folio.toml";

/// Default contact request timeout (milliseconds)
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 10_000;

/// Path of the contact endpoint relative to the backend base URL
pub const CONTACT_PATH: &str = "/api/contact";

/// Error type for settings assembly and validation
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
	#[error("Missing required setting: {0}")]
	Missing(String),

	#[error("Invalid setting `{key}`: {reason}")]
	Invalid { key: String, reason: String },

	#[error("Failed to deserialize settings: {0}")]
	Deserialize(#[from] serde_json::Error),

	#[error(transparent)]
	Source(#[from] SourceError),
}

/// Settings for the portfolio site
///
/// ## Fields
///
/// - `backend_url`: base URL of the backend serving `/api/contact` (required)
/// - `request_timeout_ms`: contact request timeout, 10 000 ms by default
/// - `cv_url`: location of the downloadable CV asset
/// - `log_filter`: default `tracing` filter directive when `RUST_LOG` is unset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
	#[serde(deserialize_with = "scalar_string")]
	pub backend_url: String,

	#[serde(default = "default_request_timeout_ms")]
	pub request_timeout_ms: u64,

	#[serde(default = "default_cv_url", deserialize_with = "scalar_string")]
	pub cv_url: String,

	#[serde(default = "default_log_filter", deserialize_with = "scalar_string")]
	pub log_filter: String,
}

fn default_request_timeout_ms() -> u64 {
	DEFAULT_REQUEST_TIMEOUT_MS
}

fn default_cv_url() -> String {
	"/cv.pdf".to_string()
}

fn default_log_filter() -> String {
	"info".to_string()
}

/// Accept any scalar for string settings.
///
/// `EnvSource` parses numeric-looking values into numbers, so a string
/// setting may arrive as a JSON number or bool.
fn scalar_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
	D: Deserializer<'de>,
{
	use serde::de::Error;

	match serde_json::Value::deserialize(deserializer)? {
		serde_json::Value::String(s) => Ok(s),
		serde_json::Value::Number(n) => Ok(n.to_string()),
		serde_json::Value::Bool(b) => Ok(b.to_string()),
		other => Err(D::Error::custom(format!(
			"expected a string, found {}",
			other
		))),
	}
}

impl Settings {
	/// Create settings for the given backend with every other value defaulted
	///
	/// # Examples
	///
	/// ```
	/// use folio_conf::Settings;
	///
	/// let settings = Settings::new("https://api.example.com");
	/// assert_eq!(settings.request_timeout_ms, 10_000);
	/// ```
	pub fn new(backend_url: impl Into<String>) -> Self {
		Self {
			backend_url: backend_url.into(),
			request_timeout_ms: default_request_timeout_ms(),
			cv_url: default_cv_url(),
			log_filter: default_log_filter(),
		}
	}

	/// Set the contact request timeout
	pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
		self.request_timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX);
		self
	}

	/// Load settings with the standard layering
	///
	/// Sources, lowest to highest priority: built-in defaults, `folio.toml`
	/// in the working directory, `.env`, `FOLIO_*` environment variables.
	pub fn from_env() -> Result<Self, SettingsError> {
		Self::load(Path::new(DEFAULT_CONFIG_FILE))
	}

	/// Load settings with the standard layering, reading TOML from `config_path`
	///
	/// A missing TOML file is not an error.
	pub fn load(config_path: &Path) -> Result<Self, SettingsError> {
		SettingsBuilder::new()
			.add_source(TomlFileSource::new(config_path))
			.add_source(DotEnvSource::new())
			.add_source(EnvSource::new().with_prefix(ENV_PREFIX))
			.build()
	}

	/// Full URL of the contact endpoint
	///
	/// # Examples
	///
	/// ```
	/// use folio_conf::Settings;
	///
	/// let settings = Settings::new("https://api.example.com/");
	/// assert_eq!(settings.contact_endpoint(), "https://api.example.com/api/contact");
	/// ```
	pub fn contact_endpoint(&self) -> String {
		format!("{}{}", self.backend_url.trim_end_matches('/'), CONTACT_PATH)
	}

	/// Contact request timeout as a [`Duration`]
	pub fn request_timeout(&self) -> Duration {
		Duration::from_millis(self.request_timeout_ms)
	}

	/// Check invariants that deserialization alone cannot express
	pub fn validate(&self) -> Result<(), SettingsError> {
		let parsed = url::Url::parse(&self.backend_url).map_err(|e| SettingsError::Invalid {
			key: "backend_url".to_string(),
			reason: e.to_string(),
		})?;

		if !matches!(parsed.scheme(), "http" | "https") {
			return Err(SettingsError::Invalid {
				key: "backend_url".to_string(),
				reason: format!("unsupported scheme `{}`", parsed.scheme()),
			});
		}

		if self.request_timeout_ms == 0 {
			return Err(SettingsError::Invalid {
				key: "request_timeout_ms".to_string(),
				reason: "must be greater than zero".to_string(),
			});
		}

		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("https://api.example.com", "https://api.example.com/api/contact")]
	#[case("https://api.example.com/", "https://api.example.com/api/contact")]
	#[case("http://localhost:8001//", "http://localhost:8001/api/contact")]
	#[case("https://example.com/backend", "https://example.com/backend/api/contact")]
	fn test_contact_endpoint(#[case] base: &str, #[case] expected: &str) {
		let settings = Settings::new(base);
		assert_eq!(settings.contact_endpoint(), expected);
	}

	#[rstest]
	fn test_defaults() {
		let settings = Settings::new("https://api.example.com");

		assert_eq!(settings.request_timeout(), Duration::from_secs(10));
		assert_eq!(settings.cv_url, "/cv.pdf");
		assert_eq!(settings.log_filter, "info");
	}

	#[rstest]
	fn test_with_request_timeout() {
		let settings =
			Settings::new("https://api.example.com").with_request_timeout(Duration::from_millis(250));
		assert_eq!(settings.request_timeout_ms, 250);
	}

	#[rstest]
	#[case("https://api.example.com")]
	#[case("http://127.0.0.1:8001")]
	fn test_validate_accepts_http_urls(#[case] base: &str) {
		assert!(Settings::new(base).validate().is_ok());
	}

	#[rstest]
	#[case("not a url")]
	#[case("/relative/path")]
	#[case("ftp://files.example.com")]
	fn test_validate_rejects_bad_backend_url(#[case] base: &str) {
		let err = Settings::new(base).validate().unwrap_err();
		assert!(matches!(err, SettingsError::Invalid { ref key, .. } if key == "backend_url"));
	}

	#[rstest]
	fn test_validate_rejects_zero_timeout() {
		let mut settings = Settings::new("https://api.example.com");
		settings.request_timeout_ms = 0;

		let err = settings.validate().unwrap_err();
		assert!(matches!(err, SettingsError::Invalid { ref key, .. } if key == "request_timeout_ms"));
	}

	#[rstest]
	fn test_scalar_string_accepts_numbers() {
		let value = serde_json::json!({
			"backend_url": "https://api.example.com",
			"log_filter": 42,
		});

		let settings: Settings = serde_json::from_value(value).unwrap();
		assert_eq!(settings.log_filter, "42");
		assert_eq!(settings.request_timeout_ms, DEFAULT_REQUEST_TIMEOUT_MS);
	}
}
