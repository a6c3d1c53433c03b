//! Settings builder
//!
//! Collects [`ConfigSource`]s, merges them by priority and deserializes the
//! result into [`Settings`].

use super::sources::ConfigSource;
use super::{Settings, SettingsError};
use indexmap::IndexMap;
use serde_json::Value;

/// Builder merging configuration sources into [`Settings`]
///
/// Sources are loaded in ascending priority, so a higher-priority source
/// overrides keys from lower ones regardless of the order they were added.
///
/// # Examples
///
/// ```
/// use folio_conf::{DefaultSource, SettingsBuilder};
/// use serde_json::Value;
///
/// let settings = SettingsBuilder::new()
///     .add_source(
///         DefaultSource::new()
///             .with_value("backend_url", Value::String("https://api.example.com".into())),
///     )
///     .build()
///     .unwrap();
///
/// assert_eq!(settings.contact_endpoint(), "https://api.example.com/api/contact");
/// ```
#[derive(Default)]
pub struct SettingsBuilder {
	sources: Vec<Box<dyn ConfigSource>>,
}

impl SettingsBuilder {
	/// Create an empty builder
	pub fn new() -> Self {
		Self::default()
	}

	/// Add a configuration source
	pub fn add_source(mut self, source: impl ConfigSource + 'static) -> Self {
		self.sources.push(Box::new(source));
		self
	}

	/// Merge all sources into a single key/value map
	pub fn merge(mut self) -> Result<IndexMap<String, Value>, SettingsError> {
		// Stable sort keeps insertion order among equal priorities
		self.sources.sort_by_key(|source| source.priority());

		let mut merged = IndexMap::new();
		for source in &self.sources {
			let values = source.load()?;
			tracing::debug!(
				source = %source.description(),
				keys = values.len(),
				"Loaded configuration source"
			);
			merged.extend(values);
		}

		Ok(merged)
	}

	/// Merge all sources, deserialize and validate the result
	pub fn build(self) -> Result<Settings, SettingsError> {
		let merged = self.merge()?;

		if !merged.contains_key("backend_url") {
			return Err(SettingsError::Missing("backend_url".to_string()));
		}

		let object: serde_json::Map<String, Value> = merged.into_iter().collect();
		let settings: Settings = serde_json::from_value(Value::Object(object))?;
		settings.validate()?;

		Ok(settings)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::settings::sources::{DefaultSource, SourceError, TomlFileSource};
	use rstest::rstest;
	use std::fs;
	use tempfile::TempDir;

	fn string(value: &str) -> Value {
		Value::String(value.to_string())
	}

	#[rstest]
	fn test_build_from_defaults() {
		// Arrange
		let builder = SettingsBuilder::new().add_source(
			DefaultSource::new().with_value("backend_url", string("https://api.example.com")),
		);

		// Act
		let settings = builder.build().unwrap();

		// Assert
		assert_eq!(settings.backend_url, "https://api.example.com");
		assert_eq!(settings.request_timeout_ms, 10_000);
	}

	#[rstest]
	fn test_higher_priority_overrides_regardless_of_order() {
		// Arrange
		let temp_dir = TempDir::new().unwrap();
		let config_path = temp_dir.path().join("folio.toml");
		fs::write(
			&config_path,
			"backend_url = \"https://from-toml.example.com\"\nrequest_timeout_ms = 2000\n",
		)
		.unwrap();

		// TOML added first, defaults second: TOML must still win
		let builder = SettingsBuilder::new()
			.add_source(TomlFileSource::new(&config_path))
			.add_source(
				DefaultSource::new()
					.with_value("backend_url", string("https://from-defaults.example.com"))
					.with_value("cv_url", string("/static/cv.pdf")),
			);

		// Act
		let settings = builder.build().unwrap();

		// Assert
		assert_eq!(settings.backend_url, "https://from-toml.example.com");
		assert_eq!(settings.request_timeout_ms, 2000);
		assert_eq!(settings.cv_url, "/static/cv.pdf");
	}

	#[rstest]
	fn test_missing_backend_url() {
		let err = SettingsBuilder::new()
			.add_source(DefaultSource::new().with_value("cv_url", string("/cv.pdf")))
			.build()
			.unwrap_err();

		assert!(matches!(err, SettingsError::Missing(ref key) if key == "backend_url"));
	}

	#[rstest]
	fn test_invalid_backend_url_is_rejected() {
		let err = SettingsBuilder::new()
			.add_source(DefaultSource::new().with_value("backend_url", string("localhost")))
			.build()
			.unwrap_err();

		assert!(matches!(err, SettingsError::Invalid { .. }));
	}

	#[rstest]
	fn test_wrong_type_is_a_deserialize_error() {
		let err = SettingsBuilder::new()
			.add_source(
				DefaultSource::new()
					.with_value("backend_url", string("https://api.example.com"))
					.with_value("request_timeout_ms", string("soon")),
			)
			.build()
			.unwrap_err();

		assert!(matches!(err, SettingsError::Deserialize(_)));
	}

	#[rstest]
	fn test_source_error_propagates() {
		let temp_dir = TempDir::new().unwrap();
		let config_path = temp_dir.path().join("folio.toml");
		fs::write(&config_path, "= broken").unwrap();

		let err = SettingsBuilder::new()
			.add_source(TomlFileSource::new(&config_path))
			.build()
			.unwrap_err();

		assert!(matches!(err, SettingsError::Source(SourceError::Toml(_))));
	}
}
