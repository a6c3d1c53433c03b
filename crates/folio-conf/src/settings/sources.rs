//! Configuration sources for layered settings
//!
//! Provides the sources that can be merged together in priority order
//! (environment variables > .env files > config files > defaults).

use indexmap::IndexMap;
use serde_json::Value;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

/// Trait for configuration sources
pub trait ConfigSource: Send + Sync {
	/// Load configuration from this source
	fn load(&self) -> Result<IndexMap<String, Value>, SourceError>;

	/// Get the priority of this source (higher = more important)
	fn priority(&self) -> u8;

	/// Get a description of this source
	fn description(&self) -> String;
}

/// Error type for configuration sources
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),

	#[error("Parse error: {0}")]
	Parse(String),

	#[error("TOML error: {0}")]
	Toml(#[from] toml::de::Error),

	#[error("JSON error: {0}")]
	Json(#[from] serde_json::Error),

	#[error(".env error: {0}")]
	DotEnv(String),
}

/// Environment variable configuration source
pub struct EnvSource {
	prefix: Option<String>,
}

impl EnvSource {
	/// Create a new environment variable configuration source
	///
	/// # Examples
	///
	/// ```
	/// use folio_conf::EnvSource;
	///
	/// let source = EnvSource::new();
	/// // Loads all environment variables
	/// ```
	pub fn new() -> Self {
		Self { prefix: None }
	}

	/// Set a prefix filter for environment variables
	///
	/// Matching variables are loaded with the prefix stripped and the key
	/// lowercased, so `FOLIO_BACKEND_URL` becomes `backend_url`.
	///
	/// # Examples
	///
	/// ```
	/// use folio_conf::EnvSource;
	///
	/// let source = EnvSource::new().with_prefix("FOLIO_");
	/// ```
	pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
		self.prefix = Some(prefix.into());
		self
	}

	fn parse_value(value: String) -> Value {
		if let Ok(num) = value.parse::<i64>() {
			Value::Number(num.into())
		} else if let Ok(b) = value.parse::<bool>() {
			Value::Bool(b)
		} else {
			Value::String(value)
		}
	}
}

impl Default for EnvSource {
	fn default() -> Self {
		Self::new()
	}
}

impl ConfigSource for EnvSource {
	fn load(&self) -> Result<IndexMap<String, Value>, SourceError> {
		let mut config = IndexMap::new();

		for (key, value) in std::env::vars() {
			let clean_key = match &self.prefix {
				Some(prefix) => match key.strip_prefix(prefix.as_str()) {
					Some(stripped) => stripped,
					None => continue,
				},
				None => key.as_str(),
			};

			config.insert(clean_key.to_lowercase(), Self::parse_value(value));
		}

		Ok(config)
	}

	fn priority(&self) -> u8 {
		100 // Highest priority
	}

	fn description(&self) -> String {
		match &self.prefix {
			Some(prefix) => format!("Environment variables (prefix: {})", prefix),
			None => "Environment variables".to_string(),
		}
	}
}

/// .env file configuration source
///
/// Loads the file into the process environment without overriding
/// variables that are already set. It contributes no keys itself; the
/// [`EnvSource`] picks the values up, which is why it must sort below it.
pub struct DotEnvSource {
	path: PathBuf,
}

impl DotEnvSource {
	/// Create a source for `.env` in the working directory
	pub fn new() -> Self {
		Self {
			path: PathBuf::from(".env"),
		}
	}

	/// Set a specific path for the .env file
	///
	/// # Examples
	///
	/// ```
	/// use folio_conf::DotEnvSource;
	///
	/// let source = DotEnvSource::new().with_path(".env.local");
	/// ```
	pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
		self.path = path.into();
		self
	}
}

impl Default for DotEnvSource {
	fn default() -> Self {
		Self::new()
	}
}

impl ConfigSource for DotEnvSource {
	fn load(&self) -> Result<IndexMap<String, Value>, SourceError> {
		if self.path.exists() {
			dotenv::from_path(&self.path).map_err(|e| SourceError::DotEnv(e.to_string()))?;
			tracing::debug!(path = %self.path.display(), "Loaded .env file");
		}

		Ok(IndexMap::new())
	}

	fn priority(&self) -> u8 {
		90 // High priority, but below direct env vars
	}

	fn description(&self) -> String {
		format!(".env file: {}", self.path.display())
	}
}

/// TOML file configuration source
pub struct TomlFileSource {
	path: PathBuf,
}

impl TomlFileSource {
	/// Create a new TOML file configuration source
	///
	/// # Examples
	///
	/// ```
	/// use folio_conf::TomlFileSource;
	///
	/// let source = TomlFileSource::new("folio.toml");
	/// ```
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self { path: path.into() }
	}
}

impl ConfigSource for TomlFileSource {
	fn load(&self) -> Result<IndexMap<String, Value>, SourceError> {
		if !self.path.exists() {
			return Ok(IndexMap::new());
		}

		let content = fs::read_to_string(&self.path)?;
		let toml_value: toml::Value = toml::from_str(&content)?;

		// Convert TOML value to JSON value
		let json_value = serde_json::to_value(&toml_value)?;

		let map = json_value
			.as_object()
			.ok_or_else(|| SourceError::Parse("Expected table at root".to_string()))?;

		Ok(map.iter().map(|(k, v)| (k.clone(), v.clone())).collect())
	}

	fn priority(&self) -> u8 {
		50 // Medium priority
	}

	fn description(&self) -> String {
		format!("TOML file: {}", self.path.display())
	}
}

/// Default values configuration source
pub struct DefaultSource {
	values: IndexMap<String, Value>,
}

impl DefaultSource {
	/// Create a new default values configuration source
	///
	/// # Examples
	///
	/// ```
	/// use folio_conf::DefaultSource;
	/// use serde_json::Value;
	///
	/// let source = DefaultSource::new()
	///     .with_value("request_timeout_ms", Value::Number(10_000.into()));
	/// ```
	pub fn new() -> Self {
		Self {
			values: IndexMap::new(),
		}
	}

	/// Add a default value for a configuration key
	pub fn with_value(mut self, key: impl Into<String>, value: Value) -> Self {
		self.values.insert(key.into(), value);
		self
	}

	/// Add multiple default values from a HashMap
	pub fn with_defaults(mut self, defaults: HashMap<String, Value>) -> Self {
		self.values.extend(defaults);
		self
	}
}

impl Default for DefaultSource {
	fn default() -> Self {
		Self::new()
	}
}

impl ConfigSource for DefaultSource {
	fn load(&self) -> Result<IndexMap<String, Value>, SourceError> {
		Ok(self.values.clone())
	}

	fn priority(&self) -> u8 {
		0 // Lowest priority
	}

	fn description(&self) -> String {
		"Default values".to_string()
	}
}
