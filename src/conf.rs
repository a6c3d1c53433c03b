//! Layered site settings
//!
//! This module provides access to folio-conf. Settings are merged from
//! defaults, `folio.toml`, `.env` and `FOLIO_*` environment variables, in
//! increasing priority.
//!
//! ## Example
//!
//! ```rust
//! use folio::conf::{DefaultSource, SettingsBuilder};
//! use serde_json::Value;
//!
//! let settings = SettingsBuilder::new()
//!     .add_source(
//!         DefaultSource::new()
//!             .with_value("backend_url", Value::String("http://localhost:8001".into())),
//!     )
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(settings.contact_endpoint(), "http://localhost:8001/api/contact");
//! ```

// Re-export all folio-conf functionality
pub use folio_conf::*;
