//! User-facing notifications
//!
//! One-shot toast-style messages emitted by the contact form. A
//! [`Notifier`] receives each [`Notification`]; [`MemoryNotifier`] keeps
//! them in a queue for tests and for UIs that render on their own schedule.
//!
//! ## Example
//!
//! ```
//! use folio_contact::messages::{MemoryNotifier, Notification, Notifier};
//!
//! let notifier = MemoryNotifier::new();
//! notifier.notify(Notification::success("Sent", "Thanks!"));
//!
//! assert_eq!(notifier.len(), 1);
//! assert_eq!(notifier.drain()[0].title, "Sent");
//! assert!(notifier.is_empty());
//! ```

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard};

/// Severity of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
	Success,
	Error,
}

impl fmt::Display for Level {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Level::Success => f.write_str("success"),
			Level::Error => f.write_str("error"),
		}
	}
}

/// A titled message shown to the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
	pub level: Level,
	pub title: String,
	pub description: String,
}

impl Notification {
	pub fn new(level: Level, title: impl Into<String>, description: impl Into<String>) -> Self {
		Self {
			level,
			title: title.into(),
			description: description.into(),
		}
	}

	pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
		Self::new(Level::Success, title, description)
	}

	pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
		Self::new(Level::Error, title, description)
	}

	pub fn is_error(&self) -> bool {
		self.level == Level::Error
	}
}

impl fmt::Display for Notification {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}: {}", self.title, self.description)
	}
}

/// Receiver of notifications
pub trait Notifier: Send + Sync {
	fn notify(&self, notification: Notification);
}

/// In-memory notification queue
///
/// Clones share the same queue.
#[derive(Debug, Clone, Default)]
pub struct MemoryNotifier {
	queue: Arc<Mutex<VecDeque<Notification>>>,
}

impl MemoryNotifier {
	pub fn new() -> Self {
		Self::default()
	}

	fn lock(&self) -> MutexGuard<'_, VecDeque<Notification>> {
		// A poisoned queue still holds valid notifications
		self.queue.lock().unwrap_or_else(|e| e.into_inner())
	}

	/// Copy of the queued notifications, oldest first
	pub fn peek(&self) -> Vec<Notification> {
		self.lock().iter().cloned().collect()
	}

	/// Remove and return every queued notification
	pub fn drain(&self) -> Vec<Notification> {
		self.lock().drain(..).collect()
	}

	pub fn last(&self) -> Option<Notification> {
		self.lock().back().cloned()
	}

	pub fn len(&self) -> usize {
		self.lock().len()
	}

	pub fn is_empty(&self) -> bool {
		self.lock().is_empty()
	}
}

impl Notifier for MemoryNotifier {
	fn notify(&self, notification: Notification) {
		self.lock().push_back(notification);
	}
}
