//! Scroll event subscriptions
//!
//! [`ScrollEvents`] is an explicit listener registry standing in for the
//! window's scroll event. Subscribing returns a [`Subscription`] guard;
//! dropping the guard removes the listener, so teardown cannot be
//! forgotten.
//!
//! ## Example
//!
//! ```
//! use folio_pages::events::ScrollEvents;
//! use std::sync::Arc;
//! use std::sync::atomic::{AtomicUsize, Ordering};
//!
//! let events = ScrollEvents::new();
//! let calls = Arc::new(AtomicUsize::new(0));
//!
//! let subscription = events.subscribe({
//!     let calls = calls.clone();
//!     move |_scroll_y| {
//!         calls.fetch_add(1, Ordering::SeqCst);
//!     }
//! });
//!
//! events.dispatch(120.0);
//! drop(subscription);
//! events.dispatch(240.0);
//!
//! assert_eq!(calls.load(Ordering::SeqCst), 1);
//! assert_eq!(events.listener_count(), 0);
//! ```

use crate::navigation::{Navigation, SectionLayout};
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard, Weak};

type Listener = Arc<dyn Fn(f64) + Send + Sync + 'static>;

#[derive(Default)]
struct Registry {
	next_id: u64,
	listeners: BTreeMap<u64, Listener>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
	mutex.lock().unwrap_or_else(|e| e.into_inner())
}

/// Scroll listener registry
///
/// Clones share the same set of listeners.
#[derive(Clone, Default)]
pub struct ScrollEvents {
	registry: Arc<Mutex<Registry>>,
}

impl ScrollEvents {
	pub fn new() -> Self {
		Self::default()
	}

	/// Register `listener`, called with the scroll offset on every dispatch
	pub fn subscribe<F>(&self, listener: F) -> Subscription
	where
		F: Fn(f64) + Send + Sync + 'static,
	{
		let mut registry = lock(&self.registry);
		let id = registry.next_id;
		registry.next_id += 1;
		registry.listeners.insert(id, Arc::new(listener));

		Subscription {
			id,
			registry: Arc::downgrade(&self.registry),
			active: true,
		}
	}

	/// Call every live listener in registration order
	///
	/// Listeners run outside the registry lock, so they may subscribe or
	/// unsubscribe; such changes apply from the next dispatch.
	pub fn dispatch(&self, scroll_y: f64) {
		let listeners: Vec<Listener> = lock(&self.registry).listeners.values().cloned().collect();
		for listener in listeners {
			listener(scroll_y);
		}
	}

	pub fn listener_count(&self) -> usize {
		lock(&self.registry).listeners.len()
	}
}

impl std::fmt::Debug for ScrollEvents {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("ScrollEvents")
			.field("listeners", &self.listener_count())
			.finish()
	}
}

/// Registration guard returned by [`ScrollEvents::subscribe`]
///
/// The listener stays registered until the guard is dropped or
/// [`unsubscribe`](Subscription::unsubscribe) is called. A guard that
/// outlives its registry is inert.
#[derive(Debug)]
#[must_use = "dropping a Subscription immediately unregisters the listener"]
pub struct Subscription {
	id: u64,
	registry: Weak<Mutex<Registry>>,
	active: bool,
}

impl Subscription {
	/// Unregister the listener now
	pub fn unsubscribe(mut self) {
		self.dispose();
	}

	pub fn is_active(&self) -> bool {
		self.active && self.registry.strong_count() > 0
	}

	fn dispose(&mut self) {
		if !self.active {
			return;
		}
		self.active = false;

		if let Some(registry) = self.registry.upgrade() {
			lock(&registry).listeners.remove(&self.id);
		}
	}
}

impl Drop for Subscription {
	fn drop(&mut self) {
		self.dispose();
	}
}

/// A [`Navigation`] driven by a scroll event stream
///
/// Owns the subscription; dropping the binding detaches the navigation.
#[derive(Debug)]
pub struct NavigationBinding {
	navigation: Arc<Mutex<Navigation>>,
	subscription: Subscription,
}

impl NavigationBinding {
	/// Feed every scroll event from `events` into `navigation`
	pub fn bind(
		events: &ScrollEvents,
		navigation: Arc<Mutex<Navigation>>,
		layout: SectionLayout,
	) -> Self {
		let target = Arc::clone(&navigation);
		let subscription = events.subscribe(move |scroll_y| {
			lock(&target).on_scroll(scroll_y, &layout);
		});

		Self {
			navigation,
			subscription,
		}
	}

	/// Shared navigation state
	pub fn navigation(&self) -> &Arc<Mutex<Navigation>> {
		&self.navigation
	}

	/// Copy of the current navigation state
	pub fn snapshot(&self) -> Navigation {
		lock(&self.navigation).clone()
	}

	/// Stop listening, returning the shared navigation
	pub fn unbind(self) -> Arc<Mutex<Navigation>> {
		self.subscription.unsubscribe();
		self.navigation
	}
}
