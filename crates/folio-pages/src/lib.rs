//! # Folio Pages
//!
//! Page-level state of the Folio portfolio site.
//!
//! The site is a single page: a fixed navigation bar above a sequence of
//! sections rendered from a static content table. This crate models the
//! parts of that page that carry state or data, leaving rendering to the
//! embedding UI.
//!
//! ## Module Organization
//!
//! - [`content`]: the embedded content table and the [`Section`] order
//! - [`navigation`]: navigation bar state and section layout
//! - [`events`]: scroll event subscriptions with RAII teardown
//!
//! ## Example
//!
//! ```
//! use folio_pages::{Navigation, NavigationBinding, ScrollEvents, Section, SectionLayout};
//! use std::sync::{Arc, Mutex};
//!
//! let layout = SectionLayout::from_heights(Section::ALL.iter().map(|s| (s.id(), 600.0)));
//! let events = ScrollEvents::new();
//! let binding = NavigationBinding::bind(&events, Arc::new(Mutex::new(Navigation::new())), layout);
//!
//! events.dispatch(1250.0);
//! assert_eq!(binding.snapshot().active_section(), Some("projects"));
//! ```

pub mod content;
pub mod events;
pub mod navigation;

pub use content::{ContactMethod, ContentError, Portfolio, Section};
pub use events::{NavigationBinding, ScrollEvents, Subscription};
pub use navigation::{NAV_LINKS, NavLink, Navigation, SectionLayout};
