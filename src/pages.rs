//! Page content and navigation
//!
//! This module provides access to folio-pages.
//!
//! ## Example
//!
//! ```rust
//! use folio::pages::{Navigation, SectionLayout};
//!
//! let layout = SectionLayout::new()
//!     .with_section("home", 0.0)
//!     .with_section("contact", 1200.0);
//!
//! let mut nav = Navigation::new();
//! nav.on_scroll(1150.0, &layout);
//! assert_eq!(nav.active_section(), Some("contact"));
//! ```

// Re-export all folio-pages functionality
pub use folio_pages::*;
