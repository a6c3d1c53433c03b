//! Navigation bar state
//!
//! [`Navigation`] tracks whether the page has scrolled past the top, which
//! section is currently in view and whether the mobile menu is open. It
//! owns no DOM; callers feed it scroll positions and a [`SectionLayout`]
//! describing where each section starts.
//!
//! ## Example
//!
//! ```
//! use folio_pages::navigation::{Navigation, SectionLayout};
//!
//! let layout = SectionLayout::new()
//!     .with_section("home", 0.0)
//!     .with_section("projects", 900.0);
//!
//! let mut nav = Navigation::new();
//! assert!(nav.on_scroll(850.0, &layout));
//! assert_eq!(nav.active_section(), Some("projects"));
//! assert!(nav.is_scrolled());
//!
//! nav.toggle_menu();
//! assert_eq!(nav.scroll_target("home", &layout), Some(0.0));
//! assert!(!nav.is_menu_open());
//! ```

use crate::content::Section;

/// Scroll distance after which the bar switches to its opaque style
pub const SCROLLED_THRESHOLD: f64 = 50.0;

/// Height reserved for the fixed navigation bar
pub const HEADER_OFFSET: f64 = 100.0;

/// Entry of the navigation bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
	pub label: &'static str,
	pub section: Section,
}

impl NavLink {
	pub fn id(&self) -> &'static str {
		self.section.id()
	}
}

/// Links shown in the navigation bar, left to right
pub const NAV_LINKS: [NavLink; 6] = [
	NavLink {
		label: "Home",
		section: Section::Home,
	},
	NavLink {
		label: "Publications",
		section: Section::Publications,
	},
	NavLink {
		label: "Projects",
		section: Section::Projects,
	},
	NavLink {
		label: "Experience",
		section: Section::Experience,
	},
	NavLink {
		label: "Skills",
		section: Section::Skills,
	},
	NavLink {
		label: "Contact",
		section: Section::Contact,
	},
];

/// Top offsets of the rendered sections, in page order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SectionLayout {
	sections: Vec<(String, f64)>,
}

impl SectionLayout {
	pub fn new() -> Self {
		Self::default()
	}

	/// Append a section starting at `top`
	pub fn with_section(mut self, id: impl Into<String>, top: f64) -> Self {
		self.sections.push((id.into(), top));
		self
	}

	/// Lay sections out back to back from the top of the page
	///
	/// # Examples
	///
	/// ```
	/// use folio_pages::navigation::SectionLayout;
	///
	/// let layout =
	///     SectionLayout::from_heights([("home", 800.0), ("projects", 600.0), ("contact", 400.0)]);
	/// assert_eq!(layout.top_of("contact"), Some(1400.0));
	/// ```
	pub fn from_heights<I, S>(heights: I) -> Self
	where
		I: IntoIterator<Item = (S, f64)>,
		S: Into<String>,
	{
		let mut top = 0.0;
		let mut layout = Self::new();
		for (id, height) in heights {
			layout = layout.with_section(id, top);
			top += height;
		}
		layout
	}

	/// Top offset of section `id`
	pub fn top_of(&self, id: &str) -> Option<f64> {
		self.sections
			.iter()
			.find(|(section, _)| section == id)
			.map(|(_, top)| *top)
	}

	/// Section in view at `scroll_y`: the last one starting at or above
	/// the scroll position plus the header offset
	pub fn active_at(&self, scroll_y: f64) -> Option<&str> {
		let probe = scroll_y + HEADER_OFFSET;
		self.sections
			.iter()
			.rev()
			.find(|(_, top)| *top <= probe)
			.map(|(id, _)| id.as_str())
	}

	pub fn ids(&self) -> impl Iterator<Item = &str> {
		self.sections.iter().map(|(id, _)| id.as_str())
	}

	pub fn len(&self) -> usize {
		self.sections.len()
	}

	pub fn is_empty(&self) -> bool {
		self.sections.is_empty()
	}
}

/// Navigation bar state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Navigation {
	is_scrolled: bool,
	menu_open: bool,
	active_section: Option<String>,
}

impl Navigation {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn is_scrolled(&self) -> bool {
		self.is_scrolled
	}

	pub fn is_menu_open(&self) -> bool {
		self.menu_open
	}

	pub fn active_section(&self) -> Option<&str> {
		self.active_section.as_deref()
	}

	/// Apply a scroll position
	///
	/// Returns `true` if the active section changed.
	pub fn on_scroll(&mut self, scroll_y: f64, layout: &SectionLayout) -> bool {
		self.is_scrolled = scroll_y > SCROLLED_THRESHOLD;

		let active = layout.active_at(scroll_y);
		if self.active_section.as_deref() == active {
			return false;
		}

		tracing::debug!(
			from = ?self.active_section,
			to = ?active,
			scroll_y,
			"Active section changed"
		);
		self.active_section = active.map(str::to_string);
		true
	}

	pub fn toggle_menu(&mut self) {
		self.menu_open = !self.menu_open;
	}

	pub fn close_menu(&mut self) {
		self.menu_open = false;
	}

	/// Scroll position that brings section `id` just below the header
	///
	/// Closes the mobile menu when the section exists. An unknown id
	/// returns `None` and leaves the menu as it was.
	pub fn scroll_target(&mut self, id: &str, layout: &SectionLayout) -> Option<f64> {
		let top = layout.top_of(id)?;
		self.close_menu();
		Some((top - HEADER_OFFSET).max(0.0))
	}
}
