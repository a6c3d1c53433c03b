//! Portfolio content table
//!
//! All site content is compiled into the binary from
//! `content/portfolio.toml` and parsed once on first access.
//!
//! ## Example
//!
//! ```
//! use folio_pages::content::{Portfolio, Section};
//!
//! let portfolio = Portfolio::embedded().unwrap();
//! assert!(!portfolio.publications.is_empty());
//! assert_eq!(Section::ALL[0].id(), "home");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

static EMBEDDED_CONTENT: &str = include_str!("../content/portfolio.toml");

static PORTFOLIO: OnceLock<Result<Portfolio, ContentError>> = OnceLock::new();

/// Errors loading or querying the content table
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContentError {
	#[error("Invalid portfolio content: {0}")]
	Parse(String),

	#[error("Unknown section: {0}")]
	UnknownSection(String),
}

/// Page sections in render order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
	Home,
	Publications,
	Projects,
	Experience,
	Education,
	Skills,
	Certificates,
	Contact,
}

impl Section {
	pub const ALL: [Section; 8] = [
		Section::Home,
		Section::Publications,
		Section::Projects,
		Section::Experience,
		Section::Education,
		Section::Skills,
		Section::Certificates,
		Section::Contact,
	];

	/// Anchor id of the section element
	pub fn id(&self) -> &'static str {
		match self {
			Section::Home => "home",
			Section::Publications => "publications",
			Section::Projects => "projects",
			Section::Experience => "experience",
			Section::Education => "education",
			Section::Skills => "skills",
			Section::Certificates => "certificates",
			Section::Contact => "contact",
		}
	}

	pub fn title(&self) -> &'static str {
		match self {
			Section::Home => "Home",
			Section::Publications => "Publications",
			Section::Projects => "Projects",
			Section::Experience => "Experience",
			Section::Education => "Education",
			Section::Skills => "Skills",
			Section::Certificates => "Certificates",
			Section::Contact => "Contact",
		}
	}
}

impl fmt::Display for Section {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.id())
	}
}

impl FromStr for Section {
	type Err = ContentError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Section::ALL
			.into_iter()
			.find(|section| section.id() == s)
			.ok_or_else(|| ContentError::UnknownSection(s.to_string()))
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalInfo {
	pub name: String,
	pub title: String,
	pub tagline: String,
	pub email: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub phone: Option<String>,
	pub github: String,
	pub linkedin: String,
	pub location: String,
}

/// Kind of a contact channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactKind {
	Email,
	GitHub,
	LinkedIn,
}

/// A link shown next to the contact form
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactMethod {
	pub kind: ContactKind,
	pub label: &'static str,
	pub value: String,
	pub href: String,
}

impl PersonalInfo {
	/// Contact channels in display order
	pub fn contact_methods(&self) -> Vec<ContactMethod> {
		vec![
			ContactMethod {
				kind: ContactKind::Email,
				label: "Email",
				value: self.email.clone(),
				href: format!("mailto:{}", self.email),
			},
			ContactMethod {
				kind: ContactKind::GitHub,
				label: "GitHub",
				value: display_url(&self.github),
				href: self.github.clone(),
			},
			ContactMethod {
				kind: ContactKind::LinkedIn,
				label: "LinkedIn",
				value: display_url(&self.linkedin),
				href: self.linkedin.clone(),
			},
		]
	}
}

fn display_url(url: &str) -> String {
	url.trim_start_matches("https://")
		.trim_start_matches("http://")
		.trim_end_matches('/')
		.to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeroStat {
	pub label: String,
	pub value: String,
	pub subtext: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Publication {
	pub id: u32,
	pub title: String,
	pub venue: String,
	pub date: String,
	pub highlights: Vec<String>,
	pub link: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
	pub id: u32,
	pub name: String,
	pub description: String,
	pub technologies: Vec<String>,
	pub github: String,
	pub highlights: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experience {
	pub id: u32,
	pub title: String,
	pub company: String,
	pub location: String,
	pub period: String,
	pub description: String,
	pub achievements: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Education {
	pub degree: String,
	pub university: String,
	pub period: String,
	pub gpa: String,
	pub courses: Vec<String>,
}

/// Skill groups
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skills {
	pub programming: Vec<String>,
	pub frameworks: Vec<String>,
	pub mathematics: Vec<String>,
	pub languages: Vec<String>,
}

/// The whole content table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Portfolio {
	pub personal: PersonalInfo,
	pub hero_stats: Vec<HeroStat>,
	pub publications: Vec<Publication>,
	pub projects: Vec<Project>,
	pub experience: Vec<Experience>,
	pub education: Education,
	pub skills: Skills,
	pub certificates: Vec<String>,
}

#[derive(Serialize)]
struct HomeView<'a> {
	personal: &'a PersonalInfo,
	hero_stats: &'a [HeroStat],
}

impl Portfolio {
	/// Parse a content table from TOML
	pub fn from_toml(source: &str) -> Result<Self, ContentError> {
		toml::from_str(source).map_err(|e| ContentError::Parse(e.to_string()))
	}

	/// Content compiled into the binary, parsed on first call
	pub fn embedded() -> Result<&'static Portfolio, ContentError> {
		let loaded = PORTFOLIO.get_or_init(|| {
			let parsed = Portfolio::from_toml(EMBEDDED_CONTENT);
			if let Err(e) = &parsed {
				tracing::error!(error = %e, "Embedded portfolio content failed to parse");
			}
			parsed
		});

		loaded.as_ref().map_err(Clone::clone)
	}

	/// JSON view of the data rendered by one section
	pub fn section_json(&self, section: Section) -> Result<serde_json::Value, ContentError> {
		let value = match section {
			Section::Home => serde_json::to_value(HomeView {
				personal: &self.personal,
				hero_stats: &self.hero_stats,
			}),
			Section::Publications => serde_json::to_value(&self.publications),
			Section::Projects => serde_json::to_value(&self.projects),
			Section::Experience => serde_json::to_value(&self.experience),
			Section::Education => serde_json::to_value(&self.education),
			Section::Skills => serde_json::to_value(&self.skills),
			Section::Certificates => serde_json::to_value(&self.certificates),
			Section::Contact => serde_json::to_value(self.personal.contact_methods()),
		};

		value.map_err(|e| ContentError::Parse(e.to_string()))
	}
}
