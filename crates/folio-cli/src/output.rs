//! Terminal rendering

use colored::Colorize;
use folio_contact::{FieldErrors, Level, Notification, Notifier};
use folio_pages::{NAV_LINKS, Section};

/// [`Notifier`] printing toasts to the terminal
///
/// Success goes to stdout, errors to stderr.
#[derive(Debug, Default)]
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
	fn notify(&self, notification: Notification) {
		match notification.level {
			Level::Success => {
				println!("{} {}", "✓".green(), notification.title.green().bold());
				println!("  {}", notification.description);
			}
			Level::Error => {
				eprintln!("{} {}", "✗".red(), notification.title.red().bold());
				eprintln!("  {}", notification.description);
			}
		}
	}
}

/// Print per-field messages below the notification
pub fn print_field_errors(errors: &FieldErrors) {
	for (field, messages) in errors.iter() {
		for message in messages {
			eprintln!("  {} {}", format!("{field}:").yellow(), message);
		}
	}
}

/// Print the page sections, marking those reachable from the nav bar
pub fn print_sections(cv_url: Option<&str>) {
	println!("{}", "Sections".bold());
	for (index, section) in Section::ALL.iter().enumerate() {
		let in_nav = NAV_LINKS.iter().any(|link| link.section == *section);
		let marker = if in_nav { "nav".cyan() } else { "   ".normal() };
		println!(
			"  {:>2}. {:<14} #{:<14} {}",
			index + 1,
			section.title(),
			section.id(),
			marker
		);
	}

	if let Some(cv_url) = cv_url {
		println!();
		println!("{} {}", "CV:".bold(), cv_url);
	}
}
