//! Folio CLI
//!
//! Command-line front end for the Folio portfolio site.
//!
//! ## Usage
//!
//! ```bash
//! FOLIO_BACKEND_URL=https://api.example.com \
//!     folio contact --name "Ada" --email ada@example.com --message "Hello" --consent
//! folio sections
//! folio content --section publications
//! ```

mod output;

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use colored::Colorize;
use folio_conf::Settings;
use folio_contact::{ContactForm, FieldName, HttpSubmissionClient};
use folio_pages::{Portfolio, Section};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use output::TerminalNotifier;

#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(about = "Folio portfolio site utility", long_about = None)]
#[command(version)]
struct Cli {
	#[command(subcommand)]
	command: Commands,

	/// Verbosity level (can be repeated)
	#[arg(short, long, action = clap::ArgAction::Count, global = true)]
	verbosity: u8,

	/// Settings file
	#[arg(
		long,
		global = true,
		env = "FOLIO_CONFIG",
		default_value = folio_conf::settings::DEFAULT_CONFIG_FILE
	)]
	config: PathBuf,
}

#[derive(Subcommand, Debug)]
enum Commands {
	/// Send a message through the contact form
	Contact {
		/// Sender name
		#[arg(long)]
		name: String,

		/// Sender email address
		#[arg(long)]
		email: String,

		/// Message body
		#[arg(long)]
		message: String,

		/// Consent to being contacted back
		#[arg(long)]
		consent: bool,
	},

	/// List page sections in render order
	Sections,

	/// Print the content table as JSON
	Content {
		/// Only print one section (e.g. `publications`)
		#[arg(long)]
		section: Option<Section>,
	},
}

fn filter_for(verbosity: u8, configured: &str) -> EnvFilter {
	let directive = match verbosity {
		0 => {
			return EnvFilter::try_from_default_env()
				.unwrap_or_else(|_| EnvFilter::new(configured));
		}
		1 => "info,folio_contact=debug,folio_pages=debug,folio_conf=debug",
		2 => "debug",
		_ => "trace",
	};
	EnvFilter::new(directive)
}

fn init_tracing(verbosity: u8, configured: &str) {
	tracing_subscriber::registry()
		.with(filter_for(verbosity, configured))
		.with(fmt::layer().with_writer(std::io::stderr))
		.init();
}

async fn run_contact(
	settings: Settings,
	name: String,
	email: String,
	message: String,
	consent: bool,
) -> anyhow::Result<ExitCode> {
	let client = HttpSubmissionClient::from_settings(&settings)
		.context("Failed to create contact client")?;
	let mut form = ContactForm::new(Arc::new(client), Arc::new(TerminalNotifier));

	form.update_field(FieldName::Name, name)?;
	form.update_field(FieldName::Email, email)?;
	form.update_field(FieldName::Message, message)?;
	form.update_field(FieldName::Consent, consent)?;

	let notification = form.submit().await;
	output::print_field_errors(form.field_errors());

	Ok(if notification.is_error() {
		ExitCode::FAILURE
	} else {
		ExitCode::SUCCESS
	})
}

fn run_content(section: Option<Section>) -> anyhow::Result<ExitCode> {
	let portfolio = Portfolio::embedded()?;
	let value = match section {
		Some(section) => portfolio.section_json(section)?,
		None => serde_json::to_value(portfolio)?,
	};

	println!("{}", serde_json::to_string_pretty(&value)?);
	Ok(ExitCode::SUCCESS)
}

async fn run(cli: Cli) -> anyhow::Result<ExitCode> {
	// Only `contact` needs a backend, so a missing one is not fatal here
	let settings = Settings::load(&cli.config);
	let log_filter = settings
		.as_ref()
		.map(|s| s.log_filter.as_str())
		.unwrap_or("warn");
	init_tracing(cli.verbosity, log_filter);
	if let Err(e) = &settings {
		tracing::debug!(config = %cli.config.display(), error = %e, "Settings unavailable");
	}

	match cli.command {
		Commands::Contact {
			name,
			email,
			message,
			consent,
		} => {
			let settings = settings.context("Failed to load settings")?;
			run_contact(settings, name, email, message, consent).await
		}
		Commands::Sections => {
			output::print_sections(settings.as_ref().ok().map(|s| s.cv_url.as_str()));
			Ok(ExitCode::SUCCESS)
		}
		Commands::Content { section } => run_content(section),
	}
}

#[tokio::main]
async fn main() -> ExitCode {
	let cli = Cli::parse();

	match run(cli).await {
		Ok(code) => code,
		Err(e) => {
			eprintln!("{} {:#}", "Error:".red(), e);
			ExitCode::FAILURE
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_parse_contact() {
		let cli = Cli::try_parse_from([
			"folio",
			"contact",
			"--name",
			"Ada",
			"--email",
			"ada@example.com",
			"--message",
			"Hello",
			"--consent",
		])
		.unwrap();

		match cli.command {
			Commands::Contact {
				name,
				email,
				message,
				consent,
			} => {
				assert_eq!(name, "Ada");
				assert_eq!(email, "ada@example.com");
				assert_eq!(message, "Hello");
				assert!(consent);
			}
			other => panic!("unexpected command: {other:?}"),
		}
	}

	#[rstest]
	fn test_consent_defaults_to_false() {
		let cli = Cli::try_parse_from([
			"folio", "contact", "--name", "Ada", "--email", "a@b.c", "--message", "Hi",
		])
		.unwrap();

		assert!(matches!(cli.command, Commands::Contact { consent: false, .. }));
	}

	#[rstest]
	#[case(&["folio", "sections"], 0)]
	#[case(&["folio", "-v", "sections"], 1)]
	#[case(&["folio", "sections", "-vv"], 2)]
	fn test_verbosity_is_global(#[case] args: &[&str], #[case] expected: u8) {
		let cli = Cli::try_parse_from(args.iter().copied()).unwrap();
		assert_eq!(cli.verbosity, expected);
	}

	#[rstest]
	fn test_content_section_parses() {
		let cli = Cli::try_parse_from(["folio", "content", "--section", "skills"]).unwrap();
		assert!(matches!(
			cli.command,
			Commands::Content {
				section: Some(Section::Skills)
			}
		));
	}

	#[rstest]
	fn test_unknown_section_is_rejected() {
		assert!(Cli::try_parse_from(["folio", "content", "--section", "about"]).is_err());
	}

	#[rstest]
	fn test_config_flag() {
		let cli = Cli::try_parse_from(["folio", "--config", "site.toml", "sections"]).unwrap();
		assert_eq!(cli.config, PathBuf::from("site.toml"));
	}
}
