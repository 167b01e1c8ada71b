//! Terminal client for the contact form.
//!
//! Drives the same [`ContactForm`] state machine as the web page: fields are
//! edited one by one, validated on submit, and posted to the submission
//! endpoint. After a failure the entered values are kept and can be edited
//! before trying again.
//!
//! # Usage
//!
//! ```bash
//! # Interactive
//! cargo run --bin contact
//!
//! # Non-interactive
//! cargo run --bin contact -- --yes \
//!     --name "Jane Doe" --phone "+15551234567" --email jane@example.com
//!
//! # Another deployment
//! cargo run --bin contact -- --endpoint https://example.com/api/notion
//! ```

use contact_form::form::{
    ContactForm, EditOutcome, Field, FormPhase, FormView, HttpTransport,
};

use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use dialoguer::{Confirm, Input};
use tracing_subscriber::EnvFilter;

/// Submit the contact form from the terminal.
#[derive(Parser)]
#[command(name = "contact")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Submission endpoint
    #[arg(long, default_value = "http://localhost:3000/api/notion")]
    endpoint: String,

    /// Your name (prompted if omitted)
    #[arg(long)]
    name: Option<String>,

    /// Phone number, up to 12 characters (prompted if omitted)
    #[arg(long)]
    phone: Option<String>,

    /// E-mail address (prompted if omitted)
    #[arg(long)]
    email: Option<String>,

    /// Submit without confirmation and exit on the first failure
    #[arg(short, long)]
    yes: bool,

    /// Log request and response details
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_logging(cli.verbose);

    let transport = HttpTransport::new(&cli.endpoint)
        .with_context(|| format!("Invalid endpoint URL '{}'", cli.endpoint))?;

    println!("{}", "📨 Contact Us Now".bright_blue().bold());
    println!("{}", "Please fill out the information below.".bright_black());
    println!();

    let mut form = ContactForm::new();
    fill_field(&mut form, Field::Name, cli.name)?;
    fill_field(&mut form, Field::Phone, cli.phone)?;
    fill_field(&mut form, Field::Email, cli.email)?;

    loop {
        if !cli.yes {
            let confirmed = Confirm::new()
                .with_prompt(format!("Submit to {}?", transport.endpoint()))
                .default(true)
                .interact()?;

            if !confirmed {
                println!("{}", "❌ Cancelled".red());
                return Ok(());
            }
        }

        println!("{}", "Processing...".bright_black());
        form.submit(&transport).await;
        render(&form);

        match form.phase() {
            FormPhase::Submitted => return Ok(()),
            FormPhase::Failed(message) => {
                let message = message.clone();
                if cli.yes {
                    anyhow::bail!("Form submission failed: {}", message);
                }

                let retry = Confirm::new()
                    .with_prompt("Edit and try again?")
                    .default(true)
                    .interact()?;

                if !retry {
                    anyhow::bail!("Form submission failed: {}", message);
                }

                for field in Field::ALL {
                    fill_field(&mut form, field, None)?;
                }
            }
            FormPhase::Idle | FormPhase::Submitting => {
                anyhow::bail!("Submission did not complete")
            }
        }
    }
}

/// Sets `field` from `preset`, or prompts until the edit is accepted.
///
/// Prompts start from the current draft value.
fn fill_field(form: &mut ContactForm, field: Field, preset: Option<String>) -> Result<()> {
    let mut preset = preset;

    loop {
        let value = match preset.take() {
            Some(value) => value,
            None => prompt(field, form.draft().get(field))?,
        };

        match form.edit(field, value) {
            EditOutcome::Applied => return Ok(()),
            EditOutcome::Rejected => {
                println!(
                    "{}",
                    "⚠️  Phone numbers are limited to 12 characters".yellow()
                );
            }
        }
    }
}

fn prompt(field: Field, current: &str) -> Result<String> {
    let mut input = Input::<String>::new()
        .with_prompt(field.label())
        .allow_empty(field != Field::Name);

    if !current.is_empty() {
        input = input.with_initial_text(current);
    }

    Ok(input.interact_text()?)
}

/// Prints the form state after a submission attempt.
fn render(form: &ContactForm) {
    println!();
    match form.view() {
        FormView::Success => {
            println!(
                "{}",
                "✅ Thank you for the form submission! We'll contact you soon."
                    .green()
                    .bold()
            );
        }
        FormView::Form {
            error: Some(message),
            ..
        } => {
            println!("{}", format!("❌ {}", message).red());
        }
        FormView::Form { .. } => {}
    }
    println!();
}

fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("contact_form=debug,info")
        } else {
            EnvFilter::new("warn")
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}
