use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use kilm_slots::{CheckOutcome, CheckerConfig, Credentials, HttpPageSource, SlotChecker, SmtpMailer};

#[derive(Parser, Debug)]
#[command(
    name = "kilm-slots",
    about = "Scrape available time slots for Kilmainham Gaol and email them if any are free"
)]
struct Cli {
    /// The date in YYYYMMDD format to check for available time slots
    date: String,

    /// The receiver of the email if stuff is available
    recipient: String,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let result = run(&cli).await;
    match &result {
        Ok(outcome) => report(outcome),
        Err(e) => eprintln!("Error: {:#}", e),
    }
    exit_code(&result)
}

/// Only a failed notification is reported as a process failure.
fn exit_code(result: &anyhow::Result<CheckOutcome>) -> ExitCode {
    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    }
}

async fn run(cli: &Cli) -> anyhow::Result<CheckOutcome> {
    info!("Checking Kilmainham Gaol tour slots for {}", cli.date);

    let config = CheckerConfig::from_env();
    let source = match HttpPageSource::new() {
        Ok(source) => source,
        Err(e) => {
            error!("Failed to set up booking page client: {}", e);
            return Ok(CheckOutcome::FetchFailed);
        }
    };
    let mailer = SmtpMailer::from_config(Credentials::from_env(), &config);

    let checker = SlotChecker::new(source, mailer, config);
    let outcome = checker
        .check(&cli.date, &cli.recipient)
        .await
        .with_context(|| format!("failed to email available slots to {}", cli.recipient))?;
    Ok(outcome)
}

fn report(outcome: &CheckOutcome) {
    if outcome.is_neutral() {
        info!("Check finished without sending a notification");
    }
    match outcome {
        CheckOutcome::FetchFailed => println!("Failed to retrieve HTML content."),
        CheckOutcome::NoSlots => println!("No available time slots found."),
        CheckOutcome::Notified(_) => println!("Email sent successfully!"),
    }
}
