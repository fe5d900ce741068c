mod setup;

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use models::Client;
use screens::{FieldView, LoginScreen, Notification, RegisterClientScreen};
use services::{fields, AuthError, SubmissionOutcome};
use setup::{set_up_authenticator, set_up_tracing};

/// Log in to, or register with, the Happy Paws clinic.
#[derive(Parser)]
#[command(name = "happy-paws", version)]
struct Cli {
    /// Emit logs as JSON lines.
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Command,
}

// Every field defaults to empty so missing input is reported by the form
// validation, the same way the screens report it.
#[derive(Subcommand)]
enum Command {
    /// Log in with an existing account.
    LogIn {
        #[arg(long, default_value = "")]
        email: String,
        #[arg(long, default_value = "")]
        password: String,
    },
    /// Register as a client.
    Register {
        #[arg(long, default_value = "")]
        first_name: String,
        #[arg(long, default_value = "")]
        last_name: String,
        #[arg(long, default_value = "")]
        phone_number: String,
        #[arg(long, default_value = "")]
        email: String,
        #[arg(long, default_value = "")]
        password: String,
        #[arg(long, default_value = "")]
        repeat_password: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    set_up_tracing(cli.json_logs);

    let authenticator = set_up_authenticator()?;

    let code = match cli.command {
        Command::LogIn { email, password } => {
            let mut screen = LoginScreen::new(authenticator);
            screen.on_change(fields::EMAIL, email)?;
            screen.on_change(fields::PASSWORD, password)?;
            let outcome = screen.submit().await;
            report(outcome, &screen.fields(), screen.notification())
        }
        Command::Register {
            first_name,
            last_name,
            phone_number,
            email,
            password,
            repeat_password,
        } => {
            let mut screen = RegisterClientScreen::new(authenticator);
            screen.on_change(fields::FIRST_NAME, first_name)?;
            screen.on_change(fields::LAST_NAME, last_name)?;
            screen.on_change(fields::PHONE_NUMBER, phone_number)?;
            screen.on_change(fields::EMAIL, email)?;
            screen.on_change(fields::PASSWORD, password)?;
            screen.on_change(fields::REPEAT_PASSWORD, repeat_password)?;
            let outcome = screen.submit().await;
            report(outcome, &screen.fields(), screen.notification())
        }
    };
    Ok(code)
}

fn report(
    outcome: SubmissionOutcome<Client, AuthError>,
    fields: &[FieldView],
    notification: Option<&Notification>,
) -> ExitCode {
    match outcome {
        SubmissionOutcome::Succeeded(client) => {
            println!("Welcome, {} <{}>", client.full_name(), client.email);
            ExitCode::SUCCESS
        }
        SubmissionOutcome::Invalid(_) => {
            for field in fields.iter().filter(|field| field.has_error()) {
                eprintln!("{}: {}", field.label, field.error);
            }
            ExitCode::FAILURE
        }
        SubmissionOutcome::Failed(e) => {
            match notification {
                Some(notification) => eprintln!("{}: {}", notification.title, notification.description),
                None => eprintln!("ERROR: {}", e),
            }
            ExitCode::FAILURE
        }
    }
}
