//! ChargeOver CLI - list and create items from the command line.
//!
//! ```text
//! chargeover items list
//! chargeover items create <name> <base-price> [paycycle]
//! ```
//!
//! Credentials come from `.secrets/chargeover.json` or `CHARGEOVER_*`
//! environment variables.

use std::process::ExitCode;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use chargeover_client::{ClientConfig, ItemInput, Paycycle};

const USAGE: &str = "usage:
  chargeover items list
  chargeover items create <name> <base-price> [paycycle]";

/// A parsed command line.
#[derive(Debug, PartialEq)]
enum Command {
    ListItems,
    CreateItem(ItemInput),
}

fn parse_args(args: &[String]) -> Result<Command, String> {
    let args: Vec<&str> = args.iter().map(String::as_str).collect();
    match args.as_slice() {
        ["items", "list"] => Ok(Command::ListItems),
        ["items", "create", name, base, rest @ ..] if rest.len() <= 1 => {
            let base: f64 = base
                .parse()
                .map_err(|_| format!("invalid base price: {base}"))?;
            let paycycle = match rest.first() {
                Some(code) => {
                    Paycycle::from_code(code).ok_or_else(|| format!("unknown paycycle: {code}"))?
                }
                None => Paycycle::Monthly,
            };
            Ok(Command::CreateItem(ItemInput::service(*name, base, paycycle)))
        }
        _ => Err(USAGE.to_string()),
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,chargeover=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = match parse_args(&args) {
        Ok(command) => command,
        Err(message) => {
            eprintln!("{message}");
            return ExitCode::from(2);
        }
    };

    match run(command).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(code = e.code(), error = %e, "Command failed");
            ExitCode::FAILURE
        }
    }
}

async fn run(command: Command) -> chargeover_client::Result<()> {
    let config = ClientConfig::from_env()?;
    tracing::info!(
        endpoint = %config.credentials.endpoint_host(),
        auth_mode = config.credentials.auth_mode().as_str(),
        timeout_seconds = config.timeout_seconds,
        "ChargeOver configuration loaded"
    );
    let client = config.into_client()?;

    match command {
        Command::ListItems => {
            let items = client.list_items_raw().await?;
            println!(
                "{}",
                serde_json::to_string_pretty(&items).unwrap_or_else(|_| items.to_string())
            );
        }
        Command::CreateItem(input) => {
            let item_id = client.create_item(&input).await?;
            println!("{item_id}");
        }
    }
    Ok(())
}
