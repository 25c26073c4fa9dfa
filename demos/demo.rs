//! Small command line front end for the Kickbox client.
//!
//! ```text
//! KICKBOX_API_KEY=... cargo run --example demo -- verify bill.lumbergh@gamil.com
//! KICKBOX_API_KEY=... cargo run --example demo -- batch contacts.csv --filename contacts.csv
//! KICKBOX_API_KEY=... cargo run --example demo -- status 465
//! ```

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::{Parser, Subcommand};
use kickbox_client::{BASE_URL, Client};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(about = "Query the Kickbox email verification API")]
struct Cli {
    /// Kickbox API key.
    #[arg(long, env = "KICKBOX_API_KEY", hide_env_values = true)]
    api_key: String,

    /// Base URL of the API.
    #[arg(long, env = "KICKBOX_BASE_URL", default_value = BASE_URL)]
    base_url: String,

    /// Request timeout in seconds.
    #[arg(long, default_value_t = 2)]
    timeout: u64,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Verify one address.
    Verify { email: String },
    /// Upload a CSV file of `"email","name"` rows.
    Batch {
        file: PathBuf,
        #[arg(long)]
        callback: Option<String>,
        #[arg(long)]
        filename: Option<String>,
    },
    /// Show the state of a batch job.
    Status { job_id: u64 },
    /// Show the remaining credits.
    Balance,
    /// Check whether an address uses a disposable provider.
    Disposable { email: String },
}

fn print<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let client = Client::builder(cli.api_key)
        .base_url(cli.base_url)
        .timeout(Duration::from_secs(cli.timeout))
        .build()?;

    match cli.command {
        Command::Verify { email } => {
            let response = client.verify(&email).await?;
            print(&response)?;
            response.check()?;
        }
        Command::Batch {
            file,
            callback,
            filename,
        } => {
            let data = tokio::fs::read(&file)
                .await
                .with_context(|| format!("reading {}", file.display()))?;
            let response = client
                .verify_multiple(callback.as_deref(), filename.as_deref(), data)
                .await?;
            print(&response)?;
            response.check()?;
        }
        Command::Status { job_id } => {
            let response = client.check_job_status(job_id).await?;
            print(&response)?;
        }
        Command::Balance => {
            let response = client.credit_balance().await?;
            print(&response)?;
            response.check()?;
        }
        Command::Disposable { email } => {
            let response = client.disposable(&email).await?;
            print(&response)?;
        }
    }

    Ok(())
}
