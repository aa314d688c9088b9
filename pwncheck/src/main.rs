use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use pwncheck::check_all;
use pwncheck_client::{DEFAULT_BASE_URL, RangeClient};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "pwncheck")]
#[command(about = "Check passwords against the Pwned Passwords breach corpus without revealing them")]
struct Args {
    /// Secrets to check; read one per line from stdin when omitted
    secrets: Vec<String>,

    /// Range API endpoint
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Request timeout in seconds (requests block indefinitely when unset)
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// Maximum concurrent lookups
    #[arg(short = 'j', long, default_value = "1")]
    concurrency: usize,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let args = Args::parse();

    let mut builder = reqwest::Client::builder()
        .user_agent(concat!("pwncheck/", env!("CARGO_PKG_VERSION")));
    if let Some(secs) = args.timeout_secs {
        builder = builder.timeout(Duration::from_secs(secs));
    }
    let http = match builder.build() {
        Ok(http) => http,
        Err(e) => {
            eprintln!("failed to build HTTP client: {e}");
            return ExitCode::FAILURE;
        }
    };
    let client = RangeClient::with_client(args.base_url, http);

    let secrets = if args.secrets.is_empty() {
        match secrets_from_stdin().await {
            Ok(secrets) => secrets,
            Err(e) => {
                eprintln!("failed to read secrets from stdin: {e}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        args.secrets
    };

    let failures = check_all(&client, &secrets, args.concurrency).await;

    // Leak findings are not process failures; only checks that could not
    // complete are.
    if failures == 0 { ExitCode::SUCCESS } else { ExitCode::FAILURE }
}

async fn secrets_from_stdin() -> std::io::Result<Vec<String>> {
    let mut secrets = Vec::new();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if !line.is_empty() {
            secrets.push(line.to_string());
        }
    }
    Ok(secrets)
}
