//! CLI for the README fetcher.
//!
//! Fetches the README of each repository given on the command line and
//! prints it, or prints one JSON result per line with `--json`.

use clap::Parser;
use futures::stream::{self, StreamExt};
use readme_fetcher::{ConfigError, FetchResult, FetcherConfig, ReadmeFetcher};
use std::process::ExitCode;
use tracing::{error, info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// README Fetcher - Fetch the README of GitHub repositories.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Repository locators, e.g. `https://github.com/owner/repo` or `owner/repo`.
    #[arg(required = true)]
    locators: Vec<String>,

    /// GitHub Personal Access Token. Unauthenticated when omitted.
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// GitHub API base URL, for GitHub Enterprise.
    #[arg(long)]
    api_url: Option<String>,

    /// Print each result as a JSON line instead of the README text.
    #[arg(long)]
    json: bool,

    /// Maximum concurrent fetches.
    #[arg(long, default_value_t = 4, value_parser = clap::value_parser!(u16).range(1..))]
    concurrency: u16,
}

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize tracing
    init_tracing();

    // octocrab's TLS stack needs a process-wide crypto provider.
    let _ = rustls::crypto::aws_lc_rs::default_provider().install_default();

    // Parse arguments
    let args = Args::parse();

    match run(args).await {
        Ok(summary) => {
            if summary.failed > 0 {
                warn!(
                    fetched = summary.fetched,
                    failed = summary.failed,
                    "Some READMEs could not be fetched"
                );
                ExitCode::from(1)
            } else {
                ExitCode::from(0)
            }
        }
        Err(e) => {
            error!(error = %e, "Critical failure");
            ExitCode::from(2)
        }
    }
}

/// Initializes tracing with environment filter support.
///
/// Logs go to stderr so README text and JSON on stdout stay clean.
/// Log level filtering via `RUST_LOG` env var (defaults to "info").
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

/// Counts of fetched and failed locators.
#[derive(Debug, Default)]
struct Summary {
    fetched: usize,
    failed: usize,
}

/// Main execution logic.
async fn run(args: Args) -> Result<Summary, ConfigError> {
    let mut config = FetcherConfig::new().with_optional_token(args.token);
    if let Some(api_url) = args.api_url {
        config = config.with_base_uri(api_url);
    }
    let fetcher = ReadmeFetcher::github(&config)?;
    info!(
        count = args.locators.len(),
        authenticated = config.token().is_some(),
        "Fetching READMEs"
    );

    // Results come back in input order so output matches the command line.
    let results: Vec<(String, FetchResult)> = stream::iter(args.locators)
        .map(|locator| {
            let fetcher = &fetcher;
            async move {
                let result = fetcher.fetch_readme(&locator).await;
                (locator, result)
            }
        })
        .buffered(usize::from(args.concurrency))
        .collect()
        .await;

    let mut summary = Summary::default();
    for (locator, result) in &results {
        if result.success {
            summary.fetched += 1;
        } else {
            summary.failed += 1;
        }
        print_result(locator, result, args.json);
    }

    Ok(summary)
}

/// Prints a single fetch result.
fn print_result(locator: &str, result: &FetchResult, json: bool) {
    if json {
        match serde_json::to_string(result) {
            Ok(line) => println!("{line}"),
            Err(e) => error!(locator, error = %e, "Failed to serialize result"),
        }
        return;
    }

    match (&result.content, &result.error) {
        (Some(content), _) => {
            if let Some(url) = &result.repo_url {
                info!(locator, url = %url, "Fetched README");
            }
            println!("{content}");
        }
        (None, Some(message)) => error!(locator, "{message}"),
        (None, None) => {}
    }
}
