//! Repo Lookup
//!
//! Lists a GitHub user's public repositories with their open issue counts.
//!
//! # Usage
//!
//! ```bash
//! # One-shot
//! repo-lookup octocat
//!
//! # Interactive: one username per line, lookups may overlap
//! repo-lookup
//! ```

use anyhow::Result;
use clap::{ArgAction, Parser};
use std::process::ExitCode;
use std::sync::Arc;
use tokio::io::BufReader;

use repo_lookup::config::Config;
use repo_lookup::logging::init_tracing;
use repo_lookup::render::default_surface;
use repo_lookup::session::run_session;
use repo_lookup::{GitHubClient, LookupPipeline, OverlapPolicy};

#[derive(Parser)]
#[command(name = "repo-lookup")]
#[command(about = "List a GitHub user's repositories and their open issues")]
struct Cli {
    /// GitHub username (starts an interactive prompt when omitted)
    username: Option<String>,

    /// GitHub API base URL (default: from config or https://api.github.com)
    #[arg(long, env = "GITHUB_API_URL")]
    api_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long)]
    timeout: Option<u64>,

    /// Disable colors and symbols
    #[arg(long)]
    plain: bool,

    /// Which response wins when interactive lookups overlap
    #[arg(long, value_enum)]
    overlap: Option<OverlapPolicy>,

    /// Increase verbosity (-v info, -vv debug, -vvv trace). Default is warn.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose)?;

    let mut config = Config::load()?.with_api_url(cli.api_url);
    if let Some(timeout) = cli.timeout {
        config.github.timeout_seconds = timeout;
    }
    if let Some(overlap) = cli.overlap {
        config.lookup.overlap = overlap;
    }
    let config = config.validated()?;
    tracing::debug!(api_url = %config.github.api_url, overlap = ?config.lookup.overlap, "configured");

    let source = Arc::new(GitHubClient::new(&config.github)?);
    let surface = default_surface(cli.plain);
    let pipeline = Arc::new(LookupPipeline::new(source, surface, config.lookup.overlap));

    match cli.username {
        Some(mut field) => {
            let outcome = pipeline.submit(&mut field).await;
            tracing::debug!(?outcome, "submission finished");
            Ok(if outcome.is_rendered() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
        None => {
            eprintln!("Enter a GitHub username per line. Type 'quit' to exit.");
            let stdin = BufReader::new(tokio::io::stdin());
            let outcomes = run_session(pipeline, stdin).await;
            tracing::debug!(submissions = outcomes.len(), "session ended");
            Ok(ExitCode::SUCCESS)
        }
    }
}
