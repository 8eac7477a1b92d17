//! Repo Lookup Library
//!
//! Fetches a GitHub user's public repositories and renders them as
//! `owner/name` rows with an open-issue badge.
//!
//! # Usage as Library
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use repo_lookup::{GitHubClient, LookupPipeline, MemorySurface, OverlapPolicy};
//! use repo_lookup::config::GitHubConfig;
//!
//! let source = Arc::new(GitHubClient::new(&GitHubConfig::default())?);
//! let surface = Arc::new(MemorySurface::new());
//! let pipeline = LookupPipeline::new(source, surface.clone(), OverlapPolicy::default());
//!
//! let mut field = String::from("  octocat ");
//! pipeline.submit(&mut field).await;
//! println!("{:?}", surface.view().rows);
//! ```
//!
//! # Configuration
//! Set `GITHUB_API_URL` or configure in `~/.config/repo-lookup/config.toml`

pub mod config;
pub mod error;
pub mod fetcher;
pub mod logging;
pub mod models;
pub mod pipeline;
pub mod render;
pub mod session;

pub use error::{LookupError, LookupResult, QueryResult};
pub use fetcher::{GitHubClient, RepoSource};
pub use models::{Owner, RepositoryRecord, Username};
pub use pipeline::{LookupPipeline, OverlapPolicy, SubmissionOutcome};
pub use render::{
    render_results, IssueStatus, Marker, MemorySurface, PlainSurface, RepoRow, Surface,
    TerminalSurface,
};
