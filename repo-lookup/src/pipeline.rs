//! Submission pipeline
//!
//! Ties input handling, fetching and rendering together:
//!
//! ```text
//! Idle -> Validating -> Rejected
//!                    -> Fetching -> RenderedEmpty | RenderedList
//!                                 | NotifiedNotFound | NotifiedNetworkError
//!                                 | NotifiedMalformed | Superseded
//! ```
//!
//! Submissions may overlap: a second lookup can start while the first is in
//! flight. [`OverlapPolicy`] decides which response owns the view.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use tracing::{debug, info, warn};

use crate::error::LookupError;
use crate::fetcher::RepoSource;
use crate::models::Username;
use crate::render::{render_results, Surface};

/// Which response wins when submissions overlap
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum OverlapPolicy {
    /// Only the most recent submission may render or notify; older responses
    /// are dropped when they arrive
    #[default]
    LatestSubmission,
    /// Whichever response arrives last wins, regardless of submission order
    LastResponse,
}

/// Terminal state of one submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// Empty username, nothing fetched
    Rejected,
    /// The user has no repositories
    RenderedEmpty,
    /// Rows were rendered
    RenderedList { rows: usize },
    /// Non-success status from the API
    NotifiedNotFound,
    /// No response could be obtained
    NotifiedNetworkError,
    /// Success status but an unexpected body
    NotifiedMalformed,
    /// A newer submission started before this response arrived
    Superseded,
}

impl SubmissionOutcome {
    /// Whether the view now shows this submission's result
    pub fn is_rendered(&self) -> bool {
        matches!(
            self,
            SubmissionOutcome::RenderedEmpty | SubmissionOutcome::RenderedList { .. }
        )
    }
}

impl From<&LookupError> for SubmissionOutcome {
    fn from(e: &LookupError) -> Self {
        match e {
            LookupError::EmptyInput => SubmissionOutcome::Rejected,
            LookupError::UserNotFound { .. } => SubmissionOutcome::NotifiedNotFound,
            LookupError::Network(_) => SubmissionOutcome::NotifiedNetworkError,
            LookupError::MalformedResponse(_) => SubmissionOutcome::NotifiedMalformed,
        }
    }
}

/// Input handling, fetch and render for one surface
pub struct LookupPipeline {
    source: Arc<dyn RepoSource>,
    surface: Arc<dyn Surface>,
    policy: OverlapPolicy,
    /// Token of the newest submission that reached the fetch stage
    generation: AtomicU64,
    /// Held while checking the token and drawing, so draws never interleave
    render_lock: Mutex<()>,
}

impl LookupPipeline {
    pub fn new(
        source: Arc<dyn RepoSource>,
        surface: Arc<dyn Surface>,
        policy: OverlapPolicy,
    ) -> Self {
        Self {
            source,
            surface,
            policy,
            generation: AtomicU64::new(0),
            render_lock: Mutex::new(()),
        }
    }

    pub fn policy(&self) -> OverlapPolicy {
        self.policy
    }

    /// Handle a form submission
    ///
    /// Reads and trims `field`. A blank field is rejected with a notification
    /// and nothing is fetched; otherwise the field is cleared and the trimmed
    /// username is looked up.
    pub async fn submit(&self, field: &mut String) -> SubmissionOutcome {
        let username = match Username::parse(field) {
            Ok(username) => username,
            Err(e) => {
                debug!("rejecting blank submission");
                self.surface.notify(e.notification());
                self.surface.flush();
                return SubmissionOutcome::Rejected;
            }
        };

        field.clear();
        self.lookup(username).await
    }

    /// Fetch and render the repositories of an already validated username
    ///
    /// On failure the rendered list is left untouched and a notification is
    /// shown instead.
    pub async fn lookup(&self, username: Username) -> SubmissionOutcome {
        let token = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        debug!(user = %username, token, "lookup started");

        let result = self.source.list_repos(&username).await;

        let _guard = self
            .render_lock
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        if self.policy == OverlapPolicy::LatestSubmission {
            let newest = self.generation.load(Ordering::SeqCst);
            if newest != token {
                match &result {
                    Ok(records) => debug!(
                        user = %username,
                        token,
                        newest,
                        count = records.len(),
                        "dropping superseded response"
                    ),
                    Err(e) => warn!(
                        user = %username,
                        token,
                        newest,
                        error = %e,
                        "dropping superseded failure"
                    ),
                }
                return SubmissionOutcome::Superseded;
            }
        }

        match result {
            Ok(records) => {
                info!(user = %username, count = records.len(), "rendering repositories");
                render_results(self.surface.as_ref(), &records, username.as_str());
                if records.is_empty() {
                    SubmissionOutcome::RenderedEmpty
                } else {
                    SubmissionOutcome::RenderedList {
                        rows: records.len(),
                    }
                }
            }
            Err(e) => {
                warn!(user = %username, error = %e, "lookup failed");
                self.surface.notify(e.notification());
                self.surface.flush();
                SubmissionOutcome::from(&e)
            }
        }
    }
}
