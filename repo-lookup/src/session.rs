//! Interactive session
//!
//! Every input line is one form submission. Submissions run as separate
//! tasks, so the next line can be entered while earlier lookups are still in
//! flight. A line that is not valid UTF-8 is decoded lossily and submitted
//! like any other; only end of input, `quit`/`exit` or a failing reader end
//! the session.

use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::task::JoinSet;
use tracing::{debug, error, warn};

use crate::pipeline::{LookupPipeline, SubmissionOutcome};

/// Read one line, without its line ending; `None` at end of input
pub async fn read_line<R>(reader: &mut R) -> std::io::Result<Option<String>>
where
    R: AsyncBufRead + Unpin,
{
    let mut buf = Vec::new();
    if reader.read_until(b'\n', &mut buf).await? == 0 {
        return Ok(None);
    }

    if buf.ends_with(b"\n") {
        buf.pop();
        if buf.ends_with(b"\r") {
            buf.pop();
        }
    }

    Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
}

/// Submit each line of `reader` until it ends, then wait for every lookup
///
/// Returns the outcomes in completion order.
pub async fn run_session<R>(pipeline: Arc<LookupPipeline>, mut reader: R) -> Vec<SubmissionOutcome>
where
    R: AsyncBufRead + Unpin,
{
    debug!(policy = ?pipeline.policy(), "interactive session started");

    let mut inflight = JoinSet::new();
    let mut outcomes = Vec::new();

    loop {
        let line = match read_line(&mut reader).await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(e) => {
                warn!(error = %e, "stopped reading input");
                break;
            }
        };

        if matches!(line.trim(), "quit" | "exit") {
            break;
        }

        let pipeline = pipeline.clone();
        let mut field = line;
        inflight.spawn(async move { pipeline.submit(&mut field).await });

        while let Some(done) = inflight.try_join_next() {
            collect(done, &mut outcomes);
        }
    }

    while let Some(done) = inflight.join_next().await {
        collect(done, &mut outcomes);
    }

    outcomes
}

fn collect(
    done: Result<SubmissionOutcome, tokio::task::JoinError>,
    outcomes: &mut Vec<SubmissionOutcome>,
) {
    match done {
        Ok(outcome) => {
            debug!(?outcome, "submission finished");
            outcomes.push(outcome);
        }
        Err(e) => error!(error = %e, "submission task failed"),
    }
}
