// src/enrichment/poller.rs
//! Submit a scrape run, wait for it, fetch its single result.
//!
//! The run moves `SUBMITTED -> RUNNING* -> {SUCCEEDED | FAILED | ABORTED |
//! TIMED-OUT}` on the runner's side. When the attempt budget runs out first
//! the run is treated as timed out locally; the remote run is left alone.

use serde_json::Value;
use std::time::Duration;
use tracing::{debug, info, warn};

use super::error::EnrichmentError;
use super::job_runner::{JobRunner, RunSnapshot, RunStatus};
use crate::environment::PollSettingsFile;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollSettings {
    pub interval: Duration,
    pub max_attempts: u32,
}

impl Default for PollSettings {
    fn default() -> Self {
        (&PollSettingsFile::default()).into()
    }
}

impl From<&PollSettingsFile> for PollSettings {
    fn from(file: &PollSettingsFile) -> Self {
        Self {
            interval: file.interval(),
            max_attempts: file.max_attempts,
        }
    }
}

/// Run the scraper for one profile and return the first dataset item
pub async fn scrape_profile(
    runner: &dyn JobRunner,
    profile_url: &str,
    settings: PollSettings,
) -> Result<Value, EnrichmentError> {
    let submitted = runner.submit(&[profile_url.to_string()]).await?;
    let run_id = submitted.run_id.ok_or(EnrichmentError::Submission)?;
    info!("Scrape run {} submitted for {}", run_id, profile_url);

    let finished = wait_for_completion(runner, &run_id, settings).await?;
    let dataset_id = finished.dataset_id.ok_or(EnrichmentError::NoData)?;

    let items = runner.fetch_items(&dataset_id).await?;
    debug!("Dataset {} returned {} item(s)", dataset_id, items.len());

    items.into_iter().next().ok_or(EnrichmentError::NoData)
}

/// Poll `run_id` until it succeeds, fails, or the attempt budget is spent.
/// Each attempt sleeps first, then asks for the status.
pub async fn wait_for_completion(
    runner: &dyn JobRunner,
    run_id: &str,
    settings: PollSettings,
) -> Result<RunSnapshot, EnrichmentError> {
    for attempt in 1..=settings.max_attempts {
        tokio::time::sleep(settings.interval).await;

        let snapshot = runner.poll(run_id).await?;
        debug!(
            "Run {} status {} (attempt {}/{})",
            run_id, snapshot.status, attempt, settings.max_attempts
        );

        if snapshot.status == RunStatus::Succeeded {
            info!("Run {} succeeded after {} attempt(s)", run_id, attempt);
            return Ok(snapshot);
        }
        if snapshot.status.is_failure() {
            warn!("Run {} ended with status {}", run_id, snapshot.status);
            return Err(EnrichmentError::JobFailed(snapshot.status));
        }
    }

    warn!(
        "Run {} still not finished after {} attempts",
        run_id, settings.max_attempts
    );
    Err(EnrichmentError::Timeout {
        attempts: settings.max_attempts,
    })
}
