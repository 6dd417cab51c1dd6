// src/enrichment/orchestrator.rs
use serde::{Serialize, Serializer};
use std::fmt;
use std::sync::Arc;
use tracing::{error, info};

use super::briefing::{build_prompt, enrichment_properties};
use super::error::EnrichmentError;
use super::job_runner::JobRunner;
use super::poller::{scrape_profile, PollSettings};
use super::profile::ScrapedProfile;
use super::semantic_client::Summarizer;
use crate::record_store::RecordStore;

/// Outcome reported to the webhook caller
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnrichmentStatus {
    Skipped,
    Success,
    Failed(String),
}

impl fmt::Display for EnrichmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EnrichmentStatus::Skipped => f.write_str("skipped"),
            EnrichmentStatus::Success => f.write_str("success"),
            EnrichmentStatus::Failed(reason) => write!(f, "failed: {}", reason),
        }
    }
}

impl Serialize for EnrichmentStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct EnrichmentOptions {
    pub poll: PollSettings,
    pub max_output_tokens: u32,
}

impl Default for EnrichmentOptions {
    fn default() -> Self {
        Self {
            poll: PollSettings::default(),
            max_output_tokens: 1024,
        }
    }
}

/// Scrape, summarize and write back one candidate's public profile
pub struct Enricher {
    record_store: Arc<dyn RecordStore>,
    job_runner: Arc<dyn JobRunner>,
    summarizer: Arc<dyn Summarizer>,
    options: EnrichmentOptions,
}

impl Enricher {
    pub fn new(
        record_store: Arc<dyn RecordStore>,
        job_runner: Arc<dyn JobRunner>,
        summarizer: Arc<dyn Summarizer>,
        options: EnrichmentOptions,
    ) -> Self {
        Self {
            record_store,
            job_runner,
            summarizer,
            options,
        }
    }

    /// Never fails: any error becomes `EnrichmentStatus::Failed`
    pub async fn enrich(
        &self,
        record_id: &str,
        candidate_name: &str,
        profile_url: &str,
    ) -> EnrichmentStatus {
        match self.try_enrich(record_id, candidate_name, profile_url).await {
            Ok(()) => {
                info!("Enriched record {} from {}", record_id, profile_url);
                EnrichmentStatus::Success
            }
            Err(e) => {
                error!("Enrichment of record {} failed: {}", record_id, e);
                EnrichmentStatus::Failed(e.to_string())
            }
        }
    }

    async fn try_enrich(
        &self,
        record_id: &str,
        candidate_name: &str,
        profile_url: &str,
    ) -> Result<(), EnrichmentError> {
        let item = scrape_profile(self.job_runner.as_ref(), profile_url, self.options.poll).await?;
        let profile = ScrapedProfile::from_item(&item);

        let prompt = build_prompt(candidate_name, &profile);
        let briefing = self
            .summarizer
            .summarize(&prompt, self.options.max_output_tokens)
            .await?;

        let properties = enrichment_properties(&briefing, &profile);
        self.record_store
            .update_record(record_id, &properties)
            .await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_strings() {
        assert_eq!(EnrichmentStatus::Skipped.to_string(), "skipped");
        assert_eq!(EnrichmentStatus::Success.to_string(), "success");
        assert_eq!(
            EnrichmentStatus::Failed("scrape job returned no profile data".into()).to_string(),
            "failed: scrape job returned no profile data"
        );
    }

    #[test]
    fn test_status_serializes_as_string() {
        assert_eq!(
            serde_json::to_value(EnrichmentStatus::Failed("boom".into())).unwrap(),
            serde_json::json!("failed: boom")
        );
    }
}
