// src/enrichment/job_runner.rs
use anyhow::{Context, Result};
use serde::Deserialize;
use serde_json::{Map, Value};
use std::fmt;
use tracing::info;

use crate::core::ServiceClient;
use crate::environment::JobRunnerSettings;

/// Status of a scrape run as reported by the job runner
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunStatus {
    Ready,
    Running,
    Succeeded,
    Failed,
    Aborting,
    Aborted,
    TimingOut,
    TimedOut,
    Other(String),
}

impl RunStatus {
    pub fn parse(status: &str) -> Self {
        match status.trim().to_ascii_uppercase().replace('_', "-").as_str() {
            "READY" => RunStatus::Ready,
            "RUNNING" => RunStatus::Running,
            "SUCCEEDED" => RunStatus::Succeeded,
            "FAILED" => RunStatus::Failed,
            "ABORTING" => RunStatus::Aborting,
            "ABORTED" => RunStatus::Aborted,
            "TIMING-OUT" => RunStatus::TimingOut,
            "TIMED-OUT" => RunStatus::TimedOut,
            _ => RunStatus::Other(status.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            RunStatus::Ready => "READY",
            RunStatus::Running => "RUNNING",
            RunStatus::Succeeded => "SUCCEEDED",
            RunStatus::Failed => "FAILED",
            RunStatus::Aborting => "ABORTING",
            RunStatus::Aborted => "ABORTED",
            RunStatus::TimingOut => "TIMING-OUT",
            RunStatus::TimedOut => "TIMED-OUT",
            RunStatus::Other(status) => status.as_str(),
        }
    }

    /// Terminal states other than success
    pub fn is_failure(&self) -> bool {
        matches!(
            self,
            RunStatus::Failed | RunStatus::Aborted | RunStatus::TimedOut
        )
    }
}

impl fmt::Display for RunStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Point-in-time view of a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSnapshot {
    pub run_id: Option<String>,
    pub status: RunStatus,
    pub dataset_id: Option<String>,
}

/// External asynchronous task runner used to scrape profile pages
#[rocket::async_trait]
pub trait JobRunner: Send + Sync {
    async fn submit(&self, profile_urls: &[String]) -> Result<RunSnapshot>;

    async fn poll(&self, run_id: &str) -> Result<RunSnapshot>;

    async fn fetch_items(&self, dataset_id: &str) -> Result<Vec<Value>>;
}

#[derive(Debug, Deserialize)]
struct RunEnvelope {
    data: RunData,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RunData {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    default_dataset_id: Option<String>,
}

impl From<RunData> for RunSnapshot {
    fn from(data: RunData) -> Self {
        Self {
            run_id: data.id.filter(|id| !id.is_empty()),
            status: RunStatus::parse(data.status.as_deref().unwrap_or("READY")),
            dataset_id: data.default_dataset_id.filter(|id| !id.is_empty()),
        }
    }
}

/// Apify actor runs
pub struct ApifyClient {
    service: ServiceClient,
    actor_id: String,
    input_field: String,
}

impl ApifyClient {
    pub fn new(settings: &JobRunnerSettings, api_token: &str) -> Result<Self> {
        let service =
            ServiceClient::with_bearer(&settings.base_url, settings.timeout_seconds, api_token, &[])
                .context("Failed to create Apify client")?;

        Ok(Self {
            service,
            actor_id: settings.actor_id.clone(),
            input_field: settings.input_field.clone(),
        })
    }

    fn run_input(&self, profile_urls: &[String]) -> Value {
        let mut input = Map::new();
        input.insert(self.input_field.clone(), Value::from(profile_urls.to_vec()));
        Value::Object(input)
    }
}

#[rocket::async_trait]
impl JobRunner for ApifyClient {
    async fn submit(&self, profile_urls: &[String]) -> Result<RunSnapshot> {
        info!("Starting actor {} for {} profile(s)", self.actor_id, profile_urls.len());

        let endpoint = ServiceClient::endpoint(&["acts", &self.actor_id, "runs"])?;
        let envelope: RunEnvelope = self
            .service
            .post_json(&endpoint, &self.run_input(profile_urls))
            .await
            .with_context(|| format!("Failed to start actor {}", self.actor_id))?;

        Ok(envelope.data.into())
    }

    async fn poll(&self, run_id: &str) -> Result<RunSnapshot> {
        let endpoint = ServiceClient::endpoint(&["actor-runs", run_id])?;
        let envelope: RunEnvelope = self
            .service
            .get(&endpoint)
            .await
            .with_context(|| format!("Failed to fetch status of run {}", run_id))?;

        Ok(envelope.data.into())
    }

    async fn fetch_items(&self, dataset_id: &str) -> Result<Vec<Value>> {
        let endpoint = ServiceClient::endpoint(&["datasets", dataset_id, "items"])?;
        self.service
            .get(&format!("{}?format=json&clean=true", endpoint))
            .await
            .with_context(|| format!("Failed to fetch items of dataset {}", dataset_id))
    }
}
