// src/core/config_manager.rs
//! Loads configuration once at start-up and wires the outbound clients.

use anyhow::{Context, Result};
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};

use super::AppContext;
use crate::enrichment::{ApifyClient, Enricher, EnrichmentOptions, SemanticClient};
use crate::environment::EnvironmentConfig;
use crate::intake::FieldMapper;
use crate::record_store::NotionClient;

const NOTION_API_KEY: &str = "NOTION_API_KEY";
const APIFY_API_TOKEN: &str = "APIFY_API_TOKEN";
const SUMMARIZER_API_KEY: &str = "SUMMARIZER_API_KEY";

/// Secrets read from the process environment, never from config.yaml
#[derive(Clone)]
pub struct Credentials {
    pub notion_api_key: String,
    pub apify_api_token: Option<String>,
    pub summarizer_api_key: Option<String>,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("notion_api_key", &"***")
            .field("apify_api_token", &self.apify_api_token.as_ref().map(|_| "***"))
            .field(
                "summarizer_api_key",
                &self.summarizer_api_key.as_ref().map(|_| "***"),
            )
            .finish()
    }
}

impl Credentials {
    pub fn from_env() -> Result<Self> {
        let notion_api_key = std::env::var(NOTION_API_KEY)
            .with_context(|| format!("{} environment variable not set", NOTION_API_KEY))?;

        Ok(Self {
            notion_api_key,
            apify_api_token: optional_env(APIFY_API_TOKEN),
            summarizer_api_key: optional_env(SUMMARIZER_API_KEY),
        })
    }
}

fn optional_env(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.trim().is_empty())
}

#[derive(Debug, Clone)]
pub struct ConfigManager {
    pub environment: EnvironmentConfig,
    pub credentials: Credentials,
}

impl ConfigManager {
    /// Load config.yaml and secrets
    pub fn load(config_path: &Path) -> Result<Self> {
        let environment = EnvironmentConfig::load(config_path)?;
        let credentials = Credentials::from_env()?;

        Ok(Self {
            environment,
            credentials,
        })
    }

    /// Build the shared context handed to every request
    pub fn build_context(&self) -> Result<AppContext> {
        let record_store = Arc::new(NotionClient::new(
            &self.environment.record_store,
            &self.credentials.notion_api_key,
        )?);
        let mapper = FieldMapper::new(self.environment.answer_lookup);

        let enrichment = &self.environment.enrichment;
        if !enrichment.enabled {
            info!("Profile enrichment disabled by configuration");
            return Ok(AppContext::new(record_store, mapper, None));
        }

        let apify_token = self
            .credentials
            .apify_api_token
            .as_deref()
            .with_context(|| format!("{} required when enrichment is enabled", APIFY_API_TOKEN))?;
        let summarizer_key = self
            .credentials
            .summarizer_api_key
            .as_deref()
            .with_context(|| {
                format!("{} required when enrichment is enabled", SUMMARIZER_API_KEY)
            })?;

        let job_runner = Arc::new(ApifyClient::new(&enrichment.job_runner, apify_token)?);
        let summarizer = Arc::new(SemanticClient::new(&enrichment.summarizer, summarizer_key)?);

        let options = EnrichmentOptions {
            poll: (&enrichment.poll).into(),
            max_output_tokens: enrichment.summarizer.max_output_tokens,
        };
        if options.poll.max_attempts == 0 {
            warn!("poll.max_attempts is 0, every enrichment will time out");
        }

        info!(
            "Profile enrichment enabled (actor {}, {} polls every {:?})",
            enrichment.job_runner.actor_id, options.poll.max_attempts, options.poll.interval
        );

        let enricher = Enricher::new(record_store.clone(), job_runner, summarizer, options);
        Ok(AppContext::new(record_store, mapper, Some(enricher)))
    }
}
