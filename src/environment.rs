// src/environment.rs
use anyhow::{Context, Result};
use serde::Deserialize;
use std::net::{IpAddr, Ipv4Addr};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::intake::AnswerLookup;

#[derive(Debug, Clone, Deserialize)]
pub struct EnvironmentConfig {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub answer_lookup: AnswerLookup,
    pub record_store: RecordStoreSettings,
    pub enrichment: EnrichmentSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub address: IpAddr,
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            address: IpAddr::V4(Ipv4Addr::new(127, 0, 0, 1)),
            port: 8000,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RecordStoreSettings {
    pub base_url: String,
    pub database_id: String,
    #[serde(default = "default_notion_version")]
    pub api_version: String,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EnrichmentSettings {
    #[serde(default = "default_true")]
    pub enabled: bool,
    pub job_runner: JobRunnerSettings,
    #[serde(default)]
    pub poll: PollSettingsFile,
    pub summarizer: SummarizerSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JobRunnerSettings {
    pub base_url: String,
    /// Actor that scrapes a profile page. Revisions disagreed on which actor
    /// returns usable data, so it is never hardcoded.
    pub actor_id: String,
    #[serde(default = "default_input_field")]
    pub input_field: String,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PollSettingsFile {
    pub interval_seconds: u64,
    pub max_attempts: u32,
}

impl Default for PollSettingsFile {
    fn default() -> Self {
        Self {
            interval_seconds: 3,
            max_attempts: 30,
        }
    }
}

impl PollSettingsFile {
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_seconds)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SummarizerSettings {
    pub base_url: String,
    pub model: String,
    #[serde(default = "default_max_output_tokens")]
    pub max_output_tokens: u32,
    #[serde(default = "default_summarizer_timeout")]
    pub timeout_seconds: u64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoggingSettings {
    #[serde(default)]
    pub json: bool,
    pub file: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
struct ConfigFile {
    local: EnvironmentConfig,
    production: EnvironmentConfig,
}

fn default_true() -> bool {
    true
}

fn default_notion_version() -> String {
    "2022-06-28".to_string()
}

fn default_timeout_seconds() -> u64 {
    30
}

fn default_summarizer_timeout() -> u64 {
    60
}

fn default_input_field() -> String {
    "profileUrls".to_string()
}

fn default_max_output_tokens() -> u32 {
    1024
}

impl EnvironmentConfig {
    /// Load the section of `config_path` matching the current environment
    pub fn load(config_path: &Path) -> Result<Self> {
        let environment = Self::get_environment();

        if !config_path.exists() {
            anyhow::bail!(
                "{} not found. Server cannot start without configuration.",
                config_path.display()
            );
        }

        let config_content = std::fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read {}", config_path.display()))?;

        Self::from_yaml(&config_content, &environment)
            .with_context(|| format!("Failed to parse {}", config_path.display()))
    }

    pub fn from_yaml(content: &str, environment: &str) -> Result<Self> {
        let config_file: ConfigFile =
            serde_yaml::from_str(content).context("Invalid configuration YAML")?;

        Ok(match environment {
            "production" => config_file.production,
            _ => config_file.local,
        })
    }

    pub fn get_environment() -> String {
        std::env::var("INTAKE_ENV")
            .or_else(|_| std::env::var("ENVIRONMENT"))
            .or_else(|_| std::env::var("ENV"))
            .unwrap_or_else(|_| "local".to_string())
    }
}
