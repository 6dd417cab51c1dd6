// src/enrichment/mod.rs
//! Profile enrichment: scrape the candidate's public profile, summarize it
//! and write the result back onto the record.

pub mod briefing;
pub mod error;
pub mod job_runner;
pub mod orchestrator;
pub mod poller;
pub mod profile;
pub mod semantic_client;

pub use error::EnrichmentError;
pub use job_runner::{ApifyClient, JobRunner, RunSnapshot, RunStatus};
pub use orchestrator::{Enricher, EnrichmentOptions, EnrichmentStatus};
pub use poller::PollSettings;
pub use profile::{Experience, ScrapedProfile};
pub use semantic_client::{SemanticClient, Summarizer};
