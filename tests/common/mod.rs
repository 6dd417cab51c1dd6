#![allow(dead_code)]

use anyhow::{anyhow, Result};
use candidate_intake::core::AppContext;
use candidate_intake::enrichment::{
    Enricher, EnrichmentOptions, JobRunner, PollSettings, RunSnapshot, RunStatus, Summarizer,
};
use candidate_intake::environment::ServerSettings;
use candidate_intake::intake::{AnswerLookup, FieldMapper};
use candidate_intake::record_store::{PropertySet, RecordStore};
use candidate_intake::{build_rocket, server_figment};
use rocket::local::asynchronous::Client;
use serde_json::{json, Value};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

pub const PROFILE_URL: &str = "https://www.linkedin.com/in/max-mustermann";

/// In-memory record store that remembers every call
#[derive(Default)]
pub struct RecordingStore {
    pub created: Mutex<Vec<PropertySet>>,
    pub updated: Mutex<Vec<(String, PropertySet)>>,
    pub fail_create: bool,
    pub fail_update: bool,
}

impl RecordingStore {
    pub fn failing() -> Self {
        Self {
            fail_create: true,
            ..Self::default()
        }
    }

    pub fn failing_updates() -> Self {
        Self {
            fail_update: true,
            ..Self::default()
        }
    }

    pub fn created(&self) -> Vec<PropertySet> {
        self.created.lock().unwrap().clone()
    }

    pub fn updated(&self) -> Vec<(String, PropertySet)> {
        self.updated.lock().unwrap().clone()
    }
}

#[rocket::async_trait]
impl RecordStore for RecordingStore {
    async fn create_record(&self, properties: &PropertySet) -> Result<String> {
        if self.fail_create {
            return Err(anyhow!("HTTP 401 error: unauthorized"));
        }
        let mut created = self.created.lock().unwrap();
        created.push(properties.clone());
        Ok(format!("page-{}", created.len()))
    }

    async fn update_record(&self, record_id: &str, properties: &PropertySet) -> Result<()> {
        if self.fail_update {
            return Err(anyhow!("HTTP 409 error: conflict"));
        }
        self.updated
            .lock()
            .unwrap()
            .push((record_id.to_string(), properties.clone()));
        Ok(())
    }
}

/// Job runner that replays a fixed status sequence
pub struct ScriptedRunner {
    statuses: Mutex<VecDeque<RunStatus>>,
    items: Vec<Value>,
    pub polls: AtomicU32,
    pub submitted: Mutex<Vec<String>>,
}

impl ScriptedRunner {
    pub fn new(statuses: Vec<RunStatus>, items: Vec<Value>) -> Self {
        Self {
            statuses: Mutex::new(statuses.into()),
            items,
            polls: AtomicU32::new(0),
            submitted: Mutex::new(Vec::new()),
        }
    }

    pub fn polls(&self) -> u32 {
        self.polls.load(Ordering::SeqCst)
    }
}

#[rocket::async_trait]
impl JobRunner for ScriptedRunner {
    async fn submit(&self, profile_urls: &[String]) -> Result<RunSnapshot> {
        self.submitted
            .lock()
            .unwrap()
            .extend(profile_urls.iter().cloned());
        Ok(RunSnapshot {
            run_id: Some("run-1".to_string()),
            status: RunStatus::Ready,
            dataset_id: Some("dataset-1".to_string()),
        })
    }

    async fn poll(&self, _run_id: &str) -> Result<RunSnapshot> {
        self.polls.fetch_add(1, Ordering::SeqCst);
        let status = self
            .statuses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(RunStatus::Running);
        Ok(RunSnapshot {
            run_id: Some("run-1".to_string()),
            status,
            dataset_id: Some("dataset-1".to_string()),
        })
    }

    async fn fetch_items(&self, _dataset_id: &str) -> Result<Vec<Value>> {
        Ok(self.items.clone())
    }
}

/// Summarizer returning a canned briefing
pub struct FixedSummarizer {
    pub text: String,
    pub prompts: Mutex<Vec<String>>,
}

impl FixedSummarizer {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            prompts: Mutex::new(Vec::new()),
        }
    }
}

#[rocket::async_trait]
impl Summarizer for FixedSummarizer {
    async fn summarize(&self, prompt: &str, _max_output_tokens: u32) -> Result<String> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        Ok(self.text.clone())
    }
}

/// Summarizer whose upstream always rejects the call
pub struct FailingSummarizer;

#[rocket::async_trait]
impl Summarizer for FailingSummarizer {
    async fn summarize(&self, _prompt: &str, _max_output_tokens: u32) -> Result<String> {
        Err(anyhow!("HTTP 429 error: rate limited"))
    }
}

pub fn test_options() -> EnrichmentOptions {
    EnrichmentOptions {
        poll: PollSettings {
            interval: Duration::ZERO,
            max_attempts: 5,
        },
        max_output_tokens: 256,
    }
}

pub fn context_without_enrichment(store: Arc<RecordingStore>) -> AppContext {
    AppContext::new(store, FieldMapper::new(AnswerLookup::Keyword), None)
}

pub fn context_with_enrichment(
    store: Arc<RecordingStore>,
    runner: Arc<ScriptedRunner>,
    summarizer: Arc<dyn Summarizer>,
) -> AppContext {
    let enricher = Enricher::new(store.clone(), runner, summarizer, test_options());
    AppContext::new(store, FieldMapper::new(AnswerLookup::Keyword), Some(enricher))
}

pub async fn client(context: AppContext) -> Client {
    Client::tracked(build_rocket(
        context,
        server_figment(&ServerSettings::default()),
    ))
    .await
    .expect("valid rocket instance")
}

/// Booking event as the scheduling platform sends it
pub fn booking(name: &str, email: &str, profile_url: Option<&str>) -> Value {
    let mut answers = vec![
        json!({
            "question": "Für welche Position interessieren Sie sich?",
            "answer": "DevOps Engineer"
        }),
        json!({"question": "Wie lang ist Ihre Kündigungsfrist?", "answer": "3 Monate"}),
        json!({"question": "In welcher Region suchen Sie?", "answer": "München"}),
        json!({"question": "Wie hoch ist Ihre Gehaltsvorstellung?", "answer": "85.000 €"}),
        json!({
            "question": "Welches Beschäftigungsverhältnis?",
            "answer": "Festanstellung, Freelance"
        }),
        json!({"question": "Arbeitszeit", "answer": "Vollzeit"}),
        json!({"question": "Home-Office?", "answer": "hybrid"}),
        json!({"question": "Vertragsform", "answer": "Unbefristet"}),
    ];
    if let Some(url) = profile_url {
        answers.push(json!({"question": "Ihr LinkedIn-Profil", "answer": url}));
    }

    json!({
        "event": "invitee.created",
        "payload": {
            "name": name,
            "email": email,
            "questions_and_answers": answers
        }
    })
}

pub fn profile_item() -> Value {
    json!({
        "fullName": "Max Mustermann",
        "headline": "Senior DevOps Engineer",
        "about": "Baut Plattformen seit 2012.",
        "location": "München",
        "experiences": [
            {"companyName": "Acme GmbH", "title": "Platform Lead", "caption": "2019 - heute"},
            {"companyName": "Beta AG", "title": "SRE"}
        ],
        "skills": ["Kubernetes", "Terraform"]
    })
}
