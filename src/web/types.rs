// src/web/types.rs
use rocket::serde::Serialize;

use crate::enrichment::EnrichmentStatus;

pub const EVENT_IGNORED: &str = "Event ignored";

#[derive(Debug, Serialize)]
#[serde(crate = "rocket::serde", rename_all = "camelCase")]
pub struct WebhookResponse {
    pub success: bool,
    pub record_id: String,
    pub candidate_name: String,
    pub enrichment: EnrichmentStatus,
}

#[derive(Debug, Serialize)]
#[serde(crate = "rocket::serde")]
pub struct IgnoredResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event: Option<String>,
}

/// Either body the webhook answers with on 200
#[derive(Debug, Serialize)]
#[serde(crate = "rocket::serde", untagged)]
pub enum WebhookReply {
    Processed(WebhookResponse),
    Ignored(IgnoredResponse),
}

#[derive(Debug, Serialize)]
#[serde(crate = "rocket::serde")]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl WebhookResponse {
    pub fn success(
        record_id: String,
        candidate_name: String,
        enrichment: EnrichmentStatus,
    ) -> Self {
        Self {
            success: true,
            record_id,
            candidate_name,
            enrichment,
        }
    }
}

impl IgnoredResponse {
    pub fn new(event: Option<String>) -> Self {
        Self {
            message: EVENT_IGNORED.to_string(),
            event,
        }
    }
}

impl ErrorResponse {
    pub fn new(error: &str, message: Option<String>) -> Self {
        Self {
            error: error.to_string(),
            message,
        }
    }
}
