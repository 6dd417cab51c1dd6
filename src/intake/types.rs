// src/intake/types.rs
use serde::{Deserialize, Serialize};

/// Scheduling event that creates a candidate record
pub const INVITEE_CREATED: &str = "invitee.created";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InboundEvent {
    /// Absent or null on malformed deliveries; those are acknowledged and ignored
    #[serde(default)]
    pub event: Option<String>,
    #[serde(default)]
    pub payload: serde_json::Value,
}

impl InboundEvent {
    pub fn is_invitee_created(&self) -> bool {
        self.event.as_deref() == Some(INVITEE_CREATED)
    }

    /// Decode the free-form payload as an invitee
    pub fn invitee(&self) -> Result<InviteePayload, serde_json::Error> {
        if self.payload.is_null() {
            return Ok(InviteePayload::default());
        }
        serde_json::from_value(self.payload.clone())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InviteePayload {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub questions_and_answers: Option<Vec<AnswerEntry>>,
}

impl InviteePayload {
    pub fn answers(&self) -> &[AnswerEntry] {
        self.questions_and_answers.as_deref().unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnswerEntry {
    #[serde(default)]
    pub question: Option<String>,
    #[serde(default)]
    pub answer: Option<String>,
}

impl AnswerEntry {
    pub fn new(question: &str, answer: &str) -> Self {
        Self {
            question: Some(question.to_string()),
            answer: Some(answer.to_string()),
        }
    }

    pub fn question(&self) -> &str {
        self.question.as_deref().unwrap_or_default()
    }

    pub fn answer(&self) -> &str {
        self.answer.as_deref().unwrap_or_default()
    }
}
