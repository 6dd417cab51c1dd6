// src/enrichment/semantic_client.rs
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::core::ServiceClient;
use crate::environment::SummarizerSettings;

const CHAT_ENDPOINT: &str = "/chat/completions";

/// Generative text service producing the candidate briefing
#[rocket::async_trait]
pub trait Summarizer: Send + Sync {
    /// Generated text, possibly empty
    async fn summarize(&self, prompt: &str, max_output_tokens: u32) -> Result<String>;
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatReply,
}

#[derive(Debug, Deserialize)]
struct ChatReply {
    #[serde(default)]
    content: Option<String>,
}

impl ChatResponse {
    fn into_text(self) -> String {
        self.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .unwrap_or_default()
    }
}

/// Chat-completions client
pub struct SemanticClient {
    service: ServiceClient,
    model: String,
}

impl SemanticClient {
    pub fn new(settings: &SummarizerSettings, api_key: &str) -> Result<Self> {
        let service = ServiceClient::with_bearer(
            &settings.base_url,
            settings.timeout_seconds,
            api_key,
            &[],
        )
        .context("Failed to create summarizer client")?;

        Ok(Self {
            service,
            model: settings.model.clone(),
        })
    }
}

#[rocket::async_trait]
impl Summarizer for SemanticClient {
    async fn summarize(&self, prompt: &str, max_output_tokens: u32) -> Result<String> {
        let request = ChatRequest {
            model: &self.model,
            max_tokens: max_output_tokens,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
        };

        info!("Sending briefing request to {} ({})", CHAT_ENDPOINT, self.model);

        let response: ChatResponse = self
            .service
            .post_json(CHAT_ENDPOINT, &request)
            .await
            .context("Summarizer request failed")?;

        Ok(response.into_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_shape() {
        let request = ChatRequest {
            model: "gpt-4o-mini",
            max_tokens: 1024,
            messages: vec![ChatMessage {
                role: "user",
                content: "Hallo",
            }],
        };

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "model": "gpt-4o-mini",
                "max_tokens": 1024,
                "messages": [{"role": "user", "content": "Hallo"}]
            })
        );
    }

    #[test]
    fn test_response_text() {
        let response: ChatResponse = serde_json::from_value(json!({
            "choices": [{"message": {"role": "assistant", "content": "Briefing"}}]
        }))
        .unwrap();
        assert_eq!(response.into_text(), "Briefing");
    }

    #[test]
    fn test_empty_response_is_empty_text() {
        let response: ChatResponse = serde_json::from_value(json!({"choices": []})).unwrap();
        assert_eq!(response.into_text(), "");

        let response: ChatResponse = serde_json::from_value(json!({
            "choices": [{"message": {"content": null}}]
        }))
        .unwrap();
        assert_eq!(response.into_text(), "");
    }
}
