// src/record_store/notion_client.rs
use anyhow::{Context, Result};
use serde::Deserialize;
use serde_json::json;
use tracing::info;

use super::{PropertySet, RecordStore};
use crate::core::ServiceClient;
use crate::environment::RecordStoreSettings;

const PAGES_ENDPOINT: &str = "/pages";
const PAGES_SEGMENT: &str = "pages";

#[derive(Debug, Deserialize)]
struct PageResponse {
    id: String,
}

/// Candidate database backed by the Notion pages API
pub struct NotionClient {
    service: ServiceClient,
    database_id: String,
}

impl NotionClient {
    pub fn new(settings: &RecordStoreSettings, api_key: &str) -> Result<Self> {
        let service = ServiceClient::with_bearer(
            &settings.base_url,
            settings.timeout_seconds,
            api_key,
            &[("Notion-Version", settings.api_version.as_str())],
        )
        .context("Failed to create Notion client")?;

        Ok(Self {
            service,
            database_id: settings.database_id.clone(),
        })
    }
}

#[rocket::async_trait]
impl RecordStore for NotionClient {
    async fn create_record(&self, properties: &PropertySet) -> Result<String> {
        let payload = json!({
            "parent": { "database_id": self.database_id },
            "properties": properties.to_json(),
        });

        let page: PageResponse = self
            .service
            .post_json(PAGES_ENDPOINT, &payload)
            .await
            .context("Failed to create Notion page")?;

        info!("Created Notion page: {}", page.id);
        Ok(page.id)
    }

    async fn update_record(&self, record_id: &str, properties: &PropertySet) -> Result<()> {
        let payload = json!({ "properties": properties.to_json() });

        let endpoint = ServiceClient::endpoint(&[PAGES_SEGMENT, record_id])?;
        let _page: PageResponse = self
            .service
            .patch_json(&endpoint, &payload)
            .await
            .with_context(|| format!("Failed to update Notion page {}", record_id))?;

        info!("Updated Notion page: {}", record_id);
        Ok(())
    }
}
