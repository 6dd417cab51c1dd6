// src/record_store/mod.rs
use anyhow::Result;

pub mod notion_client;
pub mod properties;

pub use notion_client::NotionClient;
pub use properties::{columns, PropertySet, PropertyValue};

/// External store holding one record per candidate
#[rocket::async_trait]
pub trait RecordStore: Send + Sync {
    /// Create a record and return its identifier
    async fn create_record(&self, properties: &PropertySet) -> Result<String>;

    /// Overwrite the given properties of an existing record
    async fn update_record(&self, record_id: &str, properties: &PropertySet) -> Result<()>;
}
