// src/core/app_context.rs
use std::sync::Arc;

use crate::enrichment::Enricher;
use crate::intake::FieldMapper;
use crate::record_store::RecordStore;

/// Everything a request needs, built once and shared read-only
pub struct AppContext {
    pub record_store: Arc<dyn RecordStore>,
    pub mapper: FieldMapper,
    /// `None` when enrichment is switched off
    pub enricher: Option<Enricher>,
}

impl AppContext {
    pub fn new(
        record_store: Arc<dyn RecordStore>,
        mapper: FieldMapper,
        enricher: Option<Enricher>,
    ) -> Self {
        Self {
            record_store,
            mapper,
            enricher,
        }
    }
}

impl std::fmt::Debug for AppContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppContext").finish_non_exhaustive()
    }
}
