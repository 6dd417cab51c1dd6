// src/web/handlers/webhook_handlers.rs
use anyhow::Context;
use rocket::serde::json::Json;
use rocket::State;
use tracing::{error, info, info_span, warn, Instrument};
use uuid::Uuid;

use crate::core::AppContext;
use crate::enrichment::EnrichmentStatus;
use crate::intake::InboundEvent;
use crate::web::error::ApiError;
use crate::web::types::{IgnoredResponse, WebhookReply, WebhookResponse};

pub async fn calendly_webhook_handler(
    body: String,
    context: &State<AppContext>,
) -> Result<Json<WebhookReply>, ApiError> {
    let request_id = Uuid::new_v4();
    process_booking(&body, context.inner())
        .instrument(info_span!("webhook", %request_id))
        .await
        .map(Json)
}

/// Parses a booking event, stores the candidate and optionally enriches the record
pub async fn process_booking(body: &str, context: &AppContext) -> Result<WebhookReply, ApiError> {
    let event: InboundEvent = serde_json::from_str(body).map_err(|e| {
        warn!("Rejected webhook body: {}", e);
        ApiError::Validation(e.to_string())
    })?;

    if !event.is_invitee_created() {
        info!("Ignoring event {:?}", event.event);
        return Ok(WebhookReply::Ignored(IgnoredResponse::new(event.event)));
    }

    let invitee = event.invitee().map_err(|e| {
        warn!("Rejected invitee payload: {}", e);
        ApiError::Validation(e.to_string())
    })?;

    let candidate = context.mapper.map(&invitee);
    info!(
        "Booking received for '{}' ({} answers)",
        candidate.name,
        invitee.answers().len()
    );

    let record_id = context
        .record_store
        .create_record(&candidate.to_properties())
        .await
        .context("Failed to create candidate record")
        .map_err(|e| {
            error!("{:#}", e);
            e
        })?;
    info!("Created record {}", record_id);

    let enrichment = match (&context.enricher, &candidate.profile_url) {
        (Some(enricher), Some(url)) => enricher.enrich(&record_id, &candidate.name, url).await,
        (None, Some(_)) => {
            info!("Enrichment disabled, skipping profile lookup");
            EnrichmentStatus::Skipped
        }
        (_, None) => EnrichmentStatus::Skipped,
    };

    Ok(WebhookReply::Processed(WebhookResponse::success(
        record_id,
        candidate.name,
        enrichment,
    )))
}
