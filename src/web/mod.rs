// src/web/mod.rs
//! HTTP surface: the booking webhook plus health and CORS plumbing

pub mod cors_utils;
pub mod error;
pub mod handlers;
pub mod types;

pub use cors_utils::Cors;
pub use error::ApiError;
pub use types::*;

use anyhow::{anyhow, Result};
use rocket::data::{Limits, ToByteUnit};
use rocket::figment::Figment;
use rocket::serde::json::Json;
use rocket::{
    catchers, delete, get, patch, post, put, routes, Build, Config, Request, Rocket, State,
};
use tracing::info;

use crate::core::AppContext;
use crate::environment::ServerSettings;
use error::{INTERNAL_ERROR, INVALID_PAYLOAD};

#[post("/calendly-webhook", data = "<body>")]
pub async fn calendly_webhook(
    body: String,
    context: &State<AppContext>,
) -> Result<Json<WebhookReply>, ApiError> {
    handlers::calendly_webhook_handler(body, context).await
}

#[get("/calendly-webhook")]
pub fn calendly_webhook_get() -> ApiError {
    ApiError::MethodNotAllowed
}

#[put("/calendly-webhook")]
pub fn calendly_webhook_put() -> ApiError {
    ApiError::MethodNotAllowed
}

#[patch("/calendly-webhook")]
pub fn calendly_webhook_patch() -> ApiError {
    ApiError::MethodNotAllowed
}

#[delete("/calendly-webhook")]
pub fn calendly_webhook_delete() -> ApiError {
    ApiError::MethodNotAllowed
}

#[get("/health")]
pub async fn health() -> Json<&'static str> {
    handlers::health_handler().await
}

// Error catchers
#[rocket::catch(400)]
pub fn bad_request() -> Json<ErrorResponse> {
    Json(ErrorResponse::new(INVALID_PAYLOAD, None))
}

#[rocket::catch(404)]
pub fn not_found(request: &Request) -> Json<ErrorResponse> {
    Json(ErrorResponse::new(
        "Not found",
        Some(format!("No route for {} {}", request.method(), request.uri())),
    ))
}

#[rocket::catch(413)]
pub fn payload_too_large() -> Json<ErrorResponse> {
    Json(ErrorResponse::new(
        INVALID_PAYLOAD,
        Some("Request body too large".to_string()),
    ))
}

#[rocket::catch(422)]
pub fn unprocessable_entity() -> Json<ErrorResponse> {
    Json(ErrorResponse::new(INVALID_PAYLOAD, None))
}

#[rocket::catch(500)]
pub fn internal_error() -> Json<ErrorResponse> {
    Json(ErrorResponse::new(INTERNAL_ERROR, None))
}

/// Rocket configuration for the given bind settings
pub fn server_figment(settings: &ServerSettings) -> Figment {
    Config::figment()
        .merge(("address", settings.address))
        .merge(("port", settings.port))
        .merge(("limits", Limits::default().limit("string", 1.mebibytes())))
}

pub fn build_rocket(context: AppContext, figment: Figment) -> Rocket<Build> {
    rocket::custom(figment)
        .attach(Cors)
        .manage(context)
        .register(
            "/api",
            catchers![
                bad_request,
                not_found,
                payload_too_large,
                unprocessable_entity,
                internal_error
            ],
        )
        .mount(
            "/api",
            routes![
                calendly_webhook,
                calendly_webhook_get,
                calendly_webhook_put,
                calendly_webhook_patch,
                calendly_webhook_delete,
                health,
                cors_utils::universal_options_handler,
            ],
        )
}

// Main server start function
pub async fn start_web_server(context: AppContext, settings: &ServerSettings) -> Result<()> {
    info!(
        "Starting intake server on {}:{}",
        settings.address, settings.port
    );

    build_rocket(context, server_figment(settings))
        .launch()
        .await
        .map_err(|e| anyhow!("Server failed: {}", e))?;

    Ok(())
}
