// src/web/error.rs
use rocket::http::Status;
use rocket::response::{self, Responder};
use rocket::serde::json::Json;
use rocket::Request;
use thiserror::Error;

use super::types::ErrorResponse;

pub const METHOD_NOT_ALLOWED: &str = "Method not allowed";
pub const INVALID_PAYLOAD: &str = "Invalid request payload";
pub const INTERNAL_ERROR: &str = "Internal server error";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Invalid request payload: {0}")]
    Validation(String),

    #[error("{0:#}")]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    pub fn status(&self) -> Status {
        match self {
            ApiError::MethodNotAllowed => Status::MethodNotAllowed,
            ApiError::Validation(_) => Status::BadRequest,
            ApiError::Internal(_) => Status::InternalServerError,
        }
    }

    fn body(&self) -> ErrorResponse {
        match self {
            ApiError::MethodNotAllowed => ErrorResponse::new(METHOD_NOT_ALLOWED, None),
            ApiError::Validation(message) => {
                ErrorResponse::new(INVALID_PAYLOAD, Some(message.clone()))
            }
            ApiError::Internal(e) => ErrorResponse::new(INTERNAL_ERROR, Some(format!("{:#}", e))),
        }
    }
}

impl<'r> Responder<'r, 'static> for ApiError {
    fn respond_to(self, request: &'r Request<'_>) -> response::Result<'static> {
        (self.status(), Json(self.body())).respond_to(request)
    }
}
