// src/core/mod.rs
//! Process-wide plumbing: configuration wiring and the shared HTTP client

pub mod app_context;
pub mod config_manager;
pub mod service_client;

pub use app_context::AppContext;
pub use config_manager::{ConfigManager, Credentials};
pub use service_client::ServiceClient;
