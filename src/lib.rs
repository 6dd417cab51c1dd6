//! Candidate intake service: turns interview bookings into recruiting
//! pipeline records and enriches them with a profile briefing.

pub mod core;
pub mod enrichment;
pub mod environment;
pub mod intake;
pub mod record_store;
pub mod utils;
pub mod web;

pub use web::{build_rocket, server_figment, start_web_server};
