// src/intake/mod.rs
//! Inbound booking events and their mapping onto candidate records

pub mod answers;
pub mod field_mapper;
pub mod types;

pub use answers::{AnswerField, AnswerLookup, Answers};
pub use field_mapper::{CandidateProfile, FieldMapper};
pub use types::{AnswerEntry, InboundEvent, InviteePayload, INVITEE_CREATED};
