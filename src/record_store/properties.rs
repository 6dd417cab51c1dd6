// src/record_store/properties.rs
//! Typed property slots of the candidate database and their wire encoding.

use serde_json::{json, Map, Value};
use std::collections::BTreeMap;

/// Column names of the candidate database
pub mod columns {
    pub const NAME: &str = "Name";
    pub const EMAIL: &str = "E-Mail";
    pub const POSITION: &str = "Position";
    pub const NOTICE_PERIOD: &str = "Kündigungsfrist";
    pub const DESIRED_REGION: &str = "Gesuchte Region";
    pub const SALARY_EXPECTATION: &str = "Gehaltsvorstellung";
    pub const EMPLOYMENT_TYPE: &str = "Beschäftigungsverhältnis";
    pub const WORK_TIME: &str = "Arbeitszeit";
    pub const WORK_LOCATION: &str = "Home-Office";
    pub const CONTRACT_FORM: &str = "Vertragsform";
    pub const PROFILE_URL: &str = "LinkedIn URL";
    pub const PIPELINE_STATUS: &str = "Pipeline Status";
    pub const BRIEFING: &str = "Briefing";
    pub const FORMER_EMPLOYERS: &str = "Ehemalige Arbeitgeber";
    pub const PROFILE_HEADLINE: &str = "LinkedIn Headline";
    pub const PROFILE_SUMMARY: &str = "LinkedIn Zusammenfassung";
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyValue {
    Title(String),
    /// `None` is written as an explicit null
    Email(Option<String>),
    RichText(String),
    Select(String),
    MultiSelect(Vec<String>),
    Url(String),
    Status(String),
}

impl PropertyValue {
    pub fn to_json(&self) -> Value {
        match self {
            PropertyValue::Title(text) => json!({ "title": [text_object(text)] }),
            PropertyValue::Email(email) => json!({ "email": email }),
            PropertyValue::RichText(text) => json!({ "rich_text": [text_object(text)] }),
            PropertyValue::Select(name) => json!({ "select": { "name": name } }),
            PropertyValue::MultiSelect(names) => json!({
                "multi_select": names.iter().map(|name| json!({ "name": name })).collect::<Vec<_>>()
            }),
            PropertyValue::Url(url) => json!({ "url": url }),
            PropertyValue::Status(name) => json!({ "status": { "name": name } }),
        }
    }

    /// Plain text carried by text-like slots
    pub fn as_text(&self) -> Option<&str> {
        match self {
            PropertyValue::Title(text)
            | PropertyValue::RichText(text)
            | PropertyValue::Select(text)
            | PropertyValue::Url(text)
            | PropertyValue::Status(text) => Some(text.as_str()),
            PropertyValue::Email(email) => email.as_deref(),
            PropertyValue::MultiSelect(_) => None,
        }
    }
}

fn text_object(content: &str) -> Value {
    json!({ "text": { "content": content } })
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertySet {
    values: BTreeMap<String, PropertyValue>,
}

impl PropertySet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: &str, value: PropertyValue) {
        self.values.insert(name.to_string(), value);
    }

    pub fn with(mut self, name: &str, value: PropertyValue) -> Self {
        self.insert(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&PropertyValue> {
        self.values.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn to_json(&self) -> Value {
        let map: Map<String, Value> = self
            .values
            .iter()
            .map(|(name, value)| (name.clone(), value.to_json()))
            .collect();
        Value::Object(map)
    }
}
