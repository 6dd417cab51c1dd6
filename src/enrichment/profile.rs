// src/enrichment/profile.rs
//! Canonical shape of a scraped profile.
//!
//! Scraper actors disagree on key names (`company` vs `companyName`, `about`
//! vs `summary`, ...). Every fallback is resolved here, once; the rest of the
//! crate only sees `ScrapedProfile`.

use serde_json::Value;

const FULL_NAME_KEYS: &[&str] = &["fullName", "full_name", "name"];
const FIRST_NAME_KEYS: &[&str] = &["firstName", "first_name"];
const LAST_NAME_KEYS: &[&str] = &["lastName", "last_name"];
const HEADLINE_KEYS: &[&str] = &["headline", "title", "occupation"];
const ABOUT_KEYS: &[&str] = &["about", "summary", "description"];
const LOCATION_KEYS: &[&str] = &["location", "addressWithCountry", "geoLocationName"];
const EXPERIENCE_KEYS: &[&str] = &["experiences", "experience", "positions"];
const SKILL_KEYS: &[&str] = &["skills", "topSkillsByEndorsements"];

const COMPANY_KEYS: &[&str] = &["company", "companyName", "subtitle"];
const TITLE_KEYS: &[&str] = &["title", "position", "jobTitle"];
const DURATION_KEYS: &[&str] = &["duration", "caption", "dateRange", "timePeriod"];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScrapedProfile {
    pub full_name: String,
    pub headline: String,
    pub about: String,
    pub location: String,
    pub experiences: Vec<Experience>,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Experience {
    pub company: Option<String>,
    pub title: Option<String>,
    pub duration: Option<String>,
}

impl ScrapedProfile {
    /// Normalize one dataset item
    pub fn from_item(item: &Value) -> Self {
        let full_name = first_text(item, FULL_NAME_KEYS).unwrap_or_else(|| {
            [first_text(item, FIRST_NAME_KEYS), first_text(item, LAST_NAME_KEYS)]
                .into_iter()
                .flatten()
                .collect::<Vec<_>>()
                .join(" ")
        });

        let experiences = first_array(item, EXPERIENCE_KEYS)
            .map(|entries| {
                entries
                    .iter()
                    .map(Experience::from_item)
                    .filter(|experience| !experience.is_empty())
                    .collect()
            })
            .unwrap_or_default();

        let skills = first_array(item, SKILL_KEYS)
            .map(|entries| entries.iter().filter_map(skill_name).collect())
            .unwrap_or_default();

        Self {
            full_name,
            headline: first_text(item, HEADLINE_KEYS).unwrap_or_default(),
            about: first_text(item, ABOUT_KEYS).unwrap_or_default(),
            location: first_text(item, LOCATION_KEYS).unwrap_or_default(),
            experiences,
            skills,
        }
    }
}

impl Experience {
    fn from_item(item: &Value) -> Self {
        Self {
            company: first_text(item, COMPANY_KEYS),
            title: first_text(item, TITLE_KEYS),
            duration: first_text(item, DURATION_KEYS),
        }
    }

    fn is_empty(&self) -> bool {
        self.company.is_none() && self.title.is_none() && self.duration.is_none()
    }
}

/// First non-empty string (or number) found under any of `keys`
fn first_text(item: &Value, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| match item.get(*key)? {
        Value::String(text) if !text.trim().is_empty() => Some(text.trim().to_string()),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    })
}

fn first_array<'a>(item: &'a Value, keys: &[&str]) -> Option<&'a Vec<Value>> {
    keys.iter()
        .find_map(|key| item.get(*key)?.as_array().filter(|entries| !entries.is_empty()))
}

fn skill_name(entry: &Value) -> Option<String> {
    match entry {
        Value::String(name) if !name.trim().is_empty() => Some(name.trim().to_string()),
        Value::Object(_) => first_text(entry, &["name", "title"]),
        _ => None,
    }
}
