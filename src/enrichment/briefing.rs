// src/enrichment/briefing.rs
use super::profile::{Experience, ScrapedProfile};
use crate::record_store::{columns, PropertySet, PropertyValue};
use crate::utils::truncate_chars;

/// Length limit of a single text value in the record store
pub const RECORD_TEXT_LIMIT: usize = 2000;
pub const MAX_LISTED_EMPLOYERS: usize = 10;

pub const FALLBACK_BRIEFING: &str = "Kein Briefing verfügbar.";
pub const NO_EMPLOYERS: &str = "Keine Angaben gefunden";
const UNKNOWN_COMPANY: &str = "Unbekannt";

/// Prompt asking the summarizer for a recruiter briefing
pub fn build_prompt(candidate_name: &str, profile: &ScrapedProfile) -> String {
    let experiences = if profile.experiences.is_empty() {
        NO_EMPLOYERS.to_string()
    } else {
        profile
            .experiences
            .iter()
            .map(employer_line)
            .collect::<Vec<_>>()
            .join("\n")
    };

    let skills = profile.skills.join(", ");

    format!(
        r#"Du bist Recruiting-Assistent und bereitest ein Erstgespräch vor.

KANDIDAT: {}
NAME LAUT PROFIL: {}
HEADLINE: {}
STANDORT: {}

ÜBER MICH:
{}

BERUFSERFAHRUNG:
{}

SKILLS:
{}

AUFGABE: Erstelle ein kompaktes Briefing auf Deutsch mit:
1. **Kurzprofil** - zwei Sätze zu Erfahrung und Schwerpunkt
2. **Stärken** - die drei auffälligsten Stärken
3. **Offene Fragen** - drei Fragen für das Gespräch

Bleib sachlich und unter 1500 Zeichen."#,
        candidate_name,
        or_dash(&profile.full_name),
        or_dash(&profile.headline),
        or_dash(&profile.location),
        or_dash(&profile.about),
        experiences,
        or_dash(&skills)
    )
}

/// Bulleted list of the most recent employers
pub fn format_employers(experiences: &[Experience]) -> String {
    if experiences.is_empty() {
        return NO_EMPLOYERS.to_string();
    }

    experiences
        .iter()
        .take(MAX_LISTED_EMPLOYERS)
        .map(employer_line)
        .collect::<Vec<_>>()
        .join("\n")
}

fn employer_line(experience: &Experience) -> String {
    let mut line = format!(
        "• {}",
        experience.company.as_deref().unwrap_or(UNKNOWN_COMPANY)
    );
    if let Some(title) = &experience.title {
        line.push_str(&format!(" - {}", title));
    }
    if let Some(duration) = &experience.duration {
        line.push_str(&format!(" ({})", duration));
    }
    line
}

fn or_dash(value: &str) -> &str {
    if value.is_empty() {
        "-"
    } else {
        value
    }
}

/// Fields written back to the record after a successful scrape
pub fn enrichment_properties(briefing: &str, profile: &ScrapedProfile) -> PropertySet {
    let briefing = if briefing.trim().is_empty() {
        FALLBACK_BRIEFING
    } else {
        briefing.trim()
    };

    PropertySet::new()
        .with(columns::BRIEFING, record_text(briefing))
        .with(
            columns::FORMER_EMPLOYERS,
            record_text(&format_employers(&profile.experiences)),
        )
        .with(columns::PROFILE_HEADLINE, record_text(&profile.headline))
        .with(columns::PROFILE_SUMMARY, record_text(&profile.about))
}

fn record_text(text: &str) -> PropertyValue {
    PropertyValue::RichText(truncate_chars(text, RECORD_TEXT_LIMIT))
}
