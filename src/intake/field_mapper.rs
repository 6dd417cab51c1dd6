// src/intake/field_mapper.rs
use super::answers::{AnswerField, AnswerLookup, Answers};
use super::types::InviteePayload;
use crate::record_store::{columns, PropertySet, PropertyValue};
use crate::utils::{contains_ignore_case, non_empty};

pub const PLACEHOLDER_NAME: &str = "Unbekannter Kandidat";
pub const PIPELINE_STATUS_NEW: &str = "Neu eingegangen";
pub const PROFILE_URL_MARKER: &str = "linkedin.com";

pub const EMPLOYMENT_TYPES: &[&str] = &["ANÜ", "Festanstellung", "Freelance"];
pub const WORK_TIMES: &[&str] = &["Vollzeit", "Teilzeit", "Flexibel"];
pub const WORK_LOCATIONS: &[&str] = &["Remote", "Hybrid", "Vor Ort", "Flexibel"];
pub const CONTRACT_FORMS: &[&str] = &["Unbefristet", "Befristet", "Projektarbeit"];

pub mod fields {
    use super::AnswerField;

    pub const POSITION: AnswerField = AnswerField {
        keyword: "position",
        position: 1,
    };
    pub const NOTICE_PERIOD: AnswerField = AnswerField {
        keyword: "kündigungsfrist",
        position: 2,
    };
    pub const DESIRED_REGION: AnswerField = AnswerField {
        keyword: "region",
        position: 3,
    };
    pub const SALARY_EXPECTATION: AnswerField = AnswerField {
        keyword: "gehalt",
        position: 4,
    };
    pub const EMPLOYMENT_TYPE: AnswerField = AnswerField {
        keyword: "beschäftigungsverhältnis",
        position: 5,
    };
    pub const WORK_TIME: AnswerField = AnswerField {
        keyword: "arbeitszeit",
        position: 6,
    };
    pub const WORK_LOCATION: AnswerField = AnswerField {
        keyword: "home",
        position: 7,
    };
    pub const CONTRACT_FORM: AnswerField = AnswerField {
        keyword: "vertragsform",
        position: 8,
    };
    pub const PROFILE_URL: AnswerField = AnswerField {
        keyword: "linkedin",
        position: 9,
    };
}

/// Canonical candidate extracted from one booking
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateProfile {
    pub name: String,
    pub email: Option<String>,
    pub position: String,
    pub notice_period: String,
    pub desired_region: String,
    pub salary_expectation: String,
    pub employment_types: Vec<String>,
    pub work_time: Option<String>,
    pub work_location: Option<String>,
    pub contract_forms: Vec<String>,
    pub profile_url: Option<String>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FieldMapper {
    lookup: AnswerLookup,
}

impl FieldMapper {
    pub fn new(lookup: AnswerLookup) -> Self {
        Self { lookup }
    }

    pub fn map(&self, invitee: &InviteePayload) -> CandidateProfile {
        let answers = Answers::new(invitee.answers(), self.lookup);

        CandidateProfile {
            name: non_empty(invitee.name.as_deref())
                .unwrap_or(PLACEHOLDER_NAME)
                .to_string(),
            email: non_empty(invitee.email.as_deref()).map(str::to_string),
            position: answers.get(&fields::POSITION),
            notice_period: answers.get(&fields::NOTICE_PERIOD),
            desired_region: answers.get(&fields::DESIRED_REGION),
            salary_expectation: answers.get(&fields::SALARY_EXPECTATION),
            employment_types: select_many(&answers.get(&fields::EMPLOYMENT_TYPE), EMPLOYMENT_TYPES),
            work_time: select_one(&answers.get(&fields::WORK_TIME), WORK_TIMES),
            work_location: select_one(&answers.get(&fields::WORK_LOCATION), WORK_LOCATIONS),
            contract_forms: select_many(&answers.get(&fields::CONTRACT_FORM), CONTRACT_FORMS),
            profile_url: profile_url(&answers.get(&fields::PROFILE_URL)),
        }
    }
}

impl CandidateProfile {
    /// Property set used to create the record
    pub fn to_properties(&self) -> PropertySet {
        let mut properties = PropertySet::new()
            .with(columns::NAME, PropertyValue::Title(self.name.clone()))
            .with(columns::EMAIL, PropertyValue::Email(self.email.clone()))
            .with(columns::POSITION, PropertyValue::RichText(self.position.clone()))
            .with(columns::NOTICE_PERIOD, PropertyValue::RichText(self.notice_period.clone()))
            .with(columns::DESIRED_REGION, PropertyValue::RichText(self.desired_region.clone()))
            .with(
                columns::SALARY_EXPECTATION,
                PropertyValue::RichText(self.salary_expectation.clone()),
            )
            .with(
                columns::PIPELINE_STATUS,
                PropertyValue::Status(PIPELINE_STATUS_NEW.to_string()),
            );

        if !self.employment_types.is_empty() {
            properties.insert(
                columns::EMPLOYMENT_TYPE,
                PropertyValue::MultiSelect(self.employment_types.clone()),
            );
        }
        if let Some(work_time) = &self.work_time {
            properties.insert(columns::WORK_TIME, PropertyValue::Select(work_time.clone()));
        }
        if let Some(work_location) = &self.work_location {
            properties.insert(
                columns::WORK_LOCATION,
                PropertyValue::Select(work_location.clone()),
            );
        }
        if !self.contract_forms.is_empty() {
            properties.insert(
                columns::CONTRACT_FORM,
                PropertyValue::MultiSelect(self.contract_forms.clone()),
            );
        }
        if let Some(url) = &self.profile_url {
            properties.insert(columns::PROFILE_URL, PropertyValue::Url(url.clone()));
        }

        properties
    }
}

/// Comma-separated answer filtered against an allow-list (exact match)
pub fn select_many(raw: &str, allowed: &[&str]) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|value| allowed.contains(value))
        .map(str::to_string)
        .collect()
}

/// First allow-listed option contained in the answer, ignoring case
pub fn select_one(raw: &str, allowed: &[&str]) -> Option<String> {
    if raw.trim().is_empty() {
        return None;
    }
    allowed
        .iter()
        .find(|option| contains_ignore_case(raw, option))
        .map(|option| option.to_string())
}

pub fn profile_url(raw: &str) -> Option<String> {
    let url = raw.trim();
    url.contains(PROFILE_URL_MARKER).then(|| url.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intake::AnswerEntry;

    fn invitee(
        name: Option<&str>,
        email: Option<&str>,
        answers: Vec<AnswerEntry>,
    ) -> InviteePayload {
        InviteePayload {
            name: name.map(str::to_string),
            email: email.map(str::to_string),
            questions_and_answers: Some(answers),
        }
    }

    fn full_form() -> Vec<AnswerEntry> {
        vec![
            AnswerEntry::new("Für welche Position interessieren Sie sich?", "DevOps Engineer"),
            AnswerEntry::new("Wie lang ist Ihre Kündigungsfrist?", "3 Monate"),
            AnswerEntry::new("In welcher Region suchen Sie?", "München"),
            AnswerEntry::new("Ihre Gehaltsvorstellung?", "85.000 €"),
            AnswerEntry::new("Gewünschtes Beschäftigungsverhältnis", "ANÜ, Freelance, Invalid"),
            AnswerEntry::new("Arbeitszeit", "Am liebsten Vollzeit"),
            AnswerEntry::new("Home-Office", "Ich arbeite gerne hybrid"),
            AnswerEntry::new("Vertragsform", "Befristet"),
            AnswerEntry::new("Ihr LinkedIn-Profil", "https://linkedin.com/in/max"),
        ]
    }

    #[test]
    fn test_select_many_keeps_allowed_values() {
        assert_eq!(
            select_many("ANÜ, Freelance, Invalid", EMPLOYMENT_TYPES),
            vec!["ANÜ".to_string(), "Freelance".to_string()]
        );
        assert!(select_many("Invalid, other", EMPLOYMENT_TYPES).is_empty());
        assert!(select_many("", EMPLOYMENT_TYPES).is_empty());
    }

    #[test]
    fn test_select_one_matches_case_insensitive_substring() {
        assert_eq!(
            select_one("Ich arbeite gerne hybrid", WORK_LOCATIONS),
            Some("Hybrid".to_string())
        );
        assert_eq!(select_one("VOR ORT bitte", WORK_LOCATIONS), Some("Vor Ort".to_string()));
        assert_eq!(select_one("egal", WORK_LOCATIONS), None);
        assert_eq!(select_one("", WORK_LOCATIONS), None);
    }

    #[test]
    fn test_select_one_first_allowed_option_wins() {
        assert_eq!(
            select_one("remote oder flexibel", WORK_LOCATIONS),
            Some("Remote".to_string())
        );
        assert_eq!(
            select_one("flexibel, sonst remote", WORK_LOCATIONS),
            Some("Remote".to_string())
        );
    }

    #[test]
    fn test_profile_url_requires_marker() {
        assert_eq!(
            profile_url("https://linkedin.com/in/x"),
            Some("https://linkedin.com/in/x".to_string())
        );
        assert_eq!(profile_url("https://example.com"), None);
        assert_eq!(profile_url(""), None);
    }

    #[test]
    fn test_map_full_form() {
        let mapper = FieldMapper::new(AnswerLookup::Keyword);
        let candidate = mapper.map(&invitee(
            Some("Max Mustermann"),
            Some("max@example.com"),
            full_form(),
        ));

        assert_eq!(candidate.name, "Max Mustermann");
        assert_eq!(candidate.email.as_deref(), Some("max@example.com"));
        assert_eq!(candidate.position, "DevOps Engineer");
        assert_eq!(candidate.notice_period, "3 Monate");
        assert_eq!(candidate.desired_region, "München");
        assert_eq!(candidate.salary_expectation, "85.000 €");
        assert_eq!(candidate.employment_types, vec!["ANÜ", "Freelance"]);
        assert_eq!(candidate.work_time.as_deref(), Some("Vollzeit"));
        assert_eq!(candidate.work_location.as_deref(), Some("Hybrid"));
        assert_eq!(candidate.contract_forms, vec!["Befristet"]);
        assert_eq!(candidate.profile_url.as_deref(), Some("https://linkedin.com/in/max"));

        let properties = candidate.to_properties();
        assert_eq!(properties.len(), 12);
        assert_eq!(
            properties.get(columns::PIPELINE_STATUS),
            Some(&PropertyValue::Status(PIPELINE_STATUS_NEW.to_string()))
        );
    }

    #[test]
    fn test_positional_lookup_matches_fixed_form_order() {
        let mut form = full_form();
        for entry in form.iter_mut() {
            entry.question = Some("Frage".to_string());
        }

        let candidate =
            FieldMapper::new(AnswerLookup::Positional).map(&invitee(Some("Max"), None, form));
        assert_eq!(candidate.position, "DevOps Engineer");
        assert_eq!(candidate.work_location.as_deref(), Some("Hybrid"));
        assert_eq!(candidate.profile_url.as_deref(), Some("https://linkedin.com/in/max"));
    }

    #[test]
    fn test_missing_email_and_name() {
        let candidate = FieldMapper::default().map(&invitee(None, Some("  "), vec![]));

        assert_eq!(candidate.name, PLACEHOLDER_NAME);
        assert_eq!(candidate.email, None);

        let properties = candidate.to_properties();
        assert_eq!(properties.get(columns::EMAIL), Some(&PropertyValue::Email(None)));
        assert_eq!(
            properties.get(columns::POSITION),
            Some(&PropertyValue::RichText(String::new()))
        );
    }

    #[test]
    fn test_unmatched_categories_are_omitted() {
        let form = vec![
            AnswerEntry::new("Beschäftigungsverhältnis", "Praktikum"),
            AnswerEntry::new("Arbeitszeit", "Nachts"),
            AnswerEntry::new("Home-Office", "weiß nicht"),
            AnswerEntry::new("Vertragsform", "Werkvertrag"),
            AnswerEntry::new("LinkedIn", "https://example.com"),
        ];
        let properties = FieldMapper::default()
            .map(&invitee(Some("Erika"), None, form))
            .to_properties();

        for column in [
            columns::EMPLOYMENT_TYPE,
            columns::WORK_TIME,
            columns::WORK_LOCATION,
            columns::CONTRACT_FORM,
            columns::PROFILE_URL,
        ] {
            assert!(!properties.contains(column), "{} should be omitted", column);
        }
    }
}
