// src/intake/answers.rs
//! Answer lookup over the booking form's question/answer list.
//!
//! Two strategies exist. `Keyword` picks the first answer whose question
//! contains a marker word and survives reordering of the form. `Positional`
//! reads a fixed slot (1-based) and only works while the form keeps its
//! original question order.

use serde::Deserialize;

use super::types::AnswerEntry;
use crate::utils::contains_ignore_case;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnswerLookup {
    #[default]
    Keyword,
    Positional,
}

/// A form field addressable by either strategy
#[derive(Debug, Clone, Copy)]
pub struct AnswerField {
    pub keyword: &'static str,
    pub position: usize,
}

pub struct Answers<'a> {
    entries: &'a [AnswerEntry],
    lookup: AnswerLookup,
}

impl<'a> Answers<'a> {
    pub fn new(entries: &'a [AnswerEntry], lookup: AnswerLookup) -> Self {
        Self { entries, lookup }
    }

    /// Trimmed answer for `field`, empty when the form has none
    pub fn get(&self, field: &AnswerField) -> String {
        let answer = match self.lookup {
            AnswerLookup::Keyword => self.by_keyword(field.keyword),
            AnswerLookup::Positional => self.by_position(field.position),
        };
        answer.trim().to_string()
    }

    fn by_keyword(&self, keyword: &str) -> &'a str {
        self.entries
            .iter()
            .find(|entry| contains_ignore_case(entry.question(), keyword))
            .map(AnswerEntry::answer)
            .unwrap_or_default()
    }

    fn by_position(&self, position: usize) -> &'a str {
        position
            .checked_sub(1)
            .and_then(|index| self.entries.get(index))
            .map(AnswerEntry::answer)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SALARY: AnswerField = AnswerField {
        keyword: "gehalt",
        position: 2,
    };

    fn entries() -> Vec<AnswerEntry> {
        vec![
            AnswerEntry::new("Welche Position suchen Sie?", "Backend Engineer"),
            AnswerEntry::new("Ihre Gehaltsvorstellung", " 80.000 € "),
            AnswerEntry::new("Gehalt (alternativ)", "90.000 €"),
        ]
    }

    #[test]
    fn test_keyword_lookup_takes_first_match() {
        let entries = entries();
        let answers = Answers::new(&entries, AnswerLookup::Keyword);
        assert_eq!(answers.get(&SALARY), "80.000 €");
    }

    #[test]
    fn test_keyword_lookup_survives_reordering() {
        let mut entries = entries();
        entries.swap(0, 1);
        let answers = Answers::new(&entries, AnswerLookup::Keyword);
        assert_eq!(answers.get(&SALARY), "80.000 €");
    }

    #[test]
    fn test_keyword_lookup_without_match_is_empty() {
        let entries = entries();
        let answers = Answers::new(&entries, AnswerLookup::Keyword);
        let missing = AnswerField {
            keyword: "linkedin",
            position: 9,
        };
        assert_eq!(answers.get(&missing), "");
    }

    #[test]
    fn test_positional_lookup() {
        let mut entries = entries();
        let answers = Answers::new(&entries, AnswerLookup::Positional);
        assert_eq!(answers.get(&SALARY), "80.000 €");

        entries.swap(0, 1);
        let answers = Answers::new(&entries, AnswerLookup::Positional);
        assert_eq!(answers.get(&SALARY), "Backend Engineer");
    }

    #[test]
    fn test_positional_lookup_out_of_range_is_empty() {
        let entries = entries();
        let answers = Answers::new(&entries, AnswerLookup::Positional);
        let zero = AnswerField {
            keyword: "x",
            position: 0,
        };
        let far = AnswerField {
            keyword: "x",
            position: 42,
        };
        assert_eq!(answers.get(&zero), "");
        assert_eq!(answers.get(&far), "");
    }
}
