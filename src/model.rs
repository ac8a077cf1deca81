//! Structured records produced by the extraction pipeline.
//!
//! This is the output contract consumed by a presentation layer, serialized
//! verbatim; any reordering for display is the consumer's concern.

use serde::{Deserialize, Serialize};

/// One conjugated form: a person label and the spelling for it.
///
/// Person labels are fixed: `eu, tu, ele, nós, eles` for finite tenses,
/// `tu, ele, nós, eles` for the imperative, `singular, plural` for
/// non-finite forms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConjugationForm {
    /// Person label.
    pub person: String,
    /// Conjugated spelling.
    pub form: String,
}

impl ConjugationForm {
    /// Create a form.
    pub fn new(person: impl Into<String>, form: impl Into<String>) -> Self {
        Self {
            person: person.into(),
            form: form.into(),
        }
    }
}

/// A named tense (or non-finite form) with its forms in table order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConjugationTense {
    /// Tense name as printed in the table's left rail.
    pub name: String,
    /// Forms, in person order.
    pub forms: Vec<ConjugationForm>,
}

/// A named mood block (Indicative, Subjunctive, ...) with its tenses in
/// document order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConjugationBlock {
    /// Block name from the table's section-header row.
    pub name: String,
    /// Tenses, in document order.
    pub tenses: Vec<ConjugationTense>,
}

/// One grammatical category of a word: its name, glosses, and (for verbs)
/// conjugation blocks.
///
/// `conjugations` is `None` when the category's section contains no
/// conjugation tables; the pipeline never produces `Some(vec![])`. Absence
/// and emptiness are distinct states and only absence is serialized away.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryInfo {
    /// Category name (Noun, Verb, ...).
    pub name: String,
    /// Glosses in document order, duplicates preserved.
    pub definitions: Vec<String>,
    /// Conjugation blocks, present only for conjugated entries.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conjugations: Option<Vec<ConjugationBlock>>,
}

/// The full structured record for one word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordRecord {
    /// The looked-up word, lowercased.
    pub word: String,
    /// Categories in document order of their headings, duplicates preserved.
    pub categories: Vec<CategoryInfo>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conjugations_absent_is_omitted_from_json() {
        let info = CategoryInfo {
            name: "Noun".to_string(),
            definitions: vec!["whirlpool".to_string()],
            conjugations: None,
        };
        let json = serde_json::to_value(&info).unwrap();
        assert!(json.get("conjugations").is_none());
    }

    #[test]
    fn test_conjugations_present_is_serialized() {
        let info = CategoryInfo {
            name: "Verb".to_string(),
            definitions: vec![],
            conjugations: Some(vec![ConjugationBlock {
                name: "Indicative".to_string(),
                tenses: vec![ConjugationTense {
                    name: "Present".to_string(),
                    forms: vec![ConjugationForm::new("eu", "espero")],
                }],
            }]),
        };
        let json = serde_json::to_value(&info).unwrap();
        assert_eq!(
            json["conjugations"][0]["tenses"][0]["forms"][0]["form"],
            "espero"
        );
    }

    #[test]
    fn test_record_round_trips_through_json() {
        let record = WordRecord {
            word: "vir".to_string(),
            categories: vec![CategoryInfo {
                name: "Verb".to_string(),
                definitions: vec!["to come".to_string()],
                conjugations: None,
            }],
        };
        let json = serde_json::to_string(&record).unwrap();
        let back: WordRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }
}
