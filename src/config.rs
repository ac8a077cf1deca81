//! Fixed configuration data for the extraction pipeline.
//!
//! Everything here is data, not logic: the part-of-speech whitelist, the
//! mapping from provider role labels to recognized structural roles, person
//! labels with their cell positions, and the lookup defaults. The tables are
//! perfect-hash maps resolved at compile time.

use std::time::Duration;

use phf::{phf_map, phf_set};

/// Heading rank of language sections.
pub const LANGUAGE_RANK: u8 = 2;

/// Heading ranks at which grammatical categories may appear.
pub const CATEGORY_RANKS: [u8; 2] = [3, 4];

/// Characters the source markup uses to disambiguate same-named duplicate
/// heading anchors. An anchor containing one of these is not a language
/// heading.
pub const DISAMBIGUATION_DELIMITERS: [char; 2] = ['_', '-'];

/// Separator between dialect variants recorded in a single table cell.
pub const VARIANT_SEPARATOR: char = ',';

/// Grammatical category names recognized as section headings.
pub static CATEGORY_NAMES: phf::Set<&'static str> = phf_set! {
    "Abbreviation",
    "Adjective",
    "Adverb",
    "Article",
    "Conjunction",
    "Contraction",
    "Determiner",
    "Expression",
    "Interjection",
    "Noun",
    "Numeral",
    "Particle",
    "Postposition",
    "Preposition",
    "Pronoun",
    "Proper noun",
    "Verb",
};

/// Recognized role of a table row's rail-header cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowRole {
    /// Indicative/subjunctive tense row: six person columns, vós skipped.
    TenseRail,
    /// Imperative row: five person columns, vós skipped.
    ImperativeRail,
    /// Non-finite form row: singular/plural columns.
    NonFinite,
}

/// Role labels of rail-header cells inside conjugation tables.
pub static ROW_ROLES: phf::Map<&'static str, RowRole> = phf_map! {
    "indicative-rail" => RowRole::TenseRail,
    "subjunctive-rail" => RowRole::TenseRail,
    "imperative-rail" => RowRole::ImperativeRail,
    "nonfinite-header" => RowRole::NonFinite,
};

/// Role label of conjugation tables.
pub const INFLECTION_TABLE_LABEL: &str = "inflection-table";

/// Role labels of footnote containers below conjugation tables.
pub static FOOTNOTE_LABELS: phf::Set<&'static str> = phf_set! {
    "footnote-inner",
    "footnote-outer",
};

/// Role labels of subtrees stripped from definition list items.
pub static STRIP_LABELS: phf::Set<&'static str> = phf_set! {
    "usage-example",
    "quotation",
    "citation",
    "style",
};

/// Person labels of indicative/subjunctive tense rows, with the data-cell
/// index each one reads. Index 4 is the vós column, which is skipped.
pub const FINITE_PERSONS: [(&str, usize); 5] = [
    ("eu", 0),
    ("tu", 1),
    ("ele", 2),
    ("nós", 3),
    ("eles", 5),
];

/// Person labels of imperative rows, with the data-cell index each one
/// reads. Index 3 is the vós column, which is skipped.
pub const IMPERATIVE_PERSONS: [(&str, usize); 4] =
    [("tu", 0), ("ele", 1), ("nós", 2), ("eles", 4)];

/// Person labels of non-finite form rows.
pub const NONFINITE_PERSONS: [&str; 2] = ["singular", "plural"];

/// Default time-to-live of cache entries.
pub const DEFAULT_TTL: Duration = Duration::from_secs(24 * 60 * 60);

/// Default target language.
pub const DEFAULT_LANGUAGE: &str = "Portuguese";

/// Default dialect label matched against footnote text.
pub const DEFAULT_DIALECT: &str = "European Portuguese";

/// Tunable lookup options.
#[derive(Debug, Clone)]
pub struct LookupOptions {
    /// Cache entry time-to-live.
    pub ttl: Duration,
    /// Language section selected by [`crate::WordService::lookup`].
    pub language: String,
    /// Dialect label matched against footnote text when resolving
    /// multi-variant table cells.
    pub dialect: String,
}

impl Default for LookupOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl LookupOptions {
    /// Create options with the defaults: 24 h TTL, Portuguese, European
    /// Portuguese dialect.
    pub fn new() -> Self {
        Self {
            ttl: DEFAULT_TTL,
            language: DEFAULT_LANGUAGE.to_string(),
            dialect: DEFAULT_DIALECT.to_string(),
        }
    }

    /// Set the cache time-to-live.
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    /// Set the default language.
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Set the dialect label.
    pub fn with_dialect(mut self, dialect: impl Into<String>) -> Self {
        self.dialect = dialect.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_whitelist() {
        assert!(CATEGORY_NAMES.contains("Verb"));
        assert!(CATEGORY_NAMES.contains("Proper noun"));
        assert!(!CATEGORY_NAMES.contains("Etymology"));
        assert!(!CATEGORY_NAMES.contains("verb"));
    }

    #[test]
    fn test_row_roles() {
        assert_eq!(ROW_ROLES.get("indicative-rail"), Some(&RowRole::TenseRail));
        assert_eq!(
            ROW_ROLES.get("subjunctive-rail"),
            Some(&RowRole::TenseRail)
        );
        assert_eq!(
            ROW_ROLES.get("imperative-rail"),
            Some(&RowRole::ImperativeRail)
        );
        assert_eq!(ROW_ROLES.get("nonfinite-header"), Some(&RowRole::NonFinite));
        assert_eq!(ROW_ROLES.get("plain-cell"), None);
    }

    #[test]
    fn test_options_builder() {
        let options = LookupOptions::new()
            .with_ttl(Duration::from_secs(60))
            .with_language("Galician")
            .with_dialect("Brazilian Portuguese");
        assert_eq!(options.ttl, Duration::from_secs(60));
        assert_eq!(options.language, "Galician");
        assert_eq!(options.dialect, "Brazilian Portuguese");
    }

    #[test]
    fn test_person_positions_skip_vos() {
        let finite: Vec<usize> = FINITE_PERSONS.iter().map(|&(_, i)| i).collect();
        assert!(!finite.contains(&4));
        let imperative: Vec<usize> = IMPERATIVE_PERSONS.iter().map(|&(_, i)| i).collect();
        assert!(!imperative.contains(&3));
    }
}
