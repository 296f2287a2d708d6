//! Whole-token vocabulary matching for makes and models.

use regex::Regex;
use tracing::debug;

use crate::models::config::VocabEntry;

/// A controlled vocabulary compiled for whole-token, case-insensitive
/// matching. Entries are tried in declaration order; the first entry with
/// any synonym occurrence in the text wins.
pub struct VocabularyMatcher {
    entries: Vec<(String, Vec<Regex>)>,
}

impl VocabularyMatcher {
    /// Compile a vocabulary. A synonym that is empty or fails to compile
    /// is dropped rather than failing the whole vocabulary.
    pub fn new(vocabulary: &[VocabEntry]) -> Self {
        let entries = vocabulary
            .iter()
            .map(|entry| {
                let synonyms = entry
                    .synonyms
                    .iter()
                    .filter(|syn| !syn.trim().is_empty())
                    .filter_map(|syn| {
                        Regex::new(&format!(r"(?i)\b{}\b", regex::escape(syn))).ok()
                    })
                    .collect();
                (entry.canonical.clone(), synonyms)
            })
            .collect();
        Self { entries }
    }

    /// Canonical value of the first entry with a whole-token synonym
    /// occurrence in the text.
    pub fn find(&self, text: &str) -> Option<String> {
        for (canonical, synonyms) in &self.entries {
            if synonyms.iter().any(|re| re.is_match(text)) {
                debug!("vocabulary match: {}", canonical);
                return Some(canonical.clone());
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn makes() -> VocabularyMatcher {
        VocabularyMatcher::new(&[
            VocabEntry::new("VOLKSWAGEN", &["VOLKSWAGEN", "VW"]),
            VocabEntry::new("FORD", &["FORD"]),
        ])
    }

    #[test]
    fn matches_synonym_to_canonical_value() {
        assert_eq!(
            makes().find("a vw golf, one owner").as_deref(),
            Some("VOLKSWAGEN")
        );
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(makes().find("FORD FIESTA").as_deref(), Some("FORD"));
        assert_eq!(makes().find("ford fiesta").as_deref(), Some("FORD"));
    }

    #[test]
    fn requires_whole_token_occurrence() {
        // "FORD" must not match inside "FORDERSON".
        assert_eq!(makes().find("a FORDERSON tractor"), None);
    }

    #[test]
    fn declaration_order_breaks_ties() {
        let text = "trade-in: ford against a volkswagen";
        assert_eq!(makes().find(text).as_deref(), Some("VOLKSWAGEN"));
    }

    #[test]
    fn hyphenated_synonyms_match_whole() {
        let vocab = VocabularyMatcher::new(&[VocabEntry::new(
            "MERCEDES-BENZ",
            &["MERCEDES-BENZ", "MERCEDES"],
        )]);
        assert_eq!(
            vocab.find("a Mercedes-Benz saloon").as_deref(),
            Some("MERCEDES-BENZ")
        );
    }
}
