//! Vocabulary-first record extraction.

use tracing::debug;

use crate::models::config::{ExtractionConfig, PrefixCorrection, VocabEntry};
use crate::models::record::{FieldValue, VehicleRecord};

use super::rules::chassis::{extract_chassis_loose, ChassisCorrector};
use super::rules::plate::extract_plate_loose;
use super::rules::vocab::VocabularyMatcher;
use super::rules::year::extract_year_loose;
use super::RecordExtractor;

/// Extractor for documents whose labels did not survive OCR.
///
/// Make and model are resolved against controlled vocabularies instead of
/// label anchors; the remaining fields use loose patterns that tolerate
/// degraded label text. Mileage is not modeled in this mode.
pub struct VocabularyExtractor {
    makes: VocabularyMatcher,
    models: VocabularyMatcher,
    corrector: ChassisCorrector,
}

impl VocabularyExtractor {
    /// Create an extractor with the default vocabularies and corrections.
    pub fn new() -> Self {
        let defaults = ExtractionConfig::default();
        Self {
            makes: VocabularyMatcher::new(&defaults.makes),
            models: VocabularyMatcher::new(&defaults.models),
            corrector: ChassisCorrector::default(),
        }
    }

    /// Replace the make vocabulary.
    pub fn with_makes(mut self, makes: &[VocabEntry]) -> Self {
        self.makes = VocabularyMatcher::new(makes);
        self
    }

    /// Replace the model vocabulary.
    pub fn with_models(mut self, models: &[VocabEntry]) -> Self {
        self.models = VocabularyMatcher::new(models);
        self
    }

    /// Replace the chassis prefix-correction table.
    pub fn with_corrections(mut self, corrections: Vec<PrefixCorrection>) -> Self {
        self.corrector = ChassisCorrector::new(corrections);
        self
    }
}

impl Default for VocabularyExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordExtractor for VocabularyExtractor {
    fn extract(&self, text: &str) -> VehicleRecord {
        debug!("extracting record from {} characters via vocabulary scan", text.len());

        VehicleRecord {
            make: FieldValue::from_candidate(self.makes.find(text)),
            model: FieldValue::from_candidate(self.models.find(text)),
            year: FieldValue::from_candidate(extract_year_loose(text)),
            chassis: FieldValue::from_candidate(extract_chassis_loose(text, &self.corrector)),
            mileage: None,
            registration_number: FieldValue::from_candidate(extract_plate_loose(text)),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    // OCR output where most label text was lost or mangled.
    const DEGRADED_SCAN: &str = "\
veh cert
vw golf tdi
b: date of first 12 03 2015
E VIN VW2ZZZAUZFW123456
GD65 EGF
";

    #[test]
    fn resolves_fields_without_trusted_labels() {
        let record = VocabularyExtractor::new().extract(DEGRADED_SCAN);

        assert_eq!(record.make, FieldValue::Known("VOLKSWAGEN".to_string()));
        assert_eq!(record.model, FieldValue::Known("GOLF".to_string()));
        assert_eq!(record.year, FieldValue::Known("2015".to_string()));
        assert_eq!(record.chassis, FieldValue::Known("WVWZZZAUZFW123456".to_string()));
        assert_eq!(record.mileage, None);
        assert_eq!(
            record.registration_number,
            FieldValue::Known("GD65EGF".to_string())
        );
    }

    #[test]
    fn make_requires_whole_token_match() {
        let record = VocabularyExtractor::new().extract("a FORDERSON tractor built 1998");
        assert_eq!(record.make, FieldValue::Unknown);
        assert_eq!(record.year, FieldValue::Known("1998".to_string()));
    }

    #[test]
    fn unrecognizable_text_yields_all_unknown() {
        let record = VocabularyExtractor::new().extract("nothing useful here\nat all\n");

        assert_eq!(record.make, FieldValue::Unknown);
        assert_eq!(record.model, FieldValue::Unknown);
        assert_eq!(record.year, FieldValue::Unknown);
        assert_eq!(record.chassis, FieldValue::Unknown);
        assert_eq!(record.mileage, None);
        assert_eq!(record.registration_number, FieldValue::Unknown);
    }

    #[test]
    fn first_vocabulary_entry_wins() {
        let extractor = VocabularyExtractor::new().with_makes(&[
            VocabEntry::new("VOLKSWAGEN", &["VOLKSWAGEN", "VW"]),
            VocabEntry::new("FORD", &["FORD"]),
        ]);
        let record = extractor.extract("part-exchange ford for a vw");
        assert_eq!(record.make, FieldValue::Known("VOLKSWAGEN".to_string()));
    }
}
