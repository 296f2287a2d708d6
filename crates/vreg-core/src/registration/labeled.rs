//! Label-anchored record extraction.

use tracing::debug;

use crate::models::config::PrefixCorrection;
use crate::models::record::{FieldValue, VehicleRecord};

use super::rules::chassis::{extract_chassis_labeled, ChassisCorrector};
use super::rules::mileage::extract_mileage;
use super::rules::patterns::{MAKE_LABELED, MODEL_LABELED};
use super::rules::plate::extract_plate_labeled;
use super::rules::year::extract_year_labeled;
use super::RecordExtractor;

/// Extractor for documents whose printed labels survived OCR.
///
/// Every field is anchored to its document label (`D.1: Make`,
/// `D.3: Model`, ...); the registration number additionally gets a
/// footer scan, since plates are often stamped at the bottom of the
/// document rather than next to the label.
pub struct LabeledExtractor {
    corrector: ChassisCorrector,
}

impl LabeledExtractor {
    pub fn new() -> Self {
        Self {
            corrector: ChassisCorrector::default(),
        }
    }

    /// Replace the chassis prefix-correction table.
    pub fn with_corrections(mut self, corrections: Vec<PrefixCorrection>) -> Self {
        self.corrector = ChassisCorrector::new(corrections);
        self
    }
}

impl Default for LabeledExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordExtractor for LabeledExtractor {
    fn extract(&self, text: &str) -> VehicleRecord {
        debug!("extracting record from {} characters of labeled text", text.len());

        let make = MAKE_LABELED.captures(text).map(|caps| caps[1].to_uppercase());
        let model = MODEL_LABELED.captures(text).map(|caps| caps[1].trim().to_string());

        VehicleRecord {
            make: FieldValue::from_candidate(make),
            model: FieldValue::from_candidate(model),
            year: FieldValue::from_candidate(extract_year_labeled(text)),
            chassis: FieldValue::from_candidate(extract_chassis_labeled(text, &self.corrector)),
            mileage: Some(FieldValue::from_candidate(extract_mileage(text))),
            registration_number: FieldValue::from_candidate(extract_plate_labeled(text)),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const CERTIFICATE: &str = "\
DVLA Registration Certificate
Registration Number
GD65 EGF
D.1: Make VOLKSWAGEN
D.3: Model GOLF
B: Date of first registration 01 09 2015
E: VIN/Chassis/Frame No WVWZZZAUZFW123456
Mileage (optional): 23,500
";

    #[test]
    fn extracts_all_fields_from_certificate() {
        let record = LabeledExtractor::new().extract(CERTIFICATE);

        assert_eq!(record.make, FieldValue::Known("VOLKSWAGEN".to_string()));
        assert_eq!(record.model, FieldValue::Known("GOLF".to_string()));
        assert_eq!(record.year, FieldValue::Known("2015".to_string()));
        assert_eq!(record.chassis, FieldValue::Known("WVWZZZAUZFW123456".to_string()));
        assert_eq!(record.mileage, Some(FieldValue::Known("23500".to_string())));
        assert_eq!(
            record.registration_number,
            FieldValue::Known("GD65EGF".to_string())
        );
    }

    #[test]
    fn unrecognizable_text_yields_all_unknown() {
        let record = LabeledExtractor::new().extract("completely unrelated words\nand more\n");

        assert_eq!(record.make, FieldValue::Unknown);
        assert_eq!(record.model, FieldValue::Unknown);
        assert_eq!(record.year, FieldValue::Unknown);
        assert_eq!(record.chassis, FieldValue::Unknown);
        assert_eq!(record.mileage, Some(FieldValue::Unknown));
        assert_eq!(record.registration_number, FieldValue::Unknown);
    }

    #[test]
    fn model_stops_at_following_label() {
        let text = "D.3: Model GOLF GTI D.5 Body type\n";
        let record = LabeledExtractor::new().extract(text);
        assert_eq!(record.model, FieldValue::Known("GOLF GTI".to_string()));
    }

    #[test]
    fn chassis_correction_applies_before_record_is_built() {
        let text = "E: VIN/Chassis/Frame No VW2ZZZAUZFW123456\n";
        let record = LabeledExtractor::new().extract(text);
        assert_eq!(record.chassis, FieldValue::Known("WVWZZZAUZFW123456".to_string()));
    }

    #[test]
    fn empty_input_never_panics() {
        let record = LabeledExtractor::new().extract("");
        assert_eq!(record.make, FieldValue::Unknown);
        assert_eq!(record.registration_number, FieldValue::Unknown);
    }
}
