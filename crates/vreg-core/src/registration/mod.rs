//! Vehicle registration field extraction module.

mod labeled;
mod vocabulary;
pub mod rules;

pub use labeled::LabeledExtractor;
pub use vocabulary::VocabularyExtractor;

use crate::models::config::{ExtractionConfig, ExtractionMode};
use crate::models::record::VehicleRecord;

/// Trait for record extractors.
///
/// Extraction never fails on malformed input: in the worst case every
/// field of the returned record is unknown. Implementations hold no
/// shared mutable state, so concurrent invocations are safe.
pub trait RecordExtractor {
    /// Extract a vehicle record from raw recognized text.
    fn extract(&self, text: &str) -> VehicleRecord;
}

/// Build the extractor selected by the configuration.
pub fn extractor_for(config: &ExtractionConfig) -> Box<dyn RecordExtractor> {
    match config.mode {
        ExtractionMode::Labeled => Box::new(
            LabeledExtractor::new().with_corrections(config.chassis_corrections.clone()),
        ),
        ExtractionMode::Vocabulary => Box::new(
            VocabularyExtractor::new()
                .with_makes(&config.makes)
                .with_models(&config.models)
                .with_corrections(config.chassis_corrections.clone()),
        ),
    }
}
