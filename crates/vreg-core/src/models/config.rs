//! Configuration structures for extraction.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, VregError};

/// Main configuration for the vreg pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct VregConfig {
    /// Field extraction configuration.
    pub extraction: ExtractionConfig,
}

/// Which extraction strategy to run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtractionMode {
    /// Printed document labels are trusted and fields are anchored to them.
    #[default]
    Labeled,
    /// Labels are unreliable; trusted value lists are scanned instead.
    Vocabulary,
}

/// Field extraction configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Extraction strategy to use.
    pub mode: ExtractionMode,

    /// Controlled vocabulary of vehicle makes.
    pub makes: Vec<VocabEntry>,

    /// Controlled vocabulary of model designations.
    pub models: Vec<VocabEntry>,

    /// Ordered chassis prefix corrections for known OCR misreads.
    pub chassis_corrections: Vec<PrefixCorrection>,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            mode: ExtractionMode::default(),
            makes: default_makes(),
            models: default_models(),
            chassis_corrections: PrefixCorrection::defaults(),
        }
    }
}

/// A canonical value with its acceptable surface synonyms.
///
/// Entries are matched in declaration order; the first entry with any
/// synonym occurrence in the text wins.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VocabEntry {
    /// Value reported when any synonym matches.
    pub canonical: String,
    /// Synonyms matched whole-token and case-insensitively.
    pub synonyms: Vec<String>,
}

impl VocabEntry {
    pub fn new(canonical: &str, synonyms: &[&str]) -> Self {
        Self {
            canonical: canonical.to_string(),
            synonyms: synonyms.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// An observed OCR misread of a chassis prefix and its correction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrefixCorrection {
    /// Prefix as the OCR engine reads it.
    pub observed: String,
    /// Prefix as it appears on the vehicle.
    pub corrected: String,
}

impl PrefixCorrection {
    /// Corrections observed on real scans.
    pub fn defaults() -> Vec<Self> {
        vec![Self {
            observed: "VW2".to_string(),
            corrected: "WVW".to_string(),
        }]
    }
}

fn default_makes() -> Vec<VocabEntry> {
    vec![
        VocabEntry::new("VOLKSWAGEN", &["VOLKSWAGEN", "VW"]),
        VocabEntry::new("FORD", &["FORD"]),
        VocabEntry::new("VAUXHALL", &["VAUXHALL", "OPEL"]),
        VocabEntry::new("TOYOTA", &["TOYOTA"]),
        VocabEntry::new("BMW", &["BMW"]),
        VocabEntry::new("AUDI", &["AUDI"]),
        VocabEntry::new("SKODA", &["SKODA"]),
        VocabEntry::new("MERCEDES-BENZ", &["MERCEDES-BENZ", "MERCEDES"]),
        VocabEntry::new("NISSAN", &["NISSAN"]),
        VocabEntry::new("HONDA", &["HONDA"]),
    ]
}

fn default_models() -> Vec<VocabEntry> {
    vec![
        VocabEntry::new("GOLF", &["GOLF"]),
        VocabEntry::new("POLO", &["POLO"]),
        VocabEntry::new("PASSAT", &["PASSAT"]),
        VocabEntry::new("TIGUAN", &["TIGUAN"]),
        VocabEntry::new("FIESTA", &["FIESTA"]),
        VocabEntry::new("FOCUS", &["FOCUS"]),
        VocabEntry::new("ASTRA", &["ASTRA"]),
        VocabEntry::new("CORSA", &["CORSA"]),
        VocabEntry::new("COROLLA", &["COROLLA"]),
        VocabEntry::new("YARIS", &["YARIS"]),
        VocabEntry::new("QASHQAI", &["QASHQAI"]),
        VocabEntry::new("OCTAVIA", &["OCTAVIA"]),
        VocabEntry::new("FABIA", &["FABIA"]),
        VocabEntry::new("CIVIC", &["CIVIC"]),
    ]
}

impl VregConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| VregError::Config(e.to_string()))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content =
            serde_json::to_string_pretty(self).map_err(|e| VregError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
