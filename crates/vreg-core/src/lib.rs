//! Core library for vehicle registration document OCR processing.
//!
//! This crate provides:
//! - Heuristic field extraction from raw recognized text (make, model,
//!   year, chassis/VIN, mileage, registration number)
//! - Two extraction strategies: label-anchored and vocabulary-first
//! - Placeholder resolution for fixed-layout document templates
//!
//! OCR itself and document rendering are external collaborators: the
//! library consumes plain text and produces a [`VehicleRecord`], or
//! consumes a record and produces placeholder substitutions.

pub mod error;
pub mod models;
pub mod registration;
pub mod template;

pub use error::{Result, VregError};
pub use models::config::{ExtractionMode, VregConfig};
pub use models::record::{FieldValue, VehicleRecord, UNKNOWN};
pub use registration::{extractor_for, LabeledExtractor, RecordExtractor, VocabularyExtractor};
pub use template::Field;
