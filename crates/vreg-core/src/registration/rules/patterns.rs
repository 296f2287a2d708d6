//! Common regex patterns for registration document extraction.
//!
//! Label text on scanned documents is OCR-unstable, so separators and
//! spacing are matched loosely throughout.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Label-anchored field patterns
    pub static ref MAKE_LABELED: Regex = Regex::new(
        r"(?i)D\.?\s*1\s*:?\s*Make\s+([A-Z]+)"
    ).unwrap();

    pub static ref MODEL_LABELED: Regex = Regex::new(
        r"(?i)D\.?\s*3\s*:?\s*Model\s+([A-Z ]+?)\s*(?:\r?\n|D\.?\s*5|$)"
    ).unwrap();

    // First-registration dates (DD MM YYYY or similar)
    pub static ref FIRST_REGISTRATION_DATE: Regex = Regex::new(
        r"(?i)(?:B\s*:?\s*Date\s+of|Date\s+of\s+first)\D*\d{1,2}[\s./-]+\d{1,2}[\s./-]+(\d{4})"
    ).unwrap();

    pub static ref FIRST_REGISTRATION_YEAR: Regex = Regex::new(
        r"(?is)Date\s+of\s+first\b.*?\b(\d{4})\b"
    ).unwrap();

    pub static ref FIRST_REGISTRATION_YEAR_ALT: Regex = Regex::new(
        r"(?is)\bB\s*:?\s*Date\s+of\b.*?\b(\d{4})\b"
    ).unwrap();

    pub static ref STANDALONE_YEAR: Regex = Regex::new(
        r"\b(\d{4})\b"
    ).unwrap();

    // Chassis / VIN patterns (exactly 17 alphanumerics)
    pub static ref CHASSIS_LABELED: Regex = Regex::new(
        r"(?i)VIN\W*[A-Z]*\W*Frame\s*No\W*([A-Z0-9]{17})\b"
    ).unwrap();

    pub static ref CHASSIS_LOOSE: Regex = Regex::new(
        r"(?is)\bE\W*VIN\b.*?\b([A-Z0-9]{17})\b"
    ).unwrap();

    // Mileage with an optional "(optional)" qualifier after the label
    pub static ref MILEAGE_LABELED: Regex = Regex::new(
        r"(?i)Mileage\s*[:(]?\s*(?:optional\s*\)?)?\s*:?\s*(\d[\d,]*)"
    ).unwrap();

    // Registration plate shapes (2 letters, 2 digits, 3 letters)
    pub static ref PLATE_SHAPE: Regex = Regex::new(
        r"^[A-Z]{2}\d{2}[A-Z]{3}$"
    ).unwrap();

    pub static ref PLATE_SPACED: Regex = Regex::new(
        r"(?i)\b([A-Z]{2}\s?\d{2}\s+[A-Z]{3})\b"
    ).unwrap();

    pub static ref PLATE_LABELED: Regex = Regex::new(
        r"(?i)Registration\s+Number[ \t]*:?[ \t]*([A-Z0-9][A-Z0-9 -]{5,10})"
    ).unwrap();

    pub static ref PLATE_COMPACT: Regex = Regex::new(
        r"(?i)\b([A-Z]{2}\d{2}[A-Z]{3})\b"
    ).unwrap();

    pub static ref REGISTRATION_LABEL: Regex = Regex::new(
        r"(?i)Registration\s+Number"
    ).unwrap();
}
