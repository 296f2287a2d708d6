//! First-registration year extraction.

use super::patterns::{
    FIRST_REGISTRATION_DATE, FIRST_REGISTRATION_YEAR, FIRST_REGISTRATION_YEAR_ALT, STANDALONE_YEAR,
};

/// Year component of a first-registration date following its label.
///
/// The date is expected as DD MM YYYY or similar; only the year is kept.
pub fn extract_year_labeled(text: &str) -> Option<String> {
    FIRST_REGISTRATION_DATE
        .captures(text)
        .map(|caps| caps[1].to_string())
}

/// Year extraction when label text is degraded: the first-registration
/// label variants are tried in order, then the first standalone 4-digit
/// number anywhere in the text.
pub fn extract_year_loose(text: &str) -> Option<String> {
    FIRST_REGISTRATION_YEAR
        .captures(text)
        .or_else(|| FIRST_REGISTRATION_YEAR_ALT.captures(text))
        .or_else(|| STANDALONE_YEAR.captures(text))
        .map(|caps| caps[1].to_string())
}
