//! Mileage extraction.

use super::patterns::MILEAGE_LABELED;

/// Extract a mileage reading following a "Mileage" label.
///
/// An "(optional)" qualifier after the label is skipped, not captured;
/// thousands separators are stripped from the result.
pub fn extract_mileage(text: &str) -> Option<String> {
    MILEAGE_LABELED
        .captures(text)
        .map(|caps| caps[1].replace(',', ""))
}
