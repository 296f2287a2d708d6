//! Chassis (VIN) extraction and OCR-misread correction.

use tracing::debug;

use crate::models::config::PrefixCorrection;

use super::patterns::{CHASSIS_LABELED, CHASSIS_LOOSE};

/// Applies an ordered table of observed-misread prefix corrections to a
/// captured chassis value. The first matching entry wins.
#[derive(Debug, Clone)]
pub struct ChassisCorrector {
    corrections: Vec<PrefixCorrection>,
}

impl ChassisCorrector {
    pub fn new(corrections: Vec<PrefixCorrection>) -> Self {
        Self { corrections }
    }

    /// Apply the first matching prefix correction.
    ///
    /// An entry whose two sides differ in length would break the
    /// 17-character invariant and is skipped.
    pub fn correct(&self, chassis: &str) -> String {
        for correction in &self.corrections {
            if correction.observed.len() != correction.corrected.len() {
                continue;
            }
            if chassis.starts_with(correction.observed.as_str()) {
                debug!(
                    "correcting chassis prefix {} -> {}",
                    correction.observed, correction.corrected
                );
                return format!("{}{}", correction.corrected, &chassis[correction.observed.len()..]);
            }
        }
        chassis.to_string()
    }
}

impl Default for ChassisCorrector {
    fn default() -> Self {
        Self::new(PrefixCorrection::defaults())
    }
}

/// Extract a chassis anchored to a `VIN/<word>/Frame No` label.
///
/// The separator tokens around "VIN" are OCR-unstable and matched loosely;
/// the captured value must be a run of exactly 17 alphanumerics.
pub fn extract_chassis_labeled(text: &str, corrector: &ChassisCorrector) -> Option<String> {
    CHASSIS_LABELED
        .captures(text)
        .map(|caps| corrector.correct(&caps[1].to_uppercase()))
}

/// Extract a chassis from a loose `E ... VIN ...` match anywhere in the
/// text, not anchored to line boundaries.
pub fn extract_chassis_loose(text: &str, corrector: &ChassisCorrector) -> Option<String> {
    CHASSIS_LOOSE
        .captures(text)
        .map(|caps| corrector.correct(&caps[1].to_uppercase()))
}
