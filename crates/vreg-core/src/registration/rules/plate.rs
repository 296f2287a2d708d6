//! Registration-number (plate) extraction heuristics.
//!
//! Plates are stamped near either the document's "Registration Number"
//! label or its footer, and OCR tends to mis-split them across lines, so
//! both a positional-footer heuristic and a label-relative heuristic are
//! needed.

use super::patterns::{
    PLATE_COMPACT, PLATE_LABELED, PLATE_SHAPE, PLATE_SPACED, REGISTRATION_LABEL,
};

/// Footer window scanned for a plate-shaped token.
const FOOTER_LINES: usize = 10;
/// Lines inspected after the "Registration Number" label.
const LABEL_WINDOW_LINES: usize = 5;
/// Minimum normalized length accepted by the loose line fallback.
const PLATE_LEN: usize = 7;

/// Strip non-alphanumeric characters and upper-case.
pub fn normalize_token(token: &str) -> String {
    token
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect::<String>()
        .to_uppercase()
}

fn is_plate_shaped(normalized: &str) -> bool {
    PLATE_SHAPE.is_match(normalized)
}

/// Normalized lines following the "Registration Number" label, starting
/// with the remainder of the label's own line.
fn label_window(text: &str) -> impl Iterator<Item = String> + '_ {
    REGISTRATION_LABEL
        .find(text)
        .into_iter()
        .flat_map(move |m| text[m.end()..].lines().take(LABEL_WINDOW_LINES))
        .map(normalize_token)
}

/// Label-trusted strategy: scan the last lines of the document for a
/// plate-shaped token, then fall back to the label window.
pub fn extract_plate_labeled(text: &str) -> Option<String> {
    let lines: Vec<&str> = text.lines().collect();
    let start = lines.len().saturating_sub(FOOTER_LINES);
    for line in &lines[start..] {
        let normalized = normalize_token(line);
        if is_plate_shaped(&normalized) {
            return Some(normalized);
        }
    }

    label_window(text).find(|line| is_plate_shaped(line))
}

/// Pattern-first strategy used when labels are unreliable: the spaced
/// plate shape, text after the label, then the no-space shape (covers
/// OCR-dropped spaces). The first match is normalized.
pub fn extract_plate_loose(text: &str) -> Option<String> {
    for pattern in [&*PLATE_SPACED, &*PLATE_LABELED, &*PLATE_COMPACT] {
        if let Some(caps) = pattern.captures(text) {
            return Some(normalize_token(&caps[1]));
        }
    }

    // Plate mis-split across lines near the label: take the first line in
    // the label window that is long enough and trim it to plate length.
    label_window(text)
        .find(|line| line.len() >= PLATE_LEN)
        .map(|line| line[..PLATE_LEN].to_string())
}
