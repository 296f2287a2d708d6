//! Placeholder resolution for fixed-layout document templates.
//!
//! The core resolves placeholder tokens to field values; the literal
//! substitution into a document belongs to the calling collaborator
//! ([`apply`] is the plain-text version of that collaborator).

use std::collections::{BTreeMap, BTreeSet};

use lazy_static::lazy_static;
use regex::Regex;

use crate::models::record::{FieldValue, VehicleRecord};

lazy_static! {
    static ref PLACEHOLDER: Regex = Regex::new(r"\{\{[a-z_]+\}\}").unwrap();
}

/// Fields a template placeholder can name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Make,
    Model,
    Year,
    Chassis,
    Mileage,
    RegistrationNumber,
}

/// All fields, in template order.
pub const FIELDS: [Field; 6] = [
    Field::Make,
    Field::Model,
    Field::Year,
    Field::Chassis,
    Field::Mileage,
    Field::RegistrationNumber,
];

impl Field {
    /// Placeholder token as it appears in the document template.
    ///
    /// Token spellings match the shipped receipt template.
    pub fn token(&self) -> &'static str {
        match self {
            Field::Make => "{{make}}",
            Field::Model => "{{model}}",
            Field::Year => "{{year}}",
            Field::Chassis => "{{chasis}}",
            Field::Mileage => "{{mileage}}",
            Field::RegistrationNumber => "{{reg_number}}",
        }
    }

    /// Field named by a placeholder token, if any.
    pub fn from_token(token: &str) -> Option<Self> {
        FIELDS.iter().copied().find(|field| field.token() == token)
    }

    /// Value of this field in the record, if the record carries it.
    fn value<'a>(&self, record: &'a VehicleRecord) -> Option<&'a FieldValue> {
        match self {
            Field::Make => Some(&record.make),
            Field::Model => Some(&record.model),
            Field::Year => Some(&record.year),
            Field::Chassis => Some(&record.chassis),
            Field::Mileage => record.mileage.as_ref(),
            Field::RegistrationNumber => Some(&record.registration_number),
        }
    }
}

/// Resolve each declared placeholder to its field's rendered value.
///
/// Pure lookup, idempotent: unknown fields resolve to the `N/A` sentinel
/// verbatim, and a placeholder that names no field of the record is
/// omitted from the mapping and left for the caller to handle.
pub fn resolve(
    record: &VehicleRecord,
    placeholders: &BTreeSet<String>,
) -> BTreeMap<String, String> {
    let mut resolved = BTreeMap::new();
    for token in placeholders {
        if let Some(value) = Field::from_token(token).and_then(|field| field.value(record)) {
            resolved.insert(token.clone(), value.to_string());
        }
    }
    resolved
}

/// Placeholder tokens present in a template.
pub fn scan_placeholders(template: &str) -> BTreeSet<String> {
    PLACEHOLDER
        .find_iter(template)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Substitute resolved placeholders into template text.
///
/// Literal, case-sensitive, all-occurrences replacement over the whole
/// template, table rows included.
pub fn apply(template: &str, resolved: &BTreeMap<String, String>) -> String {
    let mut output = template.to_string();
    for (token, value) in resolved {
        output = output.replace(token, value);
    }
    output
}
