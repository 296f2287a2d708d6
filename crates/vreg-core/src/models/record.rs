//! Vehicle record data model.

use std::collections::BTreeMap;
use std::fmt;

use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};

/// Sentinel text for a field that could not be determined.
pub const UNKNOWN: &str = "N/A";

/// A single extracted field: either a normalized non-empty value or the
/// explicit unknown marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// Normalized, non-empty value.
    Known(String),
    /// The field could not be determined.
    Unknown,
}

impl FieldValue {
    /// Wrap a candidate value, collapsing `None` and whitespace-only
    /// strings into `Unknown`.
    pub fn from_candidate(value: Option<String>) -> Self {
        match value {
            Some(v) if !v.trim().is_empty() => FieldValue::Known(v.trim().to_string()),
            _ => FieldValue::Unknown,
        }
    }

    /// Rendered value, with `Unknown` as the literal `N/A`.
    pub fn as_str(&self) -> &str {
        match self {
            FieldValue::Known(v) => v,
            FieldValue::Unknown => UNKNOWN,
        }
    }

    /// Whether a value was resolved.
    pub fn is_known(&self) -> bool {
        matches!(self, FieldValue::Known(_))
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for FieldValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for FieldValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        if value == UNKNOWN || value.trim().is_empty() {
            Ok(FieldValue::Unknown)
        } else {
            Ok(FieldValue::Known(value))
        }
    }
}

/// A structured vehicle-registration record.
///
/// Constructed once per document submission and never mutated afterwards;
/// any correction (such as chassis prefix repair) happens before the
/// record is finalized. Every field of the active extraction mode is
/// present, with `Unknown` standing in for anything unresolved.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleRecord {
    pub make: FieldValue,
    pub model: FieldValue,
    pub year: FieldValue,
    pub chassis: FieldValue,
    /// Modeled only by the label-anchored extraction mode.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub mileage: Option<FieldValue>,
    pub registration_number: FieldValue,
}

impl VehicleRecord {
    /// A record with every field unresolved (and no mileage key).
    pub fn unknown() -> Self {
        Self {
            make: FieldValue::Unknown,
            model: FieldValue::Unknown,
            year: FieldValue::Unknown,
            chassis: FieldValue::Unknown,
            mileage: None,
            registration_number: FieldValue::Unknown,
        }
    }

    /// Flat key/value view of the record with its fixed key set.
    ///
    /// The `mileage` key is present only when the extraction mode that
    /// produced the record models mileage.
    pub fn to_map(&self) -> BTreeMap<&'static str, String> {
        let mut map = BTreeMap::new();
        map.insert("make", self.make.to_string());
        map.insert("model", self.model.to_string());
        map.insert("year", self.year.to_string());
        map.insert("chassis", self.chassis.to_string());
        if let Some(mileage) = &self.mileage {
            map.insert("mileage", mileage.to_string());
        }
        map.insert("registrationNumber", self.registration_number.to_string());
        map
    }
}
