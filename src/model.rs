//! Canonical forecast record model.
//!
//! The store owns exactly one [`ForecastRecord`] per id. Wire representations
//! in [`crate::representation`] are derived projections of this model and
//! never gain independent identity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Maximum permitted length of the optional summary text.
pub const SUMMARY_MAX_LEN: usize = 250;

/// The canonical stored entity.
///
/// `id` is assigned by the store on creation and immutable thereafter.
/// Celsius is the unit of truth; Fahrenheit is always derived on projection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastRecord {
    pub id: i32,
    pub date: DateTime<Utc>,
    pub temperature_celsius: i32,
    pub summary: Option<String>,
}

impl ForecastRecord {
    /// Derived Fahrenheit reading for this record.
    pub fn temperature_fahrenheit(&self) -> i32 {
        fahrenheit_for(self.temperature_celsius)
    }
}

/// A record that has passed write-shape validation but has no id yet.
///
/// Required fields are present by construction; the store assigns the id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastDraft {
    pub date: DateTime<Utc>,
    pub temperature_celsius: i32,
    pub summary: Option<String>,
}

impl ForecastDraft {
    /// Overwrite every write-eligible field of `record` with this draft.
    ///
    /// This is the full-replace contract: each field is assigned even when
    /// the incoming value equals a default or clears an optional field. It
    /// must not be confused with [`crate::representation::RecordDelta::merge_into`].
    pub fn replace_into(&self, record: &mut ForecastRecord) {
        record.date = self.date;
        record.temperature_celsius = self.temperature_celsius;
        record.summary = self.summary.clone();
    }

    /// Attach a store-assigned id, producing the canonical record.
    pub fn into_record(self, id: i32) -> ForecastRecord {
        ForecastRecord {
            id,
            date: self.date,
            temperature_celsius: self.temperature_celsius,
            summary: self.summary,
        }
    }
}

/// Compatibility Fahrenheit conversion.
///
/// `32 + floor(celsius / 0.5556)`, kept bit-for-bit as the historical wire
/// contract. This is not the standard 9/5 conversion and must not be
/// "corrected".
pub fn fahrenheit_for(celsius: i32) -> i32 {
    32 + (f64::from(celsius) / 0.5556).floor() as i32
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_fahrenheit_formula_exact_values() {
        assert_eq!(fahrenheit_for(10), 49);
        assert_eq!(fahrenheit_for(0), 32);
        assert_eq!(fahrenheit_for(1), 33);
        assert_eq!(fahrenheit_for(55), 130);
    }

    #[test]
    fn test_fahrenheit_negative_takes_floor() {
        assert_eq!(fahrenheit_for(-20), -4);
        assert_eq!(fahrenheit_for(-1), 30);
    }

    #[test]
    fn test_draft_replace_overwrites_all_fields() {
        let mut record = ForecastRecord {
            id: 7,
            date: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            temperature_celsius: 21,
            summary: Some("Warm".to_string()),
        };
        let draft = ForecastDraft {
            date: Utc.with_ymd_and_hms(2024, 2, 2, 0, 0, 0).unwrap(),
            temperature_celsius: 0,
            summary: None,
        };

        draft.replace_into(&mut record);

        assert_eq!(record.id, 7);
        assert_eq!(record.temperature_celsius, 0);
        assert_eq!(record.summary, None);
        assert_eq!(record.date, draft.date);
    }
}
