//! The write-shape and its two application contracts.
//!
//! A [`ForecastWrite`] is the only wire form through which fields can be
//! set: `date`, `temperatureCelsius` and `summary`. The record id is not
//! part of the shape and can never be written.
//!
//! Applying a write to a record happens through one of two deliberately
//! distinct contracts:
//!
//! * **merge** ([`RecordDelta::merge_into`]) - fields absent from the shape
//!   are left untouched on the target record;
//! * **full replace** ([`crate::model::ForecastDraft::replace_into`]) -
//!   every write-eligible field is overwritten, even when the incoming
//!   value is a default or clears an optional field.

use crate::error::{FieldViolation, ValidationResult, ValidationErrors};
use crate::model::{ForecastDraft, ForecastRecord, SUMMARY_MAX_LEN};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The fields a client may set. All optional at the wire level; validation
/// decides which must be present.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastWrite {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature_celsius: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

impl ForecastWrite {
    /// Snapshot the current state of a record into the write-shape.
    ///
    /// This is the starting point for patch reconciliation: operations are
    /// applied to the snapshot, never to the stored record.
    pub fn snapshot_of(record: &ForecastRecord) -> Self {
        Self {
            date: Some(record.date),
            temperature_celsius: Some(record.temperature_celsius),
            summary: record.summary.clone(),
        }
    }

    /// Validate field constraints and produce the draft on success.
    ///
    /// `date` and `temperatureCelsius` are required; `summary` may be absent
    /// but is bounded at [`SUMMARY_MAX_LEN`] characters. All violations are
    /// collected before failing.
    pub fn validate(self) -> ValidationResult<ForecastDraft> {
        let mut errors = ValidationErrors::new();

        if self.date.is_none() {
            errors.push(FieldViolation::MissingRequired { field: "date" });
        }
        if self.temperature_celsius.is_none() {
            errors.push(FieldViolation::MissingRequired {
                field: "temperatureCelsius",
            });
        }
        if let Some(summary) = &self.summary {
            let length = summary.chars().count();
            if length > SUMMARY_MAX_LEN {
                errors.push(FieldViolation::TooLong {
                    field: "summary",
                    max: SUMMARY_MAX_LEN,
                    actual: length,
                });
            }
        }
        errors.into_result()?;

        match (self.date, self.temperature_celsius) {
            (Some(date), Some(temperature_celsius)) => Ok(ForecastDraft {
                date,
                temperature_celsius,
                summary: self.summary,
            }),
            // Unreachable: both fields were just checked present.
            _ => Err(ValidationErrors::new()),
        }
    }

    /// Produce the merge delta this shape defines.
    pub fn to_delta(&self) -> RecordDelta {
        RecordDelta {
            date: self.date,
            temperature_celsius: self.temperature_celsius,
            summary: self.summary.clone(),
        }
    }
}

/// The set of field changes a write-shape carries, applied by merging.
///
/// Unlike full replacement, merging never clears a field the shape did not
/// mention.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordDelta {
    pub date: Option<DateTime<Utc>>,
    pub temperature_celsius: Option<i32>,
    pub summary: Option<String>,
}

impl RecordDelta {
    /// Apply the present fields to `record`, leaving absent fields untouched.
    pub fn merge_into(&self, record: &mut ForecastRecord) {
        if let Some(date) = self.date {
            record.date = date;
        }
        if let Some(temperature_celsius) = self.temperature_celsius {
            record.temperature_celsius = temperature_celsius;
        }
        if let Some(summary) = &self.summary {
            record.summary = Some(summary.clone());
        }
    }
}
