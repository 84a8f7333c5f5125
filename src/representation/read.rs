//! Read-shapes served per API version.

use crate::model::ForecastRecord;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Literal tag carried by version 3.0 responses.
pub const V3_TAG: &str = "This is v3";

/// Literal tag carried by version 4.0 responses.
pub const V4_TAG: &str = "This is v4";

/// The base read-shape served by version 1.0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastReadV1 {
    pub id: i32,
    pub date: DateTime<Utc>,
    pub temperature_celsius: i32,
    pub temperature_fahrenheit: i32,
    pub summary: Option<String>,
}

impl ForecastReadV1 {
    pub fn of(record: &ForecastRecord) -> Self {
        Self {
            id: record.id,
            date: record.date,
            temperature_celsius: record.temperature_celsius,
            temperature_fahrenheit: record.temperature_fahrenheit(),
            summary: record.summary.clone(),
        }
    }
}

/// The Fahrenheit-facing variant served by version 2.0.
///
/// Drops the raw Celsius value; consumers of this version only ever saw the
/// derived reading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastReadCompact {
    pub id: i32,
    pub date: DateTime<Utc>,
    pub temperature_fahrenheit: i32,
    pub summary: Option<String>,
}

impl ForecastReadCompact {
    pub fn of(record: &ForecastRecord) -> Self {
        Self {
            id: record.id,
            date: record.date,
            temperature_fahrenheit: record.temperature_fahrenheit(),
            summary: record.summary.clone(),
        }
    }
}

/// The tagged read-shape served by versions 3.0 and 4.0.
///
/// Identical to the base shape plus a literal `version` tag string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastReadTagged {
    pub id: i32,
    pub date: DateTime<Utc>,
    pub temperature_celsius: i32,
    pub temperature_fahrenheit: i32,
    pub summary: Option<String>,
    pub version: String,
}

impl ForecastReadTagged {
    pub fn of(record: &ForecastRecord, tag: &str) -> Self {
        Self {
            id: record.id,
            date: record.date,
            temperature_celsius: record.temperature_celsius,
            temperature_fahrenheit: record.temperature_fahrenheit(),
            summary: record.summary.clone(),
            version: tag.to_string(),
        }
    }
}

/// A read representation of any registered shape.
///
/// Serializes untagged: the wire form is the inner struct's object, with no
/// envelope distinguishing versions.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ReadRepresentation {
    Base(ForecastReadV1),
    Compact(ForecastReadCompact),
    Tagged(ForecastReadTagged),
}

impl ReadRepresentation {
    /// The record id this representation projects.
    pub fn id(&self) -> i32 {
        match self {
            Self::Base(read) => read.id,
            Self::Compact(read) => read.id,
            Self::Tagged(read) => read.id,
        }
    }

    /// The derived Fahrenheit reading, present in every shape.
    pub fn temperature_fahrenheit(&self) -> i32 {
        match self {
            Self::Base(read) => read.temperature_fahrenheit,
            Self::Compact(read) => read.temperature_fahrenheit,
            Self::Tagged(read) => read.temperature_fahrenheit,
        }
    }

    /// The summary text, if the record carries one.
    pub fn summary(&self) -> Option<&str> {
        match self {
            Self::Base(read) => read.summary.as_deref(),
            Self::Compact(read) => read.summary.as_deref(),
            Self::Tagged(read) => read.summary.as_deref(),
        }
    }
}
