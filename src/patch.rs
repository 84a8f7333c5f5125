//! Partial-update reconciliation.
//!
//! Patch requests carry an ordered list of operations in the RFC 6902
//! spelling (`op`, `path`, `value`). Reconciliation is a constrained
//! interpreter over the write-shape's three declared fields rather than a
//! generic patch engine: an operation can never reach a field outside the
//! documented contract.
//!
//! The flow per request:
//!
//! 1. snapshot the record into its write-shape,
//! 2. apply every operation to the snapshot in sequence order,
//! 3. validate the resulting snapshot,
//! 4. hand the validated draft back to the caller for commit.
//!
//! Any failure rejects the whole request: either an operation error at a
//! specific index, or accumulated validation errors. There is no partial
//! success, and the stored record is untouched until the caller commits.

use crate::error::{ForecastError, ForecastResult};
use crate::model::{ForecastDraft, ForecastRecord};
use crate::representation::ForecastWrite;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One patch operation as received on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatchOperation {
    /// Operation kind: `add`, `replace` or `remove` (case-insensitive).
    pub op: String,
    /// Target field: `date`, `temperatureCelsius` or `summary`, with an
    /// optional leading `/`.
    pub path: String,
    /// Operand for `add` and `replace`; ignored for `remove`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
}

impl PatchOperation {
    pub fn new(op: impl Into<String>, path: impl Into<String>, value: Option<Value>) -> Self {
        Self {
            op: op.into(),
            path: path.into(),
            value,
        }
    }

    /// Shorthand for a `replace` operation.
    pub fn replace(path: impl Into<String>, value: Value) -> Self {
        Self::new("replace", path, Some(value))
    }

    /// Shorthand for an `add` operation.
    pub fn add(path: impl Into<String>, value: Value) -> Self {
        Self::new("add", path, Some(value))
    }

    /// Shorthand for a `remove` operation.
    pub fn remove(path: impl Into<String>) -> Self {
        Self::new("remove", path, None)
    }
}

/// The write-shape fields an operation may target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TargetField {
    Date,
    TemperatureCelsius,
    Summary,
}

impl TargetField {
    /// Resolve a wire path to a declared field.
    ///
    /// Accepts the bare field name or a single leading slash. Anything
    /// else, including `id`, is outside the write-shape.
    fn resolve(path: &str) -> Option<Self> {
        match path.strip_prefix('/').unwrap_or(path) {
            "date" => Some(Self::Date),
            "temperatureCelsius" => Some(Self::TemperatureCelsius),
            "summary" => Some(Self::Summary),
            _ => None,
        }
    }
}

/// Apply `operations` to a record and produce the validated post-patch
/// draft.
///
/// Operations apply strictly in the order supplied. The record itself is
/// never mutated here; the caller merges the returned draft and commits.
/// Failure outcomes carry either the index of the offending operation or
/// the full set of field violations.
pub fn reconcile(
    record: &ForecastRecord,
    operations: &[PatchOperation],
) -> ForecastResult<ForecastDraft> {
    let mut snapshot = ForecastWrite::snapshot_of(record);

    for (index, operation) in operations.iter().enumerate() {
        apply_operation(&mut snapshot, index, operation)?;
    }

    snapshot.validate().map_err(ForecastError::Validation)
}

/// Apply a single operation to the snapshot.
fn apply_operation(
    snapshot: &mut ForecastWrite,
    index: usize,
    operation: &PatchOperation,
) -> ForecastResult<()> {
    let target = TargetField::resolve(&operation.path).ok_or_else(|| {
        ForecastError::operation(
            index,
            format!("path '{}' is outside the write-shape", operation.path),
        )
    })?;

    match operation.op.to_lowercase().as_str() {
        "add" | "replace" => {
            let value = operation.value.as_ref().ok_or_else(|| {
                ForecastError::operation(
                    index,
                    format!("'{}' operation requires a value", operation.op),
                )
            })?;
            set_field(snapshot, index, target, value)
        }
        "remove" => {
            clear_field(snapshot, target);
            Ok(())
        }
        other => Err(ForecastError::operation(
            index,
            format!("unsupported patch operation '{other}'"),
        )),
    }
}

fn set_field(
    snapshot: &mut ForecastWrite,
    index: usize,
    target: TargetField,
    value: &Value,
) -> ForecastResult<()> {
    match target {
        TargetField::Date => {
            let date: DateTime<Utc> = coerce(index, "date", value)?;
            snapshot.date = Some(date);
        }
        TargetField::TemperatureCelsius => {
            let celsius: i32 = coerce(index, "temperatureCelsius", value)?;
            snapshot.temperature_celsius = Some(celsius);
        }
        TargetField::Summary => {
            // null clears the summary, same as remove.
            let summary: Option<String> = coerce(index, "summary", value)?;
            snapshot.summary = summary;
        }
    }
    Ok(())
}

fn clear_field(snapshot: &mut ForecastWrite, target: TargetField) {
    match target {
        TargetField::Date => snapshot.date = None,
        TargetField::TemperatureCelsius => snapshot.temperature_celsius = None,
        TargetField::Summary => snapshot.summary = None,
    }
}

/// Deserialize an operand into the target field's type.
fn coerce<T: serde::de::DeserializeOwned>(
    index: usize,
    field: &str,
    value: &Value,
) -> ForecastResult<T> {
    serde_json::from_value(value.clone()).map_err(|source| {
        ForecastError::operation(
            index,
            format!("value {value} is not valid for field '{field}': {source}"),
        )
    })
}
