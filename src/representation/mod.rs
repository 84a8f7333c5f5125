//! Version-specific wire representations of the canonical record.
//!
//! Projections are hand-written per version with explicit field lists.
//! There is no convention-based mapping: what each version serves is exactly
//! what its read struct declares, and what each version accepts is exactly
//! the write-shape's three fields.
//!
//! Reading is total and side-effect-free: [`project`] succeeds for every
//! valid record and registered shape, and a missing optional field projects
//! as absent rather than as an error.

mod read;
mod write;

pub use read::{
    ForecastReadCompact, ForecastReadTagged, ForecastReadV1, ReadRepresentation, V3_TAG, V4_TAG,
};
pub use write::{ForecastWrite, RecordDelta};

use crate::model::ForecastRecord;
use crate::version::ReadShape;

/// Project a record into the read representation `shape` defines.
///
/// Pure function over the record: calling it twice yields identical output
/// and the record is never mutated.
pub fn project(record: &ForecastRecord, shape: ReadShape) -> ReadRepresentation {
    match shape {
        ReadShape::Base => ReadRepresentation::Base(ForecastReadV1::of(record)),
        ReadShape::Compact => ReadRepresentation::Compact(ForecastReadCompact::of(record)),
        ReadShape::TaggedV3 => ReadRepresentation::Tagged(ForecastReadTagged::of(record, V3_TAG)),
        ReadShape::TaggedV4 => ReadRepresentation::Tagged(ForecastReadTagged::of(record, V4_TAG)),
    }
}
