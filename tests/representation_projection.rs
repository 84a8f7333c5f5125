//! Projection properties: purity, the compatibility formula, and the
//! replace-versus-merge distinction.

mod common;

use chrono::{TimeZone, Utc};
use forecast_server::representation::{self, ForecastWrite, ReadRepresentation};
use forecast_server::version::ReadShape;
use forecast_server::{fahrenheit_for, ForecastRecord};
use proptest::prelude::*;

fn record(id: i32, celsius: i32, summary: Option<&str>) -> ForecastRecord {
    ForecastRecord {
        id,
        date: common::sample_date(),
        temperature_celsius: celsius,
        summary: summary.map(str::to_string),
    }
}

#[test]
fn every_shape_reproduces_the_compatibility_formula() {
    let record = record(1, 10, Some("Mild"));
    for shape in [
        ReadShape::Base,
        ReadShape::Compact,
        ReadShape::TaggedV3,
        ReadShape::TaggedV4,
    ] {
        let projected = representation::project(&record, shape);
        // 32 + floor(10 / 0.5556) = 32 + 17 = 49, not the idealized 50.
        assert_eq!(projected.temperature_fahrenheit(), 49);
    }
}

#[test]
fn negative_celsius_floors_instead_of_truncating() {
    assert_eq!(fahrenheit_for(-20), -4);

    let projected = representation::project(&record(1, -20, None), ReadShape::Base);
    assert_eq!(projected.temperature_fahrenheit(), -4);
}

#[test]
fn missing_summary_projects_as_absent_not_as_error() {
    let projected = representation::project(&record(1, 0, None), ReadShape::TaggedV3);
    assert_eq!(projected.summary(), None);

    let json = serde_json::to_value(&projected).unwrap();
    assert_eq!(json["summary"], serde_json::Value::Null);
}

#[test]
fn tagged_shapes_differ_only_in_their_literal_tag() {
    let record = record(2, 21, Some("Warm"));
    let v3 = serde_json::to_value(representation::project(&record, ReadShape::TaggedV3)).unwrap();
    let v4 = serde_json::to_value(representation::project(&record, ReadShape::TaggedV4)).unwrap();

    assert_eq!(v3["version"], "This is v3");
    assert_eq!(v4["version"], "This is v4");

    let mut v3_rest = v3.clone();
    let mut v4_rest = v4.clone();
    v3_rest.as_object_mut().unwrap().remove("version");
    v4_rest.as_object_mut().unwrap().remove("version");
    assert_eq!(v3_rest, v4_rest);
}

#[test]
fn full_replace_overwrites_default_values_where_merge_would_not() {
    let mut replaced = record(3, 21, Some("Warm"));
    let mut merged = replaced.clone();

    // Zero temperature and no summary: defaults that a merge must keep
    // distinct from "field not mentioned".
    let body = ForecastWrite {
        date: Some(common::sample_date()),
        temperature_celsius: Some(0),
        summary: None,
    };

    body.clone().validate().unwrap().replace_into(&mut replaced);
    body.to_delta().merge_into(&mut merged);

    assert_eq!(replaced.temperature_celsius, 0);
    assert_eq!(replaced.summary, None);

    assert_eq!(merged.temperature_celsius, 0);
    assert_eq!(merged.summary.as_deref(), Some("Warm"));
}

proptest! {
    #[test]
    fn projection_is_pure(
        id in any::<i32>(),
        celsius in -90i32..=60,
        seconds in 0i64..4_102_444_800,
        summary in proptest::option::of("[a-zA-Z ]{0,40}"),
    ) {
        let record = ForecastRecord {
            id,
            date: Utc.timestamp_opt(seconds, 0).single().unwrap(),
            temperature_celsius: celsius,
            summary,
        };

        for shape in [
            ReadShape::Base,
            ReadShape::Compact,
            ReadShape::TaggedV3,
            ReadShape::TaggedV4,
        ] {
            let first = representation::project(&record, shape);
            let second = representation::project(&record, shape);
            prop_assert_eq!(&first, &second);
            prop_assert_eq!(first.id(), record.id);
        }
    }

    #[test]
    fn fahrenheit_agrees_across_shapes(celsius in -90i32..=60) {
        let record = ForecastRecord {
            id: 1,
            date: common::sample_date(),
            temperature_celsius: celsius,
            summary: None,
        };

        let base = representation::project(&record, ReadShape::Base);
        let compact = representation::project(&record, ReadShape::Compact);
        prop_assert_eq!(
            base.temperature_fahrenheit(),
            compact.temperature_fahrenheit()
        );
        prop_assert_eq!(base.temperature_fahrenheit(), fahrenheit_for(celsius));
    }
}

#[test]
fn compact_shape_is_a_strict_subset_of_base() {
    let record = record(5, 12, Some("Cool"));
    let base = serde_json::to_value(representation::project(&record, ReadShape::Base)).unwrap();
    let compact =
        serde_json::to_value(representation::project(&record, ReadShape::Compact)).unwrap();

    let compact_fields = compact.as_object().unwrap();
    for (field, value) in compact_fields {
        assert_eq!(base.get(field), Some(value));
    }
    assert!(compact_fields.get("temperatureCelsius").is_none());
}

#[test]
fn representations_carry_no_identity_of_their_own() {
    // Projecting twice and serializing yields the same bytes; nothing on
    // the read side invents state.
    let record = record(8, 30, Some("Hot"));
    let first: ReadRepresentation = representation::project(&record, ReadShape::TaggedV4);
    let second: ReadRepresentation = representation::project(&record, ReadShape::TaggedV4);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}
