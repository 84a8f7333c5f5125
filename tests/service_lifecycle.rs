//! End-to-end lifecycle of a forecast record across API versions.

mod common;

use forecast_server::store::ForecastStore;
use forecast_server::{ForecastError, PatchOperation, ReadRepresentation};
use futures::future::join_all;
use serde_json::json;

#[test]
fn create_patch_get_delete_lifecycle() {
    let service = common::service();
    let context = common::context();

    // Create: the store assigns id 1 and Fahrenheit derives to 49.
    let created = service
        .create("1.0", common::write_body(10, Some("Mild")), &context)
        .unwrap();
    assert_eq!(created.representation.id(), 1);
    assert_eq!(created.representation.temperature_fahrenheit(), 49);
    assert_eq!(created.location, "/forecasts/1");

    // Patch the summary; temperature stays untouched.
    service
        .patch(
            "1.0",
            1,
            &[PatchOperation::replace("summary", json!("Cool"))],
            &context,
        )
        .unwrap();
    let fetched = service.get_by_id("1.0", 1, &context).unwrap();
    assert_eq!(fetched.summary(), Some("Cool"));
    assert_eq!(fetched.temperature_fahrenheit(), 49);

    // Patching the id is rejected and changes nothing.
    let error = service
        .patch("1.0", 1, &[PatchOperation::replace("id", json!(99))], &context)
        .unwrap_err();
    assert!(matches!(error, ForecastError::Operation { .. }));
    assert_eq!(service.get_by_id("1.0", 1, &context).unwrap().summary(), Some("Cool"));

    // Delete, then the record is gone.
    service.delete("1.0", 1, &context).unwrap();
    assert!(matches!(
        service.get_by_id("1.0", 1, &context),
        Err(ForecastError::NotFound { id: 1 })
    ));
}

#[test]
fn replace_overwrites_every_write_eligible_field() {
    let service = common::service();
    let context = common::context();
    let id = service
        .create("3.0", common::write_body(21, Some("Warm")), &context)
        .unwrap()
        .representation
        .id();

    // Zero temperature and absent summary still overwrite.
    service
        .replace("3.0", id, common::write_body(0, None), &context)
        .unwrap();

    let fetched = service.get_by_id("3.0", id, &context).unwrap();
    assert_eq!(fetched.summary(), None);
    assert_eq!(fetched.temperature_fahrenheit(), 32);
}

#[test]
fn replace_with_invalid_body_reports_field_errors() {
    let service = common::service();
    let context = common::context();
    let id = service
        .create("3.0", common::write_body(21, None), &context)
        .unwrap()
        .representation
        .id();

    let mut body = common::write_body(5, None);
    body.date = None;
    let error = service.replace("3.0", id, body, &context).unwrap_err();

    match error {
        ForecastError::Validation(errors) => {
            assert_eq!(errors.violations()[0].field(), "date");
        }
        other => panic!("expected validation failure, got {other:?}"),
    }
}

#[test]
fn delete_then_get_is_not_found_after_commit() {
    let service = common::service();
    let context = common::context();
    let id = service
        .create("1.0", common::write_body(10, None), &context)
        .unwrap()
        .representation
        .id();

    service.delete("1.0", id, &context).unwrap();

    // Even after discarding buffered work the removal has been committed.
    service.store().rollback_uncommitted();
    assert!(ForecastStore::get_by_id(service.store(), id).unwrap().is_none());
}

#[test]
fn list_projects_every_record_in_the_requested_shape() {
    let service = common::service();
    let context = common::context();
    for celsius in [0, 10, -20] {
        service
            .create("1.0", common::write_body(celsius, None), &context)
            .unwrap();
    }

    let listed = service.list("3.0", &context).unwrap();
    assert_eq!(listed.len(), 3);
    assert!(listed
        .iter()
        .all(|read| matches!(read, ReadRepresentation::Tagged(_))));

    // Version 2.0 serves the compact shape for the same records.
    let compact = service.list("2.0", &context).unwrap();
    assert!(compact
        .iter()
        .all(|read| matches!(read, ReadRepresentation::Compact(_))));
}

#[test]
fn get_by_id_is_not_available_in_v2() {
    let service = common::service();
    let context = common::context();
    let id = service
        .create("2.0", common::write_body(10, None), &context)
        .unwrap()
        .representation
        .id();

    let error = service.get_by_id("2.0", id, &context).unwrap_err();
    assert!(matches!(error, ForecastError::OperationNotMapped { .. }));

    // The same record is reachable through versions that map the operation.
    assert!(service.get_by_id("3.0", id, &context).is_ok());
}

#[tokio::test]
async fn non_blocking_lifecycle_matches_blocking_semantics() {
    let service = common::service();
    let context = common::context();

    let created = service
        .create_async("4.0", common::write_body(10, Some("Mild")), &context)
        .await
        .unwrap();
    assert_eq!(created.representation.temperature_fahrenheit(), 49);

    service
        .replace_async("4.0", created.representation.id(), common::write_body(0, None), &context)
        .await
        .unwrap();

    let listed = service.list_async("4.0", &context).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].temperature_fahrenheit(), 32);

    service
        .delete_async("4.0", listed[0].id(), &context)
        .await
        .unwrap();
    assert!(service.list_async("4.0", &context).await.unwrap().is_empty());
}

#[tokio::test]
async fn concurrent_creates_assign_distinct_ids() {
    let service = common::service();
    let context = common::context();

    let creations = join_all((0..8).map(|celsius| {
        let service = &service;
        let context = &context;
        async move {
            service
                .create_async("4.0", common::write_body(celsius, None), context)
                .await
        }
    }))
    .await;

    let mut ids: Vec<i32> = creations
        .into_iter()
        .map(|result| result.unwrap().representation.id())
        .collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 8);
}

#[test]
fn ping_is_version_neutral() {
    let service = common::service();
    assert_eq!(service.ping(), "ok");

    // Discovery reports the full matrix regardless of any one version.
    assert_eq!(service.supported_versions().len(), 4);
}
