//! Shared builders for integration tests.

#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use forecast_server::store::InMemoryStore;
use forecast_server::{ForecastService, ForecastWrite, RequestContext};

/// Fixed calendar date used across scenarios.
pub fn sample_date() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
}

/// A full write body with the given temperature and summary.
pub fn write_body(celsius: i32, summary: Option<&str>) -> ForecastWrite {
    ForecastWrite {
        date: Some(sample_date()),
        temperature_celsius: Some(celsius),
        summary: summary.map(str::to_string),
    }
}

/// A service over a fresh in-memory store with the stock version table.
pub fn service() -> ForecastService<InMemoryStore> {
    init_logging();
    ForecastService::new(InMemoryStore::new())
}

/// Request context for one test scenario.
pub fn context() -> RequestContext {
    RequestContext::with_generated_id()
}

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
