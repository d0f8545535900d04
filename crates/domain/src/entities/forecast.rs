//! Forecast record entity
//!
//! One synthetic weather data point as returned by the benchmark endpoint.
//! Records are immutable, live for a single request/response cycle, and are
//! never persisted.

use chrono::NaiveDate;
use serde::Serialize;

use crate::value_objects::{Celsius, Summary};

/// A single synthetic forecast record
///
/// Wire format:
/// `{"date":"2026-08-08","temperatureC":21,"temperatureF":69,"summary":"Mild"}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ForecastRecord {
    /// Forecast date (ISO-8601 `YYYY-MM-DD` on the wire)
    pub date: NaiveDate,
    /// Temperature in Celsius
    #[serde(rename = "temperatureC")]
    pub temperature_c: Celsius,
    /// Temperature in Fahrenheit, derived from Celsius
    #[serde(rename = "temperatureF")]
    pub temperature_f: i32,
    /// Text summary
    pub summary: Summary,
}

impl ForecastRecord {
    /// Create a record, deriving the Fahrenheit value from Celsius
    #[must_use]
    pub fn new(date: NaiveDate, temperature_c: Celsius, summary: Summary) -> Self {
        Self {
            date,
            temperature_c,
            temperature_f: temperature_c.to_fahrenheit(),
            summary,
        }
    }
}
