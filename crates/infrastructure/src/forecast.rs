//! Forecast generation service
//!
//! Produces the synthetic records both server variants serve. Temperature
//! and summary selection use a non-cryptographic pseudo-random source; no
//! seeding contract, reproducibility across runs is not required.

use chrono::{Duration, Local, NaiveDate};
use domain::{Celsius, ForecastRecord, Summary};
use rand::Rng;

/// Generate `count` forecast records starting the day after `from`
///
/// The N-th record is dated `from + (N + 1)` days, so the first record is
/// always "tomorrow" relative to the base date. Taking the base date and the
/// generator as parameters keeps this testable with a pinned date and a
/// seeded rng.
pub fn generate_forecast<R: Rng + ?Sized>(
    count: usize,
    from: NaiveDate,
    rng: &mut R,
) -> Vec<ForecastRecord> {
    (1..=count)
        .map(|offset| {
            let celsius = Celsius::clamped(rng.random_range(Celsius::MIN..=Celsius::MAX));
            let summary = Summary::ALL[rng.random_range(0..Summary::ALL.len())];
            ForecastRecord::new(from + Duration::days(offset as i64), celsius, summary)
        })
        .collect()
}

/// Generate `count` records from today's local date with the thread-local rng
#[must_use]
pub fn generate(count: usize) -> Vec<ForecastRecord> {
    generate_forecast(count, Local::now().date_naive(), &mut rand::rng())
}
