//! Domain entities

mod forecast;

pub use forecast::ForecastRecord;
