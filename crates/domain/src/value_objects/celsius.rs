//! Celsius temperature value object
//!
//! Represents a validated integer temperature in the range the benchmark
//! generates (-20 to 54 °C inclusive).
//!
//! # Examples
//!
//! ```
//! use domain::value_objects::Celsius;
//!
//! let t = Celsius::new(21).expect("valid temperature");
//! assert_eq!(t.value(), 21);
//!
//! // Out-of-range values return an error
//! assert!(Celsius::new(55).is_err());
//! assert!(Celsius::new(-21).is_err());
//! ```

use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Error returned when a temperature is outside the generated range
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("invalid temperature: {0}°C is out of range (must be -20 to 54)")]
pub struct InvalidCelsius(i32);

/// Integer temperature in Celsius, bounded to the benchmark's range
///
/// Serializes as a bare integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Celsius(i32);

impl Celsius {
    /// Minimum generated temperature
    pub const MIN: i32 = -20;

    /// Maximum generated temperature
    pub const MAX: i32 = 54;

    /// Create a new validated temperature
    ///
    /// # Errors
    ///
    /// Returns `InvalidCelsius` if the value is outside [-20, 54].
    pub const fn new(value: i32) -> Result<Self, InvalidCelsius> {
        if value < Self::MIN || value > Self::MAX {
            Err(InvalidCelsius(value))
        } else {
            Ok(Self(value))
        }
    }

    /// Create a temperature, clamping to the valid range
    #[must_use]
    pub const fn clamped(value: i32) -> Self {
        if value < Self::MIN {
            Self(Self::MIN)
        } else if value > Self::MAX {
            Self(Self::MAX)
        } else {
            Self(value)
        }
    }

    /// Get the raw temperature value
    #[must_use]
    pub const fn value(self) -> i32 {
        self.0
    }

    /// Convert to Fahrenheit using the benchmark's fixed formula
    ///
    /// This intentionally reproduces `32 + (c / 0.5556)` with a truncating
    /// cast rather than the standard `c * 9/5 + 32` conversion.
    #[must_use]
    pub fn to_fahrenheit(self) -> i32 {
        32 + (f64::from(self.0) / 0.5556) as i32
    }
}

impl fmt::Display for Celsius {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°C", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_range_bounds() {
        assert!(Celsius::new(Celsius::MIN).is_ok());
        assert!(Celsius::new(Celsius::MAX).is_ok());
        assert!(Celsius::new(0).is_ok());
    }

    #[test]
    fn rejects_out_of_range() {
        assert!(Celsius::new(Celsius::MIN - 1).is_err());
        assert!(Celsius::new(Celsius::MAX + 1).is_err());
        assert!(Celsius::new(i32::MIN).is_err());
        assert!(Celsius::new(i32::MAX).is_err());
    }

    #[test]
    fn clamped_caps_at_bounds() {
        assert_eq!(Celsius::clamped(100).value(), Celsius::MAX);
        assert_eq!(Celsius::clamped(-100).value(), Celsius::MIN);
        assert_eq!(Celsius::clamped(12).value(), 12);
    }

    #[test]
    fn error_message_names_value() {
        let err = Celsius::new(100).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid temperature: 100°C is out of range (must be -20 to 54)"
        );
    }

    #[test]
    fn fahrenheit_truncates_toward_zero() {
        // 10 / 0.5556 = 17.998..., cast truncates to 17
        let t = Celsius::new(10).expect("valid temperature");
        assert_eq!(t.to_fahrenheit(), 32 + 17);

        // -20 / 0.5556 = -35.99..., truncation gives -35 (not -36)
        let t = Celsius::new(-20).expect("valid temperature");
        assert_eq!(t.to_fahrenheit(), 32 - 35);
    }

    #[test]
    fn fahrenheit_at_zero() {
        let t = Celsius::new(0).expect("valid temperature");
        assert_eq!(t.to_fahrenheit(), 32);
    }

    #[test]
    fn serializes_as_bare_integer() {
        let t = Celsius::new(-5).expect("valid temperature");
        let json = serde_json::to_string(&t).expect("serializable");
        assert_eq!(json, "-5");
    }

    #[test]
    fn display_includes_unit() {
        let t = Celsius::new(21).expect("valid temperature");
        assert_eq!(format!("{t}"), "21°C");
    }

    #[test]
    fn ordering_follows_value() {
        let cold = Celsius::new(-10).expect("valid temperature");
        let warm = Celsius::new(30).expect("valid temperature");
        assert!(cold < warm);
    }
}
