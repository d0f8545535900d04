//! Forecast summary value object
//!
//! The fixed ten-label vocabulary the benchmark draws summaries from,
//! ordered from coldest to hottest.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Text summary of a forecast record
///
/// Serializes as the bare label string (e.g. `"Freezing"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Summary {
    Freezing,
    Bracing,
    Chilly,
    Cool,
    Mild,
    Warm,
    Balmy,
    Hot,
    Sweltering,
    Scorching,
}

impl Summary {
    /// All labels in their fixed order
    pub const ALL: [Self; 10] = [
        Self::Freezing,
        Self::Bracing,
        Self::Chilly,
        Self::Cool,
        Self::Mild,
        Self::Warm,
        Self::Balmy,
        Self::Hot,
        Self::Sweltering,
        Self::Scorching,
    ];

    /// Get the label text
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Freezing => "Freezing",
            Self::Bracing => "Bracing",
            Self::Chilly => "Chilly",
            Self::Cool => "Cool",
            Self::Mild => "Mild",
            Self::Warm => "Warm",
            Self::Balmy => "Balmy",
            Self::Hot => "Hot",
            Self::Sweltering => "Sweltering",
            Self::Scorching => "Scorching",
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn has_exactly_ten_labels() {
        assert_eq!(Summary::ALL.len(), 10);
    }

    #[test]
    fn all_is_ordered_coldest_first() {
        assert_eq!(Summary::ALL[0], Summary::Freezing);
        assert_eq!(Summary::ALL[9], Summary::Scorching);
    }

    #[test]
    fn labels_are_distinct() {
        for (i, a) in Summary::ALL.iter().enumerate() {
            for b in &Summary::ALL[i + 1..] {
                assert_ne!(a.label(), b.label());
            }
        }
    }

    #[test]
    fn serializes_as_label_string() {
        let json = serde_json::to_string(&Summary::Freezing).expect("serializable");
        assert_eq!(json, "\"Freezing\"");
        let json = serde_json::to_string(&Summary::Scorching).expect("serializable");
        assert_eq!(json, "\"Scorching\"");
    }

    #[test]
    fn deserializes_from_label_string() {
        let parsed: Summary = serde_json::from_str("\"Sweltering\"").expect("valid label");
        assert_eq!(parsed, Summary::Sweltering);
    }

    #[test]
    fn rejects_unknown_label() {
        let parsed: Result<Summary, _> = serde_json::from_str("\"Tropical\"");
        assert!(parsed.is_err());
    }

    #[test]
    fn display_matches_label() {
        for summary in Summary::ALL {
            assert_eq!(format!("{summary}"), summary.label());
        }
    }
}
