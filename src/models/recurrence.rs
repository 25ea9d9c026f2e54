//! Cycle recurrence preference
//!
//! Stored on each user and read, never mutated, by balance aggregation.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// How often a user's accounting cycle repeats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RecurrenceKind {
    /// Monday through Sunday
    Weekly,
    /// First through last day of the calendar month
    #[default]
    Monthly,
}

impl RecurrenceKind {
    /// Storage label ("WEEKLY" / "MONTHLY")
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Weekly => "WEEKLY",
            Self::Monthly => "MONTHLY",
        }
    }

    /// Lenient decoding: anything that is not a weekly label is monthly
    pub fn from_label(label: &str) -> Self {
        label.parse().unwrap_or_default()
    }
}

impl fmt::Display for RecurrenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecurrenceKind {
    type Err = RecurrenceParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "weekly" | "week" | "w" => Ok(Self::Weekly),
            "monthly" | "month" | "m" => Ok(Self::Monthly),
            _ => Err(RecurrenceParseError(s.to_string())),
        }
    }
}

impl Serialize for RecurrenceKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for RecurrenceKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        Ok(Self::from_label(&label))
    }
}

/// Error for unrecognised recurrence input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecurrenceParseError(pub String);

impl fmt::Display for RecurrenceParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid cycle '{}': expected weekly or monthly", self.0)
    }
}

impl std::error::Error for RecurrenceParseError {}
