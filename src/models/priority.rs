//! Expenditure priority
//!
//! Priorities are ordered: high-priority expenditures are refilled first.
//! Budget documents may spell a priority either as its ordinal (0, 1, 2)
//! or as its symbolic name ("high", "medium", "low").

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// The priority of an expenditure
///
/// Declaration order defines refill order: `High < Medium < Low`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    /// All priorities in refill order
    pub fn all() -> &'static [Self] {
        &[Self::High, Self::Medium, Self::Low]
    }

    /// The symbolic name used in budget documents and display
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }

    fn from_ordinal(ordinal: u64) -> Option<Self> {
        match ordinal {
            0 => Some(Self::High),
            1 => Some(Self::Medium),
            2 => Some(Self::Low),
            _ => None,
        }
    }

    fn from_name(name: &str) -> Option<Self> {
        match name {
            "high" => Some(Self::High),
            "medium" => Some(Self::Medium),
            "low" => Some(Self::Low),
            _ => None,
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for Priority {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

struct PriorityVisitor;

impl Visitor<'_> for PriorityVisitor {
    type Value = Priority;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a priority ordinal (0-2) or name (high/medium/low)")
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Priority, E> {
        Priority::from_ordinal(value)
            .ok_or_else(|| E::custom(format!("unknown priority ordinal: {}", value)))
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Priority, E> {
        u64::try_from(value)
            .ok()
            .and_then(Priority::from_ordinal)
            .ok_or_else(|| E::custom(format!("unknown priority ordinal: {}", value)))
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Priority, E> {
        Priority::from_name(value)
            .ok_or_else(|| E::custom(format!("unknown priority name: {}", value)))
    }
}

impl<'de> Deserialize<'de> for Priority {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(PriorityVisitor)
    }
}
