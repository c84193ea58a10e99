//! Recommendation types: advisories derived from an emissions figure.

use std::fmt;

use serde::{Deserialize, Serialize};

/// How urgent an advisory is.
///
/// Ordering sorts the most urgent first: `High < Medium < Low`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        })
    }
}

/// A single advisory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub title: String,
    pub description: String,

    /// Summary of the figure that triggered the advisory.
    pub metric: String,

    pub priority: Priority,

    /// Symbolic icon tag for whatever renders the advisory.
    pub icon_key: String,
}
