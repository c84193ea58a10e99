//! Report: a saved calculation.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{ActivityInput, EmissionResult, Recommendation};

/// An input, the result computed from it, and the advisories it produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub id: Uuid,
    pub input: ActivityInput,
    pub result: EmissionResult,
    pub recommendations: Vec<Recommendation>,
}

impl Report {
    /// Bundles a calculation under a fresh random id.
    #[must_use]
    pub fn new(
        input: ActivityInput,
        result: EmissionResult,
        recommendations: Vec<Recommendation>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            input,
            result,
            recommendations,
        }
    }

    /// The first eight characters of the id, for display.
    #[must_use]
    pub fn short_id(&self) -> String {
        self.id.to_string()[..8].to_string()
    }
}
