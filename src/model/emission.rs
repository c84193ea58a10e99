//! Emission result: what the calculator hands back.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::Category;

/// One computed emissions figure, immutable once produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmissionResult {
    pub category: Category,

    /// kg CO₂-equivalent, rounded to two decimal places.
    #[serde(rename = "emissionsKgCO2e")]
    pub emissions_kg_co2e: f64,

    pub unit_label: String,

    /// Names the coefficients and raw inputs behind the figure,
    /// e.g. `Diesel EF = 2.68 × 1500 litres`.
    pub explanation: String,

    /// Supplied by the caller; used downstream for ordering and identity.
    pub computed_at: Timestamp,
}
