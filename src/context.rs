//! Emission context: everyday equivalents for an emissions figure.
//!
//! Puts a kg CO₂e number next to things people can picture (trees, car
//! kilometres, flights, household electricity) and against a fixed
//! neutrality goal.

use serde::Serialize;

use crate::calculator::round_to;

/// CO₂ absorbed by an average tree in a year, kg.
pub const TREE_ABSORPTION_KG_PER_YEAR: f64 = 21.0;

/// Average petrol car, kg CO₂ per km.
pub const CAR_KG_PER_KM: f64 = 0.120;

/// One-hour domestic flight, kg CO₂ per passenger.
pub const FLIGHT_KG_PER_HOUR: f64 = 90.0;

/// Average household electricity for a month, kg CO₂.
pub const HOUSEHOLD_KG_PER_MONTH: f64 = 915.0;

/// The neutral benchmark an activity is compared against, kg CO₂e.
pub const NEUTRAL_GOAL_KG: f64 = 1000.0;

/// A reference activity with a known footprint.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Benchmark {
    pub label: &'static str,
    pub emissions_kg_co2e: f64,
}

/// Reference footprints shown beside an activity.
pub const BENCHMARKS: [Benchmark; 3] = [
    Benchmark {
        label: "1 Car (100 km)",
        emissions_kg_co2e: 12.0,
    },
    Benchmark {
        label: "1 Flight (1hr)",
        emissions_kg_co2e: 90.0,
    },
    Benchmark {
        label: "1 Household (1 mo)",
        emissions_kg_co2e: 915.0,
    },
];

/// How an emissions figure compares with the neutral goal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NeutralGoal {
    pub goal_kg: f64,

    /// What's left before the goal is used up; never negative.
    pub remaining_kg: f64,

    /// Emitted share of `emitted + remaining`, in `0.0..=1.0`.
    pub emitted_fraction: f64,
}

/// Everyday equivalents for one emissions figure.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmissionContext {
    pub emissions_kg_co2e: f64,

    /// Trees needed to absorb the emissions in a year (one decimal).
    pub trees_needed: f64,

    /// Equivalent petrol car distance, whole km.
    pub car_km: f64,

    /// Equivalent one-hour flights (one decimal).
    pub flights: f64,

    /// Equivalent months of household electricity (two decimals).
    pub household_months: f64,

    pub neutral_goal: NeutralGoal,
}

impl EmissionContext {
    #[must_use]
    pub fn from_emissions(emissions_kg_co2e: f64) -> Self {
        let remaining_kg = (NEUTRAL_GOAL_KG - emissions_kg_co2e).max(0.0);
        let total = emissions_kg_co2e + remaining_kg;
        let emitted_fraction = if total > 0.0 {
            (emissions_kg_co2e / total).clamp(0.0, 1.0)
        } else {
            0.0
        };

        Self {
            emissions_kg_co2e,
            trees_needed: round_to(emissions_kg_co2e / TREE_ABSORPTION_KG_PER_YEAR, 1),
            car_km: round_to(emissions_kg_co2e / CAR_KG_PER_KM, 0),
            flights: round_to(emissions_kg_co2e / FLIGHT_KG_PER_HOUR, 1),
            household_months: round_to(emissions_kg_co2e / HOUSEHOLD_KG_PER_MONTH, 2),
            neutral_goal: NeutralGoal {
                goal_kg: NEUTRAL_GOAL_KG,
                remaining_kg,
                emitted_fraction,
            },
        }
    }
}
