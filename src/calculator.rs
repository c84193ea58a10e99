//! Emission calculator: activity data in, kg CO₂e out.
//!
//! Each category maps to one linear formula over fixed coefficients:
//!
//! | Category               | Formula                                  |
//! |------------------------|------------------------------------------|
//! | Diesel combustion      | quantity × fuel factor                   |
//! | Electricity            | quantity × 0.82                          |
//! | Explosives             | quantity × 970                           |
//! | Transportation         | quantity × distance (km) × mode factor   |
//! | Fugitive methane       | volume (m³) × 0.716 × 28                 |
//! | Land disturbance       | area (ha) × 300 000                      |
//! | Coal extraction        | quantity × 2.42                          |
//!
//! The calculator never fails. A missing fuel type or transport mode is
//! a zero factor, not an error; validation happens before this point.

use jiff::Timestamp;

use crate::model::{Activity, ActivityInput, EmissionResult};

/// Grid electricity, kg CO₂e per kWh.
pub const GRID_EMISSION_FACTOR: f64 = 0.82;

/// Explosives, kg CO₂e per ton.
pub const EXPLOSIVES_EMISSION_FACTOR: f64 = 970.0;

/// Methane density at standard conditions, kg per m³.
pub const METHANE_DENSITY_KG_PER_M3: f64 = 0.716;

/// 100-year global warming potential of methane.
pub const METHANE_GWP: f64 = 28.0;

/// Carbon released per hectare of disturbed land, kg CO₂e.
pub const LAND_DISTURBANCE_FACTOR: f64 = 300_000.0;

/// Coal extraction, kg CO₂e per ton.
pub const COAL_EXTRACTION_FACTOR: f64 = 2.42;

/// Compute the emissions for one activity record.
///
/// `computed_at` is stamped onto the result as-is; the calculator never
/// reads the clock. Identical inputs yield identical figures and
/// explanations.
#[must_use]
pub fn compute(input: &ActivityInput, computed_at: Timestamp) -> EmissionResult {
    let (emissions, explanation) = evaluate(&input.activity(), &input.unit_label);

    EmissionResult {
        category: input.category,
        emissions_kg_co2e: round_to(emissions, 2),
        unit_label: input.unit_label.clone(),
        explanation,
        computed_at,
    }
}

/// Applies the category's formula, returning the unrounded figure and
/// a description of the terms used.
fn evaluate(activity: &Activity, unit: &str) -> (f64, String) {
    match *activity {
        Activity::DieselCombustion {
            quantity,
            fuel: Some(fuel),
        } => {
            let factor = fuel.emission_factor();
            (
                quantity * factor,
                format!("{fuel} EF = {factor} × {}", amount(quantity, unit)),
            )
        }
        Activity::DieselCombustion {
            quantity,
            fuel: None,
        } => {
            tracing::warn!(quantity, "fuel type missing, emission factor is 0");
            (
                0.0,
                format!("Unspecified fuel EF = 0 × {}", amount(quantity, unit)),
            )
        }
        Activity::ElectricityConsumption { quantity } => (
            quantity * GRID_EMISSION_FACTOR,
            format!(
                "Grid EF = {GRID_EMISSION_FACTOR} × {}",
                amount(quantity, unit)
            ),
        ),
        Activity::ExplosivesUsage { quantity } => (
            quantity * EXPLOSIVES_EMISSION_FACTOR,
            format!(
                "Explosives EF = {EXPLOSIVES_EMISSION_FACTOR} × {}",
                amount(quantity, unit)
            ),
        ),
        Activity::Transportation {
            quantity,
            distance_km,
            mode: Some(mode),
        } => {
            let factor = mode.emission_factor();
            (
                quantity * distance_km * factor,
                format!(
                    "{mode} EF = {factor} × {} × {distance_km} km",
                    amount(quantity, unit)
                ),
            )
        }
        Activity::Transportation {
            quantity,
            distance_km,
            mode: None,
        } => {
            tracing::warn!(quantity, distance_km, "transport mode missing, emission factor is 0");
            (
                0.0,
                format!(
                    "Unspecified mode EF = 0 × {} × {distance_km} km",
                    amount(quantity, unit)
                ),
            )
        }
        Activity::FugitiveMethane { volume_m3 } => (
            volume_m3 * METHANE_DENSITY_KG_PER_M3 * METHANE_GWP,
            format!(
                "CH₄ density {METHANE_DENSITY_KG_PER_M3} kg/m³ × GWP {METHANE_GWP} × {volume_m3} m³"
            ),
        ),
        Activity::LandDisturbance { hectares } => (
            hectares * LAND_DISTURBANCE_FACTOR,
            format!("Land-use EF = {LAND_DISTURBANCE_FACTOR} × {hectares} ha"),
        ),
        Activity::CoalExtraction { quantity } => (
            quantity * COAL_EXTRACTION_FACTOR,
            format!(
                "Coal EF = {COAL_EXTRACTION_FACTOR} × {}",
                amount(quantity, unit)
            ),
        ),
    }
}

/// `1500 litres`, or just `1500` when no unit was given.
fn amount(quantity: f64, unit: &str) -> String {
    let unit = unit.trim();
    if unit.is_empty() {
        quantity.to_string()
    } else {
        format!("{quantity} {unit}")
    }
}

/// Round half away from zero to `places` decimal places.
///
/// Values too large to scale are returned as-is.
pub(crate) fn round_to(value: f64, places: i32) -> f64 {
    let scale = 10f64.powi(places);
    let scaled = value * scale;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / scale
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::model::{Category, FuelType, TransportMode};

    fn at() -> Timestamp {
        Timestamp::new(1_700_000_000, 0).unwrap()
    }

    #[test]
    fn diesel_combustion_uses_fuel_factor() {
        let input = ActivityInput::new(Category::DieselCombustion, 1500.0, "litres")
            .with_fuel(FuelType::Diesel);
        let result = compute(&input, at());

        assert_eq!(result.emissions_kg_co2e, 4020.0);
        assert_eq!(result.explanation, "Diesel EF = 2.68 × 1500 litres");
        assert!(result.explanation.contains("2.68 × 1500"));
        assert_eq!(result.unit_label, "litres");
        assert_eq!(result.category, Category::DieselCombustion);
    }

    #[test]
    fn every_fuel_has_its_own_factor() {
        let cases = [
            (FuelType::Diesel, 268.0),
            (FuelType::Petrol, 231.0),
            (FuelType::Coal, 242.0),
            (FuelType::NaturalGas, 190.0),
        ];
        for (fuel, expected) in cases {
            let input = ActivityInput::new(Category::DieselCombustion, 100.0, "litres")
                .with_fuel(fuel);
            assert_eq!(compute(&input, at()).emissions_kg_co2e, expected, "{fuel}");
        }
    }

    #[test]
    fn missing_fuel_yields_zero() {
        let input = ActivityInput::new(Category::DieselCombustion, 1500.0, "litres");
        let result = compute(&input, at());

        assert_eq!(result.emissions_kg_co2e, 0.0);
        assert!(result.explanation.starts_with("Unspecified fuel"));
    }

    #[test]
    fn transportation_multiplies_distance_and_mode() {
        let input = ActivityInput::new(Category::Transportation, 10.0, "tons")
            .with_transport(TransportMode::Truck, 250.0);
        let result = compute(&input, at());

        assert_eq!(result.emissions_kg_co2e, 250.0);
        assert_eq!(result.explanation, "Truck EF = 0.1 × 10 tons × 250 km");
    }

    #[test]
    fn transportation_without_mode_yields_zero() {
        let mut input = ActivityInput::new(Category::Transportation, 10.0, "tons");
        input.distance_km = Some(250.0);

        assert_eq!(compute(&input, at()).emissions_kg_co2e, 0.0);
    }

    #[test]
    fn fugitive_methane_uses_density_and_gwp() {
        let input = ActivityInput::new(Category::FugitiveMethane, 0.0, "m³")
            .with_methane_volume(100.0);
        let result = compute(&input, at());

        assert_eq!(result.emissions_kg_co2e, 2004.8);
        assert!(result.explanation.contains("0.716"));
        assert!(result.explanation.contains("GWP 28"));
    }

    #[test]
    fn fixed_factor_categories() {
        let cases = [
            (Category::ElectricityConsumption, 1000.0, 820.0),
            (Category::ExplosivesUsage, 2.0, 1940.0),
            (Category::CoalExtraction, 1000.0, 2420.0),
        ];
        for (category, quantity, expected) in cases {
            let input = ActivityInput::new(category, quantity, category.default_unit());
            assert_eq!(compute(&input, at()).emissions_kg_co2e, expected, "{category}");
        }
    }

    #[test]
    fn land_disturbance_uses_area_not_quantity() {
        let input = ActivityInput::new(Category::LandDisturbance, 999.0, "hectares")
            .with_land_area(1.5);
        let result = compute(&input, at());

        assert_eq!(result.emissions_kg_co2e, 450_000.0);
        assert_eq!(result.explanation, "Land-use EF = 300000 × 1.5 ha");
    }

    #[test]
    fn coal_extraction_rounds_to_two_places() {
        for quantity in [0.0, 0.001, 1.0, 3.333, 17.125, 1234.567, 1e6] {
            let input = ActivityInput::new(Category::CoalExtraction, quantity, "tons");
            let result = compute(&input, at());
            assert_relative_eq!(result.emissions_kg_co2e, round_to(quantity * 2.42, 2));
        }
    }

    #[test]
    fn never_negative_for_non_negative_inputs() {
        for category in Category::ALL {
            for value in [0.0, 0.5, 42.0, 10_000.0] {
                let input = ActivityInput::new(category, value, category.default_unit())
                    .with_fuel(FuelType::Petrol)
                    .with_transport(TransportMode::Rail, value)
                    .with_land_area(value)
                    .with_methane_volume(value);
                let result = compute(&input, at());
                assert!(result.emissions_kg_co2e >= 0.0, "{category} at {value}");
            }
        }
    }

    #[test]
    fn identical_inputs_give_identical_results() {
        let input = ActivityInput::new(Category::Transportation, 7.5, "tons")
            .with_transport(TransportMode::Ship, 1200.0);
        let first = compute(&input, at());
        let second = compute(&input, Timestamp::new(1_800_000_000, 0).unwrap());

        assert_eq!(first.emissions_kg_co2e, second.emissions_kg_co2e);
        assert_eq!(first.explanation, second.explanation);
    }

    #[test]
    fn empty_unit_label_is_left_out_of_explanation() {
        let input = ActivityInput::new(Category::ElectricityConsumption, 10.0, "");
        assert_eq!(compute(&input, at()).explanation, "Grid EF = 0.82 × 10");
    }

    #[test]
    fn round_to_leaves_unscalable_values_alone() {
        assert_eq!(round_to(f64::MAX, 2), f64::MAX);
        assert_eq!(round_to(1e307, 2), 1e307);
        assert!(round_to(f64::INFINITY, 2).is_infinite());
    }

    #[test]
    fn overflowing_product_is_infinite() {
        let input = ActivityInput::new(Category::ExplosivesUsage, 1e306, "tons");
        assert!(compute(&input, at()).emissions_kg_co2e.is_infinite());
    }

    #[test]
    fn round_to_handles_places() {
        assert_eq!(round_to(1.005_1, 2), 1.01);
        assert_eq!(round_to(2.449, 1), 2.4);
        assert_eq!(round_to(1234.5, 0), 1235.0);
    }
}
