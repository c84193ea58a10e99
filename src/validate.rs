//! Input validation, run by callers before handing a record to the calculator.
//!
//! The calculator accepts anything numeric and treats gaps as zero. This is
//! where gaps get caught instead: every category has fields its formula
//! can't do without.

use jiff::Timestamp;

use crate::calculator::compute;
use crate::model::{ActivityInput, Category};

/// Why an activity record was refused.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("{field} is required for {category}")]
    MissingField {
        field: &'static str,
        category: Category,
    },

    #[error("{field} must be a finite, non-negative number (got {value})")]
    InvalidNumber { field: &'static str, value: f64 },

    #[error("a unit label is required")]
    MissingUnit,

    #[error("emissions for {category} are too large to represent")]
    Overflow { category: Category },
}

/// Check that `input` carries everything its category needs.
///
/// # Errors
///
/// Returns the first problem found, in field order.
pub fn validate(input: &ActivityInput) -> Result<(), ValidationError> {
    let category = input.category;

    match category {
        Category::FugitiveMethane => {
            require(input.methane_volume_m3, "methaneVolumeM3", category)?;
        }
        Category::LandDisturbance => {
            require(input.land_area_hectares, "landAreaHectares", category)?;
        }
        Category::DieselCombustion => {
            check_number(input.quantity, "quantity")?;
            if input.fuel_type.is_none() {
                return Err(ValidationError::MissingField {
                    field: "fuelType",
                    category,
                });
            }
        }
        Category::Transportation => {
            check_number(input.quantity, "quantity")?;
            if input.transport_mode.is_none() {
                return Err(ValidationError::MissingField {
                    field: "transportMode",
                    category,
                });
            }
            require(input.distance_km, "distanceKm", category)?;
        }
        Category::ElectricityConsumption | Category::ExplosivesUsage | Category::CoalExtraction => {
            check_number(input.quantity, "quantity")?;
        }
    }

    if input.unit_label.trim().is_empty() {
        return Err(ValidationError::MissingUnit);
    }

    // Each field can be finite while their product is not.
    let emissions = compute(input, Timestamp::UNIX_EPOCH).emissions_kg_co2e;
    if !emissions.is_finite() {
        return Err(ValidationError::Overflow { category });
    }

    Ok(())
}

fn require(
    value: Option<f64>,
    field: &'static str,
    category: Category,
) -> Result<(), ValidationError> {
    let value = value.ok_or(ValidationError::MissingField { field, category })?;
    check_number(value, field)
}

fn check_number(value: f64, field: &'static str) -> Result<(), ValidationError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ValidationError::InvalidNumber { field, value })
    }
}
