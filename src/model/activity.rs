//! Activity types: what happened at the mine, and how much of it.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The kind of activity being accounted for.
///
/// Closed set: each category selects exactly one emission formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    DieselCombustion,
    ElectricityConsumption,
    ExplosivesUsage,
    FugitiveMethane,
    CoalExtraction,
    LandDisturbance,
    Transportation,
}

impl Category {
    /// Every category, in data-entry order.
    pub const ALL: [Self; 7] = [
        Self::DieselCombustion,
        Self::ElectricityConsumption,
        Self::ExplosivesUsage,
        Self::FugitiveMethane,
        Self::CoalExtraction,
        Self::LandDisturbance,
        Self::Transportation,
    ];

    /// Human-readable name, as shown on reports and exports.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::DieselCombustion => "Diesel Combustion",
            Self::ElectricityConsumption => "Electricity Consumption",
            Self::ExplosivesUsage => "Explosives Usage",
            Self::FugitiveMethane => "Fugitive Methane",
            Self::CoalExtraction => "Coal Extraction",
            Self::LandDisturbance => "Land Disturbance / Deforestation",
            Self::Transportation => "Transportation",
        }
    }

    /// The unit label used when the caller doesn't supply one.
    #[must_use]
    pub fn default_unit(self) -> &'static str {
        match self {
            Self::DieselCombustion => "litres",
            Self::ElectricityConsumption => "kWh",
            Self::ExplosivesUsage | Self::CoalExtraction | Self::Transportation => "tons",
            Self::FugitiveMethane => "m³",
            Self::LandDisturbance => "hectares",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Fuel burned in a combustion activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FuelType {
    Diesel,
    Petrol,
    Coal,
    NaturalGas,
}

impl FuelType {
    /// Emission factor in kg CO₂e per unit of fuel.
    #[must_use]
    pub fn emission_factor(self) -> f64 {
        match self {
            Self::Diesel => 2.68,
            Self::Petrol => 2.31,
            Self::Coal => 2.42,
            Self::NaturalGas => 1.9,
        }
    }
}

impl fmt::Display for FuelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Diesel => "Diesel",
            Self::Petrol => "Petrol",
            Self::Coal => "Coal",
            Self::NaturalGas => "Natural Gas",
        })
    }
}

/// How material is moved in a transportation activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransportMode {
    Truck,
    Rail,
    Ship,
    Air,
}

impl TransportMode {
    /// Emission factor in kg CO₂e per unit of cargo per kilometre.
    #[must_use]
    pub fn emission_factor(self) -> f64 {
        match self {
            Self::Truck => 0.1,
            Self::Rail => 0.02,
            Self::Ship => 0.015,
            Self::Air => 0.6,
        }
    }
}

impl fmt::Display for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Truck => "Truck",
            Self::Rail => "Rail",
            Self::Ship => "Ship",
            Self::Air => "Air",
        })
    }
}

/// Activity data as entered: one flat record for every category.
///
/// Which optional fields matter depends on `category`. Absent numeric
/// fields count as zero when lowered into an [`Activity`]; making sure the
/// required ones are present is the job of [`crate::validate`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityInput {
    pub category: Category,

    /// Amount of activity, in whatever unit `unit_label` names.
    #[serde(default)]
    pub quantity: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fuel_type: Option<FuelType>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transport_mode: Option<TransportMode>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance_km: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub land_area_hectares: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub methane_volume_m3: Option<f64>,

    /// Free-text note on where electricity came from (grid, captive plant).
    /// Carried through to reports; it doesn't change the grid factor.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub electricity_source: Option<String>,

    /// Free-text unit descriptor, echoed onto the result.
    #[serde(default)]
    pub unit_label: String,
}

impl ActivityInput {
    /// A bare input with only the fields every category shares.
    pub fn new(category: Category, quantity: f64, unit_label: impl Into<String>) -> Self {
        Self {
            category,
            quantity,
            fuel_type: None,
            transport_mode: None,
            distance_km: None,
            land_area_hectares: None,
            methane_volume_m3: None,
            electricity_source: None,
            unit_label: unit_label.into(),
        }
    }

    #[must_use]
    pub fn with_fuel(mut self, fuel: FuelType) -> Self {
        self.fuel_type = Some(fuel);
        self
    }

    #[must_use]
    pub fn with_transport(mut self, mode: TransportMode, distance_km: f64) -> Self {
        self.transport_mode = Some(mode);
        self.distance_km = Some(distance_km);
        self
    }

    #[must_use]
    pub fn with_land_area(mut self, hectares: f64) -> Self {
        self.land_area_hectares = Some(hectares);
        self
    }

    #[must_use]
    pub fn with_methane_volume(mut self, volume_m3: f64) -> Self {
        self.methane_volume_m3 = Some(volume_m3);
        self
    }

    #[must_use]
    pub fn with_electricity_source(mut self, source: impl Into<String>) -> Self {
        self.electricity_source = Some(source.into());
        self
    }

    /// Lower the flat record into the variant its category calls for.
    ///
    /// Missing numbers become `0.0`. A missing fuel type or transport mode
    /// stays `None`; the calculator gives it a zero factor.
    #[must_use]
    pub fn activity(&self) -> Activity {
        let quantity = self.quantity;
        match self.category {
            Category::DieselCombustion => Activity::DieselCombustion {
                quantity,
                fuel: self.fuel_type,
            },
            Category::ElectricityConsumption => Activity::ElectricityConsumption { quantity },
            Category::ExplosivesUsage => Activity::ExplosivesUsage { quantity },
            Category::FugitiveMethane => Activity::FugitiveMethane {
                volume_m3: self.methane_volume_m3.unwrap_or(0.0),
            },
            Category::CoalExtraction => Activity::CoalExtraction { quantity },
            Category::LandDisturbance => Activity::LandDisturbance {
                hectares: self.land_area_hectares.unwrap_or(0.0),
            },
            Category::Transportation => Activity::Transportation {
                quantity,
                distance_km: self.distance_km.unwrap_or(0.0),
                mode: self.transport_mode,
            },
        }
    }
}

/// An activity carrying exactly the inputs its emission formula reads.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Activity {
    DieselCombustion {
        quantity: f64,
        fuel: Option<FuelType>,
    },
    ElectricityConsumption {
        quantity: f64,
    },
    ExplosivesUsage {
        quantity: f64,
    },
    FugitiveMethane {
        volume_m3: f64,
    },
    CoalExtraction {
        quantity: f64,
    },
    LandDisturbance {
        hectares: f64,
    },
    Transportation {
        quantity: f64,
        distance_km: f64,
        mode: Option<TransportMode>,
    },
}

impl Activity {
    #[must_use]
    pub fn category(&self) -> Category {
        match self {
            Self::DieselCombustion { .. } => Category::DieselCombustion,
            Self::ElectricityConsumption { .. } => Category::ElectricityConsumption,
            Self::ExplosivesUsage { .. } => Category::ExplosivesUsage,
            Self::FugitiveMethane { .. } => Category::FugitiveMethane,
            Self::CoalExtraction { .. } => Category::CoalExtraction,
            Self::LandDisturbance { .. } => Category::LandDisturbance,
            Self::Transportation { .. } => Category::Transportation,
        }
    }
}
