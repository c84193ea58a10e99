//! CLI-facing argument types, mapped to the domain model.

use clap::{Args, ValueEnum};

use minecarbon::model::{ActivityInput, Category, FuelType, TransportMode};

/// Activity fields as flags. Which ones matter depends on `--category`.
#[derive(Debug, Args)]
pub struct ActivityArgs {
    /// Activity category.
    #[arg(long, value_enum, required_unless_present = "input")]
    pub category: Option<CategoryArg>,

    /// Amount of activity (litres, kWh, tons).
    #[arg(long, default_value_t = 0.0)]
    pub quantity: f64,

    /// Unit label carried onto the result. Defaults per category.
    #[arg(long)]
    pub unit: Option<String>,

    /// Fuel burned (diesel combustion).
    #[arg(long, value_enum)]
    pub fuel: Option<FuelArg>,

    /// How cargo moved (transportation).
    #[arg(long, value_enum)]
    pub mode: Option<ModeArg>,

    /// Distance travelled in km (transportation).
    #[arg(long)]
    pub distance_km: Option<f64>,

    /// Area of land disturbed in hectares (land disturbance).
    #[arg(long)]
    pub land_area_ha: Option<f64>,

    /// Methane released in m³ (fugitive methane).
    #[arg(long)]
    pub methane_m3: Option<f64>,

    /// Where electricity came from, e.g. "Grid" or "Captive Plant".
    #[arg(long)]
    pub electricity_source: Option<String>,
}

impl ActivityArgs {
    /// Build the activity record, or `None` when no category was given.
    pub fn to_input(&self) -> Option<ActivityInput> {
        let category = self.category?.to_domain();
        let unit = self
            .unit
            .clone()
            .unwrap_or_else(|| category.default_unit().to_string());

        Some(ActivityInput {
            category,
            quantity: self.quantity,
            fuel_type: self.fuel.map(FuelArg::to_domain),
            transport_mode: self.mode.map(ModeArg::to_domain),
            distance_km: self.distance_km,
            land_area_hectares: self.land_area_ha,
            methane_volume_m3: self.methane_m3,
            electricity_source: self.electricity_source.clone(),
            unit_label: unit,
        })
    }
}

/// CLI-facing category, mapped to the domain `Category`.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum CategoryArg {
    DieselCombustion,
    ElectricityConsumption,
    ExplosivesUsage,
    FugitiveMethane,
    CoalExtraction,
    LandDisturbance,
    Transportation,
}

impl CategoryArg {
    pub fn to_domain(self) -> Category {
        match self {
            Self::DieselCombustion => Category::DieselCombustion,
            Self::ElectricityConsumption => Category::ElectricityConsumption,
            Self::ExplosivesUsage => Category::ExplosivesUsage,
            Self::FugitiveMethane => Category::FugitiveMethane,
            Self::CoalExtraction => Category::CoalExtraction,
            Self::LandDisturbance => Category::LandDisturbance,
            Self::Transportation => Category::Transportation,
        }
    }
}

/// CLI-facing fuel type, mapped to the domain `FuelType`.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum FuelArg {
    Diesel,
    Petrol,
    Coal,
    NaturalGas,
}

impl FuelArg {
    fn to_domain(self) -> FuelType {
        match self {
            Self::Diesel => FuelType::Diesel,
            Self::Petrol => FuelType::Petrol,
            Self::Coal => FuelType::Coal,
            Self::NaturalGas => FuelType::NaturalGas,
        }
    }
}

/// CLI-facing transport mode, mapped to the domain `TransportMode`.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ModeArg {
    Truck,
    Rail,
    Ship,
    Air,
}

impl ModeArg {
    fn to_domain(self) -> TransportMode {
        match self {
            Self::Truck => TransportMode::Truck,
            Self::Rail => TransportMode::Rail,
            Self::Ship => TransportMode::Ship,
            Self::Air => TransportMode::Air,
        }
    }
}
