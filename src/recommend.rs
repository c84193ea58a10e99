//! Recommendation generator: emissions figure in, ordered advisories out.
//!
//! Diesel, electricity and transport each have a threshold. Strictly above
//! it, two advisories come back (High, then Medium); at or below, a single
//! Low one. Every other category gets a generic Medium "monitor" advisory,
//! so the list is never empty.

use crate::model::{Category, Priority, Recommendation};

/// Diesel combustion threshold, kg CO₂e.
pub const DIESEL_THRESHOLD_KG: f64 = 2000.0;

/// Electricity consumption threshold, kg CO₂e.
pub const ELECTRICITY_THRESHOLD_KG: f64 = 1000.0;

/// Transportation threshold, kg CO₂e.
pub const TRANSPORT_THRESHOLD_KG: f64 = 1500.0;

/// Generate advisories for an emissions figure, most urgent first.
#[must_use]
pub fn generate(category: Category, emissions_kg_co2e: f64) -> Vec<Recommendation> {
    let metric = format!("{category}: {emissions_kg_co2e:.2} kg CO₂e");

    let advisories = match category {
        Category::DieselCombustion if emissions_kg_co2e > DIESEL_THRESHOLD_KG => DIESEL_ABOVE,
        Category::DieselCombustion => DIESEL_WITHIN,
        Category::ElectricityConsumption if emissions_kg_co2e > ELECTRICITY_THRESHOLD_KG => {
            ELECTRICITY_ABOVE
        }
        Category::ElectricityConsumption => ELECTRICITY_WITHIN,
        Category::Transportation if emissions_kg_co2e > TRANSPORT_THRESHOLD_KG => TRANSPORT_ABOVE,
        Category::Transportation => TRANSPORT_WITHIN,
        Category::ExplosivesUsage
        | Category::FugitiveMethane
        | Category::CoalExtraction
        | Category::LandDisturbance => MONITOR,
    };

    advisories.iter().map(|a| a.build(&metric)).collect()
}

/// Fixed advisory text, completed with the metric at generation time.
struct Advisory {
    title: &'static str,
    description: &'static str,
    priority: Priority,
    icon_key: &'static str,
}

impl Advisory {
    fn build(&self, metric: &str) -> Recommendation {
        Recommendation {
            title: self.title.to_string(),
            description: self.description.to_string(),
            metric: metric.to_string(),
            priority: self.priority,
            icon_key: self.icon_key.to_string(),
        }
    }
}

const DIESEL_ABOVE: &[Advisory] = &[
    Advisory {
        title: "Switch to Cleaner Fuels",
        description: "Diesel combustion is above 2000 kg CO₂e. Move haul trucks and \
            generators to biodiesel blends, CNG or electric drivetrains.",
        priority: Priority::High,
        icon_key: "fuel",
    },
    Advisory {
        title: "Optimize Engine Performance",
        description: "Schedule engine tuning, cut idling time and track fuel use per tonne moved.",
        priority: Priority::Medium,
        icon_key: "settings",
    },
];

const DIESEL_WITHIN: &[Advisory] = &[Advisory {
    title: "Maintain Fuel Efficiency",
    description: "Diesel emissions are within range. Keep up regular engine maintenance \
        and fuel monitoring.",
    priority: Priority::Low,
    icon_key: "check-circle",
}];

const ELECTRICITY_ABOVE: &[Advisory] = &[
    Advisory {
        title: "Adopt Renewable Energy",
        description: "Electricity emissions are above 1000 kg CO₂e. Add on-site solar or \
            contract renewable power for ventilation and processing loads.",
        priority: Priority::High,
        icon_key: "sun",
    },
    Advisory {
        title: "Reduce Energy Waste",
        description: "Audit conveyors, pumps and ventilation fans; fit variable-speed drives \
            and efficient lighting.",
        priority: Priority::Medium,
        icon_key: "zap",
    },
];

const ELECTRICITY_WITHIN: &[Advisory] = &[Advisory {
    title: "Efficient Consumption",
    description: "Electricity use is within range. Keep metering major loads to hold \
        consumption steady.",
    priority: Priority::Low,
    icon_key: "check-circle",
}];

const TRANSPORT_ABOVE: &[Advisory] = &[
    Advisory {
        title: "Switch to EV Fleet",
        description: "Transport emissions are above 1500 kg CO₂e. Replace diesel haulage \
            with electric trucks or shift loads to rail.",
        priority: Priority::High,
        icon_key: "truck",
    },
    Advisory {
        title: "Optimize Routes",
        description: "Plan shorter routes, consolidate loads and avoid empty return trips.",
        priority: Priority::Medium,
        icon_key: "map-pin",
    },
];

const TRANSPORT_WITHIN: &[Advisory] = &[Advisory {
    title: "Maintain Fleet Health",
    description: "Transport emissions are within range. Keep vehicles serviced and tyres \
        at the right pressure.",
    priority: Priority::Low,
    icon_key: "check-circle",
}];

const MONITOR: &[Advisory] = &[Advisory {
    title: "Monitor Activity Trends",
    description: "Track this activity across reporting periods to catch rising emissions early.",
    priority: Priority::Medium,
    icon_key: "activity",
}];
