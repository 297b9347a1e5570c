use serde::{Deserialize, Serialize};

use crate::domain::LoadProfile;

const DAYS_PER_YEAR: f64 = 365.0;

/// Emission factors for the displaced energy sources.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EmissionConfig {
    /// CO₂ emitted per kWh of grid electricity.
    pub grid_co2_kg_per_kwh: f64,
    /// CO₂ emitted per kWh of generator output.
    pub generator_co2_kg_per_kwh: f64,
    /// CO₂ absorbed by one tree over a year.
    pub co2_absorbed_kg_per_tree_per_year: f64,
}

impl Default for EmissionConfig {
    fn default() -> Self {
        Self {
            grid_co2_kg_per_kwh: 0.5,
            generator_co2_kg_per_kwh: 0.8,
            co2_absorbed_kg_per_tree_per_year: 20.0,
        }
    }
}

/// Avoided emissions for one load profile.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct EnvironmentalEstimate {
    /// CO₂ avoided per year in kg. Sums the grid and generator factors, the
    /// same additive upper bound as the savings estimate.
    pub yearly_co2_kg: f64,
    /// Trees needed to absorb the same amount of CO₂ per year.
    pub trees_equivalent: u32,
}

/// Estimate the CO₂ a solar system avoids for this load profile.
pub fn estimate_environmental_impact(
    profile: &LoadProfile,
    config: &EmissionConfig,
) -> EnvironmentalEstimate {
    let yearly_co2_kg = profile.daily_energy_kwh
        * (config.grid_co2_kg_per_kwh + config.generator_co2_kg_per_kwh)
        * DAYS_PER_YEAR;
    let trees_equivalent =
        (yearly_co2_kg / config.co2_absorbed_kg_per_tree_per_year).round() as u32;

    EnvironmentalEstimate {
        yearly_co2_kg,
        trees_equivalent,
    }
}
