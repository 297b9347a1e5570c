use serde::{Deserialize, Serialize};

use crate::domain::LoadProfile;
use crate::sizing::system::SystemSizing;

const DAYS_PER_MONTH: f64 = 30.0;
const MONTHS_PER_YEAR: f64 = 12.0;

/// Equipment prices and displaced energy tariffs, all in naira.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TariffConfig {
    pub price_per_panel_naira: f64,
    pub price_per_battery_naira: f64,
    pub price_per_kva_inverter_naira: f64,
    pub fixed_installation_cost_naira: f64,
    /// Grid electricity tariff in naira per kWh.
    pub grid_tariff_naira_per_kwh: f64,
    /// Pump price of generator fuel in naira per liter.
    pub generator_fuel_price_naira_per_liter: f64,
    /// Fuel burned per kWh of generator output.
    pub generator_liters_per_kwh: f64,
}

impl Default for TariffConfig {
    fn default() -> Self {
        Self {
            price_per_panel_naira: 200_000.0,
            price_per_battery_naira: 300_000.0,
            price_per_kva_inverter_naira: 400_000.0,
            fixed_installation_cost_naira: 150_000.0,
            grid_tariff_naira_per_kwh: 66.0,
            generator_fuel_price_naira_per_liter: 700.0,
            generator_liters_per_kwh: 0.7,
        }
    }
}

/// Capital cost, monthly savings, and payback period for one sizing.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct FinancialEstimate {
    pub estimated_cost_naira: f64,
    /// Monthly saving from displaced grid purchases.
    pub monthly_grid_savings_naira: f64,
    /// Monthly saving from displaced generator fuel.
    pub monthly_generator_savings_naira: f64,
    /// Sum of both savings terms. This treats the full demand as displaced
    /// from the grid *and* from a generator at the same time, so it is an
    /// additive upper bound; callers wanting a single-source figure should
    /// use one of the component fields.
    pub monthly_savings_naira: f64,
    /// Years for cumulative savings to cover the upfront cost.
    /// [`f64::INFINITY`] when monthly savings are zero.
    pub payback_years: f64,
}

/// Price a sizing and estimate what it saves per month.
pub fn estimate_financials(
    profile: &LoadProfile,
    sizing: &SystemSizing,
    tariffs: &TariffConfig,
) -> FinancialEstimate {
    let estimated_cost_naira = f64::from(sizing.panel_count) * tariffs.price_per_panel_naira
        + f64::from(sizing.battery_count) * tariffs.price_per_battery_naira
        + sizing.inverter_kva() * tariffs.price_per_kva_inverter_naira
        + tariffs.fixed_installation_cost_naira;

    let monthly_grid_savings_naira =
        profile.daily_energy_kwh * tariffs.grid_tariff_naira_per_kwh * DAYS_PER_MONTH;
    let monthly_generator_savings_naira = profile.daily_energy_kwh
        * tariffs.generator_fuel_price_naira_per_liter
        * tariffs.generator_liters_per_kwh
        * DAYS_PER_MONTH;
    let monthly_savings_naira = monthly_grid_savings_naira + monthly_generator_savings_naira;

    let payback_years = if monthly_savings_naira > 0.0 {
        estimated_cost_naira / (monthly_savings_naira * MONTHS_PER_YEAR)
    } else {
        f64::INFINITY
    };

    FinancialEstimate {
        estimated_cost_naira,
        monthly_grid_savings_naira,
        monthly_generator_savings_naira,
        monthly_savings_naira,
        payback_years,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference_profile() -> LoadProfile {
        LoadProfile {
            daily_energy_kwh: 3.87,
            peak_load_w: 150.0,
        }
    }

    fn reference_sizing() -> SystemSizing {
        SystemSizing {
            panel_count: 3,
            battery_count: 2,
            inverter_w: 188,
        }
    }

    #[test]
    fn test_reference_household_cost() {
        let financial =
            estimate_financials(&reference_profile(), &reference_sizing(), &TariffConfig::default());

        // 3 × 200k + 2 × 300k + 0.188 × 400k + 150k
        assert!((financial.estimated_cost_naira - 1_425_200.0).abs() < 1e-6);
    }

    #[test]
    fn test_reference_household_savings() {
        let financial =
            estimate_financials(&reference_profile(), &reference_sizing(), &TariffConfig::default());

        // 3.87 × 66 × 30
        assert!((financial.monthly_grid_savings_naira - 7_662.6).abs() < 1e-6);
        // 3.87 × 700 × 0.7 × 30
        assert!((financial.monthly_generator_savings_naira - 56_889.0).abs() < 1e-6);
        assert!((financial.monthly_savings_naira - 64_551.6).abs() < 1e-6);
        assert!((financial.payback_years - 1.8399).abs() < 1e-3);
    }

    #[test]
    fn test_savings_sum_both_sources() {
        let financial =
            estimate_financials(&reference_profile(), &reference_sizing(), &TariffConfig::default());

        assert!(
            (financial.monthly_savings_naira
                - (financial.monthly_grid_savings_naira + financial.monthly_generator_savings_naira))
                .abs()
                < f64::EPSILON
        );
    }

    #[test]
    fn test_zero_savings_yield_infinite_payback() {
        let financial = estimate_financials(
            &LoadProfile::ZERO,
            &SystemSizing::ZERO,
            &TariffConfig::default(),
        );

        assert!(financial.payback_years.is_infinite());
        assert!(!financial.payback_years.is_nan());
        // The fixed installation cost still applies to an empty system.
        assert!(
            (financial.estimated_cost_naira
                - TariffConfig::default().fixed_installation_cost_naira)
                .abs()
                < f64::EPSILON
        );
    }

    #[test]
    fn test_free_tariffs_yield_infinite_payback() {
        let tariffs = TariffConfig {
            grid_tariff_naira_per_kwh: 0.0,
            generator_fuel_price_naira_per_liter: 0.0,
            ..Default::default()
        };
        let financial = estimate_financials(&reference_profile(), &reference_sizing(), &tariffs);

        assert_eq!(financial.monthly_savings_naira, 0.0);
        assert!(financial.payback_years.is_infinite());
    }
}
