use serde::{Deserialize, Serialize};

use crate::domain::LoadProfile;

/// Engineering ratios and safety margins used to convert a load profile
/// into equipment counts.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SizingConfig {
    /// Average daily peak-sun hours used to convert demand into array capacity.
    pub sun_hours_per_day: f64,
    /// Nominal rating of a single panel in watts.
    pub panel_watts: f64,
    /// Rated capacity of a single battery in amp-hours.
    pub battery_capacity_ah: f64,
    /// Nominal battery bank voltage in volts.
    pub battery_voltage_v: f64,
    /// Oversizing margin applied when sizing the PV array.
    pub array_buffer_fraction: f64,
    /// Depth-of-discharge headroom applied when sizing the battery bank.
    pub battery_buffer_fraction: f64,
    /// Surge margin applied to peak load when sizing the inverter.
    pub inverter_surge_fraction: f64,
}

impl Default for SizingConfig {
    fn default() -> Self {
        Self {
            sun_hours_per_day: 6.0,
            panel_watts: 400.0,
            battery_capacity_ah: 200.0,
            battery_voltage_v: 12.0,
            array_buffer_fraction: 0.30,
            battery_buffer_fraction: 0.20,
            inverter_surge_fraction: 0.25,
        }
    }
}

impl SizingConfig {
    /// Energy stored by a single battery in kWh (200 Ah × 12 V = 2.4 kWh at
    /// the defaults).
    pub fn battery_unit_kwh(&self) -> f64 {
        self.battery_capacity_ah * self.battery_voltage_v / 1000.0
    }
}

/// Equipment counts for one load profile.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct SystemSizing {
    pub panel_count: u32,
    pub battery_count: u32,
    /// Required inverter rating in watts, rounded up to the next whole watt.
    pub inverter_w: u32,
}

impl SystemSizing {
    pub const ZERO: Self = Self {
        panel_count: 0,
        battery_count: 0,
        inverter_w: 0,
    };

    /// Inverter rating in kVA, as quoted by equipment vendors.
    pub fn inverter_kva(&self) -> f64 {
        f64::from(self.inverter_w) / 1000.0
    }
}

/// Convert a load profile into panel, battery, and inverter counts.
///
/// The array buffer is applied to the demand *after* dividing by sun-hours
/// (`daily / sun_hours × (1 + buffer)`), and each battery contributes its
/// full `capacity_ah × voltage` of storage. All counts round up, so any
/// non-zero demand needs at least one panel and one battery.
pub fn size_system(profile: &LoadProfile, config: &SizingConfig) -> SystemSizing {
    // Divide by sun-hours first, then buffer.
    let system_size_kw =
        profile.daily_energy_kwh / config.sun_hours_per_day * (1.0 + config.array_buffer_fraction);
    let panel_count = (system_size_kw * 1000.0 / config.panel_watts).ceil() as u32;

    let bank_size_kwh = profile.daily_energy_kwh * (1.0 + config.battery_buffer_fraction);
    let battery_count = (bank_size_kwh / config.battery_unit_kwh()).ceil() as u32;

    let inverter_w = (profile.peak_load_w * (1.0 + config.inverter_surge_fraction)).ceil() as u32;

    SystemSizing {
        panel_count,
        battery_count,
        inverter_w,
    }
}
