use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Load-validation errors
#[derive(Debug, Error, Clone, PartialEq)]
pub enum LoadError {
    #[error("appliance '{name}': rated power must be a non-negative number, got {watts}W")]
    InvalidWatts { name: String, watts: f64 },
    #[error("appliance '{name}': daily hours must be within 0-24, got {hours}")]
    InvalidHours { name: String, hours: f64 },
}

/// One user-selected appliance entry: rated draw of a single unit, how many
/// identical units, and how many hours they run per day.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApplianceLoad {
    pub name: String,
    pub watts_each: f64,
    pub unit_count: u32,
    pub hours_per_day: f64,
}

impl ApplianceLoad {
    pub fn new(name: impl Into<String>, watts_each: f64, unit_count: u32, hours_per_day: f64) -> Self {
        Self {
            name: name.into(),
            watts_each,
            unit_count,
            hours_per_day,
        }
    }

    /// Check the entry's invariants. A zero unit count or zero hours is a
    /// valid entry that contributes nothing.
    pub fn validate(&self) -> Result<(), LoadError> {
        if !self.watts_each.is_finite() || self.watts_each < 0.0 {
            return Err(LoadError::InvalidWatts {
                name: self.name.clone(),
                watts: self.watts_each,
            });
        }
        // Written so that NaN fails the range check too.
        if !(self.hours_per_day >= 0.0 && self.hours_per_day <= 24.0) {
            return Err(LoadError::InvalidHours {
                name: self.name.clone(),
                hours: self.hours_per_day,
            });
        }
        Ok(())
    }

    /// Simultaneous draw of all units in watts.
    pub fn combined_watts(&self) -> f64 {
        self.watts_each * f64::from(self.unit_count)
    }

    /// Energy consumed per day in kWh.
    pub fn daily_energy_kwh(&self) -> f64 {
        self.watts_each * self.hours_per_day * f64::from(self.unit_count) / 1000.0
    }
}

/// Aggregate demand of one appliance selection at calculation time.
/// Derived, never persisted.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct LoadProfile {
    /// Total energy demand in kWh per day.
    pub daily_energy_kwh: f64,
    /// Largest single-appliance simultaneous draw in watts.
    pub peak_load_w: f64,
}

impl LoadProfile {
    pub const ZERO: Self = Self {
        daily_energy_kwh: 0.0,
        peak_load_w: 0.0,
    };
}

/// Sum an appliance selection into a [`LoadProfile`].
///
/// Every entry is validated first; no partial profile is returned when any
/// entry is invalid. An empty selection yields [`LoadProfile::ZERO`].
pub fn aggregate_load(loads: &[ApplianceLoad]) -> Result<LoadProfile, LoadError> {
    for load in loads {
        load.validate()?;
    }

    let daily_energy_kwh = loads.iter().map(ApplianceLoad::daily_energy_kwh).sum();
    let peak_load_w = loads
        .iter()
        .filter(|load| load.unit_count > 0)
        .map(|load| OrderedFloat(load.combined_watts()))
        .max()
        .map_or(0.0, OrderedFloat::into_inner);

    Ok(LoadProfile {
        daily_energy_kwh,
        peak_load_w,
    })
}
