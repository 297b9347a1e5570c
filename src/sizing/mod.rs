//! Solar system sizing estimator.
//!
//! Four pure stages chained in one synchronous pass: aggregate the selected
//! appliances into a daily load profile, size the array/bank/inverter for
//! it, then price the system and estimate avoided emissions. No I/O, no
//! shared state; the only failure mode is load validation at the boundary.

pub mod environmental;
pub mod financial;
pub mod system;

pub use environmental::*;
pub use financial::*;
pub use system::*;

use serde::{Deserialize, Serialize};

use crate::domain::{aggregate_load, ApplianceLoad, LoadError, LoadProfile};

/// All estimator knobs with their documented defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EstimatorConfig {
    pub sizing: SizingConfig,
    pub tariffs: TariffConfig,
    pub emissions: EmissionConfig,
}

/// Complete output of one estimator invocation. A fresh snapshot per call,
/// never persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SystemEstimate {
    pub profile: LoadProfile,
    pub sizing: SystemSizing,
    pub financial: FinancialEstimate,
    pub environmental: EnvironmentalEstimate,
}

/// Run every estimator stage over one appliance selection.
///
/// Validation errors surface before any sizing or pricing is attempted.
pub fn estimate_system(
    loads: &[ApplianceLoad],
    config: &EstimatorConfig,
) -> Result<SystemEstimate, LoadError> {
    let profile = aggregate_load(loads)?;
    let sizing = size_system(&profile, &config.sizing);
    let financial = estimate_financials(&profile, &sizing, &config.tariffs);
    let environmental = estimate_environmental_impact(&profile, &config.emissions);

    Ok(SystemEstimate {
        profile,
        sizing,
        financial,
        environmental,
    })
}
