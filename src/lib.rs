//! GreenFlux sizing service: turns a household appliance selection into a
//! solar system sizing with cost, savings, and avoided-CO₂ estimates, and
//! serves it over a small HTTP API.

pub mod api;
pub mod catalog;
pub mod config;
pub mod domain;
pub mod sizing;
pub mod telemetry;

pub use domain::{aggregate_load, ApplianceLoad, LoadError, LoadProfile};
pub use sizing::{estimate_system, EstimatorConfig, SystemEstimate};
