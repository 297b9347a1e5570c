//! Property tests for the estimator invariants: purity, monotonicity, and
//! total validation.

use greenflux_sizing::{aggregate_load, estimate_system, ApplianceLoad, EstimatorConfig};
use proptest::prelude::*;

fn appliance_strategy() -> impl Strategy<Value = ApplianceLoad> {
    ("[A-Za-z ]{1,16}", 0.0f64..5_000.0, 0u32..8, 0.0f64..=24.0)
        .prop_map(|(name, watts, count, hours)| ApplianceLoad::new(name, watts, count, hours))
}

proptest! {
    /// Repeated invocation over identical inputs yields bit-identical output.
    #[test]
    fn estimates_are_idempotent(loads in proptest::collection::vec(appliance_strategy(), 0..6)) {
        let config = EstimatorConfig::default();
        let first = estimate_system(&loads, &config).unwrap();
        let second = estimate_system(&loads, &config).unwrap();
        prop_assert_eq!(first, second);
    }

    /// Running an appliance longer never shrinks any output.
    #[test]
    fn longer_hours_never_shrink_the_system(
        watts in 1.0f64..3_000.0,
        count in 1u32..5,
        hours in 0.0f64..20.0,
        extra in 0.0f64..4.0,
    ) {
        let config = EstimatorConfig::default();
        let base =
            estimate_system(&[ApplianceLoad::new("Load", watts, count, hours)], &config).unwrap();
        let more =
            estimate_system(&[ApplianceLoad::new("Load", watts, count, hours + extra)], &config)
                .unwrap();

        prop_assert!(more.profile.daily_energy_kwh >= base.profile.daily_energy_kwh);
        prop_assert!(more.sizing.panel_count >= base.sizing.panel_count);
        prop_assert!(more.sizing.battery_count >= base.sizing.battery_count);
        prop_assert!(more.financial.estimated_cost_naira >= base.financial.estimated_cost_naira);
        prop_assert!(more.financial.monthly_savings_naira >= base.financial.monthly_savings_naira);
    }

    /// Adding units never shrinks any output.
    #[test]
    fn more_units_never_shrink_the_system(
        watts in 1.0f64..3_000.0,
        count in 0u32..5,
        hours in 0.0f64..=24.0,
    ) {
        let config = EstimatorConfig::default();
        let base =
            estimate_system(&[ApplianceLoad::new("Load", watts, count, hours)], &config).unwrap();
        let more =
            estimate_system(&[ApplianceLoad::new("Load", watts, count + 1, hours)], &config)
                .unwrap();

        prop_assert!(more.profile.daily_energy_kwh >= base.profile.daily_energy_kwh);
        prop_assert!(more.profile.peak_load_w >= base.profile.peak_load_w);
        prop_assert!(more.sizing.panel_count >= base.sizing.panel_count);
        prop_assert!(more.sizing.battery_count >= base.sizing.battery_count);
        prop_assert!(more.financial.estimated_cost_naira >= base.financial.estimated_cost_naira);
    }

    /// Aggregation rejects bad input with an error, never a panic, including
    /// NaN and infinities.
    #[test]
    fn aggregation_is_total(
        watts in any::<f64>(),
        count in any::<u32>(),
        hours in any::<f64>(),
    ) {
        let _ = aggregate_load(&[ApplianceLoad::new("Anything", watts, count, hours)]);
    }

    /// Valid profiles always size without error and with finite outputs.
    #[test]
    fn sizing_outputs_are_finite(loads in proptest::collection::vec(appliance_strategy(), 0..6)) {
        let estimate = estimate_system(&loads, &EstimatorConfig::default()).unwrap();

        prop_assert!(estimate.profile.daily_energy_kwh.is_finite());
        prop_assert!(estimate.profile.peak_load_w.is_finite());
        prop_assert!(estimate.financial.estimated_cost_naira.is_finite());
        prop_assert!(estimate.environmental.yearly_co2_kg.is_finite());
    }
}
