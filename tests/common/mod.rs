//! Shared test fixtures for integration tests.

#![allow(dead_code)]

use building_demand::config::BuildingConfig;
use building_demand::demand::DemandModel;
use chrono::{NaiveDate, NaiveDateTime};

/// Reference time at `hour`:00 on the given date.
pub fn at(y: i32, m: u32, d: u32, hour: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .and_then(|date| date.and_hms_opt(hour, 0, 0))
        .expect("valid test date")
}

/// Baseline model with a fixed data centre seed.
pub fn seeded_baseline(seed: u64) -> DemandModel {
    let mut config = BuildingConfig::baseline();
    config.simulation.seed = Some(seed);
    DemandModel::new(config).expect("baseline config is valid")
}

/// Asserts that every row's total is the sum of its four components.
pub fn assert_totals_are_sums(table: &building_demand::DemandTable) {
    for r in table.rows() {
        assert_eq!(
            r.total,
            r.heating + r.data_centre + r.office_equipment + r.lighting_other,
            "total mismatch at slot {}",
            r.slot
        );
    }
}
