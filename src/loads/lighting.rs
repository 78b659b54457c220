use tracing::debug;

use crate::config::{LightingConfig, ScheduleConfig};
use crate::loads::types::{DemandProfile, LoadEstimator, per_slot_rate, switched_profile};
use crate::occupancy::OccupancyMask;

/// Lighting and miscellaneous small power, on while the office is staffed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LightingLoad {
    /// Energy drawn in each staffed slot (kWh).
    pub kwh_per_slot: f32,
}

impl LightingLoad {
    /// Creates a load that draws `kwh_per_slot` in every staffed slot.
    pub fn new(kwh_per_slot: f32) -> Self {
        Self {
            kwh_per_slot: kwh_per_slot.max(0.0),
        }
    }

    /// Calibrates the per-slot draw so a standard working day under
    /// `schedule` uses the configured total.
    pub fn calibrated(config: &LightingConfig, schedule: &ScheduleConfig) -> Self {
        let slots = schedule.standard_day_mask().active_slots();
        Self::new(per_slot_rate(config.weekday_total_kwh, slots))
    }

    pub fn demand(&self, mask: &OccupancyMask) -> DemandProfile {
        let profile = switched_profile(|i| mask[i], self.kwh_per_slot);
        debug!(total_kwh = profile.total(), "lighting and other demand");
        profile
    }
}

impl LoadEstimator for LightingLoad {
    fn estimate(&mut self, mask: &OccupancyMask) -> DemandProfile {
        self.demand(mask)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn baseline() -> LightingLoad {
        LightingLoad::calibrated(&LightingConfig::default(), &ScheduleConfig::default())
    }

    #[test]
    fn full_weekday_sums_to_configured_total() {
        let mask = ScheduleConfig::default().standard_day_mask();
        let profile = baseline().demand(&mask);
        assert_eq!(profile.total(), 320.0);
        assert_eq!(profile[18], 16.0);
    }

    #[test]
    fn vacant_day_sums_to_zero() {
        assert_eq!(baseline().demand(&OccupancyMask::vacant()).total(), 0.0);
    }

    #[test]
    fn partial_day_scales_with_active_slots() {
        let mut flags = [false; 48];
        flags[20..25].fill(true);
        let mask = OccupancyMask::try_from(flags.as_slice()).unwrap();
        assert_eq!(baseline().demand(&mask).total(), 80.0);
    }
}
