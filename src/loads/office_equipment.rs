use tracing::debug;

use crate::config::{OfficeEquipmentConfig, ScheduleConfig};
use crate::loads::types::{DemandProfile, LoadEstimator, per_slot_rate, switched_profile};
use crate::occupancy::OccupancyMask;

/// Desk equipment that draws a flat load whenever the office is staffed.
///
/// The per-slot draw is the configured full-weekday total divided by the
/// number of staffed slots in a standard working day, so a full weekday
/// always reproduces the configured total.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OfficeEquipmentLoad {
    /// Energy drawn in each staffed slot (kWh).
    pub kwh_per_slot: f32,
}

impl OfficeEquipmentLoad {
    /// Creates a load that draws `kwh_per_slot` in every staffed slot.
    pub fn new(kwh_per_slot: f32) -> Self {
        Self {
            kwh_per_slot: kwh_per_slot.max(0.0),
        }
    }

    /// Calibrates the per-slot draw against a standard day under `schedule`.
    pub fn calibrated(config: &OfficeEquipmentConfig, schedule: &ScheduleConfig) -> Self {
        let slots = schedule.standard_day_mask().active_slots();
        Self::new(per_slot_rate(config.weekday_total_kwh, slots))
    }

    /// Demand for each slot: the flat draw where `mask` is set, zero elsewhere.
    pub fn demand(&self, mask: &OccupancyMask) -> DemandProfile {
        let profile = switched_profile(|i| mask[i], self.kwh_per_slot);
        debug!(total_kwh = profile.total(), "office equipment demand");
        profile
    }
}

impl LoadEstimator for OfficeEquipmentLoad {
    fn estimate(&mut self, mask: &OccupancyMask) -> DemandProfile {
        self.demand(mask)
    }
}
