use tracing::debug;

use crate::config::{HeatingConfig, ScheduleConfig};
use crate::loads::types::{DemandProfile, LoadEstimator, per_slot_rate, switched_profile};
use crate::occupancy::OccupancyMask;
use crate::time::SLOTS_PER_DAY;

/// Space heating that runs at a fixed rate while the building is staffed,
/// switching on `preheat_slots` ahead of each occupied period.
///
/// There is no weather input: heating is either on or off.
///
/// # Examples
///
/// ```
/// use building_demand::loads::HeatingLoad;
/// use building_demand::occupancy::OccupancyMask;
///
/// let mut flags = [false; 48];
/// flags[18..38].fill(true);
/// let mask = OccupancyMask::try_from(flags.as_slice()).unwrap();
///
/// let heating = HeatingLoad::new(20.0, 4);
/// let profile = heating.demand(&mask);
/// assert_eq!(profile[13], 0.0);
/// assert_eq!(profile[14], 20.0);
/// assert_eq!(profile.total(), 480.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeatingLoad {
    /// Energy used in each heated slot (kWh).
    pub kwh_per_slot: f32,

    /// Number of slots the heating runs ahead of occupancy.
    pub preheat_slots: usize,
}

impl HeatingLoad {
    /// Creates a heating load.
    ///
    /// # Arguments
    ///
    /// * `kwh_per_slot` - Energy used in each heated slot (clamped at 0)
    /// * `preheat_slots` - Slots of warm-up before each staffed period
    pub fn new(kwh_per_slot: f32, preheat_slots: usize) -> Self {
        Self {
            kwh_per_slot: kwh_per_slot.max(0.0),
            preheat_slots,
        }
    }

    /// Calibrates the per-slot rate so a standard working day, pre-heat
    /// included, uses the configured total.
    pub fn calibrated(config: &HeatingConfig, schedule: &ScheduleConfig) -> Self {
        let standard = schedule.standard_day_mask();
        let heated = heated_slots(&standard, config.preheat_slots)
            .iter()
            .filter(|&&h| h)
            .count();
        Self::new(
            per_slot_rate(config.weekday_total_kwh, heated),
            config.preheat_slots,
        )
    }

    pub fn demand(&self, mask: &OccupancyMask) -> DemandProfile {
        let heated = heated_slots(mask, self.preheat_slots);
        let profile = switched_profile(|i| heated[i], self.kwh_per_slot);
        debug!(
            total_kwh = profile.total(),
            preheat_slots = self.preheat_slots,
            "heating demand"
        );
        profile
    }
}

/// Marks each slot that is staffed or within `preheat` slots before a staffed slot.
fn heated_slots(mask: &OccupancyMask, preheat: usize) -> [bool; SLOTS_PER_DAY] {
    std::array::from_fn(|i| {
        let horizon = (i + preheat).min(SLOTS_PER_DAY - 1);
        (i..=horizon).any(|j| mask[j])
    })
}

impl LoadEstimator for HeatingLoad {
    fn estimate(&mut self, mask: &OccupancyMask) -> DemandProfile {
        self.demand(mask)
    }
}
