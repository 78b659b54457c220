use rand::{Rng, SeedableRng, rngs::StdRng};
use tracing::debug;

use crate::config::DataCentreConfig;
use crate::loads::types::{DemandProfile, LoadEstimator};
use crate::occupancy::OccupancyMask;

/// An always-on server room whose draw wanders within fixed bounds.
///
/// Each slot draws uniformly from `[min_kwh_per_slot, max_kwh_per_slot]`,
/// independently of occupancy. With the bounds validated against
/// [`crate::config::DATA_CENTRE_DAILY_CEILING_KWH`], no window can exceed
/// the daily ceiling.
///
/// # Examples
///
/// ```
/// use building_demand::loads::DataCentreLoad;
///
/// let mut dc = DataCentreLoad::new(150.0, 200.0, 42);
/// let day = dc.demand();
/// assert!(day.iter().all(|kwh| (150.0..=200.0).contains(&kwh)));
/// ```
#[derive(Debug, Clone)]
pub struct DataCentreLoad {
    /// Lowest energy drawn in any slot (kWh).
    pub min_kwh_per_slot: f32,

    /// Highest energy drawn in any slot (kWh).
    pub max_kwh_per_slot: f32,

    /// Random number generator for per-slot draws.
    rng: StdRng,
}

impl DataCentreLoad {
    /// Creates a server-room load with reproducible draws.
    ///
    /// # Arguments
    ///
    /// * `min_kwh_per_slot` - Lower bound of each slot's draw (clamped at 0)
    /// * `max_kwh_per_slot` - Upper bound of each slot's draw (raised to the minimum if lower)
    /// * `seed` - Random seed for reproducible draws
    pub fn new(min_kwh_per_slot: f32, max_kwh_per_slot: f32, seed: u64) -> Self {
        Self::with_rng(
            min_kwh_per_slot,
            max_kwh_per_slot,
            StdRng::seed_from_u64(seed),
        )
    }

    /// Creates a server-room load from configuration.
    ///
    /// Uses `seed` when given, otherwise seeds from the operating system.
    pub fn from_config(config: &DataCentreConfig, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self::with_rng(config.min_kwh_per_slot, config.max_kwh_per_slot, rng)
    }

    fn with_rng(min_kwh_per_slot: f32, max_kwh_per_slot: f32, rng: StdRng) -> Self {
        let min = min_kwh_per_slot.max(0.0);
        Self {
            min_kwh_per_slot: min,
            max_kwh_per_slot: max_kwh_per_slot.max(min),
            rng,
        }
    }

    /// Draws one delivery window of server-room demand.
    pub fn demand(&mut self) -> DemandProfile {
        let (lo, hi) = (self.min_kwh_per_slot, self.max_kwh_per_slot);
        let profile = DemandProfile::from_fn(|_| {
            if hi > lo {
                self.rng.random_range(lo..=hi).min(hi)
            } else {
                lo
            }
        });
        debug!(total_kwh = profile.total(), "data centre demand drawn");
        profile
    }
}

impl LoadEstimator for DataCentreLoad {
    /// Ignores the mask: the server room never switches off.
    fn estimate(&mut self, _mask: &OccupancyMask) -> DemandProfile {
        self.demand()
    }
}
