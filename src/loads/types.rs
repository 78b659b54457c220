//! Common types and traits for building load components.

use std::fmt;
use std::ops::Index;

use crate::occupancy::OccupancyMask;
use crate::time::SLOTS_PER_DAY;

/// One named contributor to total building demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Component {
    /// Space heating.
    Heating,
    /// Always-on server room.
    DataCentre,
    /// Desk equipment: PCs, monitors, printers.
    OfficeEquipment,
    /// Lighting and miscellaneous small power.
    LightingOther,
}

impl Component {
    /// All components in column order.
    pub const ALL: [Component; 4] = [
        Component::Heating,
        Component::DataCentre,
        Component::OfficeEquipment,
        Component::LightingOther,
    ];

    /// Column label used in tables and exports.
    pub fn label(self) -> &'static str {
        match self {
            Component::Heating => "Heating",
            Component::DataCentre => "Data Centre",
            Component::OfficeEquipment => "Office Equipment",
            Component::LightingOther => "LightingOther",
        }
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Per-slot energy for one component over a delivery window (kWh per slot).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DemandProfile([f32; SLOTS_PER_DAY]);

impl DemandProfile {
    /// Builds a profile by calling `f` for each slot index, clamping at zero.
    pub fn from_fn(mut f: impl FnMut(usize) -> f32) -> Self {
        Self(std::array::from_fn(|i| f(i).max(0.0)))
    }

    /// Energy summed over the whole window, in slot order.
    pub fn total(&self) -> f32 {
        self.0.iter().sum()
    }

    /// Iterates over per-slot values in slot order.
    pub fn iter(&self) -> impl Iterator<Item = f32> + '_ {
        self.0.iter().copied()
    }

    /// The values as a slice.
    pub fn as_slice(&self) -> &[f32] {
        &self.0
    }

    /// Number of slots, always [`SLOTS_PER_DAY`].
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false`; provided for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        false
    }
}

impl Index<usize> for DemandProfile {
    type Output = f32;

    fn index(&self, index: usize) -> &f32 {
        &self.0[index]
    }
}

/// A load whose per-slot demand is derived from building occupancy.
///
/// Every component of the building implements this so the demand model can
/// evaluate them uniformly; components that run regardless of occupancy
/// simply ignore the mask.
pub trait LoadEstimator {
    /// Returns the component's demand for each slot of the window.
    fn estimate(&mut self, mask: &OccupancyMask) -> DemandProfile;
}

/// Spreads a full working day's energy evenly over that day's heated or
/// staffed slots.
///
/// Returns zero when `slots` is zero, so an estimator with nothing to spread
/// over contributes nothing.
pub fn per_slot_rate(weekday_total_kwh: f32, slots: usize) -> f32 {
    if slots == 0 {
        return 0.0;
    }
    weekday_total_kwh / slots as f32
}

/// Applies `kwh_per_slot` to every slot where `on` is set, zero elsewhere.
pub fn switched_profile(on: impl Fn(usize) -> bool, kwh_per_slot: f32) -> DemandProfile {
    DemandProfile::from_fn(|i| if on(i) { kwh_per_slot } else { 0.0 })
}
