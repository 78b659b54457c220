//! Per-slot "active office" flags derived from the time grid.

use std::ops::Index;

use chrono::{Datelike, NaiveDateTime, NaiveTime};

use crate::config::ScheduleConfig;
use crate::error::DemandError;
use crate::time::{SLOTS_PER_DAY, TimeGrid, anchored_slot_time};

/// One boolean per slot, `true` while the building is staffed.
///
/// Always exactly [`SLOTS_PER_DAY`] long; a slice of any other length is
/// rejected by [`TryFrom`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OccupancyMask([bool; SLOTS_PER_DAY]);

impl OccupancyMask {
    /// Builds the mask for `grid` under `schedule`.
    pub fn from_grid(grid: &TimeGrid, schedule: &ScheduleConfig) -> Self {
        Self(std::array::from_fn(|i| {
            schedule.is_active_at(grid.slot_start(i))
        }))
    }

    /// A mask with every slot inactive.
    pub fn vacant() -> Self {
        Self([false; SLOTS_PER_DAY])
    }

    /// Number of active slots.
    pub fn active_slots(&self) -> usize {
        self.0.iter().filter(|&&a| a).count()
    }

    /// Returns `true` if no slot is active.
    pub fn is_vacant(&self) -> bool {
        self.active_slots() == 0
    }

    /// Iterates over the flags in slot order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = bool> + ExactSizeIterator + '_ {
        self.0.iter().copied()
    }

    /// The flags as a slice.
    pub fn as_slice(&self) -> &[bool] {
        &self.0
    }
}

impl Index<usize> for OccupancyMask {
    type Output = bool;

    fn index(&self, index: usize) -> &bool {
        &self.0[index]
    }
}

impl TryFrom<&[bool]> for OccupancyMask {
    type Error = DemandError;

    fn try_from(flags: &[bool]) -> Result<Self, Self::Error> {
        let arr: [bool; SLOTS_PER_DAY] =
            flags.try_into().map_err(|_| DemandError::SlotCountMismatch {
                expected: SLOTS_PER_DAY,
                actual: flags.len(),
            })?;
        Ok(Self(arr))
    }
}

impl ScheduleConfig {
    /// Returns `true` if a `close` of 00:00 stands for the end of the day.
    pub fn closes_at_midnight(&self) -> bool {
        self.close == NaiveTime::MIN
    }

    /// Returns `true` if `time` falls inside opening hours, ignoring the day.
    pub fn is_open_at(&self, time: NaiveTime) -> bool {
        self.open <= time && (time < self.close || self.closes_at_midnight())
    }

    /// Returns `true` if the slot starting at `start` is staffed.
    pub fn is_active_at(&self, start: NaiveDateTime) -> bool {
        self.working_days.contains(&start.weekday()) && self.is_open_at(start.time())
    }

    /// The mask of a standard working day, used to calibrate per-slot loads.
    ///
    /// Laid out like a delivery window, starting at the 23:00 anchor, with
    /// every slot treated as a working day.
    pub fn standard_day_mask(&self) -> OccupancyMask {
        OccupancyMask(std::array::from_fn(|i| {
            self.is_open_at(anchored_slot_time(i))
        }))
    }
}
