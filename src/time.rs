//! Delivery-window time grid and reference-time normalization.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};

use crate::error::DemandError;

/// Number of half-hour slots in one delivery window.
pub const SLOTS_PER_DAY: usize = 48;

/// Length of one slot in minutes.
pub const SLOT_MINUTES: i64 = 30;

/// Time of day at which every delivery window starts.
pub const ANCHOR_TIME: NaiveTime = match NaiveTime::from_hms_opt(23, 0, 0) {
    Some(t) => t,
    None => panic!("23:00:00 is a valid time of day"),
};

/// Pins a reference date-time to the 23:00 anchor of its calendar day.
///
/// Any two instants on the same calendar date map to the same anchor, so
/// weekday classification is stable across a day. The delivery window that
/// starts at the anchor covers mostly the *following* date: an anchor that
/// falls on a Friday describes Saturday's demand.
///
/// # Examples
///
/// ```
/// use chrono::{Datelike, NaiveDate, Weekday};
/// use building_demand::time::adjust_datetime;
///
/// let now = NaiveDate::from_ymd_opt(2024, 3, 8)
///     .and_then(|d| d.and_hms_opt(9, 41, 17))
///     .unwrap();
/// let anchor = adjust_datetime(now);
/// assert_eq!(anchor.weekday(), Weekday::Fri);
/// assert_eq!(anchor.time().to_string(), "23:00:00");
/// ```
pub fn adjust_datetime(now: NaiveDateTime) -> NaiveDateTime {
    now.date().and_time(ANCHOR_TIME)
}

/// Time of day at which slot `index` of an anchored window starts, wrapping
/// past midnight.
pub fn anchored_slot_time(index: usize) -> NaiveTime {
    let offset = TimeDelta::minutes(SLOT_MINUTES * (index % SLOTS_PER_DAY) as i64);
    ANCHOR_TIME.overflowing_add_signed(offset).0
}

/// The ordered sequence of 48 half-hour slot starts for one delivery window.
///
/// # Examples
///
/// ```
/// use building_demand::time::{TimeGrid, SLOTS_PER_DAY};
/// use chrono::NaiveDate;
///
/// let now = NaiveDate::from_ymd_opt(2024, 3, 5)
///     .and_then(|d| d.and_hms_opt(14, 0, 0))
///     .unwrap();
/// let grid = TimeGrid::for_reference(now).unwrap();
/// assert_eq!(grid.iter().count(), SLOTS_PER_DAY);
/// assert_eq!(grid.slot_start(2).to_string(), "2024-03-06 00:00:00");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeGrid {
    slots: [NaiveDateTime; SLOTS_PER_DAY],
}

impl TimeGrid {
    /// Builds a grid whose first slot starts exactly at `anchor`.
    ///
    /// # Errors
    ///
    /// Returns [`DemandError::WindowOutOfRange`] if the window would run past
    /// the last representable date.
    pub fn starting_at(anchor: NaiveDateTime) -> Result<Self, DemandError> {
        let mut slots = [anchor; SLOTS_PER_DAY];
        for (i, slot) in slots.iter_mut().enumerate().skip(1) {
            *slot = anchor
                .checked_add_signed(TimeDelta::minutes(SLOT_MINUTES * i as i64))
                .ok_or(DemandError::WindowOutOfRange { anchor })?;
        }
        Ok(Self { slots })
    }

    /// Builds the grid for the delivery window that `now` belongs to.
    ///
    /// # Errors
    ///
    /// Returns [`DemandError::WindowOutOfRange`] when `now` falls on the last
    /// representable date, whose window ends on a date chrono cannot hold.
    pub fn for_reference(now: NaiveDateTime) -> Result<Self, DemandError> {
        Self::starting_at(adjust_datetime(now))
    }

    /// Start of the first slot.
    pub fn anchor(&self) -> NaiveDateTime {
        self.slots[0]
    }

    /// The calendar date most of the window falls on (the day after the anchor
    /// when the grid is anchored at 23:00).
    pub fn delivery_date(&self) -> NaiveDate {
        self.slots[SLOTS_PER_DAY - 1].date()
    }

    /// Start of slot `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= SLOTS_PER_DAY`.
    pub fn slot_start(&self, index: usize) -> NaiveDateTime {
        self.slots[index]
    }

    /// Iterates over all slot starts in chronological order.
    pub fn iter(&self) -> impl Iterator<Item = NaiveDateTime> + '_ {
        self.slots.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike, Weekday};

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .and_then(|date| date.and_hms_opt(h, min, s))
            .unwrap()
    }

    #[test]
    fn adjust_pins_to_anchor_on_same_date() {
        let adjusted = adjust_datetime(at(2024, 3, 5, 0, 0, 1));
        assert_eq!(adjusted, at(2024, 3, 5, 23, 0, 0));
    }

    #[test]
    fn adjust_is_stable_within_a_day() {
        let morning = adjust_datetime(at(2024, 3, 5, 6, 15, 0));
        let night = adjust_datetime(at(2024, 3, 5, 23, 59, 59));
        assert_eq!(morning, night);
    }

    #[test]
    fn adjust_is_idempotent() {
        let once = adjust_datetime(at(2024, 12, 31, 17, 3, 9));
        assert_eq!(adjust_datetime(once), once);
    }

    #[test]
    fn adjust_keeps_naive_weekday() {
        // Friday stays Friday; the shift to Saturday happens through the grid.
        let adjusted = adjust_datetime(at(2024, 3, 8, 10, 0, 0));
        assert_eq!(adjusted.weekday(), Weekday::Fri);
    }

    #[test]
    fn adjust_handles_extreme_dates() {
        let adjusted = adjust_datetime(NaiveDateTime::MIN);
        assert_eq!(adjusted.time(), ANCHOR_TIME);
    }

    #[test]
    fn grid_is_half_hourly_and_ordered() {
        let grid = TimeGrid::for_reference(at(2024, 3, 5, 12, 0, 0)).unwrap();
        let slots: Vec<_> = grid.iter().collect();
        assert_eq!(slots.len(), SLOTS_PER_DAY);
        assert_eq!(slots[0], at(2024, 3, 5, 23, 0, 0));
        assert_eq!(slots[47], at(2024, 3, 6, 22, 30, 0));
        for pair in slots.windows(2) {
            assert_eq!(pair[1] - pair[0], TimeDelta::minutes(30));
        }
    }

    #[test]
    fn grid_covers_every_half_hour_once() {
        let grid = TimeGrid::for_reference(at(2024, 3, 5, 12, 0, 0)).unwrap();
        let mut minutes: Vec<u32> = grid
            .iter()
            .map(|t| t.hour() * 60 + t.minute())
            .collect();
        minutes.sort_unstable();
        let expected: Vec<u32> = (0..48).map(|i| i * 30).collect();
        assert_eq!(minutes, expected);
    }

    #[test]
    fn earliest_date_has_a_full_window() {
        let grid = TimeGrid::for_reference(NaiveDateTime::MIN).unwrap();
        assert_eq!(grid.anchor().date(), NaiveDate::MIN);
        assert_eq!(grid.delivery_date(), NaiveDate::MIN.succ_opt().unwrap());
    }

    #[test]
    fn last_representable_date_is_rejected() {
        let now = NaiveDate::MAX.and_hms_opt(12, 0, 0).unwrap();
        let anchor = NaiveDate::MAX.and_time(ANCHOR_TIME);
        assert!(matches!(
            TimeGrid::for_reference(now),
            Err(DemandError::WindowOutOfRange { anchor: a }) if a == anchor
        ));
    }

    #[test]
    fn day_before_last_date_still_fits() {
        let eve = NaiveDate::MAX.pred_opt().unwrap().and_hms_opt(8, 0, 0).unwrap();
        let grid = TimeGrid::for_reference(eve).unwrap();
        assert_eq!(grid.delivery_date(), NaiveDate::MAX);
        assert_eq!(grid.slot_start(47).time().to_string(), "22:30:00");
    }

    #[test]
    fn anchored_slot_time_wraps_past_midnight() {
        assert_eq!(anchored_slot_time(0), ANCHOR_TIME);
        assert_eq!(anchored_slot_time(2), NaiveTime::MIN);
        assert_eq!(anchored_slot_time(47).to_string(), "22:30:00");
        let grid = TimeGrid::for_reference(at(2024, 3, 5, 12, 0, 0)).unwrap();
        for (i, start) in grid.iter().enumerate() {
            assert_eq!(start.time(), anchored_slot_time(i));
        }
    }

    #[test]
    fn friday_anchor_delivers_saturday() {
        let grid = TimeGrid::for_reference(at(2024, 3, 8, 9, 0, 0)).unwrap();
        assert_eq!(grid.delivery_date().weekday(), Weekday::Sat);
    }

    #[test]
    #[should_panic]
    fn slot_start_out_of_range_panics() {
        let grid = TimeGrid::for_reference(at(2024, 3, 5, 12, 0, 0)).unwrap();
        grid.slot_start(SLOTS_PER_DAY);
    }
}
