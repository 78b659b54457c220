//! Building energy demand: the assembled table and the entry points used
//! by downstream bidding logic.

/// Config-driven demand model.
pub mod model;
/// Row-aligned demand table and daily summary.
pub mod table;

use chrono::{Local, NaiveDateTime};

use crate::error::DemandError;
use crate::loads::DemandProfile;

pub use model::DemandModel;
pub use table::{DailySummary, DemandRow, DemandTable};

/// One window of data centre demand from the baseline building.
///
/// Each call draws afresh, so successive calls differ.
pub fn get_data_centre_demand() -> DemandProfile {
    DemandModel::baseline().data_centre_demand()
}

/// Baseline office equipment demand for `mask`.
///
/// # Errors
///
/// Returns [`DemandError::SlotCountMismatch`] unless `mask` has exactly 48 entries.
pub fn get_office_equipment_demand(mask: &[bool]) -> Result<DemandProfile, DemandError> {
    DemandModel::baseline().office_equipment_demand(mask)
}

/// Baseline lighting and other demand for `mask`.
///
/// # Errors
///
/// Returns [`DemandError::SlotCountMismatch`] unless `mask` has exactly 48 entries.
pub fn get_lighting_and_other_demand(mask: &[bool]) -> Result<DemandProfile, DemandError> {
    DemandModel::baseline().lighting_and_other_demand(mask)
}

/// Baseline heating demand for `mask`.
///
/// # Errors
///
/// Returns [`DemandError::SlotCountMismatch`] unless `mask` has exactly 48 entries.
pub fn get_heating_demand(mask: &[bool]) -> Result<DemandProfile, DemandError> {
    DemandModel::baseline().heating_demand(mask)
}

/// Baseline demand table for the window starting at 23:00 today (local time).
///
/// # Errors
///
/// See [`get_energy_demand_at`].
pub fn get_energy_demand() -> Result<DemandTable, DemandError> {
    get_energy_demand_at(Local::now().naive_local())
}

/// Baseline demand table for the window that `now` belongs to.
///
/// # Errors
///
/// Returns [`DemandError::WindowOutOfRange`] if `now` is on the last date
/// chrono can represent.
pub fn get_energy_demand_at(now: NaiveDateTime) -> Result<DemandTable, DemandError> {
    DemandModel::baseline().energy_demand_at(now)
}
