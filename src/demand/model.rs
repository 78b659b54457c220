//! Demand model that wires the time grid, occupancy and load components.

use chrono::NaiveDateTime;
use tracing::info;

use crate::config::BuildingConfig;
use crate::error::DemandError;
use crate::loads::{
    DataCentreLoad, DemandProfile, HeatingLoad, LightingLoad, LoadEstimator, OfficeEquipmentLoad,
};
use crate::occupancy::OccupancyMask;
use crate::time::TimeGrid;

use super::table::DemandTable;

/// Building demand model owning the calibrated load components.
///
/// Holds typed component fields rather than trait objects since the
/// component set is fixed.
#[derive(Debug, Clone)]
pub struct DemandModel {
    config: BuildingConfig,
    data_centre: DataCentreLoad,
    office_equipment: OfficeEquipmentLoad,
    lighting: LightingLoad,
    heating: HeatingLoad,
}

impl DemandModel {
    /// Validates `config` and calibrates every component against it.
    ///
    /// # Errors
    ///
    /// Returns [`DemandError::InvalidConfig`] listing every invalid field.
    pub fn new(config: BuildingConfig) -> Result<Self, DemandError> {
        let errors = config.validate();
        if !errors.is_empty() {
            return Err(DemandError::InvalidConfig(errors));
        }

        let schedule = &config.schedule;
        let data_centre = DataCentreLoad::from_config(&config.data_centre, config.simulation.seed);
        let office_equipment = OfficeEquipmentLoad::calibrated(&config.office_equipment, schedule);
        let lighting = LightingLoad::calibrated(&config.lighting, schedule);
        let heating = HeatingLoad::calibrated(&config.heating, schedule);

        Ok(Self {
            config,
            data_centre,
            office_equipment,
            lighting,
            heating,
        })
    }

    /// The baseline building with an OS-seeded data centre.
    pub fn baseline() -> Self {
        let config = BuildingConfig::baseline();
        let schedule = &config.schedule;
        Self {
            data_centre: DataCentreLoad::from_config(&config.data_centre, None),
            office_equipment: OfficeEquipmentLoad::calibrated(&config.office_equipment, schedule),
            lighting: LightingLoad::calibrated(&config.lighting, schedule),
            heating: HeatingLoad::calibrated(&config.heating, schedule),
            config,
        }
    }

    /// Occupancy flags for each slot of `grid`.
    pub fn occupancy_mask(&self, grid: &TimeGrid) -> OccupancyMask {
        OccupancyMask::from_grid(grid, &self.config.schedule)
    }

    /// Draws one window of data centre demand.
    pub fn data_centre_demand(&mut self) -> DemandProfile {
        self.data_centre.demand()
    }

    /// Office equipment demand for a caller-supplied mask.
    ///
    /// # Errors
    ///
    /// Returns [`DemandError::SlotCountMismatch`] unless `mask` has exactly 48 entries.
    pub fn office_equipment_demand(&self, mask: &[bool]) -> Result<DemandProfile, DemandError> {
        let mask = OccupancyMask::try_from(mask)?;
        Ok(self.office_equipment.demand(&mask))
    }

    /// Lighting and other demand for a caller-supplied mask.
    ///
    /// # Errors
    ///
    /// Returns [`DemandError::SlotCountMismatch`] unless `mask` has exactly 48 entries.
    pub fn lighting_and_other_demand(&self, mask: &[bool]) -> Result<DemandProfile, DemandError> {
        let mask = OccupancyMask::try_from(mask)?;
        Ok(self.lighting.demand(&mask))
    }

    /// Heating demand for a caller-supplied mask.
    ///
    /// # Errors
    ///
    /// Returns [`DemandError::SlotCountMismatch`] unless `mask` has exactly 48 entries.
    pub fn heating_demand(&self, mask: &[bool]) -> Result<DemandProfile, DemandError> {
        let mask = OccupancyMask::try_from(mask)?;
        Ok(self.heating.demand(&mask))
    }

    /// Builds the demand table for the delivery window that `now` belongs to.
    ///
    /// # Errors
    ///
    /// Returns [`DemandError::WindowOutOfRange`] if `now` is on the last
    /// representable date.
    pub fn energy_demand_at(&mut self, now: NaiveDateTime) -> Result<DemandTable, DemandError> {
        let grid = TimeGrid::for_reference(now)?;
        let mask = self.occupancy_mask(&grid);

        let heating = self.heating.estimate(&mask);
        let data_centre = self.data_centre.estimate(&mask);
        let office_equipment = self.office_equipment.estimate(&mask);
        let lighting_other = self.lighting.estimate(&mask);

        let table = DemandTable::assemble(
            &grid,
            &mask,
            &heating,
            &data_centre,
            &office_equipment,
            &lighting_other,
        );
        info!(
            anchor = %grid.anchor(),
            delivery_date = %grid.delivery_date(),
            active_slots = mask.active_slots(),
            total_kwh = table.daily_total(),
            "demand table assembled"
        );
        Ok(table)
    }
}
