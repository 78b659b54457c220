//! The assembled demand table: one row per slot, one column per component.

use std::fmt;

use chrono::NaiveDateTime;

use crate::loads::{Component, DemandProfile};
use crate::occupancy::OccupancyMask;
use crate::time::TimeGrid;

/// Column label of the occupancy flags.
pub const ACTIVE_OFFICE_MASK: &str = "Active office mask";

/// Column label of the summed demand.
pub const TOTAL_DEMAND: &str = "Total demand";

/// Table columns in order.
pub const COLUMNS: [&str; 6] = [
    ACTIVE_OFFICE_MASK,
    "Heating",
    "Data Centre",
    "Office Equipment",
    "LightingOther",
    TOTAL_DEMAND,
];

/// Complete record of one slot.
#[derive(Debug, Clone, PartialEq)]
pub struct DemandRow {
    /// Slot index within the window (0..48).
    pub slot: usize,
    /// Slot start time.
    pub start: NaiveDateTime,
    /// Whether the building is staffed in this slot.
    pub active_office: bool,
    /// Heating energy (kWh).
    pub heating: f32,
    /// Data centre energy (kWh).
    pub data_centre: f32,
    /// Office equipment energy (kWh).
    pub office_equipment: f32,
    /// Lighting and other energy (kWh).
    pub lighting_other: f32,
    /// Sum of the four components (kWh).
    pub total: f32,
}

impl DemandRow {
    /// The value of one component in this row.
    pub fn component(&self, component: Component) -> f32 {
        match component {
            Component::Heating => self.heating,
            Component::DataCentre => self.data_centre,
            Component::OfficeEquipment => self.office_equipment,
            Component::LightingOther => self.lighting_other,
        }
    }
}

impl fmt::Display for DemandRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:>2} {} | active={:<5} | heat={:>7.2}  dc={:>7.2}  \
             office={:>6.2}  light={:>6.2} | total={:>7.2} kWh",
            self.slot,
            self.start.format("%a %Y-%m-%d %H:%M"),
            self.active_office,
            self.heating,
            self.data_centre,
            self.office_equipment,
            self.lighting_other,
            self.total,
        )
    }
}

/// Row-aligned demand for one delivery window.
///
/// Totals are computed here from the component columns and nowhere else,
/// so `total == heating + data_centre + office_equipment + lighting_other`
/// holds for every row.
#[derive(Debug, Clone, PartialEq)]
pub struct DemandTable {
    rows: Vec<DemandRow>,
}

impl DemandTable {
    /// Assembles the table from the grid, the mask and each component.
    pub fn assemble(
        grid: &TimeGrid,
        mask: &OccupancyMask,
        heating: &DemandProfile,
        data_centre: &DemandProfile,
        office_equipment: &DemandProfile,
        lighting_other: &DemandProfile,
    ) -> Self {
        let rows = grid
            .iter()
            .enumerate()
            .map(|(i, start)| DemandRow {
                slot: i,
                start,
                active_office: mask[i],
                heating: heating[i],
                data_centre: data_centre[i],
                office_equipment: office_equipment[i],
                lighting_other: lighting_other[i],
                total: heating[i] + data_centre[i] + office_equipment[i] + lighting_other[i],
            })
            .collect();
        Self { rows }
    }

    /// Column labels in order.
    pub fn column_names(&self) -> [&'static str; 6] {
        COLUMNS
    }

    pub fn rows(&self) -> &[DemandRow] {
        &self.rows
    }

    /// Number of rows, one per slot.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The occupancy flags column.
    pub fn active_office_mask(&self) -> Vec<bool> {
        self.rows.iter().map(|r| r.active_office).collect()
    }

    /// One component's column.
    pub fn column(&self, component: Component) -> Vec<f32> {
        self.rows.iter().map(|r| r.component(component)).collect()
    }

    /// The total demand column.
    pub fn totals(&self) -> Vec<f32> {
        self.rows.iter().map(|r| r.total).collect()
    }

    /// One component's energy summed over the window.
    pub fn component_total(&self, component: Component) -> f32 {
        self.rows.iter().map(|r| r.component(component)).sum()
    }

    /// Total demand summed over the window.
    pub fn daily_total(&self) -> f32 {
        self.rows.iter().map(|r| r.total).sum()
    }
}

impl fmt::Display for DemandTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            writeln!(f, "{row}")?;
        }
        Ok(())
    }
}

/// Per-component energy over one window, for reporting.
#[derive(Debug, Clone, PartialEq)]
pub struct DailySummary {
    /// Delivery date most of the window falls on.
    pub delivery_date: Option<chrono::NaiveDate>,
    /// Number of staffed slots.
    pub active_slots: usize,
    /// `(component, kWh)` in column order.
    pub components: Vec<(Component, f32)>,
    /// Total demand (kWh).
    pub total_kwh: f32,
}

impl DailySummary {
    /// Summarises a table.
    pub fn from_table(table: &DemandTable) -> Self {
        Self {
            delivery_date: table.rows.last().map(|r| r.start.date()),
            active_slots: table.rows.iter().filter(|r| r.active_office).count(),
            components: Component::ALL
                .iter()
                .map(|&c| (c, table.component_total(c)))
                .collect(),
            total_kwh: table.daily_total(),
        }
    }
}

impl fmt::Display for DailySummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Daily Summary ---")?;
        if let Some(date) = self.delivery_date {
            writeln!(f, "Delivery day: {}", date.format("%A %Y-%m-%d"))?;
        }
        writeln!(f, "Active slots: {}", self.active_slots)?;
        for (component, kwh) in &self.components {
            writeln!(f, "{component}: {kwh:.2} kWh")?;
        }
        write!(f, "{TOTAL_DEMAND}: {:.2} kWh", self.total_kwh)
    }
}
