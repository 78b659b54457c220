//! Half-hourly synthetic electricity demand for a commercial office building.
//!
//! A delivery window is 48 half-hour slots starting at 23:00 on the reference
//! date. Each slot is classified as staffed or not, and four load components
//! (heating, data centre, office equipment, lighting and other) are summed
//! into a total demand table for downstream bidding logic.

pub mod config;
/// Rule-based demand model, table assembly and entry points.
pub mod demand;
pub mod error;
pub mod io;
/// Building load components.
pub mod loads;
pub mod occupancy;
/// Time normalization and the slot grid.
pub mod time;

pub use demand::{
    DemandModel, DemandTable, get_data_centre_demand, get_energy_demand, get_energy_demand_at,
    get_heating_demand, get_lighting_and_other_demand, get_office_equipment_demand,
};
pub use error::DemandError;
pub use time::adjust_datetime;
