//! Building load components.

/// Always-on server room model.
pub mod data_centre;
/// Space heating driven by occupancy.
pub mod heating;
/// Lighting and miscellaneous small power model.
pub mod lighting;
/// Desk equipment model.
pub mod office_equipment;
pub mod types;

// Re-export the main types for convenience
pub use data_centre::DataCentreLoad;
pub use heating::HeatingLoad;
pub use lighting::LightingLoad;
pub use office_equipment::OfficeEquipmentLoad;
pub use types::Component;
pub use types::DemandProfile;
pub use types::LoadEstimator;
