//! TOML-based building configuration and preset definitions.

use std::fs;
use std::path::Path;

use chrono::{NaiveTime, Timelike, Weekday};
use serde::Deserialize;
use thiserror::Error;

use crate::time::{SLOT_MINUTES, SLOTS_PER_DAY};

/// Upper bound on the data centre's energy use over one delivery window (kWh).
pub const DATA_CENTRE_DAILY_CEILING_KWH: f32 = 9600.0;

/// Top-level building configuration parsed from TOML.
///
/// All fields have defaults matching the baseline building. Load from
/// TOML with [`BuildingConfig::from_toml_file`] or use
/// [`BuildingConfig::baseline`] for the built-in default.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BuildingConfig {
    /// Global run parameters.
    #[serde(default)]
    pub simulation: SimulationConfig,
    /// Office opening hours and working days.
    #[serde(default)]
    pub schedule: ScheduleConfig,
    /// Always-on server room parameters.
    #[serde(default)]
    pub data_centre: DataCentreConfig,
    /// Desk equipment parameters.
    #[serde(default)]
    pub office_equipment: OfficeEquipmentConfig,
    /// Lighting and miscellaneous small power parameters.
    #[serde(default)]
    pub lighting: LightingConfig,
    /// Space heating parameters.
    #[serde(default)]
    pub heating: HeatingConfig,
}

/// Global run parameters.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimulationConfig {
    /// Seed for the data centre's load draws. Drawn from the OS when absent.
    pub seed: Option<u64>,
}

/// Office opening hours and working days.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScheduleConfig {
    /// Start of the first occupied slot (inclusive), `"HH:MM:SS"`.
    pub open: NaiveTime,
    /// End of the last occupied slot (exclusive), `"HH:MM:SS"`.
    ///
    /// `"00:00:00"` means the end of the day, so the 23:30 slot can be staffed.
    pub close: NaiveTime,
    /// Days on which the office is staffed.
    pub working_days: Vec<Weekday>,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            open: hms(8, 0),
            close: hms(18, 0),
            working_days: vec![
                Weekday::Mon,
                Weekday::Tue,
                Weekday::Wed,
                Weekday::Thu,
                Weekday::Fri,
            ],
        }
    }
}

/// Always-on server room parameters.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DataCentreConfig {
    /// Lowest energy drawn in any slot (kWh).
    pub min_kwh_per_slot: f32,
    /// Highest energy drawn in any slot (kWh).
    pub max_kwh_per_slot: f32,
}

impl Default for DataCentreConfig {
    fn default() -> Self {
        Self {
            min_kwh_per_slot: 150.0,
            max_kwh_per_slot: 200.0,
        }
    }
}

/// Desk equipment parameters.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OfficeEquipmentConfig {
    /// Energy used over a full standard working day (kWh).
    pub weekday_total_kwh: f32,
}

impl Default for OfficeEquipmentConfig {
    fn default() -> Self {
        Self {
            weekday_total_kwh: 160.0,
        }
    }
}

/// Lighting and miscellaneous small power parameters.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LightingConfig {
    /// Energy used over a full standard working day (kWh).
    pub weekday_total_kwh: f32,
}

impl Default for LightingConfig {
    fn default() -> Self {
        Self {
            weekday_total_kwh: 320.0,
        }
    }
}

/// Space heating parameters.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HeatingConfig {
    /// Energy used over a full standard working day, pre-heat included (kWh).
    pub weekday_total_kwh: f32,
    /// Number of slots the heating runs ahead of occupancy.
    pub preheat_slots: usize,
}

impl Default for HeatingConfig {
    fn default() -> Self {
        Self {
            weekday_total_kwh: 480.0,
            preheat_slots: 4,
        }
    }
}

/// Configuration error with field path and constraint description.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("config error: {field}: {message}")]
pub struct ConfigError {
    /// Dotted field path (e.g., `"schedule.open"`).
    pub field: String,
    /// Human-readable constraint description.
    pub message: String,
}

impl ConfigError {
    /// Creates a config error for `field`.
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

fn hms(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or(NaiveTime::MIN)
}

fn is_slot_aligned(t: NaiveTime) -> bool {
    t.minute() as i64 % SLOT_MINUTES == 0 && t.second() == 0 && t.nanosecond() == 0
}

impl BuildingConfig {
    /// Returns the baseline building: 08:00–18:00 weekdays, mid-sized server room.
    pub fn baseline() -> Self {
        Self::default()
    }

    /// Returns the extended-hours preset: 07:00–21:00 weekdays.
    ///
    /// Daily totals are unchanged, so the same energy is spread thinner.
    pub fn extended_hours() -> Self {
        Self {
            schedule: ScheduleConfig {
                open: hms(7, 0),
                close: hms(21, 0),
                ..ScheduleConfig::default()
            },
            ..Self::default()
        }
    }

    /// Returns the lean-data-centre preset: a small server room and a
    /// shorter pre-heat.
    pub fn lean_data_centre() -> Self {
        Self {
            data_centre: DataCentreConfig {
                min_kwh_per_slot: 40.0,
                max_kwh_per_slot: 60.0,
            },
            heating: HeatingConfig {
                weekday_total_kwh: 440.0,
                preheat_slots: 2,
            },
            ..Self::default()
        }
    }

    /// Available preset names.
    pub const PRESETS: &[&str] = &["baseline", "extended_hours", "lean_data_centre"];

    /// Loads a configuration from a named preset.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the preset name is unknown.
    pub fn from_preset(name: &str) -> Result<Self, ConfigError> {
        match name {
            "baseline" => Ok(Self::baseline()),
            "extended_hours" => Ok(Self::extended_hours()),
            "lean_data_centre" => Ok(Self::lean_data_centre()),
            _ => Err(ConfigError::new(
                "preset",
                format!(
                    "unknown preset \"{name}\", available: {}",
                    Self::PRESETS.join(", ")
                ),
            )),
        }
    }

    /// Parses a configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the file cannot be read or the TOML is invalid.
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| {
            ConfigError::new("config", format!("cannot read \"{}\": {e}", path.display()))
        })?;
        Self::from_toml_str(&content)
    }

    /// Parses a configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the TOML is invalid or contains unknown fields.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(|e| ConfigError::new("toml", e.to_string()))
    }

    /// Validates all fields and returns a list of errors.
    ///
    /// Returns an empty vector if configuration is valid.
    pub fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        let s = &self.schedule;
        if s.open >= s.close && !s.closes_at_midnight() {
            errors.push(ConfigError::new(
                "schedule.open",
                "must be before schedule.close",
            ));
        }
        if !is_slot_aligned(s.open) {
            errors.push(ConfigError::new(
                "schedule.open",
                format!("must fall on a {SLOT_MINUTES}-minute slot boundary"),
            ));
        }
        if !is_slot_aligned(s.close) {
            errors.push(ConfigError::new(
                "schedule.close",
                format!("must fall on a {SLOT_MINUTES}-minute slot boundary"),
            ));
        }
        if s.working_days.is_empty() {
            errors.push(ConfigError::new(
                "schedule.working_days",
                "must name at least one day",
            ));
        }

        let dc = &self.data_centre;
        if dc.min_kwh_per_slot.is_nan() || dc.min_kwh_per_slot < 0.0 {
            errors.push(ConfigError::new(
                "data_centre.min_kwh_per_slot",
                "must be >= 0",
            ));
        }
        if dc.min_kwh_per_slot > dc.max_kwh_per_slot || dc.max_kwh_per_slot.is_nan() {
            errors.push(ConfigError::new(
                "data_centre.min_kwh_per_slot",
                "must be <= data_centre.max_kwh_per_slot",
            ));
        }
        if dc.max_kwh_per_slot * SLOTS_PER_DAY as f32 > DATA_CENTRE_DAILY_CEILING_KWH {
            errors.push(ConfigError::new(
                "data_centre.max_kwh_per_slot",
                format!(
                    "must be <= {} so a day stays within {DATA_CENTRE_DAILY_CEILING_KWH} kWh",
                    DATA_CENTRE_DAILY_CEILING_KWH / SLOTS_PER_DAY as f32
                ),
            ));
        }

        for (field, total) in [
            (
                "office_equipment.weekday_total_kwh",
                self.office_equipment.weekday_total_kwh,
            ),
            ("lighting.weekday_total_kwh", self.lighting.weekday_total_kwh),
            ("heating.weekday_total_kwh", self.heating.weekday_total_kwh),
        ] {
            if !(total.is_finite() && total >= 0.0) {
                errors.push(ConfigError::new(field, "must be a finite value >= 0"));
            }
        }

        if self.heating.preheat_slots >= SLOTS_PER_DAY {
            errors.push(ConfigError::new(
                "heating.preheat_slots",
                format!("must be < {SLOTS_PER_DAY}"),
            ));
        }

        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn baseline_preset_valid() {
        let cfg = BuildingConfig::baseline();
        let errors = cfg.validate();
        assert!(errors.is_empty(), "baseline should be valid: {errors:?}");
    }

    #[test]
    fn from_preset_unknown() {
        let err = BuildingConfig::from_preset("nonexistent");
        assert!(err.is_err());
        let e = err.unwrap_err();
        assert!(e.message.contains("unknown preset"));
    }

    #[test]
    fn all_presets_are_valid() {
        for name in BuildingConfig::PRESETS {
            let cfg = BuildingConfig::from_preset(name);
            assert!(cfg.is_ok(), "preset \"{name}\" should load");
            let errors = cfg.as_ref().map(|c| c.validate()).unwrap_or_default();
            assert!(
                errors.is_empty(),
                "preset \"{name}\" should be valid: {errors:?}"
            );
        }
    }

    #[test]
    fn valid_toml_parses() {
        let toml = r#"
[simulation]
seed = 7

[schedule]
open = "07:30:00"
close = "17:30:00"
working_days = ["Mon", "Tue", "Wed", "Thu"]

[data_centre]
min_kwh_per_slot = 100.0
max_kwh_per_slot = 120.0

[office_equipment]
weekday_total_kwh = 200.0

[lighting]
weekday_total_kwh = 300.0

[heating]
weekday_total_kwh = 500.0
preheat_slots = 3
"#;
        let cfg = BuildingConfig::from_toml_str(toml);
        assert!(cfg.is_ok(), "valid TOML should parse: {:?}", cfg.err());
        let cfg = cfg.ok();
        assert_eq!(cfg.as_ref().and_then(|c| c.simulation.seed), Some(7));
        assert_eq!(cfg.as_ref().map(|c| c.schedule.open), Some(hms(7, 30)));
        assert_eq!(
            cfg.as_ref().map(|c| c.schedule.working_days.len()),
            Some(4)
        );
        assert_eq!(cfg.as_ref().map(|c| c.heating.preheat_slots), Some(3));
        assert!(cfg.map(|c| c.validate().is_empty()).unwrap_or(false));
    }

    #[test]
    fn invalid_toml_unknown_field() {
        let toml = r#"
[schedule]
open = "08:00:00"
lunch_break = true
"#;
        assert!(BuildingConfig::from_toml_str(toml).is_err());
    }

    #[test]
    fn partial_toml_uses_defaults() {
        let toml = r#"
[lighting]
weekday_total_kwh = 400.0
"#;
        let cfg = BuildingConfig::from_toml_str(toml).ok();
        assert_eq!(
            cfg.as_ref().map(|c| c.lighting.weekday_total_kwh),
            Some(400.0)
        );
        assert_eq!(
            cfg.as_ref().map(|c| c.office_equipment.weekday_total_kwh),
            Some(160.0)
        );
        assert_eq!(cfg.as_ref().map(|c| c.schedule.close), Some(hms(18, 0)));
        assert_eq!(cfg.and_then(|c| c.simulation.seed), None);
    }

    #[test]
    fn validation_catches_inverted_hours() {
        let mut cfg = BuildingConfig::baseline();
        cfg.schedule.open = hms(19, 0);
        let errors = cfg.validate();
        assert!(errors.iter().any(|e| e.field == "schedule.open"));
    }

    #[test]
    fn midnight_close_is_end_of_day() {
        let toml = r#"
[schedule]
open = "18:00:00"
close = "00:00:00"
"#;
        let cfg = BuildingConfig::from_toml_str(toml).ok();
        assert_eq!(cfg.as_ref().map(|c| c.schedule.close), Some(NaiveTime::MIN));
        let errors = cfg.map(|c| c.validate()).unwrap_or_default();
        assert!(errors.is_empty(), "midnight close should be valid: {errors:?}");
    }

    #[test]
    fn validation_catches_unaligned_close() {
        let mut cfg = BuildingConfig::baseline();
        cfg.schedule.close = hms(17, 45);
        let errors = cfg.validate();
        assert!(errors.iter().any(|e| e.field == "schedule.close"));
    }

    #[test]
    fn validation_catches_empty_working_week() {
        let mut cfg = BuildingConfig::baseline();
        cfg.schedule.working_days.clear();
        let errors = cfg.validate();
        assert!(errors.iter().any(|e| e.field == "schedule.working_days"));
    }

    #[test]
    fn validation_catches_data_centre_over_ceiling() {
        let mut cfg = BuildingConfig::baseline();
        cfg.data_centre.max_kwh_per_slot = 200.5;
        let errors = cfg.validate();
        assert!(
            errors
                .iter()
                .any(|e| e.field == "data_centre.max_kwh_per_slot")
        );
    }

    #[test]
    fn validation_catches_inverted_data_centre_bounds() {
        let mut cfg = BuildingConfig::baseline();
        cfg.data_centre.min_kwh_per_slot = 190.0;
        cfg.data_centre.max_kwh_per_slot = 180.0;
        let errors = cfg.validate();
        assert!(
            errors
                .iter()
                .any(|e| e.field == "data_centre.min_kwh_per_slot")
        );
    }

    #[test]
    fn validation_catches_negative_and_nan_totals() {
        let mut cfg = BuildingConfig::baseline();
        cfg.lighting.weekday_total_kwh = -1.0;
        cfg.heating.weekday_total_kwh = f32::NAN;
        let errors = cfg.validate();
        assert!(errors.iter().any(|e| e.field == "lighting.weekday_total_kwh"));
        assert!(errors.iter().any(|e| e.field == "heating.weekday_total_kwh"));
    }

    #[test]
    fn validation_catches_full_day_preheat() {
        let mut cfg = BuildingConfig::baseline();
        cfg.heating.preheat_slots = SLOTS_PER_DAY;
        let errors = cfg.validate();
        assert!(errors.iter().any(|e| e.field == "heating.preheat_slots"));
    }
}
