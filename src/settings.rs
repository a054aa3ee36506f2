//! Display settings and configuration

use crate::{Error, Result};
use chrono::{FixedOffset, Offset, Utc};
use serde::{Deserialize, Serialize};

/// Largest accepted UTC offset in minutes (18 hours either way)
pub const MAX_UTC_OFFSET_MINUTES: i32 = 18 * 60;

/// Display settings
///
/// Controls the time zone used when rendering absolute claim dates.
/// Settings are stored in JSON format and can be loaded/saved from disk.
///
/// # Example
/// ```rust,no_run
/// use stakeclock::settings::DisplaySettings;
///
/// // Load settings (returns default if file doesn't exist)
/// let mut settings = DisplaySettings::load("display.json").expect("Failed to load");
///
/// // Switch to UTC and save
/// settings.set_utc_offset_minutes(0).expect("Invalid offset");
/// settings.time_zone_label = "UTC".to_string();
/// settings.save("display.json").expect("Failed to save");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplaySettings {
    /// Human-readable zone name, informational only
    pub time_zone_label: String,
    /// Fixed offset from UTC in minutes (UTC+5 = 300)
    pub utc_offset_minutes: i32,
}

impl DisplaySettings {
    /// Load settings from a JSON file
    ///
    /// # Arguments
    /// * `path` - Path to the settings file
    ///
    /// # Returns
    /// The loaded settings, or default settings if the file doesn't exist or is empty
    pub fn load<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Ok(Self::default());
        }

        let data = std::fs::read_to_string(path)
            .map_err(|e| Error::Settings(format!("Failed to read settings: {}", e)))?;

        if data.trim().is_empty() {
            return Ok(Self::default());
        }

        let settings: Self = serde_json::from_str(&data)
            .map_err(|e| Error::Settings(format!("Failed to parse settings: {}", e)))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to a JSON file
    ///
    /// Parent directories are created as needed.
    pub fn save<P: AsRef<std::path::Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                Error::Settings(format!("Failed to create settings directory: {}", e))
            })?;
        }

        let json = serde_json::to_string_pretty(self)
            .map_err(|e| Error::Settings(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(path, json)
            .map_err(|e| Error::Settings(format!("Failed to write settings: {}", e)))?;

        Ok(())
    }

    /// Update the UTC offset, rejecting values beyond +/-18 hours
    pub fn set_utc_offset_minutes(&mut self, minutes: i32) -> Result<()> {
        check_offset(minutes)?;
        self.utc_offset_minutes = minutes;
        Ok(())
    }

    /// The display zone as a fixed chrono offset
    pub fn zone(&self) -> FixedOffset {
        let minutes = self
            .utc_offset_minutes
            .clamp(-MAX_UTC_OFFSET_MINUTES, MAX_UTC_OFFSET_MINUTES);
        FixedOffset::east_opt(minutes * 60).unwrap_or_else(|| Utc.fix())
    }

    fn validate(&self) -> Result<()> {
        check_offset(self.utc_offset_minutes)
    }
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            time_zone_label: "Asia/Karachi".to_string(),
            utc_offset_minutes: 300, // UTC+5, no DST
        }
    }
}

fn check_offset(minutes: i32) -> Result<()> {
    if !(-MAX_UTC_OFFSET_MINUTES..=MAX_UTC_OFFSET_MINUTES).contains(&minutes) {
        return Err(Error::Settings(format!(
            "UTC offset {} minutes is outside +/-{} minutes",
            minutes, MAX_UTC_OFFSET_MINUTES
        )));
    }
    Ok(())
}
