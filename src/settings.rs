//! Persisted per-timer display toggles and their file-backed manager.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

fn enabled() -> bool {
    true
}

/// Represents which timers the overlay displays, keyed by the fixed set of
/// timer identifiers the settings window exposes. Persisted as a flat
/// camelCase JSON map; unknown keys in an existing blob are ignored and
/// missing keys take their defaults.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct TimerSettings {
    pub daily_reset: bool,
    pub weekly_reset: bool,
    pub cetus_cycle: bool,
    pub vallis_cycle: bool,
    pub cambion_cycle: bool,
    pub earth_cycle: bool,
    pub arbitration: bool,
    pub sortie: bool,
    pub archon_hunt: bool,
    pub void_fissures: bool,
    pub void_trader: bool,
    pub nightwave: bool,
    pub invasions: bool,
    pub alerts: bool,
    pub events: bool,
    pub global_upgrades: bool,
}

impl Default for TimerSettings {
    /// Everything on, matching a first-run overlay.
    fn default() -> Self {
        Self {
            daily_reset: enabled(),
            weekly_reset: enabled(),
            cetus_cycle: enabled(),
            vallis_cycle: enabled(),
            cambion_cycle: enabled(),
            earth_cycle: enabled(),
            arbitration: enabled(),
            sortie: enabled(),
            archon_hunt: enabled(),
            void_fissures: enabled(),
            void_trader: enabled(),
            nightwave: enabled(),
            invasions: enabled(),
            alerts: enabled(),
            events: enabled(),
            global_upgrades: enabled(),
        }
    }
}

/// Manages loading and saving of timer settings to a JSON file in the
/// platform-specific config directory.
pub struct SettingsManager {
    path: PathBuf,
}

impl SettingsManager {
    /// Creates a manager bound to the platform-specific app config path.
    pub fn new() -> Self {
        let dirs = directories::ProjectDirs::from("io", "eyeframe", "eyeframe")
            .expect("Could not determine config directory");
        let path = dirs.config_dir().join("timers.json");
        Self { path }
    }

    /// Creates a manager bound to an explicit path.
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    /// Loads settings from disk, falling back to defaults on read/parse
    /// errors.
    pub fn load(&self) -> TimerSettings {
        if self.path.exists() {
            let content = fs::read_to_string(&self.path).unwrap_or_default();
            serde_json::from_str(&content).unwrap_or_default()
        } else {
            TimerSettings::default()
        }
    }

    /// Persists settings to disk, creating parent directories when needed.
    pub fn save(&self, settings: &TimerSettings) -> Result<(), std::io::Error> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(settings)?;
        fs::write(&self.path, content)?;
        Ok(())
    }
}
