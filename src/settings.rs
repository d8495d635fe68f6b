use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::{DEFAULT_CLOCK_INTERVAL_MS, DEFAULT_TICK_INTERVAL_MS, MIN_TICK_INTERVAL_MS};

const APP_DIR_NAME: &str = "grid-snake";
const SETTINGS_FILE_NAME: &str = "settings.json";

/// Failure to load runtime settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("cannot read settings file {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("malformed settings file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("tick interval must be at least {min} ms, got {0} ms", min = MIN_TICK_INTERVAL_MS)]
    TickTooShort(u64),
    #[error("clock interval must be non-zero")]
    ZeroClockInterval,
}

/// Runtime-tunable settings.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub tick_interval_ms: u64,
    pub clock_interval_ms: u64,
    /// Seed for food placement; random when absent.
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            clock_interval_ms: DEFAULT_CLOCK_INTERVAL_MS,
            seed: None,
        }
    }
}

impl Settings {
    #[must_use]
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    #[must_use]
    pub fn clock_interval(&self) -> Duration {
        Duration::from_millis(self.clock_interval_ms)
    }

    /// Rejects intervals the loop cannot run with.
    pub fn validate(self) -> Result<Self, SettingsError> {
        if self.tick_interval_ms < MIN_TICK_INTERVAL_MS {
            return Err(SettingsError::TickTooShort(self.tick_interval_ms));
        }
        if self.clock_interval_ms == 0 {
            return Err(SettingsError::ZeroClockInterval);
        }
        Ok(self)
    }
}

/// Returns the platform-correct settings file path.
#[must_use]
pub fn settings_path() -> PathBuf {
    let mut base = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    base.push(APP_DIR_NAME);
    base.push(SETTINGS_FILE_NAME);
    base
}

/// Loads settings from `path`.
///
/// Returns defaults when the file does not exist. Returns `Err` when it
/// exists but cannot be read or parsed.
pub fn load_settings(path: &Path) -> Result<Settings, SettingsError> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Settings::default()),
        Err(source) => {
            return Err(SettingsError::Read {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    serde_json::from_str::<Settings>(&raw).map_err(|source| SettingsError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;
    use std::time::{Duration, SystemTime, UNIX_EPOCH};

    use super::{Settings, SettingsError, load_settings};

    #[test]
    fn defaults_match_classic_timing() {
        let settings = Settings::default();

        assert_eq!(settings.tick_interval(), Duration::from_millis(100));
        assert_eq!(settings.clock_interval(), Duration::from_secs(1));
        assert_eq!(settings.seed, None);
    }

    #[test]
    fn missing_file_returns_defaults() {
        let path = unique_test_path("missing");

        let loaded = load_settings(&path).expect("missing file should load defaults");

        assert_eq!(loaded, Settings::default());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let path = unique_test_path("partial");
        write_test_file(&path, r#"{ "tick_interval_ms": 150, "seed": 9 }"#);

        let loaded = load_settings(&path).expect("partial file should load");

        assert_eq!(loaded.tick_interval_ms, 150);
        assert_eq!(loaded.clock_interval_ms, 1000);
        assert_eq!(loaded.seed, Some(9));
        cleanup_test_path(&path);
    }

    #[test]
    fn malformed_file_returns_error() {
        let path = unique_test_path("malformed");
        write_test_file(&path, "not-json");

        assert!(matches!(
            load_settings(&path),
            Err(SettingsError::Parse { .. })
        ));
        cleanup_test_path(&path);
    }

    #[test]
    fn validate_rejects_tiny_tick() {
        let settings = Settings {
            tick_interval_ms: 1,
            ..Settings::default()
        };

        assert!(matches!(
            settings.validate(),
            Err(SettingsError::TickTooShort(1))
        ));
        assert!(Settings::default().validate().is_ok());
    }

    fn write_test_file(path: &PathBuf, contents: &str) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("test parent directory should be creatable");
        }
        fs::write(path, contents).expect("test file write should succeed");
    }

    fn unique_test_path(label: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system time should be after epoch")
            .as_nanos();

        std::env::temp_dir()
            .join("grid-snake-settings-tests")
            .join(format!("{label}-{nanos}"))
            .join("settings.json")
    }

    fn cleanup_test_path(path: &PathBuf) {
        let _ = fs::remove_file(path);
        if let Some(parent) = path.parent() {
            let _ = fs::remove_dir(parent);
        }
    }
}
