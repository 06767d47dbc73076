//! TOML-based application configuration.
//!
//! Stores user preferences including:
//! - Observer location for the qibla bearing
//! - Local clock offset and tick cadence
//! - Waktu edge durations
//! - Qibla alignment tolerance
//!
//! Configuration is stored at `~/.config/marisolat/config.toml`.

use chrono::{FixedOffset, NaiveDateTime, Offset, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::data_dir;
use crate::error::{ConfigError, Result};
use crate::prayer::{WaktuDurations, MAX_EDGE_MIN};
use crate::qibla::{Coordinates, DEFAULT_TOLERANCE_DEG};

/// Observer location.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationConfig {
    #[serde(default = "default_latitude")]
    pub latitude: f64,
    #[serde(default = "default_longitude")]
    pub longitude: f64,
    /// Display name of the prayer zone, e.g. "WLY01 · Kuala Lumpur".
    #[serde(default)]
    pub zone: String,
}

/// Local clock configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClockConfig {
    #[serde(default = "default_utc_offset_minutes")]
    pub utc_offset_minutes: i32,
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,
}

/// Qibla compass configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QiblaConfig {
    #[serde(default = "default_tolerance")]
    pub alignment_tolerance_deg: f64,
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/marisolat/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub location: LocationConfig,
    #[serde(default)]
    pub clock: ClockConfig,
    #[serde(default)]
    pub waktu: WaktuDurations,
    #[serde(default)]
    pub qibla: QiblaConfig,
}

// Default functions
fn default_latitude() -> f64 {
    3.1390
}
fn default_longitude() -> f64 {
    101.6869
}
fn default_utc_offset_minutes() -> i32 {
    8 * 60
}
fn default_tick_interval_ms() -> u64 {
    1000
}
fn default_tolerance() -> f64 {
    DEFAULT_TOLERANCE_DEG
}

impl Default for LocationConfig {
    fn default() -> Self {
        Self {
            latitude: default_latitude(),
            longitude: default_longitude(),
            zone: String::new(),
        }
    }
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            utc_offset_minutes: default_utc_offset_minutes(),
            tick_interval_ms: default_tick_interval_ms(),
        }
    }
}

impl Default for QiblaConfig {
    fn default() -> Self {
        Self {
            alignment_tolerance_deg: default_tolerance(),
        }
    }
}

impl Config {
    fn get_json_value_by_path<'a>(
        root: &'a serde_json::Value,
        key: &str,
    ) -> Option<&'a serde_json::Value> {
        if key.is_empty() {
            return None;
        }

        let mut current = root;
        for part in key.split('.') {
            current = current.get(part)?;
        }
        Some(current)
    }

    fn set_json_value_by_path(
        root: &mut serde_json::Value,
        key: &str,
        value: &str,
    ) -> std::result::Result<(), ConfigError> {
        let unknown = || ConfigError::UnknownKey(key.to_string());
        let invalid = |message: String| ConfigError::InvalidValue {
            key: key.to_string(),
            message,
        };

        let mut parts = key.split('.').peekable();
        if key.is_empty() {
            return Err(unknown());
        }

        let mut current = root;
        while let Some(part) = parts.next() {
            if parts.peek().is_none() {
                let obj = current.as_object_mut().ok_or_else(unknown)?;
                let existing = obj.get(part).ok_or_else(unknown)?;

                let new_value = match existing {
                    serde_json::Value::Bool(_) => serde_json::Value::Bool(
                        value.parse::<bool>().map_err(|e| invalid(e.to_string()))?,
                    ),
                    serde_json::Value::Number(_) => {
                        if let Ok(n) = value.parse::<i64>() {
                            serde_json::Value::Number(n.into())
                        } else if let Ok(n) = value.parse::<f64>() {
                            serde_json::Number::from_f64(n)
                                .map(serde_json::Value::Number)
                                .ok_or_else(|| invalid(format!("cannot parse '{value}' as number")))?
                        } else {
                            return Err(invalid(format!("cannot parse '{value}' as number")));
                        }
                    }
                    serde_json::Value::Object(_) | serde_json::Value::Array(_) => {
                        serde_json::from_str(value).map_err(|e| invalid(e.to_string()))?
                    }
                    _ => serde_json::Value::String(value.into()),
                };

                obj.insert(part.to_string(), new_value);
                return Ok(());
            }

            current = current.get_mut(part).ok_or_else(unknown)?;
        }

        Err(unknown())
    }

    /// Path of the config file.
    pub fn path() -> Result<PathBuf> {
        Ok(data_dir()?.join("config.toml"))
    }

    /// Load from disk or write and return the default.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed,
    /// or if the default config cannot be written to disk.
    pub fn load() -> Result<Self> {
        let path = Self::path()?;
        match std::fs::read_to_string(&path) {
            Ok(content) => {
                let cfg: Config = toml::from_str(&content).map_err(|e| ConfigError::LoadFailed {
                    path: path.clone(),
                    message: e.to_string(),
                })?;
                cfg.validate().map_err(|e| ConfigError::LoadFailed {
                    path,
                    message: e.to_string(),
                })?;
                Ok(cfg)
            }
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                let cfg = Self::default();
                cfg.save()?;
                Ok(cfg)
            }
            Err(err) => Err(ConfigError::LoadFailed {
                path,
                message: err.to_string(),
            }
            .into()),
        }
    }

    /// Persist to disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be serialized or written to disk.
    pub fn save(&self) -> Result<()> {
        let path = Self::path()?;
        let content = toml::to_string_pretty(self).map_err(|e| ConfigError::SaveFailed {
            path: path.clone(),
            message: e.to_string(),
        })?;
        std::fs::write(&path, content).map_err(|e| ConfigError::SaveFailed {
            path,
            message: e.to_string(),
        })?;
        Ok(())
    }

    /// Get a config value as string by dot-separated key.
    pub fn get(&self, key: &str) -> Option<String> {
        let json = serde_json::to_value(self).ok()?;
        let val = Self::get_json_value_by_path(&json, key)?;
        match val {
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Set a config value by key without saving.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unknown or the value cannot be parsed
    /// into the field's type.
    pub fn apply(&mut self, key: &str, value: &str) -> Result<()> {
        let mut json = serde_json::to_value(&*self)?;
        Self::set_json_value_by_path(&mut json, key, value)?;
        let updated: Config = serde_json::from_value(json).map_err(|e| ConfigError::InvalidValue {
            key: key.to_string(),
            message: e.to_string(),
        })?;
        updated.validate()?;
        *self = updated;
        Ok(())
    }

    /// Range checks serde cannot express.
    ///
    /// # Errors
    ///
    /// Returns `InvalidValue` naming the first offending key.
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        if let Some((name, minutes)) = self.waktu.out_of_range() {
            return Err(ConfigError::InvalidValue {
                key: format!("waktu.{name}"),
                message: format!("{minutes} is outside 0..={MAX_EDGE_MIN} minutes"),
            });
        }
        Ok(())
    }

    /// Set a config value by key and save.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unknown, the value cannot be parsed,
    /// or the config cannot be saved.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.apply(key, value)?;
        self.save()
    }

    /// Overwrite the file with defaults and return them.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be saved.
    pub fn reset() -> Result<Self> {
        let cfg = Self::default();
        cfg.save()?;
        Ok(cfg)
    }

    /// Load from disk, returning default on error.
    /// This is a convenience method that never fails.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|err| {
            tracing::warn!(error = %err, "using default configuration");
            Self::default()
        })
    }

    /// Observer coordinates, validated.
    pub fn observer(&self) -> Result<Coordinates> {
        Ok(Coordinates::new(
            self.location.latitude,
            self.location.longitude,
        )?)
    }

    /// The local UTC offset. Out-of-range values fall back to UTC+8.
    pub fn utc_offset(&self) -> FixedOffset {
        FixedOffset::east_opt(self.clock.utc_offset_minutes * 60)
            .or_else(|| {
                tracing::warn!(
                    minutes = self.clock.utc_offset_minutes,
                    "invalid utc offset, using +08:00"
                );
                FixedOffset::east_opt(default_utc_offset_minutes() * 60)
            })
            .unwrap_or_else(|| Utc.fix())
    }

    /// Wall-clock "now" in the configured zone.
    pub fn local_now(&self) -> NaiveDateTime {
        Utc::now().with_timezone(&self.utc_offset()).naive_local()
    }
}
