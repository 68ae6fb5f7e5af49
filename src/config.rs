// Configuration surface for the core. Deliberately narrow: display, audio,
// input and save-state settings belong to whatever frontend embeds this
// crate, not here.

use crate::debug::LogLevel;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;

/// PPU write-ignore gate length in CPU cycles after reset, per the NESdev
/// wiki's authoritative figure. Overridable so test fixtures can skip the
/// warm-up window.
pub const DEFAULT_PPU_READY_CYCLES: u64 = 29_658;

fn default_log_level() -> LogLevel {
    LogLevel::Warning
}

fn default_ppu_ready_cycles() -> u64 {
    DEFAULT_PPU_READY_CYCLES
}

impl Serialize for LogLevel {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let name = match self {
            LogLevel::None => "none",
            LogLevel::Error => "error",
            LogLevel::Warning => "warning",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        };
        serializer.serialize_str(name)
    }
}

impl<'de> Deserialize<'de> for LogLevel {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        match raw.as_str() {
            "none" => Ok(LogLevel::None),
            "error" => Ok(LogLevel::Error),
            "warning" => Ok(LogLevel::Warning),
            "info" => Ok(LogLevel::Info),
            "debug" => Ok(LogLevel::Debug),
            "trace" => Ok(LogLevel::Trace),
            other => Err(serde::de::Error::custom(format!("unknown log level: {other}"))),
        }
    }
}

/// Settings meaningful to the emulation core only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NesConfig {
    #[serde(default = "default_log_level")]
    pub log_level: LogLevel,
    #[serde(default)]
    pub cpu_trace_on_startup: bool,
    #[serde(default)]
    pub ppu_trace_on_startup: bool,
    /// CPU cycle budget for headless test runs (0 means unbounded).
    #[serde(default)]
    pub cpu_cycle_budget: u64,
    #[serde(default = "default_ppu_ready_cycles")]
    pub ppu_ready_cycles: u64,
}

impl Default for NesConfig {
    fn default() -> Self {
        NesConfig {
            log_level: default_log_level(),
            cpu_trace_on_startup: false,
            ppu_trace_on_startup: false,
            cpu_cycle_budget: 0,
            ppu_ready_cycles: DEFAULT_PPU_READY_CYCLES,
        }
    }
}

/// Errors loading or saving a `NesConfig`.
#[derive(Debug)]
pub enum ConfigError {
    Io(io::Error),
    Parse(toml::de::Error),
    Serialize(toml::ser::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(err) => write!(f, "config I/O error: {err}"),
            ConfigError::Parse(err) => write!(f, "config parse error: {err}"),
            ConfigError::Serialize(err) => write!(f, "config serialize error: {err}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<io::Error> for ConfigError {
    fn from(err: io::Error) -> Self {
        ConfigError::Io(err)
    }
}

impl NesConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        toml::from_str(&text).map_err(ConfigError::Parse)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let text = toml::to_string_pretty(self).map_err(ConfigError::Serialize)?;
        fs::write(path, text)?;
        Ok(())
    }

    /// Load from `path`, falling back to defaults if the file doesn't exist.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        match Self::load(&path) {
            Ok(config) => Ok(config),
            Err(ConfigError::Io(err)) if err.kind() == io::ErrorKind::NotFound => {
                Ok(Self::default())
            }
            Err(err) => Err(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_uses_the_documented_ready_gate() {
        let config = NesConfig::default();
        assert_eq!(config.ppu_ready_cycles, 29_658);
        assert_eq!(config.log_level, LogLevel::Warning);
    }

    #[test]
    fn round_trips_through_toml() {
        let mut config = NesConfig::default();
        config.cpu_trace_on_startup = true;
        config.cpu_cycle_budget = 1_000_000;
        let text = toml::to_string_pretty(&config).unwrap();
        let parsed: NesConfig = toml::from_str(&text).unwrap();
        assert!(parsed.cpu_trace_on_startup);
        assert_eq!(parsed.cpu_cycle_budget, 1_000_000);
    }

    #[test]
    fn load_or_default_falls_back_when_file_is_missing() {
        let config = NesConfig::load_or_default("/nonexistent/path/nes.toml").unwrap();
        assert_eq!(config.cpu_cycle_budget, 0);
    }
}
