//! Layered configuration: defaults < TOML file < environment < CLI flags

use std::env;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{PlanError, Result};
use crate::models::ContentType;

pub const DEFAULT_DISPLAY_SIZE: f64 = 75.0;
pub const DEFAULT_VIEWING_DISTANCE: f64 = 4.0;
pub const DEFAULT_ROOM_TYPE: &str = "Conference Room";

/// Inputs the route planner feeds the requirement analyzer for every run.
///
/// Room-wide planning does not look at individual displays; it analyzes one
/// representative display for the whole room.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlannerConfig {
    /// Inches
    pub display_size: f64,
    /// Meters
    pub viewing_distance: f64,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            display_size: DEFAULT_DISPLAY_SIZE,
            viewing_distance: DEFAULT_VIEWING_DISTANCE,
        }
    }
}

/// Where a configuration value came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfigSource {
    Default,
    File,
    Environment,
    Cli,
}

impl ConfigSource {
    /// Higher wins
    pub fn precedence(&self) -> u8 {
        match self {
            ConfigSource::Default => 0,
            ConfigSource::File => 1,
            ConfigSource::Environment => 2,
            ConfigSource::Cli => 3,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigValue<T> {
    pub value: T,
    pub source: ConfigSource,
}

impl<T> ConfigValue<T> {
    pub fn new(value: T, source: ConfigSource) -> Self {
        Self { value, source }
    }

    /// Replace the value only if `source` outranks the current one
    pub fn update(&mut self, value: T, source: ConfigSource) {
        if source.precedence() > self.source.precedence() {
            self.value = value;
            self.source = source;
        }
    }
}

#[derive(Debug, Clone)]
pub struct LayeredConfig {
    pub display_size: ConfigValue<f64>,
    pub viewing_distance: ConfigValue<f64>,
    pub room_type: ConfigValue<String>,
    pub content_type: ConfigValue<ContentType>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    display_size: Option<f64>,
    viewing_distance: Option<f64>,
    room_type: Option<String>,
    content_type: Option<ContentType>,
}

#[derive(Debug, Default)]
pub struct CliConfigOverrides {
    pub display_size: Option<f64>,
    pub viewing_distance: Option<f64>,
    pub room_type: Option<String>,
    pub content_type: Option<ContentType>,
}

impl LayeredConfig {
    pub fn with_defaults() -> Self {
        Self {
            display_size: ConfigValue::new(DEFAULT_DISPLAY_SIZE, ConfigSource::Default),
            viewing_distance: ConfigValue::new(DEFAULT_VIEWING_DISTANCE, ConfigSource::Default),
            room_type: ConfigValue::new(DEFAULT_ROOM_TYPE.to_string(), ConfigSource::Default),
            content_type: ConfigValue::new(ContentType::Presentation, ConfigSource::Default),
        }
    }

    /// Load values from a TOML file; keys left out keep their current value
    pub fn load_from_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| PlanError::ConfigInvalid {
            key: "file".to_string(),
            reason: format!("Failed to read config file {}: {}", path.as_ref().display(), e),
        })?;

        let file_config: FileConfig = toml::from_str(&content).map_err(|e| PlanError::ConfigInvalid {
            key: "file".to_string(),
            reason: format!("Failed to parse TOML: {}", e),
        })?;

        if let Some(size) = file_config.display_size {
            self.display_size
                .update(positive("display_size", size)?, ConfigSource::File);
        }
        if let Some(distance) = file_config.viewing_distance {
            self.viewing_distance
                .update(positive("viewing_distance", distance)?, ConfigSource::File);
        }
        if let Some(room_type) = file_config.room_type {
            self.room_type.update(room_type, ConfigSource::File);
        }
        if let Some(content_type) = file_config.content_type {
            self.content_type.update(content_type, ConfigSource::File);
        }

        Ok(self)
    }

    pub fn load_from_env(self) -> Self {
        self.load_from_vars(|key| env::var(key).ok())
    }

    /// Apply `AVPLAN_*` variables from any lookup; bad values are logged and skipped
    pub fn load_from_vars<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup("AVPLAN_DISPLAY_SIZE") {
            match parse_positive("display_size", &raw) {
                Ok(size) => self.display_size.update(size, ConfigSource::Environment),
                Err(_) => warn!("Invalid AVPLAN_DISPLAY_SIZE value '{}': expected inches > 0", raw),
            }
        }

        if let Some(raw) = lookup("AVPLAN_VIEWING_DISTANCE") {
            match parse_positive("viewing_distance", &raw) {
                Ok(distance) => self.viewing_distance.update(distance, ConfigSource::Environment),
                Err(_) => warn!("Invalid AVPLAN_VIEWING_DISTANCE value '{}': expected meters > 0", raw),
            }
        }

        if let Some(room_type) = lookup("AVPLAN_ROOM_TYPE") {
            self.room_type.update(room_type, ConfigSource::Environment);
        }

        if let Some(raw) = lookup("AVPLAN_CONTENT_TYPE") {
            match parse_content_type(&raw) {
                Ok(content_type) => self.content_type.update(content_type, ConfigSource::Environment),
                Err(_) => warn!(
                    "Invalid AVPLAN_CONTENT_TYPE value '{}': expected presentation, video-conference, \
                     digital-signage, broadcast or training",
                    raw
                ),
            }
        }

        self
    }

    /// Apply command-line overrides. Sizes must be positive, same as in the file.
    pub fn update_from_cli(&mut self, overrides: CliConfigOverrides) -> Result<()> {
        if let Some(size) = overrides.display_size {
            self.display_size.update(positive("display_size", size)?, ConfigSource::Cli);
        }
        if let Some(distance) = overrides.viewing_distance {
            self.viewing_distance
                .update(positive("viewing_distance", distance)?, ConfigSource::Cli);
        }
        if let Some(room_type) = overrides.room_type {
            self.room_type.update(room_type, ConfigSource::Cli);
        }
        if let Some(content_type) = overrides.content_type {
            self.content_type.update(content_type, ConfigSource::Cli);
        }
        Ok(())
    }

    pub fn planner(&self) -> PlannerConfig {
        PlannerConfig {
            display_size: self.display_size.value,
            viewing_distance: self.viewing_distance.value,
        }
    }
}

fn positive(key: &str, value: f64) -> Result<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(PlanError::ConfigInvalid {
            key: key.to_string(),
            reason: format!("{} must be a positive number", value),
        })
    }
}

fn parse_positive(key: &str, raw: &str) -> Result<f64> {
    let value = raw.trim().parse::<f64>().map_err(|e| PlanError::ConfigInvalid {
        key: key.to_string(),
        reason: e.to_string(),
    })?;
    positive(key, value)
}

pub fn parse_content_type(s: &str) -> Result<ContentType> {
    let wanted = s.trim().to_lowercase().replace(['_', ' '], "-");
    ContentType::ALL
        .into_iter()
        .find(|content_type| content_type.to_string() == wanted)
        .ok_or_else(|| PlanError::ConfigInvalid {
            key: "content_type".to_string(),
            reason: format!("Unknown content type: {}", s),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn defaults_match_room_planner_placeholders() {
        let config = LayeredConfig::with_defaults();
        assert_eq!(config.planner(), PlannerConfig::default());
        assert_eq!(config.display_size.source, ConfigSource::Default);
        assert_eq!(config.room_type.value, DEFAULT_ROOM_TYPE);
    }

    #[test]
    fn higher_precedence_wins() {
        let mut value = ConfigValue::new(75.0, ConfigSource::Default);
        value.update(65.0, ConfigSource::Cli);
        value.update(85.0, ConfigSource::File);
        assert_eq!(value.value, 65.0);
        assert_eq!(value.source, ConfigSource::Cli);
    }

    #[test]
    fn env_values_are_parsed_and_bad_ones_skipped() {
        let vars: HashMap<&str, &str> = HashMap::from([
            ("AVPLAN_DISPLAY_SIZE", "98"),
            ("AVPLAN_VIEWING_DISTANCE", "-3"),
            ("AVPLAN_CONTENT_TYPE", "Video_Conference"),
        ]);
        let config = LayeredConfig::with_defaults()
            .load_from_vars(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.display_size.value, 98.0);
        assert_eq!(config.display_size.source, ConfigSource::Environment);
        assert_eq!(config.viewing_distance.value, DEFAULT_VIEWING_DISTANCE);
        assert_eq!(config.viewing_distance.source, ConfigSource::Default);
        assert_eq!(config.content_type.value, ContentType::VideoConference);
    }

    #[test]
    fn content_type_names() {
        assert_eq!(parse_content_type("digital signage").unwrap(), ContentType::DigitalSignage);
        assert!(parse_content_type("karaoke").is_err());
    }
}
