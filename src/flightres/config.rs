use crate::error::{ReservationError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

const CONFIG_FILENAME: &str = "config.json";

const DEFAULT_CITIES: [&str; 11] = [
    "Havana",
    "Moscow",
    "Beijing",
    "London",
    "Tokyo",
    "Paris",
    "Tehran",
    "Damascus",
    "Sanaa",
    "Tripoli",
    "Jerusalem",
];

/// Which direction the form's date/time recency checks point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TemporalRules {
    /// Rejects dates *after* now and arrivals *after* departure.
    #[default]
    AsWritten,
    /// Rejects dates *before* now and arrivals *before* departure.
    Forward,
}

impl fmt::Display for TemporalRules {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemporalRules::AsWritten => write!(f, "as-written"),
            TemporalRules::Forward => write!(f, "forward"),
        }
    }
}

impl FromStr for TemporalRules {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim() {
            "as-written" => Ok(TemporalRules::AsWritten),
            "forward" => Ok(TemporalRules::Forward),
            other => Err(format!(
                "Invalid temporal-rules value: {} (expected as-written or forward)",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DestinationSeed {
    pub city: String,
    #[serde(default)]
    pub country: Option<String>,
}

/// Configuration for flightres, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppConfig {
    #[serde(default)]
    pub temporal_rules: TemporalRules,

    /// Destinations written to an empty destination table on init
    #[serde(default = "default_destinations")]
    pub destinations: Vec<DestinationSeed>,
}

fn default_destinations() -> Vec<DestinationSeed> {
    DEFAULT_CITIES
        .iter()
        .map(|city| DestinationSeed {
            city: city.to_string(),
            country: None,
        })
        .collect()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            temporal_rules: TemporalRules::default(),
            destinations: default_destinations(),
        }
    }
}

impl AppConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(ReservationError::Io)?;
        let config: AppConfig =
            serde_json::from_str(&content).map_err(ReservationError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(ReservationError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(ReservationError::Serialization)?;
        fs::write(config_path, content).map_err(ReservationError::Io)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "temporal-rules" => Some(self.temporal_rules.to_string()),
            "destinations" => Some(
                self.destinations
                    .iter()
                    .map(|d| match &d.country {
                        Some(country) => format!("{} ({})", d.city, country),
                        None => d.city.clone(),
                    })
                    .collect::<Vec<_>>()
                    .join(", "),
            ),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "temporal-rules" => {
                self.temporal_rules = value.parse()?;
                Ok(())
            }
            "destinations" => Err(
                "destinations is read-only from the command line; edit config.json".to_string(),
            ),
            other => Err(format!("Unknown config key: {}", other)),
        }
    }

    pub fn list_all(&self) -> Vec<(&'static str, String)> {
        ["temporal-rules", "destinations"]
            .into_iter()
            .filter_map(|k| self.get(k).map(|v| (k, v)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.temporal_rules, TemporalRules::AsWritten);
        assert_eq!(config.destinations.len(), 11);
        assert_eq!(config.destinations[4].city, "Tokyo");
    }

    #[test]
    fn test_set_temporal_rules() {
        let mut config = AppConfig::default();
        config.set("temporal-rules", "forward").unwrap();
        assert_eq!(config.temporal_rules, TemporalRules::Forward);
        assert!(config.set("temporal-rules", "sideways").is_err());
        assert!(config.set("colour", "red").is_err());
    }

    #[test]
    fn test_load_missing_config() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load(temp_dir.path().join("absent")).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = tempfile::tempdir().unwrap();

        let mut config = AppConfig::default();
        config.set("temporal-rules", "forward").unwrap();
        config.destinations = vec![DestinationSeed {
            city: "Lisbon".into(),
            country: Some("Portugal".into()),
        }];
        config.save(temp_dir.path()).unwrap();

        let loaded = AppConfig::load(temp_dir.path()).unwrap();
        assert_eq!(loaded, config);
        assert_eq!(loaded.get("destinations").unwrap(), "Lisbon (Portugal)");
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let parsed: AppConfig = serde_json::from_str(r#"{"temporal_rules":"forward"}"#).unwrap();
        assert_eq!(parsed.temporal_rules, TemporalRules::Forward);
        assert_eq!(parsed.destinations, default_destinations());
    }
}
