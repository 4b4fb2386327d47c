//! Global eventhub configuration.
//!
//! UI preferences only; events and registrations are never persisted.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{HubError, HubResult};

/// Which calendar view to show when none is requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Month,
    List,
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewMode::Month => f.write_str("month"),
            ViewMode::List => f.write_str("list"),
        }
    }
}

impl FromStr for ViewMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "month" => Ok(ViewMode::Month),
            "list" => Ok(ViewMode::List),
            _ => Err(format!("Unknown view '{}'. Expected 'month' or 'list'", s)),
        }
    }
}

/// Global configuration at ~/.config/eventhub/config.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HubConfig {
    /// Calendar view used when --view isn't passed
    #[serde(default)]
    pub default_view: ViewMode,

    /// Organizer name attached to events created with `eventhub new`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organizer: Option<String>,
}

impl HubConfig {
    pub fn config_path() -> HubResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| HubError::Config("Could not determine config directory".into()))?
            .join("eventhub");

        Ok(config_dir.join("config.toml"))
    }

    /// Load the config, creating a commented default file on first run.
    pub fn load() -> HubResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        let config: HubConfig = config::Config::builder()
            .add_source(config::File::from(config_path).required(false))
            .build()
            .map_err(|e| HubError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| HubError::Config(e.to_string()))?;

        Ok(config)
    }

    /// Save the current config to ~/.config/eventhub/config.toml
    pub fn save(&self) -> HubResult<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &std::path::Path) -> HubResult<()> {
        let content = toml::to_string_pretty(self).map_err(|e| HubError::Config(e.to_string()))?;

        std::fs::write(path, content)
            .map_err(|e| HubError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &std::path::Path) -> HubResult<()> {
        let contents = "\
# eventhub configuration

# Calendar view used when --view isn't passed ('month' or 'list'):
# default_view = \"month\"

# Organizer name attached to events created with `eventhub new`:
# organizer = \"Your Name\"
";

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| HubError::Config(format!("Could not create config directory: {e}")))?;
        }

        std::fs::write(path, contents)
            .map_err(|e| HubError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_mode_parses_both_values() {
        assert_eq!("month".parse::<ViewMode>().unwrap(), ViewMode::Month);
        assert_eq!("LIST".parse::<ViewMode>().unwrap(), ViewMode::List);
        assert!("week".parse::<ViewMode>().is_err());
    }

    #[test]
    fn default_view_is_month() {
        assert_eq!(HubConfig::default().default_view, ViewMode::Month);
    }

    #[test]
    fn empty_config_file_deserializes_to_defaults() {
        let config: HubConfig = toml::from_str("").unwrap();
        assert_eq!(config.default_view, ViewMode::Month);
        assert_eq!(config.organizer, None);
    }

    #[test]
    fn save_to_writes_loadable_toml() {
        let config = HubConfig {
            default_view: ViewMode::List,
            organizer: Some("Tech Events Inc.".to_string()),
        };

        let path = std::env::temp_dir().join(format!("eventhub-config-{}.toml", std::process::id()));
        config.save_to(&path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let back: HubConfig = toml::from_str(&text).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(back.default_view, ViewMode::List);
        assert_eq!(back.organizer, config.organizer);
    }

    #[test]
    fn config_roundtrips_through_toml() {
        let config = HubConfig {
            default_view: ViewMode::List,
            organizer: Some("Tech Events Inc.".to_string()),
        };

        let text = toml::to_string_pretty(&config).unwrap();
        let back: HubConfig = toml::from_str(&text).unwrap();
        assert_eq!(back.default_view, ViewMode::List);
        assert_eq!(back.organizer, config.organizer);
    }
}
