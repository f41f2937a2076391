use log::warn;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Application configuration
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct Config {
    pub theme: ThemeConfig,
    pub window: WindowConfig,
    pub contact: ContactConfig,
    pub nav: NavConfig,
}

/// Theme configuration
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct ThemeConfig {
    /// "dark" or "light"
    pub mode: String,
}

/// Window geometry configuration
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
}

/// Contact form relay configuration
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct ContactConfig {
    /// Endpoint receiving the contact payload as JSON. Expected to answer
    /// with a JSON body carrying a `success` boolean.
    pub relay_endpoint: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

/// Navigation configuration
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct NavConfig {
    /// Section id to scroll back to on the next launch. Empty means start
    /// at the top.
    pub last_section: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            theme: ThemeConfig::default(),
            window: WindowConfig::default(),
            contact: ContactConfig::default(),
            nav: NavConfig::default(),
        }
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        ThemeConfig {
            mode: "dark".to_string(),
        }
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        WindowConfig {
            width: 1000.0,
            height: 720.0,
        }
    }
}

impl Default for ContactConfig {
    fn default() -> Self {
        ContactConfig {
            relay_endpoint: "https://relay.adrianmora.dev/api/contact".to_string(),
            timeout_secs: 10,
        }
    }
}

impl Default for NavConfig {
    fn default() -> Self {
        NavConfig {
            last_section: String::new(),
        }
    }
}

impl Config {
    /// Get the path to the config file
    pub fn config_path() -> Option<PathBuf> {
        if let Some(proj_dirs) = directories::ProjectDirs::from("", "", "folio") {
            let config_dir = proj_dirs.config_dir();
            return Some(config_dir.join("config.toml"));
        }
        None
    }

    /// Load configuration from file, or return defaults if file doesn't exist
    pub fn load() -> Self {
        if let Some(path) = Self::config_path() {
            if path.exists() {
                match fs::read_to_string(&path) {
                    Ok(contents) => match toml::from_str::<Config>(&contents) {
                        Ok(config) => return config,
                        Err(e) => {
                            warn!("failed to parse config file: {e}; using defaults");
                        }
                    },
                    Err(e) => {
                        warn!("failed to read config file: {e}; using defaults");
                    }
                }
            }
        }
        Config::default()
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        if let Some(path) = Self::config_path() {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }

            let contents = toml::to_string_pretty(self)?;
            fs::write(&path, contents)?;
            return Ok(());
        }

        Err("Could not determine config directory".into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.theme.mode, "dark");
        assert_eq!(config.window.width, 1000.0);
        assert_eq!(config.contact.timeout_secs, 10);
        assert!(config.nav.last_section.is_empty());
    }

    #[test]
    fn test_config_serialization() {
        let mut config = Config::default();
        config.nav.last_section = "projects".to_string();
        let toml_str = toml::to_string(&config).expect("Failed to serialize");
        let deserialized: Config = toml::from_str(&toml_str).expect("Failed to deserialize");
        assert_eq!(config.theme.mode, deserialized.theme.mode);
        assert_eq!(deserialized.nav.last_section, "projects");
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: Config = toml::from_str("[theme]\nmode = \"light\"\n").unwrap();
        assert_eq!(config.theme.mode, "light");
        assert_eq!(config.contact.timeout_secs, 10);
    }
}
