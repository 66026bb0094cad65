use provider_catalog::ColorScheme;
use serde::{Deserialize, Serialize};
use std::{env, path::PathBuf};

/// Application configuration loaded from provider-picker.toml
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Quiet period after the last keystroke before the filter recomputes
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
    #[serde(default)]
    pub color_scheme: ColorScheme,
    /// Route emitted when the picker is cancelled/closed
    #[serde(default = "default_cancel_route")]
    pub cancel_route: String,
}

fn default_debounce_ms() -> u64 {
    500
}

fn default_cancel_route() -> String {
    "/integrations".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
            color_scheme: ColorScheme::default(),
            cancel_route: default_cancel_route(),
        }
    }
}

impl Config {
    /// Load config from CWD first, then home directory, or use defaults
    pub fn load() -> Self {
        const CONFIG_FILE: &str = "provider-picker.toml";

        // Try current directory first
        if let Ok(content) = std::fs::read_to_string(CONFIG_FILE)
            && let Ok(config) = toml::from_str(&content)
        {
            log::debug!("Loaded config from {}", CONFIG_FILE);
            return config;
        }

        // Try home directory
        if let Some(home) = env::var_os("HOME") {
            let home_config = PathBuf::from(home).join(format!(".{}", CONFIG_FILE));
            if let Ok(content) = std::fs::read_to_string(&home_config)
                && let Ok(config) = toml::from_str(&content)
            {
                log::debug!("Loaded config from {}", home_config.display());
                return config;
            }
        }

        log::debug!("Using default config");
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.debounce_ms, 500);
        assert_eq!(config.color_scheme, ColorScheme::Dark);
        assert_eq!(config.cancel_route, "/integrations");
    }

    #[test]
    fn test_partial_file_falls_back_per_field() {
        let config: Config = toml::from_str("debounce_ms = 250").unwrap();
        assert_eq!(config.debounce_ms, 250);
        assert_eq!(config.cancel_route, "/integrations");
    }

    #[test]
    fn test_color_scheme_parses_lowercase_names() {
        let config: Config = toml::from_str("color_scheme = \"light\"").unwrap();
        assert_eq!(config.color_scheme, ColorScheme::Light);
    }
}
